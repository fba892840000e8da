use core::fmt;

use crate::{Error, Result};

/// IEEE‑754 interchange format carried by an encoded byte sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// 4-octet IEEE‑754 binary32 (aka single, f32)
    Binary32,
    /// 8-octet IEEE‑754 binary64 (aka double, f64)
    Binary64,
}

#[allow(clippy::len_without_is_empty)]
impl Format {
    pub fn from_len(len: usize) -> Result<Self> {
        match len {
            4 => Ok(Self::Binary32),
            8 => Ok(Self::Binary64),
            _ => Err(Error::InvalidLength(len)),
        }
    }

    pub fn len(self) -> usize {
        match self {
            Self::Binary32 => 4,
            Self::Binary64 => 8,
        }
    }

    /// Width of the biased exponent field in bits.
    pub fn exponent_bits(self) -> u32 {
        match self {
            Self::Binary32 => 8,
            Self::Binary64 => 11,
        }
    }

    /// Width of the stored fraction field in bits (excludes the implicit 1).
    pub fn fraction_bits(self) -> u32 {
        match self {
            Self::Binary32 => 23,
            Self::Binary64 => 52,
        }
    }

    pub fn exponent_bias(self) -> i32 {
        match self {
            Self::Binary32 => 127,
            Self::Binary64 => 1023,
        }
    }

    /// The all-ones exponent code reserved for infinities and NaNs.
    pub fn exponent_max(self) -> u16 {
        ((1u32 << self.exponent_bits()) - 1) as u16
    }

    pub(crate) fn fraction_mask(self) -> u64 {
        (1u64 << self.fraction_bits()) - 1
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Binary32 => write!(f, "binary32"),
            Self::Binary64 => write!(f, "binary64"),
        }
    }
}
