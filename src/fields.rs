use core::{fmt, num::FpCategory};

use crate::{Format, Result};

/// The three unsigned bit-fields of an IEEE‑754 encoding, most significant
/// first: sign, biased exponent, fraction.
///
/// `Fields` is the decomposed view of an encoded value. Packing and
/// unpacking use explicit shifts and masks on an integer of the format's
/// width, so the result never depends on how the host lays out its own
/// floats in memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fields {
    pub format: Format,
    pub sign: bool,
    pub exponent: u16,
    pub fraction: u64,
}

impl Fields {
    // ───────────────────────────── Constructors ─────────────────────────────

    /// Build a binary64 field set. Bits above each field's width are ignored
    /// when packing.
    pub fn binary64(sign: bool, exponent: u16, fraction: u64) -> Self {
        Self { format: Format::Binary64, sign, exponent, fraction }
    }

    /// Build a binary32 field set. Bits above each field's width are ignored
    /// when packing.
    pub fn binary32(sign: bool, exponent: u16, fraction: u64) -> Self {
        Self { format: Format::Binary32, sign, exponent, fraction }
    }

    /// Split a right-aligned bit pattern of the given format into fields.
    pub fn from_bits(format: Format, bits: u64) -> Self {
        let fraction_bits = format.fraction_bits();
        let sign_shift = format.exponent_bits() + fraction_bits;
        Self {
            format,
            sign: (bits >> sign_shift) & 1 == 1,
            exponent: ((bits >> fraction_bits) as u16) & format.exponent_max(),
            fraction: bits & format.fraction_mask(),
        }
    }

    pub fn from_binary64_bytes(bytes: [u8; 8]) -> Self {
        Self::from_bits(Format::Binary64, u64::from_be_bytes(bytes))
    }

    pub fn from_binary32_bytes(bytes: [u8; 4]) -> Self {
        Self::from_bits(Format::Binary32, u32::from_be_bytes(bytes) as u64)
    }

    /// Unpack a big‑endian byte slice, inferring the format from its length
    /// (4 or 8 bytes).
    pub fn from_be_slice(bytes: impl AsRef<[u8]>) -> Result<Self> {
        let b = bytes.as_ref();
        let format = Format::from_len(b.len())?;
        let bits = b.iter().fold(0u64, |acc, &byte| (acc << 8) | byte as u64);
        Ok(Self::from_bits(format, bits))
    }

    // ───────────────────────────── Packing ──────────────────────────────────

    /// Pack the fields into a right-aligned bit pattern of this format's
    /// width. Each field is masked to its width first, which drops the
    /// implicit leading bit a normal significand may still carry.
    pub fn to_bits(&self) -> u64 {
        let fraction_bits = self.format.fraction_bits();
        let sign_shift = self.format.exponent_bits() + fraction_bits;
        let exponent = self.exponent & self.format.exponent_max();
        ((self.sign as u64) << sign_shift)
            | ((exponent as u64) << fraction_bits)
            | (self.fraction & self.format.fraction_mask())
    }

    /// Pack the fields as a binary64, regardless of `format`.
    pub fn to_binary64_bytes(&self) -> [u8; 8] {
        let fields = Self { format: Format::Binary64, ..*self };
        fields.to_bits().to_be_bytes()
    }

    /// Pack the fields as a binary32, regardless of `format`.
    pub fn to_binary32_bytes(&self) -> [u8; 4] {
        let fields = Self { format: Format::Binary32, ..*self };
        (fields.to_bits() as u32).to_be_bytes()
    }

    /// Pack the fields into big‑endian bytes (4 or 8, per the format).
    pub fn to_be_bytes(&self) -> Vec<u8> {
        let bytes = self.to_bits().to_be_bytes();
        bytes[bytes.len() - self.format.len()..].to_vec()
    }

    // ───────────────────────────── Accessors ────────────────────────────────

    /// Classify the encoding by its exponent and fraction fields.
    pub fn classify(&self) -> FpCategory {
        let exponent_max = self.format.exponent_max();
        let exponent = self.exponent & exponent_max;
        let fraction = self.fraction & self.format.fraction_mask();
        match (exponent, fraction) {
            (0, 0) => FpCategory::Zero,
            (0, _) => FpCategory::Subnormal,
            (e, 0) if e == exponent_max => FpCategory::Infinite,
            (e, _) if e == exponent_max => FpCategory::Nan,
            _ => FpCategory::Normal,
        }
    }

    pub fn is_nan(&self) -> bool { self.classify() == FpCategory::Nan }
}

/// Lower-case name of a classification, as used in `Fields` rendering.
pub fn category_name(category: FpCategory) -> &'static str {
    match category {
        FpCategory::Zero => "zero",
        FpCategory::Subnormal => "subnormal",
        FpCategory::Normal => "normal",
        FpCategory::Infinite => "infinite",
        FpCategory::Nan => "nan",
    }
}

impl fmt::Display for Fields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} exp=0x{:x} frac=0x{:x} ({})",
            self.format,
            if self.sign { "-" } else { "+" },
            self.exponent & self.format.exponent_max(),
            self.fraction & self.format.fraction_mask(),
            category_name(self.classify()),
        )
    }
}
