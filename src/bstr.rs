use core::fmt;
use dcbor::prelude::*;
use crate::{
    Error, Fields, Format, Result, decode_binary32, decode_binary64,
    encode_binary32, encode_binary64,
};

/// RFC 8746 typed array tag: IEEE‑754 binary32, big endian.
pub const TAG_FLOAT32_BE: u64 = 81;
/// RFC 8746 typed array tag: IEEE‑754 binary64, big endian.
pub const TAG_FLOAT64_BE: u64 = 82;

/// The portable binary64 encoding of a value, transported in CBOR as a
/// single-element typed array (tag 82 over an 8-byte byte string).
///
/// Any bit pattern is accepted and kept verbatim; only converting to a native
/// `f64` passes through the decoder, where NaN payloads are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Binary64Bstr([u8; 8]);

/// The portable binary32 encoding of a value, transported in CBOR as a
/// single-element typed array (tag 81 over a 4-byte byte string).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Binary32Bstr([u8; 4]);

impl Binary64Bstr {
    // ───────────────────────────── Constructors ─────────────────────────────

    /// Construct from exactly 8 big‑endian bytes.
    pub fn from_be_bytes(bytes: impl AsRef<[u8]>) -> Result<Self> {
        let b = bytes.as_ref();
        let array = <[u8; 8]>::try_from(b).map_err(|_| Error::LengthMismatch {
            format: Format::Binary64,
            len: b.len(),
        })?;
        Ok(Self(array))
    }

    /// Construct from 16 hex digits, e.g. `"3ff0000000000000"`.
    pub fn from_hex(digits: impl AsRef<str>) -> Result<Self> {
        Self::from_be_bytes(hex::decode(digits.as_ref())?)
    }

    // ───────────────────────────── Accessors ────────────────────────────────

    pub fn as_bytes(&self) -> &[u8; 8] { &self.0 }

    pub fn to_hex(&self) -> String { hex::encode(self.0) }

    pub fn fields(&self) -> Fields { Fields::from_binary64_bytes(self.0) }

    pub fn is_nan(&self) -> bool { self.fields().is_nan() }
}

impl Binary32Bstr {
    // ───────────────────────────── Constructors ─────────────────────────────

    /// Construct from exactly 4 big‑endian bytes.
    pub fn from_be_bytes(bytes: impl AsRef<[u8]>) -> Result<Self> {
        let b = bytes.as_ref();
        let array = <[u8; 4]>::try_from(b).map_err(|_| Error::LengthMismatch {
            format: Format::Binary32,
            len: b.len(),
        })?;
        Ok(Self(array))
    }

    /// Construct from 8 hex digits, e.g. `"3f800000"`.
    pub fn from_hex(digits: impl AsRef<str>) -> Result<Self> {
        Self::from_be_bytes(hex::decode(digits.as_ref())?)
    }

    // ───────────────────────────── Accessors ────────────────────────────────

    pub fn as_bytes(&self) -> &[u8; 4] { &self.0 }

    pub fn to_hex(&self) -> String { hex::encode(self.0) }

    pub fn fields(&self) -> Fields { Fields::from_binary32_bytes(self.0) }

    pub fn is_nan(&self) -> bool { self.fields().is_nan() }
}

// ─────────────────────────── Native Conversions ─────────────────────────────

impl From<f64> for Binary64Bstr {
    fn from(value: f64) -> Self { Self(encode_binary64(value)) }
}

impl From<Binary64Bstr> for f64 {
    fn from(value: Binary64Bstr) -> Self { decode_binary64(value.0) }
}

impl From<f32> for Binary32Bstr {
    fn from(value: f32) -> Self { Self(encode_binary32(value)) }
}

impl From<Binary32Bstr> for f32 {
    fn from(value: Binary32Bstr) -> Self { decode_binary32(value.0) }
}

// ───────────────────────── CBOR Tagged Implementation ───────────────────────

impl CBORTagged for Binary64Bstr {
    fn cbor_tags() -> Vec<Tag> { tags_for_values(&[TAG_FLOAT64_BE]) }
}

impl CBORTaggedEncodable for Binary64Bstr {
    fn untagged_cbor(&self) -> CBOR {
        CBOR::from(ByteString::from(self.0.as_slice()))
    }
}

impl CBORTaggedDecodable for Binary64Bstr {
    fn from_untagged_cbor(cbor: CBOR) -> dcbor::Result<Self> {
        let bs: ByteString =
            cbor.try_into().map_err(|_| dcbor::Error::WrongType)?;
        Ok(Binary64Bstr::from_be_bytes(bs.data())?)
    }
}

impl From<Binary64Bstr> for CBOR {
    fn from(value: Binary64Bstr) -> Self { value.tagged_cbor() }
}

impl TryFrom<CBOR> for Binary64Bstr {
    type Error = dcbor::Error;
    fn try_from(cbor: CBOR) -> dcbor::Result<Self> {
        Self::from_tagged_cbor(cbor)
    }
}

impl CBORTagged for Binary32Bstr {
    fn cbor_tags() -> Vec<Tag> { tags_for_values(&[TAG_FLOAT32_BE]) }
}

impl CBORTaggedEncodable for Binary32Bstr {
    fn untagged_cbor(&self) -> CBOR {
        CBOR::from(ByteString::from(self.0.as_slice()))
    }
}

impl CBORTaggedDecodable for Binary32Bstr {
    fn from_untagged_cbor(cbor: CBOR) -> dcbor::Result<Self> {
        let bs: ByteString =
            cbor.try_into().map_err(|_| dcbor::Error::WrongType)?;
        Ok(Binary32Bstr::from_be_bytes(bs.data())?)
    }
}

impl From<Binary32Bstr> for CBOR {
    fn from(value: Binary32Bstr) -> Self { value.tagged_cbor() }
}

impl TryFrom<CBOR> for Binary32Bstr {
    type Error = dcbor::Error;
    fn try_from(cbor: CBOR) -> dcbor::Result<Self> {
        Self::from_tagged_cbor(cbor)
    }
}

// ───────────────────────────────── Display ──────────────────────────────────

impl fmt::Display for Binary64Bstr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", Format::Binary64, self.to_hex())
    }
}

impl fmt::Display for Binary32Bstr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", Format::Binary32, self.to_hex())
    }
}
