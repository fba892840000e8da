//! Portable IEEE‑754 binary32/binary64 encoding and decoding.
//!
//! Converts native `f32`/`f64` values to and from their canonical big‑endian
//! IEEE‑754 byte representations by arithmetic decomposition (`frexp` /
//! `ldexp`) and explicit bit-field packing, never by reinterpreting the host's
//! in-memory float layout.
//!
//! Both directions are total: every value encodes and every bit pattern
//! decodes. NaN is the one lossy case. Every NaN encodes to the canonical
//! quiet NaN of its format and every NaN pattern decodes to a quiet NaN,
//! keeping only the sign bit. Payload and signaling information is dropped
//! permanently.
//!
//! ```
//! use ieee754_bstr::{decode_binary64, encode_binary32, encode_binary64};
//!
//! assert_eq!(encode_binary64(1.0), [0x3F, 0xF0, 0, 0, 0, 0, 0, 0]);
//! assert_eq!(encode_binary32(1.0), [0x3F, 0x80, 0, 0]);
//! assert_eq!(decode_binary64(encode_binary64(-2.5)), -2.5);
//! ```
//!
//! Encoded values can also travel as tagged CBOR (RFC 8746 typed-array tags
//! 81 and 82) through [`Binary32Bstr`] and [`Binary64Bstr`].

mod binary32;
pub use binary32::*;
mod binary64;
pub use binary64::*;
mod bstr;
pub use bstr::*;
mod fields;
pub use fields::*;
mod format;
pub use format::*;
mod error;
pub use error::*;
