//! binary32 (single precision): 1 sign bit, 8 exponent bits, 23 fraction
//! bits, exponent bias 127, big‑endian on the wire.

use core::num::FpCategory;

use crate::Fields;

const MANTISSA_DIGITS: i32 = 24;
const EXPONENT_MAX: u16 = 0xFF;
const EXPONENT_BIAS: i32 = 127;
const FREXP_BIAS: i32 = EXPONENT_BIAS - 1;
const IMPLICIT_BIT: u64 = 1 << (MANTISSA_DIGITS - 1);
/// 2^23
const FRACTION_SCALE: f32 = 8_388_608.0;
/// Quiet bit only, no payload.
pub const CANONICAL_NAN_FRACTION_BINARY32: u64 = 1 << (MANTISSA_DIGITS - 2);

/// Encode `value` as an IEEE‑754 binary32 in big‑endian byte order.
///
/// Every NaN is written as `7fc00000` with the input's sign bit. A normal
/// value whose computed exponent lands outside the finite range is written
/// as infinity. No native `f32` reaches that branch (`f32::MAX` encodes with
/// exponent 254); it only guards the exponent field against overflow.
pub fn encode_binary32(value: f32) -> [u8; 4] {
    let sign = value.is_sign_negative();
    let magnitude = libm::fabsf(value);
    let (exponent, fraction) = match value.classify() {
        FpCategory::Infinite => (EXPONENT_MAX, 0),
        FpCategory::Nan => (EXPONENT_MAX, CANONICAL_NAN_FRACTION_BINARY32),
        FpCategory::Zero => (0, 0),
        FpCategory::Subnormal => {
            let (mantissa, e) = libm::frexpf(magnitude);
            let shift = e + FREXP_BIAS + MANTISSA_DIGITS - 1;
            let scaled = libm::ldexpf(mantissa, shift);
            (0, scaled as u64)
        }
        FpCategory::Normal => {
            let (mantissa, e) = libm::frexpf(magnitude);
            let biased = e + FREXP_BIAS;
            // Unreachable for native input.
            if biased >= EXPONENT_MAX as i32 {
                (EXPONENT_MAX, 0)
            } else {
                (biased as u16, libm::ldexpf(mantissa, MANTISSA_DIGITS) as u64)
            }
        }
    };
    Fields::binary32(sign, exponent, fraction).to_binary32_bytes()
}

/// Decode a big‑endian IEEE‑754 binary32.
///
/// Total over all 2^32 bit patterns; NaN patterns lose their payload.
pub fn decode_binary32(bytes: [u8; 4]) -> f32 {
    let fields = Fields::from_binary32_bytes(bytes);
    let sign = if fields.sign { -1.0 } else { 1.0 };
    let magnitude = match fields.classify() {
        FpCategory::Zero => 0.0,
        FpCategory::Subnormal => libm::ldexpf(
            fields.fraction as f32,
            1 - EXPONENT_BIAS - (MANTISSA_DIGITS - 1),
        ),
        FpCategory::Infinite => f32::INFINITY,
        FpCategory::Nan => return libm::copysignf(f32::NAN, sign),
        FpCategory::Normal => {
            let significand =
                (fields.fraction | IMPLICIT_BIT) as f32 / FRACTION_SCALE;
            libm::ldexpf(significand, fields.exponent as i32 - EXPONENT_BIAS)
        }
    };
    magnitude * sign
}
