//! binary64 (double precision): 1 sign bit, 11 exponent bits, 52 fraction
//! bits, exponent bias 1023, big‑endian on the wire.

use core::num::FpCategory;

use crate::Fields;

/// Significand precision in bits, counting the implicit leading 1.
const MANTISSA_DIGITS: i32 = 53;
const EXPONENT_MAX: u16 = 0x7FF;
const EXPONENT_BIAS: i32 = 1023;
/// Bias for exponents reported by `frexp`, whose mantissa lies in [0.5, 1).
const FREXP_BIAS: i32 = EXPONENT_BIAS - 1;
const IMPLICIT_BIT: u64 = 1 << (MANTISSA_DIGITS - 1);
/// 2^52
const FRACTION_SCALE: f64 = 4_503_599_627_370_496.0;
/// Quiet bit only, no payload.
pub const CANONICAL_NAN_FRACTION_BINARY64: u64 = 1 << (MANTISSA_DIGITS - 2);

/// Encode `value` as an IEEE‑754 binary64 in big‑endian byte order.
///
/// The value is decomposed arithmetically (`frexp`) rather than by
/// reinterpreting its in-memory representation. Every NaN is written as the
/// canonical quiet NaN `7ff8000000000000` with the input's sign bit; the
/// payload is not carried.
pub fn encode_binary64(value: f64) -> [u8; 8] {
    let sign = value.is_sign_negative();
    let magnitude = libm::fabs(value);
    let (exponent, fraction) = match value.classify() {
        FpCategory::Infinite => (EXPONENT_MAX, 0),
        FpCategory::Nan => (EXPONENT_MAX, CANONICAL_NAN_FRACTION_BINARY64),
        FpCategory::Zero => (0, 0),
        FpCategory::Subnormal => {
            let (mantissa, e) = libm::frexp(magnitude);
            let shift = e + FREXP_BIAS + MANTISSA_DIGITS - 1;
            let scaled = libm::ldexp(mantissa, shift);
            (0, scaled as u64)
        }
        FpCategory::Normal => {
            let (mantissa, e) = libm::frexp(magnitude);
            // Keeps the implicit bit; packing masks it off.
            let scaled = libm::ldexp(mantissa, MANTISSA_DIGITS);
            ((e + FREXP_BIAS) as u16, scaled as u64)
        }
    };
    Fields::binary64(sign, exponent, fraction).to_binary64_bytes()
}

/// Decode a big‑endian IEEE‑754 binary64.
///
/// Total over all 2^64 bit patterns. NaN patterns decode to a quiet NaN
/// carrying only the sign; payload and signaling bits are discarded.
pub fn decode_binary64(bytes: [u8; 8]) -> f64 {
    let fields = Fields::from_binary64_bytes(bytes);
    let sign = if fields.sign { -1.0 } else { 1.0 };
    let magnitude = match fields.classify() {
        FpCategory::Zero => 0.0,
        FpCategory::Subnormal => libm::ldexp(
            fields.fraction as f64,
            1 - EXPONENT_BIAS - (MANTISSA_DIGITS - 1),
        ),
        FpCategory::Infinite => f64::INFINITY,
        FpCategory::Nan => return libm::copysign(f64::NAN, sign),
        FpCategory::Normal => {
            let significand =
                (fields.fraction | IMPLICIT_BIT) as f64 / FRACTION_SCALE;
            libm::ldexp(significand, fields.exponent as i32 - EXPONENT_BIAS)
        }
    };
    magnitude * sign
}
