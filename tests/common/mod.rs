#![allow(dead_code)]

/// NaN equals NaN of the same sign; everything else must match bit for bit,
/// so +0 and -0 are distinct.
pub fn same_f64(a: f64, b: f64) -> bool {
    if a.is_nan() || b.is_nan() {
        a.is_nan() && b.is_nan() && a.is_sign_negative() == b.is_sign_negative()
    } else {
        a.to_bits() == b.to_bits()
    }
}

pub fn same_f32(a: f32, b: f32) -> bool {
    if a.is_nan() || b.is_nan() {
        a.is_nan() && b.is_nan() && a.is_sign_negative() == b.is_sign_negative()
    } else {
        a.to_bits() == b.to_bits()
    }
}

pub fn positive_nan_f64() -> f64 { f64::NAN.copysign(1.0) }
pub fn negative_nan_f64() -> f64 { f64::NAN.copysign(-1.0) }
pub fn positive_nan_f32() -> f32 { f32::NAN.copysign(1.0) }
pub fn negative_nan_f32() -> f32 { f32::NAN.copysign(-1.0) }
