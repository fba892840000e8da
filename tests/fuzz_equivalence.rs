//! Seeded decode→encode runs over random bit patterns.

use ieee754_bstr::{
    CANONICAL_NAN_FRACTION_BINARY32, CANONICAL_NAN_FRACTION_BINARY64, Fields,
    decode_binary32, decode_binary64, encode_binary32, encode_binary64,
};
use rand::{Rng, SeedableRng, rngs::StdRng};

fn check_binary64(bytes: [u8; 8]) {
    let decoded = decode_binary64(bytes);
    let encoded = encode_binary64(decoded);
    let input = Fields::from_binary64_bytes(bytes);
    if input.is_nan() {
        assert!(decoded.is_nan(), "{input} did not decode to NaN");
        assert_eq!(decoded.is_sign_negative(), input.sign, "{input}");
        let again = decode_binary64(encoded);
        assert!(again.is_nan() && again.is_sign_negative() == input.sign);
        assert_eq!(
            Fields::from_binary64_bytes(encoded),
            Fields::binary64(input.sign, 0x7FF, CANONICAL_NAN_FRACTION_BINARY64)
        );
    } else {
        assert_eq!(
            encoded,
            bytes,
            "{} != {}",
            hex::encode(bytes),
            hex::encode(encoded)
        );
    }
}

fn check_binary32(bytes: [u8; 4]) {
    let decoded = decode_binary32(bytes);
    let encoded = encode_binary32(decoded);
    let input = Fields::from_binary32_bytes(bytes);
    if input.is_nan() {
        assert!(decoded.is_nan(), "{input} did not decode to NaN");
        assert_eq!(decoded.is_sign_negative(), input.sign, "{input}");
        assert_eq!(
            Fields::from_binary32_bytes(encoded),
            Fields::binary32(input.sign, 0xFF, CANONICAL_NAN_FRACTION_BINARY32)
        );
    } else {
        assert_eq!(
            encoded,
            bytes,
            "{} != {}",
            hex::encode(bytes),
            hex::encode(encoded)
        );
    }
}

#[test]
fn binary64_random_patterns() {
    let mut rng = StdRng::seed_from_u64(0);
    for _ in 0..10_000 {
        check_binary64(rng.random::<u64>().to_be_bytes());
    }
}

#[test]
fn binary32_random_patterns() {
    let mut rng = StdRng::seed_from_u64(0);
    for _ in 0..1_000 {
        check_binary32(rng.random::<u32>().to_be_bytes());
    }
}

#[test]
fn random_nan_patterns() {
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..1_000 {
        let fraction = rng.random_range(1..1u64 << 52);
        let sign = rng.random::<bool>() as u64;
        check_binary64(((sign << 63) | (0x7FF << 52) | fraction).to_be_bytes());

        let fraction = rng.random_range(1..1u32 << 23);
        let sign = rng.random::<bool>() as u32;
        check_binary32(((sign << 31) | (0xFF << 23) | fraction).to_be_bytes());
    }
}

#[test]
fn random_subnormal_patterns() {
    let mut rng = StdRng::seed_from_u64(2);
    for _ in 0..1_000 {
        let sign = rng.random::<bool>() as u64;
        let fraction = rng.random_range(0..1u64 << 52);
        check_binary64(((sign << 63) | fraction).to_be_bytes());

        let sign = rng.random::<bool>() as u32;
        let fraction = rng.random_range(0..1u32 << 23);
        check_binary32(((sign << 31) | fraction).to_be_bytes());
    }
}
