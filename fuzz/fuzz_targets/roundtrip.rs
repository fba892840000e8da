#![no_main]

use libfuzzer_sys::fuzz_target;

use ieee754_bstr::{
    CANONICAL_NAN_FRACTION_BINARY32, CANONICAL_NAN_FRACTION_BINARY64, Fields,
    decode_binary32, decode_binary64, encode_binary32, encode_binary64,
};

fuzz_target!(|data: ([u8; 8], [u8; 4])| {
    let (b64, b32) = data;

    // decode -> encode must reproduce every non-NaN pattern exactly
    let d = decode_binary64(b64);
    let out = encode_binary64(d);
    let fields = Fields::from_binary64_bytes(b64);
    if fields.is_nan() {
        assert!(d.is_nan(), "{} decoded to {}", fields, d);
        assert_eq!(d.is_sign_negative(), fields.sign, "{}", fields);
        let canonical = Fields::binary64(
            fields.sign,
            0x7FF,
            CANONICAL_NAN_FRACTION_BINARY64,
        );
        assert_eq!(out, canonical.to_binary64_bytes());
    } else {
        assert_eq!(b64, out, "binary64 roundtrip mismatch: {}", fields);
    }

    let f = decode_binary32(b32);
    let out = encode_binary32(f);
    let fields = Fields::from_binary32_bytes(b32);
    if fields.is_nan() {
        assert!(f.is_nan(), "{} decoded to {}", fields, f);
        assert_eq!(f.is_sign_negative(), fields.sign, "{}", fields);
        let canonical = Fields::binary32(
            fields.sign,
            0xFF,
            CANONICAL_NAN_FRACTION_BINARY32,
        );
        assert_eq!(out, canonical.to_binary32_bytes());
    } else {
        assert_eq!(b32, out, "binary32 roundtrip mismatch: {}", fields);
    }
});
