#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let limits = bmpio::Limits {
        max_memory_bytes: Some(64 * 1024 * 1024),
        ..Default::default()
    };
    // If we can decode it, re-encoding and decoding again must give the same bitmap
    let Ok(decoded) = bmpio::LoadRequest::new().with_limits(&limits).decode(data) else {
        return;
    };

    let reencoded = bmpio::encode_bmp(&decoded).expect("decoded bitmap must re-encode");
    let Ok(decoded2) = bmpio::decode_bmp(&reencoded) else {
        panic!("re-encoded data failed to decode");
    };

    assert_eq!(decoded.width(), decoded2.width());
    assert_eq!(decoded.height(), decoded2.height());
    assert_eq!(decoded.bit_depth(), decoded2.bit_depth());
    assert_eq!(decoded.color_table(), decoded2.color_table(), "color table mismatch");
    assert_eq!(decoded.pixels(), decoded2.pixels(), "roundtrip pixel mismatch");
});
