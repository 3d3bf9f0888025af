#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Must never panic, and must never allocate past the limit.
    let limits = bmpio::Limits {
        max_memory_bytes: Some(64 * 1024 * 1024),
        ..Default::default()
    };
    let _ = bmpio::LoadRequest::new().with_limits(&limits).decode(data);
    let _ = bmpio::BitmapInfo::from_bytes(data);
});
