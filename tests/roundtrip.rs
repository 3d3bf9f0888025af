use std::io::{self, Cursor, Write};
use std::path::PathBuf;

use bmpio::*;

fn noise_pattern(len: usize, seed: u32) -> Vec<u8> {
    let mut state = seed;
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            state as u8
        })
        .collect()
}

fn noisy_bitmap(width: u16, height: u16, depth: BitDepth) -> Bitmap {
    Bitmap::from_parts(
        width,
        height,
        depth,
        noise_pattern(color_table_size(depth), 0xC0FF_EE11),
        noise_pattern(pixel_buffer_size(width, height, depth), 0xDEAD_BEEF),
    )
    .unwrap()
}

/// Accepts every write but fails on flush, like a buffered sink whose
/// deferred write-back hits a full disk.
struct FailingFlush(Vec<u8>);

impl Write for FailingFlush {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::Error::other("deferred write failed"))
    }
}

/// Takes `budget` bytes, then every write fails.
struct FailingWrite {
    budget: usize,
}

impl Write for FailingWrite {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.budget == 0 {
            return Err(io::Error::other("device full"));
        }
        let n = buf.len().min(self.budget);
        self.budget -= n;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("bmpio-{}-{name}.bmp", std::process::id()))
}

#[test]
fn memory_roundtrip_all_depths() {
    for depth in [BitDepth::One, BitDepth::Four, BitDepth::Eight, BitDepth::TwentyFour] {
        for (w, h) in [(1, 1), (2, 2), (3, 5), (33, 7), (64, 3)] {
            let bitmap = noisy_bitmap(w, h, depth);
            let encoded = encode_bmp(&bitmap).unwrap();
            let decoded = decode_bmp(&encoded).unwrap();
            assert_eq!(decoded, bitmap, "{w}x{h} {depth:?}");
        }
    }
}

#[test]
fn stream_roundtrip() {
    let bitmap = noisy_bitmap(17, 9, BitDepth::Four);
    let mut out = Vec::new();
    write_bitmap(&mut out, &bitmap).unwrap();
    assert_eq!(out, encode_bmp(&bitmap).unwrap());

    let decoded = read_bitmap(Cursor::new(&out)).unwrap();
    assert_eq!(decoded, bitmap);
}

#[test]
fn write_reports_flush_failure() {
    let bitmap = noisy_bitmap(4, 4, BitDepth::One);
    let mut sink = FailingFlush(Vec::new());
    let result = write_bitmap(&mut sink, &bitmap);
    assert!(matches!(result, Err(BitmapError::Io(_))), "{result:?}");
    // Everything reached the writer; only the flush failed.
    assert_eq!(sink.0, encode_bmp(&bitmap).unwrap());
}

#[test]
fn write_reports_write_failure() {
    let bitmap = noisy_bitmap(8, 3, BitDepth::Eight);
    // Fails in the headers, the color table and the pixel data in turn.
    for budget in [0, 10, 26 + 100, 26 + 768 + 5] {
        let result = write_bitmap(FailingWrite { budget }, &bitmap);
        match result {
            Err(BitmapError::Io(err)) => assert_eq!(err.to_string(), "device full"),
            other => panic!("budget {budget}: expected Io, got {other:?}"),
        }
    }
}

#[test]
fn file_roundtrip() {
    let path = temp_path("file_roundtrip");
    let bitmap = noisy_bitmap(13, 11, BitDepth::Eight);
    save(&path, &bitmap).unwrap();

    let info = probe(&path).unwrap();
    assert_eq!(info.header, InfoHeaderKind::Core);
    assert_eq!((info.width, info.height), (13, 11));
    assert_eq!(info.bit_depth, BitDepth::Eight);
    assert_eq!(info.data_offset, 14 + 12 + 768);

    let loaded = load(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(loaded, bitmap);
}

#[test]
fn save_writes_core_header() {
    // 2x2 at 1bpp: 6 byte table, two 4-byte rows.
    let table = vec![0, 0, 0, 255, 255, 255];
    let pixels = vec![0x80, 0, 0, 0, 0x40, 0, 0, 0];
    let bitmap = Bitmap::from_parts(2, 2, BitDepth::One, table.clone(), pixels.clone()).unwrap();
    let encoded = encode_bmp(&bitmap).unwrap();

    assert_eq!(encoded.len(), 40);
    assert_eq!(&encoded[0..2], b"BM");
    assert_eq!(u32::from_le_bytes(encoded[2..6].try_into().unwrap()), 40);
    assert_eq!(&encoded[6..10], &[0, 0, 0, 0]);
    assert_eq!(u32::from_le_bytes(encoded[10..14].try_into().unwrap()), 32);
    assert_eq!(u32::from_le_bytes(encoded[14..18].try_into().unwrap()), 12);
    assert_eq!(u16::from_le_bytes([encoded[18], encoded[19]]), 2); // width
    assert_eq!(u16::from_le_bytes([encoded[20], encoded[21]]), 2); // height
    assert_eq!(u16::from_le_bytes([encoded[22], encoded[23]]), 1); // planes
    assert_eq!(u16::from_le_bytes([encoded[24], encoded[25]]), 1); // bit count
    assert_eq!(&encoded[26..32], &table[..]);
    assert_eq!(&encoded[32..40], &pixels[..]);
}

#[test]
fn display_sized_monochrome() {
    let bitmap = Bitmap::new(800, 480, BitDepth::One);
    assert_eq!(bitmap.stride(), 100);
    assert_eq!(bitmap.pixels().len(), 48_000);

    let encoded = encode_bmp(&bitmap).unwrap();
    assert_eq!(encoded.len(), 48_032);
    assert_eq!(u32::from_le_bytes(encoded[2..6].try_into().unwrap()), 48_032);
}

#[test]
fn empty_bitmap_roundtrips() {
    let bitmap = Bitmap::new(0, 0, BitDepth::TwentyFour);
    let encoded = encode_bmp(&bitmap).unwrap();
    assert_eq!(encoded.len(), 26);
    assert_eq!(decode_bmp(&encoded).unwrap(), bitmap);
}

#[test]
fn extreme_geometry_against_u32_file_size() {
    // 65535x65535 at 24bpp needs ~12.9 GB of pixel data, past the u32
    // file size field; saving such a bitmap fails with BitmapTooLarge.
    let pixels = 196_608u64 * 65_535;
    assert_eq!(
        checked_pixel_buffer_size(u16::MAX, u16::MAX, BitDepth::TwentyFour),
        usize::try_from(pixels).ok()
    );
    assert!(14 + 12 + pixels > u64::from(u32::MAX));

    // 65535x65535 at 1bpp: 8192 bytes per row, ~537 MB total, fits.
    let pixels = pixel_buffer_size(u16::MAX, u16::MAX, BitDepth::One) as u64;
    assert!(14 + 12 + 6 + pixels <= u64::from(u32::MAX));
}
