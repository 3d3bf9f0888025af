#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn bmp(
    header_size: u32,
    width: i32,
    height: i32,
    bpp: u16,
    table: usize,
    pixels: usize,
) -> Vec<u8> {
    let data_offset = 14 + header_size as usize + table;
    let mut out = vec![0u8; data_offset + pixels];
    out[0] = b'B';
    out[1] = b'M';
    out[2..6].copy_from_slice(&(out.len() as u32).to_le_bytes()); // file size
    out[10..14].copy_from_slice(&(data_offset as u32).to_le_bytes()); // data offset
    out[14..18].copy_from_slice(&header_size.to_le_bytes()); // DIB header size
    if header_size == 12 {
        out[18..20].copy_from_slice(&(width as u16).to_le_bytes());
        out[20..22].copy_from_slice(&(height as u16).to_le_bytes());
        out[22..24].copy_from_slice(&1u16.to_le_bytes()); // planes
        out[24..26].copy_from_slice(&bpp.to_le_bytes());
    } else {
        out[18..22].copy_from_slice(&width.to_le_bytes());
        out[22..26].copy_from_slice(&height.to_le_bytes());
        out[26..28].copy_from_slice(&1u16.to_le_bytes()); // planes
        out[28..30].copy_from_slice(&bpp.to_le_bytes());
    }
    out
}

fn main() {
    use std::fs;
    let dir = "fuzz/corpus/fuzz_decode";
    fs::create_dir_all(dir).unwrap();

    // One seed per header variant; 2x2 1bpp = 6 byte table, 8 byte pixels
    fs::write(format!("{dir}/core_2x2_1bpp.bmp"), bmp(12, 2, 2, 1, 6, 8)).unwrap();
    fs::write(format!("{dir}/info_2x2_1bpp.bmp"), bmp(40, 2, 2, 1, 6, 8)).unwrap();
    fs::write(format!("{dir}/v4_3x1_8bpp.bmp"), bmp(108, 3, 1, 8, 768, 4)).unwrap();
    fs::write(format!("{dir}/v5_1x1_24bpp.bmp"), bmp(124, 1, 1, 24, 0, 4)).unwrap();
    fs::write(format!("{dir}/info_5x2_4bpp.bmp"), bmp(40, 5, 2, 4, 48, 8)).unwrap();

    // Truncated/malformed seeds for edge coverage
    fs::write(format!("{dir}/empty.bin"), b"").unwrap();
    fs::write(format!("{dir}/bm_short.bin"), b"BM\x00\x00").unwrap();
    fs::write(format!("{dir}/negative_height.bmp"), bmp(40, 2, -2, 1, 6, 8)).unwrap();

    println!("Generated seed corpus in {dir}/");
}
