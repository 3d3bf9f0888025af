//! BMP writer: always emits a 12-byte `BITMAPCOREHEADER`.
//!
//! Whatever header variant a bitmap was loaded from, only its geometry,
//! color table and pixels are written back. V4/V5 metadata (masks, gamma,
//! color space, ICC profile) is not carried by [`Bitmap`] and is dropped.

use std::io::Write;

use log::debug;

use super::header::{CORE_HEADER_SIZE, FILE_HEADER_SIZE};
use crate::bitmap::Bitmap;
use crate::error::BitmapError;

/// Sizes of an encoded file, validated against the on-disk field widths.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct EncodedLayout {
    pub file_size: u32,
    pub data_offset: u32,
}

/// Check that `bitmap` fits the format and compute its file layout.
pub(crate) fn plan(bitmap: &Bitmap) -> Result<EncodedLayout, BitmapError> {
    plan_sizes(
        u64::from(bitmap.width()),
        u64::from(bitmap.height()),
        bitmap.color_table().len(),
        bitmap.pixels().len(),
    )
}

fn plan_sizes(
    width: u64,
    height: u64,
    table_len: usize,
    pixel_len: usize,
) -> Result<EncodedLayout, BitmapError> {
    // Core header fields are u16.
    if width > u64::from(u16::MAX) || height > u64::from(u16::MAX) {
        return Err(BitmapError::DimensionsTooLarge { width, height });
    }

    let data_offset = (FILE_HEADER_SIZE + CORE_HEADER_SIZE) as u64 + table_len as u64;
    let file_size = data_offset + pixel_len as u64;
    let file_size = u32::try_from(file_size).map_err(|_| BitmapError::BitmapTooLarge(file_size))?;

    Ok(EncodedLayout {
        file_size,
        // data_offset <= file_size, so this cannot fail once file_size fits.
        data_offset: data_offset as u32,
    })
}

fn write_headers(out: &mut Vec<u8>, bitmap: &Bitmap, layout: EncodedLayout) {
    // File header (14 bytes)
    out.extend_from_slice(b"BM");
    out.extend_from_slice(&layout.file_size.to_le_bytes());
    out.extend_from_slice(&[0u8; 4]); // reserved
    out.extend_from_slice(&layout.data_offset.to_le_bytes());

    // DIB header (BITMAPCOREHEADER, 12 bytes)
    out.extend_from_slice(&(CORE_HEADER_SIZE as u32).to_le_bytes());
    out.extend_from_slice(&bitmap.width().to_le_bytes());
    out.extend_from_slice(&bitmap.height().to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes()); // planes
    out.extend_from_slice(&bitmap.bits_per_pixel().to_le_bytes());
}

/// Encode `bitmap` into a complete in-memory BMP file.
pub(crate) fn encode_bmp(bitmap: &Bitmap) -> Result<Vec<u8>, BitmapError> {
    let layout = plan(bitmap)?;
    let mut out = Vec::with_capacity(layout.file_size as usize);
    write_headers(&mut out, bitmap, layout);
    out.extend_from_slice(bitmap.color_table());
    out.extend_from_slice(bitmap.pixels());
    Ok(out)
}

/// Stream `bitmap` to `writer` and flush it.
pub(crate) fn write_bitmap<W: Write>(writer: &mut W, bitmap: &Bitmap) -> Result<(), BitmapError> {
    let layout = plan(bitmap)?;
    let mut headers = Vec::with_capacity(FILE_HEADER_SIZE + CORE_HEADER_SIZE);
    write_headers(&mut headers, bitmap, layout);

    writer.write_all(&headers)?;
    writer.write_all(bitmap.color_table())?;
    writer.write_all(bitmap.pixels())?;
    writer.flush()?;

    debug!(
        "wrote {}x{} {}bpp BMP, {} bytes",
        bitmap.width(),
        bitmap.height(),
        bitmap.bits_per_pixel(),
        layout.file_size
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_of_small_monochrome() {
        let layout = plan_sizes(2, 2, 6, 8).unwrap();
        assert_eq!(layout, EncodedLayout { file_size: 40, data_offset: 32 });

        let layout = plan_sizes(800, 480, 6, 48_000).unwrap();
        assert_eq!(layout.file_size, 48_032);
    }

    #[test]
    fn rejects_wide_dimensions() {
        assert!(matches!(
            plan_sizes(65_536, 1, 6, 0),
            Err(BitmapError::DimensionsTooLarge { width: 65_536, height: 1 })
        ));
        assert!(matches!(
            plan_sizes(1, 100_000, 6, 0),
            Err(BitmapError::DimensionsTooLarge { .. })
        ));
    }

    #[test]
    fn rejects_files_past_u32() {
        // Largest 24bpp bitmap: 196608-byte rows, 65535 of them.
        let pixels = 196_608usize.saturating_mul(65_535);
        assert!(matches!(
            plan_sizes(65_535, 65_535, 0, pixels),
            Err(BitmapError::BitmapTooLarge(n)) if n == 26 + pixels as u64
        ));

        let max_pixels = u32::MAX as usize - 26;
        assert_eq!(plan_sizes(1, 1, 0, max_pixels).unwrap().file_size, u32::MAX);
        assert!(plan_sizes(1, 1, 1, max_pixels).is_err());
    }
}
