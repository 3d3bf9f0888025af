//! # bmpio
//!
//! Reader and writer for uncompressed Windows bitmaps (BMP).
//!
//! ## Supported Files
//!
//! - Info headers: `BITMAPCOREHEADER` (12 bytes), `BITMAPINFOHEADER` (40),
//!   `BITMAPV4HEADER` (108) and `BITMAPV5HEADER` (124)
//! - 1, 4 and 8 bits per pixel with a color table, 24 bits per pixel without
//! - Uncompressed (`BI_RGB`) pixel data only
//!
//! Pixels are kept exactly as stored on disk: bottom row first, each row
//! padded to 4 bytes. The color table is read as `3 * 2^bpp` opaque bytes.
//!
//! Saving always writes the minimal `BITMAPCOREHEADER`; geometry, color
//! table and pixels round-trip, any V4/V5 header metadata does not.
//!
//! ## Non-Goals
//!
//! - RLE / bitfield compression
//! - Palette interpretation, color management
//! - Scaling or bit depth conversion
//!
//! ## Usage
//!
//! ```no_run
//! use bmpio::{BitDepth, Bitmap};
//!
//! let bitmap = bmpio::load("weather/sunny.bmp")?;
//! println!("{}x{} {}bpp", bitmap.width(), bitmap.height(), bitmap.bits_per_pixel());
//!
//! let mut blank = Bitmap::new(800, 480, BitDepth::One);
//! blank.color_table_mut()[3..6].fill(0xFF); // index 1 = white
//! bmpio::save("blank.bmp", &blank)?;
//! # Ok::<(), bmpio::BitmapError>(())
//! ```

#![forbid(unsafe_code)]

mod bitmap;
mod bmp;
mod decode;
mod error;
mod info;
mod limits;
mod pixel;

use std::io::{Read, Seek, Write};
use std::path::Path;

// Re-exports
pub use bitmap::Bitmap;
pub use bmp::header::InfoHeaderKind;
pub use decode::LoadRequest;
pub use error::BitmapError;
pub use info::BitmapInfo;
pub use limits::Limits;
pub use pixel::{
    BitDepth, checked_pixel_buffer_size, color_table_size, packed_row_size, pixel_buffer_size,
    scanline_stride,
};

/// Load the BMP file at `path`.
pub fn load(path: impl AsRef<Path>) -> Result<Bitmap, BitmapError> {
    LoadRequest::new().load(path)
}

/// Save `bitmap` to `path` as a BMP with a 12-byte core header.
pub fn save(path: impl AsRef<Path>, bitmap: &Bitmap) -> Result<(), BitmapError> {
    bmp::save(path.as_ref(), bitmap)
}

/// Read a BMP from a seekable stream positioned at the start of the file.
pub fn read_bitmap<R: Read + Seek>(reader: R) -> Result<Bitmap, BitmapError> {
    LoadRequest::new().read(reader)
}

/// Write `bitmap` as a BMP to `writer`, flushing it at the end.
pub fn write_bitmap<W: Write>(mut writer: W, bitmap: &Bitmap) -> Result<(), BitmapError> {
    bmp::write(&mut writer, bitmap)
}

/// Decode a BMP held in memory.
pub fn decode_bmp(data: &[u8]) -> Result<Bitmap, BitmapError> {
    LoadRequest::new().decode(data)
}

/// Encode `bitmap` to the exact bytes [`save`] would write.
pub fn encode_bmp(bitmap: &Bitmap) -> Result<Vec<u8>, BitmapError> {
    bmp::encode(bitmap)
}

/// Read only the headers of the BMP file at `path`.
pub fn probe(path: impl AsRef<Path>) -> Result<BitmapInfo, BitmapError> {
    BitmapInfo::from_path(path)
}
