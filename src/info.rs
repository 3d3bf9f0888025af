use std::fs::File;
use std::io::{BufReader, Cursor};
use std::path::Path;

use crate::bmp::header::InfoHeaderKind;
use crate::error::BitmapError;
use crate::pixel::BitDepth;

/// Geometry and layout read from a BMP's headers, without its pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BitmapInfo {
    pub width: u16,
    pub height: u16,
    pub bit_depth: BitDepth,
    /// Info header variant the file was written with.
    pub header: InfoHeaderKind,
    /// Absolute file offset of the pixel data.
    pub data_offset: u32,
}

impl BitmapInfo {
    /// Probe an in-memory BMP. Fails with the same errors a full load
    /// would report for the header section.
    pub fn from_bytes(data: &[u8]) -> Result<Self, BitmapError> {
        crate::bmp::probe(&mut Cursor::new(data))
    }

    /// Probe a BMP file, reading only its headers.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, BitmapError> {
        let file = File::open(path.as_ref()).map_err(BitmapError::from_open)?;
        crate::bmp::probe(&mut BufReader::new(file))
    }
}
