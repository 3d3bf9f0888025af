//! BMP loader and writer (internal).
//!
//! Use top-level [`crate::load`], [`crate::save`], etc.

mod decode;
mod encode;
pub(crate) mod header;

use std::fs::File;
use std::io::{BufReader, BufWriter, Cursor, Read, Seek, Write};
use std::path::Path;

use crate::bitmap::Bitmap;
use crate::error::BitmapError;
use crate::info::BitmapInfo;
use crate::limits::Limits;

/// Decode a bitmap from a seekable stream positioned at the file start.
pub(crate) fn read<R: Read + Seek>(
    reader: &mut R,
    limits: Option<&Limits>,
) -> Result<Bitmap, BitmapError> {
    decode::read_bitmap(reader, limits)
}

/// Decode a bitmap held in memory.
pub(crate) fn decode(data: &[u8], limits: Option<&Limits>) -> Result<Bitmap, BitmapError> {
    decode::read_bitmap(&mut Cursor::new(data), limits)
}

/// Open and decode the file at `path`. The handle is dropped on every path.
pub(crate) fn load(path: &Path, limits: Option<&Limits>) -> Result<Bitmap, BitmapError> {
    let file = File::open(path).map_err(BitmapError::from_open)?;
    decode::read_bitmap(&mut BufReader::new(file), limits)
}

/// Read only the headers from a stream.
pub(crate) fn probe<R: Read>(reader: &mut R) -> Result<BitmapInfo, BitmapError> {
    let header = decode::read_headers(reader)?;
    Ok(BitmapInfo {
        width: header.info.width,
        height: header.info.height,
        bit_depth: header.depth,
        header: header.info.kind,
        data_offset: header.preamble.data_offset,
    })
}

/// Encode a bitmap to an in-memory BMP file.
pub(crate) fn encode(bitmap: &Bitmap) -> Result<Vec<u8>, BitmapError> {
    encode::encode_bmp(bitmap)
}

/// Encode a bitmap to a stream.
pub(crate) fn write<W: Write>(writer: &mut W, bitmap: &Bitmap) -> Result<(), BitmapError> {
    encode::write_bitmap(writer, bitmap)
}

/// Create (or truncate) the file at `path` and write `bitmap` into it.
///
/// Size validation runs first, so an oversized bitmap never touches the file.
pub(crate) fn save(path: &Path, bitmap: &Bitmap) -> Result<(), BitmapError> {
    encode::plan(bitmap)?;
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    encode::write_bitmap(&mut writer, bitmap)?;
    // Surface close-time write errors instead of losing them in Drop.
    writer
        .into_inner()
        .map_err(|e| BitmapError::Io(e.into_error()))?
        .sync_all()?;
    Ok(())
}
