//! BMP loader: header validation, variant dispatch, table and pixel reads.

use std::io::{Read, Seek, SeekFrom};

use log::{debug, trace};

use super::header::{self, HeaderDescriptor, InfoHeaderKind, PREAMBLE_SIZE, Preamble};
use crate::bitmap::Bitmap;
use crate::error::BitmapError;
use crate::limits::Limits;
use crate::pixel::BitDepth;

/// Everything known about a file once its headers are read.
#[derive(Clone, Copy, Debug)]
pub(crate) struct BmpHeader {
    pub preamble: Preamble,
    pub info: HeaderDescriptor,
    pub depth: BitDepth,
}

/// Read and validate the file header and info header.
///
/// Leaves `reader` positioned just past the info header, where the color
/// table starts.
pub(crate) fn read_headers<R: Read>(reader: &mut R) -> Result<BmpHeader, BitmapError> {
    let mut preamble_bytes = [0u8; PREAMBLE_SIZE];
    reader
        .read_exact(&mut preamble_bytes)
        .map_err(|e| BitmapError::from_read(e, BitmapError::TruncatedFile))?;
    let preamble = header::parse_preamble(&preamble_bytes)?;

    let kind = InfoHeaderKind::from_size(preamble.header_size)?;
    let mut info_bytes = vec![0u8; kind.size()];
    info_bytes[..4].copy_from_slice(&preamble_bytes[14..]);
    reader
        .read_exact(&mut info_bytes[4..])
        .map_err(|e| BitmapError::from_read(e, BitmapError::TruncatedFile))?;

    let info = header::decode_info_header(kind, &info_bytes)?;
    let depth = BitDepth::try_from(info.bits_per_pixel)?;

    debug!(
        "BMP header: {:?} {}x{} {}bpp, pixel data at {}",
        info.kind, info.width, info.height, info.bits_per_pixel, preamble.data_offset
    );

    Ok(BmpHeader {
        preamble,
        info,
        depth,
    })
}

/// Read a complete bitmap from the start of `reader`.
pub(crate) fn read_bitmap<R: Read + Seek>(
    reader: &mut R,
    limits: Option<&Limits>,
) -> Result<Bitmap, BitmapError> {
    let header = read_headers(reader)?;
    let HeaderDescriptor { width, height, .. } = header.info;

    if let Some(limits) = limits {
        limits.check(width, height, header.depth)?;
    }

    let mut bitmap = Bitmap::try_new(width, height, header.depth)?;

    // The color table directly follows the info header.
    trace!("reading {} byte color table", bitmap.color_table().len());
    reader
        .read_exact(bitmap.color_table_mut())
        .map_err(|e| BitmapError::from_read(e, BitmapError::ColorMapReadError))?;

    let data_offset = u64::from(header.preamble.data_offset);
    trace!(
        "reading {} bytes of pixel data at {data_offset}",
        bitmap.pixels().len()
    );
    reader.seek(SeekFrom::Start(data_offset))?;
    reader
        .read_exact(bitmap.pixels_mut())
        .map_err(|e| BitmapError::from_read(e, BitmapError::PixelDataReadError))?;

    Ok(bitmap)
}
