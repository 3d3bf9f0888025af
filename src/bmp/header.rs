//! BMP file header and the four info header layouts.
//!
//! Fields are pulled out by explicit offset into one normalized
//! [`HeaderDescriptor`]; no header is overlaid onto a struct.

use crate::error::BitmapError;

/// Size of the `BITMAPFILEHEADER` structure.
pub(crate) const FILE_HEADER_SIZE: usize = 14;
/// File header plus the info header size field that follows it.
pub(crate) const PREAMBLE_SIZE: usize = FILE_HEADER_SIZE + 4;
/// Size of the `BITMAPCOREHEADER` written on save.
pub(crate) const CORE_HEADER_SIZE: usize = 12;

/// Which info header layout a file uses, keyed by its declared size.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InfoHeaderKind {
    /// `BITMAPCOREHEADER` (12 bytes, OS/2 1.x): 16-bit unsigned dimensions.
    Core,
    /// `BITMAPINFOHEADER` (40 bytes).
    Info,
    /// `BITMAPV4HEADER` (108 bytes): adds color masks, color space and gamma.
    V4,
    /// `BITMAPV5HEADER` (124 bytes): adds rendering intent and ICC profile.
    V5,
}

impl InfoHeaderKind {
    /// Select a layout from the info header size field.
    pub fn from_size(size: u32) -> Result<Self, BitmapError> {
        match size {
            12 => Ok(Self::Core),
            40 => Ok(Self::Info),
            108 => Ok(Self::V4),
            124 => Ok(Self::V5),
            other => Err(BitmapError::UnsupportedHeader(other)),
        }
    }

    /// Total size of this header, including its own size field.
    pub fn size(self) -> usize {
        match self {
            Self::Core => 12,
            Self::Info => 40,
            Self::V4 => 108,
            Self::V5 => 124,
        }
    }
}

/// The parts of the 14-byte file header the loader needs, plus the info
/// header size field that immediately follows it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Preamble {
    pub data_offset: u32,
    pub header_size: u32,
}

/// Validate the signature and extract the offsets from the first 18 bytes.
pub(crate) fn parse_preamble(bytes: &[u8; PREAMBLE_SIZE]) -> Result<Preamble, BitmapError> {
    if &bytes[0..2] != b"BM" {
        return Err(BitmapError::InvalidMagic);
    }
    Ok(Preamble {
        data_offset: le_u32(bytes, 10),
        header_size: le_u32(bytes, 14),
    })
}

/// Normalized info header: geometry and depth, whatever the layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct HeaderDescriptor {
    pub kind: InfoHeaderKind,
    pub width: u16,
    pub height: u16,
    /// Raw bit count; not yet checked against the supported depths.
    pub bits_per_pixel: u16,
}

/// Decode a complete info header (`header.len() == kind.size()`, starting
/// with its own size field).
pub(crate) fn decode_info_header(
    kind: InfoHeaderKind,
    header: &[u8],
) -> Result<HeaderDescriptor, BitmapError> {
    debug_assert_eq!(header.len(), kind.size());

    if kind == InfoHeaderKind::Core {
        // size:u32 width:u16 height:u16 planes:u16 bit_count:u16
        return Ok(HeaderDescriptor {
            kind,
            width: le_u16(header, 4),
            height: le_u16(header, 6),
            bits_per_pixel: le_u16(header, 10),
        });
    }

    // size:u32 width:i32 height:i32 planes:u16 bit_count:u16 compression:u32 ...
    let width = le_i32(header, 4);
    let height = le_i32(header, 8);
    let bits_per_pixel = le_u16(header, 14);
    let compression = le_u32(header, 16);

    let (Ok(w), Ok(h)) = (u16::try_from(width), u16::try_from(height)) else {
        return Err(BitmapError::InvalidDimensions {
            width: i64::from(width),
            height: i64::from(height),
        });
    };

    if compression != 0 {
        return Err(BitmapError::UnsupportedCompression(compression));
    }

    Ok(HeaderDescriptor {
        kind,
        width: w,
        height: h,
        bits_per_pixel,
    })
}

fn le_u16(bytes: &[u8], at: usize) -> u16 {
    u16::from_le_bytes([bytes[at], bytes[at + 1]])
}

fn le_u32(bytes: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]])
}

fn le_i32(bytes: &[u8], at: usize) -> i32 {
    le_u32(bytes, at) as i32
}
