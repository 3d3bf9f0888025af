//! Pixel depths and the row/table geometry the BMP format mandates.

use crate::error::BitmapError;

/// Bits per pixel. Only uncompressed depths with a fixed layout are modeled.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BitDepth {
    /// 1 bit per pixel, 2-entry color table.
    One,
    /// 4 bits per pixel, 16-entry color table.
    Four,
    /// 8 bits per pixel, 256-entry color table.
    Eight,
    /// 24 bits per pixel, direct BGR, no color table.
    TwentyFour,
}

impl BitDepth {
    /// Numeric bits per pixel as stored in the info header.
    pub const fn bits(self) -> u16 {
        match self {
            Self::One => 1,
            Self::Four => 4,
            Self::Eight => 8,
            Self::TwentyFour => 24,
        }
    }

    /// Whether pixels are palette indices.
    pub const fn has_color_table(self) -> bool {
        !matches!(self, Self::TwentyFour)
    }
}

impl TryFrom<u16> for BitDepth {
    type Error = BitmapError;

    fn try_from(bits: u16) -> Result<Self, Self::Error> {
        match bits {
            1 => Ok(Self::One),
            4 => Ok(Self::Four),
            8 => Ok(Self::Eight),
            24 => Ok(Self::TwentyFour),
            other => Err(BitmapError::UnsupportedPixelDepth(other)),
        }
    }
}

impl From<BitDepth> for u16 {
    fn from(depth: BitDepth) -> u16 {
        depth.bits()
    }
}

/// Size in bytes of the color table: one RGB triplet per palette index.
pub const fn color_table_size(depth: BitDepth) -> usize {
    match depth {
        BitDepth::TwentyFour => 0,
        other => 3usize << other.bits(),
    }
}

/// Bytes per stored row, padded to a 4-byte boundary.
pub const fn scanline_stride(width: u16, depth: BitDepth) -> usize {
    (width as usize * depth.bits() as usize).div_ceil(32) * 4
}

/// Total size of the stored pixel data.
///
/// Saturates at `usize::MAX` where the size does not fit (32-bit targets,
/// large 24-bit images); use [`checked_pixel_buffer_size`] to detect that.
pub const fn pixel_buffer_size(width: u16, height: u16, depth: BitDepth) -> usize {
    scanline_stride(width, depth).saturating_mul(height as usize)
}

/// Total size of the stored pixel data, or `None` if it overflows `usize`.
pub const fn checked_pixel_buffer_size(
    width: u16,
    height: u16,
    depth: BitDepth,
) -> Option<usize> {
    scanline_stride(width, depth).checked_mul(height as usize)
}

/// Total size of the stored pixel data, exact on every target.
pub(crate) fn pixel_buffer_size_u64(width: u16, height: u16, depth: BitDepth) -> u64 {
    scanline_stride(width, depth) as u64 * u64::from(height)
}

/// Bytes of a row that carry pixels, without the alignment padding.
pub const fn packed_row_size(width: u16, depth: BitDepth) -> usize {
    (width as usize * depth.bits() as usize).div_ceil(8)
}
