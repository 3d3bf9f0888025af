use crate::error::BitmapError;
use crate::pixel::{self, BitDepth};

/// An owned bitmap: stored pixel rows plus an optional color table.
///
/// Pixel rows are kept exactly as a BMP file stores them: bottom row first,
/// each row padded to a 4-byte boundary. The color table holds one RGB
/// triplet per palette index and is empty for [`BitDepth::TwentyFour`].
///
/// Buffer lengths always match the geometry; every constructor checks this
/// and the mutable accessors only hand out fixed-length slices.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bitmap {
    width: u16,
    height: u16,
    depth: BitDepth,
    color_table: Vec<u8>,
    pixels: Vec<u8>,
}

impl Bitmap {
    /// Create a zero-filled bitmap.
    ///
    /// # Panics
    ///
    /// Panics if the pixel buffer size does not fit in `usize`, which only
    /// happens for very large 24-bit images on 32-bit targets. Use
    /// [`Bitmap::try_new`] to get an error instead.
    pub fn new(width: u16, height: u16, depth: BitDepth) -> Self {
        Self {
            width,
            height,
            depth,
            color_table: vec![0u8; pixel::color_table_size(depth)],
            pixels: vec![0u8; pixel::pixel_buffer_size(width, height, depth)],
        }
    }

    /// Create a zero-filled bitmap, or fail with
    /// [`BitmapError::BitmapTooLarge`] if the pixel buffer size overflows
    /// `usize`.
    pub fn try_new(width: u16, height: u16, depth: BitDepth) -> Result<Self, BitmapError> {
        let pixel_len = buffer_len(width, height, depth)?;
        Ok(Self {
            width,
            height,
            depth,
            color_table: vec![0u8; pixel::color_table_size(depth)],
            pixels: vec![0u8; pixel_len],
        })
    }

    /// Assemble a bitmap from existing buffers.
    ///
    /// Returns [`BitmapError::BufferSizeMismatch`] if `color_table` or
    /// `pixels` does not have exactly the size the geometry requires.
    pub fn from_parts(
        width: u16,
        height: u16,
        depth: BitDepth,
        color_table: Vec<u8>,
        pixels: Vec<u8>,
    ) -> Result<Self, BitmapError> {
        check_len("color table", pixel::color_table_size(depth), color_table.len())?;
        check_len("pixel", buffer_len(width, height, depth)?, pixels.len())?;
        Ok(Self {
            width,
            height,
            depth,
            color_table,
            pixels,
        })
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn bit_depth(&self) -> BitDepth {
        self.depth
    }

    pub fn bits_per_pixel(&self) -> u16 {
        self.depth.bits()
    }

    /// Bytes per stored row, including padding.
    pub fn stride(&self) -> usize {
        pixel::scanline_stride(self.width, self.depth)
    }

    pub fn color_table(&self) -> &[u8] {
        &self.color_table
    }

    /// Mutable access to the color table contents (its length is fixed).
    pub fn color_table_mut(&mut self) -> &mut [u8] {
        &mut self.color_table
    }

    /// Stored pixel data, bottom row first.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Mutable access to the stored pixel data (its length is fixed).
    pub fn pixels_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }

    /// Rows in stored order (bottom of the image first), padding included.
    pub fn rows(&self) -> impl DoubleEndedIterator<Item = &[u8]> + ExactSizeIterator {
        // A zero-width bitmap still has `height` (empty) rows.
        let stride = self.stride();
        (0..self.height as usize).map(move |row| &self.pixels[row * stride..(row + 1) * stride])
    }

    /// Rows in display order (top of the image first), padding included.
    pub fn rows_top_down(&self) -> impl Iterator<Item = &[u8]> {
        self.rows().rev()
    }

    /// Take the buffers out: `(color_table, pixels)`.
    pub fn into_parts(self) -> (Vec<u8>, Vec<u8>) {
        (self.color_table, self.pixels)
    }
}

/// Pixel buffer length, or `BitmapTooLarge` where it overflows `usize`.
fn buffer_len(width: u16, height: u16, depth: BitDepth) -> Result<usize, BitmapError> {
    pixel::checked_pixel_buffer_size(width, height, depth).ok_or_else(|| {
        BitmapError::BitmapTooLarge(pixel::pixel_buffer_size_u64(width, height, depth))
    })
}

fn check_len(what: &'static str, expected: usize, actual: usize) -> Result<(), BitmapError> {
    if expected == actual {
        Ok(())
    } else {
        Err(BitmapError::BufferSizeMismatch {
            what,
            expected,
            actual,
        })
    }
}
