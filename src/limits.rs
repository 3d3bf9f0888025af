use crate::error::BitmapError;
use crate::pixel::{self, BitDepth};

/// Resource limits for load operations.
///
/// All fields default to `None` (no limit). Limits are checked after the
/// headers are decoded and before any buffer is allocated.
#[derive(Clone, Debug, Default)]
pub struct Limits {
    pub max_width: Option<u64>,
    pub max_height: Option<u64>,
    /// Maximum pixel count (width * height).
    pub max_pixels: Option<u64>,
    /// Maximum bytes for the color table plus the pixel buffer.
    pub max_memory_bytes: Option<u64>,
}

impl Limits {
    /// Check a decoded geometry against every configured limit.
    pub(crate) fn check(
        &self,
        width: u16,
        height: u16,
        depth: BitDepth,
    ) -> Result<(), BitmapError> {
        let (w, h) = (u64::from(width), u64::from(height));
        exceeds("width", w, self.max_width)?;
        exceeds("height", h, self.max_height)?;
        exceeds("pixel count", w * h, self.max_pixels)?;

        let bytes = pixel::color_table_size(depth) as u64
            + pixel::pixel_buffer_size_u64(width, height, depth);
        exceeds("allocation bytes", bytes, self.max_memory_bytes)
    }
}

fn exceeds(what: &str, value: u64, limit: Option<u64>) -> Result<(), BitmapError> {
    match limit {
        Some(max) if value > max => Err(BitmapError::LimitExceeded(format!(
            "{what} {value} exceeds limit {max}"
        ))),
        _ => Ok(()),
    }
}
