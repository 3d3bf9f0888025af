use std::io::{Read, Seek};
use std::path::Path;

use crate::bitmap::Bitmap;
use crate::error::BitmapError;
use crate::limits::Limits;

/// Builder for a BMP load with optional resource limits.
///
/// ```no_run
/// use bmpio::{Limits, LoadRequest};
///
/// let limits = Limits {
///     max_pixels: Some(800 * 480),
///     ..Default::default()
/// };
/// let bitmap = LoadRequest::new().with_limits(&limits).load("clock.bmp")?;
/// # Ok::<(), bmpio::BitmapError>(())
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct LoadRequest<'l> {
    limits: Option<&'l Limits>,
}

impl<'l> LoadRequest<'l> {
    pub fn new() -> Self {
        Self { limits: None }
    }

    /// Reject files whose geometry exceeds `limits` before allocating.
    pub fn with_limits(mut self, limits: &'l Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Load the BMP file at `path`.
    pub fn load(self, path: impl AsRef<Path>) -> Result<Bitmap, BitmapError> {
        crate::bmp::load(path.as_ref(), self.limits)
    }

    /// Load from a seekable stream positioned at the start of a BMP file.
    pub fn read<R: Read + Seek>(self, mut reader: R) -> Result<Bitmap, BitmapError> {
        crate::bmp::read(&mut reader, self.limits)
    }

    /// Load from a BMP file held in memory.
    pub fn decode(self, data: &[u8]) -> Result<Bitmap, BitmapError> {
        crate::bmp::decode(data, self.limits)
    }
}
