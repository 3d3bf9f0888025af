use std::io;

/// Errors from BMP loading and saving.
///
/// Every fallible operation in this crate returns exactly one of these; no
/// partially filled [`crate::Bitmap`] is ever handed back alongside an error.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum BitmapError {
    #[error("cannot open the file: not found")]
    FileNotFound,

    #[error("I/O error")]
    Io(#[source] io::Error),

    #[error("the file is too short for a bitmap file")]
    TruncatedFile,

    #[error("the file is not a bitmap file (missing \"BM\" signature)")]
    InvalidMagic,

    #[error("unknown info header type (size {0})")]
    UnsupportedHeader(u32),

    #[error("incorrect bitmap size in the header: {width}x{height}")]
    InvalidDimensions { width: i64, height: i64 },

    #[error("compressed bitmaps are not supported (compression {0})")]
    UnsupportedCompression(u32),

    #[error("{0} bits per pixel is not supported")]
    UnsupportedPixelDepth(u16),

    #[error("cannot read the color map")]
    ColorMapReadError,

    #[error("cannot read pixel data")]
    PixelDataReadError,

    #[error("bitmap dimensions are too big: {width}x{height}")]
    DimensionsTooLarge { width: u64, height: u64 },

    #[error("bitmap is too big: {0} bytes")]
    BitmapTooLarge(u64),

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("{what} buffer has wrong size: need {expected} bytes, got {actual}")]
    BufferSizeMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },
}

impl BitmapError {
    /// Map a failed read: a short read becomes `eof`, anything else is I/O.
    pub(crate) fn from_read(err: io::Error, eof: BitmapError) -> Self {
        if err.kind() == io::ErrorKind::UnexpectedEof {
            eof
        } else {
            BitmapError::Io(err)
        }
    }

    /// Map a failed open: a missing file becomes `FileNotFound`.
    pub(crate) fn from_open(err: io::Error) -> Self {
        if err.kind() == io::ErrorKind::NotFound {
            BitmapError::FileNotFound
        } else {
            BitmapError::Io(err)
        }
    }
}

impl From<io::Error> for BitmapError {
    fn from(err: io::Error) -> Self {
        BitmapError::Io(err)
    }
}
