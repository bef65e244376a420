//! Error type shared by every pipeline stage.

use std::path::PathBuf;

/// Errors produced while rendering, slicing or syncing icons.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A hex color string could not be parsed.
    #[error("invalid color `{value}`: {reason}")]
    InvalidColor { value: String, reason: String },

    /// The raster surface could not be allocated.
    #[error("failed to allocate a {width}x{height} canvas")]
    Canvas { width: u32, height: u32 },

    /// The sprite sheet to slice does not exist.
    #[error("input file not found: {}", path.display())]
    MissingInput { path: PathBuf },

    /// A rendered icon expected by the asset catalog is absent.
    #[error("source icon missing: {}", path.display())]
    MissingSource { path: PathBuf },

    /// A slicing grid with a zero dimension or an overflowing cell count.
    #[error("invalid {columns}x{rows} grid")]
    InvalidGrid { columns: u32, rows: u32 },

    /// The sheet is smaller than one pixel per grid cell.
    #[error("sheet of {width}x{height} is too small for a {columns}x{rows} grid")]
    SheetTooSmall {
        width: u32,
        height: u32,
        columns: u32,
        rows: u32,
    },

    /// Decoding or encoding an image failed.
    #[error("image error on {}: {source}", path.display())]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Filesystem operation failed.
    #[error("I/O error during {operation} on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        operation: &'static str,
        #[source]
        source: std::io::Error,
    },

    /// Copying a file into place failed.
    #[error("failed to copy {} to {}: {source}", from.display(), to.display())]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Serializing an image set descriptor failed.
    #[error("failed to encode image set descriptor: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn io(
        operation: &'static str,
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::Io {
            path: path.into(),
            operation,
            source,
        }
    }

    pub(crate) fn image(path: impl Into<PathBuf>, source: image::ImageError) -> Self {
        Self::Image {
            path: path.into(),
            source,
        }
    }
}

/// Convenience alias used across the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;
