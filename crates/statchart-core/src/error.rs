// File: crates/statchart-core/src/error.rs
// Summary: Error type for chart construction and rendering.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("failed to create {width}x{height} raster surface")]
    Surface { width: i32, height: i32 },

    #[error("failed to read back rendered pixels")]
    ReadPixels,

    #[error("png encode: {0}")]
    Encode(#[from] image::ImageError),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    #[error("unknown colour {0:?}")]
    UnknownColor(String),
}

pub type Result<T> = std::result::Result<T, ChartError>;
