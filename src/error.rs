use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while rendering or emitting icons.
#[derive(Debug, Error)]
pub enum IconError {
    #[error("canvas must be at least 1x1, got {width}x{height}")]
    EmptyCanvas { width: u32, height: u32 },

    #[error("invalid color {0:?}: expected #rrggbb or #rrggbbaa")]
    InvalidColor(String),

    #[error("failed to encode PNG: {0}")]
    Encode(#[from] image::ImageError),

    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write output: {0}")]
    Write(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, IconError>;
