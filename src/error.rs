//! Error types for each stage of the bar pipeline.
//!
//! Every variant is recoverable; the page layer logs them and keeps running.

use thiserror::Error;

/// Failure to allocate a drawing surface for a pattern.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("drawing surface unavailable for a {width}x{height} bar")]
    SurfaceUnavailable { width: u32, height: u32 },

    #[error("unknown pattern style: {0}")]
    UnknownStyle(String),

    #[error("style table has no positive weight")]
    EmptyStyleTable,
}

/// Configuration that does not fit the loaded base image.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error(
        "bar region {width}x{height}+{x}+{y} exceeds base image {base_width}x{base_height}"
    )]
    RegionOutOfBounds {
        width: u32,
        height: u32,
        x: u32,
        y: u32,
        base_width: u32,
        base_height: u32,
    },
}

/// PNG encoding and decoding failures.
#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("pixel data length {len} does not match {width}x{height}")]
    BadLength { width: u32, height: u32, len: usize },

    #[error("image codec error: {0}")]
    Codec(#[from] image::ImageError),
}

#[derive(Debug, Error)]
pub enum CompositorError {
    #[error("base image unavailable: {0}")]
    AssetUnavailable(String),

    #[error("nothing has been rendered yet")]
    NotRendered,

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Encode(#[from] EncodeError),
}
