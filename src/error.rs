// error.rs - Failures that can cross the canvas boundary
//
// Out-of-range configuration is clamped, not reported, and degenerate
// geometry is guarded where it occurs. What remains is surface trouble,
// frame scheduling and export.

use thiserror::Error;

use crate::config::ConfigError;

#[derive(Error, Debug)]
pub enum CanvasError {
    /// Nothing to draw into this frame; the frame is skipped.
    #[error("surface {width}x{height} is unavailable")]
    SurfaceUnavailable { width: u32, height: u32 },

    /// Every frame since `start` failed to reach the surface.
    #[error("surface lost: {frames} consecutive frames could not be drawn")]
    SurfaceLost { frames: u32 },

    #[error("frame request rejected by host: {0}")]
    FrameRequest(String),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("frame encoding failed: {0}")]
    Encode(#[from] image::ImageError),
}

pub type CanvasResult<T> = Result<T, CanvasError>;
