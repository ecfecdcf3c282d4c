// ============================================================================
// PARTICLE CANVAS - Pointer-driven particle field with motion trails
// ============================================================================
//
// Particles drift over a toroidal surface, pulled toward the pointer,
// toward (or away from) the center, and jostled by turbulence. Each frame
// fades the previous one toward black, so movement leaves trails. Presses
// spawn expanding ripples.

pub mod canvas;
pub mod config;
pub mod error;
pub mod field;
pub mod input;
pub mod render;
pub mod scheduler;
pub mod sim;

#[cfg(target_arch = "wasm32")]
mod web;

pub use canvas::{FrameStream, ParticleCanvas, encode_png};
pub use config::{ColorMode, ConfigError, Configuration, ParticleShape};
pub use error::{CanvasError, CanvasResult};
pub use input::Pointer;
pub use scheduler::{FrameScheduler, FrameSource, ManualFrames, SchedulerState};

#[cfg(target_arch = "wasm32")]
pub use web::{AnimationFrames, CanvasApp};
