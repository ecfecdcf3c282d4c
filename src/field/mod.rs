// field/ - Force field
//
// Pure functions returning velocity deltas.
// No state, no allocation - just math.

mod ambient;
mod pointer;

pub use ambient::*;
pub use pointer::*;

/// Box clamp: each component limited to [-max, max] on its own
#[inline]
pub fn clamp_velocity(vx: f32, vy: f32, max: f32) -> (f32, f32) {
    (vx.clamp(-max, max), vy.clamp(-max, max))
}
