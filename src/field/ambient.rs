// ambient.rs - Gravity and turbulence
//
// Forces that act everywhere on the surface, independent of the pointer.

use rand::Rng;

pub const TURBULENCE_SCALE: f32 = 0.05;

/// Unit pull toward `center` scaled by `gravity`.
/// A particle sitting on the center has no direction and gets nothing.
#[inline]
pub fn gravity_pull(x: f32, y: f32, center: (f32, f32), gravity: f32) -> (f32, f32) {
    if gravity == 0.0 {
        return (0.0, 0.0);
    }

    let dx = center.0 - x;
    let dy = center.1 - y;
    let dist = (dx * dx + dy * dy).sqrt();
    if dist <= f32::EPSILON {
        return (0.0, 0.0);
    }

    (dx / dist * gravity, dy / dist * gravity)
}

/// Independent random kick per component in [-0.05, 0.05] * turbulence
#[inline]
pub fn turbulence_kick<R: Rng + ?Sized>(turbulence: f32, rng: &mut R) -> (f32, f32) {
    if turbulence == 0.0 {
        return (0.0, 0.0);
    }

    let span = TURBULENCE_SCALE * turbulence;
    (
        rng.gen_range(-1.0f32..=1.0) * span,
        rng.gen_range(-1.0f32..=1.0) * span,
    )
}
