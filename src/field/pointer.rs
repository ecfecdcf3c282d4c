// pointer.rs - Pointer attraction
//
// Particles inside the interaction radius drift toward the pointer.
// Pressing multiplies the pull by four.

use crate::input::Pointer;

pub const POINTER_INFLUENCE: f32 = 0.0005;
pub const PRESSED_INFLUENCE: f32 = POINTER_INFLUENCE * 4.0;

/// Velocity delta pulling (x, y) toward the pointer, zero outside `radius`
#[inline]
pub fn pointer_pull(x: f32, y: f32, pointer: &Pointer, radius: f32) -> (f32, f32) {
    let dx = pointer.x - x;
    let dy = pointer.y - y;
    if (dx * dx + dy * dy).sqrt() >= radius {
        return (0.0, 0.0);
    }

    let k = if pointer.pressed { PRESSED_INFLUENCE } else { POINTER_INFLUENCE };
    (dx * k, dy * k)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pressed_pull_is_four_times_stronger() {
        let mut pointer = Pointer { x: 400.0, y: 300.0, pressed: false };
        // 50 units away, radius 100
        let (ux, uy) = pointer_pull(370.0, 260.0, &pointer, 100.0);
        pointer.pressed = true;
        let (px, py) = pointer_pull(370.0, 260.0, &pointer, 100.0);

        let ratio = (px * px + py * py).sqrt() / (ux * ux + uy * uy).sqrt();
        assert!((ratio - 4.0).abs() < 1e-4, "ratio {ratio}");
        assert!((ux - 30.0 * POINTER_INFLUENCE).abs() < 1e-7);
    }

    #[test]
    fn no_pull_outside_radius() {
        let pointer = Pointer { x: 0.0, y: 0.0, pressed: true };
        assert_eq!(pointer_pull(100.0, 0.0, &pointer, 100.0), (0.0, 0.0));
        assert_eq!(pointer_pull(500.0, 500.0, &pointer, 100.0), (0.0, 0.0));
    }
}
