// script.rs - Scripted pointer for offline renders
//
// The pointer orbits the center on a slowly breathing ellipse and clicks
// every CLICK_EVERY frames, holding the press for a few frames.

use std::f32::consts::TAU;

use particle_canvas::{FrameSource, ParticleCanvas};

const ORBIT_FRAMES: f32 = 240.0;
const CLICK_EVERY: u32 = 45;
const HOLD_FRAMES: u32 = 6;

pub struct PointerScript {
    center: (f32, f32),
    reach: (f32, f32),
}

impl PointerScript {
    pub fn new(w: f32, h: f32) -> Self {
        Self {
            center: (w * 0.5, h * 0.5),
            reach: (w * 0.35, h * 0.35),
        }
    }

    pub fn position(&self, frame: u32) -> (f32, f32) {
        let t = frame as f32 / ORBIT_FRAMES * TAU;
        let breathe = 0.75 + 0.25 * (t * 0.5).cos();
        (
            self.center.0 + self.reach.0 * breathe * t.cos(),
            self.center.1 + self.reach.1 * breathe * t.sin(),
        )
    }

    pub fn drive<S: FrameSource>(&self, canvas: &mut ParticleCanvas<S>, frame: u32) {
        let (x, y) = self.position(frame);
        match frame % CLICK_EVERY {
            0 if frame > 0 => canvas.pointer_down(x, y),
            HOLD_FRAMES => {
                canvas.pointer_move(x, y);
                canvas.pointer_up();
            }
            _ => canvas.pointer_move(x, y),
        }
    }
}
