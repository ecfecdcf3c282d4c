// particle.rs - Particle arena
//
// Structure-of-Arrays layout, fixed capacity, mutated in place every tick.
// The batch is only ever replaced wholesale by `reinitialize`.

use std::f32::consts::TAU;

use rand::Rng;

use super::{MAX_PARTICLES, wrap};
use crate::config::{ColorMode, Configuration};
use crate::field::{clamp_velocity, gravity_pull, pointer_pull, turbulence_kick};
use crate::input::Pointer;

// Per-tick increments
const HUE_STEP: f32 = 0.5;
const ROTATION_STEP: f32 = 0.01;

pub struct Particles {
    // Position
    pub x: [f32; MAX_PARTICLES],
    pub y: [f32; MAX_PARTICLES],

    // Velocity
    pub vx: [f32; MAX_PARTICLES],
    pub vy: [f32; MAX_PARTICLES],

    // Appearance
    pub size: [f32; MAX_PARTICLES],
    pub hue: [f32; MAX_PARTICLES],
    pub rotation: [f32; MAX_PARTICLES],

    // Inside the interaction radius at the end of the last tick
    pub near: [bool; MAX_PARTICLES],

    // Count
    pub n: usize,
}

impl Particles {
    pub fn new() -> Self {
        Self {
            x: [0.0; MAX_PARTICLES],
            y: [0.0; MAX_PARTICLES],
            vx: [0.0; MAX_PARTICLES],
            vy: [0.0; MAX_PARTICLES],
            size: [0.0; MAX_PARTICLES],
            hue: [0.0; MAX_PARTICLES],
            rotation: [0.0; MAX_PARTICLES],
            near: [false; MAX_PARTICLES],
            n: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Discard the batch and scatter `count` fresh particles over the surface.
    /// Returns how many were created; capacity caps the request.
    pub fn reinitialize<R: Rng + ?Sized>(
        &mut self,
        count: usize,
        size: f32,
        speed: f32,
        screen_w: f32,
        screen_h: f32,
        rng: &mut R,
    ) -> usize {
        let count = count.min(MAX_PARTICLES);

        for i in 0..count {
            self.x[i] = wrap(rng.gen_range(0.0f32..1.0) * screen_w, screen_w);
            self.y[i] = wrap(rng.gen_range(0.0f32..1.0) * screen_h, screen_h);
            self.vx[i] = rng.gen_range(-0.5f32..0.5) * speed;
            self.vy[i] = rng.gen_range(-0.5f32..0.5) * speed;
            self.size[i] = rng.gen_range(0.0f32..1.0) * size + 1.0;
            self.hue[i] = (rng.gen_range(0.0f32..1.0) * 360.0) % 360.0;
            self.rotation[i] = rng.gen_range(0.0f32..1.0) * TAU;
            self.near[i] = false;
        }

        self.n = count;
        count
    }

    /// Advance every particle one tick against the same config and pointer
    pub fn update<R: Rng + ?Sized>(
        &mut self,
        config: &Configuration,
        pointer: &Pointer,
        screen_w: f32,
        screen_h: f32,
        rng: &mut R,
    ) {
        let center = (screen_w * 0.5, screen_h * 0.5);
        let radius = config.interaction_radius;
        let rainbow = config.color_mode == ColorMode::Rainbow;

        for i in 0..self.n {
            let x = self.x[i];
            let y = self.y[i];

            // Forces at the current position
            let (px, py) = pointer_pull(x, y, pointer, radius);
            let (gx, gy) = gravity_pull(x, y, center, config.gravity);
            let (tx, ty) = turbulence_kick(config.turbulence, rng);
            let (vx, vy) = clamp_velocity(
                self.vx[i] + px + gx + tx,
                self.vy[i] + py + gy + ty,
                config.speed,
            );

            // Move, then wrap around the torus
            let x = wrap(x + vx, screen_w);
            let y = wrap(y + vy, screen_h);

            let near = pointer.distance(x, y) < radius;
            if near && rainbow {
                self.hue[i] = (self.hue[i] + HUE_STEP) % 360.0;
            }

            self.x[i] = x;
            self.y[i] = y;
            self.vx[i] = vx;
            self.vy[i] = vy;
            self.near[i] = near;
            self.rotation[i] += ROTATION_STEP;
        }
    }
}
