// sim/ - Particle simulation
//
// Entity management using Structure-of-Arrays for cache efficiency.
// Each entity type in its own module.

mod particle;
mod ripple;

pub use particle::Particles;
pub use ripple::{RIPPLE_FADE, RIPPLE_GROWTH, Ripples};

use rand::rngs::SmallRng;
use tracing::{debug, warn};

use crate::config::Configuration;
use crate::input::Pointer;

// Capacity limits
pub const MAX_PARTICLES: usize = 300;
pub const MAX_RIPPLES: usize = 64;

/// Particle simulation world
pub struct Simulation {
    // Surface dimensions
    w: u32,
    h: u32,

    // Entities
    particles: Particles,
    ripples: Ripples,

    rng: SmallRng,
}

impl Simulation {
    pub fn new(w: u32, h: u32, rng: SmallRng) -> Self {
        Self {
            w,
            h,
            particles: Particles::new(),
            ripples: Ripples::new(),
            rng,
        }
    }

    /// New surface size; the particle batch is rebuilt for it
    pub fn resize(&mut self, w: u32, h: u32, config: &Configuration) {
        self.w = w;
        self.h = h;
        self.reinitialize(config);
    }

    /// Replace the particle batch from the configured count and size
    pub fn reinitialize(&mut self, config: &Configuration) {
        let created = self.particles.reinitialize(
            config.particle_count,
            config.particle_size,
            config.speed,
            self.w as f32,
            self.h as f32,
            &mut self.rng,
        );
        if created < config.particle_count {
            warn!(requested = config.particle_count, created, "particle request truncated to capacity");
        }
        debug!(count = created, w = self.w, h = self.h, "particles reinitialized");
    }

    /// One tick: every particle, then every ripple, in store order
    pub fn step(&mut self, config: &Configuration, pointer: &Pointer) {
        self.particles.update(config, pointer, self.w as f32, self.h as f32, &mut self.rng);
        self.ripples.update();
    }

    pub fn spawn_ripple(&mut self, x: f32, y: f32, config: &Configuration) -> bool {
        let spawned = self.ripples.spawn(x, y, config, &mut self.rng);
        if !spawned {
            debug!(x, y, "ripple arena full, press ignored");
        }
        spawned
    }

    pub fn particles(&self) -> &Particles { &self.particles }
    pub fn ripples(&self) -> &Ripples { &self.ripples }
    pub fn width(&self) -> u32 { self.w }
    pub fn height(&self) -> u32 { self.h }
}

/// Toroidal wrap into [0, extent).
/// Below zero re-enters at the far edge; reaching the edge exactly wraps to 0.
#[inline]
pub fn wrap(v: f32, extent: f32) -> f32 {
    if v < 0.0 {
        opposite_edge(extent)
    } else if v >= extent {
        0.0
    } else {
        v
    }
}

// Largest coordinate still inside [0, extent)
#[inline]
fn opposite_edge(extent: f32) -> f32 {
    if extent > 0.0 { f32::from_bits(extent.to_bits() - 1) } else { 0.0 }
}
