// ripple.rs - Click ripples
//
// Expanding rings spawned by pointer presses. Each one ages a tick at a
// time; radius and opacity are derived from the age so the lifetime is
// exact rather than accumulated.

use rand::Rng;

use super::MAX_RIPPLES;
use crate::config::{ColorMode, Configuration};

pub const RIPPLE_GROWTH: f32 = 3.0;
pub const RIPPLE_FADE: f32 = 0.02;
const MAX_RADIUS_FACTOR: f32 = 1.5;

pub struct Ripples {
    // Origin
    pub x: [f32; MAX_RIPPLES],
    pub y: [f32; MAX_RIPPLES],

    // Animation
    pub age: [u32; MAX_RIPPLES],
    pub radius: [f32; MAX_RIPPLES],
    pub max_radius: [f32; MAX_RIPPLES],
    pub opacity: [f32; MAX_RIPPLES],
    pub hue: [f32; MAX_RIPPLES],

    // Count
    pub n: usize,
}

impl Ripples {
    pub fn new() -> Self {
        Self {
            x: [0.0; MAX_RIPPLES],
            y: [0.0; MAX_RIPPLES],
            age: [0; MAX_RIPPLES],
            radius: [0.0; MAX_RIPPLES],
            max_radius: [0.0; MAX_RIPPLES],
            opacity: [0.0; MAX_RIPPLES],
            hue: [0.0; MAX_RIPPLES],
            n: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    pub fn clear(&mut self) {
        self.n = 0;
    }

    /// Spawn a ring at (x, y). Ignored when the arena is full.
    pub fn spawn<R: Rng + ?Sized>(&mut self, x: f32, y: f32, config: &Configuration, rng: &mut R) -> bool {
        if self.n >= MAX_RIPPLES { return false; }

        let i = self.n;
        self.x[i] = x;
        self.y[i] = y;
        self.age[i] = 0;
        self.radius[i] = 0.0;
        self.max_radius[i] = config.interaction_radius * MAX_RADIUS_FACTOR;
        self.opacity[i] = 1.0;
        self.hue[i] = match config.color_mode {
            ColorMode::Rainbow => rng.gen_range(0.0f32..360.0),
            ColorMode::Monochrome | ColorMode::Custom => config.base_hue,
        };
        self.n += 1;
        true
    }

    /// Drop faded rings, grow and fade the rest
    pub fn update(&mut self) {
        let mut write = 0;

        for read in 0..self.n {
            if self.opacity[read] <= 0.0 { continue; }

            let age = self.age[read] + 1;
            self.x[write] = self.x[read];
            self.y[write] = self.y[read];
            self.age[write] = age;
            self.radius[write] = age as f32 * RIPPLE_GROWTH;
            self.max_radius[write] = self.max_radius[read];
            self.opacity[write] = 1.0 - age as f32 * RIPPLE_FADE;
            self.hue[write] = self.hue[read];
            write += 1;
        }

        self.n = write;
    }

    /// Radius the ring is stroked at; parks at its max while it fades out
    #[inline]
    pub fn drawn_radius(&self, i: usize) -> f32 {
        self.radius[i].min(self.max_radius[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn spawn_one(config: &Configuration) -> Ripples {
        let mut rng = SmallRng::seed_from_u64(1);
        let mut ripples = Ripples::new();
        assert!(ripples.spawn(400.0, 300.0, config, &mut rng));
        ripples
    }

    #[test]
    fn fifty_ticks_reach_full_radius_and_zero_opacity() {
        let mut ripples = spawn_one(&Configuration::default());
        assert_eq!(ripples.max_radius[0], 150.0);

        for _ in 0..50 {
            ripples.update();
        }
        assert_eq!(ripples.len(), 1);
        assert!((ripples.radius[0] - 150.0).abs() < 1e-3);
        assert!(ripples.opacity[0].abs() < 1e-6);

        ripples.update();
        assert!(ripples.is_empty());
    }

    #[test]
    fn opacity_falls_and_radius_grows_every_tick() {
        let mut ripples = spawn_one(&Configuration::default());
        let (mut radius, mut opacity) = (ripples.radius[0], ripples.opacity[0]);
        while !ripples.is_empty() {
            ripples.update();
            if ripples.is_empty() { break; }
            assert!(ripples.opacity[0] < opacity);
            assert!(ripples.radius[0] > radius);
            radius = ripples.radius[0];
            opacity = ripples.opacity[0];
        }
    }

    #[test]
    fn monochrome_ripples_take_the_base_hue() {
        let config = Configuration {
            color_mode: ColorMode::Monochrome,
            base_hue: 42.0,
            ..Configuration::default()
        };
        assert_eq!(spawn_one(&config).hue[0], 42.0);
    }

    #[test]
    fn drawn_radius_stops_at_max() {
        let config = Configuration { interaction_radius: 50.0, ..Configuration::default() };
        let mut ripples = spawn_one(&config);
        for _ in 0..40 {
            ripples.update();
        }
        assert_eq!(ripples.radius[0], 120.0);
        assert_eq!(ripples.drawn_radius(0), 75.0);
    }

    #[test]
    fn full_arena_ignores_new_ripples() {
        let config = Configuration::default();
        let mut rng = SmallRng::seed_from_u64(1);
        let mut ripples = Ripples::new();
        for _ in 0..MAX_RIPPLES {
            assert!(ripples.spawn(0.0, 0.0, &config, &mut rng));
        }
        assert!(!ripples.spawn(0.0, 0.0, &config, &mut rng));
        assert_eq!(ripples.len(), MAX_RIPPLES);
    }

    #[test]
    fn removal_keeps_survivor_order() {
        let config = Configuration::default();
        let mut rng = SmallRng::seed_from_u64(1);
        let mut ripples = Ripples::new();
        ripples.spawn(1.0, 1.0, &config, &mut rng);
        for _ in 0..25 {
            ripples.update();
        }
        ripples.spawn(2.0, 2.0, &config, &mut rng);
        ripples.spawn(3.0, 3.0, &config, &mut rng);
        for _ in 0..26 {
            ripples.update();
        }
        // first ring is gone, the younger two keep their order
        assert_eq!(ripples.len(), 2);
        assert_eq!((ripples.x[0], ripples.x[1]), (2.0, 3.0));
    }
}
