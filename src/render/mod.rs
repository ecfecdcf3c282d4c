// render/ - Paint simulation state onto the raster
//
// Per tick, in order:
//   1. fade      translucent black over everything (motion trails)
//   2. ripples   stroked rings
//   3. links     lines from near particles to the pointer
//   4. particles filled circle / square / triangle
//
// The renderer only reads the stores.

mod color;
mod raster;

pub use color::Color;
pub use raster::Raster;

use crate::config::{Configuration, ParticleShape};
use crate::input::Pointer;
use crate::sim::{Particles, Ripples};

const RING_WIDTH: f32 = 2.0;
const TRIANGLE_APEX: f32 = 1.5;

pub struct Renderer {
    raster: Raster,
}

impl Renderer {
    pub fn new(w: u32, h: u32) -> Self {
        Self { raster: Raster::new(w, h) }
    }

    pub fn resize(&mut self, w: u32, h: u32) {
        self.raster.resize(w, h);
    }

    pub fn clear(&mut self) {
        self.raster.clear();
    }

    pub fn raster(&self) -> &Raster {
        &self.raster
    }

    pub fn fade(&mut self, config: &Configuration) {
        self.raster.fade(config.fade_amount / 100.0);
    }

    pub fn draw_ripples(&mut self, ripples: &Ripples, config: &Configuration) {
        for i in 0..ripples.n {
            let (c, alpha) = Color::hsla(ripples.hue[i], config.saturation, config.brightness, ripples.opacity[i]);
            let center = (ripples.x[i], ripples.y[i]);
            self.raster.stroke_ring(center, ripples.drawn_radius(i), RING_WIDTH, c, alpha);
        }
    }

    /// Lines fade out linearly toward the edge of the interaction radius
    pub fn draw_links(&mut self, particles: &Particles, pointer: &Pointer, config: &Configuration) {
        let radius = config.interaction_radius;
        for i in 0..particles.n {
            if !particles.near[i] { continue; }

            let (x, y) = (particles.x[i], particles.y[i]);
            let (c, alpha) = paint(config, particles.hue[i], 1.0 - pointer.distance(x, y) / radius);
            self.raster.stroke_line((x, y), (pointer.x, pointer.y), c, alpha);
        }
    }

    pub fn draw_particles(&mut self, particles: &Particles, config: &Configuration) {
        for i in 0..particles.n {
            let center = (particles.x[i], particles.y[i]);
            let size = particles.size[i];
            let rotation = particles.rotation[i];
            let (c, _) = paint(config, particles.hue[i], 1.0);

            match config.particle_shape {
                ParticleShape::Circle => self.raster.fill_circle(center, size, c),
                ParticleShape::Square => self.raster.fill_convex(&square(center, size, rotation), c),
                ParticleShape::Triangle => self.raster.fill_convex(&triangle(center, size, rotation), c),
            }
        }
    }
}

#[inline]
fn paint(config: &Configuration, particle_hue: f32, alpha: f32) -> (Color, f32) {
    Color::hsla(config.paint_hue(particle_hue), config.saturation, config.brightness, alpha)
}

/// Side 2*size, centered, rotated
pub fn square(center: (f32, f32), size: f32, rotation: f32) -> [(f32, f32); 4] {
    [(-size, -size), (size, -size), (size, size), (-size, size)]
        .map(|corner| place(corner, center, rotation))
}

/// Isosceles, apex up at (0, -1.5*size), base corners at (+-size, size)
pub fn triangle(center: (f32, f32), size: f32, rotation: f32) -> [(f32, f32); 3] {
    [(0.0, -TRIANGLE_APEX * size), (size, size), (-size, size)]
        .map(|corner| place(corner, center, rotation))
}

// Rotate a local offset (y down) and move it to `center`
#[inline]
fn place((x, y): (f32, f32), center: (f32, f32), rotation: f32) -> (f32, f32) {
    let (sin, cos) = rotation.sin_cos();
    (center.0 + x * cos - y * sin, center.1 + x * sin + y * cos)
}
