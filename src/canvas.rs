// canvas.rs - The particle canvas
//
// Everything a host calls goes through here: configuration, surface size,
// pointer events, the frame loop and frame export. Hosts own event
// subscription and feed it in; nothing in here listens to anything.

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, RgbaImage};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use tracing::{debug, info, warn};

use crate::config::Configuration;
use crate::error::{CanvasError, CanvasResult};
use crate::input::Pointer;
use crate::render::{Raster, Renderer};
use crate::scheduler::{FrameScheduler, FrameSource, ManualFrames};
use crate::sim::Simulation;

pub struct ParticleCanvas<S: FrameSource = ManualFrames> {
    config: Configuration,
    pointer: Pointer,
    sim: Simulation,
    renderer: Renderer,
    scheduler: FrameScheduler<S>,
    frame: u64,
}

impl ParticleCanvas<ManualFrames> {
    /// Canvas without a display, driven by `pump` or `tick`
    pub fn headless(w: u32, h: u32) -> Self {
        Self::with_source(w, h, ManualFrames::new(), SmallRng::from_entropy())
    }

    /// Headless canvas with reproducible randomness
    pub fn seeded(w: u32, h: u32, seed: u64) -> Self {
        Self::with_source(w, h, ManualFrames::new(), SmallRng::seed_from_u64(seed))
    }

    /// Deliver the outstanding frame request, if there is one
    pub fn pump(&mut self) -> CanvasResult<bool> {
        if self.scheduler.source_mut().fire().is_none() {
            return Ok(false);
        }
        self.on_frame()?;
        Ok(true)
    }
}

impl<S: FrameSource> ParticleCanvas<S> {
    pub fn new(w: u32, h: u32, source: S) -> Self {
        Self::with_source(w, h, source, SmallRng::from_entropy())
    }

    pub fn with_source(w: u32, h: u32, source: S, rng: SmallRng) -> Self {
        let config = Configuration::default();
        let mut sim = Simulation::new(w, h, rng);
        sim.reinitialize(&config);

        Self {
            config,
            pointer: Pointer::default(),
            sim,
            renderer: Renderer::new(w, h),
            scheduler: FrameScheduler::new(source),
            frame: 0,
        }
    }

    /// Takes effect on the next tick. A new particle count or size rebuilds
    /// the batch; anything else leaves particles where they are.
    pub fn configure(&mut self, config: Configuration) {
        let next = config.clamped();
        let rebuild = self.config.needs_reinit(&next);
        self.config = next;
        if rebuild {
            self.sim.reinitialize(&self.config);
        }
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    pub fn resize(&mut self, w: u32, h: u32) {
        info!(w, h, "surface resized");
        self.sim.resize(w, h, &self.config);
        self.renderer.resize(w, h);
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.pointer.move_to(x, y);
    }

    /// Press also drops a ripple at the press point
    pub fn pointer_down(&mut self, x: f32, y: f32) {
        self.pointer.press(x, y);
        self.sim.spawn_ripple(x, y, &self.config);
    }

    pub fn pointer_up(&mut self) {
        self.pointer.release();
    }

    pub fn pointer(&self) -> &Pointer {
        &self.pointer
    }

    pub fn start(&mut self) -> CanvasResult<()> {
        self.scheduler.start()
    }

    pub fn stop(&mut self) {
        self.scheduler.stop();
    }

    pub fn is_running(&self) -> bool {
        self.scheduler.is_running()
    }

    pub fn scheduler(&self) -> &FrameScheduler<S> {
        &self.scheduler
    }

    /// Fresh particle batch and a black surface, same size
    pub fn reset(&mut self) {
        debug!("reset");
        self.sim.reinitialize(&self.config);
        self.renderer.clear();
    }

    /// Advance and paint one frame, with no scheduler involvement
    pub fn tick(&mut self) -> CanvasResult<()> {
        let (w, h) = (self.sim.width(), self.sim.height());
        if w == 0 || h == 0 {
            return Err(CanvasError::SurfaceUnavailable { width: w, height: h });
        }

        let config = &self.config;
        self.renderer.fade(config);
        // ripples are drawn before they grow
        self.renderer.draw_ripples(self.sim.ripples(), config);
        self.sim.step(config, &self.pointer);
        self.renderer.draw_links(self.sim.particles(), &self.pointer, config);
        self.renderer.draw_particles(self.sim.particles(), config);

        self.frame += 1;
        Ok(())
    }

    /// Scheduler callback: run one frame if the loop is still running
    pub fn on_frame(&mut self) -> CanvasResult<()> {
        self.on_frame_with(|_| Ok(()))
    }

    /// As `on_frame`, handing the finished raster to `present`
    pub fn on_frame_with<F>(&mut self, present: F) -> CanvasResult<()>
    where
        F: FnOnce(&Raster) -> CanvasResult<()>,
    {
        if !self.scheduler.begin_frame() {
            return Ok(());
        }
        let result = self.tick().and_then(|()| present(self.renderer.raster()));
        self.scheduler.end_frame(result)
    }

    /// Frames painted since creation
    pub fn frame_count(&self) -> u64 {
        self.frame
    }

    pub fn simulation(&self) -> &Simulation {
        &self.sim
    }

    pub fn raster(&self) -> &Raster {
        self.renderer.raster()
    }

    /// Copy of the current frame
    pub fn snapshot_frame(&self) -> CanvasResult<RgbaImage> {
        let raster = self.renderer.raster();
        RgbaImage::from_raw(raster.width(), raster.height(), raster.pixels().to_vec())
            .filter(|_| !raster.is_empty())
            .ok_or(CanvasError::SurfaceUnavailable {
                width: raster.width(),
                height: raster.height(),
            })
    }

    /// Tick-and-snapshot sequence for a video encoder to consume
    pub fn frames(&mut self) -> FrameStream<'_, S> {
        FrameStream { canvas: self }
    }
}

/// Endless stream of frames; ends when the surface cannot be drawn
pub struct FrameStream<'a, S: FrameSource> {
    canvas: &'a mut ParticleCanvas<S>,
}

impl<S: FrameSource> Iterator for FrameStream<'_, S> {
    type Item = RgbaImage;

    fn next(&mut self) -> Option<RgbaImage> {
        match self.canvas.tick().and_then(|()| self.canvas.snapshot_frame()) {
            Ok(frame) => Some(frame),
            Err(err) => {
                warn!(%err, "frame stream ended");
                None
            }
        }
    }
}

/// PNG bytes for a snapshot
pub fn encode_png(frame: &RgbaImage) -> CanvasResult<Vec<u8>> {
    let mut out = Vec::new();
    PngEncoder::new(&mut out).write_image(
        frame.as_raw(),
        frame.width(),
        frame.height(),
        ExtendedColorType::Rgba8,
    )?;
    Ok(out)
}
