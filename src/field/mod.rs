//! Particle Field - ambient animated background
//!
//! A fixed-size set of drifting points that bounce off the field edges, get
//! nudged away from the pointer, and are linked by faint lines when close.
//!
//! - init/    - allocation and the mobile/desktop tier check
//! - step/    - per-frame motion
//! - render/  - flat buffers for JS and the canvas renderer

use crate::core::{PerfTimer, Vec2};
use crate::domain::FieldConfig;

mod particle;
#[path = "init/init.rs"]
mod init;
#[path = "step/step.rs"]
mod step;
#[path = "render/render_extract.rs"]
mod render_extract;
#[path = "render/canvas.rs"]
mod canvas;
mod facade;

pub use facade::ParticleField;
pub use particle::Particle;
pub use render_extract::{connection_opacity, CIRCLE_STRIDE, LINE_STRIDE};

/// Flat buffers rebuilt after every step (read by JS via pointers)
pub(crate) struct RenderBuffers {
    /// `[x, y, radius]` per particle
    pub(crate) circles: Vec<f32>,
    /// `[x1, y1, x2, y2, alpha]` per connected pair
    pub(crate) lines: Vec<f32>,
}

/// Owns the particle set and everything needed to move and draw it
pub struct ParticleFieldCore {
    config: FieldConfig,

    // Viewport (height already scaled by the multiplier)
    width: u32,
    height: u32,
    pointer: Option<Vec2>,

    particles: Vec<Particle>,
    rng_state: u32,
    frame: u64,
    reallocations: u32,

    render: RenderBuffers,

    perf_enabled: bool,
    last_step_ms: f64,
}

impl ParticleFieldCore {
    /// Create a field for the given viewport with default tuning
    pub fn new(viewport_width: u32, viewport_height: u32, seed: u32) -> Self {
        Self::with_config(viewport_width, viewport_height, seed, FieldConfig::default())
    }

    pub fn with_config(viewport_width: u32, viewport_height: u32, seed: u32, config: FieldConfig) -> Self {
        init::create_field_core(viewport_width, viewport_height, seed, config)
    }

    /// Recompute dimensions and re-run the tier check.
    /// Returns true if the particle set was replaced.
    pub fn resize(&mut self, viewport_width: u32, viewport_height: u32) -> bool {
        init::resize(self, viewport_width, viewport_height)
    }

    /// Particle count for a viewport width (two tiers)
    pub fn target_count(&self, width: u32) -> usize {
        init::target_count(&self.config, width)
    }

    pub fn set_pointer(&mut self, x: f32, y: f32) {
        self.pointer = Some(Vec2::new(x, y));
    }

    /// Pointer left the page: no more repulsion
    pub fn clear_pointer(&mut self) {
        self.pointer = None;
    }

    pub fn pointer(&self) -> Option<Vec2> {
        self.pointer
    }

    /// Advance one animation frame and rebuild the render buffers
    pub fn step(&mut self) {
        if self.perf_enabled {
            let t0 = PerfTimer::start();
            step::step(self);
            render_extract::rebuild(self);
            self.last_step_ms = t0.elapsed_ms();
        } else {
            step::step(self);
            render_extract::rebuild(self);
        }
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn width(&self) -> u32 { self.width }

    pub fn height(&self) -> u32 { self.height }

    pub fn frame(&self) -> u64 { self.frame }

    pub fn particle_count(&self) -> usize { self.particles.len() }

    /// Number of times the particle set has been (re)allocated
    pub fn reallocations(&self) -> u32 { self.reallocations }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Opacity of a connection line at the given pair distance
    pub fn connection_opacity(&self, distance: f32) -> f32 {
        connection_opacity(&self.config, distance)
    }

    pub fn circles(&self) -> &[f32] {
        &self.render.circles
    }

    pub fn lines(&self) -> &[f32] {
        &self.render.lines
    }

    pub fn line_count(&self) -> usize {
        self.render.lines.len() / LINE_STRIDE
    }

    /// Enable or disable step timing
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.perf_enabled = enabled;
        if !enabled {
            self.last_step_ms = 0.0;
        }
    }

    /// Duration of the last step in ms (0 when perf disabled)
    pub fn last_step_ms(&self) -> f64 {
        self.last_step_ms
    }

    /// Draw the current frame onto a 2D canvas context
    pub fn draw(&self, ctx: &web_sys::CanvasRenderingContext2d) -> Result<(), wasm_bindgen::JsValue> {
        canvas::draw(self, ctx)
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
