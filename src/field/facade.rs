use wasm_bindgen::prelude::*;
use web_sys::CanvasRenderingContext2d;

use crate::core::random::seed_from_environment;
use crate::domain::SiteConfig;

use super::ParticleFieldCore;

#[wasm_bindgen]
pub struct ParticleField {
    core: ParticleFieldCore,
}

#[wasm_bindgen]
impl ParticleField {
    /// Create a field sized to the viewport (height gets the cover multiplier)
    #[wasm_bindgen(constructor)]
    pub fn new(viewport_width: u32, viewport_height: u32) -> Self {
        Self {
            core: ParticleFieldCore::new(viewport_width, viewport_height, seed_from_environment()),
        }
    }

    /// Deterministic field, for tests and screenshots
    #[wasm_bindgen(js_name = withSeed)]
    pub fn with_seed(viewport_width: u32, viewport_height: u32, seed: u32) -> Self {
        Self {
            core: ParticleFieldCore::new(viewport_width, viewport_height, seed),
        }
    }

    /// Field tuned by a site config JSON document
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(viewport_width: u32, viewport_height: u32, config_json: &str) -> Result<ParticleField, JsValue> {
        let config = SiteConfig::from_json(config_json).map_err(|e| JsValue::from_str(&e))?;
        Ok(Self {
            core: ParticleFieldCore::with_config(
                viewport_width,
                viewport_height,
                seed_from_environment(),
                config.field,
            ),
        })
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 { self.core.width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 { self.core.height() }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> usize { self.core.particle_count() }

    /// Returns true if the particle set was rebuilt (tier changed)
    pub fn resize(&mut self, viewport_width: u32, viewport_height: u32) -> bool {
        self.core.resize(viewport_width, viewport_height)
    }

    pub fn set_pointer(&mut self, x: f32, y: f32) {
        self.core.set_pointer(x, y);
    }

    pub fn clear_pointer(&mut self) {
        self.core.clear_pointer();
    }

    /// Step the field forward one animation frame
    pub fn step(&mut self) {
        self.core.step();
    }

    /// Render the last stepped frame
    pub fn draw(&self, ctx: &CanvasRenderingContext2d) -> Result<(), JsValue> {
        self.core.draw(ctx)
    }

    pub fn connection_opacity(&self, distance: f32) -> f32 {
        self.core.connection_opacity(distance)
    }

    /// Get pointer to circle buffer (`[x, y, r]` triples, for JS rendering)
    pub fn circles_ptr(&self) -> *const f32 {
        self.core.circles().as_ptr()
    }

    /// Circle buffer length in f32 elements
    pub fn circles_len(&self) -> usize {
        self.core.circles().len()
    }

    /// Get pointer to line buffer (`[x1, y1, x2, y2, alpha]` records)
    pub fn lines_ptr(&self) -> *const f32 {
        self.core.lines().as_ptr()
    }

    /// Line buffer length in f32 elements
    pub fn lines_len(&self) -> usize {
        self.core.lines().len()
    }

    pub fn line_count(&self) -> usize {
        self.core.line_count()
    }

    /// Enable or disable per-step timing (adds overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    pub fn last_step_ms(&self) -> f64 {
        self.core.last_step_ms()
    }
}

impl ParticleField {
    pub fn core(&self) -> &ParticleFieldCore {
        &self.core
    }
}
