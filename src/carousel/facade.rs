use wasm_bindgen::prelude::*;

use crate::core::now_ms;
use crate::domain::SiteConfig;

use super::{CarouselCore, Direction, SlideEffect, SlideState};

fn effects_json(effects: &[SlideEffect]) -> String {
    serde_json::to_string(effects).unwrap_or_else(|_| "[]".to_string())
}

/// Carousel bound to the engine clock. Effect lists are returned as JSON
/// arrays of `{"kind": "set_state" | "force_reflow" | "set_height", ...}`.
#[wasm_bindgen]
pub struct Carousel {
    core: CarouselCore,
}

#[wasm_bindgen]
impl Carousel {
    #[wasm_bindgen(constructor)]
    pub fn new(slide_count: usize) -> Result<Carousel, JsValue> {
        let core = CarouselCore::new(slide_count).map_err(|e| JsValue::from_str(&e))?;
        Ok(Self { core })
    }

    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(slide_count: usize, config_json: &str) -> Result<Carousel, JsValue> {
        let config = SiteConfig::from_json(config_json).map_err(|e| JsValue::from_str(&e))?;
        let core = CarouselCore::with_config(slide_count, &config.carousel)
            .map_err(|e| JsValue::from_str(&e))?;
        Ok(Self { core })
    }

    #[wasm_bindgen(getter)]
    pub fn current(&self) -> usize { self.core.current() }

    #[wasm_bindgen(getter)]
    pub fn len(&self) -> usize { self.core.len() }

    #[wasm_bindgen(getter)]
    pub fn is_animating(&self) -> bool { self.core.is_animating() }

    #[wasm_bindgen(getter)]
    pub fn container_height(&self) -> f32 { self.core.container_height() }

    /// Down button. `undefined` when a transition is already running.
    pub fn next(&mut self) -> Option<String> {
        self.core.next(now_ms()).map(|e| effects_json(&e))
    }

    /// Up button
    pub fn prev(&mut self) -> Option<String> {
        self.core.prev(now_ms()).map(|e| effects_json(&e))
    }

    pub fn navigate(&mut self, direction: Direction, target: usize) -> Option<String> {
        self.core.navigate(direction, target, now_ms()).map(|e| effects_json(&e))
    }

    /// Call from the frame loop or a timeout; completes once 600ms have passed
    pub fn tick(&mut self) -> String {
        effects_json(&self.core.tick(now_ms()))
    }

    /// Event-driven completion (`transitionend` on the entering slide)
    pub fn finish_transition(&mut self) -> String {
        effects_json(&self.core.finish_transition())
    }

    pub fn set_slide_height(&mut self, slide: usize, height: f32) -> bool {
        self.core.set_slide_height(slide, height)
    }

    /// Current slide height in px, re-applied to the container
    pub fn refresh_height(&mut self) -> Option<f32> {
        self.core.refresh_height().map(|_| self.core.container_height())
    }

    /// Idle for out-of-range slides
    pub fn slide_state(&self, slide: usize) -> SlideState {
        self.core.state(slide).unwrap_or(SlideState::Idle)
    }

    /// CSS class for a slide, empty when idle
    pub fn slide_class(&self, slide: usize) -> String {
        self.slide_state(slide).class_name().unwrap_or("").to_string()
    }
}

impl Carousel {
    pub fn core(&self) -> &CarouselCore {
        &self.core
    }
}
