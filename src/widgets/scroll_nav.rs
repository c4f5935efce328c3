use wasm_bindgen::prelude::*;

use crate::domain::WidgetConfig;

use super::widget_config_from_json;

/// Arrow controls of the horizontally scrolling picker nav
#[wasm_bindgen]
pub struct ScrollNav {
    scroll_amount: f32,
    tolerance: f32,
    dimmed_opacity: f32,
    at_start: bool,
    at_end: bool,
}

#[wasm_bindgen]
impl ScrollNav {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::with_config(&WidgetConfig::default())
    }

    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config_json(config_json: &str) -> Result<ScrollNav, JsValue> {
        let config = widget_config_from_json(config_json)?;
        Ok(Self::with_config(&config))
    }

    /// Horizontal delta for the prev arrow
    pub fn prev_offset(&self) -> f32 {
        -self.scroll_amount
    }

    /// Horizontal delta for the next arrow
    pub fn next_offset(&self) -> f32 {
        self.scroll_amount
    }

    /// Recompute edge state from the container's scroll metrics
    pub fn update(&mut self, scroll_left: f32, scroll_width: f32, client_width: f32) {
        self.at_start = scroll_left <= self.tolerance;
        self.at_end = (scroll_width - client_width - scroll_left).abs() <= self.tolerance;
    }

    #[wasm_bindgen(getter)]
    pub fn at_start(&self) -> bool { self.at_start }

    #[wasm_bindgen(getter)]
    pub fn at_end(&self) -> bool { self.at_end }

    pub fn prev_enabled(&self) -> bool { !self.at_start }

    pub fn next_enabled(&self) -> bool { !self.at_end }

    pub fn prev_opacity(&self) -> f32 {
        if self.at_start { self.dimmed_opacity } else { 1.0 }
    }

    pub fn next_opacity(&self) -> f32 {
        if self.at_end { self.dimmed_opacity } else { 1.0 }
    }
}

impl ScrollNav {
    pub fn with_config(config: &WidgetConfig) -> Self {
        Self {
            scroll_amount: config.scroll_amount,
            tolerance: config.edge_tolerance,
            dimmed_opacity: config.dimmed_opacity,
            at_start: true,
            at_end: false,
        }
    }
}

impl Default for ScrollNav {
    fn default() -> Self {
        Self::new()
    }
}
