use wasm_bindgen::prelude::*;

use crate::domain::WidgetConfig;

use super::widget_config_from_json;

/// One-shot reveal-on-scroll state for a fixed list of elements.
/// Once revealed an element stays revealed and needs no more observation.
#[wasm_bindgen]
pub struct RevealTracker {
    revealed: Vec<bool>,
    threshold: f32,
}

#[wasm_bindgen]
impl RevealTracker {
    #[wasm_bindgen(constructor)]
    pub fn new(count: usize) -> Self {
        Self::with_config(count, &WidgetConfig::default())
    }

    /// Tracker using `widgets.reveal_threshold` from a site config document
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config_json(count: usize, config_json: &str) -> Result<RevealTracker, JsValue> {
        let config = widget_config_from_json(config_json)?;
        Ok(Self::with_config(count, &config))
    }

    #[wasm_bindgen(js_name = withThreshold)]
    pub fn with_threshold(count: usize, threshold: f32) -> Self {
        Self {
            revealed: vec![false; count],
            threshold,
        }
    }

    /// Feed an intersection ratio. True only on the first reveal, so the
    /// caller knows to add `reveal-active` and unobserve.
    pub fn observe(&mut self, index: usize, intersection_ratio: f32) -> bool {
        let Some(revealed) = self.revealed.get_mut(index) else {
            return false;
        };
        if *revealed || intersection_ratio <= 0.0 || intersection_ratio < self.threshold {
            return false;
        }
        *revealed = true;
        true
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    /// Elements still waiting to be revealed
    pub fn pending(&self) -> usize {
        self.revealed.iter().filter(|r| !**r).count()
    }
}

impl RevealTracker {
    pub fn with_config(count: usize, config: &WidgetConfig) -> Self {
        Self::with_threshold(count, config.reveal_threshold)
    }
}
