use wasm_bindgen::prelude::*;

/// Floating contact button: shown as soon as the page leaves the top
#[wasm_bindgen]
#[derive(Default)]
pub struct StickyContact {
    visible: bool,
}

#[wasm_bindgen]
impl StickyContact {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the new visibility
    pub fn on_scroll(&mut self, scroll_y: f64) -> bool {
        self.visible = scroll_y > 0.0;
        self.visible
    }

    #[wasm_bindgen(getter)]
    pub fn visible(&self) -> bool {
        self.visible
    }
}
