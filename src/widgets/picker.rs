use wasm_bindgen::prelude::*;

/// Client project picker: nav buttons keyed by `data-target`, media panels
/// keyed by `data-id`. Selecting a button activates it alone plus every panel
/// with the same key.
#[wasm_bindgen]
#[derive(Default)]
pub struct ProjectPicker {
    button_keys: Vec<String>,
    panel_keys: Vec<String>,
    active_button: Option<usize>,
    active_panels: Vec<bool>,
}

#[wasm_bindgen]
impl ProjectPicker {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the button index
    pub fn add_button(&mut self, target_key: &str) -> usize {
        self.button_keys.push(target_key.to_string());
        self.button_keys.len() - 1
    }

    /// Returns the panel index
    pub fn add_panel(&mut self, id: &str) -> usize {
        self.panel_keys.push(id.to_string());
        self.active_panels.push(false);
        self.panel_keys.len() - 1
    }

    /// The page only wires the picker when both sides exist
    pub fn is_ready(&self) -> bool {
        !self.button_keys.is_empty() && !self.panel_keys.is_empty()
    }

    /// Click on a button. Returns the number of panels now active.
    pub fn select(&mut self, button: usize) -> usize {
        let Some(key) = self.button_keys.get(button) else {
            return self.active_panel_count();
        };
        self.active_button = Some(button);
        for (active, panel_key) in self.active_panels.iter_mut().zip(&self.panel_keys) {
            *active = panel_key == key;
        }
        self.active_panel_count()
    }

    pub fn is_button_active(&self, button: usize) -> bool {
        self.active_button == Some(button)
    }

    pub fn is_panel_active(&self, panel: usize) -> bool {
        self.active_panels.get(panel).copied().unwrap_or(false)
    }

    pub fn active_key(&self) -> Option<String> {
        self.active_button.and_then(|b| self.button_keys.get(b).cloned())
    }

    fn active_panel_count(&self) -> usize {
        self.active_panels.iter().filter(|a| **a).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn picker() -> ProjectPicker {
        let mut p = ProjectPicker::new();
        for key in ["alpha", "beta", "gamma"] {
            p.add_button(key);
            p.add_panel(key);
        }
        p
    }

    #[test]
    fn selection_is_mutually_exclusive() {
        let mut p = picker();
        assert_eq!(p.select(1), 1);
        assert!(p.is_button_active(1));
        assert!(p.is_panel_active(1));

        assert_eq!(p.select(2), 1);
        assert!(!p.is_button_active(1));
        assert!(!p.is_panel_active(1));
        assert!(p.is_panel_active(2));
        assert_eq!(p.active_key().as_deref(), Some("gamma"));
    }

    #[test]
    fn button_without_panel_clears_all_panels() {
        let mut p = picker();
        p.select(0);
        let orphan = p.add_button("delta");
        assert_eq!(p.select(orphan), 0);
        assert!(p.is_button_active(orphan));
        assert!((0..3).all(|i| !p.is_panel_active(i)));
    }

    #[test]
    fn out_of_range_button_changes_nothing() {
        let mut p = picker();
        p.select(0);
        assert_eq!(p.select(9), 1);
        assert!(p.is_button_active(0));
    }

    #[test]
    fn not_ready_without_panels() {
        let mut p = ProjectPicker::new();
        p.add_button("alpha");
        assert!(!p.is_ready());
        p.add_panel("alpha");
        assert!(p.is_ready());
    }
}
