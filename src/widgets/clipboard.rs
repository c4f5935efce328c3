use wasm_bindgen::prelude::*;

use crate::domain::WidgetConfig;

use super::widget_config_from_json;

/// Label state of the footer "Copy Email" button.
///
/// The page does the actual `navigator.clipboard.writeText`; this tracks the
/// temporary "Copied!" label and builds the `mailto:` fallback.
#[wasm_bindgen]
pub struct CopyFeedback {
    email: String,
    copy_label: String,
    copied_label: String,
    feedback_ms: f64,
    copied_until: Option<f64>,
}

#[wasm_bindgen]
impl CopyFeedback {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::with_config(&WidgetConfig::default())
    }

    /// Feedback using the email parts and labels from a site config document
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config_json(config_json: &str) -> Result<CopyFeedback, JsValue> {
        let config = widget_config_from_json(config_json)?;
        Ok(Self::with_config(&config))
    }

    /// Address assembled from parts so it never appears whole in the page source
    #[wasm_bindgen(getter)]
    pub fn email(&self) -> String {
        self.email.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn label(&self) -> String {
        if self.is_copied() {
            self.copied_label.clone()
        } else {
            self.copy_label.clone()
        }
    }

    pub fn is_copied(&self) -> bool {
        self.copied_until.is_some()
    }

    /// Clipboard write resolved. A repeat click restarts the feedback window.
    pub fn copy_succeeded(&mut self, now_ms: f64) {
        self.copied_until = Some(now_ms + self.feedback_ms);
    }

    /// Clipboard write rejected: returns the URL to navigate to instead
    pub fn copy_failed(&mut self) -> String {
        console_warn!("stardust: clipboard write failed, falling back to mailto");
        self.mailto_url()
    }

    pub fn mailto_url(&self) -> String {
        format!("mailto:{}", self.email)
    }

    /// Returns true when the label just reverted
    pub fn tick(&mut self, now_ms: f64) -> bool {
        match self.copied_until {
            Some(until) if now_ms >= until => {
                self.copied_until = None;
                true
            }
            _ => false,
        }
    }
}

impl CopyFeedback {
    pub fn with_config(config: &WidgetConfig) -> Self {
        Self {
            email: format!("{}@{}", config.email_user, config.email_domain),
            copy_label: config.copy_label.clone(),
            copied_label: config.copied_label.clone(),
            feedback_ms: config.feedback_ms,
            copied_until: None,
        }
    }
}

impl Default for CopyFeedback {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_shows_copied_for_feedback_window() {
        let mut fb = CopyFeedback::new();
        assert_eq!(fb.label(), "Copy Email");

        fb.copy_succeeded(1000.0);
        assert_eq!(fb.label(), "Copied!");
        assert!(!fb.tick(2999.0));
        assert!(fb.tick(3000.0));
        assert_eq!(fb.label(), "Copy Email");
        assert!(!fb.tick(5000.0));
    }

    #[test]
    fn repeat_click_extends_window() {
        let mut fb = CopyFeedback::new();
        fb.copy_succeeded(0.0);
        fb.copy_succeeded(1500.0);
        assert!(!fb.tick(2000.0));
        assert!(fb.tick(3500.0));
    }

    #[test]
    fn failure_falls_back_to_mailto() {
        let mut fb = CopyFeedback::new();
        assert_eq!(fb.email(), "rasmus.sjoborg@gmail.com");
        assert_eq!(fb.copy_failed(), "mailto:rasmus.sjoborg@gmail.com");
        assert!(!fb.is_copied());
    }

    #[test]
    fn configured_address_and_window() {
        let json = r#"{"widgets":{"email_user":"hello","email_domain":"example.org","feedback_ms":500.0,"copied_label":"Done"}}"#;
        let mut fb = CopyFeedback::with_config_json(json).expect("config should parse");
        assert_eq!(fb.email(), "hello@example.org");
        assert_eq!(fb.mailto_url(), "mailto:hello@example.org");

        fb.copy_succeeded(0.0);
        assert_eq!(fb.label(), "Done");
        assert!(fb.tick(500.0));
        assert_eq!(fb.label(), "Copy Email");
    }
}
