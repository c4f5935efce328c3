use wasm_bindgen::prelude::*;

use crate::domain::WidgetConfig;

use super::widget_config_from_json;

/// What the page should do with the `<audio>` element after a click
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AudioCommand {
    Play,
    Pause,
}

/// Hero audio button state. The element itself stays on the JS side.
#[wasm_bindgen]
pub struct AudioTransport {
    playing: bool,
    label: String,
    error_label: String,
    feedback_ms: f64,
    error_until: Option<f64>,
}

#[wasm_bindgen]
impl AudioTransport {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::with_config(&WidgetConfig::default())
    }

    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config_json(config_json: &str) -> Result<AudioTransport, JsValue> {
        let config = widget_config_from_json(config_json)?;
        Ok(Self::with_config(&config))
    }

    /// Button clicked: play when paused, pause when playing
    pub fn toggle(&self) -> AudioCommand {
        if self.playing { AudioCommand::Pause } else { AudioCommand::Play }
    }

    /// `play()` resolved
    pub fn play_started(&mut self) {
        self.playing = true;
    }

    /// `play()` rejected (autoplay policy, missing source)
    pub fn play_failed(&mut self, now_ms: f64) {
        console_warn!("stardust: audio playback failed");
        self.playing = false;
        self.error_until = Some(now_ms + self.feedback_ms);
    }

    pub fn paused(&mut self) {
        self.playing = false;
    }

    pub fn ended(&mut self) {
        self.playing = false;
    }

    /// Returns true when the error label just reverted
    pub fn tick(&mut self, now_ms: f64) -> bool {
        match self.error_until {
            Some(until) if now_ms >= until => {
                self.error_until = None;
                true
            }
            _ => false,
        }
    }

    #[wasm_bindgen(getter)]
    pub fn playing(&self) -> bool {
        self.playing
    }

    /// Always full volume on user-initiated playback
    #[wasm_bindgen(getter)]
    pub fn volume(&self) -> f64 {
        1.0
    }

    #[wasm_bindgen(getter)]
    pub fn label(&self) -> String {
        if self.error_until.is_some() {
            self.error_label.clone()
        } else {
            self.label.clone()
        }
    }

    #[wasm_bindgen(getter)]
    pub fn aria_label(&self) -> String {
        let label = if self.playing { "Pause Intro" } else { "Play Intro" };
        label.to_string()
    }

    /// Progress bar width in percent; `undefined` until the duration is known
    pub fn progress_percent(current_time: f64, duration: f64) -> Option<f64> {
        if !duration.is_finite() || duration <= 0.0 {
            return None;
        }
        Some(current_time / duration * 100.0)
    }
}

impl AudioTransport {
    pub fn with_config(config: &WidgetConfig) -> Self {
        Self {
            playing: false,
            label: config.audio_label.clone(),
            error_label: config.audio_error_label.clone(),
            feedback_ms: config.feedback_ms,
            error_until: None,
        }
    }
}

impl Default for AudioTransport {
    fn default() -> Self {
        Self::new()
    }
}
