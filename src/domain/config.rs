//! Site configuration
//!
//! Every tunable the page behaviour depends on lives here. Defaults match the
//! shipped site; a JSON document may override any subset of fields.

use serde::{Deserialize, Serialize};

pub const MOBILE_BREAKPOINT: u32 = 768;
pub const MOBILE_PARTICLE_COUNT: usize = 50;
pub const DESKTOP_PARTICLE_COUNT: usize = 120;
/// Field covers the hero plus the section below it
pub const HEIGHT_MULTIPLIER: f32 = 1.3;
pub const VELOCITY_SPREAD: f32 = 0.5;
pub const MAX_RADIUS: f32 = 1.5;
pub const INTERACTION_RADIUS: f32 = 200.0;
pub const PUSH_STRENGTH: f32 = 1.5;
pub const CONNECTION_DISTANCE: f32 = 150.0;
pub const CONNECTION_DIMMING: f32 = 0.15;

pub const TRANSITION_MS: f64 = 600.0;

pub const REVEAL_THRESHOLD: f32 = 0.1;
pub const FEEDBACK_MS: f64 = 2000.0;
pub const PICKER_SCROLL_AMOUNT: f32 = 200.0;
pub const PICKER_EDGE_TOLERANCE: f32 = 5.0;
pub const DIMMED_OPACITY: f32 = 0.3;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    pub mobile_breakpoint: u32,
    pub mobile_count: usize,
    pub desktop_count: usize,
    pub height_multiplier: f32,
    /// Each velocity component is drawn from `[-spread/2, spread/2)`
    pub velocity_spread: f32,
    pub max_radius: f32,
    pub interaction_radius: f32,
    pub push_strength: f32,
    pub connection_distance: f32,
    pub connection_dimming: f32,
    pub particle_color: String,
    /// `r, g, b` triple used for connection strokes
    pub line_rgb: String,
    pub line_width: f32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            mobile_breakpoint: MOBILE_BREAKPOINT,
            mobile_count: MOBILE_PARTICLE_COUNT,
            desktop_count: DESKTOP_PARTICLE_COUNT,
            height_multiplier: HEIGHT_MULTIPLIER,
            velocity_spread: VELOCITY_SPREAD,
            max_radius: MAX_RADIUS,
            interaction_radius: INTERACTION_RADIUS,
            push_strength: PUSH_STRENGTH,
            connection_distance: CONNECTION_DISTANCE,
            connection_dimming: CONNECTION_DIMMING,
            particle_color: "rgba(255, 255, 255, 0.6)".to_string(),
            line_rgb: "255, 255, 255".to_string(),
            line_width: 1.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    /// Must match the CSS transition length
    pub transition_ms: f64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self { transition_ms: TRANSITION_MS }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    pub reveal_threshold: f32,
    pub email_user: String,
    pub email_domain: String,
    pub copy_label: String,
    pub copied_label: String,
    pub feedback_ms: f64,
    pub scroll_amount: f32,
    pub edge_tolerance: f32,
    pub dimmed_opacity: f32,
    pub audio_label: String,
    pub audio_error_label: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            reveal_threshold: REVEAL_THRESHOLD,
            email_user: "rasmus.sjoborg".to_string(),
            email_domain: "gmail.com".to_string(),
            copy_label: "Copy Email".to_string(),
            copied_label: "Copied!".to_string(),
            feedback_ms: FEEDBACK_MS,
            scroll_amount: PICKER_SCROLL_AMOUNT,
            edge_tolerance: PICKER_EDGE_TOLERANCE,
            dimmed_opacity: DIMMED_OPACITY,
            audio_label: "Listen to the brief (3 min)".to_string(),
            audio_error_label: "Audio not active".to_string(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub field: FieldConfig,
    pub carousel: CarouselConfig,
    pub widgets: WidgetConfig,
}

impl SiteConfig {
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: SiteConfig = serde_json::from_str(json).map_err(|e| e.to_string())?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn validate(&self) -> Result<(), String> {
        let f = &self.field;
        if f.mobile_count == 0 || f.desktop_count == 0 {
            return Err("field: particle counts must be positive".to_string());
        }
        if !(f.height_multiplier > 0.0) {
            return Err(format!("field: height_multiplier must be > 0, got {}", f.height_multiplier));
        }
        if !(f.interaction_radius > 0.0) {
            return Err(format!("field: interaction_radius must be > 0, got {}", f.interaction_radius));
        }
        if !(f.connection_distance > 0.0) {
            return Err(format!("field: connection_distance must be > 0, got {}", f.connection_distance));
        }
        if f.velocity_spread < 0.0 || f.max_radius < 0.0 {
            return Err("field: velocity_spread and max_radius must not be negative".to_string());
        }
        if !(self.carousel.transition_ms >= 0.0) {
            return Err("carousel: transition_ms must not be negative".to_string());
        }
        if self.widgets.email_user.is_empty() || self.widgets.email_domain.is_empty() {
            return Err("widgets: email parts must not be empty".to_string());
        }
        Ok(())
    }
}
