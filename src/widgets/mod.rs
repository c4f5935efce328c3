//! Widgets - small page behaviours kept as plain state
//!
//! Each type mirrors one control on the page. The JS side forwards events in
//! and copies the resulting flags/labels onto the DOM.

mod audio;
mod clipboard;
mod picker;
mod reveal;
mod scroll_nav;
mod sticky;

use wasm_bindgen::JsValue;

use crate::domain::{SiteConfig, WidgetConfig};

pub use audio::{AudioCommand, AudioTransport};
pub use clipboard::CopyFeedback;
pub use picker::ProjectPicker;
pub use reveal::RevealTracker;
pub use scroll_nav::ScrollNav;
pub use sticky::StickyContact;

/// Widget section of a site config document, errors ready for JS
fn widget_config_from_json(config_json: &str) -> Result<WidgetConfig, JsValue> {
    SiteConfig::from_json(config_json)
        .map(|config| config.widgets)
        .map_err(|e| JsValue::from_str(&e))
}
