//! Stardust Engine - client-side behaviour of the portfolio site, in WASM
//!
//! Architecture:
//! - core/      - logging macros, RNG, clock, geometry
//! - domain/    - site configuration
//! - field/     - animated particle background
//! - carousel/  - slide transition state machine
//! - widgets/   - reveal, sticky button, copy email, picker, audio

// Macros first so every later module can log
#[macro_use]
pub mod core;
pub mod domain;
pub mod field;
pub mod carousel;
pub mod widgets;

use wasm_bindgen::prelude::*;

#[doc(hidden)]
pub use web_sys as __web_sys;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    console_log!("✨ Stardust engine initialized");
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Default site configuration as JSON (starting point for overrides)
#[wasm_bindgen]
pub fn default_config_json() -> String {
    domain::SiteConfig::default().to_json()
}

// Re-export main types
pub use carousel::{Carousel, CarouselCore, Direction, SlideEffect, SlideState};
pub use domain::SiteConfig;
pub use field::{Particle, ParticleField, ParticleFieldCore};
pub use widgets::{
    AudioCommand, AudioTransport, CopyFeedback, ProjectPicker, RevealTracker, ScrollNav,
    StickyContact,
};
