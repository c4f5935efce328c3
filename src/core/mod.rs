//! Core helpers shared by every component: logging, RNG, clock, geometry

// Macros first so later modules can use them
#[macro_use]
#[path = "utils/logging.rs"]
pub mod logging;
#[path = "utils/random.rs"]
pub mod random;
#[path = "utils/timer.rs"]
pub mod timer;
pub mod vec2;

pub use timer::now_ms;
pub(crate) use timer::PerfTimer;
pub use vec2::Vec2;
