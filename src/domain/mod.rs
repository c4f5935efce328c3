pub mod config;

pub use config::{CarouselConfig, FieldConfig, SiteConfig, WidgetConfig};
