pub mod animation;
pub mod bridge;
pub mod color;
pub mod config;
pub mod error;
pub mod indicator;

pub use bridge::{ScrollBridge, ScrollDelegate, ScrollTelemetry};
pub use color::Rgb;
pub use config::{AppConfig, EasingType, IndicatorConfig, ScrollConfig};
pub use error::{Error, Result};
pub use indicator::{PageIndicator, Segment, SharedIndicator};
