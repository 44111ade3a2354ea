//! Animation atoms shared by the indicator and the demo host
//!
//! - `easing` - pure easing curves mapping [0, 1] to [0, 1]
//! - `timing` - progress and interpolation helpers

pub mod easing;
pub mod timing;

pub use easing::EasingType;
pub use timing::{is_complete, lerp, progress};
