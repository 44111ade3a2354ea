//! Simulated paging scroll view for the terminal
//!
//! Easing and timing atoms live in `pillpager_core::animation`; this module
//! combines them into a horizontal pager that reports offsets, drag
//! translation and gesture endings through `ScrollDelegate`.
//!
//! # Usage
//!
//! ```ignore
//! use pillpager_core::{PageIndicator, ScrollBridge, ScrollConfig, IndicatorConfig};
//! use pillpager_tui::scroll::PagerScroll;
//!
//! let indicator = PageIndicator::shared(IndicatorConfig::default());
//! indicator.borrow_mut().set_number_of_pages(5);
//! let bridge = ScrollBridge::attached(&indicator);
//!
//! let mut pager = PagerScroll::new(ScrollConfig::default(), 5);
//! pager.scroll_to_page(1);
//!
//! // In main loop, advance both every frame
//! pager.update(&bridge);
//! indicator.borrow_mut().update();
//! ```

pub mod pager;

pub use pager::PagerScroll;
