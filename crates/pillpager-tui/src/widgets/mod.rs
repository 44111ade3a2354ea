mod carousel;
mod page_indicator;
mod status_bar;

pub use carousel::{visible_pages, CarouselWidget};
pub use page_indicator::PageIndicatorWidget;
pub use status_bar::StatusBarWidget;
