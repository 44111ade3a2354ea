//! Adapter from scroll container telemetry to indicator page positions

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Instant;

use tracing::debug;

use crate::indicator::{PageIndicator, SharedIndicator};

/// Snapshot of a horizontal scroll container
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollTelemetry {
    /// Horizontal content offset in points
    pub offset_x: f32,
    /// Visible width of the container, one page
    pub container_width: f32,
    /// Translation of the active drag gesture along x, positive towards the start
    pub translation_x: f32,
    /// When the container moved; `None` means now
    pub timestamp: Option<Instant>,
}

impl ScrollTelemetry {
    /// Continuous page under the viewport, `None` for a container without width
    pub fn page(&self) -> Option<f32> {
        if self.container_width.is_nan() || self.container_width <= 0.0 {
            return None;
        }
        let offset = self.offset_x.max(0.0);
        Some(offset / self.container_width)
    }

    /// Stamp the snapshot with the frame clock of the container
    pub fn at(mut self, now: Instant) -> Self {
        self.timestamp = Some(now);
        self
    }
}

/// Hooks a scroll container calls while it moves
pub trait ScrollDelegate {
    fn did_scroll(&self, telemetry: &ScrollTelemetry);

    fn did_end_dragging(&self, telemetry: &ScrollTelemetry, will_decelerate: bool);

    fn did_end_decelerating(&self, telemetry: &ScrollTelemetry);
}

/// Feeds scroll positions into a page indicator it does not own.
///
/// Once the indicator is dropped every update is silently discarded.
#[derive(Debug, Clone, Default)]
pub struct ScrollBridge {
    indicator: Option<Weak<RefCell<PageIndicator>>>,
}

impl ScrollBridge {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attached(indicator: &SharedIndicator) -> Self {
        let mut bridge = Self::new();
        bridge.attach(indicator);
        bridge
    }

    pub fn attach(&mut self, indicator: &SharedIndicator) {
        self.indicator = Some(Rc::downgrade(indicator));
    }

    pub fn detach(&mut self) {
        self.indicator = None;
    }

    /// Check if the driven indicator is still alive
    pub fn is_attached(&self) -> bool {
        self.indicator
            .as_ref()
            .is_some_and(|weak| weak.strong_count() > 0)
    }

    fn push(&self, page: f32, telemetry: &ScrollTelemetry) {
        let now = telemetry.timestamp.unwrap_or_else(Instant::now);
        let Some(indicator) = self.indicator.as_ref().and_then(Weak::upgrade) else {
            debug!(page, "No indicator attached, dropping page update");
            return;
        };
        match indicator.try_borrow_mut() {
            Ok(mut indicator) => indicator.set_current_page_at(page, now),
            Err(_) => debug!(page, "Indicator busy, dropping page update"),
        };
    }

    fn snap(&self, telemetry: &ScrollTelemetry) {
        if let Some(page) = telemetry.page() {
            self.push(page.ceil(), telemetry);
        }
    }
}

impl ScrollDelegate for ScrollBridge {
    fn did_scroll(&self, telemetry: &ScrollTelemetry) {
        let Some(page) = telemetry.page() else {
            return;
        };
        // Dragging towards the start reports a negative page
        if telemetry.translation_x > 0.0 {
            self.push(-page, telemetry);
        } else {
            self.push(page, telemetry);
        }
    }

    fn did_end_dragging(&self, telemetry: &ScrollTelemetry, _will_decelerate: bool) {
        self.snap(telemetry);
    }

    fn did_end_decelerating(&self, telemetry: &ScrollTelemetry) {
        self.snap(telemetry);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::IndicatorConfig;

    fn telemetry(page: f32, translation_x: f32) -> ScrollTelemetry {
        ScrollTelemetry {
            offset_x: page * 320.0,
            container_width: 320.0,
            translation_x,
            timestamp: None,
        }
    }

    fn shared(pages: usize) -> SharedIndicator {
        let indicator = PageIndicator::shared(IndicatorConfig::default());
        indicator.borrow_mut().set_number_of_pages(pages);
        indicator
    }

    #[test]
    fn test_page_from_offset() {
        assert_eq!(telemetry(1.5, 0.0).page(), Some(1.5));

        let negative = ScrollTelemetry {
            offset_x: -40.0,
            container_width: 320.0,
            translation_x: 0.0,
            timestamp: None,
        };
        assert_eq!(negative.page(), Some(0.0));

        let collapsed = ScrollTelemetry::default();
        assert_eq!(collapsed.page(), None);
    }

    #[test]
    fn test_forward_drag_pushes_positive_page() {
        let indicator = shared(5);
        let bridge = ScrollBridge::attached(&indicator);

        bridge.did_scroll(&telemetry(1.25, -30.0));
        assert_eq!(indicator.borrow().current_page(), 1.25);
    }

    #[test]
    fn test_backward_drag_pushes_negative_page() {
        let indicator = shared(5);
        let bridge = ScrollBridge::attached(&indicator);

        bridge.did_scroll(&telemetry(1.25, 30.0));
        assert_eq!(indicator.borrow().current_page(), -1.25);
    }

    #[test]
    fn test_drag_end_snaps_to_next_page() {
        let indicator = shared(5);
        let bridge = ScrollBridge::attached(&indicator);

        let end = ScrollTelemetry {
            offset_x: 384.0,
            container_width: 320.0,
            translation_x: 0.0,
            timestamp: None,
        };
        bridge.did_end_dragging(&end, true);
        assert_eq!(indicator.borrow().current_page(), 2.0);
    }

    #[test]
    fn test_deceleration_end_snaps() {
        let indicator = shared(5);
        let bridge = ScrollBridge::attached(&indicator);

        bridge.did_end_decelerating(&telemetry(3.0, 0.0));
        assert_eq!(indicator.borrow().current_page(), 3.0);
    }

    #[test]
    fn test_dropped_indicator_is_a_no_op() {
        let indicator = shared(3);
        let bridge = ScrollBridge::attached(&indicator);
        assert!(bridge.is_attached());

        drop(indicator);
        assert!(!bridge.is_attached());
        bridge.did_scroll(&telemetry(1.0, 0.0));
        bridge.did_end_dragging(&telemetry(1.0, 0.0), false);
    }

    #[test]
    fn test_detached_bridge_leaves_indicator_alone() {
        let indicator = shared(3);
        let mut bridge = ScrollBridge::attached(&indicator);
        bridge.detach();

        bridge.did_scroll(&telemetry(2.0, 0.0));
        assert_eq!(indicator.borrow().current_page(), 0.0);
    }

    #[test]
    fn test_zero_width_container_is_ignored() {
        let indicator = shared(3);
        let bridge = ScrollBridge::attached(&indicator);

        bridge.did_scroll(&ScrollTelemetry {
            offset_x: 100.0,
            container_width: 0.0,
            translation_x: 0.0,
            timestamp: None,
        });
        assert_eq!(indicator.borrow().current_page(), 0.0);
    }

    #[test]
    fn test_page_write_follows_telemetry_clock() {
        let config = IndicatorConfig::default();
        let frame = Instant::now() + std::time::Duration::from_secs(10);
        let indicator = PageIndicator::shared(config.clone());
        indicator.borrow_mut().set_number_of_pages_at(3, frame);
        indicator.borrow_mut().settle();
        let bridge = ScrollBridge::attached(&indicator);

        bridge.did_end_decelerating(&telemetry(1.0, 0.0).at(frame));

        // halfway through a settle that started at the stamped frame
        let mut indicator = indicator.borrow_mut();
        indicator.update_at(frame + std::time::Duration::from_millis(250));
        let width = indicator.segments()[1].displayed_width();
        assert!(width > config.min_item_width, "width {}", width);
        assert!(width < config.max_item_width, "width {}", width);
    }
}
