//! Horizontal paging scroll container
//!
//! Stands in for a native paging scroll view: it owns the content offset,
//! follows mouse drags, snaps to pages with an eased animation and reports
//! every movement to a [`ScrollDelegate`].

use std::time::{Duration, Instant};

use pillpager_core::animation::timing::{is_complete, lerp, progress};
use pillpager_core::{EasingType, ScrollConfig, ScrollDelegate, ScrollTelemetry};

/// Active snap animation
#[derive(Debug, Clone)]
struct ActiveSnap {
    start: Instant,
    from: f32,
    to: f32,
    duration: Duration,
    easing: EasingType,
}

/// Mouse drag in progress
#[derive(Debug, Clone, Copy)]
struct Drag {
    origin_column: u16,
    origin_offset: f32,
}

#[derive(Debug, Clone)]
pub struct PagerScroll {
    config: ScrollConfig,
    pages: usize,
    /// Content offset in points
    offset: f32,
    /// Last gesture translation, kept through the following deceleration
    translation: f32,
    drag: Option<Drag>,
    snap: Option<ActiveSnap>,
}

impl PagerScroll {
    pub fn new(config: ScrollConfig, pages: usize) -> Self {
        Self {
            config,
            pages,
            offset: 0.0,
            translation: 0.0,
            drag: None,
            snap: None,
        }
    }

    #[inline]
    pub fn pages(&self) -> usize {
        self.pages
    }

    #[inline]
    pub fn page_width(&self) -> f32 {
        self.config.page_width
    }

    #[inline]
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Continuous page under the viewport
    pub fn page(&self) -> f32 {
        if self.config.page_width > 0.0 {
            self.offset / self.config.page_width
        } else {
            0.0
        }
    }

    pub fn max_offset(&self) -> f32 {
        self.pages.saturating_sub(1) as f32 * self.config.page_width
    }

    pub fn telemetry(&self) -> ScrollTelemetry {
        ScrollTelemetry {
            offset_x: self.offset,
            container_width: self.config.page_width,
            translation_x: self.translation,
            timestamp: None,
        }
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.snap.is_some()
    }

    /// Replace the content with `pages` pages and jump back to the start
    pub fn set_pages(&mut self, pages: usize) {
        self.pages = pages;
        self.offset = 0.0;
        self.translation = 0.0;
        self.drag = None;
        self.snap = None;
    }

    /// Start following the mouse from `column`
    pub fn begin_drag(&mut self, column: u16) {
        self.snap = None;
        self.translation = 0.0;
        self.drag = Some(Drag {
            origin_column: column,
            origin_offset: self.offset,
        });
    }

    /// Move the content with the mouse; dragging right scrolls towards the start
    pub fn drag_to<D>(&mut self, column: u16, delegate: &D)
    where
        D: ScrollDelegate + ?Sized,
    {
        let Some(drag) = self.drag else {
            return;
        };
        let columns = column as f32 - drag.origin_column as f32;
        self.translation = columns * self.config.drag_points_per_column;
        let offset = (drag.origin_offset - self.translation).clamp(0.0, self.max_offset());
        if offset != self.offset {
            self.offset = offset;
            delegate.did_scroll(&self.telemetry());
        }
    }

    /// Release the drag and decelerate onto the page in the drag direction
    pub fn end_drag<D>(&mut self, delegate: &D)
    where
        D: ScrollDelegate + ?Sized,
    {
        self.end_drag_at(delegate, Instant::now());
    }

    pub fn end_drag_at<D>(&mut self, delegate: &D, now: Instant)
    where
        D: ScrollDelegate + ?Sized,
    {
        if self.drag.take().is_none() {
            return;
        }

        let page = self.page();
        let target = if self.translation < 0.0 {
            page.ceil()
        } else if self.translation > 0.0 {
            page.floor()
        } else {
            page.round()
        };
        let target = self.clamp_page(target);
        let will_decelerate = target != self.offset;

        delegate.did_end_dragging(&self.telemetry().at(now), will_decelerate);
        if will_decelerate {
            self.start_snap(target, now);
        }
    }

    /// Animate to a page, e.g. from a key press
    pub fn scroll_to_page(&mut self, page: usize) {
        self.scroll_to_page_at(page, Instant::now());
    }

    pub fn scroll_to_page_at(&mut self, page: usize, now: Instant) {
        if self.drag.is_some() {
            return;
        }
        let target = self.clamp_page(page as f32);
        if target == self.offset {
            self.snap = None;
            return;
        }
        // Behave like a finger moving in the direction of travel
        self.translation = if target < self.offset { 1.0 } else { -1.0 };
        self.start_snap(target, now);
    }

    /// Index of the page the container is resting on or heading to
    pub fn target_page(&self) -> usize {
        let offset = self.snap.as_ref().map(|s| s.to).unwrap_or(self.offset);
        if self.config.page_width > 0.0 {
            (offset / self.config.page_width).round() as usize
        } else {
            0
        }
    }

    fn clamp_page(&self, page: f32) -> f32 {
        (page.max(0.0) * self.config.page_width).min(self.max_offset())
    }

    fn start_snap(&mut self, target: f32, now: Instant) {
        self.snap = Some(ActiveSnap {
            start: now,
            from: self.offset,
            to: target,
            duration: self.config.snap_duration(),
            easing: self.config.easing,
        });
    }

    pub fn update<D>(&mut self, delegate: &D)
    where
        D: ScrollDelegate + ?Sized,
    {
        self.update_at(delegate, Instant::now());
    }

    /// Advance the snap animation, reporting each movement
    pub fn update_at<D>(&mut self, delegate: &D, now: Instant)
    where
        D: ScrollDelegate + ?Sized,
    {
        let Some(snap) = self.snap.take() else {
            return;
        };

        if is_complete(snap.start, snap.duration, now) {
            self.offset = snap.to;
            let telemetry = self.telemetry().at(now);
            delegate.did_scroll(&telemetry);
            delegate.did_end_decelerating(&telemetry);
        } else {
            let t = snap.easing.apply(progress(snap.start, snap.duration, now));
            let offset = lerp(snap.from as f64, snap.to as f64, t) as f32;
            if offset != self.offset {
                self.offset = offset;
                delegate.did_scroll(&self.telemetry().at(now));
            }
            self.snap = Some(snap);
        }
    }
}
