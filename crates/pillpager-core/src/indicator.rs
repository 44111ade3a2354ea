//! Animated pill page indicator
//!
//! A row of pill-shaped segments, one per page. The segment of the active
//! page grows towards `max_item_width` while the others deflate to
//! `min_item_width`; colors follow once the width settle has finished.
//!
//! The indicator is a pure state machine: the host writes `current_page`,
//! calls [`PageIndicator::update`] every frame and renders
//! [`PageIndicator::segments`].

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::Instant;

use tracing::{debug, trace};

use crate::animation::timing::{is_complete, lerp, progress};
use crate::color::Rgb;
use crate::config::IndicatorConfig;

/// Indicator shared between the host and a [`crate::ScrollBridge`]
pub type SharedIndicator = Rc<RefCell<PageIndicator>>;

/// How far the active segment has settled onto its page, in (0, 1].
///
/// Reverse swipes arrive as negative pages, so the fraction is mirrored
/// for them. A page exactly at rest counts as fully settled.
pub fn settle_factor(page: f32) -> f32 {
    let mut factor = (page % 1.0).abs();
    if page < 0.0 {
        factor = 1.0 - factor;
    }
    if factor == 0.0 {
        factor = 1.0;
    }
    factor
}

/// Index of the page a continuous position is travelling towards
pub fn active_page(page: f32) -> usize {
    page.ceil().abs() as usize
}

/// One pill of the indicator
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    /// Width the layout is settling towards
    width: f32,
    /// Width currently on screen
    displayed_width: f32,
    /// Color currently on screen
    color: Rgb,
    height: f32,
    corner_radius: f32,
    fade: Option<ColorFade>,
}

impl Segment {
    fn new(config: &IndicatorConfig) -> Self {
        Self {
            width: config.min_item_width,
            displayed_width: config.min_item_width,
            color: config.normal_color,
            height: config.item_height,
            corner_radius: config.corner_radius(),
            fade: None,
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.width
    }

    #[inline]
    pub fn displayed_width(&self) -> f32 {
        self.displayed_width
    }

    #[inline]
    pub fn color(&self) -> Rgb {
        self.color
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Half the height, so both ends are fully round
    #[inline]
    pub fn corner_radius(&self) -> f32 {
        self.corner_radius
    }

    /// Color the segment ends up with once running fades finish
    pub fn target_color(&self) -> Rgb {
        self.fade.as_ref().map(|f| f.to).unwrap_or(self.color)
    }
}

#[derive(Debug, Clone, PartialEq)]
struct ColorFade {
    start: Instant,
    from: Rgb,
    to: Rgb,
}

/// Width transition started by a page write
#[derive(Debug, Clone)]
struct WidthSettle {
    start: Instant,
    from: Vec<f32>,
}

/// Deferred color pass of one page write.
///
/// Carries the widths that write produced so that the colors it applies
/// never reflect a later write.
#[derive(Debug, Clone)]
struct ColorTask {
    due: Instant,
    widths: Vec<f32>,
}

#[derive(Debug, Clone)]
pub struct PageIndicator {
    config: IndicatorConfig,
    segments: Vec<Segment>,
    current_page: f32,
    settle: Option<WidthSettle>,
    color_tasks: VecDeque<ColorTask>,
}

impl PageIndicator {
    pub fn new(config: IndicatorConfig) -> Self {
        Self {
            config,
            segments: Vec::new(),
            current_page: 0.0,
            settle: None,
            color_tasks: VecDeque::new(),
        }
    }

    /// Create an indicator ready to be attached to a bridge
    pub fn shared(config: IndicatorConfig) -> SharedIndicator {
        Rc::new(RefCell::new(Self::new(config)))
    }

    pub fn config(&self) -> &IndicatorConfig {
        &self.config
    }

    #[inline]
    pub fn number_of_pages(&self) -> usize {
        self.segments.len()
    }

    #[inline]
    pub fn current_page(&self) -> f32 {
        self.current_page
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Index of the first segment currently drawn in the selected color
    pub fn selected_page(&self) -> Option<usize> {
        self.segments
            .iter()
            .position(|s| s.color == self.config.selected_color)
    }

    /// Displayed width of the whole row including spacing
    pub fn total_width(&self) -> f32 {
        let widths: f32 = self.segments.iter().map(|s| s.displayed_width).sum();
        let gaps = self.segments.len().saturating_sub(1) as f32;
        widths + gaps * self.config.item_spacing
    }

    pub fn set_number_of_pages(&mut self, pages: usize) {
        self.set_number_of_pages_at(pages, Instant::now());
    }

    /// Rebuild all segments and reset to the first page
    pub fn set_number_of_pages_at(&mut self, pages: usize, now: Instant) {
        debug!(pages, "Rebuilding page indicator segments");
        self.segments = (0..pages).map(|_| Segment::new(&self.config)).collect();
        self.settle = None;
        self.color_tasks.clear();
        self.current_page = 0.0;
        self.set_current_page_at(0.0, now);
    }

    pub fn set_current_page(&mut self, page: f32) {
        self.set_current_page_at(page, Instant::now());
    }

    /// Recompute segment widths for a continuous page position.
    ///
    /// Positions whose active page falls outside the indicator are ignored.
    pub fn set_current_page_at(&mut self, page: f32, now: Instant) {
        if !page.is_finite() {
            debug!(page, "Ignoring non-finite page");
            return;
        }

        let mut factor = settle_factor(page);
        let active = active_page(page);
        if active >= self.segments.len() {
            debug!(page, active, pages = self.segments.len(), "Page out of range, ignoring");
            return;
        }
        self.current_page = page;

        let min = self.config.min_item_width;
        let max = self.config.max_item_width;

        // Segments still deflating from an earlier active state
        for (i, segment) in self.segments.iter_mut().enumerate() {
            if i != active && segment.width > min + 1.0 {
                segment.width = (min / factor).min(max);
            }
        }

        // Snap to full width past two thirds to avoid jitter near the transition
        if max * factor > 2.0 * max / 3.0 {
            factor = 1.0;
        }

        self.segments[active].width = (max * factor).max(min).floor().min(max).max(min);

        debug!(page, active, factor, "Page indicator updated");
        self.start_settle(now);
    }

    fn start_settle(&mut self, now: Instant) {
        self.settle = Some(WidthSettle {
            start: now,
            from: self.segments.iter().map(|s| s.displayed_width).collect(),
        });
        self.color_tasks.push_back(ColorTask {
            due: now + self.config.settle_duration(),
            widths: self.segments.iter().map(|s| s.width).collect(),
        });
    }

    /// Check if there is animation work left
    #[inline]
    pub fn needs_update(&self) -> bool {
        self.settle.is_some()
            || !self.color_tasks.is_empty()
            || self.segments.iter().any(|s| s.fade.is_some())
    }

    pub fn update(&mut self) {
        self.update_at(Instant::now());
    }

    /// Advance the width settle, run due color passes and advance fades
    pub fn update_at(&mut self, now: Instant) {
        let duration = self.config.settle_duration();

        if let Some(settle) = self.settle.take() {
            if is_complete(settle.start, duration, now) {
                for segment in &mut self.segments {
                    segment.displayed_width = segment.width;
                }
            } else {
                let t = self.config.easing.apply(progress(settle.start, duration, now));
                for (segment, from) in self.segments.iter_mut().zip(&settle.from) {
                    segment.displayed_width =
                        lerp(*from as f64, segment.width as f64, t) as f32;
                }
                self.settle = Some(settle);
            }
        }

        while self.color_tasks.front().is_some_and(|task| task.due <= now) {
            if let Some(task) = self.color_tasks.pop_front() {
                self.run_color_task(&task);
            }
        }

        for segment in &mut self.segments {
            if let Some(fade) = segment.fade.take() {
                if is_complete(fade.start, duration, now) {
                    segment.color = fade.to;
                } else {
                    segment.color = fade.from.mix(fade.to, progress(fade.start, duration, now));
                    segment.fade = Some(fade);
                }
            }
        }
    }

    /// Finish every running animation immediately
    pub fn settle(&mut self) {
        self.settle = None;
        for segment in &mut self.segments {
            segment.displayed_width = segment.width;
        }
        while let Some(task) = self.color_tasks.pop_front() {
            self.run_color_task(&task);
        }
        for segment in &mut self.segments {
            if let Some(fade) = segment.fade.take() {
                segment.color = fade.to;
            }
        }
    }

    fn run_color_task(&mut self, task: &ColorTask) {
        let half = self.config.max_item_width / 2.0;
        let selected = self.config.selected_color;
        let normal = self.config.normal_color;

        for (segment, width) in self.segments.iter_mut().zip(&task.widths) {
            let target = if *width < half { normal } else { selected };
            if segment.target_color() == target {
                continue;
            }
            segment.fade = Some(ColorFade {
                start: task.due,
                from: segment.color,
                to: target,
            });
        }
        trace!(widths = ?task.widths, "Color pass applied");
    }
}
