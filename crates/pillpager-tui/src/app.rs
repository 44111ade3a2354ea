use std::sync::Arc;
use std::time::Instant;

use pillpager_core::{AppConfig, PageIndicator, ScrollBridge, SharedIndicator};
use tracing::info;

use crate::input::Action;
use crate::scroll::PagerScroll;
use crate::theme::Theme;

/// Upper bound for pages added interactively
pub const MAX_PAGES: usize = 32;

/// Demo state: a paging scroll view driving a pill indicator
pub struct App {
    pub config: Arc<AppConfig>,
    pub theme: Theme,
    /// The indicator, also reachable weakly through `bridge`
    pub indicator: SharedIndicator,
    pub bridge: ScrollBridge,
    pub pager: PagerScroll,
    pub autoplay: bool,
    pub should_quit: bool,
    pub status_message: Option<String>,
}

impl App {
    pub fn new(config: Arc<AppConfig>, theme: Theme) -> Self {
        let pages = config.ui.pages.min(MAX_PAGES);

        let indicator = PageIndicator::shared(config.indicator.clone());
        indicator.borrow_mut().set_number_of_pages(pages);
        let bridge = ScrollBridge::attached(&indicator);
        let pager = PagerScroll::new(config.scroll.clone(), pages);

        Self {
            config,
            theme,
            indicator,
            bridge,
            pager,
            autoplay: false,
            should_quit: false,
            status_message: None,
        }
    }

    #[inline]
    pub fn pages(&self) -> usize {
        self.pager.pages()
    }

    /// Rebuild both the scroll content and the indicator
    pub fn set_pages(&mut self, pages: usize) {
        let pages = pages.min(MAX_PAGES);
        info!(pages, "Setting number of pages");
        self.pager.set_pages(pages);
        self.indicator.borrow_mut().set_number_of_pages(pages);
    }

    pub fn apply(&mut self, action: Action) {
        // Any user action replaces a transient message
        if action != Action::AutoplayTick && action != Action::None {
            self.status_message = None;
        }

        match action {
            Action::Quit => self.should_quit = true,
            Action::NextPage => {
                let next = self.pager.target_page() + 1;
                if next < self.pages() {
                    self.pager.scroll_to_page(next);
                }
            }
            Action::PrevPage => {
                let prev = self.pager.target_page().saturating_sub(1);
                self.pager.scroll_to_page(prev);
            }
            Action::FirstPage => self.pager.scroll_to_page(0),
            Action::LastPage => self.pager.scroll_to_page(self.pages().saturating_sub(1)),
            Action::AddPage => {
                if self.pages() < MAX_PAGES {
                    self.set_pages(self.pages() + 1);
                } else {
                    self.status_message = Some(format!("At most {} pages", MAX_PAGES));
                }
            }
            Action::RemovePage => self.set_pages(self.pages().saturating_sub(1)),
            Action::ToggleAutoplay => {
                self.autoplay = !self.autoplay;
                info!(autoplay = self.autoplay, "Autoplay toggled");
            }
            Action::AutoplayTick => {
                if self.autoplay && !self.pager.is_dragging() && self.pages() > 0 {
                    let next = (self.pager.target_page() + 1) % self.pages();
                    self.pager.scroll_to_page(next);
                }
            }
            Action::DragStart(column) => self.pager.begin_drag(column),
            Action::DragMove(column) => self.pager.drag_to(column, &self.bridge),
            Action::DragEnd => self.pager.end_drag(&self.bridge),
            Action::None => {}
        }
    }

    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    /// Advance the scroll view first so the indicator sees this frame's position
    pub fn tick_at(&mut self, now: Instant) {
        self.pager.update_at(&self.bridge, now);
        self.indicator.borrow_mut().update_at(now);
    }

    /// Check if the next frame should come at animation rate
    pub fn needs_fast_update(&self) -> bool {
        self.pager.is_animating()
            || self.pager.is_dragging()
            || self.indicator.borrow().needs_update()
    }

    /// Drop running transitions, e.g. after a terminal resize
    pub fn on_resize(&mut self) {
        self.indicator.borrow_mut().settle();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn app(pages: usize) -> App {
        let mut config = AppConfig::default();
        config.ui.pages = pages;
        App::new(Arc::new(config), Theme::default())
    }

    fn later() -> Instant {
        Instant::now() + Duration::from_secs(5)
    }

    #[test]
    fn test_new_app_builds_indicator() {
        let app = app(4);
        assert_eq!(app.pages(), 4);
        assert_eq!(app.indicator.borrow().number_of_pages(), 4);
        assert!(app.bridge.is_attached());
    }

    #[test]
    fn test_next_page_reaches_indicator() {
        let mut app = app(4);
        app.apply(Action::NextPage);
        assert!(app.needs_fast_update());

        app.tick_at(later());
        app.tick_at(later() + Duration::from_secs(5));

        let indicator = app.indicator.borrow();
        assert_eq!(indicator.current_page(), 1.0);
        assert_eq!(indicator.selected_page(), Some(1));
    }

    #[test]
    fn test_indicator_settles_on_the_tick_clock() {
        let mut app = app(4);
        app.apply(Action::NextPage);

        // the snap lands on this frame, so the indicator settle starts here too
        let frame = later();
        app.tick_at(frame);
        app.tick_at(frame + Duration::from_millis(250));

        let indicator = app.indicator.borrow();
        let width = indicator.segments()[1].displayed_width();
        assert!(width > app.config.indicator.min_item_width, "width {}", width);
        assert!(width < app.config.indicator.max_item_width, "width {}", width);
        assert!(indicator.needs_update());
    }

    #[test]
    fn test_drag_release_snaps_indicator() {
        let mut app = app(4);
        app.apply(Action::DragStart(40));
        app.apply(Action::DragMove(30));
        // 10 columns * 8 points over a 320 point page
        assert_eq!(app.indicator.borrow().current_page(), 0.25);

        app.apply(Action::DragEnd);
        assert_eq!(app.indicator.borrow().current_page(), 1.0);

        app.tick_at(later());
        assert_eq!(app.pager.offset(), 320.0);
        assert_eq!(app.indicator.borrow().current_page(), 1.0);
    }

    #[test]
    fn test_page_count_changes_rebuild() {
        let mut app = app(2);
        app.apply(Action::AddPage);
        assert_eq!(app.pages(), 3);
        assert_eq!(app.indicator.borrow().number_of_pages(), 3);

        app.apply(Action::RemovePage);
        app.apply(Action::RemovePage);
        app.apply(Action::RemovePage);
        app.apply(Action::RemovePage);
        assert_eq!(app.pages(), 0);
        assert_eq!(app.indicator.borrow().number_of_pages(), 0);
    }

    #[test]
    fn test_page_cap() {
        let mut app = app(MAX_PAGES);
        app.apply(Action::AddPage);
        assert_eq!(app.pages(), MAX_PAGES);
        assert!(app.status_message.is_some());
    }

    #[test]
    fn test_autoplay_wraps_around() {
        let mut app = app(2);
        app.apply(Action::AutoplayTick);
        assert_eq!(app.pager.target_page(), 0);

        app.apply(Action::ToggleAutoplay);
        app.apply(Action::AutoplayTick);
        assert_eq!(app.pager.target_page(), 1);
        app.tick_at(later());

        app.apply(Action::AutoplayTick);
        assert_eq!(app.pager.target_page(), 0);
    }

    #[test]
    fn test_quit() {
        let mut app = app(1);
        app.apply(Action::Quit);
        assert!(app.should_quit);
    }
}
