use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::Paragraph,
    Frame,
};

use crate::app::App;

pub struct CarouselWidget;

impl CarouselWidget {
    /// Render the pages of the simulated scroll view at its current offset
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let pages = app.pager.pages();

        if pages == 0 {
            let empty = Paragraph::new("No pages. Press + to add one.")
                .alignment(Alignment::Center)
                .style(Style::default().fg(theme.grey2).bg(theme.bg0));
            frame.render_widget(empty, area);
            return;
        }

        for (index, rect) in visible_pages(area, pages, app.pager.page()) {
            // Vertically center the label
            let mut lines = vec![Line::from(""); (rect.height / 2).saturating_sub(1) as usize];
            lines.push(Line::from(format!("Page {}", index + 1)));
            lines.push(Line::from(format!("{} of {}", index + 1, pages)));

            let page = Paragraph::new(lines)
                .alignment(Alignment::Center)
                .style(
                    Style::default()
                        .fg(theme.bg0)
                        .bg(theme.page_color(index))
                        .add_modifier(Modifier::BOLD),
                );
            frame.render_widget(page, rect);
        }
    }
}

/// Screen rectangles of the pages that intersect the viewport.
///
/// `page` is the continuous page under the viewport; one page spans the
/// full width of `area`.
pub fn visible_pages(area: Rect, pages: usize, page: f32) -> Vec<(usize, Rect)> {
    let width = area.width as f32;
    let shift = page * width;

    (0..pages)
        .filter_map(|index| {
            let left = index as f32 * width - shift;
            let right = left + width;
            if right <= 0.0 || left >= width {
                return None;
            }
            let x0 = left.max(0.0).round() as u16;
            let x1 = right.min(width).round() as u16;
            if x1 <= x0 {
                return None;
            }
            Some((index, Rect::new(area.x + x0, area.y, x1 - x0, area.height)))
        })
        .collect()
}
