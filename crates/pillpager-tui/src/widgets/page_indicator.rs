use pillpager_core::PageIndicator;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::Widget,
};

use crate::theme::to_color;

const PILL: &str = "━";
const PILL_START: &str = "╺";
const PILL_END: &str = "╸";
const BLOCK: &str = "█";

/// A terminal cell is roughly twice as tall as it is wide
const CELL_ASPECT: f32 = 2.0;

/// Renders the segments of a [`PageIndicator`] centered in the area.
///
/// Segments one row tall are drawn as a line with round caps, taller ones
/// as blocks with their corners cut by quadrant characters.
pub struct PageIndicatorWidget<'a> {
    indicator: &'a PageIndicator,
    points_per_cell: f32,
}

impl<'a> PageIndicatorWidget<'a> {
    pub fn new(indicator: &'a PageIndicator) -> Self {
        Self {
            indicator,
            points_per_cell: 4.0,
        }
    }

    /// Indicator points covered by one terminal column
    pub fn points_per_cell(mut self, points_per_cell: f32) -> Self {
        if points_per_cell.is_finite() && points_per_cell > 0.0 {
            self.points_per_cell = points_per_cell;
        }
        self
    }

    fn cells(&self, points: f32) -> u16 {
        (points / self.points_per_cell).round().max(1.0) as u16
    }

    fn rows(&self, points: f32) -> u16 {
        (points / (self.points_per_cell * CELL_ASPECT)).round().max(1.0) as u16
    }

    /// Column widths of the segments and of the gap between them
    pub fn layout(&self) -> (Vec<u16>, u16) {
        let widths = self
            .indicator
            .segments()
            .iter()
            .map(|s| self.cells(s.displayed_width()))
            .collect();
        let gap = (self.indicator.config().item_spacing / self.points_per_cell).round() as u16;
        (widths, gap)
    }

    /// Rows taken by the tallest segment
    pub fn height(&self) -> u16 {
        self.indicator
            .segments()
            .iter()
            .map(|s| self.rows(s.height()))
            .max()
            .unwrap_or(0)
    }
}

/// Symbol for one cell of a pill `width` columns by `height` rows
fn pill_symbol(col: u16, row: u16, width: u16, height: u16, rounded: bool) -> &'static str {
    let first = col == 0;
    let last = col + 1 == width;
    if height <= 1 {
        return match (rounded && width > 1, first, last) {
            (true, true, _) => PILL_START,
            (true, _, true) => PILL_END,
            _ => PILL,
        };
    }
    if !rounded || width < 2 {
        return BLOCK;
    }
    match (row == 0, row + 1 == height, first, last) {
        (true, _, true, _) => "▗",
        (true, _, _, true) => "▖",
        (_, true, true, _) => "▝",
        (_, true, _, true) => "▘",
        _ => BLOCK,
    }
}

impl Widget for PageIndicatorWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let (widths, gap) = self.layout();
        let total: u16 = widths
            .iter()
            .fold(0u16, |acc, w| acc.saturating_add(*w))
            .saturating_add(gap.saturating_mul(widths.len().saturating_sub(1) as u16));

        let mut x = area.x + area.width.saturating_sub(total) / 2;

        for (segment, width) in self.indicator.segments().iter().zip(widths) {
            if x >= area.right() {
                break;
            }
            let visible = width.min(area.right() - x);
            let height = self.rows(segment.height()).min(area.height);
            let top = area.y + (area.height - height) / 2;
            let rounded = segment.corner_radius() > 0.0;
            let style = Style::default().fg(to_color(segment.color()));

            for row in 0..height {
                for col in 0..visible {
                    if let Some(cell) = buf.cell_mut((x + col, top + row)) {
                        cell.set_symbol(pill_symbol(col, row, width, height, rounded))
                            .set_style(style);
                    }
                }
            }
            x = x.saturating_add(width).saturating_add(gap);
        }
    }
}
