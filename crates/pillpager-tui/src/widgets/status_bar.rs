use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let indicator = app.indicator.borrow();

        let selected = indicator
            .selected_page()
            .map(|p| (p + 1).to_string())
            .unwrap_or_else(|| "-".to_string());

        let (mode, mode_bg) = if app.pager.is_dragging() {
            (" DRAG ", theme.accent)
        } else {
            (" NORMAL ", theme.grey0)
        };

        let status_text = if let Some(msg) = &app.status_message {
            format!(" {}", msg)
        } else {
            format!(
                " Page {}/{} | position {:.2} | autoplay {}",
                selected,
                indicator.number_of_pages(),
                indicator.current_page(),
                if app.autoplay { "on" } else { "off" },
            )
        };

        let help_hint = " q:quit h/l:page g/G:ends +/-:pages a:autoplay ";
        let padding_len = area.width.saturating_sub(
            (mode.len() + status_text.chars().count() + help_hint.len()) as u16,
        ) as usize;

        let line = Line::from(vec![
            Span::styled(
                mode,
                Style::default()
                    .fg(theme.bg0)
                    .bg(mode_bg)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(status_text, Style::default().fg(theme.fg0).bg(theme.bg2)),
            Span::styled(" ".repeat(padding_len), Style::default().bg(theme.bg2)),
            Span::styled(help_hint, Style::default().fg(theme.grey2).bg(theme.bg2)),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}
