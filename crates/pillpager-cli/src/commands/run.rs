use std::io;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
    Frame, Terminal,
};
use tokio::sync::mpsc;
use tracing::info;

use pillpager_core::AppConfig;
use pillpager_tui::{
    autoplay,
    event::{AppEvent, EventHandler},
    input::{handle_key_event, handle_mouse_event, Action},
    widgets::{CarouselWidget, PageIndicatorWidget, StatusBarWidget},
    App, Theme,
};

pub struct RunOptions {
    /// Override for the configured page count
    pub pages: Option<usize>,
    pub autoplay: bool,
    pub autoplay_interval: Duration,
}

pub async fn run(config: Arc<AppConfig>, options: RunOptions) -> Result<()> {
    let config = match options.pages {
        Some(pages) => {
            let mut config = (*config).clone();
            config.ui.pages = pages;
            Arc::new(config)
        }
        None => config,
    };

    let mut app = App::new(config.clone(), Theme::default());
    app.autoplay = options.autoplay;
    info!(pages = app.pages(), autoplay = app.autoplay, "Starting demo");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, SetTitle("pillpager"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let event_handler = EventHandler::with_animation_fps(
        config.ui.tick_rate_ms,
        config.ui.animation_fps,
    );

    // Autoplay ticks arrive through a channel, drained without blocking
    let (autoplay_tx, mut autoplay_rx) = mpsc::unbounded_channel::<Action>();
    let autoplay_task = autoplay::spawn(options.autoplay_interval, autoplay_tx);

    let result = run_loop(&mut terminal, &mut app, &event_handler, &mut autoplay_rx);

    autoplay_task.abort();

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    event_handler: &EventHandler,
    autoplay_rx: &mut mpsc::UnboundedReceiver<Action>,
) -> Result<()> {
    loop {
        while let Ok(action) = autoplay_rx.try_recv() {
            app.apply(action);
        }

        app.tick();
        terminal.draw(|frame| draw(frame, app))?;

        if let Some(event) = event_handler.next(app.needs_fast_update())? {
            match event {
                AppEvent::Key(key) => app.apply(handle_key_event(key)),
                AppEvent::Mouse(mouse) => app.apply(handle_mouse_event(mouse)),
                AppEvent::Resize(_, _) => app.on_resize(),
                AppEvent::Tick => {}
            }
        }

        if app.should_quit {
            info!("Quitting");
            return Ok(());
        }
    }
}

fn draw(frame: &mut Frame, app: &App) {
    let size = frame.area();
    frame.render_widget(Block::default().style(Style::default().bg(app.theme.bg0)), size);

    let indicator = app.indicator.borrow();
    let widget =
        PageIndicatorWidget::new(&indicator).points_per_cell(app.config.ui.points_per_cell);

    // Carousel, indicator with a blank row above and below, status bar
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),
            Constraint::Length(widget.height().max(1) + 2),
            Constraint::Length(1),
        ])
        .split(size);

    frame.render_widget(widget, layout[1]);
    drop(indicator);

    CarouselWidget::render(frame, layout[0], app);
    StatusBarWidget::render(frame, layout[2], app);
}
