use std::io;
use std::time::Instant;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};

use galerie_core::AppConfig;
use galerie_tui::{
    app::{App, Mode},
    event::{AppEvent, EventHandler},
    input::{handle_key_event, Action},
    widgets::{
        ArtworkLightboxWidget, HeaderWidget, PageWidget, PosterLightboxWidget, StatusBarWidget,
    },
};

pub async fn run(config: AppConfig) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        SetTitle("Galerie Antonína Kroči")
    )?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let event_handler =
        EventHandler::with_animation_fps(config.ui.tick_rate_ms, config.scroll.animation_fps);
    let mut app = App::new(config);

    // Faster tick rate while something is animating, checked at the end of
    // each iteration for the next one
    let mut needs_fast_update = false;

    loop {
        let now = Instant::now();
        app.on_tick(now);

        terminal.draw(|frame| draw(frame, &mut app, now))?;

        let event = if needs_fast_update {
            event_handler.next_animation()?
        } else {
            event_handler.next()?
        };
        if let Some(event) = event {
            match event {
                AppEvent::Key(key) => {
                    let action = handle_key_event(key, &app);
                    if action != Action::None {
                        app.handle_action(action, Instant::now());
                    }
                }
                AppEvent::Mouse(mouse) => app.handle_mouse(mouse, Instant::now()),
                AppEvent::Resize(_, _) => {
                    // Layout is remeasured on every draw
                }
                AppEvent::Tick => {}
            }
        }

        needs_fast_update = app.animator.needs_update()
            || app.navigator.is_navigating()
            || app.artwork_viewer.is_transitioning()
            || app.poster_viewer.is_transitioning();

        if app.should_quit {
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    Ok(())
}

fn draw(frame: &mut Frame, app: &mut App, now: Instant) {
    let size = frame.area();
    let active = app.active_exhibitions();

    let header_height = HeaderWidget::height(app, active.len());
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header_height),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(size);

    HeaderWidget::render(frame, main_layout[0], app, &active, now);
    PageWidget::render(frame, main_layout[1], app);
    StatusBarWidget::render(frame, main_layout[2], app);

    // Overlays draw over the whole screen
    match app.mode {
        Mode::ArtworkViewer => ArtworkLightboxWidget::render(frame, size, app, now),
        Mode::PosterViewer => PosterLightboxWidget::render(frame, size, app, &active, now),
        _ => app.modal_content_area = None,
    }
}
