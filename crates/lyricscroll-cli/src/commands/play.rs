use std::io;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use crossterm::{
    event::{
        DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;

use lyricscroll_core::{lyrics::load_lyrics, AppConfig};
use lyricscroll_tui::{
    event::{AppEvent, EventHandler},
    input::handle_key_event,
    widgets, App, Theme,
};

pub async fn run(
    config: Arc<AppConfig>,
    file: &Path,
    start_ms: u64,
    compact: bool,
    pip: bool,
) -> Result<()> {
    let lyrics = load_lyrics(file)
        .with_context(|| format!("Failed to load lyrics from {}", file.display()))?;
    info!(file = %file.display(), lines = lyrics.lines.len(), "Starting playback");

    // Command-line layout flags win over the config file
    let config = if compact || pip {
        let mut overridden = (*config).clone();
        overridden.ui.compact_mode = true;
        overridden.ui.pip_mode |= pip;
        Arc::new(overridden)
    } else {
        config
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableFocusChange,
        SetTitle("lyricscroll")
    )?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config.clone(), lyrics, Theme::default());
    app.start(start_ms as f64, Instant::now());

    let event_handler =
        EventHandler::with_animation_fps(config.ui.tick_rate_ms, config.scroll.animation_fps);

    let result = run_loop(&mut terminal, &mut app, &event_handler);

    app.shutdown();

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableFocusChange
    )?;
    terminal.show_cursor()?;

    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    event_handler: &EventHandler,
) -> Result<()> {
    // Checked at the end of each iteration to pick the next poll timeout
    let mut needs_fast_update = false;

    loop {
        terminal.draw(|frame| widgets::draw(frame, app))?;

        if let Some(event) = event_handler.next(needs_fast_update)? {
            let now = Instant::now();
            match event {
                AppEvent::Key(key) => {
                    let action = handle_key_event(key);
                    app.handle_action(action, now);
                }
                AppEvent::Mouse(mouse) => app.handle_mouse(mouse, now),
                AppEvent::Resize(_, _) => app.on_resize(),
                AppEvent::FocusGained => app.on_focus_gained(),
                AppEvent::Tick => {}
            }
        }

        app.on_frame(Instant::now());
        needs_fast_update = app.needs_fast_update();

        if app.should_quit {
            return Ok(());
        }
    }
}
