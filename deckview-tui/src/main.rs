//! deckview — present a slide deck in the terminal.
//!
//! Navigation: arrows / Space / h / l, digits to jump, clicks on the
//! navigation bar, or a horizontal drag. `?` shows every binding.

use std::io::{self, stdout};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{bail, Context, Result};
use clap::Parser;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use deckview_core::{Deck, ViewerConfig};
use deckview_tui::{input, logging, ui, AppState};

#[derive(Parser)]
#[command(name = "deckview-tui", about = "Terminal slide presenter", version)]
struct Args {
    /// Deck file (TOML). Shows the built-in demo deck when omitted.
    deck: Option<PathBuf>,

    /// Viewer config file. Defaults to <config_dir>/deckview/config.toml.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Show every slide in its final state without decorative animation.
    #[arg(long, default_value_t = false)]
    reduced_motion: bool,
}

fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("deckview")
        .join("config.toml")
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config_path = match &args.config {
        Some(path) if !path.exists() => bail!("config file not found: {}", path.display()),
        Some(path) => path.clone(),
        None => default_config_path(),
    };
    let mut config = ViewerConfig::load(&config_path)
        .with_context(|| format!("loading config {}", config_path.display()))?;
    if args.reduced_motion {
        config.reduced_motion = true;
    }

    let _log_guard = logging::init(&config.logging)?;

    let deck = match &args.deck {
        Some(path) => Deck::from_file(path)
            .with_context(|| format!("loading deck {}", path.display()))?,
        None => Deck::demo(),
    };
    tracing::info!(title = %deck.title, slides = deck.len(), "deck loaded");

    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen, DisableMouseCapture);
        default_hook(info);
    }));

    let start = Instant::now();
    let mut app = AppState::new(deck, &config, Duration::ZERO);

    // Setup terminal
    enable_raw_mode()?;
    let mut terminal = or_restore(setup_terminal, restore_terminal)?;

    let result = run_app(&mut terminal, &mut app, config.tick(), start);

    app.finish(start.elapsed());

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

fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    terminal.clear()?;
    Ok(terminal)
}

/// Best-effort teardown when setup fails half way.
fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
}

/// Run `build`; on failure run `restore` before handing the error back.
fn or_restore<T>(build: impl FnOnce() -> Result<T>, restore: impl FnOnce()) -> Result<T> {
    build().map_err(|err| {
        restore();
        err
    })
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
    tick: Duration,
    start: Instant,
) -> Result<()> {
    loop {
        // 1. Run due transition stages.
        let now = start.elapsed();
        app.tick(now);

        // 2. Render
        terminal.draw(|f| {
            app.viewport = f.area();
            ui::draw(f, app, now);
        })?;

        // 3. Poll for input events
        if event::poll(tick)? {
            match event::read()? {
                Event::Key(key) => input::handle_key(app, key, start.elapsed()),
                Event::Mouse(mouse) => input::handle_mouse(app, mouse, start.elapsed()),
                _ => {}
            }
        }

        // 4. Check quit
        if !app.running {
            break;
        }
    }
    Ok(())
}
