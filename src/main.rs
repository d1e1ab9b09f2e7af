use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;

use triage::app::App;
use triage::config;
use triage::suggestions;

/// Terminal client for a support-ticket classification service
#[derive(Debug, Parser)]
#[command(name = "triage", version, about)]
struct Cli {
    /// Base URL of the classification service
    #[arg(long, value_name = "URL")]
    api_base_url: Option<String>,

    /// Path to an alternate config file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Suggestion rotation interval in milliseconds
    #[arg(long, value_name = "MS")]
    tick_ms: Option<u64>,
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    let cli = Cli::parse();
    init_logging();

    let config = config::load(cli.config.as_deref());
    let base_url = config::resolve_base_url(cli.api_base_url.as_deref(), &config);
    let tick_interval = Duration::from_millis(cli.tick_ms.unwrap_or(config.ui.tick_ms));
    log::info!("using classification service at {base_url}");

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let mut terminal = ratatui::init();

    // The slot count is read once here; resizing mid-session does not
    // reshape an already-initialized suggestion window.
    let columns = terminal.size().map(|size| size.width).unwrap_or(80);
    let slots = suggestions::slot_count_for_viewport(suggestions::viewport_units(columns));

    let app = App::new(slots, base_url);
    let result = run(&mut terminal, app, tick_interval);

    // Restore terminal (automatic cleanup)
    ratatui::restore();

    result
}

fn run(terminal: &mut DefaultTerminal, mut app: App, tick_interval: Duration) -> Result<()> {
    let mut last_tick = Instant::now();

    loop {
        // Apply whatever the HTTP worker finished since the last pass.
        app.drain_responses();

        if last_tick.elapsed() >= tick_interval {
            app.on_tick();
            last_tick = Instant::now();
        }

        terminal.draw(|frame| app.render(frame))?;

        // Wake for the next suggestion rotation, but no less often than
        // every 100ms so worker responses show up promptly.
        let timeout = tick_interval
            .saturating_sub(last_tick.elapsed())
            .min(Duration::from_millis(100));
        if event::poll(timeout)? {
            match event::read()? {
                // Only process key press events (avoid duplicates)
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    app.handle_key_event(key);
                }
                _ => {}
            }
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

/// Debug-build logging to a file; release builds stay silent.
#[cfg(debug_assertions)]
fn init_logging() {
    if let Ok(file) = std::fs::File::create("triage-debug.log") {
        let _ = env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or("debug"),
        )
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init();
    }
}

#[cfg(not(debug_assertions))]
fn init_logging() {}
