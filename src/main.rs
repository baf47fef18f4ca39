use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;

use docq::app::App;
use docq::config;
use docq::site::SiteIndex;
use docq::suggest::{JsonlTracker, LogTracker, NullTracker, QueryTracker};

/// How often timers fire when no input arrives
const TICK_RATE: Duration = Duration::from_millis(50);

#[derive(Parser)]
#[command(name = "docq", version, about = "Interactive documentation search TUI")]
struct Args {
    /// Directory containing the Markdown documentation pages
    #[arg(default_value = "docs")]
    docs_dir: PathBuf,

    /// Config file path (defaults to the platform config directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Append tracked queries as JSON lines to this file
    #[arg(long)]
    track_file: Option<PathBuf>,

    /// Disable query tracking entirely
    #[arg(long)]
    no_track: bool,
}

fn main() -> Result<()> {
    // Logging is only active in debug builds
    #[cfg(debug_assertions)]
    env_logger::init();

    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    let args = Args::parse();

    // Everything that can fail happens before the terminal is taken over, so
    // errors print as plain readable reports
    let config = config::load(args.config.as_deref())?;
    let index = SiteIndex::load(&args.docs_dir)?;

    let tracker: Box<dyn QueryTracker> = if args.no_track {
        Box::new(NullTracker)
    } else if let Some(path) = &args.track_file {
        Box::new(JsonlTracker::create(path)?)
    } else {
        Box::new(LogTracker)
    };

    let app = App::new(index, &config, tracker);

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();

    let result = run(terminal, app);

    // Restore terminal (automatic cleanup)
    ratatui::restore();

    result
}

fn run(mut terminal: DefaultTerminal, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        // Wait for input, but wake up often enough for the grace-delay and
        // notification timers to fire
        if event::poll(TICK_RATE)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (avoid duplicates)
                if key.kind == KeyEventKind::Press {
                    app.handle_key_event(key, Instant::now());
                }
            }
        }

        app.tick(Instant::now());

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
