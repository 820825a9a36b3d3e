use std::io::{self, Write as _};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, bail};
use clap::Parser;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute, terminal};
use tracing_subscriber::EnvFilter;

use carousel::constants::{DEFAULT_INTERVAL_MS, DEFAULT_SLIDE_HEIGHT, DEFAULT_SLIDE_WIDTH, POLL_INTERVAL_MS};
use carousel::engine::{Carousel, CarouselOptions};
use carousel::loader::load_slides;
use carousel::terminal::TerminalRenderer;

/// Image carousel in the terminal: arrow keys navigate, autoplay wraps.
#[derive(Parser)]
struct Args {
    /// Directory to scan for image files.
    image_directory: PathBuf,

    /// Autoplay delay between slides, in milliseconds.
    #[arg(long, default_value_t = DEFAULT_INTERVAL_MS)]
    interval_ms: u64,
}

fn main() -> anyhow::Result<()> {
    // Keep diagnostics off the alternate screen.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    // --- Load Slides ---
    let slides = load_slides(&args.image_directory, DEFAULT_SLIDE_WIDTH, DEFAULT_SLIDE_HEIGHT)
        .with_context(|| format!("loading slides from {}", args.image_directory.display()))?;
    if slides.is_empty() {
        bail!(
            "no image files found in directory: {}",
            args.image_directory.display()
        );
    }

    // --- Terminal Setup ---
    terminal::enable_raw_mode().context("enabling raw mode")?;
    execute!(io::stdout(), EnterAlternateScreen, cursor::Hide)
        .context("entering alternate screen")?;

    let result = run(slides, Duration::from_millis(args.interval_ms));

    // --- Teardown (always, even after an error) ---
    let _ = execute!(io::stdout(), cursor::Show, LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}

fn run(slides: Vec<carousel::Slide>, interval: Duration) -> anyhow::Result<()> {
    let mut carousel = Carousel::new(slides, TerminalRenderer::new(), CarouselOptions { interval })
        .context("starting carousel")?;

    // --- Main Loop ---
    loop {
        if event::poll(Duration::from_millis(POLL_INTERVAL_MS)).context("polling input")? {
            match event::read().context("reading input")? {
                Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                    KeyCode::Left => carousel.previous()?,
                    KeyCode::Right => carousel.next()?,
                    KeyCode::Char('q') | KeyCode::Esc => break,
                    _ => {}
                },
                // A resize invalidates the previous frame wholesale.
                Event::Resize(_, _) => carousel.refresh()?,
                _ => {}
            }
        }
        carousel.pump();
    }

    carousel.dispose();
    Ok(())
}
