mod animations;
mod app;
mod render;
mod theme;

use app::{App, AppAction};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};
use std::process::ExitCode;
use std::time::{Duration, Instant};
use theme::ThemeKind;
use tour_core::{Searcher, Square, Tour, DEFAULT_BOARD_SIZE};

/// Find a knight's tour and replay it step by step in the terminal.
#[derive(Parser)]
#[command(name = "knights-tour", version, about)]
struct Cli {
    /// Starting square as ROW,COL (zero-based), e.g. 0,0
    #[arg(short, long, value_parser = parse_square)]
    start: Square,

    /// Board size N for an NxN board
    #[arg(short = 'n', long, default_value_t = DEFAULT_BOARD_SIZE)]
    size: usize,

    /// Delay between replay steps in milliseconds
    #[arg(short, long, default_value_t = 500)]
    delay_ms: u64,

    /// Color theme
    #[arg(short, long, value_enum, default_value = "dark")]
    theme: ThemeKind,

    /// Print the tour and exit instead of replaying it
    #[arg(long)]
    headless: bool,
}

fn parse_square(s: &str) -> Result<Square, String> {
    s.parse::<Square>().map_err(|e| e.to_string())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> io::Result<ExitCode> {
    let searcher = Searcher::with_size(cli.size);

    if !cli.headless {
        // Larger boards can take a while; say so before the terminal is taken over
        eprintln!(
            "Searching for a tour from {} on a {}x{} board...",
            cli.start, cli.size, cli.size
        );
    }

    let tour = match searcher.find_tour(cli.start) {
        Ok(tour) => tour,
        Err(e) => {
            eprintln!("Error: {}", e);
            return Ok(ExitCode::FAILURE);
        }
    };

    if cli.headless {
        return Ok(print_tour(&tour));
    }

    if tour.is_empty() {
        eprintln!(
            "No complete tour exists from {} on a {}x{} board.",
            cli.start, cli.size, cli.size
        );
        return Ok(ExitCode::FAILURE);
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    // Run the app
    let result = run_app(&mut stdout, App::new(tour, cli.delay_ms, cli.theme));

    // Restore terminal
    disable_raw_mode()?;
    execute!(stdout, LeaveAlternateScreen)?;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
    }

    Ok(ExitCode::SUCCESS)
}

fn print_tour(tour: &Tour) -> ExitCode {
    if tour.is_empty() {
        println!("No solution found.");
        return ExitCode::FAILURE;
    }

    println!("Tour found with {} steps.", tour.len());
    println!("{}", tour);

    let path = tour
        .squares()
        .iter()
        .map(|sq| sq.to_string())
        .collect::<Vec<_>>()
        .join(" -> ");
    println!("{}", path);

    ExitCode::SUCCESS
}

fn run_app(stdout: &mut io::Stdout, mut app: App) -> io::Result<()> {
    let mut last_tick = Instant::now();

    loop {
        // Tick rate depends on the screen mode
        let tick_rate = app.get_tick_rate();

        // Render
        render::render(stdout, &mut app)?;
        stdout.flush()?;

        // Handle input with timeout for animation updates
        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout.min(Duration::from_millis(33)))? {
            if let Event::Key(key) = event::read()? {
                // Handle Ctrl+C
                if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                    break;
                }

                match app.handle_key(key) {
                    AppAction::Continue => {}
                    AppAction::Quit => break,
                }
            }
        }

        // Tick animations and timers
        if last_tick.elapsed() >= tick_rate {
            app.tick();
            last_tick = Instant::now();
        }
    }

    Ok(())
}
