use crate::animations::hue_to_rgb;
use crate::app::{App, ScreenState};
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    execute,
    style::{Color, Print, SetBackgroundColor, SetForegroundColor},
    terminal::{self, Clear, ClearType},
};
use std::io;
use tour_core::Square;

pub fn render(stdout: &mut io::Stdout, app: &mut App) -> io::Result<()> {
    let (term_width, term_height) = terminal::size()?;

    execute!(stdout, Hide)?;

    // The board is cheap to redraw, so clear every frame; particles would
    // otherwise leave trails behind them.
    execute!(stdout, Clear(ClearType::All))?;

    let size = app.tour.size();
    let cell_width = cell_width(size);
    let board_width = (size as u16) * cell_width;
    let board_height = (size as u16) * 2;

    // Center the board horizontally, leave room for the info panel
    let total_width = board_width + 25;
    let start_x = if term_width > total_width {
        (term_width - total_width) / 2
    } else {
        1
    };
    let start_y = if term_height > board_height + 10 { 2 } else { 1 };

    render_board(stdout, app, start_x, start_y)?;

    let info_x = start_x + board_width + 3;
    render_info_panel(stdout, app, info_x, start_y)?;

    let controls_y = start_y + board_height + 1;
    render_controls(stdout, app, start_x, controls_y)?;

    if app.screen_state == ScreenState::Finished {
        render_celebration(stdout, app, term_width, term_height)?;
    }

    if let Some(msg) = app.message.clone() {
        render_message(stdout, app, &msg, term_width)?;
    }

    execute!(stdout, Show)?;
    Ok(())
}

/// Width of one board cell, wide enough for the largest step number.
fn cell_width(size: usize) -> u16 {
    let digits = (size * size).to_string().len() as u16;
    (digits + 2).max(4)
}

fn render_board(stdout: &mut io::Stdout, app: &App, x: u16, y: u16) -> io::Result<()> {
    let theme = &app.theme;
    let size = app.tour.size();
    let width = cell_width(size) as usize;
    let current = app.current_square();

    // Step number on each square for the shown prefix, 0 = not yet reached
    let mut steps = vec![0usize; size * size];
    for (i, sq) in app.tour.iter().take(app.shown).enumerate() {
        steps[sq.row * size + sq.col] = i + 1;
    }

    for row in 0..size {
        let cell_y = y + (row as u16) * 2;

        for col in 0..size {
            let cell_x = x + (col as u16) * cell_width(size);
            let square = Square::new(row, col);
            let step = steps[row * size + col];

            let bg = if current == Some(square) {
                theme.current_bg
            } else if (row + col) % 2 == 0 {
                theme.square_light
            } else {
                theme.square_dark
            };

            let (fg, content) = if current == Some(square) {
                (theme.knight, format!("{:^width$}", "♞"))
            } else if step > 0 {
                (theme.step, format!("{:^width$}", step))
            } else {
                (theme.fg, " ".repeat(width))
            };

            execute!(
                stdout,
                MoveTo(cell_x, cell_y),
                SetBackgroundColor(bg),
                SetForegroundColor(fg),
                Print(content),
                MoveTo(cell_x, cell_y + 1),
                Print(" ".repeat(width))
            )?;
        }
    }

    // Frame around the board
    let board_width = (size as u16) * cell_width(size);
    let board_height = (size as u16) * 2;
    execute!(
        stdout,
        SetBackgroundColor(theme.bg),
        SetForegroundColor(theme.border),
        MoveTo(x.saturating_sub(1), y.saturating_sub(1)),
        Print(format!("┌{}┐", "─".repeat(board_width as usize)))
    )?;
    for row in 0..board_height {
        execute!(
            stdout,
            MoveTo(x.saturating_sub(1), y + row),
            Print("│"),
            MoveTo(x + board_width, y + row),
            Print("│")
        )?;
    }
    execute!(
        stdout,
        MoveTo(x.saturating_sub(1), y + board_height),
        Print(format!("└{}┘", "─".repeat(board_width as usize)))
    )?;

    Ok(())
}

fn render_info_panel(stdout: &mut io::Stdout, app: &App, x: u16, y: u16) -> io::Result<()> {
    let theme = &app.theme;
    let size = app.tour.size();

    execute!(stdout, SetBackgroundColor(theme.bg))?;

    // Title
    execute!(
        stdout,
        MoveTo(x, y),
        SetForegroundColor(theme.key),
        Print("═══ KNIGHT'S TOUR ═══")
    )?;

    execute!(
        stdout,
        MoveTo(x, y + 2),
        SetForegroundColor(theme.info),
        Print(format!("Board: {}x{}", size, size))
    )?;

    if let Some(start) = app.tour.first() {
        execute!(
            stdout,
            MoveTo(x, y + 4),
            SetForegroundColor(theme.info),
            Print(format!("Start: {}", start))
        )?;
    }

    execute!(
        stdout,
        MoveTo(x, y + 6),
        SetForegroundColor(theme.info),
        Print(format!("Step: {}/{}", app.shown, app.tour.len()))
    )?;

    execute!(
        stdout,
        MoveTo(x, y + 8),
        SetForegroundColor(theme.info),
        Print(format!("Delay: {} ms", app.delay.as_millis()))
    )?;

    let (state_str, state_color) = match app.screen_state {
        ScreenState::Replaying => ("Replaying", theme.fg),
        ScreenState::Paused => ("Paused", Color::Yellow),
        ScreenState::Finished => ("Finished", theme.success),
    };
    execute!(
        stdout,
        MoveTo(x, y + 10),
        SetForegroundColor(theme.info),
        Print("State: "),
        SetForegroundColor(state_color),
        Print(state_str)
    )?;

    if let Some(square) = app.current_square() {
        execute!(
            stdout,
            MoveTo(x, y + 12),
            SetForegroundColor(theme.info),
            Print("Knight at: "),
            SetForegroundColor(theme.knight),
            Print(format!("{}", square))
        )?;
    }

    Ok(())
}

fn render_controls(stdout: &mut io::Stdout, app: &App, x: u16, y: u16) -> io::Result<()> {
    let theme = &app.theme;

    execute!(stdout, SetBackgroundColor(theme.bg))?;

    let controls = [
        ("Space/p", "Pause"),
        ("n/→", "Step"),
        ("r", "Restart"),
        ("+/-", "Speed"),
        ("t", "Theme"),
        ("S/L", "Save/Load"),
        ("q", "Quit"),
    ];

    // Display in columns of 4
    for (i, (key, desc)) in controls.iter().enumerate() {
        let col = i / 4;
        let row = i % 4;
        let cx = x + (col as u16) * 19;
        let cy = y + row as u16;

        execute!(
            stdout,
            MoveTo(cx, cy),
            SetForegroundColor(theme.key),
            Print(format!("{:>8}", key)),
            SetForegroundColor(theme.info),
            Print(format!(" {}", desc))
        )?;
    }

    Ok(())
}

fn render_message(
    stdout: &mut io::Stdout,
    app: &App,
    msg: &str,
    term_width: u16,
) -> io::Result<()> {
    let theme = &app.theme;
    let padded = format!("  {}  ", msg);
    let x = term_width.saturating_sub(padded.len() as u16) / 2;

    execute!(
        stdout,
        MoveTo(x, 0),
        SetForegroundColor(theme.fg),
        SetBackgroundColor(theme.current_bg),
        Print(&padded)
    )?;

    Ok(())
}

fn render_celebration(
    stdout: &mut io::Stdout,
    app: &mut App,
    term_width: u16,
    term_height: u16,
) -> io::Result<()> {
    app.celebration.resize(term_width, term_height);

    // Particles fall over the finished board
    for particle in app.celebration.particles() {
        if particle.is_visible(term_width, term_height) {
            execute!(
                stdout,
                MoveTo(particle.x as u16, particle.y as u16),
                SetForegroundColor(particle.color),
                SetBackgroundColor(app.theme.bg),
                Print(particle.char)
            )?;
        }
    }

    // Banner message cycles through the rainbow
    let msg = app.celebration.message();
    let msg_x = term_width.saturating_sub(msg.len() as u16) / 2;
    let hue = (app.celebration.rainbow_offset() * 2.0) % 1.0;
    execute!(
        stdout,
        MoveTo(msg_x, 1),
        SetForegroundColor(hue_to_rgb(hue)),
        SetBackgroundColor(app.theme.bg),
        Print(msg)
    )?;

    let instr = "Press Enter to watch again or 'q' to quit";
    let instr_x = term_width.saturating_sub(instr.len() as u16) / 2;
    execute!(
        stdout,
        MoveTo(instr_x, term_height.saturating_sub(2)),
        SetForegroundColor(Color::Yellow),
        SetBackgroundColor(app.theme.bg),
        Print(instr)
    )?;

    Ok(())
}
