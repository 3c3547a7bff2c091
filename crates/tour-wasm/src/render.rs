//! Canvas rendering for the replay UI

use crate::replay::{ReplayState, ScreenState};
use crate::theme::Theme;
use tour_core::Square;
use web_sys::CanvasRenderingContext2d;

/// Render the complete replay to canvas
pub fn render_replay(
    ctx: &CanvasRenderingContext2d,
    state: &ReplayState,
    theme: &Theme,
    width: u32,
    height: u32,
    cell_size: f64,
    font_size: f64,
) {
    // Clear background
    ctx.set_fill_style_str(&theme.background.as_css());
    ctx.fill_rect(0.0, 0.0, width as f64, height as f64);

    if state.screen() == ScreenState::Empty {
        render_empty(ctx, theme, width, height, font_size);
        return;
    }

    // Board on the left, info panel beside it
    let board_px = cell_size * state.size() as f64;
    let board_x = 40.0;
    let board_y = (height as f64 - board_px) / 2.0;

    render_board(ctx, state, theme, board_x, board_y, cell_size, font_size);
    render_info_panel(
        ctx,
        state,
        theme,
        board_x + board_px + 30.0,
        board_y,
        font_size,
    );

    if state.screen() == ScreenState::Finished {
        render_finished_banner(ctx, state, theme, board_x, board_y, board_px, font_size);
    }
}

/// Render the checkerboard with step numbers and the knight marker
fn render_board(
    ctx: &CanvasRenderingContext2d,
    state: &ReplayState,
    theme: &Theme,
    x: f64,
    y: f64,
    cell_size: f64,
    font_size: f64,
) {
    let size = state.size();
    let current = state.current_square();

    // Step number on each square for the shown prefix, 0 = not yet reached
    let mut steps = vec![0usize; size * size];
    for (i, sq) in state.tour().iter().take(state.shown()).enumerate() {
        steps[sq.row * size + sq.col] = i + 1;
    }

    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");

    for row in 0..size {
        for col in 0..size {
            let cell_x = x + col as f64 * cell_size;
            let cell_y = y + row as f64 * cell_size;
            let square = Square::new(row, col);

            let bg = if current == Some(square) {
                &theme.current_bg
            } else if (row + col) % 2 == 0 {
                &theme.square_light
            } else {
                &theme.square_dark
            };
            ctx.set_fill_style_str(&bg.as_css());
            ctx.fill_rect(cell_x, cell_y, cell_size, cell_size);

            let center_x = cell_x + cell_size / 2.0;
            let center_y = cell_y + cell_size / 2.0;

            if current == Some(square) {
                ctx.set_font(&format!("{}px serif", cell_size * 0.7));
                ctx.set_fill_style_str(&theme.knight.as_css());
                let _ = ctx.fill_text("♞", center_x, center_y);
            } else {
                let step = steps[row * size + col];
                if step > 0 {
                    ctx.set_font(&format!(
                        "{}px 'JetBrains Mono', 'Fira Code', 'Consolas', monospace",
                        font_size
                    ));
                    ctx.set_fill_style_str(&theme.step_text.as_css());
                    let _ = ctx.fill_text(&step.to_string(), center_x, center_y);
                }
            }
        }
    }

    // Board outline
    ctx.set_stroke_style_str(&theme.board_border.as_css());
    ctx.set_line_width(2.0);
    ctx.stroke_rect(x, y, cell_size * size as f64, cell_size * size as f64);
}

/// Render replay facts and the key list beside the board
fn render_info_panel(
    ctx: &CanvasRenderingContext2d,
    state: &ReplayState,
    theme: &Theme,
    x: f64,
    y: f64,
    font_size: f64,
) {
    let info_font = (font_size * 0.75).max(13.0);
    let line = info_font * 1.7;
    let mut cy = y + info_font;

    ctx.set_text_align("left");
    ctx.set_text_baseline("middle");

    ctx.set_font(&format!("bold {}px 'JetBrains Mono', monospace", info_font));
    ctx.set_fill_style_str(&theme.key_text.as_css());
    let _ = ctx.fill_text("KNIGHT'S TOUR", x, cy);
    cy += line * 1.3;

    ctx.set_font(&format!("{}px 'JetBrains Mono', monospace", info_font));
    ctx.set_fill_style_str(&theme.info_text.as_css());

    let size = state.size();
    let _ = ctx.fill_text(&format!("Board: {}x{}", size, size), x, cy);
    cy += line;

    if let Some(start) = state.tour().first() {
        let _ = ctx.fill_text(&format!("Start: {}", start), x, cy);
        cy += line;
    }

    let _ = ctx.fill_text(&format!("Step: {}/{}", state.shown(), state.len()), x, cy);
    cy += line;

    let _ = ctx.fill_text(&format!("Delay: {} ms", state.delay_ms() as u32), x, cy);
    cy += line;

    let screen_str = match state.screen() {
        ScreenState::Replaying => "Replaying",
        ScreenState::Paused => "Paused",
        ScreenState::Finished => "Finished",
        ScreenState::Empty => "No tour",
    };
    let _ = ctx.fill_text(&format!("State: {}", screen_str), x, cy);
    cy += line * 1.5;

    let controls = [
        ("Space/p", "pause"),
        ("n/→", "step"),
        ("r", "restart"),
        ("+/-", "speed"),
    ];
    for (key, desc) in controls {
        ctx.set_fill_style_str(&theme.key_text.as_css());
        let _ = ctx.fill_text(key, x, cy);
        ctx.set_fill_style_str(&theme.info_text.as_css());
        let _ = ctx.fill_text(desc, x + info_font * 5.5, cy);
        cy += line * 0.9;
    }
}

/// Pulsing completion banner above the board
fn render_finished_banner(
    ctx: &CanvasRenderingContext2d,
    state: &ReplayState,
    theme: &Theme,
    board_x: f64,
    board_y: f64,
    board_px: f64,
    font_size: f64,
) {
    let pulse = (state.frame() as f64 * 0.08).sin() * 0.25 + 0.75;
    let banner_font = (font_size * 1.4).max(22.0);

    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    ctx.set_font(&format!("bold {}px 'JetBrains Mono', monospace", banner_font));
    ctx.set_fill_style_str(&theme.win_color.as_css_alpha(pulse));
    let _ = ctx.fill_text(
        "TOUR COMPLETE!",
        board_x + board_px / 2.0,
        (board_y / 2.0).max(banner_font),
    );
}

/// Shown when the search produced no tour
fn render_empty(
    ctx: &CanvasRenderingContext2d,
    theme: &Theme,
    width: u32,
    height: u32,
    font_size: f64,
) {
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    ctx.set_font(&format!(
        "{}px 'JetBrains Mono', monospace",
        font_size.max(18.0)
    ));
    ctx.set_fill_style_str(&theme.message_text.as_css());
    let _ = ctx.fill_text("No tour found.", width as f64 / 2.0, height as f64 / 2.0);
}
