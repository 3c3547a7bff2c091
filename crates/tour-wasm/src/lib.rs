//! Browser build of the knight's tour replay.
//!
//! Runs the same engine as the terminal frontend and replays the found tour
//! on an HTML canvas, ticked from `requestAnimationFrame` timestamps.

use tour_core::{Searcher, Square, Tour, DEFAULT_BOARD_SIZE};
use wasm_bindgen::prelude::*;
use web_sys::{console, CanvasRenderingContext2d, HtmlCanvasElement, HtmlElement, KeyboardEvent};

mod replay;
mod render;
mod theme;

// ReplayState takes no browser handles, so its tests run on the host
#[cfg(test)]
mod tests;

pub use replay::{ReplayState, ScreenState};
pub use theme::Theme;

/// Default delay between replay steps in milliseconds
const DEFAULT_DELAY_MS: f64 = 500.0;

// Initialize panic hook for better error messages
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// The main WASM replay controller
#[wasm_bindgen]
pub struct TourAnimation {
    state: ReplayState,
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    theme: Theme,
    board_size: usize,
    cell_size: f64,
    font_size: f64,
    width: u32,
    height: u32,
    dpr: f64, // Device pixel ratio for crisp rendering
}

#[wasm_bindgen]
impl TourAnimation {
    /// Create a controller attached to a canvas element. No tour is loaded
    /// until `search` is called.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str) -> Result<TourAnimation, JsValue> {
        let document = web_sys::window()
            .ok_or("No window")?
            .document()
            .ok_or("No document")?;

        let canvas = document
            .get_element_by_id(canvas_id)
            .ok_or("Canvas not found")?
            .dyn_into::<HtmlCanvasElement>()?;

        let ctx = canvas
            .get_context("2d")?
            .ok_or("Failed to get 2d context")?
            .dyn_into::<CanvasRenderingContext2d>()?;

        // Get device pixel ratio for crisp rendering on high-DPI displays
        let dpr = web_sys::window()
            .map(|w| w.device_pixel_ratio())
            .unwrap_or(1.0);

        let width = 1000;
        let height = 700;

        // Set actual canvas resolution (scaled by dpr)
        canvas.set_width((width as f64 * dpr) as u32);
        canvas.set_height((height as f64 * dpr) as u32);

        // Set CSS display size (logical pixels)
        let html_element: &HtmlElement = canvas.as_ref();
        let style = html_element.style();
        let _ = style.set_property("width", &format!("{}px", width));
        let _ = style.set_property("height", &format!("{}px", height));

        // Scale context to account for dpr
        let _ = ctx.scale(dpr, dpr);

        let mut animation = TourAnimation {
            state: ReplayState::new(Tour::empty(DEFAULT_BOARD_SIZE), DEFAULT_DELAY_MS),
            canvas,
            ctx,
            theme: Theme::dark(),
            board_size: DEFAULT_BOARD_SIZE,
            cell_size: 56.0,
            font_size: 24.0,
            width,
            height,
            dpr,
        };
        animation.update_cell_metrics();

        animation.render();
        Ok(animation)
    }

    /// Run the tour search from the given square and load the result.
    /// Returns true if a complete tour was found.
    ///
    /// The search is exhaustive and synchronous; on an 8x8 board the time to
    /// the first tour varies enormously with the start square.
    #[wasm_bindgen]
    pub fn search(&mut self, start_row: usize, start_col: usize) -> bool {
        let searcher = Searcher::with_size(self.board_size);
        let delay = self.state.delay_ms();

        let tour = match searcher.find_tour(Square::new(start_row, start_col)) {
            Ok(tour) => tour,
            Err(e) => {
                console::warn_1(&e.to_string().into());
                return false;
            }
        };

        if tour.is_empty() {
            console::log_1(&"No tour found.".into());
        } else {
            console::log_1(&format!("Tour found with {} steps.", tour.len()).into());
        }

        let found = !tour.is_empty();
        self.state = ReplayState::new(tour, delay);
        self.render();
        found
    }

    /// Update replay state (call from requestAnimationFrame with its timestamp)
    #[wasm_bindgen]
    pub fn tick(&mut self, now_ms: f64) {
        self.state.tick(now_ms);
        self.render();
    }

    /// Handle keyboard input, returns true if the key was consumed
    #[wasm_bindgen]
    pub fn handle_key(&mut self, event: &KeyboardEvent) -> bool {
        let key = event.key();
        let handled = self.state.handle_key(&key);
        if handled {
            self.render();
        }
        handled
    }

    /// Set the color theme
    #[wasm_bindgen]
    pub fn set_theme(&mut self, theme_name: &str) {
        self.theme = match theme_name {
            "light" => Theme::light(),
            "high_contrast" => Theme::high_contrast(),
            _ => Theme::dark(),
        };
        self.render();
    }

    /// Set the delay between replay steps, clamped to the allowed range
    #[wasm_bindgen]
    pub fn set_delay_ms(&mut self, delay_ms: f64) {
        self.state.set_delay_ms(delay_ms);
        self.render();
    }

    /// Set the board dimension for subsequent searches. Clears any loaded tour.
    #[wasm_bindgen]
    pub fn set_board_size(&mut self, size: usize) {
        self.board_size = size.max(1);
        self.state = ReplayState::new(Tour::empty(self.board_size), self.state.delay_ms());
        self.update_cell_metrics();
        self.render();
    }

    /// Toggle pause
    #[wasm_bindgen]
    pub fn toggle_pause(&mut self) {
        self.state.toggle_pause();
        self.render();
    }

    /// Restart the replay from the first square
    #[wasm_bindgen]
    pub fn restart(&mut self) {
        self.state.restart();
        self.render();
    }

    /// Get current replay state as JSON
    #[wasm_bindgen]
    pub fn get_state_json(&self) -> String {
        serde_json::to_string(&self.state.snapshot()).unwrap_or_default()
    }

    /// The loaded tour as an array of {row, col} squares
    #[wasm_bindgen]
    pub fn tour_squares(&self) -> JsValue {
        serde_wasm_bindgen::to_value(self.state.tour().squares()).unwrap_or(JsValue::NULL)
    }

    /// Check if a tour is loaded
    #[wasm_bindgen]
    pub fn has_tour(&self) -> bool {
        !self.state.is_empty()
    }

    /// Check if the replay has shown the whole tour
    #[wasm_bindgen]
    pub fn is_finished(&self) -> bool {
        self.state.screen() == ScreenState::Finished
    }

    /// Check if paused
    #[wasm_bindgen]
    pub fn is_paused(&self) -> bool {
        self.state.screen() == ScreenState::Paused
    }

    /// How many squares of the tour are shown
    #[wasm_bindgen]
    pub fn shown(&self) -> usize {
        self.state.shown()
    }

    /// Number of squares in the loaded tour
    #[wasm_bindgen]
    pub fn tour_len(&self) -> usize {
        self.state.len()
    }

    /// Current delay between replay steps
    #[wasm_bindgen]
    pub fn delay_ms(&self) -> f64 {
        self.state.delay_ms()
    }

    /// Resize the canvas
    #[wasm_bindgen]
    pub fn resize(&mut self, width: u32, height: u32) {
        // Minimum sizes
        let width = width.max(480);
        let height = height.max(360);

        self.width = width;
        self.height = height;

        // Update dpr in case it changed (e.g., moving to a different monitor)
        self.dpr = web_sys::window()
            .map(|w| w.device_pixel_ratio())
            .unwrap_or(1.0);

        // Set actual canvas resolution (scaled by dpr for crisp rendering)
        self.canvas.set_width((width as f64 * self.dpr) as u32);
        self.canvas.set_height((height as f64 * self.dpr) as u32);

        // Set CSS display size (logical pixels)
        let html_element: &HtmlElement = self.canvas.as_ref();
        let style = html_element.style();
        let _ = style.set_property("width", &format!("{}px", width));
        let _ = style.set_property("height", &format!("{}px", height));

        // Reset and scale context to account for dpr
        let _ = self.ctx.reset_transform();
        let _ = self.ctx.scale(self.dpr, self.dpr);

        self.update_cell_metrics();
        self.render();
    }

    /// Get current width
    #[wasm_bindgen]
    pub fn get_width(&self) -> u32 {
        self.width
    }

    /// Get current height
    #[wasm_bindgen]
    pub fn get_height(&self) -> u32 {
        self.height
    }

    /// Fit the board into the canvas, leaving room for the info panel
    fn update_cell_metrics(&mut self) {
        let n = self.board_size.max(1) as f64;
        let max_board_height = (self.height as f64 - 80.0).max(200.0);
        let max_board_width = (self.width as f64 * 0.6).max(200.0);
        self.cell_size = (max_board_height / n)
            .min(max_board_width / n)
            .min(90.0)
            .max(20.0);
        self.font_size = (self.cell_size * 0.45).min(32.0).max(12.0);
    }

    /// Render the replay to canvas
    fn render(&self) {
        render::render_replay(
            &self.ctx,
            &self.state,
            &self.theme,
            self.width,
            self.height,
            self.cell_size,
            self.font_size,
        );
    }
}
