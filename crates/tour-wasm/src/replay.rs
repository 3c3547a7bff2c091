//! Replay state management for the WASM frontend.
//!
//! Holds no browser handles; timestamps are injected by the caller, so the
//! whole state machine runs from `requestAnimationFrame` ticks.

use serde::{Deserialize, Serialize};
use tour_core::{Square, Tour};

/// Shortest allowed delay between replay steps
pub const MIN_DELAY_MS: f64 = 50.0;
/// Longest allowed delay between replay steps
pub const MAX_DELAY_MS: f64 = 2000.0;
/// Amount +/- changes the delay by
const DELAY_STEP_MS: f64 = 50.0;

/// Screen state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScreenState {
    /// Stepping through the tour on a timer
    Replaying,
    /// Replay suspended; stepping is manual
    Paused,
    /// Every tour square is shown
    Finished,
    /// There is no tour to replay
    Empty,
}

/// Snapshot of the replay for handing to JS as JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplaySnapshot {
    pub size: usize,
    pub start: Option<Square>,
    pub shown: usize,
    pub len: usize,
    pub delay_ms: f64,
    pub screen: ScreenState,
}

/// The replay state
pub struct ReplayState {
    /// The tour being replayed
    tour: Tour,
    /// How many tour squares are currently shown (1-based prefix length)
    shown: usize,
    /// Delay between automatic replay steps
    delay_ms: f64,
    /// Timestamp of the last automatic step
    last_step_ms: Option<f64>,
    /// Screen state
    screen: ScreenState,
    /// Animation frame counter
    frame: u32,
}

impl ReplayState {
    /// Create a replay of `tour` from its first square.
    pub fn new(tour: Tour, delay_ms: f64) -> Self {
        let screen = if tour.is_empty() {
            ScreenState::Empty
        } else if tour.len() == 1 {
            ScreenState::Finished
        } else {
            ScreenState::Replaying
        };
        Self {
            shown: tour.len().min(1),
            tour,
            delay_ms: delay_ms.clamp(MIN_DELAY_MS, MAX_DELAY_MS),
            last_step_ms: None,
            screen,
            frame: 0,
        }
    }

    /// Update replay state (called each animation frame with its timestamp)
    pub fn tick(&mut self, now_ms: f64) {
        self.frame = self.frame.wrapping_add(1);

        if self.screen == ScreenState::Replaying {
            let last = *self.last_step_ms.get_or_insert(now_ms);
            if now_ms - last >= self.delay_ms {
                self.advance();
                self.last_step_ms = Some(now_ms);
            }
        }
    }

    /// Handle a key press, returns true if the key was consumed.
    pub fn handle_key(&mut self, key: &str) -> bool {
        if self.screen == ScreenState::Empty {
            return false;
        }

        match key {
            " " | "p" => self.toggle_pause(),
            "n" | "ArrowRight" => self.step_once(),
            "r" => self.restart(),
            "Enter" if self.screen == ScreenState::Finished => self.restart(),
            "+" | "=" => self.set_delay_ms(self.delay_ms - DELAY_STEP_MS),
            "-" | "_" => self.set_delay_ms(self.delay_ms + DELAY_STEP_MS),
            _ => return false,
        }
        true
    }

    /// Pause or resume; restarts once finished.
    pub fn toggle_pause(&mut self) {
        match self.screen {
            ScreenState::Replaying => self.screen = ScreenState::Paused,
            ScreenState::Paused => {
                self.screen = ScreenState::Replaying;
                self.last_step_ms = None;
            }
            ScreenState::Finished => self.restart(),
            ScreenState::Empty => {}
        }
    }

    /// Show the next square and pause.
    pub fn step_once(&mut self) {
        if self.screen == ScreenState::Finished || self.screen == ScreenState::Empty {
            return;
        }
        self.screen = ScreenState::Paused;
        self.advance();
    }

    /// Start the replay over from the first square.
    pub fn restart(&mut self) {
        if self.screen == ScreenState::Empty {
            return;
        }
        self.shown = 1;
        self.screen = if self.tour.len() == 1 {
            ScreenState::Finished
        } else {
            ScreenState::Replaying
        };
        self.last_step_ms = None;
    }

    /// Set the step delay, clamped to the allowed range.
    pub fn set_delay_ms(&mut self, delay_ms: f64) {
        self.delay_ms = delay_ms.clamp(MIN_DELAY_MS, MAX_DELAY_MS);
    }

    fn advance(&mut self) {
        if self.shown < self.tour.len() {
            self.shown += 1;
            if self.shown == self.tour.len() {
                self.screen = ScreenState::Finished;
            }
        }
    }

    pub fn tour(&self) -> &Tour {
        &self.tour
    }

    /// Board dimension N.
    pub fn size(&self) -> usize {
        self.tour.size()
    }

    /// How many squares of the tour are shown.
    pub fn shown(&self) -> usize {
        self.shown
    }

    pub fn len(&self) -> usize {
        self.tour.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tour.is_empty()
    }

    pub fn screen(&self) -> ScreenState {
        self.screen
    }

    pub fn delay_ms(&self) -> f64 {
        self.delay_ms
    }

    pub fn frame(&self) -> u32 {
        self.frame
    }

    /// The square the knight currently stands on.
    pub fn current_square(&self) -> Option<Square> {
        if self.shown == 0 {
            None
        } else {
            self.tour.get(self.shown - 1)
        }
    }

    /// Snapshot for serialization to JS.
    pub fn snapshot(&self) -> ReplaySnapshot {
        ReplaySnapshot {
            size: self.size(),
            start: self.tour.first(),
            shown: self.shown,
            len: self.tour.len(),
            delay_ms: self.delay_ms,
            screen: self.screen,
        }
    }
}
