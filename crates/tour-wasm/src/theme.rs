//! Color themes for the WASM replay UI

use serde::{Deserialize, Serialize};

/// RGB color
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn as_css(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }

    pub fn as_css_alpha(&self, alpha: f64) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
    }
}

/// Color theme for the replay
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    /// Page background color
    pub background: Color,
    /// Light board square
    pub square_light: Color,
    /// Dark board square
    pub square_dark: Color,
    /// Square the knight stands on
    pub current_bg: Color,
    /// Board outline
    pub board_border: Color,
    /// Step number color
    pub step_text: Color,
    /// Knight marker color
    pub knight: Color,
    /// Info panel text
    pub info_text: Color,
    /// Key hints in the controls list
    pub key_text: Color,
    /// Message text
    pub message_text: Color,
    /// Completion banner color
    pub win_color: Color,
}

impl Theme {
    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            background: Color::new(24, 24, 32),
            square_light: Color::new(90, 80, 70),
            square_dark: Color::new(50, 44, 38),
            current_bg: Color::new(70, 100, 150),
            board_border: Color::new(100, 100, 140),
            step_text: Color::new(220, 215, 200),
            knight: Color::new(255, 90, 90),
            info_text: Color::new(160, 160, 180),
            key_text: Color::new(255, 200, 100),
            message_text: Color::new(255, 220, 100),
            win_color: Color::new(100, 255, 150),
        }
    }

    /// Light theme
    pub fn light() -> Self {
        Self {
            background: Color::new(245, 245, 250),
            square_light: Color::new(238, 220, 180),
            square_dark: Color::new(181, 136, 99),
            current_bg: Color::new(180, 210, 255),
            board_border: Color::new(80, 80, 100),
            step_text: Color::new(40, 30, 20),
            knight: Color::new(200, 30, 30),
            info_text: Color::new(60, 60, 80),
            key_text: Color::new(150, 100, 0),
            message_text: Color::new(180, 120, 0),
            win_color: Color::new(50, 180, 80),
        }
    }

    /// High contrast theme
    pub fn high_contrast() -> Self {
        Self {
            background: Color::new(0, 0, 0),
            square_light: Color::new(200, 200, 200),
            square_dark: Color::new(60, 60, 60),
            current_bg: Color::new(0, 80, 160),
            board_border: Color::new(255, 255, 255),
            step_text: Color::new(255, 255, 0),
            knight: Color::new(255, 0, 0),
            info_text: Color::new(200, 200, 200),
            key_text: Color::new(255, 255, 0),
            message_text: Color::new(255, 255, 0),
            win_color: Color::new(0, 255, 0),
        }
    }
}
