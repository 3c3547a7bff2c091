use clap::ValueEnum;
use crossterm::style::Color;

/// Selectable theme name, also used as the `--theme` CLI value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ThemeKind {
    Dark,
    Light,
    HighContrast,
}

impl ThemeKind {
    /// The next theme in the cycle order.
    pub fn next(self) -> Self {
        match self {
            ThemeKind::Dark => ThemeKind::Light,
            ThemeKind::Light => ThemeKind::HighContrast,
            ThemeKind::HighContrast => ThemeKind::Dark,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ThemeKind::Dark => "Dark",
            ThemeKind::Light => "Light",
            ThemeKind::HighContrast => "High contrast",
        }
    }

    pub fn theme(self) -> Theme {
        match self {
            ThemeKind::Dark => Theme::dark(),
            ThemeKind::Light => Theme::light(),
            ThemeKind::HighContrast => Theme::high_contrast(),
        }
    }
}

/// Color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    /// Background color
    pub bg: Color,
    /// Default text color
    pub fg: Color,
    /// Light board squares
    pub square_light: Color,
    /// Dark board squares
    pub square_dark: Color,
    /// Step number color (must read on both square colors)
    pub step: Color,
    /// Knight marker color
    pub knight: Color,
    /// Background of the square the knight is on
    pub current_bg: Color,
    /// Info panel text color
    pub info: Color,
    /// Key binding text color
    pub key: Color,
    /// Panel border/separator color
    pub border: Color,
    /// Completion color
    pub success: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            bg: Color::Rgb { r: 20, g: 22, b: 30 },
            fg: Color::Rgb { r: 230, g: 230, b: 240 },
            square_light: Color::Rgb { r: 110, g: 116, b: 132 },
            square_dark: Color::Rgb { r: 58, g: 62, b: 76 },
            step: Color::Rgb { r: 240, g: 240, b: 245 },
            knight: Color::Rgb { r: 255, g: 90, b: 90 },
            current_bg: Color::Rgb { r: 70, g: 90, b: 140 },
            info: Color::Rgb { r: 160, g: 165, b: 185 },
            key: Color::Rgb { r: 255, g: 210, b: 100 },
            border: Color::Rgb { r: 70, g: 75, b: 90 },
            success: Color::Rgb { r: 90, g: 255, b: 130 },
        }
    }

    /// Light theme
    pub fn light() -> Self {
        Self {
            bg: Color::Rgb { r: 248, g: 248, b: 252 },
            fg: Color::Rgb { r: 30, g: 30, b: 40 },
            square_light: Color::Rgb { r: 238, g: 238, b: 244 },
            square_dark: Color::Rgb { r: 176, g: 180, b: 192 },
            step: Color::Rgb { r: 25, g: 25, b: 35 },
            knight: Color::Rgb { r: 220, g: 50, b: 50 },
            current_bg: Color::Rgb { r: 180, g: 200, b: 255 },
            info: Color::Rgb { r: 90, g: 90, b: 110 },
            key: Color::Rgb { r: 200, g: 120, b: 20 },
            border: Color::Rgb { r: 180, g: 180, b: 195 },
            success: Color::Rgb { r: 40, g: 160, b: 60 },
        }
    }

    /// High contrast theme
    pub fn high_contrast() -> Self {
        Self {
            bg: Color::Black,
            fg: Color::White,
            square_light: Color::White,
            square_dark: Color::Grey,
            step: Color::Black,
            knight: Color::Red,
            current_bg: Color::Blue,
            info: Color::Grey,
            key: Color::Yellow,
            border: Color::Grey,
            success: Color::Green,
        }
    }
}
