use ratatui::style::Color;

use crate::theme::Presentation;
use crate::types::ThemeMode;

/// Color theme for the preview, switched between light and dark.
#[derive(Clone, Copy, Debug)]
pub struct UiTheme {
    mode: ThemeMode,
}

impl Default for UiTheme {
    fn default() -> Self {
        Self {
            mode: ThemeMode::Dark,
        }
    }
}

impl Presentation for UiTheme {
    fn apply(&mut self, mode: ThemeMode) {
        self.mode = mode;
    }
}

impl UiTheme {
    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// Screen background
    pub fn background(&self) -> Color {
        match self.mode {
            ThemeMode::Dark => Color::Rgb(0x12, 0x12, 0x1c),
            ThemeMode::Light => Color::Rgb(0xf5, 0xf5, 0xf0),
        }
    }

    /// Primary branding color
    pub fn primary(&self) -> Color {
        match self.mode {
            ThemeMode::Dark => Color::Magenta,
            ThemeMode::Light => Color::Rgb(0x72, 0x09, 0xb7),
        }
    }

    /// Secondary/border color
    pub fn secondary(&self) -> Color {
        match self.mode {
            ThemeMode::Dark => Color::Cyan,
            ThemeMode::Light => Color::Rgb(0x43, 0x61, 0xee),
        }
    }

    /// Dimmed/inactive text
    pub fn dim(&self) -> Color {
        match self.mode {
            ThemeMode::Dark => Color::DarkGray,
            ThemeMode::Light => Color::Gray,
        }
    }

    /// Normal text
    pub fn text(&self) -> Color {
        match self.mode {
            ThemeMode::Dark => Color::White,
            ThemeMode::Light => Color::Black,
        }
    }

    /// Accent for numbers and labels
    pub fn accent(&self) -> Color {
        match self.mode {
            ThemeMode::Dark => Color::LightBlue,
            ThemeMode::Light => Color::Rgb(0xf7, 0x25, 0x85),
        }
    }

    /// Error/status messages
    pub fn warn(&self) -> Color {
        match self.mode {
            ThemeMode::Dark => Color::Yellow,
            ThemeMode::Light => Color::Rgb(0xb3, 0x5c, 0x00),
        }
    }
}
