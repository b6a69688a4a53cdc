//! Colour palette handed to the renderer.
//!
//! A [`Theme`] is an immutable value passed to [`crate::core::render::Renderer`]
//! at construction; there is no process-wide theme.

use colored::{Color, ColoredString, Colorize};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub accent: Color,
    pub highlight: Color,
    pub text: Color,
    pub muted: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
}

impl Theme {
    /// Catppuccin Macchiato
    pub fn macchiato() -> Self {
        Self {
            accent: Color::TrueColor { r: 198, g: 160, b: 246 },
            highlight: Color::TrueColor { r: 138, g: 173, b: 244 },
            text: Color::TrueColor { r: 202, g: 211, b: 245 },
            muted: Color::TrueColor { r: 165, g: 173, b: 203 },
            success: Color::TrueColor { r: 166, g: 218, b: 149 },
            warning: Color::TrueColor { r: 238, g: 212, b: 159 },
            error: Color::TrueColor { r: 237, g: 135, b: 150 },
        }
    }

    /// Basic ANSI colours for terminals without true colour support.
    pub fn ansi() -> Self {
        Self {
            accent: Color::Magenta,
            highlight: Color::Blue,
            text: Color::White,
            muted: Color::BrightBlack,
            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
        }
    }

    pub fn accent(&self, text: &str) -> ColoredString {
        text.color(self.accent).bold()
    }

    pub fn highlight(&self, text: &str) -> ColoredString {
        text.color(self.highlight).bold()
    }

    pub fn text(&self, text: &str) -> ColoredString {
        text.color(self.text)
    }

    pub fn muted(&self, text: &str) -> ColoredString {
        text.color(self.muted)
    }

    pub fn success(&self, text: &str) -> ColoredString {
        text.color(self.success)
    }

    pub fn warning(&self, text: &str) -> ColoredString {
        text.color(self.warning)
    }

    pub fn error(&self, text: &str) -> ColoredString {
        text.color(self.error)
    }
}

impl Default for Theme {
    fn default() -> Self {
        match std::env::var("COLORTERM").as_deref() {
            Ok("truecolor") | Ok("24bit") => Self::macchiato(),
            _ => Self::ansi(),
        }
    }
}
