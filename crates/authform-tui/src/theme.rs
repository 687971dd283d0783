//! Resolved colors for rendering.

use std::str::FromStr;

use anyhow::{Context, Result};
use authform_core::NotificationKind;
use authform_core::config::ThemeConfig;
use ratatui::style::{Color, Modifier, Style};

/// Theme colors parsed into ratatui values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub primary: Color,
    pub background: Color,
    pub card_background: Color,
    pub text: Color,
    pub text_secondary: Color,
    pub error: Color,
}

impl Palette {
    /// Parses every color in `theme`.
    ///
    /// # Errors
    /// Returns an error naming the first key whose value is not a color.
    pub fn from_config(theme: &ThemeConfig) -> Result<Self> {
        Ok(Self {
            primary: parse_color("theme.primary", &theme.primary)?,
            background: parse_color("theme.background", &theme.background)?,
            card_background: parse_color("theme.card_background", &theme.card_background)?,
            text: parse_color("theme.text", &theme.text)?,
            text_secondary: parse_color("theme.text_secondary", &theme.text_secondary)?,
            error: parse_color("theme.error", &theme.error)?,
        })
    }

    pub fn screen(&self) -> Style {
        Style::default().bg(self.background)
    }

    pub fn card(&self) -> Style {
        Style::default().fg(self.text).bg(self.card_background)
    }

    pub fn heading(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .bg(self.card_background)
            .add_modifier(Modifier::BOLD)
    }

    pub fn hint(&self) -> Style {
        Style::default().fg(self.text_secondary).bg(self.background)
    }

    /// Snackbar style: error text on the card color, or text on primary.
    pub fn notification(&self, kind: NotificationKind) -> Style {
        match kind {
            NotificationKind::Error => Style::default().fg(self.error).bg(self.card_background),
            NotificationKind::Success => Style::default().fg(self.text).bg(self.primary),
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            primary: Color::Blue,
            background: Color::Rgb(0x1a, 0x1a, 0x1a),
            card_background: Color::Rgb(0x2d, 0x2d, 0x2d),
            text: Color::White,
            text_secondary: Color::Rgb(0xb0, 0xbe, 0xc5),
            error: Color::Rgb(0xef, 0x53, 0x50),
        }
    }
}

fn parse_color(key: &str, value: &str) -> Result<Color> {
    Color::from_str(value.trim()).ok().with_context(|| {
        format!("Invalid color for {key}: '{value}' (use a color name or #rrggbb)")
    })
}
