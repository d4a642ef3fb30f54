//! Colour palettes for the light and dark themes.

use ratatui::style::{Color, Modifier, Style};

use crate::core::theme::ThemeMode;

/// Resolved colours for one theme.  Widgets only ever ask the palette for
/// styles, so switching theme is a matter of swapping palettes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub bg: Color,
    pub fg: Color,
    pub muted: Color,
    pub accent: Color,
    pub border: Color,
    pub card_bg: Color,
}

impl Palette {
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => Self {
                bg: Color::Rgb(14, 15, 20),
                fg: Color::Rgb(230, 230, 235),
                muted: Color::Rgb(130, 134, 150),
                accent: Color::Rgb(255, 143, 77),
                border: Color::Rgb(60, 63, 78),
                card_bg: Color::Rgb(26, 28, 36),
            },
            ThemeMode::Light => Self {
                bg: Color::Rgb(250, 248, 244),
                fg: Color::Rgb(28, 28, 32),
                muted: Color::Rgb(110, 110, 120),
                accent: Color::Rgb(214, 88, 30),
                border: Color::Rgb(200, 196, 188),
                card_bg: Color::Rgb(255, 255, 255),
            },
        }
    }

    // ── page ───────────────────────────────────────────────────
    pub fn base_style(&self) -> Style {
        Style::default().bg(self.bg).fg(self.fg)
    }

    pub fn heading_style(&self) -> Style {
        self.base_style().add_modifier(Modifier::BOLD)
    }

    pub fn hero_style(&self) -> Style {
        self.base_style()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn muted_style(&self) -> Style {
        self.base_style().fg(self.muted)
    }

    // ── slider ─────────────────────────────────────────────────
    pub fn card_style(&self) -> Style {
        Style::default().bg(self.card_bg).fg(self.fg)
    }

    pub fn card_border_style(&self) -> Style {
        Style::default().bg(self.card_bg).fg(self.border)
    }

    pub fn tag_style(&self) -> Style {
        Style::default().bg(self.card_bg).fg(self.accent)
    }

    // ── chrome ─────────────────────────────────────────────────
    pub fn button_style(&self) -> Style {
        self.base_style().fg(self.accent)
    }

    pub fn disabled_style(&self) -> Style {
        self.base_style().fg(self.border)
    }

    /// The cell under the pointer inside a hovered button.
    pub fn glow_style(&self) -> Style {
        Style::default()
            .bg(self.accent)
            .fg(self.bg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border_style(&self) -> Style {
        self.base_style().fg(self.border)
    }

    pub fn status_bar_style(&self) -> Style {
        Style::default().bg(self.border).fg(self.fg)
    }

    /// Cursor follower: a reversed cell, accented over interactive elements.
    pub fn cursor_style(&self, active: bool) -> Style {
        if active {
            Style::default().bg(self.accent).fg(self.bg)
        } else {
            Style::default().add_modifier(Modifier::REVERSED)
        }
    }
}
