//! Cursor follower and button glow, painted over the finished frame.

use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use crate::core::cursor::ButtonGlow;

use super::theme::Palette;

pub struct CursorOverlay {
    /// Pointer cell, if the pointer has moved yet.
    pub position: Option<(f64, f64)>,
    pub active: bool,
    /// Hovered button and the pointer position inside it.
    pub glow: Option<(Rect, ButtonGlow)>,
    pub palette: Palette,
}

impl Widget for CursorOverlay {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if let Some((button, glow)) = self.glow {
            let x = f64::from(button.x) + glow.x;
            let y = f64::from(button.y) + glow.y;
            paint(buf, area, x, y, self.palette.glow_style());
        }
        if let Some((x, y)) = self.position {
            paint(buf, area, x, y, self.palette.cursor_style(self.active));
        }
    }
}

fn paint(buf: &mut Buffer, area: Rect, x: f64, y: f64, style: ratatui::style::Style) {
    if x < 0.0 || y < 0.0 {
        return;
    }
    let (x, y) = (x as u16, y as u16);
    if !super::layout::hit(area, x, y) {
        return;
    }
    if let Some(cell) = buf.cell_mut((x, y)) {
        cell.set_style(style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::theme::ThemeMode;

    #[test]
    fn active_cursor_uses_the_accent() {
        let area = Rect::new(0, 0, 10, 3);
        let mut buf = Buffer::empty(area);
        let palette = Palette::for_mode(ThemeMode::Dark);
        CursorOverlay {
            position: Some((4.0, 1.0)),
            active: true,
            glow: None,
            palette,
        }
        .render(area, &mut buf);
        assert_eq!(buf[(4, 1)].bg, palette.accent);
        assert_eq!(buf[(3, 1)].bg, ratatui::style::Color::Reset);
    }

    #[test]
    fn glow_lands_inside_the_button() {
        let area = Rect::new(0, 0, 20, 3);
        let mut buf = Buffer::empty(area);
        let palette = Palette::for_mode(ThemeMode::Light);
        let button = Rect::new(5, 1, 8, 1);
        CursorOverlay {
            position: None,
            active: false,
            glow: Some((button, ButtonGlow { x: 3.0, y: 0.0 })),
            palette,
        }
        .render(area, &mut buf);
        assert_eq!(buf[(8, 1)].bg, palette.accent);
    }

    #[test]
    fn off_screen_positions_are_ignored() {
        let area = Rect::new(0, 0, 4, 2);
        let mut buf = Buffer::empty(area);
        CursorOverlay {
            position: Some((40.0, 40.0)),
            active: false,
            glow: None,
            palette: Palette::for_mode(ThemeMode::Dark),
        }
        .render(area, &mut buf);
        assert_eq!(buf, Buffer::empty(area));
    }
}
