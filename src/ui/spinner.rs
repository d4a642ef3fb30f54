//! Preloader splash — brand name and a spinner covering the whole screen
//! until the preloader hides.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget},
};

use super::theme::Palette;

/// Braille-dot spinner frames.  Cycles through these on each tick.
const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub struct PreloaderSplash<'a> {
    pub brand: &'a str,
    /// Monotonically increasing tick counter (drives the spinner frame).
    pub tick: u64,
    pub palette: Palette,
}

impl<'a> Widget for PreloaderSplash<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);
        buf.set_style(area, self.palette.base_style());
        if area.height < 2 {
            return;
        }

        let frame = SPINNER_FRAMES[(self.tick % SPINNER_FRAMES.len() as u64) as usize];
        let lines = vec![
            Line::from(Span::styled(self.brand.to_string(), self.palette.hero_style())).centered(),
            Line::from(Span::styled(frame, self.palette.muted_style())).centered(),
        ];
        let popup = centered_fixed(area.width, 2, area);
        Paragraph::new(lines).render(popup, buf);
    }
}

/// A `width × height` rectangle centred in `area`.
pub fn centered_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    Rect::new(x, y, w, h)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::theme::ThemeMode;

    #[test]
    fn splash_centres_the_brand() {
        let area = Rect::new(0, 0, 20, 6);
        let mut buf = Buffer::empty(area);
        PreloaderSplash {
            brand: "Hadi",
            tick: 3,
            palette: Palette::for_mode(ThemeMode::Dark),
        }
        .render(area, &mut buf);
        let row: String = (0..20).map(|x| buf[(x, 2)].symbol().to_string()).collect();
        assert_eq!(row.trim(), "Hadi");
        let spinner: String = (0..20).map(|x| buf[(x, 3)].symbol().to_string()).collect();
        assert_eq!(spinner.trim(), "⠸");
    }

    #[test]
    fn centered_fixed_clamps_to_the_area() {
        assert_eq!(centered_fixed(50, 50, Rect::new(2, 2, 10, 4)), Rect::new(2, 2, 10, 4));
        assert_eq!(centered_fixed(4, 2, Rect::new(0, 0, 10, 6)), Rect::new(3, 2, 4, 2));
    }
}
