//! Site header (brand, menu toggle, theme toggle) and the navigation
//! drop-down.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

use crate::core::page::NavLink;
use crate::core::theme::ThemeMode;

use super::layout::HeaderZones;
use super::theme::Palette;

// ───────────────────────────────────────── header bar ────────

pub struct HeaderWidget<'a> {
    pub brand: &'a str,
    pub zones: HeaderZones,
    pub menu_open: bool,
    pub theme: ThemeMode,
    pub palette: Palette,
}

impl<'a> HeaderWidget<'a> {
    fn menu_label(&self) -> &'static str {
        if self.menu_open {
            "[✕ Menu]"
        } else {
            "[≡ Menu]"
        }
    }

    fn theme_label(&self) -> &'static str {
        match self.theme {
            ThemeMode::Dark => "[◑ Dark ]",
            ThemeMode::Light => "[◐ Light]",
        }
    }
}

impl<'a> Widget for HeaderWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, self.palette.base_style());
        Paragraph::new(Span::styled(
            format!(" {}", self.brand),
            self.palette.hero_style(),
        ))
        .render(self.zones.brand.intersection(area), buf);
        Paragraph::new(Span::styled(self.menu_label(), self.palette.button_style()))
            .render(self.zones.menu_toggle.intersection(area), buf);
        Paragraph::new(Span::styled(self.theme_label(), self.palette.button_style()))
            .render(self.zones.theme_toggle.intersection(area), buf);
    }
}

// ───────────────────────────────────────── nav menu ──────────

/// The open navigation menu.  `area` is computed by
/// [`menu_area`](super::layout::menu_area).
pub struct NavMenuPopup<'a> {
    pub links: &'a [NavLink],
    /// Link under the pointer, if any.
    pub hovered: Option<usize>,
    pub palette: Palette,
}

impl<'a> Widget for NavMenuPopup<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.palette.border_style())
            .style(self.palette.base_style());
        let inner = block.inner(area);
        block.render(area, buf);

        let lines: Vec<Line> = self
            .links
            .iter()
            .enumerate()
            .map(|(i, link)| {
                let style = if self.hovered == Some(i) {
                    self.palette.glow_style()
                } else {
                    self.palette.base_style()
                };
                Line::from(Span::styled(format!(" {} ", link.label), style))
            })
            .collect();
        Paragraph::new(lines).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::page::Page;
    use crate::ui::layout::{link_rects, menu_area};

    fn text(buf: &Buffer) -> String {
        buf.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn header_shows_brand_and_theme_state() {
        let area = Rect::new(0, 0, 60, 1);
        let mut buf = Buffer::empty(area);
        HeaderWidget {
            brand: "Hadi",
            zones: HeaderZones::from_area(area),
            menu_open: false,
            theme: ThemeMode::Light,
            palette: Palette::for_mode(ThemeMode::Light),
        }
        .render(area, &mut buf);
        let row = text(&buf);
        assert!(row.contains("Hadi"));
        assert!(row.contains("Light"));
        assert!(row.contains("Menu"));
    }

    #[test]
    fn menu_lists_every_link_inside_its_rows() {
        let page = Page::portfolio();
        let screen = Rect::new(0, 0, 80, 24);
        let toggle = HeaderZones::from_area(Rect::new(0, 0, 80, 1)).menu_toggle;
        let menu = menu_area(toggle, &page, screen);
        let mut buf = Buffer::empty(screen);
        NavMenuPopup {
            links: &page.nav,
            hovered: None,
            palette: Palette::for_mode(ThemeMode::Dark),
        }
        .render(menu, &mut buf);

        for (link, rect) in page.nav.iter().zip(link_rects(menu, page.nav.len())) {
            let row: String = (rect.x..rect.x + rect.width)
                .map(|x| buf[(x, rect.y)].symbol().to_string())
                .collect();
            assert!(row.contains(&link.label), "{} missing from {row:?}", link.label);
        }
    }
}
