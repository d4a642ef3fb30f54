//! Scrollable page body: sections, slider and footer.
//!
//! Each section is drawn into its own off-screen buffer at full height and
//! the rows inside the scroll window are copied over, so partially scrolled
//! sections clip cleanly.  Sections that have not been revealed yet are
//! left blank.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::core::page::{Page, Section, SectionKind};

use super::layout::{contact_button, content_row, slider_regions, title_row, BodyLayout, MARGIN_X};
use super::slider_widget::{SliderWidget, TerminalStrip};
use super::theme::Palette;

pub struct PageWidget<'a> {
    pub page: &'a Page,
    pub layout: &'a BodyLayout,
    pub scroll: u16,
    /// Per-section visibility (reveal state), indexed like `page.sections`.
    pub visible: &'a [bool],
    pub strip: &'a TerminalStrip,
    pub slider_index: usize,
    pub palette: Palette,
}

impl<'a> Widget for PageWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, self.palette.base_style());

        for (i, (section, slot)) in self.page.sections.iter().zip(&self.layout.slots).enumerate() {
            if slot.bottom() <= self.scroll || slot.top >= self.scroll.saturating_add(area.height) {
                continue;
            }
            if !self.visible.get(i).copied().unwrap_or(true) {
                continue;
            }

            let section_area = Rect::new(0, 0, area.width, slot.height);
            let mut scratch = Buffer::empty(section_area);
            scratch.set_style(section_area, self.palette.base_style());
            self.render_section(section, section_area, &mut scratch);
            blit_rows(&scratch, slot.top, self.scroll, area, buf);
        }

        // Footer (always visible).
        let footer_row = i32::from(self.layout.footer_top) + 1 - i32::from(self.scroll);
        if footer_row >= 0 && footer_row < i32::from(area.height) {
            let y = area.y + footer_row as u16;
            Paragraph::new(Line::from(Span::styled(
                self.page.footer.clone(),
                self.palette.muted_style(),
            )).centered())
            .render(Rect::new(area.x, y, area.width, 1), buf);
        }
    }
}

impl<'a> PageWidget<'a> {
    fn render_section(&self, section: &Section, area: Rect, buf: &mut Buffer) {
        let inner_width = area.width.saturating_sub(MARGIN_X * 2);
        let title_style = match section.kind {
            SectionKind::Hero => self.palette.hero_style(),
            _ => self.palette.heading_style(),
        };
        Paragraph::new(Span::styled(section.title.clone(), title_style))
            .render(Rect::new(MARGIN_X, title_row(), inner_width, 1), buf);

        match section.kind {
            SectionKind::Slider => {
                SliderWidget {
                    projects: &self.page.projects,
                    strip: self.strip,
                    regions: slider_regions(area.width),
                    index: self.slider_index,
                    palette: self.palette,
                }
                .render(area, buf);
            }
            SectionKind::Hero | SectionKind::Text | SectionKind::Contact => {
                let lines: Vec<Line> = section
                    .body
                    .iter()
                    .map(|l| Line::from(Span::styled(l.clone(), self.palette.base_style())))
                    .collect();
                let height = u16::try_from(lines.len()).unwrap_or(u16::MAX);
                Paragraph::new(lines).render(
                    Rect::new(MARGIN_X, content_row(), inner_width, height).intersection(area),
                    buf,
                );
                if section.kind == SectionKind::Contact {
                    let button = contact_button(section).intersection(area);
                    Paragraph::new(Span::styled("[ Say hello ]", self.palette.button_style()))
                        .render(button, buf);
                }
            }
        }
    }
}

/// Copy rows of a section buffer whose page row `top + r` lies inside the
/// scroll window onto `area`.
fn blit_rows(src: &Buffer, top: u16, scroll: u16, area: Rect, dst: &mut Buffer) {
    for row in 0..src.area.height {
        let page_row = i32::from(top) + i32::from(row);
        let screen_row = page_row - i32::from(scroll);
        if screen_row < 0 || screen_row >= i32::from(area.height) {
            continue;
        }
        let y = area.y + screen_row as u16;
        for col in 0..src.area.width.min(area.width) {
            if let (Some(s), Some(d)) = (src.cell((col, row)), dst.cell_mut((area.x + col, y))) {
                *d = s.clone();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::theme::ThemeMode;

    fn draw(scroll: u16, visible: &[bool]) -> Buffer {
        let page = Page::portfolio();
        let layout = BodyLayout::measure(&page);
        let mut strip = TerminalStrip::new(page.projects.len(), 2);
        strip.set_width(76);
        let area = Rect::new(0, 1, 80, 20);
        let mut buf = Buffer::empty(Rect::new(0, 0, 80, 22));
        PageWidget {
            page: &page,
            layout: &layout,
            scroll,
            visible,
            strip: &strip,
            slider_index: 0,
            palette: Palette::for_mode(ThemeMode::Light),
        }
        .render(area, &mut buf);
        buf
    }

    fn screen_text(buf: &Buffer) -> String {
        let mut out = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                out.push_str(buf[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn hero_title_is_drawn_at_the_top() {
        let all = vec![true; 5];
        let text = screen_text(&draw(0, &all));
        assert!(text.contains("Design & engineering for the web"));
    }

    #[test]
    fn unrevealed_sections_stay_blank() {
        let hidden_about = vec![true, false, true, true, true];
        let text = screen_text(&draw(0, &hidden_about));
        assert!(!text.contains("About"));
    }

    #[test]
    fn scrolling_moves_content_up() {
        let all = vec![true; 5];
        let page = Page::portfolio();
        let layout = BodyLayout::measure(&page);
        let text = screen_text(&draw(layout.slots[2].top, &all));
        assert!(!text.contains("Design & engineering"));
        assert!(text.contains("Selected work"));
    }
}
