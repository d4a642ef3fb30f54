//! Terminal rendition of the content slider.
//!
//! [`TerminalStrip`] is the terminal's [`StripSurface`]: it measures cards
//! from the current strip width (responsive cards-per-view) and stores the
//! offset the controller applies.  [`SliderWidget`] then draws the cards
//! shifted left by that offset, clipping partially visible ones.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use crate::core::page::Project;
use crate::core::slider::StripSurface;

use super::layout::SliderRegions;
use super::theme::Palette;

// ───────────────────────────────────────── surface ───────────

/// Slider strip laid out in terminal cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminalStrip {
    items: usize,
    width: u16,
    gap: u16,
    offset: u16,
}

impl TerminalStrip {
    pub fn new(items: usize, gap: u16) -> Self {
        Self {
            items,
            width: 0,
            gap,
            offset: 0,
        }
    }

    /// New strip width after a resize.  The controller re-measures on its
    /// next recompute.
    pub fn set_width(&mut self, width: u16) {
        self.width = width;
    }

    /// Responsive breakpoints: wide strips show more cards at once.
    pub fn cards_per_view(width: u16) -> u16 {
        match width {
            w if w >= 100 => 3,
            w if w >= 60 => 2,
            _ => 1,
        }
    }

    pub fn card_width(&self) -> u16 {
        let per_view = Self::cards_per_view(self.width);
        self.width
            .saturating_sub(self.gap.saturating_mul(per_view - 1))
            / per_view
    }

    pub fn gap_cells(&self) -> u16 {
        self.gap
    }

    /// Applied offset in cells.
    pub fn offset(&self) -> u16 {
        self.offset
    }
}

impl StripSurface for TerminalStrip {
    fn item_count(&self) -> usize {
        self.items
    }

    fn first_item_width(&self) -> Option<f64> {
        (self.items > 0).then(|| f64::from(self.card_width()))
    }

    fn gap(&self) -> Option<f64> {
        Some(f64::from(self.gap))
    }

    fn apply_offset(&mut self, offset: f64) {
        self.offset = offset.round().clamp(0.0, f64::from(u16::MAX)) as u16;
    }
}

// ───────────────────────────────────────── widget ────────────

/// Draws the strip and its prev/next controls.  `area` is the section's
/// full rectangle; `regions` are relative to it.
pub struct SliderWidget<'a> {
    pub projects: &'a [Project],
    pub strip: &'a TerminalStrip,
    pub regions: SliderRegions,
    pub index: usize,
    pub palette: Palette,
}

impl<'a> SliderWidget<'a> {
    fn render_strip(&self, strip_area: Rect, buf: &mut Buffer) {
        let card_width = self.strip.card_width();
        if card_width < 4 || strip_area.height == 0 {
            return;
        }
        let pitch = i32::from(card_width) + i32::from(self.strip.gap_cells());
        let strip_left = i32::from(strip_area.x);
        let strip_right = strip_left + i32::from(strip_area.width);

        for (i, project) in self.projects.iter().enumerate() {
            let Ok(i) = i32::try_from(i) else { break };
            let left = strip_left + i * pitch - i32::from(self.strip.offset());
            let right = left + i32::from(card_width);
            if right <= strip_left || left >= strip_right {
                continue;
            }

            // Render off-screen, then copy the visible columns.
            let card_area = Rect::new(0, 0, card_width, strip_area.height);
            let mut card = Buffer::empty(card_area);
            CardWidget {
                project,
                palette: self.palette,
            }
            .render(card_area, &mut card);

            for col in 0..card_width {
                let x = left + i32::from(col);
                if x < strip_left || x >= strip_right {
                    continue;
                }
                let Ok(x) = u16::try_from(x) else { continue };
                for row in 0..strip_area.height {
                    if let (Some(src), Some(dst)) =
                        (card.cell((col, row)), buf.cell_mut((x, strip_area.y + row)))
                    {
                        *dst = src.clone();
                    }
                }
            }
        }
    }

    fn render_controls(&self, area: Rect, buf: &mut Buffer) {
        let at_start = self.index == 0;
        let at_end = self.index + 1 >= self.projects.len();
        let style_for = |disabled: bool| {
            if disabled {
                self.palette.disabled_style()
            } else {
                self.palette.button_style()
            }
        };

        let prev = offset_rect(self.regions.prev, area);
        let next = offset_rect(self.regions.next, area);
        let counter = offset_rect(self.regions.counter, area);

        Paragraph::new(Span::styled("[◀ Prev]", style_for(at_start))).render(prev, buf);
        Paragraph::new(Span::styled("[Next ▶]", style_for(at_end))).render(next, buf);

        if !self.projects.is_empty() {
            let label = format!("{} / {}", self.index + 1, self.projects.len());
            Paragraph::new(Line::from(Span::styled(label, self.palette.muted_style())).centered())
                .render(counter, buf);
        }
    }
}

impl<'a> Widget for SliderWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let strip_area = offset_rect(self.regions.strip, area);
        self.render_strip(strip_area, buf);
        self.render_controls(area, buf);
    }
}

/// Translate a section-relative rect into `area`, clipped to it.
fn offset_rect(rel: Rect, area: Rect) -> Rect {
    Rect::new(
        area.x.saturating_add(rel.x),
        area.y.saturating_add(rel.y),
        rel.width,
        rel.height,
    )
    .intersection(area)
}

/// One project card.
struct CardWidget<'a> {
    project: &'a Project,
    palette: Palette,
}

impl<'a> Widget for CardWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.palette.card_border_style())
            .style(self.palette.card_style())
            .title(Span::styled(
                format!(" {} ", self.project.title),
                self.palette.card_style().add_modifier(ratatui::style::Modifier::BOLD),
            ));
        let inner = block.inner(area);
        block.render(area, buf);

        let tags = self
            .project
            .tags
            .iter()
            .map(|t| format!("#{t}"))
            .collect::<Vec<_>>()
            .join(" ");
        let lines = vec![
            Line::from(Span::styled(self.project.summary.clone(), self.palette.card_style())),
            Line::raw(""),
            Line::from(Span::styled(tags, self.palette.tag_style())),
        ];
        Paragraph::new(lines)
            .wrap(ratatui::widgets::Wrap { trim: true })
            .style(self.palette.card_style())
            .render(inner, buf);
    }
}
