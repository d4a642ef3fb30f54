//! Layout helpers — split the terminal into header, scrollable page body and
//! status bar, and locate every clickable region.
//!
//! All geometry is derived from the terminal area, the page content and the
//! scroll position, so input handling can hit-test without a draw.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::core::geometry::Bounds;
use crate::core::page::{Page, Section, SectionKind};

/// Horizontal page margin, in cells.
pub const MARGIN_X: u16 = 2;
pub const CARD_HEIGHT: u16 = 7;

const MENU_TOGGLE_WIDTH: u16 = 8;
const THEME_TOGGLE_WIDTH: u16 = 9;
const BUTTON_WIDTH: u16 = 8;

/// Rows, relative to a section's top, where its parts start.
const TITLE_ROW: u16 = 1;
const CONTENT_ROW: u16 = 3;
const CONTROLS_ROW: u16 = CONTENT_ROW + CARD_HEIGHT + 1;
const FOOTER_HEIGHT: u16 = 2;

/// Primary screen layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    pub header: Rect,
    pub body: Rect,
    pub status: Rect,
}

impl AppLayout {
    pub fn from_area(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // header / nav
                Constraint::Min(3),    // page body
                Constraint::Length(1), // status bar
            ])
            .split(area);

        Self {
            header: chunks[0],
            body: chunks[1],
            status: chunks[2],
        }
    }
}

/// Whether `(col, row)` falls inside `rect`.
pub fn hit(rect: Rect, col: u16, row: u16) -> bool {
    col >= rect.x
        && row >= rect.y
        && u32::from(col) < u32::from(rect.x) + u32::from(rect.width)
        && u32::from(row) < u32::from(rect.y) + u32::from(rect.height)
}

// ───────────────────────────────────────── body ──────────────

/// Vertical placement of one section in page (content) coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionSlot {
    pub top: u16,
    pub height: u16,
}

impl SectionSlot {
    pub fn bottom(&self) -> u16 {
        self.top.saturating_add(self.height)
    }
}

/// Vertical layout of the whole scrollable page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BodyLayout {
    pub slots: Vec<SectionSlot>,
    /// First row of the footer.
    pub footer_top: u16,
    pub total: u16,
}

impl BodyLayout {
    pub fn measure(page: &Page) -> Self {
        let mut slots = Vec::with_capacity(page.sections.len());
        let mut top: u16 = 0;
        for section in &page.sections {
            let height = section_height(section);
            slots.push(SectionSlot { top, height });
            top = top.saturating_add(height);
        }
        Self {
            slots,
            footer_top: top,
            total: top.saturating_add(FOOTER_HEIGHT),
        }
    }

    /// Largest useful scroll offset for a body `height` rows tall.
    pub fn max_scroll(&self, height: u16) -> u16 {
        self.total.saturating_sub(height)
    }

    /// Section bounds relative to the visible body, for reveal checks.
    pub fn section_bounds(&self, index: usize, scroll: u16, width: u16) -> Option<Bounds> {
        let slot = self.slots.get(index)?;
        Some(Bounds::new(
            0.0,
            f64::from(slot.top) - f64::from(scroll),
            f64::from(width),
            f64::from(slot.height),
        ))
    }

    /// Map a rectangle given relative to section `index` onto the screen.
    /// `None` when any of its rows is scrolled out of the body.
    pub fn to_screen(&self, index: usize, rel: Rect, body: Rect, scroll: u16) -> Option<Rect> {
        let slot = self.slots.get(index)?;
        let content_y = i32::from(slot.top) + i32::from(rel.y);
        let screen_y = i32::from(body.y) + content_y - i32::from(scroll);
        let top = i32::from(body.y);
        let bottom = top + i32::from(body.height);
        if screen_y < top || screen_y + i32::from(rel.height) > bottom {
            return None;
        }
        Some(Rect::new(
            body.x.saturating_add(rel.x),
            u16::try_from(screen_y).ok()?,
            rel.width,
            rel.height,
        ))
    }
}

fn section_height(section: &Section) -> u16 {
    let body = u16::try_from(section.body.len()).unwrap_or(u16::MAX);
    match section.kind {
        SectionKind::Slider => CONTROLS_ROW + 2,
        SectionKind::Contact => CONTENT_ROW.saturating_add(body).saturating_add(3),
        SectionKind::Hero | SectionKind::Text => CONTENT_ROW.saturating_add(body).saturating_add(1),
    }
}

/// Title row relative to the section top.
pub fn title_row() -> u16 {
    TITLE_ROW
}

/// First content row relative to the section top.
pub fn content_row() -> u16 {
    CONTENT_ROW
}

// ───────────────────────────────────────── slider ────────────

/// Regions of the slider section, relative to the section's top-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliderRegions {
    pub strip: Rect,
    pub prev: Rect,
    pub next: Rect,
    pub counter: Rect,
}

pub fn slider_regions(width: u16) -> SliderRegions {
    let strip_width = width.saturating_sub(MARGIN_X * 2);
    let strip = Rect::new(MARGIN_X, CONTENT_ROW, strip_width, CARD_HEIGHT);
    let prev = Rect::new(MARGIN_X, CONTROLS_ROW, BUTTON_WIDTH.min(strip_width), 1);
    let next_x = MARGIN_X + strip_width.saturating_sub(BUTTON_WIDTH);
    let next = Rect::new(next_x, CONTROLS_ROW, BUTTON_WIDTH.min(strip_width), 1);
    let counter_x = prev.x + prev.width;
    let counter = Rect::new(counter_x, CONTROLS_ROW, next.x.saturating_sub(counter_x), 1);
    SliderRegions {
        strip,
        prev,
        next,
        counter,
    }
}

/// Width available to the slider strip inside a body `width` cells wide.
pub fn slider_strip_width(width: u16) -> u16 {
    slider_regions(width).strip.width
}

/// The call-to-action button of a contact section, relative to its top.
pub fn contact_button(section: &Section) -> Rect {
    let body = u16::try_from(section.body.len()).unwrap_or(u16::MAX);
    Rect::new(MARGIN_X, CONTENT_ROW.saturating_add(body).saturating_add(1), 13, 1)
}

// ───────────────────────────────────────── header ────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderZones {
    pub brand: Rect,
    pub menu_toggle: Rect,
    pub theme_toggle: Rect,
}

impl HeaderZones {
    pub fn from_area(header: Rect) -> Self {
        let right = header.x + header.width;
        let theme_x = right.saturating_sub(THEME_TOGGLE_WIDTH + 1).max(header.x);
        let menu_x = theme_x.saturating_sub(MENU_TOGGLE_WIDTH + 1).max(header.x);
        Self {
            brand: Rect::new(header.x, header.y, menu_x.saturating_sub(header.x), 1),
            menu_toggle: Rect::new(menu_x, header.y, MENU_TOGGLE_WIDTH, header.height.min(1)),
            theme_toggle: Rect::new(theme_x, header.y, THEME_TOGGLE_WIDTH, header.height.min(1)),
        }
    }
}

/// Drop-down menu area, anchored under the menu toggle.
pub fn menu_area(toggle: Rect, page: &Page, screen: Rect) -> Rect {
    let longest = page
        .nav
        .iter()
        .map(|l| l.label.chars().count())
        .max()
        .unwrap_or(0);
    let width = u16::try_from(longest + 6).unwrap_or(u16::MAX).max(14).min(screen.width);
    let height = u16::try_from(page.nav.len() + 2)
        .unwrap_or(u16::MAX)
        .min(screen.height.saturating_sub(toggle.y + 1));
    let right = (toggle.x + toggle.width).min(screen.x + screen.width);
    let x = right.saturating_sub(width).max(screen.x);
    Rect::new(x, toggle.y + 1, width, height)
}

/// One row per nav link inside the menu border.
pub fn link_rects(menu: Rect, count: usize) -> Vec<Rect> {
    let inner_rows = menu.height.saturating_sub(2);
    (0..count)
        .filter_map(|i| u16::try_from(i).ok())
        .take_while(|&i| i < inner_rows)
        .map(|i| Rect::new(menu.x + 1, menu.y + 1 + i, menu.width.saturating_sub(2), 1))
        .collect()
}

// ───────────────────────────────────────── hit zones ─────────

/// Every clickable region on screen for a given state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HitZones {
    pub menu_toggle: Rect,
    pub theme_toggle: Rect,
    /// Drop-down area while the menu is open.
    pub menu: Option<Rect>,
    /// Link rows, indexed like `Page::nav`.
    pub links: Vec<Rect>,
    pub slider_prev: Option<Rect>,
    pub slider_next: Option<Rect>,
    pub contact_button: Option<Rect>,
}

impl HitZones {
    pub fn compute(
        area: Rect,
        page: &Page,
        body_layout: &BodyLayout,
        scroll: u16,
        menu_open: bool,
    ) -> Self {
        let layout = AppLayout::from_area(area);
        let header = HeaderZones::from_area(layout.header);

        let (menu, links) = if menu_open {
            let menu = menu_area(header.menu_toggle, page, area);
            (Some(menu), link_rects(menu, page.nav.len()))
        } else {
            (None, Vec::new())
        };

        let mut zones = Self {
            menu_toggle: header.menu_toggle,
            theme_toggle: header.theme_toggle,
            menu,
            links,
            ..Self::default()
        };

        for (i, section) in page.sections.iter().enumerate() {
            match section.kind {
                SectionKind::Slider => {
                    let regions = slider_regions(layout.body.width);
                    zones.slider_prev = body_layout.to_screen(i, regions.prev, layout.body, scroll);
                    zones.slider_next = body_layout.to_screen(i, regions.next, layout.body, scroll);
                }
                SectionKind::Contact => {
                    zones.contact_button =
                        body_layout.to_screen(i, contact_button(section), layout.body, scroll);
                }
                SectionKind::Hero | SectionKind::Text => {}
            }
        }
        zones
    }

    /// Index of the nav link under the pointer.
    pub fn link_at(&self, col: u16, row: u16) -> Option<usize> {
        self.links.iter().position(|r| hit(*r, col, row))
    }

    pub fn in_menu(&self, col: u16, row: u16) -> bool {
        self.menu.is_some_and(|m| hit(m, col, row))
    }

    /// Button-like region under the pointer (for the glow effect).
    pub fn button_at(&self, col: u16, row: u16) -> Option<Rect> {
        [
            Some(self.menu_toggle),
            Some(self.theme_toggle),
            self.slider_prev,
            self.slider_next,
            self.contact_button,
        ]
        .into_iter()
        .flatten()
        .find(|r| hit(*r, col, row))
    }

    /// Whether the pointer is over a link or button.
    pub fn is_interactive(&self, col: u16, row: u16) -> bool {
        self.button_at(col, row).is_some() || self.link_at(col, row).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn screen_split_reserves_header_and_status() {
        let layout = AppLayout::from_area(Rect::new(0, 0, 80, 24));
        assert_eq!(layout.header, Rect::new(0, 0, 80, 1));
        assert_eq!(layout.body, Rect::new(0, 1, 80, 22));
        assert_eq!(layout.status, Rect::new(0, 23, 80, 1));
    }

    #[test]
    fn sections_stack_without_gaps() {
        let page = Page::portfolio();
        let layout = BodyLayout::measure(&page);
        for pair in layout.slots.windows(2) {
            assert_eq!(pair[0].bottom(), pair[1].top);
        }
        assert_eq!(layout.total, layout.footer_top + FOOTER_HEIGHT);
    }

    #[test]
    fn to_screen_hides_rows_outside_the_body() {
        let page = Page::portfolio();
        let layout = BodyLayout::measure(&page);
        let body = Rect::new(0, 1, 80, 10);
        let rel = Rect::new(2, 1, 8, 1);
        assert_eq!(layout.to_screen(0, rel, body, 0), Some(Rect::new(2, 2, 8, 1)));
        // Scrolled past the row.
        assert_eq!(layout.to_screen(0, rel, body, 2), None);
    }

    #[test]
    fn slider_buttons_sit_at_the_strip_edges() {
        let regions = slider_regions(80);
        assert_eq!(regions.strip.width, 76);
        assert_eq!(regions.prev.x, MARGIN_X);
        assert_eq!(regions.next.x + regions.next.width, MARGIN_X + 76);
        assert_eq!(regions.prev.y, regions.next.y);
    }

    #[test]
    fn header_toggles_are_right_aligned() {
        let zones = HeaderZones::from_area(Rect::new(0, 0, 80, 1));
        assert_eq!(zones.theme_toggle.x + zones.theme_toggle.width, 79);
        assert!(zones.menu_toggle.x + zones.menu_toggle.width < zones.theme_toggle.x);
    }

    #[test]
    fn menu_links_only_exist_while_open() {
        let page = Page::portfolio();
        let body = BodyLayout::measure(&page);
        let area = Rect::new(0, 0, 80, 24);
        let closed = HitZones::compute(area, &page, &body, 0, false);
        assert!(closed.menu.is_none() && closed.links.is_empty());

        let open = HitZones::compute(area, &page, &body, 0, true);
        assert_eq!(open.links.len(), page.nav.len());
        let first = open.links[0];
        assert_eq!(open.link_at(first.x, first.y), Some(0));
        assert!(open.in_menu(first.x, first.y));
    }

    #[test]
    fn hit_excludes_far_edges() {
        let r = Rect::new(2, 3, 4, 1);
        assert!(hit(r, 2, 3));
        assert!(hit(r, 5, 3));
        assert!(!hit(r, 6, 3));
        assert!(!hit(r, 2, 4));
    }
}
