//! UI / rendering layer — everything that touches Ratatui widgets.
//!
//! This layer takes the *core* behaviour state and turns it into cells on
//! the terminal.  No persistence or event handling happens here.

pub mod cursor;
pub mod header;
pub mod layout;
pub mod page_widget;
pub mod slider_widget;
pub mod spinner;
pub mod theme;

use ratatui::{widgets::Paragraph, Frame};

use crate::app::state::AppState;

use self::cursor::CursorOverlay;
use self::header::{HeaderWidget, NavMenuPopup};
use self::layout::{menu_area, AppLayout, HeaderZones};
use self::page_widget::PageWidget;
use self::spinner::PreloaderSplash;
use self::theme::Palette;

/// Draw one frame.  Overlays go last: nav menu, preloader, then the cursor.
pub fn draw(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let layout = AppLayout::from_area(area);
    let behaviors = &state.behaviors;
    let palette = Palette::for_mode(behaviors.theme.current());
    let header = HeaderZones::from_area(layout.header);

    frame.render_widget(
        HeaderWidget {
            brand: &state.page.brand,
            zones: header,
            menu_open: behaviors.nav.is_open(),
            theme: behaviors.theme.current(),
            palette,
        },
        layout.header,
    );

    if let Some(strip) = behaviors.slider.strip() {
        let visible = state.visible_sections();
        frame.render_widget(
            PageWidget {
                page: &state.page,
                layout: &state.body_layout,
                scroll: state.scroll,
                visible: &visible,
                strip,
                slider_index: behaviors.slider.index(),
                palette,
            },
            layout.body,
        );
    }

    let hint = state.config.status_bar_hint();
    let status_text = state.status_message.as_deref().unwrap_or(&hint);
    frame.render_widget(
        Paragraph::new(status_text).style(palette.status_bar_style()),
        layout.status,
    );

    if behaviors.nav.is_open() {
        frame.render_widget(
            NavMenuPopup {
                links: &state.page.nav,
                hovered: state.hovered_link,
                palette,
            },
            menu_area(header.menu_toggle, &state.page, area),
        );
    }

    if behaviors.preloader.is_visible() {
        frame.render_widget(
            PreloaderSplash {
                brand: &state.page.brand,
                tick: state.tick,
                palette,
            },
            area,
        );
        return;
    }

    frame.render_widget(
        CursorOverlay {
            position: behaviors.cursor.position(),
            active: behaviors.cursor.is_active(),
            glow: behaviors.glow,
            palette,
        },
        area,
    );
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    use super::*;
    use crate::app::state::StartOptions;
    use crate::config::AppConfig;
    use crate::core::page::Page;
    use crate::core::store::MemoryStore;

    fn state(preloader: bool) -> AppState {
        let mut state = AppState::new(
            Page::portfolio(),
            AppConfig::default(),
            Box::new(MemoryStore::new()),
            StartOptions {
                prefers_dark: false,
                preloader,
            },
        );
        state.resize(80, 24);
        state
    }

    fn render(state: &AppState) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).expect("test terminal");
        terminal.draw(|frame| draw(frame, state)).expect("draw");
        terminal.backend().buffer().clone()
    }

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width).map(|x| buf[(x, y)].symbol().to_string()).collect()
    }

    #[test]
    fn frame_has_header_body_and_status() {
        let mut state = state(false);
        state.load(Instant::now());
        let buf = render(&state);
        assert!(row(&buf, 0).contains("Hadi"));
        assert!(row(&buf, 0).contains("Light"));
        assert!(row(&buf, 2).contains("Design & engineering"));
        assert!(row(&buf, 23).contains("slide"));
    }

    #[test]
    fn preloader_covers_the_page_until_the_delay_passes() {
        let mut state = state(true);
        let start = Instant::now();
        state.load(start);
        let buf = render(&state);
        assert!(!row(&buf, 0).contains("Menu"));

        state.on_tick(start + Duration::from_millis(900));
        let buf = render(&state);
        assert!(row(&buf, 0).contains("Menu"));
    }

    #[test]
    fn open_menu_is_drawn_over_the_body() {
        let mut state = state(false);
        state.load(Instant::now());
        state.behaviors.nav.toggle();
        let buf = render(&state);
        let text: String = (1..7).map(|y| row(&buf, y)).collect();
        for link in &state.page.nav {
            assert!(text.contains(&link.label));
        }
    }
}
