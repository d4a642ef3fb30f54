//! Input handling — maps key/mouse events to page triggers and state
//! mutations.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::config::Action;
use crate::core::cursor::ButtonGlow;
use crate::core::events::Trigger;
use crate::core::geometry::Bounds;
use crate::ui::layout::hit;

use super::state::AppState;

/// Rows moved per wheel notch.
const WHEEL_STEP: i32 = 3;

/// Process a key event.
pub fn handle_key(state: &mut AppState, key: KeyEvent) {
    // Ctrl+c always quits, even while the preloader is up.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        state.should_quit = true;
        return;
    }

    // Fixed navigation keys.
    let page_rows = i32::from(state.body_area().height.max(1));
    match key.code {
        KeyCode::Esc => {
            state.behaviors.nav.close();
            state.hovered_link = None;
            return;
        }
        KeyCode::Home => {
            state.scroll_to(0);
            return;
        }
        KeyCode::End => {
            let bottom = state.max_scroll();
            state.scroll_to(bottom);
            return;
        }
        KeyCode::PageUp => {
            state.scroll_by(-page_rows);
            return;
        }
        KeyCode::PageDown => {
            state.scroll_by(page_rows);
            return;
        }
        _ => {}
    }

    let Some(action) = state.config.match_key(key) else {
        return;
    };
    tracing::debug!(?action, "key action");

    match action {
        Action::Quit => state.should_quit = true,
        Action::PrevSlide => {
            state.dispatch(Trigger::SliderPrevious);
        }
        Action::NextSlide => {
            state.dispatch(Trigger::SliderNext);
        }
        Action::ScrollUp => state.scroll_by(-1),
        Action::ScrollDown => state.scroll_by(1),
        Action::ToggleMenu => {
            state.dispatch(Trigger::NavToggle);
            if !state.behaviors.nav.is_open() {
                state.hovered_link = None;
            }
        }
        Action::ToggleTheme => {
            state.dispatch(Trigger::ThemeToggle);
        }
    }
}

pub fn handle_mouse(state: &mut AppState, mouse: MouseEvent) {
    let (col, row) = (mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Moved | MouseEventKind::Drag(_) => pointer_moved(state, col, row),
        MouseEventKind::Down(MouseButton::Left) => click(state, col, row),
        MouseEventKind::ScrollUp => state.scroll_by(-WHEEL_STEP),
        MouseEventKind::ScrollDown => state.scroll_by(WHEEL_STEP),
        _ => {}
    }
}

/// The pointer left the terminal window.
pub fn pointer_left(state: &mut AppState) {
    state.behaviors.cursor.set_active(false);
    state.behaviors.glow = None;
    state.hovered_link = None;
}

fn pointer_moved(state: &mut AppState, col: u16, row: u16) {
    let zones = state.hit_zones();
    let behaviors = &mut state.behaviors;
    behaviors.cursor.pointer_moved(f64::from(col), f64::from(row));
    behaviors.cursor.set_active(zones.is_interactive(col, row));
    behaviors.glow = zones.button_at(col, row).map(|button| {
        let bounds = Bounds::new(
            f64::from(button.x),
            f64::from(button.y),
            f64::from(button.width),
            f64::from(button.height),
        );
        (button, ButtonGlow::at(bounds, f64::from(col), f64::from(row)))
    });
    state.hovered_link = zones.link_at(col, row);
}

fn click(state: &mut AppState, col: u16, row: u16) {
    let zones = state.hit_zones();
    let in_toggle = hit(zones.menu_toggle, col, row);
    let in_menu = zones.in_menu(col, row);

    if in_toggle {
        state.dispatch(Trigger::NavToggle);
    } else if let Some(link) = zones.link_at(col, row) {
        state.dispatch(Trigger::NavLink);
        if let Some(target) = state.page.nav.get(link).map(|l| l.target.clone()) {
            state.scroll_to_section(&target);
        }
    } else if hit(zones.theme_toggle, col, row) {
        state.dispatch(Trigger::ThemeToggle);
    } else if zones.slider_prev.is_some_and(|r| hit(r, col, row)) {
        state.dispatch(Trigger::SliderPrevious);
    } else if zones.slider_next.is_some_and(|r| hit(r, col, row)) {
        state.dispatch(Trigger::SliderNext);
    } else if zones.contact_button.is_some_and(|r| hit(r, col, row)) {
        state.status_message = state
            .page
            .section_index("contact")
            .and_then(|i| state.page.sections[i].body.first().cloned());
    }

    // Document-level rule: any click outside the menu and its toggle closes it.
    if state.behaviors.nav.on_document_click(in_menu, in_toggle) {
        tracing::debug!("nav closed by outside click");
    }
    if !state.behaviors.nav.is_open() {
        state.hovered_link = None;
    }
}

pub fn handle_resize(state: &mut AppState, width: u16, height: u16) {
    state.resize(width, height);
}
