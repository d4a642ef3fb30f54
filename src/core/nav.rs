//! Mobile navigation menu: open/close state mirrored to `aria-expanded`.

/// Class toggled on the menu while it is open.
pub const OPEN_CLASS: &str = "is-open";

/// The menu only works when both its toggle and its panel exist; otherwise
/// every operation is ignored.
#[derive(Debug, Clone, Default)]
pub struct NavMenu {
    wired: bool,
    open: bool,
}

impl NavMenu {
    pub fn new(has_toggle: bool, has_menu: bool) -> Self {
        Self {
            wired: has_toggle && has_menu,
            open: false,
        }
    }

    /// Flip the menu.  Returns the new open state.
    pub fn toggle(&mut self) -> bool {
        if self.wired {
            self.open = !self.open;
        }
        self.open
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// A link inside the menu was followed.
    pub fn on_link_click(&mut self) {
        if self.wired {
            self.close();
        }
    }

    /// A click somewhere on the page.  Closes the menu unless the click
    /// landed inside the menu or on the toggle.  Returns `true` if it closed.
    pub fn on_document_click(&mut self, in_menu: bool, in_toggle: bool) -> bool {
        if !self.wired || in_menu || in_toggle || !self.open {
            return false;
        }
        self.close();
        true
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// `aria-expanded` value for the toggle.
    pub fn aria_expanded(&self) -> &'static str {
        if self.open {
            "true"
        } else {
            "false"
        }
    }
}
