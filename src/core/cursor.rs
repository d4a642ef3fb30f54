//! Pointer-following cursor highlight and button glow.

use super::geometry::Bounds;

/// Class toggled on the cursor while it hovers an interactive element.
pub const ACTIVE_CLASS: &str = "custom-cursor--active";

#[derive(Debug, Clone, Default)]
pub struct CursorFollower {
    present: bool,
    position: Option<(f64, f64)>,
    active: bool,
}

impl CursorFollower {
    pub fn new(present: bool) -> Self {
        Self {
            present,
            ..Self::default()
        }
    }

    pub fn pointer_moved(&mut self, x: f64, y: f64) {
        if self.present {
            self.position = Some((x, y));
        }
    }

    /// The pointer entered (`true`) or left (`false`) a link or button.
    pub fn set_active(&mut self, active: bool) {
        if self.present {
            self.active = active;
        }
    }

    pub fn position(&self) -> Option<(f64, f64)> {
        self.position
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}

/// Glow position inside a button, published as `--x` / `--y`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonGlow {
    pub x: f64,
    pub y: f64,
}

impl ButtonGlow {
    pub fn at(button: Bounds, pointer_x: f64, pointer_y: f64) -> Self {
        let (x, y) = button.local(pointer_x, pointer_y);
        Self { x, y }
    }

    /// Custom-property pairs to set on the button.
    pub fn properties(&self) -> [(&'static str, String); 2] {
        [("--x", format!("{}px", self.x)), ("--y", format!("{}px", self.y))]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn follows_the_pointer_and_toggles_active() {
        let mut c = CursorFollower::new(true);
        c.pointer_moved(12.0, 30.0);
        assert_eq!(c.position(), Some((12.0, 30.0)));
        c.set_active(true);
        assert!(c.is_active());
        c.set_active(false);
        assert!(!c.is_active());
    }

    #[test]
    fn absent_cursor_ignores_input() {
        let mut c = CursorFollower::new(false);
        c.pointer_moved(1.0, 1.0);
        c.set_active(true);
        assert_eq!(c.position(), None);
        assert!(!c.is_active());
    }

    #[test]
    fn glow_is_relative_to_the_button() {
        let glow = ButtonGlow::at(Bounds::new(100.0, 40.0, 80.0, 30.0), 130.0, 55.0);
        assert_eq!(glow, ButtonGlow { x: 30.0, y: 15.0 });
        let [(kx, vx), (ky, vy)] = glow.properties();
        assert_eq!((kx, vx.as_str()), ("--x", "30px"));
        assert_eq!((ky, vy.as_str()), ("--y", "15px"));
    }
}
