//! Preloader that hides a fixed delay after the page has loaded.

use std::time::Duration;

/// Class added to the preloader when it hides.
pub const HIDDEN_CLASS: &str = "preloader--hidden";

pub const DEFAULT_DELAY: Duration = Duration::from_millis(800);

#[derive(Debug, Clone)]
pub struct Preloader {
    present: bool,
    delay: Duration,
    loaded: bool,
    hidden: bool,
}

impl Preloader {
    pub fn new(present: bool, delay: Duration) -> Self {
        Self {
            present,
            delay,
            loaded: false,
            hidden: false,
        }
    }

    /// The page finished loading; the hide countdown starts now.
    pub fn on_load(&mut self) {
        self.loaded = true;
    }

    /// Advance the countdown.  Returns `true` exactly once, on the call that
    /// hides the preloader.
    pub fn tick(&mut self, since_load: Duration) -> bool {
        if !self.present || !self.loaded || self.hidden || since_load < self.delay {
            return false;
        }
        self.hide()
    }

    /// Hide immediately (the browser's timer fires this).  Returns `true` if
    /// this call changed the state.
    pub fn hide(&mut self) -> bool {
        if !self.present || self.hidden {
            return false;
        }
        tracing::debug!("preloader hidden");
        self.hidden = true;
        true
    }

    /// Whether the splash is still on screen.
    pub fn is_visible(&self) -> bool {
        self.present && !self.hidden
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

/// Whether a document in `ready_state` has already fired its `load` event,
/// so a listener registered now would never run.
pub fn load_already_fired(ready_state: &str) -> bool {
    ready_state == "complete"
}

impl Default for Preloader {
    fn default() -> Self {
        Self::new(true, DEFAULT_DELAY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hides_once_after_the_delay() {
        let mut p = Preloader::default();
        p.on_load();
        assert!(!p.tick(Duration::from_millis(799)));
        assert!(p.is_visible());
        assert!(p.tick(Duration::from_millis(800)));
        assert!(!p.is_visible());
        assert!(!p.tick(Duration::from_millis(2000)));
    }

    #[test]
    fn nothing_happens_before_load() {
        let mut p = Preloader::default();
        assert!(!p.tick(Duration::from_secs(5)));
        assert!(p.is_visible());
    }

    #[test]
    fn only_a_complete_document_has_fired_load() {
        assert!(load_already_fired("complete"));
        assert!(!load_already_fired("interactive"));
        assert!(!load_already_fired("loading"));
        assert!(!load_already_fired(""));
    }

    #[test]
    fn absent_preloader_is_inert() {
        let mut p = Preloader::new(false, DEFAULT_DELAY);
        p.on_load();
        assert!(!p.tick(Duration::from_secs(1)));
        assert!(!p.hide());
        assert!(!p.is_visible());
    }
}
