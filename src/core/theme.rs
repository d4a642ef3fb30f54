//! Light/dark theme preference.
//!
//! The initial theme is the stored preference when it names a known theme,
//! otherwise the system colour-scheme preference.  Every application of a
//! theme (including the initial one) is written back to the store.

use super::store::PreferenceStore;

/// Storage key holding the theme preference.
pub const THEME_STORAGE_KEY: &str = "hadi-theme";

/// Attribute set on the document root.
pub const THEME_ATTRIBUTE: &str = "data-theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

impl ThemeMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "light" => Some(ThemeMode::Light),
            "dark" => Some(ThemeMode::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn from_system(prefers_dark: bool) -> Self {
        if prefers_dark {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Owns the current theme and the store it is persisted to.
#[derive(Debug)]
pub struct ThemeController<P> {
    store: P,
    current: ThemeMode,
}

impl<P: PreferenceStore> ThemeController<P> {
    /// Resolve the initial theme and persist it.
    pub fn init(store: P, prefers_dark: bool) -> Self {
        let stored = store.get(THEME_STORAGE_KEY);
        let current = stored
            .as_deref()
            .and_then(ThemeMode::parse)
            .unwrap_or_else(|| ThemeMode::from_system(prefers_dark));
        if let Some(raw) = stored.as_deref().filter(|s| ThemeMode::parse(s).is_none()) {
            tracing::debug!(stored = raw, "ignoring unknown stored theme");
        }
        let mut controller = Self { store, current };
        controller.set(current);
        controller
    }

    /// Apply `theme` and persist it.  A storage failure is logged; the theme
    /// still applies.
    pub fn set(&mut self, theme: ThemeMode) {
        self.current = theme;
        if let Err(err) = self.store.set(THEME_STORAGE_KEY, theme.as_str()) {
            tracing::warn!(%err, "could not persist theme");
        }
    }

    /// Switch dark ↔ light.  Returns the new theme.
    pub fn toggle(&mut self) -> ThemeMode {
        let next = self.current.toggled();
        self.set(next);
        next
    }

    pub fn current(&self) -> ThemeMode {
        self.current
    }

    pub fn is_dark(&self) -> bool {
        self.current == ThemeMode::Dark
    }

    /// Value of the toggle's `aria-pressed`: pressed means "light".
    pub fn aria_pressed(&self) -> bool {
        !self.is_dark()
    }

    pub fn store(&self) -> &P {
        &self.store
    }
}
