//! User configuration for the terminal preview — key bindings, timings and
//! slider/reveal layout styling.
//!
//! Stored as a simple `key = value` text file at
//! `$XDG_CONFIG_HOME/folio/config.toml` (default `~/.config/folio/config.toml`).

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::preloader::DEFAULT_DELAY;
use crate::core::reveal::{RevealMode, DEFAULT_THRESHOLD};

// ───────────────────────────────────────── actions ───────────

/// All rebindable user actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    PrevSlide,
    NextSlide,
    ScrollUp,
    ScrollDown,
    ToggleMenu,
    ToggleTheme,
    Quit,
}

impl Action {
    /// Ordered list of all actions (serialisation order).
    pub const ALL: &[Action] = &[
        Action::PrevSlide,
        Action::NextSlide,
        Action::ScrollUp,
        Action::ScrollDown,
        Action::ToggleMenu,
        Action::ToggleTheme,
        Action::Quit,
    ];

    fn config_key(self) -> &'static str {
        match self {
            Action::PrevSlide => "prev_slide",
            Action::NextSlide => "next_slide",
            Action::ScrollUp => "scroll_up",
            Action::ScrollDown => "scroll_down",
            Action::ToggleMenu => "toggle_menu",
            Action::ToggleTheme => "toggle_theme",
            Action::Quit => "quit",
        }
    }

    fn from_config_key(s: &str) -> Option<Self> {
        Action::ALL.iter().copied().find(|a| a.config_key() == s)
    }
}

// ───────────────────────────────────────── key bind ──────────

/// A key code plus CTRL/ALT/SHIFT modifiers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyBind {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

const MODIFIER_MASK: KeyModifiers = KeyModifiers::CONTROL
    .union(KeyModifiers::ALT)
    .union(KeyModifiers::SHIFT);

impl KeyBind {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    /// Platform modifiers (SUPER, META…) are ignored when matching.
    pub fn matches(&self, event: KeyEvent) -> bool {
        self.code == event.code && (self.modifiers & MODIFIER_MASK) == (event.modifiers & MODIFIER_MASK)
    }

    /// Short label for the status bar (`"←"`, `"Ctrl+c"`).
    pub fn display(&self) -> String {
        self.render(true)
    }

    /// Config-file spelling (`"Left"`, `"Ctrl+c"`).
    fn to_config_string(&self) -> String {
        self.render(false)
    }

    fn render(&self, arrows: bool) -> String {
        let mut s = String::new();
        for (flag, label) in [
            (KeyModifiers::CONTROL, "Ctrl+"),
            (KeyModifiers::ALT, "Alt+"),
            (KeyModifiers::SHIFT, "Shift+"),
        ] {
            if self.modifiers.contains(flag) {
                s.push_str(label);
            }
        }
        let key = match (self.code, arrows) {
            (KeyCode::Char(' '), _) => "Space".to_string(),
            (KeyCode::Char(c), _) => c.to_string(),
            (KeyCode::Left, true) => "←".into(),
            (KeyCode::Right, true) => "→".into(),
            (KeyCode::Up, true) => "↑".into(),
            (KeyCode::Down, true) => "↓".into(),
            (KeyCode::Left, false) => "Left".into(),
            (KeyCode::Right, false) => "Right".into(),
            (KeyCode::Up, false) => "Up".into(),
            (KeyCode::Down, false) => "Down".into(),
            (KeyCode::Enter, _) => "Enter".into(),
            (KeyCode::Esc, _) => "Esc".into(),
            (KeyCode::Tab, _) => "Tab".into(),
            (KeyCode::Home, _) => "Home".into(),
            (KeyCode::End, _) => "End".into(),
            (KeyCode::PageUp, _) => "PageUp".into(),
            (KeyCode::PageDown, _) => "PageDown".into(),
            (KeyCode::F(n), _) => format!("F{n}"),
            (other, _) => format!("{other:?}"),
        };
        s.push_str(&key);
        s
    }

    /// Parse `"Ctrl+c"`, `"Alt+Left"`, `"q"`, `"Space"`.
    fn parse(s: &str) -> Option<Self> {
        let mut modifiers = KeyModifiers::NONE;
        let parts: Vec<&str> = s.split('+').collect();
        let (key_part, mods) = parts.split_last()?;

        for part in mods {
            match part.to_lowercase().as_str() {
                "ctrl" => modifiers |= KeyModifiers::CONTROL,
                "alt" => modifiers |= KeyModifiers::ALT,
                "shift" => modifiers |= KeyModifiers::SHIFT,
                _ => return None,
            }
        }

        let code = match key_part.to_lowercase().as_str() {
            "left" => KeyCode::Left,
            "right" => KeyCode::Right,
            "up" => KeyCode::Up,
            "down" => KeyCode::Down,
            "enter" | "return" => KeyCode::Enter,
            "esc" | "escape" => KeyCode::Esc,
            "tab" => KeyCode::Tab,
            "home" => KeyCode::Home,
            "end" => KeyCode::End,
            "pageup" | "pgup" => KeyCode::PageUp,
            "pagedown" | "pgdn" => KeyCode::PageDown,
            "space" => KeyCode::Char(' '),
            k if k.starts_with('f') && k.len() > 1 => KeyCode::F(k[1..].parse().ok()?),
            // Keep the original case for single characters ("T" ≠ "t").
            _ if key_part.chars().count() == 1 => KeyCode::Char(key_part.chars().next()?),
            _ => return None,
        };

        Some(KeyBind { code, modifiers })
    }
}

// ───────────────────────────────────────── config ────────────

/// Effective configuration after merging the file over the defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub bindings: HashMap<Action, Vec<KeyBind>>,
    /// Delay between load and preloader hide.
    pub preloader_delay: Duration,
    /// Horizontal gap between slider cards, in cells.
    pub slider_gap: u16,
    /// Visible fraction at which a section is revealed.
    pub reveal_threshold: f64,
    /// Rows trimmed off the bottom of the viewport for reveal checks.
    pub reveal_margin_bottom: u16,
    /// Skip scroll reveal and show every section at once.
    pub reveal_immediately: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bindings: Self::default_bindings(),
            preloader_delay: DEFAULT_DELAY,
            slider_gap: 2,
            reveal_threshold: DEFAULT_THRESHOLD,
            reveal_margin_bottom: 4,
            reveal_immediately: false,
        }
    }
}

impl AppConfig {
    pub fn default_bindings() -> HashMap<Action, Vec<KeyBind>> {
        use Action::*;
        use KeyCode::*;
        let mut m = HashMap::new();

        m.insert(PrevSlide, vec![KeyBind::plain(Left), KeyBind::plain(Char('h'))]);
        m.insert(NextSlide, vec![KeyBind::plain(Right), KeyBind::plain(Char('l'))]);
        m.insert(ScrollUp, vec![KeyBind::plain(Up), KeyBind::plain(Char('k'))]);
        m.insert(ScrollDown, vec![KeyBind::plain(Down), KeyBind::plain(Char('j'))]);
        m.insert(ToggleMenu, vec![KeyBind::plain(Char('m'))]);
        m.insert(ToggleTheme, vec![KeyBind::plain(Char('t'))]);
        m.insert(Quit, vec![KeyBind::plain(Char('q'))]);

        m
    }

    /// The action bound to `event`.  When several match, the binding with
    /// the most modifiers wins.
    pub fn match_key(&self, event: KeyEvent) -> Option<Action> {
        self.bindings
            .iter()
            .flat_map(|(&action, binds)| binds.iter().map(move |b| (action, b)))
            .filter(|(_, b)| b.matches(event))
            .max_by_key(|(_, b)| b.modifiers.bits().count_ones())
            .map(|(action, _)| action)
    }

    /// Reveal behaviour derived from the settings.  Rows are the unit here.
    pub fn reveal_mode(&self) -> RevealMode {
        if self.reveal_immediately {
            RevealMode::Immediate
        } else {
            RevealMode::Observe {
                threshold: self.reveal_threshold,
                margin_bottom: f64::from(self.reveal_margin_bottom),
            }
        }
    }

    fn short_binding(&self, action: Action) -> String {
        match self.bindings.get(&action).and_then(|b| b.first()) {
            Some(bind) => bind.display(),
            None => "?".into(),
        }
    }

    /// Status-bar hint built from the current bindings.
    pub fn status_bar_hint(&self) -> String {
        format!(
            "{}/{}: slide | {}/{}: scroll | {}: menu | {}: theme | {}: quit",
            self.short_binding(Action::PrevSlide),
            self.short_binding(Action::NextSlide),
            self.short_binding(Action::ScrollUp),
            self.short_binding(Action::ScrollDown),
            self.short_binding(Action::ToggleMenu),
            self.short_binding(Action::ToggleTheme),
            self.short_binding(Action::Quit),
        )
    }

    // ── persistence ─────────────────────────────────────────────

    /// Load from `path` (or the default location), falling back to defaults
    /// when the file is missing or unreadable.
    pub fn load(path: Option<&Path>) -> Self {
        let path = path.map(Path::to_path_buf).unwrap_or_else(config_path);
        match std::fs::read_to_string(&path) {
            Ok(contents) => {
                tracing::debug!(path = %path.display(), "loaded config");
                Self::parse(&contents)
            }
            Err(err) => {
                if path.exists() {
                    tracing::warn!(path = %path.display(), %err, "config unreadable, using defaults");
                }
                Self::default()
            }
        }
    }

    /// Merge `s` over the defaults.  Unknown keys and malformed values are
    /// skipped.
    pub fn parse(s: &str) -> Self {
        let mut config = Self::default();

        for (lineno, line) in s.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('[') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                tracing::warn!(line = lineno + 1, "config line without `=`");
                continue;
            };
            let key = key.trim();
            let value = value.trim().trim_matches('"');

            let ok = match key {
                "preloader_ms" => value
                    .parse::<u64>()
                    .map(|ms| config.preloader_delay = Duration::from_millis(ms.min(10_000)))
                    .is_ok(),
                "slider_gap" => value
                    .parse::<u16>()
                    .map(|gap| config.slider_gap = gap.min(16))
                    .is_ok(),
                "reveal_threshold" => value
                    .parse::<f64>()
                    .ok()
                    .filter(|t| t.is_finite())
                    .map(|t| config.reveal_threshold = t.clamp(0.0, 1.0))
                    .is_some(),
                "reveal_margin_bottom" => value
                    .parse::<u16>()
                    .map(|rows| config.reveal_margin_bottom = rows)
                    .is_ok(),
                "reveal_immediately" => {
                    config.reveal_immediately = value == "true";
                    true
                }
                _ => match Action::from_config_key(key) {
                    Some(action) => {
                        let parsed: Vec<KeyBind> = value
                            .split(',')
                            .filter_map(|part| KeyBind::parse(part.trim().trim_matches('"')))
                            .collect();
                        let ok = !parsed.is_empty();
                        if ok {
                            config.bindings.insert(action, parsed);
                        }
                        ok
                    }
                    None => false,
                },
            };
            if !ok {
                tracing::warn!(line = lineno + 1, key, value, "ignoring config entry");
            }
        }

        config
    }

    /// Persist to `path`, creating parent directories.
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.serialise())?;
        Ok(())
    }

    pub fn serialise(&self) -> String {
        let mut lines = vec![
            "# folio configuration".to_string(),
            String::new(),
            "# Page behaviour".to_string(),
            format!("preloader_ms = {}", self.preloader_delay.as_millis()),
            format!("slider_gap = {}", self.slider_gap),
            format!("reveal_threshold = {}", self.reveal_threshold),
            format!("reveal_margin_bottom = {}", self.reveal_margin_bottom),
            format!("reveal_immediately = {}", self.reveal_immediately),
            String::new(),
            "# Key bindings".to_string(),
            "# Format: action = Key1, Key2, ...".to_string(),
            "# Modifiers: Ctrl+, Alt+, Shift+ (prefix)".to_string(),
            String::new(),
        ];

        for &action in Action::ALL {
            if let Some(binds) = self.bindings.get(&action) {
                let keys: Vec<String> = binds.iter().map(KeyBind::to_config_string).collect();
                lines.push(format!("{} = {}", action.config_key(), keys.join(", ")));
            }
        }
        lines.push(String::new());
        lines.join("\n")
    }
}

/// `$XDG_CONFIG_HOME/folio/config.toml`.
pub fn config_path() -> PathBuf {
    xdg_dir("XDG_CONFIG_HOME", ".config").join("folio").join("config.toml")
}

/// `$XDG_STATE_HOME/folio/prefs` — where the theme preference is kept.
pub fn prefs_path() -> PathBuf {
    xdg_dir("XDG_STATE_HOME", ".local/state").join("folio").join("prefs")
}

fn xdg_dir(var: &str, fallback: &str) -> PathBuf {
    std::env::var(var)
        .ok()
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
            PathBuf::from(home).join(fallback)
        })
}

/// Whether the terminal background looks dark, from a `COLORFGBG` value
/// such as `"15;0"`.  Unknown means dark.
pub fn terminal_prefers_dark(colorfgbg: Option<&str>) -> bool {
    let Some(bg) = colorfgbg
        .and_then(|v| v.rsplit(';').next())
        .and_then(|bg| bg.trim().parse::<u8>().ok())
    else {
        return true;
    };
    bg < 7 || bg == 8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn default_bindings_cover_slider_navigation() {
        let config = AppConfig::default();
        assert_eq!(config.match_key(key(KeyCode::Left)), Some(Action::PrevSlide));
        assert_eq!(config.match_key(key(KeyCode::Char('l'))), Some(Action::NextSlide));
        assert_eq!(config.match_key(key(KeyCode::Char('x'))), None);
    }

    #[test]
    fn parse_overrides_values_and_bindings() {
        let config = AppConfig::parse(
            "preloader_ms = 250\n\
             slider_gap = 4\n\
             reveal_threshold = 0.5\n\
             reveal_immediately = true\n\
             next_slide = n, Ctrl+Right\n",
        );
        assert_eq!(config.preloader_delay, Duration::from_millis(250));
        assert_eq!(config.slider_gap, 4);
        assert_eq!(config.reveal_threshold, 0.5);
        assert_eq!(config.reveal_mode(), RevealMode::Immediate);
        assert_eq!(config.match_key(key(KeyCode::Char('n'))), Some(Action::NextSlide));
        assert_eq!(
            config.match_key(KeyEvent::new(KeyCode::Right, KeyModifiers::CONTROL)),
            Some(Action::NextSlide)
        );
        // The old binding is replaced, not extended.
        assert_eq!(config.match_key(key(KeyCode::Char('l'))), None);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let config = AppConfig::parse("preloader_ms = 99999\nslider_gap = 80\nreveal_threshold = 3");
        assert_eq!(config.preloader_delay, Duration::from_millis(10_000));
        assert_eq!(config.slider_gap, 16);
        assert_eq!(config.reveal_threshold, 1.0);
    }

    #[test]
    fn malformed_entries_keep_defaults() {
        let config = AppConfig::parse("slider_gap = wide\nquit = Hyper+q\nnonsense\nmystery = 1");
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn serialised_config_parses_back_to_itself() {
        let mut config = AppConfig::default();
        config.slider_gap = 5;
        config.reveal_margin_bottom = 2;
        config
            .bindings
            .insert(Action::Quit, vec![KeyBind::new(KeyCode::Char('c'), KeyModifiers::CONTROL)]);
        assert_eq!(AppConfig::parse(&config.serialise()), config);
    }

    #[test]
    fn save_then_load_from_explicit_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("config.toml");
        let mut config = AppConfig::default();
        config.preloader_delay = Duration::from_millis(0);
        config.save(&path).expect("save");
        assert_eq!(AppConfig::load(Some(path.as_path())), config);
    }

    #[test]
    fn missing_file_loads_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = AppConfig::load(Some(dir.path().join("absent.toml").as_path()));
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn status_hint_uses_arrow_glyphs() {
        let hint = AppConfig::default().status_bar_hint();
        assert!(hint.starts_with("←/→: slide"));
    }

    #[test]
    fn colorfgbg_background_decides_darkness() {
        assert!(terminal_prefers_dark(Some("15;0")));
        assert!(terminal_prefers_dark(Some("0;default;8")));
        assert!(!terminal_prefers_dark(Some("0;15")));
        assert!(!terminal_prefers_dark(Some("0;7")));
        assert!(terminal_prefers_dark(Some("garbage")));
        assert!(terminal_prefers_dark(None));
    }
}
