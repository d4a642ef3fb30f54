//! Terminal preview of the portfolio page.
//!
//! Run the binary to browse the page: slide through projects, toggle the
//! theme and the navigation menu, and scroll sections into view.
//! Run with `--print-config` to dump the effective configuration, or
//! `--write-config` to save it as the starting point for edits.

#[cfg(target_arch = "wasm32")]
fn main() {}

#[cfg(not(target_arch = "wasm32"))]
mod terminal {
    use std::fs::File;
    use std::io::{self, stderr};
    use std::path::PathBuf;
    use std::sync::Mutex;
    use std::time::{Duration, Instant};

    use anyhow::{Context, Result};
    use clap::{Parser, ValueEnum};
    use crossterm::{
        event::{
            DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture,
        },
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    };
    use ratatui::{backend::CrosstermBackend, Terminal};
    use tracing_subscriber::{fmt::writer::BoxMakeWriter, EnvFilter};

    use folio::app::{
        event::{spawn_event_reader, AppEvent},
        handler,
        prefs::FileStore,
        state::{AppState, StartOptions},
    };
    use folio::config::{self, AppConfig};
    use folio::core::{page::Page, theme::ThemeMode};
    use folio::ui;

    // ───────────────────────────────────────── CLI ───────────────

    #[derive(Debug, Clone, Copy, ValueEnum)]
    enum ThemeArg {
        Light,
        Dark,
    }

    impl From<ThemeArg> for ThemeMode {
        fn from(arg: ThemeArg) -> Self {
            match arg {
                ThemeArg::Light => ThemeMode::Light,
                ThemeArg::Dark => ThemeMode::Dark,
            }
        }
    }

    #[derive(Parser, Debug)]
    #[command(name = env!("CARGO_PKG_NAME"), about = "Portfolio page preview")]
    struct Cli {
        /// Configuration file (defaults to `$XDG_CONFIG_HOME/folio/config.toml`).
        #[arg(long)]
        config: Option<PathBuf>,

        /// Preference file holding the saved theme.
        #[arg(long)]
        prefs: Option<PathBuf>,

        /// Apply this theme on start (and remember it).
        #[arg(long, value_enum)]
        theme: Option<ThemeArg>,

        /// Show every section at once instead of revealing on scroll.
        #[arg(long)]
        reveal_immediately: bool,

        /// Skip the loading splash.
        #[arg(long)]
        no_preloader: bool,

        /// Write logs to this file instead of stderr.
        #[arg(long)]
        log: Option<PathBuf>,

        /// Print the effective configuration and exit.
        #[arg(long)]
        print_config: bool,

        /// Write the effective configuration to the config file and exit.
        #[arg(long)]
        write_config: bool,
    }

    fn init_tracing(log: Option<&PathBuf>) -> Result<()> {
        let writer = match log {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("cannot open log file {}", path.display()))?;
                BoxMakeWriter::new(Mutex::new(file))
            }
            None => BoxMakeWriter::new(io::stderr), // never pollute stdout
        };
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(writer)
            .with_ansi(log.is_none())
            .init();
        Ok(())
    }

    #[tokio::main]
    pub async fn run() -> Result<()> {
        let cli = Cli::parse();
        init_tracing(cli.log.as_ref())?;

        let mut user_config = AppConfig::load(cli.config.as_deref());
        if cli.reveal_immediately {
            user_config.reveal_immediately = true;
        }
        if cli.print_config {
            print!("{}", user_config.serialise());
            return Ok(());
        }
        if cli.write_config {
            let path = cli.config.clone().unwrap_or_else(config::config_path);
            user_config
                .save(&path)
                .with_context(|| format!("cannot write config to {}", path.display()))?;
            tracing::info!(path = %path.display(), "configuration written");
            println!("wrote {}", path.display());
            return Ok(());
        }

        let prefs_path = cli.prefs.clone().unwrap_or_else(config::prefs_path);
        let store = FileStore::open(prefs_path);
        let colorfgbg = std::env::var("COLORFGBG").ok();
        let options = StartOptions {
            prefers_dark: config::terminal_prefers_dark(colorfgbg.as_deref()),
            preloader: !cli.no_preloader,
        };
        let mut state = AppState::new(Page::portfolio(), user_config, Box::new(store), options);
        if let Some(theme) = cli.theme {
            state.behaviors.theme.set(theme.into());
        }

        // ── terminal setup ────────────────────────────────────────
        enable_raw_mode()?;
        let mut stderr_handle = stderr();
        execute!(
            stderr_handle,
            EnterAlternateScreen,
            EnableMouseCapture,
            EnableFocusChange
        )?;
        let backend = CrosstermBackend::new(stderr());
        let mut terminal = Terminal::new(backend)?;
        let size = terminal.size()?;
        handler::handle_resize(&mut state, size.width, size.height);

        let mut events = spawn_event_reader(Duration::from_millis(50));

        // ── event loop ────────────────────────────────────────────
        let mut dirty = true;
        let result = loop {
            if dirty {
                if let Err(err) = terminal.draw(|frame| ui::draw(frame, &state)) {
                    break Err(err.into());
                }
            }

            let Some(event) = events.recv().await else {
                break Ok(());
            };
            // Idle ticks only redraw while something animates.
            dirty = match event {
                AppEvent::Load => {
                    state.load(Instant::now());
                    true
                }
                AppEvent::Key(k) => {
                    handler::handle_key(&mut state, k);
                    true
                }
                AppEvent::Mouse(m) => {
                    handler::handle_mouse(&mut state, m);
                    true
                }
                AppEvent::Resize(w, h) => {
                    handler::handle_resize(&mut state, w, h);
                    true
                }
                AppEvent::PointerLeft => {
                    handler::pointer_left(&mut state);
                    true
                }
                AppEvent::Tick => state.on_tick(Instant::now()),
            };

            if state.should_quit {
                break Ok(());
            }
        };

        // ── teardown ──────────────────────────────────────────────
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture,
            DisableFocusChange
        )?;
        terminal.show_cursor()?;

        result
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn write_config_targets_the_given_file() {
            let cli = Cli::try_parse_from(["folio", "--write-config", "--config", "cfg.toml"])
                .expect("parse");
            assert!(cli.write_config);
            assert_eq!(cli.config, Some(PathBuf::from("cfg.toml")));
        }

        #[test]
        fn theme_flag_maps_to_a_mode() {
            let cli = Cli::try_parse_from(["folio", "--theme", "light"]).expect("parse");
            assert_eq!(cli.theme.map(ThemeMode::from), Some(ThemeMode::Light));
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    terminal::run()
}
