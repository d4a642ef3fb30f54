//! Central application state.
//!
//! All mutable state lives here so that the rest of the app can be pure
//! functions over `&AppState` (rendering) or `&mut AppState` (event handling).

use std::time::{Duration, Instant};

use ratatui::layout::Rect;

use crate::config::AppConfig;
use crate::core::{
    cursor::{ButtonGlow, CursorFollower},
    events::{Subscriptions, Trigger},
    geometry::Bounds,
    nav::NavMenu,
    page::Page,
    preloader::Preloader,
    reveal::{RevealMode, Revealer},
    slider::{SliderController, SliderHost},
    store::PreferenceStore,
    theme::ThemeController,
};
use crate::ui::layout::{slider_strip_width, AppLayout, BodyLayout, HitZones};
use crate::ui::slider_widget::TerminalStrip;

/// The page's behaviour controllers, shared by every trigger handler.
pub struct Behaviors {
    pub slider: SliderController<TerminalStrip>,
    pub nav: NavMenu,
    pub theme: ThemeController<Box<dyn PreferenceStore>>,
    pub preloader: Preloader,
    pub reveal: Revealer,
    pub cursor: CursorFollower,
    /// Hovered button and the pointer position inside it.
    pub glow: Option<(Rect, ButtonGlow)>,
}

impl SliderHost for Behaviors {
    type Strip = TerminalStrip;

    fn slider(&mut self) -> &mut SliderController<TerminalStrip> {
        &mut self.slider
    }
}

/// Start-up options resolved from the command line and environment.
pub struct StartOptions {
    pub prefers_dark: bool,
    pub preloader: bool,
}

/// Top-level application state.
pub struct AppState {
    pub page: Page,
    pub body_layout: BodyLayout,
    pub behaviors: Behaviors,
    pub subscriptions: Subscriptions<Behaviors>,
    /// Section indices observed by the revealer, in target order.
    pub reveal_targets: Vec<usize>,
    /// First visible page row.
    pub scroll: u16,
    /// Full terminal area as of the last resize.
    pub viewport: Rect,
    pub config: AppConfig,
    /// When the page "loaded" (preloader countdown origin).
    pub loaded_at: Option<Instant>,
    /// Monotonic tick counter driving the spinner.
    pub tick: u64,
    /// Controls the main event loop.
    pub should_quit: bool,
    /// Nav link under the pointer while the menu is open.
    pub hovered_link: Option<usize>,
    /// An optional status message shown in the bottom bar.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(
        page: Page,
        config: AppConfig,
        store: Box<dyn PreferenceStore>,
        options: StartOptions,
    ) -> Self {
        let body_layout = BodyLayout::measure(&page);
        let reveal_targets: Vec<usize> = page.animated_sections().collect();
        let reveal_mode: RevealMode = config.reveal_mode();

        let strip = TerminalStrip::new(page.projects.len(), config.slider_gap);
        let behaviors = Behaviors {
            slider: SliderController::new(Some(strip)),
            nav: NavMenu::new(true, !page.nav.is_empty()),
            theme: ThemeController::init(store, options.prefers_dark),
            preloader: Preloader::new(options.preloader, config.preloader_delay),
            reveal: Revealer::new(reveal_mode, reveal_targets.len()),
            cursor: CursorFollower::new(true),
            glow: None,
        };

        let mut subscriptions = Subscriptions::new();
        SliderController::<TerminalStrip>::subscribe(&mut subscriptions);
        subscriptions.on(Trigger::Load, |b: &mut Behaviors| b.preloader.on_load());
        subscriptions.on(Trigger::NavToggle, |b: &mut Behaviors| {
            b.nav.toggle();
        });
        subscriptions.on(Trigger::NavLink, |b: &mut Behaviors| b.nav.on_link_click());
        subscriptions.on(Trigger::ThemeToggle, |b: &mut Behaviors| {
            b.theme.toggle();
        });

        Self {
            page,
            body_layout,
            behaviors,
            subscriptions,
            reveal_targets,
            scroll: 0,
            viewport: Rect::default(),
            config,
            loaded_at: None,
            tick: 0,
            should_quit: false,
            hovered_link: None,
            status_message: None,
        }
    }

    /// Deliver a trigger to every subscribed behaviour.
    pub fn dispatch(&mut self, trigger: Trigger) -> usize {
        let ran = self.subscriptions.dispatch(trigger, &mut self.behaviors);
        tracing::trace!(?trigger, handlers = ran, "dispatched");
        ran
    }

    /// Initial page load: start the preloader countdown and take the first
    /// measurements.
    pub fn load(&mut self, now: Instant) {
        self.loaded_at = Some(now);
        self.dispatch(Trigger::Load);
        self.scan_reveal();
    }

    /// Terminal resized to `width × height`.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.viewport = Rect::new(0, 0, width, height);
        let layout = AppLayout::from_area(self.viewport);
        if let Some(strip) = self.behaviors.slider.strip_mut() {
            strip.set_width(slider_strip_width(layout.body.width));
        }
        self.dispatch(Trigger::Resize);
        self.scroll = self.scroll.min(self.max_scroll());
        self.scan_reveal();
    }

    /// Advance timers.  Returns `true` when something visible changed.
    pub fn on_tick(&mut self, now: Instant) -> bool {
        self.tick = self.tick.wrapping_add(1);
        let since_load = self
            .loaded_at
            .map_or(Duration::ZERO, |t| now.saturating_duration_since(t));
        self.behaviors.preloader.tick(since_load) || self.behaviors.preloader.is_visible()
    }

    pub fn body_area(&self) -> Rect {
        AppLayout::from_area(self.viewport).body
    }

    pub fn max_scroll(&self) -> u16 {
        self.body_layout.max_scroll(self.body_area().height)
    }

    pub fn scroll_by(&mut self, delta: i32) {
        let next = (i32::from(self.scroll) + delta).clamp(0, i32::from(self.max_scroll()));
        self.scroll = next as u16;
        self.scan_reveal();
    }

    pub fn scroll_to(&mut self, row: u16) {
        self.scroll = row.min(self.max_scroll());
        self.scan_reveal();
    }

    /// Scroll so the section with id `target` starts at the top of the body.
    pub fn scroll_to_section(&mut self, target: &str) {
        if let Some(slot) = self
            .page
            .section_index(target)
            .and_then(|i| self.body_layout.slots.get(i))
        {
            let top = slot.top;
            self.scroll_to(top);
        }
    }

    /// Re-check reveal targets against the visible body.
    pub fn scan_reveal(&mut self) {
        let body = self.body_area();
        if body.width == 0 || body.height == 0 {
            return;
        }
        let viewport = Bounds::new(0.0, 0.0, f64::from(body.width), f64::from(body.height));
        let layout = &self.body_layout;
        let targets = &self.reveal_targets;
        let scroll = self.scroll;
        self.behaviors.reveal.scan(viewport, |i| {
            targets
                .get(i)
                .and_then(|&section| layout.section_bounds(section, scroll, body.width))
        });
    }

    /// Whether section `index` should be drawn.
    pub fn section_visible(&self, index: usize) -> bool {
        match self.reveal_targets.iter().position(|&s| s == index) {
            Some(target) => self.behaviors.reveal.is_visible(target),
            None => true,
        }
    }

    pub fn visible_sections(&self) -> Vec<bool> {
        (0..self.page.sections.len())
            .map(|i| self.section_visible(i))
            .collect()
    }

    /// Clickable regions for the current state.
    pub fn hit_zones(&self) -> HitZones {
        HitZones::compute(
            self.viewport,
            &self.page,
            &self.body_layout,
            self.scroll,
            self.behaviors.nav.is_open(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::store::MemoryStore;

    fn state(preloader: bool) -> AppState {
        let mut state = AppState::new(
            Page::portfolio(),
            AppConfig::default(),
            Box::new(MemoryStore::new()),
            StartOptions {
                prefers_dark: true,
                preloader,
            },
        );
        state.resize(80, 24);
        state
    }

    #[test]
    fn ticks_request_redraws_only_while_the_splash_is_up() {
        let mut state = state(true);
        let start = Instant::now();
        state.load(start);
        let delay = state.config.preloader_delay;

        assert!(state.on_tick(start));
        assert!(state.on_tick(start + delay));
        assert!(!state.behaviors.preloader.is_visible());
        assert!(!state.on_tick(start + delay * 2));
    }

    #[test]
    fn idle_ticks_without_a_splash_change_nothing() {
        let mut state = state(false);
        let start = Instant::now();
        state.load(start);
        assert!(!state.on_tick(start));
        assert!(!state.on_tick(start + Duration::from_secs(5)));
    }
}
