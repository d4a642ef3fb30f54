//! Browser binding: finds the page's elements, wires DOM listeners to the
//! core behaviours and writes their state back as classes, attributes and
//! inline styles.

mod dom;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, Event, EventTarget, HtmlElement, MouseEvent, Node, PointerEvent, Window,
};

use crate::core::{
    cursor::{ButtonGlow, CursorFollower, ACTIVE_CLASS},
    events::{Subscriptions, Trigger},
    nav::{NavMenu, OPEN_CLASS},
    page::current_year,
    preloader::{load_already_fired, Preloader, DEFAULT_DELAY, HIDDEN_CLASS},
    reveal::{RevealMode, Revealer, VISIBLE_CLASS},
    slider::{SliderController, SliderHost},
    theme::{ThemeController, THEME_ATTRIBUTE},
};

pub use dom::{DomStrip, LocalStorage};

/// Element handles looked up once at start.  Any of them may be missing.
struct Handles {
    root: Option<Element>,
    preloader: Option<Element>,
    nav_toggle: Option<Element>,
    nav_menu: Option<Element>,
    theme_toggle: Option<Element>,
    cursor: Option<HtmlElement>,
    reveal_targets: Vec<Element>,
}

struct Behaviors {
    slider: SliderController<DomStrip>,
    nav: NavMenu,
    theme: ThemeController<LocalStorage>,
    preloader: Preloader,
    reveal: Revealer,
    cursor: CursorFollower,
}

impl SliderHost for Behaviors {
    type Strip = DomStrip;

    fn slider(&mut self) -> &mut SliderController<DomStrip> {
        &mut self.slider
    }
}

struct Site {
    window: Window,
    handles: Handles,
    behaviors: Behaviors,
    subscriptions: Subscriptions<Behaviors>,
}

impl Site {
    fn dispatch(&mut self, trigger: Trigger) {
        self.subscriptions.dispatch(trigger, &mut self.behaviors);
        self.sync();
    }

    /// Write behaviour state back to the DOM.
    fn sync(&self) {
        let h = &self.handles;
        let b = &self.behaviors;

        if let (Some(toggle), Some(menu)) = (&h.nav_toggle, &h.nav_menu) {
            dom::set_class(menu, OPEN_CLASS, b.nav.is_open());
            dom::set_attr(toggle, "aria-expanded", b.nav.aria_expanded());
        }
        if let Some(root) = &h.root {
            dom::set_attr(root, THEME_ATTRIBUTE, b.theme.current().as_str());
        }
        if let Some(toggle) = &h.theme_toggle {
            dom::set_attr(toggle, "aria-pressed", &b.theme.aria_pressed().to_string());
        }
        if let Some(preloader) = &h.preloader {
            dom::set_class(preloader, HIDDEN_CLASS, !b.preloader.is_visible());
        }
        if let Some(cursor) = &h.cursor {
            if let Some((x, y)) = b.cursor.position() {
                dom::set_style(cursor, "left", &format!("{x}px"));
                dom::set_style(cursor, "top", &format!("{y}px"));
            }
            dom::set_class(cursor, ACTIVE_CLASS, b.cursor.is_active());
        }
    }

    fn scan_reveal(&mut self) {
        let viewport = dom::viewport(&self.window);
        let targets = &self.handles.reveal_targets;
        let revealed = self
            .behaviors
            .reveal
            .scan(viewport, |i| targets.get(i).map(dom::bounds_of));
        for i in revealed {
            if let Some(el) = targets.get(i) {
                dom::set_class(el, VISIBLE_CLASS, true);
            }
        }
    }

    fn document_click(&mut self, target: Option<Node>) {
        let inside = |el: &Option<Element>| {
            el.as_ref()
                .is_some_and(|el| el.contains(target.as_ref()))
        };
        let in_menu = inside(&self.handles.nav_menu);
        let in_toggle = inside(&self.handles.nav_toggle);
        if self.behaviors.nav.on_document_click(in_menu, in_toggle) {
            self.sync();
        }
    }
}

type Shared = Rc<RefCell<Site>>;

fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Dispatch `trigger` whenever `element` is clicked.
fn on_click(site: &Shared, element: &Option<Element>, trigger: Trigger) -> Result<(), JsValue> {
    let Some(element) = element else {
        return Ok(());
    };
    let site = site.clone();
    listen(element, "click", move |_: Event| {
        site.borrow_mut().dispatch(trigger)
    })
}

/// The page has loaded: recompute the slider, then hide the preloader
/// after its delay.
fn page_loaded(site: &Shared, window: &Window) {
    site.borrow_mut().dispatch(Trigger::Load);
    let delay = site.borrow().behaviors.preloader.delay();
    let site = site.clone();
    let hide = Closure::once_into_js(move || {
        let mut site = site.borrow_mut();
        if site.behaviors.preloader.hide() {
            site.sync();
        }
    });
    if let Err(err) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        hide.unchecked_ref(),
        i32::try_from(delay.as_millis()).unwrap_or(i32::MAX),
    ) {
        tracing::warn!(?err, "cannot schedule preloader");
    }
}

fn stamp_year(document: &Document) {
    let year = current_year().to_string();
    for el in dom::query_all(document, "[data-year]") {
        el.set_text_content(Some(year.as_str()));
    }
}

fn build(window: &Window, document: &Document) -> Site {
    let handles = Handles {
        root: document.document_element(),
        preloader: dom::query(document, ".preloader"),
        nav_toggle: dom::query(document, ".site-nav__toggle"),
        nav_menu: dom::query(document, ".site-nav__menu"),
        theme_toggle: dom::query(document, ".theme-toggle"),
        cursor: dom::query_html(document, ".custom-cursor"),
        reveal_targets: dom::query_all(document, "[data-animate]"),
    };

    let prefers_dark = window
        .match_media("(prefers-color-scheme: dark)")
        .ok()
        .flatten()
        .is_some_and(|mq| mq.matches());
    let strip = dom::query_html(document, ".slider__track")
        .map(|track| DomStrip::new(window.clone(), track));

    let behaviors = Behaviors {
        slider: SliderController::new(strip),
        nav: NavMenu::new(handles.nav_toggle.is_some(), handles.nav_menu.is_some()),
        theme: ThemeController::init(LocalStorage::open(window), prefers_dark),
        preloader: Preloader::new(handles.preloader.is_some(), DEFAULT_DELAY),
        reveal: Revealer::new(RevealMode::default(), handles.reveal_targets.len()),
        cursor: CursorFollower::new(handles.cursor.is_some()),
    };

    let mut subscriptions = Subscriptions::new();
    SliderController::<DomStrip>::subscribe(&mut subscriptions);
    subscriptions.on(Trigger::Load, |b: &mut Behaviors| b.preloader.on_load());
    subscriptions.on(Trigger::NavToggle, |b: &mut Behaviors| {
        b.nav.toggle();
    });
    subscriptions.on(Trigger::NavLink, |b: &mut Behaviors| b.nav.on_link_click());
    subscriptions.on(Trigger::ThemeToggle, |b: &mut Behaviors| {
        b.theme.toggle();
    });

    Site {
        window: window.clone(),
        handles,
        behaviors,
        subscriptions,
    }
}

/// Entry point, run when the module is instantiated.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or("no global window exists")?;
    let document = window.document().ok_or("should have a document on window")?;

    stamp_year(&document);
    let site: Shared = Rc::new(RefCell::new(build(&window, &document)));
    {
        let mut site = site.borrow_mut();
        site.sync();
        site.scan_reveal();
    }

    // ── window ───────────────────────────────────────────────
    // The module may be instantiated after `load` has already fired.
    if load_already_fired(&document.ready_state()) {
        page_loaded(&site, &window);
    } else {
        let site = site.clone();
        let timer_window = window.clone();
        listen(&window, "load", move |_: Event| {
            page_loaded(&site, &timer_window);
        })?;
    }
    {
        let site = site.clone();
        listen(&window, "resize", move |_: Event| {
            let mut site = site.borrow_mut();
            site.dispatch(Trigger::Resize);
            site.scan_reveal();
        })?;
    }
    {
        let site = site.clone();
        listen(&window, "scroll", move |_: Event| {
            site.borrow_mut().scan_reveal();
        })?;
    }

    // ── controls ─────────────────────────────────────────────
    let prev = dom::query(&document, ".slider__control--prev");
    let next = dom::query(&document, ".slider__control--next");
    on_click(&site, &prev, Trigger::SliderPrevious)?;
    on_click(&site, &next, Trigger::SliderNext)?;
    let (nav_toggle, nav_menu, theme_toggle) = {
        let site = site.borrow();
        let h = &site.handles;
        (h.nav_toggle.clone(), h.nav_menu.clone(), h.theme_toggle.clone())
    };
    on_click(&site, &theme_toggle, Trigger::ThemeToggle)?;
    if nav_toggle.is_some() && nav_menu.is_some() {
        on_click(&site, &nav_toggle, Trigger::NavToggle)?;
        if let Some(menu) = &nav_menu {
            let links = menu.query_selector_all("a")?;
            for link in (0..links.length()).filter_map(|i| links.item(i)) {
                let site = site.clone();
                listen(&link, "click", move |_: Event| {
                    site.borrow_mut().dispatch(Trigger::NavLink)
                })?;
            }
        }
    }
    {
        let site = site.clone();
        listen(&document, "click", move |event: Event| {
            let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
            site.borrow_mut().document_click(target);
        })?;
    }

    // ── cursor and glow ──────────────────────────────────────
    {
        let site = site.clone();
        listen(&document, "mousemove", move |event: Event| {
            let event: MouseEvent = event.unchecked_into();
            let mut site = site.borrow_mut();
            site.behaviors
                .cursor
                .pointer_moved(f64::from(event.client_x()), f64::from(event.client_y()));
            site.sync();
        })?;
    }
    for el in dom::query_all(&document, "a, button") {
        for (event, active) in [("mouseenter", true), ("mouseleave", false)] {
            let site = site.clone();
            listen(&el, event, move |_: Event| {
                let mut site = site.borrow_mut();
                site.behaviors.cursor.set_active(active);
                site.sync();
            })?;
        }
    }
    for button in dom::query_all(&document, ".btn") {
        let Ok(button) = button.dyn_into::<HtmlElement>() else {
            continue;
        };
        let target = button.clone();
        listen(&button, "pointermove", move |event: Event| {
            let event: PointerEvent = event.unchecked_into();
            let glow = ButtonGlow::at(
                dom::bounds_of(&target),
                f64::from(event.client_x()),
                f64::from(event.client_y()),
            );
            for (name, value) in glow.properties() {
                dom::set_style(&target, name, &value);
            }
        })?;
    }

    tracing::debug!("page behaviours wired");
    Ok(())
}
