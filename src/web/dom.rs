//! DOM-backed implementations of the core's seams.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Storage, Window};

use crate::core::geometry::Bounds;
use crate::core::slider::{resolve_gap, translate_x, StripSurface};
use crate::core::store::{PreferenceStore, StoreError};

/// `.slider__track` and its child items.
pub struct DomStrip {
    window: Window,
    track: HtmlElement,
}

impl DomStrip {
    pub fn new(window: Window, track: HtmlElement) -> Self {
        Self { window, track }
    }
}

impl StripSurface for DomStrip {
    fn item_count(&self) -> usize {
        self.track.children().length() as usize
    }

    fn first_item_width(&self) -> Option<f64> {
        let first = self.track.children().item(0)?;
        Some(first.get_bounding_client_rect().width())
    }

    fn gap(&self) -> Option<f64> {
        let style = self.window.get_computed_style(&self.track).ok().flatten()?;
        let column_gap = style.get_property_value("column-gap").ok();
        let gap = style.get_property_value("gap").ok();
        resolve_gap(column_gap.as_deref(), gap.as_deref())
    }

    fn apply_offset(&mut self, offset: f64) {
        if let Err(err) = self
            .track
            .style()
            .set_property("transform", &translate_x(offset))
        {
            tracing::warn!(?err, "cannot set slider transform");
        }
    }
}

/// `window.localStorage`.  A browser that refuses storage (private mode,
/// sandboxed iframe) yields a store whose writes fail.
pub struct LocalStorage {
    storage: Option<Storage>,
}

impl LocalStorage {
    pub fn open(window: &Window) -> Self {
        let storage = window.local_storage().ok().flatten();
        if storage.is_none() {
            tracing::warn!("localStorage unavailable");
        }
        Self { storage }
    }
}

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let storage = self
            .storage
            .as_ref()
            .ok_or_else(|| StoreError::Unavailable("localStorage".into()))?;
        storage
            .set_item(key, value)
            .map_err(|err| StoreError::Unavailable(format!("{err:?}")))
    }
}

pub fn query(document: &Document, selector: &str) -> Option<Element> {
    document.query_selector(selector).ok().flatten()
}

pub fn query_html(document: &Document, selector: &str) -> Option<HtmlElement> {
    query(document, selector).and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn bounds_of(element: &Element) -> Bounds {
    let rect = element.get_bounding_client_rect();
    Bounds::new(rect.left(), rect.top(), rect.width(), rect.height())
}

/// The layout viewport in CSS pixels.
pub fn viewport(window: &Window) -> Bounds {
    let px = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
    };
    Bounds::new(0.0, 0.0, px(window.inner_width()), px(window.inner_height()))
}

pub fn set_class(element: &Element, class: &str, on: bool) {
    if let Err(err) = element.class_list().toggle_with_force(class, on) {
        tracing::warn!(?err, class, "classList.toggle failed");
    }
}

pub fn set_attr(element: &Element, name: &str, value: &str) {
    if let Err(err) = element.set_attribute(name, value) {
        tracing::warn!(?err, name, "setAttribute failed");
    }
}

pub fn set_style(element: &HtmlElement, property: &str, value: &str) {
    if let Err(err) = element.style().set_property(property, value) {
        tracing::warn!(?err, property, "style.setProperty failed");
    }
}
