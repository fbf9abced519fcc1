//! Small DOM helpers shared by the bindings.

use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement,
    ScrollBehavior, ScrollToOptions, Window,
};

use crate::core::{Result, SiteError};

/// The global window.
pub fn window() -> Result<Window> {
    web_sys::window().ok_or_else(|| SiteError::Js("No window object".into()))
}

/// The global document.
pub fn document() -> Result<Document> {
    window()?
        .document()
        .ok_or_else(|| SiteError::Js("No document".into()))
}

/// The document body.
pub fn body() -> Result<HtmlElement> {
    document()?
        .body()
        .ok_or_else(|| SiteError::MissingElement("body".into()))
}

/// Look up an element by id and cast it.
pub fn by_id<T: JsCast>(id: &str) -> Result<T> {
    document()?
        .get_element_by_id(id)
        .ok_or_else(|| SiteError::MissingElement(id.to_string()))?
        .dyn_into::<T>()
        .map_err(|_| SiteError::WrongElementType {
            id: id.to_string(),
            expected: std::any::type_name::<T>()
                .rsplit("::")
                .next()
                .unwrap_or("element"),
        })
}

/// Every element under `root` matching `selector`, cast to `T`. Elements of
/// another type are skipped.
pub fn query_all<T: JsCast>(root: &impl AsRef<Element>, selector: &str) -> Vec<T> {
    let Ok(list) = root.as_ref().query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect()
}

/// Every element in the document matching `selector`.
pub fn query_document<T: JsCast>(selector: &str) -> Vec<T> {
    let Ok(doc) = document() else {
        return Vec::new();
    };
    let Ok(list) = doc.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect()
}

/// First element in the document matching `selector`.
pub fn query_one<T: JsCast>(selector: &str) -> Option<T> {
    document()
        .ok()?
        .query_selector(selector)
        .ok()
        .flatten()?
        .dyn_into::<T>()
        .ok()
}

/// Add or remove a class.
pub fn set_class(element: &Element, class: &str, on: bool) {
    let list = element.class_list();
    let result = if on {
        list.add_1(class)
    } else {
        list.remove_1(class)
    };
    if let Err(e) = result {
        log::debug!("class '{class}' update failed: {e:?}");
    }
}

/// Set an inline style property. An empty value removes it.
pub fn set_style(element: &HtmlElement, property: &str, value: &str) {
    let style = element.style();
    let result = if value.is_empty() {
        style.remove_property(property).map(|_| ())
    } else {
        style.set_property(property, value)
    };
    if let Err(e) = result {
        log::debug!("style '{property}' update failed: {e:?}");
    }
}

/// Current value of an input, textarea or select.
pub fn field_value(element: &Element) -> Option<String> {
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        Some(input.value())
    } else if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
        Some(area.value())
    } else {
        element
            .dyn_ref::<HtmlSelectElement>()
            .map(HtmlSelectElement::value)
    }
}

/// Current vertical scroll offset of the window.
pub fn scroll_y() -> f64 {
    window()
        .and_then(|w| w.scroll_y().map_err(SiteError::from))
        .unwrap_or(0.0)
}

/// Viewport width in px.
pub fn inner_width() -> f64 {
    window()
        .ok()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

/// Viewport height in px.
pub fn inner_height() -> f64 {
    window()
        .ok()
        .and_then(|w| w.inner_height().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

fn smooth_options() -> ScrollToOptions {
    let options = ScrollToOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options
}

/// Smoothly scroll the window to a document offset.
pub fn smooth_scroll_window(top: f64) {
    let options = smooth_options();
    options.set_top(top);
    if let Ok(window) = window() {
        window.scroll_to_with_scroll_to_options(&options);
    }
}

/// Smoothly scroll an element horizontally.
pub fn smooth_scroll_left(element: &Element, left: f64) {
    let options = smooth_options();
    options.set_left(left);
    element.scroll_to_with_scroll_to_options(&options);
}

/// Today's date as `YYYY-MM-DD` (UTC, matching `Date.toISOString`).
pub fn today_iso() -> String {
    let iso: String = js_sys::Date::new_0().to_iso_string().into();
    iso.split('T').next().unwrap_or_default().to_string()
}

/// Local human-readable timestamp.
pub fn local_timestamp() -> String {
    js_sys::Date::new_0()
        .to_locale_string("default", &wasm_bindgen::JsValue::UNDEFINED)
        .into()
}
