//! Focus trap bound to a container element.

use gloo::events::{EventListener, EventListenerOptions};
use gloo::timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, KeyboardEvent};

use super::dom;
use crate::focus::{FocusCycle, TabAction, FOCUSABLE_SELECTOR};

/// Confines Tab navigation to a container while alive.
///
/// Dropping it removes the key listener and cancels the pending initial focus.
pub struct FocusTrap {
    _keydown: EventListener,
    _initial_focus: Timeout,
}

impl FocusTrap {
    /// Trap focus inside `container`. Returns `None` when it has nothing focusable.
    pub fn install(container: &Element, focus_delay_ms: f64) -> Option<Self> {
        let focusable: Vec<HtmlElement> = dom::query_all(container, FOCUSABLE_SELECTOR);
        let cycle = FocusCycle::new(focusable.len())?;

        let first = focusable[0].clone();
        let elements = focusable;
        let keydown = EventListener::new_with_options(
            container,
            "keydown",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                    return;
                };
                if event.key() != "Tab" {
                    return;
                }
                let active = dom::document().ok().and_then(|d| d.active_element());
                let index = active.and_then(|active| {
                    elements
                        .iter()
                        .position(|el| el.is_same_node(Some(&*active)))
                });
                if let TabAction::FocusIndex(target) = cycle.on_tab(index, event.shift_key()) {
                    event.prevent_default();
                    let _ = elements[target].focus();
                }
            },
        );

        let initial_focus = Timeout::new(focus_delay_ms.max(0.0) as u32, move || {
            let _ = first.focus();
        });

        Some(Self {
            _keydown: keydown,
            _initial_focus: initial_focus,
        })
    }
}
