//! Entrance animations bound to the DOM.

use std::cell::RefCell;
use std::rc::Rc;

use gloo::timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::dom;
use crate::core::{Result, RevealConfig};
use crate::reveal::{batch_delays, stagger_delay, SHOW_CLASS};

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// An observer adding [`SHOW_CLASS`] to elements as they scroll into view.
///
/// Dropping it disconnects the observer.
struct Observer {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

impl Observer {
    fn observe(
        selector: &str,
        step_ms: f64,
        config: &RevealConfig,
        pending: Rc<RefCell<Vec<Timeout>>>,
    ) -> Result<Option<Self>> {
        let elements: Vec<Element> = dom::query_document(selector);
        if elements.is_empty() {
            return Ok(None);
        }

        let callback: ObserverCallback =
            Closure::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
                reveal_batch(&entries, &observer, step_ms, &pending);
            });

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(config.threshold));
        options.set_root_margin(&config.root_margin);
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        for element in &elements {
            observer.observe(element);
        }

        log::debug!("observing {} '{selector}' elements", elements.len());
        Ok(Some(Self {
            observer,
            _callback: callback,
        }))
    }
}

fn reveal_batch(
    entries: &js_sys::Array,
    observer: &IntersectionObserver,
    step_ms: f64,
    pending: &RefCell<Vec<Timeout>>,
) {
    let entries: Vec<IntersectionObserverEntry> = entries
        .iter()
        .filter_map(|entry| entry.dyn_into().ok())
        .collect();
    let visible: Vec<bool> = entries.iter().map(|e| e.is_intersecting()).collect();

    for (index, delay) in batch_delays(&visible, step_ms) {
        let target = entries[index].target();
        observer.unobserve(&target);
        if delay <= 0.0 {
            dom::set_class(&target, SHOW_CLASS, true);
        } else {
            let timeout = Timeout::new(delay as u32, move || {
                dom::set_class(&target, SHOW_CLASS, true);
            });
            pending.borrow_mut().push(timeout);
        }
    }
}

impl Drop for Observer {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Staggered hero text plus scroll-triggered section and card reveals.
///
/// Dropping it disconnects both observers and cancels pending delayed reveals.
pub struct Reveals {
    _observers: Vec<Observer>,
    _timeouts: Rc<RefCell<Vec<Timeout>>>,
}

impl Reveals {
    /// Schedule `.stagger` and observe `.reveal` and `.card-animated`.
    pub fn attach(config: &RevealConfig) -> Result<Self> {
        let timeouts: Rc<RefCell<Vec<Timeout>>> = Rc::default();

        for (i, element) in dom::query_document::<Element>(".stagger").into_iter().enumerate() {
            let delay = stagger_delay(i, config.stagger_step_ms);
            let timeout = Timeout::new(delay as u32, move || {
                dom::set_class(&element, SHOW_CLASS, true);
            });
            timeouts.borrow_mut().push(timeout);
        }

        // Sections appear as soon as they intersect; cards cascade per batch.
        let observers = [(".reveal", 0.0), (".card-animated", config.card_step_ms)]
            .into_iter()
            .filter_map(|(selector, step)| {
                Observer::observe(selector, step, config, timeouts.clone()).transpose()
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            _observers: observers,
            _timeouts: timeouts,
        })
    }
}
