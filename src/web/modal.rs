//! Modal dialogs bound to the DOM.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, HtmlInputElement, KeyboardEvent};

use super::dom;
use super::focus::FocusTrap;
use super::timers::DeadlineTimer;
use crate::core::{now_ms, ModalConfig, Result, Scheduled};
use crate::modal::{Modal, ModalEffect};

/// Element ids making up one modal.
#[derive(Debug, Clone, Copy)]
pub struct ModalIds {
    /// Modal root (also the backdrop).
    pub root: &'static str,
    /// Control that opens the modal and gets focus back.
    pub trigger: &'static str,
    /// Explicit close control.
    pub close: &'static str,
    /// Date input whose minimum is set to today on open.
    pub min_date_input: Option<&'static str>,
}

impl ModalIds {
    /// `#contact-modal`.
    pub const CONTACT: Self = Self {
        root: "contact-modal",
        trigger: "contact-toggle",
        close: "close-contact",
        min_date_input: None,
    };

    /// `#appointment-modal`.
    pub const APPOINTMENT: Self = Self {
        root: "appointment-modal",
        trigger: "book-appointment",
        close: "close-appointment",
        min_date_input: Some("appointment-date"),
    };
}

/// A modal wired to its trigger, close control, backdrop and Escape key.
pub struct ModalBinding {
    ids: ModalIds,
    root: HtmlElement,
    trigger: HtmlElement,
    model: RefCell<Modal>,
    timer: DeadlineTimer,
    trap: RefCell<Option<FocusTrap>>,
    focus_delay_ms: f64,
    listeners: RefCell<Vec<EventListener>>,
}

impl ModalBinding {
    /// Wire a modal. Fails when any of its required elements is missing.
    pub fn attach(ids: ModalIds, config: &ModalConfig) -> Result<Rc<Self>> {
        let root: HtmlElement = dom::by_id(ids.root)?;
        let trigger: HtmlElement = dom::by_id(ids.trigger)?;
        let close: Element = dom::by_id(ids.close)?;

        let binding = Rc::new(Self {
            ids,
            root,
            trigger,
            model: RefCell::new(Modal::new(config)),
            timer: DeadlineTimer::default(),
            trap: RefCell::new(None),
            focus_delay_ms: config.focus_delay_ms,
            listeners: RefCell::new(Vec::new()),
        });
        binding.install_listeners(&close)?;
        log::debug!("modal '{}' ready", ids.root);
        Ok(binding)
    }

    fn install_listeners(self: &Rc<Self>, close: &Element) -> Result<()> {
        let mut listeners = Vec::new();

        let this = Rc::downgrade(self);
        listeners.push(EventListener::new(&self.trigger, "click", move |_| {
            with(&this, |m| m.open());
        }));

        let this = Rc::downgrade(self);
        listeners.push(EventListener::new(close, "click", move |_| {
            with(&this, |m| m.close());
        }));

        let this = Rc::downgrade(self);
        let root = self.root.clone();
        listeners.push(EventListener::new(&self.root, "click", move |event| {
            let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
                return;
            };
            let on_root = root.is_same_node(Some(&*target));
            if on_root || target.class_list().contains("modal-backdrop") {
                with(&this, |m| m.close());
            }
        }));

        if let Some(container) = self.root.query_selector(".modal-container")? {
            listeners.push(EventListener::new(&container, "click", |event| {
                event.stop_propagation();
            }));
        }

        let document = dom::document()?;
        let this = Rc::downgrade(self);
        listeners.push(EventListener::new(&document, "keydown", move |event| {
            let is_escape = event
                .dyn_ref::<KeyboardEvent>()
                .is_some_and(|key| key.key() == "Escape");
            if is_escape {
                with(&this, |m| {
                    if m.is_visible() {
                        m.close();
                    }
                });
            }
        }));

        *self.listeners.borrow_mut() = listeners;
        Ok(())
    }

    /// Whether the modal is displayed.
    pub fn is_visible(&self) -> bool {
        self.model.borrow().is_visible()
    }

    /// Open the modal.
    pub fn open(self: &Rc<Self>) {
        if let Some(id) = self.ids.min_date_input {
            if let Ok(input) = dom::by_id::<HtmlInputElement>(id) {
                input.set_min(&dom::today_iso());
            }
        }
        let effects = self.model.borrow_mut().open(now_ms());
        self.apply(effects);
        self.reschedule();
    }

    /// Close the modal.
    pub fn close(self: &Rc<Self>) {
        let effects = self.model.borrow_mut().close(now_ms());
        self.apply(effects);
        self.reschedule();
    }

    fn on_timer(self: &Rc<Self>) {
        let effects = self.model.borrow_mut().poll(now_ms());
        self.apply(effects);
        self.reschedule();
    }

    fn reschedule(self: &Rc<Self>) {
        let this = Rc::downgrade(self);
        let deadline = self.model.borrow().next_deadline();
        self.timer.schedule(deadline, move || with(&this, |m| m.on_timer()));
    }

    fn apply(&self, effects: Vec<ModalEffect>) {
        for effect in effects {
            match effect {
                ModalEffect::Display(visible) => {
                    dom::set_style(&self.root, "display", if visible { "flex" } else { "none" });
                }
                ModalEffect::LockScroll(locked) => {
                    if let Ok(body) = dom::body() {
                        dom::set_class(&body, "modal-open", locked);
                    }
                }
                ModalEffect::SetExpanded(expanded) => {
                    let _ = self
                        .trigger
                        .set_attribute("aria-expanded", if expanded { "true" } else { "false" });
                }
                ModalEffect::ForceReflow => {
                    let _ = self.root.offset_height();
                }
                ModalEffect::SetShown(shown) => dom::set_class(&self.root, "show", shown),
                ModalEffect::TrapFocus => {
                    *self.trap.borrow_mut() = FocusTrap::install(&self.root, self.focus_delay_ms);
                }
                ModalEffect::ReleaseFocusTrap => {
                    self.trap.borrow_mut().take();
                }
                ModalEffect::RestoreFocus => {
                    let _ = self.trigger.focus();
                }
            }
        }
    }
}

fn with(this: &Weak<ModalBinding>, f: impl FnOnce(&Rc<ModalBinding>)) {
    if let Some(this) = this.upgrade() {
        f(&this);
    }
}
