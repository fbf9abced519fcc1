//! Mobile navigation menu bound to the DOM.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo::events::{EventListener, EventListenerOptions};
use gloo::timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, KeyboardEvent, Node};

use super::dom;
use super::scroll::anchor_offset;
use crate::core::{PageConfig, Result};
use crate::nav::{NavMenu, NavView};
use crate::page::Viewport;

/// `#nav` and `#nav-toggle`, wired together.
pub struct NavBinding {
    nav: Element,
    toggle: HtmlElement,
    menu: RefCell<NavMenu>,
    config: PageConfig,
    pending_scroll: RefCell<Option<Timeout>>,
    listeners: RefCell<Vec<EventListener>>,
}

impl NavBinding {
    /// Wire the menu. Must run before [`super::scroll::AnchorLinks`] so link
    /// clicks reach the menu first.
    pub fn attach(config: &PageConfig) -> Result<Rc<Self>> {
        let binding = Rc::new(Self {
            nav: dom::by_id("nav")?,
            toggle: dom::by_id("nav-toggle")?,
            menu: RefCell::new(NavMenu::new()),
            config: config.clone(),
            pending_scroll: RefCell::new(None),
            listeners: RefCell::new(Vec::new()),
        });
        binding.install_listeners()?;
        log::debug!("mobile nav ready");
        Ok(binding)
    }

    fn install_listeners(self: &Rc<Self>) -> Result<()> {
        let mut listeners = Vec::new();
        let document = dom::document()?;

        let this = Rc::downgrade(self);
        listeners.push(EventListener::new(&self.toggle, "click", move |_| {
            with(&this, |n| {
                let view = n.menu.borrow_mut().toggle();
                n.apply(view);
            });
        }));

        for link in dom::query_document::<Element>(".main-nav a") {
            let this = Rc::downgrade(self);
            let href = link.get_attribute("href").unwrap_or_default();
            listeners.push(EventListener::new_with_options(
                &link,
                "click",
                EventListenerOptions::enable_prevent_default(),
                move |event| {
                    with(&this, |n| {
                        if n.menu.borrow().is_open() {
                            event.prevent_default();
                            n.follow_link(&href);
                        }
                    });
                },
            ));
        }

        let this = Rc::downgrade(self);
        listeners.push(EventListener::new(&document, "click", move |event| {
            let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
            with(&this, |n| n.on_document_click(target.as_ref()));
        }));

        let this = Rc::downgrade(self);
        listeners.push(EventListener::new(&document, "keydown", move |event| {
            let is_escape = event
                .dyn_ref::<KeyboardEvent>()
                .is_some_and(|key| key.key() == "Escape");
            if is_escape {
                with(&this, |n| n.close());
            }
        }));

        *self.listeners.borrow_mut() = listeners;
        Ok(())
    }

    /// Close the menu if it is open.
    pub fn close(&self) {
        let view = self.menu.borrow_mut().close();
        if let Some(view) = view {
            self.apply(view);
        }
    }

    fn follow_link(&self, href: &str) {
        let has_target = dom::document()
            .ok()
            .and_then(|d| d.query_selector(href).ok().flatten())
            .is_some();
        if !has_target {
            return;
        }
        self.close();

        let href = href.to_string();
        let timeout = Timeout::new(self.config.nav_scroll_delay_ms as u32, move || {
            if let Some(top) = anchor_offset(&href, 0.0) {
                dom::smooth_scroll_window(top);
            }
        });
        *self.pending_scroll.borrow_mut() = Some(timeout);
    }

    fn on_document_click(&self, target: Option<&Node>) {
        if !Viewport::classify(dom::inner_width(), &self.config).is_mobile() {
            return;
        }
        let inside_nav = self.nav.contains(target);
        let inside_toggle = self.toggle.contains(target);
        let closes = self.menu.borrow().closes_on_click(inside_nav, inside_toggle);
        if closes {
            self.close();
        }
    }

    fn apply(&self, view: NavView) {
        dom::set_class(&self.nav, "open", view.open);
        let _ = self
            .toggle
            .set_attribute("aria-expanded", if view.open { "true" } else { "false" });

        if let Ok(Some(icon)) = self.toggle.query_selector("i") {
            let _ = icon.class_list().replace(view.previous_icon, view.icon);
        }
        if let Ok(body) = dom::body() {
            dom::set_style(&body, "overflow", if view.lock_scroll { "hidden" } else { "" });
        }
    }
}

fn with(this: &Weak<NavBinding>, f: impl FnOnce(&Rc<NavBinding>)) {
    if let Some(this) = this.upgrade() {
        f(&this);
    }
}
