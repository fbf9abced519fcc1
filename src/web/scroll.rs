//! Scroll-driven header, progress bar, active nav link and anchor scrolling.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo::events::{EventListener, EventListenerOptions};
use web_sys::{Element, HtmlElement};

use super::dom;
use super::timers::DeadlineTimer;
use crate::core::{now_ms, Result, ScrollConfig, Scheduled, Throttle};
use crate::scroll::{
    active_section, anchor_target, is_in_page_anchor, link_targets, progress_percent,
    HeaderTracker, SectionBounds,
};

/// Document offset for scrolling to the element `href` points at, leaving room
/// for the fixed header. `None` when nothing matches.
pub(crate) fn anchor_offset(href: &str, extra_offset: f64) -> Option<f64> {
    let target = dom::document().ok()?.query_selector(href).ok().flatten()?;
    let header_height = dom::query_one::<HtmlElement>("#site-header")
        .map(|header| header.offset_height() as f64)
        .unwrap_or(0.0);
    Some(anchor_target(
        target.get_bounding_client_rect().top(),
        dom::scroll_y(),
        header_height,
        extra_offset,
    ))
}

/// Window scroll effects, each behind its own throttle.
pub struct ScrollEffects {
    header: Option<HtmlElement>,
    progress: Option<HtmlElement>,
    sections: Vec<HtmlElement>,
    nav_links: Vec<Element>,
    tracker: RefCell<HeaderTracker>,
    header_throttle: RefCell<Throttle>,
    nav_throttle: RefCell<Throttle>,
    lookahead: f64,
    header_timer: DeadlineTimer,
    nav_timer: DeadlineTimer,
    scroll_listener: RefCell<Option<EventListener>>,
}

impl ScrollEffects {
    /// Start listening to window scrolls.
    pub fn attach(config: &ScrollConfig) -> Result<Rc<Self>> {
        let header = dom::by_id::<HtmlElement>("site-header").ok();
        if header.is_none() {
            log::debug!("no #site-header, header effects off");
        }

        let effects = Rc::new(Self {
            header,
            progress: dom::by_id::<HtmlElement>("scroll-progress").ok(),
            sections: dom::query_document("section[id]"),
            nav_links: dom::query_document(".main-nav a"),
            tracker: RefCell::new(HeaderTracker::new(config)),
            header_throttle: RefCell::new(Throttle::new(config.throttle_ms)),
            nav_throttle: RefCell::new(Throttle::new(config.nav_throttle_ms)),
            lookahead: config.section_lookahead,
            header_timer: DeadlineTimer::default(),
            nav_timer: DeadlineTimer::default(),
            scroll_listener: RefCell::new(None),
        });

        let window = dom::window()?;
        let this = Rc::downgrade(&effects);
        let listener = EventListener::new(&window, "scroll", move |_| {
            with(&this, |s| s.on_scroll());
        });
        *effects.scroll_listener.borrow_mut() = Some(listener);

        log::debug!(
            "scroll effects ready ({} sections, {} nav links)",
            effects.sections.len(),
            effects.nav_links.len()
        );
        Ok(effects)
    }

    fn on_scroll(self: &Rc<Self>) {
        let now = now_ms();
        if self.header_throttle.borrow_mut().request(now) {
            self.arm_header();
        }
        if self.nav_throttle.borrow_mut().request(now) {
            self.arm_nav();
        }
    }

    fn arm_header(self: &Rc<Self>) {
        let this = Rc::downgrade(self);
        let deadline = self.header_throttle.borrow().next_deadline();
        self.header_timer.schedule(deadline, move || {
            with(&this, |s| {
                if s.header_throttle.borrow_mut().poll(now_ms()) {
                    s.update_header();
                } else {
                    s.arm_header();
                }
            });
        });
    }

    fn arm_nav(self: &Rc<Self>) {
        let this = Rc::downgrade(self);
        let deadline = self.nav_throttle.borrow().next_deadline();
        self.nav_timer.schedule(deadline, move || {
            with(&this, |s| {
                if s.nav_throttle.borrow_mut().poll(now_ms()) {
                    s.highlight_nav();
                } else {
                    s.arm_nav();
                }
            });
        });
    }

    fn update_header(&self) {
        let y = dom::scroll_y();
        let state = self.tracker.borrow_mut().on_scroll(y);

        if let Some(header) = &self.header {
            dom::set_class(header, "hidden", state.hidden);
        }
        if let Ok(body) = dom::body() {
            dom::set_class(&body, "scrolled", state.scrolled);
        }
        if let Some(progress) = &self.progress {
            let doc_height = dom::document()
                .ok()
                .and_then(|d| d.document_element())
                .map(|root| root.scroll_height() as f64)
                .unwrap_or(0.0);
            let percent = progress_percent(y, doc_height, dom::inner_height());
            dom::set_style(progress, "width", &format!("{percent}%"));
        }
    }

    fn highlight_nav(&self) {
        let bounds: Vec<SectionBounds> = self
            .sections
            .iter()
            .map(|s| SectionBounds::new(s.id(), s.offset_top() as f64, s.offset_height() as f64))
            .collect();
        let current = active_section(&bounds, dom::scroll_y(), self.lookahead);

        for link in &self.nav_links {
            let href = link.get_attribute("href").unwrap_or_default();
            dom::set_class(link, "active", link_targets(&href, current));
        }
    }
}

fn with(this: &Weak<ScrollEffects>, f: impl FnOnce(&Rc<ScrollEffects>)) {
    if let Some(this) = this.upgrade() {
        f(&this);
    }
}

/// Smooth scrolling for every `a[href^="#"]`.
///
/// Clicks already handled by the mobile menu (default prevented) are left alone.
pub struct AnchorLinks {
    _listeners: Vec<EventListener>,
}

impl AnchorLinks {
    /// Intercept in-page anchor clicks.
    pub fn attach(config: &ScrollConfig) -> Self {
        let extra = config.anchor_offset;
        let listeners: Vec<EventListener> = dom::query_document::<Element>("a[href^=\"#\"]")
            .into_iter()
            .map(|anchor| {
                let link = anchor.clone();
                EventListener::new_with_options(
                    &anchor,
                    "click",
                    EventListenerOptions::enable_prevent_default(),
                    move |event| {
                        if event.default_prevented() {
                            return;
                        }
                        let href = link.get_attribute("href").unwrap_or_default();
                        if !is_in_page_anchor(&href) {
                            return;
                        }
                        if let Some(top) = anchor_offset(&href, extra) {
                            event.prevent_default();
                            dom::smooth_scroll_window(top);
                        }
                    },
                )
            })
            .collect();

        log::debug!("{} in-page anchors wired", listeners.len());
        Self {
            _listeners: listeners,
        }
    }
}
