//! Page bootstrap: configuration, logging and ownership of every binding.

use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions};
use gloo::timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use web_sys::{Element, ErrorEvent, HtmlElement, HtmlInputElement, PromiseRejectionEvent};

use super::canvas::ParticleCanvas;
use super::carousel::CarouselBinding;
use super::dom;
use super::forms::FormBinding;
use super::logger;
use super::modal::{ModalBinding, ModalIds};
use super::nav::NavBinding;
use super::reveal::Reveals;
use super::scroll::{AnchorLinks, ScrollEffects};
use crate::core::{PageConfig, Result, SiteConfig};
use crate::forms::FormKind;
use crate::page::{
    touch_class, ReadyState, MAIN_CONTENT_ID, SKIP_LINK_STYLE, SKIP_LINK_TOP_FOCUSED, SKIP_LINK_TOP_HIDDEN,
};
use crate::particles::{hero_particle_count, Drifting, Rising};

thread_local! {
    static PAGE: RefCell<Option<Page>> = const { RefCell::new(None) };
    static BOOT: RefCell<Option<EventListener>> = const { RefCell::new(None) };
}

/// Boot once the DOM is parsed.
pub fn start() -> Result<()> {
    logger::init(log::LevelFilter::Info);

    let document = dom::document()?;
    if ReadyState::parse(&document.ready_state()).is_loading() {
        let listener = EventListener::once(&document, "DOMContentLoaded", |_| boot());
        BOOT.with(|slot| *slot.borrow_mut() = Some(listener));
    } else {
        boot();
    }
    Ok(())
}

/// Tear down every binding: listeners are removed, timers and animation frames
/// cancelled.
pub fn stop() {
    BOOT.with(|slot| slot.borrow_mut().take());
    let page = PAGE.with(|slot| slot.borrow_mut().take());
    if page.is_some() {
        log::info!("page torn down");
    }
}

fn boot() {
    let config = load_config();
    logger::init(config.log_level.into());

    let page = Page::attach(config);
    log::info!("page ready ({} components)", page.components());
    PAGE.with(|slot| *slot.borrow_mut() = Some(page));
}

fn load_config() -> SiteConfig {
    let Some(script) = dom::query_one::<Element>("#site-config") else {
        return SiteConfig::default();
    };
    let json = script.text_content().unwrap_or_default();
    match SiteConfig::from_json(&json) {
        Ok(config) => {
            log::debug!("loaded #site-config overrides");
            config
        }
        Err(e) => {
            log::warn!("ignoring #site-config: {e}");
            SiteConfig::default()
        }
    }
}

fn optional<T>(component: &str, result: Result<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            log::debug!("{component} skipped: {e}");
            None
        }
    }
}

/// Everything running on the page. Dropping it tears the page down.
struct Page {
    nav: Option<Rc<NavBinding>>,
    _anchors: AnchorLinks,
    scroll: Option<Rc<ScrollEffects>>,
    carousel: Option<Rc<CarouselBinding>>,
    modals: Vec<Rc<ModalBinding>>,
    forms: Vec<Rc<FormBinding>>,
    reveals: Option<Reveals>,
    hero: Option<ParticleCanvas<Rising>>,
    backgrounds: Vec<ParticleCanvas<Drifting>>,
    _chrome: Chrome,
}

impl Page {
    fn attach(config: SiteConfig) -> Self {
        let chrome = Chrome::attach(&config.page);

        // The menu must see link clicks before the generic anchor handler.
        let nav = optional("mobile nav", NavBinding::attach(&config.page));
        let anchors = AnchorLinks::attach(&config.scroll);
        let scroll = optional("scroll effects", ScrollEffects::attach(&config.scroll));
        let carousel = optional("carousel", CarouselBinding::attach(&config.carousel));
        let reveals = optional("reveals", Reveals::attach(&config.reveal));

        let contact_modal = optional(
            "contact modal",
            ModalBinding::attach(ModalIds::CONTACT, &config.modal),
        );
        let appointment_modal = optional(
            "appointment modal",
            ModalBinding::attach(ModalIds::APPOINTMENT, &config.modal),
        );

        if let Ok(input) = dom::by_id::<HtmlInputElement>("appointment-date") {
            input.set_min(&dom::today_iso());
        }
        let forms = [
            optional(
                "contact form",
                FormBinding::attach(FormKind::Contact, &config.forms, None),
            ),
            optional(
                "appointment form",
                FormBinding::attach(
                    FormKind::Appointment,
                    &config.forms,
                    appointment_modal.clone(),
                ),
            ),
        ]
        .into_iter()
        .flatten()
        .collect();

        let particles = &config.particles;
        let hero_count = hero_particle_count(
            dom::inner_width(),
            particles.hero_width_per_particle,
            particles.hero_min_count,
        );
        let hero = ParticleCanvas::attach("hero-canvas", hero_count, Rising::default(), particles);
        let backgrounds = [
            ParticleCanvas::attach(
                "contact-canvas",
                particles.contact_count,
                Drifting::contact(),
                particles,
            ),
            ParticleCanvas::attach(
                "appointment-canvas",
                particles.appointment_count,
                Drifting::appointment(),
                particles,
            ),
        ]
        .into_iter()
        .flatten()
        .collect();

        Self {
            nav,
            _anchors: anchors,
            scroll,
            carousel,
            modals: contact_modal.into_iter().chain(appointment_modal).collect(),
            forms,
            reveals,
            hero,
            backgrounds,
            _chrome: chrome,
        }
    }

    fn components(&self) -> usize {
        [
            self.nav.is_some(),
            self.scroll.is_some(),
            self.carousel.is_some(),
            self.reveals.is_some(),
            self.hero.is_some(),
        ]
        .into_iter()
        .filter(|attached| *attached)
        .count()
            + self.modals.len()
            + self.forms.len()
            + self.backgrounds.len()
    }
}

/// Page-wide listeners and one-shot timers that belong to no component.
struct Chrome {
    _listeners: Vec<EventListener>,
    _timeouts: Rc<RefCell<Vec<Timeout>>>,
}

impl Chrome {
    fn attach(config: &PageConfig) -> Self {
        let timeouts: Rc<RefCell<Vec<Timeout>>> = Rc::default();
        let mut listeners = Vec::new();

        listeners.extend(global_error_handlers());
        mark_touch_device();
        listeners.extend(skip_link());
        listeners.extend(profile_fallback());
        listeners.extend(on_load(config, timeouts.clone()));
        listeners.extend(orientation_resize(config, timeouts.clone()));

        Self {
            _listeners: listeners,
            _timeouts: timeouts,
        }
    }
}

fn global_error_handlers() -> Vec<EventListener> {
    let Ok(window) = dom::window() else {
        return Vec::new();
    };

    let error = EventListener::new(&window, "error", |event| {
        if let Some(event) = event.dyn_ref::<ErrorEvent>() {
            log::error!(
                "script error: {} ({}:{})",
                event.message(),
                event.filename(),
                event.lineno()
            );
        }
    });

    let rejection = EventListener::new_with_options(
        &window,
        "unhandledrejection",
        EventListenerOptions::enable_prevent_default(),
        |event| {
            if let Some(rejection) = event.dyn_ref::<PromiseRejectionEvent>() {
                log::error!("unhandled promise rejection: {:?}", rejection.reason());
            }
            event.prevent_default();
        },
    );

    vec![error, rejection]
}

fn mark_touch_device() {
    let is_touch = dom::document()
        .map(|d| d.create_event("TouchEvent").is_ok())
        .unwrap_or(false);
    if let Ok(body) = dom::body() {
        dom::set_class(&body, touch_class(is_touch), true);
    }
}

fn skip_link() -> Vec<EventListener> {
    match try_skip_link() {
        Ok(listeners) => listeners,
        Err(e) => {
            log::debug!("skip link skipped: {e}");
            Vec::new()
        }
    }
}

fn try_skip_link() -> Result<Vec<EventListener>> {
    let document = dom::document()?;
    let body = dom::body()?;

    let link: HtmlElement = document.create_element("a")?.unchecked_into();
    link.set_attribute("href", &format!("#{MAIN_CONTENT_ID}"))?;
    link.set_class_name("skip-link");
    link.set_text_content(Some("Skip to main content"));
    link.style().set_css_text(SKIP_LINK_STYLE);
    body.insert_before(&link, body.first_child().as_ref())?;

    if let Some(main) = dom::query_one::<Element>("main") {
        main.set_id(MAIN_CONTENT_ID);
    }

    let focused = link.clone();
    let blurred = link.clone();
    Ok(vec![
        EventListener::new(&link, "focus", move |_| {
            dom::set_style(&focused, "top", SKIP_LINK_TOP_FOCUSED);
        }),
        EventListener::new(&link, "blur", move |_| {
            dom::set_style(&blurred, "top", SKIP_LINK_TOP_HIDDEN);
        }),
    ])
}

fn profile_fallback() -> Vec<EventListener> {
    let Ok(image) = dom::by_id::<HtmlElement>("profile-img") else {
        return Vec::new();
    };

    let broken = image.clone();
    vec![
        EventListener::new(&image, "error", move |_| {
            dom::set_style(&broken, "display", "none");
            if let Ok(fallback) = dom::by_id::<HtmlElement>("profile-fallback") {
                dom::set_style(&fallback, "display", "flex");
            }
        }),
        EventListener::new(&image, "load", |_| {
            if let Ok(fallback) = dom::by_id::<HtmlElement>("profile-fallback") {
                dom::set_style(&fallback, "display", "none");
            }
        }),
    ]
}

fn on_load(config: &PageConfig, timeouts: Rc<RefCell<Vec<Timeout>>>) -> Option<EventListener> {
    let fade_ms = config.spinner_fade_delay_ms as u32;
    let remove_ms = config.spinner_remove_delay_ms as u32;
    let loaded = move || {
        if let Ok(body) = dom::body() {
            dom::set_class(&body, "loaded", true);
        }
        let Ok(spinner) = dom::by_id::<HtmlElement>("loading-spinner") else {
            return;
        };
        let pending = Rc::downgrade(&timeouts);
        let fade = Timeout::new(fade_ms, move || {
            dom::set_style(&spinner, "opacity", "0");
            let remove = Timeout::new(remove_ms, move || spinner.remove());
            if let Some(pending) = pending.upgrade() {
                pending.borrow_mut().push(remove);
            }
        });
        timeouts.borrow_mut().push(fade);
    };

    let document = dom::document().ok()?;
    if ReadyState::parse(&document.ready_state()).is_complete() {
        loaded();
        return None;
    }
    let window = dom::window().ok()?;
    Some(EventListener::once(&window, "load", move |_| loaded()))
}

fn orientation_resize(
    config: &PageConfig,
    timeouts: Rc<RefCell<Vec<Timeout>>>,
) -> Option<EventListener> {
    let delay = config.orientation_resize_delay_ms as u32;
    let window = dom::window().ok()?;
    let target = window.clone();
    let pending = Rc::downgrade(&timeouts);
    Some(EventListener::new(&window, "orientationchange", move |_| {
        let window = target.clone();
        let dispatch = Timeout::new(delay, move || {
            if let Ok(event) = web_sys::Event::new("resize") {
                let _ = window.dispatch_event(&event);
            }
        });
        if let Some(pending) = pending.upgrade() {
            pending.borrow_mut().push(dispatch);
        }
    }))
}

/// Snapshot of what the page is running.
#[wasm_bindgen]
pub struct PageStats {
    /// Attached components.
    pub components: u32,
    /// Frames drawn by the hero canvas.
    pub hero_frames: u64,
}

/// Current page statistics, if the page has booted.
#[wasm_bindgen]
pub fn stats() -> Option<PageStats> {
    PAGE.with(|slot| {
        slot.borrow().as_ref().map(|page| PageStats {
            components: page.components() as u32,
            hero_frames: page.hero.as_ref().map_or(0, |hero| hero.frames()),
        })
    })
}

/// Remove every listener and stop every timer and animation.
#[wasm_bindgen]
pub fn shutdown() {
    stop();
}
