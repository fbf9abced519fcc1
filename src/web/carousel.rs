//! Skills carousel bound to the DOM.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo::events::EventListener;
use web_sys::{Element, HtmlButtonElement, HtmlElement};

use super::dom;
use super::timers::DeadlineTimer;
use crate::carousel::{centered_scroll_left, CardMetrics, Carousel, CarouselView};
use crate::core::{now_ms, CarouselConfig, Result, Scheduled, SiteError};

/// `#skills-scroll` with its cards, dots and prev/next controls.
pub struct CarouselBinding {
    container: HtmlElement,
    cards: Vec<HtmlElement>,
    dots: Vec<Element>,
    prev: Option<HtmlButtonElement>,
    next: Option<HtmlButtonElement>,
    model: RefCell<Carousel>,
    timer: DeadlineTimer,
    listeners: RefCell<Vec<EventListener>>,
}

impl CarouselBinding {
    /// Wire the carousel. Fails when the container or its cards are missing.
    pub fn attach(config: &CarouselConfig) -> Result<Rc<Self>> {
        let container: HtmlElement = dom::by_id("skills-scroll")?;
        let cards: Vec<HtmlElement> = dom::query_document(".skill-card");
        let model = Carousel::new(cards.len(), config, now_ms())
            .ok_or_else(|| SiteError::MissingElement(".skill-card".into()))?;

        let binding = Rc::new(Self {
            container,
            cards,
            dots: dom::query_document(".skill-dot"),
            prev: dom::query_one(".prev-btn"),
            next: dom::query_one(".next-btn"),
            model: RefCell::new(model),
            timer: DeadlineTimer::default(),
            listeners: RefCell::new(Vec::new()),
        });

        let view = binding.model.borrow().view();
        binding.render(view);
        binding.install_listeners()?;
        binding.reschedule();
        log::debug!("carousel ready with {} cards", binding.cards.len());
        Ok(binding)
    }

    fn install_listeners(self: &Rc<Self>) -> Result<()> {
        let mut listeners = Vec::new();

        if let Some(prev) = &self.prev {
            let this = Rc::downgrade(self);
            listeners.push(EventListener::new(prev, "click", move |_| {
                with(&this, |c| {
                    let view = c.model.borrow_mut().prev(now_ms());
                    c.update(view);
                });
            }));
        }

        if let Some(next) = &self.next {
            let this = Rc::downgrade(self);
            listeners.push(EventListener::new(next, "click", move |_| {
                with(&this, |c| {
                    let view = c.model.borrow_mut().next(now_ms());
                    c.update(view);
                });
            }));
        }

        for (index, dot) in self.dots.iter().enumerate() {
            let this = Rc::downgrade(self);
            listeners.push(EventListener::new(dot, "click", move |_| {
                with(&this, |c| {
                    let view = c.model.borrow_mut().select(index, now_ms());
                    c.update(Some(view));
                });
            }));
        }

        let this = Rc::downgrade(self);
        listeners.push(EventListener::new(&self.container, "scroll", move |_| {
            with(&this, |c| {
                let metrics = c.card_metrics();
                let view = c.model.borrow_mut().on_scrolled(
                    c.container.scroll_left() as f64,
                    c.container.offset_width() as f64,
                    &metrics,
                    now_ms(),
                );
                c.update(view);
            });
        }));

        for event in ["touchstart", "mousedown"] {
            let this = Rc::downgrade(self);
            listeners.push(EventListener::new(&self.container, event, move |_| {
                with(&this, |c| {
                    c.model.borrow_mut().touch(now_ms());
                    c.reschedule();
                });
            }));
        }

        let this = Rc::downgrade(self);
        listeners.push(EventListener::new(&self.container, "mouseenter", move |_| {
            with(&this, |c| {
                c.model.borrow_mut().pointer_enter();
                c.reschedule();
            });
        }));

        let this = Rc::downgrade(self);
        listeners.push(EventListener::new(&self.container, "mouseleave", move |_| {
            with(&this, |c| {
                c.model.borrow_mut().pointer_leave(now_ms());
                c.reschedule();
            });
        }));

        let document = dom::document()?;
        let this = Rc::downgrade(self);
        let doc = document.clone();
        listeners.push(EventListener::new(&document, "visibilitychange", move |_| {
            with(&this, |c| {
                c.model.borrow_mut().set_page_hidden(doc.hidden(), now_ms());
                c.reschedule();
            });
        }));

        let window = dom::window()?;
        let this = Rc::downgrade(self);
        listeners.push(EventListener::new(&window, "resize", move |_| {
            with(&this, |c| {
                let view = c.model.borrow_mut().resize(now_ms());
                c.update(Some(view));
            });
        }));

        *self.listeners.borrow_mut() = listeners;
        Ok(())
    }

    fn card_metrics(&self) -> Vec<CardMetrics> {
        self.cards
            .iter()
            .map(|card| CardMetrics {
                left: card.offset_left() as f64,
                width: card.offset_width() as f64,
            })
            .collect()
    }

    fn on_timer(self: &Rc<Self>) {
        let view = self.model.borrow_mut().poll(now_ms());
        self.update(view);
    }

    fn update(self: &Rc<Self>, view: Option<CarouselView>) {
        if let Some(view) = view {
            self.render(view);
        }
        self.reschedule();
    }

    fn reschedule(self: &Rc<Self>) {
        let this = Rc::downgrade(self);
        let deadline = self.model.borrow().next_deadline();
        self.timer.schedule(deadline, move || with(&this, |c| c.on_timer()));
    }

    fn render(&self, view: CarouselView) {
        if view.center_card {
            if let Some(card) = self.cards.get(view.index) {
                let metrics = CardMetrics {
                    left: card.offset_left() as f64,
                    width: card.offset_width() as f64,
                };
                let left = centered_scroll_left(metrics, self.container.offset_width() as f64);
                dom::smooth_scroll_left(&self.container, left);
            }
        }

        for (i, card) in self.cards.iter().enumerate() {
            dom::set_class(card, "active", i == view.index);
        }
        for (i, dot) in self.dots.iter().enumerate() {
            dom::set_class(dot, "active", i == view.index);
        }
        if let Some(prev) = &self.prev {
            prev.set_disabled(view.prev_disabled);
        }
        if let Some(next) = &self.next {
            next.set_disabled(view.next_disabled);
        }
    }
}

fn with(this: &Weak<CarouselBinding>, f: impl FnOnce(&Rc<CarouselBinding>)) {
    if let Some(this) = this.upgrade() {
        f(&this);
    }
}
