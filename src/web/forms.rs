//! Forms bound to the DOM.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo::events::{EventListener, EventListenerOptions};
use web_sys::{Element, HtmlElement, HtmlFormElement};

use super::dom;
use super::modal::ModalBinding;
use super::timers::DeadlineTimer;
use crate::core::{now_ms, FormConfig, Result, Scheduled, SiteError};
use crate::forms::{
    FormController, FormEffect, FormKind, FormValues, LogNotifier, Notifier, StatusKind,
    ERROR_BORDER_COLOR, ERROR_BOX_SHADOW,
};

impl FormKind {
    fn form_id(self) -> &'static str {
        match self {
            FormKind::Contact => "main-contact-form",
            FormKind::Appointment => "appointment-form",
        }
    }
}

/// A form wired to submit, live correction and its status line.
pub struct FormBinding {
    form: HtmlFormElement,
    status_host: Element,
    controller: RefCell<FormController>,
    notifier: RefCell<Box<dyn Notifier>>,
    modal: Option<Rc<ModalBinding>>,
    timer: DeadlineTimer,
    listeners: RefCell<Vec<EventListener>>,
}

impl FormBinding {
    /// Wire a form. `modal` is closed after a successful appointment submission.
    pub fn attach(
        kind: FormKind,
        config: &FormConfig,
        modal: Option<Rc<ModalBinding>>,
    ) -> Result<Rc<Self>> {
        let form: HtmlFormElement = dom::by_id(kind.form_id())?;

        let status_host: Element = match kind {
            FormKind::Contact => form.clone().into(),
            FormKind::Appointment => form
                .query_selector(".form-actions")?
                .ok_or_else(|| SiteError::MissingElement(".form-actions".into()))?,
        };

        let binding = Rc::new(Self {
            form,
            status_host,
            controller: RefCell::new(FormController::new(kind, config)),
            notifier: RefCell::new(Box::new(LogNotifier::new(dom::local_timestamp))),
            modal,
            timer: DeadlineTimer::default(),
            listeners: RefCell::new(Vec::new()),
        });
        binding.install_listeners();
        log::debug!("form '{}' ready", kind.form_id());
        Ok(binding)
    }

    fn install_listeners(self: &Rc<Self>) {
        let mut listeners = Vec::new();

        let this = Rc::downgrade(self);
        listeners.push(EventListener::new_with_options(
            &self.form,
            "submit",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                event.prevent_default();
                with(&this, |f| f.submit());
            },
        ));

        for field in dom::query_all::<Element>(&self.form, "input, textarea") {
            let this = Rc::downgrade(self);
            let target = field.clone();
            listeners.push(EventListener::new(&field, "input", move |_| {
                let value = dom::field_value(&target).unwrap_or_default();
                with(&this, |f| {
                    let effect = f.controller.borrow().on_input(&target.id(), &value);
                    f.apply(effect.into_iter().collect());
                });
            }));
        }

        *self.listeners.borrow_mut() = listeners;
    }

    fn read_values(&self) -> FormValues {
        let controller = self.controller.borrow();
        let mut values = FormValues::new();
        for id in controller.schema().field_ids() {
            if let Ok(element) = dom::by_id::<Element>(id) {
                values.insert(id, &dom::field_value(&element).unwrap_or_default());
            }
        }
        values
    }

    fn submit(self: &Rc<Self>) {
        let values = self.read_values();
        let effects = self.controller.borrow_mut().submit(values, now_ms());
        self.apply(effects);
        self.reschedule();
    }

    fn on_timer(self: &Rc<Self>) {
        let effects = {
            let mut notifier = self.notifier.borrow_mut();
            self.controller
                .borrow_mut()
                .poll(now_ms(), &mut **notifier)
        };
        self.apply(effects);
        self.reschedule();
    }

    fn reschedule(self: &Rc<Self>) {
        let this = Rc::downgrade(self);
        let deadline = self.controller.borrow().next_deadline();
        self.timer.schedule(deadline, move || with(&this, |f| f.on_timer()));
    }

    fn apply(&self, effects: Vec<FormEffect>) {
        for effect in effects {
            match effect {
                FormEffect::MarkField { id, error } => {
                    if let Ok(field) = dom::by_id::<HtmlElement>(&id) {
                        let (border, shadow) = if error {
                            (ERROR_BORDER_COLOR, ERROR_BOX_SHADOW)
                        } else {
                            ("", "")
                        };
                        dom::set_style(&field, "border-color", border);
                        dom::set_style(&field, "box-shadow", shadow);
                    }
                }
                FormEffect::Status { kind, text } => self.show_status(kind, &text),
                FormEffect::ResetFields => self.form.reset(),
                FormEffect::CloseModal => {
                    if let Some(modal) = &self.modal {
                        modal.close();
                    }
                }
            }
        }
    }

    fn show_status(&self, kind: StatusKind, text: &str) {
        let existing = self.status_host.query_selector(".form-status").ok().flatten();
        let status = match existing {
            Some(status) => status,
            None => match self.create_status() {
                Ok(status) => status,
                Err(e) => {
                    log::warn!("could not create form status: {e}");
                    return;
                }
            },
        };
        status.set_text_content(Some(text));
        status.set_class_name("form-status");
        if let Some(class) = kind.css_class() {
            dom::set_class(&status, class, true);
        }
    }

    fn create_status(&self) -> Result<Element> {
        let status = dom::document()?.create_element("div")?;
        status.set_class_name("form-status");
        self.status_host.append_child(&status)?;
        Ok(status)
    }
}

fn with(this: &Weak<FormBinding>, f: impl FnOnce(&Rc<FormBinding>)) {
    if let Some(this) = this.upgrade() {
        f(&this);
    }
}
