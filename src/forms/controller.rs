//! Submission lifecycle for a form.

use super::payload::{AppointmentRequest, ContactMessage, Notifier, Submission};
use super::schema::{FieldStatus, FormSchema, FormValues};
use crate::core::{earliest, Deadline, FormConfig, Scheduled};

/// Which form a controller drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    /// `#main-contact-form`.
    Contact,
    /// `#appointment-form`.
    Appointment,
}

impl FormKind {
    /// Validation rules for this form.
    pub fn schema(self) -> FormSchema {
        match self {
            FormKind::Contact => FormSchema::contact(),
            FormKind::Appointment => FormSchema::appointment(),
        }
    }

    /// Status while the submission is in flight.
    pub fn sending_message(self) -> &'static str {
        match self {
            FormKind::Contact => "Sending message...",
            FormKind::Appointment => "Scheduling your appointment...",
        }
    }

    /// Status after a successful submission.
    pub fn success_message(self) -> &'static str {
        match self {
            FormKind::Contact => "Message sent successfully! We'll get back to you soon.",
            FormKind::Appointment => {
                "Appointment scheduled successfully! We'll contact you soon to confirm."
            }
        }
    }

    /// Status after a failed submission.
    pub fn failure_message(self) -> &'static str {
        match self {
            FormKind::Contact => "Failed to send message. Please try again.",
            FormKind::Appointment => "Failed to schedule appointment. Please try again.",
        }
    }

    fn submission(self, values: &FormValues) -> Submission {
        match self {
            FormKind::Contact => Submission::Contact(ContactMessage::from_values(values)),
            FormKind::Appointment => {
                Submission::Appointment(AppointmentRequest::from_values(values))
            }
        }
    }
}

/// Style of the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    /// Neutral (no extra class).
    Default,
    /// In flight.
    Sending,
    /// Delivered.
    Success,
    /// Validation or delivery failed.
    Error,
}

impl StatusKind {
    /// CSS class added next to `form-status`.
    pub fn css_class(self) -> Option<&'static str> {
        match self {
            StatusKind::Default => None,
            StatusKind::Sending => Some("sending"),
            StatusKind::Success => Some("success"),
            StatusKind::Error => Some("error"),
        }
    }
}

/// A DOM change requested by the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEffect {
    /// Replace the status line.
    Status {
        /// Style.
        kind: StatusKind,
        /// Text.
        text: String,
    },
    /// Apply or clear the error style on a field.
    MarkField {
        /// Element id.
        id: String,
        /// `true` to show the error style.
        error: bool,
    },
    /// Reset every field to empty.
    ResetFields,
    /// Close the modal that hosts the form.
    CloseModal,
}

impl FormEffect {
    fn status(kind: StatusKind, text: impl Into<String>) -> Self {
        FormEffect::Status {
            kind,
            text: text.into(),
        }
    }
}

/// Where a submission is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionPhase {
    /// Nothing in flight.
    #[default]
    Idle,
    /// Waiting for the simulated latency.
    Sending,
    /// Delivered; follow-up pending.
    Succeeded,
    /// Delivery failed.
    Failed,
}

/// Validation and simulated submission for one form.
#[derive(Debug, Clone)]
pub struct FormController {
    kind: FormKind,
    schema: FormSchema,
    phase: SubmissionPhase,
    pending: Option<FormValues>,
    deliver: Deadline,
    follow_up: Deadline,
    send_latency: f64,
    follow_up_delay: f64,
}

impl FormController {
    /// Create a controller for `kind`.
    pub fn new(kind: FormKind, config: &FormConfig) -> Self {
        let follow_up_delay = match kind {
            FormKind::Contact => config.contact_status_reset_ms,
            FormKind::Appointment => config.appointment_close_ms,
        };
        Self {
            kind,
            schema: kind.schema(),
            phase: SubmissionPhase::Idle,
            pending: None,
            deliver: Deadline::new(),
            follow_up: Deadline::new(),
            send_latency: config.send_latency_ms,
            follow_up_delay,
        }
    }

    /// Which form this is.
    #[inline]
    pub fn kind(&self) -> FormKind {
        self.kind
    }

    /// Validation rules.
    #[inline]
    pub fn schema(&self) -> &FormSchema {
        &self.schema
    }

    /// Current phase.
    #[inline]
    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    /// Handle a submit. Ignored while a submission is already in flight.
    pub fn submit(&mut self, values: FormValues, now: f64) -> Vec<FormEffect> {
        if self.phase == SubmissionPhase::Sending {
            return Vec::new();
        }

        let report = self.schema.validate(&values);
        let mut effects: Vec<FormEffect> = report
            .fields
            .iter()
            .map(|(id, status)| FormEffect::MarkField {
                id: (*id).to_string(),
                error: *status == FieldStatus::Invalid,
            })
            .collect();

        if !report.is_valid() {
            effects.push(FormEffect::status(StatusKind::Error, report.message()));
            return effects;
        }

        self.follow_up.disarm();
        self.pending = Some(values);
        self.phase = SubmissionPhase::Sending;
        self.deliver.arm(now + self.send_latency);
        effects.push(FormEffect::status(
            StatusKind::Sending,
            self.kind.sending_message(),
        ));
        effects
    }

    /// Fire due deadlines, delivering through `notifier`.
    pub fn poll(&mut self, now: f64, notifier: &mut dyn Notifier) -> Vec<FormEffect> {
        let mut effects = Vec::new();

        if let Some(at) = self.deliver.take_due(now) {
            let values = self.pending.take().unwrap_or_default();
            match notifier.deliver(&self.kind.submission(&values)) {
                Ok(()) => {
                    self.phase = SubmissionPhase::Succeeded;
                    self.follow_up.arm(at + self.follow_up_delay);
                    effects.push(FormEffect::status(
                        StatusKind::Success,
                        self.kind.success_message(),
                    ));
                    effects.push(FormEffect::ResetFields);
                }
                Err(e) => {
                    log::error!("{:?} form submission failed: {e}", self.kind);
                    self.phase = SubmissionPhase::Failed;
                    effects.push(FormEffect::status(
                        StatusKind::Error,
                        self.kind.failure_message(),
                    ));
                }
            }
        }

        if self.follow_up.take_due(now).is_some() {
            self.phase = SubmissionPhase::Idle;
            if self.kind == FormKind::Appointment {
                effects.push(FormEffect::CloseModal);
            }
            effects.push(FormEffect::status(StatusKind::Default, ""));
        }

        effects
    }

    /// Live correction while typing: a non-empty value clears the error style.
    pub fn on_input(&self, id: &str, value: &str) -> Option<FormEffect> {
        (!value.trim().is_empty()).then(|| FormEffect::MarkField {
            id: id.to_string(),
            error: false,
        })
    }
}

impl Scheduled for FormController {
    fn next_deadline(&self) -> Option<f64> {
        earliest([self.deliver.at(), self.follow_up.at()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SiteError;

    #[derive(Default)]
    struct Recorder {
        delivered: Vec<Submission>,
        fail: bool,
    }

    impl Notifier for Recorder {
        fn deliver(&mut self, submission: &Submission) -> Result<(), SiteError> {
            if self.fail {
                return Err(SiteError::Delivery("offline".into()));
            }
            self.delivered.push(submission.clone());
            Ok(())
        }
    }

    fn valid_contact() -> FormValues {
        FormValues::new()
            .with("name", "Ada")
            .with("email", "ada@example.com")
            .with("message", "Hello")
    }

    fn statuses(effects: &[FormEffect]) -> Vec<(StatusKind, String)> {
        effects
            .iter()
            .filter_map(|e| match e {
                FormEffect::Status { kind, text } => Some((*kind, text.clone())),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_empty_contact_submit_shows_joined_errors() {
        let mut form = FormController::new(FormKind::Contact, &FormConfig::default());
        let effects = form.submit(FormValues::new(), 0.0);

        let marked: Vec<_> = effects
            .iter()
            .filter(|e| matches!(e, FormEffect::MarkField { error: true, .. }))
            .collect();
        assert_eq!(marked.len(), 3);
        assert_eq!(
            statuses(&effects),
            vec![(
                StatusKind::Error,
                "Name is required. Email is required. Message is required".to_string()
            )]
        );
        assert_eq!(form.phase(), SubmissionPhase::Idle);
        assert_eq!(form.next_deadline(), None);
    }

    #[test]
    fn test_contact_success_flow() {
        let mut form = FormController::new(FormKind::Contact, &FormConfig::default());
        let mut notifier = Recorder::default();

        let effects = form.submit(valid_contact(), 0.0);
        assert_eq!(statuses(&effects)[0].0, StatusKind::Sending);
        assert!(effects.contains(&FormEffect::MarkField { id: "email".into(), error: false }));
        assert_eq!(form.phase(), SubmissionPhase::Sending);

        assert!(form.poll(1999.0, &mut notifier).is_empty());
        let effects = form.poll(2000.0, &mut notifier);
        assert_eq!(statuses(&effects)[0].0, StatusKind::Success);
        assert!(effects.contains(&FormEffect::ResetFields));
        assert!(!effects.contains(&FormEffect::CloseModal));
        assert_eq!(notifier.delivered.len(), 1);

        let effects = form.poll(7000.0, &mut notifier);
        assert_eq!(statuses(&effects), vec![(StatusKind::Default, String::new())]);
        assert_eq!(form.phase(), SubmissionPhase::Idle);
    }

    #[test]
    fn test_appointment_closes_modal_after_success() {
        let mut form = FormController::new(FormKind::Appointment, &FormConfig::default());
        let mut notifier = Recorder::default();
        let values = FormValues::new()
            .with("appointment-name", "Ada")
            .with("appointment-email", "ada@example.com")
            .with("project-type", "Web app")
            .with("project-details", "Booking flow");

        form.submit(values, 100.0);
        form.poll(2100.0, &mut notifier);
        assert!(matches!(notifier.delivered[0], Submission::Appointment(_)));
        assert!(form.poll(5099.0, &mut notifier).is_empty());
        let effects = form.poll(5100.0, &mut notifier);
        assert_eq!(effects[0], FormEffect::CloseModal);
    }

    #[test]
    fn test_delivery_failure_shows_generic_message() {
        let mut form = FormController::new(FormKind::Contact, &FormConfig::default());
        let mut notifier = Recorder { fail: true, ..Default::default() };

        form.submit(valid_contact(), 0.0);
        let effects = form.poll(2000.0, &mut notifier);
        assert_eq!(
            statuses(&effects),
            vec![(StatusKind::Error, "Failed to send message. Please try again.".to_string())]
        );
        assert!(!effects.contains(&FormEffect::ResetFields));
        assert_eq!(form.phase(), SubmissionPhase::Failed);
        assert_eq!(form.next_deadline(), None);
    }

    #[test]
    fn test_submit_while_sending_is_ignored() {
        let mut form = FormController::new(FormKind::Contact, &FormConfig::default());
        form.submit(valid_contact(), 0.0);
        assert!(form.submit(valid_contact(), 500.0).is_empty());
        assert_eq!(form.next_deadline(), Some(2000.0));
    }

    #[test]
    fn test_input_clears_error_only_when_non_empty() {
        let form = FormController::new(FormKind::Contact, &FormConfig::default());
        assert_eq!(form.on_input("name", "  "), None);
        assert_eq!(
            form.on_input("name", "A"),
            Some(FormEffect::MarkField { id: "name".into(), error: false })
        );
    }
}
