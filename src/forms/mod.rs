//! Contact and appointment forms: validation, inline errors and simulated
//! submission.

mod controller;
mod email;
mod payload;
mod schema;

pub use controller::{FormController, FormEffect, FormKind, StatusKind, SubmissionPhase};
pub use email::is_valid_email;
pub use payload::{AppointmentRequest, ContactMessage, LogNotifier, Notifier, Submission};
pub use schema::{
    FieldKind, FieldRule, FieldStatus, FormSchema, FormValues, ValidationReport,
    ERROR_BORDER_COLOR, ERROR_BOX_SHADOW,
};
