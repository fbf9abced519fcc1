//! Submitted data and its delivery.

use serde::Serialize;

use super::schema::FormValues;
use crate::core::SiteError;

/// A message from the contact form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactMessage {
    /// Sender name.
    pub name: String,
    /// Sender email.
    pub email: String,
    /// Optional subject.
    pub subject: String,
    /// Message body.
    pub message: String,
}

impl ContactMessage {
    /// Collect from contact form values.
    pub fn from_values(values: &FormValues) -> Self {
        Self {
            name: values.get("name").to_string(),
            email: values.get("email").to_string(),
            subject: values.get("subject").to_string(),
            message: values.get("message").to_string(),
        }
    }
}

/// A request from the appointment form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentRequest {
    /// Client name.
    pub name: String,
    /// Client email.
    pub email: String,
    /// Optional phone number.
    pub phone: String,
    /// Optional preferred date (`YYYY-MM-DD`).
    pub date: String,
    /// Kind of project.
    pub project_type: String,
    /// Optional budget range.
    pub budget: String,
    /// Free-form requirements.
    pub project_details: String,
}

fn or_default<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() {
        fallback
    } else {
        value
    }
}

impl AppointmentRequest {
    /// Collect from appointment form values.
    pub fn from_values(values: &FormValues) -> Self {
        Self {
            name: values.get("appointment-name").to_string(),
            email: values.get("appointment-email").to_string(),
            phone: values.get("appointment-phone").to_string(),
            date: values.get("appointment-date").to_string(),
            project_type: values.get("project-type").to_string(),
            budget: values.get("budget-range").to_string(),
            project_details: values.get("project-details").to_string(),
        }
    }

    /// Plain-text notification for the site owner.
    pub fn notification_text(&self, timestamp: &str) -> String {
        format!(
            "NEW APPOINTMENT REQUEST - PORTFOLIO WEBSITE\n\
             ===========================================\n\
             \n\
             Client Information:\n\
             ------------------\n\
             Name: {name}\n\
             Email: {email}\n\
             Phone: {phone}\n\
             Preferred Date: {date}\n\
             \n\
             Project Details:\n\
             ---------------\n\
             Project Type: {project_type}\n\
             Budget Range: {budget}\n\
             \n\
             Project Requirements:\n\
             {details}\n\
             \n\
             ---\n\
             Submitted through portfolio website\n\
             Timestamp: {timestamp}\n",
            name = self.name,
            email = self.email,
            phone = or_default(&self.phone, "Not provided"),
            date = or_default(&self.date, "Not specified"),
            project_type = self.project_type,
            budget = or_default(&self.budget, "Not specified"),
            details = self.project_details,
        )
    }
}

/// A validated form submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "form", rename_all = "lowercase")]
pub enum Submission {
    /// Contact form.
    Contact(ContactMessage),
    /// Appointment form.
    Appointment(AppointmentRequest),
}

/// Delivers submissions somewhere.
///
/// The page ships with [`LogNotifier`]; a real backend integration replaces
/// it and owns its own timeout and retry behavior.
pub trait Notifier {
    /// Deliver a submission.
    fn deliver(&mut self, submission: &Submission) -> Result<(), SiteError>;
}

/// Logs submissions instead of sending them.
pub struct LogNotifier<T> {
    timestamp: T,
}

impl<T: FnMut() -> String> LogNotifier<T> {
    /// `timestamp` produces the human-readable time stamped on notifications.
    pub fn new(timestamp: T) -> Self {
        Self { timestamp }
    }
}

impl<T: FnMut() -> String> Notifier for LogNotifier<T> {
    fn deliver(&mut self, submission: &Submission) -> Result<(), SiteError> {
        let json = serde_json::to_string(submission)
            .map_err(|e| SiteError::Delivery(e.to_string()))?;
        match submission {
            Submission::Contact(_) => log::info!("Contact form submission: {json}"),
            Submission::Appointment(request) => {
                log::info!("Appointment request: {json}");
                log::info!(
                    "Notification that would be sent:\n{}",
                    request.notification_text(&(self.timestamp)())
                );
            }
        }
        Ok(())
    }
}

impl<T> std::fmt::Debug for LogNotifier<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LogNotifier").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> AppointmentRequest {
        AppointmentRequest::from_values(
            &FormValues::new()
                .with("appointment-name", "Ada")
                .with("appointment-email", "ada@example.com")
                .with("project-type", "Web app")
                .with("project-details", "Booking flow"),
        )
    }

    #[test]
    fn test_notification_fills_missing_optionals() {
        let text = request().notification_text("2026-01-01 10:00");
        assert!(text.contains("Name: Ada"));
        assert!(text.contains("Phone: Not provided"));
        assert!(text.contains("Preferred Date: Not specified"));
        assert!(text.contains("Budget Range: Not specified"));
        assert!(text.contains("Booking flow"));
        assert!(text.contains("Timestamp: 2026-01-01 10:00"));
    }

    #[test]
    fn test_submission_serializes_with_form_tag() {
        let json = serde_json::to_value(Submission::Appointment(request())).unwrap();
        assert_eq!(json["form"], "appointment");
        assert_eq!(json["projectType"], "Web app");
    }

    #[test]
    fn test_log_notifier_succeeds() {
        let mut notifier = LogNotifier::new(|| "now".to_string());
        let contact = ContactMessage::from_values(&FormValues::new().with("name", "Ada"));
        assert!(notifier.deliver(&Submission::Contact(contact)).is_ok());
    }
}
