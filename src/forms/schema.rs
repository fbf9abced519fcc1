//! Field rules and validation.

use std::collections::HashMap;

use super::email::is_valid_email;

/// Border color applied to an invalid field.
pub const ERROR_BORDER_COLOR: &str = "#ef4444";
/// Glow applied to an invalid field.
pub const ERROR_BOX_SHADOW: &str = "0 0 0 3px rgba(239, 68, 68, 0.1)";

/// Kind of check applied to a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Must be non-empty after trimming.
    Required,
    /// Must be non-empty and look like an email address.
    Email,
}

/// A validated field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRule {
    /// Element id of the input.
    pub id: &'static str,
    /// Message when the field is empty.
    pub required_message: &'static str,
    /// Check applied.
    pub kind: FieldKind,
}

impl FieldRule {
    /// A required text field.
    pub const fn required(id: &'static str, message: &'static str) -> Self {
        Self {
            id,
            required_message: message,
            kind: FieldKind::Required,
        }
    }

    /// A required email field.
    pub const fn email(id: &'static str) -> Self {
        Self {
            id,
            required_message: "Email is required",
            kind: FieldKind::Email,
        }
    }

    fn check(&self, value: &str) -> Result<(), &'static str> {
        if value.is_empty() {
            return Err(self.required_message);
        }
        match self.kind {
            FieldKind::Email if !is_valid_email(value) => Err("Please enter a valid email address"),
            _ => Ok(()),
        }
    }
}

/// Trimmed field values keyed by element id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues(HashMap<String, String>);

impl FormValues {
    /// Empty value set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a value, trimming surrounding whitespace.
    pub fn insert(&mut self, id: impl Into<String>, value: &str) {
        self.0.insert(id.into(), value.trim().to_string());
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, id: impl Into<String>, value: &str) -> Self {
        self.insert(id, value);
        self
    }

    /// Value for a field, empty if absent.
    pub fn get(&self, id: &str) -> &str {
        self.0.get(id).map(String::as_str).unwrap_or("")
    }
}

/// Outcome for a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldStatus {
    /// Passed its rule.
    Valid,
    /// Failed its rule.
    Invalid,
}

/// Result of validating a whole form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// Status of every rule, in schema order.
    pub fields: Vec<(&'static str, FieldStatus)>,
    /// Error messages, in schema order.
    pub errors: Vec<&'static str>,
}

impl ValidationReport {
    /// Whether every field passed.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// All error messages joined for display.
    pub fn message(&self) -> String {
        self.errors.join(". ")
    }
}

/// Ordered validation rules for one form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSchema {
    /// Rules in display order.
    pub rules: Vec<FieldRule>,
    /// Fields that are read and submitted but never validated.
    pub optional: Vec<&'static str>,
}

impl FormSchema {
    /// The contact form.
    pub fn contact() -> Self {
        Self {
            rules: vec![
                FieldRule::required("name", "Name is required"),
                FieldRule::email("email"),
                FieldRule::required("message", "Message is required"),
            ],
            optional: vec!["subject"],
        }
    }

    /// The appointment form.
    pub fn appointment() -> Self {
        Self {
            rules: vec![
                FieldRule::required("appointment-name", "Name is required"),
                FieldRule::email("appointment-email"),
                FieldRule::required("project-type", "Project type is required"),
                FieldRule::required("project-details", "Project details are required"),
            ],
            optional: vec!["appointment-phone", "appointment-date", "budget-range"],
        }
    }

    /// Every field id the form reads.
    pub fn field_ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules
            .iter()
            .map(|rule| rule.id)
            .chain(self.optional.iter().copied())
    }

    /// Check every rule. All rules run even after a failure.
    pub fn validate(&self, values: &FormValues) -> ValidationReport {
        let mut report = ValidationReport::default();
        for rule in &self.rules {
            match rule.check(values.get(rule.id)) {
                Ok(()) => report.fields.push((rule.id, FieldStatus::Valid)),
                Err(message) => {
                    report.fields.push((rule.id, FieldStatus::Invalid));
                    report.errors.push(message);
                }
            }
        }
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_contact_form_reports_three_errors() {
        let report = FormSchema::contact().validate(&FormValues::new());
        assert_eq!(report.errors.len(), 3);
        assert_eq!(
            report.message(),
            "Name is required. Email is required. Message is required"
        );
        assert!(report.fields.iter().all(|(_, s)| *s == FieldStatus::Invalid));
    }

    #[test]
    fn test_whitespace_only_counts_as_empty() {
        let values = FormValues::new()
            .with("name", "   ")
            .with("email", " a@b.co ")
            .with("message", "\tHello\n");
        let report = FormSchema::contact().validate(&values);
        assert_eq!(report.errors, vec!["Name is required"]);
        assert_eq!(values.get("email"), "a@b.co");
    }

    #[test]
    fn test_invalid_email_message() {
        let values = FormValues::new()
            .with("name", "Ada")
            .with("email", "ada@example")
            .with("message", "Hi");
        let report = FormSchema::contact().validate(&values);
        assert_eq!(report.message(), "Please enter a valid email address");
        assert_eq!(report.fields[1], ("email", FieldStatus::Invalid));
        assert_eq!(report.fields[0], ("name", FieldStatus::Valid));
    }

    #[test]
    fn test_appointment_optional_fields_not_validated() {
        let values = FormValues::new()
            .with("appointment-name", "Ada")
            .with("appointment-email", "ada@example.com")
            .with("project-type", "web")
            .with("project-details", "A portfolio");
        assert!(FormSchema::appointment().validate(&values).is_valid());
        assert_eq!(FormSchema::appointment().field_ids().count(), 7);
    }
}
