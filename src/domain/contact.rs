//! Contact form domain model
//!
//! The four-field record a visitor fills in, the lifecycle of one submission
//! attempt and the error taxonomy reported back to the visitor.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator};

/// Reason recorded in [`SubmissionState::Failed`] for local validation failures
pub const VALIDATION_REASON: &str = "validation";

/// Fallback shown when neither the transport nor the server said anything useful
pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to send message. Please try again.";

/// Body of the success notification when the server does not provide one
pub const DEFAULT_SUCCESS_MESSAGE: &str = "Thank you for reaching out. I'll get back to you soon.";

/// Inline message rendered under the form after a validation failure
pub const VALIDATION_INLINE_MESSAGE: &str = "Please fill in all fields";

/// One input of the contact form, in tab order
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ContactField {
    #[default]
    #[strum(to_string = "Your Name")]
    Name,
    #[strum(to_string = "Your Email")]
    Email,
    #[strum(to_string = "Subject")]
    Subject,
    #[strum(to_string = "Message")]
    Message,
}

impl ContactField {
    /// Next field in tab order, wrapping around
    pub fn next(self) -> Self {
        match self {
            ContactField::Name => ContactField::Email,
            ContactField::Email => ContactField::Subject,
            ContactField::Subject => ContactField::Message,
            ContactField::Message => ContactField::Name,
        }
    }

    /// Previous field in tab order, wrapping around
    pub fn previous(self) -> Self {
        match self {
            ContactField::Name => ContactField::Message,
            ContactField::Email => ContactField::Name,
            ContactField::Subject => ContactField::Email,
            ContactField::Message => ContactField::Subject,
        }
    }

    /// Placeholder text shown while the field is empty
    pub fn placeholder(self) -> &'static str {
        match self {
            ContactField::Name => "John Doe",
            ContactField::Email => "john@example.com",
            ContactField::Subject => "Project Discussion",
            ContactField::Message => "Tell me about your project...",
        }
    }

    pub fn is_multiline(self) -> bool {
        self == ContactField::Message
    }
}

/// The record sent to `POST {backend_base}/api/contact`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactSubmission {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        subject: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            subject: subject.into(),
            message: message.into(),
        }
    }

    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
        };
        *slot = value.into();
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        ContactField::iter().all(|field| self.get(field).is_empty())
    }

    /// Fields that are empty or whitespace-only, in tab order
    pub fn missing_fields(&self) -> Vec<ContactField> {
        ContactField::iter()
            .filter(|field| self.get(*field).trim().is_empty())
            .collect()
    }

    /// Checks that every required field carries content
    pub fn validate(&self) -> Result<(), ContactError> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(ContactError::Validation { missing })
        }
    }
}

/// Why a submission attempt did not succeed
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize, Deserialize)]
pub enum ContactError {
    /// One or more required fields were empty at submit time
    #[error("missing required fields: {}", join_fields(.missing))]
    Validation { missing: Vec<ContactField> },

    /// The endpoint could not be reached
    #[error("network error: {0}")]
    Network(String),

    /// The endpoint answered with a failure
    #[error("server error{}: {detail}", status.map(|s| format!(" ({s})")).unwrap_or_default())]
    Server { status: Option<u16>, detail: String },
}

fn join_fields(fields: &[ContactField]) -> String {
    fields
        .iter()
        .map(|f| f.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

impl ContactError {
    /// Short reason recorded in the submission state
    pub fn reason(&self) -> &str {
        match self {
            ContactError::Validation { .. } => VALIDATION_REASON,
            ContactError::Network(_) => GENERIC_FAILURE_MESSAGE,
            ContactError::Server { detail, .. } => detail,
        }
    }

    /// Message displayed to the visitor under the form
    pub fn user_message(&self) -> &str {
        match self {
            ContactError::Validation { .. } => VALIDATION_INLINE_MESSAGE,
            ContactError::Network(_) => GENERIC_FAILURE_MESSAGE,
            ContactError::Server { detail, .. } => detail,
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, ContactError::Validation { .. })
    }
}

/// Lifecycle of the form's current submission attempt
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed(ContactError),
}

impl SubmissionState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmissionState::Submitting)
    }

    /// Reason of the failure, if the last attempt failed
    pub fn failure_reason(&self) -> Option<&str> {
        match self {
            SubmissionState::Failed(error) => Some(error.reason()),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ContactError> {
        match self {
            SubmissionState::Failed(error) => Some(error),
            _ => None,
        }
    }
}

/// Outcome of one request to the contact endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmissionOutcome {
    /// Accepted; carries the server-supplied message, if any
    Accepted { message: Option<String> },
    Rejected(ContactError),
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn filled() -> ContactSubmission {
        ContactSubmission::new("Jane", "jane@example.com", "Hello", "Let's build something")
    }

    #[test]
    fn test_new_submission_is_empty() {
        let submission = ContactSubmission::default();
        assert!(submission.is_empty());
        assert_eq!(submission.missing_fields().len(), 4);
    }

    #[test]
    fn test_set_and_get_roundtrip_per_field() {
        let mut submission = ContactSubmission::default();
        for field in ContactField::iter() {
            submission.set(field, format!("{field:?}"));
        }
        assert_eq!(submission.get(ContactField::Name), "Name");
        assert_eq!(submission.get(ContactField::Email), "Email");
        assert_eq!(submission.get(ContactField::Subject), "Subject");
        assert_eq!(submission.get(ContactField::Message), "Message");
    }

    #[test]
    fn test_validate_filled_submission() {
        assert_eq!(filled().validate(), Ok(()));
    }

    #[rstest]
    #[case(ContactField::Name, "")]
    #[case(ContactField::Email, "   ")]
    #[case(ContactField::Subject, "\t")]
    #[case(ContactField::Message, " \n ")]
    fn test_validate_rejects_blank_field(#[case] field: ContactField, #[case] value: &str) {
        let mut submission = filled();
        submission.set(field, value);

        let err = submission.validate().unwrap_err();
        assert_eq!(
            err,
            ContactError::Validation {
                missing: vec![field]
            }
        );
        assert_eq!(err.reason(), VALIDATION_REASON);
    }

    #[test]
    fn test_clear() {
        let mut submission = filled();
        submission.clear();
        assert_eq!(submission, ContactSubmission::default());
    }

    #[test]
    fn test_field_cycle() {
        let mut field = ContactField::Name;
        for _ in 0..4 {
            field = field.next();
        }
        assert_eq!(field, ContactField::Name);
        assert_eq!(ContactField::Name.previous(), ContactField::Message);
        assert_eq!(ContactField::Message.next(), ContactField::Name);
    }

    #[test]
    fn test_error_reasons() {
        let network = ContactError::Network("connection refused".into());
        assert_eq!(network.reason(), GENERIC_FAILURE_MESSAGE);

        let server = ContactError::Server {
            status: Some(500),
            detail: "Failed to send message. Please try again later.".into(),
        };
        assert_eq!(
            server.reason(),
            "Failed to send message. Please try again later."
        );
        assert_eq!(
            server.to_string(),
            "server error (500): Failed to send message. Please try again later."
        );

        let validation = ContactError::Validation {
            missing: vec![ContactField::Name, ContactField::Message],
        };
        assert_eq!(
            validation.to_string(),
            "missing required fields: Your Name, Message"
        );
        assert_eq!(validation.user_message(), VALIDATION_INLINE_MESSAGE);
    }

    #[test]
    fn test_submission_serializes_as_flat_object() -> serde_json::Result<()> {
        let json = serde_json::to_value(filled())?;
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Jane",
                "email": "jane@example.com",
                "subject": "Hello",
                "message": "Let's build something",
            })
        );
        Ok(())
    }

    #[test]
    fn test_state_helpers() {
        assert!(!SubmissionState::Idle.is_submitting());
        assert!(SubmissionState::Submitting.is_submitting());
        assert_eq!(SubmissionState::Succeeded.failure_reason(), None);
        let failed = SubmissionState::Failed(ContactError::Server {
            status: Some(400),
            detail: "Y".into(),
        });
        assert_eq!(failed.failure_reason(), Some("Y"));
    }
}
