use serde::{Deserialize, Serialize};

use crate::domain::contact::{ContactField, SubmissionOutcome};

/// Messages specific to the contact form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContactMsg {
    /// Replace the value of one field
    UpdateField { field: ContactField, value: String },
    /// Validate and send the current record
    Submit,
    /// The network layer finished request `request_id`
    Completed {
        request_id: u64,
        outcome: SubmissionOutcome,
    },
}

#[cfg(test)]
mod tests {
    use color_eyre::Result;

    use super::*;
    use crate::domain::contact::ContactError;

    #[test]
    fn test_contact_msg_serialization() -> Result<()> {
        let msg = ContactMsg::Completed {
            request_id: 7,
            outcome: SubmissionOutcome::Rejected(ContactError::Server {
                status: Some(422),
                detail: "value is not a valid email address".into(),
            }),
        };
        let serialized = serde_json::to_string(&msg)?;
        let deserialized: ContactMsg = serde_json::from_str(&serialized)?;
        assert_eq!(msg, deserialized);

        Ok(())
    }
}
