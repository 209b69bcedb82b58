use serde::{Deserialize, Serialize};

pub mod contact;
pub mod system;
pub mod ui;

use contact::ContactMsg;
use system::SystemMsg;
use ui::UiMsg;

/// Domain messages representing application intent and business logic
/// These are processed by the update function and represent pure domain events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Msg {
    // System operations (delegated to SystemState)
    System(SystemMsg),

    // Navigation and presentation state (delegated to UiState)
    Ui(UiMsg),

    // Contact form (delegated to ContactForm)
    Contact(ContactMsg),
}

impl Msg {
    /// Helper to exclude frequent messages during debugging
    pub fn is_frequent(&self) -> bool {
        match self {
            Msg::System(msg) => msg.is_frequent(),
            Msg::Ui(msg) => msg.is_frequent(),
            Msg::Contact(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::contact::ContactField;

    #[test]
    fn test_msg_frequent_detection() {
        assert!(!Msg::System(SystemMsg::Quit).is_frequent());
        assert!(Msg::Ui(UiMsg::Tick).is_frequent());
        assert!(!Msg::Contact(ContactMsg::Submit).is_frequent());
    }

    #[test]
    fn test_msg_equality() {
        assert_eq!(Msg::System(SystemMsg::Quit), Msg::System(SystemMsg::Quit));
        assert_ne!(
            Msg::Ui(UiMsg::NextSection),
            Msg::Ui(UiMsg::PreviousSection)
        );
    }

    #[test]
    fn test_msg_serialization() {
        let msg = Msg::Contact(ContactMsg::UpdateField {
            field: ContactField::Email,
            value: "jane@example.com".to_string(),
        });
        let serialized = serde_json::to_string(&msg).unwrap();
        let deserialized: Msg = serde_json::from_str(&serialized).unwrap();
        assert_eq!(msg, deserialized);
    }
}
