use serde::{Deserialize, Serialize};

/// Process-level messages handled by `SystemState`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SystemMsg {
    Quit,
    /// Ctrl+Z: hand the terminal back to the shell
    Suspend,
    Resume,
    Resize(u16, u16),

    /// Status bar text, e.g. "Sending..." while a submission is in flight
    UpdateStatusMessage(String),
    ClearStatusMessage,
    /// A runtime failure worth showing in the status bar
    ShowError(String),
}

impl SystemMsg {
    pub fn is_frequent(&self) -> bool {
        matches!(self, SystemMsg::Resize(..))
    }
}

#[cfg(test)]
mod tests {
    use color_eyre::eyre::Result;

    use super::*;

    #[test]
    fn test_only_resize_is_frequent() {
        assert!(SystemMsg::Resize(120, 40).is_frequent());
        assert!(!SystemMsg::Suspend.is_frequent());
        assert!(!SystemMsg::UpdateStatusMessage("Sending...".into()).is_frequent());
    }

    #[test]
    fn test_status_message_survives_serde() -> Result<()> {
        let msg = SystemMsg::ShowError("contact service stopped".into());
        let json = serde_json::to_string(&msg)?;
        assert_eq!(json, r#"{"ShowError":"contact service stopped"}"#);
        assert_eq!(serde_json::from_str::<SystemMsg>(&json)?, msg);
        Ok(())
    }
}
