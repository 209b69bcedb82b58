use serde::{Deserialize, Serialize};

use crate::domain::{contact::ContactSubmission, notification::Notification};

/// UI (TUI) specific sub-commands executed by the host/runtime
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TuiCommand {
    Resize { width: u16, height: u16 },
}

/// Elm-like command definitions
/// Represents side effects (network communication, notifications, logging)
/// Cmd captures application intent (what to do); the executor and the
/// services decide how it is carried out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cmd {
    /// POST the record to the contact endpoint; completion comes back as
    /// `ContactMsg::Completed` with the same `request_id`
    SubmitContact {
        request_id: u64,
        submission: ContactSubmission,
    },

    /// Show a transient message on the notification surface
    Notify(Notification),

    // UI-related commands
    Tui(TuiCommand),

    // Logging related
    LogError {
        message: String,
    },
    LogInfo {
        message: String,
    },
}

impl Cmd {
    /// Human-readable command name for execution logs
    pub fn name(&self) -> String {
        match self {
            Cmd::SubmitContact { request_id, .. } => format!("SubmitContact(#{request_id})"),
            Cmd::Notify(..) => "Notify".to_string(),
            Cmd::LogError { .. } => "LogError".to_string(),
            Cmd::LogInfo { .. } => "LogInfo".to_string(),
            Cmd::Tui(TuiCommand::Resize { .. }) => "Tui(Resize)".to_string(),
        }
    }
}
