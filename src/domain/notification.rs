use serde::{Deserialize, Serialize};
use strum::Display;

/// Visual weight of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    #[default]
    Default,
    /// Errors and rejected submissions
    Destructive,
}

/// A transient message for the visitor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub body: String,
    pub severity: Severity,
}

impl Notification {
    pub fn new(title: impl Into<String>, body: impl Into<String>, severity: Severity) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            severity,
        }
    }

    pub fn info(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self::new(title, body, Severity::Default)
    }

    pub fn destructive(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self::new(title, body, Severity::Destructive)
    }

    pub fn is_destructive(&self) -> bool {
        self.severity == Severity::Destructive
    }
}

/// Fire-and-forget sink for notifications
///
/// Implementations must not block; there is no acknowledgment.
pub trait NotificationSurface: Send + Sync {
    fn notify(&self, notification: Notification);
}
