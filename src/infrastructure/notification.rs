use tokio::sync::mpsc;

use crate::{
    core::raw_msg::RawMsg,
    domain::notification::{Notification, NotificationSurface},
};

/// Terminal notification surface
///
/// Notifications are posted back into the runtime as raw messages and end up
/// as toasts in the UI state.
#[derive(Debug, Clone)]
pub struct ToastSurface {
    raw_tx: mpsc::UnboundedSender<RawMsg>,
}

impl ToastSurface {
    pub fn new(raw_tx: mpsc::UnboundedSender<RawMsg>) -> Self {
        Self { raw_tx }
    }
}

impl NotificationSurface for ToastSurface {
    fn notify(&self, notification: Notification) {
        log::info!(
            "notification [{}] {}: {}",
            notification.severity,
            notification.title,
            notification.body
        );
        if self.raw_tx.send(RawMsg::Notification(notification)).is_err() {
            log::warn!("ToastSurface: runtime is gone, notification dropped");
        }
    }
}
