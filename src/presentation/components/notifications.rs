//! Toast stack in the top-right corner

use ratatui::prelude::*;

use crate::{
    core::state::AppState,
    domain::notification::Severity,
    presentation::{components::styled, widgets::ToastWidget},
};

const TOAST_WIDTH: u16 = 42;

#[derive(Debug, Clone, Default)]
pub struct NotificationsComponent;

impl NotificationsComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let width = TOAST_WIDTH.min(area.width);
        let x = area.right().saturating_sub(width);
        let mut y = area.y;

        // Newest first
        for toast in state.ui.toasts.iter().rev() {
            let style = match toast.notification.severity {
                Severity::Default => styled(state, "toast_default"),
                Severity::Destructive => styled(state, "toast_destructive"),
            };
            let widget = ToastWidget::new(&toast.notification).style(style);
            let height = widget.height(width);
            if y + height > area.bottom() {
                break;
            }
            frame.render_widget(widget, Rect::new(x, y, width, height));
            y += height;
        }
    }
}
