//! Status bar component
//!
//! Owner, backend and key hints on the first line; the status message on the
//! second.

use ratatui::prelude::*;

use crate::{
    core::state::AppState,
    presentation::{components::styled, widgets::StatusBarWidget},
};

const BROWSING_HINTS: &str = "Tab next · 1-7 jump · m menu · q quit";
const EDITING_HINTS: &str = "Tab field · Ctrl+S send · Esc done";

#[derive(Debug, Clone, Default)]
pub struct StatusBarComponent;

impl StatusBarComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn hints(&self, state: &AppState) -> &'static str {
        if state.is_editing() {
            EDITING_HINTS
        } else {
            BROWSING_HINTS
        }
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let widget = StatusBarWidget::new(
            &state.content.profile.name,
            &state.config.config.backend_url,
            self.hints(state),
        )
        .message(state.system.status_message.as_deref())
        .style(styled(state, "status_bar"));
        frame.render_widget(widget, area);
    }
}
