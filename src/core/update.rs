use crate::{
    core::cmd::Cmd,
    core::msg::{contact::ContactMsg, system::SystemMsg, ui::UiMsg, Msg},
    core::state::AppState,
    domain::contact::{ContactField, SubmissionState},
    presentation::components::max_scroll,
};

pub const SENDING_STATUS: &str = "Sending...";

/// Elm-like update function
/// Returns new state and list of commands from current state and message
pub fn update(msg: Msg, mut state: AppState) -> (AppState, Vec<Cmd>) {
    match msg {
        // System messages (delegated to SystemState)
        Msg::System(system_msg) => {
            let commands = state.system.update(system_msg);
            (state, commands)
        }

        // UI messages (delegated to UiState)
        Msg::Ui(ui_msg) => {
            let is_scroll_down = ui_msg == UiMsg::ScrollDown;
            let content = state.content.clone();
            let commands = state.ui.update(ui_msg, &content);
            if is_scroll_down {
                state.ui.scroll = state.ui.scroll.min(max_scroll(&state));
            }
            (state, commands)
        }

        // Contact messages (delegated to ContactForm)
        Msg::Contact(contact_msg) => {
            let is_completion = matches!(contact_msg, ContactMsg::Completed { .. });
            let commands = state.contact.update(contact_msg);

            if state.contact.is_disabled() {
                state
                    .system
                    .update(SystemMsg::UpdateStatusMessage(SENDING_STATUS.to_string()));
            } else if is_completion {
                state.system.update(SystemMsg::ClearStatusMessage);
                if state.contact.status() == &SubmissionState::Succeeded {
                    state.ui.contact_focus = ContactField::default();
                }
            }

            (state, commands)
        }
    }
}
