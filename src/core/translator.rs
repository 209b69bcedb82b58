use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::presentation::config::keybindings::Action;
use crate::{
    core::{
        msg::{contact::ContactMsg, system::SystemMsg, ui::UiMsg, Msg},
        raw_msg::RawMsg,
        state::AppState,
    },
    domain::{contact::ContactField, ui::Section},
};

/// Translates raw external events into domain messages
/// This function is pure and contains no side effects
pub fn translate_raw_to_domain(raw: RawMsg, state: &AppState) -> Vec<Msg> {
    match raw {
        // System events - direct mapping
        RawMsg::Quit => vec![Msg::System(SystemMsg::Quit)],
        RawMsg::Suspend => vec![Msg::System(SystemMsg::Suspend)],
        RawMsg::Resume => vec![Msg::System(SystemMsg::Resume)],
        RawMsg::Resize(width, height) => vec![Msg::System(SystemMsg::Resize(width, height))],

        // User input - translate based on context and key bindings
        RawMsg::Key(key) => translate_key_event(key, state),
        RawMsg::Paste(text) => translate_paste(text, state),

        // Backend and notification surface
        RawMsg::ContactCompleted {
            request_id,
            outcome,
        } => vec![Msg::Contact(ContactMsg::Completed {
            request_id,
            outcome,
        })],
        RawMsg::Notification(notification) => vec![Msg::Ui(UiMsg::ShowNotification(notification))],

        // System events
        RawMsg::Error(error) => vec![Msg::System(SystemMsg::ShowError(error))],

        // Ticks age toasts
        RawMsg::Tick => vec![Msg::Ui(UiMsg::Tick)],
    }
}

/// Translates keyboard input to domain events based on current application state
fn translate_key_event(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    // Handle global key bindings first
    match key {
        KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => return vec![Msg::System(SystemMsg::Quit)],

        KeyEvent {
            code: KeyCode::Char('z'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => return vec![Msg::System(SystemMsg::Suspend)],

        _ => {}
    }

    // Context-sensitive key bindings
    if state.is_editing() {
        translate_editing_mode_keys(key, state)
    } else {
        translate_normal_mode_keys(key, state)
    }
}

/// Key bindings while the contact form has focus
///
/// These are fixed so that every printable character reaches the form.
fn translate_editing_mode_keys(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    let field = state.ui.contact_focus;
    let current = state.contact.value(field);

    match (key.code, key.modifiers) {
        (KeyCode::Esc, _) => vec![Msg::Ui(UiMsg::StopEditing)],
        (KeyCode::Tab, _) => vec![Msg::Ui(UiMsg::FocusNextField)],
        (KeyCode::BackTab, _) => vec![Msg::Ui(UiMsg::FocusPreviousField)],
        (KeyCode::Char('s'), KeyModifiers::CONTROL) => vec![Msg::Contact(ContactMsg::Submit)],
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => update_field(field, String::new()),

        (KeyCode::Enter, _) if field.is_multiline() => update_field(field, format!("{current}\n")),
        (KeyCode::Enter, _) => vec![Msg::Ui(UiMsg::FocusNextField)],

        (KeyCode::Backspace, _) => {
            let mut value = current.to_string();
            if value.pop().is_none() {
                return vec![];
            }
            update_field(field, value)
        }

        (KeyCode::Char(c), modifiers)
            if !modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            update_field(field, format!("{current}{c}"))
        }

        _ => vec![],
    }
}

fn translate_paste(text: String, state: &AppState) -> Vec<Msg> {
    if !state.is_editing() || text.is_empty() {
        return vec![];
    }

    let field = state.ui.contact_focus;
    let text = if field.is_multiline() {
        text.replace("\r\n", "\n")
    } else {
        text.replace(['\r', '\n'], " ")
    };
    update_field(field, format!("{}{text}", state.contact.value(field)))
}

fn update_field(field: ContactField, value: String) -> Vec<Msg> {
    vec![Msg::Contact(ContactMsg::UpdateField { field, value })]
}

/// Key bindings when in normal navigation mode
fn translate_normal_mode_keys(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    // Get keybindings from config state (flat mapping)
    if let Some(action) = state.config.config.keybindings.action_for(key) {
        return translate_action_to_msg(action, state);
    }

    vec![] // No matching keybinding found
}

fn translate_action_to_msg(action: &Action, state: &AppState) -> Vec<Msg> {
    if state.ui.is_menu_open() {
        match action {
            Action::Up => return vec![Msg::Ui(UiMsg::MenuUp)],
            Action::Down => return vec![Msg::Ui(UiMsg::MenuDown)],
            Action::Select => return vec![Msg::Ui(UiMsg::MenuSelect)],
            Action::Back | Action::ToggleMenu => return vec![Msg::Ui(UiMsg::ToggleMenu)],
            _ => {}
        }
    }

    if state.ui.project_modal && matches!(action, Action::Back | Action::Select) {
        return vec![Msg::Ui(UiMsg::CloseProject)];
    }

    let section = state.ui.section;
    match action {
        Action::Quit => vec![Msg::System(SystemMsg::Quit)],
        Action::Suspend => vec![Msg::System(SystemMsg::Suspend)],
        Action::NextSection => vec![Msg::Ui(UiMsg::NextSection)],
        Action::PreviousSection => vec![Msg::Ui(UiMsg::PreviousSection)],
        Action::JumpTo(target) => vec![Msg::Ui(UiMsg::GoToSection(*target))],
        Action::ToggleMenu => vec![Msg::Ui(UiMsg::ToggleMenu)],

        Action::Up if section == Section::Projects => {
            vec![Msg::Ui(UiMsg::SelectPreviousProject)]
        }
        Action::Up => vec![Msg::Ui(UiMsg::ScrollUp)],
        Action::Down if section == Section::Projects => vec![Msg::Ui(UiMsg::SelectNextProject)],
        Action::Down => vec![Msg::Ui(UiMsg::ScrollDown)],

        Action::Left => match section {
            Section::Skills => vec![Msg::Ui(UiMsg::PreviousSkillCategory)],
            Section::Projects => vec![Msg::Ui(UiMsg::PreviousProjectFilter)],
            _ => vec![],
        },
        Action::Right => match section {
            Section::Skills => vec![Msg::Ui(UiMsg::NextSkillCategory)],
            Section::Projects => vec![Msg::Ui(UiMsg::NextProjectFilter)],
            _ => vec![],
        },
        Action::CycleFilter if section == Section::Projects => {
            vec![Msg::Ui(UiMsg::NextProjectFilter)]
        }
        Action::CycleFilter => vec![],

        Action::Select => match section {
            // The hero's call to action leads to the contact section
            Section::Home => vec![Msg::Ui(UiMsg::GoToSection(Section::Contact))],
            Section::Projects => vec![Msg::Ui(UiMsg::OpenProject)],
            Section::Contact => vec![Msg::Ui(UiMsg::StartEditing)],
            _ => vec![],
        },
        Action::Edit => vec![Msg::Ui(UiMsg::StartEditing)],
        Action::Submit if section == Section::Contact => vec![Msg::Contact(ContactMsg::Submit)],
        Action::Submit => vec![],

        Action::Back | Action::Dismiss if !state.ui.toasts.is_empty() => {
            vec![Msg::Ui(UiMsg::DismissNotification)]
        }
        Action::Back | Action::Dismiss => vec![],
    }
}
