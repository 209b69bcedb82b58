use serde::{Deserialize, Serialize};

use crate::domain::{notification::Notification, ui::Section};

/// Messages specific to UiState
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum UiMsg {
    // Section navigation
    NextSection,
    PreviousSection,
    GoToSection(Section),
    ScrollUp,
    ScrollDown,

    // Navigation menu
    ToggleMenu,
    MenuUp,
    MenuDown,
    MenuSelect,

    // Skills
    NextSkillCategory,
    PreviousSkillCategory,

    // Projects
    NextProjectFilter,
    PreviousProjectFilter,
    SelectNextProject,
    SelectPreviousProject,
    OpenProject,
    CloseProject,

    // Contact form focus
    StartEditing,
    StopEditing,
    FocusNextField,
    FocusPreviousField,

    // Notifications
    ShowNotification(Notification),
    DismissNotification,
    Tick,
}

impl UiMsg {
    /// Determine if this is a frequent message during debugging
    pub fn is_frequent(&self) -> bool {
        matches!(self, UiMsg::Tick)
    }
}
