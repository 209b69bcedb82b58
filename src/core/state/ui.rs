use crate::{
    core::{cmd::Cmd, msg::ui::UiMsg},
    domain::{
        contact::ContactField,
        content::{Content, Project, ProjectFilter, SkillCategory},
        notification::Notification,
        ui::Section,
    },
};

/// Upper bound on toasts kept at once; older ones are dropped first
pub const MAX_TOASTS: usize = 5;

/// Toast lifetime used when no configuration is available (5 s at 4 ticks/s)
pub const DEFAULT_TOAST_TICKS: u32 = 20;

/// High-level UI mode for keybindings and view switching
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    #[default]
    Browsing,
    /// Keys go to the contact form
    Editing,
}

/// A notification currently on screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub notification: Notification,
    pub remaining_ticks: u32,
}

/// UI-related state
#[derive(Debug, Clone, PartialEq)]
pub struct UiState {
    pub section: Section,
    pub mode: UiMode,
    /// Highlighted entry of the navigation menu, when it is open
    pub menu: Option<usize>,
    /// Vertical scroll offset of the current section
    pub scroll: u16,
    pub skill_category: SkillCategory,
    pub project_filter: ProjectFilter,
    /// Index into the filtered project list
    pub selected_project: usize,
    pub project_modal: bool,
    pub contact_focus: ContactField,
    pub toasts: Vec<Toast>,
    pub toast_ticks: u32,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            section: Section::default(),
            mode: UiMode::default(),
            menu: None,
            scroll: 0,
            skill_category: SkillCategory::default(),
            project_filter: ProjectFilter::default(),
            selected_project: 0,
            project_modal: false,
            contact_focus: ContactField::default(),
            toasts: Vec::new(),
            toast_ticks: DEFAULT_TOAST_TICKS,
        }
    }
}

impl UiState {
    pub fn with_toast_ticks(toast_ticks: u32) -> Self {
        Self {
            toast_ticks: toast_ticks.max(1),
            ..Default::default()
        }
    }

    pub fn is_editing(&self) -> bool {
        self.mode == UiMode::Editing
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu.is_some()
    }

    /// The project under the cursor, honoring the active filter
    pub fn selected_project<'a>(&self, content: &'a Content) -> Option<&'a Project> {
        content
            .filtered_projects(&self.project_filter)
            .get(self.selected_project)
            .copied()
    }

    /// UI-specific update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: UiMsg, content: &Content) -> Vec<Cmd> {
        match msg {
            UiMsg::NextSection => self.go_to(self.section.next()),
            UiMsg::PreviousSection => self.go_to(self.section.previous()),
            UiMsg::GoToSection(section) => self.go_to(section),
            UiMsg::ScrollUp => {
                self.scroll = self.scroll.saturating_sub(1);
            }
            UiMsg::ScrollDown => {
                self.scroll = self.scroll.saturating_add(1);
            }

            UiMsg::ToggleMenu => {
                self.menu = match self.menu {
                    Some(_) => None,
                    None => Some(self.section.index()),
                };
            }
            UiMsg::MenuUp => {
                if let Some(index) = self.menu {
                    self.menu = Some(index.saturating_sub(1));
                }
            }
            UiMsg::MenuDown => {
                if let Some(index) = self.menu {
                    let last = Section::all().len() - 1;
                    self.menu = Some((index + 1).min(last));
                }
            }
            UiMsg::MenuSelect => {
                if let Some(section) = self.menu.and_then(Section::from_index) {
                    self.go_to(section);
                }
                self.menu = None;
            }

            UiMsg::NextSkillCategory => {
                self.skill_category = self.skill_category.next();
            }
            UiMsg::PreviousSkillCategory => {
                self.skill_category = self.skill_category.previous();
            }

            UiMsg::NextProjectFilter => self.cycle_filter(content, true),
            UiMsg::PreviousProjectFilter => self.cycle_filter(content, false),
            UiMsg::SelectNextProject => {
                let count = content.filtered_projects(&self.project_filter).len();
                if self.selected_project + 1 < count {
                    self.selected_project += 1;
                }
            }
            UiMsg::SelectPreviousProject => {
                self.selected_project = self.selected_project.saturating_sub(1);
            }
            UiMsg::OpenProject => {
                self.project_modal = self.selected_project(content).is_some();
            }
            UiMsg::CloseProject => {
                self.project_modal = false;
            }

            UiMsg::StartEditing => {
                self.go_to(Section::Contact);
                self.mode = UiMode::Editing;
            }
            UiMsg::StopEditing => {
                self.mode = UiMode::Browsing;
            }
            UiMsg::FocusNextField => {
                self.contact_focus = self.contact_focus.next();
            }
            UiMsg::FocusPreviousField => {
                self.contact_focus = self.contact_focus.previous();
            }

            UiMsg::ShowNotification(notification) => {
                self.toasts.push(Toast {
                    notification,
                    remaining_ticks: self.toast_ticks,
                });
                if self.toasts.len() > MAX_TOASTS {
                    let overflow = self.toasts.len() - MAX_TOASTS;
                    self.toasts.drain(..overflow);
                }
            }
            UiMsg::DismissNotification => {
                self.toasts.pop();
            }
            UiMsg::Tick => {
                for toast in &mut self.toasts {
                    toast.remaining_ticks = toast.remaining_ticks.saturating_sub(1);
                }
                self.toasts.retain(|toast| toast.remaining_ticks > 0);
            }
        }
        vec![]
    }

    fn go_to(&mut self, section: Section) {
        if self.section != section {
            self.section = section;
            self.scroll = 0;
            self.project_modal = false;
            if section != Section::Contact {
                self.mode = UiMode::Browsing;
            }
        }
    }

    fn cycle_filter(&mut self, content: &Content, forward: bool) {
        let filters = content.project_filters();
        let current = filters
            .iter()
            .position(|f| *f == self.project_filter)
            .unwrap_or_default();
        let len = filters.len();
        let next = if forward {
            (current + 1) % len
        } else {
            (current + len - 1) % len
        };
        self.project_filter = filters[next].clone();
        self.selected_project = 0;
        self.project_modal = false;
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::domain::content::Project;

    fn project(id: u32, category: &str) -> Project {
        Project {
            id,
            title: format!("P{id}"),
            description: String::new(),
            long_description: String::new(),
            technologies: vec![],
            features: vec![],
            category: category.into(),
        }
    }

    fn content() -> Content {
        Content {
            projects: vec![
                project(1, "Backend"),
                project(2, "Full-Stack"),
                project(3, "Full-Stack"),
            ],
            ..Default::default()
        }
    }

    #[test]
    fn test_section_navigation_resets_scroll() {
        let mut ui = UiState::default();
        ui.scroll = 5;
        ui.update(UiMsg::NextSection, &content());
        assert_eq!(ui.section, Section::About);
        assert_eq!(ui.scroll, 0);

        ui.update(UiMsg::GoToSection(Section::Projects), &content());
        assert_eq!(ui.section, Section::Projects);
    }

    #[test]
    fn test_menu_select_jumps_and_closes() {
        let mut ui = UiState::default();
        ui.update(UiMsg::ToggleMenu, &content());
        assert_eq!(ui.menu, Some(0));

        ui.update(UiMsg::MenuDown, &content());
        ui.update(UiMsg::MenuDown, &content());
        ui.update(UiMsg::MenuSelect, &content());

        assert_eq!(ui.section, Section::Skills);
        assert!(!ui.is_menu_open());
    }

    #[test]
    fn test_menu_cursor_is_bounded() {
        let mut ui = UiState::default();
        ui.update(UiMsg::ToggleMenu, &content());
        ui.update(UiMsg::MenuUp, &content());
        assert_eq!(ui.menu, Some(0));
        for _ in 0..20 {
            ui.update(UiMsg::MenuDown, &content());
        }
        assert_eq!(ui.menu, Some(Section::all().len() - 1));
    }

    #[test]
    fn test_project_filter_cycle_resets_selection() {
        let content = content();
        let mut ui = UiState::default();
        ui.selected_project = 2;

        ui.update(UiMsg::NextProjectFilter, &content);
        assert_eq!(ui.project_filter, ProjectFilter::Category("Backend".into()));
        assert_eq!(ui.selected_project, 0);

        ui.update(UiMsg::NextProjectFilter, &content);
        ui.update(UiMsg::NextProjectFilter, &content);
        assert_eq!(ui.project_filter, ProjectFilter::All);

        ui.update(UiMsg::PreviousProjectFilter, &content);
        assert_eq!(
            ui.project_filter,
            ProjectFilter::Category("Full-Stack".into())
        );
    }

    #[test]
    fn test_project_selection_is_bounded_by_filter() {
        let content = content();
        let mut ui = UiState {
            project_filter: ProjectFilter::Category("Full-Stack".into()),
            ..Default::default()
        };
        for _ in 0..5 {
            ui.update(UiMsg::SelectNextProject, &content);
        }
        assert_eq!(ui.selected_project, 1);
        assert_eq!(ui.selected_project(&content).map(|p| p.id), Some(3));
    }

    #[test]
    fn test_open_and_close_project() {
        let content = content();
        let mut ui = UiState::default();
        ui.update(UiMsg::OpenProject, &content);
        assert!(ui.project_modal);
        ui.update(UiMsg::CloseProject, &content);
        assert!(!ui.project_modal);

        let empty = Content::default();
        ui.update(UiMsg::OpenProject, &empty);
        assert!(!ui.project_modal);
    }

    #[test]
    fn test_start_editing_moves_to_contact() {
        let mut ui = UiState::default();
        ui.update(UiMsg::StartEditing, &content());
        assert_eq!(ui.section, Section::Contact);
        assert!(ui.is_editing());

        ui.update(UiMsg::FocusNextField, &content());
        assert_eq!(ui.contact_focus, ContactField::Email);

        ui.update(UiMsg::NextSection, &content());
        assert!(!ui.is_editing());
    }

    #[test]
    fn test_toasts_expire_after_configured_ticks() {
        let mut ui = UiState::with_toast_ticks(2);
        ui.update(
            UiMsg::ShowNotification(Notification::info("Hi", "there")),
            &content(),
        );
        assert_eq!(ui.toasts.len(), 1);

        ui.update(UiMsg::Tick, &content());
        assert_eq!(ui.toasts.len(), 1);
        ui.update(UiMsg::Tick, &content());
        assert!(ui.toasts.is_empty());
    }

    #[test]
    fn test_toasts_are_capped() {
        let mut ui = UiState::default();
        for i in 0..(MAX_TOASTS + 2) {
            ui.update(
                UiMsg::ShowNotification(Notification::info("n", i.to_string())),
                &content(),
            );
        }
        assert_eq!(ui.toasts.len(), MAX_TOASTS);
        assert_eq!(ui.toasts[0].notification.body, "2");
    }
}
