//! Component collection
//!
//! Components are stateless renderers that receive state as parameters.
//! [`Components::render`] lays out the whole screen: navigation bar, the
//! active section, the status bar, then overlays (menu, toasts).

use ratatui::prelude::*;

use crate::{
    core::state::AppState,
    domain::{text::wrap_text, ui::Section},
    presentation::widgets::TabBarWidget,
};

pub mod about;
pub mod contact;
pub mod experience;
pub mod hero;
pub mod menu;
pub mod notifications;
pub mod projects;
pub mod skills;
pub mod status_bar;
pub mod testimonials;

pub use about::AboutComponent;
pub use contact::ContactComponent;
pub use experience::ExperienceComponent;
pub use hero::HeroComponent;
pub use menu::MenuComponent;
pub use notifications::NotificationsComponent;
pub use projects::ProjectsComponent;
pub use skills::SkillsComponent;
pub use status_bar::StatusBarComponent;
pub use testimonials::TestimonialsComponent;

/// Collection of all components
#[derive(Debug, Clone, Default)]
pub struct Components {
    pub hero: HeroComponent,
    pub about: AboutComponent,
    pub skills: SkillsComponent,
    pub experience: ExperienceComponent,
    pub projects: ProjectsComponent,
    pub testimonials: TestimonialsComponent,
    pub contact: ContactComponent,
    pub menu: MenuComponent,
    pub notifications: NotificationsComponent,
    pub status_bar: StatusBarComponent,
}

impl Components {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render all components
    pub fn render(&mut self, frame: &mut Frame, state: &AppState) {
        let area = frame.area();

        let [nav_area, _, body_area, status_area] = Layout::vertical([
            Constraint::Length(1), // Section tabs
            Constraint::Length(1),
            Constraint::Min(0),    // Active section
            Constraint::Length(2), // Status bar
        ])
        .areas(area);

        let tabs = TabBarWidget::new(state.ui.section)
            .style(styled(state, "tab_inactive"))
            .highlight_style(styled(state, "tab_active"));
        frame.render_widget(tabs, nav_area);

        let body_area = body_area.inner(Margin::new(1, 0));
        match state.ui.section {
            Section::Home => self.hero.view(state, frame, body_area),
            Section::About => self.about.view(state, frame, body_area),
            Section::Skills => self.skills.view(state, frame, body_area),
            Section::Experience => self.experience.view(state, frame, body_area),
            Section::Projects => self.projects.view(state, frame, body_area),
            Section::Testimonials => self.testimonials.view(state, frame, body_area),
            Section::Contact => self.contact.view(state, frame, body_area),
        }

        self.status_bar.view(state, frame, status_area);

        self.menu.view(state, frame, area);
        self.notifications.view(state, frame, area);
    }
}

/// Largest useful scroll offset for the active section
///
/// Measures the section text against the body area [`Components::render`]
/// leaves in the last known terminal size. Before the first resize the
/// unwrapped line count is the bound.
pub fn max_scroll(state: &AppState) -> u16 {
    let lines = match state.ui.section {
        Section::Home => HeroComponent::new().lines(state),
        Section::About => AboutComponent::new().lines(state),
        Section::Experience => ExperienceComponent::new().lines(state),
        Section::Testimonials => TestimonialsComponent::new().lines(state),
        Section::Skills => {
            let skills = state.content.skills.by_category(state.ui.skill_category);
            return to_u16(skills.len().saturating_sub(1));
        }
        Section::Projects | Section::Contact => return 0,
    };

    let Some((width, height)) = state.system.terminal_size else {
        return to_u16(lines.len().saturating_sub(1));
    };
    // Tabs, spacer and status bar take four rows; the body has a one-column margin
    let body_width = usize::from(width.saturating_sub(2)).max(1);
    let body_height = usize::from(height.saturating_sub(4));

    let rows: usize = lines
        .iter()
        .map(|line| {
            let text: String = line.spans.iter().map(|span| span.content.as_ref()).collect();
            wrap_text(&text, body_width).lines().count().max(1)
        })
        .sum();
    to_u16(rows.saturating_sub(body_height))
}

fn to_u16(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

/// Configured style for `key`
pub(crate) fn styled(state: &AppState, key: &str) -> Style {
    state.config.config.styles.get_or_default(key)
}

/// Rect of `percent_x` x `percent_y` centered in `area`
pub(crate) fn centered(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let [_, middle, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(area);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(middle);
    center
}

/// Rect of at most `width` x `height` centered in `area`
pub(crate) fn centered_fixed(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
