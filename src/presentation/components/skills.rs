//! Skill categories as tabs, each skill as a level gauge

use ratatui::{
    prelude::*,
    widgets::{LineGauge, Paragraph, Tabs},
};
use strum::IntoEnumIterator;

use crate::{core::state::AppState, domain::content::SkillCategory, presentation::components::styled};

const NAME_WIDTH: u16 = 22;

#[derive(Debug, Clone, Default)]
pub struct SkillsComponent;

impl SkillsComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let [title_area, tabs_area, _, list_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(area);

        frame.render_widget(
            Paragraph::new(Line::styled("Skills & Expertise", styled(state, "title"))),
            title_area,
        );

        let titles: Vec<String> = SkillCategory::iter().map(|c| c.to_string()).collect();
        let tabs = Tabs::new(titles)
            .select(state.ui.skill_category.index())
            .style(styled(state, "tab_inactive"))
            .highlight_style(styled(state, "tab_active"));
        frame.render_widget(tabs, tabs_area);

        let skills = state.content.skills.by_category(state.ui.skill_category);
        if skills.is_empty() {
            frame.render_widget(
                Paragraph::new(Line::styled("Nothing listed yet", styled(state, "muted"))),
                list_area,
            );
            return;
        }

        let skip = (state.ui.scroll as usize).min(skills.len().saturating_sub(1));
        let rows = skills.iter().skip(skip).take(list_area.height as usize);
        for (i, skill) in rows.enumerate() {
            let row = Rect {
                y: list_area.y + i as u16,
                height: 1,
                ..list_area
            };
            let [name_area, gauge_area] =
                Layout::horizontal([Constraint::Length(NAME_WIDTH), Constraint::Min(0)])
                    .areas(row);
            frame.render_widget(Paragraph::new(skill.name.as_str()), name_area);
            let gauge = LineGauge::default()
                .filled_style(styled(state, "gauge"))
                .unfilled_style(styled(state, "muted"))
                .label(format!("{:>3}%", skill.level.min(100)))
                .ratio(skill.ratio());
            frame.render_widget(gauge, gauge_area);
        }
    }
}
