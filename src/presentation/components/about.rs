//! Biography, working principles and education

use ratatui::{
    prelude::*,
    widgets::{Paragraph, Wrap},
};

use crate::{core::state::AppState, presentation::components::styled};

#[derive(Debug, Clone, Default)]
pub struct AboutComponent;

impl AboutComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn lines<'a>(&self, state: &'a AppState) -> Vec<Line<'a>> {
        let content = &state.content;
        let title = styled(state, "title");
        let accent = styled(state, "accent");
        let muted = styled(state, "muted");

        let mut lines = vec![
            Line::styled("About Me", title),
            Line::default(),
            Line::raw(content.profile.bio.as_str()),
        ];

        if !content.philosophy.is_empty() {
            lines.push(Line::default());
            lines.push(Line::styled("Philosophy", title));
            for principle in &content.philosophy {
                lines.push(Line::styled(format!("▸ {}", principle.principle), accent));
                lines.push(Line::styled(format!("  {}", principle.description), muted));
            }
        }

        let education = &content.education;
        if !education.institution.is_empty() {
            lines.push(Line::default());
            lines.push(Line::styled("Education", title));
            lines.push(Line::styled(education.degree.as_str(), accent));
            lines.push(Line::from(vec![
                Span::raw(education.institution.as_str()),
                Span::styled(format!(" · {}", education.year), muted),
            ]));
            if !education.courses.is_empty() {
                lines.push(Line::styled(
                    format!("Courses: {}", education.courses.join(", ")),
                    muted,
                ));
            }
        }
        lines
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let paragraph = Paragraph::new(self.lines(state))
            .wrap(Wrap { trim: true })
            .scroll((state.ui.scroll, 0));
        frame.render_widget(paragraph, area);
    }
}
