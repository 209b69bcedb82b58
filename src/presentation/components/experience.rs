//! Work history

use ratatui::{
    prelude::*,
    widgets::{Paragraph, Wrap},
};

use crate::{core::state::AppState, presentation::components::styled};

#[derive(Debug, Clone, Default)]
pub struct ExperienceComponent;

impl ExperienceComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn lines<'a>(&self, state: &'a AppState) -> Vec<Line<'a>> {
        let title = styled(state, "title");
        let accent = styled(state, "accent");
        let muted = styled(state, "muted");

        let mut lines = vec![Line::styled("Professional Experience", title)];
        for job in &state.content.experience {
            lines.push(Line::default());
            lines.push(Line::styled(job.position.as_str(), accent.bold()));
            let mut meta = vec![job.company.as_str(), job.duration.as_str()];
            if !job.location.is_empty() {
                meta.push(job.location.as_str());
            }
            lines.push(Line::styled(meta.join(" · "), muted));
            for item in &job.responsibilities {
                lines.push(Line::raw(format!("  • {item}")));
            }
            if !job.technologies.is_empty() {
                lines.push(Line::styled(
                    format!("  [{}]", job.technologies.join("] [")),
                    accent,
                ));
            }
        }
        lines
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let paragraph = Paragraph::new(self.lines(state))
            .wrap(Wrap { trim: false })
            .scroll((state.ui.scroll, 0));
        frame.render_widget(paragraph, area);
    }
}
