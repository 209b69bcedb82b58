//! Quotes from people the owner worked with

use ratatui::{
    prelude::*,
    widgets::{Paragraph, Wrap},
};

use crate::{core::state::AppState, presentation::components::styled};

#[derive(Debug, Clone, Default)]
pub struct TestimonialsComponent;

impl TestimonialsComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn lines<'a>(&self, state: &'a AppState) -> Vec<Line<'a>> {
        let muted = styled(state, "muted");
        let mut lines = vec![Line::styled("What People Say", styled(state, "title"))];
        for testimonial in &state.content.testimonials {
            lines.push(Line::default());
            lines.push(Line::styled(
                format!("“{}”", testimonial.text),
                Style::default().italic(),
            ));
            let author = if testimonial.role.is_empty() {
                format!("  - {}, {}", testimonial.name, testimonial.company)
            } else {
                format!(
                    "  - {} ({}), {}",
                    testimonial.name, testimonial.role, testimonial.company
                )
            };
            lines.push(Line::styled(author, muted));
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
