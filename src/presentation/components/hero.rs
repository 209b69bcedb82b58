//! Landing section: who, what and how to reach out

use ratatui::{
    prelude::*,
    widgets::{Paragraph, Wrap},
};

use crate::{core::state::AppState, presentation::components::styled};

#[derive(Debug, Clone, Default)]
pub struct HeroComponent;

impl HeroComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn lines<'a>(&self, state: &'a AppState) -> Vec<Line<'a>> {
        let profile = &state.content.profile;
        let accent = styled(state, "accent");
        let muted = styled(state, "muted");

        let mut lines = vec![
            Line::default(),
            Line::styled(profile.name.as_str(), styled(state, "title")),
            Line::styled(profile.title.as_str(), accent),
            Line::default(),
            Line::raw(profile.tagline.as_str()),
            Line::default(),
        ];
        for (label, value) in [
            ("Location", &profile.location),
            ("Email", &profile.email),
            ("GitHub", &profile.github),
            ("LinkedIn", &profile.linkedin),
        ] {
            if !value.is_empty() {
                lines.push(Line::from(vec![
                    Span::styled(format!("{label:<10}"), muted),
                    Span::raw(value.as_str()),
                ]));
            }
        }
        lines.push(Line::default());
        lines.push(Line::styled(
            "Press Enter to get in touch · Tab to look around",
            styled(state, "highlight"),
        ));
        lines
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let paragraph = Paragraph::new(self.lines(state))
            .wrap(Wrap { trim: false })
            .scroll((state.ui.scroll, 0));
        frame.render_widget(paragraph, area);
    }
}
