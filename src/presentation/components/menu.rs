//! Section menu popup

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, List, ListState},
};

use crate::{
    core::state::AppState,
    domain::ui::Section,
    presentation::components::{centered_fixed, styled},
};

#[derive(Debug, Clone, Default)]
pub struct MenuComponent;

impl MenuComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let Some(highlighted) = state.ui.menu else {
            return;
        };
        let sections = Section::all();
        let popup = centered_fixed(area, 24, sections.len() as u16 + 2);

        let items = sections
            .iter()
            .enumerate()
            .map(|(i, section)| format!("{}  {section}", i + 1));
        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Menu ")
                    .border_style(styled(state, "accent")),
            )
            .highlight_style(styled(state, "highlight"))
            .highlight_symbol("› ");
        let mut list_state = ListState::default().with_selected(Some(highlighted));

        frame.render_widget(Clear, popup);
        frame.render_stateful_widget(list, popup, &mut list_state);
    }
}
