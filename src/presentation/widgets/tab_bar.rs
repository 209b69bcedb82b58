use ratatui::prelude::*;
use ratatui::widgets::{Tabs, Widget};

use crate::domain::ui::Section;

/// Section navigation bar; each title carries its jump key
#[derive(Clone, Debug)]
pub struct TabBarWidget {
    selected: Section,
    style: Style,
    highlight_style: Style,
}

impl TabBarWidget {
    pub fn new(selected: Section) -> Self {
        Self {
            selected,
            style: Style::default(),
            highlight_style: Style::default().reversed(),
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn highlight_style(mut self, style: Style) -> Self {
        self.highlight_style = style;
        self
    }

    pub fn titles(&self) -> Vec<String> {
        Section::all()
            .iter()
            .enumerate()
            .map(|(i, section)| format!("{} {section}", i + 1))
            .collect()
    }
}

impl Widget for TabBarWidget {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let tabs = Tabs::new(self.titles())
            .select(self.selected.index())
            .style(self.style)
            .highlight_style(self.highlight_style);

        tabs.render(area, buf);
    }
}
