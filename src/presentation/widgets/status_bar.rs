use ratatui::{prelude::*, widgets::Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::domain::text::ellipsize;

/// Two lines at the bottom of the screen: owner and hints, then the status
/// message
#[derive(Debug, Clone, PartialEq)]
pub struct StatusBarWidget<'a> {
    owner: &'a str,
    backend: &'a str,
    hints: &'a str,
    message: Option<&'a str>,
    style: Style,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(owner: &'a str, backend: &'a str, hints: &'a str) -> Self {
        Self {
            owner,
            backend,
            hints,
            message: None,
            style: Style::default(),
        }
    }

    pub fn message(mut self, message: Option<&'a str>) -> Self {
        self.message = message;
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn info_line(&self, width: usize) -> String {
        let left = if self.backend.is_empty() {
            self.owner.to_string()
        } else {
            format!("{} · {}", self.owner, self.backend)
        };
        let left_width = left.width();
        let hints_width = self.hints.width();
        if left_width + hints_width + 1 > width {
            return ellipsize(&left, width);
        }
        let gap = width - left_width - hints_width;
        format!("{left}{}{}", " ".repeat(gap), self.hints)
    }
}

impl<'a> Widget for StatusBarWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let layout = Layout::new(
            Direction::Vertical,
            [
                Constraint::Min(0),
                Constraint::Length(1),
                Constraint::Length(1),
            ],
        )
        .split(area);

        let info = self.info_line(layout[1].width as usize);
        Paragraph::new(info)
            .style(self.style)
            .render(layout[1], buf);

        let message = self.message.unwrap_or_default();
        Paragraph::new(message).render(layout[2], buf);
    }
}
