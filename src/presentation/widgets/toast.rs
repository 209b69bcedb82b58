use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use crate::domain::{
    notification::Notification,
    text::{truncate_text, wrap_text},
};

/// Body lines shown before a toast is cut off
const MAX_BODY_LINES: usize = 4;

/// A bordered notification box
#[derive(Clone, Debug)]
pub struct ToastWidget<'a> {
    notification: &'a Notification,
    style: Style,
}

impl<'a> ToastWidget<'a> {
    pub fn new(notification: &'a Notification) -> Self {
        Self {
            notification,
            style: Style::default(),
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    fn body(&self, width: u16) -> String {
        let inner = width.saturating_sub(2) as usize;
        truncate_text(&wrap_text(&self.notification.body, inner), MAX_BODY_LINES)
    }

    /// Rows needed at `width`, borders included
    pub fn height(&self, width: u16) -> u16 {
        self.body(width).lines().count().clamp(1, MAX_BODY_LINES) as u16 + 2
    }
}

impl<'a> Widget for ToastWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);
        let block = Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(
                format!(" {} ", self.notification.title),
                Style::default().bold(),
            ));
        Paragraph::new(self.body(area.width))
            .style(self.style)
            .block(block)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_height_grows_with_body() {
        let short = Notification::info("Message Sent!", "Thanks");
        assert_eq!(ToastWidget::new(&short).height(30), 3);

        let long = Notification::info("Message Sent!", "x".repeat(100));
        assert_eq!(ToastWidget::new(&long).height(22), 2 + 4);
    }

    #[test]
    fn test_render_title_and_body() {
        let notification = Notification::destructive("Error", "Boom");
        let area = Rect::new(0, 0, 20, 3);
        let mut buffer = Buffer::empty(area);
        ToastWidget::new(&notification)
            .style(Style::default().fg(Color::Red))
            .render(area, &mut buffer);

        let top: String = (0..20).map(|x| buffer[(x, 0)].symbol()).collect();
        let body: String = (0..20).map(|x| buffer[(x, 1)].symbol()).collect();
        assert!(top.contains("Error"));
        assert!(body.contains("Boom"));
        assert_eq!(buffer[(1, 1)].fg, Color::Red);
    }
}
