use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

const CURSOR: &str = "▏";

/// One bordered input of the contact form
#[derive(Clone, Debug)]
pub struct FormFieldWidget<'a> {
    label: &'a str,
    value: &'a str,
    placeholder: &'a str,
    focused: bool,
    disabled: bool,
    style: Style,
    focused_style: Style,
    placeholder_style: Style,
}

impl<'a> FormFieldWidget<'a> {
    pub fn new(label: &'a str, value: &'a str) -> Self {
        Self {
            label,
            value,
            placeholder: "",
            focused: false,
            disabled: false,
            style: Style::default(),
            focused_style: Style::default().bold(),
            placeholder_style: Style::default().dim(),
        }
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn focused_style(mut self, style: Style) -> Self {
        self.focused_style = style;
        self
    }

    pub fn placeholder_style(mut self, style: Style) -> Self {
        self.placeholder_style = style;
        self
    }

    fn text(&self) -> Text<'a> {
        if self.value.is_empty() && !self.focused {
            return Text::styled(self.placeholder, self.placeholder_style);
        }
        let mut text = Text::from(self.value);
        if self.focused && !self.disabled {
            match text.lines.last_mut() {
                Some(line) => line.push_span(Span::raw(CURSOR)),
                None => text.lines.push(Line::raw(CURSOR)),
            }
        }
        text
    }
}

impl<'a> Widget for FormFieldWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused && !self.disabled {
            self.focused_style
        } else {
            self.style
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(format!(" {} ", self.label));

        let inner_height = area.height.saturating_sub(2);
        let text = self.text();
        // Keep the end of long input (and the cursor) visible
        let overflow = (text.lines.len() as u16).saturating_sub(inner_height);

        Paragraph::new(text)
            .style(self.style)
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((overflow, 0))
            .render(area, buf);
    }
}
