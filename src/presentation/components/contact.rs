//! Contact details and the contact form
//!
//! The form reflects [`SubmissionState`]: inputs are disabled while a request
//! is in flight and the failure reason is shown under the form.

use ratatui::{
    prelude::*,
    widgets::{Paragraph, Wrap},
};
use strum::IntoEnumIterator;

use crate::{
    core::state::AppState,
    domain::contact::{ContactField, SubmissionState},
    presentation::{components::styled, widgets::FormFieldWidget},
};

pub const SENDING_LABEL: &str = "Sending...";
pub const SEND_LABEL: &str = "[ Ctrl+S ] Send Message";
pub const START_HINT: &str = "Press Enter to start typing";
pub const SENT_MESSAGE: &str = "Message sent. Thank you!";

#[derive(Debug, Clone, Default)]
pub struct ContactComponent;

impl ContactComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let [info_area, form_area] =
            Layout::horizontal([Constraint::Percentage(35), Constraint::Percentage(65)])
                .spacing(2)
                .areas(area);

        frame.render_widget(
            Paragraph::new(self.info_lines(state)).wrap(Wrap { trim: true }),
            info_area,
        );
        self.form(state, frame, form_area);
    }

    pub fn info_lines<'a>(&self, state: &'a AppState) -> Vec<Line<'a>> {
        let profile = &state.content.profile;
        let muted = styled(state, "muted");
        let mut lines = vec![
            Line::styled("Get In Touch", styled(state, "title")),
            Line::default(),
            Line::raw("Have a project in mind or just want to chat? Drop me a message."),
            Line::default(),
        ];
        for (label, value) in [
            ("Email", &profile.email),
            ("Phone", &profile.phone),
            ("Location", &profile.location),
            ("GitHub", &profile.github),
            ("LinkedIn", &profile.linkedin),
        ] {
            if !value.is_empty() {
                lines.push(Line::styled(label, muted));
                lines.push(Line::raw(value.as_str()));
            }
        }
        lines
    }

    fn form(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let [name_area, email_area, subject_area, message_area, submit_area, feedback_area] =
            Layout::vertical([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(4),
                Constraint::Length(1),
                Constraint::Length(2),
            ])
            .areas(area);

        let form = &state.contact;
        let disabled = form.is_disabled();
        let editing = state.is_editing();
        let areas = [name_area, email_area, subject_area, message_area];
        for (field, field_area) in ContactField::iter().zip(areas) {
            let label = field.to_string();
            let widget = FormFieldWidget::new(&label, form.value(field))
                .placeholder(field.placeholder())
                .focused(editing && state.ui.contact_focus == field)
                .disabled(disabled)
                .style(if disabled {
                    styled(state, "field_disabled")
                } else {
                    styled(state, "field")
                })
                .focused_style(styled(state, "field_focused"))
                .placeholder_style(styled(state, "muted"));
            frame.render_widget(widget, field_area);
        }

        frame.render_widget(Paragraph::new(self.submit_line(state)), submit_area);
        if let Some(feedback) = self.feedback_line(state) {
            frame.render_widget(
                Paragraph::new(feedback).wrap(Wrap { trim: true }),
                feedback_area,
            );
        }
    }

    pub fn submit_line<'a>(&self, state: &AppState) -> Line<'a> {
        if state.contact.is_disabled() {
            return Line::styled(SENDING_LABEL, styled(state, "accent"));
        }
        if state.is_editing() {
            Line::from(vec![
                Span::styled(SEND_LABEL, styled(state, "highlight")),
                Span::styled("  Tab next field · Esc done", styled(state, "muted")),
            ])
        } else {
            Line::styled(START_HINT, styled(state, "muted"))
        }
    }

    pub fn feedback_line<'a>(&self, state: &'a AppState) -> Option<Line<'a>> {
        match state.contact.status() {
            SubmissionState::Failed(error) => {
                Some(Line::styled(error.user_message(), styled(state, "error")))
            }
            SubmissionState::Succeeded => Some(Line::styled(SENT_MESSAGE, styled(state, "success"))),
            SubmissionState::Idle | SubmissionState::Submitting => None,
        }
    }
}
