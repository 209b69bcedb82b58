use crate::{
    core::{cmd::Cmd, msg::contact::ContactMsg},
    domain::{
        contact::{
            ContactError, ContactField, ContactSubmission, SubmissionOutcome, SubmissionState,
            DEFAULT_SUCCESS_MESSAGE,
        },
        notification::Notification,
    },
};

pub const SUCCESS_TITLE: &str = "Message Sent! ✓";
pub const ERROR_TITLE: &str = "Error";
pub const VALIDATION_TITLE: &str = "Validation Error";
pub const VALIDATION_BODY: &str = "Please fill in all required fields.";

/// State of one contact form instance
///
/// The form owns its record and the lifecycle of the current attempt. At most
/// one submission is in flight; `in_flight` holds its request id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    submission: ContactSubmission,
    status: SubmissionState,
    in_flight: Option<u64>,
    next_request_id: u64,
}

impl ContactForm {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn submission(&self) -> &ContactSubmission {
        &self.submission
    }

    pub fn status(&self) -> &SubmissionState {
        &self.status
    }

    pub fn value(&self, field: ContactField) -> &str {
        self.submission.get(field)
    }

    /// Inputs are disabled while a request is in flight
    pub fn is_disabled(&self) -> bool {
        self.status.is_submitting()
    }

    pub fn in_flight(&self) -> Option<u64> {
        self.in_flight
    }

    /// Contact-specific update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: ContactMsg) -> Vec<Cmd> {
        match msg {
            ContactMsg::UpdateField { field, value } => {
                self.update_field(field, value);
                vec![]
            }
            ContactMsg::Submit => self.submit(),
            ContactMsg::Completed {
                request_id,
                outcome,
            } => self.complete(request_id, outcome),
        }
    }

    fn update_field(&mut self, field: ContactField, value: String) {
        if self.is_disabled() {
            log::debug!("ignoring edit of {field:?} while submitting");
            return;
        }

        self.submission.set(field, value);

        // Resuming typing clears the previous outcome
        if matches!(
            self.status,
            SubmissionState::Failed(_) | SubmissionState::Succeeded
        ) {
            self.status = SubmissionState::Idle;
        }
    }

    fn submit(&mut self) -> Vec<Cmd> {
        if self.is_disabled() {
            log::warn!(
                "submit ignored: request {:?} is still in flight",
                self.in_flight
            );
            return vec![];
        }

        if let Err(error) = self.submission.validate() {
            log::info!("contact form rejected locally: {error}");
            self.status = SubmissionState::Failed(error);
            return vec![Cmd::Notify(Notification::destructive(
                VALIDATION_TITLE,
                VALIDATION_BODY,
            ))];
        }

        let request_id = self.next_request_id;
        self.next_request_id += 1;
        self.in_flight = Some(request_id);
        self.status = SubmissionState::Submitting;

        vec![Cmd::SubmitContact {
            request_id,
            submission: self.submission.clone(),
        }]
    }

    fn complete(&mut self, request_id: u64, outcome: SubmissionOutcome) -> Vec<Cmd> {
        if self.in_flight != Some(request_id) {
            log::warn!(
                "dropping stale completion for request {request_id} (in flight: {:?})",
                self.in_flight
            );
            return vec![];
        }
        self.in_flight = None;

        match outcome {
            SubmissionOutcome::Accepted { message } => {
                self.status = SubmissionState::Succeeded;
                self.submission.clear();
                let body = message
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or_else(|| DEFAULT_SUCCESS_MESSAGE.to_string());
                vec![
                    Cmd::Notify(Notification::info(SUCCESS_TITLE, body)),
                    Cmd::LogInfo {
                        message: format!("contact request {request_id} accepted"),
                    },
                ]
            }
            SubmissionOutcome::Rejected(error) => {
                let body = error.user_message().to_string();
                let log = Cmd::LogError {
                    message: format!("contact request {request_id} failed: {error}"),
                };
                self.status = SubmissionState::Failed(error);
                vec![Cmd::Notify(Notification::destructive(ERROR_TITLE, body)), log]
            }
        }
    }
}

/// Failure produced when a submission cannot be handed to the network layer
pub fn dispatch_failure(reason: impl Into<String>) -> SubmissionOutcome {
    SubmissionOutcome::Rejected(ContactError::Network(reason.into()))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use strum::IntoEnumIterator;

    use super::*;
    use crate::domain::contact::{GENERIC_FAILURE_MESSAGE, VALIDATION_REASON};

    fn fill(form: &mut ContactForm) {
        for (field, value) in [
            (ContactField::Name, "Jane"),
            (ContactField::Email, "jane@example.com"),
            (ContactField::Subject, "Hello"),
            (ContactField::Message, "I have a project for you"),
        ] {
            form.update(ContactMsg::UpdateField {
                field,
                value: value.to_string(),
            });
        }
    }

    fn submitted_form() -> (ContactForm, u64) {
        let mut form = ContactForm::new();
        fill(&mut form);
        let cmds = form.update(ContactMsg::Submit);
        match cmds.as_slice() {
            [Cmd::SubmitContact { request_id, .. }] => (form, *request_id),
            other => panic!("expected a single SubmitContact, got {other:?}"),
        }
    }

    fn network_calls(cmds: &[Cmd]) -> usize {
        cmds.iter()
            .filter(|c| matches!(c, Cmd::SubmitContact { .. }))
            .count()
    }

    #[test]
    fn test_new_form_is_idle_and_empty() {
        let form = ContactForm::new();
        assert_eq!(form.status(), &SubmissionState::Idle);
        assert!(form.submission().is_empty());
        assert!(!form.is_disabled());
    }

    #[rstest]
    #[case(ContactField::Name, "")]
    #[case(ContactField::Email, "  ")]
    #[case(ContactField::Subject, "\n")]
    #[case(ContactField::Message, "\t ")]
    fn test_submit_with_blank_field_is_local_failure(
        #[case] field: ContactField,
        #[case] blank: &str,
    ) {
        let mut form = ContactForm::new();
        fill(&mut form);
        form.update(ContactMsg::UpdateField {
            field,
            value: blank.to_string(),
        });

        let cmds = form.update(ContactMsg::Submit);

        assert_eq!(network_calls(&cmds), 0);
        assert_eq!(form.status().failure_reason(), Some(VALIDATION_REASON));
        assert_eq!(
            cmds,
            vec![Cmd::Notify(Notification::destructive(
                VALIDATION_TITLE,
                VALIDATION_BODY
            ))]
        );
        assert_eq!(form.in_flight(), None);
    }

    #[test]
    fn test_valid_submit_emits_exactly_one_request() {
        let mut form = ContactForm::new();
        fill(&mut form);
        let expected = form.submission().clone();

        let cmds = form.update(ContactMsg::Submit);

        assert_eq!(network_calls(&cmds), 1);
        assert_eq!(
            cmds,
            vec![Cmd::SubmitContact {
                request_id: 0,
                submission: expected
            }]
        );
        assert_eq!(form.status(), &SubmissionState::Submitting);
        assert!(form.is_disabled());
    }

    #[test]
    fn test_second_submit_while_submitting_is_ignored() {
        let (mut form, request_id) = submitted_form();

        let cmds = form.update(ContactMsg::Submit);

        assert!(cmds.is_empty());
        assert_eq!(form.status(), &SubmissionState::Submitting);
        assert_eq!(form.in_flight(), Some(request_id));
    }

    #[test]
    fn test_success_clears_form_and_notifies_server_message() {
        let (mut form, request_id) = submitted_form();

        let cmds = form.update(ContactMsg::Completed {
            request_id,
            outcome: SubmissionOutcome::Accepted {
                message: Some("X".into()),
            },
        });

        assert_eq!(form.status(), &SubmissionState::Succeeded);
        assert_eq!(form.submission(), &ContactSubmission::new("", "", "", ""));
        assert!(cmds.contains(&Cmd::Notify(Notification::info(SUCCESS_TITLE, "X"))));
    }

    #[test]
    fn test_success_without_message_uses_default() {
        let (mut form, request_id) = submitted_form();

        let cmds = form.update(ContactMsg::Completed {
            request_id,
            outcome: SubmissionOutcome::Accepted { message: None },
        });

        assert!(cmds.contains(&Cmd::Notify(Notification::info(
            SUCCESS_TITLE,
            DEFAULT_SUCCESS_MESSAGE
        ))));
    }

    #[test]
    fn test_server_failure_keeps_form_and_records_detail() {
        let (mut form, request_id) = submitted_form();
        let before = form.submission().clone();

        let cmds = form.update(ContactMsg::Completed {
            request_id,
            outcome: SubmissionOutcome::Rejected(ContactError::Server {
                status: Some(500),
                detail: "Y".into(),
            }),
        });

        assert_eq!(form.submission(), &before);
        assert_eq!(form.status().failure_reason(), Some("Y"));
        assert!(cmds.contains(&Cmd::Notify(Notification::destructive(ERROR_TITLE, "Y"))));
        assert!(!form.is_disabled());
    }

    #[test]
    fn test_network_failure_uses_generic_message() {
        let (mut form, request_id) = submitted_form();

        let cmds = form.update(ContactMsg::Completed {
            request_id,
            outcome: dispatch_failure("connection refused"),
        });

        assert_eq!(
            form.status().failure_reason(),
            Some(GENERIC_FAILURE_MESSAGE)
        );
        assert!(cmds.contains(&Cmd::Notify(Notification::destructive(
            ERROR_TITLE,
            GENERIC_FAILURE_MESSAGE
        ))));
    }

    #[test]
    fn test_retry_after_failure() {
        let (mut form, request_id) = submitted_form();
        form.update(ContactMsg::Completed {
            request_id,
            outcome: dispatch_failure("timeout"),
        });

        let cmds = form.update(ContactMsg::Submit);

        assert_eq!(network_calls(&cmds), 1);
        assert_eq!(form.status(), &SubmissionState::Submitting);
        assert_eq!(form.in_flight(), Some(request_id + 1));
    }

    #[test]
    fn test_editing_after_failure_returns_to_idle() {
        let mut form = ContactForm::new();
        form.update(ContactMsg::Submit);
        assert!(form.status().error().is_some());

        form.update(ContactMsg::UpdateField {
            field: ContactField::Name,
            value: "J".into(),
        });

        assert_eq!(form.status(), &SubmissionState::Idle);
        assert_eq!(form.value(ContactField::Name), "J");
    }

    #[test]
    fn test_update_field_is_idempotent() {
        let msg = ContactMsg::UpdateField {
            field: ContactField::Subject,
            value: "Hi".into(),
        };
        let mut once = ContactForm::new();
        once.update(msg.clone());
        let mut twice = ContactForm::new();
        twice.update(msg.clone());
        twice.update(msg);

        assert_eq!(once, twice);
    }

    #[test]
    fn test_edits_ignored_while_submitting() {
        let (mut form, _) = submitted_form();
        let before = form.submission().clone();

        for field in ContactField::iter() {
            form.update(ContactMsg::UpdateField {
                field,
                value: "changed".into(),
            });
        }

        assert_eq!(form.submission(), &before);
        assert_eq!(form.status(), &SubmissionState::Submitting);
    }

    #[test]
    fn test_stale_completion_is_dropped() {
        let (mut form, request_id) = submitted_form();

        let cmds = form.update(ContactMsg::Completed {
            request_id: request_id + 42,
            outcome: SubmissionOutcome::Accepted { message: None },
        });

        assert!(cmds.is_empty());
        assert_eq!(form.status(), &SubmissionState::Submitting);
        assert!(!form.submission().is_empty());
    }
}
