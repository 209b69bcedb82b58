use std::sync::Arc;

use color_eyre::eyre::Result;
use tokio::sync::mpsc;

use crate::{
    core::{
        cmd::{Cmd, TuiCommand},
        raw_msg::RawMsg,
        state::contact::dispatch_failure,
    },
    domain::notification::NotificationSurface,
    infrastructure::contact_service::ContactOperation,
};

/// Command executor that routes Elm commands to the services
#[derive(Clone)]
pub struct CmdExecutor {
    raw_sender: mpsc::UnboundedSender<RawMsg>,
    contact_sender: Option<mpsc::UnboundedSender<ContactOperation>>,
    tui_sender: Option<mpsc::UnboundedSender<TuiCommand>>,
    notifier: Option<Arc<dyn NotificationSurface>>,
}

impl CmdExecutor {
    /// Create a new command executor that can only feed raw messages back
    pub fn new(raw_sender: mpsc::UnboundedSender<RawMsg>) -> Self {
        Self {
            raw_sender,
            contact_sender: None,
            tui_sender: None,
            notifier: None,
        }
    }

    /// Create a new command executor wired to a ContactService
    pub fn new_with_contact(
        raw_sender: mpsc::UnboundedSender<RawMsg>,
        contact_sender: mpsc::UnboundedSender<ContactOperation>,
    ) -> Self {
        Self {
            contact_sender: Some(contact_sender),
            ..Self::new(raw_sender)
        }
    }

    pub fn set_contact_sender(&mut self, contact_sender: mpsc::UnboundedSender<ContactOperation>) {
        self.contact_sender = Some(contact_sender);
    }

    /// Inject TUI command sender for executing TuiCommand asynchronously.
    pub fn set_tui_sender(&mut self, sender: mpsc::UnboundedSender<TuiCommand>) {
        self.tui_sender = Some(sender);
    }

    pub fn set_notifier(&mut self, notifier: Arc<dyn NotificationSurface>) {
        self.notifier = Some(notifier);
    }

    /// Execute a single command
    pub fn execute_command(&self, cmd: &Cmd) -> Result<()> {
        match cmd {
            Cmd::SubmitContact {
                request_id,
                submission,
            } => {
                let Some(contact_sender) = &self.contact_sender else {
                    log::warn!("SubmitContact #{request_id}: ContactService not available");
                    self.fail_submission(*request_id, "contact service not available")?;
                    return Ok(());
                };

                let op = ContactOperation::Submit {
                    request_id: *request_id,
                    submission: submission.clone(),
                };
                if contact_sender.send(op).is_err() {
                    log::error!("SubmitContact #{request_id}: ContactService has stopped");
                    self.fail_submission(*request_id, "contact service has stopped")?;
                }
            }

            Cmd::Notify(notification) => {
                if let Some(notifier) = &self.notifier {
                    notifier.notify(notification.clone());
                } else {
                    self.raw_sender
                        .send(RawMsg::Notification(notification.clone()))?;
                }
            }

            Cmd::Tui(tui_cmd) => match tui_cmd {
                TuiCommand::Resize { width, height } => {
                    if let Some(tx) = &self.tui_sender {
                        let _ = tx.send(TuiCommand::Resize {
                            width: *width,
                            height: *height,
                        });
                        return Ok(());
                    }
                    log::warn!(
                        "CmdExecutor: TUI sender not configured; dropping Resize command {width}x{height}"
                    );
                }
            },

            Cmd::LogError { message } => {
                log::error!("Elm command error: {message}");
            }

            Cmd::LogInfo { message } => {
                log::info!("Elm command info: {message}");
            }
        }

        Ok(())
    }

    /// Completes the submission immediately so the form leaves Submitting
    fn fail_submission(&self, request_id: u64, reason: &str) -> Result<()> {
        self.raw_sender.send(RawMsg::ContactCompleted {
            request_id,
            outcome: dispatch_failure(reason),
        })?;
        Ok(())
    }

    /// Execute multiple commands
    pub fn execute_commands(&self, commands: &[Cmd]) -> Result<Vec<String>> {
        let mut execution_log = Vec::new();

        for cmd in commands {
            match self.execute_command(cmd) {
                Ok(()) => {
                    execution_log.push(format!("✓ Executed: {}", cmd.name()));
                }
                Err(e) => {
                    let error_msg = format!("✗ Failed to execute {}: {}", cmd.name(), e);
                    log::error!("{error_msg}");
                    execution_log.push(error_msg);
                }
            }
        }

        Ok(execution_log)
    }

    /// Get execution statistics
    pub fn get_stats(&self) -> CmdExecutorStats {
        CmdExecutorStats {
            is_raw_sender_closed: self.raw_sender.is_closed(),
            has_contact_sender: self.contact_sender.is_some(),
            is_contact_sender_closed: self.contact_sender.as_ref().map(|s| s.is_closed()),
            has_notifier: self.notifier.is_some(),
        }
    }
}

/// Command executor statistics
#[derive(Debug, Clone)]
pub struct CmdExecutorStats {
    pub is_raw_sender_closed: bool,
    pub has_contact_sender: bool,
    pub is_contact_sender_closed: Option<bool>,
    pub has_notifier: bool,
}
