use std::sync::Arc;

use color_eyre::eyre::Result;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::{
    core::{raw_msg::RawMsg, state::contact::dispatch_failure},
    domain::contact::ContactSubmission,
    infrastructure::contact_client::ContactTransport,
};

/// Operations accepted by [`ContactService`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactOperation {
    Submit {
        request_id: u64,
        submission: ContactSubmission,
    },
}

impl ContactOperation {
    pub fn name(&self) -> &'static str {
        match self {
            ContactOperation::Submit { .. } => "Submit",
        }
    }
}

/// ContactService performs contact submissions off the UI task
///
/// Each submission runs in its own task; its outcome always comes back as
/// `RawMsg::ContactCompleted`, including when the task panics.
pub struct ContactService {
    transport: Arc<dyn ContactTransport>,
    // Incoming channels
    op_rx: mpsc::UnboundedReceiver<ContactOperation>,
    cancel_token: CancellationToken,
    // Outgoing channels
    raw_tx: mpsc::UnboundedSender<RawMsg>,
}

pub type NewContactService = (
    mpsc::UnboundedSender<ContactOperation>, // op_tx - operations to send
    CancellationToken,                       // shutdown signal
    ContactService,
);

impl ContactService {
    pub fn new(
        transport: Arc<dyn ContactTransport>,
        raw_tx: mpsc::UnboundedSender<RawMsg>,
    ) -> Result<NewContactService> {
        let (op_tx, op_rx) = mpsc::unbounded_channel();
        let cancel_token = CancellationToken::new();

        Ok((
            op_tx,
            cancel_token.clone(),
            Self {
                transport,
                op_rx,
                cancel_token,
                raw_tx,
            },
        ))
    }

    /// Run the ContactService in background task
    pub fn run(mut self) {
        tokio::spawn(async move {
            self.run_service().await;
        });
    }

    /// Main service loop
    async fn run_service(&mut self) {
        loop {
            tokio::select! {
                result = self.op_rx.recv() => {
                    match result {
                        Some(op) => self.handle_operation(op),
                        None => {
                            log::info!("ContactService: operation channel closed");
                            break;
                        }
                    }
                }

                _ = self.cancel_token.cancelled() => {
                    log::info!("ContactService received cancellation signal");
                    break;
                }
            }
        }
    }

    fn handle_operation(&self, op: ContactOperation) {
        log::debug!("Handling ContactOperation: {}", op.name());

        match op {
            ContactOperation::Submit {
                request_id,
                submission,
            } => {
                let transport = Arc::clone(&self.transport);
                let raw_tx = self.raw_tx.clone();
                tokio::spawn(async move {
                    let task = tokio::spawn(async move { transport.submit(&submission).await });
                    let outcome = match task.await {
                        Ok(outcome) => outcome,
                        Err(e) => {
                            log::error!("contact request {request_id} task failed: {e}");
                            dispatch_failure(e.to_string())
                        }
                    };
                    if raw_tx
                        .send(RawMsg::ContactCompleted {
                            request_id,
                            outcome,
                        })
                        .is_err()
                    {
                        log::warn!("contact request {request_id} finished after shutdown");
                    }
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{
        future::Future,
        pin::Pin,
        sync::atomic::{AtomicUsize, Ordering},
        time::Duration,
    };

    use super::*;
    use crate::domain::contact::{ContactError, SubmissionOutcome};

    struct CountingTransport {
        calls: AtomicUsize,
    }

    impl ContactTransport for CountingTransport {
        fn submit<'a>(
            &'a self,
            _submission: &'a ContactSubmission,
        ) -> Pin<Box<dyn Future<Output = SubmissionOutcome> + Send + 'a>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Box::pin(async {
                SubmissionOutcome::Accepted {
                    message: Some("ok".into()),
                }
            })
        }
    }

    struct PanickingTransport;

    impl ContactTransport for PanickingTransport {
        fn submit<'a>(
            &'a self,
            _submission: &'a ContactSubmission,
        ) -> Pin<Box<dyn Future<Output = SubmissionOutcome> + Send + 'a>> {
            Box::pin(async { explode() })
        }
    }

    fn explode() -> SubmissionOutcome {
        panic!("transport exploded")
    }

    async fn recv(rx: &mut mpsc::UnboundedReceiver<RawMsg>) -> RawMsg {
        tokio::time::timeout(Duration::from_secs(2), rx.recv())
            .await
            .expect("timed out waiting for completion")
            .expect("channel closed")
    }

    #[tokio::test]
    async fn test_submit_reports_completion() -> Result<()> {
        let transport = Arc::new(CountingTransport {
            calls: AtomicUsize::new(0),
        });
        let (raw_tx, mut raw_rx) = mpsc::unbounded_channel();
        let (op_tx, cancel_token, service) = ContactService::new(transport.clone(), raw_tx)?;
        service.run();

        op_tx.send(ContactOperation::Submit {
            request_id: 7,
            submission: ContactSubmission::new("a", "b", "c", "d"),
        })?;

        assert_eq!(
            recv(&mut raw_rx).await,
            RawMsg::ContactCompleted {
                request_id: 7,
                outcome: SubmissionOutcome::Accepted {
                    message: Some("ok".into())
                },
            }
        );
        assert_eq!(transport.calls.load(Ordering::SeqCst), 1);

        cancel_token.cancel();
        Ok(())
    }

    #[tokio::test]
    async fn test_panicking_transport_still_completes() -> Result<()> {
        let (raw_tx, mut raw_rx) = mpsc::unbounded_channel();
        let (op_tx, cancel_token, service) =
            ContactService::new(Arc::new(PanickingTransport), raw_tx)?;
        service.run();

        op_tx.send(ContactOperation::Submit {
            request_id: 1,
            submission: ContactSubmission::new("a", "b", "c", "d"),
        })?;

        match recv(&mut raw_rx).await {
            RawMsg::ContactCompleted {
                request_id: 1,
                outcome: SubmissionOutcome::Rejected(ContactError::Network(_)),
            } => {}
            other => panic!("unexpected message: {other:?}"),
        }

        cancel_token.cancel();
        Ok(())
    }

    #[test]
    fn test_operation_name() {
        let op = ContactOperation::Submit {
            request_id: 0,
            submission: ContactSubmission::default(),
        };
        assert_eq!(op.name(), "Submit");
    }
}
