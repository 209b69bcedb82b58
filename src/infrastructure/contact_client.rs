use std::{future::Future, pin::Pin, time::Duration};

use chrono::{DateTime, Utc};
use color_eyre::eyre::{eyre, Result};
use serde::Deserialize;
use serde_json::Value;

use crate::domain::contact::{
    ContactError, ContactSubmission, SubmissionOutcome, GENERIC_FAILURE_MESSAGE,
};

pub const CONTACT_PATH: &str = "/api/contact";

/// Sends one contact submission and reports how it ended
///
/// Implementations never fail: every transport or server problem is folded
/// into [`SubmissionOutcome::Rejected`].
pub trait ContactTransport: Send + Sync {
    fn submit<'a>(
        &'a self,
        submission: &'a ContactSubmission,
    ) -> Pin<Box<dyn Future<Output = SubmissionOutcome> + Send + 'a>>;
}

/// Body returned by the contact endpoint
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ContactResponse {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
    /// Either a string or a list of `{ msg }` validation entries
    #[serde(default)]
    pub detail: Option<Value>,
    #[serde(default)]
    pub data: Option<Value>,
}

/// Stored-message receipt some backends echo back in `data`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ContactReceipt {
    pub id: String,
    pub created_at: Option<DateTime<Utc>>,
}

impl ContactResponse {
    /// The most specific human-readable failure detail in the body
    pub fn failure_detail(&self) -> Option<String> {
        let from_detail = match &self.detail {
            Some(Value::String(detail)) => Some(detail.clone()),
            Some(Value::Array(entries)) => entries
                .iter()
                .find_map(|entry| entry.get("msg").and_then(Value::as_str))
                .map(str::to_string),
            _ => None,
        };
        from_detail
            .or_else(|| self.message.clone())
            .filter(|detail| !detail.trim().is_empty())
    }

    pub fn receipt(&self) -> Option<ContactReceipt> {
        self.data
            .as_ref()
            .and_then(|data| serde_json::from_value(data.clone()).ok())
    }
}

/// Maps a raw HTTP response onto a submission outcome
pub fn interpret_response(status: u16, body: &str, require_success_flag: bool) -> SubmissionOutcome {
    let parsed = serde_json::from_str::<ContactResponse>(body);
    let is_success_status = (200..300).contains(&status);

    match (is_success_status, parsed) {
        (true, Ok(response)) => {
            if response.success == Some(true)
                || (!require_success_flag && response.success.is_none())
            {
                if let Some(receipt) = response.receipt() {
                    log::info!(
                        "contact message stored as {} at {:?}",
                        receipt.id,
                        receipt.created_at
                    );
                }
                SubmissionOutcome::Accepted {
                    message: response.message,
                }
            } else {
                SubmissionOutcome::Rejected(ContactError::Server {
                    status: Some(status),
                    detail: response
                        .failure_detail()
                        .filter(|_| response.success == Some(false))
                        .unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_string()),
                })
            }
        }
        (true, Err(e)) if require_success_flag => {
            log::warn!("malformed contact response: {e}");
            SubmissionOutcome::Rejected(ContactError::Server {
                status: Some(status),
                detail: GENERIC_FAILURE_MESSAGE.to_string(),
            })
        }
        (true, Err(e)) => {
            if body.trim().is_empty() {
                log::debug!("contact response {status} has no body");
            } else {
                log::warn!("malformed contact response accepted on status {status}: {e}");
            }
            SubmissionOutcome::Accepted { message: None }
        }
        (false, parsed) => SubmissionOutcome::Rejected(ContactError::Server {
            status: Some(status),
            detail: parsed
                .ok()
                .and_then(|response| response.failure_detail())
                .unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_string()),
        }),
    }
}

/// Joins the contact path onto a base address, tolerating trailing slashes
pub fn contact_endpoint(backend_url: &str) -> Result<String> {
    let base = backend_url.trim().trim_end_matches('/');
    if base.is_empty() {
        return Err(eyre!("backend_url is not configured"));
    }
    let endpoint = format!("{base}{CONTACT_PATH}");
    reqwest::Url::parse(&endpoint).map_err(|e| eyre!("invalid backend_url {base:?}: {e}"))?;
    Ok(endpoint)
}

/// `reqwest` implementation of [`ContactTransport`]
#[derive(Debug, Clone)]
pub struct HttpContactClient {
    client: reqwest::Client,
    endpoint: String,
    require_success_flag: bool,
}

impl HttpContactClient {
    pub fn new(
        backend_url: &str,
        timeout: Option<Duration>,
        require_success_flag: bool,
    ) -> Result<Self> {
        let endpoint = contact_endpoint(backend_url)?;
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            endpoint,
            require_success_flag,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn post(&self, submission: &ContactSubmission) -> SubmissionOutcome {
        log::info!("POST {}", self.endpoint);

        let response = match self.client.post(&self.endpoint).json(submission).send().await {
            Ok(response) => response,
            Err(e) => {
                log::error!("contact request failed: {e}");
                return SubmissionOutcome::Rejected(ContactError::Network(e.to_string()));
            }
        };

        let status = response.status().as_u16();
        match response.text().await {
            Ok(body) => {
                log::debug!("contact response {status}: {body}");
                interpret_response(status, &body, self.require_success_flag)
            }
            Err(e) => {
                log::error!("failed to read contact response: {e}");
                SubmissionOutcome::Rejected(ContactError::Network(e.to_string()))
            }
        }
    }
}

impl ContactTransport for HttpContactClient {
    fn submit<'a>(
        &'a self,
        submission: &'a ContactSubmission,
    ) -> Pin<Box<dyn Future<Output = SubmissionOutcome> + Send + 'a>> {
        Box::pin(self.post(submission))
    }
}
