use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::config::MailerConfig;
use crate::mailer::error::MailError;
use crate::mailer::payload::{MailPayload, SendRequest};

/// Opaque asynchronous send operation.
///
/// The submission pipeline only sees this trait, so tests substitute a
/// scripted fake and never touch the network.
#[async_trait]
pub trait MailTransport: Send + Sync {
    async fn send(&self, payload: &MailPayload) -> Result<(), MailError>;
}

/// EmailJS-compatible REST transport.
pub struct MailerClient {
    client: Client,
    config: MailerConfig,
}

impl MailerClient {
    /// Builds the transport from validated configuration.
    ///
    /// Credentials have already been checked by `Config::validate`; this
    /// only assembles the HTTP client with the configured timeout.
    pub fn new(config: MailerConfig) -> Result<Self, MailError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.send_timeout_seconds))
            .build()
            .map_err(|source| MailError::Transport { source })?;
        Ok(Self { client, config })
    }
}

#[async_trait]
impl MailTransport for MailerClient {
    async fn send(&self, payload: &MailPayload) -> Result<(), MailError> {
        let body = SendRequest::new(&self.config, payload);
        let response = self
            .client
            .post(&self.config.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|source| MailError::Transport { source })?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(MailError::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}
