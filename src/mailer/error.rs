use thiserror::Error;

/// Errors that can occur when dispatching a message to the provider.
#[derive(Debug, Error)]
pub enum MailError {
    /// Request could not be sent (connection, TLS, timeout).
    #[error("Send failed: {source}")]
    Transport {
        #[source]
        source: reqwest::Error,
    },

    /// Provider answered with a non-success status.
    #[error("Provider rejected the message: {status} - {body}")]
    Rejected { status: u16, body: String },
}

impl MailError {
    /// Message shown in the form when a send fails.
    ///
    /// The error detail goes to the log only; the user sees one generic
    /// line regardless of the cause.
    pub fn user_message() -> &'static str {
        "Failed to send message. Please try again."
    }
}
