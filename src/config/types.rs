use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub mailer: MailerConfig,
}

/// Messaging-provider credentials and transport settings.
///
/// The send operation needs a service identifier, a template identifier, and
/// a public client key. All three are account-specific and have no usable
/// default, so `Config::validate` rejects empty values up front instead of
/// letting an empty credential surface later as an opaque send failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MailerConfig {
    /// Provider service identifier.
    #[serde(default)]
    pub service_id: String,
    /// Provider template identifier.
    #[serde(default)]
    pub template_id: String,
    /// Public client key, passed to the provider as the user id.
    #[serde(default)]
    pub public_key: String,
    /// Recipient address included in every payload.
    #[serde(default)]
    pub recipient: String,
    /// Provider send endpoint.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Per-send request timeout in seconds.
    #[serde(default = "default_send_timeout")]
    pub send_timeout_seconds: u64,
}

fn default_endpoint() -> String {
    "https://api.emailjs.com/api/v1.0/email/send".to_string()
}

fn default_send_timeout() -> u64 {
    10
}

impl Default for MailerConfig {
    fn default() -> Self {
        Self {
            service_id: String::new(),
            template_id: String::new(),
            public_key: String::new(),
            recipient: String::new(),
            endpoint: default_endpoint(),
            send_timeout_seconds: default_send_timeout(),
        }
    }
}
