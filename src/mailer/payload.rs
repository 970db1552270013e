use serde::Serialize;

use crate::config::MailerConfig;

/// One composed contact-form message, ready to dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailPayload {
    pub from_name: String,
    pub from_email: String,
    pub subject: String,
    pub message: String,
}

/// Provider wire format: one JSON body per send.
#[derive(Debug, Serialize)]
pub(crate) struct SendRequest<'a> {
    pub service_id: &'a str,
    pub template_id: &'a str,
    /// The provider calls the public client key the "user id".
    pub user_id: &'a str,
    pub template_params: TemplateParams<'a>,
}

#[derive(Debug, Serialize)]
pub(crate) struct TemplateParams<'a> {
    pub to_email: &'a str,
    pub from_name: &'a str,
    pub from_email: &'a str,
    pub subject: &'a str,
    pub message: &'a str,
}

impl<'a> SendRequest<'a> {
    pub fn new(config: &'a MailerConfig, payload: &'a MailPayload) -> Self {
        Self {
            service_id: &config.service_id,
            template_id: &config.template_id,
            user_id: &config.public_key,
            template_params: TemplateParams {
                to_email: &config.recipient,
                from_name: &payload.from_name,
                from_email: &payload.from_email,
                subject: &payload.subject,
                message: &payload.message,
            },
        }
    }
}
