//! Shared test utilities.

#![allow(dead_code)]

use termfolio::config::{Config, MailerConfig};
use termfolio::mailer::MailPayload;
use termfolio::ui::contact::{ContactFormState, Fields};

pub fn valid_config() -> Config {
    Config {
        mailer: MailerConfig {
            service_id: "service_abc".to_string(),
            template_id: "template_xyz".to_string(),
            public_key: "pk_123".to_string(),
            recipient: "hello@portfolio.com".to_string(),
            ..MailerConfig::default()
        },
    }
}

pub fn payload(tag: &str) -> MailPayload {
    MailPayload {
        from_name: format!("sender-{tag}"),
        from_email: format!("{tag}@example.com"),
        subject: format!("subject-{tag}"),
        message: format!("message-{tag}"),
    }
}

pub fn filled_form() -> ContactFormState {
    ContactFormState {
        fields: Fields {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            subject: "Project Inquiry".to_string(),
            message: "Let's build something.".to_string(),
        },
        ..ContactFormState::default()
    }
}
