//! Messaging-provider boundary for the contact form.
//!
//! The pipeline treats delivery as one opaque asynchronous send. The
//! provider is an EmailJS-compatible REST endpoint: a single POST carrying
//! the service id, template id, public client key, and template parameters.
//! Everything above the [`MailTransport`] trait is provider-agnostic.

mod client;
mod error;
mod payload;
pub mod worker;

pub use client::{MailTransport, MailerClient};
pub use error::MailError;
pub use payload::MailPayload;
