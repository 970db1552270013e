//! Bridges the form to the transport without blocking the render loop.
//!
//! The UI hands the worker a composed payload over a channel and gets the
//! outcome back as an [`AppEvent`]. Outcomes are tagged with the attempt id
//! so the app can discard results from an attempt it no longer tracks.

use std::sync::mpsc::Sender as EventSender;
use std::sync::Arc;

use tokio::sync::mpsc;
use uuid::Uuid;

use crate::mailer::{MailPayload, MailTransport};
use crate::shutdown::ShutdownHandle;
use crate::ui::events::AppEvent;

/// One send request from the UI.
#[derive(Debug)]
pub struct SendCommand {
    pub attempt_id: Uuid,
    pub payload: MailPayload,
}

pub type MailCommandSender = mpsc::Sender<SendCommand>;

/// Spawns the mail worker on the current tokio runtime.
///
/// The worker exits when the command channel closes, the event channel
/// hangs up, or shutdown is signaled.
pub fn spawn(
    transport: Arc<dyn MailTransport>,
    events: EventSender<AppEvent>,
    shutdown: ShutdownHandle,
) -> MailCommandSender {
    let (tx, rx) = mpsc::channel::<SendCommand>(4);
    tokio::spawn(run(transport, events, shutdown, rx));
    tx
}

async fn run(
    transport: Arc<dyn MailTransport>,
    events: EventSender<AppEvent>,
    shutdown: ShutdownHandle,
    mut rx: mpsc::Receiver<SendCommand>,
) {
    loop {
        let command = tokio::select! {
            command = rx.recv() => match command {
                Some(command) => command,
                None => break,
            },
            _ = shutdown.wait() => break,
        };

        let SendCommand {
            attempt_id,
            payload,
        } = command;
        tracing::info!(%attempt_id, subject = %payload.subject, "dispatching contact message");

        let event = match transport.send(&payload).await {
            Ok(()) => {
                tracing::info!(%attempt_id, "contact message delivered");
                AppEvent::MailSent { attempt_id }
            }
            Err(err) => {
                // The user only ever sees the generic failure line; the
                // cause lands here.
                tracing::error!(%attempt_id, error = %err, "contact message failed");
                AppEvent::MailFailed { attempt_id }
            }
        };

        if events.send(event).is_err() {
            break;
        }
    }
    tracing::debug!("mail worker stopped");
}
