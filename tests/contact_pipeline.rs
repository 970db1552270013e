mod common;

use std::collections::VecDeque;
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use termfolio::mailer::worker::{self, SendCommand};
use termfolio::mailer::{MailError, MailPayload, MailTransport};
use termfolio::shutdown::ShutdownCoordinator;
use termfolio::ui::contact::{ContactIntent, ContactReducer, Fields, Submission};
use termfolio::ui::events::AppEvent;
use termfolio::ui::mvi::Reducer;
use uuid::Uuid;

/// Transport that replays scripted outcomes and records every payload.
struct ScriptedTransport {
    outcomes: Mutex<VecDeque<Result<(), MailError>>>,
    sent: Mutex<Vec<MailPayload>>,
}

impl ScriptedTransport {
    fn new(outcomes: Vec<Result<(), MailError>>) -> Arc<Self> {
        Arc::new(Self {
            outcomes: Mutex::new(outcomes.into()),
            sent: Mutex::new(Vec::new()),
        })
    }

    fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

#[async_trait]
impl MailTransport for ScriptedTransport {
    async fn send(&self, payload: &MailPayload) -> Result<(), MailError> {
        self.sent.lock().unwrap().push(payload.clone());
        self.outcomes.lock().unwrap().pop_front().unwrap_or(Ok(()))
    }
}

fn rejected() -> MailError {
    MailError::Rejected {
        status: 500,
        body: "boom".to_string(),
    }
}

// -- reducer state machine ---------------------------------------------

#[test]
fn submit_walks_idle_pending_succeeded_idle() {
    let state = common::filled_form();
    assert_eq!(state.submission, Submission::Idle);

    let state = ContactReducer::reduce(state, ContactIntent::Submit);
    assert_eq!(state.submission, Submission::Pending);

    let state = ContactReducer::reduce(state, ContactIntent::SendSucceeded);
    assert_eq!(state.submission, Submission::Succeeded);
    assert_eq!(state.fields, Fields::default());

    let state = ContactReducer::reduce(state, ContactIntent::NoticeElapsed);
    assert_eq!(state.submission, Submission::Idle);
}

#[test]
fn failure_keeps_fields_and_retry_clears_the_error() {
    let filled = common::filled_form();
    let state = ContactReducer::reduce(filled.clone(), ContactIntent::Submit);
    let state = ContactReducer::reduce(
        state,
        ContactIntent::SendFailed {
            message: "Failed to send message. Please try again.".to_string(),
        },
    );
    assert_eq!(state.fields, filled.fields);
    assert!(state.error().is_some());

    let state = ContactReducer::reduce(state, ContactIntent::Submit);
    assert_eq!(state.submission, Submission::Pending);
    assert!(state.error().is_none());
}

// -- worker round trips -------------------------------------------------

fn recv_outcome(rx: &mpsc::Receiver<AppEvent>) -> AppEvent {
    rx.recv_timeout(Duration::from_secs(5))
        .expect("worker should report an outcome")
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn delivery_success_reports_mail_sent() {
    let transport = ScriptedTransport::new(vec![Ok(())]);
    let (event_tx, event_rx) = mpsc::channel();
    let coordinator = ShutdownCoordinator::new();
    let sender = worker::spawn(Arc::clone(&transport) as Arc<dyn MailTransport>, event_tx, coordinator.handle());

    let attempt_id = Uuid::new_v4();
    sender
        .send(SendCommand {
            attempt_id,
            payload: common::payload("ok"),
        })
        .await
        .expect("worker accepts the command");

    match recv_outcome(&event_rx) {
        AppEvent::MailSent { attempt_id: got } => assert_eq!(got, attempt_id),
        _ => panic!("expected MailSent"),
    }
    assert_eq!(transport.sent_count(), 1);
    coordinator.signal();
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn transport_failure_reports_mail_failed_and_worker_survives() {
    let transport = ScriptedTransport::new(vec![Err(rejected()), Ok(())]);
    let (event_tx, event_rx) = mpsc::channel();
    let coordinator = ShutdownCoordinator::new();
    let sender = worker::spawn(Arc::clone(&transport) as Arc<dyn MailTransport>, event_tx, coordinator.handle());

    let failing = Uuid::new_v4();
    sender
        .send(SendCommand {
            attempt_id: failing,
            payload: common::payload("fail"),
        })
        .await
        .unwrap();
    match recv_outcome(&event_rx) {
        AppEvent::MailFailed { attempt_id } => assert_eq!(attempt_id, failing),
        _ => panic!("expected MailFailed"),
    }

    // One failure does not wedge the worker: the next send goes through.
    let ok = Uuid::new_v4();
    sender
        .send(SendCommand {
            attempt_id: ok,
            payload: common::payload("retry"),
        })
        .await
        .unwrap();
    match recv_outcome(&event_rx) {
        AppEvent::MailSent { attempt_id } => assert_eq!(attempt_id, ok),
        _ => panic!("expected MailSent"),
    }
    assert_eq!(transport.sent_count(), 2);
    coordinator.signal();
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn shutdown_stops_the_worker() {
    let transport = ScriptedTransport::new(vec![]);
    let (event_tx, event_rx) = mpsc::channel();
    let coordinator = ShutdownCoordinator::new();
    let sender = worker::spawn(Arc::clone(&transport) as Arc<dyn MailTransport>, event_tx, coordinator.handle());

    coordinator.signal();
    // Give the worker a moment to observe the signal, then verify nothing
    // is processed or reported anymore.
    tokio::time::sleep(Duration::from_millis(100)).await;
    let _ = sender
        .send(SendCommand {
            attempt_id: Uuid::new_v4(),
            payload: common::payload("late"),
        })
        .await;
    assert!(event_rx.recv_timeout(Duration::from_millis(300)).is_err());
    assert_eq!(transport.sent_count(), 0);
}

// -- app-level round trip ----------------------------------------------

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn form_submission_round_trip_through_the_app() {
    use std::time::Instant;
    use termfolio::ui::app::App;

    let transport = ScriptedTransport::new(vec![Ok(())]);
    let (event_tx, event_rx) = mpsc::channel();
    let coordinator = ShutdownCoordinator::new();
    let sender = worker::spawn(Arc::clone(&transport) as Arc<dyn MailTransport>, event_tx, coordinator.handle());

    let mut app = App::new();
    app.on_resize(40, Instant::now());
    app.set_mail_sender(sender);

    for ch in "Jane".chars() {
        app.contact_type(ch);
    }
    app.contact_focus_next();
    for ch in "jane@example.com".chars() {
        app.contact_type(ch);
    }
    app.contact_focus_next();
    for ch in "Hi".chars() {
        app.contact_type(ch);
    }
    app.contact_focus_next();
    for ch in "Hello there".chars() {
        app.contact_type(ch);
    }

    app.submit_contact();
    assert!(app.contact().is_pending());

    match recv_outcome(&event_rx) {
        AppEvent::MailSent { attempt_id } => {
            app.on_mail_sent(attempt_id, Instant::now());
        }
        _ => panic!("expected MailSent"),
    }
    assert_eq!(app.contact().submission, Submission::Succeeded);
    assert_eq!(app.contact().fields, Fields::default());

    let sent = transport.sent.lock().unwrap();
    assert_eq!(sent[0].from_name, "Jane");
    assert_eq!(sent[0].from_email, "jane@example.com");
    drop(sent);
    coordinator.signal();
}
