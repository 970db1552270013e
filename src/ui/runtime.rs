use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Context;
use ratatui::layout::Rect;

use crate::config::Config;
use crate::mailer::{worker, MailerClient};
use crate::site::SectionId;
use crate::shutdown::ShutdownCoordinator;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::layout::body_rect;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

const TICK_RATE: Duration = Duration::from_millis(50);

pub fn run(config: Config, start: Option<SectionId>) -> anyhow::Result<()> {
    let shutdown = ShutdownCoordinator::new();
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    let transport = Arc::new(
        MailerClient::new(config.mailer.clone()).context("failed to build mail transport")?,
    );

    let (mut terminal, guard) = setup_terminal().context("failed to set up terminal")?;
    let events = EventHandler::new(TICK_RATE, shutdown.handle());
    let mail_tx = {
        // Enter the runtime so the worker can be spawned onto it.
        let _runtime = runtime.enter();
        worker::spawn(transport, events.sender(), shutdown.handle())
    };

    let mut app = App::new();
    app.set_mail_sender(mail_tx);
    if let Ok((cols, rows)) = crossterm::terminal::size() {
        let body = body_rect(Rect {
            x: 0,
            y: 0,
            width: cols,
            height: rows,
        });
        app.on_resize(body.height.max(1), Instant::now());
    }
    if let Some(section) = start {
        app.open_at(section);
    }

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(TICK_RATE) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key, Instant::now()),
            Ok(AppEvent::Tick) => app.on_tick(Instant::now()),
            Ok(AppEvent::Resize(cols, rows)) => {
                let body = body_rect(Rect {
                    x: 0,
                    y: 0,
                    width: cols,
                    height: rows,
                });
                app.on_resize(body.height.max(1), Instant::now());
            }
            Ok(AppEvent::MailSent { attempt_id }) => app.on_mail_sent(attempt_id, Instant::now()),
            Ok(AppEvent::MailFailed { attempt_id }) => app.on_mail_failed(attempt_id),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    // Local, deterministic teardown: the input thread and mail worker both
    // observe the flag, and pending timers die with the App.
    shutdown.signal();
    runtime.shutdown_timeout(Duration::from_secs(1));
    drop(guard);
    Ok(())
}
