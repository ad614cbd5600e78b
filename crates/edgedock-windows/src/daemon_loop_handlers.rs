use std::time::Instant;

use edgedock_core::ipc::{Command, DockReport, Response};
use edgedock_core::{Action, WindowEvent};

use super::daemon_loop::DockSession;

pub(super) fn handle_event(event: WindowEvent, session: &mut DockSession, now: Instant) {
    if event != WindowEvent::Moved {
        tracing::debug!(?event, "window event");
    }
    session.controller.handle_event(event, now);
    if event == WindowEvent::Closed {
        tracing::info!("docked window closed, waiting for it to reappear");
        session.release_window(now);
    }
}

pub(super) fn handle_action(action: &Action, session: &mut DockSession, now: Instant) {
    tracing::debug!(?action, "action");
    session.controller.apply(action, now);
}

pub(super) fn handle_command(
    command: &Command,
    session: &mut DockSession,
    now: Instant,
) -> Response {
    match command {
        Command::Stop => {
            tracing::info!("stop command received, shutting down");
            Response::ok_with_message("Daemon stopping")
        }
        Command::Status => Response::ok_with_report(status_report(session)),
        Command::Action { action } => {
            if session.controller.window().is_none() {
                return Response::error(format!(
                    "no window titled {:?} is docked",
                    session.title()
                ));
            }
            handle_action(action, session, now);
            Response::ok()
        }
    }
}

fn status_report(session: &DockSession) -> DockReport {
    let controller = &session.controller;
    DockReport::new(
        controller.window().map(|w| w.title()),
        controller.state(),
        controller.is_pinned(),
        controller.status(),
    )
}
