use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::time::{Duration, Instant};

use edgedock_core::config::{self, Keybinding};
use edgedock_core::ipc::Command;
use edgedock_core::{Action, DockController, DockWindow, WindowEvent, WindowResult};

use crate::enumerate;
use crate::event_loop::{self, EventLoopHandle};
use crate::monitor::Win32Desktop;
use crate::window::Window;

use super::daemon_loop_handlers;
use super::daemon_threads;
use super::daemon_types::DaemonMsg;

/// How often to look for the target window while it is missing.
const SEARCH_INTERVAL: Duration = Duration::from_secs(1);

/// Upper bound on a single shutdown reveal.
const SHUTDOWN_REVEAL_LIMIT: Duration = Duration::from_secs(2);

/// The controller plus the OS hooks bound to its current window.
///
/// The WinEvent hook filters on one HWND, so it is restarted each
/// time the target window is (re)discovered.
pub(super) struct DockSession {
    pub(super) controller: DockController<Window, Win32Desktop>,
    event_loop: Option<EventLoopHandle>,
    event_tx: Sender<WindowEvent>,
    action_tx: Sender<Action>,
    title: String,
    hotkey: Option<Keybinding>,
    next_search: Instant,
}

impl DockSession {
    /// Looks for the target window if none is attached and the search
    /// interval has elapsed.
    pub(super) fn ensure_window(&mut self, now: Instant) {
        if self.controller.window().is_some() || now < self.next_search {
            return;
        }
        self.next_search = now + SEARCH_INTERVAL;

        let window = match enumerate::find_window(&self.title) {
            Ok(w) => w,
            Err(e) => {
                tracing::debug!("{e}");
                return;
            }
        };

        match event_loop::start(
            &window,
            self.event_tx.clone(),
            self.action_tx.clone(),
            self.hotkey.clone(),
        ) {
            Ok(handle) => {
                tracing::info!("docking {:?} (0x{:X})", window.title(), window.handle());
                self.event_loop = Some(handle);
                self.controller.attach(window);
            }
            Err(e) => tracing::error!("failed to start event loop: {e}"),
        }
    }

    /// Drops the hooks for a window that went away.
    pub(super) fn release_window(&mut self, now: Instant) {
        if let Some(handle) = self.event_loop.take() {
            handle.stop();
        }
        self.next_search = now;
    }

    pub(super) fn title(&self) -> &str {
        &self.title
    }

    /// The next time the main loop must wake up without a message.
    fn next_deadline(&self) -> Instant {
        match self.controller.window() {
            Some(_) => self
                .controller
                .next_deadline()
                .unwrap_or_else(|| Instant::now() + self.controller.settings().poll.interval),
            None => self.next_search,
        }
    }

    /// Brings a parked window back on screen so it is not stranded
    /// off-screen after the daemon exits.
    fn restore(&mut self) {
        let start = Instant::now();
        self.controller.show_window(start);
        while self.controller.state().is_animating {
            let now = Instant::now();
            if now.duration_since(start) > SHUTDOWN_REVEAL_LIMIT {
                break;
            }
            if let Some(deadline) = self.controller.next_deadline() {
                std::thread::sleep(deadline.saturating_duration_since(now));
            }
            self.controller.tick(Instant::now());
        }
        if let Some(window) = self.controller.window()
            && !window.is_visible()
        {
            tracing::warn!("window was left hidden on shutdown");
        }
    }

    fn shutdown(mut self) {
        self.restore();
        self.controller.detach();
        if let Some(handle) = self.event_loop.take() {
            handle.stop();
        }
    }
}

/// The inner daemon loop, separated so cleanup always runs in `run()`.
pub(super) fn daemon_loop() -> WindowResult<()> {
    let config = config::load();
    edgedock_core::log::init(&config.logging);

    tracing::info!("daemon started (PID: {})", std::process::id());
    tracing::info!(
        "config: title={:?}, threshold={}, pull_tab={}, steps={}, duration={}ms",
        config.window.title,
        config.dock.near_edge_threshold,
        config.dock.pull_tab,
        config.animation.steps,
        config.animation.duration_ms,
    );

    let hotkey = match config.keybinding() {
        Ok(binding) => binding,
        Err(e) => {
            tracing::warn!("ignoring hotkey: {e}");
            None
        }
    };

    let (tx, rx) = mpsc::channel::<DaemonMsg>();
    let (event_tx, event_rx) = mpsc::channel();
    let (action_tx, action_rx) = mpsc::channel();

    let event_bridge = daemon_threads::spawn_event_bridge(event_rx, tx.clone());
    let action_bridge = daemon_threads::spawn_action_bridge(action_rx, tx.clone());
    let ipc_thread = daemon_threads::spawn_ipc_listener(tx.clone());

    let mut session = DockSession {
        controller: DockController::new(Win32Desktop, config.dock_settings()),
        event_loop: None,
        event_tx,
        action_tx,
        title: config.window.title.clone(),
        hotkey,
        next_search: Instant::now(),
    };
    session.ensure_window(Instant::now());
    if session.controller.window().is_none() {
        tracing::info!("waiting for a window titled {:?}", session.title());
    }

    // Main processing loop: wake on a message or the next timer deadline.
    loop {
        let now = Instant::now();
        let timeout = session.next_deadline().saturating_duration_since(now);

        match rx.recv_timeout(timeout) {
            Ok(DaemonMsg::Event(event)) => {
                daemon_loop_handlers::handle_event(event, &mut session, Instant::now());
            }
            Ok(DaemonMsg::Action(action)) => {
                daemon_loop_handlers::handle_action(&action, &mut session, Instant::now());
            }
            Ok(DaemonMsg::Command(command, reply_tx)) => {
                let response =
                    daemon_loop_handlers::handle_command(&command, &mut session, Instant::now());
                let _ = reply_tx.send(response);
                if matches!(command, Command::Stop) {
                    break;
                }
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }

        let now = Instant::now();
        session.controller.tick(now);
        session.ensure_window(now);
    }

    session.shutdown();
    drop(tx);
    let _ = event_bridge.join();
    let _ = action_bridge.join();
    let _ = ipc_thread.join();

    tracing::info!("daemon stopped");
    Ok(())
}
