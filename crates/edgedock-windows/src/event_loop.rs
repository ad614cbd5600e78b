use std::cell::RefCell;
use std::sync::mpsc::{self, Sender};
use std::thread;

use edgedock_core::config::Keybinding;
use edgedock_core::{Action, Error, WindowEvent, WindowResult};
use windows::Win32::Foundation::{LPARAM, WPARAM};
use windows::Win32::System::Threading::GetCurrentThreadId;
use windows::Win32::UI::Accessibility::{SetWinEventHook, UnhookWinEvent};
use windows::Win32::UI::WindowsAndMessaging::{
    EVENT_OBJECT_LOCATIONCHANGE, EVENT_SYSTEM_FOREGROUND, GetForegroundWindow, PostThreadMessageW,
    WINEVENT_OUTOFCONTEXT, WINEVENT_SKIPOWNPROCESS, WM_QUIT,
};

use crate::event::EventFilter;
use crate::hotkey::HotkeyManager;
use crate::window::Window;

#[path = "event_loop_message_pump.rs"]
mod message_pump;
#[path = "event_loop_win_event.rs"]
mod win_event;

/// Per-thread state reached from the WinEvent callback.
struct HookState {
    sender: Sender<WindowEvent>,
    filter: EventFilter,
}

thread_local! {
    static HOOK_STATE: RefCell<Option<HookState>> = const { RefCell::new(None) };
}

/// Starts the Win32 event loop on a new thread.
///
/// Installs a WinEvent hook that reports focus, move and destroy
/// events for `window`, and registers the global hotkey if one is
/// configured. Both are tied to the new thread's message queue.
pub fn start(
    window: &Window,
    event_tx: Sender<WindowEvent>,
    action_tx: Sender<Action>,
    hotkey: Option<Keybinding>,
) -> WindowResult<EventLoopHandle> {
    let (ready_tx, ready_rx) = mpsc::channel::<Result<u32, String>>();
    let target = window.handle();

    let handle = thread::spawn(move || {
        // SAFETY: simple query of the current foreground window.
        let focused = unsafe { GetForegroundWindow() }.0 as usize == target;
        HOOK_STATE.with(|cell| {
            *cell.borrow_mut() = Some(HookState {
                sender: event_tx,
                filter: EventFilter::new(target, focused),
            });
        });

        // SAFETY: returns the id of the thread we are running on.
        let thread_id = unsafe { GetCurrentThreadId() };

        // SAFETY: out-of-context hooks call back on this thread while it
        // pumps messages. The range spans foreground through location
        // changes, which includes EVENT_OBJECT_DESTROY.
        let hook = unsafe {
            SetWinEventHook(
                EVENT_SYSTEM_FOREGROUND,
                EVENT_OBJECT_LOCATIONCHANGE,
                None,
                Some(win_event::win_event_proc),
                0,
                0,
                WINEVENT_OUTOFCONTEXT | WINEVENT_SKIPOWNPROCESS,
            )
        };

        if hook.is_invalid() {
            let _ = ready_tx.send(Err("failed to set WinEvent hook".to_string()));
            return;
        }

        let mut hotkeys = HotkeyManager::new(action_tx);
        if let Some(binding) = &hotkey {
            hotkeys.register_from_config(std::slice::from_ref(binding));
        }

        let _ = ready_tx.send(Ok(thread_id));

        message_pump::run_message_pump(&hotkeys);

        drop(hotkeys);
        // SAFETY: the hook was installed above and is released once.
        unsafe {
            let _ = UnhookWinEvent(hook);
        }
        HOOK_STATE.with(|cell| cell.borrow_mut().take());
    });

    let thread_id = ready_rx
        .recv()
        .map_err(|_| Error::Other("event loop thread exited unexpectedly".into()))?
        .map_err(Error::Os)?;

    tracing::debug!(thread_id, "event loop started");
    Ok(EventLoopHandle { thread_id, handle })
}

/// Handle for stopping the event loop from the daemon.
pub struct EventLoopHandle {
    thread_id: u32,
    handle: thread::JoinHandle<()>,
}

impl EventLoopHandle {
    /// Signals the event loop to stop and waits for the thread to finish.
    pub fn stop(self) {
        // SAFETY: posting WM_QUIT to our own event thread ends its pump.
        unsafe {
            let _ = PostThreadMessageW(self.thread_id, WM_QUIT, WPARAM(0), LPARAM(0));
        }
        let _ = self.handle.join();
    }
}
