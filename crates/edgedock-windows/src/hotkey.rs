use std::sync::mpsc::Sender;

use edgedock_core::Action;
use edgedock_core::config::{Keybinding, Modifier};
use windows::Win32::UI::Input::KeyboardAndMouse::{
    HOT_KEY_MODIFIERS, MOD_ALT, MOD_CONTROL, MOD_NOREPEAT, MOD_SHIFT, MOD_WIN, RegisterHotKey,
    UnregisterHotKey,
};

use crate::keys;

/// A registered global hotkey.
struct Hotkey {
    id: i32,
    action: Action,
}

/// Manages global hotkey registrations.
///
/// Hotkeys are registered on the current thread's message queue.
/// `WM_HOTKEY` messages arrive via the Win32 message pump running
/// on the same thread.
pub struct HotkeyManager {
    hotkeys: Vec<Hotkey>,
    sender: Sender<Action>,
}

impl HotkeyManager {
    /// Actions triggered by hotkeys are sent through `sender`.
    pub fn new(sender: Sender<Action>) -> Self {
        Self {
            hotkeys: Vec::new(),
            sender,
        }
    }

    /// Registers keybindings from configuration.
    ///
    /// Unknown key names and registrations the OS refuses (usually
    /// because another program owns the combination) are logged and
    /// skipped. The dock keeps working without its hotkey.
    pub fn register_from_config(&mut self, bindings: &[Keybinding]) {
        for (i, binding) in bindings.iter().enumerate() {
            let id = (i + 1) as i32;

            let Some(vk) = keys::vk_from_name(&binding.key) else {
                tracing::warn!("unknown key name in hotkey {binding}");
                continue;
            };

            let mut modifiers = MOD_NOREPEAT;
            for m in &binding.modifiers {
                modifiers |= modifier_to_flag(*m);
            }

            if self.register(id, modifiers, vk, binding.action.clone()) {
                tracing::info!("registered hotkey {binding}");
            } else {
                tracing::warn!("failed to register hotkey {binding}; it may be in use");
            }
        }
    }

    /// Dispatches a `WM_HOTKEY` message by hotkey ID.
    pub fn dispatch(&self, hotkey_id: i32) {
        if let Some(hotkey) = self.hotkeys.iter().find(|h| h.id == hotkey_id) {
            let _ = self.sender.send(hotkey.action.clone());
        }
    }

    fn register(&mut self, id: i32, modifiers: HOT_KEY_MODIFIERS, vk: u32, action: Action) -> bool {
        // SAFETY: registers on the current thread's queue with an id
        // unique to this manager.
        if unsafe { RegisterHotKey(None, id, modifiers, vk) }.is_err() {
            return false;
        }
        self.hotkeys.push(Hotkey { id, action });
        true
    }
}

impl Drop for HotkeyManager {
    fn drop(&mut self) {
        for hotkey in &self.hotkeys {
            // SAFETY: removes a registration made by this manager.
            unsafe {
                let _ = UnregisterHotKey(None, hotkey.id);
            }
        }
    }
}

fn modifier_to_flag(modifier: Modifier) -> HOT_KEY_MODIFIERS {
    match modifier {
        Modifier::Alt => MOD_ALT,
        Modifier::Shift => MOD_SHIFT,
        Modifier::Ctrl => MOD_CONTROL,
        Modifier::Win => MOD_WIN,
    }
}
