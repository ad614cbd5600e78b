use windows::Win32::UI::WindowsAndMessaging::{
    DispatchMessageW, GetMessageW, MSG, TranslateMessage, WM_HOTKEY,
};

use crate::hotkey::HotkeyManager;

/// Pumps messages until `WM_QUIT`. WinEvent callbacks run from inside
/// `GetMessageW`; hotkeys arrive as `WM_HOTKEY` thread messages.
pub(crate) fn run_message_pump(hotkeys: &HotkeyManager) {
    let mut msg = MSG::default();

    // SAFETY: standard message loop over this thread's queue.
    while unsafe { GetMessageW(&mut msg, None, 0, 0).as_bool() } {
        if msg.message == WM_HOTKEY {
            hotkeys.dispatch(msg.wParam.0 as i32);
            continue;
        }

        unsafe {
            let _ = TranslateMessage(&msg);
            DispatchMessageW(&msg);
        }
    }
}
