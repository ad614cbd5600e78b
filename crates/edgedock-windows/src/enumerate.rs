use edgedock_core::{Error, WindowResult};
use windows::Win32::Foundation::{HWND, LPARAM};
use windows::Win32::UI::WindowsAndMessaging::{EnumWindows, GW_OWNER, GetWindow};
use windows::core::BOOL;

use crate::os_error::OsContext;
use crate::window::Window;

/// Finds the first top-level window whose title contains `title`,
/// ignoring case.
///
/// Hidden windows are included: a docked window parked off-screen is
/// OS-hidden and must still be found after a daemon restart. Tool
/// windows are included too, since a docked window usually is one.
pub fn find_window(title: &str) -> WindowResult<Window> {
    find_among(top_level_windows()?, title, std::process::id())
}

/// Picks the first unowned window matching `title`, skipping those of
/// process `own_pid`.
fn find_among(windows: Vec<Window>, title: &str, own_pid: u32) -> WindowResult<Window> {
    let needle = title.to_lowercase();
    windows
        .into_iter()
        .filter(|w| is_unowned(w.hwnd()))
        .filter(|w| crate::process::window_pid(w.hwnd()) != own_pid)
        .find(|w| w.title().to_lowercase().contains(&needle))
        .ok_or_else(|| Error::WindowNotFound(title.to_string()))
}

/// Every top-level window, in z-order.
pub fn top_level_windows() -> WindowResult<Vec<Window>> {
    let mut windows: Vec<Window> = Vec::new();

    // SAFETY: EnumWindows runs the callback synchronously, so the Vec
    // behind the LPARAM outlives every invocation.
    unsafe {
        EnumWindows(
            Some(enum_window_callback),
            LPARAM(&mut windows as *mut _ as isize),
        )
    }
    .os_context("EnumWindows")?;

    Ok(windows)
}

unsafe extern "system" fn enum_window_callback(hwnd: HWND, lparam: LPARAM) -> BOOL {
    // SAFETY: lparam is the Vec passed by top_level_windows().
    let windows = unsafe { &mut *(lparam.0 as *mut Vec<Window>) };
    windows.push(Window::new(hwnd));
    BOOL(1)
}

/// Owned windows (tooltips, dialogs) often share the app's title.
fn is_unowned(hwnd: HWND) -> bool {
    // SAFETY: read-only query on a handle EnumWindows just gave us.
    unsafe { GetWindow(hwnd, GW_OWNER).is_err() }
}

#[cfg(test)]
mod tests {
    use windows::Win32::UI::WindowsAndMessaging::{
        CreateWindowExW, DestroyWindow, WINDOW_STYLE, WS_EX_TOOLWINDOW,
    };
    use windows::core::{HSTRING, w};

    use super::*;

    #[test]
    fn hidden_tool_window_is_found_by_title() {
        // Arrange
        let title = format!("edgedock-tool-window-{}", std::process::id());
        // SAFETY: a plain STATIC window, destroyed before the test returns.
        let hwnd = unsafe {
            CreateWindowExW(
                WS_EX_TOOLWINDOW,
                w!("STATIC"),
                &HSTRING::from(title.as_str()),
                WINDOW_STYLE(0),
                0,
                0,
                320,
                290,
                None,
                None,
                None,
                None,
            )
        }
        .unwrap();

        // Act
        let found = find_among(top_level_windows().unwrap(), &title, 0);

        // Assert
        // SAFETY: hwnd was created above and is not used afterwards.
        unsafe { DestroyWindow(hwnd) }.unwrap();
        assert_eq!(found.unwrap().hwnd(), hwnd);
    }
}
