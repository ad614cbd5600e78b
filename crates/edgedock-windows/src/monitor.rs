use std::mem;

use edgedock_core::{Desktop, Point, Rect, WindowResult};
use windows::Win32::Foundation::{HWND, LPARAM, POINT, RECT};
use windows::Win32::Graphics::Gdi::{
    EnumDisplayMonitors, GetMonitorInfoW, HDC, HMONITOR, MONITOR_DEFAULTTOPRIMARY, MONITORINFO,
    MonitorFromWindow,
};
use windows::Win32::UI::WindowsAndMessaging::GetCursorPos;
use windows::core::BOOL;

use crate::os_error::OsContext;

/// `dwFlags` bit marking the primary display.
const MONITORINFOF_PRIMARY: u32 = 0x1;

/// One connected display.
#[derive(Debug, Clone, Copy)]
pub struct MonitorInfo {
    pub bounds: Rect,
    pub work_area: Rect,
    pub primary: bool,
}

/// The live Win32 desktop. Every query goes to the OS, so hot-plugged
/// displays and taskbar moves are picked up immediately.
#[derive(Debug, Default, Clone, Copy)]
pub struct Win32Desktop;

impl Desktop for Win32Desktop {
    fn cursor_position(&self) -> Point {
        let mut p = POINT::default();
        // SAFETY: GetCursorPos fills a caller-owned POINT.
        match unsafe { GetCursorPos(&mut p) }.os_context("GetCursorPos") {
            Ok(()) => Point::new(p.x, p.y),
            Err(e) => {
                tracing::warn!("{e}");
                Point::default()
            }
        }
    }

    fn displays(&self) -> Vec<Rect> {
        enumerate_monitors()
            .into_iter()
            .map(|m| m.bounds)
            .collect()
    }

    fn work_area(&self) -> Rect {
        primary_work_area().unwrap_or_else(|e| {
            tracing::warn!("work area: {e}");
            Rect::default()
        })
    }
}

/// Lists every display, primary first.
pub fn enumerate_monitors() -> Vec<MonitorInfo> {
    let mut monitors: Vec<MonitorInfo> = Vec::new();

    // SAFETY: the callback only runs during this call, so the pointer to
    // `monitors` stays valid for every invocation.
    unsafe {
        let _ = EnumDisplayMonitors(
            None,
            None,
            Some(enum_monitor_callback),
            LPARAM(&mut monitors as *mut _ as isize),
        );
    }

    monitors.sort_by_key(|m| !m.primary);
    monitors
}

unsafe extern "system" fn enum_monitor_callback(
    monitor: HMONITOR,
    _hdc: HDC,
    _clip: *mut RECT,
    lparam: LPARAM,
) -> BOOL {
    // SAFETY: lparam carries the Vec passed by enumerate_monitors().
    let monitors = unsafe { &mut *(lparam.0 as *mut Vec<MonitorInfo>) };
    match monitor_info(monitor) {
        Ok(info) => monitors.push(info),
        Err(e) => tracing::warn!("skipping display: {e}"),
    }
    BOOL(1)
}

/// Returns the work area of the primary display, excluding the taskbar.
pub fn primary_work_area() -> WindowResult<Rect> {
    // SAFETY: a null HWND with MONITOR_DEFAULTTOPRIMARY yields the primary display.
    let monitor = unsafe { MonitorFromWindow(HWND::default(), MONITOR_DEFAULTTOPRIMARY) };
    Ok(monitor_info(monitor)?.work_area)
}

fn monitor_info(monitor: HMONITOR) -> WindowResult<MonitorInfo> {
    let mut info = MONITORINFO {
        cbSize: mem::size_of::<MONITORINFO>() as u32,
        ..Default::default()
    };

    // SAFETY: cbSize is set as the API requires.
    if !unsafe { GetMonitorInfoW(monitor, &mut info) }.as_bool() {
        return Err(edgedock_core::Error::Os("GetMonitorInfoW failed".into()));
    }

    Ok(MonitorInfo {
        bounds: to_rect(info.rcMonitor),
        work_area: to_rect(info.rcWork),
        primary: info.dwFlags & MONITORINFOF_PRIMARY != 0,
    })
}

fn to_rect(rc: RECT) -> Rect {
    Rect::new(rc.left, rc.top, rc.right - rc.left, rc.bottom - rc.top)
}
