use std::mem;

use edgedock_core::{DockWindow, Rect, WindowResult};
use windows::Win32::Foundation::{COLORREF, HWND, RECT};
use windows::Win32::Graphics::Dwm::{DWMWA_EXTENDED_FRAME_BOUNDS, DwmGetWindowAttribute};
use windows::Win32::UI::WindowsAndMessaging::{
    GWL_EXSTYLE, GetWindowLongPtrW, GetWindowRect, GetWindowTextLengthW, GetWindowTextW,
    HWND_NOTOPMOST, HWND_TOPMOST, IsWindow, IsWindowVisible, LWA_ALPHA, SW_HIDE, SW_SHOW,
    SWP_NOACTIVATE, SWP_NOMOVE, SWP_NOSIZE, SWP_NOZORDER, SetLayeredWindowAttributes,
    SetWindowLongPtrW, SetWindowPos, ShowWindow, WS_EX_LAYERED, WS_EX_TOPMOST,
};

use crate::os_error::OsContext;

/// The managed window, wrapping a Win32 `HWND`.
///
/// Positions are those of the visible frame. Windows 10/11 draw an
/// invisible resize border around most windows; it is excluded from
/// `bounds` and compensated for in `set_position`, so a window flush
/// with an edge looks flush.
#[derive(Debug, Clone, Copy)]
pub struct Window {
    hwnd: HWND,
}

impl Window {
    pub fn new(hwnd: HWND) -> Self {
        Self { hwnd }
    }

    pub fn hwnd(&self) -> HWND {
        self.hwnd
    }

    /// The handle as a plain integer, for event filtering and logs.
    pub fn handle(&self) -> usize {
        self.hwnd.0 as usize
    }

    pub fn title(&self) -> String {
        // SAFETY: both calls only read the window text of a valid HWND.
        unsafe {
            let length = GetWindowTextLengthW(self.hwnd);
            if length <= 0 {
                return String::new();
            }
            let mut buffer = vec![0u16; length as usize + 1];
            let copied = GetWindowTextW(self.hwnd, &mut buffer);
            String::from_utf16_lossy(&buffer[..copied.max(0) as usize])
        }
    }

    fn ex_style(&self) -> u32 {
        // SAFETY: reading the extended style of a window has no side effects.
        unsafe { GetWindowLongPtrW(self.hwnd, GWL_EXSTYLE) as u32 }
    }

    fn outer_rect(&self) -> WindowResult<RECT> {
        let mut rect = RECT::default();
        // SAFETY: GetWindowRect fills a caller-owned RECT.
        unsafe { GetWindowRect(self.hwnd, &mut rect) }.os_context("GetWindowRect")?;
        Ok(rect)
    }

    /// Bounds without the invisible resize border. Falls back to the
    /// outer rect when DWM is unavailable.
    fn frame_rect(&self) -> WindowResult<RECT> {
        let mut frame = RECT::default();
        // SAFETY: the buffer is a RECT and its size is passed alongside.
        let dwm = unsafe {
            DwmGetWindowAttribute(
                self.hwnd,
                DWMWA_EXTENDED_FRAME_BOUNDS,
                &mut frame as *mut RECT as *mut _,
                mem::size_of::<RECT>() as u32,
            )
        };
        match dwm {
            Ok(()) => Ok(frame),
            Err(_) => self.outer_rect(),
        }
    }

    fn set_topmost(&self, on_top: bool) -> WindowResult<()> {
        let after = if on_top { HWND_TOPMOST } else { HWND_NOTOPMOST };
        // SAFETY: only the z-order changes; position and size are kept.
        unsafe {
            SetWindowPos(
                self.hwnd,
                Some(after),
                0,
                0,
                0,
                0,
                SWP_NOMOVE | SWP_NOSIZE | SWP_NOACTIVATE,
            )
        }
        .os_context("SetWindowPos")
    }

    fn apply_alpha(&self, opacity: f64) -> WindowResult<()> {
        let style = self.ex_style();
        if opacity >= 1.0 && style & WS_EX_LAYERED.0 == 0 {
            return Ok(());
        }
        if style & WS_EX_LAYERED.0 == 0 {
            // SAFETY: adds the layered bit to the window's own style.
            unsafe {
                SetWindowLongPtrW(
                    self.hwnd,
                    GWL_EXSTYLE,
                    (style | WS_EX_LAYERED.0) as isize,
                );
            }
        }
        let alpha = (opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
        // SAFETY: the window is layered at this point.
        unsafe { SetLayeredWindowAttributes(self.hwnd, COLORREF(0), alpha, LWA_ALPHA) }
            .os_context("SetLayeredWindowAttributes")
    }
}

impl DockWindow for Window {
    fn bounds(&self) -> Rect {
        match self.frame_rect() {
            Ok(r) => Rect::new(r.left, r.top, r.right - r.left, r.bottom - r.top),
            Err(e) => {
                tracing::warn!("bounds of 0x{:X}: {e}", self.handle());
                Rect::default()
            }
        }
    }

    fn set_position(&mut self, x: i32, y: i32) {
        let offset = match (self.outer_rect(), self.frame_rect()) {
            (Ok(outer), Ok(frame)) => (frame.left - outer.left, frame.top - outer.top),
            _ => (0, 0),
        };
        // SAFETY: moves the window without resizing, reordering or activating it.
        let moved = unsafe {
            SetWindowPos(
                self.hwnd,
                None,
                x - offset.0,
                y - offset.1,
                0,
                0,
                SWP_NOSIZE | SWP_NOZORDER | SWP_NOACTIVATE,
            )
        };
        if let Err(e) = moved.os_context("SetWindowPos") {
            tracing::warn!("move 0x{:X} to {x},{y}: {e}", self.handle());
        }
    }

    fn show(&mut self) {
        // SAFETY: ShowWindow returns the previous visibility, not an error.
        unsafe {
            let _ = ShowWindow(self.hwnd, SW_SHOW);
        }
    }

    fn hide(&mut self) {
        // SAFETY: hides without destroying; the HWND stays valid.
        unsafe {
            let _ = ShowWindow(self.hwnd, SW_HIDE);
        }
    }

    fn is_visible(&self) -> bool {
        // SAFETY: simple query.
        unsafe { IsWindowVisible(self.hwnd).as_bool() }
    }

    fn is_destroyed(&self) -> bool {
        // SAFETY: IsWindow accepts stale handles and reports them as invalid.
        unsafe { !IsWindow(Some(self.hwnd)).as_bool() }
    }

    fn set_always_on_top(&mut self, on_top: bool) {
        if let Err(e) = self.set_topmost(on_top) {
            tracing::warn!("always-on-top={on_top} for 0x{:X}: {e}", self.handle());
        }
    }

    fn is_always_on_top(&self) -> bool {
        self.ex_style() & WS_EX_TOPMOST.0 != 0
    }

    fn set_opacity(&mut self, opacity: f64) {
        if let Err(e) = self.apply_alpha(opacity) {
            tracing::warn!("opacity {opacity} for 0x{:X}: {e}", self.handle());
        }
    }
}
