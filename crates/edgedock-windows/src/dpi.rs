use windows::Win32::UI::HiDpi::{
    DPI_AWARENESS_CONTEXT_PER_MONITOR_AWARE_V2, SetProcessDpiAwarenessContext,
};

/// Declares the daemon per-monitor DPI aware (V2).
///
/// Without it Windows virtualizes coordinates against the primary
/// display's scale, and edge detection is off by the scale factor on
/// mixed-DPI setups. Must run before any other Win32 call.
pub fn enable_dpi_awareness() {
    // SAFETY: fails harmlessly if awareness was already set by a manifest.
    if unsafe { SetProcessDpiAwarenessContext(DPI_AWARENESS_CONTEXT_PER_MONITOR_AWARE_V2) }.is_err()
    {
        tracing::debug!("DPI awareness already set");
    }
}
