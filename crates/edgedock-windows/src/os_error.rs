use edgedock_core::{Error, WindowResult};

/// Attaches the failing call's name to a Win32 error.
pub(crate) trait OsContext<T> {
    fn os_context(self, call: &str) -> WindowResult<T>;
}

impl<T> OsContext<T> for windows::core::Result<T> {
    fn os_context(self, call: &str) -> WindowResult<T> {
        self.map_err(|e| Error::Os(format!("{call}: {e}")))
    }
}
