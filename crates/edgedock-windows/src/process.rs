use windows::Win32::Foundation::{CloseHandle, HANDLE, HWND};
use windows::Win32::System::Threading::{
    OpenProcess, PROCESS_ACCESS_RIGHTS, PROCESS_QUERY_LIMITED_INFORMATION, PROCESS_TERMINATE,
    TerminateProcess,
};
use windows::Win32::UI::WindowsAndMessaging::GetWindowThreadProcessId;

/// Owns a process handle and closes it on drop.
struct ProcessHandle(HANDLE);

impl ProcessHandle {
    fn open(access: PROCESS_ACCESS_RIGHTS, pid: u32) -> Option<Self> {
        // SAFETY: OpenProcess fails cleanly for unknown PIDs.
        unsafe { OpenProcess(access, false, pid) }.ok().map(Self)
    }
}

impl Drop for ProcessHandle {
    fn drop(&mut self) {
        // SAFETY: the handle is owned exclusively by this guard.
        unsafe {
            let _ = CloseHandle(self.0);
        }
    }
}

/// Checks whether a process with the given PID is still alive.
///
/// Used to tell a stale PID file from a daemon that stopped answering.
pub fn is_process_alive(pid: u32) -> bool {
    ProcessHandle::open(PROCESS_QUERY_LIMITED_INFORMATION, pid).is_some()
}

/// Forcibly terminates a process. Returns `false` if it could not be
/// opened or terminated.
pub fn kill_process(pid: u32) -> bool {
    let Some(process) = ProcessHandle::open(PROCESS_TERMINATE, pid) else {
        return false;
    };
    // SAFETY: the handle was opened with PROCESS_TERMINATE.
    unsafe { TerminateProcess(process.0, 1) }.is_ok()
}

/// PID of the process that owns `hwnd`, or 0 if unknown.
pub fn window_pid(hwnd: HWND) -> u32 {
    let mut pid = 0u32;
    // SAFETY: writes the owning PID into a caller-owned u32.
    unsafe {
        GetWindowThreadProcessId(hwnd, Some(&mut pid));
    }
    pid
}
