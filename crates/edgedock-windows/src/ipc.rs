use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::os::windows::io::FromRawHandle;

use edgedock_core::ipc::{Command, PIPE_NAME, Response};
use edgedock_core::{Error, WindowResult};
use serde::Serialize;
use serde::de::DeserializeOwned;
use windows::Win32::Foundation::{
    CloseHandle, DUPLICATE_SAME_ACCESS, DuplicateHandle, HANDLE, INVALID_HANDLE_VALUE,
};
use windows::Win32::Storage::FileSystem::{
    CreateFileW, FILE_SHARE_NONE, FlushFileBuffers, OPEN_EXISTING, PIPE_ACCESS_DUPLEX,
};
use windows::Win32::System::Pipes::{
    ConnectNamedPipe, CreateNamedPipeW, DisconnectNamedPipe, PIPE_READMODE_BYTE, PIPE_TYPE_BYTE,
    PIPE_UNLIMITED_INSTANCES, PIPE_WAIT, WaitNamedPipeW,
};
use windows::Win32::System::Threading::GetCurrentProcess;
use windows::core::HSTRING;

use crate::os_error::OsContext;

const GENERIC_READ_WRITE: u32 = 0x80000000 | 0x40000000;

/// The daemon's end of the named pipe.
///
/// Each connection carries exactly one newline-terminated JSON command
/// and one JSON response.
pub struct PipeServer {
    handle: HANDLE,
}

impl PipeServer {
    /// Creates the pipe without waiting for a connection.
    pub fn create() -> WindowResult<Self> {
        let pipe_name = HSTRING::from(PIPE_NAME);

        // SAFETY: the result is checked against INVALID_HANDLE_VALUE.
        let handle = unsafe {
            CreateNamedPipeW(
                &pipe_name,
                PIPE_ACCESS_DUPLEX,
                PIPE_TYPE_BYTE | PIPE_READMODE_BYTE | PIPE_WAIT,
                PIPE_UNLIMITED_INSTANCES,
                1024,
                1024,
                0,
                None,
            )
        };

        if handle == INVALID_HANDLE_VALUE {
            return Err(Error::Os(format!("CreateNamedPipeW({PIPE_NAME}) failed")));
        }

        Ok(Self { handle })
    }

    /// Blocks until a client connects and returns its command.
    pub fn accept_command(&self) -> WindowResult<Command> {
        // SAFETY: blocks on our own pipe handle until a client connects.
        unsafe { ConnectNamedPipe(self.handle, None) }.os_context("ConnectNamedPipe")?;
        read_message(self.handle)
    }

    /// Writes the response, waits for the client to drain it, and
    /// disconnects so the next client can connect.
    pub fn send_response(&self, response: &Response) -> WindowResult<()> {
        write_message(self.handle, response)?;

        // SAFETY: waits until the client has read everything.
        // DisconnectNamedPipe would otherwise discard unread bytes.
        unsafe {
            let _ = FlushFileBuffers(self.handle);
        }

        // SAFETY: disconnects the server side of our own pipe.
        unsafe { DisconnectNamedPipe(self.handle) }.os_context("DisconnectNamedPipe")
    }
}

impl Drop for PipeServer {
    fn drop(&mut self) {
        // SAFETY: the server owns its handle.
        unsafe {
            let _ = CloseHandle(self.handle);
        }
    }
}

/// Closes a HANDLE on drop.
struct HandleGuard(HANDLE);

impl Drop for HandleGuard {
    fn drop(&mut self) {
        // SAFETY: the guard owns this handle exclusively.
        unsafe {
            let _ = CloseHandle(self.0);
        }
    }
}

/// Sends one command to the daemon and waits for its response.
pub fn send_command(command: &Command) -> WindowResult<Response> {
    let pipe_name = HSTRING::from(PIPE_NAME);

    // SAFETY: opens an existing pipe as a client.
    let handle = unsafe {
        CreateFileW(
            &pipe_name,
            GENERIC_READ_WRITE,
            FILE_SHARE_NONE,
            None,
            OPEN_EXISTING,
            Default::default(),
            None,
        )
    }
    .os_context("CreateFileW")?;

    let _guard = HandleGuard(handle);

    write_message(handle, command)?;
    read_message(handle)
}

/// Whether a daemon is listening on the pipe.
///
/// `WaitNamedPipeW` with a 1 ms timeout checks for the pipe without
/// consuming a connection.
pub fn is_daemon_running() -> bool {
    let pipe_name = HSTRING::from(PIPE_NAME);

    // SAFETY: read-only check with a near-zero timeout.
    unsafe { WaitNamedPipeW(&pipe_name, 1).as_bool() }
}

fn read_message<T: DeserializeOwned>(handle: HANDLE) -> WindowResult<T> {
    let mut reader = BufReader::new(duplicate_handle_as_file(handle)?);
    let mut line = String::new();
    reader.read_line(&mut line)?;
    Ok(serde_json::from_str(line.trim())?)
}

fn write_message<T: Serialize>(handle: HANDLE, message: &T) -> WindowResult<()> {
    let mut writer = duplicate_handle_as_file(handle)?;
    let json = serde_json::to_string(message)?;
    writeln!(writer, "{json}")?;
    writer.flush()?;
    Ok(())
}

/// Wraps a duplicate of `handle` as a `File` so the File and the
/// original can be closed independently.
fn duplicate_handle_as_file(handle: HANDLE) -> WindowResult<File> {
    let mut dup = HANDLE::default();

    // SAFETY: the duplicate is owned by the returned File.
    unsafe {
        DuplicateHandle(
            GetCurrentProcess(),
            handle,
            GetCurrentProcess(),
            &mut dup,
            0,
            false,
            DUPLICATE_SAME_ACCESS,
        )
        .os_context("DuplicateHandle")?;

        Ok(File::from_raw_handle(dup.0))
    }
}
