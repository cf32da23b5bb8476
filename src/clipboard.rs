#[cfg(target_os = "linux")]
use std::time::{Duration, Instant};

#[cfg(target_os = "linux")]
use arboard::SetExtLinux;
use arboard::Clipboard;

use crate::error::Result;

pub trait ClipboardSink {
    fn copy(&mut self, text: &str) -> Result<()>;
}

/// Host clipboard. On Wayland `wl-copy` is tried first, since arboard's
/// ownership of the selection ends when this short-lived process exits.
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl ClipboardSink for SystemClipboard {
    fn copy(&mut self, text: &str) -> Result<()> {
        #[cfg(target_os = "linux")]
        {
            if is_wayland() && wl_copy(text)? {
                return Ok(());
            }
        }

        // Windows, macOS, X11, and Wayland without wl-copy
        let mut clipboard = Clipboard::new()?;

        // X11 only serves the selection while its owner lives; give a clipboard
        // manager time to take it over before the process exits.
        #[cfg(target_os = "linux")]
        clipboard
            .set()
            .wait_until(Instant::now() + Duration::from_millis(100))
            .text(text.to_owned())?;

        #[cfg(not(target_os = "linux"))]
        clipboard.set_text(text.to_owned())?;

        Ok(())
    }
}

#[cfg(target_os = "linux")]
fn is_wayland() -> bool {
    std::env::var("WAYLAND_DISPLAY").is_ok()
        || std::env::var("XDG_SESSION_TYPE")
            .map(|v| v == "wayland")
            .unwrap_or(false)
}

/// Returns `false` when `wl-copy` is not installed.
#[cfg(target_os = "linux")]
fn wl_copy(text: &str) -> Result<bool> {
    use std::{
        io::Write,
        process::{Command, Stdio},
    };

    use crate::error::ClyperError;

    let Ok(mut child) = Command::new("wl-copy").stdin(Stdio::piped()).spawn() else {
        log::debug!("wl-copy not available, falling back to arboard");
        return Ok(false);
    };

    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(text.as_bytes())?;
    }

    let status = child.wait()?;
    if !status.success() {
        return Err(ClyperError::ClipboardCommand(format!("wl-copy exited with {status}")));
    }
    Ok(true)
}

/// Keeps the last copied text in memory.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    pub contents: Option<String>,
}

impl ClipboardSink for MemoryClipboard {
    fn copy(&mut self, text: &str) -> Result<()> {
        self.contents = Some(text.to_string());
        Ok(())
    }
}
