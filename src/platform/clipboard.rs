/// System clipboard access

use std::process::Stdio;
use std::sync::Mutex;

use futures::future::BoxFuture;
use futures::FutureExt;
use thiserror::Error;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("clipboard write failed: {0}")]
pub struct ClipboardError(pub String);

/// Plain-text clipboard writes
pub trait Clipboard: Send + Sync {
    fn write_text<'a>(&'a self, text: &'a str) -> BoxFuture<'a, Result<(), ClipboardError>>;
}

/// In-memory clipboard for tests and hosts without a system clipboard.
///
/// A clipboard built with `failing()` rejects every write and keeps its
/// previous contents.
pub struct MemoryClipboard {
    contents: Mutex<Option<String>>,
    writes: Mutex<usize>,
    fail: bool,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        MemoryClipboard {
            contents: Mutex::new(None),
            writes: Mutex::new(0),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        MemoryClipboard {
            fail: true,
            ..Self::new()
        }
    }

    pub fn contents(&self) -> Option<String> {
        self.contents.lock().map(|g| g.clone()).unwrap_or(None)
    }

    /// Number of write attempts, including rejected ones
    pub fn write_attempts(&self) -> usize {
        self.writes.lock().map(|g| *g).unwrap_or(0)
    }
}

impl Default for MemoryClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text<'a>(&'a self, text: &'a str) -> BoxFuture<'a, Result<(), ClipboardError>> {
        async move {
            if let Ok(mut n) = self.writes.lock() {
                *n += 1;
            }
            if self.fail {
                return Err(ClipboardError("clipboard unavailable".to_string()));
            }
            let mut g = self
                .contents
                .lock()
                .map_err(|_| ClipboardError("clipboard lock poisoned".to_string()))?;
            *g = Some(text.to_string());
            Ok(())
        }
        .boxed()
    }
}

/// Clipboard backed by an external program that reads the text on stdin
/// (`wl-copy`, `xclip -selection clipboard`, `pbcopy`, ...).
#[derive(Debug, Clone)]
pub struct CommandClipboard {
    program: String,
    args: Vec<String>,
}

impl CommandClipboard {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Parse a whitespace-separated command line such as `"xclip -selection clipboard"`.
    pub fn from_command_line(line: &str) -> Option<Self> {
        let mut parts = line.split_whitespace().map(str::to_string);
        let program = parts.next()?;
        Some(Self::new(program, parts.collect()))
    }

    /// Best guess for the current platform
    pub fn system_default() -> Self {
        if cfg!(target_os = "macos") {
            Self::new("pbcopy", Vec::new())
        } else if cfg!(target_os = "windows") {
            Self::new("clip", Vec::new())
        } else if std::env::var_os("WAYLAND_DISPLAY").is_some() {
            Self::new("wl-copy", Vec::new())
        } else {
            Self::new(
                "xclip",
                vec!["-selection".to_string(), "clipboard".to_string()],
            )
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Clipboard for CommandClipboard {
    fn write_text<'a>(&'a self, text: &'a str) -> BoxFuture<'a, Result<(), ClipboardError>> {
        async move {
            let mut child = Command::new(&self.program)
                .args(&self.args)
                .stdin(Stdio::piped())
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .kill_on_drop(true)
                .spawn()
                .map_err(|e| ClipboardError(format!("failed to start {}: {}", self.program, e)))?;

            if let Some(mut stdin) = child.stdin.take() {
                stdin
                    .write_all(text.as_bytes())
                    .await
                    .map_err(|e| ClipboardError(format!("failed to write to {}: {}", self.program, e)))?;
                // dropping stdin closes the pipe so the program can exit
            }

            let status = child
                .wait()
                .await
                .map_err(|e| ClipboardError(format!("{} did not finish: {}", self.program, e)))?;
            if !status.success() {
                return Err(ClipboardError(format!("{} exited with {}", self.program, status)));
            }
            log::debug!("copied {} bytes via {}", text.len(), self.program);
            Ok(())
        }
        .boxed()
    }
}
