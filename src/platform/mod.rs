//! Host capabilities: native share sheet and clipboard
//!
//! The share/copy chain only talks to these traits, so it can be driven by
//! the in-memory implementations in tests and by system programs from the CLI.

pub mod clipboard;
pub mod native_share;

pub use clipboard::{Clipboard, ClipboardError, CommandClipboard, MemoryClipboard};
pub use native_share::{NativeShare, RecordingShare, ShareError};

/// Access to the capabilities a host offers. `native_share` is `None` when
/// the host has no share sheet.
pub trait PlatformApi: Send + Sync {
    fn native_share(&self) -> Option<&dyn NativeShare>;
    fn clipboard(&self) -> &dyn Clipboard;
}

/// No share sheet and an in-memory clipboard.
pub struct NoopPlatform {
    clipboard: MemoryClipboard,
}

impl NoopPlatform {
    pub fn new() -> Self {
        NoopPlatform {
            clipboard: MemoryClipboard::new(),
        }
    }

    pub fn memory_clipboard(&self) -> &MemoryClipboard {
        &self.clipboard
    }
}

impl Default for NoopPlatform {
    fn default() -> Self {
        Self::new()
    }
}

impl PlatformApi for NoopPlatform {
    fn native_share(&self) -> Option<&dyn NativeShare> {
        None
    }

    fn clipboard(&self) -> &dyn Clipboard {
        &self.clipboard
    }
}

/// Terminal host: no share sheet, clipboard through an external program.
pub struct SystemPlatform {
    clipboard: CommandClipboard,
}

impl SystemPlatform {
    pub fn new(clipboard: CommandClipboard) -> Self {
        SystemPlatform { clipboard }
    }
}

impl Default for SystemPlatform {
    fn default() -> Self {
        Self::new(CommandClipboard::system_default())
    }
}

impl PlatformApi for SystemPlatform {
    fn native_share(&self) -> Option<&dyn NativeShare> {
        None
    }

    fn clipboard(&self) -> &dyn Clipboard {
        &self.clipboard
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn noop_platform_has_clipboard_but_no_share() {
        let p = NoopPlatform::new();
        assert!(p.native_share().is_none());
        p.clipboard().write_text("hello").await.unwrap();
        assert_eq!(p.memory_clipboard().contents().as_deref(), Some("hello"));
    }

    #[test]
    fn system_platform_has_no_share_sheet() {
        let p = SystemPlatform::default();
        assert!(p.native_share().is_none());
    }
}
