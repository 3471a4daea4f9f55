//! Cross-platform clipboard writes.
//!
//! # Platform-Specific Behavior
//!
//! ## Linux
//!
//! Tries `wl-copy` (Wayland), then `xclip` and `xsel` (X11), then falls back
//! to the `arboard` crate. External tools keep the clipboard content alive
//! after the application exits.
//!
//! ## macOS and Windows
//!
//! Uses the `arboard` crate directly.

use std::fmt;

use crate::domain::WalletError;

// ============================================================================
// Error Type
// ============================================================================

/// Error type for clipboard operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    /// Clipboard is not available on this system.
    NotAvailable,
    /// Failed to copy text to clipboard.
    CopyFailed(String),
}

impl fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAvailable => write!(f, "Clipboard not available"),
            Self::CopyFailed(msg) => write!(f, "Failed to copy: {msg}"),
        }
    }
}

impl std::error::Error for ClipboardError {}

impl From<ClipboardError> for WalletError {
    fn from(err: ClipboardError) -> Self {
        Self::ClipboardUnavailable(err.to_string())
    }
}

/// Result type for clipboard operations.
pub type ClipboardResult<T> = Result<T, ClipboardError>;

// ============================================================================
// Clipboard Writer
// ============================================================================

/// Something that can put text on the clipboard.
pub trait ClipboardWriter: Send + fmt::Debug {
    /// Replaces the clipboard content with `text`.
    ///
    /// # Errors
    ///
    /// Returns an error if the clipboard is not available or the write fails.
    fn write_text(&mut self, text: &str) -> ClipboardResult<()>;
}

// ============================================================================
// Clipboard Manager
// ============================================================================

/// The system clipboard.
///
/// No handle is kept between copies: each write opens the clipboard (or
/// spawns a tool) and releases it before returning.
#[derive(Debug)]
pub struct ClipboardManager {
    /// Whether to prefer external tools on Linux.
    prefer_external_tools: bool,
}

impl Default for ClipboardManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ClipboardManager {
    /// Creates a clipboard manager that prefers external tools on Linux.
    #[must_use]
    pub fn new() -> Self {
        Self {
            prefer_external_tools: true,
        }
    }

    /// Copies text to the clipboard.
    ///
    /// # Errors
    ///
    /// Returns an error if the clipboard is not available or the copy fails.
    pub fn copy_text(&self, text: &str) -> ClipboardResult<()> {
        #[cfg(target_os = "linux")]
        if self.prefer_external_tools
            && let Ok(()) = Self::copy_with_external_tool(text)
        {
            return Ok(());
        }

        Self::copy_with_arboard(text)
    }

    fn copy_with_arboard(text: &str) -> ClipboardResult<()> {
        use arboard::Clipboard;

        let mut clipboard = Clipboard::new().map_err(|_| ClipboardError::NotAvailable)?;

        clipboard
            .set_text(text.to_string())
            .map_err(|e| ClipboardError::CopyFailed(e.to_string()))
    }

    #[cfg(target_os = "linux")]
    fn copy_with_external_tool(text: &str) -> ClipboardResult<()> {
        const TOOLS: [(&str, &[&str]); 3] = [
            ("wl-copy", &[]),
            ("xclip", &["-selection", "clipboard"]),
            ("xsel", &["--clipboard", "--input"]),
        ];

        if TOOLS
            .iter()
            .any(|(tool, args)| Self::try_tool(tool, args, text))
        {
            Ok(())
        } else {
            Err(ClipboardError::NotAvailable)
        }
    }

    /// Pipes `text` into `tool`. Returns `true` if the tool exited successfully.
    #[cfg(target_os = "linux")]
    fn try_tool(tool: &str, args: &[&str], text: &str) -> bool {
        use std::io::Write;
        use std::process::{Command, Stdio};

        let Ok(mut child) = Command::new(tool)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
        else {
            return false;
        };

        let Some(mut stdin) = child.stdin.take() else {
            return false;
        };

        if stdin.write_all(text.as_bytes()).is_err() {
            return false;
        }

        drop(stdin);

        child.wait().map(|s| s.success()).unwrap_or(false)
    }
}

impl ClipboardWriter for ClipboardManager {
    fn write_text(&mut self, text: &str) -> ClipboardResult<()> {
        self.copy_text(text)
    }
}

// ============================================================================
// Tests
// ============================================================================
