//! State management for the lazywallet TUI.
//!
//! The [`App`] owns two independent components plus shared UI concerns:
//!
//! ```text
//! ┌───────────────────────────────────────────────────────┐
//! │                         App                           │
//! ├──────────────┬───────────────┬────────────┬───────────┤
//! │ HistoryState │ SearchWidget  │ CopyNotice │  UiState  │
//! │  - address   │  - dialog     │  - text    │  - popup  │
//! │  - records   │  - input      │  - window  │  - toast  │
//! │  - tickets   │               │            │           │
//! └──────────────┴───────────────┴────────────┴───────────┘
//! ```
//!
//! All mutation happens on the UI loop. Background loads report back through
//! [`AppMessage`]s.

use tokio::sync::mpsc;

use crate::client::TransferClient;
use crate::domain::TransferRecord;

// ============================================================================
// Module Declarations
// ============================================================================

mod app_actions;
mod app_commands;
mod app_lifecycle;

pub mod config;
pub mod copy_notice;
pub mod history;
pub mod platform;
pub mod search;
pub mod ui_state;


// ============================================================================
// Re-exports
// ============================================================================

pub use config::{AppConfig, ConfigOverrides};
pub use copy_notice::CopyNotice;
pub use history::{HistoryState, LoadOutcome, LoadRequest, LoadTicket};
pub use platform::{ClipboardManager, ClipboardWriter};
pub use search::{SearchDialog, SearchWidget};
pub use ui_state::{PopupState, UiState};

// ============================================================================
// App Message Types
// ============================================================================

/// Messages sent from background tasks to the main app loop.
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// A transfer load finished, successfully or not.
    TransfersLoaded {
        ticket: LoadTicket,
        result: Result<Vec<TransferRecord>, String>,
    },
}

// ============================================================================
// Main App State
// ============================================================================

/// The main application state container.
#[derive(Debug)]
pub struct App {
    /// Transfers panel.
    pub history: HistoryState,

    /// Search bar and its dialog.
    pub search: SearchWidget,

    /// "Copied: ..." notice.
    pub copy_notice: CopyNotice,

    /// Popups and toasts.
    pub ui: UiState,

    /// Effective configuration (file plus command-line overrides).
    pub config: AppConfig,

    /// Whether the application should exit.
    pub exit: bool,

    // ========================================================================
    // Async Communication Channels
    // ========================================================================
    // Sends use `let _ = tx.send(...)`: the receiver is gone only during
    // shutdown.
    pub(crate) message_tx: mpsc::UnboundedSender<AppMessage>,
    pub(crate) message_rx: mpsc::UnboundedReceiver<AppMessage>,

    pub(crate) client: TransferClient,
    pub(crate) clipboard: Box<dyn ClipboardWriter>,

    /// Whether address changes are written back to the config file.
    pub(crate) persist_config: bool,
}
