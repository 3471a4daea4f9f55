//! Application constants for the lazywallet TUI.
//!
//! Timings and UI dimensions used across the state and rendering layers.
//! Display widths of record fields live next to the truncation code in
//! `domain::transfer`.

use std::time::Duration;

// ============================================================================
// Timing Constants
// ============================================================================

/// Interval between redraws and timer checks.
pub const TICK_RATE: Duration = Duration::from_millis(100);

/// How long the "Copied: ..." notice stays visible after the latest copy.
pub const COPY_NOTICE_DURATION: Duration = Duration::from_millis(2000);

// ============================================================================
// UI Dimension Constants
// ============================================================================

/// Height of the application header area (in rows).
pub const HEADER_HEIGHT: u16 = 3;

/// Height of the search bar (in rows).
pub const SEARCH_BAR_HEIGHT: u16 = 3;

/// Height of the footer (in rows).
pub const FOOTER_HEIGHT: u16 = 1;

// ============================================================================
// Text Constants
// ============================================================================

/// Placeholder shown in the empty search bar.
pub const SEARCH_PLACEHOLDER: &str = "Search token or contract";

/// Title of the transfers panel.
pub const TRANSFERS_TITLE: &str = "Transfers";

/// Shown instead of the table when there are no records.
pub const EMPTY_TRANSFERS_MESSAGE: &str = "No transactions to show.";

/// Table column headers, in display order.
pub const TRANSFER_COLUMNS: [&str; 6] = [
    "Transaction Hash",
    "Method",
    "Time",
    "From",
    "To",
    "Quantity",
];
