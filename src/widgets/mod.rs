//! Reusable widgets for the lazywallet TUI.
//!
//! - [`transfer_table`]: the transfers table with row and copy-cell highlighting

pub mod transfer_table;

pub use transfer_table::TransferTable;
