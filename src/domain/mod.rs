//! Domain types for the lazywallet dashboard.
//!
//! # Module Organization
//!
//! - [`error`] - Error type shared by the client, state and UI layers
//! - [`transfer`] - Transfer records, truncation rules and display rows
//! - [`amount`] - Fixed-point token amounts
//! - [`age`] - Relative "days and hours ago" formatting

// ============================================================================
// Module Declarations
// ============================================================================

pub mod age;
pub mod amount;
pub mod error;
pub mod transfer;

// ============================================================================
// Re-exports
// ============================================================================

pub use age::{format_relative_time, parse_timestamp};
pub use amount::TokenFormat;
pub use error::WalletError;
pub use transfer::{CopyField, TransferRecord, TransferRow};
