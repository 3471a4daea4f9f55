//! HTTP clients for the wallet backend.
//!
//! - [`http`] - shared reqwest configuration
//! - [`transfers`] - the transfer history endpoint

pub mod http;
pub mod transfers;


// ============================================================================
// Re-exports
// ============================================================================

pub use http::HttpConfig;
pub use transfers::TransferClient;
