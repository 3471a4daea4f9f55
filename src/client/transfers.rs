//! Client for the wallet transfer history endpoint.

use tracing::debug;

use super::http::{HttpClient, HttpConfig};
use crate::domain::{TransferRecord, WalletError};

// ============================================================================
// Constants
// ============================================================================

/// Path of the transfer history endpoint, relative to the API base URL.
pub const TRANSACTIONS_PATH: &str = "/api/transactions";

/// Query parameter carrying the wallet address.
pub const WALLET_ADDRESS_PARAM: &str = "walletAddress";

// ============================================================================
// Transfer Client
// ============================================================================

/// Reads a wallet's transfer history from the backend.
#[derive(Debug, Clone)]
pub struct TransferClient {
    http: HttpClient,
    base_url: String,
}

impl TransferClient {
    /// Creates a client for the backend at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns `WalletError::InvalidInput` for an empty base URL and
    /// `WalletError::Network` if the HTTP client cannot be built.
    pub fn new(base_url: &str, config: HttpConfig) -> Result<Self, WalletError> {
        let base_url = base_url.trim().trim_end_matches('/');
        if base_url.is_empty() {
            return Err(WalletError::invalid_input("API base URL cannot be empty"));
        }

        Ok(Self {
            http: HttpClient::with_config(config)?,
            base_url: base_url.to_string(),
        })
    }

    /// Full URL of the transfer history endpoint.
    #[must_use]
    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, TRANSACTIONS_PATH)
    }

    /// Fetches every transfer of `address`, in the order the backend sends them.
    ///
    /// # Errors
    ///
    /// - `InvalidInput` if `address` is blank (no request is made)
    /// - `Network` on transport failure or timeout
    /// - `Status` on a non-2xx response
    /// - `Parse` if the body is not a JSON array of transfer records
    pub async fn fetch_transfers(&self, address: &str) -> Result<Vec<TransferRecord>, WalletError> {
        if address.trim().is_empty() {
            return Err(WalletError::invalid_input("Wallet address cannot be empty"));
        }

        let response = self
            .http
            .get(&self.endpoint())
            .query(&[(WALLET_ADDRESS_PARAM, address)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(WalletError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        let records: Vec<TransferRecord> = serde_json::from_slice(&body).map_err(|e| {
            WalletError::parse(format!("expected a JSON array of transfers: {e}"))
        })?;

        debug!("Fetched {} transfers for {address}", records.len());
        Ok(records)
    }
}
