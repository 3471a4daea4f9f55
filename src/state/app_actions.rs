//! Actions on the app: loading transfers, changing address, copying.

use std::time::Instant;

use tracing::{debug, error, info, warn};

use super::ui_state::ERROR_TOAST_TICKS;
use super::{App, AppMessage, LoadOutcome, LoadRequest, LoadTicket};
use crate::domain::{TransferRecord, WalletError};

impl App {
    // ========================================================================
    // Loading
    // ========================================================================

    /// Starts a load for the current address.
    ///
    /// Returns `false` without making a request when there is no address.
    pub(crate) fn load_transactions(&mut self) -> bool {
        match self.history.begin_load() {
            Some(request) => {
                self.spawn_load(request);
                true
            }
            None => {
                debug!("No wallet address set, skipping transfer load");
                false
            }
        }
    }

    fn spawn_load(&self, request: LoadRequest) {
        info!(
            ticket = request.ticket,
            address = %request.address,
            endpoint = %self.client.endpoint(),
            "Loading transfers"
        );

        let client = self.client.clone();
        let message_tx = self.message_tx.clone();

        tokio::spawn(async move {
            let result = client
                .fetch_transfers(&request.address)
                .await
                .map_err(|e| e.to_string());
            // The receiver is gone once the app has exited.
            let _ = message_tx.send(AppMessage::TransfersLoaded {
                ticket: request.ticket,
                result,
            });
        });
    }

    /// Applies a finished load and logs what happened.
    pub(crate) fn apply_transfers(
        &mut self,
        ticket: LoadTicket,
        result: Result<Vec<TransferRecord>, String>,
    ) {
        let error_message = result.as_ref().err().cloned();

        match self.history.apply_load(ticket, result) {
            LoadOutcome::Applied { count } => {
                info!(ticket, count, "Transfers loaded");
                self.warn_malformed_records();
            }
            LoadOutcome::Failed => {
                error!(
                    ticket,
                    error = error_message.as_deref().unwrap_or_default(),
                    "Failed to load transfers"
                );
            }
            LoadOutcome::Stale => {
                debug!(
                    ticket,
                    latest = self.history.latest_ticket(),
                    "Discarding stale transfer response"
                );
            }
        }
    }

    fn warn_malformed_records(&self) {
        for record in self.history.records() {
            let fields = record.malformed_fields(&self.config.token);
            if !fields.is_empty() {
                warn!(hash = %record.txn_hash, ?fields, "Record has malformed fields");
            }
        }
    }

    /// Reloads the current address.
    pub(crate) fn refresh(&mut self) {
        if !self.load_transactions() {
            self.ui
                .show_toast("[x] Set a wallet address first (a)", ERROR_TOAST_TICKS);
        }
    }

    /// Switches to `address`, loading its transfers if it changed.
    pub(crate) fn change_address(&mut self, address: &str) {
        let Some(request) = self.history.set_address(address) else {
            if self.history.address().is_none() {
                self.config.wallet_address = None;
                self.save_config();
            }
            return;
        };

        self.config.wallet_address = Some(request.address.clone());
        self.save_config();
        self.spawn_load(request);
    }

    pub(crate) fn save_config(&self) {
        if !self.persist_config {
            return;
        }
        if let Err(e) = self.config.save() {
            warn!("Failed to save configuration: {e}");
        }
    }

    // ========================================================================
    // Clipboard
    // ========================================================================

    /// Copies `text` to the clipboard and shows it as the copy notice,
    /// replacing any error toast.
    ///
    /// # Errors
    ///
    /// Returns [`WalletError::ClipboardUnavailable`] if the write fails; the
    /// notice is left untouched in that case.
    pub fn copy_field(&mut self, text: &str) -> Result<(), WalletError> {
        self.clipboard.write_text(text)?;
        // An earlier failure toast would otherwise hide the notice.
        self.ui.toast = None;
        self.copy_notice.show(text, Instant::now());
        info!(text, "Copied to clipboard");
        Ok(())
    }

    /// Copies the selected column of the selected row.
    pub(crate) fn copy_selected_field(&mut self) {
        let Some(text) = self.history.selected_copy_value().map(str::to_owned) else {
            return;
        };

        if let Err(err) = self.copy_field(&text) {
            warn!("{err}");
            self.ui.show_toast(format!("[x] {err}"), ERROR_TOAST_TICKS);
        }
    }
}
