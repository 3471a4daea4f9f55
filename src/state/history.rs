//! Transfer history state: the wallet address, loaded records and selection.
//!
//! Loads are identified by a [`LoadTicket`]. Only the response to the most
//! recently issued ticket is applied; anything older is reported as
//! [`LoadOutcome::Stale`] and dropped.

use chrono::{DateTime, Utc};

use crate::domain::{CopyField, TokenFormat, TransferRecord, TransferRow};

/// Sequence number of one load request.
pub type LoadTicket = u64;

/// A load the caller should perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadRequest {
    pub ticket: LoadTicket,
    pub address: String,
}

/// What happened when a load response was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The record list was replaced.
    Applied { count: usize },
    /// The load failed; the record list is unchanged.
    Failed,
    /// A newer load was issued; the response was ignored.
    Stale,
}

// ============================================================================
// History State
// ============================================================================

/// State of the transfers panel.
#[derive(Debug, Default)]
pub struct HistoryState {
    address: Option<String>,
    records: Vec<TransferRecord>,
    latest_ticket: LoadTicket,
    in_flight: Option<LoadTicket>,
    selected: Option<usize>,
    copy_field: CopyField,
}

fn normalize_address(address: &str) -> Option<String> {
    let trimmed = address.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

impl HistoryState {
    /// Creates the state for `address`. Blank addresses count as absent.
    #[must_use]
    pub fn new(address: Option<&str>) -> Self {
        Self {
            address: address.and_then(normalize_address),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    /// Switches to a new wallet address.
    ///
    /// Returns the load to perform, or `None` when the address is unchanged
    /// or blank. Any load still in flight becomes stale. Records of the
    /// previous address stay visible until the new response arrives.
    pub fn set_address(&mut self, address: &str) -> Option<LoadRequest> {
        let address = normalize_address(address);
        if address == self.address {
            return None;
        }

        self.address = address;
        self.in_flight = None;
        if self.address.is_none() {
            // No load is issued, so retire the outstanding ticket here.
            self.latest_ticket += 1;
            return None;
        }
        self.begin_load()
    }

    /// Issues a new ticket for the current address.
    ///
    /// Returns `None`, issuing nothing, when there is no address.
    pub fn begin_load(&mut self) -> Option<LoadRequest> {
        let address = self.address.clone()?;
        self.latest_ticket += 1;
        self.in_flight = Some(self.latest_ticket);
        Some(LoadRequest {
            ticket: self.latest_ticket,
            address,
        })
    }

    /// Applies the response for `ticket`.
    pub fn apply_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<Vec<TransferRecord>, String>,
    ) -> LoadOutcome {
        if ticket != self.latest_ticket {
            return LoadOutcome::Stale;
        }
        self.in_flight = None;

        match result {
            Ok(records) => {
                let count = records.len();
                self.records = records;
                self.clamp_selection();
                LoadOutcome::Applied { count }
            }
            Err(_) => LoadOutcome::Failed,
        }
    }

    #[must_use]
    pub const fn latest_ticket(&self) -> LoadTicket {
        self.latest_ticket
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    #[must_use]
    pub fn records(&self) -> &[TransferRecord] {
        &self.records
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Display rows for every record, formatted at `now`.
    #[must_use]
    pub fn rows(&self, now: DateTime<Utc>, format: &TokenFormat) -> Vec<TransferRow> {
        self.records
            .iter()
            .map(|record| TransferRow::build(record, now, format))
            .collect()
    }

    // ========================================================================
    // Selection
    // ========================================================================

    #[must_use]
    pub const fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    #[must_use]
    pub fn selected_record(&self) -> Option<&TransferRecord> {
        self.selected.and_then(|index| self.records.get(index))
    }

    pub fn select_next(&mut self) {
        if self.records.is_empty() {
            return;
        }
        let last = self.records.len() - 1;
        self.selected = Some(self.selected.map_or(0, |i| (i + 1).min(last)));
    }

    pub fn select_prev(&mut self) {
        if self.records.is_empty() {
            return;
        }
        self.selected = Some(self.selected.map_or(0, |i| i.saturating_sub(1)));
    }

    pub fn select_first(&mut self) {
        if !self.records.is_empty() {
            self.selected = Some(0);
        }
    }

    pub fn select_last(&mut self) {
        if !self.records.is_empty() {
            self.selected = Some(self.records.len() - 1);
        }
    }

    fn clamp_selection(&mut self) {
        self.selected = match self.records.len() {
            0 => None,
            len => Some(self.selected.unwrap_or(0).min(len - 1)),
        };
    }

    // ========================================================================
    // Copy Column
    // ========================================================================

    #[must_use]
    pub const fn copy_field(&self) -> CopyField {
        self.copy_field
    }

    pub fn next_copy_field(&mut self) {
        self.copy_field = self.copy_field.next();
    }

    pub fn prev_copy_field(&mut self) {
        self.copy_field = self.copy_field.prev();
    }

    /// Full value of the selected column in the selected row.
    #[must_use]
    pub fn selected_copy_value(&self) -> Option<&str> {
        self.selected_record()
            .map(|record| self.copy_field.value(record))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TransferMother;

    fn loaded(records: Vec<TransferRecord>) -> HistoryState {
        let mut history = HistoryState::new(Some("0xwallet"));
        let request = history.begin_load().unwrap();
        history.apply_load(request.ticket, Ok(records));
        history
    }

    #[test]
    fn test_blank_address_issues_no_request() {
        let mut history = HistoryState::new(Some("   "));
        assert_eq!(history.address(), None);
        assert_eq!(history.begin_load(), None);
        assert_eq!(history.set_address(""), None);
        assert_eq!(history.latest_ticket(), 0);
        assert!(!history.is_loading());
    }

    #[test]
    fn test_success_replaces_records_in_order() {
        let mut history = loaded(vec![TransferMother::with_hash("0xold")]);

        let request = history.begin_load().unwrap();
        assert!(history.is_loading());
        let outcome = history.apply_load(
            request.ticket,
            Ok(vec![
                TransferMother::with_hash("0xa"),
                TransferMother::with_hash("0xb"),
            ]),
        );

        assert_eq!(outcome, LoadOutcome::Applied { count: 2 });
        let hashes: Vec<&str> = history.records().iter().map(|r| r.txn_hash.as_str()).collect();
        assert_eq!(hashes, ["0xa", "0xb"]);
        assert!(!history.is_loading());
    }

    #[test]
    fn test_failure_keeps_previous_records() {
        let mut history = loaded(vec![TransferMother::with_hash("0xkept")]);

        let request = history.begin_load().unwrap();
        let outcome = history.apply_load(request.ticket, Err("connection refused".into()));

        assert_eq!(outcome, LoadOutcome::Failed);
        assert_eq!(history.records().len(), 1);
        assert!(!history.is_loading());
    }

    #[test]
    fn test_older_ticket_is_discarded() {
        let mut history = HistoryState::new(Some("0xfirst"));
        let first = history.begin_load().unwrap();
        let second = history.set_address("0xsecond").unwrap();
        assert!(second.ticket > first.ticket);
        assert_eq!(second.address, "0xsecond");

        let late = history.apply_load(first.ticket, Ok(vec![TransferMother::with_hash("0xlate")]));
        assert_eq!(late, LoadOutcome::Stale);
        assert!(history.is_empty());
        assert!(history.is_loading());

        history.apply_load(second.ticket, Ok(vec![TransferMother::with_hash("0xfresh")]));
        assert_eq!(history.records()[0].txn_hash, "0xfresh");
    }

    #[test]
    fn test_clearing_address_invalidates_in_flight_load() {
        let mut history = HistoryState::new(Some("0xwallet"));
        let request = history.begin_load().unwrap();

        assert_eq!(history.set_address(""), None);
        assert_eq!(
            history.apply_load(request.ticket, Ok(vec![TransferMother::transfer()])),
            LoadOutcome::Stale
        );
        assert!(history.is_empty());
    }

    #[test]
    fn test_new_address_issues_next_ticket() {
        let mut history = HistoryState::new(Some("0xfirst"));
        let first = history.begin_load().unwrap();

        let second = history.set_address("0xsecond").unwrap();

        assert_eq!(second.ticket, first.ticket + 1);
        assert_eq!(history.latest_ticket(), second.ticket);
        assert_eq!(
            history.apply_load(first.ticket, Ok(vec![TransferMother::transfer()])),
            LoadOutcome::Stale
        );
    }

    #[test]
    fn test_same_address_does_not_reload() {
        let mut history = HistoryState::new(Some("0xwallet"));
        assert_eq!(history.set_address(" 0xwallet "), None);
    }

    #[test]
    fn test_selection_moves_and_clamps() {
        let mut history = loaded(vec![
            TransferMother::with_hash("0x1"),
            TransferMother::with_hash("0x2"),
            TransferMother::with_hash("0x3"),
        ]);
        assert_eq!(history.selected_index(), Some(0));

        history.select_prev();
        assert_eq!(history.selected_index(), Some(0));
        history.select_last();
        history.select_next();
        assert_eq!(history.selected_index(), Some(2));

        let request = history.begin_load().unwrap();
        history.apply_load(request.ticket, Ok(vec![TransferMother::with_hash("0x1")]));
        assert_eq!(history.selected_index(), Some(0));

        let request = history.begin_load().unwrap();
        history.apply_load(request.ticket, Ok(Vec::new()));
        assert_eq!(history.selected_index(), None);
        assert_eq!(history.selected_copy_value(), None);
    }

    #[test]
    fn test_copy_value_follows_selected_column() {
        let record = TransferMother::transfer();
        let mut history = loaded(vec![record.clone()]);

        assert_eq!(history.selected_copy_value(), Some(record.txn_hash.as_str()));
        history.next_copy_field();
        assert_eq!(history.selected_copy_value(), Some(record.from.as_str()));
        history.next_copy_field();
        assert_eq!(history.selected_copy_value(), Some(record.to.as_str()));
        history.prev_copy_field();
        assert_eq!(history.copy_field(), CopyField::From);
    }
}
