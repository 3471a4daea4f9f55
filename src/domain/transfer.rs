//! Transfer records as served by the history backend, and their display form.

use std::borrow::Cow;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use super::{TokenFormat, WalletError, format_relative_time};

// ============================================================================
// Display Widths
// ============================================================================

/// Characters of a transaction hash shown before truncating.
pub const HASH_DISPLAY_LEN: usize = 12;

/// Characters of a method name shown before truncating.
pub const METHOD_DISPLAY_LEN: usize = 10;

/// Characters of an address shown before the ellipsis.
pub const ADDRESS_DISPLAY_LEN: usize = 10;

const ELLIPSIS: &str = "...";

// ============================================================================
// Transfer Record
// ============================================================================

/// One transfer event of a wallet.
///
/// Field names on the wire are camelCase (`txnHash`). `quantity` may be sent
/// either as a string or as a JSON number; it is always kept as text so that
/// large values survive untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferRecord {
    pub txn_hash: String,
    pub method: String,
    pub time: String,
    pub from: String,
    pub to: String,
    #[serde(deserialize_with = "quantity_as_text")]
    pub quantity: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum QuantityRepr {
    Text(String),
    Number(serde_json::Number),
}

fn quantity_as_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match QuantityRepr::deserialize(deserializer)? {
        QuantityRepr::Text(text) => text,
        QuantityRepr::Number(number) => number.to_string(),
    })
}

impl TransferRecord {
    /// Hash cut to [`HASH_DISPLAY_LEN`] characters.
    #[must_use]
    pub fn display_hash(&self) -> String {
        truncate_with_ellipsis(&self.txn_hash, HASH_DISPLAY_LEN)
    }

    /// Method cut to [`METHOD_DISPLAY_LEN`] characters.
    #[must_use]
    pub fn display_method(&self) -> String {
        truncate_with_ellipsis(&self.method, METHOD_DISPLAY_LEN)
    }

    /// Sender abbreviated to a short prefix.
    #[must_use]
    pub fn display_from(&self) -> String {
        abbreviate_address(&self.from)
    }

    /// Recipient abbreviated to a short prefix.
    #[must_use]
    pub fn display_to(&self) -> String {
        abbreviate_address(&self.to)
    }

    /// Fields of this record that cannot be formatted.
    #[must_use]
    pub fn malformed_fields(&self, format: &TokenFormat) -> Vec<&'static str> {
        let mut fields = Vec::new();
        if super::parse_timestamp(&self.time).is_err() {
            fields.push("time");
        }
        if format.format_quantity(&self.quantity).is_err() {
            fields.push("quantity");
        }
        fields
    }
}

// ============================================================================
// Truncation
// ============================================================================

/// Keeps the first `max_chars` characters and appends `...` if anything was cut.
#[must_use]
pub fn truncate_with_ellipsis(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let prefix: String = text.chars().take(max_chars).collect();
    format!("{prefix}{ELLIPSIS}")
}

/// First [`ADDRESS_DISPLAY_LEN`] characters of an address followed by `...`.
///
/// The ellipsis is always appended so every address cell reads the same way.
#[must_use]
pub fn abbreviate_address(address: &str) -> String {
    let prefix: String = address.chars().take(ADDRESS_DISPLAY_LEN).collect();
    format!("{prefix}{ELLIPSIS}")
}

// ============================================================================
// Copy Fields
// ============================================================================

/// The record fields that can be copied to the clipboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CopyField {
    #[default]
    Hash,
    From,
    To,
}

impl CopyField {
    /// Human-readable column name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Hash => "Transaction Hash",
            Self::From => "From",
            Self::To => "To",
        }
    }

    /// Column position in the transfers table.
    #[must_use]
    pub const fn column_index(self) -> usize {
        match self {
            Self::Hash => 0,
            Self::From => 3,
            Self::To => 4,
        }
    }

    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Hash => Self::From,
            Self::From => Self::To,
            Self::To => Self::Hash,
        }
    }

    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::Hash => Self::To,
            Self::From => Self::Hash,
            Self::To => Self::From,
        }
    }

    /// The full, untruncated value of this field in `record`.
    #[must_use]
    pub fn value(self, record: &TransferRecord) -> &str {
        match self {
            Self::Hash => &record.txn_hash,
            Self::From => &record.from,
            Self::To => &record.to,
        }
    }
}

// ============================================================================
// Display Row
// ============================================================================

/// A formatted cell, or a marker that the underlying field was malformed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldText {
    Text(String),
    Invalid { field: &'static str },
}

impl FieldText {
    fn from_result(result: Result<String, WalletError>) -> Self {
        match result {
            Ok(text) => Self::Text(text),
            Err(WalletError::MalformedRecord { field, .. }) => Self::Invalid { field },
            Err(_) => Self::Invalid { field: "value" },
        }
    }

    #[must_use]
    pub const fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid { .. })
    }

    /// Text to put in the table cell.
    #[must_use]
    pub fn as_display(&self) -> Cow<'_, str> {
        match self {
            Self::Text(text) => Cow::Borrowed(text),
            Self::Invalid { field } => Cow::Owned(format!("⚠ invalid {field}")),
        }
    }
}

/// All display strings for one table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferRow {
    pub hash: String,
    pub method: String,
    pub age: FieldText,
    pub from: String,
    pub to: String,
    pub quantity: FieldText,
}

impl TransferRow {
    /// Formats `record` for display at wall-clock time `now`.
    #[must_use]
    pub fn build(record: &TransferRecord, now: DateTime<Utc>, format: &TokenFormat) -> Self {
        Self {
            hash: record.display_hash(),
            method: record.display_method(),
            age: FieldText::from_result(format_relative_time(&record.time, now)),
            from: record.display_from(),
            to: record.display_to(),
            quantity: FieldText::from_result(format.format_quantity(&record.quantity)),
        }
    }

    /// Cells in table column order.
    #[must_use]
    pub fn cells(&self) -> [Cow<'_, str>; 6] {
        [
            Cow::Borrowed(self.hash.as_str()),
            Cow::Borrowed(self.method.as_str()),
            self.age.as_display(),
            Cow::Borrowed(self.from.as_str()),
            Cow::Borrowed(self.to.as_str()),
            self.quantity.as_display(),
        ]
    }
}

// ============================================================================
// Tests
// ============================================================================
