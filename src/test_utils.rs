//! Shared test utilities and Mother pattern factories.
//!
//! Use these helpers instead of copy-pasting record literals and app setup
//! across tests.

use std::sync::{Arc, Mutex};

use ratatui::{Terminal, backend::TestBackend};
use rstest::fixture;

use crate::domain::TransferRecord;
use crate::state::platform::clipboard::{ClipboardError, ClipboardResult, ClipboardWriter};
use crate::state::{App, AppConfig};

// ============================================================================
// Mother Pattern Factories
// ============================================================================

pub struct TransferMother;

impl TransferMother {
    /// One ether sent a day and an hour before 2024-06-15 12:00 UTC.
    #[must_use]
    pub fn transfer() -> TransferRecord {
        TransferRecord {
            txn_hash: "0x5c504ed432cb51138bcf09aa5e8a410dd4a1e204ef84bfed1be16dfba1b22060"
                .to_string(),
            method: "Transfer".to_string(),
            time: "2024-06-14T11:00:00Z".to_string(),
            from: "0x52908400098527886E0F7030069857D2E4169EE7".to_string(),
            to: "0xde0B295669a9FD93d5F28D9Ec85E40f4cb697BAe".to_string(),
            quantity: "1000000000000000000".to_string(),
        }
    }

    #[must_use]
    pub fn with_hash(hash: &str) -> TransferRecord {
        TransferRecord {
            txn_hash: hash.to_string(),
            ..Self::transfer()
        }
    }

    /// A record whose time and quantity cannot be formatted.
    #[must_use]
    pub fn malformed() -> TransferRecord {
        TransferRecord {
            time: "not a date".to_string(),
            quantity: "12abc".to_string(),
            ..Self::with_hash("0xbroken")
        }
    }
}

// ============================================================================
// JSON Test Data Factories
// ============================================================================

pub struct JsonMother;

impl JsonMother {
    /// Response body with two records, `0xfirst` then `0xsecond`.
    #[must_use]
    pub fn two_transfers() -> String {
        serde_json::json!([
            {
                "txnHash": "0xfirst",
                "method": "Transfer",
                "time": "2024-06-14T11:00:00Z",
                "from": "0x52908400098527886E0F7030069857D2E4169EE7",
                "to": "0xde0B295669a9FD93d5F28D9Ec85E40f4cb697BAe",
                "quantity": "1000000000000000000"
            },
            {
                "txnHash": "0xsecond",
                "method": "Approve",
                "time": "2024-06-13T09:30:00Z",
                "from": "0xde0B295669a9FD93d5F28D9Ec85E40f4cb697BAe",
                "to": "0x52908400098527886E0F7030069857D2E4169EE7",
                "quantity": "250000000000000000"
            }
        ])
        .to_string()
    }
}

// ============================================================================
// Fake Clipboard
// ============================================================================

/// In-memory clipboard. Clones share the same history.
#[derive(Debug, Clone, Default)]
pub struct FakeClipboard {
    writes: Arc<Mutex<Vec<String>>>,
    fail: bool,
}

impl FakeClipboard {
    /// A clipboard whose every write fails.
    #[must_use]
    pub fn unavailable() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn writes(&self) -> Vec<String> {
        self.writes.lock().unwrap().clone()
    }
}

impl ClipboardWriter for FakeClipboard {
    fn write_text(&mut self, text: &str) -> ClipboardResult<()> {
        if self.fail {
            return Err(ClipboardError::NotAvailable);
        }
        self.writes.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

// ============================================================================
// App Factories
// ============================================================================

/// An app with `config` that never touches the config file or the real clipboard.
#[must_use]
pub fn app_with(config: AppConfig, clipboard: FakeClipboard) -> App {
    let mut app = App::with_clipboard(config, Box::new(clipboard))
        .expect("app creation should succeed");
    app.persist_config = false;
    app
}

/// An app with a wallet address and `records` already loaded.
#[must_use]
pub fn app_with_records(records: Vec<TransferRecord>) -> App {
    let config = AppConfig {
        wallet_address: Some("0xwallet".to_string()),
        ..AppConfig::default()
    };
    let mut app = app_with(config, FakeClipboard::default());
    let request = app.history.begin_load().expect("address is set");
    app.apply_transfers(request.ticket, Ok(records));
    app
}

// ============================================================================
// rstest Fixtures
// ============================================================================

#[fixture]
pub fn test_terminal() -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(120, 30)).expect("terminal creation should succeed")
}

#[fixture]
pub fn test_terminal_80x24() -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(80, 24)).expect("terminal creation should succeed")
}

#[fixture]
pub fn empty_app() -> App {
    app_with(AppConfig::default(), FakeClipboard::default())
}

/// Converts the terminal buffer to a string, one line per row.
#[must_use]
pub fn buffer_to_string(terminal: &Terminal<TestBackend>) -> String {
    let buffer = terminal.backend().buffer();
    let area = buffer.area;
    (0..area.height)
        .map(|y| {
            (0..area.width)
                .map(|x| buffer[(x, y)].symbol())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
