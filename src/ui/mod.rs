//! UI rendering for the lazywallet TUI.
//!
//! - `panels` - the transfers panel
//! - `popups` - search dialog and address prompt
//! - `components` - toast overlay
//! - `layout` - layout calculations
//! - `header` - header and search bar
//! - `footer` - keyboard hints
//! - `helpers` - styled block constructors

pub mod components;
pub mod footer;
pub mod header;
pub mod helpers;
pub mod layout;
pub mod panels;
pub mod popups;

use ratatui::Frame;

use crate::state::{App, PopupState};

use layout::calculate_app_layout;

// ============================================================================
// Main Render Entry Point
// ============================================================================

/// Draws the whole screen: main layout, then popups, then the toast.
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();
    let layout = calculate_app_layout(size);

    header::render(frame, layout.header, app);
    header::render_search_bar(frame, layout.search, app);
    panels::transfers::render(app, frame, layout.main);
    footer::render(frame, layout.footer, app);

    if let PopupState::AddressInput(input) = &app.ui.popup {
        popups::address::render(frame, size, input);
    }
    if app.search.is_open() {
        popups::search::render(frame, size, &app.search);
    }

    if let Some(message) = toast_message(app) {
        components::render_toast(frame, size, &message);
    }
}

/// Text of the toast overlay, if any. An active error toast is shown
/// instead of the copy notice.
pub(crate) fn toast_message(app: &App) -> Option<String> {
    if let Some((message, _)) = &app.ui.toast {
        return Some(message.clone());
    }
    app.copy_notice
        .text()
        .map(|text| format!("[+] Copied: {text}"))
}

// ============================================================================
// Tests
// ============================================================================
