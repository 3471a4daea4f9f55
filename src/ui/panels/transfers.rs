//! The "Transfers" panel: status line plus the transfers table.

use chrono::{DateTime, Utc};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    text::Line,
    widgets::{Paragraph, TableState},
};

use crate::commands::InputContext;
use crate::constants::{EMPTY_TRANSFERS_MESSAGE, TRANSFERS_TITLE};
use crate::state::App;
use crate::theme::MUTED_STYLE;
use crate::ui::helpers::create_border_block;
use crate::widgets::TransferTable;

/// Renders the panel with ages relative to the current time.
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    render_at(app, frame, area, Utc::now());
}

/// Renders the panel with ages relative to `now`.
pub fn render_at(app: &App, frame: &mut Frame, area: Rect, now: DateTime<Utc>) {
    let focused = app.input_context() == InputContext::Main;
    let block = create_border_block(TRANSFERS_TITLE, focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [status_area, body_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(inner);

    frame.render_widget(
        Paragraph::new(status_line(app)).style(MUTED_STYLE),
        status_area,
    );

    let history = &app.history;
    if history.is_empty() {
        frame.render_widget(
            Paragraph::new(EMPTY_TRANSFERS_MESSAGE).alignment(Alignment::Center),
            body_area,
        );
        return;
    }

    let rows = history.rows(now, &app.config.token);
    let mut state = TableState::default().with_selected(history.selected_index());
    frame.render_stateful_widget(
        TransferTable::new(&rows).copy_field(history.copy_field()),
        body_area,
        &mut state,
    );
}

fn status_line(app: &App) -> Line<'static> {
    let history = &app.history;

    if history.is_loading() {
        return Line::from("Loading transfers...");
    }
    if history.address().is_none() {
        return Line::from("Set a wallet address with a to load transfers.");
    }

    let count = history.records().len();
    let noun = if count == 1 { "transfer" } else { "transfers" };
    Line::from(format!(
        "{count} {noun}  ·  copy column: {}",
        history.copy_field().label()
    ))
}

// ============================================================================
// Tests
// ============================================================================
