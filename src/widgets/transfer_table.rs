//! Transfers table widget.
//!
//! Renders [`TransferRow`]s as a six-column table. The selected row is
//! highlighted, and within it the copyable cell under the cursor stands out
//! so it is clear what `c` will copy.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    text::Text,
    widgets::{Cell, Row, StatefulWidget, Table, TableState},
};

use crate::constants::TRANSFER_COLUMNS;
use crate::domain::{CopyField, TransferRow};
use crate::theme::{HEADER_ROW_STYLE, HIGHLIGHT_STYLE, INVALID_CELL_STYLE, SELECTED_STYLE};

/// Column widths in display order.
const COLUMN_WIDTHS: [Constraint; 6] = [
    Constraint::Length(16),
    Constraint::Length(14),
    Constraint::Min(24),
    Constraint::Length(14),
    Constraint::Length(14),
    Constraint::Min(18),
];

/// A table of formatted transfer rows.
///
/// ```text
/// Transaction Hash  Method   Time                    From           To             Quantity
/// 0x5c504ed432...   Transfer 1 days and 1 hours ago  0x52908400...  0xde0B2956...  1.000000 ETH
/// ```
#[derive(Debug)]
pub struct TransferTable<'a> {
    rows: &'a [TransferRow],
    copy_field: CopyField,
}

impl<'a> TransferTable<'a> {
    #[must_use]
    pub const fn new(rows: &'a [TransferRow]) -> Self {
        Self {
            rows,
            copy_field: CopyField::Hash,
        }
    }

    /// Sets the column highlighted inside the selected row.
    #[must_use]
    pub const fn copy_field(mut self, copy_field: CopyField) -> Self {
        self.copy_field = copy_field;
        self
    }

    fn build_row(row: &TransferRow) -> Row<'_> {
        let cells = row.cells().into_iter().enumerate().map(|(index, text)| {
            let invalid = match index {
                2 => row.age.is_invalid(),
                5 => row.quantity.is_invalid(),
                _ => false,
            };
            let cell = Cell::from(Text::from(text.into_owned()));
            if invalid {
                cell.style(INVALID_CELL_STYLE)
            } else {
                cell
            }
        });
        Row::new(cells)
    }
}

impl StatefulWidget for TransferTable<'_> {
    type State = TableState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut TableState) {
        if state.selected().is_some() {
            state.select_column(Some(self.copy_field.column_index()));
        } else {
            state.select_column(None);
        }

        let header = Row::new(TRANSFER_COLUMNS).style(HEADER_ROW_STYLE);
        let rows = self.rows.iter().map(Self::build_row);

        Table::new(rows, COLUMN_WIDTHS)
            .header(header)
            .column_spacing(1)
            .row_highlight_style(SELECTED_STYLE)
            .cell_highlight_style(HIGHLIGHT_STYLE)
            .render(area, buf, state);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TokenFormat;
    use crate::test_utils::TransferMother;
    use chrono::{TimeZone, Utc};
    use ratatui::style::Color;

    fn rows() -> Vec<TransferRow> {
        let now = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
        [TransferMother::transfer(), TransferMother::malformed()]
            .iter()
            .map(|record| TransferRow::build(record, now, &TokenFormat::default()))
            .collect()
    }

    fn line(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width).map(|x| buf[(x, y)].symbol()).collect()
    }

    #[test]
    fn test_renders_header_and_rows() {
        let rows = rows();
        let area = Rect::new(0, 0, 120, 4);
        let mut buf = Buffer::empty(area);
        let mut state = TableState::default();

        TransferTable::new(&rows).render(area, &mut buf, &mut state);

        let header = line(&buf, 0);
        for title in TRANSFER_COLUMNS {
            assert!(header.contains(title), "missing {title} in {header}");
        }
        let first = line(&buf, 1);
        assert!(first.contains("0x5c504ed432..."), "{first}");
        assert!(first.contains("1 days and 1 hours ago"), "{first}");
        assert!(first.contains("1.000000 ETH"), "{first}");

        let second = line(&buf, 2);
        assert!(second.contains("⚠ invalid time"), "{second}");
        assert!(second.contains("⚠ invalid quantity"), "{second}");
    }

    #[test]
    fn test_selected_copy_cell_is_highlighted() {
        let rows = rows();
        let area = Rect::new(0, 0, 120, 4);
        let mut buf = Buffer::empty(area);
        let mut state = TableState::default().with_selected(Some(0));

        TransferTable::new(&rows)
            .copy_field(CopyField::From)
            .render(area, &mut buf, &mut state);

        assert_eq!(state.selected_column(), Some(CopyField::From.column_index()));

        let first = line(&buf, 1);
        let from_x = first
            .find("0x52908400...")
            .map(|byte| first[..byte].chars().count() as u16)
            .unwrap();
        assert_eq!(buf[(from_x, 1)].fg, HIGHLIGHT_STYLE.fg.unwrap_or(Color::Reset));

        let hash_x = 0;
        assert_ne!(buf[(hash_x, 1)].fg, HIGHLIGHT_STYLE.fg.unwrap_or(Color::Reset));
    }

    #[test]
    fn test_no_selection_clears_column() {
        let rows = rows();
        let area = Rect::new(0, 0, 120, 4);
        let mut buf = Buffer::empty(area);
        let mut state = TableState::default();

        TransferTable::new(&rows).render(area, &mut buf, &mut state);
        assert_eq!(state.selected_column(), None);
    }
}
