//! Search placeholder dialog.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    widgets::{Clear, Paragraph, Wrap},
};

use crate::state::{SearchDialog, SearchWidget};
use crate::ui::helpers::create_popup_block;
use crate::ui::layout::centered_popup_area;

use super::render_help_footer;

const POPUP_WIDTH: u16 = 50;
const POPUP_HEIGHT: u16 = 8;
const HELP_TEXT: &str = "Esc:Close  Enter:Close";

/// Renders the dialog when `search` has it open. Does nothing otherwise.
pub fn render(frame: &mut Frame, area: Rect, search: &SearchWidget) {
    let SearchDialog::Open(outcome) = search.dialog() else {
        return;
    };

    let popup_area = centered_popup_area(area, POPUP_WIDTH, POPUP_HEIGHT);
    let block = create_popup_block("Search");
    let inner = block.inner(popup_area);

    frame.render_widget(Clear, popup_area);
    frame.render_widget(block, popup_area);

    let message_area = Rect::new(
        inner.x,
        inner.y + 1,
        inner.width,
        inner.height.saturating_sub(3),
    );
    frame.render_widget(
        Paragraph::new(outcome.message())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        message_area,
    );

    render_help_footer(frame, popup_area, HELP_TEXT);
}
