//! Modal overlays: the search placeholder dialog and the wallet address prompt.

pub mod address;
pub mod search;

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::Paragraph,
};

use crate::theme::MUTED_COLOR;

/// Draws a separator line and a centered help line at the bottom of `popup_area`.
pub(crate) fn render_help_footer(frame: &mut Frame, popup_area: Rect, help_text: &str) {
    if popup_area.height < 4 || popup_area.width < 3 {
        return;
    }

    let separator = "─".repeat(popup_area.width.saturating_sub(2) as usize);
    let separator_area = Rect::new(
        popup_area.x + 1,
        popup_area.y + popup_area.height - 3,
        popup_area.width - 2,
        1,
    );
    frame.render_widget(
        Paragraph::new(separator).style(Style::default().fg(Color::DarkGray)),
        separator_area,
    );

    let help_area = Rect::new(
        popup_area.x + 1,
        popup_area.y + popup_area.height - 2,
        popup_area.width - 2,
        1,
    );
    frame.render_widget(
        Paragraph::new(help_text)
            .style(Style::default().fg(MUTED_COLOR))
            .alignment(Alignment::Center),
        help_area,
    );
}
