//! Footer bar with keyboard hints for the current input context.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    widgets::Paragraph,
};

use crate::commands::InputContext;
use crate::state::App;
use crate::theme::MUTED_STYLE;

/// Renders the hints for whatever currently receives key presses.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let footer = Paragraph::new(hints(app.input_context()))
        .style(MUTED_STYLE)
        .alignment(Alignment::Center);

    frame.render_widget(footer, area);
}

const fn hints(context: InputContext) -> &'static str {
    match context {
        InputContext::Main => {
            "q:Quit  r:Refresh  ↑/↓:Row  ←/→:Column  c:Copy  /:Search  s:Search dialog  a:Address"
        }
        InputContext::SearchInput => "Type to search  Enter:Search  Esc:Back",
        InputContext::SearchDialog => "Esc:Close  Enter:Close",
        InputContext::AddressInput => "Enter:Load  Esc:Cancel",
    }
}
