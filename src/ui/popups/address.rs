//! Wallet address prompt.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::theme::{MUTED_STYLE, PRIMARY_COLOR};
use crate::ui::helpers::create_popup_block;
use crate::ui::layout::centered_popup_area;

use super::render_help_footer;

const POPUP_WIDTH: u16 = 64;
const POPUP_HEIGHT: u16 = 9;
const HELP_TEXT: &str = "Enter:Load  Esc:Cancel";

/// Renders the prompt with the text typed so far.
pub fn render(frame: &mut Frame, area: Rect, input: &str) {
    let popup_area = centered_popup_area(area, POPUP_WIDTH, POPUP_HEIGHT);
    let block = create_popup_block("Wallet Address");
    let inner = block.inner(popup_area);

    frame.render_widget(Clear, popup_area);
    frame.render_widget(block, popup_area);

    if inner.height < 4 {
        return;
    }

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "Leave empty to clear the address.",
            MUTED_STYLE,
        ))),
        Rect::new(inner.x + 1, inner.y, inner.width.saturating_sub(2), 1),
    );

    let input_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(PRIMARY_COLOR));
    let input_line = Line::from(vec![
        Span::raw(input),
        Span::styled("█", Style::default().fg(Color::White)),
    ]);
    frame.render_widget(
        Paragraph::new(input_line).block(input_block),
        Rect::new(inner.x + 1, inner.y + 1, inner.width.saturating_sub(2), 3),
    );

    render_help_footer(frame, popup_area, HELP_TEXT);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{buffer_to_string, test_terminal_80x24};
    use ratatui::{Terminal, backend::TestBackend};
    use rstest::rstest;

    #[rstest]
    fn test_prompt_shows_input_and_help(mut test_terminal_80x24: Terminal<TestBackend>) {
        test_terminal_80x24
            .draw(|frame| render(frame, frame.area(), "0xabc"))
            .unwrap();

        let content = buffer_to_string(&test_terminal_80x24);
        assert!(content.contains(" Wallet Address "), "{content}");
        assert!(content.contains("0xabc█"), "{content}");
        assert!(content.contains("Enter:Load  Esc:Cancel"), "{content}");
    }
}
