//! Toast overlay for copy confirmations and error notices.
//!
//! Toasts sit in the bottom-right corner above the footer and never take
//! input. Colour follows the message prefix: `[+]` for success, `[x]` for
//! errors.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    symbols::border,
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::theme::{BORDER_STYLE, ERROR_COLOR, SUCCESS_COLOR};

const MIN_TOAST_WIDTH: u16 = 20;
const TOAST_HEIGHT: u16 = 3;
const TOAST_PADDING_RIGHT: u16 = 2;
const TOAST_PADDING_BOTTOM: u16 = 2;
/// Border plus one column of breathing room on each side.
const TOAST_WIDTH_PADDING: u16 = 4;

/// Renders `message` as a toast inside `area`.
pub fn render_toast(frame: &mut Frame, area: Rect, message: &str) {
    let toast_area = toast_area(area, message);

    frame.render_widget(Clear, toast_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(BORDER_STYLE)
        .style(Style::default().bg(Color::Black));
    let inner = block.inner(toast_area);
    frame.render_widget(block, toast_area);

    frame.render_widget(
        Paragraph::new(message)
            .style(Style::default().fg(text_color(message)))
            .alignment(Alignment::Center),
        inner,
    );
}

fn toast_area(area: Rect, message: &str) -> Rect {
    let message_len = u16::try_from(message.chars().count()).unwrap_or(u16::MAX);
    let width = message_len
        .saturating_add(TOAST_WIDTH_PADDING)
        .min(area.width / 2)
        .max(MIN_TOAST_WIDTH)
        .min(area.width);
    let height = TOAST_HEIGHT.min(area.height);

    let x = area.x + area.width.saturating_sub(width + TOAST_PADDING_RIGHT);
    let y = area.y + area.height.saturating_sub(height + TOAST_PADDING_BOTTOM);

    Rect::new(x, y, width, height)
}

fn text_color(message: &str) -> Color {
    if message.starts_with("[+]") {
        SUCCESS_COLOR
    } else if message.starts_with("[x]") {
        ERROR_COLOR
    } else {
        Color::White
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{buffer_to_string, test_terminal};
    use ratatui::{Terminal, backend::TestBackend};
    use rstest::rstest;

    #[rstest]
    #[case::success("[+] Copied: 0xabc", SUCCESS_COLOR)]
    #[case::error("[x] Clipboard not available", ERROR_COLOR)]
    #[case::plain("Loading", Color::White)]
    #[case::empty("", Color::White)]
    fn test_text_color(#[case] message: &str, #[case] expected: Color) {
        assert_eq!(text_color(message), expected);
    }

    #[rstest]
    #[case::short(Rect::new(0, 0, 100, 50), "Hi")]
    #[case::long(
        Rect::new(0, 0, 100, 50),
        "[+] Copied: 0x5c504ed432cb51138bcf09aa5e8a410dd4a1e204ef84bfed1be16dfba1b22060"
    )]
    #[case::tiny(Rect::new(0, 0, 30, 10), "Test")]
    fn test_toast_area_stays_inside(#[case] area: Rect, #[case] message: &str) {
        let toast = toast_area(area, message);

        assert_eq!(toast.height, TOAST_HEIGHT);
        assert!(toast.width >= MIN_TOAST_WIDTH);
        assert!(toast.width <= (area.width / 2).max(MIN_TOAST_WIDTH));
        assert!(toast.right() <= area.right());
        assert!(toast.bottom() <= area.bottom());
    }

    #[rstest]
    fn test_render_toast_draws_message(mut test_terminal: Terminal<TestBackend>) {
        test_terminal
            .draw(|frame| render_toast(frame, frame.area(), "[+] Copied: 0xabc"))
            .unwrap();

        let content = buffer_to_string(&test_terminal);
        assert!(content.contains("[+] Copied: 0xabc"), "{content}");
    }
}
