//! Header and search bar rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::constants::SEARCH_PLACEHOLDER;
use crate::state::App;
use crate::theme::{MUTED_STYLE, SUCCESS_COLOR, WARNING_COLOR};

use super::helpers::create_border_block;

/// Columns reserved for `[lazywallet]`.
const LOGO_WIDTH: u16 = 14;

/// Render the application header: logo on the left, wallet on the right.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let header_block = create_border_block("", false);
    let inner = header_block.inner(area);
    frame.render_widget(header_block, area);

    if inner.height == 0 {
        return;
    }

    let [logo_area, wallet_area] =
        Layout::horizontal([Constraint::Length(LOGO_WIDTH), Constraint::Min(0)]).areas(inner);

    frame.render_widget(Paragraph::new(logo()), logo_area);
    frame.render_widget(
        Paragraph::new(wallet_label(app.history.address())).alignment(Alignment::Right),
        wallet_area,
    );
}

fn logo() -> Line<'static> {
    Line::from(vec![
        "[".into(),
        "lazy".green().bold(),
        "wallet".blue().bold(),
        "]".into(),
    ])
}

fn wallet_label(address: Option<&str>) -> Line<'_> {
    match address {
        Some(address) => Line::from(vec![
            Span::raw("Wallet: "),
            Span::styled(
                address,
                Style::default()
                    .fg(SUCCESS_COLOR)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        None => Line::from(Span::styled(
            "No wallet address (press a)",
            Style::default().fg(WARNING_COLOR),
        )),
    }
}

/// Render the search bar with its placeholder or the typed text.
pub fn render_search_bar(frame: &mut Frame, area: Rect, app: &App) {
    let focused = app.search.is_focused();
    let block = create_border_block("Search", focused);

    let input = app.search.input();
    let text = if input.is_empty() && !focused {
        Line::from(Span::styled(SEARCH_PLACEHOLDER, MUTED_STYLE))
    } else if input.is_empty() {
        Line::from(vec![
            Span::raw("█"),
            Span::styled(SEARCH_PLACEHOLDER, MUTED_STYLE),
        ])
    } else if focused {
        Line::from(vec![Span::raw(input), Span::raw("█")])
    } else {
        Line::from(input)
    };

    frame.render_widget(Paragraph::new(text).block(block), area);
}
