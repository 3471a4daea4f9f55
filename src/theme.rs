//! Theme and styling constants for the lazywallet TUI.
//!
//! Tokyo Night-inspired colors and consistent styling.

use ratatui::style::{Color, Modifier, Style};

// ============================================================================
// Color Constants
// ============================================================================

/// Primary accent color - focused elements and highlights.
pub const PRIMARY_COLOR: Color = Color::Cyan;

/// Success indicator color.
pub const SUCCESS_COLOR: Color = Color::Green;

/// Warning indicator color.
pub const WARNING_COLOR: Color = Color::Yellow;

/// Error indicator color.
pub const ERROR_COLOR: Color = Color::Red;

/// Muted text color.
pub const MUTED_COLOR: Color = Color::Gray;

/// Accent color for special highlights.
pub const ACCENT_COLOR: Color = Color::Magenta;

// ============================================================================
// Style Constants
// ============================================================================

/// Default border style for unfocused elements.
pub const BORDER_STYLE: Style = Style::new().fg(Color::DarkGray);

/// Border style for focused/active elements.
pub const FOCUSED_BORDER_STYLE: Style = Style::new().fg(PRIMARY_COLOR);

/// Title style for focused/active elements.
pub const FOCUSED_TITLE_STYLE: Style = Style::new().fg(PRIMARY_COLOR).add_modifier(Modifier::BOLD);

/// Table header row.
pub const HEADER_ROW_STYLE: Style = Style::new().fg(ACCENT_COLOR).add_modifier(Modifier::BOLD);

/// Style for the selected table row.
pub const SELECTED_STYLE: Style = Style::new().bg(Color::DarkGray);

/// The copyable cell under the cursor.
pub const HIGHLIGHT_STYLE: Style = Style::new()
    .fg(PRIMARY_COLOR)
    .bg(Color::DarkGray)
    .add_modifier(Modifier::BOLD);

/// Placeholder and hint text.
pub const MUTED_STYLE: Style = Style::new().fg(MUTED_COLOR);

/// Cells whose underlying field could not be formatted.
pub const INVALID_CELL_STYLE: Style = Style::new().fg(WARNING_COLOR);
