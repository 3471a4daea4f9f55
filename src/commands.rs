//! Command pattern for key event handling in the TUI application.
//!
//! Key events are translated into [`AppCommand`]s by [`KeyMapper`], based on
//! the [`InputContext`] the app is in. The mapping is a pure function, so
//! every binding is testable without a terminal.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};

// ============================================================================
// Input Context
// ============================================================================

/// Represents the current input context for key mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    /// Browsing the transfers table.
    Main,
    /// Typing into the (decorative) search bar.
    SearchInput,
    /// The "still in development" search dialog is open.
    SearchDialog,
    /// Editing the wallet address.
    AddressInput,
}

// ============================================================================
// App Commands
// ============================================================================

/// All possible commands the application can execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppCommand {
    // === Application Control ===
    /// Exit the application.
    Quit,
    /// Reload transfers for the current address.
    Refresh,

    // === Table Navigation ===
    MoveUp,
    MoveDown,
    MoveTop,
    MoveBottom,
    /// Select the next copyable column.
    NextField,
    /// Select the previous copyable column.
    PrevField,
    /// Copy the selected cell to the clipboard.
    CopySelected,

    // === Search Widget ===
    /// Put the cursor in the search bar.
    FocusSearch,
    /// Open the search dialog.
    OpenSearchDialog,
    /// Close the search dialog.
    CloseSearchDialog,

    // === Address Prompt ===
    /// Open the wallet address prompt.
    EditAddress,
    /// Confirm the current text input.
    Submit,

    // === Text Input ===
    TypeChar(char),
    Backspace,

    /// Leave the current input context.
    Dismiss,

    // === No Operation ===
    /// No action to perform (unhandled key).
    Noop,
}

impl AppCommand {
    /// Returns `true` if this command would exit the application.
    #[must_use]
    pub const fn is_exit(&self) -> bool {
        matches!(self, Self::Quit)
    }
}

// ============================================================================
// Key Mapper
// ============================================================================

/// Maps key events to application commands based on the current input context.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyMapper;

impl KeyMapper {
    /// Maps a key event to an application command based on the current context.
    #[must_use]
    pub fn map_key(key: KeyEvent, context: &InputContext) -> AppCommand {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return AppCommand::Quit;
        }

        match context {
            InputContext::Main => Self::map_main_keys(key),
            InputContext::SearchInput => Self::map_search_input_keys(key),
            InputContext::SearchDialog => Self::map_search_dialog_keys(key),
            InputContext::AddressInput => Self::map_address_input_keys(key),
        }
    }

    /// Maps mouse events. Only wheel scrolling is bound.
    #[must_use]
    pub fn map_mouse(mouse: MouseEvent, context: &InputContext) -> AppCommand {
        if *context != InputContext::Main {
            return AppCommand::Noop;
        }
        match mouse.kind {
            MouseEventKind::ScrollUp => AppCommand::MoveUp,
            MouseEventKind::ScrollDown => AppCommand::MoveDown,
            _ => AppCommand::Noop,
        }
    }

    fn map_main_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Char('q') => AppCommand::Quit,
            KeyCode::Char('r') => AppCommand::Refresh,
            KeyCode::Up | KeyCode::Char('k') => AppCommand::MoveUp,
            KeyCode::Down | KeyCode::Char('j') => AppCommand::MoveDown,
            KeyCode::Home | KeyCode::Char('g') => AppCommand::MoveTop,
            KeyCode::End | KeyCode::Char('G') => AppCommand::MoveBottom,
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => AppCommand::NextField,
            KeyCode::Left | KeyCode::Char('h') | KeyCode::BackTab => AppCommand::PrevField,
            KeyCode::Enter | KeyCode::Char('c') | KeyCode::Char('y') => AppCommand::CopySelected,
            KeyCode::Char('/') => AppCommand::FocusSearch,
            KeyCode::Char('s') => AppCommand::OpenSearchDialog,
            KeyCode::Char('a') => AppCommand::EditAddress,
            KeyCode::Esc => AppCommand::Dismiss,
            _ => AppCommand::Noop,
        }
    }

    fn map_search_input_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Esc => AppCommand::Dismiss,
            KeyCode::Enter => AppCommand::OpenSearchDialog,
            KeyCode::Backspace => AppCommand::Backspace,
            KeyCode::Char(c) => AppCommand::TypeChar(c),
            _ => AppCommand::Noop,
        }
    }

    fn map_search_dialog_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => AppCommand::CloseSearchDialog,
            _ => AppCommand::Noop,
        }
    }

    fn map_address_input_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Esc => AppCommand::Dismiss,
            KeyCode::Enter => AppCommand::Submit,
            KeyCode::Backspace => AppCommand::Backspace,
            KeyCode::Char(c) => AppCommand::TypeChar(c),
            _ => AppCommand::Noop,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState};

    fn key_event(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }
    }

    fn mouse_event(kind: MouseEventKind) -> MouseEvent {
        MouseEvent {
            kind,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::empty(),
        }
    }

    #[test]
    fn test_main_bindings() {
        let cases = [
            (KeyCode::Char('q'), AppCommand::Quit),
            (KeyCode::Char('r'), AppCommand::Refresh),
            (KeyCode::Up, AppCommand::MoveUp),
            (KeyCode::Char('j'), AppCommand::MoveDown),
            (KeyCode::Home, AppCommand::MoveTop),
            (KeyCode::Char('G'), AppCommand::MoveBottom),
            (KeyCode::Right, AppCommand::NextField),
            (KeyCode::Left, AppCommand::PrevField),
            (KeyCode::Char('c'), AppCommand::CopySelected),
            (KeyCode::Enter, AppCommand::CopySelected),
            (KeyCode::Char('/'), AppCommand::FocusSearch),
            (KeyCode::Char('s'), AppCommand::OpenSearchDialog),
            (KeyCode::Char('a'), AppCommand::EditAddress),
            (KeyCode::Char('z'), AppCommand::Noop),
        ];

        for (code, expected) in cases {
            assert_eq!(
                KeyMapper::map_key(key_event(code), &InputContext::Main),
                expected,
                "{code:?}"
            );
        }
    }

    #[test]
    fn test_search_input_types_letters_that_are_bindings_elsewhere() {
        for c in ['q', 'r', 'c', 's', '/'] {
            assert_eq!(
                KeyMapper::map_key(key_event(KeyCode::Char(c)), &InputContext::SearchInput),
                AppCommand::TypeChar(c)
            );
        }
        assert_eq!(
            KeyMapper::map_key(key_event(KeyCode::Enter), &InputContext::SearchInput),
            AppCommand::OpenSearchDialog
        );
        assert_eq!(
            KeyMapper::map_key(key_event(KeyCode::Esc), &InputContext::SearchInput),
            AppCommand::Dismiss
        );
    }

    #[test]
    fn test_search_dialog_closes_on_esc_enter_q() {
        for code in [KeyCode::Esc, KeyCode::Enter, KeyCode::Char('q')] {
            assert_eq!(
                KeyMapper::map_key(key_event(code), &InputContext::SearchDialog),
                AppCommand::CloseSearchDialog
            );
        }
        assert_eq!(
            KeyMapper::map_key(key_event(KeyCode::Char('x')), &InputContext::SearchDialog),
            AppCommand::Noop
        );
    }

    #[test]
    fn test_address_input_bindings() {
        let ctx = InputContext::AddressInput;
        assert_eq!(
            KeyMapper::map_key(key_event(KeyCode::Enter), &ctx),
            AppCommand::Submit
        );
        assert_eq!(
            KeyMapper::map_key(key_event(KeyCode::Backspace), &ctx),
            AppCommand::Backspace
        );
        assert_eq!(
            KeyMapper::map_key(key_event(KeyCode::Char('x')), &ctx),
            AppCommand::TypeChar('x')
        );
    }

    #[test]
    fn test_ctrl_c_quits_everywhere() {
        let ctrl_c = KeyEvent {
            modifiers: KeyModifiers::CONTROL,
            ..key_event(KeyCode::Char('c'))
        };
        for ctx in [
            InputContext::Main,
            InputContext::SearchInput,
            InputContext::SearchDialog,
            InputContext::AddressInput,
        ] {
            assert!(KeyMapper::map_key(ctrl_c, &ctx).is_exit(), "{ctx:?}");
        }
    }

    #[test]
    fn test_mouse_scroll_only_in_main() {
        assert_eq!(
            KeyMapper::map_mouse(mouse_event(MouseEventKind::ScrollDown), &InputContext::Main),
            AppCommand::MoveDown
        );
        assert_eq!(
            KeyMapper::map_mouse(mouse_event(MouseEventKind::ScrollUp), &InputContext::Main),
            AppCommand::MoveUp
        );
        assert_eq!(
            KeyMapper::map_mouse(
                mouse_event(MouseEventKind::ScrollDown),
                &InputContext::AddressInput
            ),
            AppCommand::Noop
        );
    }
}
