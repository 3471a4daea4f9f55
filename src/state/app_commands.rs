//! Command execution and input handling.
//!
//! Key and mouse events are mapped to [`AppCommand`]s for the current
//! [`InputContext`] and then executed against the app state.

use crossterm::event::{KeyEvent, MouseEvent};

use tracing::debug;

use super::App;
use crate::commands::{AppCommand, InputContext, KeyMapper};

impl App {
    pub(crate) fn handle_key_event(&mut self, key_event: KeyEvent) {
        let command = KeyMapper::map_key(key_event, &self.input_context());
        if command.is_exit() {
            debug!("exit requested");
        }
        self.execute_command(command);
    }

    pub(crate) fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        let command = KeyMapper::map_mouse(mouse, &self.input_context());
        self.execute_command(command);
    }

    /// Determines which keybindings are active.
    ///
    /// The search dialog takes precedence over the address prompt, which
    /// takes precedence over the focused search bar.
    #[must_use]
    pub fn input_context(&self) -> InputContext {
        if self.search.is_open() {
            InputContext::SearchDialog
        } else if self.ui.has_active_popup() {
            InputContext::AddressInput
        } else if self.search.is_focused() {
            InputContext::SearchInput
        } else {
            InputContext::Main
        }
    }

    /// Executes an application command.
    pub(crate) fn execute_command(&mut self, command: AppCommand) {
        let context = self.input_context();

        match command {
            // === Application Control ===
            AppCommand::Quit => {
                self.exit = true;
            }
            AppCommand::Refresh => {
                self.refresh();
            }

            // === Table Navigation ===
            AppCommand::MoveUp => self.history.select_prev(),
            AppCommand::MoveDown => self.history.select_next(),
            AppCommand::MoveTop => self.history.select_first(),
            AppCommand::MoveBottom => self.history.select_last(),
            AppCommand::NextField => self.history.next_copy_field(),
            AppCommand::PrevField => self.history.prev_copy_field(),
            AppCommand::CopySelected => {
                self.copy_selected_field();
            }

            // === Search Widget ===
            AppCommand::FocusSearch => {
                self.search.focus();
            }
            AppCommand::OpenSearchDialog => {
                self.search.open();
            }
            AppCommand::CloseSearchDialog => {
                self.search.close();
            }

            // === Address Prompt ===
            AppCommand::EditAddress => {
                let current = self.history.address().unwrap_or_default().to_string();
                self.ui.open_address_input(&current);
            }
            AppCommand::Submit => {
                if let Some(address) = self.ui.take_address_input() {
                    self.change_address(&address);
                }
            }

            // === Text Input ===
            AppCommand::TypeChar(c) => match context {
                InputContext::SearchInput => self.search.push_char(c),
                InputContext::AddressInput => self.ui.edit_address_input(|text| text.push(c)),
                _ => {}
            },
            AppCommand::Backspace => match context {
                InputContext::SearchInput => self.search.backspace(),
                InputContext::AddressInput => self.ui.edit_address_input(|text| {
                    text.pop();
                }),
                _ => {}
            },

            AppCommand::Dismiss => match context {
                InputContext::SearchInput => self.search.unfocus(),
                InputContext::AddressInput => self.ui.dismiss_popup(),
                InputContext::SearchDialog => self.search.close(),
                InputContext::Main => {
                    self.ui.toast = None;
                    self.copy_notice.clear();
                }
            },

            AppCommand::Noop => {}
        }
    }
}
