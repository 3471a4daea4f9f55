//! UI presentation state: the address prompt and toast notifications.

/// Ticks (of 100 ms) an error toast stays on screen.
pub const ERROR_TOAST_TICKS: u8 = 30;

/// Currently active popup.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PopupState {
    #[default]
    None,
    /// Wallet address prompt with the text typed so far.
    AddressInput(String),
}

/// UI-only state that does not belong to either panel.
///
/// # Example
///
/// ```ignore
/// let mut ui = UiState::new();
/// ui.show_toast("[x] Clipboard unavailable", ERROR_TOAST_TICKS);
/// ```
#[derive(Debug, Default)]
pub struct UiState {
    pub popup: PopupState,

    /// Toast message and remaining ticks.
    pub toast: Option<(String, u8)>,
}

impl UiState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn has_active_popup(&self) -> bool {
        self.popup != PopupState::None
    }

    pub fn dismiss_popup(&mut self) {
        self.popup = PopupState::None;
    }

    /// Opens the address prompt prefilled with `current`.
    pub fn open_address_input(&mut self, current: &str) {
        self.popup = PopupState::AddressInput(current.to_string());
    }

    /// Applies `edit` to the address prompt text, if the prompt is open.
    pub fn edit_address_input(&mut self, edit: impl FnOnce(&mut String)) {
        if let PopupState::AddressInput(ref mut text) = self.popup {
            edit(text);
        }
    }

    /// Closes the address prompt and returns what was typed.
    pub fn take_address_input(&mut self) -> Option<String> {
        match std::mem::take(&mut self.popup) {
            PopupState::AddressInput(text) => Some(text),
            PopupState::None => None,
        }
    }

    /// Shows a toast notification (non-blocking overlay that auto-dismisses).
    pub fn show_toast(&mut self, message: impl Into<String>, ticks: u8) {
        self.toast = Some((message.into(), ticks));
    }

    /// Decrements the toast countdown.
    ///
    /// # Returns
    ///
    /// `true` if the toast was removed (countdown reached zero).
    pub fn tick_toast(&mut self) -> bool {
        if let Some((_, ref mut ticks)) = self.toast {
            *ticks = ticks.saturating_sub(1);
            if *ticks == 0 {
                self.toast = None;
                return true;
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_lifecycle() {
        let mut ui = UiState::new();
        assert!(ui.toast.is_none());

        ui.show_toast("Hello", 2);
        assert_eq!(ui.toast.as_ref().map(|(msg, _)| msg.as_str()), Some("Hello"));

        assert!(!ui.tick_toast()); // 2 -> 1
        assert!(ui.tick_toast()); // 1 -> removed
        assert!(ui.toast.is_none());
        assert!(!ui.tick_toast());
    }

    #[test]
    fn test_address_input_flow() {
        let mut ui = UiState::new();
        assert!(!ui.has_active_popup());

        ui.open_address_input("0xab");
        ui.edit_address_input(|text| text.push('c'));
        assert_eq!(ui.popup, PopupState::AddressInput("0xabc".into()));

        assert_eq!(ui.take_address_input(), Some("0xabc".into()));
        assert!(!ui.has_active_popup());
        assert_eq!(ui.take_address_input(), None);
    }

    #[test]
    fn test_edit_without_prompt_is_ignored() {
        let mut ui = UiState::new();
        ui.edit_address_input(|text| text.push('x'));
        assert_eq!(ui.popup, PopupState::None);
    }
}
