//! The search bar and its placeholder dialog.
//!
//! Search is not implemented yet. Submitting the bar opens a dialog that
//! says so; the typed text is kept for display only and never queried.

/// Result of a search request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    NotImplemented,
}

impl SearchOutcome {
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::NotImplemented => "This feature is still in development.",
        }
    }
}

/// Whether the search dialog is showing, and with what.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchDialog {
    #[default]
    Closed,
    Open(SearchOutcome),
}

/// Search bar input plus dialog visibility.
#[derive(Debug, Default)]
pub struct SearchWidget {
    dialog: SearchDialog,
    input: String,
    focused: bool,
}

impl SearchWidget {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows the dialog. Also drops focus from the bar.
    pub fn open(&mut self) {
        self.dialog = SearchDialog::Open(SearchOutcome::NotImplemented);
        self.focused = false;
    }

    /// Hides the dialog. Closing a closed dialog does nothing.
    pub fn close(&mut self) {
        self.dialog = SearchDialog::Closed;
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self.dialog, SearchDialog::Open(_))
    }

    #[must_use]
    pub const fn dialog(&self) -> SearchDialog {
        self.dialog
    }

    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    #[must_use]
    pub const fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn focus(&mut self) {
        self.focused = true;
    }

    pub fn unfocus(&mut self) {
        self.focused = false;
    }

    pub fn push_char(&mut self, c: char) {
        self.input.push(c);
    }

    pub fn backspace(&mut self) {
        self.input.pop();
    }
}
