//! "Copied: ..." notice with a fixed display window.

use std::time::Instant;

use crate::constants::COPY_NOTICE_DURATION;

/// The most recently copied text, until its window runs out.
///
/// Every `show` replaces the text and restarts the window, so notices never
/// stack and an older copy can never clear a newer one.
#[derive(Debug, Default)]
pub struct CopyNotice {
    active: Option<(String, Instant)>,
}

impl CopyNotice {
    pub fn show(&mut self, text: impl Into<String>, now: Instant) {
        self.active = Some((text.into(), now));
    }

    /// The copied text, if the notice is showing.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.active.as_ref().map(|(text, _)| text.as_str())
    }

    /// Drops the notice once its window has elapsed at `now`.
    ///
    /// Returns `true` if the notice was cleared by this call.
    pub fn expire(&mut self, now: Instant) -> bool {
        match &self.active {
            Some((_, shown_at)) if now.saturating_duration_since(*shown_at) >= COPY_NOTICE_DURATION => {
                self.active = None;
                true
            }
            _ => false,
        }
    }

    pub fn clear(&mut self) {
        self.active = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_notice_clears_after_window() {
        let start = Instant::now();
        let mut notice = CopyNotice::default();
        notice.show("0xabc", start);

        assert!(!notice.expire(start + Duration::from_millis(1999)));
        assert_eq!(notice.text(), Some("0xabc"));

        assert!(notice.expire(start + COPY_NOTICE_DURATION));
        assert_eq!(notice.text(), None);
        assert!(!notice.expire(start + Duration::from_secs(10)));
    }

    #[test]
    fn test_second_copy_restarts_window() {
        let start = Instant::now();
        let mut notice = CopyNotice::default();
        notice.show("first", start);
        notice.show("second", start + Duration::from_millis(1500));

        assert!(!notice.expire(start + Duration::from_millis(2500)));
        assert_eq!(notice.text(), Some("second"));
        assert!(notice.expire(start + Duration::from_millis(3500)));
    }

    #[test]
    fn test_clear() {
        let mut notice = CopyNotice::default();
        notice.show("x", Instant::now());
        notice.clear();
        assert_eq!(notice.text(), None);
    }
}
