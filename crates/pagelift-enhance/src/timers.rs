//! Active timer refresh
//!
//! Elements carrying a running timer show the elapsed duration since their
//! `data-start` instant. A refresh recomputes those displays and then
//! re-runs the regular time-element scan, so a periodic caller keeps the
//! whole page current.

use pagelift_dom::Document;

use crate::time::{format_duration, TimeFormatter};

/// Class marking an element as an active elapsed-time display
pub const TIMER_CLASS: &str = "timer-duration";

/// Attribute carrying the timer's start instant
pub const START_ATTR: &str = "data-start";

impl TimeFormatter {
    /// Refresh every active timer display, then re-scan time elements.
    ///
    /// Idempotent between clock ticks; meant to be called periodically or
    /// after the page adds timer elements.
    pub fn update_all_timers(&self, document: &mut Document) {
        self.refresh_timer_durations(document);
        self.format_time_elements(document);
    }

    fn refresh_timer_durations(&self, document: &mut Document) {
        let timers = document.elements_with_class(TIMER_CLASS);
        for element in timers {
            let Some(start) = document.tree().get_attr(element, START_ATTR).map(str::to_owned)
            else {
                continue;
            };
            let hours = self.elapsed_hours(Some(&start), None);
            let text = format_duration(Some(hours));
            if let Err(err) = document.tree_mut().set_text_content(element, &text) {
                tracing::error!(%err, "failed to update timer display");
            }
        }
    }
}

/// Refresh active timers and re-scan time elements in the host's local
/// offset. Entry point for surrounding page logic.
pub fn update_all_timers(document: &mut Document) {
    TimeFormatter::local().update_all_timers(document);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagelift_dom::Document;

    #[test]
    fn test_timer_element_refreshes() {
        let formatter = TimeFormatter::utc();
        let mut doc = Document::new("about:blank");
        let body = doc.body();
        let timer = doc.tree_mut().create_element("span");
        doc.tree_mut().set_attr(timer, "class", TIMER_CLASS).unwrap();
        doc.tree_mut()
            .set_attr(timer, START_ATTR, "2000-01-01T00:00:00Z")
            .unwrap();
        doc.tree_mut().append_child(body, timer).unwrap();

        formatter.update_all_timers(&mut doc);

        let text = doc.tree().text_content(timer);
        assert!(text.contains(':'), "expected HH:MM, got {text:?}");
        assert_ne!(text, "00:00");
    }

    #[test]
    fn test_timer_without_start_is_untouched() {
        let formatter = TimeFormatter::utc();
        let mut doc = Document::new("about:blank");
        let body = doc.body();
        let timer = doc.tree_mut().create_element("span");
        doc.tree_mut().set_attr(timer, "class", TIMER_CLASS).unwrap();
        doc.tree_mut().set_text_content(timer, "--:--").unwrap();
        doc.tree_mut().append_child(body, timer).unwrap();

        formatter.update_all_timers(&mut doc);
        assert_eq!(doc.tree().text_content(timer), "--:--");
    }
}
