//! Progress / title reporter
//!
//! Turns engine notifications into tab state and widget updates. The tab a
//! notification belongs to comes from the notification itself, never from
//! whichever tab happens to be selected.

use crate::browser::Browser;
use crate::events::{EngineEvent, EngineEventKind};
use crate::Result;

impl Browser {
    /// Apply every queued notification in arrival order. Returns how many
    /// were applied to a live tab.
    pub fn process_events(&mut self) -> usize {
        let mut applied = 0;

        for event in self.events.drain() {
            match self.deliver(event) {
                Ok(true) => applied += 1,
                Ok(false) => {}
                Err(e) => tracing::warn!(
                    window_id = %event.window,
                    tab_id = %event.tab,
                    error = %e,
                    "Failed to apply engine notification"
                ),
            }
        }

        applied
    }

    /// Apply one notification. Returns `Ok(false)` when its window or tab is
    /// already gone.
    pub fn deliver(&mut self, event: EngineEvent) -> Result<bool> {
        let Ok(window) = self.windows.get_mut(event.window) else {
            tracing::debug!(window_id = %event.window, "Notification for closed window");
            return Ok(false);
        };
        let Some(index) = window.position_of(event.tab) else {
            tracing::debug!(tab_id = %event.tab, "Notification for closed tab");
            return Ok(false);
        };

        match event.kind {
            EngineEventKind::Progress(percent) => {
                let progress = window.set_tab_progress(index, percent)?;
                tracing::debug!(tab_id = %event.tab, index, %progress, "Load progress");
            }
            EngineEventKind::UrlChanged => {
                let url = window.engine(index)?.current_url();
                tracing::debug!(tab_id = %event.tab, index, url = %url, "URL changed");
                window.set_address_text(index, url)?;
            }
            EngineEventKind::LoadFinished => {
                let title = window.engine(index)?.title();
                if title.trim().is_empty() {
                    tracing::debug!(tab_id = %event.tab, index, "Load finished without a title");
                } else {
                    window.set_tab_title(index, title)?;
                }
            }
        }

        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::harness;
    use skiff_session::UiUpdate;

    #[test]
    fn test_progress_shown_then_hidden() {
        let mut h = harness();
        let window = h.browser.start().unwrap();
        let ui = h.toolkit.ui(window).unwrap();
        ui.clear_history();

        let notifier = h.engines.notifier(h.tab_id(window, 0));
        for percent in [10, 55, 100] {
            notifier.progress(percent);
        }
        assert_eq!(h.browser.process_events(), 3);

        assert_eq!(
            ui.snapshot().history,
            vec![
                UiUpdate::ProgressShown {
                    percent: 10,
                    message: "Loading Page ... (10/100). Please Wait...".to_string()
                },
                UiUpdate::ProgressShown {
                    percent: 55,
                    message: "Loading Page ... (55/100). Please Wait...".to_string()
                },
                UiUpdate::ProgressHidden,
            ]
        );
        assert!(ui.snapshot().status.is_none());
    }

    #[test]
    fn test_url_change_updates_notifying_background_tab() {
        let mut h = harness();
        let window = h.browser.start().unwrap();
        h.browser.open_tab(window).unwrap();

        // Tab 1 is active; tab 0 finishes a redirect in the background
        let background = h.tab_id(window, 0);
        h.engines
            .set_page(background, "https://www.python.org/downloads/", "Downloads");
        h.engines.notifier(background).url_changed();
        h.browser.process_events();

        let windows = h.browser.windows();
        let target = windows.get(window).unwrap();
        assert_eq!(
            target.tab(0).unwrap().address_text(),
            "https://www.python.org/downloads/"
        );
        assert_eq!(target.tab(1).unwrap().address_text(), "");

        let state = h.toolkit.ui(window).unwrap().snapshot();
        assert_eq!(state.addresses[0], "https://www.python.org/downloads/");
        assert_eq!(state.address_bar(), Some(""));
    }

    #[test]
    fn test_load_finished_sets_label_at_notifying_index() {
        let mut h = harness();
        let window = h.browser.start().unwrap();
        h.browser.open_tab(window).unwrap();
        h.browser.open_tab(window).unwrap();

        let middle = h.tab_id(window, 1);
        h.engines.set_page(middle, "https://docs.python.org/", "Python Docs");
        h.engines.notifier(middle).load_finished();
        h.browser.process_events();

        let state = h.toolkit.ui(window).unwrap().snapshot();
        assert_eq!(state.labels, vec!["New Tab", "Python Docs", "New Tab"]);
    }

    #[test]
    fn test_untitled_page_keeps_label() {
        let mut h = harness();
        let window = h.browser.start().unwrap();
        let tab = h.tab_id(window, 0);

        h.engines.notifier(tab).load_finished();
        h.browser.process_events();

        let state = h.toolkit.ui(window).unwrap().snapshot();
        assert_eq!(state.labels, vec!["New Tab"]);
    }

    #[test]
    fn test_notification_follows_tab_after_reorder() {
        let mut h = harness();
        let window = h.browser.start().unwrap();
        h.browser.open_tab(window).unwrap();
        h.browser.open_tab(window).unwrap();

        let last = h.tab_id(window, 2);
        h.engines.set_page(last, "https://pypi.org/", "PyPI");
        h.engines.notifier(last).load_finished();

        // Index 0 closes before the notification is delivered
        h.browser.close_tab(window, 0).unwrap();
        h.browser.process_events();

        let state = h.toolkit.ui(window).unwrap().snapshot();
        assert_eq!(state.labels, vec!["New Tab", "PyPI"]);
    }

    #[test]
    fn test_notifications_for_closed_tab_are_dropped() {
        let mut h = harness();
        let window = h.browser.start().unwrap();
        h.browser.open_tab(window).unwrap();

        let closed = h.tab_id(window, 1);
        let notifier = h.engines.notifier(closed);
        h.browser.close_tab(window, 1).unwrap();

        notifier.progress(20);
        notifier.url_changed();
        assert_eq!(h.browser.process_events(), 0);
    }

    #[test]
    fn test_background_progress_not_on_status_bar() {
        let mut h = harness();
        let window = h.browser.start().unwrap();
        h.browser.open_tab(window).unwrap();

        let background = h.tab_id(window, 0);
        h.engines.notifier(background).progress(30);
        h.browser.process_events();

        let ui = h.toolkit.ui(window).unwrap();
        assert!(ui.snapshot().status.is_none());

        h.browser.select_tab(window, 0).unwrap();
        assert_eq!(ui.snapshot().status.map(|(percent, _)| percent), Some(30));
    }
}
