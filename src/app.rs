use chrono::{DateTime, Utc};
use ratatui::widgets::ListState;

use crate::api::NewsItem;
use crate::datefmt::iso_timestamp;
use crate::error::Result;

/// Suffix of the unseen-count indicator ("5 новых").
const NEW_SUFFIX: &str = "новых";

pub struct App {
    /// Items from the most recent successful refresh, in server order.
    pub items: Vec<NewsItem>,
    /// List selection state for scrolling.
    pub list_state: ListState,
    /// ISO-8601 time of the last successful refresh; the baseline for
    /// unseen-count checks.  Starts at the time the panel was created.
    pub last_update: String,
    /// Last unseen count reported by the server.
    pub new_count: i64,
    /// Whether the refresh button can be pressed.
    pub refresh_enabled: bool,
    /// Set by a button press, consumed by the main loop.
    refresh_requested: bool,
    /// Whether the user has requested to quit.
    pub quit: bool,
}

impl App {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            items: Vec::new(),
            list_state: ListState::default(),
            last_update: iso_timestamp(now),
            new_count: 0,
            refresh_enabled: false,
            refresh_requested: false,
            quit: false,
        }
    }

    /// Indicator text, e.g. `3 новых`.
    pub fn indicator(&self) -> String {
        format!("{} {NEW_SUFFIX}", self.new_count)
    }

    // -- refresh -------------------------------------------------------------

    /// Replace the displayed list after a successful refresh completed at `now`.
    pub fn apply_refresh(&mut self, items: Vec<NewsItem>, now: DateTime<Utc>) {
        self.items = items;
        self.list_state = ListState::default();
        self.last_update = iso_timestamp(now);
        self.new_count = 0;
        self.refresh_enabled = false;
    }

    /// Handle the outcome of a refresh.  Failures only get logged; the list
    /// and baseline stay as they were.
    pub fn on_news(&mut self, result: Result<Vec<NewsItem>>, now: DateTime<Utc>) {
        match result {
            Ok(items) => {
                tracing::debug!(count = items.len(), "news refreshed");
                self.apply_refresh(items, now);
            }
            Err(e) => tracing::error!("Ошибка загрузки новостей: {e}"),
        }
    }

    // -- unseen count --------------------------------------------------------

    pub fn apply_new_count(&mut self, count: i64) {
        self.new_count = count;
        self.refresh_enabled = count > 0;
    }

    /// Handle the outcome of an unseen-count check.  Failures leave the
    /// indicator and button untouched.
    pub fn on_new_count(&mut self, result: Result<i64>) {
        match result {
            Ok(count) => {
                tracing::debug!(count, since = %self.last_update, "unseen count");
                self.apply_new_count(count);
            }
            Err(e) => tracing::error!("Ошибка получения количества новых: {e}"),
        }
    }

    // -- button --------------------------------------------------------------

    /// Press the refresh button.  Ignored while it is disabled.
    pub fn press_refresh(&mut self) {
        if self.refresh_enabled {
            self.refresh_requested = true;
        }
    }

    /// Returns `true` once per accepted button press.
    pub fn take_refresh_request(&mut self) -> bool {
        std::mem::take(&mut self.refresh_requested)
    }

    // -- navigation ----------------------------------------------------------

    pub fn select_next(&mut self) {
        if self.items.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => (i + 1).min(self.items.len() - 1),
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    pub fn select_previous(&mut self) {
        if self.items.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => i.saturating_sub(1),
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    pub fn select_first(&mut self) {
        if !self.items.is_empty() {
            self.list_state.select(Some(0));
        }
    }

    pub fn select_last(&mut self) {
        if !self.items.is_empty() {
            self.list_state.select(Some(self.items.len() - 1));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PanelError;
    use chrono::TimeZone;

    fn at(h: u32, m: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 18, h, m, s).unwrap()
    }

    fn make_item(title: &str) -> NewsItem {
        NewsItem {
            title: title.to_string(),
            link: format!("https://example.com/{title}"),
            description: None,
            date: "2026-10-18T10:00:00Z".to_string(),
            feed: "https://example.com/rss".to_string(),
        }
    }

    fn sample_items() -> Vec<NewsItem> {
        vec![make_item("one"), make_item("two"), make_item("three")]
    }

    // -- construction --------------------------------------------------------

    #[test]
    fn new_app_starts_empty() {
        let app = App::new(at(9, 0, 0));
        assert!(app.items.is_empty());
        assert!(!app.quit);
        assert!(!app.refresh_enabled);
        assert_eq!(app.last_update, "2026-10-18T09:00:00.000Z");
        assert_eq!(app.indicator(), "0 новых");
    }

    // -- refresh -------------------------------------------------------------

    #[test]
    fn refresh_replaces_items_in_server_order() {
        let mut app = App::new(at(9, 0, 0));
        app.apply_refresh(vec![make_item("old")], at(9, 1, 0));
        app.apply_refresh(sample_items(), at(9, 2, 0));

        let titles: Vec<&str> = app.items.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["one", "two", "three"]);
    }

    #[test]
    fn refresh_resets_indicator_and_disables_button() {
        let mut app = App::new(at(9, 0, 0));
        app.apply_new_count(5);
        assert!(app.refresh_enabled);

        app.on_news(Ok(sample_items()), at(9, 30, 15));

        assert_eq!(app.indicator(), "0 новых");
        assert!(!app.refresh_enabled);
        assert_eq!(app.last_update, "2026-10-18T09:30:15.000Z");
    }

    #[test]
    fn refresh_resets_selection() {
        let mut app = App::new(at(9, 0, 0));
        app.apply_refresh(sample_items(), at(9, 1, 0));
        app.select_last();

        app.apply_refresh(vec![make_item("only")], at(9, 2, 0));
        assert!(app.list_state.selected().is_none());
    }

    #[test]
    fn failed_refresh_keeps_previous_state() {
        let mut app = App::new(at(9, 0, 0));
        app.apply_refresh(sample_items(), at(9, 1, 0));
        app.apply_new_count(2);

        app.on_news(Err(PanelError::Status(500)), at(9, 5, 0));

        assert_eq!(app.items.len(), 3);
        assert_eq!(app.last_update, "2026-10-18T09:01:00.000Z");
        assert_eq!(app.indicator(), "2 новых");
        assert!(app.refresh_enabled);
    }

    #[test]
    fn empty_refresh_clears_list() {
        let mut app = App::new(at(9, 0, 0));
        app.apply_refresh(sample_items(), at(9, 1, 0));
        app.on_news(Ok(vec![]), at(9, 2, 0));
        assert!(app.items.is_empty());
    }

    // -- unseen count --------------------------------------------------------

    #[test]
    fn positive_count_enables_button() {
        let mut app = App::new(at(9, 0, 0));
        app.on_new_count(Ok(5));
        assert_eq!(app.indicator(), "5 новых");
        assert!(app.refresh_enabled);
    }

    #[test]
    fn zero_count_disables_button() {
        let mut app = App::new(at(9, 0, 0));
        app.apply_new_count(3);
        app.on_new_count(Ok(0));
        assert_eq!(app.indicator(), "0 новых");
        assert!(!app.refresh_enabled);
    }

    #[test]
    fn failed_count_keeps_indicator() {
        let mut app = App::new(at(9, 0, 0));
        app.apply_new_count(7);

        let parse_err = serde_json::from_str::<i64>("nope").unwrap_err();
        app.on_new_count(Err(parse_err.into()));

        assert_eq!(app.indicator(), "7 новых");
        assert!(app.refresh_enabled);
    }

    #[test]
    fn later_result_wins() {
        let mut app = App::new(at(9, 0, 0));
        // Count check issued before the refresh but answered after it.
        app.on_news(Ok(sample_items()), at(9, 1, 0));
        app.on_new_count(Ok(4));
        assert_eq!(app.indicator(), "4 новых");
        assert!(app.refresh_enabled);

        // And the other way round.
        app.on_news(Ok(sample_items()), at(9, 2, 0));
        assert_eq!(app.indicator(), "0 новых");
        assert!(!app.refresh_enabled);
    }

    // -- button --------------------------------------------------------------

    #[test]
    fn press_is_ignored_while_disabled() {
        let mut app = App::new(at(9, 0, 0));
        app.press_refresh();
        assert!(!app.take_refresh_request());
    }

    #[test]
    fn press_is_consumed_once() {
        let mut app = App::new(at(9, 0, 0));
        app.apply_new_count(1);
        app.press_refresh();

        assert!(app.take_refresh_request());
        assert!(!app.take_refresh_request());
    }

    // -- navigation ----------------------------------------------------------

    #[test]
    fn navigation_on_empty_is_noop() {
        let mut app = App::new(at(9, 0, 0));
        app.select_next();
        app.select_previous();
        app.select_first();
        app.select_last();
        assert!(app.list_state.selected().is_none());
    }

    #[test]
    fn select_next_starts_at_zero_and_clamps() {
        let mut app = App::new(at(9, 0, 0));
        app.apply_refresh(sample_items(), at(9, 1, 0));

        app.select_next();
        assert_eq!(app.list_state.selected(), Some(0));
        app.select_next();
        app.select_next();
        app.select_next();
        assert_eq!(app.list_state.selected(), Some(2));
    }

    #[test]
    fn select_previous_clamps_at_zero() {
        let mut app = App::new(at(9, 0, 0));
        app.apply_refresh(sample_items(), at(9, 1, 0));

        app.select_last();
        app.select_previous();
        assert_eq!(app.list_state.selected(), Some(1));
        app.select_first();
        app.select_previous();
        assert_eq!(app.list_state.selected(), Some(0));
    }
}
