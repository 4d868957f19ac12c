//! News API client layer.
//!
//! This module defines the [`NewsApi`] trait, the [`NewsItem`] record, and
//! the HTTP implementation ([`HttpNewsApi`]) that talks to the aggregator.
//!
//! ## For contributors
//!
//! The rest of the application only sees `Arc<dyn NewsApi>`, so tests (and
//! any alternative backend) just implement the two methods below.

#[cfg(test)]
mod fake;
mod http;
mod news_item;

#[cfg(test)]
pub use fake::FakeApi;
pub use http::HttpNewsApi;
pub use news_item::NewsItem;

use crate::error::Result;

/// The two endpoints the panel depends on.
///
/// Calls block the current thread; the dispatcher in [`crate::poll`] runs
/// each one on its own worker so the UI never waits on the network.
pub trait NewsApi: Send + Sync {
    /// `GET /api/news/{limit}`: up to `limit` items in server order.
    fn fetch_news(&self, limit: u32) -> Result<Vec<NewsItem>>;

    /// `GET /api/news/count?since=...`: how many items were published after
    /// `since` (an ISO-8601 timestamp, sent verbatim).
    fn count_since(&self, since: &str) -> Result<i64>;
}
