//! reqwest-backed [`NewsApi`] implementation.

use std::time::Duration;

use reqwest::blocking::Client;

use super::news_item::CountResponse;
use super::{NewsApi, NewsItem};
use crate::error::{PanelError, Result};

const USER_AGENT: &str = concat!("news-panel/", env!("CARGO_PKG_VERSION"));

/// Talks to the aggregator over HTTP.
///
/// Requests carry no timeout: a slow response only delays its own update.
pub struct HttpNewsApi {
    client: Client,
    base_url: String,
}

impl HttpNewsApi {
    /// Create a client for the API rooted at `base_url`
    /// (e.g. `http://localhost:8080`, no trailing slash).
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(None::<Duration>)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    pub fn news_url(&self, limit: u32) -> String {
        format!("{}/api/news/{limit}", self.base_url)
    }

    pub fn count_url(&self, since: &str) -> String {
        format!(
            "{}/api/news/count?since={}",
            self.base_url,
            urlencoding::encode(since)
        )
    }

    /// GET `url` and return the body of a 2xx response.
    fn get_text(&self, url: &str) -> Result<String> {
        tracing::debug!(%url, "GET");
        let response = self.client.get(url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(PanelError::Status(status.as_u16()));
        }
        Ok(response.text()?)
    }
}

/// Decode the body of `/api/news/{limit}`.
///
/// The aggregator encodes an empty result as `null`.
pub(crate) fn parse_news(body: &str) -> Result<Vec<NewsItem>> {
    let items: Option<Vec<NewsItem>> = serde_json::from_str(body)?;
    Ok(items.unwrap_or_default())
}

/// Decode the body of `/api/news/count`.
pub(crate) fn parse_count(body: &str) -> Result<i64> {
    let response: CountResponse = serde_json::from_str(body)?;
    Ok(response.count())
}

impl NewsApi for HttpNewsApi {
    fn fetch_news(&self, limit: u32) -> Result<Vec<NewsItem>> {
        let body = self.get_text(&self.news_url(limit))?;
        parse_news(&body)
    }

    fn count_since(&self, since: &str) -> Result<i64> {
        let body = self.get_text(&self.count_url(since))?;
        parse_count(&body)
    }
}
