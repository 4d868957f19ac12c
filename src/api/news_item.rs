//! The record the news API returns for each item.
//!
//! Items are displayed exactly as received: no local sorting, de-duplication
//! or mutation.  Display order is whatever order the server chose (newest
//! first for the aggregator this panel was written against).

use serde::{Deserialize, Deserializer};

/// Decode a string field that may be missing or `null` as `""`.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// One entry of `GET /api/news/{limit}`.
///
/// Every field is optional on the wire; a missing or `null` string decodes
/// as empty rather than failing the whole response.
#[derive(Debug, Clone, Default, Eq, PartialEq, Deserialize)]
pub struct NewsItem {
    /// Headline.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,

    /// URL of the full article.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub link: String,

    /// Summary text.  `None` and `""` both render as an empty line.
    #[serde(default)]
    pub description: Option<String>,

    /// Publication time as an RFC 3339 string, kept verbatim.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub date: String,

    /// URL of the feed the item was aggregated from.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub feed: String,
}

impl NewsItem {
    /// Description text, or `""` when the server sent none.
    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }
}

/// Body of `GET /api/news/count`.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct CountResponse {
    #[serde(default)]
    pub count: Option<i64>,
}

impl CountResponse {
    /// An absent or `null` count means zero.
    pub fn count(&self) -> i64 {
        self.count.unwrap_or(0)
    }
}
