//! Canned [`NewsApi`] for tests: fixed answers, records every call.

use std::sync::Mutex;

use super::{NewsApi, NewsItem};
use crate::error::{PanelError, Result};

#[derive(Default)]
pub struct FakeApi {
    pub items: Vec<NewsItem>,
    pub count: i64,
    pub fail: bool,
    pub limits: Mutex<Vec<u32>>,
    pub sinces: Mutex<Vec<String>>,
}

impl NewsApi for FakeApi {
    fn fetch_news(&self, limit: u32) -> Result<Vec<NewsItem>> {
        self.limits.lock().unwrap().push(limit);
        if self.fail {
            return Err(PanelError::Status(500));
        }
        Ok(self.items.iter().take(limit as usize).cloned().collect())
    }

    fn count_since(&self, since: &str) -> Result<i64> {
        self.sinces.lock().unwrap().push(since.to_string());
        if self.fail {
            return Err(PanelError::Status(502));
        }
        Ok(self.count)
    }
}
