//! Background work: the poll timer and the request dispatcher.
//!
//! Both talk to the UI thread over one [`mpsc`] channel of [`PanelMsg`]s.
//!
//! ```text
//!  timer thread ── Tick ──────────────┐
//!                                     ▼
//!  worker (refresh) ── News ──► UI loop ── check_new_count(last_update)
//!  worker (count) ──── NewCount ─┘         refresh(limit)
//! ```
//!
//! ## For contributors
//!
//! Every request gets its own short-lived thread, so a slow response never
//! holds up the next tick or a key press.  Nothing de-duplicates requests:
//! if two are in flight, whichever finishes last is applied last.

use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crate::api::{NewsApi, NewsItem};
use crate::error::Result;

/// Messages delivered to the UI thread.
#[derive(Debug)]
pub enum PanelMsg {
    /// Time to check for unseen items.
    Tick,
    /// Outcome of a full refresh.
    News(Result<Vec<NewsItem>>),
    /// Outcome of an unseen-count check.
    NewCount(Result<i64>),
}

/// Spawn the thread that sends [`PanelMsg::Tick`] every `interval`.
///
/// The first tick comes one interval after start.  The thread runs until
/// the receiving end of `tx` is dropped.
pub fn spawn_timer(interval: Duration, tx: Sender<PanelMsg>) -> JoinHandle<()> {
    thread::spawn(move || loop {
        thread::sleep(interval);
        if tx.send(PanelMsg::Tick).is_err() {
            return;
        }
    })
}

/// Fires API calls without blocking the caller.
#[derive(Clone)]
pub struct Requests {
    api: Arc<dyn NewsApi>,
    tx: Sender<PanelMsg>,
}

impl Requests {
    pub fn new(api: Arc<dyn NewsApi>, tx: Sender<PanelMsg>) -> Self {
        Self { api, tx }
    }

    /// Start a full refresh of up to `limit` items.
    pub fn refresh(&self, limit: u32) -> JoinHandle<()> {
        let api = Arc::clone(&self.api);
        let tx = self.tx.clone();
        thread::spawn(move || {
            let result = api.fetch_news(limit);
            // The UI has exited if this fails; nothing left to update.
            let _ = tx.send(PanelMsg::News(result));
        })
    }

    /// Start an unseen-count check relative to `since`.
    pub fn check_new_count(&self, since: &str) -> JoinHandle<()> {
        let api = Arc::clone(&self.api);
        let tx = self.tx.clone();
        let since = since.to_owned();
        thread::spawn(move || {
            let result = api.count_since(&since);
            let _ = tx.send(PanelMsg::NewCount(result));
        })
    }
}
