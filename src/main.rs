//! news-panel — a terminal front end for a news aggregator API.
//!
//! ## Architecture overview
//!
//! ```text
//! ┌──────────┐  PanelMsg  ┌──────────┐  draw()  ┌──────────┐
//! │ poll.rs  │ ─────────► │  app.rs  │ ───────► │  ui.rs   │
//! │(threads) │  (channel) │ (state)  │          │ (render) │
//! └──────────┘            └──────────┘          └──────────┘
//!      ▲                       ▲
//!      │ NewsApi               │ handle_key_event()
//! ┌──────────┐            ┌──────────┐
//! │  api/    │            │ input.rs │
//! └──────────┘            └──────────┘
//! ```
//!
//! * **`api/`** — the `NewsApi` trait, the `NewsItem` record and the HTTP
//!   client for `/api/news/{limit}` and `/api/news/count`.
//! * **`poll`** — the unseen-count timer and the non-blocking request
//!   dispatcher.
//! * **`app`** — the displayed items, the refresh baseline, the indicator
//!   and button state.
//! * **`ui`** — pure rendering: reads `App` state and draws widgets.
//! * **`input`** — maps key events to `App` mutations.
//! * **`config`**, **`logging`**, **`error`**, **`datefmt`** — ambient
//!   support.
//! * **`main`** — wires everything together: load config, set up the
//!   terminal, and run the event loop.

mod api;
mod app;
mod config;
mod datefmt;
mod error;
mod input;
mod logging;
mod poll;
mod ui;

use std::io;
use std::sync::{mpsc, Arc};
use std::time::Duration;

use anyhow::Result;
use chrono::Utc;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use api::HttpNewsApi;
use app::App;
use config::Config;
use poll::{PanelMsg, Requests};

// ---------------------------------------------------------------------------
// RAII terminal guard
// ---------------------------------------------------------------------------

/// Manages terminal raw-mode and alternate-screen lifetime via [`Drop`].
///
/// Constructing this struct enters raw mode + alternate screen.  When the
/// value is dropped (normally or during stack unwinding) it restores the
/// terminal.
struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalGuard {
    fn new() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(Self { terminal })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

/// Install a panic hook that restores the terminal before printing the
/// panic message.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(info);
    }));
}

/// Apply one message from the background threads.
fn process_message(app: &mut App, msg: PanelMsg, requests: &Requests) {
    match msg {
        PanelMsg::Tick => {
            requests.check_new_count(&app.last_update);
        }
        PanelMsg::News(result) => app.on_news(result, Utc::now()),
        PanelMsg::NewCount(result) => app.on_new_count(result),
    }
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    install_panic_hook();

    // -- configuration -------------------------------------------------------
    let mut config = Config::from_env()?;
    if let Some(base_url) = std::env::args().nth(1) {
        config = config.with_base_url(base_url);
    }
    config.validate()?;

    logging::init(&config.logging)?;
    tracing::info!(
        base_url = %config.base_url,
        limit = config.default_limit,
        poll_interval_ms = config.poll_interval_ms,
        "news panel starting"
    );

    // -- background work -----------------------------------------------------
    let api = Arc::new(HttpNewsApi::new(config.base_url.clone())?);
    let (tx, rx) = mpsc::channel();
    let requests = Requests::new(api, tx.clone());
    poll::spawn_timer(config.poll_interval(), tx);

    // -- terminal setup (RAII — Drop restores on exit or panic) --------------
    let mut guard = TerminalGuard::new()?;
    let mut app = App::new(Utc::now());

    // Initial load.
    requests.refresh(config.default_limit);

    // -- main event loop -----------------------------------------------------
    // Each ~100 ms iteration drains finished requests and timer ticks,
    // renders, then waits for keyboard input.
    let tick_rate = Duration::from_millis(100);

    loop {
        while let Ok(msg) = rx.try_recv() {
            process_message(&mut app, msg, &requests);
        }

        guard.terminal.draw(|f| ui::draw(&mut app, f))?;

        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                input::handle_key_event(&mut app, key);
            }
        }

        if app.take_refresh_request() {
            requests.refresh(config.default_limit);
        }

        if app.quit {
            break;
        }
    }

    tracing::info!("news panel exiting");
    Ok(())
}
