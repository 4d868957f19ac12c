//! Error types for the news panel.

use thiserror::Error;

/// Everything that can go wrong while talking to the news API or starting up.
///
/// The panel treats [`Network`](PanelError::Network),
/// [`Status`](PanelError::Status) and [`Parse`](PanelError::Parse) the same
/// way: log and keep the previous display.
#[derive(Error, Debug)]
pub enum PanelError {
    /// Transport-level failure (connection refused, reset, DNS, ...).
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered with a non-success status code.
    #[error("unexpected HTTP status {0}")]
    Status(u16),

    /// The response body was not the JSON we expected.
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Invalid or unreadable configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error (log file, config file).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PanelError>;
