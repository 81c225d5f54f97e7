//! Gateway error types

use crate::core::SnapshotError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("invalid server URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        source: url::ParseError,
    },

    #[error("{path} failed: {source}")]
    Transport {
        path: &'static str,
        source: reqwest::Error,
    },

    #[error("{path} returned status {status}")]
    Status { path: &'static str, status: u16 },

    #[error("{path} returned malformed JSON: {source}")]
    Malformed {
        path: &'static str,
        source: serde_json::Error,
    },

    #[error("{path} returned an invalid game snapshot: {source}")]
    InvalidSnapshot {
        path: &'static str,
        source: SnapshotError,
    },

    #[error("{path} returned an unexpected kind of response")]
    UnexpectedResponse { path: &'static str },

    #[error("request worker is not running")]
    WorkerGone,
}

impl GatewayError {
    /// Server answered, just not with a 2xx
    #[must_use]
    pub const fn is_server_failure(&self) -> bool {
        matches!(self, Self::Status { .. })
    }
}
