// Error module for the failure kinds an operation can reject with

use thiserror::Error;

use crate::platform::{Operation, Platform};

pub type Result<T, E = MarketError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum MarketError {
    /// A required option was absent or empty. Raised before any I/O.
    #[error("{0} is missing")]
    MissingParameter(&'static str),

    /// A URL could not be built from caller input.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Transport failure talking to the lookup endpoint.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The lookup payload did not have the expected shape.
    #[error("failed to decode lookup response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("no apps found for given appId '{0}'")]
    NotFound(String),

    #[error("{} is not implemented on {}.", .operation.name(), .platform)]
    Unsupported {
        operation: Operation,
        platform: Platform,
    },

    /// The OS has no handler for the URL (nor for its web fallback).
    #[error("no application can open {0}")]
    NotOpenable(String),

    /// The OS accepted the request but the launch itself failed.
    #[error("failed to launch {url}: {reason}")]
    Launch { url: String, reason: String },

    #[error("UI context is no longer running")]
    UiContextClosed,

    #[error("failed to start UI context: {0}")]
    UiContextStart(#[source] std::io::Error),

    #[error("configuration error: {0}")]
    Config(String),
}

impl MarketError {
    /// Stable short code for bridges that reject with `(code, message)`.
    pub fn code(&self) -> &'static str {
        match self {
            MarketError::MissingParameter(_) => "MISSING_PARAMETER",
            MarketError::InvalidRequest(_) => "INVALID_REQUEST",
            MarketError::Network(_) => "NETWORK_ERROR",
            MarketError::Decode(_) => "DECODE_ERROR",
            MarketError::NotFound(_) => "NOT_FOUND",
            MarketError::Unsupported { .. } => "UNIMPLEMENTED",
            MarketError::NotOpenable(_) => "NOT_OPENABLE",
            MarketError::Launch { .. } => "LAUNCH_FAILED",
            MarketError::UiContextClosed | MarketError::UiContextStart(_) => "UI_CONTEXT_CLOSED",
            MarketError::Config(_) => "CONFIG_ERROR",
        }
    }
}
