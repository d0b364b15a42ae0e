// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types.

/// Errors raised while talking to the activities API or rendering the page.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The request never completed (connection refused, reset, DNS, ...).
    #[error("Network error: {0}")]
    Network(String),

    /// The response body was not the JSON we expected.
    #[error("Decode error: {0}")]
    Decode(String),

    /// The server answered with a non-2xx status.
    #[error("Request rejected with HTTP {status}: {}", .detail.as_deref().unwrap_or("no detail"))]
    Rejected { status: u16, detail: Option<String> },

    #[error("Render error: {0}")]
    Render(String),
}

impl From<askama::Error> for AppError {
    fn from(err: askama::Error) -> Self {
        AppError::Render(err.to_string())
    }
}

impl AppError {
    /// Whether the failure happened below the HTTP layer.
    pub fn is_network(&self) -> bool {
        matches!(self, AppError::Network(_))
    }
}

/// Result type alias for client and rendering operations
pub type Result<T> = std::result::Result<T, AppError>;
