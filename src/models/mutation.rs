// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Signup/unregister response bodies.

use serde::Deserialize;

/// Body returned by the signup and unregister endpoints.
///
/// Success responses carry `message`, failures carry `detail`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MutationResponse {
    #[serde(default)]
    pub message: Option<String>,
    /// Usually a string; FastAPI validation errors send a list instead.
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl MutationResponse {
    /// The error detail, if the server sent it as a string.
    pub fn detail_text(&self) -> Option<String> {
        self.detail
            .as_ref()
            .and_then(|d| d.as_str())
            .filter(|d| !d.is_empty())
            .map(str::to_string)
    }
}

/// Result of a signup or unregister request that reached the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationOutcome {
    /// 2xx response
    Accepted { message: String },
    /// Non-2xx response; `detail` is absent if the server gave none
    Rejected { status: u16, detail: Option<String> },
}

impl MutationOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, MutationOutcome::Accepted { .. })
    }
}
