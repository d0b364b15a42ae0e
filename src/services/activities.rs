// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activities API client.
//!
//! Handles:
//! - Directory fetching (`GET /activities`)
//! - Signup (`POST /activities/{name}/signup?email=...`)
//! - Unregister (`DELETE /activities/{name}/unregister?email=...`)

use crate::error::{AppError, Result};
use crate::models::{Directory, MutationOutcome, MutationResponse};
use reqwest::Method;

/// Activities API client.
#[derive(Clone)]
pub struct ActivitiesClient {
    http: reqwest::Client,
    base_url: String,
}

impl ActivitiesClient {
    /// Create a client for the API rooted at `base_url` (no trailing path).
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the full activity directory.
    pub async fn fetch_activities(&self) -> Result<Directory> {
        let url = format!("{}/activities", self.base_url);
        tracing::debug!(method = "GET", url = %url, "Fetching activities");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body: MutationResponse = response.json().await.unwrap_or_default();
            return Err(AppError::Rejected {
                status: status.as_u16(),
                detail: body.detail_text(),
            });
        }

        response
            .json()
            .await
            .map_err(|e| AppError::Decode(format!("JSON parse error: {}", e)))
    }

    /// Sign `email` up for `activity`.
    pub async fn signup(&self, activity: &str, email: &str) -> Result<MutationOutcome> {
        let url = self.membership_url(activity, "signup", email);
        self.send_mutation(Method::POST, &url).await
    }

    /// Remove `email` from `activity`.
    pub async fn unregister(&self, activity: &str, email: &str) -> Result<MutationOutcome> {
        let url = self.membership_url(activity, "unregister", email);
        self.send_mutation(Method::DELETE, &url).await
    }

    /// Build `/activities/{activity}/{action}?email={email}` with both values
    /// percent-encoded.
    fn membership_url(&self, activity: &str, action: &str, email: &str) -> String {
        format!(
            "{}/activities/{}/{}?email={}",
            self.base_url,
            urlencoding::encode(activity),
            action,
            urlencoding::encode(email)
        )
    }

    async fn send_mutation(&self, method: Method, url: &str) -> Result<MutationOutcome> {
        tracing::debug!(method = %method, url = %url, "Sending membership request");

        let response = self
            .http
            .request(method, url)
            .send()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            let body: MutationResponse = response
                .json()
                .await
                .map_err(|e| AppError::Decode(format!("JSON parse error: {}", e)))?;
            return Ok(MutationOutcome::Accepted {
                message: body.message.unwrap_or_default(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;
        Ok(MutationOutcome::Rejected {
            status: status.as_u16(),
            detail: parse_error_detail(&body)?,
        })
    }
}

/// Detail of a failure body. An empty body carries no detail; a body that is
/// present but not JSON (e.g. a proxy's HTML error page) is a decode error.
fn parse_error_detail(body: &str) -> Result<Option<String>> {
    if body.trim().is_empty() {
        return Ok(None);
    }
    let parsed: MutationResponse = serde_json::from_str(body)
        .map_err(|e| AppError::Decode(format!("JSON parse error: {}", e)))?;
    Ok(parsed.detail_text())
}
