// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application context and user flows.
//!
//! Handles:
//! 1. Initial load: fetch the directory and render it
//! 2. Signup: submit the form, show the outcome, refresh on success
//! 3. Unregister: delegated click on a participant control, refresh on success
//!
//! Every successful mutation is followed by a full re-fetch; the page keeps no
//! cache of its own.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use crate::error::Result;
use crate::models::MutationOutcome;
use crate::services::ActivitiesClient;
use crate::ui::render::{render_directory, render_load_failure};
use crate::ui::{MessageKind, Page, UiEvent};

const SIGNUP_REJECTED_FALLBACK: &str = "An error occurred";
const SIGNUP_FAILED: &str = "Failed to sign up. Please try again.";
const UNREGISTER_REJECTED_FALLBACK: &str = "Failed to unregister";
const UNREGISTER_FAILED: &str = "Failed to unregister. Please try again.";

/// How long messages stay visible before their auto-hide timer fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageTimings {
    /// Every signup outcome
    pub signup: Duration,
    /// Successful unregisters
    pub unregister: Duration,
}

impl Default for MessageTimings {
    fn default() -> Self {
        Self {
            signup: Duration::from_millis(5000),
            unregister: Duration::from_millis(3000),
        }
    }
}

/// Shared application context. Clones share the same page.
#[derive(Clone)]
pub struct App {
    inner: Arc<AppInner>,
}

struct AppInner {
    client: ActivitiesClient,
    timings: MessageTimings,
    page: Mutex<Page>,
}

impl App {
    pub fn new(client: ActivitiesClient, timings: MessageTimings) -> Self {
        Self {
            inner: Arc::new(AppInner {
                client,
                timings,
                page: Mutex::new(Page::default()),
            }),
        }
    }

    /// Snapshot of the current page.
    pub fn page(&self) -> Page {
        self.with_page(|page| page.clone())
    }

    /// Render the current page as a full HTML document.
    pub fn render_html(&self) -> Result<String> {
        self.page().to_html()
    }

    /// Initial load.
    pub async fn start(&self) {
        tracing::info!(api = self.inner.client.base_url(), "Starting activity board");
        self.refresh().await;
    }

    /// Fetch the directory and re-render. Failures replace the list with an
    /// error notice and leave the selection control untouched.
    pub async fn refresh(&self) {
        match self.inner.client.fetch_activities().await {
            Ok(directory) => {
                tracing::debug!(count = directory.len(), "Activities loaded");
                self.with_page(|page| render_directory(page, &directory));
            }
            Err(err) => {
                tracing::error!(error = %err, "Error fetching activities");
                self.with_page(render_load_failure);
            }
        }
    }

    /// Fill in the signup form fields.
    pub fn set_signup_form(&self, email: &str, activity: &str) {
        self.with_page(|page| {
            page.signup_form.email = email.to_string();
            page.signup_form.activity = activity.to_string();
        });
    }

    /// The single delegated listener for form submits and list clicks.
    pub async fn dispatch(&self, event: UiEvent) {
        match event {
            UiEvent::Submit => self.submit_signup().await,
            UiEvent::Click(target) => match target.unregister_request() {
                Some((activity, email)) => self.unregister(activity, email).await,
                None => tracing::trace!(?target, "Ignoring click"),
            },
        }
    }

    /// Submit the signup form.
    pub async fn submit_signup(&self) {
        let form = self.with_page(|page| page.signup_form.clone());
        tracing::info!(activity = %form.activity, email = %form.email, "Signing up");

        match self.inner.client.signup(&form.activity, &form.email).await {
            Ok(MutationOutcome::Accepted { message }) => {
                self.with_page(|page| {
                    page.message.show(MessageKind::Success, message);
                    page.signup_form.reset();
                });
                self.schedule_hide(self.inner.timings.signup);
                self.refresh().await;
            }
            Ok(MutationOutcome::Rejected { status, detail }) => {
                tracing::warn!(status, detail = ?detail, "Signup rejected");
                let text = detail.unwrap_or_else(|| SIGNUP_REJECTED_FALLBACK.to_string());
                self.with_page(|page| page.message.show(MessageKind::Error, text));
                self.schedule_hide(self.inner.timings.signup);
            }
            Err(err) => {
                tracing::error!(error = %err, "Error signing up");
                self.with_page(|page| page.message.show(MessageKind::Error, SIGNUP_FAILED));
                self.schedule_hide(self.inner.timings.signup);
            }
        }
    }

    /// Remove `email` from `activity`.
    pub async fn unregister(&self, activity: &str, email: &str) {
        tracing::info!(activity, email, "Unregistering participant");

        match self.inner.client.unregister(activity, email).await {
            Ok(MutationOutcome::Accepted { message }) => {
                self.with_page(|page| page.message.show(MessageKind::Success, message));
                self.schedule_hide(self.inner.timings.unregister);
                self.refresh().await;
            }
            Ok(MutationOutcome::Rejected { status, detail }) => {
                tracing::warn!(status, detail = ?detail, "Unregister rejected");
                let text = detail.unwrap_or_else(|| UNREGISTER_REJECTED_FALLBACK.to_string());
                self.with_page(|page| page.message.show(MessageKind::Error, text));
            }
            Err(err) => {
                tracing::error!(error = %err, "Error unregistering participant");
                self.with_page(|page| page.message.show(MessageKind::Error, UNREGISTER_FAILED));
            }
        }
    }

    /// Hide the message area after `delay`. Timers are never cancelled, so an
    /// older timer can hide a newer message.
    fn schedule_hide(&self, delay: Duration) {
        let app = self.clone();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            app.with_page(|page| page.message.hide());
        });
    }

    fn with_page<R>(&self, f: impl FnOnce(&mut Page) -> R) -> R {
        let mut page = self
            .inner
            .page
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        f(&mut *page)
    }
}
