// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! UI events delivered to the single delegated listener.

use std::collections::BTreeMap;

pub const UNREGISTER_ACTION: &str = "unregister";

/// An event reaching the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// The signup form was submitted.
    Submit,
    /// A click that bubbled up to the activity list container.
    Click(EventTarget),
}

/// The element a click landed on, reduced to its `data-*` attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventTarget {
    dataset: BTreeMap<String, String>,
}

impl EventTarget {
    pub fn new() -> Self {
        Self::default()
    }

    /// The target of an unregister control.
    pub fn unregister(email: &str, activity: &str) -> Self {
        Self::new()
            .with_data("action", UNREGISTER_ACTION)
            .with_data("email", email)
            .with_data("activity", activity)
    }

    pub fn with_data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.dataset.insert(key.into(), value.into());
        self
    }

    pub fn data(&self, key: &str) -> Option<&str> {
        self.dataset.get(key).map(String::as_str)
    }

    /// `(activity, email)` if this is an unregister control carrying both values.
    pub fn unregister_request(&self) -> Option<(&str, &str)> {
        if self.data("action")? != UNREGISTER_ACTION {
            return None;
        }
        let email = self.data("email").filter(|e| !e.is_empty())?;
        let activity = self.data("activity").filter(|a| !a.is_empty())?;
        Some((activity, email))
    }
}
