// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Activity records as served by `GET /activities`.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One activity entry. The activity name is the key in the [`Directory`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    /// Free-form description
    pub description: String,
    /// Human readable schedule, e.g. "Fridays, 3:30 PM - 5:00 PM"
    pub schedule: String,
    /// Capacity of the activity. Signed so a bogus negative value still renders.
    pub max_participants: i64,
    /// Participant emails, in server order
    #[serde(default)]
    pub participants: Vec<String>,
}

impl Activity {
    /// Remaining capacity. Negative when the roster exceeds capacity.
    pub fn spots_left(&self) -> i64 {
        self.max_participants - self.participants.len() as i64
    }
}

/// Snapshot of every activity keyed by name, in the order the server sent them.
pub type Directory = IndexMap<String, Activity>;
