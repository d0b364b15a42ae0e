// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Rebuild the activity list and selection control from a directory.

use super::page::{ActivityCard, ActivityList, Page, SelectOption};
use crate::models::{Activity, Directory};

/// Replace the list container and the selection control with `directory`.
///
/// Both targets are rebuilt from scratch, so rendering the same directory
/// twice produces the same page.
pub fn render_directory(page: &mut Page, directory: &Directory) {
    let cards = directory
        .iter()
        .map(|(name, activity)| build_card(name, activity))
        .collect();
    page.activities = ActivityList::Cards(cards);

    page.activity_options = std::iter::once(SelectOption::placeholder())
        .chain(directory.keys().map(|name| SelectOption {
            value: name.clone(),
            label: name.clone(),
        }))
        .collect();
}

/// Show the load failure message. The selection control is left alone.
pub fn render_load_failure(page: &mut Page) {
    page.activities = ActivityList::Failed;
}

fn build_card(name: &str, activity: &Activity) -> ActivityCard {
    ActivityCard {
        name: name.to_string(),
        description: activity.description.clone(),
        schedule: activity.schedule.clone(),
        spots_left: activity.spots_left(),
        participants: activity.participants.clone(),
    }
}
