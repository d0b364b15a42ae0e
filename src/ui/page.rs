// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-memory page: the stable elements the UI writes into.

use askama::Template;

use super::events::EventTarget;
use super::message::MessageArea;
use super::templates::{ActivityListTemplate, PageTemplate};
use crate::error::Result;

pub const LOADING_TEXT: &str = "Loading activities...";
pub const LOAD_FAILED_TEXT: &str = "Failed to load activities. Please try again later.";
pub const NO_PARTICIPANTS_TEXT: &str = "No participants yet";
pub const SELECT_PLACEHOLDER: &str = "-- Select an activity --";

/// Contents of the activity list container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActivityList {
    Loading,
    Cards(Vec<ActivityCard>),
    Failed,
}

/// One rendered activity card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityCard {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub spots_left: i64,
    pub participants: Vec<String>,
}

impl ActivityCard {
    /// Click targets of the per-participant unregister controls.
    pub fn unregister_targets(&self) -> Vec<EventTarget> {
        self.participants
            .iter()
            .map(|email| EventTarget::unregister(email, &self.name))
            .collect()
    }

    fn text_lines(&self) -> Vec<String> {
        let mut lines = vec![
            self.name.clone(),
            self.description.clone(),
            format!("Schedule: {}", self.schedule),
            format!("Availability: {} spots left", self.spots_left),
        ];
        if self.participants.is_empty() {
            lines.push(NO_PARTICIPANTS_TEXT.to_string());
        } else {
            lines.push("Current Participants:".to_string());
            lines.extend(self.participants.iter().map(|email| format!("{} ✖", email)));
        }
        lines
    }
}

/// An `<option>` of the activity selection control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn placeholder() -> Self {
        Self {
            value: String::new(),
            label: SELECT_PLACEHOLDER.to_string(),
        }
    }
}

/// Current values of the signup form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub email: String,
    pub activity: String,
}

impl SignupForm {
    pub fn reset(&mut self) {
        self.email.clear();
        self.activity.clear();
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub activities: ActivityList,
    pub activity_options: Vec<SelectOption>,
    pub signup_form: SignupForm,
    pub message: MessageArea,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            activities: ActivityList::Loading,
            activity_options: vec![SelectOption::placeholder()],
            signup_form: SignupForm::default(),
            message: MessageArea::default(),
        }
    }
}

impl Page {
    pub fn cards(&self) -> &[ActivityCard] {
        match &self.activities {
            ActivityList::Cards(cards) => cards,
            ActivityList::Loading | ActivityList::Failed => &[],
        }
    }

    pub fn card(&self, name: &str) -> Option<&ActivityCard> {
        self.cards().iter().find(|card| card.name == name)
    }

    /// Visible text of the activity list container, one line per text block.
    pub fn text_content(&self) -> String {
        match &self.activities {
            ActivityList::Loading => LOADING_TEXT.to_string(),
            ActivityList::Failed => LOAD_FAILED_TEXT.to_string(),
            ActivityList::Cards(cards) => cards
                .iter()
                .flat_map(ActivityCard::text_lines)
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }

    fn status_text(&self) -> Option<&'static str> {
        match self.activities {
            ActivityList::Loading => Some(LOADING_TEXT),
            ActivityList::Failed => Some(LOAD_FAILED_TEXT),
            ActivityList::Cards(_) => None,
        }
    }

    /// HTML of the activity list container's children.
    pub fn activity_list_html(&self) -> Result<String> {
        let template = ActivityListTemplate {
            status_text: self.status_text(),
            cards: self.cards(),
        };
        Ok(template.render()?)
    }

    /// The full HTML document.
    pub fn to_html(&self) -> Result<String> {
        let template = PageTemplate {
            status_text: self.status_text(),
            cards: self.cards(),
            options: &self.activity_options,
            form: &self.signup_form,
            message: &self.message,
        };
        Ok(template.render()?)
    }
}
