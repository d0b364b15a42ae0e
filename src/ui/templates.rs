// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use askama::Template;

use super::message::MessageArea;
use super::page::{ActivityCard, SelectOption, SignupForm};

/// Children of `#activities-list`.
#[derive(Template)]
#[template(path = "activity_list.html")]
pub(crate) struct ActivityListTemplate<'a> {
    pub(crate) status_text: Option<&'a str>,
    pub(crate) cards: &'a [ActivityCard],
}

#[derive(Template)]
#[template(path = "index.html")]
pub(crate) struct PageTemplate<'a> {
    pub(crate) status_text: Option<&'a str>,
    pub(crate) cards: &'a [ActivityCard],
    pub(crate) options: &'a [SelectOption],
    pub(crate) form: &'a SignupForm,
    pub(crate) message: &'a MessageArea,
}
