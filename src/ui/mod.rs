// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Page model, rendering and event delegation.

pub mod events;
pub mod message;
pub mod page;
pub mod render;
mod templates;

pub use events::{EventTarget, UiEvent};
pub use message::{MessageArea, MessageKind, MessageState};
pub use page::{ActivityCard, ActivityList, Page, SelectOption, SignupForm};
