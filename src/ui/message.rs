// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! The message area shown above the signup form.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

impl MessageKind {
    pub fn class_name(self) -> &'static str {
        match self {
            MessageKind::Success => "success",
            MessageKind::Error => "error",
        }
    }
}

/// Externally visible state of the message area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageState {
    Hidden,
    VisibleSuccess,
    VisibleError,
}

/// Message text plus styling. Hiding keeps the text, like toggling a CSS class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageArea {
    text: String,
    kind: Option<MessageKind>,
    hidden: bool,
}

impl Default for MessageArea {
    fn default() -> Self {
        Self {
            text: String::new(),
            kind: None,
            hidden: true,
        }
    }
}

impl MessageArea {
    pub fn show(&mut self, kind: MessageKind, text: impl Into<String>) {
        self.text = text.into();
        self.kind = Some(kind);
        self.hidden = false;
    }

    pub fn hide(&mut self) {
        self.hidden = true;
    }

    pub fn state(&self) -> MessageState {
        match (self.hidden, self.kind) {
            (true, _) | (false, None) => MessageState::Hidden,
            (false, Some(MessageKind::Success)) => MessageState::VisibleSuccess,
            (false, Some(MessageKind::Error)) => MessageState::VisibleError,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn kind(&self) -> Option<MessageKind> {
        self.kind
    }

    pub fn is_visible(&self) -> bool {
        self.state() != MessageState::Hidden
    }

    /// Value of the element's `class` attribute.
    pub fn class_name(&self) -> String {
        match (self.kind, self.hidden) {
            (Some(kind), true) => format!("{} hidden", kind.class_name()),
            (Some(kind), false) => kind.class_name().to_string(),
            (None, _) => "hidden".to_string(),
        }
    }
}
