// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod activity;
pub mod mutation;

pub use activity::{Activity, Directory};
pub use mutation::{MutationOutcome, MutationResponse};
