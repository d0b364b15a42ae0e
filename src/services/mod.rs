// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - backend API access.

pub mod activities;

pub use activities::ActivitiesClient;
