// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity Board: sign up for and leave extracurricular activities
//!
//! This crate provides the client side of the activities service: it fetches
//! the activity directory, renders it into a page, and runs the signup and
//! unregister flows against the backend API.

pub mod app;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod ui;

pub use app::{App, MessageTimings};
