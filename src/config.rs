// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application configuration loaded from environment variables.

use std::env;
use std::time::Duration;

use crate::app::MessageTimings;

const DEFAULT_API_URL: &str = "http://localhost:8000";
const DEFAULT_SIGNUP_MESSAGE_TTL_MS: u64 = 5000;
const DEFAULT_UNREGISTER_MESSAGE_TTL_MS: u64 = 3000;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the activities API
    pub api_url: String,
    /// How long a signup message stays visible
    pub signup_message_ttl: Duration,
    /// How long a successful unregister message stays visible
    pub unregister_message_ttl: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            signup_message_ttl: Duration::from_millis(DEFAULT_SIGNUP_MESSAGE_TTL_MS),
            unregister_message_ttl: Duration::from_millis(DEFAULT_UNREGISTER_MESSAGE_TTL_MS),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Ok(Self {
            api_url: env::var("ACTIVITIES_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            signup_message_ttl: millis_var("SIGNUP_MESSAGE_TTL_MS", DEFAULT_SIGNUP_MESSAGE_TTL_MS)?,
            unregister_message_ttl: millis_var(
                "UNREGISTER_MESSAGE_TTL_MS",
                DEFAULT_UNREGISTER_MESSAGE_TTL_MS,
            )?,
        })
    }

    pub fn message_timings(&self) -> MessageTimings {
        MessageTimings {
            signup: self.signup_message_ttl,
            unregister: self.unregister_message_ttl,
        }
    }
}

fn millis_var(name: &'static str, default: u64) -> Result<Duration, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Duration::from_millis)
            .map_err(|_| ConfigError::Invalid(name, raw)),
        Err(_) => Ok(Duration::from_millis(default)),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable {0}: {1:?}")]
    Invalid(&'static str, String),
}
