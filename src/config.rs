//! Runtime configuration from `CATALOG_*` environment variables.
//!
//! A `.env` file in the working directory is loaded first when present;
//! variables already set in the environment win.

use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::bus::ConsumerOptions;

const PREFIX: &str = "CATALOG_";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid environment configuration: {0}")]
    Env(#[from] envy::Error),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Address the HTTP server binds to.
    #[serde(default = "default_http_addr")]
    pub http_addr: String,
    /// Queue carrying encoder results.
    #[serde(default = "default_video_encoded_queue")]
    pub video_encoded_queue: String,
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
    /// Delivery attempts before a message is dead-lettered.
    #[serde(default = "default_max_deliveries")]
    pub max_deliveries: u32,
    #[serde(default = "default_dedup_capacity")]
    pub dedup_capacity: usize,
    /// Emit logs as JSON lines.
    #[serde(default)]
    pub log_json: bool,
}

fn default_http_addr() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_video_encoded_queue() -> String {
    "video.encoded.queue".to_string()
}

fn default_poll_interval_ms() -> u64 {
    50
}

fn default_max_deliveries() -> u32 {
    3
}

fn default_dedup_capacity() -> usize {
    10_000
}

impl Default for Config {
    fn default() -> Self {
        Self {
            http_addr: default_http_addr(),
            video_encoded_queue: default_video_encoded_queue(),
            poll_interval_ms: default_poll_interval_ms(),
            max_deliveries: default_max_deliveries(),
            dedup_capacity: default_dedup_capacity(),
            log_json: false,
        }
    }
}

impl Config {
    /// Load `.env` (if any) and read the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        envy::prefixed(PREFIX).from_env::<Config>()?.validated()
    }

    /// Read from explicit key/value pairs, e.g. in tests.
    pub fn from_iter<I>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::prefixed(PREFIX).from_iter::<_, Config>(vars)?.validated()
    }

    fn validated(self) -> Result<Self, ConfigError> {
        if self.max_deliveries == 0 {
            return Err(ConfigError::Invalid("max_deliveries must be at least 1".into()));
        }
        if self.video_encoded_queue.trim().is_empty() {
            return Err(ConfigError::Invalid("video_encoded_queue must not be empty".into()));
        }
        Ok(self)
    }

    pub fn consumer_options(&self) -> ConsumerOptions {
        ConsumerOptions {
            poll_interval: Duration::from_millis(self.poll_interval_ms),
            max_deliveries: self.max_deliveries,
            dedup_capacity: self.dedup_capacity,
        }
    }
}
