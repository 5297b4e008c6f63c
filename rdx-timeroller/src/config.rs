//! Defines the configuration structures for the Timeroller binaries and embedders.
//!
//! These structs are designed to be deserialized from a configuration file
//! (e.g., a TOML file) using `serde` and the `config` crate, with
//! `TIMEROLLER__*` environment variables layered on top. This lets the
//! starting time and the AM/PM labels be chosen without touching code.

use crate::common::{AmPmLabels, SelectedTime};
use crate::error::PickerError;
use anyhow::Context;
use chrono::NaiveTime;
use serde::Deserialize;
use std::path::Path;

/// Prefix for environment overrides, e.g. `TIMEROLLER__LOG_LEVEL=debug`.
pub const ENV_PREFIX: &str = "TIMEROLLER";

/// The top-level picker configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct PickerConfig {
    /// The time the picker starts on, in 24-hour `HH:MM:SS` form.
    #[serde(default = "default_initial_time")]
    pub initial_time: NaiveTime,

    /// The AM and PM labels, in that order.
    #[serde(default = "default_am_pm_labels")]
    pub am_pm_labels: Vec<String>,

    /// Fallback `tracing` filter when `RUST_LOG` is not set.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl PickerConfig {
    /// Loads the configuration from an optional TOML file and the environment.
    ///
    /// A missing file is not an error; every field has a default.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let mut builder = config::Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path).required(false));
        }
        builder
            .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()
            .context("failed to assemble picker configuration")?
            .try_deserialize()
            .context("failed to parse picker configuration")
    }

    /// The configured starting time as a 12-hour reading.
    pub fn initial_selected_time(&self) -> SelectedTime {
        SelectedTime::from(self.initial_time)
    }

    /// The configured labels, validated.
    pub fn labels(&self) -> Result<AmPmLabels, PickerError> {
        AmPmLabels::try_from(self.am_pm_labels.clone())
    }
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            initial_time: default_initial_time(),
            am_pm_labels: default_am_pm_labels(),
            log_level: default_log_level(),
        }
    }
}

// --- Default value functions for serde ---

fn default_initial_time() -> NaiveTime {
    NaiveTime::from_hms_opt(12, 0, 0).unwrap_or_default()
}

fn default_am_pm_labels() -> Vec<String> {
    vec!["AM".to_string(), "PM".to_string()]
}

fn default_log_level() -> String {
    "info".to_string()
}
