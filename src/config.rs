//! Configuration handling for the TUI

use crate::state::forms::FieldName;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Log filter used when neither `RUST_LOG` nor the config sets one
pub const DEFAULT_LOG_FILTER: &str = "endereco_tui=info";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FormConfig {
    /// Clear every field after an address is accepted
    pub reset_on_success: Option<bool>,
    /// tracing filter directive, e.g. `endereco_tui=debug`
    pub log_filter: Option<String>,
    /// Machine name of the field focused at start-up
    pub initial_focus: Option<String>,
    /// Show placeholder hints in empty fields
    pub show_hints: Option<bool>,
}

impl FormConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "endereco", "endereco-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        if let Some(path) = Self::config_path() {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: FormConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    pub fn reset_on_success(&self) -> bool {
        self.reset_on_success.unwrap_or(false)
    }

    pub fn show_hints(&self) -> bool {
        self.show_hints.unwrap_or(true)
    }

    pub fn log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }

    /// Field focused at start-up. An unknown name falls back to the first
    /// field with a warning.
    pub fn initial_focus(&self) -> FieldName {
        match self.initial_focus.as_deref().map(str::parse::<FieldName>) {
            None => FieldName::PostalCode,
            Some(Ok(field)) => field,
            Some(Err(err)) => {
                tracing::warn!("ignoring initial_focus: {err}");
                FieldName::PostalCode
            }
        }
    }
}
