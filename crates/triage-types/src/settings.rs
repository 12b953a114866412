//! Configuration loading for ticket-triage.
//!
//! Layered config: defaults -> config file -> env vars. The config file
//! lives at `~/.config/ticket-triage/config.toml`; environment overrides
//! use the `TRIAGE_` prefix (e.g. `TRIAGE_RETRIEVAL_TOP_ARTICLES`).

use config::{Config, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::TriageError;

/// Tunables for knowledge retrieval.
///
/// The confidence bands and the escalation floor are independent knobs:
/// the default Low band (0.3..0.5) sits above the 0.2 floor, leaving a
/// deliberate "low but not escalated" zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetrievalConfig {
    /// How many top-ranked articles a retrieval returns.
    #[serde(default = "default_top_articles")]
    pub top_articles: usize,

    /// Confidence at or above this bands as High.
    #[serde(default = "default_high_threshold")]
    pub high_threshold: f32,

    /// Confidence at or above this bands as Medium.
    #[serde(default = "default_medium_threshold")]
    pub medium_threshold: f32,

    /// Confidence at or above this bands as Low; anything below is None.
    #[serde(default = "default_low_threshold")]
    pub low_threshold: f32,

    /// Top-article confidence below this escalates outright.
    #[serde(default = "default_escalation_floor")]
    pub escalation_floor: f32,
}

fn default_top_articles() -> usize {
    3
}

fn default_high_threshold() -> f32 {
    0.7
}

fn default_medium_threshold() -> f32 {
    0.5
}

fn default_low_threshold() -> f32 {
    0.3
}

fn default_escalation_floor() -> f32 {
    0.2
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            top_articles: default_top_articles(),
            high_threshold: default_high_threshold(),
            medium_threshold: default_medium_threshold(),
            low_threshold: default_low_threshold(),
            escalation_floor: default_escalation_floor(),
        }
    }
}

impl RetrievalConfig {
    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), String> {
        if self.top_articles == 0 {
            return Err("top_articles must be > 0".to_string());
        }
        for (name, value) in [
            ("high_threshold", self.high_threshold),
            ("medium_threshold", self.medium_threshold),
            ("low_threshold", self.low_threshold),
            ("escalation_floor", self.escalation_floor),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(format!("{name} must be 0.0-1.0, got {value}"));
            }
        }
        if self.high_threshold < self.medium_threshold
            || self.medium_threshold < self.low_threshold
        {
            return Err(format!(
                "confidence bands must be ordered high >= medium >= low, got {}/{}/{}",
                self.high_threshold, self.medium_threshold, self.low_threshold
            ));
        }
        Ok(())
    }
}

/// Main application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Retrieval tunables
    #[serde(default)]
    pub retrieval: RetrievalConfig,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            retrieval: RetrievalConfig::default(),
        }
    }
}

impl Settings {
    /// Load settings with layered precedence:
    /// 1. Built-in defaults
    /// 2. Config file (`~/.config/ticket-triage/config.toml`)
    /// 3. Caller-specified config file (optional)
    /// 4. Environment variables (`TRIAGE_*`)
    pub fn load(cli_config_path: Option<&str>) -> Result<Self, TriageError> {
        let config_dir = ProjectDirs::from("", "", "ticket-triage")
            .map(|p| p.config_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("."));

        let default_config_path = config_dir.join("config");

        let mut builder = Config::builder()
            .set_default("log_level", default_log_level())
            .map_err(|e| TriageError::Config(e.to_string()))?
            .set_default("retrieval.top_articles", default_top_articles() as i64)
            .map_err(|e| TriageError::Config(e.to_string()))?
            .set_default("retrieval.high_threshold", default_high_threshold() as f64)
            .map_err(|e| TriageError::Config(e.to_string()))?
            .set_default(
                "retrieval.medium_threshold",
                default_medium_threshold() as f64,
            )
            .map_err(|e| TriageError::Config(e.to_string()))?
            .set_default("retrieval.low_threshold", default_low_threshold() as f64)
            .map_err(|e| TriageError::Config(e.to_string()))?
            .set_default(
                "retrieval.escalation_floor",
                default_escalation_floor() as f64,
            )
            .map_err(|e| TriageError::Config(e.to_string()))?
            .add_source(File::with_name(&default_config_path.to_string_lossy()).required(false));

        if let Some(path) = cli_config_path {
            builder = builder.add_source(File::with_name(path).required(true));
        }

        builder = builder.add_source(
            Environment::with_prefix("TRIAGE")
                .separator("_")
                .try_parsing(true),
        );

        let config = builder
            .build()
            .map_err(|e| TriageError::Config(e.to_string()))?;

        let settings: Settings = config
            .try_deserialize()
            .map_err(|e| TriageError::Config(e.to_string()))?;

        settings
            .retrieval
            .validate()
            .map_err(TriageError::Config)?;

        Ok(settings)
    }
}
