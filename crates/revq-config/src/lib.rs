//! # revq-config
//!
//! Layered configuration loading for revq using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`REVQ_*` prefix, `__` as separator)
//! 2. Legacy variables `GITLAB_HOST`, `GITLAB_TOKEN`, `GITLAB_USER_NAME`
//! 3. Project-level `./revq.toml`
//! 4. User-level `~/.config/revq/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `REVQ_GITLAB__TOKEN` -> `gitlab.token`,
//! `REVQ_SCORING__LOOKBACK_DAYS` -> `scoring.lookback_days`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use revq_config::RevqConfig;
//!
//! let config = RevqConfig::load_with_dotenv().expect("config");
//! config.require_gitlab().expect("gitlab settings");
//! println!("ranking for {}", config.gitlab.user_name);
//! ```

mod error;
mod gitlab;
mod scoring;

pub use error::ConfigError;
pub use gitlab::GitLabConfig;
pub use scoring::{MAX_LOOKBACK_DAYS, ScoringConfig};

use std::path::PathBuf;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

/// Legacy variable names and the keys they populate.
const LEGACY_ENV: [(&str, &str); 3] = [
    ("GITLAB_HOST", "gitlab.host"),
    ("GITLAB_TOKEN", "gitlab.token"),
    ("GITLAB_USER_NAME", "gitlab.user_name"),
];

/// Project-local config file name.
pub const LOCAL_CONFIG_FILE: &str = "revq.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct RevqConfig {
    #[serde(default)]
    pub gitlab: GitLabConfig,
    #[serde(default)]
    pub scoring: ScoringConfig,
}

impl RevqConfig {
    /// Load and validate configuration from TOML files and environment variables.
    ///
    /// Does NOT read `.env`; use [`RevqConfig::load_with_dotenv`] for that.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source cannot be parsed and
    /// [`ConfigError::InvalidValue`] if a value is out of range.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration after reading `.env` from the current directory.
    ///
    /// Variables already set in the process environment win over `.env`.
    ///
    /// # Errors
    ///
    /// Same as [`RevqConfig::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        // A missing .env is fine.
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect it or layer extra providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(LOCAL_CONFIG_FILE);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        for (var, key) in LEGACY_ENV {
            figment = figment.merge(Env::raw().only(&[var]).map(move |_| key.into()));
        }

        figment.merge(Env::prefixed("REVQ_").split("__"))
    }

    /// Path to the user-global config file.
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("revq").join("config.toml"))
    }

    /// Reject values the scorer or client cannot work with.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.scoring.concurrency == 0 {
            return Err(invalid("scoring.concurrency", "must be greater than 0"));
        }
        if self.gitlab.per_page == 0 {
            return Err(invalid("gitlab.per_page", "must be greater than 0"));
        }
        if self.gitlab.max_pages == 0 {
            return Err(invalid("gitlab.max_pages", "must be greater than 0"));
        }
        if self.scoring.lookback_days == 0 {
            return Err(invalid("scoring.lookback_days", "must be greater than 0"));
        }
        if self.scoring.lookback_days > MAX_LOOKBACK_DAYS {
            return Err(invalid(
                "scoring.lookback_days",
                &format!("must be at most {MAX_LOOKBACK_DAYS}"),
            ));
        }
        Ok(())
    }

    /// Ensure the GitLab section has everything needed to talk to an instance.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotConfigured`] listing the empty fields.
    pub fn require_gitlab(&self) -> Result<(), ConfigError> {
        let missing = self.gitlab.missing_fields();
        if missing.is_empty() {
            return Ok(());
        }
        Err(ConfigError::NotConfigured {
            section: "gitlab".to_string(),
            missing: missing.into_iter().map(String::from).collect(),
        })
    }

    /// Copy safe to print: secrets are masked.
    #[must_use]
    pub fn redacted(&self) -> Self {
        Self {
            gitlab: self.gitlab.redacted(),
            scoring: self.scoring.clone(),
        }
    }
}

fn invalid(field: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}
