use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A source could not be read, parsed, or merged.
    #[error("failed to load configuration")]
    Figment(#[from] figment::Error),

    /// Required fields of a section are empty.
    #[error("[{section}] is missing {}", .missing.join(", "))]
    NotConfigured {
        section: String,
        missing: Vec<String>,
    },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}
