/// Errors for deskguard operations.
///
/// Anonymization itself cannot fail; these cover the fallible edges only —
/// configuration loading and user-supplied pattern compilation.
#[derive(Debug, thiserror::Error)]
pub enum DeskguardError {
    #[error("invalid preserve pattern '{name}': {reason}")]
    InvalidPattern { name: String, reason: String },

    #[error("failed to read config file {path}")]
    ConfigIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}")]
    ConfigParse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// Result alias used across the deskguard crates.
pub type DeskguardResult<T> = Result<T, DeskguardError>;
