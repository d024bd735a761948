//! Configuration error kinds shared by the defaults tables and the site config.
use thiserror::Error;

/// Errors raised while resolving build defaults or site configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unsupported redhat release {0:?} (supported: {1})")]
    UnsupportedRelease(String, String),

    #[error("expected NAME=VALUE, got {0:?}")]
    MalformedAssignment(String),

    #[error("unknown build option {0:?}")]
    UnknownOption(String),

    #[error("invalid value for build option {option}: expected {expected}, got {got}")]
    InvalidValue {
        option: &'static str,
        expected: &'static str,
        got: String,
    },

    #[error("build option {0} cannot be overridden in allbuild mode")]
    NotOverridable(&'static str),

    #[error("failed to determine home directory")]
    NoHomeDirectory,

    #[error("invalid site config: {0}")]
    Invalid(String),
}
