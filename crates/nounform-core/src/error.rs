//! Error types for nounform-core.

use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// Configuration file not found after searching all locations.
    #[error("no configuration file found")]
    NotFound,
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur when building inflection rules.
#[derive(Error, Debug)]
pub enum RuleError {
    /// The rewrite pattern is not a valid regular expression.
    #[error("invalid rewrite pattern {pattern:?}: {source}")]
    Pattern {
        /// The pattern that failed to compile.
        pattern: String,
        /// The underlying regex error.
        #[source]
        source: Box<regex::Error>,
    },
}

/// Result type alias using [`RuleError`].
pub type RuleResult<T> = Result<T, RuleError>;
