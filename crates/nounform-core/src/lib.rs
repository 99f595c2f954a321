//! Core library for nounform.
//!
//! This crate provides the rule-based English inflection engine used by the
//! `nounform` CLI and any downstream consumers: pluralization,
//! singularization, irregular overrides, and uncountable words.
//!
//! # Modules
//!
//! - [`config`] - Configuration loading and custom vocabulary entries
//! - [`defaults`] - The built-in English vocabulary
//! - [`error`] - Error types and result aliases
//! - [`rule`] - A single rewrite rule (regex plus replacement)
//! - [`vocabulary`] - Ordered rule lists and the inflection algorithms
//!
//! # Quick Start
//!
//! ```
//! use nounform_core::{pluralize, singularize};
//!
//! assert_eq!(pluralize("index"), "indices");
//! assert_eq!(singularize("wolves"), "wolf");
//! ```
//!
//! Callers that need custom rules clone the shared vocabulary and extend it:
//!
//! ```
//! let mut vocab = nounform_core::default_vocabulary().clone();
//! vocab.add_uncountable("gear");
//! assert_eq!(vocab.pluralize("gear", true), "gear");
//! ```
#![deny(unsafe_code)]

use std::sync::LazyLock;

pub mod config;

pub mod defaults;

pub mod error;

pub mod rule;

pub mod vocabulary;

pub use config::{Config, ConfigLoader, ConfigSources, LogLevel};

pub use error::{ConfigError, ConfigResult, RuleError, RuleResult};

pub use rule::Rule;

pub use vocabulary::{Vocabulary, VocabularyStats};

/// The shared vocabulary seeded with the built-in English tables.
///
/// Built once on first use. Callers that need custom entries should clone
/// it rather than mutate shared state.
static DEFAULT: LazyLock<Vocabulary> = LazyLock::new(defaults::vocabulary);

/// Returns the shared default English vocabulary.
pub fn default_vocabulary() -> &'static Vocabulary {
    &DEFAULT
}

/// Pluralize a word assumed to be singular, using the default vocabulary.
///
/// ```
/// assert_eq!(nounform_core::pluralize("query"), "queries");
/// ```
pub fn pluralize(word: &str) -> String {
    DEFAULT.pluralize(word, true)
}

/// Singularize a word assumed to be plural, using the default vocabulary.
///
/// ```
/// assert_eq!(nounform_core::singularize("queries"), "query");
/// ```
pub fn singularize(word: &str) -> String {
    DEFAULT.singularize(word, true, false)
}
