//! Command implementations.

use anyhow::Context;
use camino::Utf8Path;
use owo_colors::{OwoColorize, Stream};
use serde::Serialize;

pub mod info;
pub mod pluralize;
pub mod singularize;

/// One word rewrite, as reported by the `pluralize` and `singularize` commands.
#[derive(Debug, Serialize)]
pub struct Transformation {
    /// The word as given.
    pub input: String,
    /// The inflected form. May equal `input` (uncountables, guard rules) or
    /// be empty when no rule matched in a mode without a fallback.
    pub output: String,
    /// Whether `output` differs from `input`.
    pub changed: bool,
}

impl Transformation {
    /// Build a transformation, deriving `changed` from the two forms.
    pub fn new(input: String, output: String) -> Self {
        let changed = input != output;
        Self {
            input,
            output,
            changed,
        }
    }
}

/// Read a word list from a file: one word per line, blank lines skipped.
///
/// Combines the file-read and parse steps that both transform commands need.
pub fn read_words_file(path: &Utf8Path) -> anyhow::Result<Vec<String>> {
    let content = std::fs::read_to_string(path.as_std_path())
        .with_context(|| format!("failed to read {path}"))?;
    let words: Vec<String> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();
    if words.is_empty() {
        anyhow::bail!("no words found in {path}");
    }
    Ok(words)
}

/// Print transformations as pretty JSON or `input -> output` lines.
///
/// Colors respect the terminal and the global `--color` override, so piped
/// output stays plain text.
pub fn print_transformations(
    transformations: &[Transformation],
    global_json: bool,
) -> anyhow::Result<()> {
    if global_json {
        println!("{}", serde_json::to_string_pretty(transformations)?);
        return Ok(());
    }
    for t in transformations {
        let arrow = "->".if_supports_color(Stream::Stdout, |s| s.dimmed());
        if t.changed {
            println!(
                "{} {arrow} {}",
                t.input,
                t.output.if_supports_color(Stream::Stdout, |s| s.green())
            );
        } else {
            println!("{} {arrow} {}", t.input, t.output);
        }
    }
    Ok(())
}
