//! Pluralize command — rewrite words to their plural form.

use camino::Utf8PathBuf;
use clap::Args;
use tracing::{debug, instrument};

use nounform_core::Vocabulary;

use super::Transformation;

/// Arguments for the `pluralize` subcommand.
#[derive(Args, Debug)]
pub struct PluralizeArgs {
    /// Words to pluralize.
    #[arg(required_unless_present = "file", value_name = "WORDS")]
    pub words: Vec<String>,

    /// Read words from a file instead (one per line, blank lines skipped).
    #[arg(long, value_name = "PATH", conflicts_with = "words")]
    pub file: Option<Utf8PathBuf>,

    /// Do not assume the input is singular; words that already look plural
    /// are kept as-is.
    #[arg(long)]
    pub unsure: bool,
}

/// Pluralize each word and print the transformations.
#[instrument(name = "cmd_pluralize", skip_all, fields(unsure = args.unsure))]
pub fn cmd_pluralize(
    args: PluralizeArgs,
    global_json: bool,
    vocabulary: &Vocabulary,
) -> anyhow::Result<()> {
    debug!(words = args.words.len(), file = ?args.file, "executing pluralize command");

    let words = match args.file {
        Some(ref path) => super::read_words_file(path)?,
        None => args.words,
    };

    let transformations: Vec<Transformation> = words
        .into_iter()
        .map(|word| {
            let output = vocabulary.pluralize(&word, !args.unsure);
            Transformation::new(word, output)
        })
        .collect();

    super::print_transformations(&transformations, global_json)
}
