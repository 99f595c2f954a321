//! Singularize command — rewrite words to their singular form.

use camino::Utf8PathBuf;
use clap::Args;
use tracing::{debug, instrument};

use nounform_core::Vocabulary;

use super::Transformation;

/// Arguments for the `singularize` subcommand.
#[derive(Args, Debug)]
pub struct SingularizeArgs {
    /// Words to singularize.
    #[arg(required_unless_present = "file", value_name = "WORDS")]
    pub words: Vec<String>,

    /// Read words from a file instead (one per line, blank lines skipped).
    #[arg(long, value_name = "PATH", conflicts_with = "words")]
    pub file: Option<Utf8PathBuf>,

    /// Do not assume the input is plural; words that already look singular
    /// are kept as-is.
    #[arg(long)]
    pub unsure: bool,

    /// Skip the plain trailing-s strip; words only change when a more
    /// specific rule matches.
    #[arg(long)]
    pub skip_simple: bool,
}

/// Singularize each word and print the transformations.
#[instrument(name = "cmd_singularize", skip_all, fields(unsure = args.unsure, skip_simple = args.skip_simple))]
pub fn cmd_singularize(
    args: SingularizeArgs,
    global_json: bool,
    vocabulary: &Vocabulary,
) -> anyhow::Result<()> {
    debug!(words = args.words.len(), file = ?args.file, "executing singularize command");

    let words = match args.file {
        Some(ref path) => super::read_words_file(path)?,
        None => args.words,
    };

    let transformations: Vec<Transformation> = words
        .into_iter()
        .map(|word| {
            let output = vocabulary.singularize(&word, !args.unsure, args.skip_simple);
            Transformation::new(word, output)
        })
        .collect();

    super::print_transformations(&transformations, global_json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nounform_core::defaults;

    fn args(words: &[&str]) -> SingularizeArgs {
        SingularizeArgs {
            words: words.iter().map(ToString::to_string).collect(),
            file: None,
            unsure: false,
            skip_simple: false,
        }
    }

    #[test]
    fn cmd_singularize_text_succeeds() {
        let vocab = defaults::vocabulary();
        assert!(cmd_singularize(args(&["words", "matrices"]), false, &vocab).is_ok());
    }

    #[test]
    fn cmd_singularize_json_succeeds() {
        let vocab = defaults::vocabulary();
        assert!(cmd_singularize(args(&["people"]), true, &vocab).is_ok());
    }

    #[test]
    fn cmd_singularize_skip_simple_succeeds() {
        let vocab = defaults::vocabulary();
        let mut skip = args(&["cars"]);
        skip.skip_simple = true;
        assert!(cmd_singularize(skip, false, &vocab).is_ok());
    }
}
