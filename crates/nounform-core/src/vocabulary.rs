//! Vocabulary of inflection rules.
//!
//! A [`Vocabulary`] holds ordered pluralization and singularization rules
//! plus a set of uncountable words. Rules are consulted from the most
//! recently registered back to the earliest, so a later registration that
//! matches the same word wins. The default vocabulary exploits this by
//! registering its broadest rules first and its irregular overrides last;
//! callers extending a vocabulary get the same property for free.

use std::collections::HashSet;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::rule::Rule;

/// Ordered inflection rules and uncountable exceptions.
///
/// `Vocabulary::new()` is empty; most callers want
/// [`defaults::vocabulary()`](crate::defaults::vocabulary) or the
/// process-wide [`default_vocabulary()`](crate::default_vocabulary) and only
/// build their own when they need custom rules.
///
/// A vocabulary is built up front and then used immutably; registration is
/// append-only, and nothing is ever removed or reordered.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    plurals: Vec<Rule>,
    singulars: Vec<Rule>,
    uncountables: HashSet<String>,
}

impl Vocabulary {
    /// Create an empty vocabulary with no rules and no uncountables.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a pluralization rule.
    ///
    /// The pattern is matched case-insensitively; the replacement uses
    /// braced capture references (`"${1}es"`). A pattern that fails to
    /// compile is logged at WARN and skipped, leaving the vocabulary as it
    /// was.
    pub fn add_plural(&mut self, pattern: &str, replacement: &str) {
        match Rule::new(pattern, replacement) {
            Ok(rule) => self.plurals.push(rule),
            Err(e) => tracing::warn!(pattern, error = %e, "skipping invalid plural rule"),
        }
    }

    /// Register a singularization rule.
    ///
    /// Same contract as [`add_plural`](Self::add_plural).
    pub fn add_singular(&mut self, pattern: &str, replacement: &str) {
        match Rule::new(pattern, replacement) {
            Ok(rule) => self.singulars.push(rule),
            Err(e) => tracing::warn!(pattern, error = %e, "skipping invalid singular rule"),
        }
    }

    /// Register an irregular singular/plural pair, e.g. "person"/"people".
    ///
    /// With `match_ending` the pair applies to any word ending in it —
    /// registering "man"/"men" also inflects "woman" — and the first
    /// character is captured so its case survives the rewrite. Without it
    /// the pair matches the whole word only, which is what short words like
    /// "is"/"are" need to avoid rewriting every word that happens to end in
    /// them.
    ///
    /// The words are interpolated into the rule patterns verbatim; regex
    /// metacharacters are not escaped. An empty word is logged and the pair
    /// skipped.
    pub fn add_irregular(&mut self, singular: &str, plural: &str, match_ending: bool) {
        let (Some(s_head), Some(p_head)) = (singular.chars().next(), plural.chars().next()) else {
            tracing::warn!(singular, plural, "skipping irregular pair with empty word");
            return;
        };
        if match_ending {
            let s_rest = &singular[s_head.len_utf8()..];
            let p_rest = &plural[p_head.len_utf8()..];
            self.add_plural(&format!("({s_head}){s_rest}$"), &format!("${{1}}{p_rest}"));
            self.add_singular(&format!("({p_head}){p_rest}$"), &format!("${{1}}{s_rest}"));
        } else {
            self.add_plural(&format!("^{singular}$"), plural);
            self.add_singular(&format!("^{plural}$"), singular);
        }
    }

    /// Register a word that is its own plural, e.g. "fish".
    ///
    /// Uncountable words short-circuit both transforms before any rule is
    /// consulted, custom rules included. Membership is checked on the
    /// lowercased word.
    pub fn add_uncountable(&mut self, word: &str) {
        self.uncountables.insert(word.to_lowercase());
    }

    /// Pluralize a word.
    ///
    /// With `input_is_known_to_be_singular` the plural rules are applied
    /// directly and the result returned as-is — including the empty string
    /// when no rule matched. When the caller is unsure, a round-trip check
    /// guards against words that are already plural: if singularizing
    /// produces a different word whose plural is the input, the input comes
    /// back unchanged.
    pub fn pluralize(&self, word: &str, input_is_known_to_be_singular: bool) -> String {
        let result = self.apply_rules(&self.plurals, word, false);

        if input_is_known_to_be_singular {
            return result;
        }

        let as_singular = self.apply_rules(&self.singulars, word, false);
        let as_singular_as_plural = self.apply_rules(&self.plurals, &as_singular, false);
        if !as_singular.is_empty()
            && as_singular != word
            && word.strip_suffix('s') != Some(as_singular.as_str())
            && as_singular_as_plural == word
            && result != word
        {
            return word.to_string();
        }

        result
    }

    /// Singularize a word.
    ///
    /// `skip_simple_words` excludes the earliest-registered singular rule
    /// from the scan — in the default vocabulary that is the broad
    /// trailing-`s` strip, so only a more specific rule may fire. When the
    /// caller is unsure of the input's plurality, the mirror of the
    /// [`pluralize`](Self::pluralize) round-trip check applies, and an
    /// empty result additionally falls back to the input word; the
    /// known-plural path surfaces the empty string just like `pluralize`.
    pub fn singularize(
        &self,
        word: &str,
        input_is_known_to_be_plural: bool,
        skip_simple_words: bool,
    ) -> String {
        let result = self.apply_rules(&self.singulars, word, skip_simple_words);

        if input_is_known_to_be_plural {
            return result;
        }

        // Plurality is unknown, so check the round trip in both directions.
        let as_plural = self.apply_rules(&self.plurals, word, false);
        let as_plural_as_singular = self.apply_rules(&self.singulars, &as_plural, false);
        if as_plural != word
            && as_plural.strip_suffix('s') != Some(word)
            && as_plural_as_singular == word
            && result != word
        {
            return word.to_string();
        }

        if result.is_empty() {
            word.to_string()
        } else {
            result
        }
    }

    /// Rule and exception counts, for diagnostics.
    pub fn stats(&self) -> VocabularyStats {
        VocabularyStats {
            plural_rules: self.plurals.len(),
            singular_rules: self.singulars.len(),
            uncountables: self.uncountables.len(),
        }
    }

    fn is_uncountable(&self, word: &str) -> bool {
        self.uncountables.contains(word.to_lowercase().as_str())
    }

    /// Scan `rules` from the last registered down to the first, return the
    /// first non-empty rewrite.
    ///
    /// With `skip_first_rule` the scan stops before index 0. If every
    /// scanned rule misses, the final miss's empty string is returned; if
    /// the scan had no rules to consult at all, the word itself is.
    fn apply_rules(&self, rules: &[Rule], word: &str, skip_first_rule: bool) -> String {
        if self.is_uncountable(word) {
            return word.to_string();
        }

        let mut result = word.to_string();
        let end = usize::from(skip_first_rule);
        for rule in rules.get(end..).unwrap_or_default().iter().rev() {
            result = rule.apply(word);
            if !result.is_empty() {
                break;
            }
        }
        result
    }
}

/// Rule and exception counts for a [`Vocabulary`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct VocabularyStats {
    /// Number of registered pluralization rules.
    pub plural_rules: usize,
    /// Number of registered singularization rules.
    pub singular_rules: usize,
    /// Number of uncountable words.
    pub uncountables: usize,
}
