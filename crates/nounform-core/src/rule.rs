//! A single inflection rewrite rule.

use regex::{Regex, RegexBuilder};

use crate::error::{RuleError, RuleResult};

/// One rewrite rule: a case-insensitive pattern plus a replacement template.
///
/// Replacement templates use the regex crate's braced capture syntax
/// (`"${1}es"`). The unbraced form `"$1es"` would be read as a reference to
/// a capture group named `1es` and expand to nothing.
#[derive(Debug, Clone)]
pub struct Rule {
    regex: Regex,
    replacement: String,
}

impl Rule {
    /// Compile a rule. The pattern is matched case-insensitively.
    pub fn new(pattern: &str, replacement: &str) -> RuleResult<Self> {
        let regex = RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .map_err(|e| RuleError::Pattern {
                pattern: pattern.to_string(),
                source: Box::new(e),
            })?;
        Ok(Self {
            regex,
            replacement: replacement.to_string(),
        })
    }

    /// Apply the rule to a word.
    ///
    /// Returns the word with the first match rewritten, or the empty string
    /// when the pattern does not match at all. The empty string is the
    /// no-match sentinel used by the rule scan in
    /// [`Vocabulary`](crate::Vocabulary); a matching rule with an empty
    /// replacement that consumes the whole word produces the same value,
    /// and the scan makes no attempt to tell the two apart.
    ///
    /// Characters outside the matched span keep their original case;
    /// captured text is substituted with the case it had in the input.
    pub fn apply(&self, word: &str) -> String {
        if !self.regex.is_match(word) {
            return String::new();
        }
        self.regex
            .replace(word, self.replacement.as_str())
            .into_owned()
    }
}
