//! The default English vocabulary.
//!
//! Rule tables for US English in the Humanizer lineage: broad suffix rules
//! first, narrower ones after, irregular pairs last so they win the
//! backwards rule scan. Replacements use the braced `${n}` capture syntax
//! throughout.

use crate::vocabulary::Vocabulary;

/// Pluralization rules, ordered lowest priority first.
const PLURAL_RULES: &[(&str, &str)] = &[
    ("$", "s"),
    ("s$", "s"),
    ("(ax|test)is$", "${1}es"),
    (
        "(octop|vir|alumn|fung|cact|foc|hippopotam|radi|stimul|syllab|nucle)us$",
        "${1}i",
    ),
    (
        "(alias|bias|iris|status|campus|apparatus|virus|walrus|trellis)$",
        "${1}es",
    ),
    (
        "(buffal|tomat|volcan|ech|embarg|her|mosquit|potat|torped|vet)o$",
        "${1}oes",
    ),
    ("([dti])um$", "${1}a"),
    ("sis$", "ses"),
    ("(?:([^f])fe|([lr])f)$", "${1}${2}ves"),
    ("(hive)$", "${1}s"),
    ("([^aeiouy]|qu)y$", "${1}ies"),
    ("(x|ch|ss|sh)$", "${1}es"),
    ("(matr|vert|ind|d)(ix|ex)$", "${1}ices"),
    ("(^[ml])ouse$", "${1}ice"),
    ("^(ox)$", "${1}en"),
    ("(quiz)$", "${1}zes"),
    ("(buz|blit|walt)z$", "${1}zes"),
    ("(hoo|lea|loa|thie)f$", "${1}ves"),
    ("(alumn|alg|larv|vertebr)a$", "${1}ae"),
    ("(criteri|phenomen)on$", "${1}a"),
];

/// Singularization rules, ordered lowest priority first. The broad
/// trailing-`s` strip sits at index 0 on purpose: it is the rule that
/// `skip_simple_words` excludes.
const SINGULAR_RULES: &[(&str, &str)] = &[
    ("s$", ""),
    ("(n)ews$", "${1}ews"),
    ("([dti])a$", "${1}um"),
    (
        "(analy|ba|diagno|parenthe|progno|synop|the|ellip|empha|neuro|oa|paraly)ses$",
        "${1}sis",
    ),
    ("([^f])ves$", "${1}fe"),
    ("(hive)s$", "${1}"),
    ("(tive)s$", "${1}"),
    ("([lr]|hoo|lea|loa|thie)ves$", "${1}f"),
    ("([^aeiouy]|qu)ies$", "${1}y"),
    ("(s)eries$", "${1}eries"),
    ("(m)ovies$", "${1}ovie"),
    ("(x|ch|ss|sh)es$", "${1}"),
    ("(^[ml])ice$", "${1}ouse"),
    ("(o)es$", "${1}"),
    ("(shoe)s$", "${1}"),
    ("(cris|ax|test)es$", "${1}is"),
    (
        "(octop|vir|alumn|fung|cact|foc|hippopotam|radi|stimul|syllab|nucle)i$",
        "${1}us",
    ),
    (
        "(alias|bias|iris|status|campus|apparatus|virus|walrus|trellis)es$",
        "${1}",
    ),
    ("^(ox)en$", "${1}"),
    ("(matr|d)ices$", "${1}ix"),
    ("(vert|ind)ices$", "${1}ex"),
    ("(quiz)zes$", "${1}"),
    ("(buz|blit|walt)zes$", "${1}z"),
    ("(alumn|alg|larv|vertebr)ae$", "${1}a"),
    ("(criteri|phenomen)a$", "${1}on"),
    ("([brc]ook|room|smooth)ies$", "${1}ie"),
];

/// Irregular (singular, plural) pairs that match as word endings, so
/// "salesperson" and "woman" inflect along with "person" and "man". Order
/// matters here too: "human" must come after "man" to override it.
const IRREGULAR_SUFFIX_PAIRS: &[(&str, &str)] = &[
    ("person", "people"),
    ("man", "men"),
    ("human", "humans"),
    ("child", "children"),
    ("sex", "sexes"),
    ("glove", "gloves"),
    ("move", "moves"),
    ("goose", "geese"),
    ("wave", "waves"),
    ("foot", "feet"),
    ("tooth", "teeth"),
    ("curriculum", "curricula"),
    ("database", "databases"),
    ("zombie", "zombies"),
    ("personnel", "personnel"),
    ("cache", "caches"),
];

/// Irregular (singular, plural) pairs that match whole words only. Suffix
/// matching would be wrong for these: every word ending in "ties" is not a
/// plural of "tie".
const IRREGULAR_WHOLE_WORD_PAIRS: &[(&str, &str)] = &[
    ("is", "are"),
    ("that", "those"),
    ("this", "these"),
    ("bus", "buses"),
    ("die", "dice"),
    ("tie", "ties"),
];

/// Words that are their own plural, plus unit abbreviations.
const UNCOUNTABLES: &[&str] = &[
    "staff",
    "training",
    "equipment",
    "information",
    "corn",
    "milk",
    "rice",
    "money",
    "species",
    "series",
    "fish",
    "sheep",
    "deer",
    "aircraft",
    "oz",
    "tsp",
    "tbsp",
    "ml",
    "l",
    "water",
    "waters",
    "semen",
    "sperm",
    "bison",
    "grass",
    "hair",
    "mud",
    "elk",
    "luggage",
    "moose",
    "offspring",
    "salmon",
    "shrimp",
    "someone",
    "swine",
    "trout",
    "tuna",
    "corps",
    "scissors",
    "means",
    "mail",
];

/// Build the default English vocabulary.
///
/// Each call builds a fresh instance the caller owns and may extend; the
/// shared, process-wide copy is [`default_vocabulary()`](crate::default_vocabulary).
pub fn vocabulary() -> Vocabulary {
    let mut vocab = Vocabulary::new();
    for (pattern, replacement) in PLURAL_RULES {
        vocab.add_plural(pattern, replacement);
    }
    for (pattern, replacement) in SINGULAR_RULES {
        vocab.add_singular(pattern, replacement);
    }
    for (singular, plural) in IRREGULAR_SUFFIX_PAIRS {
        vocab.add_irregular(singular, plural, true);
    }
    for (singular, plural) in IRREGULAR_WHOLE_WORD_PAIRS {
        vocab.add_irregular(singular, plural, false);
    }
    for word in UNCOUNTABLES {
        vocab.add_uncountable(word);
    }

    let stats = vocab.stats();
    tracing::debug!(
        plural_rules = stats.plural_rules,
        singular_rules = stats.singular_rules,
        uncountables = stats.uncountables,
        "default vocabulary seeded"
    );
    vocab
}
