// WHY: English plural-to-singular ruleset for single-token header segments
// Covers the plurals that show up in documentation headers; rare irregulars may resolve incorrectly

use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

/// Words whose singular and plural forms are identical
pub const UNCOUNTABLE_WORDS: &[&str] = &[
    "equipment", "feedback", "information", "metadata", "news", "series",
    "species", "sheep", "fish", "software", "hardware", "firmware", "police",
    "data",
];

/// Irregular plural forms and their singulars
pub const IRREGULAR_PLURALS: &[(&str, &str)] = &[
    ("people", "person"),
    ("men", "man"),
    ("women", "woman"),
    ("children", "child"),
    ("teeth", "tooth"),
    ("feet", "foot"),
    ("mice", "mouse"),
    ("geese", "goose"),
    ("oxen", "ox"),
    ("indices", "index"),
    ("matrices", "matrix"),
    ("vertices", "vertex"),
    ("appendices", "appendix"),
    ("criteria", "criterion"),
    ("phenomena", "phenomenon"),
    ("octopi", "octopus"),
    ("cacti", "cactus"),
    ("alumni", "alumnus"),
    ("aliases", "alias"),
    ("statuses", "status"),
    ("buses", "bus"),
    ("synopses", "synopsis"),
    ("theses", "thesis"),
    ("hypotheses", "hypothesis"),
    ("parentheses", "parenthesis"),
    ("knives", "knife"),
    ("lives", "life"),
    ("wives", "wife"),
    ("leaves", "leaf"),
    ("halves", "half"),
    ("selves", "self"),
    ("shelves", "shelf"),
    ("wolves", "wolf"),
    ("thieves", "thief"),
    ("movies", "movie"),
    ("cookies", "cookie"),
];

/// Nouns ending in `-che` whose plural only adds `s`
pub const CHE_SINGULARS: &[&str] = &[
    "ache", "headache", "cache", "niche", "avalanche", "moustache", "mustache",
    "cliche", "creche", "quiche", "psyche", "cloche", "brioche", "panache",
];

/// Suffix rewrites tried in order after the word tables; first match wins
const SUFFIX_RULES: &[(&str, &str)] = &[
    ("sses", "ss"),
    ("yses", "ysis"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("zzes", "zz"),
    ("xes", "x"),
    ("ies", "y"),
];

/// Endings that already read as singular and must not lose their final `s`
const SINGULAR_ENDINGS: &[&str] = &["ss", "us", "is"];

/// One rule application, expressed against the original word
enum Rewrite {
    Keep,
    /// Replace the whole word with a table entry
    Word(&'static str),
    /// Keep the first `stem_len` bytes and append `suffix`
    Suffix { stem_len: usize, suffix: &'static str },
}

/// Table-driven singularizer
///
/// Rules match on an ASCII-lowercased copy and only ever rewrite ASCII, so
/// non-ASCII letters pass through byte-for-byte.
pub struct Singularizer {
    uncountable: HashSet<&'static str>,
    irregular: HashMap<&'static str, &'static str>,
    irregular_singulars: HashSet<&'static str>,
    che_singulars: HashSet<&'static str>,
}

impl Singularizer {
    /// Create new singularizer with the default rule tables
    pub fn new() -> Self {
        Self {
            uncountable: UNCOUNTABLE_WORDS.iter().copied().collect(),
            irregular: IRREGULAR_PLURALS.iter().copied().collect(),
            irregular_singulars: IRREGULAR_PLURALS.iter().map(|(_, singular)| *singular).collect(),
            che_singulars: CHE_SINGULARS.iter().copied().collect(),
        }
    }

    /// Singular form of a single word, keeping the input's case
    pub fn singularize(&self, word: &str) -> String {
        let mut current = word.to_string();

        // WHY: MENS strips to MEN, which is itself an irregular plural; rewrite until stable
        // Every suffix rule shortens the word or lands on a kept ending, so this terminates
        loop {
            let next = self.apply(&current);
            if next == current {
                return current;
            }
            current = next;
        }
    }

    fn apply(&self, word: &str) -> String {
        match self.rewrite(&word.to_ascii_lowercase()) {
            Rewrite::Keep => word.to_string(),
            Rewrite::Word(singular) => match_case(word, singular),
            Rewrite::Suffix { stem_len, suffix } => {
                let (stem, removed) = word.split_at(stem_len);
                if removed.bytes().any(|b| b.is_ascii_uppercase()) {
                    format!("{stem}{}", suffix.to_ascii_uppercase())
                } else {
                    format!("{stem}{suffix}")
                }
            }
        }
    }

    fn rewrite(&self, lower: &str) -> Rewrite {
        if self.uncountable.contains(lower) || self.irregular_singulars.contains(lower) {
            return Rewrite::Keep;
        }
        if let Some(singular) = self.irregular.get(lower) {
            return Rewrite::Word(*singular);
        }

        // WHY: two-letter tokens like IS, US, AS are never plurals worth folding
        if lower.chars().count() <= 2 {
            return Rewrite::Keep;
        }

        if let Some(stem) = lower.strip_suffix('s') {
            if self.che_singulars.contains(stem) {
                return Rewrite::Suffix { stem_len: stem.len(), suffix: "" };
            }
        }

        for (plural, singular) in SUFFIX_RULES {
            if let Some(stem) = lower.strip_suffix(plural) {
                // "ties" keeps its stem "tie" via the generic rule below
                if *plural == "ies" && stem.chars().count() < 2 {
                    break;
                }
                return Rewrite::Suffix { stem_len: stem.len(), suffix: *singular };
            }
        }

        if SINGULAR_ENDINGS.iter().any(|ending| lower.ends_with(ending)) {
            return Rewrite::Keep;
        }

        match lower.strip_suffix('s') {
            Some(stem) => Rewrite::Suffix { stem_len: stem.len(), suffix: "" },
            None => Rewrite::Keep,
        }
    }
}

impl Default for Singularizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Apply the ASCII case shape of `original` to the table word `word`
fn match_case(original: &str, word: &str) -> String {
    if !original.bytes().any(|b| b.is_ascii_lowercase()) {
        return word.to_ascii_uppercase();
    }

    let mut result = word.to_string();
    if original.as_bytes().first().is_some_and(u8::is_ascii_uppercase) {
        if let Some(first) = result.get_mut(..1) {
            first.make_ascii_uppercase();
        }
    }
    result
}

/// Singular form of a single word using the shared default ruleset
pub fn singularize(word: &str) -> String {
    static SINGULARIZER: OnceLock<Singularizer> = OnceLock::new();
    SINGULARIZER.get_or_init(Singularizer::new).singularize(word)
}
