//! Noun lemmatization
//!
//! Reduces a word to its dictionary singular. Part of speech is ignored: every
//! word is treated as a noun, so verbs keep their inflection ("running" stays
//! "running") while plurals collapse ("towels" -> "towel").
//!
//! Lookup order:
//! 1. irregular plurals ("children" -> "child")
//! 2. words that end in `s` but are not plurals ("news", "always")
//! 3. suffix rules, accepted only when the stem is in the noun lexicon
//!
//! Anything the lexicon does not know comes back unchanged.

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;

/// Shortest word the suffix rules touch; shorter words ("gas", "was", "its") are kept
const MIN_INFLECTED_LEN: usize = 4;

/// Plural suffix and its singular replacement
const SUFFIX_RULES: [(&str, &str); 8] = [
    ("s", ""),
    ("ses", "s"),
    ("xes", "x"),
    ("zes", "z"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("men", "man"),
    ("ies", "y"),
];

static NOUNS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    include_str!("../data/nouns.txt")
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect()
});

static IRREGULAR: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    [
        ("children", "child"),
        ("men", "man"),
        ("women", "woman"),
        ("gentlemen", "gentleman"),
        ("businessmen", "businessman"),
        ("salesmen", "salesman"),
        ("firemen", "fireman"),
        ("policemen", "policeman"),
        ("feet", "foot"),
        ("teeth", "tooth"),
        ("geese", "goose"),
        ("mice", "mouse"),
        ("lice", "louse"),
        ("oxen", "ox"),
        ("knives", "knife"),
        ("wives", "wife"),
        ("lives", "life"),
        ("leaves", "leaf"),
        ("halves", "half"),
        ("shelves", "shelf"),
        ("wolves", "wolf"),
        ("loaves", "loaf"),
        ("thieves", "thief"),
        ("scarves", "scarf"),
        ("calves", "calf"),
        ("selves", "self"),
        ("buses", "bus"),
        ("gases", "gas"),
        ("data", "datum"),
        ("criteria", "criterion"),
        ("phenomena", "phenomenon"),
        ("analyses", "analysis"),
        ("crises", "crisis"),
        ("theses", "thesis"),
        ("indices", "index"),
        ("matrices", "matrix"),
        ("cacti", "cactus"),
        ("fungi", "fungus"),
        ("movies", "movie"),
        ("cookies", "cookie"),
        ("brownies", "brownie"),
        ("smoothies", "smoothie"),
        ("calories", "calorie"),
        ("selfies", "selfie"),
        ("hoodies", "hoodie"),
    ]
    .into_iter()
    .collect()
});

static UNINFLECTED: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "news", "series", "species", "means", "thanks", "always", "perhaps", "towards",
        "afterwards", "besides", "sometimes", "whereas", "downstairs", "upstairs", "overseas",
        "pants", "trousers", "scissors", "clothes", "goods", "premises", "headquarters", "lens",
        "chaos", "canvas", "atlas", "alias", "bias", "christmas", "yours", "ours", "hers",
        "theirs", "whereabouts", "physics", "economics", "politics", "mathematics", "athletics",
        "aerobics", "gymnastics", "diabetes", "measles", "wales", "paris", "texas",
    ]
    .into_iter()
    .collect()
});

/// Reduce a lowercase word to its noun lemma
///
/// Tokens containing anything but letters (numbers, clitics such as `'s`,
/// symbols) are returned unchanged, as are words whose singular is not a
/// known noun. When several rules yield a known noun the shortest wins.
pub fn lemmatize(word: &str) -> String {
    if let Some(lemma) = IRREGULAR.get(word) {
        return (*lemma).to_string();
    }
    if UNINFLECTED.contains(word)
        || !word.chars().all(char::is_alphabetic)
        || word.chars().count() < MIN_INFLECTED_LEN
    {
        return word.to_string();
    }

    SUFFIX_RULES
        .iter()
        .filter_map(|(suffix, replacement)| {
            word.strip_suffix(suffix).map(|stem| format!("{stem}{replacement}"))
        })
        .filter(|candidate| NOUNS.contains(candidate.as_str()))
        .min_by_key(|candidate| candidate.len())
        .unwrap_or_else(|| word.to_string())
}
