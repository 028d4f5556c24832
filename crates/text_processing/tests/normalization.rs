//! Normalization properties over a mixed corpus of guest inputs

use concierge_text_processing::{normalize, normalize_joined, tokenize};

const INPUTS: &[&str] = &[
    "Hello",
    "Can I get extra towels, please?",
    "What time does the POOL open?",
    "I'd like room service!!",
    "Où est la piscine ?",
    "酒店有游泳池吗",
    "\u{1F6CE}\u{FE0F} bell please",
    "",
    "   \t  ",
    "a\u{0000}b",
];

#[test]
fn test_normalize_is_deterministic() {
    for input in INPUTS {
        assert_eq!(normalize(input), normalize(input), "input: {input:?}");
    }
}

#[test]
fn test_tokens_are_lowercase_and_non_empty() {
    for input in INPUTS {
        for token in normalize(input) {
            assert!(!token.is_empty());
            assert_eq!(token, token.to_lowercase(), "input: {input:?}");
            assert!(!token.chars().any(char::is_whitespace));
        }
    }
}

#[test]
fn test_joined_matches_tokens() {
    for input in INPUTS {
        assert_eq!(normalize_joined(input), normalize(input).join(" "));
    }
}

#[test]
fn test_plural_pattern_and_singular_input_agree() {
    assert_eq!(normalize("extra towels"), normalize("Extra towel"));
    assert_eq!(normalize("Amenities"), vec!["amenity"]);
}

#[test]
fn test_non_latin_scripts_survive() {
    assert_eq!(normalize("Où est la piscine ?"), vec!["où", "est", "la", "piscine"]);
    assert!(!tokenize("酒店有游泳池吗").is_empty());
}

#[test]
fn test_unknown_plural_looking_words_unchanged() {
    assert_eq!(normalize("xyzs"), vec!["xyzs"]);
    assert_eq!(normalize("Where it goes"), vec!["where", "it", "goes"]);
    assert_eq!(normalize("qwerts and towels"), vec!["qwerts", "and", "towel"]);
}
