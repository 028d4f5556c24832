//! Word tokenization
//!
//! Uses Unicode word boundaries (UAX #29) rather than `split_whitespace()` so that
//! punctuation glued to words ("hello!", "pool?") is separated and scripts without
//! spaces still segment sensibly.

use unicode_segmentation::UnicodeSegmentation;

/// Clitics split off the end of a word, Penn Treebank style
const CLITICS: &[&str] = &["'s", "'m", "'re", "'ve", "'ll", "'d"];

const NEGATION: &str = "n't";

/// Split text into word tokens
///
/// - whitespace and punctuation separate tokens and are dropped
/// - contractions split: `don't` -> `do`, `n't`; `i'm` -> `i`, `'m`
/// - any other symbol (emoji, currency signs outside ASCII, ...) becomes a
///   single-character token
///
/// Case is preserved; callers lowercase first.
pub fn tokenize(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();

    for segment in text.split_word_bounds() {
        if segment.chars().any(char::is_alphanumeric) {
            split_contraction(segment, &mut tokens);
        } else {
            tokens.extend(
                segment
                    .chars()
                    .filter(|c| !is_separator(*c))
                    .map(String::from),
            );
        }
    }

    tokens
}

fn split_contraction(word: &str, out: &mut Vec<String>) {
    let word = word.replace('\u{2019}', "'");

    if let Some(stem) = word.strip_suffix(NEGATION) {
        if !stem.is_empty() {
            out.push(stem.to_string());
            out.push(NEGATION.to_string());
            return;
        }
    }

    for clitic in CLITICS {
        if let Some(stem) = word.strip_suffix(clitic) {
            if !stem.is_empty() {
                out.push(stem.to_string());
                out.push((*clitic).to_string());
                return;
            }
        }
    }

    out.push(word);
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || c.is_control() || c.is_ascii_punctuation() || is_unicode_punctuation(c)
}

/// Common non-ASCII punctuation: Latin-1 marks, general punctuation, CJK and
/// full-width forms
fn is_unicode_punctuation(c: char) -> bool {
    matches!(
        c,
        '\u{00A1}'
            | '\u{00A7}'
            | '\u{00AB}'
            | '\u{00B6}'
            | '\u{00B7}'
            | '\u{00BB}'
            | '\u{00BF}'
            | '\u{2010}'..='\u{2027}'
            | '\u{2030}'..='\u{205E}'
            | '\u{3001}'..='\u{3003}'
            | '\u{3008}'..='\u{3011}'
            | '\u{FF01}'..='\u{FF0F}'
    )
}
