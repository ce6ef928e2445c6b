//! Single word translation
//!
//! The rules, applied to the lowercased core of a word:
//!
//! 1. A word starting with a vowel gets the prefix `g` (`apple` → `gapple`).
//! 2. A word starting with `xr` gets the prefix `ge` (`xray` → `gexray`),
//!    since it sounds like it starts with a vowel.
//! 3. Any other word starting with a consonant has its leading consonant
//!    sound moved to the end, followed by `ogo` (`chair` → `airchogo`).
//!    A `qu` right after the consonants belongs to the sound
//!    (`square` → `aresquogo`).
//!
//! Surrounding punctuation is kept in place and a capitalized word stays
//! capitalized.

use tracing::debug;

use crate::letters::{LetterClass, classify, is_capital, is_consonant, is_letter};
use crate::punctuation::split_punctuation;

/// Returned for words that cannot be translated.
pub const UNINTELLIGIBLE: &str = "(gunintelligible)";

/// Words containing this character are never translated.
pub const APOSTROPHE: char = '\'';

/// How a lowercase word starts, and therefore how it is translated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeadingSound<'a> {
    /// Starts with a vowel
    Vowel { word: &'a str },
    /// Starts with `xr`
    XrCluster { word: &'a str },
    /// Starts with any other consonant sound
    Consonant { cluster: &'a str, base: &'a str },
    /// Starts with something that is not a letter, or is empty
    Unclassified,
}

impl<'a> LeadingSound<'a> {
    /// Classify a lowercase core word.
    ///
    /// The `xr` check is case sensitive, so callers lowercase first.
    pub fn classify(word: &'a str) -> Self {
        let Some(first) = word.chars().next() else {
            return LeadingSound::Unclassified;
        };

        match classify(first) {
            LetterClass::Vowel => LeadingSound::Vowel { word },
            LetterClass::Consonant if word.starts_with("xr") => LeadingSound::XrCluster { word },
            LetterClass::Consonant => {
                let (cluster, base) = split_consonant_sound(word);
                LeadingSound::Consonant { cluster, base }
            }
            LetterClass::Other => LeadingSound::Unclassified,
        }
    }

    /// Produce the Gopherish form. Empty for [`LeadingSound::Unclassified`].
    pub fn render(&self) -> String {
        match self {
            LeadingSound::Vowel { word } => format!("g{}", word),
            LeadingSound::XrCluster { word } => format!("ge{}", word),
            LeadingSound::Consonant { cluster, base } => format!("{}{}ogo", base, cluster),
            LeadingSound::Unclassified => String::new(),
        }
    }
}

/// Split a lowercase word into its leading consonant sound and the rest.
///
/// The sound is the longest run of consonants, extended by a following
/// `u` when the run ends in `q`. `cluster + base` is always `word`.
///
/// # Example
///
/// ```
/// use gopherish::word::split_consonant_sound;
///
/// assert_eq!(split_consonant_sound("chair"), ("ch", "air"));
/// assert_eq!(split_consonant_sound("square"), ("squ", "are"));
/// ```
pub fn split_consonant_sound(word: &str) -> (&str, &str) {
    let mut end = word.find(|c: char| !is_consonant(c)).unwrap_or(word.len());
    if word[..end].ends_with('q') && word[end..].starts_with('u') {
        end += 1;
    }
    word.split_at(end)
}

/// Uppercase the first letter, skipping any inner punctuation in front of it.
fn capitalize_first_letter(word: &mut String) {
    if let Some(i) = word.find(is_letter) {
        word[i..i + 1].make_ascii_uppercase();
    }
}

/// Translate a single English word into Gopherish.
///
/// Never fails. The empty word translates to the empty word; words with an
/// apostrophe or without any letters translate to [`UNINTELLIGIBLE`].
///
/// # Example
///
/// ```
/// use gopherish::translate_word;
///
/// assert_eq!(translate_word("Square"), "Aresquogo");
/// assert_eq!(translate_word("(doggo),"), "(oggodogo),");
/// assert_eq!(translate_word("don't"), "(gunintelligible)");
/// ```
pub fn translate_word(word: &str) -> String {
    if word.is_empty() {
        return String::new();
    }

    if word.contains(APOSTROPHE) {
        debug!(word, "word contains an apostrophe, not translating");
        return UNINTELLIGIBLE.to_string();
    }

    let parts = split_punctuation(word);
    let lowercase = parts.core.to_ascii_lowercase();
    let mut translated = LeadingSound::classify(&lowercase).render();

    if translated.is_empty() {
        debug!(word, "no letters to translate");
        return UNINTELLIGIBLE.to_string();
    }

    if parts.core.starts_with(is_capital) {
        capitalize_first_letter(&mut translated);
    }

    parts.reassemble(&translated)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_vowel() {
        assert_eq!(
            LeadingSound::classify("apple"),
            LeadingSound::Vowel { word: "apple" }
        );
        assert_eq!(
            LeadingSound::classify("yes"),
            LeadingSound::Vowel { word: "yes" }
        );
    }

    #[test]
    fn test_classify_xr() {
        assert_eq!(
            LeadingSound::classify("xray"),
            LeadingSound::XrCluster { word: "xray" }
        );
        // Plain x is an ordinary consonant
        assert_eq!(
            LeadingSound::classify("xylophone"),
            LeadingSound::Consonant {
                cluster: "x",
                base: "ylophone"
            }
        );
    }

    #[test]
    fn test_classify_consonant() {
        assert_eq!(
            LeadingSound::classify("chair"),
            LeadingSound::Consonant {
                cluster: "ch",
                base: "air"
            }
        );
    }

    #[test]
    fn test_classify_unclassified() {
        assert_eq!(LeadingSound::classify(""), LeadingSound::Unclassified);
        assert_eq!(LeadingSound::classify("-op"), LeadingSound::Unclassified);
        assert_eq!(LeadingSound::Unclassified.render(), "");
    }

    #[test]
    fn test_split_consonant_sound_qu() {
        assert_eq!(split_consonant_sound("queen"), ("qu", "een"));
        assert_eq!(split_consonant_sound("square"), ("squ", "are"));
        // q not followed by u
        assert_eq!(split_consonant_sound("qat"), ("q", "at"));
        // u after a run not ending in q
        assert_eq!(split_consonant_sound("gust"), ("g", "ust"));
    }

    #[test]
    fn test_split_consonant_sound_edges() {
        assert_eq!(split_consonant_sound("psst"), ("psst", ""));
        assert_eq!(split_consonant_sound("q"), ("q", ""));
        assert_eq!(split_consonant_sound("apple"), ("", "apple"));
        assert_eq!(split_consonant_sound("c-op"), ("c", "-op"));
    }

    #[test]
    fn test_split_consonant_sound_is_lossless() {
        for word in ["chair", "square", "plynth", "strength", "squ", "queue", "rhythm"] {
            let (cluster, base) = split_consonant_sound(word);
            assert_eq!(format!("{}{}", cluster, base), word);
        }
    }

    #[test]
    fn test_translate_word_rules() {
        assert_eq!(translate_word("apple"), "gapple");
        assert_eq!(translate_word("xray"), "gexray");
        assert_eq!(translate_word("chair"), "airchogo");
        assert_eq!(translate_word("square"), "aresquogo");
    }

    #[test]
    fn test_translate_word_capitals() {
        assert_eq!(translate_word("Square"), "Aresquogo");
        assert_eq!(translate_word("Xray"), "Gexray");
        assert_eq!(translate_word("XRAY"), "Gexray");
        assert_eq!(translate_word("CHAIR"), "Airchogo");
        assert_eq!(translate_word("I"), "Gi");
        // Only the first letter decides
        assert_eq!(translate_word("iPhone"), "giphone");
    }

    #[test]
    fn test_translate_word_capital_after_inner_punctuation() {
        assert_eq!(translate_word("C-op"), "-Opcogo");
        assert_eq!(translate_word("Mr.Smith"), ".Smithmrogo");
        assert_eq!(translate_word("(Co-op)!"), "(O-opcogo)!");
        // Lowercase words stay lowercase
        assert_eq!(translate_word("c-op"), "-opcogo");
    }

    #[test]
    fn test_translate_word_all_consonants() {
        assert_eq!(translate_word("psst"), "psstogo");
        assert_eq!(translate_word("Hmm"), "Hmmogo");
    }

    #[test]
    fn test_translate_word_punctuation() {
        assert_eq!(translate_word("(doggo),"), "(oggodogo),");
        assert_eq!(translate_word("\"Apple!\""), "\"Gapple!\"");
        assert_eq!(translate_word("«chair»"), "«airchogo»");
    }

    #[test]
    fn test_translate_word_inner_punctuation() {
        assert_eq!(translate_word("co-op"), "o-opcogo");
        assert_eq!(translate_word("e-mail"), "ge-mail");
    }

    #[test]
    fn test_translate_word_empty() {
        assert_eq!(translate_word(""), "");
    }

    #[test]
    fn test_translate_word_apostrophe() {
        assert_eq!(translate_word("don't"), UNINTELLIGIBLE);
        assert_eq!(translate_word("Wouldn't"), UNINTELLIGIBLE);
        assert_eq!(translate_word("'tis"), UNINTELLIGIBLE);
        assert_eq!(translate_word("dogs'"), UNINTELLIGIBLE);
    }

    #[test]
    fn test_translate_word_no_letters() {
        assert_eq!(translate_word("..."), UNINTELLIGIBLE);
        assert_eq!(translate_word("42"), UNINTELLIGIBLE);
        assert_eq!(translate_word("-"), UNINTELLIGIBLE);
    }

    #[test]
    fn test_translate_word_is_not_idempotent() {
        let once = translate_word("chair");
        assert_eq!(once, "airchogo");
        assert_eq!(translate_word(&once), "gairchogo");
    }
}
