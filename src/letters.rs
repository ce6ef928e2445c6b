//! Fixed ASCII letter classification
//!
//! Gopherish only knows the 26 ASCII letters. Everything else, including
//! digits, whitespace and any non-ASCII character, counts as punctuation.

/// The letters treated as vowels. `y` is always a vowel in Gopherish.
pub const VOWELS: [char; 6] = ['a', 'e', 'i', 'o', 'u', 'y'];

/// Class of a single character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterClass {
    Vowel,
    Consonant,
    /// Not an ASCII letter
    Other,
}

/// Classify a character. Capitals classify like their lowercase form.
///
/// # Example
///
/// ```
/// use gopherish::letters::{LetterClass, classify};
///
/// assert_eq!(classify('E'), LetterClass::Vowel);
/// assert_eq!(classify('q'), LetterClass::Consonant);
/// assert_eq!(classify('!'), LetterClass::Other);
/// ```
pub const fn classify(c: char) -> LetterClass {
    match c.to_ascii_lowercase() {
        'a' | 'e' | 'i' | 'o' | 'u' | 'y' => LetterClass::Vowel,
        'a'..='z' => LetterClass::Consonant,
        _ => LetterClass::Other,
    }
}

pub const fn is_letter(c: char) -> bool {
    !matches!(classify(c), LetterClass::Other)
}

pub const fn is_vowel(c: char) -> bool {
    matches!(classify(c), LetterClass::Vowel)
}

pub const fn is_consonant(c: char) -> bool {
    matches!(classify(c), LetterClass::Consonant)
}

/// Whether `c` is an uppercase ASCII letter
pub const fn is_capital(c: char) -> bool {
    c.is_ascii_uppercase()
}
