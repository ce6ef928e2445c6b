use tracing::debug;

use crate::error::{TranslateError, TranslateResult};
use crate::word::translate_word;

/// Characters a sentence is allowed to end with.
pub const SENTENCE_TERMINATORS: [char; 3] = ['.', '!', '?'];

/// Translate an English sentence into Gopherish.
///
/// The sentence must end in one of [`SENTENCE_TERMINATORS`]. It is split on
/// whitespace, every token is translated on its own (keeping its
/// punctuation, including the final terminator) and the results are joined
/// with single spaces.
///
/// # Errors
///
/// [`TranslateError::InvalidEnding`] if the last character of the sentence
/// is not a terminator, including for the empty sentence.
///
/// # Example
///
/// ```
/// use gopherish::translate_sentence;
///
/// assert_eq!(
///     translate_sentence("I ate the popcorn.").unwrap(),
///     "Gi gate ethogo opcornpogo."
/// );
/// assert!(translate_sentence("I ate the popcorn").is_err());
/// ```
pub fn translate_sentence(sentence: &str) -> TranslateResult<String> {
    if !sentence.ends_with(SENTENCE_TERMINATORS) {
        debug!(sentence, "sentence has no terminator");
        return Err(TranslateError::InvalidEnding {
            sentence: sentence.to_string(),
        });
    }

    Ok(sentence
        .split_whitespace()
        .map(translate_word)
        .collect::<Vec<_>>()
        .join(" "))
}
