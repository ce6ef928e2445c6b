use thiserror::Error;

/// Errors raised while translating into Gopherish
///
/// Word translation never fails: untranslatable words come back as
/// [`UNINTELLIGIBLE`](crate::word::UNINTELLIGIBLE). Only whole sentences
/// can be rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslateError {
    /// The sentence does not end in `.`, `!` or `?`
    #[error("invalid sentence ending in '{sentence}'. Only '.', '?' and '!' are supported")]
    InvalidEnding { sentence: String },
}

/// Result type for translation operations
pub type TranslateResult<T> = Result<T, TranslateError>;
