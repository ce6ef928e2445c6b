//! English to Gopherish translation
//!
//! Gopherish is what gophers speak. Words are rewritten by looking at their
//! leading sound:
//!
//! - `apple` → `gapple`
//! - `xray` → `gexray`
//! - `chair` → `airchogo`
//! - `square` → `aresquogo`
//!
//! ```
//! use gopherish::{translate_sentence, translate_word};
//!
//! assert_eq!(translate_word("Apple"), "Gapple");
//! assert_eq!(
//!     translate_sentence("I ate the popcorn.").unwrap(),
//!     "Gi gate ethogo opcornpogo."
//! );
//! ```
//!
//! All functions are pure and can be called from any number of threads.

pub mod error;
pub mod letters;
pub mod punctuation;
pub mod sentence;
pub mod word;


// Re-export main types for convenient access
pub use error::{TranslateError, TranslateResult};
pub use punctuation::{WordParts, split_punctuation};
pub use sentence::{SENTENCE_TERMINATORS, translate_sentence};
pub use word::{LeadingSound, UNINTELLIGIBLE, translate_word};
