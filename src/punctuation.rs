use crate::letters::is_letter;

/// A token split into leading punctuation, the letters-only core and
/// trailing punctuation.
///
/// `leading + core + trailing` always reproduces the original token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordParts<'a> {
    pub leading: &'a str,
    pub core: &'a str,
    pub trailing: &'a str,
}

impl<'a> WordParts<'a> {
    /// Wrap a (transformed) core in this token's original punctuation.
    pub fn reassemble(&self, core: &str) -> String {
        let mut out = String::with_capacity(self.leading.len() + core.len() + self.trailing.len());
        out.push_str(self.leading);
        out.push_str(core);
        out.push_str(self.trailing);
        out
    }
}

/// Separate leading and trailing punctuation from a token.
///
/// `leading` is the longest prefix of non-letters, `trailing` the longest
/// suffix of non-letters in what remains. A token with no letters at all
/// goes entirely into `leading`.
///
/// # Example
///
/// ```
/// use gopherish::punctuation::split_punctuation;
///
/// let parts = split_punctuation("(doggo),");
/// assert_eq!((parts.leading, parts.core, parts.trailing), ("(", "doggo", "),"));
/// ```
pub fn split_punctuation(token: &str) -> WordParts<'_> {
    // Letters are ASCII, so their byte offsets are always char boundaries.
    let Some(start) = token.find(is_letter) else {
        return WordParts {
            leading: token,
            core: "",
            trailing: "",
        };
    };
    // A letter exists, so rfind cannot miss.
    let end = token.rfind(is_letter).map_or(token.len(), |i| i + 1);

    WordParts {
        leading: &token[..start],
        core: &token[start..end],
        trailing: &token[end..],
    }
}
