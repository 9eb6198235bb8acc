//! Errors reported to callers of [`convert`][crate::convert].
//!
//! Only problems with the input are errors. Broken internal invariants (an operator
//! the evaluator does not know, a corrupted evaluation stack, a search that finds no
//! cover) panic instead.

/// Error type for sentence conversion.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Error {
    /// The sentence is not well-formed.
    InvalidSentence,
    /// The sentence has more distinct terms than allowed.
    TooManyTerms { terms: usize, limit: usize },
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidSentence => write!(f, "Invalid sentence."),
            Error::TooManyTerms { terms, limit } => {
                write!(f, "Too many terms: {} (at most {} supported)", terms, limit)
            }
        }
    }
}

impl std::error::Error for Error {}
