//! # normform: propositional sentences to CNF and DNF
//!
//! **`normform`** converts a propositional logic sentence, written in infix notation, into a
//! simplified **Conjunctive Normal Form** (CNF) or **Disjunctive Normal Form** (DNF).
//!
//! ## Sentences
//!
//! Sentences use a fixed set of connectives, listed from tightest to loosest binding:
//!
//! | Symbol | Meaning     |
//! |--------|-------------|
//! | `~`    | negation    |
//! | `&&`   | conjunction |
//! | `\|\|` | disjunction |
//! | `=>`   | implication |
//!
//! plus `(` and `)` for grouping. Everything else is part of a term name, and whitespace
//! is ignored entirely.
//!
//! ## How it works
//!
//! The sentence is tokenized and validated, every distinct term gets a truth-table column
//! (a `2^n`-bit integer), and the whole sentence is evaluated row by row into its own
//! column. A greedy search then picks clauses of increasing size until their combination
//! reproduces the sentence column exactly. The clauses are finally put into a canonical
//! order and rendered.
//!
//! The output is always equivalent to the input, but not guaranteed to be the smallest
//! equivalent normal form. Cost grows exponentially with the number of distinct terms,
//! which is bounded by [`Config::max_terms`][crate::config::Config::max_terms].
//!
//! ## Basic Usage
//!
//! ```rust
//! use normform::config::Config;
//! use normform::convert;
//! use normform::types::Mode;
//!
//! let dnf = convert("a => b && c", &Config::default().with_mode(Mode::Dnf)).unwrap();
//! assert_eq!(dnf.to_string(), "~a || (b && c)");
//!
//! let cnf = convert("a => b && ~c", &Config::default()).unwrap();
//! assert_eq!(cnf.to_string(), "(~a || ~c) && (~a || b)");
//!
//! assert_eq!(convert("a && ~a", &Config::default()).unwrap().to_string(), "false");
//! assert!(convert("(a && b", &Config::default()).is_err());
//! ```
//!
//! ## Core Components
//!
//! - **[`token`]** and **[`validate`]**: lexing and well-formedness.
//! - **[`encoding`]** and **[`eval`]**: truth-table columns of terms and sentences.
//! - **[`minimize`]**: the greedy cover search, fed by [`candidates`].
//! - **[`canon`]**: canonical ordering and rendering.

pub mod candidates;
pub mod canon;
pub mod config;
pub mod encoding;
pub mod error;
pub mod eval;
pub mod minimize;
pub mod postfix;
pub mod symbol;
pub mod terms;
pub mod token;
pub mod types;
pub mod validate;

use log::debug;

use crate::config::Config;
use crate::error::Error;
use crate::terms::Terms;
use crate::types::Predicate;

/// Converts `sentence` into the normal form selected by `config`.
///
/// The returned predicate is in canonical order; its [`Display`][std::fmt::Display]
/// form is the final text.
///
/// # Errors
///
/// - [`Error::InvalidSentence`] if the sentence is not well-formed.
/// - [`Error::TooManyTerms`] if it has more distinct terms than the configured limit.
pub fn convert(sentence: &str, config: &Config) -> Result<Predicate, Error> {
    let tokens = token::tokenize(sentence);
    if !validate::is_valid(&tokens) {
        return Err(Error::InvalidSentence);
    }

    let terms = Terms::extract(&tokens);
    let limit = config.max_terms.min(usize::BITS as usize - 1);
    if terms.len() > limit {
        return Err(Error::TooManyTerms {
            terms: terms.len(),
            limit,
        });
    }

    let masks = encoding::encode_terms(&terms);
    let postfix = postfix::to_postfix(&tokens);
    let column = eval::evaluate(&postfix, &terms, &masks);
    let predicate = minimize::minimize(&column, &terms, &masks, config.mode);
    let predicate = canon::canonicalize(predicate);

    debug!(
        "convert: {:?} as {} -> {}",
        sentence, config.mode, predicate
    );
    Ok(predicate)
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    use crate::types::Mode;

    #[test]
    fn test_convert_dnf() {
        let config = Config::default().with_mode(Mode::Dnf);
        let p = convert("a => b && c", &config).unwrap();
        assert_eq!(p.to_string(), "~a || (b && c)");
    }

    #[test]
    fn test_convert_cnf() {
        let p = convert("a => b && ~c", &Config::default()).unwrap();
        assert_eq!(p.to_string(), "(~a || ~c) && (~a || b)");
    }

    #[test]
    fn test_invalid() {
        let config = Config::default();
        assert_eq!(convert("&& a", &config), Err(Error::InvalidSentence));
        assert_eq!(convert("", &config), Err(Error::InvalidSentence));
    }

    #[test]
    fn test_too_many_terms() {
        let config = Config::default().with_max_terms(2);
        assert_eq!(
            convert("a && b && c", &config),
            Err(Error::TooManyTerms { terms: 3, limit: 2 })
        );
        assert!(convert("a && b && a", &config).is_ok());
    }
}
