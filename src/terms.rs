//! Term extraction: unique term names and their stable indices.

use std::collections::HashMap;

use log::debug;

use crate::token::Token;

/// Unique term names of a sentence, indexed `0..n` in first-seen order.
#[derive(Debug, Clone, Default)]
pub struct Terms {
    names: Vec<String>,
    index: HashMap<String, usize>,
}

impl Terms {
    /// Collects the distinct terms occurring in `tokens`.
    pub fn extract(tokens: &[Token]) -> Self {
        let mut terms = Terms::default();
        for token in tokens {
            if let Token::Term(name) = token {
                terms.insert(name);
            }
        }
        debug!("extract: {} terms: {:?}", terms.len(), terms.names);
        terms
    }

    fn insert(&mut self, name: &str) -> usize {
        if let Some(&i) = self.index.get(name) {
            return i;
        }
        let i = self.names.len();
        self.names.push(name.to_string());
        self.index.insert(name.to_string(), i);
        i
    }

    /// Number of distinct terms.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Returns the name of the term with the given index.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    pub fn name(&self, index: usize) -> &str {
        &self.names[index]
    }

    /// Term names in index order.
    pub fn names(&self) -> &[String] {
        &self.names
    }
}

impl<S: AsRef<str>> FromIterator<S> for Terms {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut terms = Terms::default();
        for name in iter {
            terms.insert(name.as_ref());
        }
        terms
    }
}
