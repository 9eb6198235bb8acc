//! Conversion settings.

use crate::types::Mode;

/// Options for [`convert`][crate::convert].
///
/// # Examples
///
/// ```
/// use normform::config::Config;
/// use normform::types::Mode;
///
/// let config = Config::default().with_mode(Mode::Dnf).with_max_terms(8);
/// assert_eq!(config.mode, Mode::Dnf);
/// assert_eq!(config.max_terms, 8);
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Target normal form (default: CNF)
    pub mode: Mode,
    /// Largest number of distinct terms accepted (default: 16)
    ///
    /// Truth tables hold `2^n` rows and the cover search inspects up to `3^n` candidate
    /// clauses, so sentences beyond a few dozen terms are out of reach regardless.
    pub max_terms: usize,
}

impl Config {
    pub const DEFAULT_MAX_TERMS: usize = 16;

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_max_terms(mut self, max_terms: usize) -> Self {
        self.max_terms = max_terms;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode: Mode::Cnf,
            max_terms: Self::DEFAULT_MAX_TERMS,
        }
    }
}
