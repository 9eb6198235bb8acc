//! Candidate clauses for the cover search.
//!
//! For a clause size `k` over `n` terms, candidates are *generated* as every
//! `k`-combination of term indices in lexicographic order, and within each combination
//! every negation pattern `0..2^k`, where bit `d` of the pattern negates the `d`-th term
//! of the combination. For `n = 3`, `k = 2`:
//!
//! ```text
//! [a, b] [~a, b] [a, ~b] [~a, ~b] [a, c] [~a, c] ... [~b, ~c]
//! ```
//!
//! [`Candidates`] yields them in exactly the *reverse* of that order, one at a time.
//! Which cover the minimizer finds depends on this order.

use crate::encoding::Mask;
use crate::terms::Terms;
use crate::types::{Clause, Literal, Mode};

/// Iterator over `(clause, code)` pairs of one clause size, last generated first.
///
/// The code of a clause is its truth-table column: the AND of its literal columns in
/// [`Mode::Dnf`], the OR of them in [`Mode::Cnf`].
#[derive(Debug, Clone)]
pub struct Candidates<'a> {
    terms: &'a Terms,
    masks: &'a [Mask],
    mode: Mode,
    size: usize,
    /// Current combination of term indices, `None` once exhausted.
    combination: Option<Vec<usize>>,
    /// Negation patterns of the current combination not yet yielded.
    patterns_left: usize,
}

impl<'a> Candidates<'a> {
    /// Creates the candidate pool of clauses with `size` literals.
    ///
    /// The pool is empty when `size` is `0` or exceeds the number of terms.
    pub fn new(terms: &'a Terms, masks: &'a [Mask], size: usize, mode: Mode) -> Self {
        assert_eq!(terms.len(), masks.len());
        let n = terms.len();
        let (combination, patterns_left) = if size == 0 || size > n {
            (None, 0)
        } else {
            // Lexicographically last combination.
            (Some((n - size..n).collect()), 1 << size)
        };
        Self {
            terms,
            masks,
            mode,
            size,
            combination,
            patterns_left,
        }
    }

    fn candidate(&self, combination: &[usize], pattern: usize) -> (Clause, Mask) {
        let rows = crate::encoding::row_count(self.masks.len());
        let mut code = match self.mode {
            Mode::Dnf => Mask::ones(rows),
            Mode::Cnf => Mask::zero(rows),
        };
        let mut literals = Vec::with_capacity(combination.len());

        for (digit, &i) in combination.iter().enumerate() {
            let negated = (pattern >> digit) & 1 == 1;
            let column = if negated {
                !&self.masks[i]
            } else {
                self.masks[i].clone()
            };
            code = match self.mode {
                Mode::Dnf => &code & &column,
                Mode::Cnf => &code | &column,
            };
            literals.push(Literal::new(self.terms.name(i), negated));
        }

        (Clause::new(literals), code)
    }
}

/// Steps `combination` back to its lexicographic predecessor among the
/// `combination.len()`-combinations of `0..n`.
///
/// Returns `false` if `combination` was already the first one.
fn step_back(combination: &mut [usize], n: usize) -> bool {
    let k = combination.len();
    for i in (0..k).rev() {
        let floor = if i == 0 { 0 } else { combination[i - 1] + 1 };
        if combination[i] > floor {
            combination[i] -= 1;
            for (j, c) in combination.iter_mut().enumerate().skip(i + 1) {
                *c = n - k + j;
            }
            return true;
        }
    }
    false
}

impl Iterator for Candidates<'_> {
    type Item = (Clause, Mask);

    fn next(&mut self) -> Option<Self::Item> {
        if self.patterns_left == 0 {
            let combination = self.combination.as_mut()?;
            if !step_back(combination, self.terms.len()) {
                self.combination = None;
                return None;
            }
            self.patterns_left = 1 << self.size;
        }
        self.patterns_left -= 1;

        let combination = self.combination.as_deref()?;
        Some(self.candidate(combination, self.patterns_left))
    }
}
