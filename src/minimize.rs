//! Greedy implicant cover.
//!
//! Clause sizes are tried in increasing order starting from single literals. Within a
//! size, candidates come from [`Candidates`] and a candidate is accepted when it is
//! both *valid* and *useful*:
//!
//! | mode | valid                          | useful                    | accumulate        |
//! |------|--------------------------------|---------------------------|-------------------|
//! | DNF  | `code ⊆ sentence`              | `code ⊄ covered`          | `covered \|= code` |
//! | CNF  | `sentence ⊆ code`              | `covered ⊄ code`          | `covered &= code`  |
//!
//! `covered` starts as all-zeros for DNF and all-ones for CNF, and the search stops as
//! soon as it equals the sentence. The result is *a* cover, not necessarily a smallest one.

use log::{debug, trace};

use crate::candidates::Candidates;
use crate::encoding::Mask;
use crate::terms::Terms;
use crate::types::{Clause, Mode, Predicate};

/// Finds a normal form of the function with truth-table column `sentence`.
///
/// Clauses are returned in acceptance order, each with its literals in combination
/// order; see [`canonicalize`][crate::canon::canonicalize] for the presentation order.
///
/// # Panics
///
/// Panics if no cover is found using clauses of up to `terms.len()` literals, which
/// cannot happen for consistent inputs since full-size clauses select single rows.
pub fn minimize(sentence: &Mask, terms: &Terms, masks: &[Mask], mode: Mode) -> Predicate {
    if sentence.is_zero() {
        debug!("minimize: sentence is unsatisfiable");
        return Predicate::False;
    }
    if sentence.is_ones() {
        debug!("minimize: sentence is valid");
        return Predicate::True;
    }

    let mut covered = match mode {
        Mode::Dnf => Mask::zero(sentence.rows()),
        Mode::Cnf => Mask::ones(sentence.rows()),
    };
    let mut clauses: Vec<Clause> = Vec::new();

    'search: for size in 1..=terms.len() {
        debug!("minimize: trying {} clauses of size {}", mode, size);

        for (clause, code) in Candidates::new(terms, masks, size, mode) {
            let accepted = match mode {
                Mode::Dnf => code.is_subset_of(sentence) && !code.is_subset_of(&covered),
                Mode::Cnf => sentence.is_subset_of(&code) && !covered.is_subset_of(&code),
            };
            if !accepted {
                trace!("minimize: rejected {:?}", clause);
                continue;
            }

            covered = match mode {
                Mode::Dnf => &covered | &code,
                Mode::Cnf => &covered & &code,
            };
            debug!("minimize: accepted {:?}, covered = {:?}", clause, covered);
            clauses.push(clause);

            if covered == *sentence {
                break 'search;
            }
        }
    }

    assert!(
        covered == *sentence,
        "Could not find a {} cover for the sentence",
        mode
    );
    debug!("minimize: {} clauses", clauses.len());
    Predicate::from_clauses(mode, clauses)
}
