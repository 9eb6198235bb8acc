//! Canonical ordering and rendering of normal forms.
//!
//! Inside a clause, literals are ordered by term name, ignoring polarity. Clauses are
//! then ordered by:
//! 1. length, shortest first;
//! 2. name of the first literal;
//! 3. the whole literal sequence, where a negative literal orders before a positive one.

use std::cmp::Ordering;
use std::fmt;

use crate::types::{Clause, Literal, Mode, Predicate};

/// Sorts the literals of `clause` by term name.
pub fn sort_literals(clause: &mut Clause) {
    clause.literals_mut().sort_by(|a, b| a.name().cmp(b.name()));
}

fn first_name(clause: &Clause) -> Option<&str> {
    clause.literals().first().map(Literal::name)
}

/// Total order on clauses whose literals are already sorted by name.
pub fn compare_clauses(a: &Clause, b: &Clause) -> Ordering {
    a.len()
        .cmp(&b.len())
        .then_with(|| first_name(a).cmp(&first_name(b)))
        .then_with(|| a.literals().cmp(b.literals()))
}

/// Puts `predicate` into canonical order.
///
/// The result does not depend on the order of the input clauses.
pub fn canonicalize(predicate: Predicate) -> Predicate {
    match predicate {
        Predicate::True | Predicate::False => predicate,
        Predicate::Dnf(clauses) => Predicate::Dnf(canonicalize_clauses(clauses)),
        Predicate::Cnf(clauses) => Predicate::Cnf(canonicalize_clauses(clauses)),
    }
}

fn canonicalize_clauses(mut clauses: Vec<Clause>) -> Vec<Clause> {
    for clause in clauses.iter_mut() {
        sort_literals(clause);
    }
    clauses.sort_by(compare_clauses);
    clauses
}

fn write_clause(f: &mut fmt::Formatter<'_>, clause: &Clause, mode: Mode) -> fmt::Result {
    let parenthesize = clause.len() > 1;
    if parenthesize {
        write!(f, "(")?;
    }
    for (i, literal) in clause.literals().iter().enumerate() {
        if i > 0 {
            f.write_str(mode.minor_separator())?;
        }
        write!(f, "{}", literal)?;
    }
    if parenthesize {
        write!(f, ")")?;
    }
    Ok(())
}

/// Renders the predicate as a single line, e.g. `(~a || ~c) && (~a || b)`.
///
/// Clauses are written in their stored order; use [`canonicalize`] first for the
/// canonical text.
impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (mode, clauses) = match self {
            Predicate::True => return write!(f, "true"),
            Predicate::False => return write!(f, "false"),
            Predicate::Dnf(clauses) => (Mode::Dnf, clauses),
            Predicate::Cnf(clauses) => (Mode::Cnf, clauses),
        };
        for (i, clause) in clauses.iter().enumerate() {
            if i > 0 {
                f.write_str(mode.major_separator())?;
            }
            write_clause(f, clause, mode)?;
        }
        Ok(())
    }
}
