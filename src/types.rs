//! Literals, clauses and normal-form predicates.

use std::fmt;

/// Target normal form.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum Mode {
    /// Conjunction of disjunctions.
    #[default]
    Cnf,
    /// Disjunction of conjunctions.
    Dnf,
}

impl Mode {
    /// Interprets a user-supplied mode selector.
    ///
    /// Only `dnf` (in any letter case) selects [`Mode::Dnf`]; anything else, including
    /// no selector at all, selects [`Mode::Cnf`].
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg {
            Some(s) if s.eq_ignore_ascii_case("dnf") => Mode::Dnf,
            _ => Mode::Cnf,
        }
    }

    /// Separator between literals inside one clause.
    pub fn minor_separator(self) -> &'static str {
        match self {
            Mode::Dnf => " && ",
            Mode::Cnf => " || ",
        }
    }

    /// Separator between clauses.
    pub fn major_separator(self) -> &'static str {
        match self {
            Mode::Dnf => " || ",
            Mode::Cnf => " && ",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Cnf => write!(f, "cnf"),
            Mode::Dnf => write!(f, "dnf"),
        }
    }
}

/// A term name with its polarity.
///
/// The derived ordering puts every negative literal before every positive one and
/// compares names within the same polarity.
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Literal {
    Negative(String),
    Positive(String),
}

impl Literal {
    pub fn new(name: impl Into<String>, negated: bool) -> Self {
        if negated {
            Literal::Negative(name.into())
        } else {
            Literal::Positive(name.into())
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Literal::Negative(name) | Literal::Positive(name) => name,
        }
    }

    pub fn is_negated(&self) -> bool {
        matches!(self, Literal::Negative(_))
    }

    /// Value of the literal given the value of its term.
    pub fn eval(&self, value: bool) -> bool {
        value != self.is_negated()
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Negative(name) => write!(f, "~{}", name),
            Literal::Positive(name) => write!(f, "{}", name),
        }
    }
}

/// An ordered sequence of literals over distinct terms.
///
/// Whether it is a conjunction or a disjunction is decided by the enclosing [`Predicate`].
#[derive(Debug, Clone, Default, Eq, PartialEq, Hash)]
pub struct Clause(Vec<Literal>);

impl Clause {
    pub fn new(literals: Vec<Literal>) -> Self {
        Clause(literals)
    }

    pub fn literals(&self) -> &[Literal] {
        &self.0
    }

    pub(crate) fn literals_mut(&mut self) -> &mut Vec<Literal> {
        &mut self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<Literal> for Clause {
    fn from_iter<I: IntoIterator<Item = Literal>>(iter: I) -> Self {
        Clause(iter.into_iter().collect())
    }
}

/// A sentence in normal form.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum Predicate {
    True,
    False,
    /// Disjunction of conjunctive clauses.
    Dnf(Vec<Clause>),
    /// Conjunction of disjunctive clauses.
    Cnf(Vec<Clause>),
}

impl Predicate {
    /// Wraps `clauses` as a predicate of the given form.
    pub fn from_clauses(mode: Mode, clauses: Vec<Clause>) -> Self {
        match mode {
            Mode::Dnf => Predicate::Dnf(clauses),
            Mode::Cnf => Predicate::Cnf(clauses),
        }
    }

    /// The clauses of the predicate; empty for the constants.
    pub fn clauses(&self) -> &[Clause] {
        match self {
            Predicate::True | Predicate::False => &[],
            Predicate::Dnf(clauses) | Predicate::Cnf(clauses) => clauses,
        }
    }

    pub fn mode(&self) -> Option<Mode> {
        match self {
            Predicate::True | Predicate::False => None,
            Predicate::Dnf(_) => Some(Mode::Dnf),
            Predicate::Cnf(_) => Some(Mode::Cnf),
        }
    }

    /// Evaluates the predicate under an assignment of term names to values.
    pub fn eval(&self, assignment: impl Fn(&str) -> bool) -> bool {
        let literal = |lit: &Literal| lit.eval(assignment(lit.name()));
        match self {
            Predicate::True => true,
            Predicate::False => false,
            Predicate::Dnf(clauses) => clauses
                .iter()
                .any(|clause| clause.literals().iter().all(&literal)),
            Predicate::Cnf(clauses) => clauses
                .iter()
                .all(|clause| clause.literals().iter().any(&literal)),
        }
    }
}
