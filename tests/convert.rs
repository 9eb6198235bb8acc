use normform::config::Config;
use normform::convert;
use normform::encoding::{encode_terms, Mask};
use normform::error::Error;
use normform::terms::Terms;
use normform::token::tokenize;
use normform::types::{Mode, Predicate};

use test_log::test;

type Reference = fn(&dyn Fn(&str) -> bool) -> bool;

fn to_string(sentence: &str, mode: Mode) -> String {
    convert(sentence, &Config::default().with_mode(mode))
        .unwrap()
        .to_string()
}

/// Sentences paired with an independent definition of their meaning.
fn sentences() -> Vec<(&'static str, Reference)> {
    vec![
        ("a => b && c", |v| !v("a") || (v("b") && v("c"))),
        ("a => b && ~c", |v| !v("a") || (v("b") && !v("c"))),
        ("a => b => c", |v| !v("a") || !v("b") || v("c")),
        ("a && b || c && d", |v| {
            (v("a") && v("b")) || (v("c") && v("d"))
        }),
        ("~(a && b) || c => d", |v| {
            !(!(v("a") && v("b")) || v("c")) || v("d")
        }),
        ("(a || b) && (c || d) => a && d", |v| {
            !((v("a") || v("b")) && (v("c") || v("d"))) || (v("a") && v("d"))
        }),
        ("~~p || q && ~r", |v| v("p") || (v("q") && !v("r"))),
        ("a && ~b || ~a && b", |v| v("a") != v("b")),
        ("x1 && (x2 || ~x3) && (x4 => x1) || ~x5", |v| {
            (v("x1") && (v("x2") || !v("x3")) && (!v("x4") || v("x1"))) || !v("x5")
        }),
    ]
}

fn assert_sound(sentence: &str, reference: Reference, mode: Mode) {
    let predicate = convert(sentence, &Config::default().with_mode(mode)).unwrap();
    let terms = Terms::extract(&tokenize(sentence));
    let n = terms.len();
    for row in 0..(1usize << n) {
        let assignment = |name: &str| {
            let i = terms.index_of(name).unwrap();
            (row >> i) & 1 == 1
        };
        assert_eq!(
            predicate.eval(assignment),
            reference(&assignment),
            "sentence {:?} in {} as `{}` differs at row {}",
            sentence,
            mode,
            predicate,
            row
        );
    }
}

#[test]
fn test_scenario_dnf() {
    assert_eq!(to_string("a => b && c", Mode::Dnf), "~a || (b && c)");
}

#[test]
fn test_scenario_cnf() {
    assert_eq!(
        to_string("a => b && ~c", Mode::Cnf),
        "(~a || ~c) && (~a || b)"
    );
}

#[test]
fn test_contradiction() {
    for mode in [Mode::Cnf, Mode::Dnf] {
        assert_eq!(to_string("a && ~a", mode), "false");
    }
}

#[test]
fn test_tautology() {
    for mode in [Mode::Cnf, Mode::Dnf] {
        assert_eq!(to_string("a || ~a", mode), "true");
        assert_eq!(to_string("a => a", mode), "true");
    }
}

#[test]
fn test_soundness() {
    for (sentence, reference) in sentences() {
        for mode in [Mode::Cnf, Mode::Dnf] {
            assert_sound(sentence, reference, mode);
        }
    }
}

#[test]
fn test_single_literals() {
    for mode in [Mode::Cnf, Mode::Dnf] {
        assert_eq!(to_string("a", mode), "a");
        assert_eq!(to_string("~a", mode), "~a");
        assert_eq!(to_string("((~(a)))", mode), "~a");
    }
}

#[test]
fn test_single_clause_is_parenthesized() {
    assert_eq!(to_string("a && b", Mode::Cnf), "a && b");
    assert_eq!(to_string("a && b", Mode::Dnf), "(a && b)");
    assert_eq!(to_string("a || b", Mode::Cnf), "(a || b)");
    assert_eq!(to_string("a || b", Mode::Dnf), "a || b");
}

#[test]
fn test_whitespace_is_irrelevant() {
    for mode in [Mode::Cnf, Mode::Dnf] {
        assert_eq!(
            to_string("a=>b&&c", mode),
            to_string("  a =>\tb && c ", mode)
        );
    }
}

#[test]
fn test_mode_selector() {
    let config = Config::default().with_mode(Mode::from_arg(Some("DNF")));
    let predicate = convert("a => b && c", &config).unwrap();
    assert_eq!(predicate.to_string(), "~a || (b && c)");

    let mode = Mode::from_arg(Some("anything"));
    let config = Config::default().with_mode(mode);
    let predicate = convert("a => b && c", &config).unwrap();
    assert!(matches!(predicate, Predicate::Cnf(_)));
}

#[test]
fn test_invalid_sentences() {
    for sentence in [
        "", "&& a", "(a && b", "a && b)", "a b && (", "a ~b", "a => ", "()",
    ] {
        assert_eq!(
            convert(sentence, &Config::default()),
            Err(Error::InvalidSentence),
            "{:?}",
            sentence
        );
    }
}

#[test]
fn test_term_limit() {
    let config = Config::default().with_max_terms(3);
    assert!(convert("a && b && c", &config).is_ok());
    assert_eq!(
        convert("a && b && c && d", &config),
        Err(Error::TooManyTerms { terms: 4, limit: 3 })
    );
}

#[test]
fn test_term_density() {
    let terms = Terms::extract(&tokenize("p && q || r => s && t"));
    let masks: Vec<Mask> = encode_terms(&terms);
    assert_eq!(masks.len(), 5);
    for mask in &masks {
        assert_eq!(mask.count_ones(), 16);
    }
}

#[test]
fn test_deterministic() {
    for (sentence, _) in sentences() {
        for mode in [Mode::Cnf, Mode::Dnf] {
            assert_eq!(to_string(sentence, mode), to_string(sentence, mode));
        }
    }
}
