//! Truth-table evaluation of postfix sentences.

use log::debug;
use num_bigint::BigUint;

use crate::encoding::Mask;
use crate::terms::Terms;
use crate::token::Token;

/// A postfix step with terms resolved to their indices.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Step {
    Push(usize),
    Not,
    And,
    Or,
    Implies,
}

fn compile(postfix: &[Token], terms: &Terms) -> Vec<Step> {
    postfix
        .iter()
        .map(|token| match token {
            Token::Term(name) => match terms.index_of(name) {
                Some(i) => Step::Push(i),
                None => panic!("Unknown term `{}` in postfix sentence", name),
            },
            Token::Not => Step::Not,
            Token::And => Step::And,
            Token::Or => Step::Or,
            Token::Implies => Step::Implies,
            Token::LParen | Token::RParen => {
                panic!("Could not evaluate operator `{}`", token)
            }
        })
        .collect()
}

fn pop(stack: &mut Vec<bool>) -> bool {
    match stack.pop() {
        Some(value) => value,
        None => panic!("Evaluation stack underflow"),
    }
}

fn eval_row(steps: &[Step], masks: &[Mask], row: usize, stack: &mut Vec<bool>) -> bool {
    stack.clear();
    for step in steps {
        let value = match *step {
            Step::Push(i) => masks[i].bit(row),
            Step::Not => !pop(stack),
            Step::And | Step::Or | Step::Implies => {
                let rhs = pop(stack);
                let lhs = pop(stack);
                match step {
                    Step::And => lhs && rhs,
                    Step::Or => lhs || rhs,
                    _ => !lhs || rhs,
                }
            }
        };
        stack.push(value);
    }
    assert_eq!(
        stack.len(),
        1,
        "Evaluation must leave exactly one value on the stack"
    );
    stack[0]
}

/// Computes the truth-table column of a postfix sentence.
///
/// Rows are evaluated from `2^n - 1` down to `0`; each result is shifted in at the low
/// end, so the row evaluated first ends up as the most significant bit.
///
/// # Panics
///
/// Panics if the postfix sequence is malformed (stack underflow, leftover values,
/// parentheses) or mentions a term missing from `terms`. Sequences produced by
/// [`to_postfix`][crate::postfix::to_postfix] from validated tokens never do.
pub fn evaluate(postfix: &[Token], terms: &Terms, masks: &[Mask]) -> Mask {
    assert_eq!(terms.len(), masks.len());
    let steps = compile(postfix, terms);
    let rows = crate::encoding::row_count(terms.len());

    let mut bits = BigUint::ZERO;
    let mut stack = Vec::new();
    for row in 0..rows {
        if eval_row(&steps, masks, row, &mut stack) {
            bits.set_bit(row as u64, true);
        }
    }

    let mask = Mask::from_bits(rows, bits);
    debug!("evaluate: {:?}", mask);
    mask
}
