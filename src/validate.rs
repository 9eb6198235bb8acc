//! Well-formedness check for token sequences.
//!
//! A sentence is valid when:
//! 1. the start, every connective, `~` and `(` are followed by a term, `~` or `(`;
//! 2. every term and `)` is followed by a binary connective, `)` or the end;
//! 3. parentheses are balanced.

use log::debug;

use crate::token::Token;

/// Returns `true` iff `tokens` form a well-formed sentence.
///
/// Never panics: malformed input of any shape is simply rejected.
pub fn is_valid(tokens: &[Token]) -> bool {
    let valid = check(tokens);
    debug!("is_valid: {}", valid);
    valid
}

fn check(tokens: &[Token]) -> bool {
    let Some(first) = tokens.first() else {
        return false;
    };
    if first.follows_operand() {
        return false;
    }

    // Open minus closed parentheses seen so far.
    let mut depth: usize = 0;

    for (i, token) in tokens.iter().enumerate() {
        match token {
            Token::LParen => depth += 1,
            Token::RParen => {
                if depth == 0 {
                    return false;
                }
                depth -= 1;
            }
            _ => {}
        }

        let next = tokens.get(i + 1);
        if token.expects_operand() {
            match next {
                None => return false,
                Some(next) if next.follows_operand() => return false,
                Some(_) => {}
            }
        } else if let Some(next) = next {
            if !next.follows_operand() {
                return false;
            }
        }
    }

    depth == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::token::tokenize;

    fn valid(sentence: &str) -> bool {
        is_valid(&tokenize(sentence))
    }

    #[test]
    fn test_valid_sentences() {
        assert!(valid("a"));
        assert!(valid("~a"));
        assert!(valid("~~a"));
        assert!(valid("a => b && c"));
        assert!(valid("(a)"));
        assert!(valid("((a || b)) && ~(c => d)"));
        assert!(valid("~(~a)"));
    }

    #[test]
    fn test_empty_is_invalid() {
        assert!(!is_valid(&[]));
        assert!(!valid("   "));
    }

    #[test]
    fn test_bad_start() {
        assert!(!valid("&& a"));
        assert!(!valid("|| a"));
        assert!(!valid("=> a"));
        assert!(!valid(") a"));
    }

    #[test]
    fn test_dangling_operator() {
        assert!(!valid("a &&"));
        assert!(!valid("a && ~"));
        assert!(!valid("a =>"));
        assert!(!valid("("));
    }

    #[test]
    fn test_adjacent_operators() {
        assert!(!valid("a && || b"));
        assert!(!valid("a ~ b"));
        assert!(!valid("~ && a"));
        assert!(!valid("( && a)"));
        assert!(!valid("(a && )"));
    }

    #[test]
    fn test_adjacent_operands() {
        assert!(!valid("(a)(b)"));
        assert!(!valid("(a) b"));
        assert!(!valid("a (b)"));
        assert!(!valid("()"));
    }

    #[test]
    fn test_unbalanced_parentheses() {
        assert!(!valid("(a && b"));
        assert!(!valid("a && b)"));
        assert!(!valid("(a)) && ((b)"));
    }

    #[test]
    fn test_arbitrary_sequences_do_not_panic() {
        let alphabet = [
            Token::Term("a".to_string()),
            Token::And,
            Token::Or,
            Token::Not,
            Token::Implies,
            Token::LParen,
            Token::RParen,
        ];
        // Every sequence of length up to 4 over the alphabet.
        let mut sequences: Vec<Vec<Token>> = vec![vec![]];
        for _ in 0..4 {
            let mut next = Vec::new();
            for seq in &sequences {
                for token in &alphabet {
                    let mut seq = seq.clone();
                    seq.push(token.clone());
                    next.push(seq);
                }
            }
            for seq in &next {
                is_valid(seq);
            }
            sequences = next;
        }
        assert!(is_valid(&[Token::Not, Token::Term("a".to_string())]));
    }
}
