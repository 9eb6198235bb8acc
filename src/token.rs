//! Tokens and the tokenizer.

use std::fmt;

use log::debug;

use crate::symbol::Symbol;

/// A lexical unit of a sentence.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum Token {
    Term(String),
    And,
    Or,
    Not,
    Implies,
    LParen,
    RParen,
}

impl From<Symbol> for Token {
    fn from(symbol: Symbol) -> Self {
        match symbol {
            Symbol::And => Token::And,
            Symbol::Or => Token::Or,
            Symbol::Not => Token::Not,
            Symbol::Implies => Token::Implies,
            Symbol::LParen => Token::LParen,
            Symbol::RParen => Token::RParen,
        }
    }
}

// Checks
impl Token {
    /// Binary connectives: `&&`, `||`, `=>`.
    pub fn is_binary(&self) -> bool {
        matches!(self, Token::And | Token::Or | Token::Implies)
    }

    /// Tokens that must be followed by an operand: connectives, `~` and `(`.
    pub fn expects_operand(&self) -> bool {
        self.is_binary() || matches!(self, Token::Not | Token::LParen)
    }

    /// Tokens that may only follow a complete operand: binary connectives and `)`.
    pub fn follows_operand(&self) -> bool {
        self.is_binary() || matches!(self, Token::RParen)
    }

    /// Operator precedence; higher binds tighter.
    ///
    /// Terms and parentheses have precedence `0`.
    pub fn precedence(&self) -> u8 {
        match self {
            Token::Implies => 1,
            Token::Or => 2,
            Token::And => 3,
            Token::Not => 4,
            Token::Term(_) | Token::LParen | Token::RParen => 0,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Token::Term(name) => return f.write_str(name),
            Token::And => Symbol::And,
            Token::Or => Symbol::Or,
            Token::Not => Symbol::Not,
            Token::Implies => Symbol::Implies,
            Token::LParen => Symbol::LParen,
            Token::RParen => Symbol::RParen,
        };
        write!(f, "{}", symbol)
    }
}

/// Splits a sentence into tokens.
///
/// Whitespace is dropped entirely before scanning, so `a b` is the single term `ab`.
/// Any maximal run of characters that does not start a [`Symbol`] forms a term.
///
/// ```
/// use normform::token::{tokenize, Token};
///
/// let tokens = tokenize("a && ~b1");
/// assert_eq!(
///     tokens,
///     vec![
///         Token::Term("a".to_string()),
///         Token::And,
///         Token::Not,
///         Token::Term("b1".to_string()),
///     ]
/// );
/// ```
pub fn tokenize(sentence: &str) -> Vec<Token> {
    let sentence: String = sentence.chars().filter(|c| !c.is_whitespace()).collect();

    let mut tokens = Vec::new();
    let mut term = String::new();
    let mut rest = sentence.as_str();

    while let Some(c) = rest.chars().next() {
        if let Some(symbol) = Symbol::match_at(rest) {
            if !term.is_empty() {
                tokens.push(Token::Term(std::mem::take(&mut term)));
            }
            tokens.push(Token::from(symbol));
            rest = &rest[symbol.spelling().len()..];
        } else {
            term.push(c);
            rest = &rest[c.len_utf8()..];
        }
    }
    if !term.is_empty() {
        tokens.push(Token::Term(term));
    }

    debug!("tokenize: {} tokens: {:?}", tokens.len(), tokens);
    tokens
}
