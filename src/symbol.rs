//! Fixed operator symbol table.
//!
//! Everything in a sentence that is not one of these spellings belongs to a term name.
//! The table is checked at compile time to be prefix-free, so matching the symbols
//! against a position in the input is unambiguous regardless of the order they are tried.

use std::fmt;

/// A recognized operator or parenthesis spelling.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Symbol {
    And,
    Or,
    Not,
    LParen,
    RParen,
    Implies,
}

/// All recognized symbols.
pub const SYMBOLS: [Symbol; 6] = [
    Symbol::And,
    Symbol::Or,
    Symbol::Not,
    Symbol::LParen,
    Symbol::RParen,
    Symbol::Implies,
];

const _: () = assert!(
    is_prefix_free(&SYMBOLS),
    "No symbol may be a prefix of another symbol"
);

impl Symbol {
    /// Returns the textual spelling of the symbol.
    pub const fn spelling(self) -> &'static str {
        match self {
            Symbol::And => "&&",
            Symbol::Or => "||",
            Symbol::Not => "~",
            Symbol::LParen => "(",
            Symbol::RParen => ")",
            Symbol::Implies => "=>",
        }
    }

    /// Returns the symbol spelled at the very start of `input`, if any.
    pub fn match_at(input: &str) -> Option<Symbol> {
        SYMBOLS
            .iter()
            .copied()
            .find(|symbol| input.starts_with(symbol.spelling()))
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.spelling())
    }
}

const fn starts_with(s: &[u8], prefix: &[u8]) -> bool {
    if prefix.len() > s.len() {
        return false;
    }
    let mut i = 0;
    while i < prefix.len() {
        if s[i] != prefix[i] {
            return false;
        }
        i += 1;
    }
    true
}

/// Checks that no spelling in `symbols` is a prefix of another one.
pub const fn is_prefix_free(symbols: &[Symbol]) -> bool {
    let mut i = 0;
    while i < symbols.len() {
        let mut j = 0;
        while j < symbols.len() {
            let shorter = symbols[i].spelling().as_bytes();
            let longer = symbols[j].spelling().as_bytes();
            if i != j && starts_with(longer, shorter) {
                return false;
            }
            j += 1;
        }
        i += 1;
    }
    true
}
