//! Reserved symbols of the sentence grammar.
//!
//! Lowest to highest precedence: `^` (conjunction), `v` (disjunction), `~` (negation).
//! Parentheses group and whitespace is insignificant. A variable is any single alphabetic
//! character except the lowercase `v`, which is always read as disjunction.

pub const CONJUNCTION: char = '^';
pub const DISJUNCTION: char = 'v';
pub const NEGATION: char = '~';
pub const OPEN: char = '(';
pub const CLOSE: char = ')';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Open,
    Close,
    Not,
    Or,
    And,
    Letter(char),
    Space,
    Other(char),
}

impl Token {
    pub fn of(c: char) -> Self {
        match c {
            OPEN => Token::Open,
            CLOSE => Token::Close,
            NEGATION => Token::Not,
            DISJUNCTION => Token::Or,
            CONJUNCTION => Token::And,
            c if c.is_whitespace() => Token::Space,
            c if is_variable(c) => Token::Letter(c),
            c => Token::Other(c),
        }
    }

    pub fn is_operator(&self) -> bool {
        matches!(self, Token::Or | Token::And)
    }
}

pub fn is_variable(c: char) -> bool {
    c.is_alphabetic() && c != DISJUNCTION
}
