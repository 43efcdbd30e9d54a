//! Depth-aware scanning over sentence text.
//!
//! Operators are only split on at paren depth zero, so `(A ^ B) v C` is a disjunction.

use std::str::CharIndices;

use super::grammar::{Token, CLOSE, OPEN};
use crate::err::ParseError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scanned {
    pub offset: usize,
    pub end: usize,
    pub token: Token,
    /// Depth outside of the token, so a paren pair and its neighbours share a depth.
    pub depth: usize,
}

pub struct Scanner<'a> {
    source: &'a str,
    chars: CharIndices<'a>,
    depth: usize,
    finished: bool,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.char_indices(),
            depth: 0,
            finished: false,
        }
    }

    fn mismatch(&mut self) -> ParseError {
        self.finished = true;
        ParseError::ParenthesisMismatch(self.source.to_string())
    }
}

impl Iterator for Scanner<'_> {
    type Item = Result<Scanned, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let Some((offset, c)) = self.chars.next() else {
            if self.depth != 0 {
                return Some(Err(self.mismatch()));
            }
            self.finished = true;
            return None;
        };
        let token = Token::of(c);
        let depth = match token {
            Token::Open => {
                self.depth += 1;
                self.depth - 1
            }
            Token::Close => {
                if self.depth == 0 {
                    return Some(Err(self.mismatch()));
                }
                self.depth -= 1;
                self.depth
            }
            _ => self.depth,
        };
        Some(Ok(Scanned {
            offset,
            end: offset + c.len_utf8(),
            token,
            depth,
        }))
    }
}

/// Trim `s` and repeatedly remove a paren pair which encloses all of it.
///
/// `(A) v (B)` is left alone, as its outer parens close different groups.
pub fn strip_parens(s: &str) -> Result<&str, ParseError> {
    let mut s = s.trim();
    while s.starts_with(OPEN) && s.ends_with(CLOSE) {
        let last = s.len() - CLOSE.len_utf8();
        let mut encloses = true;
        for scanned in Scanner::new(s) {
            let scanned = scanned?;
            if scanned.token == Token::Close && scanned.depth == 0 && scanned.offset != last {
                encloses = false;
            }
        }
        if !encloses {
            break;
        }
        s = s[OPEN.len_utf8()..last].trim();
    }
    Ok(s)
}

/// Split `s` at each occurrence of `operator` outside of any parens.
pub fn split_top_level(s: &str, operator: Token) -> Result<Vec<&str>, ParseError> {
    let mut parts = Vec::new();
    let mut start = 0;
    for scanned in Scanner::new(s) {
        let scanned = scanned?;
        if scanned.depth == 0 && scanned.token == operator {
            parts.push(&s[start..scanned.offset]);
            start = scanned.end;
        }
    }
    parts.push(&s[start..]);
    log::debug!("Split {s:?} on {operator:?} into {parts:?}");
    Ok(parts)
}

pub fn has_top_level_operator(s: &str) -> Result<bool, ParseError> {
    for scanned in Scanner::new(s) {
        let scanned = scanned?;
        if scanned.depth == 0 && scanned.token.is_operator() {
            return Ok(true);
        }
    }
    Ok(false)
}

#[cfg(test)]
mod scan_test {
    use super::{has_top_level_operator, split_top_level, strip_parens, Scanner};
    use crate::err::ParseError;
    use crate::pl::grammar::Token;

    #[test]
    fn depths() {
        let depths = Scanner::new("(A(B))")
            .map(|s| s.map(|s| s.depth))
            .collect::<Result<Vec<_>, _>>();
        assert_eq!(depths, Ok(vec![0, 1, 1, 2, 1, 0]));
    }

    #[test]
    fn scanner_reports_mismatch() {
        let unclosed = Scanner::new("(A").collect::<Result<Vec<_>, _>>();
        assert_eq!(
            unclosed,
            Err(ParseError::ParenthesisMismatch("(A".to_string()))
        );

        let unopened = Scanner::new("A)(").collect::<Result<Vec<_>, _>>();
        assert_eq!(
            unopened,
            Err(ParseError::ParenthesisMismatch("A)(".to_string()))
        );
    }

    #[test]
    fn strip_enclosing_only() {
        assert_eq!(strip_parens("  ((A))  "), Ok("A"));
        assert_eq!(strip_parens("( ( A v B ) )"), Ok("A v B"));
        assert_eq!(strip_parens("(A) v (B)"), Ok("(A) v (B)"));
        assert_eq!(strip_parens("((A) v (B))"), Ok("(A) v (B)"));
        assert_eq!(strip_parens("()"), Ok(""));
        assert_eq!(strip_parens("A"), Ok("A"));
    }

    #[test]
    fn strip_unbalanced() {
        assert!(matches!(
            strip_parens("((A)"),
            Err(ParseError::ParenthesisMismatch(_))
        ));
        assert!(matches!(
            strip_parens("(A)) v ((B)"),
            Err(ParseError::ParenthesisMismatch(_))
        ));
    }

    #[test]
    fn split_ignores_nested_operators() {
        assert_eq!(
            split_top_level("(A ^ B) v C", Token::Or),
            Ok(vec!["(A ^ B) ", " C"])
        );
        assert_eq!(
            split_top_level("(A ^ B) v C", Token::And),
            Ok(vec!["(A ^ B) v C"])
        );
        assert_eq!(
            split_top_level("A ^ (B ^ C) ^ D", Token::And),
            Ok(vec!["A ", " (B ^ C) ", " D"])
        );
        assert_eq!(split_top_level("", Token::And), Ok(vec![""]));
    }

    #[test]
    fn top_level_operators() {
        assert_eq!(has_top_level_operator("A v B"), Ok(true));
        assert_eq!(has_top_level_operator("(A v B)"), Ok(false));
        assert_eq!(has_top_level_operator("~A"), Ok(false));
        assert!(has_top_level_operator("(A").is_err());
    }
}
