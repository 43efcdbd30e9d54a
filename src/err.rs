//! Error types used in the crate.
//!
//! Each concern has its own enum, and every enum converts into [ErrorKind] so `?` can lift a
//! parse or shape failure into the crate-wide error.

use std::fmt;
use std::num::ParseFloatError;
use std::path::PathBuf;

#[derive(Debug)]
pub enum ErrorKind {
    Parse(ParseError),
    NumericParse(NumericParseError),
    Shape(ShapeError),
    Io { path: PathBuf, error: std::io::Error },
}

/// Malformed sentence text.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// A literal position held nothing once parens and negation were stripped.
    MissingVariable,

    /// A literal position held something other than exactly one variable letter.
    UnexpectedLiteral(String),

    /// Unbalanced or crossed parentheses in the given substring.
    ParenthesisMismatch(String),

    /// Groups nested deeper than the given limit.
    TooDeep(usize),
}

/// A clause/variable ratio which could not be used.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum NumericParseError {
    Malformed {
        input: String,
        error: ParseFloatError,
    },

    /// Parsed, but NaN or infinite.
    NotFinite(String),

    /// Asks for more clauses than the given limit.
    TooLarge { input: String, max_clauses: usize },
}

/// A sentence which is not in strict conjunctive normal form.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ShapeError {
    /// Clause `clause` is neither a disjunction nor a literal.
    NotAClause { clause: usize },

    /// Element `position` of clause `clause` is not a literal.
    NotALiteral { clause: usize, position: usize },
}

impl ErrorKind {
    pub fn io(path: impl Into<PathBuf>, error: std::io::Error) -> Self {
        ErrorKind::Io {
            path: path.into(),
            error,
        }
    }
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

impl From<NumericParseError> for ErrorKind {
    fn from(e: NumericParseError) -> Self {
        ErrorKind::NumericParse(e)
    }
}

impl From<ShapeError> for ErrorKind {
    fn from(e: ShapeError) -> Self {
        ErrorKind::Shape(e)
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::MissingVariable => write!(f, "parse error: missing variable"),
            ParseError::UnexpectedLiteral(s) => write!(f, "parse error: unexpected literal `{s}`"),
            ParseError::ParenthesisMismatch(s) => {
                write!(f, "parse error: parenthesis mismatch in `{s}`")
            }
            ParseError::TooDeep(limit) => {
                write!(f, "parse error: groups nested more than {limit} deep")
            }
        }
    }
}

impl fmt::Display for NumericParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericParseError::Malformed { input, error } => {
                write!(f, "`{input}` is not a number: {error}")
            }
            NumericParseError::NotFinite(input) => write!(f, "`{input}` is not a finite number"),
            NumericParseError::TooLarge { input, max_clauses } => {
                write!(f, "`{input}` asks for more than {max_clauses} clauses")
            }
        }
    }
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeError::NotAClause { clause } => {
                write!(f, "not in CNF: conjunct {clause} is not a clause")
            }
            ShapeError::NotALiteral { clause, position } => write!(
                f,
                "not in CNF: element {position} of clause {clause} is not a literal"
            ),
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Parse(e) => write!(f, "{e}"),
            ErrorKind::NumericParse(e) => write!(f, "{e}"),
            ErrorKind::Shape(e) => write!(f, "{e}"),
            ErrorKind::Io { path, error } => write!(f, "io error on {}: {error}", path.display()),
        }
    }
}

impl std::error::Error for ParseError {}

impl std::error::Error for NumericParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            NumericParseError::Malformed { error, .. } => Some(error),
            NumericParseError::NotFinite(_) | NumericParseError::TooLarge { .. } => None,
        }
    }
}

impl std::error::Error for ShapeError {}

impl std::error::Error for ErrorKind {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ErrorKind::Parse(e) => Some(e),
            ErrorKind::NumericParse(e) => Some(e),
            ErrorKind::Shape(e) => Some(e),
            ErrorKind::Io { error, .. } => Some(error),
        }
    }
}
