use super::grammar::{is_variable, Token, NEGATION};
use super::scan::{has_top_level_operator, split_top_level, strip_parens};
use crate::err::ParseError;
use crate::sentence::Sentence;

/// How many parenthesised groups may nest inside one another.
pub const MAX_NESTING: usize = 256;

/// Parse `text` into the smallest tree which represents it.
///
/// A group with a single operand is that operand, so `A` is a variable and `A v B` is a bare
/// disjunction. Explicit parens are kept as structure: `(A ^ B) v C` is a disjunction whose first
/// disjunct is a conjunction.
pub fn parse(text: &str) -> Result<Sentence, ParseError> {
    log::debug!("Parsing {text:?}");
    parse_sentence(text, 0)
}

/// Parse `text` as a conjunction of disjunctions, keeping both layers even when they hold a
/// single element.
pub fn parse_conjunction(text: &str) -> Result<Sentence, ParseError> {
    let text = strip_parens(text)?;
    let conjuncts = split_top_level(text, Token::And)?
        .into_iter()
        .map(|conjunct| -> Result<Sentence, ParseError> {
            let conjunct = strip_parens(conjunct)?;
            let disjuncts = split_top_level(conjunct, Token::Or)?
                .into_iter()
                .map(|disjunct| parse_operand(disjunct, 0))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Sentence::Disjunction(disjuncts))
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Sentence::Conjunction(conjuncts))
}

fn parse_sentence(s: &str, depth: usize) -> Result<Sentence, ParseError> {
    let s = strip_parens(s)?;
    let conjuncts = split_top_level(s, Token::And)?;
    if conjuncts.len() == 1 {
        return parse_disjunction(s, depth);
    }
    let conjuncts = conjuncts
        .into_iter()
        .map(|conjunct| parse_disjunction(conjunct, depth))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Sentence::Conjunction(conjuncts))
}

fn parse_disjunction(s: &str, depth: usize) -> Result<Sentence, ParseError> {
    let s = strip_parens(s)?;
    let disjuncts = split_top_level(s, Token::Or)?;
    if disjuncts.len() == 1 {
        return parse_operand(s, depth);
    }
    let disjuncts = disjuncts
        .into_iter()
        .map(|disjunct| parse_operand(disjunct, depth))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Sentence::Disjunction(disjuncts))
}

// A parenthesised group in literal position is parsed again as a whole sentence.
fn parse_operand(s: &str, depth: usize) -> Result<Sentence, ParseError> {
    let s = strip_parens(s)?;
    if has_top_level_operator(s)? {
        if depth >= MAX_NESTING {
            return Err(ParseError::TooDeep(MAX_NESTING));
        }
        log::debug!("Found nested group {s:?}");
        parse_sentence(s, depth + 1)
    } else {
        parse_literal(s)
    }
}

fn parse_literal(s: &str) -> Result<Sentence, ParseError> {
    let s = strip_parens(s)?;
    let (negated, s) = match s.strip_prefix(NEGATION) {
        Some(rest) => (true, strip_parens(rest)?),
        None => (false, s),
    };

    let mut chars = s.chars();
    let var = match (chars.next(), chars.next()) {
        (None, _) => return Err(ParseError::MissingVariable),
        (Some(letter), None) if is_variable(letter) => Sentence::Variable(letter),
        _ => return Err(ParseError::UnexpectedLiteral(s.to_string())),
    };

    if negated {
        Ok(var.negate())
    } else {
        Ok(var)
    }
}
