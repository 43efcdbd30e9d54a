//! Random 3-SAT instances over the variables `A`..=`Z`.
//!
//! Each clause holds [CLAUSE_WIDTH] literals, with every variable drawn uniformly and negated with
//! probability one half. Literals in a clause may repeat. The source of randomness is always passed
//! in, so a seeded rng gives the same instance every time.

use itertools::Itertools;
use rand::Rng;

use super::grammar::{CONJUNCTION, DISJUNCTION, NEGATION};
use crate::err::NumericParseError;

pub const VARIABLE_COUNT: usize = 26;
pub const CLAUSE_WIDTH: usize = 3;
pub const MAX_CLAUSES: usize = 1_000_000;

pub fn random_literal<R: Rng + ?Sized>(rng: &mut R) -> String {
    let negated = rng.gen_bool(0.5);
    let letter = char::from(b'A' + rng.gen_range(0..VARIABLE_COUNT as u8));
    if negated {
        format!("{NEGATION}{letter}")
    } else {
        letter.to_string()
    }
}

pub fn random_clause<R: Rng + ?Sized>(rng: &mut R) -> String {
    let literals = (0..CLAUSE_WIDTH)
        .map(|_| random_literal(rng))
        .join(&format!(" {DISJUNCTION} "));
    format!("({literals})")
}

/// `clause_count` parenthesised clauses joined by conjunction, one clause per line.
pub fn random_instance<R: Rng + ?Sized>(clause_count: usize, rng: &mut R) -> String {
    let clause_count = if clause_count == 0 {
        log::warn!("Asked for an instance with no clauses, generating one clause instead");
        1
    } else {
        clause_count
    };
    log::debug!("Generating {clause_count} clauses");
    (0..clause_count)
        .map(|_| random_clause(rng))
        .join(&format!(" {CONJUNCTION}\n"))
}

fn rounded_count(ratio: f64) -> f64 {
    (ratio * VARIABLE_COUNT as f64).round()
}

/// Clauses for a clause/variable ratio over [VARIABLE_COUNT] variables, between one and
/// [MAX_CLAUSES].
pub fn clause_count_for_ratio(ratio: f64) -> usize {
    let count = rounded_count(ratio);
    if count.is_nan() || count < 1.0 {
        1
    } else if count > MAX_CLAUSES as f64 {
        log::warn!("Ratio {ratio} gives {count} clauses, generating {MAX_CLAUSES} instead");
        MAX_CLAUSES
    } else {
        count as usize
    }
}

pub fn parse_ratio(input: &str) -> Result<f64, NumericParseError> {
    let ratio = input
        .trim()
        .parse::<f64>()
        .map_err(|error| NumericParseError::Malformed {
            input: input.to_string(),
            error,
        })?;
    if !ratio.is_finite() {
        Err(NumericParseError::NotFinite(input.to_string()))
    } else if rounded_count(ratio) > MAX_CLAUSES as f64 {
        Err(NumericParseError::TooLarge {
            input: input.to_string(),
            max_clauses: MAX_CLAUSES,
        })
    } else {
        Ok(ratio)
    }
}
