use std::collections::HashMap;

use itertools::Itertools;

use crate::err::ShapeError;
use crate::sentence::Sentence;

/// Write a CNF sentence in DIMACS form, numbering variables from 1 in sorted letter order.
pub fn to_dimacs(sentence: &Sentence) -> Result<String, ShapeError> {
    let clauses = sentence.clauses()?;
    let numbering: HashMap<char, i64> = sentence
        .variables()
        .into_iter()
        .sorted()
        .zip(1..)
        .collect();

    let mut out = format!("p cnf {} {}\n", numbering.len(), clauses.len());
    for clause in clauses {
        for lit in clause {
            let index = numbering[&lit.get_letter()];
            let index = if lit.is_negated() { -index } else { index };
            out.push_str(&format!("{index} "));
        }
        out.push_str("0\n");
    }
    Ok(out)
}
