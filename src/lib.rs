//! Propositional-logic sentences over single-letter variables.
//!
//! Text in the `~`/`v`/`^` grammar is parsed into a [Sentence](sentence::Sentence) tree and
//! formatted back, and random 3-SAT instances are generated in the same grammar.

pub mod err;
pub mod pl;
pub mod sentence;
