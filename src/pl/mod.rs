//! Propositional sentences as text: grammar, scanning, parsing, formatting and generation.

pub mod dimacs;
pub mod file;
pub mod format;
pub mod grammar;
pub mod parse;
pub mod random;
pub mod scan;

pub use dimacs::to_dimacs;
pub use file::{read_sentence, write_text};
pub use format::format;
pub use parse::{parse, parse_conjunction};
pub use random::{clause_count_for_ratio, random_instance};
