use std::fmt;

use super::grammar::{CONJUNCTION, DISJUNCTION, NEGATION};
use crate::sentence::{Literal, Sentence};

/// Render `sentence` in the grammar read by [parse](super::parse::parse).
///
/// Anything the parser or generator produced parses back to an equal tree. A negated composite,
/// which only the builders can make, renders as `~(A v B)` and is not accepted by the parser.
pub fn format(sentence: &Sentence) -> String {
    sentence.to_string()
}

enum Pending<'a> {
    Sentence(&'a Sentence),
    // composite operands are parenthesised, which is enough for parse(format(s)) == s
    Operand(&'a Sentence),
    Operator(char),
    Text(&'static str),
}

fn push_joined<'a>(pending: &mut Vec<Pending<'a>>, operands: &'a [Sentence], operator: char) {
    for (idx, operand) in operands.iter().enumerate().rev() {
        pending.push(Pending::Operand(operand));
        if idx > 0 {
            pending.push(Pending::Operator(operator));
        }
    }
}

// Built sentences may nest arbitrarily deep, so rendering keeps its own stack.
impl fmt::Display for Sentence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut pending = vec![Pending::Sentence(self)];
        while let Some(next) = pending.pop() {
            match next {
                Pending::Text(text) => f.write_str(text)?,
                Pending::Operator(operator) => write!(f, " {operator} ")?,
                Pending::Operand(operand) if operand.is_literal() => {
                    pending.push(Pending::Sentence(operand))
                }
                Pending::Operand(operand) => {
                    pending.push(Pending::Text(")"));
                    pending.push(Pending::Sentence(operand));
                    pending.push(Pending::Text("("));
                }
                Pending::Sentence(Sentence::Variable(letter)) => write!(f, "{letter}")?,
                Pending::Sentence(Sentence::Negation(inner)) => {
                    write!(f, "{NEGATION}")?;
                    pending.push(Pending::Operand(inner.as_ref()));
                }
                Pending::Sentence(Sentence::Disjunction(disjuncts)) => {
                    push_joined(&mut pending, disjuncts, DISJUNCTION)
                }
                Pending::Sentence(Sentence::Conjunction(conjuncts)) => {
                    push_joined(&mut pending, conjuncts, CONJUNCTION)
                }
            }
        }
        Ok(())
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negated() {
            write!(f, "{NEGATION}{}", self.get_letter())
        } else {
            write!(f, "{}", self.get_letter())
        }
    }
}

#[cfg(test)]
mod format_test {
    use super::format;
    use crate::err::ParseError;
    use crate::pl::parse::{parse, MAX_NESTING};
    use crate::sentence::{IntoSentence, Literal, Sentence};

    #[test]
    fn flat() {
        let s = Sentence::var('A')
            .or(Sentence::var('B').negate())
            .and(Sentence::var('C').or('D'))
            .and(Literal::neg('E'));
        assert_eq!(format(&s), "(A v ~B) ^ (C v D) ^ ~E");
        assert_eq!(Literal::pos('Q').to_string(), "Q");
        assert_eq!(Literal::neg('Q').into_sentence().to_string(), "~Q");
    }

    #[test]
    fn nested_composites_are_parenthesised() {
        let s = Sentence::Disjunction(vec![Sentence::var('A').and('B'), Sentence::var('C')]);
        assert_eq!(format(&s), "(A ^ B) v C");

        let t = Sentence::Conjunction(vec![Sentence::var('A').and('B'), Sentence::var('C')]);
        assert_eq!(format(&t), "(A ^ B) ^ C");

        let u = Sentence::var('A').or('B').negate();
        assert_eq!(format(&u), "~(A v B)");
        assert_eq!(
            parse(&format(&u)),
            Err(ParseError::UnexpectedLiteral("A v B".to_string()))
        );
    }

    #[test]
    fn round_trip_of_parsed() {
        for text in [
            "A",
            "~A",
            "A v B",
            "A ^ B",
            "(A ^ B) v C",
            "(A v B) v C",
            "((A ^ B)) ^ C",
            "A ^ (B v (C ^ ~D)) ^ (~E v F)",
            "(A v ~B v C) ^\n(~D v E v V)",
        ] {
            let parsed = parse(text).unwrap();
            assert_eq!(parse(&format(&parsed)), Ok(parsed), "{text}");
        }
    }

    #[test]
    fn deep_sentences_render() {
        let mut deep = Sentence::var('A');
        for _ in 0..3_000 {
            deep = Sentence::var('A').or(deep);
        }
        let text = format(&deep);
        assert!(text.starts_with("A v (A v (A v "));
        assert_eq!(text.matches('(').count(), 2_999);
        assert!(text.ends_with(&")".repeat(2_999)));
        assert_eq!(parse(&text), Err(ParseError::TooDeep(MAX_NESTING)));

        let mut negated = Sentence::var('B');
        for _ in 0..3_000 {
            negated = negated.negate();
        }
        let text = format(&negated);
        assert!(text.starts_with("~(~(~("));
        assert!(text.ends_with("~B))"));
    }
}
