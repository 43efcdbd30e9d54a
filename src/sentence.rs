use std::collections::HashMap;

use itertools::Itertools;

use crate::err::ShapeError;

/// A propositional sentence.
///
/// Composite nodes own their children and keep them in the order they were parsed or built.
/// Equality is structural.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Sentence {
    Variable(char),
    Negation(Box<Sentence>),
    Disjunction(Vec<Sentence>),
    Conjunction(Vec<Sentence>),
}

/// A variable or its negation, as read off a sentence in CNF.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Literal {
    letter: char,
    negated: bool,
}

pub trait IntoSentence {
    fn into_sentence(self) -> Sentence;
}

impl IntoSentence for Sentence {
    fn into_sentence(self) -> Sentence {
        self
    }
}

impl IntoSentence for char {
    fn into_sentence(self) -> Sentence {
        Sentence::Variable(self)
    }
}

impl IntoSentence for Literal {
    fn into_sentence(self) -> Sentence {
        let var = Sentence::Variable(self.letter);
        if self.negated {
            var.negate()
        } else {
            var
        }
    }
}

impl Literal {
    pub fn pos(letter: char) -> Self {
        Self {
            letter,
            negated: false,
        }
    }

    pub fn neg(letter: char) -> Self {
        Self {
            letter,
            negated: true,
        }
    }

    pub fn get_letter(&self) -> char {
        self.letter
    }

    pub fn is_negated(&self) -> bool {
        self.negated
    }
}

impl Sentence {
    pub fn var(letter: char) -> Self {
        Self::Variable(letter)
    }

    /// Negate `self`. The grammar only negates single variables, so a negated composite
    /// formats to text the parser rejects.
    pub fn negate(self) -> Self {
        Self::Negation(Box::new(self))
    }

    /// Disjoin `rhs`, extending `self` if it is already a disjunction.
    pub fn or(self, rhs: impl IntoSentence) -> Self {
        match self {
            Sentence::Disjunction(mut disjuncts) => {
                disjuncts.push(rhs.into_sentence());
                Sentence::Disjunction(disjuncts)
            }
            lhs => Sentence::Disjunction(vec![lhs, rhs.into_sentence()]),
        }
    }

    /// Conjoin `rhs`, extending `self` if it is already a conjunction.
    pub fn and(self, rhs: impl IntoSentence) -> Self {
        match self {
            Sentence::Conjunction(mut conjuncts) => {
                conjuncts.push(rhs.into_sentence());
                Sentence::Conjunction(conjuncts)
            }
            lhs => Sentence::Conjunction(vec![lhs, rhs.into_sentence()]),
        }
    }

    pub fn is_literal(&self) -> bool {
        self.as_literal().is_some()
    }

    pub fn as_literal(&self) -> Option<Literal> {
        match self {
            Sentence::Variable(letter) => Some(Literal::pos(*letter)),
            Sentence::Negation(inner) => match inner.as_ref() {
                Sentence::Variable(letter) => Some(Literal::neg(*letter)),
                _ => None,
            },
            _ => None,
        }
    }

    fn collect_letters<'a>(&'a self, letters: &mut Vec<&'a char>) {
        match self {
            Sentence::Variable(letter) => letters.push(letter),
            Sentence::Negation(inner) => inner.collect_letters(letters),
            Sentence::Disjunction(children) | Sentence::Conjunction(children) => {
                for child in children {
                    child.collect_letters(letters);
                }
            }
        }
    }

    /// The distinct variables of the sentence, in order of first occurrence.
    pub fn variables(&self) -> Vec<char> {
        let mut letters = Vec::new();
        self.collect_letters(&mut letters);
        letters.into_iter().copied().unique().collect()
    }

    /// The value of the sentence under `assignment`, or `None` if some variable needed to decide
    /// it is unassigned.
    pub fn evaluate(&self, assignment: &HashMap<char, bool>) -> Option<bool> {
        match self {
            Sentence::Variable(letter) => assignment.get(letter).copied(),
            Sentence::Negation(inner) => inner.evaluate(assignment).map(|value| !value),
            Sentence::Disjunction(disjuncts) => {
                for disjunct in disjuncts {
                    if disjunct.evaluate(assignment)? {
                        return Some(true);
                    }
                }
                Some(false)
            }
            Sentence::Conjunction(conjuncts) => {
                for conjunct in conjuncts {
                    if !conjunct.evaluate(assignment)? {
                        return Some(false);
                    }
                }
                Some(true)
            }
        }
    }

    /// Read the sentence as strict CNF: a conjunction of clauses, each clause a disjunction of
    /// literals. A lone clause or a lone literal is accepted as a one-clause formula.
    pub fn clauses(&self) -> Result<Vec<Vec<Literal>>, ShapeError> {
        match self {
            Sentence::Conjunction(conjuncts) => conjuncts
                .iter()
                .enumerate()
                .map(|(idx, conjunct)| conjunct.clause(idx))
                .collect(),
            other => Ok(vec![other.clause(0)?]),
        }
    }

    fn clause(&self, clause: usize) -> Result<Vec<Literal>, ShapeError> {
        match self {
            Sentence::Disjunction(disjuncts) => disjuncts
                .iter()
                .enumerate()
                .map(|(position, disjunct)| {
                    disjunct
                        .as_literal()
                        .ok_or(ShapeError::NotALiteral { clause, position })
                })
                .collect(),
            other => other
                .as_literal()
                .map(|lit| vec![lit])
                .ok_or(ShapeError::NotAClause { clause }),
        }
    }
}
