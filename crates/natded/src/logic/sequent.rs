//! Sequents: premises paired with a conclusion

use super::display::Notation;
use super::formula::Formula;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A sequent `Γ ⊢ φ`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sequent {
    pub premises: Vec<Formula>,
    pub conclusion: Formula,
}

impl Sequent {
    pub fn new(premises: Vec<Formula>, conclusion: Formula) -> Self {
        Sequent {
            premises,
            conclusion,
        }
    }

    /// Render with the given notation.
    pub fn display(&self, notation: Notation) -> SequentDisplay<'_> {
        SequentDisplay {
            sequent: self,
            notation,
        }
    }
}

/// Display adapter for [`Sequent`].
pub struct SequentDisplay<'a> {
    sequent: &'a Sequent,
    notation: Notation,
}

impl fmt::Display for SequentDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, premise) in self.sequent.premises.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", premise.display(self.notation))?;
        }
        write!(
            f,
            " {} {}",
            self.notation.turnstile(),
            self.sequent.conclusion.display(self.notation)
        )
    }
}

impl fmt::Display for Sequent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display(Notation::Unicode))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_premises_and_turnstile() {
        let s = Sequent::new(
            vec![Formula::var("P"), Formula::implies(Formula::var("P"), Formula::var("Q"))],
            Formula::var("Q"),
        );
        assert_eq!(s.display(Notation::Unicode).to_string(), "P, P → Q ⊢ Q");
        assert_eq!(s.display(Notation::Ascii).to_string(), "P, P -> Q |- Q");
    }

    #[test]
    fn empty_premises_keep_leading_space() {
        let s = Sequent::new(vec![], Formula::implies(Formula::var("P"), Formula::var("P")));
        assert_eq!(s.display(Notation::Unicode).to_string(), " ⊢ P → P");
    }
}
