//! Formula rendering with minimal parenthesization

use super::formula::Formula;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Operator spelling used when rendering formulas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Notation {
    /// `~`, `/\`, `\/`, `->`, `<->`, `_|_`, `|-`
    Ascii,
    /// `¬`, `∧`, `∨`, `→`, `↔`, `⊥`, `⊢`
    #[default]
    Unicode,
}

impl Notation {
    fn not(self) -> &'static str {
        match self {
            Notation::Ascii => "~",
            Notation::Unicode => "¬",
        }
    }

    fn and(self) -> &'static str {
        match self {
            Notation::Ascii => "/\\",
            Notation::Unicode => "∧",
        }
    }

    fn or(self) -> &'static str {
        match self {
            Notation::Ascii => "\\/",
            Notation::Unicode => "∨",
        }
    }

    fn implies(self) -> &'static str {
        match self {
            Notation::Ascii => "->",
            Notation::Unicode => "→",
        }
    }

    fn iff(self) -> &'static str {
        match self {
            Notation::Ascii => "<->",
            Notation::Unicode => "↔",
        }
    }

    fn bottom(self) -> &'static str {
        match self {
            Notation::Ascii => "_|_",
            Notation::Unicode => "⊥",
        }
    }

    pub(crate) fn turnstile(self) -> &'static str {
        match self {
            Notation::Ascii => "|-",
            Notation::Unicode => "⊢",
        }
    }
}

// Precedence ranks are doubled so the associativity bias stays integral:
// passing rank+1 into the re-associating side forces parentheses there
// without ever colliding with the next rank up.
fn rank(formula: &Formula) -> u8 {
    match formula {
        Formula::Iff(..) => 2,
        Formula::Implies(..) => 4,
        Formula::Or(..) => 6,
        Formula::And(..) => 8,
        Formula::Not(..) => 10,
        Formula::Var(_) | Formula::Bottom => 12,
    }
}

/// Display adapter tying a formula to a notation.
pub struct FormulaDisplay<'a> {
    formula: &'a Formula,
    notation: Notation,
}

impl Formula {
    /// Render with the given notation and the minimal parentheses needed to
    /// reparse to the same tree.
    pub fn display(&self, notation: Notation) -> FormulaDisplay<'_> {
        FormulaDisplay {
            formula: self,
            notation,
        }
    }

    /// Render to an owned string.
    pub fn to_text(&self, notation: Notation) -> String {
        self.display(notation).to_string()
    }
}

impl fmt::Display for FormulaDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_formula(f, self.formula, self.notation, 0)
    }
}

fn write_formula(
    f: &mut fmt::Formatter<'_>,
    formula: &Formula,
    notation: Notation,
    bound: u8,
) -> fmt::Result {
    let prec = rank(formula);
    let wrap = prec < bound;
    if wrap {
        f.write_str("(")?;
    }
    match formula {
        Formula::Var(name) => f.write_str(name)?,
        Formula::Bottom => f.write_str(notation.bottom())?,
        Formula::Not(operand) => {
            f.write_str(notation.not())?;
            write_formula(f, operand, notation, prec)?;
        }
        Formula::And(left, right) => {
            write_formula(f, left, notation, prec)?;
            write!(f, " {} ", notation.and())?;
            write_formula(f, right, notation, prec + 1)?;
        }
        Formula::Or(left, right) => {
            write_formula(f, left, notation, prec)?;
            write!(f, " {} ", notation.or())?;
            write_formula(f, right, notation, prec + 1)?;
        }
        Formula::Implies(left, right) => {
            // Right-associative: the bias lands on the left child.
            write_formula(f, left, notation, prec + 1)?;
            write!(f, " {} ", notation.implies())?;
            write_formula(f, right, notation, prec)?;
        }
        Formula::Iff(left, right) => {
            write_formula(f, left, notation, prec)?;
            write!(f, " {} ", notation.iff())?;
            write_formula(f, right, notation, prec + 1)?;
        }
    }
    if wrap {
        f.write_str(")")?;
    }
    Ok(())
}
