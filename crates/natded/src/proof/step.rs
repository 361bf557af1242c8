//! Proof steps and the inference-rule vocabulary

use crate::logic::Formula;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// The sixteen inference rules, identified on the wire by their snake_case
/// names (`and_intro`, `implies_elim`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    Assumption,
    AndIntro,
    AndElimL,
    AndElimR,
    OrIntroL,
    OrIntroR,
    OrElim,
    ImpliesIntro,
    ImpliesElim,
    NotIntro,
    NotElim,
    IffIntro,
    IffElim,
    BottomElim,
    Raa,
    Theorem,
}

impl Rule {
    pub const ALL: [Rule; 16] = [
        Rule::Assumption,
        Rule::AndIntro,
        Rule::AndElimL,
        Rule::AndElimR,
        Rule::OrIntroL,
        Rule::OrIntroR,
        Rule::OrElim,
        Rule::ImpliesIntro,
        Rule::ImpliesElim,
        Rule::NotIntro,
        Rule::NotElim,
        Rule::IffIntro,
        Rule::IffElim,
        Rule::BottomElim,
        Rule::Raa,
        Rule::Theorem,
    ];

    /// Stable wire identifier.
    pub fn wire_name(self) -> &'static str {
        match self {
            Rule::Assumption => "assumption",
            Rule::AndIntro => "and_intro",
            Rule::AndElimL => "and_elim_l",
            Rule::AndElimR => "and_elim_r",
            Rule::OrIntroL => "or_intro_l",
            Rule::OrIntroR => "or_intro_r",
            Rule::OrElim => "or_elim",
            Rule::ImpliesIntro => "implies_intro",
            Rule::ImpliesElim => "implies_elim",
            Rule::NotIntro => "not_intro",
            Rule::NotElim => "not_elim",
            Rule::IffIntro => "iff_intro",
            Rule::IffElim => "iff_elim",
            Rule::BottomElim => "bottom_elim",
            Rule::Raa => "raa",
            Rule::Theorem => "theorem",
        }
    }

    /// Resolve a wire identifier; `None` for unknown names.
    pub fn from_wire(name: &str) -> Option<Rule> {
        Rule::ALL.iter().copied().find(|rule| rule.wire_name() == name)
    }

    /// Number of justifications the rule takes.
    pub fn arity(self) -> usize {
        match self {
            Rule::Assumption | Rule::Theorem => 0,
            Rule::AndElimL
            | Rule::AndElimR
            | Rule::OrIntroL
            | Rule::OrIntroR
            | Rule::ImpliesIntro
            | Rule::NotIntro
            | Rule::NotElim
            | Rule::BottomElim
            | Rule::Raa => 1,
            Rule::AndIntro | Rule::ImpliesElim | Rule::IffIntro | Rule::IffElim => 2,
            Rule::OrElim => 3,
        }
    }

    /// Justification positions that must name subproof handles rather than
    /// single steps.
    pub(crate) fn subproof_positions(self) -> &'static [usize] {
        match self {
            Rule::ImpliesIntro | Rule::NotIntro | Rule::Raa => &[0],
            Rule::OrElim => &[1, 2],
            _ => &[],
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

/// A single line of a Fitch-style proof.
///
/// `rule` carries the wire name so that ill-formed host input stays
/// representable; the checker resolves it through [`Rule::from_wire`] and
/// reports unknown names as errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofStep {
    /// Caller-supplied opaque identifier, unique within one proof.
    pub id: String,
    pub formula: Formula,
    pub rule: String,
    /// Ordered references to earlier steps (or subproof handles).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub justifications: Vec<String>,
    /// Subproof nesting level; 0 is the outer proof.
    pub depth: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theorem_id: Option<String>,
}

impl ProofStep {
    /// Typed constructor for programmatic proof building.
    pub fn new(
        id: impl Into<String>,
        formula: Formula,
        rule: Rule,
        justifications: &[&str],
        depth: usize,
    ) -> Self {
        ProofStep {
            id: id.into(),
            formula,
            rule: rule.wire_name().to_string(),
            justifications: justifications.iter().map(|j| (*j).to_string()).collect(),
            depth,
            theorem_id: None,
        }
    }

    /// A theorem-citation step.
    pub fn cite_theorem(
        id: impl Into<String>,
        formula: Formula,
        theorem_id: impl Into<String>,
        depth: usize,
    ) -> Self {
        ProofStep {
            id: id.into(),
            formula,
            rule: Rule::Theorem.wire_name().to_string(),
            justifications: Vec::new(),
            depth,
            theorem_id: Some(theorem_id.into()),
        }
    }

    pub(crate) fn is_assumption(&self) -> bool {
        self.rule == Rule::Assumption.wire_name()
    }
}

/// A previously proven result available to the `theorem` rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProvenTheorem {
    pub id: String,
    pub premises: Vec<Formula>,
    pub conclusion: Formula,
}

/// Id-keyed collection of proven theorems.
#[derive(Debug, Clone, Default)]
pub struct TheoremLibrary {
    theorems: HashMap<String, ProvenTheorem>,
}

impl TheoremLibrary {
    pub fn new() -> Self {
        TheoremLibrary::default()
    }

    /// Insert a theorem, replacing any previous entry with the same id.
    pub fn insert(&mut self, theorem: ProvenTheorem) {
        self.theorems.insert(theorem.id.clone(), theorem);
    }

    pub fn get(&self, id: &str) -> Option<&ProvenTheorem> {
        self.theorems.get(id)
    }

    pub fn len(&self) -> usize {
        self.theorems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.theorems.is_empty()
    }
}

impl FromIterator<ProvenTheorem> for TheoremLibrary {
    fn from_iter<I: IntoIterator<Item = ProvenTheorem>>(iter: I) -> Self {
        let mut library = TheoremLibrary::new();
        for theorem in iter {
            library.insert(theorem);
        }
        library
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names_round_trip() {
        for rule in Rule::ALL {
            assert_eq!(Rule::from_wire(rule.wire_name()), Some(rule));
        }
        assert_eq!(Rule::from_wire("modus_ponens"), None);
    }

    #[test]
    fn serde_uses_wire_names() {
        let json = serde_json::to_string(&Rule::AndElimL).unwrap();
        assert_eq!(json, "\"and_elim_l\"");
        let rule: Rule = serde_json::from_str("\"implies_elim\"").unwrap();
        assert_eq!(rule, Rule::ImpliesElim);
    }

    #[test]
    fn arities_match_the_rule_table() {
        assert_eq!(Rule::Assumption.arity(), 0);
        assert_eq!(Rule::Theorem.arity(), 0);
        assert_eq!(Rule::NotElim.arity(), 1);
        assert_eq!(Rule::ImpliesElim.arity(), 2);
        assert_eq!(Rule::OrElim.arity(), 3);
    }

    #[test]
    fn step_constructor_uses_wire_names() {
        let step = ProofStep::new("1", Formula::var("P"), Rule::Assumption, &[], 0);
        assert_eq!(step.rule, "assumption");
        assert!(step.is_assumption());
        assert!(step.theorem_id.is_none());
    }
}
