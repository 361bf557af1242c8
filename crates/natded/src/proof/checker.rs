//! Proof validation
//!
//! Walks a flat step list, infers subproof scopes, and validates each step
//! against its rule schema and the accessibility of its justifications. The
//! checker is total: ill-formed input produces error values, never panics,
//! and each step contributes at most one error.

use super::scope::{compute_subproofs, is_accessible, is_subproof_accessible, Subproof};
use super::step::{ProofStep, Rule, TheoremLibrary};
use crate::logic::{Formula, Notation};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Stable wire identifiers for validation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    EmptyProof,
    InsufficientJustifications,
    TooManyJustifications,
    JustificationNotFound,
    InaccessibleJustification,
    WrongPremiseType,
    WrongConclusionType,
    ConclusionMismatch,
    InvalidSubproof,
    SubproofMismatch,
    SubproofConclusionMismatch,
    InvalidJustification,
    MissingTheoremId,
    TheoremNotFound,
    TheoremMismatch,
    UnknownRule,
}

impl ErrorCode {
    /// Stable wire identifier.
    pub fn wire_name(self) -> &'static str {
        match self {
            ErrorCode::EmptyProof => "EMPTY_PROOF",
            ErrorCode::InsufficientJustifications => "INSUFFICIENT_JUSTIFICATIONS",
            ErrorCode::TooManyJustifications => "TOO_MANY_JUSTIFICATIONS",
            ErrorCode::JustificationNotFound => "JUSTIFICATION_NOT_FOUND",
            ErrorCode::InaccessibleJustification => "INACCESSIBLE_JUSTIFICATION",
            ErrorCode::WrongPremiseType => "WRONG_PREMISE_TYPE",
            ErrorCode::WrongConclusionType => "WRONG_CONCLUSION_TYPE",
            ErrorCode::ConclusionMismatch => "CONCLUSION_MISMATCH",
            ErrorCode::InvalidSubproof => "INVALID_SUBPROOF",
            ErrorCode::SubproofMismatch => "SUBPROOF_MISMATCH",
            ErrorCode::SubproofConclusionMismatch => "SUBPROOF_CONCLUSION_MISMATCH",
            ErrorCode::InvalidJustification => "INVALID_JUSTIFICATION",
            ErrorCode::MissingTheoremId => "MISSING_THEOREM_ID",
            ErrorCode::TheoremNotFound => "THEOREM_NOT_FOUND",
            ErrorCode::TheoremMismatch => "THEOREM_MISMATCH",
            ErrorCode::UnknownRule => "UNKNOWN_RULE",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

/// A single validation failure, attributed to a step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Id of the offending step; `None` for proof-level failures.
    pub step_id: Option<String>,
    pub code: ErrorCode,
    pub message: String,
}

/// Outcome of checking a proof. Validity (no step errors) and completeness
/// (last step at depth 0 equals the goal) are independent axes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofCheckResult {
    pub valid: bool,
    pub complete: bool,
    pub errors: Vec<ValidationError>,
}

/// Check a proof against its premises, goal conclusion, and theorem library.
pub fn check(
    steps: &[ProofStep],
    premises: &[Formula],
    conclusion: &Formula,
    library: &TheoremLibrary,
) -> ProofCheckResult {
    if steps.is_empty() {
        return ProofCheckResult {
            valid: false,
            complete: false,
            errors: vec![ValidationError {
                step_id: None,
                code: ErrorCode::EmptyProof,
                message: "The proof has no steps".to_string(),
            }],
        };
    }

    // First occurrence wins for duplicate ids; the checker stays total.
    let mut index_of: HashMap<&str, usize> = HashMap::new();
    for (i, step) in steps.iter().enumerate() {
        index_of.entry(step.id.as_str()).or_insert(i);
    }

    let checker = Checker {
        steps,
        premises,
        library,
        subproofs: compute_subproofs(steps),
        index_of,
    };

    let mut errors = Vec::new();
    for index in 0..steps.len() {
        if let Err(error) = checker.check_step(index) {
            errors.push(error);
        }
    }

    let last = &steps[steps.len() - 1];
    ProofCheckResult {
        valid: errors.is_empty(),
        complete: last.depth == 0 && last.formula == *conclusion,
        errors,
    }
}

struct Checker<'a> {
    steps: &'a [ProofStep],
    premises: &'a [Formula],
    library: &'a TheoremLibrary,
    subproofs: Vec<Subproof>,
    index_of: HashMap<&'a str, usize>,
}

impl Checker<'_> {
    fn fail(&self, step: &ProofStep, code: ErrorCode, message: String) -> ValidationError {
        ValidationError {
            step_id: Some(step.id.clone()),
            code,
            message,
        }
    }

    fn formula(&self, index: usize) -> &Formula {
        &self.steps[index].formula
    }

    fn render(&self, formula: &Formula) -> String {
        formula.to_text(Notation::Unicode)
    }

    fn check_step(&self, index: usize) -> Result<(), ValidationError> {
        let step = &self.steps[index];
        let Some(rule) = Rule::from_wire(&step.rule) else {
            return Err(self.fail(
                step,
                ErrorCode::UnknownRule,
                format!("Unknown inference rule '{}'", step.rule),
            ));
        };
        match rule {
            Rule::Assumption => self.check_assumption(step),
            Rule::Theorem => self.check_theorem(step),
            _ => self.check_inference(index, step, rule),
        }
    }

    // An assumption either restates a premise at the outer level or opens a
    // subproof; anything else at depth 0 is flagged.
    fn check_assumption(&self, step: &ProofStep) -> Result<(), ValidationError> {
        if step.depth > 0 || self.premises.contains(&step.formula) {
            return Ok(());
        }
        Err(self.fail(
            step,
            ErrorCode::WrongPremiseType,
            format!("'{}' is not one of the premises", self.render(&step.formula)),
        ))
    }

    fn check_theorem(&self, step: &ProofStep) -> Result<(), ValidationError> {
        let theorem_id = match step.theorem_id.as_deref() {
            Some(id) if !id.is_empty() => id,
            _ => {
                return Err(self.fail(
                    step,
                    ErrorCode::MissingTheoremId,
                    "Theorem citation carries no theorem id".to_string(),
                ));
            }
        };
        let Some(theorem) = self.library.get(theorem_id) else {
            return Err(self.fail(
                step,
                ErrorCode::TheoremNotFound,
                format!("No theorem with id '{theorem_id}' in the library"),
            ));
        };
        if step.formula != theorem.conclusion {
            return Err(self.fail(
                step,
                ErrorCode::TheoremMismatch,
                format!(
                    "'{}' is not the conclusion of theorem '{theorem_id}' ('{}')",
                    self.render(&step.formula),
                    self.render(&theorem.conclusion),
                ),
            ));
        }
        Ok(())
    }

    fn check_inference(
        &self,
        index: usize,
        step: &ProofStep,
        rule: Rule,
    ) -> Result<(), ValidationError> {
        let arity = rule.arity();
        let found = step.justifications.len();
        if found < arity {
            return Err(self.fail(
                step,
                ErrorCode::InsufficientJustifications,
                format!("{rule} expects {arity} justification(s), found {found}"),
            ));
        }
        if found > arity {
            return Err(self.fail(
                step,
                ErrorCode::TooManyJustifications,
                format!("{rule} expects {arity} justification(s), found {found}"),
            ));
        }

        let subproof_positions = rule.subproof_positions();
        let mut targets = Vec::with_capacity(arity);
        for (position, id) in step.justifications.iter().enumerate() {
            let target = match self.index_of.get(id.as_str()) {
                Some(&t) if t < index => t,
                _ => {
                    return Err(self.fail(
                        step,
                        ErrorCode::JustificationNotFound,
                        format!("'{id}' does not name an earlier step"),
                    ));
                }
            };
            let accessible = if subproof_positions.contains(&position) {
                is_subproof_accessible(&self.subproofs, target, index)
            } else {
                is_accessible(&self.subproofs, target, index)
            };
            if !accessible {
                return Err(self.fail(
                    step,
                    ErrorCode::InaccessibleJustification,
                    format!("Step '{id}' is inside a closed subproof and cannot be cited here"),
                ));
            }
            targets.push(target);
        }

        self.check_schema(step, rule, &targets)
    }

    // Resolve a handle to the scope its assumption opens.
    fn subproof_of(&self, target: usize) -> Option<&Subproof> {
        self.subproofs.iter().find(|scope| scope.start == target)
    }

    // The subproof's assumption must match `assumed` and its last line must
    // match `concluded`.
    fn check_subproof(
        &self,
        step: &ProofStep,
        target: usize,
        assumed: &Formula,
        concluded: &Formula,
    ) -> Result<(), ValidationError> {
        let Some(scope) = self.subproof_of(target) else {
            return Err(self.fail(
                step,
                ErrorCode::InvalidSubproof,
                format!("'{}' does not open a subproof", self.steps[target].id),
            ));
        };
        let assumption = self.formula(scope.start);
        if assumption != assumed {
            return Err(self.fail(
                step,
                ErrorCode::SubproofMismatch,
                format!(
                    "Subproof assumes '{}' but '{}' is required",
                    self.render(assumption),
                    self.render(assumed),
                ),
            ));
        }
        let last = self.formula(scope.end);
        if last != concluded {
            return Err(self.fail(
                step,
                ErrorCode::SubproofConclusionMismatch,
                format!(
                    "Subproof concludes '{}' but '{}' is required",
                    self.render(last),
                    self.render(concluded),
                ),
            ));
        }
        Ok(())
    }

    fn check_schema(
        &self,
        step: &ProofStep,
        rule: Rule,
        targets: &[usize],
    ) -> Result<(), ValidationError> {
        let e = &step.formula;
        match rule {
            Rule::AndIntro => {
                let Formula::And(left, right) = e else {
                    return Err(self.fail(
                        step,
                        ErrorCode::WrongConclusionType,
                        format!("'{}' is not a conjunction", self.render(e)),
                    ));
                };
                let (j1, j2) = (self.formula(targets[0]), self.formula(targets[1]));
                if left.as_ref() != j1 || right.as_ref() != j2 {
                    return Err(self.fail(
                        step,
                        ErrorCode::ConclusionMismatch,
                        format!(
                            "'{}' is not the conjunction of '{}' and '{}'",
                            self.render(e),
                            self.render(j1),
                            self.render(j2),
                        ),
                    ));
                }
                Ok(())
            }

            Rule::AndElimL | Rule::AndElimR => {
                let j1 = self.formula(targets[0]);
                let Formula::And(left, right) = j1 else {
                    return Err(self.fail(
                        step,
                        ErrorCode::InvalidJustification,
                        format!("'{}' is not a conjunction", self.render(j1)),
                    ));
                };
                let (expected, side) = if rule == Rule::AndElimL {
                    (left.as_ref(), "left")
                } else {
                    (right.as_ref(), "right")
                };
                if e != expected {
                    return Err(self.fail(
                        step,
                        ErrorCode::ConclusionMismatch,
                        format!(
                            "'{}' is not the {side} conjunct of '{}'",
                            self.render(e),
                            self.render(j1),
                        ),
                    ));
                }
                Ok(())
            }

            Rule::OrIntroL | Rule::OrIntroR => {
                let Formula::Or(left, right) = e else {
                    return Err(self.fail(
                        step,
                        ErrorCode::WrongConclusionType,
                        format!("'{}' is not a disjunction", self.render(e)),
                    ));
                };
                let j1 = self.formula(targets[0]);
                let (expected, side) = if rule == Rule::OrIntroL {
                    (left.as_ref(), "left")
                } else {
                    (right.as_ref(), "right")
                };
                if expected != j1 {
                    return Err(self.fail(
                        step,
                        ErrorCode::ConclusionMismatch,
                        format!(
                            "The {side} disjunct of '{}' is not '{}'",
                            self.render(e),
                            self.render(j1),
                        ),
                    ));
                }
                Ok(())
            }

            Rule::OrElim => {
                let j1 = self.formula(targets[0]);
                let Formula::Or(left, right) = j1 else {
                    return Err(self.fail(
                        step,
                        ErrorCode::InvalidJustification,
                        format!("'{}' is not a disjunction", self.render(j1)),
                    ));
                };
                self.check_subproof(step, targets[1], left, e)?;
                self.check_subproof(step, targets[2], right, e)?;
                Ok(())
            }

            Rule::ImpliesIntro => {
                let Formula::Implies(antecedent, consequent) = e else {
                    return Err(self.fail(
                        step,
                        ErrorCode::WrongConclusionType,
                        format!("'{}' is not an implication", self.render(e)),
                    ));
                };
                self.check_subproof(step, targets[0], antecedent, consequent)
            }

            Rule::ImpliesElim => {
                let (j1, j2) = (self.formula(targets[0]), self.formula(targets[1]));
                // Both argument orders are accepted.
                for (implication, argument) in [(j1, j2), (j2, j1)] {
                    if let Formula::Implies(antecedent, consequent) = implication {
                        if antecedent.as_ref() == argument {
                            if consequent.as_ref() == e {
                                return Ok(());
                            }
                            return Err(self.fail(
                                step,
                                ErrorCode::ConclusionMismatch,
                                format!(
                                    "'{}' is not the consequent of '{}'",
                                    self.render(e),
                                    self.render(implication),
                                ),
                            ));
                        }
                    }
                }
                Err(self.fail(
                    step,
                    ErrorCode::InvalidJustification,
                    format!(
                        "Cannot apply modus ponens to '{}' and '{}'",
                        self.render(j1),
                        self.render(j2),
                    ),
                ))
            }

            Rule::NotIntro => {
                let Formula::Not(operand) = e else {
                    return Err(self.fail(
                        step,
                        ErrorCode::WrongConclusionType,
                        format!("'{}' is not a negation", self.render(e)),
                    ));
                };
                self.check_subproof(step, targets[0], operand, &Formula::Bottom)
            }

            Rule::NotElim => {
                let j1 = self.formula(targets[0]);
                if let Formula::Not(inner) = j1 {
                    if let Formula::Not(core) = inner.as_ref() {
                        if core.as_ref() == e {
                            return Ok(());
                        }
                        return Err(self.fail(
                            step,
                            ErrorCode::ConclusionMismatch,
                            format!(
                                "'{}' is not the double negation of '{}'",
                                self.render(j1),
                                self.render(e),
                            ),
                        ));
                    }
                }
                Err(self.fail(
                    step,
                    ErrorCode::InvalidJustification,
                    format!("'{}' is not a double negation", self.render(j1)),
                ))
            }

            Rule::IffIntro => {
                let Formula::Iff(left, right) = e else {
                    return Err(self.fail(
                        step,
                        ErrorCode::WrongConclusionType,
                        format!("'{}' is not a biconditional", self.render(e)),
                    ));
                };
                let forward = Formula::implies((**left).clone(), (**right).clone());
                let backward = Formula::implies((**right).clone(), (**left).clone());
                let (j1, j2) = (self.formula(targets[0]), self.formula(targets[1]));
                if (j1 == &forward && j2 == &backward) || (j1 == &backward && j2 == &forward) {
                    return Ok(());
                }
                Err(self.fail(
                    step,
                    ErrorCode::InvalidJustification,
                    format!(
                        "Expected '{}' and '{}' in either order",
                        self.render(&forward),
                        self.render(&backward),
                    ),
                ))
            }

            Rule::IffElim => {
                let (j1, j2) = (self.formula(targets[0]), self.formula(targets[1]));
                for (biconditional, side) in [(j1, j2), (j2, j1)] {
                    if let Formula::Iff(left, right) = biconditional {
                        let other = if side == left.as_ref() {
                            right.as_ref()
                        } else if side == right.as_ref() {
                            left.as_ref()
                        } else {
                            continue;
                        };
                        if other == e {
                            return Ok(());
                        }
                        return Err(self.fail(
                            step,
                            ErrorCode::ConclusionMismatch,
                            format!(
                                "'{}' is not the other side of '{}'",
                                self.render(e),
                                self.render(biconditional),
                            ),
                        ));
                    }
                }
                Err(self.fail(
                    step,
                    ErrorCode::InvalidJustification,
                    format!(
                        "Cannot eliminate a biconditional from '{}' and '{}'",
                        self.render(j1),
                        self.render(j2),
                    ),
                ))
            }

            Rule::BottomElim => {
                let j1 = self.formula(targets[0]);
                if *j1 != Formula::Bottom {
                    return Err(self.fail(
                        step,
                        ErrorCode::InvalidJustification,
                        format!("'{}' is not ⊥", self.render(j1)),
                    ));
                }
                Ok(())
            }

            Rule::Raa => {
                let negated = Formula::not(e.clone());
                self.check_subproof(step, targets[0], &negated, &Formula::Bottom)
            }

            // Dispatched before check_inference.
            Rule::Assumption | Rule::Theorem => Ok(()),
        }
    }
}
