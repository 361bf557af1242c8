//! JSON wire types for the host application
//!
//! Tagged records mirroring the engine's data model. The host treats these
//! as opaque serializable values; conversions are lossless in both
//! directions.

use crate::logic::Formula;
use crate::proof::{check, ProofCheckResult, ProofStep, ProvenTheorem, TheoremLibrary, ValidationError};
use crate::semantics::{Assignment, TableRow, TruthTable};
use serde::{Deserialize, Serialize};

/// JSON representation of a formula
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FormulaJson {
    Var {
        name: String,
    },
    Bottom,
    Not {
        operand: Box<FormulaJson>,
    },
    And {
        left: Box<FormulaJson>,
        right: Box<FormulaJson>,
    },
    Or {
        left: Box<FormulaJson>,
        right: Box<FormulaJson>,
    },
    Implies {
        left: Box<FormulaJson>,
        right: Box<FormulaJson>,
    },
    Iff {
        left: Box<FormulaJson>,
        right: Box<FormulaJson>,
    },
}

impl From<&Formula> for FormulaJson {
    fn from(formula: &Formula) -> Self {
        match formula {
            Formula::Var(name) => FormulaJson::Var { name: name.clone() },
            Formula::Bottom => FormulaJson::Bottom,
            Formula::Not(operand) => FormulaJson::Not {
                operand: Box::new(operand.as_ref().into()),
            },
            Formula::And(left, right) => FormulaJson::And {
                left: Box::new(left.as_ref().into()),
                right: Box::new(right.as_ref().into()),
            },
            Formula::Or(left, right) => FormulaJson::Or {
                left: Box::new(left.as_ref().into()),
                right: Box::new(right.as_ref().into()),
            },
            Formula::Implies(left, right) => FormulaJson::Implies {
                left: Box::new(left.as_ref().into()),
                right: Box::new(right.as_ref().into()),
            },
            Formula::Iff(left, right) => FormulaJson::Iff {
                left: Box::new(left.as_ref().into()),
                right: Box::new(right.as_ref().into()),
            },
        }
    }
}

impl From<&FormulaJson> for Formula {
    fn from(json: &FormulaJson) -> Self {
        match json {
            FormulaJson::Var { name } => Formula::Var(name.clone()),
            FormulaJson::Bottom => Formula::Bottom,
            FormulaJson::Not { operand } => Formula::not(operand.as_ref().into()),
            FormulaJson::And { left, right } => {
                Formula::and(left.as_ref().into(), right.as_ref().into())
            }
            FormulaJson::Or { left, right } => {
                Formula::or(left.as_ref().into(), right.as_ref().into())
            }
            FormulaJson::Implies { left, right } => {
                Formula::implies(left.as_ref().into(), right.as_ref().into())
            }
            FormulaJson::Iff { left, right } => {
                Formula::iff(left.as_ref().into(), right.as_ref().into())
            }
        }
    }
}

/// JSON representation of a proof step
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProofStepJson {
    pub id: String,
    pub formula: FormulaJson,
    pub rule: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub justifications: Vec<String>,
    pub depth: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theorem_id: Option<String>,
}

impl From<&ProofStep> for ProofStepJson {
    fn from(step: &ProofStep) -> Self {
        ProofStepJson {
            id: step.id.clone(),
            formula: (&step.formula).into(),
            rule: step.rule.clone(),
            justifications: step.justifications.clone(),
            depth: step.depth,
            theorem_id: step.theorem_id.clone(),
        }
    }
}

impl From<&ProofStepJson> for ProofStep {
    fn from(json: &ProofStepJson) -> Self {
        ProofStep {
            id: json.id.clone(),
            formula: (&json.formula).into(),
            rule: json.rule.clone(),
            justifications: json.justifications.clone(),
            depth: json.depth,
            theorem_id: json.theorem_id.clone(),
        }
    }
}

/// JSON representation of a library theorem
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TheoremJson {
    pub id: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub premises: Vec<FormulaJson>,
    pub conclusion: FormulaJson,
}

impl From<&TheoremJson> for ProvenTheorem {
    fn from(json: &TheoremJson) -> Self {
        ProvenTheorem {
            id: json.id.clone(),
            premises: json.premises.iter().map(Formula::from).collect(),
            conclusion: (&json.conclusion).into(),
        }
    }
}

impl From<&ProvenTheorem> for TheoremJson {
    fn from(theorem: &ProvenTheorem) -> Self {
        TheoremJson {
            id: theorem.id.clone(),
            premises: theorem.premises.iter().map(FormulaJson::from).collect(),
            conclusion: (&theorem.conclusion).into(),
        }
    }
}

/// JSON representation of a validation error
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationErrorJson {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step_id: Option<String>,
    pub code: String,
    pub message: String,
}

impl From<&ValidationError> for ValidationErrorJson {
    fn from(error: &ValidationError) -> Self {
        ValidationErrorJson {
            step_id: error.step_id.clone(),
            code: error.code.wire_name().to_string(),
            message: error.message.clone(),
        }
    }
}

/// JSON representation of a proof-check outcome
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckResultJson {
    pub valid: bool,
    pub complete: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ValidationErrorJson>,
}

impl From<&ProofCheckResult> for CheckResultJson {
    fn from(result: &ProofCheckResult) -> Self {
        CheckResultJson {
            valid: result.valid,
            complete: result.complete,
            errors: result.errors.iter().map(ValidationErrorJson::from).collect(),
        }
    }
}

/// A complete proof-check request as submitted by the host
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckRequestJson {
    pub steps: Vec<ProofStepJson>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub premises: Vec<FormulaJson>,
    pub conclusion: FormulaJson,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub theorems: Vec<TheoremJson>,
}

/// Run the checker over a wire request.
pub fn check_request(request: &CheckRequestJson) -> CheckResultJson {
    let steps: Vec<ProofStep> = request.steps.iter().map(ProofStep::from).collect();
    let premises: Vec<Formula> = request.premises.iter().map(Formula::from).collect();
    let conclusion: Formula = (&request.conclusion).into();
    let library: TheoremLibrary = request.theorems.iter().map(ProvenTheorem::from).collect();
    (&check(&steps, &premises, &conclusion, &library)).into()
}

/// JSON representation of one truth-table row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableRowJson {
    /// Inputs keyed by variable, in the table's sorted variable order.
    pub inputs: Assignment,
    pub result: bool,
}

impl From<&TableRow> for TableRowJson {
    fn from(row: &TableRow) -> Self {
        TableRowJson {
            inputs: row.inputs.clone(),
            result: row.result,
        }
    }
}

/// JSON representation of a truth table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TruthTableJson {
    pub formula: FormulaJson,
    pub variables: Vec<String>,
    pub rows: Vec<TableRowJson>,
    pub is_tautology: bool,
    pub is_contradiction: bool,
    pub is_satisfiable: bool,
}

impl From<&TruthTable> for TruthTableJson {
    fn from(table: &TruthTable) -> Self {
        TruthTableJson {
            formula: (&table.formula).into(),
            variables: table.variables.clone(),
            rows: table.rows.iter().map(TableRowJson::from).collect(),
            is_tautology: table.is_tautology,
            is_contradiction: table.is_contradiction,
            is_satisfiable: table.is_satisfiable,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;
    use crate::proof::Rule;
    use crate::semantics::truth_table;

    #[test]
    fn formula_json_round_trip() {
        let formula = parse("~(P /\\ Q) -> (R <-> ⊥)").unwrap();
        let json = FormulaJson::from(&formula);
        let text = serde_json::to_string(&json).unwrap();
        let back: FormulaJson = serde_json::from_str(&text).unwrap();
        assert_eq!(Formula::from(&back), formula);
    }

    #[test]
    fn formula_json_uses_lowercase_tags() {
        let json = FormulaJson::from(&parse("P \\/ Q").unwrap());
        let value = serde_json::to_value(&json).unwrap();
        assert_eq!(value["type"], "or");
        assert_eq!(value["left"]["type"], "var");
        assert_eq!(value["left"]["name"], "P");
    }

    #[test]
    fn check_request_runs_the_checker() {
        let p = parse("P").unwrap();
        let pq = parse("P -> Q").unwrap();
        let q = parse("Q").unwrap();
        let steps = vec![
            ProofStep::new("1", p.clone(), Rule::Assumption, &[], 0),
            ProofStep::new("2", pq.clone(), Rule::Assumption, &[], 0),
            ProofStep::new("3", q.clone(), Rule::ImpliesElim, &["1", "2"], 0),
        ];
        let request = CheckRequestJson {
            steps: steps.iter().map(ProofStepJson::from).collect(),
            premises: vec![(&p).into(), (&pq).into()],
            conclusion: (&q).into(),
            theorems: vec![],
        };
        let result = check_request(&request);
        assert!(result.valid && result.complete, "{:?}", result.errors);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn check_result_exposes_wire_codes() {
        let request = CheckRequestJson {
            steps: vec![],
            premises: vec![],
            conclusion: FormulaJson::Var { name: "P".to_string() },
            theorems: vec![],
        };
        let result = check_request(&request);
        assert_eq!(result.errors[0].code, "EMPTY_PROOF");
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["errors"][0]["code"], "EMPTY_PROOF");
    }

    #[test]
    fn truth_table_rows_preserve_variable_order() {
        let table = truth_table(&parse("Q \\/ P").unwrap()).unwrap();
        let json = TruthTableJson::from(&table);
        assert_eq!(json.variables, vec!["P", "Q"]);
        let keys: Vec<&str> = json.rows[0].inputs.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["P", "Q"]);
        // IndexMap keeps that order on the wire as well.
        let text = serde_json::to_string(&json.rows[3]).unwrap();
        assert_eq!(text, r#"{"inputs":{"P":false,"Q":false},"result":false}"#);
    }
}
