//! Truth tables and semantic queries
//!
//! Assignment enumeration is exponential in the variable count, so every
//! enumeration-backed operation is guarded by [`MAX_TABLE_VARIABLES`].

use super::eval::{evaluate, Assignment};
use crate::logic::Formula;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use thiserror::Error;

/// Upper bound on distinct variables for any enumerated operation.
pub const MAX_TABLE_VARIABLES: usize = 16;

/// Errors from the truth-table engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SemanticsError {
    #[error("{count} distinct variables exceed the enumeration limit of {MAX_TABLE_VARIABLES}")]
    TooManyVariables { count: usize },
}

/// One row of a truth table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    pub inputs: Assignment,
    pub result: bool,
}

/// A complete truth table with its summary classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TruthTable {
    pub formula: Formula,
    /// Variables in ascending code-point order; row inputs follow this order.
    pub variables: Vec<String>,
    pub rows: Vec<TableRow>,
    pub is_tautology: bool,
    pub is_contradiction: bool,
    pub is_satisfiable: bool,
}

/// A row as submitted for checking: input values in the submitted variable
/// order plus the claimed result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmittedRow {
    pub inputs: Vec<bool>,
    pub result: bool,
}

// Sorted union of variables across formulas, guarded against blowup.
fn combined_variables(formulas: &[&Formula]) -> Result<Vec<String>, SemanticsError> {
    let mut names = BTreeSet::new();
    for formula in formulas {
        names.extend(formula.variables());
    }
    if names.len() > MAX_TABLE_VARIABLES {
        return Err(SemanticsError::TooManyVariables { count: names.len() });
    }
    Ok(names.into_iter().collect())
}

/// Enumerate all assignments over `variables` in table order: the first row
/// is all-true, the last all-false, and variable `j` flips every
/// `2^(n-1-j)` rows.
fn assignments(variables: &[String]) -> impl Iterator<Item = Assignment> + '_ {
    let n = variables.len();
    (0..1usize << n).map(move |row| {
        variables
            .iter()
            .enumerate()
            .map(|(j, name)| (name.clone(), row & (1 << (n - 1 - j)) == 0))
            .collect()
    })
}

/// Build the full truth table of a formula.
pub fn truth_table(formula: &Formula) -> Result<TruthTable, SemanticsError> {
    let variables = combined_variables(&[formula])?;
    let rows: Vec<TableRow> = assignments(&variables)
        .map(|inputs| {
            let result = evaluate(formula, &inputs);
            TableRow { inputs, result }
        })
        .collect();
    let is_tautology = rows.iter().all(|row| row.result);
    let is_contradiction = rows.iter().all(|row| !row.result);
    Ok(TruthTable {
        formula: formula.clone(),
        variables,
        rows,
        is_tautology,
        is_contradiction,
        is_satisfiable: !is_contradiction,
    })
}

/// Two formulas are equivalent iff they agree under every assignment over
/// the union of their variables.
pub fn equivalent(left: &Formula, right: &Formula) -> Result<bool, SemanticsError> {
    let variables = combined_variables(&[left, right])?;
    let result = assignments(&variables).all(|a| evaluate(left, &a) == evaluate(right, &a));
    Ok(result)
}

/// A list of formulas is jointly satisfiable iff some assignment over the
/// union of their variables makes every formula true. The empty list is
/// satisfiable.
pub fn jointly_satisfiable(formulas: &[Formula]) -> Result<bool, SemanticsError> {
    let refs: Vec<&Formula> = formulas.iter().collect();
    let variables = combined_variables(&refs)?;
    let result = assignments(&variables).any(|a| formulas.iter().all(|f| evaluate(f, &a)));
    Ok(result)
}

/// `premises ⊨ conclusion`: no assignment makes every premise true and the
/// conclusion false.
pub fn entails(premises: &[Formula], conclusion: &Formula) -> Result<bool, SemanticsError> {
    Ok(find_counterexample(premises, conclusion)?.is_none())
}

/// First assignment in table order making every premise true and the
/// conclusion false, if any.
pub fn find_counterexample(
    premises: &[Formula],
    conclusion: &Formula,
) -> Result<Option<Assignment>, SemanticsError> {
    let mut refs: Vec<&Formula> = premises.iter().collect();
    refs.push(conclusion);
    let variables = combined_variables(&refs)?;
    let result =
        assignments(&variables).find(|a| premises.iter().all(|p| evaluate(p, a)) && !evaluate(conclusion, a));
    Ok(result)
}

/// Check a submitted truth table against the engine's evaluation.
///
/// Each row's inputs are read in the submitted `variables` order. Returns the
/// indices of disagreeing rows, in submitted order. If the submitted variable
/// order does not cover the formula's variables (or a row's width is wrong),
/// the affected rows count as mismatches.
pub fn validate_rows(formula: &Formula, variables: &[String], rows: &[SubmittedRow]) -> Vec<usize> {
    let covered = {
        let submitted: BTreeSet<&str> = variables.iter().map(String::as_str).collect();
        formula
            .variables()
            .iter()
            .all(|name| submitted.contains(name.as_str()))
    };
    if !covered {
        return (0..rows.len()).collect();
    }
    rows.iter()
        .enumerate()
        .filter_map(|(index, row)| {
            if row.inputs.len() != variables.len() {
                return Some(index);
            }
            let assignment: Assignment = variables
                .iter()
                .cloned()
                .zip(row.inputs.iter().copied())
                .collect();
            (evaluate(formula, &assignment) != row.result).then_some(index)
        })
        .collect()
}
