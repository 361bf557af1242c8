//! Evaluation of formulas over boolean assignments

use crate::logic::Formula;
use indexmap::IndexMap;

/// A boolean assignment, keyed by variable name.
///
/// Insertion order is preserved, so assignments produced by enumeration keep
/// the sorted variable order when serialized.
pub type Assignment = IndexMap<String, bool>;

/// Evaluate a formula under an assignment.
///
/// # Panics
///
/// Panics if the assignment lacks a binding for a variable of the formula;
/// supplying a complete assignment is the caller's contract.
pub fn evaluate(formula: &Formula, assignment: &Assignment) -> bool {
    match formula {
        Formula::Var(name) => match assignment.get(name) {
            Some(value) => *value,
            None => panic!("no value assigned to variable '{name}'"),
        },
        Formula::Bottom => false,
        Formula::Not(operand) => !evaluate(operand, assignment),
        Formula::And(left, right) => evaluate(left, assignment) && evaluate(right, assignment),
        Formula::Or(left, right) => evaluate(left, assignment) || evaluate(right, assignment),
        Formula::Implies(left, right) => !evaluate(left, assignment) || evaluate(right, assignment),
        Formula::Iff(left, right) => evaluate(left, assignment) == evaluate(right, assignment),
    }
}
