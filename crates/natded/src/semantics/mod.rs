//! Truth-functional semantics
//!
//! Evaluation over assignments, truth-table generation, and the semantic
//! queries built on enumeration: equivalence, joint satisfiability,
//! entailment, and counterexample search.

pub mod eval;
pub mod table;

pub use eval::{evaluate, Assignment};
pub use table::{
    entails, equivalent, find_counterexample, jointly_satisfiable, truth_table, validate_rows,
    SemanticsError, SubmittedRow, TableRow, TruthTable, MAX_TABLE_VARIABLES,
};
