//! natded: a propositional-logic reasoning engine
//!
//! This library parses ASCII/UTF-8 formulas of classical propositional
//! logic, prints them back with minimal parentheses, evaluates formulas and
//! derives truth tables, entailment, and counterexamples, and checks
//! Kalish–Montague / Fitch-style natural-deduction proofs with nested
//! subproofs and scope-sensitive justification.

pub mod json;
pub mod logic;
pub mod parser;
pub mod proof;
pub mod semantics;

// Re-export commonly used types from logic
pub use logic::{Formula, FormulaDisplay, Notation, Sequent};

// Re-export the parser entry point
pub use parser::{parse, ParseError};

// Re-export semantic queries
pub use semantics::{
    entails, equivalent, evaluate, find_counterexample, jointly_satisfiable, truth_table,
    validate_rows, Assignment, SemanticsError, SubmittedRow, TableRow, TruthTable,
    MAX_TABLE_VARIABLES,
};

// Re-export proof checking
pub use proof::{
    check, ErrorCode, ProofCheckResult, ProofStep, ProvenTheorem, Rule, TheoremLibrary,
    ValidationError,
};
