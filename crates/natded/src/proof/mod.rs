//! Fitch-style natural-deduction proof checking
//!
//! Proofs are flat lists of steps with a depth column; subproof structure is
//! inferred, justifications are checked for accessibility, and every rule is
//! validated against its schema. See [`check`].

pub mod checker;
pub mod scope;
pub mod step;

pub use checker::{check, ErrorCode, ProofCheckResult, ValidationError};
pub use scope::{compute_subproofs, is_accessible, is_subproof_accessible, Subproof};
pub use step::{ProofStep, ProvenTheorem, Rule, TheoremLibrary};
