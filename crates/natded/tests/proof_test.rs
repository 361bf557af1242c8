//! End-to-end proof-checking scenarios.
//!
//! Every proof accepted as valid and complete is also checked against the
//! truth-table engine: the checker must never accept a semantically invalid
//! argument.

use natded::{
    check, entails, parse, ErrorCode, Formula, ProofCheckResult, ProofStep, Rule, TheoremLibrary,
};

fn f(text: &str) -> Formula {
    parse(text).unwrap()
}

fn step(id: &str, text: &str, rule: Rule, justs: &[&str], depth: usize) -> ProofStep {
    ProofStep::new(id, f(text), rule, justs, depth)
}

fn check_and_assert_sound(
    steps: &[ProofStep],
    premises: &[Formula],
    conclusion: &Formula,
) -> ProofCheckResult {
    let result = check(steps, premises, conclusion, &TheoremLibrary::new());
    if result.valid && result.complete {
        assert!(
            entails(premises, conclusion).unwrap(),
            "checker accepted a semantically invalid argument",
        );
    }
    result
}

#[test]
fn modus_ponens_proof() {
    let premises = vec![f("P"), f("P -> Q")];
    let conclusion = f("Q");
    for justs in [["1", "2"], ["2", "1"]] {
        let steps = vec![
            step("1", "P", Rule::Assumption, &[], 0),
            step("2", "P -> Q", Rule::Assumption, &[], 0),
            step("3", "Q", Rule::ImpliesElim, &[justs[0], justs[1]], 0),
        ];
        let result = check_and_assert_sound(&steps, &premises, &conclusion);
        assert!(result.valid, "{:?}", result.errors);
        assert!(result.complete);
    }
}

#[test]
fn conditional_introduction_proof() {
    // Goal: ⊢ P → P, no premises.
    let steps = vec![
        step("1", "P", Rule::Assumption, &[], 1),
        step("2", "P -> P", Rule::ImpliesIntro, &["1"], 0),
    ];
    let result = check_and_assert_sound(&steps, &[], &f("P -> P"));
    assert!(result.valid, "{:?}", result.errors);
    assert!(result.complete);
}

#[test]
fn disjunction_elimination_proof() {
    let premises = vec![f("P \\/ Q"), f("P -> R"), f("Q -> R")];
    let conclusion = f("R");
    let steps = vec![
        step("1", "P \\/ Q", Rule::Assumption, &[], 0),
        step("2", "P -> R", Rule::Assumption, &[], 0),
        step("3", "Q -> R", Rule::Assumption, &[], 0),
        step("4", "P", Rule::Assumption, &[], 1),
        step("5", "R", Rule::ImpliesElim, &["2", "4"], 1),
        step("6", "Q", Rule::Assumption, &[], 1),
        step("7", "R", Rule::ImpliesElim, &["3", "6"], 1),
        step("8", "R", Rule::OrElim, &["1", "4", "6"], 0),
    ];
    let result = check_and_assert_sound(&steps, &premises, &conclusion);
    assert!(result.valid, "{:?}", result.errors);
    assert!(result.complete);
}

#[test]
fn citing_into_a_closed_subproof_is_inaccessible() {
    let premises = vec![f("P")];
    let steps = vec![
        step("1", "P", Rule::Assumption, &[], 0),
        step("2", "Q", Rule::Assumption, &[], 1),
        step("3", "Q /\\ Q", Rule::AndIntro, &["2", "2"], 1),
        step("4", "Q", Rule::AndElimL, &["3"], 0),
    ];
    let result = check_and_assert_sound(&steps, &premises, &f("Q"));
    assert!(!result.valid);
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].code, ErrorCode::InaccessibleJustification);
    assert_eq!(result.errors[0].step_id.as_deref(), Some("4"));
}

#[test]
fn nested_subproofs_validate() {
    // ⊢ P → (Q → P)
    let steps = vec![
        step("1", "P", Rule::Assumption, &[], 1),
        step("2", "Q", Rule::Assumption, &[], 2),
        step("3", "Q /\\ P", Rule::AndIntro, &["2", "1"], 2),
        step("4", "P", Rule::AndElimR, &["3"], 2),
        step("5", "Q -> P", Rule::ImpliesIntro, &["2"], 1),
        step("6", "P -> (Q -> P)", Rule::ImpliesIntro, &["1"], 0),
    ];
    let result = check_and_assert_sound(&steps, &[], &f("P -> (Q -> P)"));
    assert!(result.valid, "{:?}", result.errors);
    assert!(result.complete);
}

#[test]
fn broken_bottom_citation_is_attributed_to_its_step() {
    let premises = vec![f("~~P")];
    let steps = vec![
        step("1", "~~P", Rule::Assumption, &[], 0),
        step("2", "~P", Rule::Assumption, &[], 1),
        step("3", "~P /\\ ~~P", Rule::AndIntro, &["2", "1"], 1),
        step("4", "~P", Rule::AndElimL, &["3"], 1),
        step("5", "_|_", Rule::BottomElim, &["4"], 1),
    ];
    // Step 5 is wrong on purpose (¬P is not ⊥): the error is attributed to
    // it and nothing else.
    let result = check(&steps, &premises, &f("P"), &TheoremLibrary::new());
    assert!(!result.valid);
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].step_id.as_deref(), Some("5"));
    assert_eq!(result.errors[0].code, ErrorCode::InvalidJustification);
}

#[test]
fn validity_and_completeness_are_independent() {
    let premises = vec![f("P"), f("Q")];

    // Valid but incomplete: the last step is not the goal.
    let steps = vec![
        step("1", "P", Rule::Assumption, &[], 0),
        step("2", "Q", Rule::Assumption, &[], 0),
    ];
    let result = check_and_assert_sound(&steps, &premises, &f("P /\\ Q"));
    assert!(result.valid);
    assert!(!result.complete);

    // Valid derivation ending inside a subproof: also incomplete.
    let steps = vec![
        step("1", "P", Rule::Assumption, &[], 0),
        step("2", "R", Rule::Assumption, &[], 1),
    ];
    let result = check_and_assert_sound(&steps, &premises, &f("R"));
    assert!(result.valid, "{:?}", result.errors);
    assert!(!result.complete);

    // Complete but invalid: goal reached through a broken step.
    let steps = vec![
        step("1", "P", Rule::Assumption, &[], 0),
        step("2", "P /\\ Q", Rule::AndIntro, &["1", "1"], 0),
    ];
    let result = check(&steps, &premises, &f("P /\\ Q"), &TheoremLibrary::new());
    assert!(!result.valid);
    assert!(result.complete);
}

#[test]
fn sibling_subproofs_do_not_leak_into_each_other() {
    let premises = vec![f("P \\/ Q"), f("P -> R"), f("Q -> R")];
    // Second branch tries to reuse the first branch's local step.
    let steps = vec![
        step("1", "P \\/ Q", Rule::Assumption, &[], 0),
        step("2", "P -> R", Rule::Assumption, &[], 0),
        step("3", "Q -> R", Rule::Assumption, &[], 0),
        step("4", "P", Rule::Assumption, &[], 1),
        step("5", "R", Rule::ImpliesElim, &["2", "4"], 1),
        step("6", "Q", Rule::Assumption, &[], 1),
        step("7", "R /\\ R", Rule::AndIntro, &["5", "5"], 1),
    ];
    let result = check(&steps, &premises, &f("R"), &TheoremLibrary::new());
    assert!(!result.valid);
    assert_eq!(result.errors[0].step_id.as_deref(), Some("7"));
    assert_eq!(result.errors[0].code, ErrorCode::InaccessibleJustification);
}

#[test]
fn accessibility_of_earlier_steps_survives_truncation() {
    let premises = vec![f("P"), f("P -> Q")];
    let mut steps = vec![
        step("1", "P", Rule::Assumption, &[], 0),
        step("2", "P -> Q", Rule::Assumption, &[], 0),
        step("3", "Q", Rule::ImpliesElim, &["1", "2"], 0),
        step("4", "Q \\/ P", Rule::OrIntroL, &["3"], 0),
    ];
    let full = check(&steps, &premises, &f("Q \\/ P"), &TheoremLibrary::new());
    assert!(full.valid, "{:?}", full.errors);

    steps.pop();
    let truncated = check(&steps, &premises, &f("Q"), &TheoremLibrary::new());
    assert!(truncated.valid, "{:?}", truncated.errors);
    assert!(truncated.complete);
}
