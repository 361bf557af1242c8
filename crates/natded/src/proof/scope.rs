//! Subproof scopes inferred from the depth column
//!
//! Proofs are stored flat, the way Fitch-style proofs are written line by
//! line; subproof extents are reconstructed from depth transitions.

use super::step::ProofStep;

/// A subproof: the inclusive step range it covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subproof {
    /// Index of the opening assumption.
    pub start: usize,
    /// Index of the last step inside the subproof.
    pub end: usize,
    /// Nesting depth of the subproof's own steps.
    pub depth: usize,
}

impl Subproof {
    pub fn contains(&self, index: usize) -> bool {
        self.start <= index && index <= self.end
    }
}

/// Infer subproof extents from the depth column.
///
/// An `assumption` opens a scope when it steps deeper than its predecessor,
/// or when it starts a sibling at the same positive depth. A scope closes
/// when the walk returns to its depth or shallower (at a sibling assumption,
/// the previous sibling closes); scopes still open after the last step close
/// there.
pub fn compute_subproofs(steps: &[ProofStep]) -> Vec<Subproof> {
    let mut open: Vec<(usize, usize)> = Vec::new(); // (start, depth)
    let mut closed = Vec::new();
    let mut prev_depth = 0usize;

    for (i, step) in steps.iter().enumerate() {
        let d = step.depth;
        let sibling = step.is_assumption() && d > 0 && d == prev_depth;

        while let Some(&(start, depth)) = open.last() {
            if depth > d || (sibling && depth == d) {
                open.pop();
                closed.push(Subproof {
                    start,
                    end: i - 1,
                    depth,
                });
            } else {
                break;
            }
        }

        if sibling || (step.is_assumption() && d > prev_depth) {
            open.push((i, d));
        }
        prev_depth = d;
    }

    let last = steps.len().saturating_sub(1);
    while let Some((start, depth)) = open.pop() {
        closed.push(Subproof {
            start,
            end: last,
            depth,
        });
    }
    closed
}

/// A step `target` is citable from `from` iff every subproof containing
/// `target` also contains `from`.
pub fn is_accessible(subproofs: &[Subproof], target: usize, from: usize) -> bool {
    subproofs
        .iter()
        .all(|scope| !scope.contains(target) || scope.contains(from))
}

/// Accessibility for subproof-handle citations. The scope opened at `target`
/// itself is exempt: citing a just-closed subproof from outside it is the
/// whole point of `implies_intro` and friends.
pub fn is_subproof_accessible(subproofs: &[Subproof], target: usize, from: usize) -> bool {
    subproofs
        .iter()
        .all(|scope| scope.start == target || !scope.contains(target) || scope.contains(from))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::Formula;
    use crate::proof::step::Rule;

    fn assumption(id: &str, depth: usize) -> ProofStep {
        ProofStep::new(id, Formula::var("P"), Rule::Assumption, &[], depth)
    }

    fn derived(id: &str, depth: usize) -> ProofStep {
        ProofStep::new(id, Formula::var("P"), Rule::AndElimL, &["x"], depth)
    }

    #[test]
    fn no_subproofs_at_depth_zero() {
        let steps = vec![assumption("1", 0), derived("2", 0)];
        assert!(compute_subproofs(&steps).is_empty());
    }

    #[test]
    fn simple_subproof_closes_on_dedent() {
        let steps = vec![
            assumption("1", 0),
            assumption("2", 1),
            derived("3", 1),
            derived("4", 0),
        ];
        let scopes = compute_subproofs(&steps);
        assert_eq!(scopes, vec![Subproof { start: 1, end: 2, depth: 1 }]);
    }

    #[test]
    fn sibling_assumption_closes_previous_scope() {
        let steps = vec![
            assumption("1", 1),
            derived("2", 1),
            assumption("3", 1),
            derived("4", 1),
            derived("5", 0),
        ];
        let scopes = compute_subproofs(&steps);
        assert_eq!(
            scopes,
            vec![
                Subproof { start: 0, end: 1, depth: 1 },
                Subproof { start: 2, end: 3, depth: 1 },
            ],
        );
    }

    #[test]
    fn nested_subproofs_close_inner_first() {
        let steps = vec![
            assumption("1", 1),
            assumption("2", 2),
            derived("3", 2),
            derived("4", 1),
            derived("5", 0),
        ];
        let scopes = compute_subproofs(&steps);
        assert_eq!(
            scopes,
            vec![
                Subproof { start: 1, end: 2, depth: 2 },
                Subproof { start: 0, end: 3, depth: 1 },
            ],
        );
    }

    #[test]
    fn dangling_scope_closes_at_last_step() {
        let steps = vec![assumption("1", 0), assumption("2", 1), derived("3", 1)];
        let scopes = compute_subproofs(&steps);
        assert_eq!(scopes, vec![Subproof { start: 1, end: 2, depth: 1 }]);
    }

    #[test]
    fn deeper_non_assumption_opens_nothing() {
        // Ill-formed input: depth jumps without an assumption. No scope is
        // invented; the walk stays total.
        let steps = vec![derived("1", 0), derived("2", 2), derived("3", 0)];
        assert!(compute_subproofs(&steps).is_empty());
    }

    #[test]
    fn accessibility_respects_closed_scopes() {
        let steps = vec![
            assumption("1", 0),
            assumption("2", 1),
            derived("3", 1),
            derived("4", 0),
        ];
        let scopes = compute_subproofs(&steps);
        // Step 4 (index 3) cannot see inside the closed subproof.
        assert!(!is_accessible(&scopes, 1, 3));
        assert!(!is_accessible(&scopes, 2, 3));
        // Depth-0 steps are always visible.
        assert!(is_accessible(&scopes, 0, 3));
        // Inside the subproof, its own steps are visible.
        assert!(is_accessible(&scopes, 1, 2));
        // As a subproof handle, the closed scope is citable from outside.
        assert!(is_subproof_accessible(&scopes, 1, 3));
    }

    #[test]
    fn handle_citation_still_respects_enclosing_scopes() {
        let steps = vec![
            assumption("1", 1),
            assumption("2", 2),
            derived("3", 2),
            derived("4", 1),
            derived("5", 0),
        ];
        let scopes = compute_subproofs(&steps);
        // The inner subproof (start 1) is citable as a handle from index 3
        // (same outer scope) but not from index 4 (outside the outer scope).
        assert!(is_subproof_accessible(&scopes, 1, 3));
        assert!(!is_subproof_accessible(&scopes, 1, 4));
    }

    #[test]
    fn removing_a_trailing_step_preserves_earlier_accessibility() {
        let steps = vec![
            assumption("1", 0),
            assumption("2", 1),
            derived("3", 1),
            derived("4", 0),
            derived("5", 0),
        ];
        let full = compute_subproofs(&steps);
        let truncated = compute_subproofs(&steps[..4]);
        for target in 0..3 {
            for from in target..3 {
                assert_eq!(
                    is_accessible(&full, target, from),
                    is_accessible(&truncated, target, from),
                );
            }
        }
    }
}
