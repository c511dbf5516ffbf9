//! TF, a truth-functional step.
//!
//! Any expression which follows truth-functionally from the cited lines may be asserted, depending on every premise of the cited lines.
//! Whether the expression follows is decided by the [solver](crate::truth_functional), which may fail to confirm a correct step.

use crate::{
    rules::{premise_check, CheckResult, Proof},
    structures::{
        flag::FlagKind,
        line::{Label, LogicLine},
    },
    truth_functional::solve,
};

/// Checks `line` follows truth-functionally from the lines labelled in `cited`.
pub fn check(line: &LogicLine, cited: &[Label], proof: &Proof) -> CheckResult {
    let mut premises = Vec::with_capacity(cited.len());
    let mut expected_deps = Vec::default();

    for label in cited {
        let cited_line = proof.cited(*label)?;
        expected_deps.extend_from_slice(&cited_line.deps);
        premises.push(cited_line.expression.clone());
    }

    premise_check(expected_deps, &line.deps)?;

    let flag = solve(
        &premises,
        &line.expression,
        proof.config.truth_functional_depth.value,
    );

    match flag.kind {
        FlagKind::Good => Ok(flag),
        _ => Err(vec![flag]),
    }
}
