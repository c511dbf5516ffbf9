//! D, the discharge of a premise.
//!
//! From a consequent `Y` depending on a premise `X`, the conditional `X → Y` may be asserted, without the dependency on `X`.
//!
//! ```text
//! [1]    (1) A                P
//! [2]    (2) B                P
//! [1][2] (3) (A ∧ B)          1,2 TF
//! [1]    (4) (B → (A ∧ B))    3[2] D
//! ```

use crate::{
    misc::print,
    procedures::equality::equal,
    rules::{premise_flags, CheckResult, Proof},
    structures::{
        expression::Expression,
        flag::Flag,
        line::{Label, LogicLine},
    },
};

/// Checks `line` discharges the premise labelled `discharged` from the consequent labelled `cited`.
pub fn check(line: &LogicLine, cited: Label, discharged: Label, proof: &Proof) -> CheckResult {
    let consequent = proof.cited(cited)?;

    let expected_deps = consequent.deps.iter().copied().filter(|dep| *dep != discharged);
    let mut flags = premise_flags(expected_deps, &line.deps);

    if !consequent.deps.contains(&discharged) {
        flags.push(Flag::incorrect(format!(
            "{} must have premise {} to invoke D.",
            print::linenum(cited),
            print::premise(discharged)
        )));
    }

    if !flags.is_empty() {
        return Err(flags);
    }

    let antecedent = proof.cited(discharged)?;
    let expected = Expression::conditional(
        antecedent.expression.clone(),
        consequent.expression.clone(),
    );

    match equal(&expected, &line.expression, false) {
        true => Ok(Flag::good()),
        false => Err(vec![Flag::incorrect(format!(
            "Incorrect expression, expected: {expected}"
        ))]),
    }
}
