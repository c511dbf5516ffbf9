/*!
CQ, change of quantifier.

Rewrites `¬(∀x)Φ` as `(∃x)¬Φ`, and `¬(∃x)Φ` as `(∀x)¬Φ`, in either direction and over a run of quantifiers.

Of the line and the cited line, one has an outer negation (the *outer* side) and the other does not (the *inner* side).
If the line itself has an outer negation the line is taken as the outer side.
After the outer negation:
- Both sides must begin with a run of quantifiers, of opposite kinds and over the same letters, in the same order.
- After the runs, the inner side must have a negation, or else the outer side must have a second negation.
  The second negation permits, e.g., `¬(∃x)¬Gx` to `(∀x)Gx`.
- What remains must be equal.
*/

use crate::{
    procedures::equality::equal,
    rules::{premise_check, CheckResult, Proof},
    structures::{
        expression::Expression,
        flag::Flag,
        line::{Label, LogicLine},
    },
};

pub fn check(line: &LogicLine, cited: Label, proof: &Proof) -> CheckResult {
    let cited = proof.cited(cited)?;
    premise_check(cited.deps.iter().copied(), &line.deps)?;

    let incorrect = |text: &str| -> CheckResult { Err(vec![Flag::incorrect(text)]) };

    let (outer, mut inner) = match line.expression.as_ref() {
        Expression::Negation(_) => (&line.expression, &cited.expression),
        _ => (&cited.expression, &line.expression),
    };

    let Some(mut outer) = outer.as_negation() else {
        return incorrect("Missing outer negation symbol.");
    };

    let mut run = 0;
    while let (
        Expression::Quantifier {
            universal: o_universal,
            symbol: o_symbol,
            body: o_body,
        },
        Expression::Quantifier {
            universal: i_universal,
            symbol: i_symbol,
            body: i_body,
        },
    ) = (outer.as_ref(), inner.as_ref())
    {
        if o_universal == i_universal {
            return incorrect("CQ must change the type of quantifier.");
        }
        if o_symbol != i_symbol {
            return incorrect("CQ must preserve the letters and their order.");
        }

        run += 1;
        outer = o_body;
        inner = i_body;
    }

    if run == 0 {
        return incorrect("CQ needs at least one quantifier on both sides.");
    }

    if let Some(negated) = inner.as_negation() {
        inner = negated;
    } else if let Some(negated) = outer.as_negation() {
        outer = negated;
    } else {
        return incorrect("Missing inner negation symbol.");
    }

    match equal(inner, outer, false) {
        true => Ok(Flag::good()),
        false => incorrect("The expressions within quantifiers do not match."),
    }
}
