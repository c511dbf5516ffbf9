/*!
EG, EII, and EIE, the existential rules.

# Generalization

From `Φa` the generalization `(∃x)Φx` may be asserted, with the same premises.
As with [universal generalization](crate::rules::universal), a bijection of quantified letters is required, though no letter need be fresh.

# Instantiation

Instantiation is split over two lines.

EII introduces an instance `Φa` of `(∃x)Φx`, for some *instantial* letter `a` not free in any line up to and including the existential quantification.
The instance depends on itself, as a premise, together with the premises of the quantification.

EIE discharges the instance from some later line `Ψ` which depends on it, so long as `a` is not free in any premise of the discharging line.

```text
[1]    (1) (∃x)(Fx)         P
[1][2] (2) Fa               1(a) EII
[1][2] (3) (∃y)(Fy)         2 EG
[1]    (4) (∃y)(Fy)         3[2] EIE
```
*/

use crate::{
    misc::print,
    procedures::{
        equality::equal,
        mapping::{find_mapping_one_one, OneOneError},
    },
    rules::{describe_free, premise_check, CheckResult, Proof},
    structures::{
        expression::{substitute, Expression},
        flag::{Flag, FlagKind},
        line::{Label, LogicLine, Rule},
        symbol::Symbol,
    },
};

pub fn generalization(line: &LogicLine, cited: Label, proof: &Proof) -> CheckResult {
    let cited = proof.cited(cited)?;
    premise_check(cited.deps.iter().copied(), &line.deps)?;

    let cited_binder = cited.expression.as_quantifier(false).map(|(symbol, _)| symbol);

    let mut target = &line.expression;
    let mut letters: Vec<Symbol> = Vec::default();
    while let Some((symbol, body)) = target.as_quantifier(false) {
        if cited_binder == Some(symbol) {
            break;
        }
        letters.push(symbol);
        target = body;
    }

    if letters.is_empty() {
        return Err(vec![Flag::incorrect(
            "EG requires adding an existential quantification.",
        )]);
    }

    let candidates = find_mapping_one_one(target, &cited.expression, &letters)
        .map_err(|e| vec![Flag::incorrect(e.explain(&letters))])?;

    match candidates.first() {
        Some(candidate) => Ok(Flag::new(
            FlagKind::Good,
            format!("Possible assignment: {}.", print::mapping(candidate, &letters)),
        )),
        None => Err(vec![Flag::incorrect(OneOneError::NoSource.explain(&letters))]),
    }
}

pub fn introduction(line: &LogicLine, cited: Label, instantial: Symbol, proof: &Proof) -> CheckResult {
    let cited = proof.cited(cited)?;

    let expected_deps = cited.deps.iter().copied().chain([line.label]);
    premise_check(expected_deps, &line.deps)?;

    let Some((bound, body)) = cited.expression.as_quantifier(false) else {
        return Err(vec![Flag::incorrect(
            "EII can only be applied to an existential quantification.",
        )]);
    };

    let earlier = proof
        .lines
        .iter()
        .filter_map(|l| l.as_logic())
        .map(|l| l.label)
        .filter(|label| *label <= cited.label)
        .collect::<Vec<_>>();

    let free = proof.free_in(&earlier, &[instantial]);
    if !free.is_empty() {
        return Err(vec![Flag::incorrect(format!(
            "{instantial} must not be free in any line up to and including {}. {}",
            print::linenum(cited.label),
            describe_free(&free)
        ))]);
    }

    let expected = substitute(body, &[bound], &[Some(Expression::letter(instantial))]);
    match equal(&expected, &line.expression, false) {
        true => Ok(Flag::good()),
        false => Err(vec![Flag::incorrect(format!(
            "The expression within the quantifier is incorrect. Expected: {expected}"
        ))]),
    }
}

pub fn elimination(line: &LogicLine, cited: Label, discharged: Label, proof: &Proof) -> CheckResult {
    let cited = proof.cited(cited)?;

    let expected_deps = cited.deps.iter().copied().filter(|dep| *dep != discharged);
    premise_check(expected_deps, &line.deps)?;

    let introduction = proof.cited(discharged)?;
    let Rule::ExistentialInstantiationIntro { instantial, .. } = introduction.rule else {
        return Err(vec![Flag::incorrect(format!(
            "The discharged premise {}, is not an EII line.",
            print::premise(discharged)
        ))]);
    };

    if !cited.deps.contains(&discharged) {
        return Err(vec![Flag::incorrect(format!(
            "The cited line {} does not have required premise {}.",
            print::linenum(cited.label),
            print::premise(discharged)
        ))]);
    }

    let free = proof.free_in(&line.deps, &[instantial]);
    if !free.is_empty() {
        return Err(vec![Flag::incorrect(format!(
            "{instantial} must not be free in any premise of this line. {}",
            describe_free(&free)
        ))]);
    }

    match equal(&cited.expression, &line.expression, false) {
        true => Ok(Flag::good()),
        false => Err(vec![Flag::incorrect(format!(
            "The expression must be the same as in {}. Expected: {}",
            print::linenum(cited.label),
            cited.expression
        ))]),
    }
}
