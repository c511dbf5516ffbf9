/*!
UI and UG, universal instantiation and generalization.

# Instantiation

From `(∀x)Φx` any instance `Φa` may be asserted, with the same premises.
A run of universal quantifiers may be instantiated in a single step.

The run stops early if the line is itself a universal quantification over the same letter, so `(∀x)(∀y)Fxy` to `(∀y)Fay` instantiates only `x`.

# Generalization

From `Φa` the generalization `(∀x)Φx` may be asserted, with the same premises, if `a` is not free in any premise.
A run of universal quantifiers may be introduced in a single step.

The letters generalized must be a genuine bijection of the quantified letters, found by [find_mapping_one_one].
As different bijections may be possible, the line is good if *some* bijection maps to letters free in no premise.
*/

use crate::{
    misc::print,
    procedures::mapping::{find_mapping, find_mapping_one_one, OneOneError},
    rules::{describe_free, premise_check, CheckResult, Proof},
    structures::{
        flag::{Flag, FlagKind},
        line::{Label, LogicLine},
        symbol::Symbol,
    },
};

pub fn instantiation(line: &LogicLine, cited: Label, proof: &Proof) -> CheckResult {
    let cited = proof.cited(cited)?;
    premise_check(cited.deps.iter().copied(), &line.deps)?;

    let line_binder = line.expression.as_quantifier(true).map(|(symbol, _)| symbol);

    let mut inner = &cited.expression;
    let mut letters: Vec<Symbol> = Vec::default();
    while let Some((symbol, body)) = inner.as_quantifier(true) {
        if line_binder == Some(symbol) {
            break;
        }
        letters.push(symbol);
        inner = body;
    }

    if letters.is_empty() {
        return Err(vec![Flag::incorrect(
            "UI can only be applied to a universal quantification.",
        )]);
    }

    let mappings = find_mapping(inner, &line.expression, &letters);
    match mappings.first() {
        None => Err(vec![Flag::incorrect(format!(
            "There is no possible assignment for {} that leads to this sentence.",
            print::letters(&letters)
        ))]),

        Some(mapping) => {
            let (from, to): (Vec<Symbol>, Vec<Symbol>) = letters
                .iter()
                .zip(mapping)
                .filter_map(|(letter, slot)| slot.map(|s| (*letter, s)))
                .unzip();

            let text = match from.is_empty() {
                true => "Any assignment leads to this sentence.".to_string(),
                false => format!("Possible assignment: {}.", print::mapping(&from, &to)),
            };
            Ok(Flag::new(FlagKind::Good, text))
        }
    }
}

pub fn generalization(line: &LogicLine, cited: Label, proof: &Proof) -> CheckResult {
    let cited = proof.cited(cited)?;
    premise_check(cited.deps.iter().copied(), &line.deps)?;

    let cited_binder = cited.expression.as_quantifier(true).map(|(symbol, _)| symbol);

    let mut target = &line.expression;
    let mut letters: Vec<Symbol> = Vec::default();
    while let Some((symbol, body)) = target.as_quantifier(true) {
        if cited_binder == Some(symbol) {
            break;
        }
        letters.push(symbol);
        target = body;
    }

    if letters.is_empty() {
        return Err(vec![Flag::incorrect(
            "UG requires adding a universal quantification.",
        )]);
    }

    let candidates = find_mapping_one_one(target, &cited.expression, &letters)
        .map_err(|e| vec![Flag::incorrect(e.explain(&letters))])?;

    let fresh = candidates
        .iter()
        .find(|candidate| proof.free_in(&line.deps, candidate).is_empty());

    match fresh {
        Some(candidate) => Ok(Flag::new(
            FlagKind::Good,
            format!("Possible assignment: {}.", print::mapping(candidate, &letters)),
        )),

        None => {
            let Some(first) = candidates.first() else {
                return Err(vec![Flag::incorrect(OneOneError::NoSource.explain(&letters))]);
            };
            let free = proof.free_in(&line.deps, first);
            Err(vec![Flag::incorrect(format!(
                "{} must not be free in any premise. {}",
                print::letters(first),
                describe_free(&free)
            ))])
        }
    }
}
