/*!
A solver for truth-functional steps.

The solver decides whether a goal follows from some premises by chaining the [fixed table of rules](table), for a bounded number of rounds.
The solver is incomplete by design, and so failure to confirm a step is a [warning](FlagKind::TFWarning) rather than a mark of an [incorrect](FlagKind::Incorrect) step.

# Search

Two lists of expressions are kept:
- The *frontier*, expressions discovered in the previous round (initially, the premises).
- The *explored*, expressions from earlier rounds.

In each round:
1. Candidate rules are those with some antecedent which is a bare letter or of the same kind as some expression on the frontier.
   On the final round, candidates are further restricted to rules whose consequent is a bare letter or of the same kind as the goal.
2. Each candidate is applied to each expression on the frontier, with the expression taking the place of some antecedent, and any other antecedent taking a distinct expression later in the list of all known expressions.
   Each consistent mapping of the letters of the rule gives a discovered expression, by instantiating the consequent.
3. If the goal was discovered, the step is confirmed.
   If nothing was discovered, the search is exhausted.
   Otherwise, the frontier is explored and the discovered expressions not already known form the next frontier.

All comparisons of expressions are [equality](crate::procedures::equality) with double negation removed.

```rust
# use deduction_lint::structures::{expression::Expression, flag::FlagKind};
# use deduction_lint::truth_functional::solve;
let a = Expression::letter('A');
let b = Expression::letter('B');
let a_to_b = Expression::conditional(a.clone(), b.clone());

let flag = solve(&[a, a_to_b], &b, 2);
assert_eq!(flag.kind, FlagKind::Good);
```
*/

pub mod table;
pub mod template;

use std::collections::BTreeSet;

use crate::{
    misc::log::targets::{self},
    procedures::{equality::equal, mapping::assignments},
    structures::{
        expression::{substitute, Expr, ExpressionKind},
        flag::{Flag, FlagKind},
    },
};

use table::{TruthRule, RULE_TABLE};
use template::template_mapping;

/// The default count of rounds of the search.
pub const MAX_DEPTH: usize = 2;

/// Whether `goal` follows from `premises` within `depth` rounds, as a flag.
pub fn solve(premises: &[Expr], goal: &Expr, depth: usize) -> Flag {
    if premises.is_empty() {
        return Flag::new(FlagKind::TFError, "TF applied without any premises!");
    }

    let confirmed = || Flag::new(FlagKind::Good, "TF solver confirms this is correct.");

    if premises.iter().any(|premise| equal(premise, goal, true)) {
        return confirmed();
    }

    let table = &*RULE_TABLE;

    let mut final_candidates = table.with_consequent(ExpressionKind::SentenceLetter).clone();
    final_candidates.extend(table.with_consequent(goal.kind()));

    let mut explored: Vec<Expr> = Vec::default();
    let mut frontier: Vec<Expr> = premises.to_vec();

    for round in 0..depth {
        let mut candidates: BTreeSet<usize> =
            table.with_antecedent(ExpressionKind::SentenceLetter).clone();
        for expression in &frontier {
            candidates.extend(table.with_antecedent(expression.kind()));
        }
        if round + 1 == depth {
            candidates.retain(|index| final_candidates.contains(index));
        }

        let frontier_length = frontier.len();
        let mut known = frontier.clone();
        known.extend(explored.iter().cloned());

        let mut discovered = Vec::default();
        for index in &candidates {
            discovered.extend(apply(&table.rules[*index], &known, frontier_length));
        }

        log::debug!(target: targets::TRUTH_FUNCTIONAL, "Round {round}: {} candidates, {} discovered", candidates.len(), discovered.len());

        if discovered.is_empty() {
            return Flag::new(
                FlagKind::TFWarning,
                "TF exhausted the search space without confirming this deduction.",
            );
        }

        if discovered.iter().any(|truth| equal(truth, goal, true)) {
            return confirmed();
        }

        explored.append(&mut frontier);
        frontier = deduplicate(&explored, discovered);
    }

    Flag::new(
        FlagKind::TFWarning,
        "TF reached the depth limit without confirming this deduction.",
    )
}

/// Expressions discovered by applying `rule`, where some antecedent is taken by one of the first `frontier` expressions of `known`.
fn apply(rule: &TruthRule, known: &[Expr], frontier: usize) -> Vec<Expr> {
    let mut discovered = Vec::default();

    for (index, expression) in known.iter().take(frontier).enumerate() {
        for (position, antecedent) in rule.antecedents.iter().enumerate() {
            let base = template_mapping(antecedent, expression, &rule.letters);
            if base.is_empty() {
                continue;
            }

            let matrix = rule
                .antecedents
                .iter()
                .enumerate()
                .filter(|(other, _)| *other != position)
                .map(|(_, other)| {
                    known[index + 1..]
                        .iter()
                        .map(|candidate| template_mapping(other, candidate, &rule.letters))
                        .collect::<Vec<_>>()
                })
                .collect::<Vec<_>>();

            for mapping in assignments(base, &matrix) {
                let truth = substitute(&rule.consequent, &rule.letters, &mapping);
                log::trace!(target: targets::TRUTH_FUNCTIONAL, "{} gives {truth}", rule.name);
                discovered.push(truth);
            }
        }
    }

    discovered
}

/// The discovered expressions not equal to any known expression, or any earlier discovered expression.
fn deduplicate(known: &[Expr], discovered: Vec<Expr>) -> Vec<Expr> {
    let mut fresh: Vec<Expr> = Vec::default();
    for (index, truth) in discovered.iter().enumerate() {
        let repeat = known
            .iter()
            .chain(&discovered[..index])
            .any(|other| equal(other, truth, true));
        if !repeat {
            fresh.push(truth.clone());
        }
    }
    fresh
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::expression::Expression;

    fn letters<const N: usize>(symbols: [char; N]) -> [Expr; N] {
        symbols.map(Expression::letter)
    }

    #[test]
    fn modus_ponens() {
        let [a, b] = letters(['A', 'B']);
        let a_to_b = Expression::conditional(a.clone(), b.clone());

        let flag = solve(&[a, a_to_b], &b, MAX_DEPTH);
        assert_eq!(flag.kind, FlagKind::Good);
    }

    #[test]
    fn exhausted() {
        let [a, c] = letters(['A', 'C']);
        let flag = solve(&[a], &c, MAX_DEPTH);
        assert_eq!(flag.kind, FlagKind::TFWarning);
        assert_eq!(
            flag.text.as_deref(),
            Some("TF exhausted the search space without confirming this deduction.")
        );
    }

    #[test]
    fn no_premises() {
        let [a] = letters(['A']);
        assert_eq!(solve(&[], &a, MAX_DEPTH).kind, FlagKind::TFError);
    }

    #[test]
    fn goal_among_premises() {
        let [a, b] = letters(['A', 'B']);
        let not_not_a = Expression::negation(Expression::negation(a.clone()));
        assert_eq!(solve(&[b, not_not_a], &a, MAX_DEPTH).kind, FlagKind::Good);
    }

    #[test]
    fn conjunction_introduction() {
        let [a, b] = letters(['A', 'B']);
        let goal = Expression::conjunction(vec![b.clone(), a.clone()]);
        assert_eq!(solve(&[a, b], &goal, MAX_DEPTH).kind, FlagKind::Good);
    }

    #[test]
    fn modus_tollens() {
        let [a, b] = letters(['A', 'B']);
        let a_to_b = Expression::conditional(a.clone(), b.clone());
        let not_b = Expression::negation(b);
        let not_a = Expression::negation(a);
        assert_eq!(solve(&[a_to_b, not_b], &not_a, MAX_DEPTH).kind, FlagKind::Good);
    }

    #[test]
    fn two_rounds() {
        // (A ∧ B) and (A → C) gives A in the first round and C in the second.
        let [a, b, c] = letters(['A', 'B', 'C']);
        let ab = Expression::conjunction(vec![a.clone(), b]);
        let a_to_c = Expression::conditional(a, c.clone());

        assert_eq!(solve(&[ab.clone(), a_to_c.clone()], &c, MAX_DEPTH).kind, FlagKind::Good);
        assert_eq!(
            solve(&[ab, a_to_c], &c, 1).text.as_deref(),
            Some("TF reached the depth limit without confirming this deduction.")
        );
    }

    #[test]
    fn de_morgan() {
        let [a, b] = letters(['A', 'B']);
        let premise = Expression::negation(Expression::disjunction(vec![a.clone(), b.clone()]));
        let goal = Expression::conjunction(vec![Expression::negation(a), Expression::negation(b)]);
        assert_eq!(solve(&[premise], &goal, MAX_DEPTH).kind, FlagKind::Good);
    }
}
