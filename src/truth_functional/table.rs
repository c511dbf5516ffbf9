/*!
The table of truth-functional rules.

Each rule has one or two antecedent templates and a consequent template, over the letters `a`, `b`, and `c`.
Templates contain only letters, junctions, conditionals, biconditionals, and negations.

| Antecedents | Consequent | Name |
|---|---|---|
| ¬¬a | a | double-negation elimination |
| a ∧ b | a | conjunction elimination |
| a, b | a ∧ b | conjunction introduction |
| a, b | a ∨ b | disjunction introduction |
| a, ¬a → b | a ∨ b | disjunction introduction |
| ¬(a ∧ b) | ¬a ∨ ¬b | De Morgan's law |
| ¬(a ∨ b) | ¬a ∧ ¬b | De Morgan's law |
| a → b, a | b | modus ponens |
| a → b, ¬b | ¬a | modus tollens |
| ¬a ∨ b | a → b | disjunction to conditional |
| ¬c ∨ ¬a ∨ b | c → (a → b) | disjunction to conditional |
| ¬c ∨ ¬a ∨ b | (c ∧ a) → b | disjunction to conditional |
| a → b | ¬a ∨ b | conditional to disjunction |
| a → (c → b) | ¬a ∨ ¬c ∨ b | conditional to disjunction |
| a → b, a → ¬b | ¬a | contradiction |

The table is built once, on first use, and is read-only thereafter.
Rules are indexed by the kind of each antecedent and by the kind of the consequent, so the solver may skip rules which cannot apply.
*/

use std::{collections::BTreeSet, sync::LazyLock};

use crate::{
    misc::log::targets::{self},
    procedures::scope::analyze,
    structures::{
        expression::{Expr, Expression, ExpressionKind},
        symbol::Symbol,
    },
};

/// A truth-functional rule.
pub struct TruthRule {
    /// The antecedent templates, at most two.
    pub antecedents: Vec<Expr>,

    /// The consequent template.
    pub consequent: Expr,

    /// The letters of the antecedents, sorted.
    pub letters: Vec<Symbol>,

    pub name: &'static str,
}

/// The rules, with indicies by kind.
pub struct RuleTable {
    pub rules: Vec<TruthRule>,

    /// Rules with some antecedent of the kind, by kind.
    by_antecedent: [BTreeSet<usize>; ExpressionKind::COUNT],

    /// Rules with a consequent of the kind, by kind.
    by_consequent: [BTreeSet<usize>; ExpressionKind::COUNT],
}

/// The table of rules.
pub static RULE_TABLE: LazyLock<RuleTable> = LazyLock::new(RuleTable::build);

impl RuleTable {
    fn build() -> Self {
        let [a, b, c] = ['a', 'b', 'c'].map(Expression::letter);
        let not = Expression::negation;
        let and = |x: &Expr, y: &Expr| Expression::conjunction(vec![x.clone(), y.clone()]);
        let or = |x: &Expr, y: &Expr| Expression::disjunction(vec![x.clone(), y.clone()]);
        let or3 = |x: &Expr, y: &Expr, z: &Expr| {
            Expression::disjunction(vec![x.clone(), y.clone(), z.clone()])
        };
        let implies = |x: &Expr, y: &Expr| Expression::conditional(x.clone(), y.clone());

        let rules = vec![
            (vec![not(not(a.clone()))], a.clone(), "double-negation elimination"),
            (vec![and(&a, &b)], a.clone(), "conjunction elimination"),
            (vec![a.clone(), b.clone()], and(&a, &b), "conjunction introduction"),
            (vec![a.clone(), b.clone()], or(&a, &b), "disjunction introduction"),
            (
                vec![a.clone(), implies(&not(a.clone()), &b)],
                or(&a, &b),
                "disjunction introduction",
            ),
            (
                vec![not(and(&a, &b))],
                or(&not(a.clone()), &not(b.clone())),
                "De Morgan's law",
            ),
            (
                vec![not(or(&a, &b))],
                and(&not(a.clone()), &not(b.clone())),
                "De Morgan's law",
            ),
            (vec![implies(&a, &b), a.clone()], b.clone(), "modus ponens"),
            (
                vec![implies(&a, &b), not(b.clone())],
                not(a.clone()),
                "modus tollens",
            ),
            (
                vec![or(&not(a.clone()), &b)],
                implies(&a, &b),
                "disjunction to conditional",
            ),
            (
                vec![or3(&not(c.clone()), &not(a.clone()), &b)],
                implies(&c, &implies(&a, &b)),
                "disjunction to conditional",
            ),
            (
                vec![or3(&not(c.clone()), &not(a.clone()), &b)],
                implies(&and(&c, &a), &b),
                "disjunction to conditional",
            ),
            (
                vec![implies(&a, &b)],
                or(&not(a.clone()), &b),
                "conditional to disjunction",
            ),
            (
                vec![implies(&a, &implies(&c, &b))],
                or3(&not(a.clone()), &not(c.clone()), &b),
                "conditional to disjunction",
            ),
            (
                vec![implies(&a, &b), implies(&a, &not(b.clone()))],
                not(a.clone()),
                "contradiction",
            ),
        ];

        let mut table = RuleTable {
            rules: Vec::with_capacity(rules.len()),
            by_antecedent: Default::default(),
            by_consequent: Default::default(),
        };

        for (antecedents, consequent, name) in rules {
            let index = table.rules.len();

            let mut letters = BTreeSet::default();
            for antecedent in &antecedents {
                table.by_antecedent[antecedent.kind().index()].insert(index);
                letters.extend(analyze(antecedent).free);
            }
            table.by_consequent[consequent.kind().index()].insert(index);

            table.rules.push(TruthRule {
                antecedents,
                consequent,
                letters: letters.into_iter().collect(),
                name,
            });
        }

        log::debug!(target: targets::TRUTH_FUNCTIONAL, "Built a table of {} rules", table.rules.len());
        table
    }

    /// Rules with an antecedent of the given kind.
    pub fn with_antecedent(&self, kind: ExpressionKind) -> &BTreeSet<usize> {
        &self.by_antecedent[kind.index()]
    }

    /// Rules with a consequent of the given kind.
    pub fn with_consequent(&self, kind: ExpressionKind) -> &BTreeSet<usize> {
        &self.by_consequent[kind.index()]
    }
}
