/*!
Scope analysis of an expression, finding the free and bound symbols.

A single top-down traversal, carrying the symbols bound by enclosing quantifiers:
- An occurrence of a sentence letter whose symbol is not bound by an enclosing quantifier is *free*.
- The symbol of each quantifier is *bound*.

Two conflicts are noted, as [LetterConflict](FlagKind::LetterConflict) flags:
- A quantifier over a symbol already bound by an enclosing quantifier.
  The symbol is not bound a second time.
- A symbol which is both free (somewhere) and bound (somewhere).

The absence of these conflicts is relied on by the quantifier rules, which require some letter to be *not free* in some collection of lines.

```rust
# use deduction_lint::structures::expression::Expression;
# use deduction_lint::procedures::scope::analyze;
let fxa = Expression::predicate('F', vec![Expression::letter('x'), Expression::letter('a')]);
let all_x = Expression::universal('x', fxa);

let scope = analyze(&all_x);
assert!(scope.free.contains(&'a'));
assert!(scope.bound.contains(&'x'));
assert!(scope.flags.is_empty());
```
*/

use std::collections::BTreeSet;

use crate::{
    misc::log::targets::{self},
    structures::{
        expression::{Expr, Expression},
        flag::{Flag, FlagKind},
        symbol::Symbol,
    },
};

/// The free and bound symbols of an expression, with any conflicts.
#[derive(Clone, Debug, Default)]
pub struct ScopeInfo {
    /// Symbols with some free occurrence.
    pub free: BTreeSet<Symbol>,

    /// Symbols bound by some quantifier.
    pub bound: BTreeSet<Symbol>,

    /// [LetterConflict](FlagKind::LetterConflict) flags.
    pub flags: Vec<Flag>,
}

impl ScopeInfo {
    pub fn is_free(&self, symbol: Symbol) -> bool {
        self.free.contains(&symbol)
    }
}

/// Analyses the scope of symbols in `expression`.
pub fn analyze(expression: &Expr) -> ScopeInfo {
    let mut info = ScopeInfo::default();
    let mut scoped = Vec::default();

    visit(expression, &mut scoped, &mut info);

    for symbol in info.free.intersection(&info.bound) {
        log::trace!(target: targets::SCOPE, "{symbol} is both free and bound in {expression}");
        info.flags.push(Flag::new(
            FlagKind::LetterConflict,
            format!("{symbol} is being used as both bound and free."),
        ));
    }

    info
}

fn visit(expression: &Expr, scoped: &mut Vec<Symbol>, info: &mut ScopeInfo) {
    match expression.as_ref() {
        Expression::SentenceLetter(symbol) => {
            if !scoped.contains(symbol) {
                info.free.insert(*symbol);
            }
        }

        Expression::Predicate { args, .. } => {
            for arg in args {
                visit(arg, scoped, info);
            }
        }

        Expression::Junction { juncts, .. } => {
            for junct in juncts {
                visit(junct, scoped, info);
            }
        }

        Expression::Conditional {
            antecedent,
            consequent,
        } => {
            visit(antecedent, scoped, info);
            visit(consequent, scoped, info);
        }

        Expression::Biconditional { lhs, rhs } | Expression::Identity { lhs, rhs, .. } => {
            visit(lhs, scoped, info);
            visit(rhs, scoped, info);
        }

        Expression::Negation(inner) => visit(inner, scoped, info),

        Expression::Quantifier { symbol, body, .. } => {
            match scoped.contains(symbol) {
                true => info.flags.push(Flag::new(
                    FlagKind::LetterConflict,
                    format!("{symbol} is bound more than once."),
                )),
                false => {
                    info.bound.insert(*symbol);
                }
            }

            scoped.push(*symbol);
            visit(body, scoped, info);
            scoped.pop();
        }
    }
}
