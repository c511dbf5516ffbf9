/*!
Expressions, the formulas asserted on each line of a proof.

An [Expression] is an immutable tree.
Subtrees are shared through [Expr], an atomically reference counted pointer, and so cloning an expression is cheap.

Expressions should be built through the constructors on [Expression], rather than by direct use of the variants, as the constructors:
- Flatten nested junctions of the same kind, so `(A ∧ B) ∧ C` is the single 3-ary conjunction `(A ∧ B ∧ C)`.
- Expand multi-symbol bindings `(∀x y)` to nested single-symbol quantifiers `(∀x)(∀y)`.

Structural equality of expressions (up to the renaming of bound letters) is found in [equality](crate::procedures::equality).
The derived [PartialEq] is *exact* comparison of trees, and is rarely what is wanted.

# Example

```rust
# use deduction_lint::structures::expression::Expression;
let a = Expression::letter('A');
let b = Expression::letter('B');
let c = Expression::letter('C');

let ab = Expression::conjunction(vec![a.clone(), b.clone()]);
let abc = Expression::conjunction(vec![ab, c.clone()]);

assert_eq!(abc.to_string(), "(A ∧ B ∧ C)");

let all_xy = Expression::quantifier(&[(true, 'x'), (true, 'y')], Expression::predicate('F', vec![Expression::letter('x'), Expression::letter('y')]));
assert_eq!(all_xy.to_string(), "(∀x)(∀y)(Fxy)");
```
*/

mod display;
mod substitute;
pub use substitute::substitute;

use std::sync::Arc;

use crate::structures::symbol::Symbol;

/// A shared pointer to an expression.
///
/// Pointer identity is used as a fast path when comparing expressions, and has no other role.
pub type Expr = Arc<Expression>;

/// A formula of first-order predicate logic with identity.
#[derive(Debug, PartialEq, Eq)]
pub enum Expression {
    /// A sentence letter, or a letter used as the argument of a predicate or identity.
    SentenceLetter(Symbol),

    /// A predicate applied to an ordered list of arguments.
    Predicate {
        /// The name of the predicate.
        name: Symbol,
        /// The arguments, whose length is the arity of the predicate.
        args: Vec<Expr>,
    },

    /// A conjunction or disjunction of at least one junct.
    Junction {
        /// True for a conjunction, false for a disjunction.
        conjunction: bool,
        /// The juncts, none of which is a junction of the same kind.
        juncts: Vec<Expr>,
    },

    /// A conditional.
    Conditional {
        /// The antecedent.
        antecedent: Expr,
        /// The consequent.
        consequent: Expr,
    },

    /// A biconditional.
    Biconditional { lhs: Expr, rhs: Expr },

    /// A negation.
    Negation(Expr),

    /// A quantifier binding a single symbol.
    Quantifier {
        /// True for a universal quantifier, false for an existential quantifier.
        universal: bool,
        /// The symbol bound.
        symbol: Symbol,
        /// The scope of the quantifier.
        body: Expr,
    },

    /// An identity, or non-identity, between two terms.
    Identity {
        lhs: Expr,
        rhs: Expr,
        /// True for `=`, false for `≠`.
        equal: bool,
    },
}

/// The kind of an expression, without any content.
///
/// Kinds are used as indicies, e.g. when looking up truth-functional rules by the outermost structure of an expression.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ExpressionKind {
    SentenceLetter = 0,
    Predicate,
    Junction,
    Conditional,
    Biconditional,
    Negation,
    Quantifier,
    Identity,
}

impl ExpressionKind {
    /// A count of the kinds of expression.
    pub const COUNT: usize = 8;

    /// The kind as an index in [0..COUNT).
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl Expression {
    /// A sentence letter.
    pub fn letter(symbol: Symbol) -> Expr {
        Arc::new(Expression::SentenceLetter(symbol))
    }

    /// A predicate applied to the given arguments.
    pub fn predicate(name: Symbol, args: Vec<Expr>) -> Expr {
        Arc::new(Expression::Predicate { name, args })
    }

    /// A junction of the given expressions.
    ///
    /// Any of the given expressions which is itself a junction of the same kind is replaced by its juncts.
    pub fn junction(conjunction: bool, expressions: Vec<Expr>) -> Expr {
        let mut juncts = Vec::with_capacity(expressions.len());
        for expression in expressions {
            match expression.as_ref() {
                Expression::Junction {
                    conjunction: inner,
                    juncts: inner_juncts,
                } if *inner == conjunction => juncts.extend(inner_juncts.iter().cloned()),

                _ => juncts.push(expression),
            }
        }

        Arc::new(Expression::Junction {
            conjunction,
            juncts,
        })
    }

    /// A conjunction of the given expressions.
    pub fn conjunction(expressions: Vec<Expr>) -> Expr {
        Self::junction(true, expressions)
    }

    /// A disjunction of the given expressions.
    pub fn disjunction(expressions: Vec<Expr>) -> Expr {
        Self::junction(false, expressions)
    }

    /// The conditional `antecedent → consequent`.
    pub fn conditional(antecedent: Expr, consequent: Expr) -> Expr {
        Arc::new(Expression::Conditional {
            antecedent,
            consequent,
        })
    }

    /// The biconditional `lhs ≡ rhs`.
    pub fn biconditional(lhs: Expr, rhs: Expr) -> Expr {
        Arc::new(Expression::Biconditional { lhs, rhs })
    }

    /// The negation of an expression.
    pub fn negation(inner: Expr) -> Expr {
        Arc::new(Expression::Negation(inner))
    }

    /// Quantifiers over the body, one for each (universal, symbol) binding, with the first binding outermost.
    ///
    /// If no bindings are given the body is returned.
    pub fn quantifier(bindings: &[(bool, Symbol)], body: Expr) -> Expr {
        bindings
            .iter()
            .rev()
            .fold(body, |body, &(universal, symbol)| {
                Arc::new(Expression::Quantifier {
                    universal,
                    symbol,
                    body,
                })
            })
    }

    /// A universal quantifier binding `symbol` over `body`.
    pub fn universal(symbol: Symbol, body: Expr) -> Expr {
        Self::quantifier(&[(true, symbol)], body)
    }

    /// An existential quantifier binding `symbol` over `body`.
    pub fn existential(symbol: Symbol, body: Expr) -> Expr {
        Self::quantifier(&[(false, symbol)], body)
    }

    /// An identity (if `equal`) or non-identity between two terms.
    pub fn identity(lhs: Expr, rhs: Expr, equal: bool) -> Expr {
        Arc::new(Expression::Identity { lhs, rhs, equal })
    }

    /// The kind of the expression.
    pub fn kind(&self) -> ExpressionKind {
        match self {
            Self::SentenceLetter(_) => ExpressionKind::SentenceLetter,
            Self::Predicate { .. } => ExpressionKind::Predicate,
            Self::Junction { .. } => ExpressionKind::Junction,
            Self::Conditional { .. } => ExpressionKind::Conditional,
            Self::Biconditional { .. } => ExpressionKind::Biconditional,
            Self::Negation(_) => ExpressionKind::Negation,
            Self::Quantifier { .. } => ExpressionKind::Quantifier,
            Self::Identity { .. } => ExpressionKind::Identity,
        }
    }

    /// If the expression is a quantifier of the given polarity, the bound symbol and the body of the quantifier.
    pub fn as_quantifier(&self, universal: bool) -> Option<(Symbol, &Expr)> {
        match self {
            Self::Quantifier {
                universal: polarity,
                symbol,
                body,
            } if *polarity == universal => Some((*symbol, body)),

            _ => None,
        }
    }

    /// If the expression is a negation, the negated expression.
    pub fn as_negation(&self) -> Option<&Expr> {
        match self {
            Self::Negation(inner) => Some(inner),
            _ => None,
        }
    }
}

/// The expression with any outermost run of paired negations removed.
///
/// Only *pairs* are removed, and so `¬¬¬A` is returned as `¬A`.
pub fn outer_double_negation_elimination(expression: &Expr) -> &Expr {
    let mut expression = expression;
    while let Expression::Negation(once) = expression.as_ref() {
        match once.as_ref() {
            Expression::Negation(twice) => expression = twice,
            _ => break,
        }
    }
    expression
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::procedures::equality::equal;

    #[test]
    fn junction_flattening() {
        let [a, b, c] = ['A', 'B', 'C'].map(Expression::letter);

        let nested = Expression::conjunction(vec![
            Expression::conjunction(vec![a.clone(), b.clone()]),
            c.clone(),
        ]);

        match nested.as_ref() {
            Expression::Junction {
                conjunction: true,
                juncts,
            } => assert_eq!(juncts.len(), 3),
            _ => panic!("Expected a conjunction"),
        }

        let direct = Expression::conjunction(vec![a.clone(), b.clone(), c.clone()]);
        assert!(equal(&nested, &direct, false));

        // Junctions of a different kind are kept.
        let mixed = Expression::conjunction(vec![Expression::disjunction(vec![a, b]), c]);
        match mixed.as_ref() {
            Expression::Junction { juncts, .. } => assert_eq!(juncts.len(), 2),
            _ => panic!("Expected a conjunction"),
        }
    }

    #[test]
    fn quantifier_sugar() {
        let body = Expression::letter('A');
        let q = Expression::quantifier(&[(true, 'x'), (false, 'y')], body);

        let (x, inner) = q.as_quantifier(true).expect("outer universal");
        assert_eq!(x, 'x');
        let (y, _) = inner.as_quantifier(false).expect("inner existential");
        assert_eq!(y, 'y');
    }

    #[test]
    fn double_negation_pairs() {
        let a = Expression::letter('A');
        let three = Expression::negation(Expression::negation(Expression::negation(a.clone())));
        let stripped = outer_double_negation_elimination(&three);
        assert_eq!(stripped.kind(), ExpressionKind::Negation);
        assert_eq!(stripped.as_negation(), Some(&a));

        let four = Expression::negation(three);
        assert_eq!(outer_double_negation_elimination(&four), &a);
    }
}
