/*!
Structural equality of expressions, up to the renaming of bound letters.

Two expressions are equal if they share the same structure and the same free letters.
Bound letters may differ, so long as the letters are renamed consistently within their scope.
So, `(∀x)(Fx)` is equal to `(∀y)(Fy)`, but `(∀x)(Fxy)` is not equal to `(∀y)(Fyy)`.

In addition:
- Junctions are compared as multisets of juncts, so `(A ∧ B)` is equal to `(B ∧ A)`.
- Biconditionals and identities are symmetric, so `(A ≡ B)` is equal to `(B ≡ A)` and `a=b` is equal to `b=a`.

If `double_negation` is set, any outermost run of paired negations is removed from both sides at every comparison, so `¬¬A` is equal to `A`, and `(¬¬A ∧ B)` is equal to `(A ∧ ¬¬¬¬B)`.

# Implementation

A list of pairs of bound letters is threaded through the comparison, with a pair pushed on entering a quantifier on each side (and popped on exit).
The pairs form a bijection: a quantifier over a letter already bound on either side fails the comparison.

Pointer identity of subexpressions is used to skip a comparison, though only when each bound pair relates a letter to itself (or there are no bound pairs), as otherwise the same subexpression may be unequal to itself.
*/

use std::sync::Arc;

use crate::structures::{
    expression::{outer_double_negation_elimination, Expr, Expression},
    symbol::Symbol,
};

/// Whether `lhs` and `rhs` are equal, up to the renaming of bound letters and optionally double negation.
///
/// ```rust
/// # use deduction_lint::structures::expression::Expression;
/// # use deduction_lint::procedures::equality::equal;
/// let fx = Expression::universal('x', Expression::predicate('F', vec![Expression::letter('x')]));
/// let fy = Expression::universal('y', Expression::predicate('F', vec![Expression::letter('y')]));
/// assert!(equal(&fx, &fy, false));
///
/// let a = Expression::letter('A');
/// let not_not_a = Expression::negation(Expression::negation(a.clone()));
/// assert!(!equal(&a, &not_not_a, false));
/// assert!(equal(&a, &not_not_a, true));
/// ```
pub fn equal(lhs: &Expr, rhs: &Expr, double_negation: bool) -> bool {
    let mut bound = Vec::default();
    eq(lhs, rhs, double_negation, &mut bound)
}

fn eq(lhs: &Expr, rhs: &Expr, double_negation: bool, bound: &mut Vec<(Symbol, Symbol)>) -> bool {
    if Arc::ptr_eq(lhs, rhs) && bound.iter().all(|(l, r)| l == r) {
        return true;
    }

    let (lhs, rhs) = match double_negation {
        true => (
            outer_double_negation_elimination(lhs),
            outer_double_negation_elimination(rhs),
        ),
        false => (lhs, rhs),
    };

    match (lhs.as_ref(), rhs.as_ref()) {
        (Expression::SentenceLetter(l), Expression::SentenceLetter(r)) => {
            match bound.iter().find(|(bound_l, _)| bound_l == l) {
                Some((_, partner)) => partner == r,
                None => l == r && !bound.iter().any(|(_, bound_r)| bound_r == r),
            }
        }

        (
            Expression::Predicate { name, args },
            Expression::Predicate {
                name: r_name,
                args: r_args,
            },
        ) => {
            name == r_name
                && args.len() == r_args.len()
                && args
                    .iter()
                    .zip(r_args)
                    .all(|(l, r)| eq(l, r, double_negation, bound))
        }

        (
            Expression::Junction {
                conjunction,
                juncts,
            },
            Expression::Junction {
                conjunction: r_conjunction,
                juncts: r_juncts,
            },
        ) => {
            if conjunction != r_conjunction || juncts.len() != r_juncts.len() {
                return false;
            }

            let count = r_juncts.len();
            let mut claimed = vec![false; count];

            'lhs_loop: for (index, junct) in juncts.iter().enumerate() {
                // Rotation, so aligned juncts are compared first.
                for offset in 0..count {
                    let r_index = (index + offset) % count;
                    if !claimed[r_index] && eq(junct, &r_juncts[r_index], double_negation, bound) {
                        claimed[r_index] = true;
                        continue 'lhs_loop;
                    }
                }
                return false;
            }
            true
        }

        (
            Expression::Conditional {
                antecedent,
                consequent,
            },
            Expression::Conditional {
                antecedent: r_antecedent,
                consequent: r_consequent,
            },
        ) => {
            eq(antecedent, r_antecedent, double_negation, bound)
                && eq(consequent, r_consequent, double_negation, bound)
        }

        (
            Expression::Biconditional { lhs, rhs },
            Expression::Biconditional {
                lhs: r_lhs,
                rhs: r_rhs,
            },
        ) => symmetric_eq((lhs, rhs), (r_lhs, r_rhs), double_negation, bound),

        (
            Expression::Identity { lhs, rhs, equal },
            Expression::Identity {
                lhs: r_lhs,
                rhs: r_rhs,
                equal: r_equal,
            },
        ) => equal == r_equal && symmetric_eq((lhs, rhs), (r_lhs, r_rhs), double_negation, bound),

        (Expression::Negation(inner), Expression::Negation(r_inner)) => {
            eq(inner, r_inner, double_negation, bound)
        }

        (
            Expression::Quantifier {
                universal,
                symbol,
                body,
            },
            Expression::Quantifier {
                universal: r_universal,
                symbol: r_symbol,
                body: r_body,
            },
        ) => {
            if universal != r_universal
                || bound
                    .iter()
                    .any(|(l, r)| l == symbol || r == r_symbol)
            {
                return false;
            }

            bound.push((*symbol, *r_symbol));
            let result = eq(body, r_body, double_negation, bound);
            bound.pop();
            result
        }

        _ => false,
    }
}

/// Straight, or swapped.
fn symmetric_eq(
    (lhs, rhs): (&Expr, &Expr),
    (r_lhs, r_rhs): (&Expr, &Expr),
    double_negation: bool,
    bound: &mut Vec<(Symbol, Symbol)>,
) -> bool {
    (eq(lhs, r_lhs, double_negation, bound) && eq(rhs, r_rhs, double_negation, bound))
        || (eq(lhs, r_rhs, double_negation, bound) && eq(rhs, r_lhs, double_negation, bound))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letters<const N: usize>(symbols: [Symbol; N]) -> [Expr; N] {
        symbols.map(Expression::letter)
    }

    fn pred(name: Symbol, args: &[Symbol]) -> Expr {
        Expression::predicate(name, args.iter().map(|a| Expression::letter(*a)).collect())
    }

    #[test]
    fn reflexive_across_allocations() {
        let build = || {
            Expression::universal(
                'x',
                Expression::conditional(pred('F', &['x']), Expression::negation(pred('G', &['x', 'a']))),
            )
        };
        let (first, second) = (build(), build());

        assert!(!Arc::ptr_eq(&first, &second));
        assert!(equal(&first, &first, false));
        assert!(equal(&first, &second, false));
        assert!(equal(&second, &first, false));
    }

    #[test]
    fn alpha_renaming() {
        let fx = Expression::universal('x', Expression::existential('y', pred('R', &['x', 'y'])));
        let fz = Expression::universal('z', Expression::existential('w', pred('R', &['z', 'w'])));
        assert!(equal(&fx, &fz, false));

        // Swapping the roles of the bound letters changes the expression.
        let swapped = Expression::universal('y', Expression::existential('x', pred('R', &['x', 'y'])));
        assert!(!equal(&fx, &swapped, false));
    }

    #[test]
    fn free_letters_are_not_captured() {
        let lhs = Expression::universal('x', pred('F', &['x', 'y']));
        let rhs = Expression::universal('y', pred('F', &['y', 'y']));
        assert!(!equal(&lhs, &rhs, false));
        assert!(!equal(&rhs, &lhs, false));
    }

    #[test]
    fn free_letters_differ() {
        assert!(!equal(&pred('F', &['a']), &pred('F', &['b']), false));
        assert!(!equal(&pred('F', &['a']), &pred('G', &['a']), false));
        assert!(!equal(&pred('F', &['a']), &pred('F', &['a', 'a']), false));
    }

    #[test]
    fn junctions_as_multisets() {
        let [a, b, c] = letters(['A', 'B', 'C']);
        let abc = Expression::conjunction(vec![a.clone(), b.clone(), c.clone()]);
        let cab = Expression::conjunction(vec![c.clone(), a.clone(), b.clone()]);
        let aab = Expression::conjunction(vec![a.clone(), a.clone(), b.clone()]);
        let abb = Expression::conjunction(vec![a.clone(), b.clone(), b.clone()]);
        let disjunction = Expression::disjunction(vec![a, b, c]);

        assert!(equal(&abc, &cab, false));
        assert!(!equal(&aab, &abb, false));
        assert!(!equal(&abc, &disjunction, false));
    }

    #[test]
    fn symmetric_connectives() {
        let [a, b, x, y] = letters(['A', 'B', 'x', 'y']);

        let ab = Expression::biconditional(a.clone(), b.clone());
        let ba = Expression::biconditional(b.clone(), a.clone());
        assert!(equal(&ab, &ba, false));

        let a_to_b = Expression::conditional(a.clone(), b.clone());
        let b_to_a = Expression::conditional(b, a);
        assert!(!equal(&a_to_b, &b_to_a, false));

        let xy = Expression::identity(x.clone(), y.clone(), true);
        let yx = Expression::identity(y.clone(), x.clone(), true);
        let not_yx = Expression::identity(y, x, false);
        assert!(equal(&xy, &yx, false));
        assert!(!equal(&xy, &not_yx, false));
    }

    #[test]
    fn double_negation_at_every_node() {
        let [a, b] = letters(['A', 'B']);
        let not_not = |e: Expr| Expression::negation(Expression::negation(e));

        let plain = Expression::conjunction(vec![a.clone(), b.clone()]);
        let noisy = not_not(Expression::conjunction(vec![not_not(a.clone()), b.clone()]));

        assert!(!equal(&plain, &noisy, false));
        assert!(equal(&plain, &noisy, true));

        let not_a = Expression::negation(a.clone());
        assert!(!equal(&not_a, &a, true));
    }

    #[test]
    fn rebinding_fails() {
        let inner = Expression::universal('x', pred('F', &['x']));
        let lhs = Expression::universal('x', inner.clone());
        let rhs = Expression::universal('y', inner);
        assert!(!equal(&lhs, &rhs, false));
    }
}
