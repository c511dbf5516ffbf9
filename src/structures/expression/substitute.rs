use crate::structures::{
    expression::{Expr, Expression},
    symbol::Symbol,
};

/// A fresh expression with each occurrence of `from[i]` replaced by `to[i]`, if `to[i]` is some expression.
///
/// Replacement is textual, and so occurrences of a symbol are replaced regardless of whether the symbol is bound.
/// In particular, the symbol of a quantifier is replaced if the replacement is a sentence letter.
///
/// The expression is rebuilt through the constructors of [Expression], and so a junction substituted into a junction of the same kind is flattened.
///
/// ```rust
/// # use deduction_lint::structures::expression::{substitute, Expression};
/// let fx = Expression::predicate('F', vec![Expression::letter('x')]);
/// let fa = substitute(&fx, &['x'], &[Some(Expression::letter('a'))]);
/// assert_eq!(fa.to_string(), "Fa");
/// ```
pub fn substitute(expression: &Expr, from: &[Symbol], to: &[Option<Expr>]) -> Expr {
    let recur = |e: &Expr| substitute(e, from, to);

    match expression.as_ref() {
        Expression::SentenceLetter(symbol) => match replacement(*symbol, from, to) {
            Some(replacement) => replacement.clone(),
            None => expression.clone(),
        },

        Expression::Predicate { name, args } => {
            Expression::predicate(*name, args.iter().map(recur).collect())
        }

        Expression::Junction {
            conjunction,
            juncts,
        } => Expression::junction(*conjunction, juncts.iter().map(recur).collect()),

        Expression::Conditional {
            antecedent,
            consequent,
        } => Expression::conditional(recur(antecedent), recur(consequent)),

        Expression::Biconditional { lhs, rhs } => {
            Expression::biconditional(recur(lhs), recur(rhs))
        }

        Expression::Negation(inner) => Expression::negation(recur(inner)),

        Expression::Quantifier {
            universal,
            symbol,
            body,
        } => {
            let symbol = match replacement(*symbol, from, to).map(|r| r.as_ref()) {
                Some(Expression::SentenceLetter(fresh)) => *fresh,
                _ => *symbol,
            };
            Expression::quantifier(&[(*universal, symbol)], recur(body))
        }

        Expression::Identity { lhs, rhs, equal } => {
            Expression::identity(recur(lhs), recur(rhs), *equal)
        }
    }
}

fn replacement<'a>(symbol: Symbol, from: &[Symbol], to: &'a [Option<Expr>]) -> Option<&'a Expr> {
    let index = from.iter().position(|f| *f == symbol)?;
    to.get(index)?.as_ref()
}
