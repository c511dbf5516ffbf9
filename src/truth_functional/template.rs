//! Matching of rule templates against expressions.
//!
//! A template letter may stand for any expression, and binds the expression with any outer double negation removed.
//!
//! Double negations are introduced implicitly: a template negation `¬a` matched against an expression `X` which is not a negation matches `a` against `¬X`.

use crate::{
    misc::log::targets::{self},
    procedures::mapping::{assignments, merge_mappings, Mapping},
    structures::{
        expression::{outer_double_negation_elimination, Expr, Expression},
        symbol::Symbol,
    },
};

/// Every mapping of the `letters` of `template` to subexpressions of `actual`.
pub fn template_mapping(template: &Expr, actual: &Expr, letters: &[Symbol]) -> Vec<Mapping<Expr>> {
    match (template.as_ref(), actual.as_ref()) {
        (Expression::SentenceLetter(letter), _) => match letters.iter().position(|l| l == letter) {
            Some(index) => {
                let mut mapping = vec![None; letters.len()];
                mapping[index] = Some(outer_double_negation_elimination(actual).clone());
                vec![mapping]
            }
            None => {
                log::warn!(target: targets::TRUTH_FUNCTIONAL, "Unexpected letter {letter} in template {template}");
                Vec::default()
            }
        },

        (Expression::Negation(t_inner), Expression::Negation(a_inner)) => {
            template_mapping(t_inner, a_inner, letters)
        }

        (Expression::Negation(t_inner), _) => {
            template_mapping(t_inner, &Expression::negation(actual.clone()), letters)
        }

        (
            Expression::Junction {
                conjunction,
                juncts,
            },
            Expression::Junction {
                conjunction: a_conjunction,
                juncts: a_juncts,
            },
        ) => {
            if conjunction != a_conjunction || juncts.len() != a_juncts.len() {
                return Vec::default();
            }

            let matrix = juncts
                .iter()
                .map(|junct| {
                    a_juncts
                        .iter()
                        .map(|a_junct| template_mapping(junct, a_junct, letters))
                        .collect::<Vec<_>>()
                })
                .collect::<Vec<_>>();

            assignments(vec![vec![None; letters.len()]], &matrix)
        }

        (
            Expression::Conditional {
                antecedent,
                consequent,
            },
            Expression::Conditional {
                antecedent: a_antecedent,
                consequent: a_consequent,
            },
        ) => merge_mappings(
            &template_mapping(antecedent, a_antecedent, letters),
            &template_mapping(consequent, a_consequent, letters),
        ),

        (
            Expression::Biconditional { lhs, rhs },
            Expression::Biconditional {
                lhs: a_lhs,
                rhs: a_rhs,
            },
        ) => {
            let mut mappings = merge_mappings(
                &template_mapping(lhs, a_lhs, letters),
                &template_mapping(rhs, a_rhs, letters),
            );
            mappings.extend(merge_mappings(
                &template_mapping(lhs, a_rhs, letters),
                &template_mapping(rhs, a_lhs, letters),
            ));
            mappings
        }

        (Expression::Predicate { .. } | Expression::Quantifier { .. } | Expression::Identity { .. }, _) => {
            log::warn!(target: targets::TRUTH_FUNCTIONAL, "Template {template} contains a structure not permitted");
            Vec::default()
        }

        _ => Vec::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(mappings: &[Mapping<Expr>]) -> Vec<Vec<String>> {
        mappings
            .iter()
            .map(|m| {
                m.iter()
                    .map(|slot| slot.as_ref().map_or("-".to_string(), |e| e.to_string()))
                    .collect()
            })
            .collect()
    }

    #[test]
    fn letters_bind_without_double_negation() {
        let a = Expression::letter('a');
        let actual = Expression::negation(Expression::negation(Expression::letter('P')));

        let mappings = template_mapping(&a, &actual, &['a']);
        assert_eq!(rendered(&mappings), vec![vec!["P".to_string()]]);
    }

    #[test]
    fn implicit_double_negation() {
        let not_a = Expression::negation(Expression::letter('a'));
        let actual = Expression::letter('P');

        let mappings = template_mapping(&not_a, &actual, &['a']);
        assert_eq!(rendered(&mappings), vec![vec!["¬P".to_string()]]);
    }

    #[test]
    fn conditionals_must_agree() {
        let template = Expression::conditional(Expression::letter('a'), Expression::letter('a'));
        let p = Expression::letter('P');
        let q = Expression::letter('Q');

        let agree = Expression::conditional(p.clone(), p.clone());
        let disagree = Expression::conditional(p, q);

        assert_eq!(template_mapping(&template, &agree, &['a']).len(), 1);
        assert!(template_mapping(&template, &disagree, &['a']).is_empty());
    }

    #[test]
    fn junction_assignments() {
        let template = Expression::disjunction(vec![
            Expression::negation(Expression::letter('a')),
            Expression::letter('b'),
        ]);
        let actual = Expression::disjunction(vec![
            Expression::negation(Expression::letter('P')),
            Expression::letter('Q'),
        ]);

        let mappings = template_mapping(&template, &actual, &['a', 'b']);
        let rendered = rendered(&mappings);
        assert!(rendered.contains(&vec!["P".to_string(), "Q".to_string()]));
        assert!(rendered.contains(&vec!["¬Q".to_string(), "¬P".to_string()]));
    }
}
