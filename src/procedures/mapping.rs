/*!
Mappings, substitutions of some designated letters which transform one expression into structural agreement with another.

A [Mapping] is a vector of optional slots, one slot for each designated (target) letter.
A slot is empty if nothing seen so far constrains the target letter.

[find_mapping] returns every mapping of target letters in a template to letters of an instance consistent with some alignment of the two expressions.
The template and instance are assumed to share the same shape outside of positions occupied by target letters.
In particular, occurrences of letters which are not targets do not constrain a mapping.

```rust
# use deduction_lint::structures::expression::Expression;
# use deduction_lint::procedures::mapping::find_mapping;
let template = Expression::predicate('F', vec![Expression::letter('x'), Expression::letter('y')]);
let instance = Expression::predicate('F', vec![Expression::letter('a'), Expression::letter('b')]);

let mappings = find_mapping(&template, &instance, &['x', 'y']);
assert_eq!(mappings, vec![vec![Some('a'), Some('b')]]);
```

# Junctions

As junctions are compared as multisets, a mapping for a junction requires solving a bipartite assignment of template juncts to instance juncts.
All (maximal) consistent assignments are returned, rather than only the first found, as different assignments may lead to mappings which satisfy different constraints, e.g. on the freshness of a letter.

The assignment is found by [assignments], which is generic over the content of a slot through the [Slot] trait.
In particular, the assignment is shared with the [truth-functional solver](crate::truth_functional), whose slots are expressions rather than letters.
*/

use std::sync::Arc;

use crate::{
    misc::log::targets::{self},
    procedures::equality::equal,
    structures::{
        expression::{outer_double_negation_elimination, Expr, Expression},
        symbol::Symbol,
    },
};

/// A mapping, with slot `i` holding the value for the `i`th target.
pub type Mapping<T> = Vec<Option<T>>;

/// The content of a slot in a mapping.
pub trait Slot: Clone {
    /// Whether two (non-empty) slots may be merged.
    fn agrees(&self, other: &Self) -> bool;

    /// The value kept when a slot is merged with an agreeing slot.
    fn settle(&self) -> Self {
        self.clone()
    }
}

impl Slot for Symbol {
    fn agrees(&self, other: &Self) -> bool {
        self == other
    }
}

impl Slot for Expr {
    fn agrees(&self, other: &Self) -> bool {
        Arc::ptr_eq(self, other) || equal(self, other, true)
    }

    fn settle(&self) -> Self {
        outer_double_negation_elimination(self).clone()
    }
}

/// Merges a pair of mappings, if every pair of non-empty slots agree.
fn merge_pair<T: Slot>(a: &Mapping<T>, b: &Mapping<T>) -> Option<Mapping<T>> {
    a.iter()
        .zip(b)
        .map(|slots| match slots {
            (None, None) => Some(None),
            (Some(x), Some(y)) => x.agrees(y).then(|| Some(x.settle())),
            (Some(value), None) | (None, Some(value)) => Some(Some(value.clone())),
        })
        .collect()
}

/// The consistent cross product of two lists of mappings.
///
/// Each mapping in the result extends some mapping from `a` and some mapping from `b`.
/// If either list is empty, the result is empty.
pub fn merge_mappings<T: Slot>(a: &[Mapping<T>], b: &[Mapping<T>]) -> Vec<Mapping<T>> {
    let mut merged = Vec::default();
    for x in a {
        for y in b {
            if let Some(mapping) = merge_pair(x, y) {
                merged.push(mapping);
            }
        }
    }
    merged
}

/// Every consistent extension of the `base` mappings in which each row of the matrix claims a distinct column with a non-empty list of mappings.
///
/// `matrix[row][column]` is the list of mappings which align the `row`th template with the `column`th expression.
/// If there are no rows, the base mappings are returned.
pub fn assignments<T: Slot>(base: Vec<Mapping<T>>, matrix: &[Vec<Vec<Mapping<T>>>]) -> Vec<Mapping<T>> {
    let columns = matrix.first().map_or(0, |row| row.len());
    let mut claimed = vec![false; columns];
    permute(base, matrix, &mut claimed, 0)
}

fn permute<T: Slot>(
    current: Vec<Mapping<T>>,
    matrix: &[Vec<Vec<Mapping<T>>>],
    claimed: &mut [bool],
    row: usize,
) -> Vec<Mapping<T>> {
    if current.is_empty() || row >= matrix.len() {
        return current;
    }

    let mut found = Vec::default();
    for (column, cell) in matrix[row].iter().enumerate() {
        if !claimed[column] && !cell.is_empty() {
            claimed[column] = true;
            found.extend(permute(
                merge_mappings(&current, cell),
                matrix,
                claimed,
                row + 1,
            ));
            claimed[column] = false;
        }
    }
    found
}

/// Every mapping of `targets` in `template` to letters in `instance`, sorted and without duplicates.
///
/// An empty result indicates no alignment is possible.
pub fn find_mapping(template: &Expr, instance: &Expr, targets: &[Symbol]) -> Vec<Mapping<Symbol>> {
    let mut finder = MappingFinder {
        targets,
        bound: Vec::default(),
    };
    let mut mappings = finder.find(template, instance);
    mappings.sort_unstable();
    mappings.dedup();

    log::trace!(target: targets::MAPPING, "{} mappings of {template} to {instance}", mappings.len());
    mappings
}

struct MappingFinder<'t> {
    targets: &'t [Symbol],

    /// Pairs of letters bound on the template and instance side.
    bound: Vec<(Symbol, Symbol)>,
}

impl MappingFinder<'_> {
    fn identity(&self) -> Vec<Mapping<Symbol>> {
        vec![vec![None; self.targets.len()]]
    }

    fn merge(&self, a: &[Mapping<Symbol>], b: &[Mapping<Symbol>]) -> Vec<Mapping<Symbol>> {
        let mut merged = merge_mappings(a, b);
        merged.sort_unstable();
        merged.dedup();
        merged
    }

    fn pairwise(&mut self, (l, r): (&Expr, &Expr), (l_other, r_other): (&Expr, &Expr)) -> Vec<Mapping<Symbol>> {
        let first = self.find(l, r);
        let second = self.find(l_other, r_other);
        self.merge(&first, &second)
    }

    fn find(&mut self, template: &Expr, instance: &Expr) -> Vec<Mapping<Symbol>> {
        match (template.as_ref(), instance.as_ref()) {
            (Expression::SentenceLetter(t), Expression::SentenceLetter(i)) => {
                let mut mapping = vec![None; self.targets.len()];
                if self.bound.iter().any(|(bound_t, _)| bound_t == t) {
                    return vec![mapping];
                }
                if let Some(index) = self.targets.iter().position(|target| target == t) {
                    mapping[index] = Some(*i);
                }
                vec![mapping]
            }

            (
                Expression::Predicate { name, args },
                Expression::Predicate {
                    name: i_name,
                    args: i_args,
                },
            ) => {
                if name != i_name || args.len() != i_args.len() {
                    return Vec::default();
                }

                let mut mappings = self.identity();
                for (arg, i_arg) in args.iter().zip(i_args) {
                    let inner = self.find(arg, i_arg);
                    mappings = self.merge(&inner, &mappings);
                    if mappings.is_empty() {
                        break;
                    }
                }
                mappings
            }

            (
                Expression::Junction {
                    conjunction,
                    juncts,
                },
                Expression::Junction {
                    conjunction: i_conjunction,
                    juncts: i_juncts,
                },
            ) => {
                if conjunction != i_conjunction || juncts.len() != i_juncts.len() {
                    return Vec::default();
                }

                let mut matrix = Vec::with_capacity(juncts.len());
                for junct in juncts {
                    let row = i_juncts
                        .iter()
                        .map(|i_junct| self.find(junct, i_junct))
                        .collect::<Vec<_>>();
                    matrix.push(row);
                }

                let mut mappings = assignments(self.identity(), &matrix);
                mappings.sort_unstable();
                mappings.dedup();
                mappings
            }

            (
                Expression::Conditional {
                    antecedent,
                    consequent,
                },
                Expression::Conditional {
                    antecedent: i_antecedent,
                    consequent: i_consequent,
                },
            ) => self.pairwise((antecedent, i_antecedent), (consequent, i_consequent)),

            (
                Expression::Biconditional { lhs, rhs },
                Expression::Biconditional {
                    lhs: i_lhs,
                    rhs: i_rhs,
                },
            ) => {
                let mut mappings = self.pairwise((lhs, i_lhs), (rhs, i_rhs));
                mappings.extend(self.pairwise((lhs, i_rhs), (rhs, i_lhs)));
                mappings
            }

            (
                Expression::Identity { lhs, rhs, equal },
                Expression::Identity {
                    lhs: i_lhs,
                    rhs: i_rhs,
                    equal: i_equal,
                },
            ) => {
                if equal != i_equal {
                    return Vec::default();
                }
                let mut mappings = self.pairwise((lhs, i_lhs), (rhs, i_rhs));
                mappings.extend(self.pairwise((lhs, i_rhs), (rhs, i_lhs)));
                mappings
            }

            (Expression::Negation(inner), Expression::Negation(i_inner)) => {
                self.find(inner, i_inner)
            }

            (
                Expression::Quantifier {
                    universal,
                    symbol,
                    body,
                },
                Expression::Quantifier {
                    universal: i_universal,
                    symbol: i_symbol,
                    body: i_body,
                },
            ) => {
                if universal != i_universal
                    || self
                        .bound
                        .iter()
                        .any(|(t, i)| t == symbol || i == i_symbol)
                {
                    return Vec::default();
                }

                self.bound.push((*symbol, *i_symbol));
                let mappings = self.find(body, i_body);
                self.bound.pop();
                mappings
            }

            _ => Vec::default(),
        }
    }
}

/// Ways in which a one-one mapping may fail to exist.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OneOneError {
    /// No mapping of any kind.
    NoSource,

    /// Every mapping leaves some target unaccounted for.
    Incomplete,

    /// Every complete mapping maps two targets to the same letter.
    Splitting,
}

impl OneOneError {
    /// An explanation of the error, given the targets.
    pub fn explain(&self, targets: &[Symbol]) -> String {
        let letters = crate::misc::print::letters(targets);
        match self {
            Self::NoSource => {
                format!("There is no possible source for {letters} that leads to this sentence.")
            }
            Self::Incomplete => {
                format!("There are no possible assignments that account for all of {letters}.")
            }
            Self::Splitting => format!(
                "There are no possible assignments that account for all of {letters} without splitting a sentence letter."
            ),
        }
    }
}

/// Every complete and injective mapping of `targets` in `target` to letters in `source`.
///
/// On success, the result is non-empty and each mapping has one letter for each target, with no letter repeated.
pub fn find_mapping_one_one(
    target: &Expr,
    source: &Expr,
    targets: &[Symbol],
) -> Result<Vec<Vec<Symbol>>, OneOneError> {
    let mappings = find_mapping(target, source, targets);
    if mappings.is_empty() {
        return Err(OneOneError::NoSource);
    }

    let complete = mappings
        .into_iter()
        .filter_map(|mapping| mapping.into_iter().collect::<Option<Vec<_>>>())
        .collect::<Vec<_>>();
    if complete.is_empty() {
        return Err(OneOneError::Incomplete);
    }

    let injective = complete
        .into_iter()
        .filter(|mapping| {
            let mut letters = mapping.clone();
            letters.sort_unstable();
            letters.windows(2).all(|pair| pair[0] != pair[1])
        })
        .collect::<Vec<_>>();
    if injective.is_empty() {
        return Err(OneOneError::Splitting);
    }

    Ok(injective)
}
