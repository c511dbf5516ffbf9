/*!
Checkers for the rules of the calculus, one checker for each rule.

Each checker is given a logic line and a [Proof], a view of the (renumbered) document the line belongs to, and returns either:
- `Ok` with a [Good](FlagKind::Good) flag, perhaps with some explanation (e.g. the assignment of letters found for an instantiation), or
- `Err` with flags explaining why the rule does not justify the line.

Every checker first compares the premises the line lists against the premises the rule expects.
Any difference is noted by [MissingDependency](FlagKind::MissingDependency) and [ExtraDependency](FlagKind::ExtraDependency) flags, and ends the check of the line.

| Rule | Expected premises |
|------|-------------------|
| [P](premise) | The line itself |
| [D](discharge) | Those of the consequent, without the discharged premise |
| [CQ](quantifier_change) | Those of the cited line |
| [UI, UG](universal) | Those of the cited line |
| [EG](existential) | Those of the cited line |
| [EII](existential) | Those of the cited line, and the line itself |
| [EIE](existential) | Those of the cited line, without the discharged premise |
| [TF](truth_functional) | The union of those of the cited lines |

Checkers are pure, and a failed check is reported rather than repaired.
In particular, a line citing a line with problems is checked against the cited line as written.
*/

pub mod discharge;
pub mod existential;
pub mod premise;
pub mod quantifier_change;
pub mod truth_functional;
pub mod universal;

use crate::{
    config::Config,
    misc::{
        log::targets::{self},
        print,
    },
    procedures::{renumber::LabelIndex, scope::ScopeInfo},
    structures::{
        flag::{Flag, FlagKind},
        line::{Label, Line, LogicLine, Rule},
        symbol::Symbol,
    },
};

/// The result of a check, a good flag or some flags noting problems.
pub type CheckResult = Result<Flag, Vec<Flag>>;

/// A view of a renumbered document, for use by checkers.
pub struct Proof<'p> {
    /// The lines of the document.
    pub lines: &'p [Line],

    /// The index from canonical labels to positions in `lines`.
    pub index: &'p LabelIndex,

    /// The scope of each logic line, by position.
    pub scopes: &'p [Option<ScopeInfo>],

    pub config: &'p Config,
}

impl Proof<'_> {
    /// The logic line with the given label, if any.
    pub fn logic(&self, label: Label) -> Option<&LogicLine> {
        let position = self.index.position(label)?;
        self.lines.get(position)?.as_logic()
    }

    /// The logic line with the given label, or a flag noting the label is not that of a logic line.
    pub fn cited(&self, label: Label) -> Result<&LogicLine, Vec<Flag>> {
        match self.logic(label) {
            Some(line) => Ok(line),
            None => Err(vec![Flag::incorrect(format!(
                "{} is not a logic line.",
                print::linenum(label)
            ))]),
        }
    }

    /// The scope of the logic line with the given label, if any.
    pub fn scope(&self, label: Label) -> Option<&ScopeInfo> {
        let position = self.index.position(label)?;
        self.scopes.get(position)?.as_ref()
    }

    /// For each symbol, the labels of the lines (among those given) in which the symbol is free.
    pub fn free_in(&self, labels: &[Label], symbols: &[Symbol]) -> Vec<(Symbol, Vec<Label>)> {
        symbols
            .iter()
            .map(|symbol| {
                let lines = labels
                    .iter()
                    .copied()
                    .filter(|label| self.scope(*label).is_some_and(|s| s.is_free(*symbol)))
                    .collect::<Vec<_>>();
                (*symbol, lines)
            })
            .filter(|(_, lines)| !lines.is_empty())
            .collect()
    }
}

/// A description of where symbols are free, e.g. `a is free in (1), (3).`
///
/// Empty, if no symbol is free anywhere.
pub fn describe_free(free: &[(Symbol, Vec<Label>)]) -> String {
    let descriptions = free
        .iter()
        .map(|(symbol, lines)| format!("{symbol} is free in {}", print::linenums(lines)))
        .collect::<Vec<_>>();

    match descriptions.is_empty() {
        true => String::default(),
        false => format!("{}.", descriptions.join(", ")),
    }
}

/// The labels expected but absent from `actual`, and those in `actual` but not expected.
///
/// Both lists are sorted and without duplicates.
pub fn premise_difference(
    expected: impl IntoIterator<Item = Label>,
    actual: &[Label],
) -> (Vec<Label>, Vec<Label>) {
    let mut expected = expected.into_iter().collect::<Vec<_>>();
    expected.sort_unstable();
    expected.dedup();

    let mut actual = actual.to_vec();
    actual.sort_unstable();
    actual.dedup();

    let mut missing = Vec::default();
    let mut extra = Vec::default();

    let (mut i, mut j) = (0, 0);
    while i < expected.len() && j < actual.len() {
        match expected[i].cmp(&actual[j]) {
            std::cmp::Ordering::Less => {
                missing.push(expected[i]);
                i += 1;
            }
            std::cmp::Ordering::Greater => {
                extra.push(actual[j]);
                j += 1;
            }
            std::cmp::Ordering::Equal => {
                i += 1;
                j += 1;
            }
        }
    }
    missing.extend_from_slice(&expected[i..]);
    extra.extend_from_slice(&actual[j..]);

    (missing, extra)
}

/// Flags for any difference between the expected and actual premises.
pub fn premise_flags(expected: impl IntoIterator<Item = Label>, actual: &[Label]) -> Vec<Flag> {
    let (missing, extra) = premise_difference(expected, actual);

    let mut flags = Vec::default();
    if !missing.is_empty() {
        flags.push(Flag::new(
            FlagKind::MissingDependency,
            format!("Missing {}", print::premises(&missing)),
        ));
    }
    if !extra.is_empty() {
        flags.push(Flag::new(
            FlagKind::ExtraDependency,
            format!("Extra {}", print::premises(&extra)),
        ));
    }
    flags
}

/// As [premise_flags], though as an error if there are any flags.
pub fn premise_check(expected: impl IntoIterator<Item = Label>, actual: &[Label]) -> Result<(), Vec<Flag>> {
    let flags = premise_flags(expected, actual);
    match flags.is_empty() {
        true => Ok(()),
        false => Err(flags),
    }
}

/// Checks the application of the rule of `line`, returning the flags of the check.
pub fn check_line(line: &LogicLine, proof: &Proof) -> Vec<Flag> {
    let result = match &line.rule {
        Rule::Premise => premise::check(line),

        Rule::Discharge { cited, discharged } => discharge::check(line, *cited, *discharged, proof),

        Rule::TruthFunctional { cited } => truth_functional::check(line, cited, proof),

        Rule::ChangeOfQuantifier { cited } => quantifier_change::check(line, *cited, proof),

        Rule::UniversalInstantiation { cited } => universal::instantiation(line, *cited, proof),

        Rule::UniversalGeneralization { cited } => universal::generalization(line, *cited, proof),

        Rule::ExistentialGeneralization { cited } => {
            existential::generalization(line, *cited, proof)
        }

        Rule::ExistentialInstantiationIntro { cited, instantial } => {
            existential::introduction(line, *cited, *instantial, proof)
        }

        Rule::ExistentialInstantiationElim { cited, discharged } => {
            existential::elimination(line, *cited, *discharged, proof)
        }

        Rule::Unrecognized(name) => Err(vec![Flag::new(
            FlagKind::Unrecognized,
            format!("The rule {name} is not recognized."),
        )]),
    };

    match result {
        Ok(flag) => {
            log::trace!(target: targets::RULES, "({}) {} is good", line.label, line.rule.name());
            vec![flag]
        }
        Err(flags) => {
            log::debug!(target: targets::RULES, "({}) {} has {} flags", line.label, line.rule.name(), flags.len());
            flags
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difference() {
        let (missing, extra) = premise_difference([1, 2, 4], &[1, 3, 4]);
        assert_eq!(missing, vec![2]);
        assert_eq!(extra, vec![3]);

        let (missing, extra) = premise_difference([4, 1, 1], &[1, 4]);
        assert!(missing.is_empty() && extra.is_empty());
    }

    #[test]
    fn flag_text() {
        let flags = premise_flags([1, 2], &[1, 3, 5]);
        assert_eq!(flags.len(), 2);
        assert_eq!(flags[0].kind, FlagKind::MissingDependency);
        assert_eq!(flags[0].text.as_deref(), Some("Missing premise [2]"));
        assert_eq!(flags[1].kind, FlagKind::ExtraDependency);
        assert_eq!(flags[1].text.as_deref(), Some("Extra premises [3], [5]"));
    }

    #[test]
    fn free_description() {
        assert_eq!(describe_free(&[]), "");
        assert_eq!(
            describe_free(&[('a', vec![1, 3]), ('b', vec![2])]),
            "a is free in (1), (3), b is free in (2)."
        );
    }
}
