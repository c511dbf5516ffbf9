/*!
Lines of a proof, and the rules cited by lines.

A [Line] is either a *logic* line or a line of free text.

A [LogicLine] asserts an [expression](crate::structures::expression), cites a [Rule], and lists the labels of the premises the line depends on.

```text
[1][2]  (4)  (A ∧ B)   1,3 TF
 ^deps  ^label ^expr    ^rule
```

Free text lines are comments, or blank.
Blank lines are distinguished as blank lines occupy a label when lines are [renumbered](crate::procedures::renumber).
*/

use crate::structures::{expression::Expr, symbol::Symbol};

/// The label of a line, as written by the author or after renumbering.
pub type Label = usize;

/// A rule of the calculus, together with the lines the rule cites.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Rule {
    /// P, the line is a premise.
    Premise,

    /// D, discharge a premise by making it the antecedent of a conditional.
    Discharge {
        /// The line whose expression is the consequent.
        cited: Label,
        /// The premise discharged, whose expression is the antecedent.
        discharged: Label,
    },

    /// TF, the line follows truth-functionally from the cited lines.
    TruthFunctional { cited: Vec<Label> },

    /// CQ, change of quantifier.
    ChangeOfQuantifier { cited: Label },

    /// UI, universal instantiation.
    UniversalInstantiation { cited: Label },

    /// UG, universal generalization.
    UniversalGeneralization { cited: Label },

    /// EG, existential generalization.
    ExistentialGeneralization { cited: Label },

    /// EII, existential instantiation introduction, flagging an instantial letter.
    ExistentialInstantiationIntro {
        cited: Label,
        /// The letter introduced for the bound symbol.
        instantial: Symbol,
    },

    /// EIE, existential instantiation elimination.
    ExistentialInstantiationElim {
        cited: Label,
        /// The EII line discharged.
        discharged: Label,
    },

    /// Some rule not recognised, by name.
    Unrecognized(String),
}

impl Rule {
    /// The (short) name of the rule, as written in a proof.
    pub fn name(&self) -> &str {
        match self {
            Self::Premise => "P",
            Self::Discharge { .. } => "D",
            Self::TruthFunctional { .. } => "TF",
            Self::ChangeOfQuantifier { .. } => "CQ",
            Self::UniversalInstantiation { .. } => "UI",
            Self::UniversalGeneralization { .. } => "UG",
            Self::ExistentialGeneralization { .. } => "EG",
            Self::ExistentialInstantiationIntro { .. } => "EII",
            Self::ExistentialInstantiationElim { .. } => "EIE",
            Self::Unrecognized(name) => name,
        }
    }

    /// The lines cited by the rule.
    ///
    /// Discharged premises are not included.
    pub fn citations(&self) -> Vec<Label> {
        match self {
            Self::Premise | Self::Unrecognized(_) => Vec::default(),

            Self::TruthFunctional { cited } => cited.clone(),

            Self::Discharge { cited, .. }
            | Self::ChangeOfQuantifier { cited }
            | Self::UniversalInstantiation { cited }
            | Self::UniversalGeneralization { cited }
            | Self::ExistentialGeneralization { cited }
            | Self::ExistentialInstantiationIntro { cited, .. }
            | Self::ExistentialInstantiationElim { cited, .. } => vec![*cited],
        }
    }

    /// Mutable references to every label in the rule, cited or discharged.
    pub fn labels_mut(&mut self) -> Vec<&mut Label> {
        match self {
            Self::Premise | Self::Unrecognized(_) => Vec::default(),

            Self::TruthFunctional { cited } => cited.iter_mut().collect(),

            Self::Discharge { cited, discharged }
            | Self::ExistentialInstantiationElim { cited, discharged } => vec![cited, discharged],

            Self::ChangeOfQuantifier { cited }
            | Self::UniversalInstantiation { cited }
            | Self::UniversalGeneralization { cited }
            | Self::ExistentialGeneralization { cited }
            | Self::ExistentialInstantiationIntro { cited, .. } => vec![cited],
        }
    }

    /// A string of the arguments to the rule, e.g. `3,4` for a TF line citing lines three and four.
    pub fn arguments(&self) -> String {
        match self {
            Self::Premise | Self::Unrecognized(_) => String::default(),

            Self::TruthFunctional { cited } => cited
                .iter()
                .map(|label| label.to_string())
                .collect::<Vec<_>>()
                .join(","),

            Self::Discharge { cited, discharged }
            | Self::ExistentialInstantiationElim { cited, discharged } => {
                format!("{cited}[{discharged}]")
            }

            Self::ExistentialInstantiationIntro { cited, instantial } => {
                format!("{cited}({instantial})")
            }

            Self::ChangeOfQuantifier { cited }
            | Self::UniversalInstantiation { cited }
            | Self::UniversalGeneralization { cited }
            | Self::ExistentialGeneralization { cited } => cited.to_string(),
        }
    }
}

/// A numbered step of a proof.
#[derive(Clone, Debug)]
pub struct LogicLine {
    /// The label of the line.
    pub label: Label,

    /// The expression asserted.
    pub expression: Expr,

    /// The labels of the premises the line depends on, ascending and without duplicates.
    pub deps: Vec<Label>,

    /// The rule cited.
    pub rule: Rule,
}

impl LogicLine {
    /// A logic line, with dependencies sorted and deduplicated.
    pub fn new(
        label: Label,
        expression: Expr,
        deps: impl IntoIterator<Item = Label>,
        rule: Rule,
    ) -> Self {
        let mut deps = deps.into_iter().collect::<Vec<_>>();
        deps.sort_unstable();
        deps.dedup();

        LogicLine {
            label,
            expression,
            deps,
            rule,
        }
    }

    /// The lines the line immediately relies on, as the union of dependencies and citations.
    pub fn references(&self) -> Vec<Label> {
        let mut references = self.deps.clone();
        references.extend(self.rule.citations());
        references
    }
}

impl std::fmt::Display for LogicLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for dep in &self.deps {
            write!(f, "[{dep}]")?;
        }
        write!(
            f,
            " ({}) {} {} {}",
            self.label,
            self.expression,
            self.rule.arguments(),
            self.rule.name()
        )
    }
}

/// A line of a proof.
#[derive(Clone, Debug)]
pub enum Line {
    /// A numbered step.
    Logic(LogicLine),

    /// A comment or blank line, holding the text of the line.
    Text(String),
}

impl Line {
    /// True if the line is a text line with no content other than whitespace.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Logic(_) => false,
            Self::Text(text) => text.trim().is_empty(),
        }
    }

    /// The line as a logic line, if it is one.
    pub fn as_logic(&self) -> Option<&LogicLine> {
        match self {
            Self::Logic(line) => Some(line),
            Self::Text(_) => None,
        }
    }
}

impl From<LogicLine> for Line {
    fn from(value: LogicLine) -> Self {
        Line::Logic(value)
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Logic(line) => write!(f, "{line}"),
            Self::Text(text) => write!(f, "{text}"),
        }
    }
}
