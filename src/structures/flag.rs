/*!
Flags, the diagnostics attached to each line of a proof.

A logic line may carry several flags, e.g. a [LetterConflict](FlagKind::LetterConflict) found when analysing the scope of the expression of the line together with an [Incorrect](FlagKind::Incorrect) application of a rule.
A text line carries exactly one flag, [Comment](FlagKind::Comment).

Flags optionally carry some text to explain the flag.
*/

use serde::Serialize;

/// The kind of a flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum FlagKind {
    /// The line is correct.
    Good,

    /// The line cites or depends on a line occurring after it.
    ForwardDependency,

    /// Reserved.
    SameDependency,

    /// The line does not list some required premise.
    MissingDependency,

    /// The line lists some premise which is not required.
    ExtraDependency,

    /// Reserved.
    Unlinted,

    /// The rule cited does not justify the line.
    Incorrect,

    /// The line is a comment (or blank).
    Comment,

    /// The rule cited is not recognised.
    Unrecognized,

    /// Some letter is bound more than once, or is both bound and free.
    LetterConflict,

    /// The truth-functional solver could not be applied.
    TFError,

    /// The truth-functional solver could not confirm the line.
    /// Distinct from [Incorrect](FlagKind::Incorrect), as the solver is incomplete.
    TFWarning,
}

impl std::fmt::Display for FlagKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Good => write!(f, "Good"),
            Self::ForwardDependency => write!(f, "Forward dependency"),
            Self::SameDependency => write!(f, "Same dependency"),
            Self::MissingDependency => write!(f, "Missing dependency"),
            Self::ExtraDependency => write!(f, "Extra dependency"),
            Self::Unlinted => write!(f, "Unlinted"),
            Self::Incorrect => write!(f, "Incorrect"),
            Self::Comment => write!(f, "Comment"),
            Self::Unrecognized => write!(f, "Unrecognized"),
            Self::LetterConflict => write!(f, "Letter conflict"),
            Self::TFError => write!(f, "TF error"),
            Self::TFWarning => write!(f, "TF warning"),
        }
    }
}

/// A flag, with optional explanation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Flag {
    pub kind: FlagKind,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl Flag {
    /// A flag of the given kind with some explanation.
    pub fn new(kind: FlagKind, text: impl Into<String>) -> Self {
        Flag {
            kind,
            text: Some(text.into()),
        }
    }

    /// A flag of the given kind without explanation.
    pub fn bare(kind: FlagKind) -> Self {
        Flag { kind, text: None }
    }

    pub fn good() -> Self {
        Self::bare(FlagKind::Good)
    }

    pub fn incorrect(text: impl Into<String>) -> Self {
        Self::new(FlagKind::Incorrect, text)
    }

    /// True if the flag notes some problem with a line, i.e. if the flag is neither [Good](FlagKind::Good) nor a [Comment](FlagKind::Comment).
    pub fn is_problem(&self) -> bool {
        !matches!(self.kind, FlagKind::Good | FlagKind::Comment)
    }
}

impl std::fmt::Display for Flag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.text {
            Some(text) => write!(f, "{}: {text}", self.kind),
            None => write!(f, "{}", self.kind),
        }
    }
}
