//! Error types used in the library.
//!
//! Errors are *structural*, and abort a check of a document.
//! Problems with the application of a rule to a line are not errors, and are instead noted by [flags](crate::structures::flag) on the line.
//!
//! - Structural errors, e.g. a duplicate label, prevent lines from being identified and so abort a check.
//! - Parse errors arise when reading a document from the [interchange format](crate::builder::json).
//! - Report errors arise when writing a [report](crate::reports::LintReport::write_json).
//!
//! Names of the error enums --- for the most part --- overlap with corresponding structs.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

use crate::structures::line::Label;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Structural(StructuralError),
    Parse(ParseError),

    /// A report could not be written, with the message of the writer.
    Report(String),
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Structural(e) => write!(f, "{e}"),
            Self::Parse(e) => write!(f, "{e}"),
            Self::Report(message) => write!(f, "Failed to write report: {message}"),
        }
    }
}

impl std::error::Error for ErrorKind {}

/// Errors in the labels of a document, each noting the position of the offending line in the document.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StructuralError {
    /// A label exceeds the configured limit.
    LabelOutOfRange { position: usize, label: Label },

    /// A label is used by two logic lines.
    DuplicateLabel { position: usize, label: Label },

    /// A line refers to a label which is not the label of any logic line.
    MissingReference { position: usize, label: Label },
}

impl StructuralError {
    /// The position in the document of the offending line.
    pub fn position(&self) -> usize {
        match self {
            Self::LabelOutOfRange { position, .. }
            | Self::DuplicateLabel { position, .. }
            | Self::MissingReference { position, .. } => *position,
        }
    }
}

impl std::fmt::Display for StructuralError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LabelOutOfRange { position, label } => {
                write!(f, "Line number out of range: {label} (line {position}).")
            }
            Self::DuplicateLabel { position, label } => {
                write!(f, "Duplicate line number: {label} (line {position}).")
            }
            Self::MissingReference { position, label } => write!(
                f,
                "Referenced line number does not exist: {label} (line {position})."
            ),
        }
    }
}

impl From<StructuralError> for ErrorKind {
    fn from(e: StructuralError) -> Self {
        ErrorKind::Structural(e)
    }
}

/// Noted errors when reading a document.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// Some field required by a rule is absent, noting the rule and the field.
    MissingField { rule: String, field: &'static str },

    /// Some binding of a quantifier is not `forall` or `exists`.
    Binding(String),

    /// A symbol was not a single character.
    Symbol(String),

    /// A junction without any juncts.
    EmptyJunction,

    /// The input is not (well formed) json, with the message of the json library.
    Json(String),

    /// No file was found.
    NoFile,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField { rule, field } => {
                write!(f, "The rule {rule} requires the field '{field}'.")
            }
            Self::Binding(binding) => write!(f, "Unknown quantifier binding '{binding}'."),
            Self::Symbol(symbol) => write!(f, "The symbol '{symbol}' is not a single character."),
            Self::EmptyJunction => write!(f, "A junction requires at least one junct."),
            Self::Json(message) => write!(f, "Malformed document: {message}"),
            Self::NoFile => write!(f, "No file was found."),
        }
    }
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

impl From<serde_json::Error> for ParseError {
    fn from(e: serde_json::Error) -> Self {
        ParseError::Json(e.to_string())
    }
}
