/*!
Reports for a check.

A [LintReport] holds the renumbered document, the flags of each line, and the reachability of each line, by position in the document.
A [Report] is a high-level summary of a [LintReport].
*/

use serde::Serialize;

use crate::{
    context::Counters,
    procedures::reach::Reachability,
    structures::{document::Document, flag::Flag, line::Line},
    types::err::{self},
};

/// High-level reports regarding a check.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Report {
    /// Every logic line is good.
    Good,

    /// Some logic line was flagged for some problem.
    Problems,
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Good => write!(f, "Good"),
            Self::Problems => write!(f, "Problems"),
        }
    }
}

/// The full report of a check of a document.
#[derive(Debug)]
pub struct LintReport {
    /// The document, renumbered.
    pub document: Document,

    /// The flags of each line, by position.
    pub flags: Vec<Vec<Flag>>,

    /// The reachability of each line, by position.
    pub reachability: Reachability,

    /// Counts from the check.
    pub counters: Counters,
}

/// A line of a report, as written to json.
#[derive(Serialize)]
struct ReportLine<'r> {
    position: usize,

    #[serde(skip_serializing_if = "Option::is_none")]
    label: Option<usize>,

    line: String,

    flags: &'r [Flag],

    reaches: Vec<usize>,
}

impl LintReport {
    /// A summary of the report.
    pub fn report(&self) -> Report {
        match self.flags.iter().flatten().any(Flag::is_problem) {
            true => Report::Problems,
            false => Report::Good,
        }
    }

    /// The positions of lines with some problem.
    pub fn problem_positions(&self) -> Vec<usize> {
        self.flags
            .iter()
            .enumerate()
            .filter(|(_, flags)| flags.iter().any(Flag::is_problem))
            .map(|(position, _)| position)
            .collect()
    }

    /// Pairs of each line of the document with the flags of the line.
    pub fn lines(&self) -> impl Iterator<Item = (&Line, &[Flag])> {
        self.document
            .lines
            .iter()
            .zip(self.flags.iter().map(|flags| flags.as_slice()))
    }

    /// Writes the report as a json array, with an entry for each line.
    ///
    /// Each entry records the position of the line, the (canonical) label of a logic line, the line as text, the flags of the line, and the positions reachable from the line.
    pub fn write_json(&self, writer: impl std::io::Write) -> Result<(), err::ErrorKind> {
        let lines = self
            .lines()
            .enumerate()
            .map(|(position, (line, flags))| ReportLine {
                position,
                label: line.as_logic().map(|logic| logic.label),
                line: line.to_string(),
                flags,
                reaches: self
                    .reachability
                    .closures
                    .get(position)
                    .map(|closure| closure.iter().copied().collect())
                    .unwrap_or_default(),
            })
            .collect::<Vec<_>>();

        serde_json::to_writer_pretty(writer, &lines)
            .map_err(|e| err::ErrorKind::Report(e.to_string()))
    }
}
