/*!
A document, the ordered lines of a proof as authored.

Documents are built either line by line through [push](Document::push), or read from the interchange format through [read_json](Document::read_json).

A document is consumed by a [check](crate::context::Context::check), and returned (renumbered) as part of the [report](crate::reports::LintReport) of the check.

```rust
# use deduction_lint::structures::{document::Document, expression::Expression, line::{Line, LogicLine, Rule}};
let mut document = Document::default();
document.push(LogicLine::new(1, Expression::letter('A'), [1], Rule::Premise));
document.push(Line::Text("-- a comment".to_string()));

assert_eq!(document.len(), 2);
assert_eq!(document.logic_lines().count(), 1);
```
*/

use crate::structures::line::{Line, LogicLine};

/// The lines of a proof.
#[derive(Clone, Debug, Default)]
pub struct Document {
    pub lines: Vec<Line>,
}

impl Document {
    /// Appends a line to the document.
    pub fn push(&mut self, line: impl Into<Line>) {
        self.lines.push(line.into())
    }

    /// A count of all lines in the document, including text lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// An iterator over the logic lines of the document, in document order.
    pub fn logic_lines(&self) -> impl Iterator<Item = &LogicLine> {
        self.lines.iter().filter_map(|line| line.as_logic())
    }
}

impl From<Vec<Line>> for Document {
    fn from(lines: Vec<Line>) -> Self {
        Document { lines }
    }
}

impl FromIterator<Line> for Document {
    fn from_iter<I: IntoIterator<Item = Line>>(iter: I) -> Self {
        Document {
            lines: iter.into_iter().collect(),
        }
    }
}

impl std::fmt::Display for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
