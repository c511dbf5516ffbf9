/*!
Renumbering of the labels of a document to a dense canonical sequence.

Authors label lines with arbitrary non-negative integers.
Renumbering replaces these with a dense sequence beginning from zero, in document order, and rewrites every dependency and citation to match.

- Logic lines take a slot in the sequence.
- Blank text lines also take a slot, so an author may insert a blank line for a step yet to be written without disturbing the numbering of later lines.
- Comment lines do not take a slot.

The result of renumbering is a [LabelIndex], from canonical label to the position of the labelled line in the document.

# Errors

Renumbering fails, with a [StructuralError] noting the position of the offending line, if:
- A label exceeds the configured [label limit](crate::config::Config::label_limit).
- A label is used by two logic lines.
- A line refers to a label which is not the label of any logic line.

On failure the document may have been partially rewritten.

```rust
# use deduction_lint::structures::{document::Document, expression::Expression, line::{Line, LogicLine, Rule}};
# use deduction_lint::procedures::renumber::renumber;
let mut document = Document::default();
document.push(LogicLine::new(10, Expression::letter('A'), [10], Rule::Premise));
document.push(Line::Text(String::new()));
document.push(LogicLine::new(20, Expression::letter('A'), [10], Rule::TruthFunctional { cited: vec![10] }));

let index = renumber(&mut document, 1000).expect("renumbered");
let last = document.lines[2].as_logic().expect("logic line");
assert_eq!(last.label, 2);
assert_eq!(last.deps, vec![0]);
assert_eq!(index.position(2), Some(2));
```
*/

use std::collections::BTreeMap;

use crate::{
    misc::log::targets::{self},
    structures::{
        document::Document,
        line::{Label, Line, Rule},
    },
    types::err::StructuralError,
};

/// A map from canonical labels to positions in a document.
#[derive(Clone, Debug, Default)]
pub struct LabelIndex {
    positions: Vec<usize>,
}

impl LabelIndex {
    /// The position in the document of the line with the given canonical label, if the label is used.
    pub fn position(&self, label: Label) -> Option<usize> {
        self.positions.get(label).copied()
    }

    /// A count of the labels in use, i.e. logic and blank lines.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Renumbers the labels of `document` in place, returning an index from canonical label to document position.
pub fn renumber(document: &mut Document, label_limit: Label) -> Result<LabelIndex, StructuralError> {
    let canonical = assign(document, label_limit)?;

    let lookup = |label: Label, position: usize| -> Result<Label, StructuralError> {
        match canonical.get(&label).copied() {
            Some(fresh) => Ok(fresh),
            None => Err(StructuralError::MissingReference { position, label }),
        }
    };

    let mut index = LabelIndex::default();

    for (position, line) in document.lines.iter_mut().enumerate() {
        match line {
            Line::Logic(logic) => {
                logic.label = lookup(logic.label, position)?;

                for dep in logic.deps.iter_mut() {
                    *dep = lookup(*dep, position)?;
                }
                logic.deps.sort_unstable();
                logic.deps.dedup();

                for label in logic.rule.labels_mut() {
                    *label = lookup(*label, position)?;
                }
                if let Rule::TruthFunctional { cited } = &mut logic.rule {
                    cited.sort_unstable();
                }

                index.positions.push(position);
            }

            Line::Text(text) => {
                if text.trim().is_empty() {
                    index.positions.push(position);
                }
            }
        }
    }

    log::debug!(target: targets::RENUMBER, "Renumbered {} labels", index.len());
    Ok(index)
}

/// A map from author labels to canonical labels.
fn assign(document: &Document, label_limit: Label) -> Result<BTreeMap<Label, Label>, StructuralError> {
    let mut canonical: BTreeMap<Label, Label> = BTreeMap::default();
    let mut next: Label = 0;

    for (position, line) in document.lines.iter().enumerate() {
        match line {
            Line::Logic(logic) => {
                let label = logic.label;
                if label > label_limit {
                    log::warn!(target: targets::RENUMBER, "Label {label} exceeds the limit {label_limit}");
                    return Err(StructuralError::LabelOutOfRange { position, label });
                }

                if canonical.insert(label, next).is_some() {
                    return Err(StructuralError::DuplicateLabel { position, label });
                }

                log::trace!(target: targets::RENUMBER, "{label} → {next}");
                next += 1;
            }

            Line::Text(_) => {
                if line.is_blank() {
                    next += 1;
                }
            }
        }
    }

    Ok(canonical)
}
