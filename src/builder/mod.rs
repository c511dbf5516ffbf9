/*!
Tools for building a document.

# Basic methods

The library has two basic methods for building a document:
- The constructors of [Expression](crate::structures::expression::Expression), to build expressions.
- [push](crate::structures::document::Document::push), to add a line to a document.

Alternatively, a document may be read from [json](json), e.g. as written by an external parser of the surface syntax of proofs.

# Examples

A document built using basic methods.

```rust
# use deduction_lint::context::Context;
# use deduction_lint::reports::Report;
# use deduction_lint::structures::{document::Document, expression::Expression, line::{LogicLine, Rule}};
let fx = Expression::predicate('F', vec![Expression::letter('x')]);
let fa = Expression::predicate('F', vec![Expression::letter('a')]);

let mut document = Document::default();
document.push(LogicLine::new(1, Expression::universal('x', fx), [1], Rule::Premise));
document.push(LogicLine::new(2, fa, [1], Rule::UniversalInstantiation { cited: 1 }));

let report = Context::default().check(document).expect("checked");
assert_eq!(report.report(), Report::Good);
```

The same document, read from json.

```rust
# use deduction_lint::context::Context;
# use deduction_lint::reports::Report;
# use deduction_lint::structures::document::Document;
let json = r#"{ "lines": [
    { "type": "logic", "label": 1, "deps": [1],
      "expression": { "type": "quantifier",
                      "bindings": [ { "quantifier": "forall", "symbol": "x" } ],
                      "body": { "type": "predicate", "name": "F",
                                "args": [ { "type": "sentence_letter", "letter": "x" } ] } },
      "rule": { "name": "P" } },
    { "type": "logic", "label": 2, "deps": [1],
      "expression": { "type": "predicate", "name": "F",
                      "args": [ { "type": "sentence_letter", "letter": "a" } ] },
      "rule": { "name": "UI", "line": 1 } }
] }"#;

let document = Document::read_json(json.as_bytes()).expect("read");
let report = Context::default().check(document).expect("checked");
assert_eq!(report.report(), Report::Good);
```
*/

pub mod json;
