/*!
The context --- within which documents are checked.

A context holds a [Config] and [Counters], and a [check](Context::check) consumes a [Document] to produce a [LintReport].

A check proceeds in stages:
1. The document is [renumbered](crate::procedures::renumber).
   Any structural error aborts the check.
2. [Reachability](crate::procedures::reach) is computed, noting any forward dependency.
3. The [scope](crate::procedures::scope) of each logic line is analysed, noting any letter conflict.
4. Each logic line is [checked](crate::rules::check_line) against the rule it cites.
   Each text line is noted as a comment.

Flags from each stage are kept, in order of the stages.
So, a line may be flagged both for a forward dependency and an incorrect application of a rule.

# Example
```rust
# use deduction_lint::config::Config;
# use deduction_lint::context::Context;
# use deduction_lint::reports::Report;
# use deduction_lint::structures::{document::Document, expression::Expression, line::{LogicLine, Rule}};
let mut the_context = Context::from_config(Config::default());

let a = Expression::letter('A');
let b = Expression::letter('B');

let mut document = Document::default();
document.push(LogicLine::new(1, a.clone(), [1], Rule::Premise));
document.push(LogicLine::new(2, Expression::conditional(a, b.clone()), [2], Rule::Premise));
document.push(LogicLine::new(3, b, [1, 2], Rule::TruthFunctional { cited: vec![1, 2] }));

let report = the_context.check(document).expect("no structural errors");
assert_eq!(report.report(), Report::Good);
assert_eq!(the_context.counters.good, 3);
```
*/

mod counters;
pub use counters::Counters;

use std::time::Instant;

use crate::{
    config::Config,
    misc::log::targets::{self},
    procedures::{
        reach::reach,
        renumber::renumber,
        scope::{analyze, ScopeInfo},
    },
    reports::LintReport,
    rules::{check_line, Proof},
    structures::{
        document::Document,
        flag::{Flag, FlagKind},
        line::{Line, Rule},
    },
    types::err::{self},
};

/// A context, within which documents are checked.
pub struct Context {
    /// The configuration of the context.
    pub config: Config,

    /// Counters, accumulated over every check made within the context.
    ///
    /// Counters for a single check are part of the report of the check.
    pub counters: Counters,
}

impl Default for Context {
    fn default() -> Self {
        Self::from_config(Config::default())
    }
}

impl Context {
    /// Creates a context from some given configuration.
    pub fn from_config(config: Config) -> Self {
        Self {
            config,
            counters: Counters::default(),
        }
    }

    /// Checks every line of `document`, returning a report of the check.
    ///
    /// Errors only if the labels of the document are malformed, in which case no line is checked.
    pub fn check(&mut self, mut document: Document) -> Result<LintReport, err::ErrorKind> {
        let start = Instant::now();
        let mut counters = Counters::default();

        let index = renumber(&mut document, self.config.label_limit.value)?;

        let reachability = reach(&document, &index);
        let mut flags = reachability.flags.clone();

        let mut scopes: Vec<Option<ScopeInfo>> = Vec::with_capacity(document.len());
        for (position, line) in document.lines.iter().enumerate() {
            match line {
                Line::Logic(logic) => {
                    let mut scope = analyze(&logic.expression);
                    flags[position].append(&mut scope.flags);
                    scopes.push(Some(scope));
                }
                Line::Text(_) => scopes.push(None),
            }
        }

        let proof = Proof {
            lines: &document.lines,
            index: &index,
            scopes: &scopes,
            config: &self.config,
        };

        for (position, line) in document.lines.iter().enumerate() {
            counters.lines += 1;

            match line {
                Line::Logic(logic) => {
                    counters.logic_lines += 1;
                    if matches!(logic.rule, Rule::TruthFunctional { .. }) {
                        counters.truth_functional += 1;
                    }

                    flags[position].extend(check_line(logic, &proof));

                    match flags[position].iter().any(Flag::is_problem) {
                        true => counters.problems += 1,
                        false => counters.good += 1,
                    }
                }

                Line::Text(_) => flags[position].push(Flag::bare(FlagKind::Comment)),
            }
        }

        counters.time = start.elapsed();
        self.counters.accumulate(&counters);

        log::info!(target: targets::RULES, "Checked {} lines in {:.2?}", counters.lines, counters.time);

        Ok(LintReport {
            document,
            flags,
            reachability,
            counters,
        })
    }
}
