//! A library for checking natural deduction proofs in first-order predicate logic with identity.
//!
//! deduction_lint checks a proof line by line, verifying that each line follows by the rule it cites from the lines it cites, and depends on exactly the premises the rule requires.
//! Problems are noted by [flags](structures::flag) on lines, rather than by aborting the check, so that every problem with a proof may be reported at once.
//!
//! The calculus checked is that of Goldfarb's *Deductive Logic*, with the rules:
//! - P, premise introduction.
//! - D, discharge of a premise to a conditional.
//! - TF, truth-functional inference.
//! - CQ, change of quantifier.
//! - UI and UG, universal instantiation and generalization.
//! - EG, existential generalization.
//! - EII and EIE, existential instantiation, through the introduction of an instantial letter and elimination of the premise introduced.
//!
//! # Orientation
//!
//! The library is designed around the core structure of a [context].
//!
//! Contexts are built with a [configuration](config), and [check](context::Context::check) [documents](structures::document).
//! Documents may be read from [json](builder::json) or built [programatically](builder).
//!
//! A check of a document proceeds in stages, each of which may be found among the [procedures]:
//! - The labels of the document are [renumbered](procedures::renumber) to a dense sequence.
//! - The [reachability](procedures::reach) of each line is computed.
//! - The [scope](procedures::scope) of the letters of each expression is analysed.
//! - Each line is checked against the [rule](rules) it cites.
//!
//! Most rules are checked by searching for some [mapping](procedures::mapping) of letters witnessing an instantiation or generalization, together with [equality](procedures::equality) of expressions up to the renaming of bound letters.
//! Truth-functional steps are instead checked by a small, bounded, [solver](truth_functional).
//!
//! # Examples
//!
//! + Check a short proof by modus ponens.
//!
//! ```rust
//! # use deduction_lint::config::Config;
//! # use deduction_lint::context::Context;
//! # use deduction_lint::reports::Report;
//! # use deduction_lint::structures::{document::Document, expression::Expression, flag::FlagKind, line::{LogicLine, Rule}};
//! let mut the_context = Context::from_config(Config::default());
//!
//! let p = Expression::letter('P');
//! let q = Expression::letter('Q');
//!
//! let mut document = Document::default();
//! document.push(LogicLine::new(1, Expression::conditional(p.clone(), q.clone()), [1], Rule::Premise));
//! document.push(LogicLine::new(2, p, [2], Rule::Premise));
//! document.push(LogicLine::new(3, q.clone(), [1, 2], Rule::TruthFunctional { cited: vec![1, 2] }));
//! // Missing the premise of line 2.
//! document.push(LogicLine::new(4, q, [1], Rule::TruthFunctional { cited: vec![1, 2] }));
//!
//! let report = the_context.check(document).expect("well-formed labels");
//! assert_eq!(report.report(), Report::Problems);
//! assert_eq!(report.flags[2][0].kind, FlagKind::Good);
//! assert_eq!(report.flags[3][0].kind, FlagKind::MissingDependency);
//! ```
//!
//! # Logs
//!
//! To help diagnose issues calls to [log!](log) are made, and a variety of targets are defined in order to help narrow output to relevant parts of the library.
//!
//! The targets are listed in [misc::log].
//!
//! For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/):
//! - Logs related to [the truth-functional solver](crate::truth_functional) can be filtered with `RUST_LOG=truth_functional …` or,
//! - A summary of each line checked can be found with `RUST_LOG=rules=debug …`
//!

#![allow(mixed_script_confusables)]
#![allow(clippy::derivable_impls)]

pub mod builder;
pub mod procedures;

pub mod config;
pub mod context;
pub mod reports;
pub mod rules;
pub mod structures;
pub mod types;

pub mod truth_functional;

pub mod misc;
