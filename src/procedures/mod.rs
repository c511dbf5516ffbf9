//! Procedures over expressions and documents.
//!
//! - Over expressions: [scope] analysis, [equality], and [mapping] of letters.
//! - Over documents: [renumbering](renumber) of labels, and [reachability](reach) of lines.
//!
//! For the most part these are called during a [check](crate::context::Context::check) of a document, and primarily placed here for documentation.

pub mod equality;
pub mod mapping;
pub mod reach;
pub mod renumber;
pub mod scope;
