//! Key structures, such as expressions, lines, and documents.
//!
//! # Proofs
//!
//! A proof is a [document] of [lines](line).
//! Each logic line asserts an [expression], is justified by some [rule](line::Rule), and depends on some collection of premises (themselves lines of the proof).
//!
//! The structures are the input to a check.
//! The output of a check is a collection of [flags](flag), one list of flags per line.
//!
//! ## Letters
//!
//! All names in an expression are [symbols](symbol).
//! A symbol is *bound* at some occurrence if the occurrence is within the scope of a quantifier over the symbol, and otherwise *free*. \
//! The free and bound symbols of an expression are found through [scope analysis](crate::procedures::scope).

pub mod document;
pub mod expression;
pub mod flag;
pub mod line;
pub mod symbol;
