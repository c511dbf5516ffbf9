//! Miscelanous items.

pub mod log;
pub mod print;
