//! P, the introduction of a premise.
//!
//! A premise depends on exactly itself.

use crate::{
    rules::{premise_check, CheckResult},
    structures::{flag::Flag, line::LogicLine},
};

pub fn check(line: &LogicLine) -> CheckResult {
    premise_check([line.label], &line.deps)?;
    Ok(Flag::good())
}
