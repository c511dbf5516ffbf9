/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information for extending the library and/or fixing issues.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [renumbering](crate::procedures::renumber)
    pub const RENUMBER: &str = "renumber";

    /// Logs related to [reachability](crate::procedures::reach)
    pub const REACH: &str = "reach";

    /// Logs related to [scope analysis](crate::procedures::scope)
    pub const SCOPE: &str = "scope";

    /// Logs related to the application of [rules](crate::rules)
    pub const RULES: &str = "rules";

    /// Logs related to the [truth-functional solver](crate::truth_functional)
    pub const TRUTH_FUNCTIONAL: &str = "truth_functional";

    /// Logs related to [mappings](crate::procedures::mapping)
    pub const MAPPING: &str = "mapping";
}
