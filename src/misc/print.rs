//! Plain text renderings of letters, line numbers, and premises, for use in flag explanations.

use crate::structures::{line::Label, symbol::Symbol};

/// `x, y, z`
pub fn letters(symbols: &[Symbol]) -> String {
    symbols
        .iter()
        .map(|symbol| symbol.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// `(4)`
pub fn linenum(label: Label) -> String {
    format!("({label})")
}

/// `(1), (2)`
pub fn linenums(labels: &[Label]) -> String {
    labels
        .iter()
        .map(|label| linenum(*label))
        .collect::<Vec<_>>()
        .join(", ")
}

/// `[4]`
pub fn premise(label: Label) -> String {
    format!("[{label}]")
}

/// `premise [2]`, or `premises [3], [5]`.
pub fn premises(labels: &[Label]) -> String {
    let noun = match labels.len() {
        1 => "premise",
        _ => "premises",
    };
    let list = labels
        .iter()
        .map(|label| premise(*label))
        .collect::<Vec<_>>()
        .join(", ");
    format!("{noun} {list}")
}

/// `x → a, y → b`, pairing `from[i]` with `to[i]`.
pub fn mapping(from: &[Symbol], to: &[Symbol]) -> String {
    from.iter()
        .zip(to)
        .map(|(f, t)| format!("{f} → {t}"))
        .collect::<Vec<_>>()
        .join(", ")
}
