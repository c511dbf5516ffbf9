use std::time::Duration;

/// Counts for various things which count, roughly.
#[derive(Clone, Debug)]
pub struct Counters {
    /// A count of every line checked, including text lines.
    pub lines: usize,

    /// A count of logic lines checked.
    pub logic_lines: usize,

    /// A count of logic lines without any problem.
    pub good: usize,

    /// A count of logic lines with some problem.
    pub problems: usize,

    /// A count of lines checked by the truth-functional solver.
    pub truth_functional: usize,

    /// The time taken during a check.
    pub time: Duration,
}

impl Default for Counters {
    fn default() -> Self {
        Counters {
            lines: 0,
            logic_lines: 0,

            good: 0,
            problems: 0,

            truth_functional: 0,
            time: Duration::from_secs(0),
        }
    }
}

impl Counters {
    /// Adds the counts of `other` to those of `self`.
    pub fn accumulate(&mut self, other: &Counters) {
        self.lines += other.lines;
        self.logic_lines += other.logic_lines;
        self.good += other.good;
        self.problems += other.problems;
        self.truth_functional += other.truth_functional;
        self.time += other.time;
    }
}
