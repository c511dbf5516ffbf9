use std::io::{stdout, Write};

use crossterm::{
    style::{Color, Print, PrintStyledContent, Stylize},
    QueueableCommand,
};

use deduction_lint::{
    reports::LintReport,
    structures::flag::{Flag, FlagKind},
};

fn colour(kind: FlagKind) -> Color {
    match kind {
        FlagKind::Good => Color::Green,
        FlagKind::Comment => Color::DarkGrey,
        FlagKind::TFWarning | FlagKind::Unlinted => Color::Yellow,
        FlagKind::Unrecognized | FlagKind::TFError => Color::Magenta,
        _ => Color::Red,
    }
}

/// Writes each line of the report followed by the flags of the line.
pub fn write_lines(report: &LintReport, plain: bool) -> std::io::Result<()> {
    let mut stdout = stdout();

    for (position, (line, flags)) in report.lines().enumerate() {
        stdout.queue(Print(format!("{position:>4} {line}\n")))?;

        for flag in flags.iter().filter(|flag| flag.kind != FlagKind::Comment) {
            write_flag(&mut stdout, flag, plain)?;
        }
    }

    stdout.flush()
}

fn write_flag(stdout: &mut std::io::Stdout, flag: &Flag, plain: bool) -> std::io::Result<()> {
    let kind = format!("{}", flag.kind);
    match plain {
        true => stdout.queue(Print(format!("       {kind}")))?,
        false => {
            stdout.queue(Print("       "))?;
            stdout.queue(PrintStyledContent(kind.with(colour(flag.kind)).bold()))?
        }
    };

    if let Some(text) = &flag.text {
        stdout.queue(Print(format!(": {text}")))?;
    }
    stdout.queue(Print("\n"))?;

    Ok(())
}

/// Writes the positions reachable from each line.
pub fn write_reach(report: &LintReport) {
    for (position, closure) in report.reachability.closures.iter().enumerate() {
        let reachable = closure
            .iter()
            .map(|p| p.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        println!("r {position:>4}: {reachable}");
    }
}

/// Writes counts from the check.
pub fn write_stats(report: &LintReport) {
    let counters = &report.counters;
    println!("c LINES             {}", counters.lines);
    println!("c LOGIC LINES       {}", counters.logic_lines);
    println!("c GOOD              {}", counters.good);
    println!("c PROBLEMS          {}", counters.problems);
    println!("c TRUTH-FUNCTIONAL  {}", counters.truth_functional);
    println!("c TIME              {:.2?}", counters.time);
}
