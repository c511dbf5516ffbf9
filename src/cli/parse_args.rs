use std::path::PathBuf;

use clap::Parser;

use deduction_lint::config::Config;

/// Checks natural deduction proofs, line by line.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// The json document to check.
    #[arg(required_unless_present = "markdown_help")]
    pub file: Option<PathBuf>,

    /// Display the lines reachable from each line.
    #[arg(short, long)]
    pub reach: bool,

    /// Display stats on completion.
    #[arg(short, long)]
    pub stats: bool,

    /// Write a json report to the given path.
    #[arg(long, value_name = "PATH")]
    pub json: Option<PathBuf>,

    /// Display the immediate edges between lines in the dot language.
    #[arg(long)]
    pub dot: bool,

    /// Display flags without colour.
    #[arg(long)]
    pub plain: bool,

    /// The count of rounds of the truth-functional solver.
    #[arg(long, value_name = "DEPTH")]
    pub tf_depth: Option<usize>,

    /// The largest label permitted in a document.
    #[arg(long, value_name = "LIMIT")]
    pub label_limit: Option<usize>,

    /// Print help as markdown.
    #[arg(long, hide = true)]
    pub markdown_help: bool,
}

/// Updates `config` with any options requested in `args`.
///
/// If a requested value is out of bounds a message is sent and the process is terminated.
pub fn config_from_args(args: &Args, config: &mut Config) {
    if let Some(value) = args.tf_depth {
        let (min, max) = config.truth_functional_depth.min_max();
        if config.truth_functional_depth.set(value).is_err() {
            println!("tf-depth requires a value between {min} and {max}");
            std::process::exit(2);
        }
        log::info!("{} set to: {value}", config.truth_functional_depth.name);
    }

    if let Some(value) = args.label_limit {
        let (min, max) = config.label_limit.min_max();
        if config.label_limit.set(value).is_err() {
            println!("label-limit requires a value between {min} and {max}");
            std::process::exit(2);
        }
        log::info!("{} set to: {value}", config.label_limit.name);
    }
}
