#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = Jemalloc;

use std::io::BufReader;

use clap::Parser;

use deduction_lint::{
    config::Config,
    context::Context,
    reports::Report,
    structures::document::Document,
    types::err::{self},
};

mod output;
mod parse_args;

use parse_args::{config_from_args, Args};

fn main() {
    #[cfg(feature = "log")]
    env_logger::init();

    let args = Args::parse();

    if args.markdown_help {
        clap_markdown::print_help_markdown::<Args>();
        std::process::exit(0);
    }

    let mut config = Config::default();
    config_from_args(&args, &mut config);

    let Some(path) = &args.file else {
        println!("Path to a json document required");
        std::process::exit(2);
    };

    let file = match std::fs::File::open(path) {
        Ok(file) => file,
        Err(_) => {
            println!("{}", err::ErrorKind::Parse(err::ParseError::NoFile));
            std::process::exit(2);
        }
    };

    let document = match Document::read_json(BufReader::new(file)) {
        Ok(document) => document,
        Err(e) => {
            println!("Failed to read {path:?}: {e}");
            std::process::exit(2);
        }
    };

    let mut the_context = Context::from_config(config);

    let report = match the_context.check(document) {
        Ok(report) => report,
        Err(err::ErrorKind::Structural(e)) => {
            println!("Check aborted at line {}: {e}", e.position());
            std::process::exit(2);
        }
        Err(e) => {
            println!("Check error: {e}");
            std::process::exit(2);
        }
    };

    if let Err(e) = output::write_lines(&report, args.plain) {
        println!("Failed to write output: {e}");
    }

    if args.reach {
        output::write_reach(&report);
    }

    if args.dot {
        println!("{}", report.reachability.dot());
    }

    if args.stats {
        output::write_stats(&report);
    }

    if let Some(json_path) = &args.json {
        let written = std::fs::File::create(json_path)
            .map_err(|e| err::ErrorKind::Report(e.to_string()))
            .and_then(|file| report.write_json(file));

        if let Err(e) = written {
            println!("{e}");
            std::process::exit(2);
        }
    }

    println!("s {}", report.report());

    match report.report() {
        Report::Good => std::process::exit(0),
        Report::Problems => std::process::exit(1),
    }
}
