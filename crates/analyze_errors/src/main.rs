// crates/analyze_errors/src/main.rs

use anyhow::Result;
use clap::{Arg, Command};
use std::path::PathBuf;

use analyze_errors::{run, AnalyzerConfig, DEFAULT_INPUT, DEFAULT_OUTPUT};

fn main() -> Result<()> {
    let matches = Command::new("analyze_errors")
        .version("0.1.0")
        .about("Extracts compiler errors from a build log and appends a TODO entry with suggested fixes")
        .arg(
            Arg::new("input")
                .long("input")
                .num_args(1)
                .default_value(DEFAULT_INPUT)
                .help("Compiler log to read"),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .num_args(1)
                .default_value(DEFAULT_OUTPUT)
                .help("Tracking file to append the TODO entry to"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose logging")
                .action(clap::ArgAction::SetTrue)
                .default_value("false"),
        )
        .get_matches();

    let verbose = *matches.get_one::<bool>("verbose").unwrap();
    if verbose {
        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Debug)
            .init();
    }

    let config = AnalyzerConfig {
        input: PathBuf::from(matches.get_one::<String>("input").unwrap()),
        output: PathBuf::from(matches.get_one::<String>("output").unwrap()),
        verbose,
    };

    run(&config)?;
    Ok(())
}
