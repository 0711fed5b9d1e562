//! Mots Filter - word filtering over a French dictionary
//!
//! Main entry point for the command-line application.

use clap::Parser;
use std::path::Path;
use std::process;

use mots_filter::cli::Args;
use mots_filter::progress::{print_error, print_header, print_info};
use mots_filter::session::{describe, Session, SessionConfig};

fn main() {
    // Parse command-line arguments
    let args = Args::parse();

    // Set up logging
    if args.verbose {
        std::env::set_var("RUST_LOG", "debug");
    } else if !args.quiet {
        std::env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    if let Err(e) = run(args) {
        print_error(&format!("{}", e));

        // Print chain of errors
        for cause in e.chain().skip(1) {
            print_error(&format!("  Caused by: {}", cause));
        }

        process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let config = SessionConfig::from_args(&args)?;

    if !args.quiet && args.verbose {
        print_config(&config);
    }

    let session = Session::new(config);
    let stats = session.run()?;

    if args.stats {
        stats.print_summary();
    }

    Ok(())
}

/// Print configuration summary
fn print_config(config: &SessionConfig) {
    print_header("Configuration");

    print_info(&format!("Corpus:   {:?}", config.input));
    print_info(&format!("Query:    {}", describe(&config.command)));
    print_info(&format!("Output:   {:?}", config.output.as_deref().unwrap_or(Path::new("stdout"))));
    print_info(&format!("Sorted:   {}", config.sort_output));
    if let Some(limit) = config.limit {
        print_info(&format!("Limit:    {}", limit));
    }
}
