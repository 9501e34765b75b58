//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `wildsift` library that handles:
//! - Command-line argument parsing
//! - Logger initialization and the banner
//! - Reading the input lists and writing the output file
//! - Ctrl+C handling
//!
//! All core functionality is implemented in the library crate.

use std::io::Write;
use std::process;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use wildsift::app::{print_banner, print_error_statistics, print_run_summary};
use wildsift::config::Opt;
use wildsift::export::export_results;
use wildsift::initialization::{init_logger_with, init_probe};
use wildsift::input::read_lines;
use wildsift::{Config, Filter, FilterInput, FilterReport, ResultCallback};

#[tokio::main]
async fn main() -> Result<()> {
    let opt = Opt::parse();

    init_logger_with(opt.effective_log_level(), opt.log_format.clone())
        .context("Failed to initialize logger")?;

    if !opt.quiet {
        print_banner();
    }

    tokio::select! {
        result = run(&opt) => {
            if let Err(e) = result {
                eprintln!("wildsift error: {:#}", e);
                process::exit(1);
            }
            Ok(())
        }
        _ = tokio::signal::ctrl_c() => {
            eprintln!("Ctrl+C is pressed");
            process::exit(0);
        }
    }
}

async fn run(opt: &Opt) -> Result<()> {
    let input = FilterInput {
        wildcards: read_lines(&opt.wildcards)
            .await
            .context("Failed to read wildcards")?,
        subdomains: read_lines(&opt.subdomains)
            .await
            .context("Failed to read subdomains")?,
    };

    let config = Config::from(opt);
    let probe = init_probe(&config);

    // Results are printed as soon as they are known
    let print_result: ResultCallback = Arc::new(|subdomain: &str| {
        let mut stdout = std::io::stdout().lock();
        let _ = writeln!(stdout, "{subdomain}");
    });
    let filter = Filter::new(config, probe)?.with_result_callback(print_result);

    let report: FilterReport = filter.run(&input).await?;

    if let Some(path) = &opt.output {
        let written = export_results(&report, path, opt.output_format).await?;
        log::info!("Saved {} result(s) to {}", written, path.display());
    }

    print_run_summary(&report);
    print_error_statistics(filter.stats());
    Ok(())
}
