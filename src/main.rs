use anyhow::Result;
use clap::Parser;
use colored::*;
use pystyle_rs::analyzer::StyleChecker;
use pystyle_rs::reporter;
use std::path::PathBuf;

/// Command line interface configuration using `clap`.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Python file or directory to check.
    /// A directory contributes every regular file directly inside it.
    path: PathBuf,

    /// Output raw JSON.
    /// If true, the full analysis result is printed in JSON format
    /// for machine parsing instead of the per-line report.
    #[arg(long)]
    json: bool,
}

/// Main entry point of the application.
///
/// Parses arguments, runs the checker over the given path, and prints either
/// the per-line report or the JSON-serialized result.
fn main() -> Result<()> {
    let cli = Cli::parse();

    let checker = StyleChecker::new();
    let result = checker.analyze(&cli.path)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        for report in &result.reports {
            reporter::print_report(report);
        }
        for failure in &result.failures {
            eprintln!(
                "{}",
                format!("{}: {}", failure.file.display(), failure.error).red()
            );
        }
    }

    Ok(())
}
