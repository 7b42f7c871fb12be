// Tue Jan 13 2026 - Alex

use clap::Parser;
use colored::Colorize;
use memory_signature::cli::{Args, CommandHandler, ScanReport};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();

    match run(&args) {
        Ok(report) if report.found() => ExitCode::SUCCESS,
        Ok(_) => ExitCode::from(1),
        Err(e) => {
            eprintln!("{} {:#}", "[!]".red(), e);
            ExitCode::from(2)
        }
    }
}

fn run(args: &Args) -> anyhow::Result<ScanReport> {
    args.validate().map_err(|e| anyhow::anyhow!(e))?;

    let handler = CommandHandler::new(args)?;
    handler.setup_logging();

    let report = handler.execute(args)?;
    handler.print_report(&report)?;
    Ok(report)
}
