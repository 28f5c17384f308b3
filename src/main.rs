use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use vantage_blog::cli::Cli;
use vantage_blog::output::{self, OutputFormat};

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries progress lines or the JSON envelope
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match vantage_blog::cli::generate::run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::print_error(&format!("{e:#}"), OutputFormat::from_json_flag(cli.json));
            ExitCode::FAILURE
        }
    }
}
