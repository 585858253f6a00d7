//! Main entry point for the pqc-csr command

use csrgen::{Cli, error_report, run, usage};
use csrgen_common::LoggingTransformer;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    LoggingTransformer::init();

    let cli = match Cli::try_parse_with_listing(std::env::args_os()) {
        Ok(cli) => cli,
        Err(e) => e.exit(),
    };
    let json = cli.json;

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if json {
                println!("{}", error_report(&e));
            } else if e.is_usage() {
                eprintln!("Error: {e}");
                eprintln!("{}", usage::usage_text());
            } else {
                eprintln!("Fatal error: {e}");
            }
            ExitCode::from(e.exit_code())
        }
    }
}
