//! L-Est97 / WGS84 coordinate converter CLI - entry point.

mod cli;
mod error;
mod output;

use crate::error::CliError;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    match cli::parse_cli(args) {
        Ok(job) => {
            if output::run(job).is_err() {
                // The failure was already reported through the output sink.
                std::process::exit(1);
            }
        }
        Err(CliError::Exit(message)) => println!("{}", message),
        Err(CliError::Message(message)) => {
            eprintln!("Error: {}", message);
            std::process::exit(1);
        }
    }
}
