//! Command-line parsing and validation.

use crate::error::CliError;
use std::str::FromStr;

type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conversion {
    /// L-Est97 planar meters to WGS84 degrees (inverse transform).
    ToWgs84,
    /// WGS84 degrees to L-Est97 planar meters (forward transform).
    ToLest97,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Csv,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(OutputFormat::Text),
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!(
                "Invalid format '{}': expected text, csv or json",
                other
            )),
        }
    }
}

#[derive(Debug)]
pub struct Job {
    pub conversion: Conversion,
    pub x: String,
    pub y: String,
    pub format: OutputFormat,
}

fn usage() -> String {
    format!(
        "Usage: lestconv [OPTIONS] <X> <Y> <COMMAND>\n\n\
         Commands:\n\
         \x20 to-wgs84   Convert L-Est97 planar coordinates (m) to WGS84 degrees\n\
         \x20 to-lest97  Convert WGS84 coordinates to L-Est97 planar (m)\n\n\
         Options:\n\
         \x20 --format=<text|csv|json>  Output format (default: text)\n\
         \x20 -h, --help                Print help\n\
         \x20 -V, --version             Print version\n\n\
         Examples:\n\
         \x20 lestconv 6584352.8 537699.6 to-wgs84\n\
         \x20 lestconv 59.355 24.4343 to-lest97 --format=csv"
    )
}

fn version() -> String {
    format!("lestconv {}", env!("CARGO_PKG_VERSION"))
}

/// Looks like an option rather than a (possibly negative) number.
fn is_option(arg: &str) -> bool {
    arg.starts_with('-') && arg.parse::<f64>().is_err()
}

pub fn parse_cli(args: Vec<String>) -> CliResult<Job> {
    let mut positionals: Vec<String> = Vec::new();
    let mut format = OutputFormat::default();

    let mut iter = args.into_iter().skip(1);
    while let Some(arg) = iter.next() {
        if !is_option(&arg) {
            positionals.push(arg);
            continue;
        }

        match arg.as_str() {
            "-h" | "--help" => return Err(CliError::Exit(usage())),
            "-V" | "--version" => return Err(CliError::Exit(version())),
            _ if arg.starts_with("--format") => {
                let value = match arg.strip_prefix("--format=") {
                    Some(v) => v.to_string(),
                    None if arg == "--format" => iter
                        .next()
                        .ok_or_else(|| CliError::from("--format requires a value"))?,
                    None => return Err(format!("Unknown option: {}", arg).into()),
                };
                format = value.parse::<OutputFormat>().map_err(CliError::from)?;
            }
            _ => return Err(format!("Unknown option: {}", arg).into()),
        }
    }

    if positionals.is_empty() {
        return Err(CliError::Exit(usage()));
    }
    if positionals.len() != 3 {
        return Err(format!(
            "Expected <X> <Y> <COMMAND>, got {} argument(s). Try --help.",
            positionals.len()
        )
        .into());
    }

    let command = positionals.pop().unwrap_or_default();
    let conversion = match command.as_str() {
        "to-wgs84" => Conversion::ToWgs84,
        "to-lest97" => Conversion::ToLest97,
        other => return Err(format!("Unknown command: {}", other).into()),
    };

    let y = positionals.pop().unwrap_or_default();
    let x = positionals.pop().unwrap_or_default();

    Ok(Job {
        conversion,
        x,
        y,
        format,
    })
}
