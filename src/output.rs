//! Output rendering for text, CSV and JSON formats.

use crate::cli::{Conversion, Job, OutputFormat};
use lestconv::converter::{self, OutputSink};
use lestconv::types::{ConvertError, GeodeticCoordinate, ProjectedCoordinate};

/// Sink used by the CLI: display text is buffered for the text renderer,
/// warnings and validation errors go straight to stderr so stdout stays
/// machine-readable.
#[derive(Default)]
struct CliSink {
    lines: Vec<String>,
}

impl OutputSink for CliSink {
    fn display(&mut self, text: &str) {
        self.lines.push(text.to_string());
    }

    fn display_error(&mut self, text: &str) {
        eprintln!("{}", text);
    }
}

pub fn run(job: Job) -> Result<(), ConvertError> {
    let mut sink = CliSink::default();

    match job.conversion {
        Conversion::ToWgs84 => {
            let coord = converter::lest97_to_wgs84(&job.x, &job.y, &mut sink)?;
            print!("{}", render_geodetic(&coord, &sink.lines, job.format));
        }
        Conversion::ToLest97 => {
            let coord = converter::wgs84_to_lest97(&job.x, &job.y, &mut sink)?;
            print!("{}", render_projected(&coord, job.format));
        }
    }

    Ok(())
}

fn render_geodetic(coord: &GeodeticCoordinate, dms_lines: &[String], format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => {
            let mut out = String::new();
            for (label, line) in ["latitude ", "longitude"].iter().zip(dms_lines) {
                out.push_str(&format!("{}: {}\n", label, line));
            }
            out
        }
        OutputFormat::Csv => format!(
            "latitude,longitude\n{:.5},{:.5}\n",
            coord.latitude, coord.longitude
        ),
        OutputFormat::Json => format!(
            r#"{{"latitude":{},"longitude":{}}}"#,
            coord.latitude, coord.longitude
        ) + "\n",
    }
}

fn render_projected(coord: &ProjectedCoordinate, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => format!("x: {}\ny: {}\n", coord.x, coord.y),
        OutputFormat::Csv => format!("x,y\n{:.2},{:.2}\n", coord.x, coord.y),
        OutputFormat::Json => format!(r#"{{"x":{},"y":{}}}"#, coord.x, coord.y) + "\n",
    }
}
