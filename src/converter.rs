//! Conversion orchestration: validate raw input, run the projection
//! transform, format results for display.

use crate::angle::{decimal_to_dms, format_dms};
use crate::projection;
use crate::types::{Axis, ConvertError, GeodeticCoordinate, ProjectedCoordinate};
use crate::validation::{check_lest97_bounds, check_wgs84_bounds, parse_number};

/// Presentation seam. The converter pushes display text and error messages
/// through this instead of owning any output channel itself.
pub trait OutputSink {
    fn display(&mut self, text: &str);
    fn display_error(&mut self, text: &str);
}

/// Convert L-Est97 planar input (X = northing, Y = easting, both in
/// meters) to WGS84 decimal degrees.
///
/// Both values are displayed through the sink as DMS strings, latitude
/// first. A result outside the Estonian extent is reported as a warning
/// but still returned; only unparseable input aborts the call.
pub fn lest97_to_wgs84(
    x_input: &str,
    y_input: &str,
    sink: &mut dyn OutputSink,
) -> Result<GeodeticCoordinate, ConvertError> {
    let x = parse_or_report(x_input, sink)?;
    let y = parse_or_report(y_input, sink)?;

    // The transform takes easting before northing; the X field holds the
    // northing.
    let (longitude, latitude) = projection::lest97_to_wgs84(y, x)
        .inspect_err(|e| sink.display_error(&e.to_string()))?;

    for (axis, value) in [(Axis::Longitude, longitude), (Axis::Latitude, latitude)] {
        if let Err(warning) = check_lest97_bounds(axis, value) {
            sink.display_error(&warning.to_string());
        }
    }

    sink.display(&format_dms(Axis::Latitude, &decimal_to_dms(latitude)));
    sink.display(&format_dms(Axis::Longitude, &decimal_to_dms(longitude)));

    Ok(GeodeticCoordinate {
        longitude,
        latitude,
    })
}

/// Convert WGS84 input to L-Est97 planar meters.
///
/// The X value feeds the transform's longitude slot and is bounds-checked
/// as a longitude, the Y value as a latitude; this axis assignment mirrors
/// the form wiring the converter was built for. Out-of-bounds input aborts
/// the call. The projected output is returned unchecked.
pub fn wgs84_to_lest97(
    x_input: &str,
    y_input: &str,
    sink: &mut dyn OutputSink,
) -> Result<ProjectedCoordinate, ConvertError> {
    let x = parse_or_report(x_input, sink)?;
    let y = parse_or_report(y_input, sink)?;

    bounds_or_report(Axis::Longitude, x, sink)?;
    bounds_or_report(Axis::Latitude, y, sink)?;

    let (x_out, y_out) = projection::wgs84_to_lest97(x, y)
        .inspect_err(|e| sink.display_error(&e.to_string()))?;

    sink.display(&x_out.to_string());
    sink.display(&y_out.to_string());

    Ok(ProjectedCoordinate { x: x_out, y: y_out })
}

fn parse_or_report(input: &str, sink: &mut dyn OutputSink) -> Result<f64, ConvertError> {
    parse_number(input).inspect_err(|e| sink.display_error(&e.to_string()))
}

fn bounds_or_report(
    axis: Axis,
    value: f64,
    sink: &mut dyn OutputSink,
) -> Result<(), ConvertError> {
    check_wgs84_bounds(axis, value).inspect_err(|e| sink.display_error(&e.to_string()))
}
