//! Decimal-degree to degrees/minutes/seconds conversion and display.

use crate::types::{Axis, Dms};

/// Split a signed decimal-degree value into a DMS triple.
///
/// The degree part is truncated toward zero and keeps the sign; minutes
/// and seconds are non-negative magnitudes. Seconds are rounded to two
/// decimal places. When the seconds round to exactly 60.0 no carry into
/// the minutes is performed; callers that need canonical triples must
/// normalize themselves.
pub fn decimal_to_dms(value: f64) -> Dms {
    let degrees = value.trunc() as i32;
    let total_minutes = value.fract() * 60.0;
    let minutes = total_minutes.trunc().abs() as u32;
    let seconds = round_to(total_minutes.fract().abs() * 60.0, 2);

    Dms::new(degrees, minutes, seconds)
}

/// Recombine a DMS triple into decimal degrees, rounded to three decimal
/// places. No sign-consistency check between the components; minutes and
/// seconds are expected to be non-negative.
pub fn dms_to_decimal(dms: &Dms) -> f64 {
    round_to(
        f64::from(dms.degrees) + f64::from(dms.minutes) / 60.0 + dms.seconds / 3600.0,
        3,
    )
}

/// Render a DMS triple as a compass-suffixed string, e.g. `24° 36' 18" E`.
/// Seconds keep their natural decimal representation (no fixed padding).
pub fn format_dms(axis: Axis, dms: &Dms) -> String {
    format!(
        "{}° {}' {}\" {}",
        dms.degrees.abs(),
        dms.minutes,
        dms.seconds,
        axis.suffix(dms.degrees)
    )
}

fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}
