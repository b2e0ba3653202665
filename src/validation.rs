//! Raw-input parsing and geographic bounds checks.

use crate::types::{Axis, ConvertError};

/// Strict numeric parsing of user input. Blank strings, surrounding
/// whitespace and anything that is not a plain floating-point literal are
/// rejected.
pub fn parse_number(input: &str) -> Result<f64, ConvertError> {
    input
        .parse::<f64>()
        .map_err(|_| ConvertError::InvalidNumber(input.to_string()))
}

/// WGS84 domain check: longitude -180°..180°, latitude -90°..90°,
/// bounds inclusive.
pub fn check_wgs84_bounds(axis: Axis, value: f64) -> Result<(), ConvertError> {
    let (min, max) = match axis {
        Axis::Latitude => (-90.0, 90.0),
        Axis::Longitude => (-180.0, 180.0),
    };

    check_range(axis, value, min, max)
}

/// Estonian extent check, applied to the WGS84-equivalent longitude and
/// latitude obtained from the inverse L-Est97 transform. Never applied to
/// raw planar input.
pub fn check_lest97_bounds(axis: Axis, value: f64) -> Result<(), ConvertError> {
    let (min, max) = match axis {
        Axis::Latitude => (57.57, 59.7),
        Axis::Longitude => (21.84, 28.0),
    };

    check_range(axis, value, min, max)
}

fn check_range(axis: Axis, value: f64, min: f64, max: f64) -> Result<(), ConvertError> {
    if value < min || value > max {
        Err(ConvertError::OutOfBounds(
            value,
            format!("{} range {}° to {}°", axis, min, max),
        ))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number_accepts_numeric_strings() {
        assert_eq!(parse_number("45.56363").unwrap(), 45.56363);
        assert_eq!(parse_number("7").unwrap(), 7.0);
        assert_eq!(parse_number("-24.5").unwrap(), -24.5);
        assert_eq!(parse_number("6584329.4").unwrap(), 6584329.4);
    }

    #[test]
    fn test_parse_number_rejects_blank_and_letters() {
        assert!(parse_number("dgdsh").is_err());
        assert!(parse_number("abc").is_err());
        assert!(parse_number("").is_err());
        assert!(parse_number("    ").is_err());
        assert!(parse_number(" 45.5 ").is_err());
    }

    #[test]
    fn test_parse_number_error_names_the_input() {
        let err = parse_number("abc").unwrap_err();
        assert!(err.to_string().contains("'abc'"));
    }

    #[test]
    fn test_wgs84_bounds() {
        assert!(check_wgs84_bounds(Axis::Longitude, 170.47).is_ok());
        assert!(check_wgs84_bounds(Axis::Latitude, 170.47).is_err());
        assert!(check_wgs84_bounds(Axis::Longitude, 58.637).is_ok());
        assert!(check_wgs84_bounds(Axis::Latitude, 58.637).is_ok());
        assert!(check_wgs84_bounds(Axis::Longitude, 190.47).is_err());
    }

    #[test]
    fn test_wgs84_bounds_inclusive() {
        assert!(check_wgs84_bounds(Axis::Longitude, 180.0).is_ok());
        assert!(check_wgs84_bounds(Axis::Longitude, -180.0).is_ok());
        assert!(check_wgs84_bounds(Axis::Latitude, 90.0).is_ok());
        assert!(check_wgs84_bounds(Axis::Latitude, -90.0).is_ok());
    }

    #[test]
    fn test_lest97_bounds() {
        assert!(check_lest97_bounds(Axis::Longitude, 30.637).is_err());
        assert!(check_lest97_bounds(Axis::Latitude, 30.637).is_err());
        assert!(check_lest97_bounds(Axis::Longitude, 58.637).is_err());
        assert!(check_lest97_bounds(Axis::Latitude, 58.637).is_ok());
        assert!(check_lest97_bounds(Axis::Longitude, 24.637).is_ok());
    }
}
