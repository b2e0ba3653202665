use std::fmt;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Invalid input '{0}': not a number or blank")]
    InvalidNumber(String),
    #[error("Coordinate out of bounds: {0} (expected {1})")]
    OutOfBounds(f64, String),
    #[error("Projection failed: {0}")]
    Projection(String),
}

/// Which geographic axis a value belongs to. Determines both the valid
/// domain and the compass suffix used for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Latitude,
    Longitude,
}

impl Axis {
    /// Compass suffix for a signed degree value: E/W for longitude,
    /// N/S for latitude.
    pub fn suffix(self, degrees: i32) -> &'static str {
        match (self, degrees < 0) {
            (Axis::Longitude, false) => "E",
            (Axis::Longitude, true) => "W",
            (Axis::Latitude, false) => "N",
            (Axis::Latitude, true) => "S",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Latitude => write!(f, "latitude"),
            Axis::Longitude => write!(f, "longitude"),
        }
    }
}

/// Degrees/minutes/seconds triple. The sign lives on `degrees`; minutes
/// and seconds are always non-negative magnitudes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dms {
    pub degrees: i32,
    pub minutes: u32,
    pub seconds: f64,
}

impl Dms {
    pub fn new(degrees: i32, minutes: u32, seconds: f64) -> Self {
        Self {
            degrees,
            minutes,
            seconds,
        }
    }
}

/// WGS84 longitude/latitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeodeticCoordinate {
    pub longitude: f64,
    pub latitude: f64,
}

/// L-Est97 planar pair in meters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedCoordinate {
    pub x: f64,
    pub y: f64,
}

impl fmt::Display for GeodeticCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.5}°, {:.5}°", self.longitude, self.latitude)
    }
}

impl fmt::Display for ProjectedCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} m, {:.2} m", self.x, self.y)
    }
}
