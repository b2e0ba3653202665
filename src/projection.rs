//! Thin wrapper around the external projection library.
//!
//! The two reference system definitions are fixed constants; only the
//! wiring (axis order, degree/radian conversion) lives here.

use crate::types::ConvertError;
use proj4rs::proj::Proj;
use proj4rs::transform::transform;
use std::sync::OnceLock;

/// L-Est97 / EPSG:3301: Lambert conformal conic over GRS80 with a null
/// shift to WGS84.
const EPSG_3301: &str = "+proj=lcc +lat_1=59.33333333333334 +lat_2=58 \
     +lat_0=57.51755393055556 +lon_0=24 +x_0=500000 +y_0=6375000 \
     +ellps=GRS80 +towgs84=0,0,0,0,0,0,0 +units=m +no_defs";

const WGS_84: &str = "+proj=longlat +datum=WGS84 +no_defs";

static LEST97_PROJ: OnceLock<Proj> = OnceLock::new();
static WGS84_PROJ: OnceLock<Proj> = OnceLock::new();

fn lest97_proj() -> &'static Proj {
    LEST97_PROJ.get_or_init(|| {
        Proj::from_proj_string(EPSG_3301).expect("built-in EPSG:3301 definition")
    })
}

fn wgs84_proj() -> &'static Proj {
    WGS84_PROJ.get_or_init(|| Proj::from_proj_string(WGS_84).expect("built-in WGS84 definition"))
}

/// Inverse direction: L-Est97 planar meters to WGS84 decimal degrees.
pub fn lest97_to_wgs84(easting: f64, northing: f64) -> Result<(f64, f64), ConvertError> {
    let mut point = (easting, northing, 0.0);
    transform(lest97_proj(), wgs84_proj(), &mut point)
        .map_err(|e| ConvertError::Projection(e.to_string()))?;

    Ok((point.0.to_degrees(), point.1.to_degrees()))
}

/// Forward direction: WGS84 decimal degrees to L-Est97 planar meters.
pub fn wgs84_to_lest97(longitude: f64, latitude: f64) -> Result<(f64, f64), ConvertError> {
    let mut point = (longitude.to_radians(), latitude.to_radians(), 0.0);
    transform(wgs84_proj(), lest97_proj(), &mut point)
        .map_err(|e| ConvertError::Projection(e.to_string()))?;

    Ok((point.0, point.1))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() < tolerance,
            "expected {} within {} of {}",
            actual,
            tolerance,
            expected
        );
    }

    #[test]
    fn test_inverse_transform_reference_points() {
        let (lon, lat) = lest97_to_wgs84(539175.7, 6585357.3).unwrap();
        assert_close(lon, 24.689714139852164, 1e-5);
        assert_close(lat, 59.40432479193938, 1e-5);

        let (lon, lat) = lest97_to_wgs84(537699.6, 6584352.8).unwrap();
        assert_close(lon, 24.663553211170424, 1e-5);
        assert_close(lat, 59.39544214334204, 1e-5);
    }

    #[test]
    fn test_inverse_transform_far_west_of_grid_origin() {
        // A tiny easting lands far outside Estonia but is still a valid
        // point on the projection surface.
        let (lon, lat) = lest97_to_wgs84(53769.4, 6584329.4).unwrap();
        assert_close(lon, 16.18126153699928, 1e-5);
        assert_close(lat, 59.16318263878547, 1e-5);
    }

    #[test]
    fn test_forward_inverse_round_trip() {
        let (x, y) = wgs84_to_lest97(24.689714139852164, 59.40432479193938).unwrap();
        assert_close(x, 539175.7, 0.01);
        assert_close(y, 6585357.3, 0.01);

        let (lon, lat) = lest97_to_wgs84(x, y).unwrap();
        assert_close(lon, 24.689714139852164, 1e-9);
        assert_close(lat, 59.40432479193938, 1e-9);
    }
}
