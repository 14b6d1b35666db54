//! Geographic coordinate types.

use std::fmt;

/// Mean Earth radius in kilometres, used for great-circle distances.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Error returned when constructing coordinates outside valid ranges.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("invalid coordinates: {reason}")]
pub struct InvalidCoordinates {
    reason: &'static str,
}

/// A validated latitude/longitude pair in decimal degrees.
///
/// Latitude is restricted to `-90.0..=90.0` and longitude to
/// `-180.0..=180.0`, both finite. Any `Coordinates` value is valid by
/// construction.
///
/// # Examples
///
/// ```
/// use circuit_server::domain::Coordinates;
///
/// let hampi = Coordinates::new(15.335, 76.462).unwrap();
/// assert_eq!(hampi.latitude(), 15.335);
///
/// // Out-of-range latitude is rejected
/// assert!(Coordinates::new(91.0, 0.0).is_err());
/// ```
#[derive(Clone, Copy, PartialEq)]
pub struct Coordinates {
    lat: f64,
    lon: f64,
}

impl Coordinates {
    /// Construct coordinates from decimal degrees.
    pub fn new(lat: f64, lon: f64) -> Result<Self, InvalidCoordinates> {
        if !lat.is_finite() || !lon.is_finite() {
            return Err(InvalidCoordinates {
                reason: "latitude and longitude must be finite",
            });
        }
        if !(-90.0..=90.0).contains(&lat) {
            return Err(InvalidCoordinates {
                reason: "latitude must be within -90..90 degrees",
            });
        }
        if !(-180.0..=180.0).contains(&lon) {
            return Err(InvalidCoordinates {
                reason: "longitude must be within -180..180 degrees",
            });
        }
        Ok(Coordinates { lat, lon })
    }

    /// Latitude in decimal degrees.
    pub fn latitude(&self) -> f64 {
        self.lat
    }

    /// Longitude in decimal degrees.
    pub fn longitude(&self) -> f64 {
        self.lon
    }

    /// Great-circle distance to `other` in kilometres (Haversine formula).
    ///
    /// Uses a mean Earth radius of 6371 km.
    pub fn distance_km(&self, other: &Coordinates) -> f64 {
        let d_lat = (other.lat - self.lat).to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let a = (d_lat / 2.0).sin().powi(2)
            + self.lat.to_radians().cos()
                * other.lat.to_radians().cos()
                * (d_lon / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        EARTH_RADIUS_KM * c
    }
}

impl fmt::Debug for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Coordinates({}, {})", self.lat, self.lon)
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}, {:.4}", self.lat, self.lon)
    }
}
