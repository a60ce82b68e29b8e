//! Location identifiers and positions.

use std::fmt;

/// Maximum length of a location code.
const MAX_CODE_LEN: usize = 16;

/// Mean Earth radius used for great-circle distances.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Error returned when parsing an invalid location code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid location code: {reason}")]
pub struct InvalidLocationCode {
    reason: &'static str,
}

/// Error returned when constructing a location with bad coordinates.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InvalidLocation {
    #[error("latitude {0} outside [-90, 90]")]
    Latitude(f64),

    #[error("longitude {0} outside [-180, 180]")]
    Longitude(f64),
}

/// An opaque location identifier such as an airport code.
///
/// Codes are 1 to 16 ASCII letters or digits. Codes compare exactly; use
/// [`LocationCode::parse_normalized`] for user input.
///
/// # Examples
///
/// ```
/// use route_server::domain::LocationCode;
///
/// let kbp = LocationCode::parse("KBP").unwrap();
/// assert_eq!(kbp.as_str(), "KBP");
///
/// assert!(LocationCode::parse("").is_err());
/// assert!(LocationCode::parse("K B P").is_err());
/// assert_eq!(LocationCode::parse_normalized(" kbp ").unwrap(), kbp);
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LocationCode(String);

impl LocationCode {
    /// Parse a location code, rejecting anything but 1-16 ASCII alphanumerics.
    pub fn parse(s: &str) -> Result<Self, InvalidLocationCode> {
        if s.is_empty() {
            return Err(InvalidLocationCode {
                reason: "must not be empty",
            });
        }
        if s.len() > MAX_CODE_LEN {
            return Err(InvalidLocationCode {
                reason: "must be at most 16 characters",
            });
        }
        if !s.bytes().all(|b| b.is_ascii_alphanumeric()) {
            return Err(InvalidLocationCode {
                reason: "must be ASCII letters or digits",
            });
        }
        Ok(Self(s.to_string()))
    }

    /// Parse after trimming whitespace and upper-casing.
    pub fn parse_normalized(s: &str) -> Result<Self, InvalidLocationCode> {
        Self::parse(&s.trim().to_ascii_uppercase())
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for LocationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LocationCode({})", self.0)
    }
}

impl fmt::Display for LocationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A named place on the map that legs depart from and arrive at.
///
/// Coordinates are only used for reporting distances; search compares
/// locations by code.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    code: LocationCode,
    name: String,
    latitude: f64,
    longitude: f64,
}

impl Location {
    /// Create a location, validating its coordinates.
    pub fn new(
        code: LocationCode,
        name: impl Into<String>,
        latitude: f64,
        longitude: f64,
    ) -> Result<Self, InvalidLocation> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(InvalidLocation::Latitude(latitude));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(InvalidLocation::Longitude(longitude));
        }
        Ok(Self {
            code,
            name: name.into(),
            latitude,
            longitude,
        })
    }

    pub fn code(&self) -> &LocationCode {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Great-circle distance to another location in kilometres (haversine).
    pub fn distance_km(&self, other: &Location) -> f64 {
        let d_lat = (other.latitude - self.latitude).to_radians();
        let d_lon = (other.longitude - self.longitude).to_radians();
        let a = (d_lat / 2.0).sin().powi(2)
            + self.latitude.to_radians().cos()
                * other.latitude.to_radians().cos()
                * (d_lon / 2.0).sin().powi(2);
        let a = a.clamp(0.0, 1.0);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_KM * c
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.code)
    }
}
