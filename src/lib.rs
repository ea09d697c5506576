// Copyright (c) 2024-2025 Ken Barker

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"),
// to deal in the Software without restriction, including without limitation the
// rights to use, copy, modify, merge, publish, distribute, sublicense, and/or
// sell copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN
// THE SOFTWARE.

//! geotranslation
//!
//! A library for calculating great circle bearings, midpoints and distances
//! between positions given as latitudes and longitudes in degrees.
//!
//! The Earth is modelled as a sphere with the
//! [mean radius](https://en.wikipedia.org/wiki/Earth_radius#Mean_radius)
//! of 6371 km. For geodesic accuracy on the WGS-84 ellipsoid use an
//! ellipsoidal library instead.
//!
//! ## Distances
//!
//! The shortest path between two points on the surface of a sphere is a
//! [great circle](https://en.wikipedia.org/wiki/Great_circle) arc.
//! The library provides three ways to calculate its length:
//!
//! - `haversine_distance` - numerically stable for all distances, the
//!   recommended default;
//! - `spherical_distance` - the spherical law of cosines;
//! - `equirectangular_distance` - a planar approximation, the cheapest but
//!   only valid over short distances away from the poles.
//!
//! See: [Calculate distance, bearing and more between Latitude/Longitude points](http://www.movable-type.co.uk/scripts/latlong.html).
//!
//! ## Bearings and positions
//!
//! - `initial_bearing` and `final_bearing` of the path between two positions;
//! - `compass_direction`, a label for the final bearing, e.g. `N45.0E`;
//! - `midpoint` of the path between two positions;
//! - `cross_track_distance` of a position from the path between two positions.
//!
//! ## Design
//!
//! All the calculations are pure functions of their arguments.
//! The `distance` and `position` modules calculate arc lengths on a unit
//! sphere, a `Sphere` scales them by its radius.
//! The static `EARTH` represents the mean Earth `Sphere` which is used by the
//! functions at the root of the crate.
//!
//! `GeoPoint`s are not validated on construction: latitudes should be in the
//! range -90 to 90 degrees and longitudes in the range -180 to 180 degrees.
//! Use `GeoPoint::try_new` to validate positions from untrusted sources.
//!
//! The library depends upon the following crates:
//!
//! - [angle-sc](https://crates.io/crates/angle-sc) - to define `Degrees` and
//!   `Radians`;
//! - [unit-sphere](https://crates.io/crates/unit-sphere) - to define `LatLong`
//!   for interoperability with other navigation libraries;
//! - [icao_units](https://crates.io/crates/icao-units) - to define `Metres` and
//!   `NauticalMiles` and perform conversions to them;
//! - [libm](https://crates.io/crates/libm) - for trigonometric functions.
//!
//! The library is declared [no_std](https://docs.rust-embedded.org/book/intro/no-std.html)
//! so it can be used in embedded applications.

#![cfg_attr(not(test), no_std)]

extern crate angle_sc;
extern crate icao_units;
extern crate unit_sphere;

pub mod bearing;
pub mod conversion;
pub mod distance;
pub mod position;
pub mod sphere;

pub use angle_sc::{Degrees, Radians, Validate};
pub use bearing::{compass_direction, final_bearing, initial_bearing, CompassDirection, Quadrant};
pub use conversion::{to_degrees, to_radians};
pub use icao_units::non_si::NauticalMiles;
pub use icao_units::si::Metres;
pub use position::midpoint;
pub use sphere::{Kilometres, Sphere};
pub use unit_sphere::LatLong;

use core::fmt;

/// The errors returned when validating positions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Error {
    /// A latitude or longitude is not finite or is out of range.
    InvalidCoordinate {
        /// The latitude in degrees.
        latitude: f64,
        /// The longitude in degrees.
        longitude: f64,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCoordinate {
                latitude,
                longitude,
            } => write!(f, "invalid coordinate: ({latitude}, {longitude})"),
        }
    }
}

impl core::error::Error for Error {}

/// A position on the surface of a sphere: a latitude and longitude in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeoPoint {
    /// The latitude, North is positive.
    lat: Degrees,
    /// The longitude, East is positive.
    lon: Degrees,
}

impl Validate for GeoPoint {
    /// A `GeoPoint` is valid if the equivalent `LatLong` is valid.
    fn is_valid(&self) -> bool {
        LatLong::from(*self).is_valid()
    }
}

impl GeoPoint {
    /// Construct a `GeoPoint`.
    /// @pre |lat| <= 90.0 degrees and |lon| <= 180.0 degrees, not checked.
    /// * `lat` - the latitude.
    /// * `lon` - the longitude.
    #[must_use]
    pub const fn new(lat: Degrees, lon: Degrees) -> Self {
        Self { lat, lon }
    }

    /// Construct a `GeoPoint`, validating the latitude and longitude.
    /// * `lat` - the latitude.
    /// * `lon` - the longitude.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidCoordinate` if either value is out of range
    /// or not a number.
    ///
    /// # Examples
    /// ```
    /// use geotranslation::{Degrees, Error, GeoPoint};
    ///
    /// assert!(GeoPoint::try_new(Degrees(51.5), Degrees(-0.12)).is_ok());
    /// assert_eq!(
    ///     Err(Error::InvalidCoordinate { latitude: 91.0, longitude: 0.0 }),
    ///     GeoPoint::try_new(Degrees(91.0), Degrees(0.0))
    /// );
    /// ```
    pub fn try_new(lat: Degrees, lon: Degrees) -> Result<Self, Error> {
        let point = Self::new(lat, lon);
        if point.is_valid() {
            Ok(point)
        } else {
            Err(Error::InvalidCoordinate {
                latitude: lat.0,
                longitude: lon.0,
            })
        }
    }

    /// The latitude.
    #[must_use]
    pub const fn lat(&self) -> Degrees {
        self.lat
    }

    /// The longitude.
    #[must_use]
    pub const fn lon(&self) -> Degrees {
        self.lon
    }

    /// The haversine distance to `other` on the `EARTH`.
    #[must_use]
    pub fn distance_to(&self, other: &Self) -> Kilometres {
        EARTH.haversine(self, other)
    }

    /// The initial bearing of the great circle path to `other`.
    #[must_use]
    pub fn initial_bearing_to(&self, other: &Self) -> Degrees {
        bearing::initial_bearing(self, other)
    }

    /// The final bearing of the great circle path to `other`.
    #[must_use]
    pub fn final_bearing_to(&self, other: &Self) -> Degrees {
        bearing::final_bearing(self, other)
    }

    /// The `CompassDirection` of the final bearing to `other`.
    #[must_use]
    pub fn compass_direction_to(&self, other: &Self) -> CompassDirection {
        bearing::compass_direction(self, other)
    }

    /// The midpoint of the great circle path to `other`.
    #[must_use]
    pub fn midpoint_to(&self, other: &Self) -> Self {
        position::midpoint(self, other)
    }

    /// The across track distance on the `EARTH` from the great circle path
    /// between `start` and `end`, negative if left of the path.
    #[must_use]
    pub fn cross_track_distance_to(&self, start: &Self, end: &Self) -> Kilometres {
        EARTH.cross_track_distance(self, start, end)
    }
}

impl TryFrom<(f64, f64)> for GeoPoint {
    type Error = Error;

    /// The tuple holds the latitude then the longitude, in degrees.
    fn try_from(lat_lon: (f64, f64)) -> Result<Self, Self::Error> {
        Self::try_new(Degrees(lat_lon.0), Degrees(lat_lon.1))
    }
}

impl From<&LatLong> for GeoPoint {
    fn from(a: &LatLong) -> Self {
        Self::new(a.lat(), a.lon())
    }
}

impl From<GeoPoint> for LatLong {
    fn from(a: GeoPoint) -> Self {
        Self::new(a.lat, a.lon)
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.lat.0, self.lon.0)
    }
}

/// The mean Earth `Sphere`.
pub static EARTH: Sphere = Sphere::mean_earth();

/// Calculate the great circle distance between a pair of positions on the
/// `EARTH` using the spherical law of cosines.
/// * `a`, `b` - the start and finish positions.
#[must_use]
pub fn spherical_distance(a: &GeoPoint, b: &GeoPoint) -> Kilometres {
    EARTH.spherical_law_of_cosines(a, b)
}

/// Calculate the distance between a pair of positions on the `EARTH` using
/// the equirectangular approximation.
/// * `a`, `b` - the start and finish positions.
#[must_use]
pub fn equirectangular_distance(a: &GeoPoint, b: &GeoPoint) -> Kilometres {
    EARTH.equirectangular(a, b)
}

/// Calculate the great circle distance between a pair of positions on the
/// `EARTH` using the haversine formula.
/// * `a`, `b` - the start and finish positions.
///
/// # Examples
/// ```
/// use geotranslation::*;
/// use angle_sc::is_within_tolerance;
///
/// let lizard_point = GeoPoint::new(Degrees(50.06632), Degrees(-5.71476));
/// let john_o_groats = GeoPoint::new(Degrees(58.64402), Degrees(-3.07000));
///
/// let distance = haversine_distance(&lizard_point, &john_o_groats);
/// assert!(is_within_tolerance(968.9, distance.0, 0.05));
///
/// let distance_nm = NauticalMiles::from(distance);
/// println!("Lizard Point-John o' Groats distance: {:?}", distance_nm);
/// ```
#[must_use]
pub fn haversine_distance(a: &GeoPoint, b: &GeoPoint) -> Kilometres {
    EARTH.haversine(a, b)
}

/// Calculate the across track distance of a position from the great circle
/// path between a pair of positions on the `EARTH`.
/// * `point` - the position.
/// * `start`, `end` - the start and finish positions of the path.
///
/// returns the across track distance, positive if `point` is to the right
/// of the path, negative if it is to the left.
///
/// # Examples
/// ```
/// use geotranslation::*;
/// use angle_sc::is_within_tolerance;
///
/// let istanbul = GeoPoint::new(Degrees(42.0), Degrees(29.0));
/// let washington = GeoPoint::new(Degrees(39.0), Degrees(-77.0));
/// let reyjavik = GeoPoint::new(Degrees(64.0), Degrees(-22.0));
///
/// // Reyjavik is to the right of the Istanbul-Washington path
/// let xtd = cross_track_distance(&reyjavik, &istanbul, &washington);
/// assert!(is_within_tolerance(1013.726, xtd.0, 1e-3));
/// ```
#[must_use]
pub fn cross_track_distance(point: &GeoPoint, start: &GeoPoint, end: &GeoPoint) -> Kilometres {
    EARTH.cross_track_distance(point, start, end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use angle_sc::is_within_tolerance;

    const LIZARD_POINT: GeoPoint = GeoPoint::new(Degrees(50.06632), Degrees(-5.71476));
    const JOHN_O_GROATS: GeoPoint = GeoPoint::new(Degrees(58.64402), Degrees(-3.07000));

    #[test]
    fn test_geopoint_traits() {
        let a = GeoPoint::new(Degrees(42.0), Degrees(29.0));
        assert_eq!(42.0, a.lat().0);
        assert_eq!(29.0, a.lon().0);
        assert!(a.is_valid());

        let a_clone = a;
        assert!(a_clone == a);

        assert_eq!("(42, 29)", a.to_string());
        println!("GeoPoint: {:?}", a);
    }

    #[test]
    fn test_geopoint_validation() {
        assert!(GeoPoint::try_new(Degrees(90.0), Degrees(180.0)).is_ok());
        assert!(GeoPoint::try_new(Degrees(-90.0), Degrees(-180.0)).is_ok());

        assert_eq!(
            Err(Error::InvalidCoordinate {
                latitude: -90.5,
                longitude: 0.0
            }),
            GeoPoint::try_new(Degrees(-90.5), Degrees(0.0))
        );
        assert!(GeoPoint::try_new(Degrees(0.0), Degrees(180.5)).is_err());
        assert!(GeoPoint::try_new(Degrees(f64::NAN), Degrees(0.0)).is_err());
        assert!(GeoPoint::try_new(Degrees(0.0), Degrees(f64::INFINITY)).is_err());

        // invalid positions can still be constructed, unchecked
        assert!(!GeoPoint::new(Degrees(100.0), Degrees(0.0)).is_valid());

        let result = GeoPoint::try_from((51.5, -0.12));
        assert_eq!(Ok(GeoPoint::new(Degrees(51.5), Degrees(-0.12))), result);
        assert!(GeoPoint::try_from((51.5, 200.0)).is_err());
    }

    #[test]
    fn test_error_display() {
        let error = Error::InvalidCoordinate {
            latitude: 91.0,
            longitude: 0.5,
        };
        assert_eq!("invalid coordinate: (91, 0.5)", error.to_string());
        println!("Error: {:?}", error);
    }

    #[test]
    fn test_geopoint_lat_long_conversions() {
        let lat_long = LatLong::new(Degrees(64.0), Degrees(-22.0));
        let a = GeoPoint::from(&lat_long);
        assert_eq!(64.0, a.lat().0);
        assert_eq!(-22.0, a.lon().0);

        let b = LatLong::from(a);
        assert_eq!(64.0, b.lat().0);
        assert_eq!(-22.0, b.lon().0);
    }

    #[test]
    fn test_geopoint_validity_matches_lat_long() {
        let values = [-180.5, -180.0, -90.5, -90.0, 0.0, 90.0, 90.5, 180.0, 180.5, f64::NAN];
        for lat in values {
            for lon in values {
                let a = GeoPoint::new(Degrees(lat), Degrees(lon));
                let expected = unit_sphere::is_valid_latitude(lat)
                    && unit_sphere::is_valid_longitude(lon);
                assert_eq!(expected, a.is_valid());
                assert_eq!(LatLong::new(Degrees(lat), Degrees(lon)).is_valid(), a.is_valid());
                assert_eq!(expected, GeoPoint::try_from((lat, lon)).is_ok());
            }
        }
    }

    #[test]
    fn test_distances() {
        let result = haversine_distance(&LIZARD_POINT, &JOHN_O_GROATS);
        assert!(is_within_tolerance(968.9, result.0, 0.05));
        assert!(is_within_tolerance(968.87583486913, result.0, 1e-9));

        let result = spherical_distance(&LIZARD_POINT, &JOHN_O_GROATS);
        assert!(is_within_tolerance(968.8758348691314, result.0, 1e-9));

        let result = equirectangular_distance(&LIZARD_POINT, &JOHN_O_GROATS);
        assert!(is_within_tolerance(969.0713611057013, result.0, 1e-9));

        let result = LIZARD_POINT.distance_to(&JOHN_O_GROATS);
        assert!(is_within_tolerance(968.87583486913, result.0, 1e-9));
    }

    #[test]
    fn test_geopoint_bearings() {
        let result = LIZARD_POINT.initial_bearing_to(&JOHN_O_GROATS);
        assert!(is_within_tolerance(9.119704899250467, result.0, 1e-9));

        let result = LIZARD_POINT.final_bearing_to(&JOHN_O_GROATS);
        assert!(is_within_tolerance(189.11970489925048, result.0, 1e-9));

        let result = LIZARD_POINT.compass_direction_to(&JOHN_O_GROATS);
        assert_eq!("S9.1W", result.to_string());
    }

    #[test]
    fn test_geopoint_midpoint() {
        let london = GeoPoint::new(Degrees(52.205), Degrees(0.119));
        let paris = GeoPoint::new(Degrees(48.857), Degrees(2.351));
        let result = london.midpoint_to(&paris);
        assert!(is_within_tolerance(50.536, result.lat().0, 0.01));
        assert!(is_within_tolerance(1.274, result.lon().0, 0.01));
        assert_eq!(result, midpoint(&london, &paris));
    }

    #[test]
    fn test_cross_track_distance() {
        // Karney's example positions
        let istanbul = GeoPoint::new(Degrees(42.0), Degrees(29.0));
        let washington = GeoPoint::new(Degrees(39.0), Degrees(-77.0));
        let reyjavik = GeoPoint::new(Degrees(64.0), Degrees(-22.0));

        let xtd = cross_track_distance(&reyjavik, &istanbul, &washington);
        assert!(is_within_tolerance(1013.7261479460382, xtd.0, 1e-6));

        // opposite path
        let xtd = reyjavik.cross_track_distance_to(&washington, &istanbul);
        assert!(xtd.0 < 0.0);

        // a position on the path
        let xtd = istanbul.cross_track_distance_to(&istanbul, &washington);
        assert!(is_within_tolerance(0.0, xtd.0, 1e-3));
    }
}
