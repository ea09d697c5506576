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

//! The sphere module contains the `Sphere` type, which holds the radius used
//! to convert great circle arc lengths into distances, and the `Kilometres`
//! distance unit.

#![allow(clippy::suboptimal_flops)]

pub mod earth;

use crate::{bearing, distance, position, GeoPoint, Metres, NauticalMiles};
use angle_sc::Radians;
use core::fmt;

/// A distance in kilometres.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Kilometres(pub f64);

impl Kilometres {
    /// The absolute value of the distance.
    /// # Examples
    /// ```
    /// use geotranslation::{cross_track_distance, Degrees, GeoPoint};
    ///
    /// let start = GeoPoint::new(Degrees(0.0), Degrees(0.0));
    /// let end = GeoPoint::new(Degrees(0.0), Degrees(10.0));
    /// let north = GeoPoint::new(Degrees(1.0), Degrees(5.0));
    ///
    /// // North of an Eastbound path is to the left, i.e. negative
    /// let xtd = cross_track_distance(&north, &start, &end);
    /// assert!(xtd.0 < 0.0);
    /// assert_eq!(-xtd.0, xtd.abs().0);
    /// ```
    #[must_use]
    pub fn abs(self) -> Self {
        Self(libm::fabs(self.0))
    }
}

impl fmt::Display for Kilometres {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} km", self.0)
    }
}

impl From<Kilometres> for Metres {
    fn from(a: Kilometres) -> Self {
        Self(a.0 * 1000.0)
    }
}

impl From<Metres> for Kilometres {
    fn from(a: Metres) -> Self {
        Self(a.0 / 1000.0)
    }
}

impl From<Kilometres> for NauticalMiles {
    fn from(a: Kilometres) -> Self {
        Self::from(Metres::from(a))
    }
}

/// A sphere of a given radius.
///
/// All of the distance calculations are performed on a unit sphere and
/// scaled by the radius of the `Sphere`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sphere {
    /// The radius of the sphere.
    radius: Kilometres,
}

impl Sphere {
    /// Constructor.
    /// * `radius` - the radius of the `Sphere`.
    #[must_use]
    pub const fn new(radius: Kilometres) -> Self {
        Self { radius }
    }

    /// Construct a `Sphere` with the mean radius of the Earth.
    #[must_use]
    pub const fn mean_earth() -> Self {
        Self::new(earth::MEAN_RADIUS)
    }

    /// The radius of the sphere.
    #[must_use]
    pub const fn radius(&self) -> Kilometres {
        self.radius
    }

    /// Convert a great circle arc length on the unit sphere to a distance
    /// on this `Sphere`.
    /// * `arc_length` - the arc length in radians.
    #[must_use]
    pub fn arc_length_to_distance(&self, arc_length: Radians) -> Kilometres {
        Kilometres(arc_length.0 * self.radius.0)
    }

    /// Convert a distance on this `Sphere` to a great circle arc length on
    /// the unit sphere.
    /// * `distance` - the distance along the surface.
    /// # Examples
    /// ```
    /// use geotranslation::{distance, Degrees, GeoPoint, EARTH};
    /// use angle_sc::is_within_tolerance;
    ///
    /// let a = GeoPoint::new(Degrees(42.0), Degrees(29.0));
    /// let b = GeoPoint::new(Degrees(39.0), Degrees(-77.0));
    ///
    /// let length = EARTH.haversine(&a, &b);
    /// let arc_length = EARTH.distance_to_arc_length(length);
    /// assert!(is_within_tolerance(
    ///     distance::haversine(&a, &b).0,
    ///     arc_length.0,
    ///     4.0 * f64::EPSILON
    /// ));
    /// ```
    #[must_use]
    pub fn distance_to_arc_length(&self, distance: Kilometres) -> Radians {
        Radians(distance.0 / self.radius.0)
    }

    /// Calculate the great circle distance between a pair of positions using
    /// the spherical law of cosines.
    /// * `a`, `b` - the start and finish positions.
    #[must_use]
    pub fn spherical_law_of_cosines(&self, a: &GeoPoint, b: &GeoPoint) -> Kilometres {
        self.arc_length_to_distance(distance::spherical_law_of_cosines(a, b))
    }

    /// Calculate the distance between a pair of positions using the
    /// equirectangular approximation.
    /// Only suitable for short distances away from the poles.
    /// * `a`, `b` - the start and finish positions.
    #[must_use]
    pub fn equirectangular(&self, a: &GeoPoint, b: &GeoPoint) -> Kilometres {
        self.arc_length_to_distance(distance::equirectangular(a, b))
    }

    /// Calculate the great circle distance between a pair of positions using
    /// the haversine formula.
    /// * `a`, `b` - the start and finish positions.
    #[must_use]
    pub fn haversine(&self, a: &GeoPoint, b: &GeoPoint) -> Kilometres {
        self.arc_length_to_distance(distance::haversine(a, b))
    }

    /// Calculate the signed across track distance of a position from the
    /// great circle path between a pair of positions.
    /// * `point` - the position.
    /// * `start`, `end` - the start and finish positions of the path.
    ///
    /// returns the across track distance, positive if `point` is to the
    /// right of the path, negative if it is to the left.
    #[must_use]
    pub fn cross_track_distance(
        &self,
        point: &GeoPoint,
        start: &GeoPoint,
        end: &GeoPoint,
    ) -> Kilometres {
        let arc_distance = distance::spherical_law_of_cosines(start, point);
        let bearing_to_point = bearing::initial_bearing(start, point);
        let path_bearing = bearing::initial_bearing(start, end);
        self.arc_length_to_distance(position::cross_track_angle(
            arc_distance,
            bearing_to_point,
            path_bearing,
        ))
    }
}

impl Default for Sphere {
    fn default() -> Self {
        Self::mean_earth()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use angle_sc::{is_within_tolerance, Degrees};

    #[test]
    fn test_sphere_mean_earth() {
        let sphere = Sphere::mean_earth();
        assert_eq!(earth::MEAN_RADIUS, sphere.radius());
        assert_eq!(6371.0, sphere.radius().0);
        assert_eq!(sphere, Sphere::default());

        let sphere_clone = sphere;
        assert!(sphere_clone == sphere);
        println!("Sphere: {:?}", sphere);
    }

    #[test]
    fn test_arc_length_conversions() {
        let sphere = Sphere::new(Kilometres(6372.8));
        let distance = sphere.arc_length_to_distance(Radians(core::f64::consts::PI));
        assert!(is_within_tolerance(
            6372.8 * core::f64::consts::PI,
            distance.0,
            1e-9
        ));
        let arc_length = sphere.distance_to_arc_length(distance);
        assert!(is_within_tolerance(
            core::f64::consts::PI,
            arc_length.0,
            f64::EPSILON
        ));
    }

    #[test]
    fn test_kilometres_conversions() {
        let distance = Kilometres(1.852);
        assert!(is_within_tolerance(1852.0, Metres::from(distance).0, 1e-9));
        assert!(is_within_tolerance(
            1.0,
            NauticalMiles::from(distance).0,
            1e-12
        ));
        assert_eq!(Kilometres(2.5), Kilometres::from(Metres(2500.0)));
        assert_eq!(Kilometres(3.0), Kilometres(-3.0).abs());
        assert_eq!("1.5 km", Kilometres(1.5).to_string());
    }

    #[test]
    fn test_sphere_distances_scale_with_radius() {
        let a = GeoPoint::new(Degrees(0.0), Degrees(0.0));
        let b = GeoPoint::new(Degrees(0.0), Degrees(90.0));

        let unit = Sphere::new(Kilometres(1.0));
        assert!(is_within_tolerance(
            core::f64::consts::FRAC_PI_2,
            unit.haversine(&a, &b).0,
            4.0 * f64::EPSILON
        ));
        assert!(is_within_tolerance(
            core::f64::consts::FRAC_PI_2,
            unit.spherical_law_of_cosines(&a, &b).0,
            4.0 * f64::EPSILON
        ));
        assert!(is_within_tolerance(
            core::f64::consts::FRAC_PI_2,
            unit.equirectangular(&a, &b).0,
            4.0 * f64::EPSILON
        ));

        let earth = Sphere::mean_earth();
        assert!(is_within_tolerance(
            6371.0 * core::f64::consts::FRAC_PI_2,
            earth.haversine(&a, &b).0,
            1e-9
        ));
    }

    #[test]
    fn test_sphere_cross_track_distance() {
        // A path along the Equator
        let start = GeoPoint::new(Degrees(0.0), Degrees(0.0));
        let end = GeoPoint::new(Degrees(0.0), Degrees(10.0));
        let sphere = Sphere::mean_earth();

        // one degree North of the Equator, i.e. to the left of the path
        let north = GeoPoint::new(Degrees(1.0), Degrees(5.0));
        let xtd = sphere.cross_track_distance(&north, &start, &end);
        assert!(is_within_tolerance(-111.19492664455873, xtd.0, 1e-6));

        // one degree South of the Equator, i.e. to the right of the path
        let south = GeoPoint::new(Degrees(-1.0), Degrees(5.0));
        let xtd = sphere.cross_track_distance(&south, &start, &end);
        assert!(is_within_tolerance(111.19492664455873, xtd.0, 1e-6));
    }
}
