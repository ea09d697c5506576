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

//! The position module contains functions that derive a position, or a
//! position's offset, from other positions: the great circle midpoint and the
//! across track angle from a great circle path.

#![allow(clippy::suboptimal_flops)]

use crate::conversion::{normalise_longitude, to_degrees, to_radians};
use crate::GeoPoint;
use angle_sc::{Degrees, Radians};

/// Calculate the midpoint of the great circle path between a pair of positions.
///
/// The positions are converted to vectors, summed and the sum converted back
/// to a latitude and longitude.
/// * `a`, `b` - the start and finish positions.
///
/// returns the midpoint, with its longitude in the range -180 < lon <= 180.
/// # Examples
/// ```
/// use geotranslation::position::midpoint;
/// use geotranslation::{Degrees, GeoPoint};
/// use angle_sc::is_within_tolerance;
///
/// let london = GeoPoint::new(Degrees(52.205), Degrees(0.119));
/// let paris = GeoPoint::new(Degrees(48.857), Degrees(2.351));
/// let result = midpoint(&london, &paris);
/// assert!(is_within_tolerance(50.536, result.lat().0, 0.01));
/// assert!(is_within_tolerance(1.274, result.lon().0, 0.01));
/// ```
#[must_use]
pub fn midpoint(a: &GeoPoint, b: &GeoPoint) -> GeoPoint {
    let lat1 = to_radians(a.lat()).0;
    let lon1 = to_radians(a.lon()).0;
    let lat2 = to_radians(b.lat()).0;
    let delta_lon = to_radians(Degrees(b.lon().0 - a.lon().0)).0;

    // b as a vector in the frame with a's meridian along the x axis
    let bx = libm::cos(lat2) * libm::cos(delta_lon);
    let by = libm::cos(lat2) * libm::sin(delta_lon);

    let cos_lat1_bx = libm::cos(lat1) + bx;
    let lat = libm::atan2(
        libm::sin(lat1) + libm::sin(lat2),
        libm::sqrt(cos_lat1_bx * cos_lat1_bx + by * by),
    );
    let lon = to_degrees(normalise_longitude(Radians(
        lon1 + libm::atan2(by, cos_lat1_bx),
    )));
    // a longitude just above -π can round to -180°
    let lon = if lon.0 <= -180.0 { Degrees(180.0) } else { lon };

    GeoPoint::new(to_degrees(Radians(lat)), lon)
}

/// Calculate the across track angle of a position from a great circle path:
///
/// `dxt = asin(sin δ13 · sin(θ13 − θ12))`
/// * `arc_distance` - the arc length from the start of the path to the position, δ13.
/// * `bearing_to_point` - the initial bearing from the start of the path to the position, θ13.
/// * `path_bearing` - the initial bearing of the path, θ12.
///
/// returns the across track arc length on the unit sphere, positive if the
/// position is to the right of the path, negative if it is to the left.
#[must_use]
pub fn cross_track_angle(
    arc_distance: Radians,
    bearing_to_point: Degrees,
    path_bearing: Degrees,
) -> Radians {
    let delta_bearing = to_radians(Degrees(bearing_to_point.0 - path_bearing.0)).0;
    Radians(libm::asin(
        libm::sin(arc_distance.0) * libm::sin(delta_bearing),
    ))
}
