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

//! The distance module contains three alternative functions for calculating
//! the great circle distance between a pair of positions on a unit sphere.
//!
//! - `spherical_law_of_cosines` is the simplest formula, but it loses
//!   precision over short distances;
//! - `equirectangular` projects the positions onto a plane, it is the cheapest
//!   formula but is only valid over short distances away from the poles;
//! - `haversine` is numerically stable for all distances, including nearly
//!   coincident and antipodal positions.
//!
//! All the functions return the great circle arc length in `Radians`,
//! use a `Sphere` to convert it to a distance.

#![allow(clippy::suboptimal_flops)]

use crate::conversion::to_radians;
use crate::GeoPoint;
use angle_sc::{trig::UnitNegRange, Degrees, Radians};

/// Calculate the great circle arc length between a pair of positions using
/// the spherical law of cosines:
///
/// `d = acos(sin φ1·sin φ2 + cos φ1·cos φ2·cos Δλ)`
///
/// The argument of `acos` is clamped to the range -1.0 to 1.0, so coincident
/// and antipodal positions do not produce `NaN`.
/// * `a`, `b` - the start and finish positions.
///
/// returns the great circle arc length on the unit sphere.
#[must_use]
pub fn spherical_law_of_cosines(a: &GeoPoint, b: &GeoPoint) -> Radians {
    let lat1 = to_radians(a.lat()).0;
    let lat2 = to_radians(b.lat()).0;
    let delta_lon = to_radians(Degrees(b.lon().0 - a.lon().0)).0;

    let cos_d = libm::sin(lat1) * libm::sin(lat2)
        + libm::cos(lat1) * libm::cos(lat2) * libm::cos(delta_lon);
    Radians(libm::acos(UnitNegRange::clamp(cos_d).0))
}

/// Calculate the arc length between a pair of positions using the
/// equirectangular approximation:
///
/// `x = Δλ·cos((φ1 + φ2)/2)`, `y = Δφ`, `d = √(x² + y²)`
///
/// Note: the longitude difference is not wrapped, so positions either side
/// of the antimeridian are measured the long way round.
/// * `a`, `b` - the start and finish positions.
///
/// returns the approximate arc length on the unit sphere.
#[must_use]
pub fn equirectangular(a: &GeoPoint, b: &GeoPoint) -> Radians {
    let lat1 = to_radians(a.lat()).0;
    let lat2 = to_radians(b.lat()).0;
    let delta_lon = to_radians(Degrees(b.lon().0 - a.lon().0)).0;

    let x = delta_lon * libm::cos(0.5 * (lat1 + lat2));
    let y = lat2 - lat1;
    Radians(libm::sqrt(x * x + y * y))
}

/// Calculate the great circle arc length between a pair of positions using
/// the haversine formula:
///
/// `h = sin²(Δφ/2) + cos φ1·cos φ2·sin²(Δλ/2)`, `d = 2·atan2(√h, √(1 − h))`
/// * `a`, `b` - the start and finish positions.
///
/// returns the great circle arc length on the unit sphere.
#[must_use]
pub fn haversine(a: &GeoPoint, b: &GeoPoint) -> Radians {
    let lat1 = to_radians(a.lat()).0;
    let lat2 = to_radians(b.lat()).0;
    let delta_lat = to_radians(Degrees(b.lat().0 - a.lat().0)).0;
    let delta_lon = to_radians(Degrees(b.lon().0 - a.lon().0)).0;

    let sin_half_lat = libm::sin(0.5 * delta_lat);
    let sin_half_lon = libm::sin(0.5 * delta_lon);
    let h = sin_half_lat * sin_half_lat
        + libm::cos(lat1) * libm::cos(lat2) * sin_half_lon * sin_half_lon;

    // rounding can push h just outside the range 0.0 to 1.0 for antipodal positions
    let h = h.clamp(0.0, 1.0);
    Radians(2.0 * libm::atan2(libm::sqrt(h), libm::sqrt(1.0 - h)))
}
