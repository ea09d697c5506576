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

//! The bearing module contains functions for calculating the bearings of the
//! great circle path between a pair of positions and for labelling a bearing
//! with a compass direction.
//!
//! Bearings are in degrees, clockwise from North, in the range
//! 0.0 <= bearing < 360.0.

#![allow(clippy::float_cmp)]
#![allow(clippy::suboptimal_flops)]

use crate::conversion::{normalise_bearing, to_degrees, to_radians};
use crate::GeoPoint;
use angle_sc::{Degrees, Radians};
use core::fmt;

/// Calculate the initial bearing of the great circle path from `a` to `b`.
///
/// If `a` and `b` are the same position the bearing is 0°.
/// * `a`, `b` - the start and finish positions.
///
/// returns the bearing at `a` in the range 0.0 <= bearing < 360.0.
/// # Examples
/// ```
/// use geotranslation::bearing::initial_bearing;
/// use geotranslation::{Degrees, GeoPoint};
///
/// let a = GeoPoint::new(Degrees(0.0), Degrees(0.0));
/// let b = GeoPoint::new(Degrees(0.0), Degrees(-90.0));
/// assert_eq!(270.0, initial_bearing(&a, &b).0);
/// ```
#[must_use]
pub fn initial_bearing(a: &GeoPoint, b: &GeoPoint) -> Degrees {
    let lat1 = to_radians(a.lat()).0;
    let lat2 = to_radians(b.lat()).0;
    let delta_lon = to_radians(Degrees(b.lon().0 - a.lon().0)).0;

    let y = libm::sin(delta_lon) * libm::cos(lat2);
    let x = libm::cos(lat1) * libm::sin(lat2)
        - libm::sin(lat1) * libm::cos(lat2) * libm::cos(delta_lon);
    normalise_bearing(to_degrees(Radians(libm::atan2(y, x))))
}

/// Calculate the final bearing of the great circle path from `a` to `b`,
/// the initial bearing turned through 180°.
/// * `a`, `b` - the start and finish positions.
///
/// returns the bearing in the range 0.0 <= bearing < 360.0.
#[must_use]
pub fn final_bearing(a: &GeoPoint, b: &GeoPoint) -> Degrees {
    normalise_bearing(Degrees(initial_bearing(a, b).0 + 180.0))
}

/// Calculate the `CompassDirection` of the final bearing from `a` to `b`.
/// * `a`, `b` - the start and finish positions.
/// # Examples
/// ```
/// use geotranslation::bearing::compass_direction;
/// use geotranslation::{Degrees, GeoPoint};
///
/// let a = GeoPoint::new(Degrees(0.0), Degrees(0.0));
/// let b = GeoPoint::new(Degrees(0.0), Degrees(90.0));
/// assert_eq!("W", compass_direction(&a, &b).to_string());
/// ```
#[must_use]
pub fn compass_direction(a: &GeoPoint, b: &GeoPoint) -> CompassDirection {
    CompassDirection::from(final_bearing(a, b))
}

/// A quarter of the compass.
///
/// Each `Quadrant` starts on a cardinal axis: `NorthEast` covers bearings
/// from 0° up to 90°, `SouthEast` from 90° up to 180°, etc.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Quadrant {
    NorthEast,
    SouthEast,
    SouthWest,
    NorthWest,
}

impl Quadrant {
    /// The bearing of the cardinal axis at the start of the `Quadrant`.
    #[must_use]
    pub const fn axis(self) -> Degrees {
        match self {
            Self::NorthEast => Degrees(0.0),
            Self::SouthEast => Degrees(90.0),
            Self::SouthWest => Degrees(180.0),
            Self::NorthWest => Degrees(270.0),
        }
    }
}

/// A bearing labelled by its compass quadrant, e.g. `N45.0E`.
///
/// The bearing is rounded to one decimal place, half away from zero, on its
/// binary value times ten: e.g. 0.15° becomes 0.2° because `0.15 * 10.0`
/// is exactly 1.5. A bearing of 359.95° or more rounds to 0.0°.
/// A bearing exactly on a
/// cardinal axis is labelled `N`, `E`, `S` or `W`, otherwise the label
/// contains the angle from the nearest North or South axis:
///
/// | bearing   | label     |
/// |-----------|-----------|
/// | 0 < b < 90    | `N<b>E`       |
/// | 90 < b < 180  | `S<180-b>E`   |
/// | 180 < b < 270 | `S<b-180>W`   |
/// | 270 < b < 360 | `N<360-b>W`   |
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CompassDirection {
    /// The rounded bearing.
    bearing: Degrees,
    /// The quadrant containing the bearing.
    quadrant: Quadrant,
}

impl CompassDirection {
    /// The bearing, rounded to one decimal place.
    #[must_use]
    pub const fn bearing(&self) -> Degrees {
        self.bearing
    }

    /// The quadrant containing the bearing.
    #[must_use]
    pub const fn quadrant(&self) -> Quadrant {
        self.quadrant
    }

    /// The angle from the North or South axis, None if the bearing is on a
    /// cardinal axis.
    #[must_use]
    pub fn offset(&self) -> Option<Degrees> {
        if self.bearing.0 == self.quadrant.axis().0 {
            None
        } else {
            let b = self.bearing.0;
            Some(Degrees(match self.quadrant {
                Quadrant::NorthEast => b,
                Quadrant::SouthEast => 180.0 - b,
                Quadrant::SouthWest => b - 180.0,
                Quadrant::NorthWest => 360.0 - b,
            }))
        }
    }
}

impl From<Degrees> for CompassDirection {
    /// Label a bearing.
    /// * `bearing` - the bearing, it need not be normalised.
    fn from(bearing: Degrees) -> Self {
        let bearing = normalise_bearing(bearing).0;
        let rounded = libm::round(bearing * 10.0) / 10.0;
        // 359.95 and above round up to North
        let bearing = if 360.0 <= rounded { 0.0 } else { rounded };

        let quadrant = if bearing < 90.0 {
            Quadrant::NorthEast
        } else if bearing < 180.0 {
            Quadrant::SouthEast
        } else if bearing < 270.0 {
            Quadrant::SouthWest
        } else {
            Quadrant::NorthWest
        };
        Self {
            bearing: Degrees(bearing),
            quadrant,
        }
    }
}

impl fmt::Display for CompassDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.quadrant, self.offset()) {
            (Quadrant::NorthEast, None) => write!(f, "N"),
            (Quadrant::SouthEast, None) => write!(f, "E"),
            (Quadrant::SouthWest, None) => write!(f, "S"),
            (Quadrant::NorthWest, None) => write!(f, "W"),
            (Quadrant::NorthEast, Some(offset)) => write!(f, "N{:.1}E", offset.0),
            (Quadrant::SouthEast, Some(offset)) => write!(f, "S{:.1}E", offset.0),
            (Quadrant::SouthWest, Some(offset)) => write!(f, "S{:.1}W", offset.0),
            (Quadrant::NorthWest, Some(offset)) => write!(f, "N{:.1}W", offset.0),
        }
    }
}
