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

//! The conversion module contains the degree/radian conversion factors and
//! functions to convert and normalise angles.
//!
//! The conversion factors are compile time constants, so converting an angle
//! is a single multiplication.

use angle_sc::{Degrees, Radians};

/// The number of radians in a degree: π/180.
pub const DEG_TO_RAD: f64 = core::f64::consts::PI / 180.0;

/// The number of degrees in a radian: 180/π.
pub const RAD_TO_DEG: f64 = 180.0 / core::f64::consts::PI;

/// The number of degrees in a full turn.
const FULL_TURN: f64 = 360.0;

/// Convert an angle in degrees to radians.
/// * `angle` - the angle in degrees.
/// # Examples
/// ```
/// use geotranslation::conversion::to_radians;
/// use geotranslation::Degrees;
///
/// assert_eq!(core::f64::consts::PI, to_radians(Degrees(180.0)).0);
/// ```
#[must_use]
pub fn to_radians(angle: Degrees) -> Radians {
    Radians(angle.0 * DEG_TO_RAD)
}

/// Convert an angle in radians to degrees.
/// * `angle` - the angle in radians.
/// # Examples
/// ```
/// use geotranslation::conversion::to_degrees;
/// use geotranslation::Radians;
///
/// assert_eq!(90.0, to_degrees(Radians(core::f64::consts::FRAC_PI_2)).0);
/// ```
#[must_use]
pub fn to_degrees(angle: Radians) -> Degrees {
    Degrees(angle.0 * RAD_TO_DEG)
}

/// Normalise an angle in degrees to a compass bearing in the range
/// 0.0 <= bearing < 360.0.
/// * `angle` - the angle in degrees.
#[must_use]
pub fn normalise_bearing(angle: Degrees) -> Degrees {
    let mut bearing = libm::fmod(angle.0, FULL_TURN);
    if bearing < 0.0 {
        bearing += FULL_TURN;
    }
    // adding a tiny negative value to 360 can round up to 360
    if FULL_TURN <= bearing {
        bearing = 0.0;
    }
    // remove any negative zero
    Degrees(bearing + 0.0)
}

/// Normalise a longitude in radians to the range -π < lon <= π.
/// * `lon` - the longitude in radians.
#[must_use]
pub fn normalise_longitude(lon: Radians) -> Radians {
    use core::f64::consts::{PI, TAU};

    let result = libm::fmod(lon.0 + 3.0 * PI, TAU) - PI;
    if result <= -PI {
        Radians(PI)
    } else {
        Radians(result)
    }
}
