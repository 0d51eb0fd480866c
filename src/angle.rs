//! Angle helpers, all in degrees unless stated otherwise.
use core::f64::consts::PI;

use libm::fmod;

/// Degrees in one full turn
pub const DEG_CIRCLE: f64 = 360.;

/// Maps any finite angle into `[0, DEG_CIRCLE)`.
/// Non-finite input yields NaN.
pub fn normalize(angle: f64) -> f64 {
    let wrapped = fmod(angle, DEG_CIRCLE);
    let wrapped = if wrapped.is_sign_negative() {
        wrapped + DEG_CIRCLE
    } else {
        wrapped
    };
    // A remainder of -0.0 or one below f64 resolution lands exactly on a full turn
    if wrapped >= DEG_CIRCLE {
        0.
    } else {
        wrapped
    }
}

/// Same as [`normalize`], except that a non-zero whole number of turns maps to
/// `DEG_CIRCLE` instead of `0`. Used for upper bounds, so that a range of
/// `[0, DEG_CIRCLE]` still covers the full circle.
pub fn normalize_upper(angle: f64) -> f64 {
    if angle != 0. && fmod(angle, DEG_CIRCLE) == 0. {
        DEG_CIRCLE
    } else {
        normalize(angle)
    }
}

pub fn to_radians(degrees: f64) -> f64 {
    degrees * PI / (DEG_CIRCLE / 2.)
}

/// Pins a normalized `angle` to `[minimum, maximum]`. Never wraps.
///
/// When `minimum > maximum` the allowed range runs from `minimum` through
/// zero to `maximum`. Angles outside of it pin to the nearer bound, with
/// ties going to `minimum`.
pub fn clamp(angle: f64, minimum: f64, maximum: f64) -> f64 {
    if minimum <= maximum {
        if angle > maximum {
            maximum
        } else if angle < minimum {
            minimum
        } else {
            angle
        }
    } else if angle >= minimum || angle <= maximum {
        angle
    } else if minimum - angle <= angle - maximum {
        minimum
    } else {
        maximum
    }
}

/// Whether a normalized `angle` lies in the range [`clamp`] pins to
pub fn in_range(angle: f64, minimum: f64, maximum: f64) -> bool {
    if minimum <= maximum {
        minimum <= angle && angle <= maximum
    } else {
        angle >= minimum || angle <= maximum
    }
}
