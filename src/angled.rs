//! A 2D vector whose direction is a rotation, in degrees, limited to a range.
//!
//! The vector at rotation zero points along +X with the configured length.
//! Rotations are applied negated, so a positive rotation turns the vector
//! clockwise in screen space (Y growing downward). At rotation 90 a unit
//! vector reads `(0, -1)`.
use core::fmt;

use crate::angle::{self, DEG_CIRCLE};
use crate::point::Point2;
use crate::util::Vector;

#[derive(Debug, Clone, Copy)]
pub struct AngledVectorConfig {
    minimum: f64,
    maximum: f64,
    length: f64,
    origin: Point2,
    rotation: f64,
}

impl AngledVectorConfig {
    /// Full circle, unit length, at the origin, rotation zero
    pub fn new() -> Self {
        AngledVectorConfig {
            minimum: 0.,
            maximum: DEG_CIRCLE,
            length: 1.,
            origin: Point2::default(),
            rotation: 0.,
        }
    }
    /// Degrees. Both bounds are normalized on `realize`, `minimum` may end
    /// up above `maximum` for a range crossing zero.
    pub fn set_limits(&mut self, minimum: f64, maximum: f64) -> &mut Self {
        self.minimum = minimum;
        self.maximum = maximum;
        self
    }
    pub fn set_length(&mut self, length: f64) -> &mut Self {
        self.length = length;
        self
    }
    pub fn set_origin(&mut self, origin: Point2) -> &mut Self {
        self.origin = origin;
        self
    }
    /// Starting rotation, clamped into the limits on `realize`
    pub fn set_rotation(&mut self, rotation: f64) -> &mut Self {
        self.rotation = rotation;
        self
    }
    /// Realize an `AngledVector` from the configuration
    pub fn realize(&self) -> AngledVector {
        let mut vector = AngledVector {
            rotation: 0.,
            minimum: 0.,
            maximum: DEG_CIRCLE,
            length: 1.,
            origin: self.origin,
        };
        vector.set_minimum(self.minimum);
        vector.set_maximum(self.maximum);
        vector.set_length(self.length);
        // Pins into the limits even if the configured rotation is rejected
        vector.set_rotation(0.);
        vector.set_rotation(self.rotation);
        vector
    }
}

impl Default for AngledVectorConfig {
    fn default() -> Self {
        AngledVectorConfig::new()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct AngledVector {
    /// Degrees, normalized and inside the limits
    rotation: f64,
    /// Degrees, in [0..360)
    minimum: f64,
    /// Degrees, in [0..360]
    maximum: f64,
    length: f64,
    /// Carried along, never interpreted
    pub origin: Point2,
}

impl AngledVector {
    /// Rotation starts at zero, pinned into `[minimum, maximum]`.
    pub fn new(minimum: f64, maximum: f64, length: f64, origin: Point2) -> Self {
        AngledVectorConfig::new()
            .set_limits(minimum, maximum)
            .set_length(length)
            .set_origin(origin)
            .realize()
    }

    pub fn with_length_and_origin(length: f64, origin: Point2) -> Self {
        AngledVectorConfig::new()
            .set_length(length)
            .set_origin(origin)
            .realize()
    }

    /// Unit vector at `angle`.
    ///
    /// The range is NOT applied: the limits always cover the full circle.
    /// Existing callers rely on this, use `from_angle_and_range_limited` to
    /// get limits of `angle ± range / 2`.
    pub fn from_angle_and_range(angle: f64, range: f64) -> Self {
        log::debug!(
            "Ignoring requested limits [{}, {}], using the full circle",
            angle - range / 2.,
            angle + range / 2.
        );
        AngledVectorConfig::new().set_rotation(angle).realize()
    }

    /// Unit vector at `angle`, allowed to turn `range / 2` degrees either way.
    /// E.g. at angle 90 with a range of 90 the limits are 45 and 135.
    /// `range` is clamped to one full turn.
    pub fn from_angle_and_range_limited(angle: f64, range: f64) -> Self {
        let mut config = AngledVectorConfig::new();
        config.set_rotation(angle);
        if range.is_finite() && range < DEG_CIRCLE {
            let range = range.max(0.);
            let minimum = angle::normalize(angle - range / 2.);
            // Stays above `minimum` unless the range crosses zero
            let maximum = if minimum + range >= DEG_CIRCLE {
                minimum + range - DEG_CIRCLE
            } else {
                minimum + range
            };
            config.set_limits(minimum, maximum);
        } else if !range.is_finite() {
            log::warn!("Non-finite range: {}, using the full circle", range);
        }
        config.realize()
    }

    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    /// Normalizes and clamps `rotation` into `[minimum, maximum]`.
    /// Out of range values are pinned to the nearest limit, never wrapped.
    pub fn set_rotation(&mut self, rotation: f64) {
        if !rotation.is_finite() {
            log::warn!("Rejected non-finite rotation: {}", rotation);
            return;
        }
        let normalized = angle::normalize(rotation);
        self.rotation = angle::clamp(normalized, self.minimum, self.maximum);
        if self.rotation != normalized {
            log::debug!(
                "Rotation limiter triggered, {} pinned to {}",
                normalized,
                self.rotation
            );
        }
    }

    pub fn minimum(&self) -> f64 {
        self.minimum
    }

    /// Does not re-clamp the current rotation, call `set_rotation` for that.
    pub fn set_minimum(&mut self, minimum: f64) {
        if !minimum.is_finite() {
            log::warn!("Rejected non-finite minimum: {}", minimum);
            return;
        }
        self.minimum = angle::normalize(minimum);
    }

    pub fn maximum(&self) -> f64 {
        self.maximum
    }

    /// Does not re-clamp the current rotation, call `set_rotation` for that.
    pub fn set_maximum(&mut self, maximum: f64) {
        if !maximum.is_finite() {
            log::warn!("Rejected non-finite maximum: {}", maximum);
            return;
        }
        self.maximum = angle::normalize_upper(maximum);
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn set_length(&mut self, length: f64) {
        if !length.is_finite() {
            log::warn!("Rejected non-finite length: {}", length);
            return;
        }
        self.length = length;
    }

    /// Whether `angle` would be kept as is by `set_rotation`
    pub fn contains(&self, rotation: f64) -> bool {
        rotation.is_finite()
            && angle::in_range(angle::normalize(rotation), self.minimum, self.maximum)
    }

    /// The vector at rotation zero
    pub fn default_orientation(&self) -> Vector {
        Vector::new(self.length, 0.)
    }

    /// The current vector, always derived from length and rotation
    pub fn orientation(&self) -> Vector {
        // Negative rotation -> clockwise rotation
        self.default_orientation()
            .rotated(angle::to_radians(-self.rotation))
    }

    pub fn x(&self) -> f64 {
        self.orientation().x()
    }

    pub fn y(&self) -> f64 {
        self.orientation().y()
    }

    pub fn to_vector(&self) -> Vector {
        self.orientation()
    }
}

impl Default for AngledVector {
    fn default() -> Self {
        AngledVector::new(0., DEG_CIRCLE, 1., Point2::default())
    }
}

impl fmt::Display for AngledVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "X: {}, Y: {}, rotation: {}",
            self.x(),
            self.y(),
            self.rotation
        )
    }
}
