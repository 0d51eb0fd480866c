use core::f64::consts::PI;

use libm::{cos, fabs, sin};

/// Polar 2D vector, `phase` in radians.
#[derive(Debug, Clone, Copy)]
pub struct Vector {
    pub magnitude: f64,
    pub phase: f64,
    // Block construction so magnitude invariants can be upheld
    _private: (),
}

impl Vector {
    pub fn new(magnitude: f64, phase: f64) -> Vector {
        Vector {
            magnitude: fabs(magnitude),
            phase: if magnitude.is_sign_positive() {
                phase
            } else {
                phase + PI
            },
            _private: (),
        }
    }
    pub fn x(&self) -> f64 {
        self.magnitude * cos(self.phase)
    }
    pub fn y(&self) -> f64 {
        self.magnitude * sin(self.phase)
    }
    /// Positive `angle` turns counter-clockwise in a Y-up frame
    pub fn rotated(self, angle: f64) -> Self {
        Vector {
            phase: self.phase + angle,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use core::f64::consts::FRAC_PI_2;

    #[test]
    fn negative_magnitude_flips_phase() {
        let vector = Vector::new(-2., 0.);
        assert_eq!(vector.magnitude, 2.);
        assert_abs_diff_eq!(vector.x(), -2., epsilon = 1e-12);
        assert_abs_diff_eq!(vector.y(), 0., epsilon = 1e-12);
    }

    #[test]
    fn rotation_by_zero_is_identity() {
        let vector = Vector::new(1.5, 0.3);
        let rotated = vector.rotated(0.);
        assert_eq!(rotated.x(), vector.x());
        assert_eq!(rotated.y(), vector.y());
    }

    #[test]
    fn rotation_is_reversible() {
        let vector = Vector::new(1., 0.7);
        let back = vector.rotated(-1.3).rotated(1.3);
        assert_abs_diff_eq!(back.x(), vector.x(), epsilon = 1e-12);
        assert_abs_diff_eq!(back.y(), vector.y(), epsilon = 1e-12);
    }

    #[test]
    fn quarter_turn_moves_x_onto_y() {
        let vector = Vector::new(1., 0.).rotated(FRAC_PI_2);
        assert_abs_diff_eq!(vector.x(), 0., epsilon = 1e-12);
        assert_abs_diff_eq!(vector.y(), 1., epsilon = 1e-12);
    }
}
