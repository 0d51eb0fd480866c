#![no_std]
pub mod angle;
pub mod angled;
pub mod point;
mod util;

pub use angled::{AngledVector, AngledVectorConfig};
pub use point::{Point2, Point3, Point3d, Point3f, Point3i};
pub use util::Vector;

#[cfg(test)]
mod tests {

    use approx::assert_abs_diff_eq;

    use crate::{angle::DEG_CIRCLE, AngledVector, Point2};

    fn init_logs() {
        let _ = env_logger::builder()
            .is_test(true)
            .filter_level(log::LevelFilter::Debug)
            .try_init();
    }

    #[test]
    fn turret_sweep() {
        init_logs();

        let mut turret = AngledVector::new(0., 180., 1., Point2::new(0., 0.));

        turret.set_rotation(270.);
        log::debug!("Turret after overshoot: {}", turret);
        assert_eq!(turret.rotation(), 180.);
        assert_abs_diff_eq!(turret.x(), -1., epsilon = 1e-12);
        assert_abs_diff_eq!(turret.y(), 0., epsilon = 1e-12);

        turret.set_rotation(90.);
        log::debug!("Turret pointing up: {}", turret);
        assert_eq!(turret.rotation(), 90.);
        assert_abs_diff_eq!(turret.x(), 0., epsilon = 1e-12);
        assert_abs_diff_eq!(turret.y(), -1., epsilon = 1e-12);

        let vector = turret.to_vector();
        assert_eq!(vector.x(), turret.x());
        assert_eq!(vector.y(), turret.y());
    }

    #[test]
    fn angle_and_range_ignores_range() {
        init_logs();

        let vector = AngledVector::from_angle_and_range(90., 90.);
        assert_eq!(vector.minimum(), 0.);
        assert_eq!(vector.maximum(), DEG_CIRCLE);
        assert_eq!(vector.rotation(), 90.);
    }
}
