//! Plain coordinate records. No behavior beyond field access.
use core::fmt;

/// World space point, used as an anchor
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point2 {
    pub x: f32,
    pub y: f32,
}

impl Point2 {
    pub fn new(x: f32, y: f32) -> Self {
        Point2 { x, y }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Point3<T> {
    pub x: T,
    pub y: T,
    pub z: T,
}

impl<T> Point3<T> {
    pub fn new(x: T, y: T, z: T) -> Self {
        Point3 { x, y, z }
    }
}

impl<T: fmt::Display> fmt::Display for Point3<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{X = {} Y = {} Z = {}}}", self.x, self.y, self.z)
    }
}

pub type Point3i = Point3<i32>;
pub type Point3f = Point3<f32>;
pub type Point3d = Point3<f64>;

#[cfg(test)]
mod tests {
    extern crate std;
    use std::format;

    use super::*;

    #[test]
    fn points_compare_field_wise() {
        assert_eq!(Point3i::new(1, 2, 3), Point3i::new(1, 2, 3));
        assert_ne!(Point3i::new(1, 2, 3), Point3i::new(1, 2, 4));
        assert_eq!(Point3d::default(), Point3d::new(0., 0., 0.));
        assert_eq!(Point2::default(), Point2::new(0., 0.));
    }

    #[test]
    fn point_formats_like_a_record() {
        assert_eq!(format!("{}", Point3f::new(1.5, -2., 0.)), "{X = 1.5 Y = -2 Z = 0}");
    }
}
