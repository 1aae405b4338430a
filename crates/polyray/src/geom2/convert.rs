//! Conversions between `Point` and nalgebra's `Vector2`.

use nalgebra::{Scalar, Vector2};

use super::types::Point;

impl<T: Scalar + Copy> From<Vector2<T>> for Point<T> {
    #[inline]
    fn from(v: Vector2<T>) -> Self {
        Point::new(v.x, v.y)
    }
}

impl<T: Scalar + Copy> From<Point<T>> for Vector2<T> {
    #[inline]
    fn from(p: Point<T>) -> Self {
        Vector2::new(p.x, p.y)
    }
}

/// Convert a slice of vectors into a vertex list for `Polygon::new`.
pub fn points_from_vectors<T: Scalar + Copy>(vs: &[Vector2<T>]) -> Vec<Point<T>> {
    vs.iter().map(|v| Point::from(*v)).collect()
}
