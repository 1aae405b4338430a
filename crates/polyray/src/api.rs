//! Curated surface for callers.
//!
//! Prefer these re-exports over reaching into `geom2` submodules; the module
//! layout behind them may change.

// Core predicate
pub use crate::geom2::{BoundingBox, BoundingBoxBuilder, Coord, Point, Polygon, PolygonError};
// Multi-polygon queries
pub use crate::geom2::PolygonSet;
// Building blocks of the predicate, exposed for diagnostics and tests
pub use crate::geom2::{classify as classify_crossing, Crossing, Direction, Edge};
// nalgebra interop
pub use crate::geom2::points_from_vectors;
// Random star-shaped polygons
pub use crate::geom2::rand::{
    draw_queries, draw_star_polygon, ReplayToken as PolygonReplay, StarCfg, VertexCount,
};

/// Convenience: build a polygon and test one point.
///
/// Returns `Err` only for an empty vertex list.
pub fn point_in_polygon<T: Coord>(
    vertices: Vec<Point<T>>,
    point: &Point<T>,
) -> Result<bool, PolygonError> {
    Ok(Polygon::new(vertices)?.contains_point(point))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_shot_query() {
        let square = vec![
            Point::new(0, 0),
            Point::new(10, 0),
            Point::new(10, 10),
            Point::new(0, 10),
        ];
        assert_eq!(point_in_polygon(square.clone(), &Point::new(5, 5)), Ok(true));
        assert_eq!(point_in_polygon(square, &Point::new(15, 5)), Ok(false));
        assert_eq!(
            point_in_polygon(Vec::<Point<i32>>::new(), &Point::new(0, 0)),
            Err(PolygonError::EmptyVertices)
        );
    }
}
