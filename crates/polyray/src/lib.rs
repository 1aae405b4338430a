//! Exact point-in-polygon membership for simple polygons.
//!
//! A `Polygon` is built once from an ordered vertex list and then answers
//! `contains_point` queries by bounding-box reject followed by even-odd ray
//! casting. Boundary points count as inside. Coordinates are generic
//! (`geom2::Coord`): integers or floats, always compared exactly.
//!
//! API Policy
//! - `geom2` holds the implementation; `api` and `prelude` are curated re-exports.
//! - Rendering, input handling and file formats live in callers (see the `cli` crate).

pub mod api;
pub mod geom2;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common geometry exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom2::rand::{
        draw_queries, draw_star_polygon, ReplayToken, StarCfg, VertexCount,
    };
    pub use crate::geom2::{BoundingBox, Coord, Point, Polygon, PolygonError, PolygonSet};
}

#[cfg(test)]
mod tests {
    use super::prelude::*;
    use super::VERSION;

    #[test]
    fn prelude_covers_the_basic_flow() {
        let poly = Polygon::new(vec![
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(2.0, 3.0),
            Point::new(0.0, 0.0),
        ])
        .unwrap();
        assert_eq!(poly.len(), 3);
        assert!(poly.contains_point(&Point::new(2.0, 1.0)));
        assert!(poly.contains_point(&Point::new(1.0, 1.5)));
        assert!(!poly.contains_point(&Point::new(3.5, 2.0)));
        assert!(!VERSION.is_empty());
    }
}
