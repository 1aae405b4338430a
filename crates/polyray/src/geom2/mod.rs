//! 2D point-in-polygon geometry (exact, generic over the coordinate type).
//!
//! Purpose
//! - Provide a simple-polygon type (`Polygon`) with a deterministic even-odd
//!   membership test that counts boundary points as inside.
//! - Keep the numeric domain generic (`Coord`): integers stay exact, floats use
//!   exact `==` with no epsilon.
//!
//! Layout
//! - `types`: `Coord`, `Point`, `Direction`, `Edge`.
//! - `bbox`: `BoundingBox` and its builder (fast reject).
//! - `crossing`: per-edge ray classification with vertex tie-breaking.
//! - `polygon`: `Polygon`, validity, the predicate.
//! - `set`: `PolygonSet` for multi-polygon queries.
//! - `rand`: reproducible star-shaped polygons and query points.

mod bbox;
mod convert;
mod crossing;
mod polygon;
pub mod rand;
mod set;
mod types;

pub use bbox::{BoundingBox, BoundingBoxBuilder};
pub use convert::points_from_vectors;
pub use crossing::{classify, Crossing};
pub use polygon::{Polygon, PolygonError};
pub use set::PolygonSet;
pub use types::{Coord, Direction, Edge, Point};
