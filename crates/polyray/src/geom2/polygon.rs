//! Simple polygon given by an ordered vertex ring, with the even-odd
//! point-in-polygon predicate.
//!
//! Purpose
//! - Own a finalized vertex list (closing duplicate dropped) plus its bounding box.
//! - Answer `contains_point` by bounding-box reject, then ray casting over edges.
//!
//! Conventions
//! - The ring is implicitly closed: the last vertex connects back to the first.
//! - Points on the boundary (edges and vertices) are inside.
//! - Invalid polygons (fewer than 3 distinct vertices) contain nothing.
//!
//! Code cross-refs: `crossing::classify`, `bbox::BoundingBoxBuilder`

use std::fmt;

use super::bbox::{BoundingBox, BoundingBoxBuilder};
use super::crossing::{classify, Crossing};
use super::types::{Coord, Direction, Edge, Point};

/// Construction errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PolygonError {
    /// No vertices were supplied.
    EmptyVertices,
}

impl fmt::Display for PolygonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolygonError::EmptyVertices => write!(f, "polygon needs at least one vertex"),
        }
    }
}

impl std::error::Error for PolygonError {}

/// Immutable polygon; safe to share across threads for concurrent queries.
///
/// Invariants:
/// - `vertices` is non-empty.
/// - A trailing copy of the first vertex was removed, once.
/// - `bbox` covers exactly `vertices`.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon<T> {
    vertices: Vec<Point<T>>,
    bbox: BoundingBox<T>,
}

impl<T: Coord> Polygon<T> {
    /// Build from an ordered vertex sequence.
    ///
    /// If the first and last vertex are equal the sequence is treated as explicitly
    /// closed and the trailing copy is dropped. A single vertex is its own closing
    /// copy and is kept.
    pub fn new(vertices: Vec<Point<T>>) -> Result<Self, PolygonError> {
        if vertices.is_empty() {
            return Err(PolygonError::EmptyVertices);
        }
        Ok(Self::from_nonempty(vertices))
    }

    /// `new` for rings the caller already knows to be non-empty.
    pub(crate) fn from_nonempty(mut vertices: Vec<Point<T>>) -> Self {
        debug_assert!(!vertices.is_empty(), "polygon ring must be non-empty");
        if vertices.len() > 1 && vertices.first() == vertices.last() {
            tracing::debug!(count = vertices.len(), "dropping duplicated closing vertex");
            vertices.pop();
        }

        let mut builder = BoundingBoxBuilder::default();
        builder.extend(&vertices);
        let poly = Self {
            vertices,
            bbox: builder.build(),
        };
        if !poly.is_valid() {
            tracing::debug!(
                count = poly.len(),
                "degenerate polygon (fewer than 3 distinct vertices)"
            );
        }
        poly
    }

    /// Vertex ring without the closing duplicate.
    #[inline]
    pub fn vertices(&self) -> &[Point<T>] {
        &self.vertices
    }

    /// Vertex count after the closing duplicate was dropped.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Always false; construction rejects empty input.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    #[inline]
    pub fn bounding_box(&self) -> &BoundingBox<T> {
        &self.bbox
    }

    /// Edges in predicate order: the closing edge `(v[n-1], v[0])` first, then
    /// `(v[i-1], v[i])` for `i = 1..n`.
    pub fn edges(&self) -> impl Iterator<Item = Edge<'_, T>> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| Edge::new(&self.vertices[(i + n - 1) % n], &self.vertices[i]))
    }

    /// At least 3 vertices, at least 3 of them pairwise distinct.
    ///
    /// Quadratic in the vertex count; stops at the third distinct vertex found.
    pub fn is_valid(&self) -> bool {
        if self.vertices.len() < 3 {
            return false;
        }
        // Vertex 0 is distinct by definition.
        let mut unique = 1usize;
        for (i, p) in self.vertices.iter().enumerate().skip(1) {
            if !self.vertices[..i].contains(p) {
                unique += 1;
                if unique >= 3 {
                    return true;
                }
            }
        }
        false
    }

    /// Even-odd membership; boundary points are inside, invalid polygons contain nothing.
    pub fn contains_point(&self, point: &Point<T>) -> bool {
        if !self.is_valid() || !self.bbox.contains_point(point) {
            return false;
        }

        let mut incoming = self.incoming_direction();
        let mut inside = false;
        for edge in self.edges() {
            match classify(point, &edge, &mut incoming) {
                Crossing::OnLine => return true,
                Crossing::Intersect => inside = !inside,
                Crossing::NoIntersect => {}
            }
        }
        inside
    }

    /// Direction of the last non-horizontal edge before the closing edge, found by
    /// walking back from `(v[n-2], v[n-1])`. `Horizontal` if every such edge is flat.
    fn incoming_direction(&self) -> Direction {
        self.vertices
            .windows(2)
            .rev()
            .map(|w| Direction::between(&w[0], &w[1]))
            .find(|d| !d.is_horizontal())
            .unwrap_or(Direction::Horizontal)
    }
}

impl<T: Coord> TryFrom<Vec<Point<T>>> for Polygon<T> {
    type Error = PolygonError;

    fn try_from(vertices: Vec<Point<T>>) -> Result<Self, Self::Error> {
        Polygon::new(vertices)
    }
}
