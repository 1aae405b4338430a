//! Basic 2D types shared by the point-in-polygon predicate.
//!
//! - `Coord`: numeric domain (integer or floating point) with exact comparisons.
//! - `Point`: immutable coordinate pair, component-wise `==`.
//! - `Direction`, `Edge`: vertical classification of a directed polygon side.
//!
//! Floating-point coordinates inherit the fragility of exact `==`: vertex
//! dedup, the on-line checks and the vertex-height tie-breaks all compare
//! without tolerance.

use std::fmt;

use num_traits::{Bounded, Num, Signed};

/// Scalar type usable as a polygon coordinate.
///
/// Blanket-implemented for signed integers and floats (`i32`, `i64`, `f32`,
/// `f64`, ...). The side test subtracts arbitrary coordinates from each other,
/// so unsigned types are rejected:
///
/// ```compile_fail
/// use polyray::geom2::{Point, Polygon};
/// let _ = Polygon::new(vec![Point::new(0u32, 0), Point::new(10, 0), Point::new(5, 10)]);
/// ```
///
/// Callers pick a type wide enough that `(a - b) * (c - d)` does not overflow
/// for their coordinates.
pub trait Coord: Copy + PartialOrd + fmt::Debug + Num + Signed + Bounded {}
impl<T> Coord for T where T: Copy + PartialOrd + fmt::Debug + Num + Signed + Bounded {}

/// Immutable 2D point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Point<T> {
    pub x: T,
    pub y: T,
}

impl<T> Point<T> {
    #[inline]
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T: Coord> Point<T> {
    /// Coordinates relative to `origin`.
    #[inline]
    pub(crate) fn relative_to(self, origin: Point<T>) -> Point<T> {
        Point::new(self.x - origin.x, self.y - origin.y)
    }
}

impl<T> From<[T; 2]> for Point<T> {
    #[inline]
    fn from([x, y]: [T; 2]) -> Self {
        Self { x, y }
    }
}

impl<T> From<(T, T)> for Point<T> {
    #[inline]
    fn from((x, y): (T, T)) -> Self {
        Self { x, y }
    }
}

impl<T> From<Point<T>> for [T; 2] {
    #[inline]
    fn from(p: Point<T>) -> Self {
        [p.x, p.y]
    }
}

/// Vertical direction of a directed edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Ascending,
    Descending,
    Horizontal,
}

impl Direction {
    /// Classify the segment `p1 -> p2` by comparing `p1.y` with `p2.y`.
    #[inline]
    pub fn between<T: Coord>(p1: &Point<T>, p2: &Point<T>) -> Self {
        if p1.y < p2.y {
            Direction::Ascending
        } else if p1.y > p2.y {
            Direction::Descending
        } else {
            Direction::Horizontal
        }
    }

    #[inline]
    pub fn is_horizontal(self) -> bool {
        self == Direction::Horizontal
    }
}

/// Directed polygon side borrowing its endpoints from the vertex storage.
///
/// `p1` is the inclusive start and `p2` the exclusive end under the
/// half-open traversal convention.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge<'a, T> {
    pub p1: &'a Point<T>,
    pub p2: &'a Point<T>,
}

impl<'a, T: Coord> Edge<'a, T> {
    #[inline]
    pub fn new(p1: &'a Point<T>, p2: &'a Point<T>) -> Self {
        Self { p1, p2 }
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        Direction::between(self.p1, self.p2)
    }

    /// Endpoints ordered as `(lower, upper)` by `y`. Ties keep `(p1, p2)`.
    #[inline]
    pub fn lower_upper(&self) -> (&'a Point<T>, &'a Point<T>) {
        if self.p1.y > self.p2.y {
            (self.p2, self.p1)
        } else {
            (self.p1, self.p2)
        }
    }
}
