//! Axis-aligned bounding box used as a fast reject before the exact predicate.
//!
//! `BoundingBoxBuilder` is the mutable accumulator; `BoundingBox` is the frozen
//! value a `Polygon` keeps for its lifetime.

use super::types::{Coord, Point};

/// Closed axis-aligned extents `[x_min, x_max] × [y_min, y_max]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox<T> {
    pub x_min: T,
    pub x_max: T,
    pub y_min: T,
    pub y_max: T,
}

impl<T: Coord> BoundingBox<T> {
    #[inline]
    pub fn new(x_min: T, x_max: T, y_min: T, y_max: T) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    /// Box over a point sequence; the empty box for an empty sequence.
    pub fn from_points<'a, I>(points: I) -> Self
    where
        I: IntoIterator<Item = &'a Point<T>>,
        T: 'a,
    {
        let mut b = BoundingBoxBuilder::default();
        b.extend(points);
        b.build()
    }

    /// True iff `x_min <= x <= x_max` and `y_min <= y <= y_max`.
    ///
    /// Only proves exclusion: a point inside the box may still be outside the polygon.
    #[inline]
    pub fn contains_point(&self, p: &Point<T>) -> bool {
        !(p.x < self.x_min || p.x > self.x_max || p.y < self.y_min || p.y > self.y_max)
    }

    /// True for the never-updated box (`min > max`).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.x_min > self.x_max || self.y_min > self.y_max
    }

    /// Smallest box containing both.
    pub fn union(&self, other: &BoundingBox<T>) -> BoundingBox<T> {
        if other.is_empty() {
            return *self;
        }
        let mut b = BoundingBoxBuilder::from(*self);
        b.update(&Point::new(other.x_min, other.y_min));
        b.update(&Point::new(other.x_max, other.y_max));
        b.build()
    }
}

impl<T: Coord> Default for BoundingBox<T> {
    fn default() -> Self {
        BoundingBoxBuilder::default().build()
    }
}

/// Mutable accumulator for `BoundingBox`.
///
/// Starts inverted (`min = T::max_value()`, `max = T::min_value()`) so the first
/// update always widens every extent.
#[derive(Clone, Copy, Debug)]
pub struct BoundingBoxBuilder<T> {
    inner: BoundingBox<T>,
}

impl<T: Coord> Default for BoundingBoxBuilder<T> {
    fn default() -> Self {
        Self {
            inner: BoundingBox {
                x_min: T::max_value(),
                x_max: T::min_value(),
                y_min: T::max_value(),
                y_max: T::min_value(),
            },
        }
    }
}

impl<T: Coord> From<BoundingBox<T>> for BoundingBoxBuilder<T> {
    fn from(inner: BoundingBox<T>) -> Self {
        Self { inner }
    }
}

impl<T: Coord> BoundingBoxBuilder<T> {
    /// Widen to include `p`. No-op for interior points.
    #[inline]
    pub fn update(&mut self, p: &Point<T>) -> &mut Self {
        let b = &mut self.inner;
        // X planes
        if p.x < b.x_min {
            b.x_min = p.x;
        }
        if p.x > b.x_max {
            b.x_max = p.x;
        }
        // Y planes
        if p.y < b.y_min {
            b.y_min = p.y;
        }
        if p.y > b.y_max {
            b.y_max = p.y;
        }
        self
    }

    pub fn extend<'a, I>(&mut self, points: I) -> &mut Self
    where
        I: IntoIterator<Item = &'a Point<T>>,
        T: 'a,
    {
        for p in points {
            self.update(p);
        }
        self
    }

    #[inline]
    pub fn build(&self) -> BoundingBox<T> {
        self.inner
    }
}
