//! Several independent polygons queried together.

use super::bbox::BoundingBox;
use super::polygon::Polygon;
use super::types::{Coord, Point};

/// Ordered collection of polygons; indices are insertion order.
#[derive(Clone, Debug, Default)]
pub struct PolygonSet<T> {
    polygons: Vec<Polygon<T>>,
}

impl<T: Coord> PolygonSet<T> {
    pub fn new() -> Self {
        Self {
            polygons: Vec::new(),
        }
    }

    /// Append `polygon`, returning its index.
    pub fn push(&mut self, polygon: Polygon<T>) -> usize {
        self.polygons.push(polygon);
        self.polygons.len() - 1
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.polygons.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Polygon<T>> {
        self.polygons.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Polygon<T>> {
        self.polygons.iter()
    }

    /// Indices of every polygon containing `point`, ascending.
    pub fn containing<'a>(&'a self, point: &'a Point<T>) -> impl Iterator<Item = usize> + 'a {
        self.polygons
            .iter()
            .enumerate()
            .filter(move |(_, p)| p.contains_point(point))
            .map(|(i, _)| i)
    }

    pub fn any_contains(&self, point: &Point<T>) -> bool {
        self.polygons.iter().any(|p| p.contains_point(point))
    }

    /// Union of the members' boxes; `None` for an empty set.
    pub fn bounding_box(&self) -> Option<BoundingBox<T>> {
        let mut it = self.polygons.iter().map(|p| *p.bounding_box());
        let first = it.next()?;
        Some(it.fold(first, |acc, b| acc.union(&b)))
    }
}

impl<T: Coord> FromIterator<Polygon<T>> for PolygonSet<T> {
    fn from_iter<I: IntoIterator<Item = Polygon<T>>>(iter: I) -> Self {
        Self {
            polygons: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a PolygonSet<T> {
    type Item = &'a Polygon<T>;
    type IntoIter = std::slice::Iter<'a, Polygon<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.polygons.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(x0: i32, y0: i32, side: i32) -> Polygon<i32> {
        Polygon::new(vec![
            Point::new(x0, y0),
            Point::new(x0 + side, y0),
            Point::new(x0 + side, y0 + side),
            Point::new(x0, y0 + side),
        ])
        .unwrap()
    }

    #[test]
    fn containing_reports_every_hit_in_order() {
        let set: PolygonSet<i32> = vec![square(0, 0, 10), square(20, 0, 5), square(5, 5, 10)]
            .into_iter()
            .collect();
        let hits: Vec<_> = set.containing(&Point::new(7, 7)).collect();
        assert_eq!(hits, vec![0, 2]);
        let hits: Vec<_> = set.containing(&Point::new(22, 1)).collect();
        assert_eq!(hits, vec![1]);
        assert!(!set.any_contains(&Point::new(17, 1)));
        assert!(set.any_contains(&Point::new(15, 15)));
    }

    #[test]
    fn bounding_box_unions_members() {
        let mut set = PolygonSet::new();
        assert!(set.bounding_box().is_none());
        assert_eq!(set.push(square(0, 0, 10)), 0);
        assert_eq!(set.push(square(-5, 20, 2)), 1);
        assert_eq!(set.bounding_box(), Some(BoundingBox::new(-5, 10, 0, 22)));
        assert_eq!(set.len(), 2);
        assert_eq!(set.get(1).map(|p| p.len()), Some(4));
    }
}
