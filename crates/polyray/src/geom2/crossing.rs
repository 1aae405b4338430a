//! Ray/edge crossing classification for the even-odd predicate.
//!
//! A ray is cast from the query point toward increasing x. Each edge is tested
//! under the half-open convention: its start vertex is inclusive, its end vertex
//! exclusive (the end is the next edge's start).
//!
//! Rays through a vertex at the query height are resolved by comparing the
//! direction of the edge leaving the vertex with the direction of the last
//! non-horizontal edge before it. Equal directions mean the boundary passes
//! through the ray (one crossing); opposite directions mean a peak or valley
//! (no crossing).

use super::types::{Coord, Direction, Edge, Point};

/// Outcome of testing one edge against the ray.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Crossing {
    /// Ray crosses the edge; toggles parity.
    Intersect,
    NoIntersect,
    /// Query point lies on the edge itself.
    OnLine,
}

/// Classify `edge` against the ray from `point`.
///
/// `incoming` is the direction of the last non-horizontal edge before this one;
/// it is replaced by this edge's direction unless the edge is horizontal.
pub fn classify<T: Coord>(
    point: &Point<T>,
    edge: &Edge<'_, T>,
    incoming: &mut Direction,
) -> Crossing {
    if point == edge.p1 {
        return Crossing::OnLine;
    }

    let current = edge.direction();

    if current.is_horizontal() {
        // Half-open [min x, max x); the right end belongs to a vertex check.
        let (x_lo, x_hi) = if edge.p1.x < edge.p2.x {
            (edge.p1.x, edge.p2.x)
        } else {
            (edge.p2.x, edge.p1.x)
        };
        if point.y == edge.p1.y && point.x >= x_lo && point.x < x_hi {
            return Crossing::OnLine;
        }
        return Crossing::NoIntersect;
    }

    let previous = std::mem::replace(incoming, current);

    // Ray through the start vertex: count only a pass-through.
    if point.y == edge.p1.y {
        return if point.x <= edge.p1.x && previous == current {
            Crossing::Intersect
        } else {
            Crossing::NoIntersect
        };
    }

    // End vertex is exclusive.
    if point.y == edge.p2.y {
        return Crossing::NoIntersect;
    }

    let (lower, upper) = edge.lower_upper();
    if point.y < lower.y || point.y > upper.y {
        return Crossing::NoIntersect;
    }

    // Vertical edge
    if lower.x == upper.x {
        if point.x == lower.x {
            return Crossing::OnLine;
        }
        return if point.x < lower.x {
            Crossing::Intersect
        } else {
            Crossing::NoIntersect
        };
    }

    side_of_sloped(point, lower, upper)
}

/// Compare `point.x` with the edge's x at `point.y`.
///
/// With `d = upper - lower` and `q = point - lower`, the edge's x at the query
/// height is `lower.x + q.y * d.x / d.y`. Since `d.y > 0` the comparison is done
/// as `q.x * d.y` vs `q.y * d.x`, which stays exact for integer coordinates.
fn side_of_sloped<T: Coord>(point: &Point<T>, lower: &Point<T>, upper: &Point<T>) -> Crossing {
    let d = upper.relative_to(*lower);
    let q = point.relative_to(*lower);
    let lhs = q.x * d.y;
    let rhs = q.y * d.x;
    if lhs == rhs {
        Crossing::OnLine
    } else if lhs < rhs {
        Crossing::Intersect
    } else {
        Crossing::NoIntersect
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Xy = (i64, i64);

    fn run(q: Xy, a: Xy, b: Xy, incoming: Direction) -> (Crossing, Direction) {
        let (q, a, b) = (Point::from(q), Point::from(a), Point::from(b));
        let mut dir = incoming;
        let c = classify(&q, &Edge::new(&a, &b), &mut dir);
        (c, dir)
    }

    #[test]
    fn horizontal_edge_is_half_open_and_transparent() {
        use Direction::*;
        assert_eq!(
            run((3, 0), (0, 0), (5, 0), Ascending),
            (Crossing::OnLine, Ascending)
        );
        // Right end excluded unless it is the start vertex.
        assert_eq!(run((5, 0), (0, 0), (5, 0), Ascending).0, Crossing::NoIntersect);
        assert_eq!(run((5, 0), (5, 0), (0, 0), Ascending).0, Crossing::OnLine);
        // Left of the edge at the same height: no crossing, direction untouched.
        assert_eq!(
            run((-1, 0), (0, 0), (5, 0), Descending),
            (Crossing::NoIntersect, Descending)
        );
    }

    #[test]
    fn start_vertex_counts_only_pass_through() {
        use Direction::*;
        // Ascending edge leaving (2,2); incoming also ascending -> crossing.
        assert_eq!(
            run((0, 2), (2, 2), (4, 6), Ascending),
            (Crossing::Intersect, Ascending)
        );
        // Incoming descending -> valley, no crossing; direction still updated.
        assert_eq!(
            run((0, 2), (2, 2), (4, 6), Descending),
            (Crossing::NoIntersect, Ascending)
        );
        // Right of the vertex never crosses.
        assert_eq!(run((3, 2), (2, 2), (4, 6), Ascending).0, Crossing::NoIntersect);
        // The vertex itself is boundary.
        assert_eq!(run((2, 2), (2, 2), (4, 6), Descending).0, Crossing::OnLine);
    }

    #[test]
    fn end_vertex_is_exclusive() {
        let (c, _) = run((0, 6), (2, 2), (4, 6), Direction::Ascending);
        assert_eq!(c, Crossing::NoIntersect);
    }

    #[test]
    fn vertical_edge() {
        use Direction::*;
        assert_eq!(run((10, 5), (10, 0), (10, 10), Ascending).0, Crossing::OnLine);
        assert_eq!(run((3, 5), (10, 0), (10, 10), Ascending).0, Crossing::Intersect);
        assert_eq!(run((11, 5), (10, 10), (10, 0), Descending).0, Crossing::NoIntersect);
        assert_eq!(run((3, 11), (10, 0), (10, 10), Ascending).0, Crossing::NoIntersect);
    }

    #[test]
    fn sloped_edge_uses_exact_side_test() {
        use Direction::*;
        // Edge (0,0)->(10,5): x on edge at y=2 is 4.
        assert_eq!(run((4, 2), (0, 0), (10, 5), Ascending).0, Crossing::OnLine);
        assert_eq!(run((3, 2), (0, 0), (10, 5), Ascending).0, Crossing::Intersect);
        assert_eq!(run((5, 2), (0, 0), (10, 5), Ascending).0, Crossing::NoIntersect);
        // Negative slope, x on edge at y=1 is -1/3; truncating division would give 0.
        assert_eq!(run((0, 1), (0, 0), (-1, 3), Ascending).0, Crossing::NoIntersect);
        assert_eq!(run((-1, 1), (0, 0), (-1, 3), Ascending).0, Crossing::Intersect);
    }

    #[test]
    fn sloped_edge_float() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(2.0, 4.0);
        let mut dir = Direction::Ascending;
        let e = Edge::new(&b, &a);
        assert_eq!(classify(&Point::new(0.5, 1.0), &e, &mut dir), Crossing::OnLine);
        assert_eq!(dir, Direction::Descending);
        assert_eq!(classify(&Point::new(0.25, 1.0), &e, &mut dir), Crossing::Intersect);
        assert_eq!(classify(&Point::new(0.75, 1.0), &e, &mut dir), Crossing::NoIntersect);
    }
}
