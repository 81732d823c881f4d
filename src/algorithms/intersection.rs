//! Boolean intersection predicates.
//!
//! Everything here reduces to [`Orientation::new`]. The predicates look at
//! boundaries, not regions: a polygon inside another polygon, a circle inside
//! a polygon and a circle inside another circle are all reported as not
//! intersecting.

use crate::data::{Point, PolygonConvex};
use crate::{Error, Orientation, Tolerance};

pub mod naive;

/// Sign of the turn `a -> b -> c`: `+1` if `c` is strictly left of the
/// directed line `a -> b`, `-1` if strictly right and `0` if colinear.
///
/// `a == b` always yields `0`.
pub fn orient(a: &Point, b: &Point, c: &Point) -> i8 {
  Orientation::new(a, b, c).sign()
}

/// True iff segments `a-b` and `c-d` cross.
///
/// The segments cross when `c` and `d` lie on different sides of line `a-b`
/// and `a` and `b` lie on different sides of line `c-d`, where "on the line"
/// counts as a side of its own. Consequences:
///
/// * colinear segments never cross, even when they overlap;
/// * an endpoint on the extension of the other segment does not cross;
/// * a T-junction, or a shared endpoint of non-parallel segments, crosses.
///
/// ```rust
/// # use convex_intersect::data::Point;
/// # use convex_intersect::algorithms::segments_intersect;
/// let p = |x, y| Point::new([x, y]);
/// assert!(segments_intersect(&p(0., 0.), &p(2., 2.), &p(0., 2.), &p(2., 0.)));
/// assert!(!segments_intersect(&p(0., 0.), &p(2., 0.), &p(1., 0.), &p(3., 0.)));
/// ```
pub fn segments_intersect(a: &Point, b: &Point, c: &Point, d: &Point) -> bool {
  orient(a, b, c) != orient(a, b, d) && orient(c, d, a) != orient(c, d, b)
}

/// Intersection point of the infinite lines through `a-b` and `c-d`, solved
/// with Cramer's rule. Uses the default [`Tolerance`].
pub fn line_intersection(a: &Point, b: &Point, c: &Point, d: &Point) -> Result<Point, Error> {
  line_intersection_with(a, b, c, d, &Tolerance::default())
}

/// Like [`line_intersection`] with an explicit tolerance.
///
/// Fails with [`Error::DegenerateSegment`] if either pair of points
/// coincides and with [`Error::ParallelLines`] when
/// `|D| <= eps_det * |a - b| * |c - d|`. A crossing that overflows or lies
/// beyond [`Point::MAX_COORDINATE`] is [`Error::NonFinite`].
pub fn line_intersection_with(
  a: &Point,
  b: &Point,
  c: &Point,
  d: &Point,
  tolerance: &Tolerance,
) -> Result<Point, Error> {
  let [x1, y1] = a.array;
  let [x2, y2] = b.array;
  let [x3, y3] = c.array;
  let [x4, y4] = d.array;
  let d1 = a - b;
  let d2 = c - d;
  if d1.squared_magnitude() == 0.0 || d2.squared_magnitude() == 0.0 {
    return Err(Error::DegenerateSegment);
  }
  let det = d1.cross(&d2);
  if det.abs() <= tolerance.eps_det * d1.magnitude() * d2.magnitude() {
    return Err(Error::ParallelLines);
  }
  let p = x1 * y2 - y1 * x2;
  let q = x3 * y4 - y3 * x4;
  let pt = Point::new([
    (p * (x3 - x4) - (x1 - x2) * q) / det,
    (p * (y3 - y4) - (y1 - y2) * q) / det,
  ]);
  pt.validate()?;
  Ok(pt)
}

/// Euclidean distance from `p` to the closed segment `a-b`. A degenerate
/// segment is treated as the single point `a`.
pub fn segment_point_distance(a: &Point, b: &Point, p: &Point) -> f64 {
  let ab = b - a;
  let ap = p - a;
  let len2 = ab.squared_magnitude();
  if len2 == 0.0 {
    return ap.magnitude();
  }
  let t = (ap.dot(&ab) / len2).clamp(0.0, 1.0);
  (ap - ab * t).magnitude()
}

/// True iff the closed segment `a-b` comes within `radius` of `center`.
pub fn segment_circle_intersect(a: &Point, b: &Point, center: &Point, radius: f64) -> bool {
  segment_point_distance(a, b, center) <= radius
}

/// True iff the boundaries of two convex polygons cross.
///
/// Every edge of `poly` is tested against every edge of `poly2` with
/// [`segments_intersect`]. A polygon strictly inside the other has no
/// crossing edges and is reported as not intersecting.
///
/// Comparing a polygon with an exact copy of itself is degenerate: matching
/// edges are colinear and never cross, while neighbouring edges meet at
/// shared vertices. The result carries no geometric meaning.
///
/// # Time complexity
/// $O(n \cdot m)$
pub fn convex_polys_intersect(poly: &PolygonConvex, poly2: &PolygonConvex) -> bool {
  // Any crossing point lies in both bounding boxes.
  let (min1, max1) = poly.bounding_box();
  let (min2, max2) = poly2.bounding_box();
  if (0..2).any(|i| max1.array[i] < min2.array[i] || max2.array[i] < min1.array[i]) {
    return false;
  }
  poly.iter_boundary_edges().any(|e1| {
    poly2
      .iter_boundary_edges()
      .any(|e2| segments_intersect(&e1.a, &e1.b, &e2.a, &e2.b))
  })
}

/// True iff some edge of `poly` comes within `radius` of `center`.
///
/// A circle strictly inside the polygon and clear of every edge is reported
/// as not intersecting. A polygon inside the circle is within the radius and
/// is reported as intersecting.
pub fn convex_poly_circle_intersect(poly: &PolygonConvex, center: &Point, radius: f64) -> bool {
  poly
    .iter_boundary_edges()
    .any(|edge| segment_circle_intersect(&edge.a, &edge.b, center, radius))
}

/// True iff `|r1 - r2| <= |c1 - c2| <= r1 + r2`: the circles touch or cross.
/// Nested circles that do not touch are reported as not intersecting.
pub fn circle_circle_intersect(center1: &Point, radius1: f64, center2: &Point, radius2: f64) -> bool {
  let d = center1.distance(center2);
  if d > radius1 + radius2 {
    return false;
  }
  if d < (radius1 - radius2).abs() {
    return false;
  }
  true
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::algorithms::make_rectangle;
  use crate::data::Vector;
  use crate::testing::*;

  use test_strategy::proptest;

  fn square(x: f64, y: f64, size: f64) -> PolygonConvex {
    make_rectangle(Point::new([x, y]), Vector([1.0, 0.0]), size).unwrap()
  }

  fn axis_square(x: f64, y: f64, half: f64) -> PolygonConvex {
    PolygonConvex::new(vec![
      Point::new([x - half, y - half]),
      Point::new([x + half, y - half]),
      Point::new([x + half, y + half]),
      Point::new([x - half, y + half]),
    ])
    .unwrap()
  }

  #[proptest]
  fn segments_intersect_symmetric(
    #[strategy(any_point())] a: Point,
    #[strategy(any_point())] b: Point,
    #[strategy(any_point())] c: Point,
    #[strategy(any_point())] d: Point,
  ) {
    assert_eq!(segments_intersect(&a, &b, &c, &d), segments_intersect(&c, &d, &a, &b));
  }

  #[proptest]
  fn polys_intersect_symmetric(
    #[strategy(any_convex())] p: PolygonConvex,
    #[strategy(any_convex())] q: PolygonConvex,
  ) {
    assert_eq!(convex_polys_intersect(&p, &q), convex_polys_intersect(&q, &p));
  }

  // The bounding box filter never changes the verdict.
  #[proptest]
  fn bbox_filter_is_transparent(
    #[strategy(any_convex())] p: PolygonConvex,
    #[strategy(any_convex())] q: PolygonConvex,
  ) {
    let exhaustive = p.iter_boundary_edges().any(|e1| {
      q.iter_boundary_edges()
        .any(|e2| segments_intersect(&e1.a, &e1.b, &e2.a, &e2.b))
    });
    assert_eq!(convex_polys_intersect(&p, &q), exhaustive);
  }

  #[proptest]
  fn circles_intersect_symmetric(
    #[strategy(any_point())] c1: Point,
    #[strategy(0.0..1000.0)] r1: f64,
    #[strategy(any_point())] c2: Point,
    #[strategy(0.0..1000.0)] r2: f64,
  ) {
    assert_eq!(
      circle_circle_intersect(&c1, r1, &c2, r2),
      circle_circle_intersect(&c2, r2, &c1, r1)
    );
  }

  #[test]
  fn orient_signs() {
    let a = Point::new([0.0, 0.0]);
    let b = Point::new([1.0, 0.0]);
    assert_eq!(orient(&a, &b, &Point::new([0.5, 1.0])), 1);
    assert_eq!(orient(&a, &b, &Point::new([0.5, -1.0])), -1);
    assert_eq!(orient(&a, &b, &Point::new([7.0, 0.0])), 0);
    assert_eq!(orient(&b, &a, &Point::new([0.5, 1.0])), -1);
  }

  #[test]
  fn separated_squares() {
    assert!(!convex_polys_intersect(&square(0.0, 0.0, 2.0), &square(100.0, 0.0, 2.0)));
    assert!(!convex_polys_intersect(&axis_square(0.0, 0.0, 1.0), &axis_square(100.0, 0.0, 1.0)));
  }

  #[test]
  fn overlapping_squares() {
    assert!(convex_polys_intersect(&square(0.0, 0.0, 10.0), &square(5.0, 0.0, 10.0)));
    assert!(convex_polys_intersect(&axis_square(0.0, 0.0, 5.0), &axis_square(5.0, 3.0, 5.0)));
  }

  #[test]
  fn nested_squares_do_not_intersect() {
    let big = square(0.0, 0.0, 100.0);
    let small = square(1.0, 1.0, 4.0);
    assert!(!convex_polys_intersect(&big, &small));
    assert!(!convex_polys_intersect(&small, &big));
  }

  #[test]
  fn line_intersection_cramer() {
    let p = |x, y| Point::new([x, y]);
    assert_eq!(
      line_intersection(&p(0.0, 0.0), &p(4.0, 0.0), &p(1.0, -1.0), &p(1.0, 3.0)),
      Ok(p(1.0, 0.0))
    );
    // The segments need not overlap, only the lines.
    assert_eq!(
      line_intersection(&p(0.0, 0.0), &p(1.0, 1.0), &p(10.0, 0.0), &p(9.0, 1.0)),
      Ok(p(5.0, 5.0))
    );
  }

  #[test]
  fn line_intersection_errors() {
    let p = |x, y| Point::new([x, y]);
    assert_eq!(
      line_intersection(&p(0.0, 0.0), &p(1.0, 1.0), &p(0.0, 1.0), &p(1.0, 2.0)),
      Err(Error::ParallelLines)
    );
    assert_eq!(
      line_intersection(&p(0.0, 0.0), &p(0.0, 0.0), &p(0.0, 1.0), &p(1.0, 2.0)),
      Err(Error::DegenerateSegment)
    );
  }

  // Far from the origin and nearly parallel, but above the tolerance. The
  // crossing lies around x = 1e161 and Cramer's numerator overflows.
  #[test]
  fn line_intersection_overflow() {
    let p = |x, y| Point::new([x, y]);
    assert_eq!(
      line_intersection(&p(0.0, 0.0), &p(1e150, 0.0), &p(0.0, 1e150), &p(1e150, 1e150 - 1e139)),
      Err(Error::NonFinite)
    );
  }

  #[test]
  fn point_segment_distance() {
    let a = Point::new([0.0, 0.0]);
    let b = Point::new([4.0, 0.0]);
    assert_eq!(segment_point_distance(&a, &b, &Point::new([2.0, 3.0])), 3.0);
    assert_eq!(segment_point_distance(&a, &b, &Point::new([7.0, 4.0])), 5.0);
    assert_eq!(segment_point_distance(&a, &b, &Point::new([-3.0, -4.0])), 5.0);
    assert_eq!(segment_point_distance(&a, &a, &Point::new([3.0, 4.0])), 5.0);
  }

  #[test]
  fn poly_circle() {
    let sq = axis_square(0.0, 0.0, 5.0);
    // Crossing an edge.
    assert!(convex_poly_circle_intersect(&sq, &Point::new([6.0, 0.0]), 2.0));
    // Touching an edge.
    assert!(convex_poly_circle_intersect(&sq, &Point::new([7.0, 0.0]), 2.0));
    // Clear of the polygon.
    assert!(!convex_poly_circle_intersect(&sq, &Point::new([8.0, 0.0]), 2.0));
    // Nested inside the polygon.
    assert!(!convex_poly_circle_intersect(&sq, &Point::new([0.0, 0.0]), 2.0));
    // A polygon inside the circle has its edges within the radius.
    assert!(convex_poly_circle_intersect(&sq, &Point::new([0.0, 0.0]), 100.0));
  }

  #[test]
  fn circle_circle() {
    let o = Point::new([0.0, 0.0]);
    assert!(!circle_circle_intersect(&o, 5.0, &o, 2.0));
    assert!(circle_circle_intersect(&o, 5.0, &Point::new([10.0, 0.0]), 5.0));
    assert!(!circle_circle_intersect(&o, 5.0, &Point::new([10.0, 0.0]), 4.0));
    assert!(circle_circle_intersect(&o, 5.0, &Point::new([6.0, 0.0]), 4.0));
    assert!(circle_circle_intersect(&o, 5.0, &o, 5.0));
  }
}
