//! Polygons built from a small set of anchor points.
//!
//! The helpers are pure: re-running them after an anchor moves yields the
//! updated vertex circulation.

use crate::data::{Point, PolygonConvex, Vector};
use crate::Error;

/// Square with the given `center` whose vertices sit at `center ± u * size/2`
/// and `center ± perp(u) * size/2`, where `perp` is the exact
/// counter-clockwise quarter turn. With a unit `u` the vertices are `size/2`
/// away from the center.
///
/// The circulation is `[c + u·h, c + v·h, c - u·h, c - v·h]`, which is
/// counter-clockwise.
///
/// ```rust
/// # use convex_intersect::data::*;
/// # use convex_intersect::algorithms::make_rectangle;
/// let sq = make_rectangle(Point::new([0.0, 0.0]), Vector([1.0, 0.0]), 4.0).unwrap();
/// assert_eq!(sq.vertices(), &[
///   Point::new([2.0, 0.0]),
///   Point::new([0.0, 2.0]),
///   Point::new([-2.0, 0.0]),
///   Point::new([0.0, -2.0]),
/// ]);
/// ```
pub fn make_rectangle(center: Point, u: Vector, size: f64) -> Result<PolygonConvex, Error> {
  if !size.is_finite() {
    return Err(Error::NonFinite);
  }
  if u.0 == [0.0, 0.0] {
    return Err(Error::DegenerateSegment);
  }
  let v = u.perp();
  let half = size / 2.0;
  let p1 = &center + &(u * half);
  let p2 = &center + &(v * half);
  let p3 = &center + &(u * -half);
  let p4 = &center + &(v * -half);
  PolygonConvex::new(vec![p1, p2, p3, p4])
}

/// Isosceles triangle given the midpoint of its base and the opposite vertex
/// (apex). The base vertices are `base_point ± perp(base_point - apex)`, so
/// the base is twice as long as the height.
///
/// The circulation is `[apex, base + perp(u), base - perp(u)]`.
pub fn isosceles(base_point: Point, opposite_vertex: Point) -> Result<PolygonConvex, Error> {
  if base_point == opposite_vertex {
    return Err(Error::DegenerateSegment);
  }
  let u = &base_point - &opposite_vertex;
  let v = u.perp();
  PolygonConvex::new(vec![
    opposite_vertex,
    &base_point + &v,
    &base_point - &v,
  ])
}

///////////////////////////////////////////////////////////////////////////////
// Parameterized shapes

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IsoscelesTriangle {
  pub base_point: Point,
  pub opposite_vertex: Point,
}

impl IsoscelesTriangle {
  pub fn new(base_point: Point, opposite_vertex: Point) -> IsoscelesTriangle {
    IsoscelesTriangle {
      base_point,
      opposite_vertex,
    }
  }

  pub fn polygon(&self) -> Result<PolygonConvex, Error> {
    isosceles(self.base_point, self.opposite_vertex)
  }

  /// `[base_point, opposite_vertex]`.
  pub fn anchors(&self) -> Vec<Point> {
    vec![self.base_point, self.opposite_vertex]
  }

  /// Move the whole triangle.
  pub fn translate(&mut self, by: &Vector) {
    self.base_point += by;
    self.opposite_vertex += by;
  }

  /// Move the apex only. The base midpoint stays put.
  pub fn move_apex(&mut self, by: &Vector) {
    self.opposite_vertex += by;
  }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
  pub center: Point,
  pub u: Vector,
  pub size: f64,
}

impl Rectangle {
  pub fn new(center: Point, u: Vector, size: f64) -> Rectangle {
    Rectangle { center, u, size }
  }

  pub fn polygon(&self) -> Result<PolygonConvex, Error> {
    make_rectangle(self.center, self.u, self.size)
  }

  /// The center followed by the midpoint of every edge.
  pub fn anchors(&self) -> Vec<Point> {
    let mut anchors = vec![self.center];
    if let Ok(poly) = self.polygon() {
      anchors.extend(poly.midpoints());
    }
    anchors
  }

  pub fn translate(&mut self, by: &Vector) {
    self.center += by;
  }
}
