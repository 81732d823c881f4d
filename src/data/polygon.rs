use crate::data::LineSegment;
use crate::data::Point;
use crate::data::Vector;
use crate::Error;
use crate::Orientation;

mod iter;
pub use iter::*;

mod convex;
pub use convex::*;

/// Simple polygon given by its vertex circulation. Edge `i` connects vertex
/// `i` to vertex `(i + 1) % n`. Either winding is accepted.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
  pub(crate) vertices: Vec<Point>,
}

impl Polygon {
  pub fn new_unchecked(vertices: Vec<Point>) -> Polygon {
    Polygon { vertices }
  }

  pub fn new(points: Vec<Point>) -> Result<Polygon, Error> {
    let p = Self::new_unchecked(points);
    p.validate().map_err(|err| {
      log::debug!("rejected polygon with {} vertices: {}", p.vertices.len(), err);
      err
    })?;
    Ok(p)
  }

  // Checks the cheap structural invariants. Simplicity is only verified for
  // convex polygons, see `PolygonConvex::validate`.
  pub fn validate(&self) -> Result<(), Error> {
    // Has at least three points.
    if self.vertices.len() < 3 {
      return Err(Error::InsufficientVertices);
    }
    for pt in self.iter() {
      pt.validate()?;
    }
    // Every edge has a length.
    if self.iter_boundary_edges().any(|edge| edge.a == edge.b) {
      return Err(Error::DuplicatePoints);
    }
    Ok(())
  }

  pub fn len(&self) -> usize {
    self.vertices.len()
  }

  pub fn is_empty(&self) -> bool {
    self.vertices.is_empty()
  }

  pub fn point(&self, idx: usize) -> &Point {
    &self.vertices[idx]
  }

  pub fn vertices(&self) -> &[Point] {
    &self.vertices
  }

  /// Panics if `idx` is out of bounds.
  pub fn cursor(&self, idx: usize) -> Cursor<'_> {
    assert!(idx < self.vertices.len());
    Cursor {
      polygon: self,
      position: idx,
    }
  }

  pub fn iter_boundary(&self) -> CursorIter<'_> {
    CursorIter {
      polygon: self,
      next: 0,
    }
  }

  pub fn iter_boundary_edges(&self) -> EdgeIter<'_> {
    EdgeIter {
      iter: self.iter_boundary(),
    }
  }

  pub fn iter(&self) -> Iter<'_> {
    Iter {
      iter: self.vertices.iter(),
    }
  }

  /// Midpoints of every edge, in edge order.
  pub fn midpoints(&self) -> Vec<Point> {
    self
      .iter_boundary_edges()
      .map(|edge| edge.midpoint())
      .collect()
  }

  /// The vertex closest to `pt`. The first vertex wins ties.
  ///
  /// Panics if the polygon has no vertices.
  pub fn closest_vertex(&self, pt: &Point) -> &Point {
    let mut closest = &self.vertices[0];
    let mut min_dist = pt.distance_key(closest);
    for vertex in &self.vertices[1..] {
      let dist = pt.distance_key(vertex);
      if dist < min_dist {
        min_dist = dist;
        closest = vertex;
      }
    }
    closest
  }

  /// Twice the signed area. Positive for counter-clockwise circulations.
  pub fn signed_area_2x(&self) -> f64 {
    self
      .iter_boundary_edges()
      .map(|edge| edge.a.as_vec().cross(edge.b.as_vec()))
      .sum()
  }

  pub fn signed_area(&self) -> f64 {
    self.signed_area_2x() / 2.0
  }

  /// Winding of the circulation, derived from the signed area.
  pub fn orientation(&self) -> Orientation {
    let area = self.signed_area_2x();
    if area > 0.0 {
      Orientation::CounterClockWise
    } else if area < 0.0 {
      Orientation::ClockWise
    } else {
      Orientation::CoLinear
    }
  }

  /// Axis-aligned bounding box as `(min, max)`.
  ///
  /// Panics if the polygon has no vertices.
  pub fn bounding_box(&self) -> (Point, Point) {
    let mut min = self.vertices[0];
    let mut max = self.vertices[0];
    for pt in self.iter() {
      for i in 0..2 {
        min.array[i] = min.array[i].min(pt.array[i]);
        max.array[i] = max.array[i].max(pt.array[i]);
      }
    }
    (min, max)
  }

  pub fn map_points<F>(self, f: F) -> Polygon
  where
    F: Fn(Point) -> Point,
  {
    Polygon {
      vertices: self.vertices.into_iter().map(f).collect(),
    }
  }

  #[must_use]
  pub fn translate(&self, by: &Vector) -> Polygon {
    self.clone().map_points(|pt| pt.translate(by))
  }
}

impl From<Polygon> for Vec<Point> {
  fn from(poly: Polygon) -> Vec<Point> {
    poly.vertices
  }
}

#[derive(Debug, Clone, Copy)]
pub struct Cursor<'a> {
  polygon: &'a Polygon,
  pub(crate) position: usize,
}

impl<'a> PartialEq for Cursor<'a> {
  fn eq(&self, other: &Self) -> bool {
    std::ptr::eq(self.polygon, other.polygon) && self.position == other.position
  }
}

impl<'a> Cursor<'a> {
  pub fn position(self) -> usize {
    self.position
  }

  pub fn point(self) -> &'a Point {
    self.polygon.point(self.position)
  }

  #[must_use]
  pub fn prev(mut self) -> Cursor<'a> {
    self.move_prev();
    self
  }

  #[must_use]
  pub fn next(mut self) -> Cursor<'a> {
    self.move_next();
    self
  }

  pub fn move_next(&mut self) {
    self.position = (self.position + 1) % self.polygon.len();
  }

  pub fn move_prev(&mut self) {
    let n = self.polygon.len();
    self.position = (self.position + n - 1) % n;
  }

  /// Turn made at this vertex: `prev -> self -> next`.
  pub fn orientation(&self) -> Orientation {
    let p1 = self.prev().point();
    let p2 = self.point();
    let p3 = self.next().point();
    Orientation::new(p1, p2, p3)
  }

  /// The edge leaving this vertex.
  pub fn edge(&self) -> LineSegment {
    LineSegment::new_unchecked(*self.point(), *self.next().point())
  }
}
