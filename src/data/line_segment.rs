use super::Circle;
use super::Point;
use crate::algorithms::intersection::{segment_point_distance, segments_intersect};
use crate::{Error, Intersects};

///////////////////////////////////////////////////////////////////////////////
// LineSegment

/// Closed segment from `a` to `b`. The direction only matters for the sign
/// of orientation tests, never for intersection results.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
  pub a: Point,
  pub b: Point,
}

impl LineSegment {
  pub fn new(a: Point, b: Point) -> Result<LineSegment, Error> {
    let segment = LineSegment { a, b };
    segment.validate().map_err(|err| {
      log::debug!("rejected segment {:?} -> {:?}: {}", a, b, err);
      err
    })?;
    Ok(segment)
  }

  pub fn new_unchecked(a: Point, b: Point) -> LineSegment {
    LineSegment { a, b }
  }

  pub fn validate(&self) -> Result<(), Error> {
    self.a.validate()?;
    self.b.validate()?;
    if self.a == self.b {
      return Err(Error::DegenerateSegment);
    }
    Ok(())
  }

  pub fn length(&self) -> f64 {
    self.a.distance(&self.b)
  }

  pub fn midpoint(&self) -> Point {
    self.a.midpoint(&self.b)
  }

  pub fn distance_to(&self, pt: &Point) -> f64 {
    segment_point_distance(&self.a, &self.b, pt)
  }

  /// Point of the segment closest to `pt`.
  pub fn closest_point(&self, pt: &Point) -> Point {
    let ab = &self.b - &self.a;
    let len2 = ab.squared_magnitude();
    if len2 == 0.0 {
      return self.a;
    }
    let t = ((pt - &self.a).dot(&ab) / len2).clamp(0.0, 1.0);
    &self.a + &(ab * t)
  }
}

impl From<(Point, Point)> for LineSegment {
  fn from((a, b): (Point, Point)) -> LineSegment {
    LineSegment::new_unchecked(a, b)
  }
}

///////////////////////////////////////////////////////////////////////////////
// Intersects

// Strict, transversal crossing. Colinear overlaps never cross.
impl Intersects for &LineSegment {
  fn intersects(self, other: &LineSegment) -> bool {
    segments_intersect(&self.a, &self.b, &other.a, &other.b)
  }
}

impl Intersects<&Circle> for &LineSegment {
  fn intersects(self, circle: &Circle) -> bool {
    self.distance_to(&circle.center) <= circle.radius
  }
}

impl Intersects<&LineSegment> for &Circle {
  fn intersects(self, segment: &LineSegment) -> bool {
    segment.intersects(self)
  }
}

///////////////////////////////////////////////////////////////////////////////
// Tests
