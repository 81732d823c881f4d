use super::Point;
use super::Vector;
use crate::algorithms::intersection::line_intersection_with;
use crate::{Error, Tolerance};

///////////////////////////////////////////////////////////////////////////////
// Line

/// Infinite line through `origin` and `through`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
  pub origin: Point,
  pub through: Point,
}

impl Line {
  pub fn new(origin: Point, through: Point) -> Result<Line, Error> {
    origin.validate()?;
    through.validate()?;
    if origin == through {
      log::debug!("rejected line through a single point {:?}", origin);
      return Err(Error::DegenerateSegment);
    }
    Ok(Line { origin, through })
  }

  pub fn new_unchecked(origin: Point, through: Point) -> Line {
    Line { origin, through }
  }

  pub fn direction(&self) -> Vector {
    &self.through - &self.origin
  }

  pub fn is_parallel(&self, other: &Line, tolerance: &Tolerance) -> bool {
    let d1 = self.direction();
    let d2 = other.direction();
    d1.cross(&d2).abs() <= tolerance.eps_det * d1.magnitude() * d2.magnitude()
  }

  /// The unique point shared by both lines.
  ///
  /// Fails with [`Error::ParallelLines`] when the lines are parallel (or
  /// coincident) up to the default [`Tolerance`].
  pub fn intersection(&self, other: &Line) -> Result<Point, Error> {
    self.intersection_with(other, &Tolerance::default())
  }

  pub fn intersection_with(&self, other: &Line, tolerance: &Tolerance) -> Result<Point, Error> {
    line_intersection_with(
      &self.origin,
      &self.through,
      &other.origin,
      &other.through,
      tolerance,
    )
  }
}
