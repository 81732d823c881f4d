use claims::debug_assert_ok;
use std::f64::consts::PI;
use std::ops::Deref;

use super::Polygon;
use crate::algorithms::intersection::{convex_poly_circle_intersect, convex_polys_intersect};
use crate::data::Circle;
use crate::data::Point;
use crate::data::Vector;
use crate::{Error, Intersects, Orientation};

/// Convex polygon with a consistent winding, clockwise or counter-clockwise.
/// Colinear vertices are allowed.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonConvex(Polygon);

///////////////////////////////////////////////////////////////////////////////
// PolygonConvex

impl PolygonConvex {
  /// $O(n)$ Validate that the points form a convex polygon.
  pub fn new(points: Vec<Point>) -> Result<PolygonConvex, Error> {
    let convex = PolygonConvex(Polygon::new(points)?);
    convex.validate().map_err(|err| {
      log::debug!("rejected non-convex polygon {:?}: {}", convex.0.vertices, err);
      err
    })?;
    Ok(convex)
  }

  /// $O(1)$ Assume that a polygon is convex.
  ///
  /// # Safety
  /// The input polygon has to be convex and simple. This is checked in debug
  /// builds only.
  pub fn new_unchecked(poly: Polygon) -> PolygonConvex {
    let convex = PolygonConvex(poly);
    debug_assert_ok!(convex.validate());
    convex
  }

  /// $O(n)$
  pub fn validate(&self) -> Result<(), Error> {
    self.0.validate()?;
    let mut turn = Orientation::CoLinear;
    let mut winding = 0.0;
    for cursor in self.0.iter_boundary() {
      let incoming = cursor.point() - cursor.prev().point();
      let outgoing = cursor.next().point() - cursor.point();
      let dot = incoming.dot(&outgoing);
      if !dot.is_finite() {
        return Err(Error::NonFinite);
      }
      match cursor.orientation() {
        Orientation::CoLinear => {
          // Straight continuation is fine, a reversal is a spike.
          if dot < 0.0 {
            return Err(Error::ConvexViolation);
          }
        }
        this => {
          if turn.is_colinear() {
            turn = this;
          } else if turn != this {
            return Err(Error::ConvexViolation);
          }
        }
      }
      winding += incoming.cross(&outgoing).atan2(dot);
    }
    if !winding.is_finite() {
      return Err(Error::NonFinite);
    }
    // Star polygons turn consistently but wind more than once.
    if winding.abs() > 3.0 * PI {
      return Err(Error::ConvexViolation);
    }
    Ok(())
  }

  /// $O(1)$
  pub fn polygon(&self) -> &Polygon {
    self.into()
  }

  #[must_use]
  pub fn translate(&self, by: &Vector) -> PolygonConvex {
    PolygonConvex(self.0.translate(by))
  }
}

///////////////////////////////////////////////////////////////////////////////
// Intersects

// Boundary crossing only: a polygon nested inside the other does not
// intersect it.
impl Intersects for &PolygonConvex {
  fn intersects(self, other: &PolygonConvex) -> bool {
    convex_polys_intersect(self, other)
  }
}

impl Intersects<&Circle> for &PolygonConvex {
  fn intersects(self, circle: &Circle) -> bool {
    convex_poly_circle_intersect(self, &circle.center, circle.radius)
  }
}

impl Intersects<&PolygonConvex> for &Circle {
  fn intersects(self, poly: &PolygonConvex) -> bool {
    poly.intersects(self)
  }
}

///////////////////////////////////////////////////////////////////////////////
// Trait Implementations

impl Deref for PolygonConvex {
  type Target = Polygon;
  fn deref(&self) -> &Self::Target {
    self.polygon()
  }
}

impl From<PolygonConvex> for Polygon {
  fn from(convex: PolygonConvex) -> Polygon {
    convex.0
  }
}

impl<'a> From<&'a PolygonConvex> for &'a Polygon {
  fn from(convex: &'a PolygonConvex) -> &'a Polygon {
    &convex.0
  }
}

impl TryFrom<Polygon> for PolygonConvex {
  type Error = Error;
  fn try_from(poly: Polygon) -> Result<PolygonConvex, Error> {
    let convex = PolygonConvex(poly);
    convex.validate()?;
    Ok(convex)
  }
}

///////////////////////////////////////////////////////////////////////////////
// Tests
