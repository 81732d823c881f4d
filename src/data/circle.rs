use super::Point;
use super::Vector;
use crate::algorithms::intersection::circle_circle_intersect;
use crate::{Error, Intersects};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
  pub center: Point,
  pub radius: f64,
}

impl Circle {
  pub fn new(center: Point, radius: f64) -> Result<Circle, Error> {
    let circle = Circle { center, radius };
    circle.validate().map_err(|err| {
      log::debug!("rejected circle at {:?} with radius {}: {}", center, radius, err);
      err
    })?;
    Ok(circle)
  }

  pub fn new_unchecked(center: Point, radius: f64) -> Circle {
    Circle { center, radius }
  }

  pub fn validate(&self) -> Result<(), Error> {
    self.center.validate()?;
    if !self.radius.is_finite() {
      return Err(Error::NonFinite);
    }
    if self.radius < 0.0 {
      return Err(Error::NegativeRadius);
    }
    Ok(())
  }

  /// True if `pt` is inside or on the circle.
  pub fn contains(&self, pt: &Point) -> bool {
    self.center.distance(pt) <= self.radius
  }

  #[must_use]
  pub fn translate(&self, by: &Vector) -> Circle {
    Circle {
      center: self.center.translate(by),
      radius: self.radius,
    }
  }
}

// Boundaries touch or cross. Nested circles do not intersect.
impl Intersects for &Circle {
  fn intersects(self, other: &Circle) -> bool {
    circle_circle_intersect(&self.center, self.radius, &other.center, other.radius)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn concentric_nested_do_not_intersect() {
    let c = Point::new([0.0, 0.0]);
    let big = Circle::new(c, 5.0).unwrap();
    let small = Circle::new(c, 2.0).unwrap();
    assert!(!big.intersects(&small));
    assert!(!small.intersects(&big));
  }

  #[test]
  fn tangent_circles_intersect() {
    let a = Circle::new(Point::new([0.0, 0.0]), 5.0).unwrap();
    let b = Circle::new(Point::new([10.0, 0.0]), 5.0).unwrap();
    assert!(a.intersects(&b));
  }

  #[test]
  fn internally_tangent_circles_intersect() {
    let a = Circle::new(Point::new([0.0, 0.0]), 5.0).unwrap();
    let b = Circle::new(Point::new([3.0, 0.0]), 2.0).unwrap();
    assert!(a.intersects(&b));
  }

  #[test]
  fn separated_circles() {
    let a = Circle::new(Point::new([0.0, 0.0]), 5.0).unwrap();
    let b = Circle::new(Point::new([10.5, 0.0]), 5.0).unwrap();
    assert!(!a.intersects(&b));
  }

  #[test]
  fn invalid_radius() {
    let c = Point::new([0.0, 0.0]);
    assert_eq!(Circle::new(c, -1.0), Err(Error::NegativeRadius));
    assert_eq!(Circle::new(c, f64::NAN), Err(Error::NonFinite));
    assert_eq!(
      Circle::new(Point::new([f64::INFINITY, 0.0]), 1.0),
      Err(Error::NonFinite)
    );
    assert!(Circle::new(c, 0.0).is_ok());
  }

  #[test]
  fn contains_and_translate() {
    let c = Circle::new(Point::new([1.0, 1.0]), 2.0).unwrap();
    assert!(c.contains(&Point::new([3.0, 1.0])));
    assert!(!c.contains(&Point::new([3.5, 1.0])));
    let moved = c.translate(&Vector([2.0, 0.0]));
    assert_eq!(moved.center, Point::new([3.0, 1.0]));
    assert_eq!(moved.radius, 2.0);
  }
}
