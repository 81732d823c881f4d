use array_init::array_init;
use ordered_float::OrderedFloat;
use rand::distributions::{Distribution, Standard};
use rand::Rng;
use std::ops::Deref;
use std::ops::Index;

use super::Vector;
use crate::{Error, Orientation};

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Point {
  pub array: [f64; 2],
}

// Random sampling in the unit square.
impl Distribution<Point> for Standard {
  fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Point {
    Point {
      array: array_init(|_| rng.gen()),
    }
  }
}

impl Point {
  /// Largest coordinate magnitude accepted by [`Point::validate`]. Products
  /// of coordinate differences stay finite below it, so orientation, dot
  /// and cross products of validated points never overflow.
  pub const MAX_COORDINATE: f64 = 1e150;

  pub const fn new(array: [f64; 2]) -> Point {
    Point { array }
  }

  /// Like [`Point::new`] but rejects NaN, infinite and out of range
  /// coordinates.
  pub fn new_finite(array: [f64; 2]) -> Result<Point, Error> {
    let pt = Point::new(array);
    pt.validate()?;
    Ok(pt)
  }

  pub fn validate(&self) -> Result<(), Error> {
    if self
      .array
      .iter()
      .all(|c| c.is_finite() && c.abs() <= Point::MAX_COORDINATE)
    {
      Ok(())
    } else {
      Err(Error::NonFinite)
    }
  }

  pub fn x_coord(&self) -> &f64 {
    &self.array[0]
  }

  pub fn y_coord(&self) -> &f64 {
    &self.array[1]
  }

  pub fn as_vec(&self) -> &Vector {
    self.into()
  }

  pub fn orientation(&self, q: &Point, r: &Point) -> Orientation {
    Orientation::new(self, q, r)
  }

  pub fn squared_euclidean_distance(&self, rhs: &Point) -> f64 {
    (rhs - self).squared_magnitude()
  }

  pub fn distance(&self, rhs: &Point) -> f64 {
    self.squared_euclidean_distance(rhs).sqrt()
  }

  /// Total order on the distance to `self`. NaN sorts last.
  pub fn distance_key(&self, rhs: &Point) -> OrderedFloat<f64> {
    OrderedFloat(self.squared_euclidean_distance(rhs))
  }

  pub fn midpoint(&self, rhs: &Point) -> Point {
    Point {
      array: array_init(|i| (self.array[i] + rhs.array[i]) * 0.5),
    }
  }

  #[must_use]
  pub fn translate(&self, by: &Vector) -> Point {
    self + by
  }
}

impl Index<usize> for Point {
  type Output = f64;
  fn index(&self, key: usize) -> &f64 {
    self.array.index(key)
  }
}

impl From<(f64, f64)> for Point {
  fn from(point: (f64, f64)) -> Point {
    Point {
      array: [point.0, point.1],
    }
  }
}

impl From<[f64; 2]> for Point {
  fn from(array: [f64; 2]) -> Point {
    Point { array }
  }
}

impl From<Vector> for Point {
  fn from(vector: Vector) -> Point {
    Point { array: vector.0 }
  }
}

impl Deref for Point {
  type Target = [f64; 2];
  fn deref(&self) -> &[f64; 2] {
    &self.array
  }
}

mod add;
mod sub;
