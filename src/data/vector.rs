use array_init::array_init;
use num_traits::identities::Zero;
use rand::distributions::{Distribution, Standard};
use rand::Rng;
use std::iter::Sum;
use std::ops::Index;
use std::ops::Neg;

use crate::data::Point;
use crate::Error;

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Vector(pub [f64; 2]);

impl Distribution<Vector> for Standard {
  fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Vector {
    Vector(array_init(|_| rng.gen()))
  }
}

impl Vector {
  pub fn dot(&self, other: &Vector) -> f64 {
    self.0[0] * other.0[0] + self.0[1] * other.0[1]
  }

  /// z-component of the 3D cross product. Positive when `other` is
  /// counter-clockwise from `self`.
  pub fn cross(&self, other: &Vector) -> f64 {
    self.0[0] * other.0[1] - self.0[1] * other.0[0]
  }

  pub fn squared_magnitude(&self) -> f64 {
    self.dot(self)
  }

  pub fn magnitude(&self) -> f64 {
    self.0[0].hypot(self.0[1])
  }

  /// Exact counter-clockwise rotation by 90 degrees: `(x, y) -> (-y, x)`.
  #[must_use]
  pub fn perp(&self) -> Vector {
    Vector([-self.0[1], self.0[0]])
  }

  /// Counter-clockwise rotation by `angle` radians.
  #[must_use]
  pub fn rotate(&self, angle: f64) -> Vector {
    let (sin, cos) = angle.sin_cos();
    Vector([
      self.0[0] * cos - self.0[1] * sin,
      self.0[0] * sin + self.0[1] * cos,
    ])
  }

  pub fn normalize(&self) -> Result<Vector, Error> {
    let len = self.magnitude();
    if !len.is_finite() {
      Err(Error::NonFinite)
    } else if len == 0.0 {
      Err(Error::DegenerateSegment)
    } else {
      Ok(*self / len)
    }
  }
}

impl Index<usize> for Vector {
  type Output = f64;
  fn index(&self, index: usize) -> &f64 {
    self.0.index(index)
  }
}

impl From<Point> for Vector {
  fn from(point: Point) -> Vector {
    Vector(point.array)
  }
}

impl<'a> From<&'a Point> for &'a Vector {
  fn from(point: &Point) -> &Vector {
    // Both types are repr(transparent) over [f64; 2].
    unsafe { &*(point as *const Point as *const Vector) }
  }
}

mod add;
mod mul;
mod sub;

impl Zero for Vector {
  fn zero() -> Vector {
    Vector([0.0, 0.0])
  }
  fn is_zero(&self) -> bool {
    self.0.iter().all(Zero::is_zero)
  }
}

impl Sum for Vector {
  fn sum<I>(iter: I) -> Vector
  where
    I: Iterator<Item = Vector>,
  {
    let mut acc = Zero::zero();
    for vec in iter {
      acc += vec;
    }
    acc
  }
}

impl Neg for Vector {
  type Output = Self;
  fn neg(self) -> Self {
    Vector(array_init(|i| -self.0[i]))
  }
}
