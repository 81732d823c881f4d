use array_init::array_init;
use std::ops::Div;
use std::ops::Mul;

use super::Vector;

// vector * scalar = vector
impl Mul<f64> for Vector {
  type Output = Vector;

  fn mul(self: Vector, other: f64) -> Self::Output {
    Vector(array_init(|i| self.0[i] * other))
  }
}

// scalar * vector = vector
impl Mul<Vector> for f64 {
  type Output = Vector;

  fn mul(self: f64, other: Vector) -> Self::Output {
    other * self
  }
}

impl Div<f64> for Vector {
  type Output = Vector;

  fn div(self: Vector, other: f64) -> Self::Output {
    Vector(array_init(|i| self.0[i] / other))
  }
}
