use array_init::array_init;
use std::ops::Add;
use std::ops::AddAssign;

use super::Vector;

impl<'a, 'b> Add<&'a Vector> for &'b Vector {
  type Output = Vector;

  fn add(self: &'b Vector, other: &'a Vector) -> Self::Output {
    Vector(array_init(|i| self.0[i] + other.0[i]))
  }
}

impl Add<Vector> for Vector {
  type Output = Vector;

  fn add(self: Vector, other: Vector) -> Self::Output {
    Add::add(&self, &other)
  }
}

impl AddAssign<Vector> for Vector {
  fn add_assign(&mut self, other: Vector) {
    for i in 0..2 {
      self.0[i] += other.0[i]
    }
  }
}
