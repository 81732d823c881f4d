use array_init::array_init;
use std::ops::Add;
use std::ops::AddAssign;

use super::Point;
use crate::data::Vector;

// &point + &vector = point
impl<'a, 'b> Add<&'a Vector> for &'b Point {
  type Output = Point;

  fn add(self: &'b Point, other: &'a Vector) -> Self::Output {
    Point {
      array: array_init(|i| self.array[i] + other.0[i]),
    }
  }
}

// point + vector = point
impl Add<Vector> for Point {
  type Output = Point;

  fn add(self: Point, other: Vector) -> Self::Output {
    Add::add(&self, &other)
  }
}

// point += &vector
impl AddAssign<&Vector> for Point {
  fn add_assign(&mut self, other: &Vector) {
    for i in 0..2 {
      self.array[i] += other.0[i]
    }
  }
}

// point += vector
impl AddAssign<Vector> for Point {
  fn add_assign(&mut self, other: Vector) {
    *self += &other
  }
}
