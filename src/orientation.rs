use crate::data::Point;

#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Copy, Clone)]
pub enum Orientation {
  CounterClockWise,
  ClockWise,
  CoLinear,
}

impl Orientation {
  /// Determine the direction you have to turn if you walk from `p1`
  /// to `p2` to `p3`.
  ///
  /// The sign is that of the cross product `(p2 - p1) x (p3 - p1)`, computed
  /// with adaptive precision so it is exact for every point that passes
  /// [`Point::validate`]. A counter-clockwise turn means `p3` is strictly
  /// left of the directed line `p1 -> p2`.
  ///
  /// Larger finite coordinates overflow the determinant. Those inputs are
  /// scaled down by a power of two first, which keeps the sign but rounds
  /// away coordinates below `2^-500`.
  ///
  /// If `p1 == p2` the line is undefined and the result is always
  /// [`CoLinear`](Orientation::CoLinear).
  ///
  /// # Panics
  /// In debug builds, if any coordinate is NaN or infinite.
  ///
  /// # Examples
  ///
  /// ```rust
  /// # use convex_intersect::data::Point;
  /// # use convex_intersect::Orientation;
  /// let p1 = Point::new([0.0, 0.0]);
  /// let p2 = Point::new([0.0, 1.0]); // One unit above p1.
  /// assert!(Orientation::new(&p1, &p2, &Point::new([0.0, 2.0])).is_colinear());
  /// assert!(Orientation::new(&p1, &p2, &Point::new([-1.0, 2.0])).is_ccw());
  /// assert!(Orientation::new(&p1, &p2, &Point::new([1.0, 2.0])).is_cw());
  /// ```
  pub fn new(p1: &Point, p2: &Point, p3: &Point) -> Orientation {
    let mut det = geometry_predicates::predicates::orient2d(p1.array, p2.array, p3.array);
    if det.is_nan() {
      let scale = 2f64.powi(-520);
      let down = |p: &Point| p.array.map(|c| c * scale);
      det = geometry_predicates::predicates::orient2d(down(p1), down(p2), down(p3));
    }
    debug_assert!(!det.is_nan(), "orientation of non-finite points");
    if det > 0.0 {
      Orientation::CounterClockWise
    } else if det < 0.0 {
      Orientation::ClockWise
    } else {
      Orientation::CoLinear
    }
  }

  /// `+1` for counter-clockwise, `-1` for clockwise and `0` for colinear.
  pub fn sign(self) -> i8 {
    match self {
      Orientation::CounterClockWise => 1,
      Orientation::ClockWise => -1,
      Orientation::CoLinear => 0,
    }
  }

  pub fn is_colinear(self) -> bool {
    matches!(self, Orientation::CoLinear)
  }

  pub fn is_ccw(self) -> bool {
    matches!(self, Orientation::CounterClockWise)
  }

  pub fn is_cw(self) -> bool {
    matches!(self, Orientation::ClockWise)
  }

  #[must_use]
  pub fn then(self, other: Orientation) -> Orientation {
    match self {
      Orientation::CoLinear => other,
      _ => self,
    }
  }

  #[must_use]
  pub fn reverse(self) -> Orientation {
    match self {
      Orientation::CounterClockWise => Orientation::ClockWise,
      Orientation::ClockWise => Orientation::CounterClockWise,
      Orientation::CoLinear => Orientation::CoLinear,
    }
  }
}
