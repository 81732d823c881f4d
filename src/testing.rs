// This module contains strategies for:
//  * points and vectors
//  * segments and lines
//  * convex polygons
// A Strategy is a way to generate a shrinkable value.
use crate::data::{Line, LineSegment, Point, PolygonConvex, Vector};

use proptest::arbitrary::*;
use proptest::prelude::*;
use proptest::strategy::*;
use std::f64::consts::TAU;

///////////////////////////////////////////////////////////////////////////////
// Points and vectors

// Coordinates stay within ±1000 so sums and products of a handful of them
// remain exactly representable far from overflow. One in four points is
// snapped to a small integer grid to make colinear and coincident inputs
// common.
fn coordinate() -> impl Strategy<Value = f64> {
  prop_oneof![
    3 => -1000.0..1000.0,
    1 => (-8_i32..8).prop_map(f64::from),
  ]
}

pub fn any_point() -> impl Strategy<Value = Point> {
  (coordinate(), coordinate()).prop_map(|(x, y)| Point::new([x, y]))
}

pub fn any_vector() -> impl Strategy<Value = Vector> {
  (coordinate(), coordinate()).prop_map(|(x, y)| Vector([x, y]))
}

///////////////////////////////////////////////////////////////////////////////
// Segments and lines

pub fn any_segment() -> impl Strategy<Value = LineSegment> {
  (any_point(), any_point())
    .prop_filter_map("Degenerate segment", |(a, b)| LineSegment::new(a, b).ok())
}

pub fn any_line() -> impl Strategy<Value = Line> {
  (any_point(), any_point()).prop_filter_map("Degenerate line", |(a, b)| Line::new(a, b).ok())
}

///////////////////////////////////////////////////////////////////////////////
// Arbitrary convex polygons

// Regular n-gons with a random center, circumradius and rotation. Half of
// them are wound clockwise.
pub fn any_convex() -> impl Strategy<Value = PolygonConvex> {
  (any_point(), 1.0..500.0, 0.0..TAU, 3_usize..12, any::<bool>()).prop_filter_map(
    "Rounding broke convexity",
    |(center, radius, rotation, n, clockwise)| {
      let mut pts: Vec<Point> = (0..n)
        .map(|k| {
          let angle = rotation + TAU * k as f64 / n as f64;
          &center + &(Vector([radius, 0.0]).rotate(angle))
        })
        .collect();
      if clockwise {
        pts.reverse();
      }
      PolygonConvex::new(pts).ok()
    },
  )
}

impl Arbitrary for PolygonConvex {
  type Strategy = BoxedStrategy<PolygonConvex>;
  type Parameters = ();
  fn arbitrary_with(_params: Self::Parameters) -> Self::Strategy {
    any_convex().boxed()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::Orientation;

  use test_strategy::proptest;

  #[proptest]
  fn convex_is_valid(poly: PolygonConvex) {
    assert!(poly.validate().is_ok());
    assert!(poly.len() >= 3);
  }

  #[proptest]
  fn convex_has_winding(#[strategy(any_convex())] poly: PolygonConvex) {
    assert_ne!(poly.orientation(), Orientation::CoLinear);
  }

  #[proptest]
  fn segment_is_proper(#[strategy(any_segment())] seg: LineSegment) {
    assert_ne!(seg.a, seg.b);
  }
}
