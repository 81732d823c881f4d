// #![deny(warnings)]
#![deny(clippy::cast_lossless)]
#![doc(test(no_crate_inject))]
//! Boolean intersection tests for convex shapes in the plane.
//!
//! Shapes are built from plain [`Point`](data::Point)s, validated once by
//! their constructors, and then classified pairwise with the predicates in
//! [`algorithms::intersection`] or through the [`Intersects`] trait.
//!
//! ```rust
//! # use convex_intersect::data::*;
//! # use convex_intersect::algorithms::*;
//! let a = make_rectangle(Point::new([0.0, 0.0]), Vector([1.0, 0.0]), 10.0).unwrap();
//! let b = make_rectangle(Point::new([5.0, 0.0]), Vector([1.0, 0.0]), 10.0).unwrap();
//! assert!(convex_polys_intersect(&a, &b));
//! ```

pub mod algorithms;
pub mod data;
mod intersection;
mod orientation;
pub mod scene;

pub use orientation::Orientation;

pub use intersection::Intersects;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
  InsufficientVertices,
  DuplicatePoints,
  /// The boundary turns both left and right, doubles back on itself or
  /// winds around more than once.
  ConvexViolation,
  /// A coordinate is NaN, infinite or beyond
  /// [`Point::MAX_COORDINATE`](data::Point::MAX_COORDINATE), or a radius is
  /// not finite.
  NonFinite,
  NegativeRadius,
  /// Two points that must be distinct coincide.
  DegenerateSegment,
  ParallelLines,
}

impl std::fmt::Display for Error {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
    match self {
      Error::InsufficientVertices => write!(f, "Insufficient vertices"),
      Error::DuplicatePoints => write!(f, "Duplicate points"),
      Error::ConvexViolation => write!(f, "Convex violation"),
      Error::NonFinite => write!(f, "Coordinate is NaN, infinite or out of range"),
      Error::NegativeRadius => write!(f, "Negative radius"),
      Error::DegenerateSegment => write!(f, "Degenerate segment"),
      Error::ParallelLines => write!(f, "Lines are parallel and have no unique intersection"),
    }
  }
}

impl std::error::Error for Error {}

/// Numeric tolerances.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
  /// Relative threshold under which a 2x2 determinant counts as zero. The
  /// determinant is compared against `eps_det * |d1| * |d2|` where `d1` and
  /// `d2` are the direction vectors involved.
  pub eps_det: f64,
}

impl Default for Tolerance {
  fn default() -> Self {
    Tolerance { eps_det: 1e-12 }
  }
}

#[cfg(test)]
pub mod testing;
