/// Boolean intersection between two shapes.
///
/// Implementations are symmetric: `a.intersects(b) == b.intersects(a)`
/// whenever both directions are implemented. Shapes are compared by their
/// boundaries, see [`algorithms::intersection`](crate::algorithms::intersection)
/// for what that means for nested shapes.
pub trait Intersects<T = Self> {
  fn intersects(self, other: T) -> bool;
}
