use crate::Intersects;

/// Find every pair of intersecting items, as index pairs `(i, j)` with
/// `i > j`.
///
/// # Time complexity
/// $O(n^2)$ intersection tests.
pub fn intersecting_pairs<'a, E>(items: &'a [E]) -> impl Iterator<Item = (usize, usize)> + 'a
where
  &'a E: Intersects<&'a E>,
{
  pairs(items.len()).filter(move |&(a, b)| Intersects::intersects(&items[a], &items[b]))
}

/// For every item, whether it intersects at least one other item.
pub fn intersection_flags<'a, E>(items: &'a [E]) -> Vec<bool>
where
  &'a E: Intersects<&'a E>,
{
  let mut flags = vec![false; items.len()];
  for (a, b) in intersecting_pairs(items) {
    flags[a] = true;
    flags[b] = true;
  }
  flags
}

fn pairs(n: usize) -> impl Iterator<Item = (usize, usize)> {
  (0..n).flat_map(move |a| (0..a).map(move |b| (a, b)))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::data::{Circle, LineSegment, Point};
  use std::collections::BTreeSet;

  fn segment(a: (f64, f64), b: (f64, f64)) -> LineSegment {
    LineSegment::new(a.into(), b.into()).unwrap()
  }

  #[test]
  fn pairs_cover_each_unordered_pair_once() {
    let all: BTreeSet<(usize, usize)> = pairs(4).collect();
    assert_eq!(all.len(), 6);
    assert!(all.iter().all(|&(a, b)| a > b));
  }

  #[test]
  fn crossing_segments() {
    let edges = vec![
      segment((0.0, 0.0), (2.0, 2.0)),
      segment((0.0, 2.0), (2.0, 0.0)),
      segment((5.0, 5.0), (6.0, 5.0)),
      segment((1.0, -1.0), (1.0, 3.0)),
    ];
    let found: BTreeSet<(usize, usize)> = intersecting_pairs(&edges).collect();
    let expected: BTreeSet<(usize, usize)> = [(1, 0), (3, 0), (3, 1)].into_iter().collect();
    assert_eq!(found, expected);
    assert_eq!(intersection_flags(&edges), vec![true, true, false, true]);
  }

  #[test]
  fn circles() {
    let circles = vec![
      Circle::new(Point::new([0.0, 0.0]), 1.0).unwrap(),
      Circle::new(Point::new([1.5, 0.0]), 1.0).unwrap(),
      Circle::new(Point::new([0.0, 0.0]), 0.25).unwrap(),
    ];
    assert_eq!(intersection_flags(&circles), vec![true, true, false]);
  }

  #[test]
  fn empty() {
    let none: Vec<Circle> = vec![];
    assert!(intersection_flags(&none).is_empty());
  }
}
