use super::Cursor;
use super::Polygon;
use crate::data::LineSegment;
use crate::data::Point;

pub struct Iter<'a> {
  pub(crate) iter: std::slice::Iter<'a, Point>,
}

impl<'a> Iterator for Iter<'a> {
  type Item = &'a Point;
  fn next(&mut self) -> Option<&'a Point> {
    self.iter.next()
  }
}

impl<'a> DoubleEndedIterator for Iter<'a> {
  fn next_back(&mut self) -> Option<&'a Point> {
    self.iter.next_back()
  }
}

impl ExactSizeIterator for Iter<'_> {
  fn len(&self) -> usize {
    self.iter.len()
  }
}

// Edge i runs from vertex i to vertex (i+1) mod n.
pub struct EdgeIter<'a> {
  pub(crate) iter: CursorIter<'a>,
}

impl<'a> Iterator for EdgeIter<'a> {
  type Item = LineSegment;
  fn next(&mut self) -> Option<Self::Item> {
    let cursor = self.iter.next()?;
    Some(cursor.edge())
  }
}

#[derive(Clone)]
pub struct CursorIter<'a> {
  pub(crate) polygon: &'a Polygon,
  pub(crate) next: usize,
}

impl<'a> Iterator for CursorIter<'a> {
  type Item = Cursor<'a>;
  fn next(&mut self) -> Option<Self::Item> {
    if self.next >= self.polygon.len() {
      return None;
    }
    let cursor = self.polygon.cursor(self.next);
    self.next += 1;
    Some(cursor)
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    let remaining = self.polygon.len().saturating_sub(self.next);
    (remaining, Some(remaining))
  }
}
