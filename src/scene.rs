//! Draggable shapes and their pairwise intersection state.
//!
//! A [`Scene`] owns a list of parameterized shapes, the anchor currently
//! held by the pointer and the last pointer position. It does no drawing:
//! callers feed it pointer positions and read back shapes and hit flags.

use crate::algorithms::intersection::naive::intersection_flags;
use crate::algorithms::{IsoscelesTriangle, Rectangle};
use crate::data::{Circle, Point, PolygonConvex};
use crate::{Error, Intersects};

/// Interaction settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneCfg {
  /// A pointer within this distance of an anchor picks it up.
  pub pick_radius: f64,
}

impl Default for SceneCfg {
  fn default() -> Self {
    SceneCfg { pick_radius: 5.0 }
  }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
  Triangle(IsoscelesTriangle),
  Rectangle(Rectangle),
  Circle(Circle),
}

impl Shape {
  /// Points a pointer can grab. The first anchor always moves the whole
  /// shape.
  pub fn anchors(&self) -> Vec<Point> {
    match self {
      Shape::Triangle(tri) => tri.anchors(),
      Shape::Rectangle(rect) => rect.anchors(),
      Shape::Circle(circle) => vec![circle.center],
    }
  }

  /// The concrete geometry, or the reason there is none.
  pub fn solid(&self) -> Result<Solid, Error> {
    match self {
      Shape::Triangle(tri) => tri.polygon().map(Solid::Convex),
      Shape::Rectangle(rect) => rect.polygon().map(Solid::Convex),
      Shape::Circle(circle) => {
        circle.validate()?;
        Ok(Solid::Circle(*circle))
      }
    }
  }
}

impl From<IsoscelesTriangle> for Shape {
  fn from(tri: IsoscelesTriangle) -> Shape {
    Shape::Triangle(tri)
  }
}

impl From<Rectangle> for Shape {
  fn from(rect: Rectangle) -> Shape {
    Shape::Rectangle(rect)
  }
}

impl From<Circle> for Shape {
  fn from(circle: Circle) -> Shape {
    Shape::Circle(circle)
  }
}

/// A shape reduced to what the intersection predicates work on.
#[derive(Debug, Clone, PartialEq)]
pub enum Solid {
  Convex(PolygonConvex),
  Circle(Circle),
}

impl Intersects for &Solid {
  fn intersects(self, other: &Solid) -> bool {
    match (self, other) {
      (Solid::Convex(a), Solid::Convex(b)) => a.intersects(b),
      (Solid::Convex(poly), Solid::Circle(circle)) => poly.intersects(circle),
      (Solid::Circle(circle), Solid::Convex(poly)) => circle.intersects(poly),
      (Solid::Circle(a), Solid::Circle(b)) => a.intersects(b),
    }
  }
}

///////////////////////////////////////////////////////////////////////////////
// Scene

/// An anchor held by the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
  pub shape: usize,
  pub anchor: usize,
}

#[derive(Debug, Clone, Default)]
pub struct Scene {
  cfg: SceneCfg,
  shapes: Vec<Shape>,
  selection: Option<Selection>,
  prev_pointer: Option<Point>,
}

impl Scene {
  pub fn new(cfg: SceneCfg) -> Scene {
    Scene {
      cfg,
      ..Scene::default()
    }
  }

  pub fn with_shapes<I>(cfg: SceneCfg, shapes: I) -> Scene
  where
    I: IntoIterator,
    I::Item: Into<Shape>,
  {
    Scene {
      cfg,
      shapes: shapes.into_iter().map(Into::into).collect(),
      ..Scene::default()
    }
  }

  /// Add a shape and return its index.
  pub fn push(&mut self, shape: impl Into<Shape>) -> usize {
    self.shapes.push(shape.into());
    self.shapes.len() - 1
  }

  pub fn cfg(&self) -> &SceneCfg {
    &self.cfg
  }

  pub fn shapes(&self) -> &[Shape] {
    &self.shapes
  }

  pub fn shape(&self, idx: usize) -> Option<&Shape> {
    self.shapes.get(idx)
  }

  pub fn selection(&self) -> Option<Selection> {
    self.selection
  }

  /// Anchors of the shape at `idx`. Empty if there is no such shape.
  pub fn anchors(&self, idx: usize) -> Vec<Point> {
    self.shapes.get(idx).map(Shape::anchors).unwrap_or_default()
  }

  /// Drop any previous selection and pick up the last anchor, in shape
  /// order, within `pick_radius` of the pointer.
  pub fn pick(&mut self, pointer: Point) -> Option<Selection> {
    self.prev_pointer = Some(pointer);
    self.selection = None;
    for (shape, s) in self.shapes.iter().enumerate() {
      for (anchor, pt) in s.anchors().iter().enumerate() {
        if pointer.distance(pt) <= self.cfg.pick_radius {
          self.selection = Some(Selection { shape, anchor });
        }
      }
    }
    log::trace!("pick at {:?}: {:?}", pointer, self.selection);
    self.selection
  }

  /// Move the selected anchor by the pointer's displacement since the last
  /// pick or drag. Returns whether anything was selected.
  pub fn drag(&mut self, pointer: Point) -> bool {
    let (sel, prev) = match (self.selection, self.prev_pointer) {
      (Some(sel), Some(prev)) => (sel, prev),
      _ => return false,
    };
    let delta = &pointer - &prev;
    self.prev_pointer = Some(pointer);
    log::trace!("drag {:?} by {:?}", sel, delta);
    match (&mut self.shapes[sel.shape], sel.anchor) {
      (Shape::Triangle(tri), 0) => tri.translate(&delta),
      (Shape::Triangle(tri), _) => tri.move_apex(&delta),
      (Shape::Rectangle(rect), 0) => rect.translate(&delta),
      // Edge midpoints can be picked but do not move anything.
      (Shape::Rectangle(_), _) => {}
      (Shape::Circle(circle), _) => *circle = circle.translate(&delta),
    }
    true
  }

  pub fn release(&mut self) {
    self.selection = None;
  }

  /// For every shape, whether its boundary meets the boundary of another
  /// shape. Shapes without valid geometry are skipped and never hit.
  pub fn classify(&self) -> Vec<bool> {
    let mut indices = Vec::with_capacity(self.shapes.len());
    let mut solids = Vec::with_capacity(self.shapes.len());
    for (idx, shape) in self.shapes.iter().enumerate() {
      match shape.solid() {
        Ok(solid) => {
          indices.push(idx);
          solids.push(solid);
        }
        Err(err) => log::debug!("skipping shape {} ({:?}): {}", idx, shape, err),
      }
    }
    let mut hits = vec![false; self.shapes.len()];
    for (idx, hit) in indices.into_iter().zip(intersection_flags(&solids)) {
      hits[idx] = hit;
    }
    hits
  }
}
