mod circle;
mod line;
mod line_segment;
pub(crate) mod point;
pub mod polygon;
mod vector;

pub use circle::Circle;
pub use line::Line;
pub use line_segment::LineSegment;

#[doc(inline)]
pub use crate::data::polygon::{Cursor, Polygon, PolygonConvex};
pub use point::Point;
pub use vector::Vector;
