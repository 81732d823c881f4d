pub mod construction;
pub mod intersection;

#[doc(inline)]
pub use intersection::{
  circle_circle_intersect, convex_poly_circle_intersect, convex_polys_intersect,
  line_intersection, line_intersection_with, orient, segment_circle_intersect,
  segment_point_distance, segments_intersect,
};

#[doc(inline)]
pub use intersection::naive::{intersecting_pairs, intersection_flags};

#[doc(inline)]
pub use construction::{isosceles, make_rectangle, IsoscelesTriangle, Rectangle};
