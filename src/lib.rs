//! Stateless geometric predicates over 2D and 3D vectors.
//!
//! Every function is a pure O(1) test on caller-supplied values. See
//! [`math`] for the predicates and [`geometry::Ray`] for the ray type used
//! by the sphere test.

pub mod error;
pub mod geometry;
pub mod math;

pub use error::{GeopredError, Result};
pub use geometry::Ray;
pub use math::board::king_move_number;
pub use math::containment_2d::{circle_inside_circle, point_in_circle, point_in_rectangle};
pub use math::intersect_3d::ray_intersects_sphere;
pub use math::orientation_2d::{point_on_segment, point_relative_to_line, LineSide};
