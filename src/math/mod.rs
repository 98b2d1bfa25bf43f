pub mod board;
pub mod containment_2d;
pub mod intersect_3d;
pub mod orientation_2d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D integer point type, used for chessboard cells.
pub type Point2i = nalgebra::Point2<i32>;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// z-component of the cross product of two vectors lying in the z=0 plane.
///
/// Positive when `b` turns counter-clockwise from `a`, negative when it turns
/// clockwise, zero when the vectors are collinear.
#[must_use]
pub fn cross_z(a: &Vector2, b: &Vector2) -> f64 {
    a.x * b.y - a.y * b.x
}
