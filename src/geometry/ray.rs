use crate::math::{Point3, Vector3};

/// A half-line in 3D space: `P(t) = origin + t * direction` for `t >= 0`.
///
/// The direction is expected to be unit length but is stored as given;
/// predicates that take a `Ray` interpret projections in units of
/// `|direction|`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    origin: Point3,
    direction: Vector3,
}

impl Ray {
    /// Creates a new ray from an origin and a direction.
    #[must_use]
    pub fn new(origin: Point3, direction: Vector3) -> Self {
        Self { origin, direction }
    }

    /// Returns the origin of the ray.
    #[must_use]
    pub fn origin(&self) -> &Point3 {
        &self.origin
    }

    /// Returns the direction of the ray.
    #[must_use]
    pub fn direction(&self) -> &Vector3 {
        &self.direction
    }

    /// Evaluates the ray at parameter `t`.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point3 {
        self.origin + self.direction * t
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_is_stored_as_given() {
        let ray = Ray::new(Point3::origin(), Vector3::new(0.0, 3.0, 4.0));
        assert_eq!(ray.direction().norm(), 5.0);
    }

    #[test]
    fn point_at_walks_along_direction() {
        let ray = Ray::new(Point3::new(1.0, 2.0, 3.0), Vector3::new(0.0, 0.0, -1.0));
        assert_eq!(ray.point_at(0.0), *ray.origin());
        assert_eq!(ray.point_at(2.5), Point3::new(1.0, 2.0, 0.5));
    }
}
