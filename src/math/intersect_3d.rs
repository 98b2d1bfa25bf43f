use crate::geometry::Ray;

use super::Point3;

/// Returns `true` if `ray` hits the sphere with the given `center` and
/// `radius`.
///
/// A ray whose origin lies inside or on the sphere never counts as an
/// intersection, and neither does a sphere whose center projects behind the
/// origin. The origin check runs before the formula below: on its own, the
/// formula reports a hit for an origin inside the sphere that is aimed
/// toward the center (`proj >= 0` and `dist_sq` near zero).
///
/// The perpendicular test compares the *squared* distance from the center to
/// the ray line against the *unsquared* `radius`:
///
/// ```text
/// axis    = center - origin
/// proj    = dot(direction, axis)
/// dist_sq = dot(axis, axis) - proj²
/// hit     = proj >= 0 && dist_sq <= radius
/// ```
///
/// This matches the classic geometric test only for `radius` equal to `0` or
/// `1`. For smaller radii it reports near misses as hits, for larger ones it
/// reports grazing hits as misses.
#[must_use]
pub fn ray_intersects_sphere(ray: &Ray, center: &Point3, radius: f64) -> bool {
    let axis = center - ray.origin();
    let axis_sq = axis.dot(&axis);

    if axis_sq <= radius * radius {
        return false;
    }

    let proj = ray.direction().dot(&axis);
    if proj < 0.0 {
        return false;
    }

    let dist_sq = axis_sq - proj * proj;
    dist_sq <= radius
}
