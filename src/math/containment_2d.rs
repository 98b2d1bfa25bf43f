use super::Point2;

/// Returns `true` if `point` lies inside or on the circle with the given
/// `center` and `radius`.
#[must_use]
pub fn point_in_circle(center: &Point2, radius: f64, point: &Point2) -> bool {
    nalgebra::distance(center, point) <= radius
}

/// Returns `true` if the circle `(c1, r1)` lies entirely inside, or coincides
/// with, the circle `(c2, r2)`.
///
/// Radii are not validated; a negative radius simply flows through
/// `|c1 - c2| + r1 <= r2`.
#[must_use]
pub fn circle_inside_circle(c1: &Point2, r1: f64, c2: &Point2, r2: f64) -> bool {
    nalgebra::distance(c1, c2) + r1 <= r2
}

/// Returns `true` if `point` lies inside or on the boundary of the
/// axis-aligned rectangle spanned by the opposite corners `start` and `end`.
///
/// The corners may be given in any order and along either diagonal.
#[must_use]
pub fn point_in_rectangle(start: &Point2, end: &Point2, point: &Point2) -> bool {
    let (min_x, max_x) = ordered(start.x, end.x);
    let (min_y, max_y) = ordered(start.y, end.y);

    (min_x..=max_x).contains(&point.x) && (min_y..=max_y).contains(&point.y)
}

fn ordered(a: f64, b: f64) -> (f64, f64) {
    if a > b {
        (b, a)
    } else {
        (a, b)
    }
}
