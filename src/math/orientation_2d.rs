use super::{cross_z, Point2, TOLERANCE};

/// Side of a directed line `start → end` on which a point lies.
///
/// The discriminants are the integer indicators returned by
/// [`LineSide::signum`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineSide {
    /// `cross_z(point - start, end - start) < 0`.
    Left = -1,
    /// Exactly on the line.
    On = 0,
    /// `cross_z(point - start, end - start) > 0`.
    Right = 1,
}

impl LineSide {
    /// Returns `-1`, `0`, or `1`.
    #[must_use]
    pub fn signum(self) -> i32 {
        self as i32
    }

    /// Returns the side a point reflected across the line would lie on.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::On => Self::On,
            Self::Right => Self::Left,
        }
    }
}

/// Classifies `point` against the directed line through `start` and `end`.
///
/// The sign of `cross_z(point - start, end - start)` is compared exactly
/// against zero, with no tolerance band: a positive value is
/// [`Right`](LineSide::Right), negative is [`Left`](LineSide::Left), zero is
/// [`On`](LineSide::On). For `start = (0, 0)`, `end = (1, 0)` the point
/// `(0, 1)` yields `-1`, i.e. `Left`.
#[must_use]
pub fn point_relative_to_line(start: &Point2, end: &Point2, point: &Point2) -> LineSide {
    let cross = cross_z(&(point - start), &(end - start));

    if cross > 0.0 {
        LineSide::Right
    } else if cross < 0.0 {
        LineSide::Left
    } else {
        LineSide::On
    }
}

/// Returns `true` if `point` lies on the closed segment `start → end`.
///
/// The point must be collinear with the segment and its projection
/// `dot(point - start, end - start)` must fall within `[0, |end - start|²]`,
/// endpoints included. Both tests are relative to the segment: the distance
/// from `point` to the line may not exceed [`TOLERANCE`], and the projection
/// parameter may overshoot `[0, 1]` by at most [`TOLERANCE`].
///
/// A zero-length segment matches only `start` itself.
#[must_use]
pub fn point_on_segment(start: &Point2, end: &Point2, point: &Point2) -> bool {
    if start == end {
        // Degenerate segment: the projection range collapses to `start`.
        return point == start;
    }

    let ap = point - start;
    let ab = end - start;
    let len_sq = ab.norm_squared();

    // |cross| / |ab| is the distance from `point` to the line.
    if cross_z(&ap, &ab).abs() > TOLERANCE * len_sq.sqrt() {
        return false;
    }

    // dot / |ab|² is the projection parameter along the segment.
    let dot = ap.dot(&ab);
    dot >= -TOLERANCE * len_sq && dot <= len_sq * (1.0 + TOLERANCE)
}
