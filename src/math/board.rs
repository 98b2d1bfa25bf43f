//! Distances on an 8×8 chessboard with cells numbered `1..=8` per axis.

use tracing::debug;

use super::Point2i;
use crate::error::{GeopredError, Result};

/// Lowest cell index on either axis.
pub const BOARD_MIN: i32 = 1;

/// Highest cell index on either axis.
pub const BOARD_MAX: i32 = 8;

/// Returns the number of moves a king needs to walk from `start` to `end`,
/// i.e. the Chebyshev distance `max(|Δx|, |Δy|)`.
///
/// Returns `0` when both cells coincide.
///
/// # Errors
///
/// Returns [`GeopredError::InvalidArgument`] when `start.x` or `end.x` is
/// below [`BOARD_MIN`], or `start.y` or `end.y` is above [`BOARD_MAX`].
///
/// Only those four bounds are checked. An `x` above [`BOARD_MAX`] or a `y`
/// below [`BOARD_MIN`] is accepted and measured like any other cell.
pub fn king_move_number(start: &Point2i, end: &Point2i) -> Result<u32> {
    check_at_least("start.x", start.x, BOARD_MIN)?;
    check_at_most("start.y", start.y, BOARD_MAX)?;
    check_at_least("end.x", end.x, BOARD_MIN)?;
    check_at_most("end.y", end.y, BOARD_MAX)?;

    Ok(start.x.abs_diff(end.x).max(start.y.abs_diff(end.y)))
}

fn check_at_least(parameter: &'static str, value: i32, min: i32) -> Result<()> {
    if value < min {
        return Err(out_of_range(parameter, value));
    }
    Ok(())
}

fn check_at_most(parameter: &'static str, value: i32, max: i32) -> Result<()> {
    if value > max {
        return Err(out_of_range(parameter, value));
    }
    Ok(())
}

fn out_of_range(parameter: &'static str, value: i32) -> GeopredError {
    debug!(parameter, value, "rejecting chessboard cell");
    GeopredError::InvalidArgument {
        parameter,
        value,
        min: BOARD_MIN,
        max: BOARD_MAX,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sq(x: i32, y: i32) -> Point2i {
        Point2i::new(x, y)
    }

    #[test]
    fn same_cell_is_zero_moves() {
        assert_eq!(king_move_number(&sq(1, 1), &sq(1, 1)).unwrap(), 0);
        assert_eq!(king_move_number(&sq(5, 7), &sq(5, 7)).unwrap(), 0);
    }

    #[test]
    fn diagonal_steps_cover_both_axes() {
        // (3,1) → (4,2) → (5,2) → (6,3)
        assert_eq!(king_move_number(&sq(3, 1), &sq(6, 3)).unwrap(), 3);
    }

    #[test]
    fn distance_is_symmetric() {
        let a = sq(2, 8);
        let b = sq(7, 4);
        assert_eq!(
            king_move_number(&a, &b).unwrap(),
            king_move_number(&b, &a).unwrap()
        );
    }

    #[test]
    fn opposite_corners_are_seven_moves() {
        assert_eq!(king_move_number(&sq(1, 1), &sq(8, 8)).unwrap(), 7);
        assert_eq!(king_move_number(&sq(8, 1), &sq(1, 8)).unwrap(), 7);
    }

    #[test]
    fn start_x_below_board_is_rejected() {
        let err = king_move_number(&sq(0, 1), &sq(2, 2)).unwrap_err();
        assert_eq!(
            err,
            GeopredError::InvalidArgument {
                parameter: "start.x",
                value: 0,
                min: BOARD_MIN,
                max: BOARD_MAX,
            }
        );
    }

    #[test]
    fn start_y_above_board_is_rejected() {
        let err = king_move_number(&sq(1, 9), &sq(2, 2)).unwrap_err();
        assert!(matches!(
            err,
            GeopredError::InvalidArgument { parameter: "start.y", value: 9, .. }
        ));
    }

    #[test]
    fn end_coordinates_are_checked() {
        assert!(matches!(
            king_move_number(&sq(1, 1), &sq(-3, 2)).unwrap_err(),
            GeopredError::InvalidArgument { parameter: "end.x", .. }
        ));
        assert!(matches!(
            king_move_number(&sq(1, 1), &sq(2, 12)).unwrap_err(),
            GeopredError::InvalidArgument { parameter: "end.y", .. }
        ));
    }

    #[test]
    fn first_failing_coordinate_is_reported() {
        let err = king_move_number(&sq(0, 9), &sq(0, 9)).unwrap_err();
        assert!(matches!(
            err,
            GeopredError::InvalidArgument { parameter: "start.x", .. }
        ));
    }

    #[test]
    fn unchecked_bounds_are_measured() {
        // x above the board and y below it pass validation.
        assert_eq!(king_move_number(&sq(9, 1), &sq(1, 1)).unwrap(), 8);
        assert_eq!(king_move_number(&sq(1, 0), &sq(1, 3)).unwrap(), 3);
    }
}
