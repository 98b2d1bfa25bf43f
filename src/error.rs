use thiserror::Error;

/// Error type for the geometric predicates.
///
/// Only the chessboard distance validates its input; every other predicate
/// evaluates its formula on whatever values it is given.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeopredError {
    #[error("argument {parameter} = {value} is out of range [{min}, {max}]")]
    InvalidArgument {
        parameter: &'static str,
        value: i32,
        min: i32,
        max: i32,
    },
}

/// Convenience type alias for results using [`GeopredError`].
pub type Result<T> = std::result::Result<T, GeopredError>;
