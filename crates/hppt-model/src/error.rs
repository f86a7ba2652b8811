use thiserror::Error;

/// Errors raised when raw input cannot be turned into model values.
///
/// Kinematically forbidden points are never errors: the engine reports them
/// as NaN cells in its grids.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HpptError {
    #[error("unknown plot type: {0}")]
    UnknownPlotType(String),
    #[error("unknown experiment type: {0}")]
    UnknownExperimentType(String),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// A single rejected input value.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{name} must be a finite number, got {value}")]
    NotFinite { name: &'static str, value: f64 },

    #[error("{name} must be positive, got {value}")]
    NotPositive { name: &'static str, value: f64 },

    #[error("{name} must not be negative, got {value}")]
    Negative { name: &'static str, value: f64 },

    #[error("{name} = {value} is outside the open interval (0, 180) degrees")]
    AngleOutOfRange { name: &'static str, value: f64 },

    #[error("cell angles sum to {sum} degrees, which exceeds 360")]
    AngleSumTooLarge { sum: f64 },

    #[error("{name} = {value} degrees is not smaller than the sum of the other two angles")]
    AngleCannotClose { name: &'static str, value: f64 },

    #[error("{name} = {value} is outside ({bottom}, {top}]")]
    OutOfInterval {
        name: &'static str,
        value: f64,
        bottom: f64,
        top: f64,
    },

    #[error("{name} = {value} is outside [{min}, {max}]")]
    CountOutOfRange {
        name: &'static str,
        value: usize,
        min: usize,
        max: usize,
    },

    #[error("|{name}| = {magnitude} is outside [{bottom}, {top}]")]
    AbsOutOfRange {
        name: &'static str,
        magnitude: f64,
        bottom: f64,
        top: f64,
    },
}

pub type Result<T> = std::result::Result<T, HpptError>;
