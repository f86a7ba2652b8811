//! Input checks applied before values are pushed into the model.
//!
//! The state holders accept anything; callers that take raw user input run
//! these first so that the engine only ever sees a closable unit cell and a
//! positive incident energy.

use crate::constants::MAX_N_POINTS;
use crate::crosshair::CrosshairParameters;
use crate::enums::ExperimentType;
use crate::error::ValidationError;
use crate::experiment::ExperimentParameters;
use crate::instrument::InstrumentSettings;
use crate::lattice::SingleCrystalParameters;

/// Accepts a value whose magnitude lies in `[bottom, top]`.
///
/// A negative `bottom` is treated as 0 and a `top` not above `bottom` as
/// unbounded, so `AbsRange::new(30.0, 150.0)` accepts both 45 and -45.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AbsRange {
    bottom: f64,
    top: f64,
}

impl AbsRange {
    pub fn new(bottom: f64, top: f64) -> Self {
        let bottom = if bottom > 0.0 { bottom } else { 0.0 };
        let top = if top > bottom { top } else { f64::INFINITY };
        Self { bottom, top }
    }

    pub fn bottom(&self) -> f64 {
        self.bottom
    }

    pub fn top(&self) -> f64 {
        self.top
    }

    pub fn contains(&self, value: f64) -> bool {
        let magnitude = value.abs();
        magnitude >= self.bottom && magnitude <= self.top
    }

    pub fn check(&self, name: &'static str, value: f64) -> Result<(), ValidationError> {
        finite(name, value)?;
        if self.contains(value) {
            Ok(())
        } else {
            Err(ValidationError::AbsOutOfRange {
                name,
                magnitude: value.abs(),
                bottom: self.bottom,
                top: self.top,
            })
        }
    }
}

/// Allowed detector tank positions.
pub const S2_RANGE: AbsRange = AbsRange {
    bottom: 0.0,
    top: 180.0,
};

fn finite(name: &'static str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::NotFinite { name, value })
    }
}

fn positive(name: &'static str, value: f64) -> Result<(), ValidationError> {
    finite(name, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(ValidationError::NotPositive { name, value })
    }
}

/// Checks that the three cell angles can close a unit cell.
///
/// Each angle must be in (0, 180), their sum at most 360, and each one
/// strictly smaller than the sum of the other two.
pub fn check_cell_angles(alpha: f64, beta: f64, gamma: f64) -> Vec<ValidationError> {
    let angles = [("alpha", alpha), ("beta", beta), ("gamma", gamma)];
    let mut errors = Vec::new();
    for (name, value) in angles {
        if !value.is_finite() {
            errors.push(ValidationError::NotFinite { name, value });
        } else if value <= 0.0 || value >= 180.0 {
            errors.push(ValidationError::AngleOutOfRange { name, value });
        }
    }
    if !errors.is_empty() {
        return errors;
    }

    let sum = alpha + beta + gamma;
    if sum > 360.0 {
        errors.push(ValidationError::AngleSumTooLarge { sum });
    }
    for (name, value) in angles {
        if value >= sum - value {
            errors.push(ValidationError::AngleCannotClose { name, value });
        }
    }
    errors
}

/// Every problem with a set of single-crystal parameters.
pub fn validate_lattice(params: &SingleCrystalParameters) -> Vec<ValidationError> {
    let mut errors: Vec<ValidationError> = [("a", params.a), ("b", params.b), ("c", params.c)]
        .into_iter()
        .filter_map(|(name, value)| positive(name, value).err())
        .collect();
    errors.extend(check_cell_angles(params.alpha, params.beta, params.gamma));
    errors.extend(
        [("h", params.h), ("k", params.k), ("l", params.l)]
            .into_iter()
            .filter_map(|(name, value)| finite(name, value).err()),
    );
    errors
}

/// Every problem with a set of experiment parameters.
pub fn validate_experiment(params: &ExperimentParameters) -> Vec<ValidationError> {
    [
        positive("Ei", params.ei),
        S2_RANGE.check("S2", params.s2),
        finite("alpha_p", params.alpha_p),
    ]
    .into_iter()
    .filter_map(Result::err)
    .collect()
}

/// Every problem with instrument limits read from a settings file.
pub fn validate_instrument(settings: &InstrumentSettings) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    if !(2..=MAX_N_POINTS).contains(&settings.n_points) {
        errors.push(ValidationError::CountOutOfRange {
            name: "n_points",
            value: settings.n_points,
            min: 2,
            max: MAX_N_POINTS,
        });
    }
    let half_width = settings.tank_half_width;
    if !(half_width > 0.0 && half_width <= 180.0) {
        errors.push(ValidationError::OutOfInterval {
            name: "tank_half_width",
            value: half_width,
            bottom: 0.0,
            top: 180.0,
        });
    }
    if let Err(error) = positive("max_mod_q", settings.max_mod_q) {
        errors.push(error);
    }
    errors
}

/// Every problem with a crosshair position. The entered |Q| only matters
/// in powder mode; single-crystal mode derives it from the lattice.
pub fn validate_crosshair(
    experiment_type: ExperimentType,
    params: &CrosshairParameters,
) -> Vec<ValidationError> {
    let mut errors: Vec<ValidationError> =
        finite("DeltaE", params.delta_e).err().into_iter().collect();
    if experiment_type == ExperimentType::Powder {
        if let Err(error) = finite("modQ", params.mod_q) {
            errors.push(error);
        } else if params.mod_q < 0.0 {
            errors.push(ValidationError::Negative {
                name: "modQ",
                value: params.mod_q,
            });
        }
    }
    errors
}
