//! Incident energy, detector position and polarization settings.

use serde::{Deserialize, Serialize};

use crate::enums::PlotType;

/// Experiment settings as entered by the user.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperimentParameters {
    /// Incident energy in meV.
    pub ei: f64,
    /// Detector tank centre angle in degrees; the sign selects the side.
    pub s2: f64,
    /// In-plane polarization angle in degrees.
    pub alpha_p: f64,
    /// Angular quantity to compute.
    pub plot_type: PlotType,
}

impl Default for ExperimentParameters {
    fn default() -> Self {
        Self {
            ei: 20.0,
            s2: 30.0,
            alpha_p: 0.0,
            plot_type: PlotType::default(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ExperimentState {
    parameters: ExperimentParameters,
}

impl ExperimentState {
    pub fn new(parameters: ExperimentParameters) -> Self {
        Self { parameters }
    }

    pub fn set(&mut self, parameters: ExperimentParameters) {
        tracing::debug!(
            ei = parameters.ei,
            s2 = parameters.s2,
            alpha_p = parameters.alpha_p,
            plot_type = %parameters.plot_type,
            "experiment updated"
        );
        self.parameters = parameters;
    }

    pub fn get(&self) -> ExperimentParameters {
        self.parameters
    }
}
