//! Typed view of the settings file.

use hppt_model::{
    ExperimentParameters, ExperimentType, HyspecPptModel, InstrumentSettings,
    SingleCrystalParameters,
};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Start-up values for every part of the model.
///
/// Each section falls back to its defaults when absent.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub instrument: InstrumentSettings,
    pub experiment: ExperimentParameters,
    pub lattice: SingleCrystalParameters,
    pub crosshair: CrosshairSettings,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CrosshairSettings {
    pub experiment_type: ExperimentType,
}

impl Settings {
    /// Builds a model seeded with these values.
    ///
    /// The crosshair starts at the origin in the configured mode; in
    /// single-crystal mode its |Q| comes from the configured lattice.
    pub fn build_model(&self) -> HyspecPptModel {
        let mut model = HyspecPptModel::new().with_instrument(self.instrument);
        model.set_single_crystal_data(self.lattice);
        model.set_experiment_data(self.experiment);
        model.set_crosshair_data(self.crosshair.experiment_type, 0.0, 0.0);
        model
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}
