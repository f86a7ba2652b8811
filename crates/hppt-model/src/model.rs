//! Facade over the state holders and the kinematics engine.

use crate::crosshair::{CrosshairParameters, CrosshairState, ModQUpdate};
use crate::enums::ExperimentType;
use crate::experiment::{ExperimentParameters, ExperimentState};
use crate::instrument::InstrumentSettings;
use crate::kinematics::{GraphData, calculate_graph_data};
use crate::lattice::{LatticeState, SingleCrystalParameters};

/// The planning model behind the user interface.
///
/// The interface pushes raw values in through the `set_*` methods and
/// pulls results back out; nothing is cached, so every
/// [`calculate_graph_data`](Self::calculate_graph_data) call reflects the
/// current state.
#[derive(Debug, Clone, Default)]
pub struct HyspecPptModel {
    lattice: LatticeState,
    experiment: ExperimentState,
    crosshair: CrosshairState,
    instrument: InstrumentSettings,
}

impl HyspecPptModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the instrument limits used by the engine and crosshair.
    pub fn with_instrument(mut self, instrument: InstrumentSettings) -> Self {
        self.instrument = instrument;
        self
    }

    pub fn instrument(&self) -> InstrumentSettings {
        self.instrument
    }

    pub fn set_single_crystal_data(&mut self, params: SingleCrystalParameters) {
        self.lattice.set(params);
    }

    pub fn get_single_crystal_data(&self) -> SingleCrystalParameters {
        self.lattice.get()
    }

    pub fn set_experiment_data(&mut self, params: ExperimentParameters) {
        self.experiment.set(params);
    }

    pub fn get_experiment_data(&self) -> ExperimentParameters {
        self.experiment.get()
    }

    /// Moves the crosshair; see [`CrosshairState::set`] for the |Q| rules.
    pub fn set_crosshair_data(
        &mut self,
        experiment_type: ExperimentType,
        delta_e: f64,
        mod_q: f64,
    ) -> ModQUpdate {
        self.crosshair.set(
            experiment_type,
            delta_e,
            mod_q,
            &self.lattice,
            self.instrument.max_mod_q,
        )
    }

    /// Crosshair position as it should be displayed.
    ///
    /// In single-crystal mode |Q| is always the value implied by the current
    /// lattice direction, even when it is above the ceiling and therefore
    /// was not stored; [`crosshair`](Self::crosshair) exposes the stored
    /// value.
    pub fn get_crosshair_data(&self) -> CrosshairParameters {
        let stored = self.crosshair.get();
        match self.crosshair.experiment_type() {
            ExperimentType::SingleCrystal => CrosshairParameters {
                mod_q: self.lattice.mod_q(),
                ..stored
            },
            ExperimentType::Powder => stored,
        }
    }

    pub fn crosshair(&self) -> &CrosshairState {
        &self.crosshair
    }

    /// Runs the engine on a snapshot of the current experiment settings.
    pub fn calculate_graph_data(&self) -> GraphData {
        let experiment = self.experiment.get();
        calculate_graph_data(&experiment, &self.instrument)
    }
}
