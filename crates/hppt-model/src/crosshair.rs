//! The point currently picked on the (Q, E) map.

use serde::{Deserialize, Serialize};

use crate::enums::ExperimentType;
use crate::lattice::LatticeState;

/// Energy transfer (meV) and |Q| (Å⁻¹) of the crosshair.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CrosshairParameters {
    pub delta_e: f64,
    pub mod_q: f64,
}

/// What happened to |Q| during a crosshair update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ModQUpdate {
    /// Powder mode: the supplied value was stored.
    Stored(f64),
    /// Single-crystal mode: the lattice-derived value was stored.
    Derived(f64),
    /// Single-crystal mode: the derived value is above the ceiling (or
    /// undefined) and the previous |Q| was kept.
    Rejected { derived: f64 },
}

#[derive(Debug, Clone, Default)]
pub struct CrosshairState {
    delta_e: f64,
    mod_q: f64,
    experiment_type: ExperimentType,
}

impl CrosshairState {
    /// Moves the crosshair.
    ///
    /// `delta_e` is always stored. In single-crystal mode the supplied
    /// `mod_q` is ignored and replaced by the |Q| of the lattice direction,
    /// unless that exceeds `max_mod_q`, in which case |Q| keeps its prior
    /// value.
    pub fn set(
        &mut self,
        experiment_type: ExperimentType,
        delta_e: f64,
        mod_q: f64,
        lattice: &LatticeState,
        max_mod_q: f64,
    ) -> ModQUpdate {
        self.experiment_type = experiment_type;
        self.delta_e = delta_e;
        let update = match experiment_type {
            ExperimentType::Powder => {
                self.mod_q = mod_q;
                ModQUpdate::Stored(mod_q)
            }
            ExperimentType::SingleCrystal => {
                let derived = lattice.mod_q();
                if derived <= max_mod_q {
                    self.mod_q = derived;
                    ModQUpdate::Derived(derived)
                } else {
                    tracing::warn!(
                        derived,
                        max_mod_q,
                        kept = self.mod_q,
                        "lattice |Q| exceeds the ceiling; crosshair |Q| unchanged"
                    );
                    ModQUpdate::Rejected { derived }
                }
            }
        };
        tracing::debug!(
            mode = %experiment_type,
            delta_e = self.delta_e,
            mod_q = self.mod_q,
            "crosshair updated"
        );
        update
    }

    pub fn get(&self) -> CrosshairParameters {
        CrosshairParameters {
            delta_e: self.delta_e,
            mod_q: self.mod_q,
        }
    }

    pub fn experiment_type(&self) -> ExperimentType {
        self.experiment_type
    }
}
