//! Kinematics model for planning experiments on a direct-geometry
//! polarized neutron spectrometer.
//!
//! The [`HyspecPptModel`] facade owns the lattice, experiment and crosshair
//! state; [`kinematics::calculate_graph_data`] turns the experiment settings
//! into the accessible (Q, E) region and the polarization angle across it.

pub mod constants;
pub mod crosshair;
pub mod enums;
pub mod error;
pub mod experiment;
pub mod grid;
pub mod instrument;
pub mod kinematics;
pub mod lattice;
pub mod model;
pub mod validation;

pub use crosshair::{CrosshairParameters, CrosshairState, ModQUpdate};
pub use enums::{ExperimentType, PlotType};
pub use error::{HpptError, Result, ValidationError};
pub use experiment::{ExperimentParameters, ExperimentState};
pub use grid::Grid2d;
pub use instrument::InstrumentSettings;
pub use kinematics::GraphData;
pub use lattice::{LatticeState, ReciprocalCell, SingleCrystalParameters};
pub use model::HyspecPptModel;
pub use validation::{
    AbsRange, validate_crosshair, validate_experiment, validate_instrument, validate_lattice,
};
