//! Fixed geometry of the spectrometer.

use serde::{Deserialize, Serialize};

use crate::constants::{MAX_MODQ, N_POINTS, TANK_HALF_WIDTH};

/// Instrument limits shared by the engine and the crosshair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstrumentSettings {
    /// Largest |Q| in Å⁻¹ accepted for a single-crystal crosshair.
    pub max_mod_q: f64,
    /// Samples along each axis of the map.
    pub n_points: usize,
    /// Angular half-width of the detector tank in degrees.
    pub tank_half_width: f64,
}

impl Default for InstrumentSettings {
    fn default() -> Self {
        Self {
            max_mod_q: MAX_MODQ,
            n_points: N_POINTS,
            tank_half_width: TANK_HALF_WIDTH,
        }
    }
}

impl InstrumentSettings {
    /// Grid size actually used; a map needs at least its two end points.
    pub fn samples(&self) -> usize {
        self.n_points.max(2)
    }

    /// Smallest and largest scattering angle covered by the tank when it is
    /// centred on `s2`, in degrees.
    pub fn scattering_range(&self, s2: f64) -> (f64, f64) {
        let centre = s2.abs();
        let low = (centre - self.tank_half_width).max(0.0);
        let high = (centre + self.tank_half_width).min(180.0);
        (low, high)
    }
}
