//! Physical constants and instrument defaults.

/// Conversion from neutron energy to wavevector: `k = SE2K * sqrt(E)`.
///
/// Units are Å⁻¹ per sqrt(meV). Computed from CODATA 2018 values as
/// `sqrt(2e-3 * e * m_n) * 1e-10 / hbar`.
pub const SE2K: f64 = 0.694_691_588_260_005_3;

/// Ceiling on the momentum transfer accepted for the crosshair, in Å⁻¹.
pub const MAX_MODQ: f64 = 15.0;

/// Number of samples along each axis of the (Q, E) map.
pub const N_POINTS: usize = 200;

/// Largest accepted `N_POINTS` override; each grid holds its square.
pub const MAX_N_POINTS: usize = 2000;

/// Angular half-width of the detector tank around S2, in degrees.
pub const TANK_HALF_WIDTH: f64 = 30.0;

/// Highest energy transfer sampled, as a fraction of the incident energy.
pub const EMAX_FRACTION: f64 = 0.9;

/// Wavevector magnitude in Å⁻¹ of a neutron with energy `energy` in meV.
///
/// Negative energies have no real wavevector and give NaN.
pub fn wavevector(energy: f64) -> f64 {
    SE2K * energy.sqrt()
}
