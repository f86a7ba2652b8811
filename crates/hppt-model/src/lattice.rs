//! Unit cell and reciprocal-lattice direction for single-crystal planning.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Lattice constants plus the (h, k, l) direction of interest.
///
/// Lengths are in Å, angles in degrees. The indices are real numbers so
/// incommensurate positions can be entered.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SingleCrystalParameters {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub alpha: f64,
    pub beta: f64,
    pub gamma: f64,
    pub h: f64,
    pub k: f64,
    pub l: f64,
}

impl Default for SingleCrystalParameters {
    fn default() -> Self {
        Self {
            a: 1.0,
            b: 1.0,
            c: 1.0,
            alpha: 90.0,
            beta: 90.0,
            gamma: 90.0,
            h: 0.0,
            k: 0.0,
            l: 0.0,
        }
    }
}

impl SingleCrystalParameters {
    /// Reciprocal cell of this lattice, without the 2π factor.
    pub fn reciprocal(&self) -> ReciprocalCell {
        let (sa, ca) = self.alpha.to_radians().sin_cos();
        let (sb, cb) = self.beta.to_radians().sin_cos();
        let (sg, cg) = self.gamma.to_radians().sin_cos();
        // V / (a b c); NaN when the angles cannot close a cell
        let volume_factor = (1.0 - ca * ca - cb * cb - cg * cg + 2.0 * ca * cb * cg).sqrt();
        ReciprocalCell {
            a_star: sa / (self.a * volume_factor),
            b_star: sb / (self.b * volume_factor),
            c_star: sg / (self.c * volume_factor),
            cos_alpha_star: (cb * cg - ca) / (sb * sg),
            cos_beta_star: (ca * cg - cb) / (sa * sg),
            cos_gamma_star: (ca * cb - cg) / (sa * sb),
        }
    }

    /// Magnitude of the momentum transfer at (h, k, l), in Å⁻¹.
    pub fn mod_q(&self) -> f64 {
        2.0 * PI * self.reciprocal().norm(self.h, self.k, self.l)
    }
}

/// Reciprocal-lattice metric (lengths in Å⁻¹ without 2π, angle cosines).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReciprocalCell {
    pub a_star: f64,
    pub b_star: f64,
    pub c_star: f64,
    pub cos_alpha_star: f64,
    pub cos_beta_star: f64,
    pub cos_gamma_star: f64,
}

impl ReciprocalCell {
    /// Length of `h a* + k b* + l c*` using the triclinic reciprocal metric.
    pub fn norm(&self, h: f64, k: f64, l: f64) -> f64 {
        let ha = h * self.a_star;
        let kb = k * self.b_star;
        let lc = l * self.c_star;
        let squared = ha * ha
            + kb * kb
            + lc * lc
            + 2.0 * ha * kb * self.cos_gamma_star
            + 2.0 * ha * lc * self.cos_beta_star
            + 2.0 * kb * lc * self.cos_alpha_star;
        // only finite negatives are clamped to 0; NaN falls through to sqrt
        if squared < 0.0 {
            0.0
        } else {
            squared.sqrt()
        }
    }
}

/// Holder for the current single-crystal parameters.
///
/// Replaced wholesale so the three angles are never observed half-updated.
/// No validation happens here; see [`crate::validation::validate_lattice`].
#[derive(Debug, Clone, Default)]
pub struct LatticeState {
    parameters: SingleCrystalParameters,
}

impl LatticeState {
    pub fn new(parameters: SingleCrystalParameters) -> Self {
        Self { parameters }
    }

    pub fn set(&mut self, parameters: SingleCrystalParameters) {
        tracing::debug!(
            a = parameters.a,
            b = parameters.b,
            c = parameters.c,
            alpha = parameters.alpha,
            beta = parameters.beta,
            gamma = parameters.gamma,
            h = parameters.h,
            k = parameters.k,
            l = parameters.l,
            "lattice updated"
        );
        self.parameters = parameters;
    }

    pub fn get(&self) -> SingleCrystalParameters {
        self.parameters
    }

    /// |Q| implied by the stored direction and cell.
    pub fn mod_q(&self) -> f64 {
        self.parameters.mod_q()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(a: f64, b: f64, c: f64, alpha: f64, beta: f64, gamma: f64) -> SingleCrystalParameters {
        SingleCrystalParameters {
            a,
            b,
            c,
            alpha,
            beta,
            gamma,
            ..SingleCrystalParameters::default()
        }
    }

    #[test]
    fn test_cubic_mod_q() {
        let params = SingleCrystalParameters {
            h: 10.0,
            k: 10.0,
            l: 10.0,
            ..SingleCrystalParameters::default()
        };
        assert!((params.mod_q() - 108.827).abs() < 1e-3);
    }

    #[test]
    fn test_origin_has_zero_mod_q() {
        assert_eq!(SingleCrystalParameters::default().mod_q(), 0.0);
    }

    #[test]
    fn test_orthorhombic_axes() {
        let mut params = cell(2.0, 4.0, 5.0, 90.0, 90.0, 90.0);
        params.k = 1.0;
        assert!((params.mod_q() - 2.0 * PI / 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_hexagonal_100() {
        // |a*| = 2 / (a sqrt(3)) for a hexagonal cell
        let mut params = cell(3.0, 3.0, 5.0, 90.0, 90.0, 120.0);
        params.h = 1.0;
        let expected = 2.0 * PI * 2.0 / (3.0 * 3f64.sqrt());
        assert!((params.mod_q() - expected).abs() < 1e-12);

        // with gamma* = 60, (110) is sqrt(3) times longer than (100) and (1-10)
        params.k = 1.0;
        assert!((params.mod_q() - expected * 3f64.sqrt()).abs() < 1e-12);
        params.k = -1.0;
        assert!((params.mod_q() - expected).abs() < 1e-12);
    }

    #[test]
    fn test_impossible_cell_gives_nan() {
        let mut params = cell(1.0, 1.0, 1.0, 170.0, 170.0, 170.0);
        params.h = 1.0;
        assert!(params.mod_q().is_nan());
    }

    #[test]
    fn test_state_round_trip() {
        let mut state = LatticeState::default();
        let params = SingleCrystalParameters {
            a: 5.43,
            b: 5.43,
            c: 7.1,
            alpha: 90.0,
            beta: 95.0,
            gamma: 120.0,
            h: 1.0,
            k: -0.5,
            l: 2.0,
        };
        state.set(params);
        assert_eq!(state.get(), params);
        assert_eq!(state.mod_q(), params.mod_q());
    }
}
