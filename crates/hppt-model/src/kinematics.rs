//! Accessible (Q, E) region of the spectrometer and the polarization angle
//! across it.
//!
//! # Geometry
//!
//! For incident energy `Ei` and energy transfer `E` the neutron wavevectors
//! are `ki = SE2K sqrt(Ei)` and `kf = SE2K sqrt(Ei - E)`. With scattering
//! angle `2θ` the momentum transfer follows from the law of cosines,
//!
//! ```text
//! Q² = ki² + kf² - 2 ki kf cos(2θ)
//! ```
//!
//! The detector tank covers `|S2| ± half_width`, so at fixed `E` the
//! reachable |Q| lies between the values for the two tank edges. Those are
//! the `Q_low` / `Q_hi` boundary curves.
//!
//! Inside the region the angle between `ki` and `Q` comes from the same
//! triangle, `cos φ = (ki² + Q² - kf²) / (2 ki Q)`. Measured from the
//! horizontal axis perpendicular to the beam, `Q` points at
//! `90° + sign(S2) φ`; subtracting the polarization angle `alpha_p` gives
//! `α_s`, which the selected [`PlotType`] transforms.
//!
//! Cells outside the boundary curves, or whose cosine argument is not a
//! real cosine, are NaN.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::constants::{EMAX_FRACTION, wavevector};
use crate::enums::PlotType;
use crate::experiment::ExperimentParameters;
use crate::grid::Grid2d;
use crate::instrument::InstrumentSettings;

/// Output of one engine run.
///
/// Grids are indexed `[(q_index, e_index)]`: `q2d[(i, j)] == q[i]` and
/// `e2d[(i, j)] == e[j]`.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphData {
    /// Lowest reachable |Q| at each energy transfer.
    pub q_low: Vec<f64>,
    /// Highest reachable |Q| at each energy transfer.
    pub q_hi: Vec<f64>,
    /// Energy transfer samples, strictly increasing.
    pub e: Vec<f64>,
    pub q2d: Grid2d,
    pub e2d: Grid2d,
    /// Which quantity `angular` holds.
    pub plot_type: PlotType,
    /// The selected angular quantity; NaN where inaccessible.
    pub angular: Grid2d,
}

impl GraphData {
    /// Looks a grid up by its published key (`Q2d`, `E2d`, or the plot-type key).
    pub fn grid(&self, key: &str) -> Option<&Grid2d> {
        match key {
            "Q2d" => Some(&self.q2d),
            "E2d" => Some(&self.e2d),
            _ if key == self.plot_type.key() => Some(&self.angular),
            _ => None,
        }
    }

    /// Key of the angular grid.
    pub fn angular_key(&self) -> &'static str {
        self.plot_type.key()
    }

    /// Number of kinematically accessible cells.
    pub fn accessible_count(&self) -> usize {
        self.angular.finite_count()
    }
}

impl Serialize for GraphData {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(6))?;
        map.serialize_entry("Q_low", &self.q_low)?;
        map.serialize_entry("Q_hi", &self.q_hi)?;
        map.serialize_entry("E", &self.e)?;
        map.serialize_entry("Q2d", &self.q2d)?;
        map.serialize_entry("E2d", &self.e2d)?;
        map.serialize_entry(self.plot_type.key(), &self.angular)?;
        map.end()
    }
}

/// `n` evenly spaced samples from `start` to `stop`, both included.
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            let mut samples: Vec<f64> = (0..n).map(|i| start + step * i as f64).collect();
            samples[n - 1] = stop;
            samples
        }
    }
}

/// |Q| for wavevectors `ki`, `kf` separated by `two_theta` degrees.
pub fn momentum_transfer(ki: f64, kf: f64, two_theta: f64) -> f64 {
    (ki * ki + kf * kf - 2.0 * ki * kf * two_theta.to_radians().cos()).sqrt()
}

/// Angle in degrees between `ki` and `Q` in the (ki, kf, Q) triangle.
///
/// NaN when the three lengths do not form a triangle.
pub fn angle_ki_q(ki: f64, kf: f64, q: f64) -> f64 {
    let cos_arg = (ki * ki + q * q - kf * kf) / (2.0 * ki * q);
    if (-1.0..=1.0).contains(&cos_arg) {
        cos_arg.acos().to_degrees()
    } else {
        f64::NAN
    }
}

/// Computes boundary curves, grids and the selected angular quantity.
///
/// Pure: reads only its arguments. Degenerate settings (for example
/// `Ei <= 0`) produce NaN-filled output rather than an error.
pub fn calculate_graph_data(
    experiment: &ExperimentParameters,
    instrument: &InstrumentSettings,
) -> GraphData {
    let n = instrument.samples();
    let ei = experiment.ei;
    let e = linspace(-ei, EMAX_FRACTION * ei, n);

    let ki = wavevector(ei);
    let kf: Vec<f64> = e.iter().map(|&delta_e| wavevector(ei - delta_e)).collect();
    let (low_angle, high_angle) = instrument.scattering_range(experiment.s2);
    let q_low: Vec<f64> = kf
        .iter()
        .map(|&kf| momentum_transfer(ki, kf, low_angle))
        .collect();
    let q_hi: Vec<f64> = kf
        .iter()
        .map(|&kf| momentum_transfer(ki, kf, high_angle))
        .collect();

    // f64::max skips NaN, so the fold only stays NaN if every bound is NaN
    let q_max = q_hi.iter().copied().fold(f64::NAN, f64::max);
    let q = linspace(0.0, q_max, n);

    let q2d = Grid2d::from_fn(n, n, |i, _| q[i]);
    let e2d = Grid2d::from_fn(n, n, |_, j| e[j]);

    let side = if experiment.s2 < 0.0 { -1.0 } else { 1.0 };
    let plot_type = experiment.plot_type;
    let angular = Grid2d::from_fn(n, n, |i, j| {
        let q = q[i];
        // written so that NaN bounds also reject the cell
        if !(q >= q_low[j] && q <= q_hi[j]) {
            return f64::NAN;
        }
        let alpha_s = 90.0 + side * angle_ki_q(ki, kf[j], q) - experiment.alpha_p;
        plot_type.apply(alpha_s)
    });

    let graph = GraphData {
        q_low,
        q_hi,
        e,
        q2d,
        e2d,
        plot_type,
        angular,
    };
    tracing::debug!(
        ei,
        s2 = experiment.s2,
        alpha_p = experiment.alpha_p,
        plot_type = %plot_type,
        samples = n,
        q_max,
        accessible = graph.accessible_count(),
        "graph data calculated"
    );
    graph
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linspace_hits_both_ends() {
        let samples = linspace(-20.0, 18.0, 200);
        assert_eq!(samples.len(), 200);
        assert_eq!(samples[0], -20.0);
        assert_eq!(samples[199], 18.0);
        assert!(samples.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(linspace(1.0, 2.0, 1), vec![1.0]);
        assert!(linspace(1.0, 2.0, 0).is_empty());
    }

    #[test]
    fn elastic_forward_scattering_has_zero_q() {
        let k = wavevector(20.0);
        assert!(momentum_transfer(k, k, 0.0).abs() < 1e-12);
        // 2θ = 90 degrees: Q = sqrt(2) k
        assert!((momentum_transfer(k, k, 90.0) - k * 2f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn angle_ki_q_matches_elastic_geometry() {
        // elastic scattering at 2θ: Q makes 90 - θ with ki
        let k = wavevector(10.0);
        let q = momentum_transfer(k, k, 60.0);
        assert!((angle_ki_q(k, k, q) - 60.0).abs() < 1e-9);
        let q = momentum_transfer(k, k, 100.0);
        assert!((angle_ki_q(k, k, q) - 40.0).abs() < 1e-9);
    }

    #[test]
    fn angle_ki_q_rejects_impossible_triangles() {
        assert!(angle_ki_q(1.0, 1.0, 3.0).is_nan());
        assert!(angle_ki_q(1.0, 1.0, 0.0).is_nan());
    }

    #[test]
    fn negative_s2_mirrors_the_angle() {
        let right = ExperimentParameters {
            ei: 20.0,
            s2: 60.0,
            alpha_p: 0.0,
            plot_type: PlotType::Alpha,
        };
        let left = ExperimentParameters { s2: -60.0, ..right };
        let settings = InstrumentSettings::default();
        let right = calculate_graph_data(&right, &settings);
        let left = calculate_graph_data(&left, &settings);
        assert_eq!(right.q_low, left.q_low);
        assert_eq!(right.q_hi, left.q_hi);
        for (r, l) in right.angular.values().iter().zip(left.angular.values()) {
            assert_eq!(r.is_nan(), l.is_nan());
            if r.is_finite() {
                // 90 + φ and 90 - φ are mirror images about 90
                assert!(((r - 90.0) + (l - 90.0)).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn non_positive_ei_is_degenerate_not_a_panic() {
        let experiment = ExperimentParameters {
            ei: -5.0,
            ..ExperimentParameters::default()
        };
        let graph = calculate_graph_data(&experiment, &InstrumentSettings::default());
        assert_eq!(graph.e.len(), 200);
        assert_eq!(graph.accessible_count(), 0);
    }
}
