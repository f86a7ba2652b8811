//! Type-safe enumerations for the planning model.
//!
//! The presentation layer hands these around as strings (combo-box labels,
//! mode tags, result keys); parsing them once here keeps the engine free of
//! string matching.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::HpptError;

/// Angular quantity shown on the (Q, E) map.
///
/// `α_s` is the in-plane angle between the momentum transfer and the
/// neutron polarization; the other variants are the usual polarization
/// analysis factors built from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PlotType {
    /// The raw angle `α_s` in degrees.
    #[serde(rename = "ang_PQ")]
    Alpha,

    /// `cos²α_s`.
    #[default]
    #[serde(rename = "cos2_ang_PQ")]
    Cos2Alpha,

    /// `(1 + cos²α_s) / 2`.
    #[serde(rename = "cos2_ang_PQ_plus_1_div_2")]
    Cos2AlphaPlus1Div2,

    /// `cos²α_s - sin²α_s`.
    #[serde(rename = "cos2_minus_sin2_ang_PQ")]
    Cos2MinusSin2Alpha,
}

impl PlotType {
    /// All plot types in display order.
    pub const fn all() -> &'static [PlotType] {
        &[
            Self::Alpha,
            Self::Cos2Alpha,
            Self::Cos2AlphaPlus1Div2,
            Self::Cos2MinusSin2Alpha,
        ]
    }

    /// Returns the display label.
    pub fn as_str(&self) -> &'static str {
        match self {
            PlotType::Alpha => "α_s",
            PlotType::Cos2Alpha => "cos²α_s",
            PlotType::Cos2AlphaPlus1Div2 => "(1+cos²α_s)/2",
            PlotType::Cos2MinusSin2Alpha => "cos²α_s-sin²α_s",
        }
    }

    /// Returns the key under which the computed grid is published.
    pub fn key(&self) -> &'static str {
        match self {
            PlotType::Alpha => "ang_PQ",
            PlotType::Cos2Alpha => "cos2_ang_PQ",
            PlotType::Cos2AlphaPlus1Div2 => "cos2_ang_PQ_plus_1_div_2",
            PlotType::Cos2MinusSin2Alpha => "cos2_minus_sin2_ang_PQ",
        }
    }

    /// Short ASCII name, convenient on the command line.
    pub fn short_name(&self) -> &'static str {
        match self {
            PlotType::Alpha => "alpha",
            PlotType::Cos2Alpha => "cos2",
            PlotType::Cos2AlphaPlus1Div2 => "cos2_plus_1_div_2",
            PlotType::Cos2MinusSin2Alpha => "cos2_minus_sin2",
        }
    }

    /// Transforms a raw angle in degrees into the displayed quantity.
    ///
    /// NaN in gives NaN out for every variant.
    pub fn apply(&self, angle_deg: f64) -> f64 {
        if matches!(self, PlotType::Alpha) {
            return angle_deg;
        }
        let (sin, cos) = angle_deg.to_radians().sin_cos();
        let cos2 = cos * cos;
        match self {
            PlotType::Alpha => angle_deg,
            PlotType::Cos2Alpha => cos2,
            PlotType::Cos2AlphaPlus1Div2 => (1.0 + cos2) / 2.0,
            PlotType::Cos2MinusSin2Alpha => cos2 - sin * sin,
        }
    }
}

impl fmt::Display for PlotType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PlotType {
    type Err = HpptError;

    /// Parse a label, result key, or short name (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        PlotType::all()
            .iter()
            .copied()
            .find(|plot_type| {
                normalized == plot_type.as_str().to_lowercase()
                    || normalized == plot_type.key().to_lowercase()
                    || normalized == plot_type.short_name()
            })
            .ok_or_else(|| HpptError::UnknownPlotType(s.to_string()))
    }
}

/// Whether |Q| comes from a reciprocal-lattice direction or is a free scalar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperimentType {
    #[default]
    SingleCrystal,
    Powder,
}

impl ExperimentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExperimentType::SingleCrystal => "single_crystal",
            ExperimentType::Powder => "powder",
        }
    }
}

impl fmt::Display for ExperimentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ExperimentType {
    type Err = HpptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['-', ' '], "_").as_str() {
            "single_crystal" => Ok(ExperimentType::SingleCrystal),
            "powder" => Ok(ExperimentType::Powder),
            _ => Err(HpptError::UnknownExperimentType(s.to_string())),
        }
    }
}
