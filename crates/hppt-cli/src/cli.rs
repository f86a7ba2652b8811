//! CLI argument definitions for the planning tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use hppt_model::{ExperimentType, PlotType};

#[derive(Parser)]
#[command(
    name = "hppt",
    version,
    about = "HYSPEC polarization planning tools",
    long_about = "Plan polarized inelastic neutron scattering experiments on HYSPEC.\n\n\
                  Computes the kinematically accessible (Q, E) region for an incident\n\
                  energy and detector position, and the angle between Q and the\n\
                  polarization across it."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Settings file to use instead of the one in the user configuration folder.
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Compute the accessible (Q, E) region and the polarization angle map.
    Calculate(CalculateArgs),

    /// Place the crosshair on the map and report its |Q|.
    Crosshair(CrosshairArgs),

    /// List the available plot types.
    PlotTypes,

    /// Show the settings file location, its validity and the effective values.
    Config,
}

/// Experiment values; anything omitted comes from the settings file.
#[derive(Parser)]
pub struct CalculateArgs {
    /// Incident energy in meV.
    #[arg(long = "ei", value_name = "MEV")]
    pub ei: Option<f64>,

    /// Detector tank angle in degrees (negative for the other side).
    #[arg(long = "s2", value_name = "DEG", allow_negative_numbers = true)]
    pub s2: Option<f64>,

    /// In-plane polarization angle in degrees.
    #[arg(long = "alpha-p", value_name = "DEG", allow_negative_numbers = true)]
    pub alpha_p: Option<f64>,

    /// Quantity to compute: alpha, cos2, cos2_plus_1_div_2, cos2_minus_sin2.
    #[arg(long = "plot-type", value_name = "TYPE")]
    pub plot_type: Option<PlotType>,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,

    /// Write the result to a file instead of stdout.
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Parser)]
pub struct CrosshairArgs {
    /// single_crystal or powder (default from the settings file).
    #[arg(long = "mode", value_name = "MODE")]
    pub mode: Option<ExperimentType>,

    /// Energy transfer in meV.
    #[arg(long = "delta-e", value_name = "MEV", allow_negative_numbers = true)]
    pub delta_e: f64,

    /// |Q| in 1/Å; only used in powder mode.
    #[arg(long = "mod-q", value_name = "INV_A")]
    pub mod_q: Option<f64>,

    #[command(flatten)]
    pub lattice: LatticeArgs,
}

/// Lattice overrides; anything omitted comes from the settings file.
#[derive(clap::Args)]
pub struct LatticeArgs {
    #[arg(long = "a", value_name = "Å")]
    pub a: Option<f64>,
    #[arg(long = "b", value_name = "Å")]
    pub b: Option<f64>,
    #[arg(long = "c", value_name = "Å")]
    pub c: Option<f64>,
    #[arg(long = "alpha", value_name = "DEG")]
    pub alpha: Option<f64>,
    #[arg(long = "beta", value_name = "DEG")]
    pub beta: Option<f64>,
    #[arg(long = "gamma", value_name = "DEG")]
    pub gamma: Option<f64>,
    #[arg(long = "h", allow_negative_numbers = true)]
    pub h: Option<f64>,
    #[arg(long = "k", allow_negative_numbers = true)]
    pub k: Option<f64>,
    #[arg(long = "l", allow_negative_numbers = true)]
    pub l: Option<f64>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
