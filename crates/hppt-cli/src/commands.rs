use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::{info, info_span};

use hppt_config::{Configuration, Settings};
use hppt_model::{
    CrosshairParameters, ExperimentParameters, ExperimentType, GraphData, ModQUpdate,
    SingleCrystalParameters, ValidationError, validate_crosshair, validate_experiment,
    validate_lattice,
};

use crate::cli::{CalculateArgs, CrosshairArgs, LatticeArgs, OutputFormatArg};
use crate::summary::{calculation_table, config_table, crosshair_table, plot_types_table};

/// Result of `hppt calculate`.
#[derive(Debug)]
pub struct Calculation {
    pub experiment: ExperimentParameters,
    pub graph: GraphData,
}

/// Result of `hppt crosshair`.
#[derive(Debug)]
pub struct CrosshairOutcome {
    pub experiment_type: ExperimentType,
    /// Values held by the crosshair after the update.
    pub stored: CrosshairParameters,
    pub update: ModQUpdate,
}

pub fn load_configuration(path: Option<&Path>) -> Result<Configuration> {
    match path {
        Some(path) => Configuration::from_path(path)
            .with_context(|| format!("load settings from {}", path.display())),
        None => Configuration::load().context("load settings"),
    }
}

/// Message printed when the settings file lacks keys of the template.
pub fn invalid_configuration_message(config: &Configuration) -> String {
    format!(
        "Error with configuration settings! Check and update your file: {} \
         with the latest settings (missing: {}) found in the built-in template \
         shown by `hppt config` and start the application again.",
        config.config_file_path().display(),
        config.missing_keys().join(", ")
    )
}

/// Message printed when the settings file holds values the model cannot use.
pub fn invalid_values_message(config: &Configuration) -> String {
    let details: Vec<String> = config
        .value_errors()
        .iter()
        .map(|e| format!("  - {e}"))
        .collect();
    format!(
        "Error with configuration values in {}:\n{}",
        config.config_file_path().display(),
        details.join("\n")
    )
}

pub fn run_calculate(args: &CalculateArgs, settings: &Settings) -> Result<Calculation> {
    let experiment = experiment_from_args(args, &settings.experiment);
    ensure_valid("experiment", &validate_experiment(&experiment))?;

    let span = info_span!("calculate", ei = experiment.ei, s2 = experiment.s2);
    let _guard = span.enter();
    let mut model = settings.build_model();
    model.set_experiment_data(experiment);
    let graph = model.calculate_graph_data();
    info!(
        plot_type = graph.plot_type.key(),
        accessible = graph.accessible_count(),
        "calculated graph data"
    );
    Ok(Calculation { experiment, graph })
}

pub fn render_calculation(calculation: &Calculation, format: OutputFormatArg) -> Result<String> {
    match format {
        OutputFormatArg::Table => {
            Ok(calculation_table(&calculation.experiment, &calculation.graph).to_string())
        }
        OutputFormatArg::Json => {
            serde_json::to_string_pretty(&calculation.graph).context("serialize graph data")
        }
    }
}

pub fn run_crosshair(args: &CrosshairArgs, settings: &Settings) -> Result<CrosshairOutcome> {
    let experiment_type = args.mode.unwrap_or(settings.crosshair.experiment_type);
    let lattice = lattice_from_args(&args.lattice, &settings.lattice);
    let requested = CrosshairParameters {
        delta_e: args.delta_e,
        mod_q: args.mod_q.unwrap_or(0.0),
    };
    let mut errors = validate_crosshair(experiment_type, &requested);
    if experiment_type == ExperimentType::SingleCrystal {
        errors.extend(validate_lattice(&lattice));
    }
    ensure_valid("crosshair", &errors)?;

    let mut model = settings.build_model();
    model.set_single_crystal_data(lattice);
    let update = model.set_crosshair_data(experiment_type, requested.delta_e, requested.mod_q);
    info!(mode = experiment_type.as_str(), ?update, "moved crosshair");
    Ok(CrosshairOutcome {
        experiment_type,
        stored: model.crosshair().get(),
        update,
    })
}

pub fn render_crosshair(outcome: &CrosshairOutcome) -> String {
    crosshair_table(outcome.experiment_type, &outcome.stored, outcome.update).to_string()
}

pub fn run_plot_types() -> String {
    plot_types_table().to_string()
}

pub fn run_config(config: &Configuration) -> Result<String> {
    let table = config_table(config);
    let effective = config
        .settings()
        .to_toml_string()
        .context("render effective settings")?;
    Ok(format!("{table}\n\nEffective settings:\n\n{effective}"))
}

/// Writes `text` to `output`, or to stdout when no path is given.
pub fn emit(text: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, text).with_context(|| format!("write {}", path.display()))?;
            info!(path = %path.display(), "wrote output");
        }
        None => println!("{text}"),
    }
    Ok(())
}

fn experiment_from_args(
    args: &CalculateArgs,
    base: &ExperimentParameters,
) -> ExperimentParameters {
    ExperimentParameters {
        ei: args.ei.unwrap_or(base.ei),
        s2: args.s2.unwrap_or(base.s2),
        alpha_p: args.alpha_p.unwrap_or(base.alpha_p),
        plot_type: args.plot_type.unwrap_or(base.plot_type),
    }
}

fn lattice_from_args(
    args: &LatticeArgs,
    base: &SingleCrystalParameters,
) -> SingleCrystalParameters {
    SingleCrystalParameters {
        a: args.a.unwrap_or(base.a),
        b: args.b.unwrap_or(base.b),
        c: args.c.unwrap_or(base.c),
        alpha: args.alpha.unwrap_or(base.alpha),
        beta: args.beta.unwrap_or(base.beta),
        gamma: args.gamma.unwrap_or(base.gamma),
        h: args.h.unwrap_or(base.h),
        k: args.k.unwrap_or(base.k),
        l: args.l.unwrap_or(base.l),
    }
}

fn ensure_valid(what: &str, errors: &[ValidationError]) -> Result<()> {
    if errors.is_empty() {
        return Ok(());
    }
    let details: Vec<String> = errors.iter().map(|e| format!("  - {e}")).collect();
    bail!("invalid {what} input:\n{}", details.join("\n"))
}
