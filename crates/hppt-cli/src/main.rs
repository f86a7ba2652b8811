//! HYSPEC polarization planning CLI.

use clap::{ColorChoice, Parser};
use hppt_cli::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use hppt_cli::commands::{
    emit, invalid_configuration_message, invalid_values_message, load_configuration,
    render_calculation, render_crosshair, run_calculate, run_config, run_crosshair, run_plot_types,
};
use hppt_cli::logging::{LogConfig, LogFormat, init_logging};
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "hppt starting");

    let config = match load_configuration(cli.config.as_deref()) {
        Ok(config) => config,
        Err(error) => {
            eprintln!("error: {error:#}");
            std::process::exit(1);
        }
    };
    if !config.is_valid() && !matches!(cli.command, Command::Config) {
        eprintln!("{}", invalid_configuration_message(&config));
        std::process::exit(1);
    }
    if !config.value_errors().is_empty() && !matches!(cli.command, Command::Config) {
        eprintln!("{}", invalid_values_message(&config));
        std::process::exit(1);
    }
    let settings = config.settings();

    let exit_code = match &cli.command {
        Command::Calculate(args) => {
            let outcome = run_calculate(args, settings)
                .and_then(|calculation| render_calculation(&calculation, args.format))
                .and_then(|text| emit(&text, args.output.as_deref()));
            report(outcome)
        }
        Command::Crosshair(args) => {
            let outcome = run_crosshair(args, settings)
                .and_then(|result| emit(&render_crosshair(&result), None));
            report(outcome)
        }
        Command::PlotTypes => report(emit(&run_plot_types(), None)),
        Command::Config => match run_config(&config) {
            Ok(text) => {
                println!("{text}");
                if config.is_valid() && config.value_errors().is_empty() {
                    0
                } else {
                    1
                }
            }
            Err(error) => report(Err(error)),
        },
    };
    std::process::exit(exit_code);
}

fn report(outcome: anyhow::Result<()>) -> i32 {
    match outcome {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    }
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
