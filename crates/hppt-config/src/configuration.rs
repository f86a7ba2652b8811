//! Settings file location, seeding and validity check.
//!
//! The file lives in the platform-specific configuration folder:
//! - macOS: ~/Library/Application Support/gov.ornl.hyspec-ppt/
//! - Windows: %APPDATA%/ornl/hyspec-ppt/config/
//! - Linux: ~/.config/hyspec-ppt/

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use hppt_model::{ValidationError, validate_experiment, validate_instrument, validate_lattice};

use crate::error::ConfigError;
use crate::settings::Settings;

const APP_QUALIFIER: &str = "gov";
const APP_ORG: &str = "ornl";
const APP_NAME: &str = "hyspec-ppt";
const CONFIG_FILENAME: &str = "settings.toml";

/// Built-in settings file written on first use.
pub const TEMPLATE: &str = include_str!("../configuration_template.toml");

/// Default path of the settings file.
///
/// Returns `None` if the platform-specific directory cannot be determined.
pub fn settings_path() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
}

/// A loaded settings file together with the template it is checked against.
#[derive(Debug, Clone)]
pub struct Configuration {
    config_file_path: PathBuf,
    template: toml::Table,
    user: toml::Table,
    settings: Settings,
}

impl Configuration {
    /// Loads the settings file from the default location.
    pub fn load() -> Result<Self, ConfigError> {
        let path = settings_path().ok_or(ConfigError::NoConfigDir)?;
        Self::from_path(path)
    }

    /// Loads the settings file at `path`, creating it from the template
    /// when it does not exist yet.
    pub fn from_path(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        if !path.exists() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).map_err(|e| ConfigError::io(parent, e))?;
            }
            fs::write(&path, TEMPLATE).map_err(|e| ConfigError::io(&path, e))?;
            tracing::info!(path = %path.display(), "created settings file from template");
        }

        let content = fs::read_to_string(&path).map_err(|e| ConfigError::io(&path, e))?;
        let user: toml::Table =
            toml::from_str(&content).map_err(|e| ConfigError::toml(&path, e))?;
        let settings: Settings =
            toml::from_str(&content).map_err(|e| ConfigError::toml(&path, e))?;
        let template: toml::Table = toml::from_str(TEMPLATE)
            .map_err(|e| ConfigError::toml("configuration_template.toml", e))?;
        tracing::debug!(path = %path.display(), "loaded settings");

        Ok(Self {
            config_file_path: path,
            template,
            user,
            settings,
        })
    }

    /// True when every key of the template is present in the file.
    pub fn is_valid(&self) -> bool {
        self.missing_keys().is_empty()
    }

    /// Dotted paths of template keys the file lacks.
    pub fn missing_keys(&self) -> Vec<String> {
        let mut missing = Vec::new();
        collect_missing(&self.template, &self.user, "", &mut missing);
        missing
    }

    /// Values in the file the model cannot run with, section by section.
    pub fn value_errors(&self) -> Vec<ValidationError> {
        let mut errors = validate_instrument(&self.settings.instrument);
        errors.extend(validate_experiment(&self.settings.experiment));
        errors.extend(validate_lattice(&self.settings.lattice));
        errors
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn config_file_path(&self) -> &Path {
        &self.config_file_path
    }
}

fn collect_missing(
    template: &toml::Table,
    user: &toml::Table,
    prefix: &str,
    out: &mut Vec<String>,
) {
    for (key, value) in template {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };
        match (value, user.get(key)) {
            (_, None) => out.push(path),
            (toml::Value::Table(expected), Some(toml::Value::Table(actual))) => {
                collect_missing(expected, actual, &path, out);
            }
            // a table in the template must stay a table
            (toml::Value::Table(_), Some(_)) => out.push(path),
            _ => {}
        }
    }
}
