//! Configuration file for the spectrometer planning tools.
//!
//! A `settings.toml` in the user's configuration folder provides the
//! start-up values of the model. It is seeded from a built-in template and
//! checked against that template on every load.

pub mod configuration;
pub mod error;
pub mod settings;

pub use configuration::{Configuration, TEMPLATE, settings_path};
pub use error::ConfigError;
pub use settings::{CrosshairSettings, Settings};
