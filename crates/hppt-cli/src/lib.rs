//! Command-line front end for the HYSPEC polarization planning model.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
