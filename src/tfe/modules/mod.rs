//! Registry modules: models, API operations, version resolution, and
//! command handlers

mod api;
mod commands;
mod models;
mod resolver;

pub use commands::run_mod_command;
pub use models::{
    RegistryModule, RegistryModuleAttributes, RegistryModuleVersion, VersionStatus,
};
pub use resolver::latest_version;
