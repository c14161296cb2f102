//! Organizations: models, API operations, and command handlers

mod api;
mod commands;
mod models;

pub use commands::run_org_command;
pub use models::{Organization, OrganizationAttributes};
