//! Workspace variables: models and API operations

mod api;
mod models;

pub use models::{Variable, VariableAttributes, VariableCreateAttributes};
