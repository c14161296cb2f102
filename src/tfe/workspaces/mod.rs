//! Workspaces: models, API operations, cloning, and command handlers

mod api;
mod clone;
mod commands;
mod models;

pub use clone::{clone_workspace, CloneSummary};
pub use commands::{run_clone_ws_command, run_ws_command};
pub use models::{
    AgentPool, Workspace, WorkspaceAttributes, WorkspaceCreateAttributes, WorkspaceRelationships,
};
