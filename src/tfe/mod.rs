//! TFE API client module
//!
//! This module provides functionality to interact with the Terraform
//! Cloud/Enterprise API.

mod client;
mod credentials;
mod filter;
pub mod modules;
pub mod organizations;
pub mod traits;
pub mod variables;
pub mod workspaces;

use serde::Deserialize;

pub use client::TfeClient;
pub use credentials::TokenResolver;
pub use filter::name_matches;
pub use modules::{
    latest_version, run_mod_command, RegistryModule, RegistryModuleAttributes, VersionStatus,
};
pub use organizations::{run_org_command, Organization, OrganizationAttributes};
pub use traits::{ApiListResponse, PaginatedResponse};
pub use variables::{Variable, VariableAttributes, VariableCreateAttributes};
pub use workspaces::{
    clone_workspace, run_clone_ws_command, run_ws_command, CloneSummary, Workspace,
    WorkspaceAttributes, WorkspaceCreateAttributes,
};

/// Pagination metadata from TFE API (shared across resources)
#[derive(Deserialize, Debug, Default, Clone)]
pub struct PaginationMeta {
    pub pagination: Option<Pagination>,
}

/// Pagination details
#[derive(Deserialize, Debug, Clone)]
pub struct Pagination {
    #[serde(rename = "current-page")]
    pub current_page: u32,
    #[serde(rename = "next-page")]
    pub next_page: Option<u32>,
    #[serde(rename = "total-pages")]
    pub total_pages: u32,
    #[serde(rename = "total-count")]
    pub total_count: u32,
}
