//! tfectl - Explore Terraform Cloud/Enterprise organizations, workspaces,
//! and private registry modules.
//!
//! # Features
//!
//! - List organizations, workspaces, and registry modules
//! - Filter resources by name (case-insensitive substring match)
//! - Workspace detail view with variables and agent pool
//! - Clone a workspace together with its variables
//! - Latest-version and all-versions registry module listings
//! - Multiple output formats (text, JSON, YAML)
//! - Automatic pagination handling
//!
//! # Example
//!
//! ```bash
//! # List all organizations
//! tfectl get org
//!
//! # List workspaces matching "prod"
//! tfectl get ws -f prod
//!
//! # Show one workspace with its variables
//! tfectl get ws my-workspace
//!
//! # Clone a workspace including variables
//! tfectl clone ws prod prod-copy
//!
//! # Latest version of every registry module
//! tfectl get mod
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod tfe;
pub mod ui;

pub use cli::{
    Cli, CloneResource, CloneWsArgs, Command, GetResource, ModArgs, OrgArgs, OutputFormat, WsArgs,
};
pub use error::{Result, TfeError};
pub use tfe::{
    clone_workspace, name_matches, run_clone_ws_command, run_mod_command, run_org_command,
    run_ws_command, Organization, RegistryModule, TfeClient, TokenResolver, Variable, Workspace,
};
