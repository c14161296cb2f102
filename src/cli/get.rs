//! Get command resource definitions and arguments

use clap::{Parser, Subcommand};

use super::common::OutputFormat;

/// Resource types for the 'get' command
#[derive(Subcommand, Debug)]
pub enum GetResource {
    /// Get organizations
    #[command(
        visible_alias = "orgs",
        visible_alias = "organization",
        visible_alias = "organizations"
    )]
    Org(OrgArgs),

    /// Get workspaces
    #[command(visible_alias = "workspace", visible_alias = "workspaces")]
    Ws(WsArgs),

    /// Get registry modules
    #[command(visible_alias = "mods", visible_alias = "module", visible_alias = "modules")]
    Mod(ModArgs),
}

/// Arguments for 'get org' subcommand
#[derive(Parser, Debug)]
pub struct OrgArgs {
    /// Filter organizations by name (substring match)
    #[arg(short, long)]
    pub filter: Option<String>,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,
}

/// Arguments for 'get ws' subcommand
#[derive(Parser, Debug)]
pub struct WsArgs {
    /// Workspace name (if specified, shows details for that workspace)
    pub name: Option<String>,

    /// Filter workspaces by name (substring match)
    #[arg(short, long)]
    pub filter: Option<String>,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,
}

/// Arguments for 'get mod' subcommand
///
/// Default listing shows the latest version of each matching module. With
/// exactly one match the detail view is shown instead.
#[derive(Parser, Debug)]
pub struct ModArgs {
    /// Filter modules by name (substring match)
    #[arg(short, long)]
    pub filter: Option<String>,

    /// Show every recorded version instead of only the latest
    #[arg(long, default_value_t = false)]
    pub all_versions: bool,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,
}
