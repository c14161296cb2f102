//! Clone command resource definitions and arguments

use clap::{Parser, Subcommand};

/// Resource types for the 'clone' command
#[derive(Subcommand, Debug)]
pub enum CloneResource {
    /// Clone a workspace, including its variables
    #[command(visible_alias = "workspace")]
    Ws(CloneWsArgs),
}

/// Arguments for 'clone ws' subcommand
#[derive(Parser, Debug)]
pub struct CloneWsArgs {
    /// Source workspace name
    pub source: String,

    /// Destination workspace name
    pub dest: String,
}
