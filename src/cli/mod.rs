//! CLI argument parsing

mod clone;
mod common;
mod get;

pub use clone::{CloneResource, CloneWsArgs};
pub use common::OutputFormat;
pub use get::{GetResource, ModArgs, OrgArgs, WsArgs};

use clap::{Parser, Subcommand};

use crate::config::defaults;
use crate::error::{Result, TfeError};

/// TFE resource explorer CLI
#[derive(Parser, Debug)]
#[command(name = "tfectl")]
#[command(version)]
#[command(about = "Explore TFE organizations, workspaces, and registry modules", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Organization name
    #[arg(long, env = "TF_ORG", global = true)]
    pub org: Option<String>,

    /// TFE host
    #[arg(short = 'H', long, env = "TF_DOMAIN", default_value = defaults::HOST, global = true)]
    pub host: String,

    /// API token (overrides the TF_TOKEN env var and the credentials file)
    #[arg(short = 't', long, global = true)]
    pub token: Option<String>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short = 'l', long, default_value = defaults::LOG_LEVEL, global = true)]
    pub log_level: String,

    /// Suppress progress spinners
    #[arg(short = 'q', long, default_value_t = false, global = true)]
    pub quiet: bool,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List or show resources
    Get {
        #[command(subcommand)]
        resource: GetResource,
    },

    /// Copy resources
    Clone {
        #[command(subcommand)]
        resource: CloneResource,
    },
}

impl Cli {
    /// Organization to operate on, from --org or TF_ORG.
    ///
    /// Commands that scope to an organization call this before touching the
    /// network, so a missing value fails immediately.
    pub fn require_org(&self) -> Result<&str> {
        self.org.as_deref().ok_or_else(|| {
            TfeError::Config(
                "No organization configured. Use --org or set the TF_ORG environment variable."
                    .to_string(),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_default_values() {
        let cli = Cli::parse_from(["tfectl", "get", "org"]);
        assert_eq!(cli.log_level, defaults::LOG_LEVEL);
        assert!(!cli.quiet);
        assert!(cli.token.is_none());
    }

    #[test]
    fn test_cli_get_org_with_filter() {
        let cli = Cli::parse_from(["tfectl", "get", "org", "-f", "acme"]);
        let Command::Get {
            resource: GetResource::Org(args),
        } = &cli.command
        else {
            panic!("Expected get org");
        };
        assert_eq!(args.filter.as_deref(), Some("acme"));
    }

    #[test]
    fn test_cli_get_ws_with_name() {
        let cli = Cli::parse_from(["tfectl", "get", "ws", "my-workspace", "--org", "my-org"]);
        assert_eq!(cli.org.as_deref(), Some("my-org"));
        let Command::Get {
            resource: GetResource::Ws(args),
        } = &cli.command
        else {
            panic!("Expected get ws");
        };
        assert_eq!(args.name.as_deref(), Some("my-workspace"));
    }

    #[test]
    fn test_cli_get_mod_all_versions() {
        let cli = Cli::parse_from(["tfectl", "get", "mod", "--all-versions", "-f", "vpc"]);
        let Command::Get {
            resource: GetResource::Mod(args),
        } = &cli.command
        else {
            panic!("Expected get mod");
        };
        assert!(args.all_versions);
        assert_eq!(args.filter.as_deref(), Some("vpc"));
    }

    #[test]
    fn test_cli_clone_ws() {
        let cli = Cli::parse_from(["tfectl", "clone", "ws", "prod", "prod-copy"]);
        let Command::Clone {
            resource: CloneResource::Ws(args),
        } = &cli.command
        else {
            panic!("Expected clone ws");
        };
        assert_eq!(args.source, "prod");
        assert_eq!(args.dest, "prod-copy");
    }

    #[test]
    fn test_cli_output_format() {
        let cli = Cli::parse_from(["tfectl", "get", "org", "-o", "json"]);
        let Command::Get {
            resource: GetResource::Org(args),
        } = &cli.command
        else {
            panic!("Expected get org");
        };
        assert_eq!(args.output, OutputFormat::Json);
    }

    #[test]
    fn test_require_org_missing() {
        let mut cli = Cli::parse_from(["tfectl", "get", "ws"]);
        cli.org = None; // TF_ORG may leak in from the test environment
        let err = cli.require_org().unwrap_err();
        assert!(err.to_string().contains("TF_ORG"));
    }

    #[test]
    fn test_require_org_present() {
        let cli = Cli::parse_from(["tfectl", "get", "ws", "--org", "acme"]);
        assert_eq!(cli.require_org().unwrap(), "acme");
    }

    #[test]
    fn test_cli_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["tfectl", "get", "org", "-H", "tfe.example.com", "-q"]);
        assert_eq!(cli.host, "tfe.example.com");
        assert!(cli.quiet);
    }
}
