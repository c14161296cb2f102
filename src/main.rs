//! tfectl - Main entry point

use std::process::ExitCode;

use clap::Parser;
use log::{debug, info};

use tfectl::{
    run_clone_ws_command, run_mod_command, run_org_command, run_ws_command, Cli, CloneResource,
    Command, GetResource, Result, TfeClient, TokenResolver,
};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    info!("Starting tfectl v{}", env!("CARGO_PKG_VERSION"));
    debug!(
        "CLI args: org={:?}, host={}, quiet={}",
        cli.org, cli.host, cli.quiet
    );

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli) -> Result<()> {
    // Resolve token with fallback logic
    let token = TokenResolver::new(&cli.host).resolve(cli.token.as_deref())?;
    let client = TfeClient::new(token, cli.host.clone());

    match &cli.command {
        Command::Get { resource } => match resource {
            GetResource::Org(_) => run_org_command(&client, cli).await,
            GetResource::Ws(_) => run_ws_command(&client, cli).await,
            GetResource::Mod(_) => run_mod_command(&client, cli).await,
        },
        Command::Clone { resource } => match resource {
            CloneResource::Ws(args) => run_clone_ws_command(&client, cli, args).await,
        },
    }
}
