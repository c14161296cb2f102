//! Workspace command handlers

use log::debug;

use crate::cli::{Cli, CloneResource, CloneWsArgs, Command, GetResource};
use crate::error::Result;
use crate::output::{output_names, output_raw, print_workspace_detail};
use crate::tfe::filter::name_matches;
use crate::tfe::variables::Variable;
use crate::tfe::TfeClient;
use crate::ui::{create_spinner, finish_spinner};

use super::clone::clone_workspace;
use super::models::Workspace;

/// Everything the detail view needs, gathered before rendering so the
/// spinner can be cleared first
enum WorkspaceView {
    Detail {
        workspace: Workspace,
        agent_pool_name: Option<String>,
        variables: Vec<Variable>,
    },
    Raw(serde_json::Value),
}

/// Run the workspace list/detail command
pub async fn run_ws_command(client: &TfeClient, cli: &Cli) -> Result<()> {
    let Command::Get {
        resource: GetResource::Ws(args),
    } = &cli.command
    else {
        unreachable!()
    };

    let org = cli.require_org()?;

    // If NAME is specified, show a single workspace
    if let Some(name) = &args.name {
        return show_workspace(client, cli, org, name).await;
    }

    let spinner = create_spinner(
        &format!("Fetching workspaces from '{}'...", org),
        cli.quiet,
    );

    let result = client.get_workspaces(org).await;

    finish_spinner(spinner);

    let mut workspaces = result?;

    if let Some(filter) = &args.filter {
        workspaces.retain(|ws| name_matches(ws.name(), filter));
        debug!(
            "Filtered to {} workspaces matching '{}'",
            workspaces.len(),
            filter
        );
    }

    let names: Vec<&str> = workspaces.iter().map(|ws| ws.name()).collect();
    output_names(&names, &args.output)?;
    Ok(())
}

/// Show details of a single workspace, including its variables
async fn show_workspace(client: &TfeClient, cli: &Cli, org: &str, name: &str) -> Result<()> {
    let Command::Get {
        resource: GetResource::Ws(args),
    } = &cli.command
    else {
        unreachable!()
    };

    let spinner = create_spinner(&format!("Fetching workspace '{}'...", name), cli.quiet);

    let view = fetch_workspace_view(client, org, name, args.output.is_structured()).await;

    finish_spinner(spinner);

    match view? {
        WorkspaceView::Raw(raw) => output_raw(&raw, &args.output),
        WorkspaceView::Detail {
            workspace,
            agent_pool_name,
            variables,
        } => print_workspace_detail(&workspace, agent_pool_name.as_deref(), &variables),
    }
}

/// Fetch the workspace plus whatever the chosen format renders. No output
/// happens here; the caller renders after clearing the spinner.
async fn fetch_workspace_view(
    client: &TfeClient,
    org: &str,
    name: &str,
    structured: bool,
) -> Result<WorkspaceView> {
    let (workspace, raw) = client.require_workspace(org, name).await?;

    if structured {
        return Ok(WorkspaceView::Raw(raw));
    }

    // Agent pool name only matters for agent execution mode
    let agent_pool_name = if workspace.execution_mode() == "agent" {
        match workspace.agent_pool_id() {
            Some(pool_id) => client
                .get_agent_pool(pool_id)
                .await?
                .map(|pool| pool.attributes.name),
            None => None,
        }
    } else {
        None
    };

    let variables = client.get_variables(&workspace.id).await?;

    Ok(WorkspaceView::Detail {
        workspace,
        agent_pool_name,
        variables,
    })
}

/// Run the workspace clone command
pub async fn run_clone_ws_command(
    client: &TfeClient,
    cli: &Cli,
    args: &CloneWsArgs,
) -> Result<()> {
    let Command::Clone {
        resource: CloneResource::Ws(_),
    } = &cli.command
    else {
        unreachable!()
    };

    let org = cli.require_org()?;

    let spinner = create_spinner(
        &format!("Cloning workspace '{}' to '{}'...", args.source, args.dest),
        cli.quiet,
    );

    let result = clone_workspace(client, org, &args.source, &args.dest).await;

    finish_spinner(spinner);

    let summary = result?;

    println!(
        "Cloned workspace '{}' to '{}' ({} variables copied)",
        args.source,
        args.dest,
        summary.copied_variables.len()
    );
    for key in &summary.redacted_variables {
        println!(
            "  note: variable '{}' is sensitive; its value was not copied",
            key
        );
    }
    Ok(())
}
