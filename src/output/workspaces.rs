//! Workspace detail formatter

use crate::error::Result;
use crate::tfe::{Variable, Workspace};

use super::common::format_optional_timestamp;

/// Print a labeled key/value block for a single workspace, followed by its
/// variables.
///
/// `agent_pool_name` is only meaningful for `agent` execution mode; `None`
/// there means the pool relationship was missing or unresolvable.
pub fn print_workspace_detail(
    workspace: &Workspace,
    agent_pool_name: Option<&str>,
    variables: &[Variable],
) -> Result<()> {
    println!("Name:               {}", workspace.name());
    println!("ID:                 {}", workspace.id);
    println!("Description:        \"{}\"", workspace.description());
    println!("Execution mode:     {}", workspace.execution_mode());
    if workspace.execution_mode() == "agent" {
        println!(
            "Agent pool:         {}",
            agent_pool_name.unwrap_or("not available")
        );
    }
    println!("Auto apply:         {}", workspace.auto_apply());
    println!("Terraform version:  {}", workspace.terraform_version());
    println!("Working directory:  \"{}\"", workspace.working_directory());
    println!(
        "Created at:         {}",
        format_optional_timestamp(workspace.attributes.created_at.as_deref())?
    );
    println!(
        "Updated at:         {}",
        format_optional_timestamp(workspace.attributes.updated_at.as_deref())?
    );

    println!("Variables ({}):", variables.len());
    for variable in variables {
        let mut traits = vec![variable.category().to_string()];
        if variable.is_hcl() {
            traits.push("hcl".to_string());
        }
        if variable.is_sensitive() {
            traits.push("sensitive".to_string());
        }
        println!(
            "  {} = {} ({})",
            variable.key(),
            variable.value(),
            traits.join(", ")
        );
    }

    Ok(())
}
