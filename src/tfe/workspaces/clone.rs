//! Workspace cloning

use log::{debug, warn};

use crate::error::{Result, TfeError};
use crate::tfe::variables::VariableCreateAttributes;
use crate::tfe::TfeClient;

use super::models::{Workspace, WorkspaceCreateAttributes};

/// Outcome of a successful clone
#[derive(Debug)]
pub struct CloneSummary {
    pub workspace: Workspace,
    /// Keys copied to the destination, in source order
    pub copied_variables: Vec<String>,
    /// Keys whose values were redacted (sensitive on the source)
    pub redacted_variables: Vec<String>,
}

/// Clone a workspace within an organization, including its variables.
///
/// The destination copies the source's description, working directory,
/// terraform version, auto-apply flag, and execution mode (plus the agent
/// pool reference for `agent` mode). Variables are replicated one by one.
///
/// Not transactional: a failure while copying variables stops the clone and
/// leaves the destination workspace, and any variables already copied, in
/// place. The error names the variable that failed.
pub async fn clone_workspace(
    client: &TfeClient,
    org: &str,
    source_name: &str,
    dest_name: &str,
) -> Result<CloneSummary> {
    let (source, _raw) = client.require_workspace(org, source_name).await?;
    debug!(
        "Cloning workspace '{}' ({}) to '{}'",
        source_name, source.id, dest_name
    );

    let attributes = WorkspaceCreateAttributes::copying(&source, dest_name);
    let dest = client.create_workspace(org, attributes).await?;
    debug!("Created destination workspace '{}' ({})", dest_name, dest.id);

    let variables = client.get_variables(&source.id).await?;

    let mut copied_variables = Vec::with_capacity(variables.len());
    let mut redacted_variables = Vec::new();

    for variable in &variables {
        if variable.is_sensitive() {
            // Sensitive values are write-only: the service returns them
            // empty, so the copy is created with an empty value.
            warn!(
                "Variable '{}' is sensitive; its value is redacted and will be empty on '{}'",
                variable.key(),
                dest_name
            );
            redacted_variables.push(variable.key().to_string());
        }

        let attrs = VariableCreateAttributes::copying(variable);
        client
            .create_variable(&dest.id, attrs)
            .await
            .map_err(|e| match e {
                TfeError::Api { status, .. } => TfeError::Api {
                    status,
                    message: format!(
                        "Failed to copy variable '{}' to workspace '{}'",
                        variable.key(),
                        dest_name
                    ),
                },
                other => other,
            })?;
        copied_variables.push(variable.key().to_string());
    }

    Ok(CloneSummary {
        workspace: dest,
        copied_variables,
        redacted_variables,
    })
}
