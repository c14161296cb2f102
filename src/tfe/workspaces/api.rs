//! Workspace API operations

use crate::config::api;
use crate::error::{Result, TfeError};
use crate::tfe::traits::ApiListResponse;
use crate::tfe::TfeClient;

use super::models::{AgentPool, Workspace, WorkspaceCreateAttributes};

impl TfeClient {
    /// Get all workspaces in an organization (paginated)
    pub async fn get_workspaces(&self, org: &str) -> Result<Vec<Workspace>> {
        let path = format!("/{}/{}/{}", api::ORGANIZATIONS, org, api::WORKSPACES);
        let context = format!("workspaces for organization '{}'", org);
        self.fetch_all_pages::<Workspace, ApiListResponse<Workspace>>(&path, &context)
            .await
    }

    /// Get a single workspace by name, with the raw API document
    ///
    /// Returns `Ok(None)` when the workspace does not exist.
    pub async fn get_workspace(
        &self,
        org: &str,
        name: &str,
    ) -> Result<Option<(Workspace, serde_json::Value)>> {
        let path = format!(
            "/{}/{}/{}/{}",
            api::ORGANIZATIONS,
            org,
            api::WORKSPACES,
            name
        );
        let label = format!("workspace '{}'", name);
        self.fetch_resource_by_path(&path, &label).await
    }

    /// Get a single workspace by name, erroring when it does not exist
    pub async fn require_workspace(
        &self,
        org: &str,
        name: &str,
    ) -> Result<(Workspace, serde_json::Value)> {
        self.get_workspace(org, name)
            .await?
            .ok_or_else(|| TfeError::NotFound {
                resource: "Workspace",
                name: name.to_string(),
            })
    }

    /// Create a workspace in an organization
    ///
    /// A name collision surfaces as `TfeError::Conflict`.
    pub async fn create_workspace(
        &self,
        org: &str,
        attributes: WorkspaceCreateAttributes,
    ) -> Result<Workspace> {
        let path = format!("/{}/{}/{}", api::ORGANIZATIONS, org, api::WORKSPACES);
        let name = attributes.name.clone();
        let payload = attributes.into_payload();
        self.create_resource(&path, &payload, "Workspace", &name)
            .await
    }

    /// Read an agent pool by ID
    pub async fn get_agent_pool(&self, pool_id: &str) -> Result<Option<AgentPool>> {
        let path = format!("/{}/{}", api::AGENT_POOLS, pool_id);
        let label = format!("agent pool '{}'", pool_id);
        Ok(self
            .fetch_resource_by_path::<AgentPool>(&path, &label)
            .await?
            .map(|(pool, _raw)| pool))
    }
}
