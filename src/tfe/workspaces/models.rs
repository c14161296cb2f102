//! Workspace data models

use serde::{Deserialize, Serialize};

/// Workspace data from TFE API
#[derive(Deserialize, Debug, Clone)]
pub struct Workspace {
    pub id: String,
    pub attributes: WorkspaceAttributes,
    pub relationships: Option<WorkspaceRelationships>,
}

/// Workspace attributes from TFE API
#[derive(Deserialize, Debug, Clone)]
pub struct WorkspaceAttributes {
    pub name: String,

    pub description: Option<String>,

    #[serde(rename = "auto-apply")]
    pub auto_apply: Option<bool>,

    #[serde(rename = "terraform-version")]
    pub terraform_version: Option<String>,

    #[serde(rename = "working-directory")]
    pub working_directory: Option<String>,

    #[serde(rename = "execution-mode")]
    pub execution_mode: Option<String>,

    #[serde(rename = "created-at")]
    pub created_at: Option<String>,

    #[serde(rename = "updated-at")]
    pub updated_at: Option<String>,
}

/// Workspace relationships from TFE API
#[derive(Deserialize, Debug, Clone)]
pub struct WorkspaceRelationships {
    #[serde(rename = "agent-pool")]
    pub agent_pool: Option<RelationshipData>,
}

/// Generic relationship data
#[derive(Deserialize, Debug, Clone)]
pub struct RelationshipData {
    pub data: Option<RelationshipId>,
}

/// Relationship ID reference
#[derive(Deserialize, Debug, Clone)]
pub struct RelationshipId {
    pub id: String,
    #[serde(rename = "type")]
    pub rel_type: Option<String>,
}

impl Workspace {
    /// Workspace name
    pub fn name(&self) -> &str {
        &self.attributes.name
    }

    /// Get description, defaulting to empty string
    pub fn description(&self) -> &str {
        self.attributes.description.as_deref().unwrap_or("")
    }

    /// Get auto-apply flag, defaulting to false
    pub fn auto_apply(&self) -> bool {
        self.attributes.auto_apply.unwrap_or(false)
    }

    /// Get terraform version, defaulting to "unknown" if not available
    pub fn terraform_version(&self) -> &str {
        self.attributes
            .terraform_version
            .as_deref()
            .unwrap_or("unknown")
    }

    /// Get working directory, defaulting to empty string
    pub fn working_directory(&self) -> &str {
        self.attributes.working_directory.as_deref().unwrap_or("")
    }

    /// Get execution mode, defaulting to "remote" if not available
    pub fn execution_mode(&self) -> &str {
        self.attributes.execution_mode.as_deref().unwrap_or("remote")
    }

    /// Agent pool ID from relationships, if any
    pub fn agent_pool_id(&self) -> Option<&str> {
        self.relationships
            .as_ref()
            .and_then(|r| r.agent_pool.as_ref())
            .and_then(|p| p.data.as_ref())
            .map(|d| d.id.as_str())
    }
}

/// Attributes for creating a workspace
///
/// Serialized into the JSON:API creation payload. Optional fields are
/// omitted so the service applies its own defaults.
#[derive(Serialize, Debug, Clone, Default)]
pub struct WorkspaceCreateAttributes {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(rename = "auto-apply", skip_serializing_if = "Option::is_none")]
    pub auto_apply: Option<bool>,

    #[serde(rename = "terraform-version", skip_serializing_if = "Option::is_none")]
    pub terraform_version: Option<String>,

    #[serde(rename = "working-directory", skip_serializing_if = "Option::is_none")]
    pub working_directory: Option<String>,

    #[serde(rename = "execution-mode", skip_serializing_if = "Option::is_none")]
    pub execution_mode: Option<String>,

    #[serde(rename = "agent-pool-id", skip_serializing_if = "Option::is_none")]
    pub agent_pool_id: Option<String>,
}

impl WorkspaceCreateAttributes {
    /// Build a creation request copying the relevant attributes of an
    /// existing workspace under a new name.
    ///
    /// The agent pool reference is propagated only for `agent` execution
    /// mode; whether an agent-mode workspace without a pool is valid is the
    /// service's call, not validated here.
    pub fn copying(source: &Workspace, dest_name: &str) -> Self {
        let agent_pool_id = if source.execution_mode() == "agent" {
            source.agent_pool_id().map(|id| id.to_string())
        } else {
            None
        };

        Self {
            name: dest_name.to_string(),
            description: Some(source.description().to_string()),
            auto_apply: Some(source.auto_apply()),
            terraform_version: Some(source.terraform_version().to_string()),
            working_directory: Some(source.working_directory().to_string()),
            execution_mode: Some(source.execution_mode().to_string()),
            agent_pool_id,
        }
    }

    /// Wrap into the JSON:API request envelope
    pub fn into_payload(self) -> serde_json::Value {
        serde_json::json!({
            "data": {
                "type": "workspaces",
                "attributes": self
            }
        })
    }
}

/// Agent pool data from TFE API
#[derive(Deserialize, Debug, Clone)]
pub struct AgentPool {
    pub id: String,
    pub attributes: AgentPoolAttributes,
}

/// Agent pool attributes
#[derive(Deserialize, Debug, Clone)]
pub struct AgentPoolAttributes {
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_workspace(name: &str, execution_mode: &str) -> Workspace {
        Workspace {
            id: format!("ws-{}", name),
            attributes: WorkspaceAttributes {
                name: name.to_string(),
                description: Some("test workspace".to_string()),
                auto_apply: Some(true),
                terraform_version: Some("1.7.0".to_string()),
                working_directory: Some("infra/".to_string()),
                execution_mode: Some(execution_mode.to_string()),
                created_at: Some("2024-12-01T17:00:58.518Z".to_string()),
                updated_at: Some("2024-12-02T09:30:00.000Z".to_string()),
            },
            relationships: None,
        }
    }

    #[test]
    fn test_workspace_name() {
        let ws = create_test_workspace("my-workspace", "remote");
        assert_eq!(ws.name(), "my-workspace");
    }

    #[test]
    fn test_workspace_attribute_defaults() {
        let ws = Workspace {
            id: "ws-123".to_string(),
            attributes: WorkspaceAttributes {
                name: "bare".to_string(),
                description: None,
                auto_apply: None,
                terraform_version: None,
                working_directory: None,
                execution_mode: None,
                created_at: None,
                updated_at: None,
            },
            relationships: None,
        };
        assert_eq!(ws.description(), "");
        assert!(!ws.auto_apply());
        assert_eq!(ws.terraform_version(), "unknown");
        assert_eq!(ws.working_directory(), "");
        assert_eq!(ws.execution_mode(), "remote");
        assert_eq!(ws.agent_pool_id(), None);
    }

    #[test]
    fn test_workspace_agent_pool_id() {
        let mut ws = create_test_workspace("agent-ws", "agent");
        ws.relationships = Some(WorkspaceRelationships {
            agent_pool: Some(RelationshipData {
                data: Some(RelationshipId {
                    id: "apool-456".to_string(),
                    rel_type: Some("agent-pools".to_string()),
                }),
            }),
        });
        assert_eq!(ws.agent_pool_id(), Some("apool-456"));
    }

    #[test]
    fn test_create_attributes_copying() {
        let ws = create_test_workspace("prod", "remote");
        let attrs = WorkspaceCreateAttributes::copying(&ws, "prod-copy");

        assert_eq!(attrs.name, "prod-copy");
        assert_eq!(attrs.description.as_deref(), Some("test workspace"));
        assert_eq!(attrs.auto_apply, Some(true));
        assert_eq!(attrs.terraform_version.as_deref(), Some("1.7.0"));
        assert_eq!(attrs.working_directory.as_deref(), Some("infra/"));
        assert_eq!(attrs.execution_mode.as_deref(), Some("remote"));
        assert!(attrs.agent_pool_id.is_none());
    }

    #[test]
    fn test_create_attributes_copying_propagates_agent_pool() {
        let mut ws = create_test_workspace("agent-ws", "agent");
        ws.relationships = Some(WorkspaceRelationships {
            agent_pool: Some(RelationshipData {
                data: Some(RelationshipId {
                    id: "apool-789".to_string(),
                    rel_type: None,
                }),
            }),
        });

        let attrs = WorkspaceCreateAttributes::copying(&ws, "agent-copy");
        assert_eq!(attrs.agent_pool_id.as_deref(), Some("apool-789"));
    }

    #[test]
    fn test_create_attributes_agent_mode_without_pool() {
        // Agent mode with no pool relationship: the reference is simply
        // omitted and the service decides whether that is valid.
        let ws = create_test_workspace("agent-ws", "agent");
        let attrs = WorkspaceCreateAttributes::copying(&ws, "agent-copy");
        assert!(attrs.agent_pool_id.is_none());
    }

    #[test]
    fn test_create_attributes_payload_shape() {
        let ws = create_test_workspace("prod", "remote");
        let payload = WorkspaceCreateAttributes::copying(&ws, "prod-copy").into_payload();

        assert_eq!(payload["data"]["type"], "workspaces");
        assert_eq!(payload["data"]["attributes"]["name"], "prod-copy");
        assert_eq!(payload["data"]["attributes"]["auto-apply"], true);
        assert_eq!(
            payload["data"]["attributes"]["terraform-version"],
            "1.7.0"
        );
        // Omitted when not agent mode
        assert!(payload["data"]["attributes"]
            .get("agent-pool-id")
            .is_none());
    }

    #[test]
    fn test_workspace_deserialization() {
        let json = r#"{
            "id": "ws-abc123",
            "attributes": {
                "name": "my-workspace",
                "description": "production stack",
                "auto-apply": false,
                "terraform-version": "1.6.0",
                "working-directory": "",
                "execution-mode": "agent",
                "created-at": "2024-01-01T00:00:00Z",
                "updated-at": "2024-06-01T12:00:00Z"
            },
            "relationships": {
                "agent-pool": {
                    "data": {
                        "id": "apool-xyz",
                        "type": "agent-pools"
                    }
                }
            }
        }"#;

        let ws: Workspace = serde_json::from_str(json).unwrap();
        assert_eq!(ws.id, "ws-abc123");
        assert_eq!(ws.name(), "my-workspace");
        assert_eq!(ws.execution_mode(), "agent");
        assert_eq!(ws.agent_pool_id(), Some("apool-xyz"));
    }

    #[test]
    fn test_agent_pool_deserialization() {
        let json = r#"{
            "id": "apool-123",
            "attributes": {
                "name": "linux-agents"
            }
        }"#;

        let pool: AgentPool = serde_json::from_str(json).unwrap();
        assert_eq!(pool.id, "apool-123");
        assert_eq!(pool.attributes.name, "linux-agents");
    }
}
