//! Workspace variable API operations

use crate::config::api;
use crate::error::Result;
use crate::tfe::traits::ApiListResponse;
use crate::tfe::TfeClient;

use super::models::{Variable, VariableCreateAttributes};

impl TfeClient {
    /// List all variables on a workspace (paginated)
    pub async fn get_variables(&self, workspace_id: &str) -> Result<Vec<Variable>> {
        let path = format!("/{}/{}/{}", api::WORKSPACES, workspace_id, api::VARIABLES);
        let context = format!("variables for workspace '{}'", workspace_id);
        self.fetch_all_pages::<Variable, ApiListResponse<Variable>>(&path, &context)
            .await
    }

    /// Create a variable on a workspace
    pub async fn create_variable(
        &self,
        workspace_id: &str,
        attributes: VariableCreateAttributes,
    ) -> Result<Variable> {
        let path = format!("/{}/{}/{}", api::WORKSPACES, workspace_id, api::VARIABLES);
        let key = attributes.key.clone();
        let payload = attributes.into_payload();
        self.create_resource(&path, &payload, "Variable", &key).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TfeError;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn var_json(key: &str, value: &str, category: &str) -> serde_json::Value {
        serde_json::json!({
            "id": format!("var-{}", key),
            "attributes": {
                "key": key,
                "value": value,
                "category": category,
                "hcl": false,
                "sensitive": false
            }
        })
    }

    #[tokio::test]
    async fn test_get_variables() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());

        let body = serde_json::json!({
            "data": [
                var_json("ENV_KEY", "one", "env"),
                var_json("region", "eu-west-1", "terraform")
            ]
        });

        Mock::given(method("GET"))
            .and(path("/workspaces/ws-prod/vars"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&body))
            .mount(&mock_server)
            .await;

        let vars = client.get_variables("ws-prod").await.unwrap();
        assert_eq!(vars.len(), 2);
        assert_eq!(vars[0].key(), "ENV_KEY");
        assert_eq!(vars[1].category(), "terraform");
    }

    #[tokio::test]
    async fn test_create_variable() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());

        Mock::given(method("POST"))
            .and(path("/workspaces/ws-copy/vars"))
            .and(body_partial_json(serde_json::json!({
                "data": {
                    "type": "vars",
                    "attributes": { "key": "ENV_KEY", "value": "one" }
                }
            })))
            .respond_with(
                ResponseTemplate::new(201)
                    .set_body_json(serde_json::json!({ "data": var_json("ENV_KEY", "one", "env") })),
            )
            .mount(&mock_server)
            .await;

        let attrs = VariableCreateAttributes {
            key: "ENV_KEY".to_string(),
            value: "one".to_string(),
            category: "env".to_string(),
            hcl: false,
            sensitive: false,
        };
        let var = client.create_variable("ws-copy", attrs).await.unwrap();
        assert_eq!(var.key(), "ENV_KEY");
    }

    #[tokio::test]
    async fn test_create_variable_failure_names_the_key() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());

        Mock::given(method("POST"))
            .and(path("/workspaces/ws-copy/vars"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let attrs = VariableCreateAttributes {
            key: "BROKEN".to_string(),
            value: String::new(),
            category: "env".to_string(),
            hcl: false,
            sensitive: false,
        };
        let err = client.create_variable("ws-copy", attrs).await.unwrap_err();
        match err {
            TfeError::Api { status, message } => {
                assert_eq!(status, 500);
                assert!(message.contains("BROKEN"));
            }
            _ => panic!("Expected TfeError::Api"),
        }
    }
}
