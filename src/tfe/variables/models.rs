//! Workspace variable data models

use serde::{Deserialize, Serialize};

/// Workspace variable from TFE API
#[derive(Deserialize, Debug, Clone)]
pub struct Variable {
    pub id: String,
    pub attributes: VariableAttributes,
}

/// Variable attributes from TFE API
///
/// Sensitive values are write-only on the service side: `value` comes back
/// empty for sensitive variables.
#[derive(Deserialize, Debug, Clone)]
pub struct VariableAttributes {
    pub key: String,
    pub value: Option<String>,
    pub category: String,
    pub hcl: Option<bool>,
    pub sensitive: Option<bool>,
}

impl Variable {
    pub fn key(&self) -> &str {
        &self.attributes.key
    }

    pub fn value(&self) -> &str {
        self.attributes.value.as_deref().unwrap_or("")
    }

    pub fn category(&self) -> &str {
        &self.attributes.category
    }

    pub fn is_hcl(&self) -> bool {
        self.attributes.hcl.unwrap_or(false)
    }

    pub fn is_sensitive(&self) -> bool {
        self.attributes.sensitive.unwrap_or(false)
    }
}

/// Attributes for creating a variable
#[derive(Serialize, Debug, Clone)]
pub struct VariableCreateAttributes {
    pub key: String,
    pub value: String,
    pub category: String,
    pub hcl: bool,
    pub sensitive: bool,
}

impl VariableCreateAttributes {
    /// Build a creation request replicating an existing variable.
    ///
    /// For sensitive variables the source value is already redacted to an
    /// empty string by the service, so the copy carries an empty value.
    pub fn copying(source: &Variable) -> Self {
        Self {
            key: source.key().to_string(),
            value: source.value().to_string(),
            category: source.category().to_string(),
            hcl: source.is_hcl(),
            sensitive: source.is_sensitive(),
        }
    }

    /// Wrap into the JSON:API request envelope
    pub fn into_payload(self) -> serde_json::Value {
        serde_json::json!({
            "data": {
                "type": "vars",
                "attributes": self
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env_var(key: &str, value: &str) -> Variable {
        Variable {
            id: format!("var-{}", key),
            attributes: VariableAttributes {
                key: key.to_string(),
                value: Some(value.to_string()),
                category: "env".to_string(),
                hcl: Some(false),
                sensitive: Some(false),
            },
        }
    }

    #[test]
    fn test_variable_accessors() {
        let var = env_var("ENV_KEY", "value-1");
        assert_eq!(var.key(), "ENV_KEY");
        assert_eq!(var.value(), "value-1");
        assert_eq!(var.category(), "env");
        assert!(!var.is_hcl());
        assert!(!var.is_sensitive());
    }

    #[test]
    fn test_sensitive_variable_value_is_empty() {
        let var = Variable {
            id: "var-secret".to_string(),
            attributes: VariableAttributes {
                key: "TF_VAR_x".to_string(),
                value: None,
                category: "terraform".to_string(),
                hcl: Some(false),
                sensitive: Some(true),
            },
        };
        assert!(var.is_sensitive());
        assert_eq!(var.value(), "");
    }

    #[test]
    fn test_create_attributes_copying() {
        let var = env_var("ENV_KEY", "value-1");
        let attrs = VariableCreateAttributes::copying(&var);
        assert_eq!(attrs.key, "ENV_KEY");
        assert_eq!(attrs.value, "value-1");
        assert_eq!(attrs.category, "env");
        assert!(!attrs.hcl);
        assert!(!attrs.sensitive);
    }

    #[test]
    fn test_create_attributes_copying_redacted_sensitive() {
        let var = Variable {
            id: "var-secret".to_string(),
            attributes: VariableAttributes {
                key: "TF_VAR_x".to_string(),
                value: None,
                category: "terraform".to_string(),
                hcl: None,
                sensitive: Some(true),
            },
        };
        let attrs = VariableCreateAttributes::copying(&var);
        assert_eq!(attrs.key, "TF_VAR_x");
        assert_eq!(attrs.value, "");
        assert!(attrs.sensitive);
    }

    #[test]
    fn test_create_attributes_payload_shape() {
        let var = env_var("ENV_KEY", "value-1");
        let payload = VariableCreateAttributes::copying(&var).into_payload();
        assert_eq!(payload["data"]["type"], "vars");
        assert_eq!(payload["data"]["attributes"]["key"], "ENV_KEY");
        assert_eq!(payload["data"]["attributes"]["category"], "env");
        assert_eq!(payload["data"]["attributes"]["sensitive"], false);
    }

    #[test]
    fn test_variable_deserialization() {
        let json = r#"{
            "id": "var-abc",
            "attributes": {
                "key": "region",
                "value": "eu-west-1",
                "category": "terraform",
                "hcl": false,
                "sensitive": false
            }
        }"#;

        let var: Variable = serde_json::from_str(json).unwrap();
        assert_eq!(var.key(), "region");
        assert_eq!(var.value(), "eu-west-1");
        assert_eq!(var.category(), "terraform");
    }
}
