//! Organization data models

use serde::Deserialize;

/// Organization data from TFE API
///
/// The API uses the organization name as the `id` field; the actual
/// service-side identifier lives in the `external-id` attribute.
#[derive(Deserialize, Debug, Clone)]
pub struct Organization {
    pub id: String,
    #[serde(rename = "type")]
    pub org_type: Option<String>,
    pub attributes: Option<OrganizationAttributes>,
}

/// Organization attributes from TFE API
#[derive(Deserialize, Debug, Clone)]
pub struct OrganizationAttributes {
    pub name: Option<String>,
    pub email: Option<String>,
    #[serde(rename = "external-id")]
    pub external_id: Option<String>,
    #[serde(rename = "created-at")]
    pub created_at: Option<String>,
}

impl Organization {
    /// Organization name (same as the API id field)
    pub fn name(&self) -> &str {
        &self.id
    }

    /// Get email from attributes
    pub fn email(&self) -> &str {
        self.attributes
            .as_ref()
            .and_then(|a| a.email.as_deref())
            .unwrap_or("")
    }

    /// Get external ID from attributes
    pub fn external_id(&self) -> &str {
        self.attributes
            .as_ref()
            .and_then(|a| a.external_id.as_deref())
            .unwrap_or("")
    }

    /// Get created_at from attributes
    pub fn created_at(&self) -> &str {
        self.attributes
            .as_ref()
            .and_then(|a| a.created_at.as_deref())
            .unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_org() -> Organization {
        Organization {
            id: "my-org".to_string(),
            org_type: Some("organizations".to_string()),
            attributes: Some(OrganizationAttributes {
                name: Some("my-org".to_string()),
                email: Some("test@example.com".to_string()),
                external_id: Some("org-123".to_string()),
                created_at: Some("2025-01-01T00:00:00Z".to_string()),
            }),
        }
    }

    #[test]
    fn test_organization_name() {
        let org = create_test_org();
        assert_eq!(org.name(), "my-org");
    }

    #[test]
    fn test_organization_email() {
        let org = create_test_org();
        assert_eq!(org.email(), "test@example.com");
    }

    #[test]
    fn test_organization_external_id() {
        let org = create_test_org();
        assert_eq!(org.external_id(), "org-123");
    }

    #[test]
    fn test_organization_defaults() {
        let org = Organization {
            id: "my-org".to_string(),
            org_type: None,
            attributes: None,
        };
        assert_eq!(org.email(), "");
        assert_eq!(org.external_id(), "");
        assert_eq!(org.created_at(), "");
    }

    #[test]
    fn test_organization_deserialization() {
        let json = r#"{
            "id": "my-org",
            "type": "organizations",
            "attributes": {
                "name": "my-org",
                "email": "admin@example.com",
                "external-id": "org-ABC123",
                "created-at": "2025-01-01T00:00:00Z"
            }
        }"#;

        let org: Organization = serde_json::from_str(json).unwrap();
        assert_eq!(org.id, "my-org");
        assert_eq!(org.email(), "admin@example.com");
        assert_eq!(org.external_id(), "org-ABC123");
    }

    #[test]
    fn test_organization_deserialization_minimal() {
        let json = r#"{"id": "minimal-org"}"#;

        let org: Organization = serde_json::from_str(json).unwrap();
        assert_eq!(org.id, "minimal-org");
        assert_eq!(org.email(), "");
        assert!(org.org_type.is_none());
    }
}
