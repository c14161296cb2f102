//! Registry module data models

use serde::Deserialize;

use crate::config::api;

/// Registry module from TFE API
///
/// Identified by the (namespace, name, provider) triple within an
/// organization.
#[derive(Deserialize, Debug, Clone)]
pub struct RegistryModule {
    pub id: String,
    pub attributes: RegistryModuleAttributes,
}

/// Registry module attributes from TFE API
#[derive(Deserialize, Debug, Clone)]
pub struct RegistryModuleAttributes {
    pub name: String,

    pub namespace: Option<String>,

    pub provider: Option<String>,

    #[serde(rename = "registry-name")]
    pub registry_name: Option<String>,

    pub status: Option<String>,

    #[serde(rename = "version-statuses", default)]
    pub version_statuses: Vec<VersionStatus>,

    #[serde(rename = "created-at")]
    pub created_at: Option<String>,

    #[serde(rename = "updated-at")]
    pub updated_at: Option<String>,

    #[serde(rename = "vcs-repo")]
    pub vcs_repo: Option<VcsRepo>,
}

/// One recorded version of a module, with its ingestion status
#[derive(Deserialize, Debug, Clone)]
pub struct VersionStatus {
    pub version: String,
    pub status: String,
    pub error: Option<String>,
}

/// VCS repository backing a module
#[derive(Deserialize, Debug, Clone)]
pub struct VcsRepo {
    #[serde(rename = "repository-http-url")]
    pub repository_http_url: Option<String>,
}

/// A single module version with its timestamps
#[derive(Deserialize, Debug, Clone)]
pub struct RegistryModuleVersion {
    pub id: String,
    pub attributes: RegistryModuleVersionAttributes,
}

/// Module version attributes
#[derive(Deserialize, Debug, Clone)]
pub struct RegistryModuleVersionAttributes {
    pub version: String,
    pub status: Option<String>,
    #[serde(rename = "created-at")]
    pub created_at: Option<String>,
    #[serde(rename = "updated-at")]
    pub updated_at: Option<String>,
}

impl RegistryModule {
    /// Module name
    pub fn name(&self) -> &str {
        &self.attributes.name
    }

    /// Provider, defaulting to empty string
    pub fn provider(&self) -> &str {
        self.attributes.provider.as_deref().unwrap_or("")
    }

    /// Registry name, defaulting to "private"
    pub fn registry_name(&self) -> &str {
        self.attributes.registry_name.as_deref().unwrap_or("private")
    }

    /// Namespace; private modules are namespaced by their organization
    pub fn namespace(&self) -> &str {
        self.attributes.namespace.as_deref().unwrap_or("")
    }

    /// Recorded versions
    pub fn version_statuses(&self) -> &[VersionStatus] {
        &self.attributes.version_statuses
    }

    /// Module source address as shown to terraform users:
    /// `{host}/{namespace}/{name}/{provider}`
    pub fn address(&self, host: &str) -> String {
        format!(
            "{}/{}/{}/{}",
            host,
            self.namespace(),
            self.name(),
            self.provider()
        )
    }

    /// API path for this module.
    ///
    /// Private modules are addressed by organization-as-namespace; public
    /// modules keep their own namespace.
    pub fn api_path(&self, org: &str) -> String {
        let namespace = if self.registry_name() == "private" {
            org
        } else {
            self.namespace()
        };
        format!(
            "/{}/{}/{}/{}/{}/{}/{}",
            api::ORGANIZATIONS,
            org,
            api::REGISTRY_MODULES,
            self.registry_name(),
            namespace,
            self.name(),
            self.provider()
        )
    }
}
