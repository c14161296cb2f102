//! Registry module API operations

use crate::config::api;
use crate::error::{Result, TfeError};
use crate::tfe::traits::ApiListResponse;
use crate::tfe::TfeClient;

use super::models::{RegistryModule, RegistryModuleVersion};

impl TfeClient {
    /// List all registry modules in an organization (paginated)
    pub async fn get_registry_modules(&self, org: &str) -> Result<Vec<RegistryModule>> {
        let path = format!("/{}/{}/{}", api::ORGANIZATIONS, org, api::REGISTRY_MODULES);
        let context = format!("registry modules for organization '{}'", org);
        self.fetch_all_pages::<RegistryModule, ApiListResponse<RegistryModule>>(&path, &context)
            .await
    }

    /// Read a single registry module, returning the typed module and the raw
    /// API document
    pub async fn get_registry_module(
        &self,
        org: &str,
        module: &RegistryModule,
    ) -> Result<(RegistryModule, serde_json::Value)> {
        let path = module.api_path(org);
        let label = format!("module '{}'", module.name());
        self.fetch_resource_by_path(&path, &label)
            .await?
            .ok_or_else(|| TfeError::NotFound {
                resource: "Module",
                name: module.name().to_string(),
            })
    }

    /// Read a single version of a registry module
    pub async fn get_module_version(
        &self,
        org: &str,
        module: &RegistryModule,
        version: &str,
    ) -> Result<RegistryModuleVersion> {
        let path = format!("{}/versions/{}", module.api_path(org), version);
        let label = format!("module version '{}/{}'", module.name(), version);
        match self
            .fetch_resource_by_path::<RegistryModuleVersion>(&path, &label)
            .await?
        {
            Some((module_version, _raw)) => Ok(module_version),
            None => Err(TfeError::NotFound {
                resource: "Module version",
                name: format!("{}/{}", module.name(), version),
            }),
        }
    }
}
