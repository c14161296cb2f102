//! Registry module output formatters

use serde::Serialize;

use crate::cli::OutputFormat;
use crate::error::Result;
use crate::tfe::modules::{RegistryModule, RegistryModuleVersion, VersionStatus};

use super::common::{format_optional_timestamp, print_json, print_yaml};

/// One module version flattened for list output
#[derive(Serialize, Debug)]
pub struct ModuleVersionRow {
    pub address: String,
    pub version: String,
    pub status: String,
    pub updated_at: String,
}

impl ModuleVersionRow {
    pub fn new(
        address: String,
        status: &VersionStatus,
        detail: &RegistryModuleVersion,
    ) -> Result<Self> {
        let updated_at = detail
            .attributes
            .updated_at
            .as_deref()
            .or(detail.attributes.created_at.as_deref());
        Ok(Self {
            address,
            version: status.version.clone(),
            status: status.status.clone(),
            updated_at: format_optional_timestamp(updated_at)?,
        })
    }
}

/// Output module version rows in the specified format
pub fn output_module_rows(rows: &[ModuleVersionRow], format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for row in rows {
                println!(
                    "{:<60} {:<12} {:<16} {}",
                    row.address, row.version, row.status, row.updated_at
                );
            }
            Ok(())
        }
        OutputFormat::Json => print_json(&rows),
        OutputFormat::Yaml => print_yaml(&rows),
    }
}

/// Print a labeled key/value block for a single module, followed by a row
/// per version with its timestamps
pub fn print_module_detail(
    module: &RegistryModule,
    host: &str,
    versions: &[RegistryModuleVersion],
) -> Result<()> {
    println!("Name:        {}", module.name());
    println!("Address:     {}", module.address(host));
    println!("Namespace:   {}", module.namespace());
    println!("Provider:    {}", module.provider());
    println!("Registry:    {}", module.registry_name());
    println!(
        "Status:      {}",
        module.attributes.status.as_deref().unwrap_or("")
    );
    println!(
        "Created at:  {}",
        format_optional_timestamp(module.attributes.created_at.as_deref())?
    );
    println!(
        "Updated at:  {}",
        format_optional_timestamp(module.attributes.updated_at.as_deref())?
    );
    if let Some(url) = module
        .attributes
        .vcs_repo
        .as_ref()
        .and_then(|repo| repo.repository_http_url.as_deref())
    {
        println!("VCS repo:    {}", url);
    }

    println!("Versions ({}):", versions.len());
    for version in versions {
        println!(
            "  {:<24} {:<12} created {}  updated {}",
            version.id,
            version.attributes.version,
            format_optional_timestamp(version.attributes.created_at.as_deref())?,
            format_optional_timestamp(version.attributes.updated_at.as_deref())?
        );
    }

    Ok(())
}
