//! Organization output formatter

use serde::Serialize;

use crate::cli::OutputFormat;
use crate::error::Result;
use crate::tfe::Organization;

use super::common::{print_json, print_yaml};

/// Serializable organization for structured output (JSON/YAML)
#[derive(Serialize)]
struct SerializableOrganization {
    name: String,
    external_id: String,
    email: String,
    created_at: String,
}

impl From<&Organization> for SerializableOrganization {
    fn from(org: &Organization) -> Self {
        Self {
            name: org.name().to_string(),
            external_id: org.external_id().to_string(),
            email: org.email().to_string(),
            created_at: org.created_at().to_string(),
        }
    }
}

/// Output organizations in the specified format: names one per line for
/// text, full summaries for JSON/YAML
pub fn output_organizations(orgs: &[Organization], format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for org in orgs {
                println!("{}", org.name());
            }
            Ok(())
        }
        OutputFormat::Json => {
            let data: Vec<SerializableOrganization> = orgs.iter().map(|o| o.into()).collect();
            print_json(&data)
        }
        OutputFormat::Yaml => {
            let data: Vec<SerializableOrganization> = orgs.iter().map(|o| o.into()).collect();
            print_yaml(&data)
        }
    }
}
