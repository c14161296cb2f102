//! Organization API operations

use crate::config::api;
use crate::error::Result;
use crate::tfe::traits::ApiListResponse;
use crate::tfe::TfeClient;

use super::models::Organization;

impl TfeClient {
    /// Get all organizations accessible to the token (paginated)
    pub async fn get_organizations(&self) -> Result<Vec<Organization>> {
        let path = format!("/{}", api::ORGANIZATIONS);
        self.fetch_all_pages::<Organization, ApiListResponse<Organization>>(&path, "organizations")
            .await
    }
}
