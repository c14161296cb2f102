//! TFE HTTP client for API interactions

use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::config::api;
use crate::error::{Result, TfeError};
use crate::tfe::traits::PaginatedResponse;

/// TFE API client
pub struct TfeClient {
    client: Client,
    token: String,
    host: String,
    /// Custom base URL override (for testing with mock servers)
    base_url_override: Option<String>,
}

impl TfeClient {
    /// Create a new TFE client with connection reuse settings
    pub fn new(token: String, host: String) -> Self {
        let client = Client::builder()
            .pool_max_idle_per_host(20)
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_keepalive(Duration::from_secs(60))
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            token,
            host,
            base_url_override: None,
        }
    }

    /// Create a client with custom base URL (for testing with mock servers)
    #[cfg(test)]
    pub fn with_base_url(token: String, host: String, base_url: String) -> Self {
        let client = Client::builder().build().unwrap_or_else(|_| Client::new());

        Self {
            client,
            token,
            host,
            base_url_override: Some(base_url),
        }
    }

    /// Build the base URL for API requests
    pub(crate) fn base_url(&self) -> String {
        if let Some(ref url) = self.base_url_override {
            return url.clone();
        }
        format!(
            "https://{}/{}",
            self.host,
            api::BASE_PATH.trim_start_matches('/')
        )
    }

    /// Get the host for building URLs
    pub(crate) fn host(&self) -> &str {
        &self.host
    }

    /// Add standard headers to a request builder
    fn with_headers(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Content-Type", "application/vnd.api+json")
    }

    /// Create a GET request builder with standard headers
    pub(crate) fn get(&self, url: &str) -> reqwest::RequestBuilder {
        self.with_headers(self.client.get(url))
    }

    /// Create a POST request builder with standard headers
    pub(crate) fn post(&self, url: &str) -> reqwest::RequestBuilder {
        self.with_headers(self.client.post(url))
    }

    /// Parse an API response, returning error for non-success status codes
    ///
    /// Simplifies the common pattern of checking status and parsing JSON.
    pub(crate) async fn parse_api_response<T>(
        &self,
        response: reqwest::Response,
        error_context: &str,
    ) -> Result<T>
    where
        T: DeserializeOwned,
    {
        if !response.status().is_success() {
            return Err(TfeError::Api {
                status: response.status().as_u16(),
                message: format!("Failed to fetch {}", error_context),
            });
        }
        Ok(response.json().await?)
    }

    /// Fetch all pages from a paginated API endpoint
    ///
    /// Pages are requested one at a time, following the `next-page` cursor
    /// until the service reports none (absent or 0). Items accumulate in
    /// arrival order. Any page error aborts the whole listing; no partial
    /// result is returned and no retry is attempted here.
    ///
    /// # Arguments
    /// * `path` - API path (e.g., "/organizations/my-org/workspaces")
    /// * `error_context` - Context for error messages (e.g., "workspaces for organization 'my-org'")
    ///
    /// # Type Parameters
    /// * `T` - The item type (e.g., Workspace, Variable)
    /// * `R` - The response type that implements PaginatedResponse<T>
    pub async fn fetch_all_pages<T, R>(&self, path: &str, error_context: &str) -> Result<Vec<T>>
    where
        R: DeserializeOwned + PaginatedResponse<T>,
    {
        // Detect if path already has query params
        let separator = if path.contains('?') { "&" } else { "?" };

        let mut all_items: Vec<T> = Vec::new();
        let mut page: u32 = 1;

        loop {
            let url = format!(
                "{}{}{}page[size]={}&page[number]={}",
                self.base_url(),
                path,
                separator,
                api::DEFAULT_PAGE_SIZE,
                page
            );

            debug!("Fetching page {} from: {}", page, url);

            let response = self.get(&url).send().await?;

            let page_context = format!("{} (page {})", error_context, page);
            let resp: R = self.parse_api_response(response, &page_context).await?;

            let next_page = resp
                .meta()
                .and_then(|m| m.pagination.as_ref())
                .and_then(|p| p.next_page);

            let items = resp.into_data();
            debug!("Page {} returned {} items", page, items.len());
            all_items.extend(items);

            match next_page {
                Some(next) if next > 0 => page = next,
                _ => break,
            }
        }

        debug!(
            "Fetched {} total items for {}",
            all_items.len(),
            error_context
        );
        Ok(all_items)
    }

    /// Fetch a single resource by API path
    ///
    /// Generic helper that handles the common pattern of:
    /// - GET a resource by path
    /// - Parse JSON response into typed model + raw JSON
    /// - Return None for 404
    /// - Return error for other non-success status codes
    ///
    /// # Arguments
    /// * `path` - API path (e.g., "/organizations/my-org/workspaces/prod")
    /// * `resource_label` - Human-readable label for error messages (e.g., "workspace 'prod'")
    pub async fn fetch_resource_by_path<T>(
        &self,
        path: &str,
        resource_label: &str,
    ) -> Result<Option<(T, serde_json::Value)>>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url(), path);
        debug!("Fetching {} from: {}", resource_label, url);

        let response = self.get(&url).send().await?;

        match response.status().as_u16() {
            200 => {
                let raw: serde_json::Value = response.json().await?;
                let item: T =
                    serde_json::from_value(raw["data"].clone()).map_err(|e| TfeError::Api {
                        status: 200,
                        message: format!("Failed to parse {}: {}", resource_label, e),
                    })?;
                Ok(Some((item, raw)))
            }
            404 => Ok(None),
            status => Err(TfeError::Api {
                status,
                message: format!("Failed to fetch {}", resource_label),
            }),
        }
    }

    /// Create a resource via POST, parsing the created object out of the
    /// response envelope
    ///
    /// A 422 from the service maps to `TfeError::Conflict` since name
    /// collisions are the only validation failure these commands can cause.
    pub async fn create_resource<T>(
        &self,
        path: &str,
        body: &serde_json::Value,
        resource: &'static str,
        name: &str,
    ) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url(), path);
        debug!("Creating {} '{}' at: {}", resource, name, url);

        let response = self.post(&url).json(body).send().await?;

        match response.status().as_u16() {
            200 | 201 => {
                let raw: serde_json::Value = response.json().await?;
                let item: T =
                    serde_json::from_value(raw["data"].clone()).map_err(|e| TfeError::Api {
                        status: 201,
                        message: format!("Failed to parse created {}: {}", resource, e),
                    })?;
                Ok(item)
            }
            422 => Err(TfeError::Conflict {
                resource,
                name: name.to_string(),
            }),
            status => Err(TfeError::Api {
                status,
                message: format!("Failed to create {} '{}'", resource, name),
            }),
        }
    }
}

#[cfg(test)]
impl TfeClient {
    /// Create a test client with mock base URL
    pub fn test_client(base_url: &str) -> Self {
        Self::with_base_url(
            "test-token".to_string(),
            "mock.terraform.io".to_string(),
            base_url.to_string(),
        )
    }
}
