//! API token resolution

use log::debug;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::credentials;
use crate::error::{Result, TfeError};

/// On-disk layout of the Terraform CLI credentials file: a map from host
/// name to a `{ "token": ... }` entry
#[derive(Deserialize, Debug)]
struct CredentialsFile {
    credentials: HashMap<String, HostCredential>,
}

#[derive(Deserialize, Debug)]
struct HostCredential {
    token: String,
}

impl CredentialsFile {
    fn parse(content: &str, source: &Path) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| {
            TfeError::Credentials(format!(
                "Could not parse credentials file {}: {}",
                source.display(),
                e
            ))
        })
    }

    fn token_for(&self, host: &str) -> Option<&str> {
        self.credentials.get(host).map(|entry| entry.token.as_str())
    }
}

/// Resolves the API token for a host.
///
/// Sources, in order: the `--token` flag, the `TF_TOKEN` environment
/// variable, the Terraform CLI credentials file entry for the host.
pub struct TokenResolver {
    host: String,
}

impl TokenResolver {
    pub fn new(host: &str) -> Self {
        Self {
            host: host.to_string(),
        }
    }

    pub fn resolve(&self, cli_token: Option<&str>) -> Result<String> {
        if let Some(token) = cli_token {
            debug!("Using token from --token flag");
            return Ok(token.to_string());
        }

        if let Ok(token) = std::env::var(credentials::TOKEN_ENV_VAR) {
            debug!("Using token from {}", credentials::TOKEN_ENV_VAR);
            return Ok(token);
        }

        self.token_from_file()
    }

    fn token_from_file(&self) -> Result<String> {
        let path = credentials_file_path().ok_or_else(|| self.not_found(None))?;
        debug!("Reading credentials file {}", path.display());

        let content = fs::read_to_string(&path).map_err(|_| self.not_found(Some(&path)))?;
        let parsed = CredentialsFile::parse(&content, &path)?;

        match parsed.token_for(&self.host) {
            Some(token) => {
                debug!(
                    "Using token from {} for host '{}'",
                    path.display(),
                    self.host
                );
                Ok(token.to_string())
            }
            None => Err(self.not_found(Some(&path))),
        }
    }

    fn not_found(&self, checked_file: Option<&Path>) -> TfeError {
        let mut message = format!(
            "No API token available for host '{}'. Provide one with --token, \
             set {}, or run `terraform login {}`.",
            self.host,
            credentials::TOKEN_ENV_VAR,
            self.host
        );
        if let Some(path) = checked_file {
            message.push_str(&format!("\nChecked credentials file: {}", path.display()));
        }
        TfeError::TokenNotFound(message)
    }
}

/// Platform-specific location of the Terraform CLI credentials file:
/// `%APPDATA%\terraform.d\...` on Windows, `~/.terraform.d/...` elsewhere
fn credentials_file_path() -> Option<PathBuf> {
    #[cfg(windows)]
    {
        dirs::config_dir().map(|dir| dir.join(credentials::FILE_NAME))
    }

    #[cfg(not(windows))]
    {
        dirs::home_dir().map(|dir| dir.join(credentials::FILE_PATH_UNIX))
    }
}
