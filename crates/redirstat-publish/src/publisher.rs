use crate::{Error, Result};
use reqwest::{header::CONTENT_TYPE, Client, StatusCode};
use std::path::Path;

/// Credentials and endpoint for the statistics-consuming API.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub url: String,
    pub user: String,
    pub password: String,
}

/// Raw response from the remote endpoint, reported to the operator as-is.
/// An HTTP error status is not a local fault.
#[derive(Debug)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: String,
}

pub struct Publisher {
    client: Client,
    config: ApiConfig,
}

impl Publisher {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Persist the document to the local artifact path, overwriting any
    /// prior content.
    pub fn write_local(&self, path: &Path, xml: &str) -> Result<()> {
        std::fs::write(path, xml).map_err(|source| Error::LocalWrite {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::info!("Wrote {} bytes to {}", xml.len(), path.display());
        Ok(())
    }

    /// PUT the document to the configured URL with basic-auth
    /// credentials. Returns the response whatever its status; only a
    /// network-level failure is an error.
    pub async fn upload(&self, xml: &str) -> Result<ApiResponse> {
        tracing::info!("Uploading statistics to {}", self.config.url);

        let response = self
            .client
            .put(&self.config.url)
            .basic_auth(&self.config.user, Some(&self.config.password))
            .header(CONTENT_TYPE, "application/xml")
            .body(xml.to_string())
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        Ok(ApiResponse { status, body })
    }
}
