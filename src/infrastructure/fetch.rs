//! Downloading remote files

use crate::error::{BlogsyncError, Result};
use std::fs;
use std::path::Path;
use std::time::Duration;
use tracing::info;

/// Downloads a URL into a local file
pub trait Fetcher {
    fn download(&mut self, url: &str, dest: &Path) -> Result<()>;
}

/// Blocking HTTP client
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("blogsync/", env!("CARGO_PKG_VERSION")))
            // no request timeout
            .timeout(None::<Duration>)
            .build()
            .map_err(|e| BlogsyncError::Fetch(format!("Failed to build HTTP client: {}", e)))?;
        Ok(HttpFetcher { client })
    }
}

impl Fetcher for HttpFetcher {
    fn download(&mut self, url: &str, dest: &Path) -> Result<()> {
        info!("Downloading {} -> {}", url, dest.display());

        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| BlogsyncError::Fetch(format!("{}: {}", url, e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(BlogsyncError::Fetch(format!("{}: HTTP {}", url, status)));
        }

        let body = response
            .bytes()
            .map_err(|e| BlogsyncError::Fetch(format!("{}: {}", url, e)))?;
        fs::write(dest, &body)?;
        Ok(())
    }
}
