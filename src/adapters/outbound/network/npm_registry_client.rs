use crate::ports::outbound::PackageRegistry;
use crate::shared::{AuditError, Result};
use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;

/// Abbreviated packument; only the dist-tags are needed
#[derive(Debug, Deserialize)]
struct NpmPackument {
    #[serde(rename = "dist-tags", default)]
    dist_tags: HashMap<String, String>,
}

/// NpmRegistryClient adapter for the public npm registry
///
/// Implements the PackageRegistry port against `registry.npmjs.org`,
/// requesting the abbreviated metadata document to keep responses small.
pub struct NpmRegistryClient {
    client: reqwest::Client,
    base_url: String,
    max_retries: u32,
}

impl NpmRegistryClient {
    const REGISTRY_URL: &'static str = "https://registry.npmjs.org";
    const ABBREVIATED_METADATA: &'static str = "application/vnd.npm.install-v1+json";
    const TIMEOUT_SECONDS: u64 = 10;

    pub fn new() -> Result<Self> {
        let user_agent = format!("node-flag-audit/{}", env!("CARGO_PKG_VERSION"));
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(Self::TIMEOUT_SECONDS))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url: Self::REGISTRY_URL.to_string(),
            max_retries: 3,
        })
    }

    /// Builds the registry URL for a package, keeping the scope marker
    /// readable (`@scope%2Fname`).
    fn package_url(&self, package_name: &str) -> Result<String> {
        validate_package_name(package_name)?;

        let path = match package_name.strip_prefix('@') {
            Some(scoped) => format!("@{}", urlencoding::encode(scoped)),
            None => urlencoding::encode(package_name).into_owned(),
        };
        Ok(format!("{}/{}", self.base_url, path))
    }

    async fn fetch_with_retry(&self, package_name: &str) -> Result<NpmPackument> {
        let mut last_error = None;

        for attempt in 1..=self.max_retries {
            match self.fetch_packument(package_name).await {
                Ok(packument) => return Ok(packument),
                Err(e) => {
                    tracing::debug!(
                        package = package_name,
                        attempt,
                        error = %e,
                        "npm registry request failed"
                    );
                    last_error = Some(e);
                    if attempt < self.max_retries {
                        tokio::time::sleep(Duration::from_millis(100 * attempt as u64)).await;
                    }
                }
            }
        }

        Err(last_error.unwrap_or_else(|| anyhow::anyhow!("No request was attempted")))
    }

    async fn fetch_packument(&self, package_name: &str) -> Result<NpmPackument> {
        let url = self.package_url(package_name)?;
        let response = self
            .client
            .get(&url)
            .header(reqwest::header::ACCEPT, Self::ABBREVIATED_METADATA)
            .send()
            .await?;

        if !response.status().is_success() {
            anyhow::bail!("npm registry returned status code {}", response.status());
        }

        Ok(response.json().await?)
    }
}

/// Rejects names that could escape the registry path
fn validate_package_name(package_name: &str) -> Result<()> {
    let invalid = |message: String| -> anyhow::Error { AuditError::Validation { message }.into() };

    if package_name.is_empty() || package_name.len() > 214 {
        return Err(invalid(format!(
            "Invalid npm package name length: {:?}",
            package_name
        )));
    }

    if package_name.contains("..")
        || package_name.contains('\\')
        || package_name.chars().any(|c| c.is_whitespace() || c == '#' || c == '?')
    {
        return Err(invalid(format!(
            "package name {:?} contains characters that are not allowed",
            package_name
        )));
    }

    let slashes = package_name.matches('/').count();
    let scoped = package_name.starts_with('@');
    if (scoped && slashes != 1) || (!scoped && slashes != 0) {
        return Err(invalid(format!(
            "package name {:?} contains path separators which are not allowed",
            package_name
        )));
    }

    Ok(())
}

#[async_trait]
impl PackageRegistry for NpmRegistryClient {
    async fn latest_version(&self, package_name: &str) -> Result<String> {
        let packument = self.fetch_with_retry(package_name).await?;

        packument
            .dist_tags
            .get("latest")
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("No 'latest' dist-tag for {}", package_name))
    }
}
