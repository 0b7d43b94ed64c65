use crate::flag_audit::domain::Advisory;
use crate::ports::outbound::VulnerabilityRepository;
use crate::shared::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// OSV API client for npm advisories
///
/// Uses the single-package query endpoint, which returns full advisory
/// records (summary, severity, affected ranges) in one round trip.
///
/// # Security
/// - Implements timeout (30 seconds)
/// - Does not retry failed requests (fail fast; the failure is recorded per
///   dependency)
pub struct OsvClient {
    client: reqwest::Client,
    api_url: String,
}

impl OsvClient {
    const API_ENDPOINT: &'static str = "https://api.osv.dev/v1/query";
    const ECOSYSTEM: &'static str = "npm";
    const TIMEOUT_SECONDS: u64 = 30;

    pub fn new() -> Result<Self> {
        let user_agent = format!("node-flag-audit/{}", env!("CARGO_PKG_VERSION"));
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(Self::TIMEOUT_SECONDS))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            api_url: Self::API_ENDPOINT.to_string(),
        })
    }

    fn build_query(package_name: &str, version: &str) -> OsvQuery {
        OsvQuery {
            package: OsvPackage {
                name: package_name.to_string(),
                ecosystem: Self::ECOSYSTEM.to_string(),
            },
            version: version.to_string(),
        }
    }
}

impl OsvVulnerability {
    fn into_advisory(self) -> Advisory {
        let fixed_version = self.affected.iter().find_map(|affected| {
            affected
                .ranges
                .iter()
                .find_map(|range| range.events.iter().find_map(|e| e.fixed.clone()))
        });

        let severity = self
            .database_specific
            .and_then(|db| db.severity)
            .map(|s| normalize_severity(&s).to_string());

        Advisory {
            id: self.id,
            summary: self.summary,
            severity,
            fixed_version,
        }
    }
}

/// GitHub advisories say MODERATE where most tools say MEDIUM
fn normalize_severity(raw: &str) -> &'static str {
    match raw.to_uppercase().as_str() {
        "CRITICAL" => "CRITICAL",
        "HIGH" => "HIGH",
        "MODERATE" | "MEDIUM" => "MEDIUM",
        "LOW" => "LOW",
        _ => "UNKNOWN",
    }
}

#[async_trait]
impl VulnerabilityRepository for OsvClient {
    async fn advisories(&self, package_name: &str, version: &str) -> Result<Vec<Advisory>> {
        let query = Self::build_query(package_name, version);
        let response = self.client.post(&self.api_url).json(&query).send().await?;

        if !response.status().is_success() {
            anyhow::bail!("OSV API returned status code {}", response.status());
        }

        let body: OsvQueryResponse = response.json().await?;
        Ok(body
            .vulns
            .into_iter()
            .map(OsvVulnerability::into_advisory)
            .collect())
    }
}

// OSV API request/response structures

#[derive(Debug, Serialize)]
struct OsvQuery {
    package: OsvPackage,
    version: String,
}

#[derive(Debug, Serialize)]
struct OsvPackage {
    name: String,
    ecosystem: String,
}

#[derive(Debug, Deserialize)]
struct OsvQueryResponse {
    #[serde(default)]
    vulns: Vec<OsvVulnerability>,
}

#[derive(Debug, Deserialize)]
struct OsvVulnerability {
    id: String,
    #[serde(default)]
    summary: Option<String>,
    #[serde(default)]
    database_specific: Option<DatabaseSpecific>,
    #[serde(default)]
    affected: Vec<OsvAffected>,
}

#[derive(Debug, Deserialize)]
struct DatabaseSpecific {
    #[serde(default)]
    severity: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OsvAffected {
    #[serde(default)]
    ranges: Vec<OsvRange>,
}

#[derive(Debug, Deserialize)]
struct OsvRange {
    #[serde(default)]
    events: Vec<OsvEvent>,
}

#[derive(Debug, Deserialize)]
struct OsvEvent {
    #[serde(default)]
    fixed: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_osv_client_creation() {
        assert!(OsvClient::new().is_ok());
    }

    #[test]
    fn test_query_uses_npm_ecosystem() {
        let query = OsvClient::build_query("lodash", "4.17.15");
        let json = serde_json::to_value(&query).unwrap();
        assert_eq!(json["package"]["ecosystem"], "npm");
        assert_eq!(json["package"]["name"], "lodash");
        assert_eq!(json["version"], "4.17.15");
    }

    #[test]
    fn test_response_to_advisories() {
        let body: OsvQueryResponse = serde_json::from_str(
            r#"{
                "vulns": [{
                    "id": "GHSA-p6mc-m468-83gw",
                    "summary": "Prototype Pollution in lodash",
                    "database_specific": {"severity": "MODERATE"},
                    "affected": [{
                        "ranges": [{
                            "type": "SEMVER",
                            "events": [{"introduced": "0"}, {"fixed": "4.17.19"}]
                        }]
                    }]
                }]
            }"#,
        )
        .unwrap();

        let advisories: Vec<Advisory> = body
            .vulns
            .into_iter()
            .map(OsvVulnerability::into_advisory)
            .collect();

        assert_eq!(advisories.len(), 1);
        assert_eq!(advisories[0].id, "GHSA-p6mc-m468-83gw");
        assert_eq!(advisories[0].severity.as_deref(), Some("MEDIUM"));
        assert_eq!(advisories[0].fixed_version.as_deref(), Some("4.17.19"));
    }

    #[test]
    fn test_empty_response_has_no_advisories() {
        let body: OsvQueryResponse = serde_json::from_str("{}").unwrap();
        assert!(body.vulns.is_empty());
    }

    #[test]
    fn test_normalize_severity() {
        assert_eq!(normalize_severity("critical"), "CRITICAL");
        assert_eq!(normalize_severity("MODERATE"), "MEDIUM");
        assert_eq!(normalize_severity("whatever"), "UNKNOWN");
    }
}
