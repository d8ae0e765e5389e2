//! HTTP client for TAP synchronous query endpoints.

use async_trait::async_trait;
use reqwest::{Client, StatusCode, header::ACCEPT};
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

use crate::domain::archive::{AdqlQuery, ArchiveClient, ArchiveError, ArchiveRow};

/// Connection settings for [`TapArchiveClient`].
#[derive(Debug, Clone)]
pub struct ArchiveSettings {
    /// TAP `sync` endpoint, e.g. `https://exoplanetarchive.ipac.caltech.edu/TAP/sync`.
    pub endpoint: Url,
    /// Hard limit for one request, body included.
    pub timeout: Duration,
    pub user_agent: String,
}

/// Archive client issuing one `GET {endpoint}?query=...&format=json` per call.
///
/// The underlying [`reqwest::Client`] keeps a connection pool and is cheap to
/// clone. When the timeout fires the in-flight request future is dropped,
/// which closes its connection.
#[derive(Debug, Clone)]
pub struct TapArchiveClient {
    client: Client,
    endpoint: Url,
    timeout: Duration,
}

impl TapArchiveClient {
    /// Builds the HTTP client.
    ///
    /// # Errors
    ///
    /// Returns [`ArchiveError::Request`] if the TLS backend cannot be initialized.
    pub fn new(settings: ArchiveSettings) -> Result<Self, ArchiveError> {
        let client = Client::builder()
            .user_agent(settings.user_agent)
            .timeout(settings.timeout)
            .pool_idle_timeout(Duration::from_secs(90))
            .build()
            .map_err(|e| ArchiveError::Request(format!("failed to build HTTP client: {e}")))?;

        info!(endpoint = %settings.endpoint, "Archive client ready");

        Ok(Self {
            client,
            endpoint: settings.endpoint,
            timeout: settings.timeout,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Full request URL for `query`.
    ///
    /// Spaces in the query are form-encoded as `+`.
    pub fn request_url(&self, query: &AdqlQuery) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("query", query.as_str())
            .append_pair("format", "json");
        url
    }

    fn classify(&self, err: reqwest::Error) -> ArchiveError {
        if err.is_timeout() {
            ArchiveError::Timeout(self.timeout)
        } else if err.is_connect() {
            ArchiveError::Unavailable(err.to_string())
        } else if err.is_decode() {
            ArchiveError::Decode(err.to_string())
        } else {
            ArchiveError::Request(err.to_string())
        }
    }
}

#[async_trait]
impl ArchiveClient for TapArchiveClient {
    async fn fetch_rows(&self, query: &AdqlQuery) -> Result<Vec<ArchiveRow>, ArchiveError> {
        let url = self.request_url(query);
        debug!(%url, "Querying archive");

        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(ArchiveError::RateLimited);
        }
        if !status.is_success() {
            return Err(ArchiveError::Status(status.as_u16()));
        }

        let body = response.bytes().await.map_err(|e| self.classify(e))?;
        parse_rows(&body)
    }
}

/// Decodes a JSON array of rows. A blank body counts as zero rows.
fn parse_rows(body: &[u8]) -> Result<Vec<ArchiveRow>, ArchiveError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Vec::new());
    }

    serde_json::from_slice(body).map_err(|e| ArchiveError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::SystemName;

    fn client() -> TapArchiveClient {
        TapArchiveClient::new(ArchiveSettings {
            endpoint: Url::parse("https://archive.example/TAP/sync").unwrap(),
            timeout: Duration::from_secs(10),
            user_agent: "test-agent".to_string(),
        })
        .unwrap()
    }

    #[test]
    fn test_request_url_encodes_query_and_format() {
        let query = AdqlQuery::planets_for_host_prefix(&SystemName::parse("HD 40307").unwrap());
        let url = client().request_url(&query);

        assert!(url.as_str().starts_with("https://archive.example/TAP/sync?query=select+pl_name"));
        assert!(url.as_str().ends_with("&format=json"));
        assert!(url.as_str().contains("like+%27HD+40307%25%27"));

        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(pairs[0], ("query".to_string(), query.as_str().to_string()));
        assert_eq!(pairs[1], ("format".to_string(), "json".to_string()));
    }

    #[test]
    fn test_parse_rows_blank_body_is_empty() {
        assert!(parse_rows(b"").unwrap().is_empty());
        assert!(parse_rows(b"  \n").unwrap().is_empty());
        assert!(parse_rows(b"[]").unwrap().is_empty());
    }

    #[test]
    fn test_parse_rows_reads_array() {
        let rows = parse_rows(br#"[{"pl_name": "a", "pl_orbper": 1.5}, {"pl_name": "b"}]"#).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].number("pl_orbper"), Some(1.5));
    }

    #[test]
    fn test_parse_rows_rejects_non_array() {
        assert!(matches!(
            parse_rows(br#"{"error": "bad query"}"#),
            Err(ArchiveError::Decode(_))
        ));
        assert!(matches!(parse_rows(b"<html>"), Err(ArchiveError::Decode(_))));
    }
}
