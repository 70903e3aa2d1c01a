//! Supabase REST insert for the demo suggestions.

use reqwest::StatusCode;
use reqwest::blocking::{Client, ClientBuilder, Request};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue, InvalidHeaderValue};
use tracing::{debug, info, warn};

use crate::config::SeedConfig;
use crate::error::{Result, SeedError};
use crate::suggestion::{InsertedSuggestion, Suggestion};

/// Header carrying the project API key.
const APIKEY_HEADER: &str = "apikey";

/// Asks PostgREST to answer with the inserted rows.
const PREFER_REPRESENTATION: &str = "return=representation";

/// Build headers for an insert authenticated with `api_key`.
pub fn build_headers(api_key: &str) -> Result<HeaderMap> {
    let invalid = |e: InvalidHeaderValue| SeedError::Config(format!("Invalid API key: {}", e));

    let mut headers = HeaderMap::new();
    headers.insert(APIKEY_HEADER, HeaderValue::from_str(api_key).map_err(invalid)?);
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", api_key)).map_err(invalid)?,
    );
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert("prefer", HeaderValue::from_static(PREFER_REPRESENTATION));
    Ok(headers)
}

/// Serialize records into the JSON array sent as the request body.
pub fn payload(records: &[Suggestion]) -> Result<String> {
    Ok(serde_json::to_string(records)?)
}

/// Pretty-printed payload, for previews.
pub fn payload_pretty(records: &[Suggestion]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// Inserts suggestions into `mc_suggestions` with one blocking POST.
pub struct Seeder {
    client: Client,
    config: SeedConfig,
}

impl Seeder {
    /// Create a seeder with a default HTTP client.
    pub fn new(config: SeedConfig) -> Result<Self> {
        Self::with_client_builder(Client::builder(), config)
    }

    /// Create a seeder from a custom client builder.
    ///
    /// Fails with [`SeedError::HttpUnavailable`] when the client cannot be
    /// built, before any request is attempted.
    pub fn with_client_builder(builder: ClientBuilder, config: SeedConfig) -> Result<Self> {
        let client = builder
            .build()
            .map_err(|e| SeedError::HttpUnavailable(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Build the insert request without sending it.
    pub fn build_request(&self, records: &[Suggestion]) -> Result<Request> {
        let request = self
            .client
            .post(self.config.endpoint())
            .headers(build_headers(self.config.api_key())?)
            .body(payload(records)?)
            .build()?;
        Ok(request)
    }

    /// Insert `records` and return the rows the server echoed back.
    ///
    /// No existence check is made; every call inserts a new batch.
    pub fn insert(&self, records: &[Suggestion]) -> Result<Vec<InsertedSuggestion>> {
        let request = self.build_request(records)?;
        debug!(
            url = %request.url(),
            key = %self.config.redacted_key(),
            records = records.len(),
            "posting suggestions"
        );

        let response = self.client.execute(request)?;
        let status = response.status();

        if status != StatusCode::OK && status != StatusCode::CREATED {
            let body = body_or_read_error(response.text());
            warn!(%status, "insert rejected");
            return Err(SeedError::Api { status, body });
        }

        let body = response.text()?;
        let rows: Vec<InsertedSuggestion> = serde_json::from_str(&body)?;
        info!(inserted = rows.len(), "insert accepted");
        Ok(rows)
    }
}

/// Response body on the error path, or a note saying why it could not be read.
fn body_or_read_error<E: std::fmt::Display>(text: std::result::Result<String, E>) -> String {
    text.unwrap_or_else(|e| format!("<unreadable body: {e}>"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::suggestion::SUGGESTIONS;

    fn seeder(url: &str, key: &str) -> Seeder {
        Seeder::new(SeedConfig::new(url, key).unwrap()).unwrap()
    }

    #[test]
    fn test_build_headers() {
        let headers = build_headers("abc123").unwrap();

        assert_eq!(headers["apikey"], "abc123");
        assert_eq!(headers[AUTHORIZATION], "Bearer abc123");
        assert_eq!(headers[CONTENT_TYPE], "application/json");
        assert_eq!(headers["prefer"], "return=representation");
        assert_eq!(headers.len(), 4);
    }

    #[test]
    fn test_build_headers_rejects_newline_in_key() {
        let err = build_headers("abc\n123").unwrap_err();
        assert!(matches!(err, SeedError::Config(_)));
    }

    #[test]
    fn test_payload_shape() {
        let value: serde_json::Value = serde_json::from_str(&payload(&SUGGESTIONS).unwrap()).unwrap();
        let rows = value.as_array().unwrap();

        assert_eq!(rows.len(), 4);
        for row in rows {
            let obj = row.as_object().unwrap();
            let mut keys: Vec<_> = obj.keys().map(String::as_str).collect();
            keys.sort_unstable();
            assert_eq!(
                keys,
                vec!["action_type", "description", "priority", "status", "suggestion_type", "title"]
            );
            assert_eq!(obj["status"], "pending");
        }
    }

    #[test]
    fn test_build_request() {
        let seeder = seeder("https://abc.supabase.co", "k");
        let request = seeder.build_request(&SUGGESTIONS).unwrap();

        assert_eq!(request.method(), &reqwest::Method::POST);
        assert_eq!(request.url().as_str(), "https://abc.supabase.co/rest/v1/mc_suggestions");
        assert_eq!(request.headers()[AUTHORIZATION], "Bearer k");

        let body = request.body().and_then(|b| b.as_bytes()).unwrap();
        assert_eq!(body, payload(&SUGGESTIONS).unwrap().as_bytes());
    }

    #[test]
    fn test_unreadable_error_body_keeps_the_read_error() {
        let failed: std::result::Result<String, std::io::Error> =
            Err(std::io::Error::other("connection reset"));

        assert_eq!(body_or_read_error(failed), "<unreadable body: connection reset>");
        assert_eq!(
            body_or_read_error::<std::io::Error>(Ok("{}".to_string())),
            "{}"
        );
    }

    #[test]
    fn test_unbuildable_client_is_http_unavailable() {
        let config = SeedConfig::new("https://abc.supabase.co", "k").unwrap();
        let builder = Client::builder().user_agent("bad\nagent");

        let err = Seeder::with_client_builder(builder, config).err().unwrap();
        assert!(matches!(err, SeedError::HttpUnavailable(_)));
        assert!(err.to_string().contains("TLS backend"));
    }
}
