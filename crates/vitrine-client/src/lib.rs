use reqwest::Client;
use serde_json::{json, Value};
use std::time::Duration;
use thiserror::Error;

pub mod queries;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);
const RETRY_BASE_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("backend request failed: {0}")]
    Http(String),
    #[error("backend returned status {0}")]
    Status(u16),
    #[error("query rejected: {0}")]
    Graphql(String),
    #[error("invalid backend response: {0}")]
    Decode(String),
}

/// HTTP client for the marketplace GraphQL backend.
///
/// Transport failures and 5xx responses are retried with exponential
/// backoff; GraphQL-level errors are surfaced immediately since the
/// backend has already evaluated the query.
#[derive(Debug, Clone)]
pub struct GraphqlClient {
    http: Client,
    endpoint: String,
    max_retries: u32,
}

impl GraphqlClient {
    pub fn new(endpoint: &str, timeout: Option<Duration>, max_retries: u32) -> Result<Self, ClientError> {
        let http = Client::builder()
            .timeout(timeout.unwrap_or(DEFAULT_TIMEOUT))
            .user_agent("Vitrine/0.3")
            .build()
            .map_err(|e| ClientError::Http(e.to_string()))?;
        Ok(Self {
            http,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            max_retries,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Execute one GraphQL document and return its `data` object.
    pub async fn execute(&self, document: &str, variables: Value) -> Result<Value, ClientError> {
        let body = json!({ "query": document, "variables": variables });
        let mut last_err = ClientError::Http("no attempts made".to_string());

        for attempt in 0..=self.max_retries {
            if attempt > 0 {
                let delay = RETRY_BASE_DELAY * 2u32.pow(attempt - 1);
                tracing::debug!("retrying backend query in {:?} (attempt {})", delay, attempt + 1);
                tokio::time::sleep(delay).await;
            }

            match self.http.post(&self.endpoint).json(&body).send().await {
                Ok(resp) => {
                    let status = resp.status();
                    if status.is_server_error() {
                        last_err = ClientError::Status(status.as_u16());
                        continue;
                    }
                    if !status.is_success() {
                        return Err(ClientError::Status(status.as_u16()));
                    }
                    let payload: Value = resp
                        .json()
                        .await
                        .map_err(|e| ClientError::Decode(e.to_string()))?;
                    return extract_data(payload);
                }
                Err(e) => {
                    last_err = ClientError::Http(e.to_string());
                }
            }
        }

        Err(last_err)
    }
}

/// Pull `data` out of a GraphQL response envelope, converting any
/// `errors` entries into a single joined message.
fn extract_data(payload: Value) -> Result<Value, ClientError> {
    if let Some(errors) = payload.get("errors").and_then(Value::as_array) {
        if !errors.is_empty() {
            let joined = errors
                .iter()
                .map(|e| {
                    e.get("message")
                        .and_then(Value::as_str)
                        .unwrap_or("unknown error")
                })
                .collect::<Vec<_>>()
                .join("; ");
            return Err(ClientError::Graphql(joined));
        }
    }
    match payload.get("data") {
        Some(data) if !data.is_null() => Ok(data.clone()),
        _ => Err(ClientError::Decode("response carried no data".to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn graphql_errors_are_joined() {
        let payload = json!({
            "errors": [
                { "message": "field does not exist" },
                { "message": "permission denied" },
            ]
        });
        let err = extract_data(payload).unwrap_err();
        assert!(matches!(err, ClientError::Graphql(ref msg)
            if msg == "field does not exist; permission denied"));
    }

    #[test]
    fn missing_data_is_a_decode_error() {
        let err = extract_data(json!({ "data": null })).unwrap_err();
        assert!(matches!(err, ClientError::Decode(_)));
    }

    #[test]
    fn data_is_extracted() {
        let data = extract_data(json!({ "data": { "ok": true } })).expect("data");
        assert_eq!(data, json!({ "ok": true }));
    }
}
