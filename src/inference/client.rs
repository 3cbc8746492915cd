use super::types::{AnalysisRequest, AnalysisResult};
use crate::config::InferenceConfig;
use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Classified outcome of a failed inference call. The payload carries the
/// underlying diagnostic for logging; it must never be serialized into a
/// client-facing response.
#[derive(Error, Debug)]
pub enum InferenceError {
    #[error("inference service unreachable: {0}")]
    Unreachable(String),

    #[error("inference service did not respond within {0:?}")]
    Timeout(Duration),

    #[error("inference service returned a malformed response: {0}")]
    BadResponse(String),
}

#[async_trait]
pub trait InferenceClient: Send + Sync {
    /// Classify `text` with exactly one call to the inference service.
    async fn analyze(&self, text: &str) -> Result<AnalysisResult, InferenceError>;
}

pub struct HttpInferenceClient {
    client: reqwest::Client,
    endpoint: String,
    timeout: Duration,
}

impl HttpInferenceClient {
    pub fn new(config: InferenceConfig) -> crate::Result<Self> {
        let timeout = Duration::from_secs(config.timeout_secs);

        // The timeout bounds the whole round trip, connect included.
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint,
            timeout,
        })
    }
}

#[async_trait]
impl InferenceClient for HttpInferenceClient {
    async fn analyze(&self, text: &str) -> Result<AnalysisResult, InferenceError> {
        debug!("Sending {} bytes of text to {}", text.len(), self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .json(&AnalysisRequest { text })
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    InferenceError::Timeout(self.timeout)
                } else {
                    InferenceError::Unreachable(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            // A model-side 5xx and a dead host look the same to the caller
            return Err(InferenceError::Unreachable(format!(
                "inference service answered with status {status}"
            )));
        }

        let result: AnalysisResult = response.json().await.map_err(|e| {
            if e.is_timeout() {
                InferenceError::Timeout(self.timeout)
            } else if e.is_decode() {
                InferenceError::BadResponse(e.to_string())
            } else {
                InferenceError::Unreachable(e.to_string())
            }
        })?;

        debug!(
            "Inference service classified text as {} (score {})",
            result.sentiment, result.score
        );

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::InferenceConfig;

    fn create_test_config() -> InferenceConfig {
        InferenceConfig {
            endpoint: "http://localhost:8000/predict".to_string(),
            timeout_secs: 8,
        }
    }

    #[test]
    fn test_http_client_creation() {
        let client = HttpInferenceClient::new(create_test_config()).unwrap();

        assert_eq!(client.endpoint, "http://localhost:8000/predict");
        assert_eq!(client.timeout, Duration::from_secs(8));
    }

    #[test]
    fn test_error_display_names_the_kind() {
        let timeout = InferenceError::Timeout(Duration::from_secs(5));
        assert!(timeout.to_string().contains("did not respond"));

        let unreachable = InferenceError::Unreachable("connection refused".to_string());
        assert!(unreachable.to_string().contains("unreachable"));

        let bad = InferenceError::BadResponse("expected value at line 1".to_string());
        assert!(bad.to_string().contains("malformed"));
    }
}
