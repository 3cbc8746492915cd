use axum::Router;
use sentiment_gateway::{
    config::{Config, InferenceConfig, LogsConfig, ServerConfig},
    inference::HttpInferenceClient,
    server,
};
use std::sync::Arc;

/// Create a test configuration pointing at the given upstream endpoint.
/// Uses a short timeout and a small text cap so the failure paths are
/// cheap to exercise.
pub fn create_test_config(endpoint: &str) -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            allowed_origins: vec!["http://localhost:5173".to_string()],
            max_text_len: 1000,
            logs: LogsConfig {
                level: "debug".to_string(),
            },
        },
        inference: InferenceConfig {
            endpoint: endpoint.to_string(),
            timeout_secs: 1,
        },
    }
}

/// Build the gateway router wired to the given upstream endpoint.
pub fn create_test_app(endpoint: &str) -> Router {
    let config = create_test_config(endpoint);
    let client = HttpInferenceClient::new(config.inference.clone()).unwrap();

    server::router(&config, Arc::new(client)).unwrap()
}
