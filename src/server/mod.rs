pub mod handlers;
pub mod types;

use crate::{
    Error, Result,
    config::Config,
    inference::{HttpInferenceClient, InferenceClient},
};
use axum::{
    Router,
    http::{HeaderValue, Method, header},
    routing::post,
};
use std::{net::SocketAddr, sync::Arc};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

pub async fn run(config: Config) -> Result<()> {
    // Initialize the inference client
    let client = HttpInferenceClient::new(config.inference.clone())?;

    // Create router
    let app = router(&config, Arc::new(client))?;

    // Start server
    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting gateway on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Build the gateway router: one prediction route behind the CORS
/// allow-list, with request tracing.
pub fn router(config: &Config, client: Arc<dyn InferenceClient>) -> Result<Router> {
    let app_state = handlers::AppState {
        client,
        max_text_len: config.server.max_text_len,
    };

    Ok(Router::new()
        .route("/api/predict", post(handlers::predict))
        .layer(cors_layer(&config.server.allowed_origins)?)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state))
}

fn cors_layer(allowed_origins: &[String]) -> Result<CorsLayer> {
    let origins = allowed_origins
        .iter()
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .map_err(|e| Error::config(format!("Invalid allowed origin '{}': {}", origin, e)))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cors_layer_rejects_malformed_origin() {
        let result = cors_layer(&["http://ok.example".to_string(), "\u{0}".to_string()]);

        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_cors_layer_accepts_origin_list() {
        let origins = vec![
            "http://localhost:5173".to_string(),
            "http://localhost:3000".to_string(),
        ];

        assert!(cors_layer(&origins).is_ok());
    }
}
