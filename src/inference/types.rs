use serde::{Deserialize, Serialize};

/// Body of the outbound call to the inference service.
#[derive(Debug, Serialize)]
pub struct AnalysisRequest<'a> {
    pub text: &'a str,
}

/// Classification produced by the inference service. The gateway passes it
/// through to the caller unchanged; `sentiment` is an opaque label and
/// `score` is not range-checked here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub sentiment: String,
    pub score: f64,
}
