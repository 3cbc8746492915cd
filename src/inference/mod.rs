mod client;
mod types;

pub use client::{HttpInferenceClient, InferenceClient, InferenceError};
pub use types::{AnalysisRequest, AnalysisResult};
