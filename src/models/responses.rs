use serde::{Deserialize, Serialize};
use crate::models::domain::{FootMeasurement, ScoredShoe, ShoeRecord};

/// Response for a catalog recommendation pass
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationResponse {
    pub user_measurements: FootMeasurement,
    pub recommendations: Vec<ScoredShoe>,
    pub total_analyzed: usize,
    /// Catalog rows dropped as malformed or invalid
    pub skipped: usize,
    pub algorithm_version: String,
}

/// Response for the tolerance-window lookup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToleranceResponse {
    pub foot_measurements: FootMeasurement,
    pub recommendations: Vec<ShoeRecord>,
    pub count: usize,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}
