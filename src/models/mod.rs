// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    ClearanceProfile, FitCategory, FitThresholds, FootMeasurement, FootScan, ScanStatus,
    ScoredShoe, ScoringWeights, ShoeMeasurement, ShoeRecord, ShoeType, SubScores, WidthCategory,
};
pub use requests::{RecommendationRequest, ToleranceRequest};
pub use responses::{ErrorResponse, RecommendationResponse, ToleranceResponse};
