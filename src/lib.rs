//! Shoe Fit - multi-dimensional shoe-fit scoring engine
//!
//! This library scores how well a shoe's insole accommodates a measured foot.
//! Length, width, perimeter and area are each mapped to a 0-100 sub-score
//! through smooth penalty curves after the foot is grown by the shoe type's
//! clearances, and the sub-scores are combined into a single fit score.

pub mod commands;
pub mod config;
pub mod core;
pub mod models;
pub mod services;

// Re-export commonly used types
pub use crate::core::{
    calculate_fit_score, get_clearances, resolve_shoe_dimensions, score_by_length_width, score_fit,
    Recommender,
};
pub use models::{
    ClearanceProfile, FitCategory, FitThresholds, FootMeasurement, ScoredShoe, ScoringWeights,
    ShoeMeasurement, ShoeRecord, ShoeType, SubScores,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let score = score_fit(
            &FootMeasurement::new(10.5, 4.0),
            &ShoeMeasurement::new(10.8, 4.0),
            ShoeType::Casual,
        );
        assert!(score > 0.0 && score <= 100.0);
    }
}
