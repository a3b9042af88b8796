use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::FootMeasurement;

/// Request to score a foot against the catalog
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RecommendationRequest {
    pub foot: FootMeasurement,
    #[serde(default)]
    #[validate(range(min = 1, max = 500))]
    pub limit: Option<usize>,
}

/// Request for the tolerance-window lookup
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ToleranceRequest {
    #[validate(range(min = 0.1, max = 20.0))]
    pub length: f64,
    #[validate(range(min = 0.1, max = 10.0))]
    pub width: f64,
    #[serde(default = "default_tolerance")]
    #[validate(range(min = 0.0, max = 2.0))]
    pub tolerance: f64,
}

fn default_tolerance() -> f64 {
    0.5
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tolerance_default() {
        let req: ToleranceRequest =
            serde_json::from_str(r#"{"length": 10.5, "width": 4.0}"#).unwrap();
        assert_eq!(req.tolerance, 0.5);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_recommendation_limit_validation() {
        let req = RecommendationRequest {
            foot: FootMeasurement::new(10.5, 4.0),
            limit: Some(0),
        };
        assert!(req.validate().is_err());
    }
}
