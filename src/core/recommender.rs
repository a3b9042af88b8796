use validator::Validate;

use crate::core::{
    filters::is_recommendable,
    resolver::resolve_shoe_dimensions,
    scoring::calculate_fit_score,
};
use crate::models::{FitThresholds, FootMeasurement, ScoredShoe, ScoringWeights, ShoeRecord};

/// Result of a recommendation pass
#[derive(Debug)]
pub struct RecommendationResult {
    pub recommendations: Vec<ScoredShoe>,
    pub total_analyzed: usize,
    pub skipped: usize,
}

/// Scores a foot against a shoe catalog and ranks the results
///
/// # Pipeline Stages
/// 1. Active/validity filtering
/// 2. Dimension resolution (stored, table or estimated)
/// 3. Clearance-adjusted scoring per shoe type
/// 4. Categorisation and ranking
#[derive(Debug, Clone)]
pub struct Recommender {
    weights: ScoringWeights,
    thresholds: FitThresholds,
    include_inactive: bool,
}

impl Recommender {
    pub fn new(weights: ScoringWeights, thresholds: FitThresholds) -> Self {
        Self {
            weights,
            thresholds,
            include_inactive: false,
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(ScoringWeights::default(), FitThresholds::default())
    }

    pub fn include_inactive(mut self, include: bool) -> Self {
        self.include_inactive = include;
        self
    }

    pub fn thresholds(&self) -> &FitThresholds {
        &self.thresholds
    }

    /// Score one shoe. Resolution never fails, so neither does this.
    pub fn score_shoe(&self, foot: &FootMeasurement, shoe: ShoeRecord) -> ScoredShoe {
        let resolved = resolve_shoe_dimensions(&shoe);
        let shoe_type = shoe.shoe_type();
        let (fit_score, sub_scores) =
            calculate_fit_score(foot, &resolved, shoe_type, &self.weights);
        let fit_category = self.thresholds.categorize(fit_score);

        tracing::trace!("Shoe {} ({}) scored {}", shoe.id, shoe_type.as_str(), fit_score);

        ScoredShoe {
            shoe,
            fit_score,
            fit_category,
            fit_details: fit_category.details().to_string(),
            sub_scores,
            resolved_dimensions: resolved,
        }
    }

    /// Rank a catalog for a foot
    ///
    /// # Arguments
    /// * `foot` - The user's foot measurement
    /// * `catalog` - Shoe records from the catalog source
    /// * `limit` - Maximum number of recommendations to return, all when `None`
    pub fn recommend(
        &self,
        foot: &FootMeasurement,
        catalog: Vec<ShoeRecord>,
        limit: Option<usize>,
    ) -> RecommendationResult {
        let mut skipped = 0;

        let mut recommendations: Vec<ScoredShoe> = catalog
            .into_iter()
            .filter(|shoe| is_recommendable(shoe, self.include_inactive))
            .filter(|shoe| match shoe.validate() {
                Ok(()) => true,
                Err(errors) => {
                    tracing::warn!("Skipping invalid catalog record {}: {}", shoe.id, errors);
                    skipped += 1;
                    false
                }
            })
            .map(|shoe| self.score_shoe(foot, shoe))
            .collect();

        let total_analyzed = recommendations.len();

        // Sort by score (descending) and then by price (ascending)
        recommendations.sort_by(|a, b| {
            b.fit_score
                .partial_cmp(&a.fit_score)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| {
                    a.shoe
                        .price_usd
                        .partial_cmp(&b.shoe.price_usd)
                        .unwrap_or(std::cmp::Ordering::Equal)
                })
        });

        if let Some(limit) = limit {
            recommendations.truncate(limit);
        }

        tracing::debug!(
            "Scored {} shoes ({} skipped), returning {}",
            total_analyzed,
            skipped,
            recommendations.len()
        );

        RecommendationResult {
            recommendations,
            total_analyzed,
            skipped,
        }
    }
}

impl Default for Recommender {
    fn default() -> Self {
        Self::with_defaults()
    }
}
