use thiserror::Error;
use validator::Validate;

use crate::core::{latest_complete_scan, within_tolerance, Recommender};
use crate::models::{
    FootMeasurement, RecommendationRequest, RecommendationResponse, ToleranceRequest,
    ToleranceResponse,
};
use crate::services::{CatalogError, CatalogSource};

pub const ALGORITHM_VERSION: &str = "enhanced_4d_v2";

/// Errors surfaced by the runner commands
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("No completed foot measurement found. Please upload and process a foot image first.")]
    NoMeasurement,

    #[error("Validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

impl CommandError {
    /// Short machine-readable tag for error responses
    pub fn kind(&self) -> &'static str {
        match self {
            CommandError::NoMeasurement => "no_measurement",
            CommandError::Validation(_) => "validation_failed",
            CommandError::Catalog(_) => "catalog_unavailable",
        }
    }
}

/// State shared by all commands
#[derive(Debug, Clone)]
pub struct RunContext {
    pub source: CatalogSource,
    pub recommender: Recommender,
    pub limit: Option<usize>,
}

/// Rank the catalog for the latest completed foot scan
pub fn recommend_latest(ctx: &RunContext) -> Result<RecommendationResponse, CommandError> {
    let scans = ctx.source.load_scans()?;

    let scan = latest_complete_scan(&scans.records).ok_or(CommandError::NoMeasurement)?;
    tracing::info!(
        "Using foot scan {} (uploaded {}): length={:?} in, width={:?} in",
        scan.id,
        scan.uploaded_at,
        scan.length_inches,
        scan.width_inches
    );

    let request = RecommendationRequest {
        foot: scan.measurement(),
        limit: ctx.limit,
    };
    recommend(ctx, &request)
}

/// Rank the catalog for an explicit foot measurement
pub fn recommend(
    ctx: &RunContext,
    request: &RecommendationRequest,
) -> Result<RecommendationResponse, CommandError> {
    request.validate()?;

    let catalog = ctx.source.load_shoes()?;
    tracing::debug!("Found {} catalog entries", catalog.records.len());

    let result = ctx.recommender.recommend(&request.foot, catalog.records, request.limit);
    let skipped = result.skipped + catalog.rejected;

    tracing::info!(
        "Returning {} recommendations (from {} analyzed, {} skipped)",
        result.recommendations.len(),
        result.total_analyzed,
        skipped
    );

    Ok(RecommendationResponse {
        user_measurements: request.foot,
        recommendations: result.recommendations,
        total_analyzed: result.total_analyzed,
        skipped,
        algorithm_version: ALGORITHM_VERSION.to_string(),
    })
}

/// Legacy lookup: shoes whose stored insole sits within a tolerance window
pub fn tolerance_lookup(
    ctx: &RunContext,
    request: &ToleranceRequest,
) -> Result<ToleranceResponse, CommandError> {
    request.validate()?;

    let catalog = ctx.source.load_shoes()?;
    let recommendations: Vec<_> =
        within_tolerance(request.length, request.width, &catalog.records, request.tolerance)
            .into_iter()
            .cloned()
            .collect();

    tracing::info!(
        "{} shoes within {} in of {}x{}",
        recommendations.len(),
        request.tolerance,
        request.length,
        request.width
    );

    Ok(ToleranceResponse {
        foot_measurements: FootMeasurement::new(request.length, request.width),
        count: recommendations.len(),
        recommendations,
    })
}
