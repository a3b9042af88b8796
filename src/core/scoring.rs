use crate::core::clearance::get_clearances;
use crate::core::geometry::{
    estimate_foot_area, estimate_foot_perimeter, estimate_shoe_area, estimate_shoe_perimeter,
};
use crate::core::penalties::{
    area_score, length_score, perimeter_score, usable, width_score, Extent,
};
use crate::models::{FootMeasurement, ScoringWeights, ShoeMeasurement, ShoeType, SubScores};

/// Calculate a fit score (0-100) for a foot against a shoe's insole
///
/// Scoring formula:
/// score = (
///     length_score * 0.375 +      # Toe room, penalised hardest when short
///     width_score * 0.275 +       # Symmetric over/under tolerance
///     perimeter_score * 0.225 +   # Girth around the outline
///     area_score * 0.125          # Overall footprint
/// )
///
/// The foot is first grown by the shoe type's clearances, so each axis
/// compares the room the shoe must provide against what it does provide.
/// Missing or non-positive length/width on either side scores 0.
pub fn calculate_fit_score(
    foot: &FootMeasurement,
    shoe: &ShoeMeasurement,
    shoe_type: ShoeType,
    weights: &ScoringWeights,
) -> (f64, SubScores) {
    let (Some(foot_length), Some(foot_width), Some(shoe_length), Some(shoe_width)) = (
        usable(foot.length),
        usable(foot.width),
        usable(shoe.length),
        usable(shoe.width),
    ) else {
        return (0.0, SubScores::default());
    };

    let clearances = get_clearances(shoe_type);

    let adjusted_length = foot_length + clearances.length;
    let adjusted_width = foot_width + clearances.width;
    let adjusted_perimeter = usable(foot.perimeter).map(|p| p + clearances.perimeter);
    let adjusted_area = usable(foot.area).map(|a| a * (1.0 + clearances.area));

    let foot_extent = Extent::new(adjusted_length, adjusted_width);
    let shoe_extent = Extent::new(shoe_length, shoe_width);

    let sub_scores = SubScores {
        length: length_score(adjusted_length, shoe_length),
        width: width_score(adjusted_width, shoe_width),
        perimeter: perimeter_score(adjusted_perimeter, shoe.perimeter, foot_extent, shoe_extent),
        area: area_score(adjusted_area, shoe.area, foot_extent, shoe_extent),
    };

    let total = sub_scores.length * weights.length
        + sub_scores.width * weights.width
        + sub_scores.perimeter * weights.perimeter
        + sub_scores.area * weights.area;

    (round_score(total), sub_scores)
}

/// Clamp to [0, 100] and round to one decimal place
#[inline]
fn round_score(score: f64) -> f64 {
    if score.is_nan() {
        return 0.0;
    }
    (score.clamp(0.0, 100.0) * 10.0).round() / 10.0
}

/// Composite score with the default weights
#[inline]
pub fn score_fit(foot: &FootMeasurement, shoe: &ShoeMeasurement, shoe_type: ShoeType) -> f64 {
    calculate_fit_score(foot, shoe, shoe_type, &ScoringWeights::default()).0
}

/// Reduced-input scorer for callers that only know length and width.
///
/// Area and perimeter are estimated on both sides and the full composite is
/// run with the casual profile.
pub fn score_by_length_width(
    user_length: f64,
    user_width: f64,
    shoe_length: f64,
    shoe_width: f64,
) -> f64 {
    let foot = FootMeasurement::new(user_length, user_width)
        .with_area(estimate_foot_area(user_length, user_width))
        .with_perimeter(estimate_foot_perimeter(user_length, user_width));
    let shoe = ShoeMeasurement::new(shoe_length, shoe_width)
        .with_area(estimate_shoe_area(shoe_length, shoe_width))
        .with_perimeter(estimate_shoe_perimeter(shoe_length, shoe_width));

    score_fit(&foot, &shoe, ShoeType::Casual)
}
