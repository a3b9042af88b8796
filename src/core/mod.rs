// Core algorithm exports
pub mod clearance;
pub mod filters;
pub mod geometry;
pub mod penalties;
pub mod recommender;
pub mod resolver;
pub mod scoring;

pub use clearance::get_clearances;
pub use filters::{latest_complete_scan, within_tolerance};
pub use geometry::{estimate_area, estimate_perimeter, Outline};
pub use recommender::{RecommendationResult, Recommender};
pub use resolver::{resolve_shoe_dimensions, ResolveError};
pub use scoring::{calculate_fit_score, score_by_length_width, score_fit};
