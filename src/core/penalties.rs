//! Per-axis fit curves.
//!
//! Each function maps a clearance-adjusted foot dimension and the raw shoe
//! dimension to a sub-score in [0, 100]. The curves are piecewise linear with
//! named tolerance zones, so a small change in input moves the score by a
//! small, bounded amount instead of flipping between pass and fail.

use crate::core::geometry::{
    estimate_foot_area, estimate_foot_perimeter, estimate_shoe_area, estimate_shoe_perimeter,
};

// Length: ratio = adjusted foot length / shoe length
pub const LENGTH_ROOMY_THRESHOLD: f64 = 0.95;
pub const LENGTH_SNUG_THRESHOLD: f64 = 1.00;
pub const LENGTH_TIGHT_THRESHOLD: f64 = 1.02;
pub const LENGTH_MODERATE_THRESHOLD: f64 = 1.05;
pub const LENGTH_SEVERE_THRESHOLD: f64 = 1.10;
pub const LENGTH_MAX_RATIO: f64 = 1.15;

// Width: diff ratio = |adjusted foot width - shoe width| / shoe width
pub const WIDTH_PERFECT_THRESHOLD: f64 = 0.05;
pub const WIDTH_GOOD_THRESHOLD: f64 = 0.10;
pub const WIDTH_ACCEPTABLE_THRESHOLD: f64 = 0.15;
pub const WIDTH_MAX_THRESHOLD: f64 = 0.20;
pub const WIDTH_EXCESS_CAP: f64 = 0.10;

// Perimeter: ratio = adjusted foot perimeter / shoe perimeter
pub const PERIMETER_LOOSE_MIN: f64 = 0.85;
pub const PERIMETER_PERFECT_MIN: f64 = 0.90;
pub const PERIMETER_PERFECT_MAX: f64 = 1.08;
pub const PERIMETER_TIGHT_THRESHOLD: f64 = 1.12;
pub const PERIMETER_MAX_RATIO: f64 = 1.18;

// Area: ratio = adjusted foot area / shoe area
pub const AREA_LOOSE_MIN: f64 = 0.80;
pub const AREA_PERFECT_MIN: f64 = 0.88;
pub const AREA_PERFECT_MAX: f64 = 1.02;
pub const AREA_TIGHT_THRESHOLD: f64 = 1.08;
pub const AREA_MAX_RATIO: f64 = 1.15;

/// Bounding-box extent used to estimate a missing perimeter or area
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub length: f64,
    pub width: f64,
}

impl Extent {
    pub fn new(length: f64, width: f64) -> Self {
        Self { length, width }
    }
}

/// Keep an optional dimension only when it is a usable positive number
#[inline]
pub(crate) fn usable(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite() && *v > 0.0)
}

#[inline]
fn bounded(score: f64) -> f64 {
    if score.is_nan() {
        0.0
    } else {
        score.clamp(0.0, 100.0)
    }
}

/// Score a length ratio. Ratios above 1 mean the shoe is too short.
pub fn length_ratio_score(ratio: f64) -> f64 {
    if ratio.is_nan() {
        return 0.0;
    }
    let score = if ratio <= LENGTH_ROOMY_THRESHOLD {
        // Noticeably longer than needed: 85-100
        100.0 * (0.85 + 0.15 * ratio / LENGTH_ROOMY_THRESHOLD)
    } else if ratio <= LENGTH_SNUG_THRESHOLD {
        100.0 * (0.95 + 0.05 * ratio)
    } else if ratio <= LENGTH_TIGHT_THRESHOLD {
        let excess = ratio - LENGTH_SNUG_THRESHOLD;
        95.0 - (excess / 0.02) * 15.0
    } else if ratio <= LENGTH_MODERATE_THRESHOLD {
        let excess = ratio - LENGTH_TIGHT_THRESHOLD;
        80.0 - (excess / 0.03) * 25.0
    } else if ratio <= LENGTH_SEVERE_THRESHOLD {
        let excess = ratio - LENGTH_MODERATE_THRESHOLD;
        55.0 - (excess / 0.05) * 35.0
    } else {
        let excess = (ratio.min(LENGTH_MAX_RATIO) - LENGTH_SEVERE_THRESHOLD).max(0.0);
        (20.0 - (excess / 0.05) * 15.0).max(5.0)
    };
    bounded(score)
}

#[inline]
pub fn length_score(adjusted_foot_length: f64, shoe_length: f64) -> f64 {
    length_ratio_score(adjusted_foot_length / shoe_length)
}

/// Score a relative width difference; too wide and too narrow are penalised alike.
pub fn width_diff_score(diff_ratio: f64) -> f64 {
    if diff_ratio.is_nan() {
        return 0.0;
    }
    let diff_ratio = diff_ratio.abs();
    let score = if diff_ratio <= WIDTH_PERFECT_THRESHOLD {
        100.0 - diff_ratio * 200.0
    } else if diff_ratio <= WIDTH_GOOD_THRESHOLD {
        let excess = diff_ratio - WIDTH_PERFECT_THRESHOLD;
        90.0 - (excess / 0.05) * 20.0
    } else if diff_ratio <= WIDTH_ACCEPTABLE_THRESHOLD {
        let excess = diff_ratio - WIDTH_GOOD_THRESHOLD;
        70.0 - (excess / 0.05) * 30.0
    } else if diff_ratio <= WIDTH_MAX_THRESHOLD {
        let excess = diff_ratio - WIDTH_ACCEPTABLE_THRESHOLD;
        40.0 - (excess / 0.05) * 25.0
    } else {
        let excess = (diff_ratio - WIDTH_MAX_THRESHOLD).min(WIDTH_EXCESS_CAP);
        (15.0 - excess * 100.0).max(5.0)
    };
    bounded(score)
}

#[inline]
pub fn width_score(adjusted_foot_width: f64, shoe_width: f64) -> f64 {
    width_diff_score((adjusted_foot_width - shoe_width).abs() / shoe_width)
}

/// Score a perimeter ratio
pub fn perimeter_ratio_score(ratio: f64) -> f64 {
    if ratio.is_nan() {
        return 0.0;
    }
    let score = if ratio < PERIMETER_LOOSE_MIN {
        // Too loose: falls from 85 toward the floor
        (85.0 - (PERIMETER_LOOSE_MIN - ratio) * 450.0).max(10.0)
    } else if ratio < PERIMETER_PERFECT_MIN {
        85.0 + (ratio - PERIMETER_LOOSE_MIN) / 0.05 * 15.0
    } else if ratio <= PERIMETER_PERFECT_MAX {
        100.0
    } else if ratio <= PERIMETER_TIGHT_THRESHOLD {
        100.0 - (ratio - PERIMETER_PERFECT_MAX) / 0.04 * 25.0
    } else if ratio <= PERIMETER_MAX_RATIO {
        75.0 - (ratio - PERIMETER_TIGHT_THRESHOLD) / 0.06 * 50.0
    } else {
        (25.0 - (ratio - PERIMETER_MAX_RATIO) / 0.05 * 20.0).max(5.0)
    };
    bounded(score)
}

/// Perimeter sub-score using estimated perimeters on both sides
pub fn estimate_perimeter_score(
    foot_length: f64,
    foot_width: f64,
    shoe_length: f64,
    shoe_width: f64,
) -> f64 {
    let foot = estimate_foot_perimeter(foot_length, foot_width);
    let shoe = estimate_shoe_perimeter(shoe_length, shoe_width);
    if shoe <= 0.0 {
        return 0.0;
    }
    perimeter_ratio_score(foot / shoe)
}

/// Perimeter sub-score. When either perimeter is missing, both sides are
/// estimated from their extents instead.
pub fn perimeter_score(
    adjusted_foot_perimeter: Option<f64>,
    shoe_perimeter: Option<f64>,
    foot: Extent,
    shoe: Extent,
) -> f64 {
    match (usable(adjusted_foot_perimeter), usable(shoe_perimeter)) {
        (Some(foot_perimeter), Some(shoe_perimeter)) => {
            perimeter_ratio_score(foot_perimeter / shoe_perimeter)
        }
        _ => {
            tracing::trace!("Perimeter unavailable, estimating from extents");
            estimate_perimeter_score(foot.length, foot.width, shoe.length, shoe.width)
        }
    }
}

/// Score an area ratio
pub fn area_ratio_score(ratio: f64) -> f64 {
    if ratio.is_nan() {
        return 0.0;
    }
    let score = if ratio < AREA_LOOSE_MIN {
        (90.0 - (AREA_LOOSE_MIN - ratio) * 350.0).max(20.0)
    } else if ratio < AREA_PERFECT_MIN {
        90.0 + (ratio - AREA_LOOSE_MIN) / 0.08 * 10.0
    } else if ratio <= AREA_PERFECT_MAX {
        100.0
    } else if ratio <= AREA_TIGHT_THRESHOLD {
        100.0 - (ratio - AREA_PERFECT_MAX) / 0.06 * 20.0
    } else if ratio <= AREA_MAX_RATIO {
        80.0 - (ratio - AREA_TIGHT_THRESHOLD) / 0.07 * 50.0
    } else {
        (30.0 - (ratio - AREA_MAX_RATIO) / 0.05 * 20.0).max(10.0)
    };
    bounded(score)
}

/// Area sub-score using estimated areas on both sides
pub fn estimate_area_score(
    foot_length: f64,
    foot_width: f64,
    shoe_length: f64,
    shoe_width: f64,
) -> f64 {
    let foot = estimate_foot_area(foot_length, foot_width);
    let shoe = estimate_shoe_area(shoe_length, shoe_width);
    if shoe <= 0.0 {
        return 0.0;
    }
    area_ratio_score(foot / shoe)
}

/// Area sub-score, with the same estimation fallback as [`perimeter_score`]
pub fn area_score(
    adjusted_foot_area: Option<f64>,
    shoe_area: Option<f64>,
    foot: Extent,
    shoe: Extent,
) -> f64 {
    match (usable(adjusted_foot_area), usable(shoe_area)) {
        (Some(foot_area), Some(shoe_area)) => area_ratio_score(foot_area / shoe_area),
        _ => {
            tracing::trace!("Area unavailable, estimating from extents");
            estimate_area_score(foot.length, foot.width, shoe.length, shoe.width)
        }
    }
}
