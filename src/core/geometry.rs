//! Area and perimeter estimators for organic outlines.
//!
//! Used when the vision layer only delivers a bounding box. Area is the box
//! area scaled by a shape factor; perimeter treats the outline as an ellipse
//! inscribed in the box and applies Ramanujan's second approximation.

use std::f64::consts::PI;

/// Which outline is being estimated. Insoles are boxier than bare feet and
/// have a slightly roomier rim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outline {
    Foot,
    Insole,
}

impl Outline {
    /// Ratio of true area to bounding-box area
    #[inline]
    pub fn shape_factor(&self) -> f64 {
        match self {
            Outline::Foot => 0.70,
            Outline::Insole => 0.75,
        }
    }

    /// Multiplier applied on top of the elliptical perimeter
    #[inline]
    fn perimeter_allowance(&self) -> f64 {
        match self {
            Outline::Foot => 1.0,
            Outline::Insole => 1.05,
        }
    }
}

/// Non-finite and negative extents collapse to zero so the estimators stay total.
#[inline]
fn sanitize(extent: f64) -> f64 {
    if extent.is_finite() && extent > 0.0 {
        extent
    } else {
        0.0
    }
}

/// Estimate the area enclosed by an outline from its bounding box
#[inline]
pub fn estimate_area(length: f64, width: f64, outline: Outline) -> f64 {
    sanitize(length) * sanitize(width) * outline.shape_factor()
}

/// Estimate the perimeter of an outline from its bounding box
///
/// With semi-axes `a = length / 2` and `b = width / 2`:
/// `h = ((a - b) / (a + b))^2`,
/// `p = PI * (a + b) * (1 + 3h / (10 + sqrt(4 - 3h)))`,
/// and the result is `2p`, scaled by the outline's allowance.
pub fn estimate_perimeter(length: f64, width: f64, outline: Outline) -> f64 {
    let a = sanitize(length) / 2.0;
    let b = sanitize(width) / 2.0;
    let sum = a + b;
    if sum <= 0.0 {
        return 0.0;
    }

    let h = ((a - b) / sum).powi(2);
    let p = PI * sum * (1.0 + 3.0 * h / (10.0 + (4.0 - 3.0 * h).sqrt()));

    2.0 * p * outline.perimeter_allowance()
}

#[inline]
pub fn estimate_foot_area(length: f64, width: f64) -> f64 {
    estimate_area(length, width, Outline::Foot)
}

#[inline]
pub fn estimate_foot_perimeter(length: f64, width: f64) -> f64 {
    estimate_perimeter(length, width, Outline::Foot)
}

#[inline]
pub fn estimate_shoe_area(length: f64, width: f64) -> f64 {
    estimate_area(length, width, Outline::Insole)
}

#[inline]
pub fn estimate_shoe_perimeter(length: f64, width: f64) -> f64 {
    estimate_perimeter(length, width, Outline::Insole)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_foot_area_uses_shape_factor() {
        let area = estimate_foot_area(10.5, 4.0);
        assert!((area - 29.4).abs() < 1e-9);
        assert!(area < 10.5 * 4.0 && area > 0.0);
    }

    #[test]
    fn test_insole_area_exceeds_foot_area() {
        assert!(estimate_shoe_area(10.5, 4.0) > estimate_foot_area(10.5, 4.0));
    }

    #[test]
    fn test_perimeter_exceeds_rectangle() {
        let perimeter = estimate_foot_perimeter(10.0, 4.0);
        assert!(perimeter > 2.0 * (10.0 + 4.0), "got {}", perimeter);
        assert!(perimeter < 100.0);
    }

    #[test]
    fn test_circle_perimeter() {
        // h = 0 for a circle, so p reduces to PI * d and the result to 2 * PI * d
        let perimeter = estimate_foot_perimeter(4.0, 4.0);
        assert!((perimeter - 2.0 * PI * 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_insole_perimeter_allowance() {
        let foot = estimate_foot_perimeter(10.5, 4.0);
        let shoe = estimate_shoe_perimeter(10.5, 4.0);
        assert!((shoe / foot - 1.05).abs() < 1e-9);
    }

    #[test]
    fn test_degenerate_inputs_stay_finite() {
        let cases = [
            (0.0, 0.0),
            (10.0, 0.0),
            (0.0, 4.0),
            (-3.0, 4.0),
            (f64::NAN, 4.0),
            (10.0, f64::INFINITY),
            (1e-12, 1e-12),
        ];
        for (l, w) in cases {
            let area = estimate_foot_area(l, w);
            let perimeter = estimate_shoe_perimeter(l, w);
            assert!(area.is_finite() && area >= 0.0, "area for ({}, {}) = {}", l, w, area);
            assert!(
                perimeter.is_finite() && perimeter >= 0.0,
                "perimeter for ({}, {}) = {}",
                l,
                w,
                perimeter
            );
        }
    }
}
