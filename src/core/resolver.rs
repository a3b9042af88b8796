use thiserror::Error;

use crate::core::geometry::{estimate_shoe_area, estimate_shoe_perimeter};
use crate::models::{ShoeMeasurement, ShoeRecord, WidthCategory};

/// Approximate insole length (inches) per US men's size, keyed by half-sizes
const US_SIZE_TO_LENGTH: [(f64, f64); 13] = [
    (7.0, 9.625),
    (7.5, 9.75),
    (8.0, 9.9375),
    (8.5, 10.125),
    (9.0, 10.25),
    (9.5, 10.4375),
    (10.0, 10.5625),
    (10.5, 10.75),
    (11.0, 10.9375),
    (11.5, 11.125),
    (12.0, 11.25),
    (12.5, 11.4375),
    (13.0, 11.625),
];

const DEFAULT_LENGTH: f64 = 10.0;
const DEFAULT_WIDTH: f64 = 3.6;

/// Returned when resolution fails for a record
pub const FALLBACK_DIMENSIONS: (f64, f64, f64, f64) = (10.0, 3.6, 27.0, 28.0);

/// Errors raised while resolving a shoe's dimensions
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("{field} is not a finite number: {value}")]
    NonFinite { field: &'static str, value: f64 },

    #[error("{field} resolved to a non-positive value: {value}")]
    NonPositive { field: &'static str, value: f64 },
}

/// Nominal insole length for a US size, rounded to the nearest half size
pub fn length_for_us_size(us_size: f64) -> f64 {
    if !us_size.is_finite() {
        return DEFAULT_LENGTH;
    }
    let rounded = (us_size * 2.0).round() / 2.0;
    US_SIZE_TO_LENGTH
        .iter()
        .find(|(size, _)| *size == rounded)
        .map(|(_, length)| *length)
        .unwrap_or(DEFAULT_LENGTH)
}

/// Nominal insole width for a width category code or name
pub fn width_for_category(category: Option<&str>) -> f64 {
    match category.and_then(WidthCategory::parse) {
        Some(WidthCategory::Narrow) => 3.4,
        Some(WidthCategory::Regular) => 3.6,
        Some(WidthCategory::Wide) => 3.8,
        None => DEFAULT_WIDTH,
    }
}

/// A stored value counts as measured only if it is positive. NaN and
/// infinities are surfaced as errors rather than silently dropped.
fn measured(field: &'static str, value: Option<f64>) -> Result<Option<f64>, ResolveError> {
    match value {
        Some(v) if !v.is_finite() => Err(ResolveError::NonFinite { field, value: v }),
        Some(v) if v > 0.0 => Ok(Some(v)),
        _ => Ok(None),
    }
}

fn ensure_positive(field: &'static str, value: f64) -> Result<f64, ResolveError> {
    if !value.is_finite() {
        Err(ResolveError::NonFinite { field, value })
    } else if value <= 0.0 {
        Err(ResolveError::NonPositive { field, value })
    } else {
        Ok(value)
    }
}

/// Resolve all four dimensions of a shoe, propagating internal errors
pub fn try_resolve_shoe_dimensions(shoe: &ShoeRecord) -> Result<ShoeMeasurement, ResolveError> {
    let stored = shoe.stored_measurement();
    let stored_length = measured("insole_length", stored.length)?;
    let stored_width = measured("insole_width", stored.width)?;

    let (length, width) = match (stored_length, stored_width) {
        (Some(length), Some(width)) => (length, width),
        _ => (
            length_for_us_size(shoe.us_size),
            width_for_category(shoe.width_category.as_deref()),
        ),
    };

    let area = match measured("insole_area", stored.area)? {
        Some(area) => area,
        None => estimate_shoe_area(length, width),
    };
    let perimeter = match measured("insole_perimeter", stored.perimeter)? {
        Some(perimeter) => perimeter,
        None => estimate_shoe_perimeter(length, width),
    };

    Ok(ShoeMeasurement::complete(
        ensure_positive("length", length)?,
        ensure_positive("width", width)?,
        ensure_positive("area", area)?,
        ensure_positive("perimeter", perimeter)?,
    ))
}

/// Resolve all four dimensions of a shoe.
///
/// Direct insole measurements win; otherwise length and width come from the
/// size and width-category tables. Missing area and perimeter are estimated
/// from the resolved length and width. Never fails: a record that cannot be
/// resolved is logged and gets [`FALLBACK_DIMENSIONS`].
pub fn resolve_shoe_dimensions(shoe: &ShoeRecord) -> ShoeMeasurement {
    match try_resolve_shoe_dimensions(shoe) {
        Ok(resolved) => resolved,
        Err(e) => {
            tracing::warn!(
                "Could not resolve dimensions for shoe {} ({} {}), using defaults: {}",
                shoe.id,
                shoe.company,
                shoe.model,
                e
            );
            let (length, width, area, perimeter) = FALLBACK_DIMENSIONS;
            ShoeMeasurement::complete(length, width, area, perimeter)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_shoe(us_size: f64, width_category: &str) -> ShoeRecord {
        ShoeRecord {
            id: 1,
            company: "Test".to_string(),
            model: "Runner".to_string(),
            gender: Some("M".to_string()),
            us_size,
            width_category: Some(width_category.to_string()),
            function: Some("running".to_string()),
            price_usd: 100.0,
            product_url: None,
            is_active: true,
            shoe_image_url: None,
            insole_length: None,
            insole_width: None,
            insole_area: None,
            insole_perimeter: None,
        }
    }

    #[test]
    fn test_size_table_lookup() {
        assert_eq!(length_for_us_size(7.0), 9.625);
        assert_eq!(length_for_us_size(10.5), 10.75);
        assert_eq!(length_for_us_size(13.0), 11.625);
        assert_eq!(length_for_us_size(10.4), 10.75);
        assert_eq!(length_for_us_size(5.0), 10.0);
        assert_eq!(length_for_us_size(f64::NAN), 10.0);
    }

    #[test]
    fn test_width_table_lookup() {
        assert_eq!(width_for_category(Some("N")), 3.4);
        assert_eq!(width_for_category(Some("D")), 3.6);
        assert_eq!(width_for_category(Some("W")), 3.8);
        assert_eq!(width_for_category(Some("EE")), 3.6);
        assert_eq!(width_for_category(None), 3.6);
    }

    #[test]
    fn test_direct_measurements_win() {
        let mut shoe = create_shoe(10.5, "D");
        shoe.insole_length = Some(10.8);
        shoe.insole_width = Some(4.2);
        shoe.insole_area = Some(45.0);
        shoe.insole_perimeter = Some(30.0);

        let resolved = resolve_shoe_dimensions(&shoe);
        assert_eq!(resolved, ShoeMeasurement::complete(10.8, 4.2, 45.0, 30.0));
        assert_eq!(shoe.stored_measurement(), resolved);
    }

    #[test]
    fn test_partial_measurements_are_estimated() {
        let mut shoe = create_shoe(10.0, "D");
        shoe.insole_length = Some(10.0);
        shoe.insole_width = Some(4.0);

        let resolved = resolve_shoe_dimensions(&shoe);
        assert_eq!(resolved.length, Some(10.0));
        assert_eq!(resolved.width, Some(4.0));
        assert_eq!(resolved.area, Some(estimate_shoe_area(10.0, 4.0)));
        assert_eq!(resolved.perimeter, Some(estimate_shoe_perimeter(10.0, 4.0)));
    }

    #[test]
    fn test_size_fallback_path() {
        let resolved = resolve_shoe_dimensions(&create_shoe(10.5, "D"));
        assert_eq!(resolved.length, Some(10.75));
        assert_eq!(resolved.width, Some(3.6));
        assert!(resolved.area.unwrap() > 0.0);
        assert!(resolved.perimeter.unwrap() > 0.0);
    }

    #[test]
    fn test_only_length_stored_uses_tables() {
        let mut shoe = create_shoe(11.0, "W");
        shoe.insole_length = Some(11.2);

        let resolved = resolve_shoe_dimensions(&shoe);
        assert_eq!(resolved.length, Some(10.9375));
        assert_eq!(resolved.width, Some(3.8));
    }

    #[test]
    fn test_non_finite_record_gets_defaults() {
        let mut shoe = create_shoe(10.0, "D");
        shoe.insole_length = Some(f64::NAN);
        shoe.insole_width = Some(4.0);

        assert!(try_resolve_shoe_dimensions(&shoe).is_err());
        assert_eq!(
            resolve_shoe_dimensions(&shoe),
            ShoeMeasurement::complete(10.0, 3.6, 27.0, 28.0)
        );
    }
}
