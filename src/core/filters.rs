use crate::core::penalties::usable;
use crate::models::{FootScan, ScanStatus, ShoeRecord};

/// Check if a catalog entry should take part in a recommendation pass
#[inline]
pub fn is_recommendable(shoe: &ShoeRecord, include_inactive: bool) -> bool {
    shoe.is_active || include_inactive
}

/// Most recently uploaded foot scan that finished processing with a usable
/// length and width. `None` is the "no measurement" condition: callers report
/// it instead of scoring.
pub fn latest_complete_scan(scans: &[FootScan]) -> Option<&FootScan> {
    scans
        .iter()
        .filter(|scan| scan.status == ScanStatus::Complete)
        .filter(|scan| usable(scan.length_inches).is_some() && usable(scan.width_inches).is_some())
        .max_by_key(|scan| scan.uploaded_at)
}

/// Active shoes whose stored insole length and width are both within
/// `tolerance` inches of the foot, cheapest first.
///
/// Shoes without stored insole measurements are never matched here.
pub fn within_tolerance<'a>(
    foot_length: f64,
    foot_width: f64,
    catalog: &'a [ShoeRecord],
    tolerance: f64,
) -> Vec<&'a ShoeRecord> {
    let mut matches: Vec<&ShoeRecord> = catalog
        .iter()
        .filter(|shoe| shoe.is_active)
        .filter(|shoe| match (usable(shoe.insole_length), usable(shoe.insole_width)) {
            (Some(length), Some(width)) => {
                (length - foot_length).abs() <= tolerance && (width - foot_width).abs() <= tolerance
            }
            _ => false,
        })
        .collect();

    matches.sort_by(|a, b| {
        a.price_usd
            .partial_cmp(&b.price_usd)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    matches
}
