use crate::models::{ClearanceProfile, ShoeType};

const CASUAL: ClearanceProfile = ClearanceProfile {
    length: 0.25,
    width: 0.04,
    perimeter: 0.20,
    area: 0.10,
};
const RUNNING: ClearanceProfile = ClearanceProfile {
    length: 0.50,
    width: 0.08,
    perimeter: 0.40,
    area: 0.15,
};
const HIKING: ClearanceProfile = ClearanceProfile {
    length: 0.60,
    width: 0.12,
    perimeter: 0.60,
    area: 0.20,
};
const WORK: ClearanceProfile = ClearanceProfile {
    length: 0.40,
    width: 0.08,
    perimeter: 0.30,
    area: 0.12,
};

/// Required allowances for a shoe type
#[inline]
pub fn get_clearances(shoe_type: ShoeType) -> ClearanceProfile {
    match shoe_type {
        ShoeType::Casual => CASUAL,
        ShoeType::Running => RUNNING,
        ShoeType::Hiking => HIKING,
        ShoeType::Work => WORK,
    }
}
