use serde::{Deserialize, Serialize};
use validator::Validate;

/// Physical dimensions of a bare foot, in inches and square inches.
///
/// Length and width are optional so that an incomplete measurement from the
/// vision layer can still be passed through; the scorer treats a missing or
/// non-positive length/width as invalid input and scores it 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FootMeasurement {
    pub length: Option<f64>,
    pub width: Option<f64>,
    #[serde(default)]
    pub area: Option<f64>,
    #[serde(default)]
    pub perimeter: Option<f64>,
}

impl FootMeasurement {
    pub fn new(length: f64, width: f64) -> Self {
        Self {
            length: Some(length),
            width: Some(width),
            area: None,
            perimeter: None,
        }
    }

    pub fn with_area(mut self, area: f64) -> Self {
        self.area = Some(area);
        self
    }

    pub fn with_perimeter(mut self, perimeter: f64) -> Self {
        self.perimeter = Some(perimeter);
        self
    }
}

/// Interior (insole) cavity of a shoe. Same shape as [`FootMeasurement`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ShoeMeasurement {
    pub length: Option<f64>,
    pub width: Option<f64>,
    #[serde(default)]
    pub area: Option<f64>,
    #[serde(default)]
    pub perimeter: Option<f64>,
}

impl ShoeMeasurement {
    pub fn new(length: f64, width: f64) -> Self {
        Self {
            length: Some(length),
            width: Some(width),
            area: None,
            perimeter: None,
        }
    }

    pub fn with_area(mut self, area: f64) -> Self {
        self.area = Some(area);
        self
    }

    pub fn with_perimeter(mut self, perimeter: f64) -> Self {
        self.perimeter = Some(perimeter);
        self
    }

    /// Fully populated constructor, used by the dimension resolver.
    pub fn complete(length: f64, width: f64, area: f64, perimeter: f64) -> Self {
        Self {
            length: Some(length),
            width: Some(width),
            area: Some(area),
            perimeter: Some(perimeter),
        }
    }
}

/// Shoe category, selecting a clearance profile
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShoeType {
    #[default]
    Casual,
    Running,
    Hiking,
    Work,
}

impl ShoeType {
    /// Permissive parse: unknown, empty or missing labels fall back to `Casual`.
    pub fn from_label(label: Option<&str>) -> Self {
        match label.map(|l| l.trim().to_ascii_lowercase()).as_deref() {
            Some("running") => ShoeType::Running,
            Some("hiking") => ShoeType::Hiking,
            Some("work") => ShoeType::Work,
            _ => ShoeType::Casual,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ShoeType::Casual => "casual",
            ShoeType::Running => "running",
            ShoeType::Hiking => "hiking",
            ShoeType::Work => "work",
        }
    }
}

impl From<&str> for ShoeType {
    fn from(label: &str) -> Self {
        Self::from_label(Some(label))
    }
}

/// Width category printed on a shoe box
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidthCategory {
    Narrow,
    Regular,
    Wide,
}

impl WidthCategory {
    /// Accepts the catalog codes (`N`, `D`, `W`) or the full names.
    pub fn parse(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "n" | "narrow" => Some(WidthCategory::Narrow),
            "d" | "m" | "regular" | "medium" => Some(WidthCategory::Regular),
            "w" | "wide" => Some(WidthCategory::Wide),
            _ => None,
        }
    }
}

/// Extra room a shoe of a given type must provide over the bare foot.
///
/// `length`, `width` and `perimeter` are additive (inches); `area` is a
/// multiplicative fraction of the foot area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClearanceProfile {
    pub length: f64,
    pub width: f64,
    pub perimeter: f64,
    pub area: f64,
}

/// Categorical band for a fit score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FitCategory {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl FitCategory {
    pub fn details(&self) -> &'static str {
        match self {
            FitCategory::Excellent => "Perfect fit with proper toe room",
            FitCategory::Good => "Good fit with adequate comfort",
            FitCategory::Fair => "Acceptable fit, may need consideration",
            FitCategory::Poor => "Poor fit, not recommended",
        }
    }
}

/// Score thresholds for the fit categories
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitThresholds {
    pub excellent: f64,
    pub good: f64,
    pub fair: f64,
}

impl FitThresholds {
    pub fn categorize(&self, score: f64) -> FitCategory {
        if score >= self.excellent {
            FitCategory::Excellent
        } else if score >= self.good {
            FitCategory::Good
        } else if score >= self.fair {
            FitCategory::Fair
        } else {
            FitCategory::Poor
        }
    }
}

impl Default for FitThresholds {
    fn default() -> Self {
        Self {
            excellent: 85.0,
            good: 65.0,
            fair: 45.0,
        }
    }
}

/// Scoring weights
#[derive(Debug, Clone, Copy)]
pub struct ScoringWeights {
    pub length: f64,
    pub width: f64,
    pub perimeter: f64,
    pub area: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            length: 0.375,
            width: 0.275,
            perimeter: 0.225,
            area: 0.125,
        }
    }
}

/// Per-axis sub-scores behind a composite fit score, each in [0, 100]
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SubScores {
    pub length: f64,
    pub width: f64,
    pub perimeter: f64,
    pub area: f64,
}

/// Shoe catalog entry as supplied by the persistence layer
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ShoeRecord {
    pub id: u64,
    #[validate(length(min = 1))]
    pub company: String,
    #[validate(length(min = 1))]
    pub model: String,
    #[serde(default)]
    pub gender: Option<String>,
    #[validate(range(min = 0.0))]
    pub us_size: f64,
    #[serde(default)]
    pub width_category: Option<String>,
    #[serde(default, alias = "shoe_type")]
    pub function: Option<String>,
    #[validate(range(min = 0.0))]
    pub price_usd: f64,
    #[validate(url)]
    #[serde(default)]
    pub product_url: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub shoe_image_url: Option<String>,
    #[serde(default)]
    pub insole_length: Option<f64>,
    #[serde(default)]
    pub insole_width: Option<f64>,
    #[serde(default)]
    pub insole_area: Option<f64>,
    #[serde(default)]
    pub insole_perimeter: Option<f64>,
}

impl ShoeRecord {
    pub fn shoe_type(&self) -> ShoeType {
        ShoeType::from_label(self.function.as_deref())
    }

    /// Stored insole measurements, possibly incomplete
    pub fn stored_measurement(&self) -> ShoeMeasurement {
        ShoeMeasurement {
            length: self.insole_length,
            width: self.insole_width,
            area: self.insole_area,
            perimeter: self.insole_perimeter,
        }
    }
}

fn default_true() -> bool { true }

/// Processing state of an uploaded foot image
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanStatus {
    #[default]
    Processing,
    Complete,
    Error,
}

/// A processed foot image and the dimensions extracted from it
///
/// `perimeter_inches` is a single circumference of the outline, as measured
/// (about 25 in for an adult foot). The geometric estimators report a doubled
/// perimeter, so a measured value is only comparable against a measured
/// insole perimeter; against a resolver-estimated insole the perimeter curve
/// bottoms out.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FootScan {
    pub id: u64,
    #[serde(default)]
    pub status: ScanStatus,
    #[serde(default)]
    pub length_inches: Option<f64>,
    #[serde(default)]
    pub width_inches: Option<f64>,
    #[serde(default)]
    pub area_sq_inches: Option<f64>,
    #[serde(default)]
    pub perimeter_inches: Option<f64>,
    pub uploaded_at: chrono::DateTime<chrono::Utc>,
    #[serde(default)]
    pub error_message: Option<String>,
}

impl FootScan {
    pub fn measurement(&self) -> FootMeasurement {
        FootMeasurement {
            length: self.length_inches,
            width: self.width_inches,
            area: self.area_sq_inches,
            perimeter: self.perimeter_inches,
        }
    }
}

/// Scored catalog entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredShoe {
    #[serde(flatten)]
    pub shoe: ShoeRecord,
    pub fit_score: f64,
    pub fit_category: FitCategory,
    pub fit_details: String,
    pub sub_scores: SubScores,
    pub resolved_dimensions: ShoeMeasurement,
}
