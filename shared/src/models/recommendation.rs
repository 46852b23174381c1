//! Crop recommendation output models

use serde::{Deserialize, Serialize};

/// How well the soil at a location suits a crop
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SoilSuitability {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for SoilSuitability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SoilSuitability::Low => write!(f, "Low"),
            SoilSuitability::Medium => write!(f, "Medium"),
            SoilSuitability::High => write!(f, "High"),
        }
    }
}

/// Irrigation demand of a crop
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum WaterRequirement {
    Low,
    Moderate,
    High,
}

impl std::fmt::Display for WaterRequirement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WaterRequirement::Low => write!(f, "Low"),
            WaterRequirement::Moderate => write!(f, "Moderate"),
            WaterRequirement::High => write!(f, "High"),
        }
    }
}

/// Fit of a crop with the current growing season
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SeasonalFit {
    Fair,
    Good,
    Excellent,
}

impl std::fmt::Display for SeasonalFit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SeasonalFit::Fair => write!(f, "Fair"),
            SeasonalFit::Good => write!(f, "Good"),
            SeasonalFit::Excellent => write!(f, "Excellent"),
        }
    }
}

/// A ranked crop suitability record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CropRecommendation {
    pub crop_name: String,
    /// 50-99
    pub confidence: u8,
    pub soil_suitability: SoilSuitability,
    pub water_requirement: WaterRequirement,
    pub seasonal_fit: SeasonalFit,
    /// Translated labels, present for non-English requests
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub localized: Option<LocalizedLabels>,
}

/// Display labels for a recommendation in the requested language
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LocalizedLabels {
    pub language: String,
    pub crop_name: String,
    pub soil_suitability: String,
    pub water_requirement: String,
    pub seasonal_fit: String,
}
