//! Hindi and Kannada labels for planner output
//!
//! The portal serves English, Hindi, and Kannada speaking farmers. Wire values
//! stay in English; these tables only feed display labels.

use crate::models::{
    CropRecommendation, LocalizedLabels, SeasonalFit, SoilSuitability, WaterRequirement,
};
use crate::types::Language;

/// Crop names as (English, Hindi, Kannada)
const CROP_NAMES: &[(&str, &str, &str)] = &[
    ("Wheat", "गेहूं", "ಗೋಧಿ"),
    ("Barley", "जौ", "ಬಾರ್ಲಿ"),
    ("Maize", "मक्का", "ಮೆಕ್ಕೆಜೋಳ"),
    ("Rice", "धान", "ಭತ್ತ"),
    ("Soybeans", "सोयाबीन", "ಸೋಯಾಬೀನ್"),
    ("Cotton", "कपास", "ಹತ್ತಿ"),
];

fn pick(language: Language, en: &'static str, hi: &'static str, kn: &'static str) -> &'static str {
    match language {
        Language::English => en,
        Language::Hindi => hi,
        Language::Kannada => kn,
    }
}

/// Translate a crop name, falling back to the given name when unknown
pub fn localized_crop_name(name: &str, language: Language) -> String {
    CROP_NAMES
        .iter()
        .find(|(en, _, _)| en.eq_ignore_ascii_case(name))
        .map(|&(en, hi, kn)| pick(language, en, hi, kn).to_string())
        .unwrap_or_else(|| name.to_string())
}

impl SoilSuitability {
    pub fn label(&self, language: Language) -> &'static str {
        match self {
            SoilSuitability::Low => pick(language, "Low", "कम", "ಕಡಿಮೆ"),
            SoilSuitability::Medium => pick(language, "Medium", "मध्यम", "ಮಧ್ಯಮ"),
            SoilSuitability::High => pick(language, "High", "उच्च", "ಹೆಚ್ಚು"),
        }
    }
}

impl WaterRequirement {
    pub fn label(&self, language: Language) -> &'static str {
        match self {
            WaterRequirement::Low => pick(language, "Low", "कम", "ಕಡಿಮೆ"),
            WaterRequirement::Moderate => pick(language, "Moderate", "मध्यम", "ಮಧ್ಯಮ"),
            WaterRequirement::High => pick(language, "High", "अधिक", "ಹೆಚ್ಚು"),
        }
    }
}

impl SeasonalFit {
    pub fn label(&self, language: Language) -> &'static str {
        match self {
            SeasonalFit::Fair => pick(language, "Fair", "ठीक", "ಸಾಧಾರಣ"),
            SeasonalFit::Good => pick(language, "Good", "अच्छा", "ಉತ್ತಮ"),
            SeasonalFit::Excellent => pick(language, "Excellent", "उत्कृष्ट", "ಅತ್ಯುತ್ತಮ"),
        }
    }
}

/// Attach translated labels to a recommendation.
///
/// English recommendations are returned untouched.
pub fn localize(mut recommendation: CropRecommendation, language: Language) -> CropRecommendation {
    recommendation.localized = match language {
        Language::English => None,
        _ => Some(LocalizedLabels {
            language: language.code().to_string(),
            crop_name: localized_crop_name(&recommendation.crop_name, language),
            soil_suitability: recommendation.soil_suitability.label(language).to_string(),
            water_requirement: recommendation.water_requirement.label(language).to_string(),
            seasonal_fit: recommendation.seasonal_fit.label(language).to_string(),
        }),
    };
    recommendation
}
