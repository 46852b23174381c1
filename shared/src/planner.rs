//! Crop recommendation pipeline
//!
//! `score` -> `classify` -> `rank`. Every step is a pure function over its
//! inputs and the constant candidate table, so the pipeline is safe to call
//! from any number of threads at once.
//!
//! The location hash is a placeholder for a real agronomic model: it only
//! ties results deterministically to a location.

use crate::error::PlannerError;
use crate::models::{
    CropCandidate, CropRecommendation, ScoredCrop, SeasonalFit, SoilSuitability,
    WaterRequirement, DEFAULT_CANDIDATES,
};
use crate::types::Location;

/// Lowest confidence the planner will report
pub const MIN_CONFIDENCE: u8 = 50;

/// Highest confidence the planner will report
pub const MAX_CONFIDENCE: u8 = 99;

/// Number of recommendations returned when the caller does not ask
pub const DEFAULT_LIMIT: i64 = 3;

// ============================================================================
// Scoring
// ============================================================================

/// Deterministic scalar in [0, 100) derived from a location.
///
/// Uses IEEE remainder (`%` on f64), which keeps the sign of the dividend;
/// the dividend is already non-negative here.
pub fn location_hash(location: &Location) -> f64 {
    (location.latitude * 10.0 + location.longitude).abs() % 100.0
}

/// Name length in UTF-16 code units, as a browser would count it
fn name_length(name: &str) -> f64 {
    name.encode_utf16().count() as f64
}

/// Per-crop adjustment in [-10, 10)
pub fn confidence_variation(location_hash: f64, crop_name: &str) -> f64 {
    ((location_hash + name_length(crop_name)) % 20.0) - 10.0
}

/// Clamp to [50, 99] then round half away from zero
fn finalize_confidence(raw: f64) -> u8 {
    let clamped = raw.clamp(f64::from(MIN_CONFIDENCE), f64::from(MAX_CONFIDENCE));
    clamped.round() as u8
}

/// Score every candidate for a location, preserving candidate order
pub fn score(location: &Location, candidates: &[CropCandidate]) -> Vec<ScoredCrop> {
    let hash = location_hash(location);
    candidates
        .iter()
        .map(|candidate| {
            let variation = confidence_variation(hash, candidate.name);
            let confidence = finalize_confidence(f64::from(candidate.base_confidence) + variation);
            ScoredCrop::new(candidate, confidence)
        })
        .collect()
}

// ============================================================================
// Classification
// ============================================================================

pub fn soil_suitability(confidence: u8) -> SoilSuitability {
    match confidence {
        c if c > 85 => SoilSuitability::High,
        c if c > 70 => SoilSuitability::Medium,
        _ => SoilSuitability::Low,
    }
}

pub fn seasonal_fit(confidence: u8) -> SeasonalFit {
    match confidence {
        c if c > 85 => SeasonalFit::Excellent,
        c if c > 75 => SeasonalFit::Good,
        _ => SeasonalFit::Fair,
    }
}

/// Water demand by crop identity; unknown crops are treated as low demand
pub fn water_requirement(crop_name: &str) -> WaterRequirement {
    match crop_name {
        "Rice" | "Maize" => WaterRequirement::High,
        "Wheat" | "Soybeans" => WaterRequirement::Moderate,
        _ => WaterRequirement::Low,
    }
}

/// Derive the categorical labels for a scored crop
pub fn classify(scored: &ScoredCrop) -> CropRecommendation {
    CropRecommendation {
        crop_name: scored.name.clone(),
        confidence: scored.confidence,
        soil_suitability: soil_suitability(scored.confidence),
        water_requirement: water_requirement(&scored.name),
        seasonal_fit: seasonal_fit(scored.confidence),
        localized: None,
    }
}

// ============================================================================
// Ranking
// ============================================================================

/// Sort descending by confidence and keep the first `limit` entries.
///
/// The sort is stable, so equal confidences keep candidate-table order.
pub fn rank(
    mut recommendations: Vec<CropRecommendation>,
    limit: i64,
) -> Result<Vec<CropRecommendation>, PlannerError> {
    let limit = usize::try_from(limit).map_err(|_| PlannerError::InvalidLimit(limit))?;
    recommendations.sort_by(|a, b| b.confidence.cmp(&a.confidence));
    recommendations.truncate(limit);
    Ok(recommendations)
}

// ============================================================================
// Pipeline
// ============================================================================

/// Full pipeline over an explicit candidate set
pub fn recommend(
    location: &Location,
    candidates: &[CropCandidate],
    limit: i64,
) -> Result<Vec<CropRecommendation>, PlannerError> {
    let classified = score(location, candidates).iter().map(classify).collect();
    rank(classified, limit)
}

/// Top three crops from the default candidate table
pub fn recommend_default(location: &Location) -> Vec<CropRecommendation> {
    let classified = score(location, DEFAULT_CANDIDATES).iter().map(classify).collect();
    // DEFAULT_LIMIT is non-negative
    rank(classified, DEFAULT_LIMIT).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn delhi() -> Location {
        Location::new(28.6, 77.2)
    }

    fn rec(name: &str, confidence: u8) -> CropRecommendation {
        classify(&ScoredCrop {
            name: name.to_string(),
            base_confidence: confidence,
            confidence,
        })
    }

    // ========================================================================
    // Scoring Tests
    // ========================================================================

    #[test]
    fn test_location_hash_delhi() {
        let hash = location_hash(&delhi());
        assert!((hash - 63.2).abs() < 1e-9, "hash was {}", hash);
    }

    #[test]
    fn test_location_hash_negative_sum_uses_abs() {
        // -2 * 10 + 5 = -15
        let hash = location_hash(&Location::new(-2.0, 5.0));
        assert_eq!(hash, 15.0);
    }

    #[test]
    fn test_location_hash_wraps_at_100() {
        // 45 * 10 + 60 = 510
        assert_eq!(location_hash(&Location::new(45.0, 60.0)), 10.0);
    }

    #[test]
    fn test_confidence_variation_wheat_delhi() {
        let variation = confidence_variation(location_hash(&delhi()), "Wheat");
        assert!((variation - (-1.8)).abs() < 1e-9, "variation was {}", variation);
    }

    #[test]
    fn test_confidence_variation_range() {
        for hash in [0.0, 5.5, 14.999, 63.2, 99.99] {
            for name in ["Rice", "Wheat", "Soybeans"] {
                let v = confidence_variation(hash, name);
                assert!((-10.0..10.0).contains(&v));
            }
        }
    }

    #[test]
    fn test_score_delhi() {
        let scored = score(&delhi(), DEFAULT_CANDIDATES);
        let confidences: Vec<(&str, u8)> =
            scored.iter().map(|s| (s.name.as_str(), s.confidence)).collect();
        assert_eq!(
            confidences,
            vec![
                ("Wheat", 90),
                ("Barley", 86),
                ("Maize", 73),
                ("Rice", 67),
                ("Soybeans", 66),
                ("Cotton", 59),
            ]
        );
    }

    #[test]
    fn test_score_origin() {
        let scored = score(&Location::new(0.0, 0.0), DEFAULT_CANDIDATES);
        let confidences: Vec<u8> = scored.iter().map(|s| s.confidence).collect();
        assert_eq!(confidences, vec![87, 83, 70, 64, 63, 56]);
    }

    #[test]
    fn test_score_rounds_half_up() {
        // hash 20.6 -> Wheat 92 + (25.6 % 20 - 10) = 87.6
        let scored = score(&Location::new(0.0, 20.6), &DEFAULT_CANDIDATES[..1]);
        assert_eq!(scored[0].confidence, 88);

        // hash 0.5 -> Rice 70 + (4.5 - 10) = 64.5
        let scored = score(&Location::new(0.0, 0.5), &[CropCandidate::new("Rice", 70)]);
        assert_eq!(scored[0].confidence, 65);
    }

    #[test]
    fn test_score_clamps_high() {
        // hash 14 -> Wheat variation (19 % 20) - 10 = 9 -> 101
        let scored = score(&Location::new(0.0, 14.0), &DEFAULT_CANDIDATES[..1]);
        assert_eq!(scored[0].confidence, MAX_CONFIDENCE);
    }

    #[test]
    fn test_score_clamps_low() {
        let candidates = [CropCandidate::new("Sorghum", 10)];
        let scored = score(&delhi(), &candidates);
        assert_eq!(scored[0].confidence, MIN_CONFIDENCE);
    }

    #[test]
    fn test_score_preserves_order() {
        let candidates = [CropCandidate::new("Cotton", 60), CropCandidate::new("Wheat", 92)];
        let scored = score(&delhi(), &candidates);
        assert_eq!(scored[0].name, "Cotton");
        assert_eq!(scored[1].name, "Wheat");
    }

    #[test]
    fn test_equal_hash_locations_score_identically() {
        // 1*10 + 5, 0.5*10 + 10, and |-2*10 + 5| all hash to 15
        let a = score(&Location::new(1.0, 5.0), DEFAULT_CANDIDATES);
        let b = score(&Location::new(0.5, 10.0), DEFAULT_CANDIDATES);
        let c = score(&Location::new(-2.0, 5.0), DEFAULT_CANDIDATES);
        assert_eq!(a, b);
        assert_eq!(a, c);
    }

    #[test]
    fn test_score_is_deterministic() {
        let location = Location::new(12.97, 77.59);
        assert_eq!(
            score(&location, DEFAULT_CANDIDATES),
            score(&location, DEFAULT_CANDIDATES)
        );
    }

    // ========================================================================
    // Classification Tests
    // ========================================================================

    #[test]
    fn test_soil_suitability_thresholds() {
        assert_eq!(soil_suitability(99), SoilSuitability::High);
        assert_eq!(soil_suitability(86), SoilSuitability::High);
        assert_eq!(soil_suitability(85), SoilSuitability::Medium);
        assert_eq!(soil_suitability(71), SoilSuitability::Medium);
        assert_eq!(soil_suitability(70), SoilSuitability::Low);
        assert_eq!(soil_suitability(50), SoilSuitability::Low);
    }

    #[test]
    fn test_seasonal_fit_thresholds() {
        assert_eq!(seasonal_fit(86), SeasonalFit::Excellent);
        assert_eq!(seasonal_fit(85), SeasonalFit::Good);
        assert_eq!(seasonal_fit(76), SeasonalFit::Good);
        assert_eq!(seasonal_fit(75), SeasonalFit::Fair);
        assert_eq!(seasonal_fit(50), SeasonalFit::Fair);
    }

    #[test]
    fn test_water_requirement_by_crop() {
        assert_eq!(water_requirement("Rice"), WaterRequirement::High);
        assert_eq!(water_requirement("Maize"), WaterRequirement::High);
        assert_eq!(water_requirement("Wheat"), WaterRequirement::Moderate);
        assert_eq!(water_requirement("Soybeans"), WaterRequirement::Moderate);
        assert_eq!(water_requirement("Barley"), WaterRequirement::Low);
        assert_eq!(water_requirement("Cotton"), WaterRequirement::Low);
        assert_eq!(water_requirement("Millet"), WaterRequirement::Low);
    }

    #[test]
    fn test_classify_is_idempotent() {
        let scored = ScoredCrop::new(&DEFAULT_CANDIDATES[2], 73);
        let first = classify(&scored);
        assert_eq!(first, classify(&scored));
        assert_eq!(first.soil_suitability, SoilSuitability::Medium);
        assert_eq!(first.water_requirement, WaterRequirement::High);
        assert_eq!(first.seasonal_fit, SeasonalFit::Fair);
    }

    // ========================================================================
    // Ranking Tests
    // ========================================================================

    #[test]
    fn test_rank_sorts_descending() {
        let ranked = rank(vec![rec("Rice", 60), rec("Wheat", 90), rec("Maize", 75)], 3).unwrap();
        let names: Vec<&str> = ranked.iter().map(|r| r.crop_name.as_str()).collect();
        assert_eq!(names, vec!["Wheat", "Maize", "Rice"]);
    }

    #[test]
    fn test_rank_ties_keep_input_order() {
        let ranked = rank(
            vec![rec("Barley", 80), rec("Wheat", 80), rec("Cotton", 90), rec("Rice", 80)],
            4,
        )
        .unwrap();
        let names: Vec<&str> = ranked.iter().map(|r| r.crop_name.as_str()).collect();
        assert_eq!(names, vec!["Cotton", "Barley", "Wheat", "Rice"]);
    }

    #[test]
    fn test_rank_truncates() {
        let recs = vec![rec("Wheat", 90), rec("Barley", 86), rec("Maize", 73), rec("Rice", 67)];
        assert_eq!(rank(recs.clone(), 2).unwrap().len(), 2);
        assert_eq!(rank(recs, 10).unwrap().len(), 4);
    }

    #[test]
    fn test_rank_zero_limit_is_empty() {
        let ranked = rank(vec![rec("Wheat", 90)], 0).unwrap();
        assert!(ranked.is_empty());
    }

    #[test]
    fn test_rank_negative_limit() {
        assert_eq!(
            rank(vec![rec("Wheat", 90)], -1),
            Err(PlannerError::InvalidLimit(-1))
        );
    }

    // ========================================================================
    // Pipeline Tests
    // ========================================================================

    #[test]
    fn test_recommend_delhi() {
        let recs = recommend_default(&delhi());
        assert_eq!(recs.len(), 3);

        assert_eq!(recs[0].crop_name, "Wheat");
        assert_eq!(recs[0].confidence, 90);
        assert_eq!(recs[0].soil_suitability, SoilSuitability::High);
        assert_eq!(recs[0].water_requirement, WaterRequirement::Moderate);
        assert_eq!(recs[0].seasonal_fit, SeasonalFit::Excellent);

        assert_eq!(recs[1].crop_name, "Barley");
        assert_eq!(recs[1].confidence, 86);
        assert_eq!(recs[1].soil_suitability, SoilSuitability::High);

        assert_eq!(recs[2].crop_name, "Maize");
        assert_eq!(recs[2].confidence, 73);
        assert_eq!(recs[2].soil_suitability, SoilSuitability::Medium);
        assert_eq!(recs[2].seasonal_fit, SeasonalFit::Fair);
    }

    #[test]
    fn test_recommend_custom_candidates_ties() {
        // Same base and same name length give identical confidences
        let candidates = [
            CropCandidate::new("Okra", 70),
            CropCandidate::new("Jute", 70),
            CropCandidate::new("Teff", 70),
        ];
        let recs = recommend(&delhi(), &candidates, 3).unwrap();
        let names: Vec<&str> = recs.iter().map(|r| r.crop_name.as_str()).collect();
        assert_eq!(names, vec!["Okra", "Jute", "Teff"]);
    }

    #[test]
    fn test_recommend_limit_zero() {
        assert!(recommend(&delhi(), DEFAULT_CANDIDATES, 0).unwrap().is_empty());
    }

    #[test]
    fn test_recommend_invalid_limit() {
        assert_eq!(
            recommend(&delhi(), DEFAULT_CANDIDATES, -3),
            Err(PlannerError::InvalidLimit(-3))
        );
    }
}
