//! Crop candidate reference data

use serde::{Deserialize, Serialize};

/// A crop the planner can recommend, with its location-independent base score
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct CropCandidate {
    pub name: &'static str,
    /// Base confidence, 0-100
    pub base_confidence: u8,
}

impl CropCandidate {
    pub const fn new(name: &'static str, base_confidence: u8) -> Self {
        Self {
            name,
            base_confidence,
        }
    }
}

/// Candidate table consulted for every recommendation, in tie-break order
pub const DEFAULT_CANDIDATES: &[CropCandidate] = &[
    CropCandidate::new("Wheat", 92),
    CropCandidate::new("Barley", 87),
    CropCandidate::new("Maize", 75),
    CropCandidate::new("Rice", 70),
    CropCandidate::new("Soybeans", 65),
    CropCandidate::new("Cotton", 60),
];

/// A candidate after location scoring
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScoredCrop {
    pub name: String,
    pub base_confidence: u8,
    /// Clamped to 50-99
    pub confidence: u8,
}

impl ScoredCrop {
    pub fn new(candidate: &CropCandidate, confidence: u8) -> Self {
        Self {
            name: candidate.name.to_string(),
            base_confidence: candidate.base_confidence,
            confidence,
        }
    }
}
