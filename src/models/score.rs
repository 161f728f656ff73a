//! The immutable score triple produced by every calculator.

use serde::{Deserialize, Serialize};

/// Computed CVSS scores, each in [0.0, 10.0] with one decimal of precision.
///
/// CVSS 4.0 produces a single score; its result carries the same value in
/// all three fields.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub base_score: f64,
    pub temporal_score: f64,
    pub environmental_score: f64,
}

impl ScoreResult {
    /// Build a result, clamping each score to the valid range.
    pub fn new(base_score: f64, temporal_score: f64, environmental_score: f64) -> Self {
        Self {
            base_score: base_score.clamp(0.0, 10.0),
            temporal_score: temporal_score.clamp(0.0, 10.0),
            environmental_score: environmental_score.clamp(0.0, 10.0),
        }
    }

    /// A result where all three scores are the same value (CVSS 4.0).
    pub fn uniform(score: f64) -> Self {
        Self::new(score, score, score)
    }

    /// Qualitative rating of the base score per the CVSS v3 rating scale.
    pub fn severity(&self) -> SeverityRating {
        SeverityRating::from_score(self.base_score)
    }
}

/// Qualitative severity rating bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeverityRating {
    None,
    Low,
    Medium,
    High,
    Critical,
}

impl SeverityRating {
    /// Map a numeric score to its rating band.
    pub fn from_score(score: f64) -> Self {
        if score >= 9.0 {
            Self::Critical
        } else if score >= 7.0 {
            Self::High
        } else if score >= 4.0 {
            Self::Medium
        } else if score > 0.0 {
            Self::Low
        } else {
            Self::None
        }
    }
}

impl std::fmt::Display for SeverityRating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "None"),
            Self::Low => write!(f, "Low"),
            Self::Medium => write!(f, "Medium"),
            Self::High => write!(f, "High"),
            Self::Critical => write!(f, "Critical"),
        }
    }
}
