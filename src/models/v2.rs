//! Metric enumerations and the resolved metric set for CVSS 2.0.
//!
//! Unlike 3.x, several v2 codes are multi-character (`POC`, `OF`, `UC`,
//! `LM`, `ND`). Temporal and environmental metrics treat `ND` the same as
//! an absent metric.

use crate::errors::CvssError;

/// Access Vector (AV).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessVector {
    Local,
    AdjacentNetwork,
    Network,
}

impl AccessVector {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "L" => Some(Self::Local),
            "A" => Some(Self::AdjacentNetwork),
            "N" => Some(Self::Network),
            _ => None,
        }
    }

    pub fn weight(self) -> f64 {
        match self {
            Self::Local => 0.395,
            Self::AdjacentNetwork => 0.646,
            Self::Network => 1.0,
        }
    }
}

/// Access Complexity (AC).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessComplexity {
    High,
    Medium,
    Low,
}

impl AccessComplexity {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "H" => Some(Self::High),
            "M" => Some(Self::Medium),
            "L" => Some(Self::Low),
            _ => None,
        }
    }

    pub fn weight(self) -> f64 {
        match self {
            Self::High => 0.35,
            Self::Medium => 0.61,
            Self::Low => 0.71,
        }
    }
}

/// Authentication (Au).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Authentication {
    Multiple,
    Single,
    None,
}

impl Authentication {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "M" => Some(Self::Multiple),
            "S" => Some(Self::Single),
            "N" => Some(Self::None),
            _ => None,
        }
    }

    pub fn weight(self) -> f64 {
        match self {
            Self::Multiple => 0.45,
            Self::Single => 0.56,
            Self::None => 0.704,
        }
    }
}

/// Confidentiality / Integrity / Availability impact (C, I, A).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Impact {
    None,
    Partial,
    Complete,
}

impl Impact {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "N" => Some(Self::None),
            "P" => Some(Self::Partial),
            "C" => Some(Self::Complete),
            _ => None,
        }
    }

    pub fn weight(self) -> f64 {
        match self {
            Self::None => 0.0,
            Self::Partial => 0.275,
            Self::Complete => 0.660,
        }
    }
}

/// Exploitability (E). Absent or `ND` is neutral.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Exploitability {
    #[default]
    NotDefined,
    Unproven,
    ProofOfConcept,
    Functional,
    High,
}

impl Exploitability {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "ND" => Some(Self::NotDefined),
            "U" => Some(Self::Unproven),
            "POC" => Some(Self::ProofOfConcept),
            "F" => Some(Self::Functional),
            "H" => Some(Self::High),
            _ => None,
        }
    }

    pub fn weight(self) -> f64 {
        match self {
            Self::NotDefined | Self::High => 1.0,
            Self::Unproven => 0.85,
            Self::ProofOfConcept => 0.9,
            Self::Functional => 0.95,
        }
    }
}

/// Remediation Level (RL). Absent or `ND` is neutral.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RemediationLevel {
    #[default]
    NotDefined,
    OfficialFix,
    TemporaryFix,
    Workaround,
    Unavailable,
}

impl RemediationLevel {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "ND" => Some(Self::NotDefined),
            "OF" => Some(Self::OfficialFix),
            "TF" => Some(Self::TemporaryFix),
            "W" => Some(Self::Workaround),
            "U" => Some(Self::Unavailable),
            _ => None,
        }
    }

    pub fn weight(self) -> f64 {
        match self {
            Self::NotDefined | Self::Unavailable => 1.0,
            Self::OfficialFix => 0.87,
            Self::TemporaryFix => 0.90,
            Self::Workaround => 0.95,
        }
    }
}

/// Report Confidence (RC). Absent or `ND` is neutral.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportConfidence {
    #[default]
    NotDefined,
    Unconfirmed,
    Uncorroborated,
    Confirmed,
}

impl ReportConfidence {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "ND" => Some(Self::NotDefined),
            "UC" => Some(Self::Unconfirmed),
            "UR" => Some(Self::Uncorroborated),
            "C" => Some(Self::Confirmed),
            _ => None,
        }
    }

    pub fn weight(self) -> f64 {
        match self {
            Self::NotDefined | Self::Confirmed => 1.0,
            Self::Unconfirmed => 0.90,
            Self::Uncorroborated => 0.95,
        }
    }
}

/// Collateral Damage Potential (CDP). Absent, `ND` and `N` all weigh zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CollateralDamagePotential {
    #[default]
    NotDefined,
    None,
    Low,
    LowMedium,
    MediumHigh,
    High,
}

impl CollateralDamagePotential {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "ND" => Some(Self::NotDefined),
            "N" => Some(Self::None),
            "L" => Some(Self::Low),
            "LM" => Some(Self::LowMedium),
            "MH" => Some(Self::MediumHigh),
            "H" => Some(Self::High),
            _ => None,
        }
    }

    pub fn weight(self) -> f64 {
        match self {
            Self::NotDefined | Self::None => 0.0,
            Self::Low => 0.1,
            Self::LowMedium => 0.3,
            Self::MediumHigh => 0.4,
            Self::High => 0.5,
        }
    }
}

/// Target Distribution (TD). Absent or `ND` is neutral (full distribution).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TargetDistribution {
    #[default]
    NotDefined,
    None,
    Low,
    Medium,
    High,
}

impl TargetDistribution {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "ND" => Some(Self::NotDefined),
            "N" => Some(Self::None),
            "L" => Some(Self::Low),
            "M" => Some(Self::Medium),
            "H" => Some(Self::High),
            _ => None,
        }
    }

    pub fn weight(self) -> f64 {
        match self {
            Self::NotDefined | Self::High => 1.0,
            Self::None => 0.0,
            Self::Low => 0.25,
            Self::Medium => 0.75,
        }
    }
}

/// Security Requirement (CR, IR, AR).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SecurityRequirement {
    #[default]
    NotDefined,
    Low,
    Medium,
    High,
}

impl SecurityRequirement {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "ND" => Some(Self::NotDefined),
            "L" => Some(Self::Low),
            "M" => Some(Self::Medium),
            "H" => Some(Self::High),
            _ => None,
        }
    }

    pub fn weight(self) -> f64 {
        match self {
            Self::NotDefined | Self::Medium => 1.0,
            Self::Low => 0.5,
            Self::High => 1.51,
        }
    }
}

/// Resolved CVSS 2.0 metric set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cvss2Metrics {
    pub access_vector: AccessVector,
    pub access_complexity: AccessComplexity,
    pub authentication: Authentication,
    pub confidentiality: Impact,
    pub integrity: Impact,
    pub availability: Impact,

    pub exploitability: Exploitability,
    pub remediation_level: RemediationLevel,
    pub report_confidence: ReportConfidence,

    pub collateral_damage_potential: CollateralDamagePotential,
    pub target_distribution: TargetDistribution,
    pub confidentiality_requirement: SecurityRequirement,
    pub integrity_requirement: SecurityRequirement,
    pub availability_requirement: SecurityRequirement,
}

/// Decode helper shared by the v2 parser.
pub fn decode<T>(parsed: Option<T>, metric: &'static str) -> Result<T, CvssError> {
    parsed.ok_or(CvssError::InvalidMetricValue(metric))
}
