//! Metric enumerations and the resolved metric set for CVSS 3.0 / 3.1.
//!
//! The two 3.x revisions share metric families, codes and weights; they
//! differ only in one environmental formula branch, which lives in the
//! calculator. Every enum decodes its single-character vector code and maps
//! to the weight published in the specification.

use crate::errors::CvssError;

/// Attack Vector (AV).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackVector {
    Network,
    Adjacent,
    Local,
    Physical,
}

impl AttackVector {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "N" => Some(Self::Network),
            "A" => Some(Self::Adjacent),
            "L" => Some(Self::Local),
            "P" => Some(Self::Physical),
            _ => None,
        }
    }

    pub fn weight(self) -> f64 {
        match self {
            Self::Network => 0.85,
            Self::Adjacent => 0.62,
            Self::Local => 0.55,
            Self::Physical => 0.2,
        }
    }
}

/// Attack Complexity (AC).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackComplexity {
    Low,
    High,
}

impl AttackComplexity {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "L" => Some(Self::Low),
            "H" => Some(Self::High),
            _ => None,
        }
    }

    pub fn weight(self) -> f64 {
        match self {
            Self::Low => 0.77,
            Self::High => 0.44,
        }
    }
}

/// Privileges Required (PR). The Low/High weights depend on Scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrivilegesRequired {
    None,
    Low,
    High,
}

impl PrivilegesRequired {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "N" => Some(Self::None),
            "L" => Some(Self::Low),
            "H" => Some(Self::High),
            _ => None,
        }
    }

    pub fn weight(self, scope: Scope) -> f64 {
        match (self, scope) {
            (Self::None, _) => 0.85,
            (Self::Low, Scope::Unchanged) => 0.62,
            (Self::Low, Scope::Changed) => 0.68,
            (Self::High, Scope::Unchanged) => 0.27,
            (Self::High, Scope::Changed) => 0.5,
        }
    }
}

/// User Interaction (UI).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserInteraction {
    None,
    Required,
}

impl UserInteraction {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "N" => Some(Self::None),
            "R" => Some(Self::Required),
            _ => None,
        }
    }

    pub fn weight(self) -> f64 {
        match self {
            Self::None => 0.85,
            Self::Required => 0.62,
        }
    }
}

/// Scope (S).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    Unchanged,
    Changed,
}

impl Scope {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "U" => Some(Self::Unchanged),
            "C" => Some(Self::Changed),
            _ => None,
        }
    }

    pub fn is_changed(self) -> bool {
        self == Self::Changed
    }
}

/// Confidentiality / Integrity / Availability impact (C, I, A).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Impact {
    High,
    Low,
    None,
}

impl Impact {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "H" => Some(Self::High),
            "L" => Some(Self::Low),
            "N" => Some(Self::None),
            _ => None,
        }
    }

    pub fn weight(self) -> f64 {
        match self {
            Self::High => 0.56,
            Self::Low => 0.22,
            Self::None => 0.0,
        }
    }
}

/// Exploit Code Maturity (E). Absent or `X` is neutral.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExploitCodeMaturity {
    #[default]
    NotDefined,
    High,
    Functional,
    ProofOfConcept,
    Unproven,
}

impl ExploitCodeMaturity {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "X" => Some(Self::NotDefined),
            "H" => Some(Self::High),
            "F" => Some(Self::Functional),
            "P" => Some(Self::ProofOfConcept),
            "U" => Some(Self::Unproven),
            _ => None,
        }
    }

    pub fn weight(self) -> f64 {
        match self {
            Self::NotDefined | Self::High => 1.0,
            Self::Functional => 0.97,
            Self::ProofOfConcept => 0.94,
            Self::Unproven => 0.91,
        }
    }
}

/// Remediation Level (RL). Absent or `X` is neutral.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RemediationLevel {
    #[default]
    NotDefined,
    Unavailable,
    Workaround,
    TemporaryFix,
    OfficialFix,
}

impl RemediationLevel {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "X" => Some(Self::NotDefined),
            "U" => Some(Self::Unavailable),
            "W" => Some(Self::Workaround),
            "T" => Some(Self::TemporaryFix),
            "O" => Some(Self::OfficialFix),
            _ => None,
        }
    }

    pub fn weight(self) -> f64 {
        match self {
            Self::NotDefined | Self::Unavailable => 1.0,
            Self::Workaround => 0.97,
            Self::TemporaryFix => 0.96,
            Self::OfficialFix => 0.95,
        }
    }
}

/// Report Confidence (RC). Absent or `X` is neutral.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportConfidence {
    #[default]
    NotDefined,
    Confirmed,
    Reasonable,
    Unknown,
}

impl ReportConfidence {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "X" => Some(Self::NotDefined),
            "C" => Some(Self::Confirmed),
            "R" => Some(Self::Reasonable),
            "U" => Some(Self::Unknown),
            _ => None,
        }
    }

    pub fn weight(self) -> f64 {
        match self {
            Self::NotDefined | Self::Confirmed => 1.0,
            Self::Reasonable => 0.96,
            Self::Unknown => 0.92,
        }
    }
}

/// Security Requirement (CR, IR, AR). High raises the weight, Low lowers it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SecurityRequirement {
    #[default]
    NotDefined,
    High,
    Medium,
    Low,
}

impl SecurityRequirement {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "X" => Some(Self::NotDefined),
            "H" => Some(Self::High),
            "M" => Some(Self::Medium),
            "L" => Some(Self::Low),
            _ => None,
        }
    }

    pub fn weight(self) -> f64 {
        match self {
            Self::NotDefined | Self::Medium => 1.0,
            Self::High => 1.5,
            Self::Low => 0.5,
        }
    }
}

/// Which 3.x revision a metric set was parsed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Revision {
    V30,
    V31,
}

/// Resolved CVSS 3.x metric set.
///
/// Modified metrics hold their *effective* value: the base metric's value
/// when the modified one was absent or Not Defined, the modified value
/// otherwise. Calculators never re-apply defaulting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cvss3Metrics {
    pub revision: Revision,

    pub attack_vector: AttackVector,
    pub attack_complexity: AttackComplexity,
    pub privileges_required: PrivilegesRequired,
    pub user_interaction: UserInteraction,
    pub scope: Scope,
    pub confidentiality: Impact,
    pub integrity: Impact,
    pub availability: Impact,

    pub exploit_code_maturity: ExploitCodeMaturity,
    pub remediation_level: RemediationLevel,
    pub report_confidence: ReportConfidence,

    pub confidentiality_requirement: SecurityRequirement,
    pub integrity_requirement: SecurityRequirement,
    pub availability_requirement: SecurityRequirement,

    pub modified_attack_vector: AttackVector,
    pub modified_attack_complexity: AttackComplexity,
    pub modified_privileges_required: PrivilegesRequired,
    pub modified_user_interaction: UserInteraction,
    pub modified_scope: Scope,
    pub modified_confidentiality: Impact,
    pub modified_integrity: Impact,
    pub modified_availability: Impact,
}

/// Decode helper shared by the 3.x parser: maps a failed decode to the
/// metric that carried the bad code.
pub fn decode<T>(parsed: Option<T>, metric: &'static str) -> Result<T, CvssError> {
    parsed.ok_or(CvssError::InvalidMetricValue(metric))
}
