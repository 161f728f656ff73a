//! Metric enumerations and the resolved metric set for CVSS 4.0.
//!
//! 4.0 has no additive weight tables. Each metric instead carries an ordinal
//! severity level (0 = most severe) used for macrovector classification and
//! severity-distance interpolation. The metric set stores *effective* values:
//! threat and environmental defaults (`E:X` → Attacked, `CR:X` → High,
//! `M<X>:X` → base value) are already applied.

use crate::errors::CvssError;

/// Attack Vector (AV / MAV).
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

    pub fn level(self) -> u8 {
        match self {
            Self::Network => 0,
            Self::Adjacent => 1,
            Self::Local => 2,
            Self::Physical => 3,
        }
    }
}

/// Attack Complexity (AC / MAC).
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

    pub fn level(self) -> u8 {
        match self {
            Self::Low => 0,
            Self::High => 1,
        }
    }
}

/// Attack Requirements (AT / MAT).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackRequirements {
    None,
    Present,
}

impl AttackRequirements {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "N" => Some(Self::None),
            "P" => Some(Self::Present),
            _ => None,
        }
    }

    pub fn level(self) -> u8 {
        match self {
            Self::None => 0,
            Self::Present => 1,
        }
    }
}

/// Privileges Required (PR / MPR).
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

    pub fn level(self) -> u8 {
        match self {
            Self::None => 0,
            Self::Low => 1,
            Self::High => 2,
        }
    }
}

/// User Interaction (UI / MUI).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserInteraction {
    None,
    Passive,
    Active,
}

impl UserInteraction {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "N" => Some(Self::None),
            "P" => Some(Self::Passive),
            "A" => Some(Self::Active),
            _ => None,
        }
    }

    pub fn level(self) -> u8 {
        match self {
            Self::None => 0,
            Self::Passive => 1,
            Self::Active => 2,
        }
    }
}

/// Vulnerable system impact (VC, VI, VA and their modified forms).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VulnerableImpact {
    High,
    Low,
    None,
}

impl VulnerableImpact {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "H" => Some(Self::High),
            "L" => Some(Self::Low),
            "N" => Some(Self::None),
            _ => None,
        }
    }

    pub fn level(self) -> u8 {
        match self {
            Self::High => 0,
            Self::Low => 1,
            Self::None => 2,
        }
    }
}

/// Subsequent system impact (SC, SI, SA and their modified forms).
///
/// `Safety` is only reachable through `MSI:S` / `MSA:S`; the parser rejects
/// it everywhere else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubsequentImpact {
    Safety,
    High,
    Low,
    None,
}

impl SubsequentImpact {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "S" => Some(Self::Safety),
            "H" => Some(Self::High),
            "L" => Some(Self::Low),
            "N" => Some(Self::None),
            _ => None,
        }
    }

    pub fn level(self) -> u8 {
        match self {
            Self::Safety => 0,
            Self::High => 1,
            Self::Low => 2,
            Self::None => 3,
        }
    }
}

/// Exploit Maturity (E). Absent or `X` defaults to Attacked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Exploitation {
    #[default]
    Attacked,
    ProofOfConcept,
    Unproven,
}

impl Exploitation {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "X" | "A" => Some(Self::Attacked),
            "P" => Some(Self::ProofOfConcept),
            "U" => Some(Self::Unproven),
            _ => None,
        }
    }

    pub fn level(self) -> u8 {
        match self {
            Self::Attacked => 0,
            Self::ProofOfConcept => 1,
            Self::Unproven => 2,
        }
    }
}

/// Security Requirement (CR, IR, AR). Absent or `X` defaults to High.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Requirement {
    #[default]
    High,
    Medium,
    Low,
}

impl Requirement {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "X" | "H" => Some(Self::High),
            "M" => Some(Self::Medium),
            "L" => Some(Self::Low),
            _ => None,
        }
    }

    pub fn level(self) -> u8 {
        match self {
            Self::High => 0,
            Self::Medium => 1,
            Self::Low => 2,
        }
    }
}

/// Resolved CVSS 4.0 metric set (effective values throughout).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cvss4Metrics {
    pub attack_vector: AttackVector,
    pub attack_complexity: AttackComplexity,
    pub attack_requirements: AttackRequirements,
    pub privileges_required: PrivilegesRequired,
    pub user_interaction: UserInteraction,

    pub vuln_confidentiality: VulnerableImpact,
    pub vuln_integrity: VulnerableImpact,
    pub vuln_availability: VulnerableImpact,
    pub sub_confidentiality: SubsequentImpact,
    pub sub_integrity: SubsequentImpact,
    pub sub_availability: SubsequentImpact,

    pub exploitation: Exploitation,
    pub confidentiality_requirement: Requirement,
    pub integrity_requirement: Requirement,
    pub availability_requirement: Requirement,
}

impl Cvss4Metrics {
    /// True when every impact metric is None; such vectors score 0.0
    /// without consulting the lookup table.
    pub fn has_no_impact(&self) -> bool {
        self.vuln_confidentiality == VulnerableImpact::None
            && self.vuln_integrity == VulnerableImpact::None
            && self.vuln_availability == VulnerableImpact::None
            && self.sub_confidentiality == SubsequentImpact::None
            && self.sub_integrity == SubsequentImpact::None
            && self.sub_availability == SubsequentImpact::None
    }
}

/// Decode helper shared by the v4 parser.
pub fn decode<T>(parsed: Option<T>, metric: &'static str) -> Result<T, CvssError> {
    parsed.ok_or(CvssError::InvalidMetricValue(metric))
}
