//! Parser for CVSS 2.0 vectors, with or without the `CVSS:2` prefix.

use crate::errors::CvssError;
use crate::models::v2::{
    decode, AccessComplexity, AccessVector, Authentication, CollateralDamagePotential,
    Cvss2Metrics, Exploitability, Impact, RemediationLevel, ReportConfidence,
    SecurityRequirement, TargetDistribution,
};
use crate::parsers::TokenMap;

/// Parse a token map into a resolved 2.0 metric set.
pub fn parse(tokens: &TokenMap<'_>) -> Result<Cvss2Metrics, CvssError> {
    Ok(Cvss2Metrics {
        access_vector: decode(AccessVector::from_code(tokens.require("AV")?), "AV")?,
        access_complexity: decode(AccessComplexity::from_code(tokens.require("AC")?), "AC")?,
        authentication: decode(Authentication::from_code(tokens.require("Au")?), "Au")?,
        confidentiality: decode(Impact::from_code(tokens.require("C")?), "C")?,
        integrity: decode(Impact::from_code(tokens.require("I")?), "I")?,
        availability: decode(Impact::from_code(tokens.require("A")?), "A")?,

        exploitability: optional(tokens, "E", Exploitability::from_code)?,
        remediation_level: optional(tokens, "RL", RemediationLevel::from_code)?,
        report_confidence: optional(tokens, "RC", ReportConfidence::from_code)?,

        collateral_damage_potential: optional(tokens, "CDP", CollateralDamagePotential::from_code)?,
        target_distribution: optional(tokens, "TD", TargetDistribution::from_code)?,
        confidentiality_requirement: optional(tokens, "CR", SecurityRequirement::from_code)?,
        integrity_requirement: optional(tokens, "IR", SecurityRequirement::from_code)?,
        availability_requirement: optional(tokens, "AR", SecurityRequirement::from_code)?,
    })
}

/// Resolve an optional metric; `from_code` maps the `ND` code itself.
fn optional<T: Default>(
    tokens: &TokenMap<'_>,
    metric: &'static str,
    from_code: fn(&str) -> Option<T>,
) -> Result<T, CvssError> {
    match tokens.optional(metric) {
        None => Ok(T::default()),
        Some(code) => decode(from_code(code), metric),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::tokenize;

    fn parse_vector(vector: &str) -> Result<Cvss2Metrics, CvssError> {
        parse(&tokenize(vector).unwrap())
    }

    #[test]
    fn full_temporal_environmental_vector() {
        let metrics = parse_vector(
            "AV:L/AC:H/Au:N/C:C/I:C/A:C/E:POC/RL:OF/RC:C/CDP:H/TD:H/CR:M/IR:M/AR:M",
        )
        .unwrap();
        assert_eq!(metrics.access_vector, AccessVector::Local);
        assert_eq!(metrics.exploitability, Exploitability::ProofOfConcept);
        assert_eq!(metrics.remediation_level, RemediationLevel::OfficialFix);
        assert_eq!(
            metrics.collateral_damage_potential,
            CollateralDamagePotential::High
        );
        assert_eq!(metrics.target_distribution, TargetDistribution::High);
    }

    #[test]
    fn optional_metrics_default_to_not_defined() {
        let metrics = parse_vector("AV:N/AC:L/Au:N/C:C/I:C/A:C").unwrap();
        assert_eq!(metrics.exploitability, Exploitability::NotDefined);
        assert_eq!(
            metrics.collateral_damage_potential,
            CollateralDamagePotential::NotDefined
        );
        assert_eq!(
            metrics.confidentiality_requirement,
            SecurityRequirement::NotDefined
        );
    }

    #[test]
    fn missing_authentication() {
        // A 3.x vector body fed to the v2 parser stops at the missing Au.
        let err = parse_vector("AV:N/AC:H/PR:H/UI:R/S:U/C:N/I:N/A:N").unwrap_err();
        assert_eq!(err, CvssError::MissingMetric("Au"));
    }

    #[test]
    fn physical_access_vector_is_rejected() {
        // AV:P exists only from 3.x onward.
        let err = parse_vector("AV:P/AC:H/PR:H/UI:R/S:U/C:N/I:N/A:N").unwrap_err();
        assert_eq!(err, CvssError::InvalidMetricValue("AV"));
    }

    #[test]
    fn v3_impact_codes_are_rejected() {
        let err = parse_vector("AV:N/AC:L/Au:N/C:H/I:N/A:N").unwrap_err();
        assert_eq!(err, CvssError::InvalidMetricValue("C"));
    }
}
