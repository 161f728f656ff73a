//! Parser for CVSS 4.0 vectors.
//!
//! Base, threat (E), environmental (CR/IR/AR and the Modified metrics) and
//! supplemental metric groups are all validated; supplemental metrics carry
//! no weight and are dropped after validation. The Safety value is legal
//! only on `MSI`/`MSA`.

use crate::errors::CvssError;
use crate::models::v4::{
    decode, AttackComplexity, AttackRequirements, AttackVector, Cvss4Metrics, Exploitation,
    PrivilegesRequired, Requirement, SubsequentImpact, UserInteraction, VulnerableImpact,
};
use crate::parsers::TokenMap;

/// Legal codes for the supplemental metric group (S, AU, R, V, RE, U).
const SUPPLEMENTAL: &[(&str, &[&str])] = &[
    ("S", &["X", "N", "P"]),
    ("AU", &["X", "N", "Y"]),
    ("R", &["X", "A", "U", "I"]),
    ("V", &["X", "D", "C"]),
    ("RE", &["X", "L", "M", "H"]),
    ("U", &["X", "Clear", "Green", "Amber", "Red"]),
];

/// Parse a token map into a resolved 4.0 metric set.
pub fn parse(tokens: &TokenMap<'_>) -> Result<Cvss4Metrics, CvssError> {
    let attack_vector = decode(AttackVector::from_code(tokens.require("AV")?), "AV")?;
    let attack_complexity = decode(AttackComplexity::from_code(tokens.require("AC")?), "AC")?;
    let attack_requirements =
        decode(AttackRequirements::from_code(tokens.require("AT")?), "AT")?;
    let privileges_required =
        decode(PrivilegesRequired::from_code(tokens.require("PR")?), "PR")?;
    let user_interaction = decode(UserInteraction::from_code(tokens.require("UI")?), "UI")?;

    let vuln_confidentiality = decode(VulnerableImpact::from_code(tokens.require("VC")?), "VC")?;
    let vuln_integrity = decode(VulnerableImpact::from_code(tokens.require("VI")?), "VI")?;
    let vuln_availability = decode(VulnerableImpact::from_code(tokens.require("VA")?), "VA")?;
    let sub_confidentiality = subsequent_base(tokens.require("SC")?, "SC")?;
    let sub_integrity = subsequent_base(tokens.require("SI")?, "SI")?;
    let sub_availability = subsequent_base(tokens.require("SA")?, "SA")?;

    for &(metric, codes) in SUPPLEMENTAL {
        if let Some(code) = tokens.optional(metric) {
            if !codes.contains(&code) {
                return Err(CvssError::InvalidMetricValue(metric));
            }
        }
    }

    Ok(Cvss4Metrics {
        attack_vector: effective(tokens, "MAV", attack_vector, AttackVector::from_code)?,
        attack_complexity: effective(tokens, "MAC", attack_complexity, AttackComplexity::from_code)?,
        attack_requirements: effective(
            tokens,
            "MAT",
            attack_requirements,
            AttackRequirements::from_code,
        )?,
        privileges_required: effective(
            tokens,
            "MPR",
            privileges_required,
            PrivilegesRequired::from_code,
        )?,
        user_interaction: effective(tokens, "MUI", user_interaction, UserInteraction::from_code)?,

        vuln_confidentiality: effective(
            tokens,
            "MVC",
            vuln_confidentiality,
            VulnerableImpact::from_code,
        )?,
        vuln_integrity: effective(tokens, "MVI", vuln_integrity, VulnerableImpact::from_code)?,
        vuln_availability: effective(
            tokens,
            "MVA",
            vuln_availability,
            VulnerableImpact::from_code,
        )?,
        sub_confidentiality: modified_subsequent(
            tokens,
            "MSC",
            sub_confidentiality,
            false,
        )?,
        sub_integrity: modified_subsequent(tokens, "MSI", sub_integrity, true)?,
        sub_availability: modified_subsequent(tokens, "MSA", sub_availability, true)?,

        exploitation: optional(tokens, "E", Exploitation::from_code)?,
        confidentiality_requirement: optional(tokens, "CR", Requirement::from_code)?,
        integrity_requirement: optional(tokens, "IR", Requirement::from_code)?,
        availability_requirement: optional(tokens, "AR", Requirement::from_code)?,
    })
}

/// Decode a base subsequent-impact metric; Safety is not a base code.
fn subsequent_base(code: &str, metric: &'static str) -> Result<SubsequentImpact, CvssError> {
    match decode(SubsequentImpact::from_code(code), metric)? {
        SubsequentImpact::Safety => Err(CvssError::InvalidMetricValue(metric)),
        value => Ok(value),
    }
}

/// Resolve a modified subsequent-impact metric to its effective value.
fn modified_subsequent(
    tokens: &TokenMap<'_>,
    metric: &'static str,
    base: SubsequentImpact,
    safety_allowed: bool,
) -> Result<SubsequentImpact, CvssError> {
    match tokens.optional(metric) {
        None | Some("X") => Ok(base),
        Some(code) => match decode(SubsequentImpact::from_code(code), metric)? {
            SubsequentImpact::Safety if !safety_allowed => {
                Err(CvssError::InvalidMetricValue(metric))
            }
            value => Ok(value),
        },
    }
}

/// Resolve an optional metric whose `from_code` already folds `X` into the
/// 4.0 default (E → Attacked, CR/IR/AR → High).
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

/// Resolve a Modified metric to its effective value.
fn effective<T: Copy>(
    tokens: &TokenMap<'_>,
    metric: &'static str,
    base: T,
    from_code: fn(&str) -> Option<T>,
) -> Result<T, CvssError> {
    match tokens.optional(metric) {
        None | Some("X") => Ok(base),
        Some(code) => decode(from_code(code), metric),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::tokenize;

    fn parse_vector(vector: &str) -> Result<Cvss4Metrics, CvssError> {
        parse(&tokenize(vector).unwrap())
    }

    const BASE: &str = "CVSS:4.0/AV:L/AC:L/AT:P/PR:L/UI:N/VC:H/VI:H/VA:H/SC:N/SI:N/SA:N";

    #[test]
    fn base_vector_defaults() {
        let metrics = parse_vector(BASE).unwrap();
        assert_eq!(metrics.attack_vector, AttackVector::Local);
        assert_eq!(metrics.attack_requirements, AttackRequirements::Present);
        assert_eq!(metrics.exploitation, Exploitation::Attacked);
        assert_eq!(metrics.confidentiality_requirement, Requirement::High);
        assert_eq!(metrics.sub_integrity, SubsequentImpact::None);
    }

    #[test]
    fn modified_metrics_override() {
        let metrics = parse_vector(
            "CVSS:4.0/AV:N/AC:L/AT:P/PR:N/UI:N/VC:H/VI:L/VA:L/SC:N/SI:N/SA:N\
             /CR:H/IR:L/AR:L/MAV:N/MAC:H/MVC:H/MVI:L/MVA:L",
        )
        .unwrap();
        assert_eq!(metrics.attack_complexity, AttackComplexity::High);
        assert_eq!(metrics.vuln_confidentiality, VulnerableImpact::High);
        assert_eq!(metrics.integrity_requirement, Requirement::Low);
    }

    #[test]
    fn safety_is_legal_only_on_modified_subsequent() {
        let metrics = parse_vector(&format!("{BASE}/MSI:S")).unwrap();
        assert_eq!(metrics.sub_integrity, SubsequentImpact::Safety);

        let err = parse_vector(
            "CVSS:4.0/AV:L/AC:L/AT:P/PR:L/UI:N/VC:H/VI:H/VA:H/SC:N/SI:S/SA:N",
        )
        .unwrap_err();
        assert_eq!(err, CvssError::InvalidMetricValue("SI"));

        let err = parse_vector(&format!("{BASE}/MSC:S")).unwrap_err();
        assert_eq!(err, CvssError::InvalidMetricValue("MSC"));
    }

    #[test]
    fn supplemental_metrics_are_validated() {
        assert!(parse_vector(&format!("{BASE}/S:P/V:D/U:Green")).is_ok());
        let err = parse_vector(&format!("{BASE}/U:Purple")).unwrap_err();
        assert_eq!(err, CvssError::InvalidMetricValue("U"));
    }

    #[test]
    fn missing_required_metric() {
        let err =
            parse_vector("CVSS:4.0/AV:L/AC:L/AT:P/PR:L/UI:N/VC:H/VI:H/VA:H/SC:N/SI:N")
                .unwrap_err();
        assert_eq!(err, CvssError::MissingMetric("SA"));
    }

    #[test]
    fn v3_user_interaction_code_is_rejected() {
        // UI:R exists in 3.x but not in 4.0 (N/P/A).
        let err = parse_vector(
            "CVSS:4.0/AV:L/AC:L/AT:P/PR:L/UI:R/VC:H/VI:H/VA:H/SC:N/SI:N/SA:N",
        )
        .unwrap_err();
        assert_eq!(err, CvssError::InvalidMetricValue("UI"));
    }
}
