//! Parser for CVSS 3.0 / 3.1 vectors.
//!
//! Scope is resolved before Privileges Required in both the base and
//! modified directions, because the PR weight branches on the (possibly
//! modified) Scope. Every Modified metric resolves to its effective value:
//! the base metric when absent or `X`, the modified code otherwise.

use crate::errors::CvssError;
use crate::models::v3::{
    decode, AttackComplexity, AttackVector, Cvss3Metrics, ExploitCodeMaturity, Impact,
    PrivilegesRequired, RemediationLevel, ReportConfidence, Revision, Scope, SecurityRequirement,
    UserInteraction,
};
use crate::parsers::TokenMap;

/// Parse a token map into a resolved 3.x metric set.
pub fn parse(tokens: &TokenMap<'_>, revision: Revision) -> Result<Cvss3Metrics, CvssError> {
    let scope = decode(Scope::from_code(tokens.require("S")?), "S")?;
    let modified_scope = match tokens.optional("MS") {
        None | Some("X") => scope,
        Some(code) => decode(Scope::from_code(code), "MS")?,
    };

    let attack_vector = decode(AttackVector::from_code(tokens.require("AV")?), "AV")?;
    let attack_complexity = decode(AttackComplexity::from_code(tokens.require("AC")?), "AC")?;
    let privileges_required =
        decode(PrivilegesRequired::from_code(tokens.require("PR")?), "PR")?;
    let user_interaction = decode(UserInteraction::from_code(tokens.require("UI")?), "UI")?;
    let confidentiality = decode(Impact::from_code(tokens.require("C")?), "C")?;
    let integrity = decode(Impact::from_code(tokens.require("I")?), "I")?;
    let availability = decode(Impact::from_code(tokens.require("A")?), "A")?;

    Ok(Cvss3Metrics {
        revision,

        attack_vector,
        attack_complexity,
        privileges_required,
        user_interaction,
        scope,
        confidentiality,
        integrity,
        availability,

        exploit_code_maturity: optional(tokens, "E", ExploitCodeMaturity::from_code)?,
        remediation_level: optional(tokens, "RL", RemediationLevel::from_code)?,
        report_confidence: optional(tokens, "RC", ReportConfidence::from_code)?,

        confidentiality_requirement: optional(tokens, "CR", SecurityRequirement::from_code)?,
        integrity_requirement: optional(tokens, "IR", SecurityRequirement::from_code)?,
        availability_requirement: optional(tokens, "AR", SecurityRequirement::from_code)?,

        modified_attack_vector: effective(tokens, "MAV", attack_vector, AttackVector::from_code)?,
        modified_attack_complexity: effective(
            tokens,
            "MAC",
            attack_complexity,
            AttackComplexity::from_code,
        )?,
        modified_privileges_required: effective(
            tokens,
            "MPR",
            privileges_required,
            PrivilegesRequired::from_code,
        )?,
        modified_user_interaction: effective(
            tokens,
            "MUI",
            user_interaction,
            UserInteraction::from_code,
        )?,
        modified_scope,
        modified_confidentiality: effective(tokens, "MC", confidentiality, Impact::from_code)?,
        modified_integrity: effective(tokens, "MI", integrity, Impact::from_code)?,
        modified_availability: effective(tokens, "MA", availability, Impact::from_code)?,
    })
}

/// Resolve an optional metric whose `from_code` already maps `X` to its
/// neutral Not Defined variant.
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
