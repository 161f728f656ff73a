//! CVSS 3.0 / 3.1 score computation.
//!
//! The revisions share every weight and all base/temporal arithmetic. They
//! diverge in exactly one place: the modified impact sub-formula applied
//! when the (modified) Scope is Changed.

use crate::calculators::round_up;
use crate::models::score::ScoreResult;
use crate::models::v3::{Cvss3Metrics, Revision};

/// Compute all three 3.x scores.
pub fn score(metrics: &Cvss3Metrics) -> ScoreResult {
    let base = base_score(metrics);
    ScoreResult::new(
        base,
        temporal_score(metrics, base),
        environmental_score(metrics),
    )
}

/// Base score.
pub fn base_score(metrics: &Cvss3Metrics) -> f64 {
    let iss = 1.0
        - (1.0 - metrics.confidentiality.weight())
            * (1.0 - metrics.integrity.weight())
            * (1.0 - metrics.availability.weight());

    let impact = if metrics.scope.is_changed() {
        7.52 * (iss - 0.029) - 3.25 * (iss - 0.02).powi(15)
    } else {
        6.42 * iss
    };

    if impact <= 0.0 {
        return 0.0;
    }

    let exploitability = 8.22
        * metrics.attack_vector.weight()
        * metrics.attack_complexity.weight()
        * metrics.privileges_required.weight(metrics.scope)
        * metrics.user_interaction.weight();

    if metrics.scope.is_changed() {
        round_up(f64::min(1.08 * (impact + exploitability), 10.0))
    } else {
        round_up(f64::min(impact + exploitability, 10.0))
    }
}

/// Temporal score derived from the rounded base.
pub fn temporal_score(metrics: &Cvss3Metrics, base: f64) -> f64 {
    round_up(base * temporal_multiplier(metrics))
}

/// Environmental score: the base formula over effective Modified metrics
/// with requirement-weighted impact, then the temporal multiplier on top.
pub fn environmental_score(metrics: &Cvss3Metrics) -> f64 {
    let miss = f64::min(
        1.0 - (1.0
            - metrics.confidentiality_requirement.weight()
                * metrics.modified_confidentiality.weight())
            * (1.0
                - metrics.integrity_requirement.weight() * metrics.modified_integrity.weight())
            * (1.0
                - metrics.availability_requirement.weight()
                    * metrics.modified_availability.weight()),
        0.915,
    );

    let modified_impact = if metrics.modified_scope.is_changed() {
        match metrics.revision {
            Revision::V31 => 7.52 * (miss - 0.029) - 3.25 * (miss * 0.9731 - 0.02).powi(13),
            Revision::V30 => 7.52 * (miss - 0.029) - 3.25 * (miss - 0.02).powi(15),
        }
    } else {
        6.42 * miss
    };

    if modified_impact <= 0.0 {
        return 0.0;
    }

    let modified_exploitability = 8.22
        * metrics.modified_attack_vector.weight()
        * metrics.modified_attack_complexity.weight()
        * metrics
            .modified_privileges_required
            .weight(metrics.modified_scope)
        * metrics.modified_user_interaction.weight();

    let combined = if metrics.modified_scope.is_changed() {
        1.08 * (modified_impact + modified_exploitability)
    } else {
        modified_impact + modified_exploitability
    };

    round_up(round_up(f64::min(combined, 10.0)) * temporal_multiplier(metrics))
}

fn temporal_multiplier(metrics: &Cvss3Metrics) -> f64 {
    metrics.exploit_code_maturity.weight()
        * metrics.remediation_level.weight()
        * metrics.report_confidence.weight()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::{tokenize, v3};

    fn scores(vector: &str, revision: Revision) -> ScoreResult {
        score(&v3::parse(&tokenize(vector).unwrap(), revision).unwrap())
    }

    #[test]
    fn base_only_vector_repeats_across_all_scores() {
        let result = scores("CVSS:3.1/AV:A/AC:L/PR:L/UI:N/S:U/C:H/I:H/A:H", Revision::V31);
        assert_eq!(result.base_score, 8.0);
        assert_eq!(result.temporal_score, 8.0);
        assert_eq!(result.environmental_score, 8.0);
    }

    #[test]
    fn zero_impact_is_zero_even_with_temporal_metrics() {
        let result = scores(
            "CVSS:3.1/AV:P/AC:H/PR:H/UI:R/S:U/C:N/I:N/A:N/RL:U",
            Revision::V31,
        );
        assert_eq!(result.base_score, 0.0);
        assert_eq!(result.temporal_score, 0.0);
        assert_eq!(result.environmental_score, 0.0);
    }

    #[test]
    fn temporal_metrics_lower_the_score_stepwise() {
        let vector = "CVSS:3.1/AV:P/AC:H/PR:N/UI:R/S:C/C:L/I:H/A:N";
        assert_eq!(scores(vector, Revision::V31).temporal_score, 5.6);
        assert_eq!(
            scores(&format!("{vector}/E:P"), Revision::V31).temporal_score,
            5.3
        );
        assert_eq!(
            scores(&format!("{vector}/E:P/RL:O"), Revision::V31).temporal_score,
            5.1
        );
        assert_eq!(
            scores(&format!("{vector}/E:P/RL:O/RC:U"), Revision::V31).temporal_score,
            4.7
        );
    }

    #[test]
    fn environmental_can_exceed_a_zero_base() {
        let result = scores(
            "CVSS:3.1/AV:P/AC:H/PR:H/UI:R/S:U/C:N/I:N/A:N/E:P/RL:T/RC:R/CR:L/IR:L/AR:L\
             /MAV:L/MAC:L/MPR:H/MUI:R/MS:U/MC:H/MI:H/MA:H",
            Revision::V31,
        );
        assert_eq!(result.base_score, 0.0);
        assert_eq!(result.temporal_score, 0.0);
        assert_eq!(result.environmental_score, 4.1);
    }

    #[test]
    fn revisions_diverge_only_in_the_changed_scope_environmental_branch() {
        // Same vector body; the capped MISS hits the formula difference.
        let body = "AV:N/AC:L/PR:N/UI:N/S:C/C:H/I:H/A:H/E:U/RL:T/RC:U/CR:L/IR:L/AR:H\
                    /MAV:P/MAC:H/MPR:H/MUI:R/MS:C/MC:H/MI:H/MA:H";
        let v31 = scores(&format!("CVSS:3.1/{body}"), Revision::V31);
        let v30 = scores(&format!("CVSS:3.0/{body}"), Revision::V30);
        assert_eq!(v31.environmental_score, 5.6);
        assert_eq!(v30.environmental_score, 5.5);
        assert_eq!(v31.base_score, v30.base_score);
        assert_eq!(v31.temporal_score, v30.temporal_score);
    }
}
