//! CVSS 2.0 score computation.
//!
//! The environmental chain keeps the adjusted base and adjusted temporal
//! values unrounded; only the final environmental value is rounded to one
//! decimal.

use crate::calculators::round1;
use crate::models::score::ScoreResult;
use crate::models::v2::Cvss2Metrics;

/// Compute all three 2.0 scores.
pub fn score(metrics: &Cvss2Metrics) -> ScoreResult {
    let base = base_score(metrics);
    ScoreResult::new(
        base,
        temporal_score(metrics, base),
        environmental_score(metrics),
    )
}

/// Base score, rounded to one decimal.
pub fn base_score(metrics: &Cvss2Metrics) -> f64 {
    let impact = impact_subscore(
        metrics.confidentiality.weight(),
        metrics.integrity.weight(),
        metrics.availability.weight(),
    );
    round1(raw_base(impact, exploitability(metrics)))
}

/// Temporal score derived from the rounded base.
pub fn temporal_score(metrics: &Cvss2Metrics, base: f64) -> f64 {
    round1(base * temporal_multiplier(metrics))
}

/// Environmental score.
pub fn environmental_score(metrics: &Cvss2Metrics) -> f64 {
    let adjusted_impact = f64::min(
        10.0,
        impact_subscore(
            metrics.confidentiality.weight() * metrics.confidentiality_requirement.weight(),
            metrics.integrity.weight() * metrics.integrity_requirement.weight(),
            metrics.availability.weight() * metrics.availability_requirement.weight(),
        ),
    );

    let adjusted_base = raw_base(adjusted_impact, exploitability(metrics));
    let adjusted_temporal = adjusted_base * temporal_multiplier(metrics);

    let cdp = metrics.collateral_damage_potential.weight();
    let td = metrics.target_distribution.weight();
    round1((adjusted_temporal + (10.0 - adjusted_temporal) * cdp) * td)
}

fn impact_subscore(c: f64, i: f64, a: f64) -> f64 {
    10.41 * (1.0 - (1.0 - c) * (1.0 - i) * (1.0 - a))
}

fn exploitability(metrics: &Cvss2Metrics) -> f64 {
    20.0 * metrics.access_vector.weight()
        * metrics.access_complexity.weight()
        * metrics.authentication.weight()
}

fn temporal_multiplier(metrics: &Cvss2Metrics) -> f64 {
    metrics.exploitability.weight()
        * metrics.remediation_level.weight()
        * metrics.report_confidence.weight()
}

fn raw_base(impact: f64, exploitability: f64) -> f64 {
    let impact_factor = if impact == 0.0 { 0.0 } else { 1.176 };
    ((0.6 * impact) + (0.4 * exploitability) - 1.5) * impact_factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::{tokenize, v2};

    fn scores(vector: &str) -> ScoreResult {
        score(&v2::parse(&tokenize(vector).unwrap()).unwrap())
    }

    #[test]
    fn complete_compromise_scores_ten() {
        let result = scores("AV:N/AC:L/Au:N/C:C/I:C/A:C");
        assert_eq!(result.base_score, 10.0);
        assert_eq!(result.temporal_score, 10.0);
        assert_eq!(result.environmental_score, 10.0);
    }

    #[test]
    fn zero_impact_scores_zero() {
        let result = scores("AV:N/AC:L/Au:N/C:N/I:N/A:N");
        assert_eq!(result.base_score, 0.0);
        assert_eq!(result.temporal_score, 0.0);
    }

    #[test]
    fn temporal_metrics_reduce_the_base() {
        let result = scores("AV:N/AC:L/Au:N/C:C/I:C/A:C/E:U/RL:OF/RC:UC");
        assert_eq!(result.base_score, 10.0);
        assert_eq!(result.temporal_score, 6.7);
        // No CDP/TD given: environmental tracks the unadjusted temporal.
        assert_eq!(result.environmental_score, 6.7);
    }

    #[test]
    fn environmental_chain_stays_unrounded() {
        // Rounding the adjusted temporal (6.6555 -> 6.7) before applying
        // CDP/TD would shift the result to 1.8.
        let result =
            scores("AV:N/AC:L/Au:N/C:C/I:C/A:C/E:U/RL:OF/RC:UC/CDP:L/TD:L/CR:M/IR:M/AR:M");
        assert_eq!(result.environmental_score, 1.7);
    }

    #[test]
    fn high_collateral_damage_raises_environmental() {
        let result =
            scores("AV:N/AC:L/Au:N/C:N/I:N/A:C/E:F/RL:OF/RC:C/CDP:H/TD:H/CR:M/IR:M/AR:H");
        assert_eq!(result.base_score, 7.8);
        assert_eq!(result.temporal_score, 6.4);
        assert_eq!(result.environmental_score, 9.1);
    }
}
