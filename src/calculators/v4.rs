//! CVSS 4.0 score computation.
//!
//! 4.0 abandons the additive formulas: the effective metrics are classified
//! into six equivalence classes (a "macrovector"), the macrovector's score
//! is read from a fixed table, and the result is interpolated toward the
//! next-lower macrovector of each class in proportion to how far the actual
//! metrics sit from the class's highest-severity combination. The single
//! resulting value serves as base, temporal and environmental score alike.

use crate::calculators::{round1, v4_lookup};
use crate::models::score::ScoreResult;
use crate::models::v4::{
    AttackComplexity, AttackRequirements, AttackVector, Cvss4Metrics, PrivilegesRequired,
    Requirement, SubsequentImpact, UserInteraction, VulnerableImpact,
};

/// Compute the 4.0 score triple (one value, reported three times).
pub fn score(metrics: &Cvss4Metrics) -> ScoreResult {
    ScoreResult::uniform(compute(metrics))
}

/// Equivalence-class levels EQ1..EQ6 of a metric set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MacroVector {
    pub eq1: u8,
    pub eq2: u8,
    pub eq3: u8,
    pub eq4: u8,
    pub eq5: u8,
    pub eq6: u8,
}

impl MacroVector {
    /// Classify effective metrics into their macrovector.
    pub fn classify(m: &Cvss4Metrics) -> Self {
        let eq1 = if m.attack_vector == AttackVector::Network
            && m.privileges_required == PrivilegesRequired::None
            && m.user_interaction == UserInteraction::None
        {
            0
        } else if (m.attack_vector == AttackVector::Network
            || m.privileges_required == PrivilegesRequired::None
            || m.user_interaction == UserInteraction::None)
            && m.attack_vector != AttackVector::Physical
        {
            1
        } else {
            2
        };

        let eq2 = if m.attack_complexity == AttackComplexity::Low
            && m.attack_requirements == AttackRequirements::None
        {
            0
        } else {
            1
        };

        let eq3 = if m.vuln_confidentiality == VulnerableImpact::High
            && m.vuln_integrity == VulnerableImpact::High
        {
            0
        } else if m.vuln_confidentiality == VulnerableImpact::High
            || m.vuln_integrity == VulnerableImpact::High
            || m.vuln_availability == VulnerableImpact::High
        {
            1
        } else {
            2
        };

        let eq4 = if m.sub_integrity == SubsequentImpact::Safety
            || m.sub_availability == SubsequentImpact::Safety
        {
            0
        } else if m.sub_confidentiality == SubsequentImpact::High
            || m.sub_integrity == SubsequentImpact::High
            || m.sub_availability == SubsequentImpact::High
        {
            1
        } else {
            2
        };

        let eq5 = m.exploitation.level();

        let eq6 = if (m.confidentiality_requirement == Requirement::High
            && m.vuln_confidentiality == VulnerableImpact::High)
            || (m.integrity_requirement == Requirement::High
                && m.vuln_integrity == VulnerableImpact::High)
            || (m.availability_requirement == Requirement::High
                && m.vuln_availability == VulnerableImpact::High)
        {
            0
        } else {
            1
        };

        Self { eq1, eq2, eq3, eq4, eq5, eq6 }
    }

    /// Table key, e.g. `"110200"`.
    pub fn key(&self) -> String {
        format!(
            "{}{}{}{}{}{}",
            self.eq1, self.eq2, self.eq3, self.eq4, self.eq5, self.eq6
        )
    }

    fn score(&self) -> f64 {
        // The table is total over reachable macrovectors.
        v4_lookup::macrovector_score(&self.key()).unwrap_or(0.0)
    }
}

fn compute(m: &Cvss4Metrics) -> f64 {
    if m.has_no_impact() {
        return 0.0;
    }

    let mv = MacroVector::classify(m);
    let value = mv.score();

    // Scores of the next-lower macrovector per equivalence class, where one
    // exists. EQ3 and EQ6 step down jointly; at the joint top both single
    // steps are candidates and the higher score wins.
    let lower_eq1 = (mv.eq1 < 2).then(|| MacroVector { eq1: mv.eq1 + 1, ..mv }.score());
    let lower_eq2 = (mv.eq2 < 1).then(|| MacroVector { eq2: mv.eq2 + 1, ..mv }.score());
    let lower_eq4 = (mv.eq4 < 2).then(|| MacroVector { eq4: mv.eq4 + 1, ..mv }.score());
    let lower_eq5 = (mv.eq5 < 2).then(|| MacroVector { eq5: mv.eq5 + 1, ..mv }.score());
    let lower_eq3_eq6 = match (mv.eq3, mv.eq6) {
        (0, 0) => Some(f64::max(
            MacroVector { eq3: 1, ..mv }.score(),
            MacroVector { eq6: 1, ..mv }.score(),
        )),
        (1, 0) => Some(MacroVector { eq6: 1, ..mv }.score()),
        (eq3, 1) if eq3 < 2 => Some(MacroVector { eq3: eq3 + 1, ..mv }.score()),
        _ => None,
    };

    // Severity distance of the scored metrics from the macrovector's
    // highest-severity combination, per class. EQ5 sits exactly on its
    // class level, so its distance is always zero.
    let dist_eq1 = group_distance(
        &[
            m.attack_vector.level(),
            m.privileges_required.level(),
            m.user_interaction.level(),
        ],
        v4_lookup::eq1_max(mv.eq1)
            .iter()
            .map(|&(av, pr, ui)| [av, pr, ui]),
    );
    let dist_eq2 = group_distance(
        &[m.attack_complexity.level(), m.attack_requirements.level()],
        v4_lookup::eq2_max(mv.eq2).iter().map(|&(ac, at)| [ac, at]),
    );
    let dist_eq3_eq6 = group_distance(
        &[
            m.vuln_confidentiality.level(),
            m.vuln_integrity.level(),
            m.vuln_availability.level(),
            m.confidentiality_requirement.level(),
            m.integrity_requirement.level(),
            m.availability_requirement.level(),
        ],
        v4_lookup::eq3_eq6_max(mv.eq3, mv.eq6)
            .iter()
            .map(|&(vc, vi, va, cr, ir, ar)| [vc, vi, va, cr, ir, ar]),
    );
    let dist_eq4 = group_distance(
        &[
            m.sub_confidentiality.level(),
            m.sub_integrity.level(),
            m.sub_availability.level(),
        ],
        v4_lookup::eq4_max(mv.eq4).iter().map(|&(sc, si, sa)| [sc, si, sa]),
    );

    let mut total = 0.0;
    let mut available = 0u32;
    let mut interpolate = |lower: Option<f64>, distance: u32, depth: u32| {
        if let Some(lower_score) = lower {
            total += (value - lower_score) * f64::from(distance) / f64::from(depth);
            available += 1;
        }
    };
    interpolate(lower_eq1, dist_eq1, v4_lookup::eq1_depth(mv.eq1));
    interpolate(lower_eq2, dist_eq2, v4_lookup::eq2_depth(mv.eq2));
    interpolate(
        lower_eq3_eq6,
        dist_eq3_eq6,
        v4_lookup::eq3_eq6_depth(mv.eq3, mv.eq6),
    );
    interpolate(lower_eq4, dist_eq4, v4_lookup::eq4_depth(mv.eq4));
    interpolate(lower_eq5, 0, 1);

    let mean = if available == 0 { 0.0 } else { total / f64::from(available) };
    round1((value - mean).clamp(0.0, 10.0))
}

/// Sum of level differences against the first max-composed candidate that
/// is at least as severe as the scored metrics in every position.
fn group_distance<const N: usize>(
    current: &[u8; N],
    candidates: impl Iterator<Item = [u8; N]>,
) -> u32 {
    for max in candidates {
        let mut distance = 0u32;
        let mut valid = true;
        for (&level, &max_level) in current.iter().zip(max.iter()) {
            if level < max_level {
                valid = false;
                break;
            }
            distance += u32::from(level - max_level);
        }
        if valid {
            return distance;
        }
    }
    0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::{tokenize, v4};

    fn metrics(vector: &str) -> Cvss4Metrics {
        v4::parse(&tokenize(vector).unwrap()).unwrap()
    }

    #[test]
    fn classify_base_vector() {
        let m = metrics("CVSS:4.0/AV:L/AC:L/AT:P/PR:L/UI:N/VC:H/VI:H/VA:H/SC:N/SI:N/SA:N");
        assert_eq!(MacroVector::classify(&m).key(), "110200");
    }

    #[test]
    fn classify_applies_threat_and_environmental_defaults() {
        // E:X behaves as Attacked, CR/IR/AR:X as High.
        let m = metrics("CVSS:4.0/AV:N/AC:L/AT:N/PR:N/UI:N/VC:H/VI:H/VA:H/SC:H/SI:H/SA:H/E:X");
        assert_eq!(MacroVector::classify(&m).key(), "000100");
    }

    #[test]
    fn classify_safety_pins_eq4() {
        let m = metrics(
            "CVSS:4.0/AV:A/AC:L/AT:N/PR:N/UI:N/VC:H/VI:H/VA:N/SC:N/SI:N/SA:N/MSI:S",
        );
        assert_eq!(MacroVector::classify(&m).eq4, 0);
    }

    #[test]
    fn no_impact_short_circuits_to_zero() {
        let m = metrics("CVSS:4.0/AV:N/AC:L/AT:N/PR:N/UI:N/VC:N/VI:N/VA:N/SC:N/SI:N/SA:N");
        assert_eq!(compute(&m), 0.0);
    }

    #[test]
    fn interpolation_pulls_below_the_table_value() {
        // Macrovector 110200 scores 7.7; the AV:L/PR:L distance from the
        // class maximum pulls the final value down to 7.3.
        let m = metrics("CVSS:4.0/AV:L/AC:L/AT:P/PR:L/UI:N/VC:H/VI:H/VA:H/SC:N/SI:N/SA:N");
        assert_eq!(compute(&m), 7.3);
    }

    #[test]
    fn exploit_maturity_unproven_drops_the_score() {
        let m = metrics("CVSS:4.0/AV:N/AC:L/AT:P/PR:N/UI:P/VC:H/VI:H/VA:H/SC:N/SI:N/SA:N/E:U");
        assert_eq!(compute(&m), 5.2);
    }

    #[test]
    fn group_distance_picks_first_dominating_candidate() {
        let candidates = [[3u8, 0, 0], [1, 1, 1]];
        // Matches the first candidate exactly.
        assert_eq!(group_distance(&[3, 0, 0], candidates.iter().copied()), 0);
        // Not dominated by the first candidate; falls through to the second.
        assert_eq!(group_distance(&[2, 1, 1], candidates.iter().copied()), 1);
        // Distance accumulates across metric positions.
        assert_eq!(group_distance(&[3, 2, 1], candidates.iter().copied()), 3);
    }
}
