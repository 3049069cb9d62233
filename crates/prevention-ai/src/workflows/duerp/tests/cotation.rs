use super::common::*;
use crate::workflows::duerp::cotation::{
    raw_score, residual_score, Frequency, Gravity, Mastery, RiskLevel,
};

const FREQUENCIES: [Frequency; 4] = [
    Frequency::Rare,
    Frequency::Intermittent,
    Frequency::Frequent,
    Frequency::Continuous,
];

const GRAVITIES: [Gravity; 4] = [
    Gravity::Minor,
    Gravity::Significant,
    Gravity::Severe,
    Gravity::Fatal,
];

const MASTERIES: [Mastery; 3] = [Mastery::Effective, Mastery::Partial, Mastery::Absent];

#[test]
fn raw_score_is_the_factor_product_over_the_whole_grid() {
    for frequency in FREQUENCIES {
        for gravity in GRAVITIES {
            let raw = raw_score(frequency, gravity);
            assert_eq!(raw, frequency.weight() * gravity.weight());
            assert!((1..=16).contains(&raw));
        }
    }
}

#[test]
fn residual_never_exceeds_raw_and_rounds_to_two_decimals() {
    for frequency in FREQUENCIES {
        for gravity in GRAVITIES {
            for mastery in MASTERIES {
                let raw = f64::from(raw_score(frequency, gravity));
                let residual = residual_score(frequency, gravity, mastery);
                let expected = (raw * mastery.multiplier() * 100.0).round() / 100.0;
                assert_eq!(residual, expected);
                assert!(residual <= raw);
            }
        }
    }
}

#[test]
fn level_boundaries_are_inclusive_on_the_lower_tier() {
    assert_eq!(RiskLevel::from_score(1.0), RiskLevel::Low);
    assert_eq!(RiskLevel::from_score(4.0), RiskLevel::Low);
    assert_eq!(RiskLevel::from_score(4.01), RiskLevel::Medium);
    assert_eq!(RiskLevel::from_score(5.0), RiskLevel::Medium);
    assert_eq!(RiskLevel::from_score(8.0), RiskLevel::Medium);
    assert_eq!(RiskLevel::from_score(8.01), RiskLevel::High);
    assert_eq!(RiskLevel::from_score(9.0), RiskLevel::High);
    assert_eq!(RiskLevel::from_score(12.0), RiskLevel::High);
    assert_eq!(RiskLevel::from_score(12.01), RiskLevel::Critical);
    assert_eq!(RiskLevel::from_score(13.0), RiskLevel::Critical);
    assert_eq!(RiskLevel::from_score(16.0), RiskLevel::Critical);
}

#[test]
fn unset_factors_leave_scores_undefined_rather_than_zero() {
    let unevaluated = risk("Bruit");
    assert_eq!(unevaluated.raw_score(), None);
    assert_eq!(unevaluated.residual_score(), None);

    let mut partially = risk("Bruit");
    partially.frequency = Some(Frequency::Frequent);
    partially.gravity = Some(Gravity::Severe);
    assert_eq!(partially.raw_score(), Some(9));
    // Mastery still missing: the residual stays undefined.
    assert_eq!(partially.residual_score(), None);
}

#[test]
fn scored_risk_exposes_both_scores() {
    let scored = scored_risk(
        "Bruit",
        Frequency::Continuous,
        Gravity::Severe,
        Mastery::Effective,
    );
    assert_eq!(scored.raw_score(), Some(12));
    assert_eq!(scored.residual_score(), Some(6.0));
}
