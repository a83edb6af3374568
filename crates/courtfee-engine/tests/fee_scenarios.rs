//! # Court Fee Scenarios
//!
//! End-to-end checks of the statutory engine through its public contract:
//! concrete amounts with known statutory answers, exemption handling, and
//! properties that must hold for every claim.

use courtfee_core::{CourtType, FeeError, ValidationError};
use courtfee_engine::{
    calculate, find_applicable_rule, get_available_exemptions, CalculationInput, LineKind,
};
use proptest::prelude::*;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

fn general(amount: f64) -> CalculationInput {
    CalculationInput::new(amount, CourtType::General).unwrap()
}

// ---------------------------------------------------------------------------
// General jurisdiction
// ---------------------------------------------------------------------------

#[test]
fn general_15000_uses_first_tier_rate() {
    let r = calculate(&general(15_000.0)).unwrap();
    assert_eq!(r.tier_index, 0);
    assert!(approx(r.base_fee, 600.0));
    assert!(approx(r.final_fee, 600.0));
    assert_eq!(r.exemption_discount, 0.0);
}

#[test]
fn general_20000_is_inclusive_upper_bound() {
    let r = calculate(&general(20_000.0)).unwrap();
    assert_eq!(r.tier_index, 0);
    assert!(approx(r.base_fee, 800.0));
}

#[test]
fn general_20001_moves_to_progressive_tier() {
    let r = calculate(&general(20_001.0)).unwrap();
    assert_eq!(r.tier_index, 1);
    assert!(approx(r.base_fee, 800.03));
}

#[test]
fn general_50000_progressive() {
    let r = calculate(&general(50_000.0)).unwrap();
    assert_eq!(r.tier_index, 1);
    assert!(approx(r.base_fee, 1_700.0));
}

#[test]
fn general_100000_and_100001() {
    assert!(approx(calculate(&general(100_000.0)).unwrap().base_fee, 3_200.0));
    let r = calculate(&general(100_001.0)).unwrap();
    assert_eq!(r.tier_index, 2);
    assert!(approx(r.base_fee, 3_200.02));
}

#[test]
fn general_2000000_top_tier_is_flat() {
    let r = calculate(&general(2_000_000.0)).unwrap();
    assert!(approx(r.base_fee, 60_000.0));
    assert!(approx(calculate(&general(5e9)).unwrap().base_fee, 60_000.0));
}

#[test]
fn zero_claim_pays_minimum() {
    let r = calculate(&general(0.0)).unwrap();
    assert!(approx(r.base_fee, 400.0));
    assert_eq!(r.effective_rate, 0.0);

    let a = calculate(&CalculationInput::new(0.0, CourtType::Arbitration).unwrap()).unwrap();
    assert!(approx(a.base_fee, 2_000.0));
}

#[test]
fn fractional_amount_between_tiers() {
    let r = calculate(&general(20_000.5)).unwrap();
    assert_eq!(r.tier_index, 1);
    assert!(approx(r.base_fee, 800.015));
}

// ---------------------------------------------------------------------------
// Exemptions
// ---------------------------------------------------------------------------

#[test]
fn disabled_discount_clamped_to_base_fee() {
    let r = calculate(&general(15_000.0).with_exemption("disabled_1_2")).unwrap();
    assert!(approx(r.base_fee, 600.0));
    assert!(approx(r.exemption_discount, 600.0));
    assert_eq!(r.final_fee, 0.0);
    assert!(r.is_fully_exempt());
}

#[test]
fn disabled_discount_partial_above_limit() {
    let r = calculate(&general(2_000_000.0).with_exemption("disabled_1_2")).unwrap();
    assert!(approx(r.exemption_discount, 25_000.0));
    assert!(approx(r.final_fee, 35_000.0));
    assert!(approx(r.effective_rate, 35_000.0 / 2_000_000.0));
}

#[test]
fn pensioners_fully_exempt() {
    let r = calculate(&general(1_000_000.0).with_exemption("pensioners")).unwrap();
    assert!(approx(r.base_fee, 13_200.0));
    assert_eq!(r.final_fee, 0.0);
    assert_eq!(r.effective_rate, 0.0);
}

#[test]
fn pensioners_not_valid_in_arbitration() {
    let input = CalculationInput::new(100_000.0, CourtType::Arbitration)
        .unwrap()
        .with_exemption("pensioners");
    let err = calculate(&input).unwrap_err();
    assert!(matches!(
        err,
        FeeError::Validation(ValidationError::ExemptionNotApplicable { .. })
    ));
}

#[test]
fn available_exemptions_match_applicability() {
    for court in CourtType::all() {
        for category in get_available_exemptions(*court).unwrap() {
            assert!(category.applicable_courts.contains(court));
        }
    }
}

// ---------------------------------------------------------------------------
// Breakdown
// ---------------------------------------------------------------------------

#[test]
fn breakdown_lists_base_exemption_and_total() {
    let r = calculate(&general(50_000.0).with_exemption("veterans")).unwrap();
    let kinds: Vec<LineKind> = r.breakdown.iter().map(|i| i.kind).collect();
    assert_eq!(
        kinds,
        vec![LineKind::BaseFee, LineKind::Exemption, LineKind::FinalFee]
    );
    assert!(approx(r.breakdown[0].amount, r.base_fee));
    assert!(approx(r.breakdown[1].amount, -r.exemption_discount));
    assert!(approx(r.breakdown[2].amount, r.final_fee));
    assert_eq!(r.legal_references.len(), 2);
    assert!(r.legal_references[0].contains("333.19"));
}

#[test]
fn result_serializes_for_front_ends() {
    let r = calculate(&general(50_000.0)).unwrap();
    let json = serde_json::to_value(&r).unwrap();
    assert_eq!(json["court_type"], "general");
    assert_eq!(json["breakdown"][0]["kind"], "base_fee");
    assert!(json["exemption"].is_null());
}

#[test]
fn find_applicable_rule_matches_calculation() {
    let rule = find_applicable_rule(150_000.0, CourtType::Arbitration).unwrap();
    assert!(rule.contains(150_000.0));
    assert!(rule.legal_basis.contains("333.21"));
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

fn any_court() -> impl Strategy<Value = CourtType> {
    prop_oneof![Just(CourtType::General), Just(CourtType::Arbitration)]
}

proptest! {
    /// Every non-negative amount resolves to a rule in every jurisdiction.
    #[test]
    fn every_amount_has_a_rule(court in any_court(), amount in 0.0f64..1e11) {
        prop_assert!(find_applicable_rule(amount, court).is_ok());
    }

    /// Base fee is non-decreasing in the claim amount.
    #[test]
    fn base_fee_monotonic(court in any_court(), a in 0.0f64..1e9, delta in 0.0f64..1e8) {
        let lo = calculate(&CalculationInput::new(a, court).unwrap()).unwrap();
        let hi = calculate(&CalculationInput::new(a + delta, court).unwrap()).unwrap();
        prop_assert!(lo.base_fee <= hi.base_fee + 1e-9);
    }

    /// Exemptions never push the final fee below zero.
    #[test]
    fn final_fee_never_negative(amount in 0.0f64..1e9, pick in 0usize..4) {
        let categories = get_available_exemptions(CourtType::General).unwrap();
        let id = categories[pick % categories.len()].id.clone();
        let r = calculate(&general(amount).with_exemption(id)).unwrap();
        prop_assert!(r.final_fee >= 0.0);
        prop_assert!(r.final_fee <= r.base_fee);
    }

    /// Identical input, identical output.
    #[test]
    fn calculation_is_idempotent(court in any_court(), amount in 0.0f64..1e9) {
        let input = CalculationInput::new(amount, court).unwrap();
        prop_assert_eq!(calculate(&input).unwrap(), calculate(&input).unwrap());
    }
}
