//! # Statutory Tariff Tables
//!
//! Built-in schedules for the two court systems. Every `fixed_part` and
//! `excess_over` is the literal printed in the tax code; none of them is
//! derived from the tiers below it.
//!
//! | Court | Tiers | Statute |
//! |-------|-------|---------|
//! | General | 5 | пп. 1 п. 1 ст. 333.19 НК РФ |
//! | Arbitration | 6 | пп. 1 п. 1 ст. 333.21 НК РФ |

use courtfee_core::{ConfigurationError, CourtType};

use crate::rule::{FeeRule, FeeType};
use crate::schedule::TariffSchedule;

const GENERAL_BASIS: &str = "пп. 1 п. 1 ст. 333.19 НК РФ";
const ARBITRATION_BASIS: &str = "пп. 1 п. 1 ст. 333.21 НК РФ";

fn progressive(fixed_part: f64, rate: f64, excess_over: f64) -> FeeType {
    FeeType::Progressive {
        fixed_part,
        rate,
        excess_over,
    }
}

/// Property claims in courts of general jurisdiction.
pub fn general_schedule() -> Result<TariffSchedule, ConfigurationError> {
    TariffSchedule::new(
        CourtType::General,
        vec![
            FeeRule::new(
                0.0,
                Some(20_000.0),
                FeeType::Percentage { rate: 0.04 },
                "4% цены иска, но не менее 400 ₽",
                GENERAL_BASIS,
            )
            .with_minimum_fee(400.0),
            FeeRule::new(
                20_001.0,
                Some(100_000.0),
                progressive(800.0, 0.03, 20_000.0),
                "800 ₽ плюс 3% суммы, превышающей 20 000 ₽",
                GENERAL_BASIS,
            ),
            FeeRule::new(
                100_001.0,
                Some(200_000.0),
                progressive(3_200.0, 0.02, 100_000.0),
                "3 200 ₽ плюс 2% суммы, превышающей 100 000 ₽",
                GENERAL_BASIS,
            ),
            FeeRule::new(
                200_001.0,
                Some(1_000_000.0),
                progressive(5_200.0, 0.01, 200_000.0),
                "5 200 ₽ плюс 1% суммы, превышающей 200 000 ₽",
                GENERAL_BASIS,
            ),
            FeeRule::new(
                1_000_001.0,
                None,
                FeeType::Fixed { amount: 60_000.0 },
                "60 000 ₽",
                GENERAL_BASIS,
            ),
        ],
    )
}

/// Property claims in arbitration courts.
pub fn arbitration_schedule() -> Result<TariffSchedule, ConfigurationError> {
    TariffSchedule::new(
        CourtType::Arbitration,
        vec![
            FeeRule::new(
                0.0,
                Some(100_000.0),
                FeeType::Percentage { rate: 0.04 },
                "4% цены иска, но не менее 2 000 ₽",
                ARBITRATION_BASIS,
            )
            .with_minimum_fee(2_000.0),
            FeeRule::new(
                100_001.0,
                Some(200_000.0),
                progressive(4_000.0, 0.03, 100_000.0),
                "4 000 ₽ плюс 3% суммы, превышающей 100 000 ₽",
                ARBITRATION_BASIS,
            ),
            FeeRule::new(
                200_001.0,
                Some(1_000_000.0),
                progressive(7_000.0, 0.02, 200_000.0),
                "7 000 ₽ плюс 2% суммы, превышающей 200 000 ₽",
                ARBITRATION_BASIS,
            ),
            FeeRule::new(
                1_000_001.0,
                Some(2_000_000.0),
                progressive(23_000.0, 0.01, 1_000_000.0),
                "23 000 ₽ плюс 1% суммы, превышающей 1 000 000 ₽",
                ARBITRATION_BASIS,
            ),
            FeeRule::new(
                2_000_001.0,
                Some(35_400_000.0),
                progressive(33_000.0, 0.005, 2_000_000.0),
                "33 000 ₽ плюс 0,5% суммы, превышающей 2 000 000 ₽, но не более 200 000 ₽",
                ARBITRATION_BASIS,
            )
            .with_maximum_fee(200_000.0),
            FeeRule::new(
                35_400_001.0,
                None,
                FeeType::Fixed { amount: 200_000.0 },
                "200 000 ₽",
                ARBITRATION_BASIS,
            ),
        ],
    )
}

/// The built-in schedule for a court type.
pub fn statutory_schedule(court: CourtType) -> Result<TariffSchedule, ConfigurationError> {
    match court {
        CourtType::General => general_schedule(),
        CourtType::Arbitration => arbitration_schedule(),
    }
}

/// Built-in schedules for every court type, in `CourtType::all()` order.
pub fn statutory_schedules() -> Result<Vec<TariffSchedule>, ConfigurationError> {
    CourtType::all()
        .iter()
        .map(|court| statutory_schedule(*court))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use courtfee_core::ClaimAmount;

    fn fee(schedule: &TariffSchedule, v: f64) -> f64 {
        schedule.base_fee(ClaimAmount::new(v).unwrap()).unwrap()
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn statutory_tables_validate() {
        let schedules = statutory_schedules().unwrap();
        assert_eq!(schedules.len(), CourtType::all().len());
        for (schedule, court) in schedules.iter().zip(CourtType::all()) {
            assert_eq!(schedule.court(), *court);
            assert!(schedule.rules().len() <= 6);
        }
    }

    #[test]
    fn general_tier_boundaries() {
        let s = general_schedule().unwrap();
        let index = |v: f64| s.lookup(ClaimAmount::new(v).unwrap()).unwrap().index;
        assert_eq!(index(0.0), 0);
        assert_eq!(index(20_000.0), 0);
        assert_eq!(index(20_001.0), 1);
        assert_eq!(index(100_000.0), 1);
        assert_eq!(index(100_001.0), 2);
        assert_eq!(index(1_000_000.0), 3);
        assert_eq!(index(1_000_001.0), 4);
    }

    #[test]
    fn general_fees() {
        let s = general_schedule().unwrap();
        assert!(approx(fee(&s, 0.0), 400.0));
        assert!(approx(fee(&s, 15_000.0), 600.0));
        assert!(approx(fee(&s, 20_000.0), 800.0));
        assert!(approx(fee(&s, 50_000.0), 1_700.0));
        assert!(approx(fee(&s, 150_000.0), 4_200.0));
        assert!(approx(fee(&s, 1_000_000.0), 13_200.0));
        assert!(approx(fee(&s, 2_000_000.0), 60_000.0));
    }

    #[test]
    fn arbitration_fees() {
        let s = arbitration_schedule().unwrap();
        assert!(approx(fee(&s, 0.0), 2_000.0));
        assert!(approx(fee(&s, 30_000.0), 2_000.0));
        assert!(approx(fee(&s, 100_000.0), 4_000.0));
        assert!(approx(fee(&s, 150_000.0), 5_500.0));
        assert!(approx(fee(&s, 1_500_000.0), 28_000.0));
        assert!(approx(fee(&s, 35_400_000.0), 200_000.0));
        assert!(approx(fee(&s, 100_000_000.0), 200_000.0));
    }

    #[test]
    fn progressive_fixed_parts_are_statutory() {
        let s = general_schedule().unwrap();
        let parts: Vec<f64> = s
            .rules()
            .iter()
            .filter_map(|r| match r.fee_type {
                FeeType::Progressive { fixed_part, .. } => Some(fixed_part),
                _ => None,
            })
            .collect();
        assert_eq!(parts, vec![800.0, 3_200.0, 5_200.0]);
    }

    #[test]
    fn every_tier_cites_its_statute() {
        for schedule in statutory_schedules().unwrap() {
            for rule in schedule.rules() {
                assert!(!rule.legal_basis.is_empty());
                assert!(!rule.formula.is_empty());
            }
        }
    }
}
