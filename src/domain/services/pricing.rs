//! Monetary breakdown for a booking: platform service fee, card processing
//! fee and grand total, derived from a subtotal and configured percentages.
//!
//! Each fee is rounded to two decimals independently and the final total is
//! rounded again after summing the already-rounded parts. Downstream numbers
//! (stored booking rows, processor amounts) depend on this exact sequence,
//! so do not "simplify" it into a single rounding of the sum.

use chrono::NaiveDate;
use serde::Serialize;

/// Rounds to two decimal places, half away from zero.
pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

#[derive(Debug, Clone, Copy)]
pub struct FeeSchedule {
    service_pct: f64,
    processing_pct: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Quote {
    pub subtotal: f64,
    pub service_fee: f64,
    pub processing_fee: f64,
    pub total: f64,
}

impl FeeSchedule {
    pub fn new(service_pct: f64, processing_pct: f64) -> Self {
        Self { service_pct, processing_pct }
    }

    pub fn service_fee(&self, subtotal: f64) -> f64 {
        round2(subtotal * (self.service_pct / 100.0))
    }

    pub fn processing_fee(&self, subtotal: f64) -> f64 {
        round2(subtotal * (self.processing_pct / 100.0))
    }

    pub fn total(&self, subtotal: f64) -> f64 {
        round2(subtotal + self.service_fee(subtotal) + self.processing_fee(subtotal))
    }

    pub fn quote(&self, subtotal: f64) -> Quote {
        Quote {
            subtotal,
            service_fee: self.service_fee(subtotal),
            processing_fee: self.processing_fee(subtotal),
            total: self.total(subtotal),
        }
    }
}

/// Base rate adjusted for public holidays: chefs may charge a premium
/// (multiplier 1.0–5.0) when the event date falls on a configured holiday.
pub fn holiday_adjusted_rate(base_rate: f64, event_date: NaiveDate, multiplier: f64, holidays: &[NaiveDate]) -> f64 {
    if holidays.contains(&event_date) {
        round2(base_rate * multiplier)
    } else {
        base_rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // The test suite pins the production defaults: 5% service, 3% processing.
    fn schedule() -> FeeSchedule {
        FeeSchedule::new(5.0, 3.0)
    }

    #[test]
    fn reference_scenario_rate_500_party_of_4() {
        // R500 base rate x 4 guests = R2000 subtotal
        let fees = schedule();
        assert_eq!(fees.service_fee(2000.0), 100.0);
        assert_eq!(fees.processing_fee(2000.0), 60.0);
        assert_eq!(fees.total(2000.0), 2160.0);
    }

    #[test]
    fn zero_subtotal_is_all_zeroes() {
        let fees = schedule();
        assert_eq!(fees.quote(0.0), Quote { subtotal: 0.0, service_fee: 0.0, processing_fee: 0.0, total: 0.0 });
    }

    #[test]
    fn fees_round_before_the_sum() {
        let fees = schedule();
        // 10.01 * 5% = 0.5005 -> 0.5, 10.01 * 3% = 0.3003 -> 0.3
        assert_eq!(fees.service_fee(10.01), 0.5);
        assert_eq!(fees.processing_fee(10.01), 0.3);
        assert_eq!(fees.total(10.01), 10.81);
    }

    #[test]
    fn total_matches_round_then_sum_then_round() {
        let fees = schedule();
        for subtotal in [0.0, 0.01, 1.0, 10.01, 99.99, 333.33, 2000.0, 12345.67] {
            let expected = round2(round2(subtotal * 0.05) + round2(subtotal * 0.03) + subtotal);
            assert_eq!(fees.total(subtotal), expected, "subtotal {subtotal}");
        }
    }

    #[test]
    fn round2_is_half_away_from_zero() {
        assert_eq!(round2(0.125), 0.13);
        assert_eq!(round2(-0.125), -0.13);
        assert_eq!(round2(1.004), 1.0);
        assert_eq!(round2(1.006), 1.01);
    }

    #[test]
    fn holiday_rate_applies_only_on_holidays() {
        let christmas = NaiveDate::from_ymd_opt(2025, 12, 25).unwrap();
        let ordinary = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let holidays = vec![christmas];

        assert_eq!(holiday_adjusted_rate(500.0, christmas, 1.5, &holidays), 750.0);
        assert_eq!(holiday_adjusted_rate(500.0, ordinary, 1.5, &holidays), 500.0);
    }
}
