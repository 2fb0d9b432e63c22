//! Closed date intervals and the booking overlap rule.

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::{DomainError, DomainResult};
use crate::value_object::ValueObject;

/// Whether the closed intervals `[s1, e1]` and `[s2, e2]` share a day.
///
/// An interval overlaps another when one of its endpoints falls inside the
/// other's inclusive bounds. Sharing a single endpoint counts: a stay ending on
/// day X conflicts with one starting on day X.
///
/// The inputs are not required to be ordered; `find_rooms` passes caller dates
/// through unchecked.
pub fn overlaps(s1: NaiveDate, e1: NaiveDate, s2: NaiveDate, e2: NaiveDate) -> bool {
    let within = |day: NaiveDate, lower: NaiveDate, upper: NaiveDate| lower <= day && day <= upper;

    within(s1, s2, e2) || within(e1, s2, e2) || within(s2, s1, e1) || within(e2, s1, e1)
}

/// Inclusive `[check_in, check_out]` stay at whole-day granularity.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct DateRange {
    check_in: NaiveDate,
    check_out: NaiveDate,
}

impl ValueObject for DateRange {}

impl DateRange {
    /// Build a range, rejecting a check-in later than the check-out.
    pub fn new(check_in: NaiveDate, check_out: NaiveDate) -> DomainResult<Self> {
        if check_in > check_out {
            return Err(DomainError::invalid_argument(format!(
                "check-in date {check_in} must be same or before check-out date {check_out}"
            )));
        }
        Ok(Self { check_in, check_out })
    }

    pub fn check_in(&self) -> NaiveDate {
        self.check_in
    }

    pub fn check_out(&self) -> NaiveDate {
        self.check_out
    }

    /// Whether this stay shares at least one day with `[check_in, check_out]`.
    pub fn overlaps_dates(&self, check_in: NaiveDate, check_out: NaiveDate) -> bool {
        overlaps(check_in, check_out, self.check_in, self.check_out)
    }

    pub fn overlaps(&self, other: &DateRange) -> bool {
        self.overlaps_dates(other.check_in, other.check_out)
    }

    /// The same range moved `days` days later.
    ///
    /// Returns `None` when the shifted range leaves chrono's calendar.
    pub fn shifted_by_days(&self, days: u64) -> Option<Self> {
        let delta = chrono::Days::new(days);
        Some(Self {
            check_in: self.check_in.checked_add_days(delta)?,
            check_out: self.check_out.checked_add_days(delta)?,
        })
    }
}

impl core::fmt::Display for DateRange {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{} to {}",
            self.check_in.format("%Y-%m-%d"),
            self.check_out.format("%Y-%m-%d")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn range(a: &str, b: &str) -> DateRange {
        DateRange::new(day(a), day(b)).unwrap()
    }

    #[test]
    fn shared_endpoint_overlaps() {
        let booked = range("2024-01-01", "2024-01-05");
        assert!(booked.overlaps(&range("2024-01-05", "2024-01-10")));
        assert!(range("2024-01-05", "2024-01-10").overlaps(&booked));
    }

    #[test]
    fn one_day_gap_does_not_overlap() {
        let booked = range("2024-01-01", "2024-01-05");
        assert!(!booked.overlaps(&range("2024-01-06", "2024-01-10")));
        assert!(!range("2024-01-06", "2024-01-10").overlaps(&booked));
    }

    #[test]
    fn containment_overlaps_both_ways() {
        let outer = range("2024-03-01", "2024-03-31");
        let inner = range("2024-03-10", "2024-03-12");
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn single_day_stays() {
        let stay = range("2024-02-29", "2024-02-29");
        assert!(stay.overlaps(&stay));
        assert!(!stay.overlaps(&range("2024-03-01", "2024-03-01")));
    }

    #[test]
    fn check_in_after_check_out_is_rejected() {
        match DateRange::new(day("2024-01-02"), day("2024-01-01")) {
            Err(DomainError::InvalidArgument(msg)) => assert!(msg.contains("check-in")),
            other => panic!("expected InvalidArgument, got {other:?}"),
        }
    }

    #[test]
    fn display_uses_iso_dates() {
        assert_eq!(range("2024-01-01", "2024-01-05").to_string(), "2024-01-01 to 2024-01-05");
    }

    #[test]
    fn shifting_moves_both_ends() {
        let shifted = range("2024-12-28", "2024-12-30").shifted_by_days(7).unwrap();
        assert_eq!(shifted, range("2025-01-04", "2025-01-06"));
        assert!(NaiveDate::MAX.checked_add_days(chrono::Days::new(1)).is_none());
        assert!(DateRange::new(NaiveDate::MAX, NaiveDate::MAX).unwrap().shifted_by_days(1).is_none());
    }

    fn any_day() -> impl Strategy<Value = NaiveDate> {
        (0i64..4_000).prop_map(|offset| day("2020-01-01") + chrono::Duration::days(offset))
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 1000,
            ..ProptestConfig::default()
        })]

        /// Property: the endpoint rule matches `s1 <= e2 && s2 <= e1` for ordered ranges.
        #[test]
        fn endpoint_rule_matches_interval_intersection(
            a in any_day(), b in any_day(), c in any_day(), d in any_day()
        ) {
            let (s1, e1) = if a <= b { (a, b) } else { (b, a) };
            let (s2, e2) = if c <= d { (c, d) } else { (d, c) };

            prop_assert_eq!(overlaps(s1, e1, s2, e2), s1 <= e2 && s2 <= e1);
        }

        /// Property: overlap is symmetric.
        #[test]
        fn overlap_is_symmetric(a in any_day(), b in any_day(), c in any_day(), d in any_day()) {
            prop_assert_eq!(overlaps(a, b, c, d), overlaps(c, d, a, b));
        }

        /// Property: construction fails exactly when check-in is after check-out.
        #[test]
        fn construction_rejects_inverted_ranges(a in any_day(), b in any_day()) {
            let built = DateRange::new(a, b);
            if a > b {
                prop_assert!(matches!(built, Err(DomainError::InvalidArgument(_))));
            } else {
                prop_assert!(built.is_ok());
            }
        }
    }
}
