//! Calendar-month arithmetic shared by the tax accrual and loan engines.
//!
//! Both engines count obligation months the same way: the difference in
//! calendar months between two instants (day-of-month ignored), plus one to
//! include the starting month. An `as_of` before the start clamps to zero
//! before the inclusion, so the minimum inclusive count is 1 once `as_of`
//! reaches the starting month.

use chrono::{DateTime, Datelike, Utc};

/// Signed calendar-month difference between `start` and `end`.
///
/// Only year and month are considered: the 31st of January to the 1st of
/// February is one month. Negative when `end` precedes `start`.
pub fn calendar_months_between(start: DateTime<Utc>, end: DateTime<Utc>) -> i64 {
    let years = i64::from(end.year()) - i64::from(start.year());
    let months = i64::from(end.month()) - i64::from(start.month());
    years * 12 + months
}

/// Inclusive month count from `start` through `end`.
///
/// Clamped so an `end` before `start` yields 0 elapsed months (and therefore
/// an inclusive count of 1 only once `end` enters the starting month).
pub fn months_inclusive(start: DateTime<Utc>, end: DateTime<Utc>) -> i64 {
    calendar_months_between(start, end).max(0) + 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use proptest::prelude::*;

    fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap()
    }

    #[test]
    fn same_month_counts_as_one() {
        assert_eq!(months_inclusive(at(2024, 1, 1), at(2024, 1, 31)), 1);
    }

    #[test]
    fn day_of_month_is_ignored() {
        // Jan 31st to Feb 1st is still a full calendar month apart.
        assert_eq!(calendar_months_between(at(2024, 1, 31), at(2024, 2, 1)), 1);
        assert_eq!(months_inclusive(at(2024, 1, 31), at(2024, 2, 1)), 2);
    }

    #[test]
    fn crosses_year_boundaries() {
        assert_eq!(calendar_months_between(at(2023, 11, 15), at(2024, 2, 15)), 3);
        assert_eq!(months_inclusive(at(2023, 11, 15), at(2024, 2, 15)), 4);
    }

    #[test]
    fn end_before_start_clamps() {
        assert_eq!(calendar_months_between(at(2024, 5, 1), at(2024, 2, 1)), -3);
        assert_eq!(months_inclusive(at(2024, 5, 1), at(2024, 2, 1)), 1);
    }

    proptest! {
        /// Property: the inclusive count never decreases as `end` moves forward.
        #[test]
        fn inclusive_count_is_monotonic_in_end(
            start_month in 1u32..=12,
            a_month in 0i64..120,
            b_month in 0i64..120,
        ) {
            let start = at(2020, start_month, 15);
            let (early, late) = if a_month <= b_month { (a_month, b_month) } else { (b_month, a_month) };
            let end_early = at(2020 + (start_month as i64 - 1 + early) as i32 / 12,
                               ((start_month as i64 - 1 + early) % 12 + 1) as u32, 15);
            let end_late = at(2020 + (start_month as i64 - 1 + late) as i32 / 12,
                              ((start_month as i64 - 1 + late) % 12 + 1) as u32, 15);
            prop_assert!(months_inclusive(start, end_early) <= months_inclusive(start, end_late));
        }
    }
}
