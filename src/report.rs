//! Expense aggregation for monthly and yearly spending reports.
//!
//! Everything in this module is a pure function over an explicit expense
//! slice: the output depends only on the multiset of expenses passed in,
//! never on store iteration order or prior calls. This keeps reports
//! deterministic and testable independently of the store.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use time::Date;

use crate::models::{CategoryName, Expense};

/// The calendar granularity used to group expenses for a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    /// Group expenses by calendar month.
    Monthly,
    /// Group expenses by calendar year.
    Yearly,
}

/// A calendar grouping (month or year) used to aggregate expenses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PeriodBucket {
    /// A calendar month, e.g., January 2024.
    Month {
        /// The calendar year.
        year: i32,
        /// The month number, 1 (January) through 12 (December).
        month: u8,
    },
    /// A calendar year.
    Year {
        /// The calendar year.
        year: i32,
    },
}

impl PeriodBucket {
    /// The bucket that `date` falls into for the given `period`.
    pub fn from_date(date: Date, period: Period) -> Self {
        match period {
            Period::Monthly => PeriodBucket::Month {
                year: date.year(),
                month: u8::from(date.month()),
            },
            Period::Yearly => PeriodBucket::Year { year: date.year() },
        }
    }

    /// The calendar year of the bucket.
    pub fn year(&self) -> i32 {
        match self {
            PeriodBucket::Month { year, .. } | PeriodBucket::Year { year } => *year,
        }
    }

    /// The month number of the bucket, or `None` for a yearly bucket.
    pub fn month(&self) -> Option<u8> {
        match self {
            PeriodBucket::Month { month, .. } => Some(*month),
            PeriodBucket::Year { .. } => None,
        }
    }
}

/// Total the expense amounts per (period bucket, category) pair.
///
/// Buckets with no expenses are never emitted, so the empty slice yields an
/// empty map. The map is ordered by bucket, then category name.
pub fn summarize(
    expenses: &[Expense],
    period: Period,
) -> BTreeMap<(PeriodBucket, CategoryName), f64> {
    let mut totals = BTreeMap::new();

    for expense in expenses {
        let bucket = PeriodBucket::from_date(expense.date(), period);
        let key = (bucket, expense.category().clone());
        *totals.entry(key).or_insert(0.0) += expense.amount();
    }

    totals
}

/// Total the expense amounts per period bucket, folding categories together.
pub fn totals_by_period(expenses: &[Expense], period: Period) -> BTreeMap<PeriodBucket, f64> {
    let mut totals = BTreeMap::new();

    for expense in expenses {
        let bucket = PeriodBucket::from_date(expense.date(), period);
        *totals.entry(bucket).or_insert(0.0) += expense.amount();
    }

    totals
}

#[cfg(test)]
mod report_tests {
    use time::macros::date;

    use crate::models::{CategoryName, Expense};

    use super::{Period, PeriodBucket, summarize, totals_by_period};

    fn create_test_expense(id: i64, amount: f64, category: &str, date: time::Date) -> Expense {
        Expense::new_unchecked(
            id,
            amount,
            CategoryName::new_unchecked(category),
            date,
            String::new(),
        )
    }

    fn food() -> CategoryName {
        CategoryName::new_unchecked("Food")
    }

    fn bills() -> CategoryName {
        CategoryName::new_unchecked("Bills")
    }

    #[test]
    fn summarize_monthly_groups_by_month_and_category() {
        let expenses = vec![
            create_test_expense(1, 10.0, "Food", date!(2024 - 01 - 05)),
            create_test_expense(2, 5.0, "Food", date!(2024 - 01 - 20)),
            create_test_expense(3, 20.0, "Bills", date!(2024 - 02 - 01)),
        ];

        let result = summarize(&expenses, Period::Monthly);

        assert_eq!(result.len(), 2);
        assert_eq!(
            result[&(PeriodBucket::Month { year: 2024, month: 1 }, food())],
            15.0
        );
        assert_eq!(
            result[&(PeriodBucket::Month { year: 2024, month: 2 }, bills())],
            20.0
        );
    }

    #[test]
    fn summarize_yearly_groups_by_year_and_category() {
        let expenses = vec![
            create_test_expense(1, 10.0, "Food", date!(2023 - 12 - 31)),
            create_test_expense(2, 5.0, "Food", date!(2024 - 01 - 01)),
            create_test_expense(3, 20.0, "Food", date!(2024 - 06 - 15)),
        ];

        let result = summarize(&expenses, Period::Yearly);

        assert_eq!(result.len(), 2);
        assert_eq!(result[&(PeriodBucket::Year { year: 2023 }, food())], 10.0);
        assert_eq!(result[&(PeriodBucket::Year { year: 2024 }, food())], 25.0);
    }

    #[test]
    fn summarize_splits_categories_within_a_bucket() {
        let expenses = vec![
            create_test_expense(1, 10.0, "Food", date!(2024 - 01 - 05)),
            create_test_expense(2, 20.0, "Bills", date!(2024 - 01 - 06)),
        ];

        let result = summarize(&expenses, Period::Monthly);

        assert_eq!(result.len(), 2);
        assert_eq!(
            result[&(PeriodBucket::Month { year: 2024, month: 1 }, food())],
            10.0
        );
        assert_eq!(
            result[&(PeriodBucket::Month { year: 2024, month: 1 }, bills())],
            20.0
        );
    }

    #[test]
    fn summarize_handles_empty_input() {
        let result = summarize(&[], Period::Monthly);
        assert!(result.is_empty());

        let result = summarize(&[], Period::Yearly);
        assert!(result.is_empty());
    }

    #[test]
    fn summarize_total_equals_sum_of_amounts() {
        let expenses = vec![
            create_test_expense(1, 1.25, "Food", date!(2023 - 11 - 02)),
            create_test_expense(2, 2.50, "Bills", date!(2024 - 01 - 09)),
            create_test_expense(3, 7.75, "Food", date!(2024 - 01 - 23)),
            create_test_expense(4, 14.00, "Entertainment", date!(2024 - 07 - 14)),
        ];
        let want: f64 = expenses.iter().map(|expense| expense.amount()).sum();

        for period in [Period::Monthly, Period::Yearly] {
            let got: f64 = summarize(&expenses, period).values().sum();

            assert!(
                (got - want).abs() < f64::EPSILON,
                "want total {want}, got {got}"
            );
        }
    }

    #[test]
    fn summarize_is_independent_of_input_order() {
        let mut expenses = vec![
            create_test_expense(1, 10.0, "Food", date!(2024 - 01 - 05)),
            create_test_expense(2, 5.0, "Food", date!(2024 - 01 - 20)),
            create_test_expense(3, 20.0, "Bills", date!(2024 - 02 - 01)),
        ];

        let forward = summarize(&expenses, Period::Monthly);
        expenses.reverse();
        let backward = summarize(&expenses, Period::Monthly);

        assert_eq!(forward, backward);
    }

    #[test]
    fn totals_by_period_folds_categories_together() {
        let expenses = vec![
            create_test_expense(1, 10.0, "Food", date!(2024 - 01 - 05)),
            create_test_expense(2, 5.0, "Food", date!(2024 - 01 - 20)),
            create_test_expense(3, 20.0, "Bills", date!(2024 - 01 - 25)),
            create_test_expense(4, 40.0, "Bills", date!(2024 - 02 - 01)),
        ];

        let result = totals_by_period(&expenses, Period::Monthly);

        assert_eq!(result.len(), 2);
        assert_eq!(result[&PeriodBucket::Month { year: 2024, month: 1 }], 35.0);
        assert_eq!(result[&PeriodBucket::Month { year: 2024, month: 2 }], 40.0);
    }

    #[test]
    fn totals_by_period_handles_empty_input() {
        let result = totals_by_period(&[], Period::Yearly);

        assert!(result.is_empty());
    }

    #[test]
    fn monthly_buckets_order_by_year_then_month() {
        let earlier = PeriodBucket::Month { year: 2023, month: 12 };
        let later = PeriodBucket::Month { year: 2024, month: 1 };

        assert!(earlier < later);
    }
}
