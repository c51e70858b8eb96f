//! This file defines the type `Expense`, the core type of the application.
//! An expense is a single recorded monetary outflow with an amount, a
//! category label, a calendar date and an optional free-text description.

use serde::{Deserialize, Serialize};
use time::Date;

use crate::{
    Error,
    models::{CategoryName, DatabaseID},
};

/// A single recorded monetary outflow.
///
/// To create a new `Expense`, use [Expense::build] and pass the resulting
/// builder to an expense store. Amounts are always greater than zero; an
/// amount that fails validation never reaches the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    id: DatabaseID,
    amount: f64,
    category: CategoryName,
    date: Date,
    description: String,
}

impl Expense {
    /// Create a builder for a new expense.
    ///
    /// # Errors
    /// This function will return an [Error::InvalidAmount] if `amount` is not
    /// a finite number greater than zero.
    pub fn build(amount: f64, category: CategoryName) -> Result<ExpenseBuilder, Error> {
        ExpenseBuilder::new(amount, category)
    }

    /// Create an expense from parts that have already been validated, e.g.,
    /// a row loaded from the database.
    ///
    /// This function has `_unchecked` in the name but is not `unsafe`, because
    /// violating the amount invariant causes incorrect behaviour but does not
    /// affect memory safety.
    pub fn new_unchecked(
        id: DatabaseID,
        amount: f64,
        category: CategoryName,
        date: Date,
        description: String,
    ) -> Self {
        Self {
            id,
            amount,
            category,
            date,
            description,
        }
    }

    /// The ID of the expense.
    pub fn id(&self) -> DatabaseID {
        self.id
    }

    /// The amount of money spent.
    pub fn amount(&self) -> f64 {
        self.amount
    }

    /// The category label classifying the expense's purpose.
    pub fn category(&self) -> &CategoryName {
        &self.category
    }

    /// The calendar date of the expense.
    pub fn date(&self) -> Date {
        self.date
    }

    /// A text description of what the expense was for. May be empty.
    pub fn description(&self) -> &str {
        &self.description
    }
}

/// Check that `amount` is a valid expense amount.
///
/// # Errors
/// Returns an [Error::InvalidAmount] if `amount` is not a finite number
/// greater than zero.
pub(crate) fn validate_amount(amount: f64) -> Result<f64, Error> {
    if amount.is_finite() && amount > 0.0 {
        Ok(amount)
    } else {
        Err(Error::InvalidAmount(amount))
    }
}

/// Builder for creating a new [Expense].
///
/// Finalize the builder by passing it to
/// [ExpenseStore::create](crate::stores::ExpenseStore::create).
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseBuilder {
    pub(crate) amount: f64,
    pub(crate) category: CategoryName,
    pub(crate) date: Date,
    pub(crate) description: String,
}

impl ExpenseBuilder {
    /// Create a builder for a new expense dated today (UTC).
    ///
    /// # Errors
    /// This function will return an [Error::InvalidAmount] if `amount` is not
    /// a finite number greater than zero.
    pub fn new(amount: f64, category: CategoryName) -> Result<Self, Error> {
        Ok(Self {
            amount: validate_amount(amount)?,
            category,
            date: time::OffsetDateTime::now_utc().date(),
            description: String::new(),
        })
    }

    /// Set the date for the expense.
    ///
    /// Future dates are allowed, e.g., for recording a scheduled bill.
    pub fn date(mut self, date: Date) -> Self {
        self.date = date;
        self
    }

    /// Set the description for the expense.
    pub fn description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    /// Attach the database ID assigned on insert, producing the final
    /// [Expense].
    pub fn finalise(self, id: DatabaseID) -> Expense {
        Expense {
            id,
            amount: self.amount,
            category: self.category,
            date: self.date,
            description: self.description,
        }
    }
}

/// A partial update to an existing [Expense].
///
/// Fields set to `None` keep their current value; fields set to `Some` replace
/// it. Supplied fields are validated with the same rules as
/// [ExpenseBuilder::new].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpenseUpdate {
    /// The new amount, which must be a finite number greater than zero.
    pub amount: Option<f64>,
    /// The new category label.
    pub category: Option<CategoryName>,
    /// The new calendar date.
    pub date: Option<Date>,
    /// The new description.
    pub description: Option<String>,
}

#[cfg(test)]
mod expense_builder_tests {
    use time::macros::date;

    use crate::{Error, models::CategoryName};

    use super::ExpenseBuilder;

    fn food() -> CategoryName {
        CategoryName::new_unchecked("Food")
    }

    #[test]
    fn new_fails_on_zero_amount() {
        let builder = ExpenseBuilder::new(0.0, food());

        assert_eq!(builder, Err(Error::InvalidAmount(0.0)));
    }

    #[test]
    fn new_fails_on_negative_amount() {
        let builder = ExpenseBuilder::new(-19.99, food());

        assert_eq!(builder, Err(Error::InvalidAmount(-19.99)));
    }

    #[test]
    fn new_fails_on_non_finite_amount() {
        assert!(ExpenseBuilder::new(f64::NAN, food()).is_err());
        assert!(ExpenseBuilder::new(f64::INFINITY, food()).is_err());
    }

    #[test]
    fn new_succeeds_on_positive_amount() {
        let builder = ExpenseBuilder::new(19.99, food());

        assert!(builder.is_ok());
        assert_eq!(builder.unwrap().amount, 19.99);
    }

    #[test]
    fn builder_accepts_future_date() {
        let far_future = date!(2999 - 12 - 31);

        let builder = ExpenseBuilder::new(1.0, food()).unwrap().date(far_future);

        assert_eq!(builder.date, far_future);
    }

    #[test]
    fn finalise_keeps_all_fields() {
        let expense = ExpenseBuilder::new(12.50, food())
            .unwrap()
            .date(date!(2024 - 01 - 05))
            .description("lunch")
            .finalise(42);

        assert_eq!(expense.id(), 42);
        assert_eq!(expense.amount(), 12.50);
        assert_eq!(expense.category().as_ref(), "Food");
        assert_eq!(expense.date(), date!(2024 - 01 - 05));
        assert_eq!(expense.description(), "lunch");
    }
}
