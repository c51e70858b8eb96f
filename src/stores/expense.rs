//! Defines the expense store trait.

use std::ops::RangeInclusive;

use serde::Deserialize;
use time::Date;

use crate::{
    Error,
    models::{CategoryName, DatabaseID, Expense, ExpenseBuilder, ExpenseUpdate},
};

/// Handles the creation, retrieval and mutation of expenses.
pub trait ExpenseStore {
    /// Create a new expense in the store.
    fn create(&mut self, builder: ExpenseBuilder) -> Result<Expense, Error>;

    /// Retrieve an expense from the store.
    fn get(&self, id: DatabaseID) -> Result<Expense, Error>;

    /// Apply a partial update to an expense in the store.
    ///
    /// Only the fields supplied in `update` change; the rest keep their
    /// current values.
    fn update(&mut self, id: DatabaseID, update: ExpenseUpdate) -> Result<Expense, Error>;

    /// Remove an expense from the store.
    fn delete(&mut self, id: DatabaseID) -> Result<(), Error>;

    /// Retrieve expenses from the store in the way defined by `query`.
    fn get_query(&self, query: ExpenseQuery) -> Result<Vec<Expense>, Error>;

    /// Get the total number of expenses in the store.
    fn count(&self) -> Result<usize, Error>;
}

/// Defines how expenses should be fetched from [ExpenseStore::get_query].
#[derive(Default)]
pub struct ExpenseQuery {
    /// Include expenses within `date_range` (inclusive).
    pub date_range: Option<RangeInclusive<Date>>,
    /// Include only expenses with this category label.
    pub category: Option<CategoryName>,
    /// Selects up to the first N (`limit`) expenses.
    pub limit: Option<u64>,
    /// Skips the first N (`offset`) expenses.
    pub offset: u64,
    /// Orders expenses by date in the order `sort_date`. None returns expenses
    /// in the order they are stored (ascending ID).
    pub sort_date: Option<SortOrder>,
}

/// The order to sort expenses in an [ExpenseQuery].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum SortOrder {
    /// Sort in order of increasing value.
    #[serde(rename = "asc")]
    Ascending,
    /// Sort in order of decreasing value.
    #[serde(rename = "desc")]
    Descending,
}
