//! This module defines the domain data types.

pub use category::{Category, CategoryName};
pub use expense::{Expense, ExpenseBuilder, ExpenseUpdate};

pub(crate) use expense::validate_amount;

mod category;
mod expense;

/// Alias for the integer type used for mapping to database IDs.
pub type DatabaseID = i64;
