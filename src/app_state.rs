//! Implements a struct that holds the state of the REST server.

use crate::stores::{CategoryStore, ExpenseStore};

/// The state of the REST server.
///
/// Holds the stores that the route handlers operate on. The state is cloned
/// per request; store implementations share their underlying connection, so
/// clones observe the same data.
#[derive(Debug, Clone)]
pub struct AppState<E, C>
where
    E: ExpenseStore,
    C: CategoryStore,
{
    /// The store for expenses.
    pub expense_store: E,

    /// The store for category registry entries.
    pub category_store: C,
}

impl<E, C> AppState<E, C>
where
    E: ExpenseStore,
    C: CategoryStore,
{
    /// Create a new [AppState] from the given stores.
    pub fn new(expense_store: E, category_store: C) -> Self {
        Self {
            expense_store,
            category_store,
        }
    }
}
