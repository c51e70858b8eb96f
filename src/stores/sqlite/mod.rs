//! Contains convenience type alias and function for [AppState] that uses
//! the SQLite backend.

pub mod category;
pub mod expense;

pub use category::SQLiteCategoryStore;
pub use expense::SQLiteExpenseStore;

use std::sync::{Arc, Mutex};

use rusqlite::Connection;

use crate::{AppState, Error, db::initialize};

/// An alias for an [AppState] that uses SQLite for the backend.
pub type SQLAppState = AppState<SQLiteExpenseStore, SQLiteCategoryStore>;

/// Creates an [AppState] instance that uses SQLite for the backend.
///
/// This function will modify the database by adding the tables for the domain
/// models to the database.
///
/// # Errors
/// Returns an error if the database schema cannot be created.
pub fn create_app_state(db_connection: Connection) -> Result<SQLAppState, Error> {
    initialize(&db_connection)?;

    let connection = Arc::new(Mutex::new(db_connection));
    let expense_store = SQLiteExpenseStore::new(connection.clone());
    let category_store = SQLiteCategoryStore::new(connection);

    Ok(AppState::new(expense_store, category_store))
}
