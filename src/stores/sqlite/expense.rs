//! Implements a SQLite backed expense store.
use std::sync::{Arc, Mutex};

use rusqlite::{Connection, Row, params_from_iter, types::Value};

use crate::{
    Error,
    db::{CreateTable, MapRow},
    models::{
        CategoryName, DatabaseID, Expense, ExpenseBuilder, ExpenseUpdate, validate_amount,
    },
    stores::{
        ExpenseStore,
        expense::{ExpenseQuery, SortOrder},
    },
};

/// Stores expenses in a SQLite database.
#[derive(Debug, Clone)]
pub struct SQLiteExpenseStore {
    connection: Arc<Mutex<Connection>>,
}

impl SQLiteExpenseStore {
    /// Create a new store for the SQLite `connection`.
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }
}

impl ExpenseStore for SQLiteExpenseStore {
    /// Create a new expense in the database.
    ///
    /// The builder has already validated the amount and category, so the only
    /// errors left are SQL errors.
    ///
    /// # Errors
    /// This function will return an [Error::SqlError] if there is an SQL
    /// error.
    fn create(&mut self, builder: ExpenseBuilder) -> Result<Expense, Error> {
        let connection = self.connection.lock().unwrap();

        let expense = connection
            .prepare(
                "INSERT INTO expense (amount, category, date, description)
                 VALUES (?1, ?2, ?3, ?4)
                 RETURNING id, amount, category, date, description",
            )?
            .query_row(
                (
                    builder.amount,
                    builder.category.as_ref(),
                    builder.date,
                    &builder.description,
                ),
                Self::map_row,
            )?;

        Ok(expense)
    }

    /// Retrieve an expense in the database by its `id`.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::NotFound] if `id` does not refer to a valid expense,
    /// - or [Error::SqlError] if there is some other SQL error.
    fn get(&self, id: DatabaseID) -> Result<Expense, Error> {
        let expense = self
            .connection
            .lock()
            .unwrap()
            .prepare(
                "SELECT id, amount, category, date, description FROM expense WHERE id = :id",
            )?
            .query_row(&[(":id", &id)], Self::map_row)?;

        Ok(expense)
    }

    /// Apply a partial update to an expense in the database.
    ///
    /// Only the fields supplied in `update` change; the rest keep their
    /// stored values.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::InvalidAmount] if the supplied amount is not a finite number
    ///   greater than zero,
    /// - [Error::NotFound] if `id` does not refer to a valid expense,
    /// - or [Error::SqlError] if there is some other SQL error.
    fn update(&mut self, id: DatabaseID, update: ExpenseUpdate) -> Result<Expense, Error> {
        let mut set_clause_parts = vec![];
        let mut query_parameters = vec![];

        if let Some(amount) = update.amount {
            validate_amount(amount)?;
            set_clause_parts.push(format!("amount = ?{}", query_parameters.len() + 1));
            query_parameters.push(Value::Real(amount));
        }

        if let Some(category) = update.category {
            set_clause_parts.push(format!("category = ?{}", query_parameters.len() + 1));
            query_parameters.push(Value::Text(category.to_string()));
        }

        if let Some(date) = update.date {
            set_clause_parts.push(format!("date = ?{}", query_parameters.len() + 1));
            query_parameters.push(Value::Text(date.to_string()));
        }

        if let Some(description) = update.description {
            set_clause_parts.push(format!("description = ?{}", query_parameters.len() + 1));
            query_parameters.push(Value::Text(description));
        }

        // An update with no fields is a no-op, but must still report a missing id.
        if set_clause_parts.is_empty() {
            return self.get(id);
        }

        query_parameters.push(Value::Integer(id));

        let query_string = format!(
            "UPDATE expense SET {} WHERE id = ?{} RETURNING id, amount, category, date, description",
            set_clause_parts.join(", "),
            query_parameters.len(),
        );

        let expense = self
            .connection
            .lock()
            .unwrap()
            .prepare(&query_string)?
            .query_row(params_from_iter(query_parameters.iter()), Self::map_row)?;

        Ok(expense)
    }

    /// Remove an expense from the database.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::NotFound] if `id` does not refer to a valid expense,
    /// - or [Error::SqlError] if there is some other SQL error.
    fn delete(&mut self, id: DatabaseID) -> Result<(), Error> {
        let rows_deleted = self
            .connection
            .lock()
            .unwrap()
            .execute("DELETE FROM expense WHERE id = ?1", [id])?;

        if rows_deleted == 0 {
            Err(Error::NotFound)
        } else {
            Ok(())
        }
    }

    /// Query for expenses in the database.
    ///
    /// Without an explicit sort order, expenses are returned in ascending ID
    /// order, which is stable across calls.
    ///
    /// # Errors
    /// This function will return an [Error::SqlError] if there is an SQL
    /// error.
    fn get_query(&self, filter: ExpenseQuery) -> Result<Vec<Expense>, Error> {
        let mut query_string_parts =
            vec!["SELECT id, amount, category, date, description FROM expense".to_string()];
        let mut where_clause_parts = vec![];
        let mut query_parameters = vec![];

        if let Some(date_range) = filter.date_range {
            where_clause_parts.push(format!(
                "date BETWEEN ?{} AND ?{}",
                query_parameters.len() + 1,
                query_parameters.len() + 2,
            ));
            query_parameters.push(Value::Text(date_range.start().to_string()));
            query_parameters.push(Value::Text(date_range.end().to_string()));
        }

        if let Some(category) = filter.category {
            where_clause_parts.push(format!("category = ?{}", query_parameters.len() + 1));
            query_parameters.push(Value::Text(category.to_string()));
        }

        if !where_clause_parts.is_empty() {
            query_string_parts.push(String::from("WHERE ") + &where_clause_parts.join(" AND "));
        }

        match filter.sort_date {
            Some(SortOrder::Ascending) => query_string_parts.push("ORDER BY date ASC".to_string()),
            Some(SortOrder::Descending) => {
                query_string_parts.push("ORDER BY date DESC".to_string())
            }
            None => query_string_parts.push("ORDER BY id ASC".to_string()),
        }

        if let Some(limit) = filter.limit {
            query_string_parts.push(format!("LIMIT {limit} OFFSET {}", filter.offset));
        }

        let query_string = query_string_parts.join(" ");
        let params = params_from_iter(query_parameters.iter());

        self.connection
            .lock()
            .unwrap()
            .prepare(&query_string)?
            .query_map(params, Self::map_row)?
            .map(|maybe_expense| maybe_expense.map_err(Error::SqlError))
            .collect()
    }

    /// Get the total number of expenses in the database.
    ///
    /// # Errors
    /// This function will return an [Error::SqlError] if there is some SQL error.
    fn count(&self) -> Result<usize, Error> {
        self.connection
            .lock()
            .unwrap()
            .query_row("SELECT COUNT(id) FROM expense;", [], |row| {
                row.get::<_, i64>(0).map(|count| count as usize)
            })
            .map_err(|error| error.into())
    }
}

impl CreateTable for SQLiteExpenseStore {
    fn create_table(connection: &Connection) -> Result<(), rusqlite::Error> {
        connection.execute(
            "CREATE TABLE IF NOT EXISTS expense (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    amount REAL NOT NULL,
                    category TEXT NOT NULL,
                    date TEXT NOT NULL,
                    description TEXT NOT NULL
                    )",
            (),
        )?;

        Ok(())
    }
}

impl MapRow for SQLiteExpenseStore {
    type ReturnType = Expense;

    fn map_row_with_offset(row: &Row, offset: usize) -> Result<Self::ReturnType, rusqlite::Error> {
        let id = row.get(offset)?;
        let amount = row.get(offset + 1)?;

        let raw_category: String = row.get(offset + 2)?;
        let category = CategoryName::new_unchecked(&raw_category);

        let date = row.get(offset + 3)?;
        let description = row.get(offset + 4)?;

        Ok(Expense::new_unchecked(id, amount, category, date, description))
    }
}
