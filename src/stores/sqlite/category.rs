//! Implements a SQLite backed category registry store.
use std::sync::{Arc, Mutex};

use rusqlite::{Connection, Row};

use crate::{
    Error,
    db::{CreateTable, MapRow},
    models::{Category, CategoryName, DatabaseID},
    stores::CategoryStore,
};

/// Stores category registry entries in a SQLite database.
#[derive(Debug, Clone)]
pub struct SQLiteCategoryStore {
    connection: Arc<Mutex<Connection>>,
}

impl SQLiteCategoryStore {
    /// Create a new store for the SQLite `connection`.
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }
}

impl CategoryStore for SQLiteCategoryStore {
    /// Create a new category in the database.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::DuplicateCategoryName] if the name already exists in the
    ///   registry,
    /// - or [Error::SqlError] if there is some other SQL error.
    fn create(&mut self, name: CategoryName) -> Result<Category, Error> {
        let category = self
            .connection
            .lock()
            .unwrap()
            .prepare("INSERT INTO category (name) VALUES (?1) RETURNING id, name")?
            .query_row((name.as_ref(),), Self::map_row)
            .map_err(|error| match error {
                // Code 2067 occurs when a UNIQUE constraint failed.
                rusqlite::Error::SqliteFailure(error, Some(_)) if error.extended_code == 2067 => {
                    Error::DuplicateCategoryName(name.to_string())
                }
                error => error.into(),
            })?;

        Ok(category)
    }

    /// Retrieve a category in the database by its `id`.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::NotFound] if `id` does not refer to a valid category,
    /// - or [Error::SqlError] if there is some other SQL error.
    fn get(&self, id: DatabaseID) -> Result<Category, Error> {
        let category = self
            .connection
            .lock()
            .unwrap()
            .prepare("SELECT id, name FROM category WHERE id = :id")?
            .query_row(&[(":id", &id)], Self::map_row)?;

        Ok(category)
    }

    /// Retrieve all categories in the database, in name order.
    ///
    /// # Errors
    /// This function will return an [Error::SqlError] if there is an SQL
    /// error.
    fn list(&self) -> Result<Vec<Category>, Error> {
        self.connection
            .lock()
            .unwrap()
            .prepare("SELECT id, name FROM category ORDER BY name ASC")?
            .query_map([], Self::map_row)?
            .map(|maybe_category| maybe_category.map_err(Error::SqlError))
            .collect()
    }

    /// Change the name of an existing category.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::NotFound] if `id` does not refer to a valid category,
    /// - [Error::DuplicateCategoryName] if the new name already exists in the
    ///   registry,
    /// - or [Error::SqlError] if there is some other SQL error.
    fn rename(&mut self, id: DatabaseID, name: CategoryName) -> Result<Category, Error> {
        let category = self
            .connection
            .lock()
            .unwrap()
            .prepare("UPDATE category SET name = ?1 WHERE id = ?2 RETURNING id, name")?
            .query_row((name.as_ref(), id), Self::map_row)
            .map_err(|error| match error {
                // Code 2067 occurs when a UNIQUE constraint failed.
                rusqlite::Error::SqliteFailure(error, Some(_)) if error.extended_code == 2067 => {
                    Error::DuplicateCategoryName(name.to_string())
                }
                error => error.into(),
            })?;

        Ok(category)
    }

    /// Remove a category from the database.
    ///
    /// Expenses that use the category's label are not affected.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::NotFound] if `id` does not refer to a valid category,
    /// - or [Error::SqlError] if there is some other SQL error.
    fn delete(&mut self, id: DatabaseID) -> Result<(), Error> {
        let rows_deleted = self
            .connection
            .lock()
            .unwrap()
            .execute("DELETE FROM category WHERE id = ?1", [id])?;

        if rows_deleted == 0 {
            Err(Error::NotFound)
        } else {
            Ok(())
        }
    }
}

impl CreateTable for SQLiteCategoryStore {
    fn create_table(connection: &Connection) -> Result<(), rusqlite::Error> {
        connection.execute(
            "CREATE TABLE IF NOT EXISTS category (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    name TEXT NOT NULL UNIQUE
                    )",
            (),
        )?;

        Ok(())
    }
}

impl MapRow for SQLiteCategoryStore {
    type ReturnType = Category;

    fn map_row_with_offset(row: &Row, offset: usize) -> Result<Self::ReturnType, rusqlite::Error> {
        let id = row.get(offset)?;

        let raw_name: String = row.get(offset + 1)?;
        let name = CategoryName::new_unchecked(&raw_name);

        Ok(Category::new(id, name))
    }
}
