//! Defines the category registry store trait.

use crate::{
    Error,
    models::{Category, CategoryName, DatabaseID},
};

/// Handles the creation and retrieval of category registry entries.
///
/// Names are unique within the registry. The registry does not constrain the
/// labels used on expenses; it exists so clients can offer a pick-list and
/// rename labels in one place.
pub trait CategoryStore {
    /// Create a new category in the store.
    fn create(&mut self, name: CategoryName) -> Result<Category, Error>;

    /// Retrieve a category from the store.
    fn get(&self, id: DatabaseID) -> Result<Category, Error>;

    /// Retrieve all categories, in name order.
    fn list(&self) -> Result<Vec<Category>, Error>;

    /// Change the name of an existing category.
    ///
    /// Renaming a category does not rewrite the label on existing expenses.
    fn rename(&mut self, id: DatabaseID, name: CategoryName) -> Result<Category, Error>;

    /// Remove a category from the store.
    fn delete(&mut self, id: DatabaseID) -> Result<(), Error>;
}
