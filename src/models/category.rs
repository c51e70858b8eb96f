//! This file defines the `CategoryName` type and the `Category` registry
//! entry. A category name acts as a label for an expense; the registry keeps
//! the labels a user has defined so clients can offer them as a pick-list.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::{Error, models::DatabaseID};

/// The name of a category, e.g., 'Food', 'Entertainment', 'Bills'.
///
/// The set of names is open: an expense may use a label that has never been
/// registered as a [Category].
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CategoryName(String);

impl CategoryName {
    /// Create a category name.
    ///
    /// # Errors
    /// This function will return an [Error::EmptyCategoryName] if `name` is an
    /// empty string.
    pub fn new(name: &str) -> Result<Self, Error> {
        if name.is_empty() {
            Err(Error::EmptyCategoryName)
        } else {
            Ok(Self(name.to_string()))
        }
    }

    /// Create a category name without validation.
    ///
    /// The caller should ensure that the string is not empty.
    ///
    /// This function has `_unchecked` in the name but is not `unsafe`, because
    /// if the non-empty invariant is violated it will cause incorrect
    /// behaviour but not affect memory safety.
    pub fn new_unchecked(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl AsRef<str> for CategoryName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for CategoryName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An entry in the category registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub struct Category {
    id: DatabaseID,
    name: CategoryName,
}

impl Category {
    /// Create a new category registry entry.
    pub fn new(id: DatabaseID, name: CategoryName) -> Self {
        Self { id, name }
    }

    /// The id of the category.
    pub fn id(&self) -> DatabaseID {
        self.id
    }

    /// The name of the category.
    pub fn name(&self) -> &CategoryName {
        &self.name
    }
}
