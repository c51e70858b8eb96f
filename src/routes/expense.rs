//! This file defines the API routes for creating, retrieving, updating,
//! deleting and listing expenses.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use time::Date;

use crate::{
    AppState, Error,
    models::{CategoryName, DatabaseID, Expense, ExpenseUpdate},
    routes::date_range_from_bounds,
    stores::{CategoryStore, ExpenseQuery, ExpenseStore, SortOrder},
};

/// The data for creating a new expense.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExpenseData {
    /// The amount of money spent. Must be greater than zero.
    pub amount: f64,
    /// The category label classifying the expense.
    pub category: String,
    /// The calendar date of the expense, e.g., "2024-01-05".
    pub date: Date,
    /// A text description of what the expense was for.
    #[serde(default)]
    pub description: String,
}

/// The data for partially updating an expense.
///
/// Omitted fields keep their current values.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct UpdateExpenseData {
    /// The new amount. Must be greater than zero.
    pub amount: Option<f64>,
    /// The new category label.
    pub category: Option<String>,
    /// The new calendar date.
    pub date: Option<Date>,
    /// The new description.
    pub description: Option<String>,
}

/// The query parameters for listing expenses.
#[derive(Debug, Default, Deserialize)]
pub struct ExpenseListParams {
    /// Include only expenses on or after this date.
    pub from: Option<Date>,
    /// Include only expenses on or before this date.
    pub to: Option<Date>,
    /// Include only expenses with this category label.
    pub category: Option<String>,
    /// Return at most this many expenses.
    pub limit: Option<u64>,
    /// Skip this many expenses.
    #[serde(default)]
    pub offset: u64,
    /// Sort by date, either "asc" or "desc".
    pub sort: Option<SortOrder>,
}

/// A route handler for creating a new expense.
pub async fn create_expense<E, C>(
    State(mut state): State<AppState<E, C>>,
    Json(data): Json<ExpenseData>,
) -> Result<(StatusCode, Json<Expense>), Error>
where
    E: ExpenseStore + Clone + Send + Sync + 'static,
    C: CategoryStore + Clone + Send + Sync + 'static,
{
    let category = CategoryName::new(&data.category)?;
    let builder = Expense::build(data.amount, category)?
        .date(data.date)
        .description(&data.description);

    let expense = state.expense_store.create(builder)?;

    Ok((StatusCode::CREATED, Json(expense)))
}

/// A route handler for getting an expense by its database ID.
///
/// This function will return the status code 404 if the requested resource
/// does not exist (e.g., not created yet).
pub async fn get_expense<E, C>(
    State(state): State<AppState<E, C>>,
    Path(expense_id): Path<DatabaseID>,
) -> Result<Json<Expense>, Error>
where
    E: ExpenseStore + Clone + Send + Sync + 'static,
    C: CategoryStore + Clone + Send + Sync + 'static,
{
    state.expense_store.get(expense_id).map(Json)
}

/// A route handler for partially updating an expense.
///
/// Only the fields present in the request body change; the rest keep their
/// stored values.
pub async fn update_expense<E, C>(
    State(mut state): State<AppState<E, C>>,
    Path(expense_id): Path<DatabaseID>,
    Json(data): Json<UpdateExpenseData>,
) -> Result<Json<Expense>, Error>
where
    E: ExpenseStore + Clone + Send + Sync + 'static,
    C: CategoryStore + Clone + Send + Sync + 'static,
{
    let update = ExpenseUpdate {
        amount: data.amount,
        category: data
            .category
            .as_deref()
            .map(CategoryName::new)
            .transpose()?,
        date: data.date,
        description: data.description,
    };

    state.expense_store.update(expense_id, update).map(Json)
}

/// A route handler for deleting an expense.
pub async fn delete_expense<E, C>(
    State(mut state): State<AppState<E, C>>,
    Path(expense_id): Path<DatabaseID>,
) -> Result<StatusCode, Error>
where
    E: ExpenseStore + Clone + Send + Sync + 'static,
    C: CategoryStore + Clone + Send + Sync + 'static,
{
    state.expense_store.delete(expense_id)?;

    Ok(StatusCode::NO_CONTENT)
}

/// A route handler for listing expenses, optionally filtered by date range
/// and category.
pub async fn list_expenses<E, C>(
    State(state): State<AppState<E, C>>,
    Query(params): Query<ExpenseListParams>,
) -> Result<Json<Vec<Expense>>, Error>
where
    E: ExpenseStore + Clone + Send + Sync + 'static,
    C: CategoryStore + Clone + Send + Sync + 'static,
{
    let query = ExpenseQuery {
        date_range: date_range_from_bounds(params.from, params.to),
        category: params
            .category
            .as_deref()
            .map(CategoryName::new)
            .transpose()?,
        limit: params.limit,
        offset: params.offset,
        sort_date: params.sort,
    };

    state.expense_store.get_query(query).map(Json)
}
