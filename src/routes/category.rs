//! This file defines the API routes for managing the category registry.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use crate::{
    AppState, Error,
    models::{Category, CategoryName, DatabaseID},
    stores::{CategoryStore, ExpenseStore},
};

/// The data for creating categories.
#[derive(Debug, Serialize, Deserialize)]
pub struct CategoryData {
    /// One or more category names, comma separated, e.g.,
    /// "Food,Transport,Entertainment". Whitespace around names is trimmed.
    pub names: String,
}

/// The data for renaming a category.
#[derive(Debug, Serialize, Deserialize)]
pub struct RenameCategoryData {
    /// The new category name.
    pub name: String,
}

/// A route handler for creating one or more categories from a comma
/// separated list of names.
///
/// Returns the full category registry after insertion. Names are validated
/// up front, so an empty name rejects the request before anything is
/// inserted; a duplicate name aborts the request and names inserted before
/// it remain.
pub async fn create_categories<E, C>(
    State(mut state): State<AppState<E, C>>,
    Json(data): Json<CategoryData>,
) -> Result<(StatusCode, Json<Vec<Category>>), Error>
where
    E: ExpenseStore + Clone + Send + Sync + 'static,
    C: CategoryStore + Clone + Send + Sync + 'static,
{
    let names = data
        .names
        .split(',')
        .map(|name| CategoryName::new(name.trim()))
        .collect::<Result<Vec<_>, _>>()?;

    for name in names {
        state.category_store.create(name)?;
    }

    let categories = state.category_store.list()?;

    Ok((StatusCode::CREATED, Json(categories)))
}

/// A route handler for listing all categories in name order.
pub async fn list_categories<E, C>(
    State(state): State<AppState<E, C>>,
) -> Result<Json<Vec<Category>>, Error>
where
    E: ExpenseStore + Clone + Send + Sync + 'static,
    C: CategoryStore + Clone + Send + Sync + 'static,
{
    state.category_store.list().map(Json)
}

/// A route handler for renaming a category.
///
/// Renaming a category does not rewrite the label on existing expenses.
pub async fn rename_category<E, C>(
    State(mut state): State<AppState<E, C>>,
    Path(category_id): Path<DatabaseID>,
    Json(data): Json<RenameCategoryData>,
) -> Result<Json<Category>, Error>
where
    E: ExpenseStore + Clone + Send + Sync + 'static,
    C: CategoryStore + Clone + Send + Sync + 'static,
{
    let name = CategoryName::new(&data.name)?;

    state.category_store.rename(category_id, name).map(Json)
}

/// A route handler for deleting a category.
pub async fn delete_category<E, C>(
    State(mut state): State<AppState<E, C>>,
    Path(category_id): Path<DatabaseID>,
) -> Result<StatusCode, Error>
where
    E: ExpenseStore + Clone + Send + Sync + 'static,
    C: CategoryStore + Clone + Send + Sync + 'static,
{
    state.category_store.delete(category_id)?;

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod category_route_tests {
    use axum_test::TestServer;
    use rusqlite::Connection;
    use serde_json::json;

    use crate::{
        build_router,
        models::Category,
        routes::endpoints::{self, format_endpoint},
        stores::sqlite::create_app_state,
    };

    fn get_test_server() -> TestServer {
        let db_connection =
            Connection::open_in_memory().expect("Could not open database in memory.");
        let state = create_app_state(db_connection).expect("Could not create app state.");

        TestServer::new(build_router(state))
    }

    #[tokio::test]
    async fn create_categories_from_comma_separated_names() {
        let server = get_test_server();

        let response = server
            .post(endpoints::CATEGORIES)
            .json(&json!({ "names": "Food, Transport,Entertainment" }))
            .await;

        response.assert_status(axum::http::StatusCode::CREATED);

        let categories = response.json::<Vec<Category>>();
        let names: Vec<&str> = categories
            .iter()
            .map(|category| category.name().as_ref())
            .collect();

        // The registry is returned in name order.
        assert_eq!(names, vec!["Entertainment", "Food", "Transport"]);
    }

    #[tokio::test]
    async fn create_categories_fails_on_empty_name() {
        let server = get_test_server();

        let response = server
            .post(endpoints::CATEGORIES)
            .json(&json!({ "names": "Food,," }))
            .await;

        response.assert_status(axum::http::StatusCode::UNPROCESSABLE_ENTITY);

        // Validation happens before insertion, so nothing was created.
        let categories = server.get(endpoints::CATEGORIES).await.json::<Vec<Category>>();
        assert!(categories.is_empty());
    }

    #[tokio::test]
    async fn create_categories_fails_on_duplicate_name() {
        let server = get_test_server();
        server
            .post(endpoints::CATEGORIES)
            .json(&json!({ "names": "Food" }))
            .await
            .assert_status(axum::http::StatusCode::CREATED);

        let response = server
            .post(endpoints::CATEGORIES)
            .json(&json!({ "names": "Food" }))
            .await;

        response.assert_status(axum::http::StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn list_categories_returns_empty_registry() {
        let server = get_test_server();

        let response = server.get(endpoints::CATEGORIES).await;

        response.assert_status_ok();
        assert!(response.json::<Vec<Category>>().is_empty());
    }

    #[tokio::test]
    async fn rename_category_succeeds() {
        let server = get_test_server();
        let categories = server
            .post(endpoints::CATEGORIES)
            .json(&json!({ "names": "Grocery" }))
            .await
            .json::<Vec<Category>>();

        let response = server
            .put(&format_endpoint(endpoints::CATEGORY, categories[0].id()))
            .json(&json!({ "name": "Groceries" }))
            .await;

        response.assert_status_ok();

        let renamed = response.json::<Category>();
        assert_eq!(renamed.id(), categories[0].id());
        assert_eq!(renamed.name().as_ref(), "Groceries");
    }

    #[tokio::test]
    async fn rename_category_fails_on_invalid_id() {
        let server = get_test_server();

        let response = server
            .put(&format_endpoint(endpoints::CATEGORY, 999))
            .json(&json!({ "name": "Groceries" }))
            .await;

        response.assert_status_not_found();
    }

    #[tokio::test]
    async fn delete_category_removes_it_from_the_registry() {
        let server = get_test_server();
        let categories = server
            .post(endpoints::CATEGORIES)
            .json(&json!({ "names": "Food" }))
            .await
            .json::<Vec<Category>>();

        let response = server
            .delete(&format_endpoint(endpoints::CATEGORY, categories[0].id()))
            .await;

        response.assert_status(axum::http::StatusCode::NO_CONTENT);

        let remaining = server.get(endpoints::CATEGORIES).await.json::<Vec<Category>>();
        assert!(remaining.is_empty());
    }

    #[tokio::test]
    async fn delete_category_fails_on_invalid_id() {
        let server = get_test_server();

        let response = server
            .delete(&format_endpoint(endpoints::CATEGORY, 999))
            .await;

        response.assert_status_not_found();
    }
}
