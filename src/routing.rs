//! Application router configuration.

use axum::{
    Router, middleware,
    routing::{get, post},
};

use crate::{
    AppState,
    logging::logging_middleware,
    routes::{
        category::{create_categories, delete_category, list_categories, rename_category},
        endpoints,
        expense::{create_expense, delete_expense, get_expense, list_expenses, update_expense},
        report::{get_monthly_report, get_monthly_totals, get_yearly_report, get_yearly_totals},
    },
    stores::{CategoryStore, ExpenseStore},
};

/// Return a router with all the app's routes.
pub fn build_router<E, C>(state: AppState<E, C>) -> Router
where
    E: ExpenseStore + Clone + Send + Sync + 'static,
    C: CategoryStore + Clone + Send + Sync + 'static,
{
    Router::new()
        .route(
            endpoints::EXPENSES,
            post(create_expense::<E, C>).get(list_expenses::<E, C>),
        )
        .route(
            endpoints::EXPENSE,
            get(get_expense::<E, C>)
                .put(update_expense::<E, C>)
                .delete(delete_expense::<E, C>),
        )
        .route(
            endpoints::CATEGORIES,
            post(create_categories::<E, C>).get(list_categories::<E, C>),
        )
        .route(
            endpoints::CATEGORY,
            axum::routing::put(rename_category::<E, C>).delete(delete_category::<E, C>),
        )
        .route(endpoints::MONTHLY_REPORT, get(get_monthly_report::<E, C>))
        .route(endpoints::MONTHLY_TOTALS, get(get_monthly_totals::<E, C>))
        .route(endpoints::YEARLY_REPORT, get(get_yearly_report::<E, C>))
        .route(endpoints::YEARLY_TOTALS, get(get_yearly_totals::<E, C>))
        .layer(middleware::from_fn(logging_middleware))
        .with_state(state)
}
