//! The API endpoints URIs.
//!
//! For endpoints that take a parameter, e.g., '/expenses/{expense_id}', use
//! [format_endpoint].

use crate::models::DatabaseID;

/// The route to access expenses.
pub const EXPENSES: &str = "/expenses";
/// The route to access a single expense.
pub const EXPENSE: &str = "/expenses/{expense_id}";
/// The route to access the category registry.
pub const CATEGORIES: &str = "/categories";
/// The route to access a single category.
pub const CATEGORY: &str = "/categories/{category_id}";
/// The route for per-category monthly spending totals.
pub const MONTHLY_REPORT: &str = "/reports/monthly";
/// The route for overall monthly spending totals.
pub const MONTHLY_TOTALS: &str = "/reports/monthly/totals";
/// The route for per-category yearly spending totals.
pub const YEARLY_REPORT: &str = "/reports/yearly";
/// The route for overall yearly spending totals.
pub const YEARLY_TOTALS: &str = "/reports/yearly/totals";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// This function assumes that an endpoint path will only have a single
/// parameter, and will only replace the first one.
pub fn format_endpoint(endpoint_path: &str, id: DatabaseID) -> String {
    match (endpoint_path.find('{'), endpoint_path.find('}')) {
        (Some(start), Some(end)) if start < end => format!(
            "{}{}{}",
            &endpoint_path[..start],
            id,
            &endpoint_path[end + 1..]
        ),
        _ => endpoint_path.to_string(),
    }
}
