//! This file defines the API routes for the monthly and yearly spending
//! reports.
//!
//! The handlers fetch the matching expenses from the store and hand them to
//! the pure aggregation functions in [crate::report]; all grouping decisions
//! live there.

use std::collections::BTreeMap;

use axum::{
    Json,
    extract::{Query, State},
};
use serde::{Deserialize, Serialize};
use time::Date;

use crate::{
    AppState, Error,
    models::{CategoryName, Expense},
    report::{Period, PeriodBucket, summarize, totals_by_period},
    routes::date_range_from_bounds,
    stores::{CategoryStore, ExpenseQuery, ExpenseStore},
};

/// The query parameters for the report routes.
#[derive(Debug, Default, Deserialize)]
pub struct ReportParams {
    /// Include only expenses on or after this date.
    pub from: Option<Date>,
    /// Include only expenses on or before this date.
    pub to: Option<Date>,
}

/// One entry of a per-category spending report.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    /// The calendar year of the bucket.
    pub year: i32,
    /// The month number of the bucket, or `null` for a yearly report.
    pub month: Option<u8>,
    /// The category label the total belongs to.
    pub category: String,
    /// The sum of the expense amounts in this bucket and category.
    pub total: f64,
}

/// One entry of an overall spending report.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct TotalsRow {
    /// The calendar year of the bucket.
    pub year: i32,
    /// The month number of the bucket, or `null` for a yearly report.
    pub month: Option<u8>,
    /// The sum of the expense amounts in this bucket.
    pub total: f64,
}

/// A route handler for the per-category monthly spending report.
pub async fn get_monthly_report<E, C>(
    State(state): State<AppState<E, C>>,
    Query(params): Query<ReportParams>,
) -> Result<Json<Vec<ReportRow>>, Error>
where
    E: ExpenseStore + Clone + Send + Sync + 'static,
    C: CategoryStore + Clone + Send + Sync + 'static,
{
    let expenses = fetch_expenses(&state, params)?;

    Ok(Json(to_report_rows(summarize(&expenses, Period::Monthly))))
}

/// A route handler for the per-category yearly spending report.
pub async fn get_yearly_report<E, C>(
    State(state): State<AppState<E, C>>,
    Query(params): Query<ReportParams>,
) -> Result<Json<Vec<ReportRow>>, Error>
where
    E: ExpenseStore + Clone + Send + Sync + 'static,
    C: CategoryStore + Clone + Send + Sync + 'static,
{
    let expenses = fetch_expenses(&state, params)?;

    Ok(Json(to_report_rows(summarize(&expenses, Period::Yearly))))
}

/// A route handler for the overall monthly spending totals.
pub async fn get_monthly_totals<E, C>(
    State(state): State<AppState<E, C>>,
    Query(params): Query<ReportParams>,
) -> Result<Json<Vec<TotalsRow>>, Error>
where
    E: ExpenseStore + Clone + Send + Sync + 'static,
    C: CategoryStore + Clone + Send + Sync + 'static,
{
    let expenses = fetch_expenses(&state, params)?;

    Ok(Json(to_totals_rows(totals_by_period(
        &expenses,
        Period::Monthly,
    ))))
}

/// A route handler for the overall yearly spending totals.
pub async fn get_yearly_totals<E, C>(
    State(state): State<AppState<E, C>>,
    Query(params): Query<ReportParams>,
) -> Result<Json<Vec<TotalsRow>>, Error>
where
    E: ExpenseStore + Clone + Send + Sync + 'static,
    C: CategoryStore + Clone + Send + Sync + 'static,
{
    let expenses = fetch_expenses(&state, params)?;

    Ok(Json(to_totals_rows(totals_by_period(
        &expenses,
        Period::Yearly,
    ))))
}

fn fetch_expenses<E, C>(state: &AppState<E, C>, params: ReportParams) -> Result<Vec<Expense>, Error>
where
    E: ExpenseStore,
    C: CategoryStore,
{
    state.expense_store.get_query(ExpenseQuery {
        date_range: date_range_from_bounds(params.from, params.to),
        ..Default::default()
    })
}

fn to_report_rows(totals: BTreeMap<(PeriodBucket, CategoryName), f64>) -> Vec<ReportRow> {
    totals
        .into_iter()
        .map(|((bucket, category), total)| ReportRow {
            year: bucket.year(),
            month: bucket.month(),
            category: category.to_string(),
            total,
        })
        .collect()
}

fn to_totals_rows(totals: BTreeMap<PeriodBucket, f64>) -> Vec<TotalsRow> {
    totals
        .into_iter()
        .map(|(bucket, total)| TotalsRow {
            year: bucket.year(),
            month: bucket.month(),
            total,
        })
        .collect()
}
