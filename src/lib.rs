//! Expense Tracker is a web service for recording personal expenses and
//! summarising spending by category over calendar months and years.
//!
//! This library provides a REST API that serves JSON, backed by a SQLite
//! database.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use serde_json::json;
use tokio::signal;

mod app_state;
pub mod db;
mod logging;
pub mod models;
pub mod report;
mod routes;
mod routing;
pub mod stores;

pub use app_state::AppState;
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use routing::build_router;

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// A zero, negative or non-finite amount was used to create or update an
    /// expense.
    ///
    /// Expenses record money that was spent, so amounts must be positive.
    /// Refunds and income are out of scope for this application.
    #[error("expense amounts must be greater than zero, got {0}")]
    InvalidAmount(f64),

    /// An empty string was used as a category name.
    #[error("category names cannot be empty")]
    EmptyCategoryName,

    /// The category name already exists in the category registry.
    ///
    /// Category names are unique so that the registry can act as a pick-list
    /// for clients.
    #[error("the category \"{0}\" already exists in the database")]
    DuplicateCategoryName(String),

    /// The requested resource was not found.
    ///
    /// For HTTP request handlers, the client should check that the parameters
    /// (e.g., ID) are correct and that the resource has been created.
    ///
    /// Internally, this error may occur when a query returns no rows.
    #[error("the requested resource could not be found")]
    NotFound,

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => {
                tracing::error!("an unhandled SQL error occurred: {}", error);
                Error::SqlError(error)
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Error::NotFound => (StatusCode::NOT_FOUND, self.to_string()),
            Error::InvalidAmount(_) | Error::EmptyCategoryName => {
                (StatusCode::UNPROCESSABLE_ENTITY, self.to_string())
            }
            Error::DuplicateCategoryName(_) => (StatusCode::CONFLICT, self.to_string()),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "an internal error occurred, check the server logs for more details"
                        .to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
