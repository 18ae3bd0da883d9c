//! Request extractors that reject with the JSON error body

use axum::extract::{rejection::QueryRejection, FromRequestParts};

use crate::error::AppError;

/// `Query` whose rejection is an [`AppError`] instead of plain text
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct ApiQuery<T>(pub T);

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::Validation {
            field: "query".to_string(),
            message: rejection.body_text(),
        }
    }
}
