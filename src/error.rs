//! Error types for Lending Desk

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

use crate::models::book::BookCode;

/// Numeric error codes reported to API clients
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ErrorCode {
    NoSuchItem = 5,
    ItemNotAvailable = 7,
    Duplicate = 8,
    BadValue = 18,
    NotBorrowed = 22,
    WrongBorrower = 23,
}

/// Catalog state machine failures. Every variant leaves the catalog unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("A book with code {0} already exists")]
    DuplicateCode(BookCode),

    #[error("Book {0} not found")]
    NotFound(BookCode),

    #[error("Book {code} is already borrowed by {borrower} (due in {days_remaining} days)")]
    AlreadyBorrowed {
        code: BookCode,
        borrower: String,
        days_remaining: i64,
    },

    #[error("Book {0} is already available")]
    NotBorrowed(BookCode),

    #[error("Only the borrower can return book {code} (current borrower: {borrower})")]
    WrongBorrower { code: BookCode, borrower: String },
}

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut messages: Vec<String> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| match &e.message {
                    Some(msg) => msg.to_string(),
                    None => format!("Invalid value for {}", field),
                })
            })
            .collect();
        messages.sort();
        AppError::Validation(messages.join(", "))
    }
}

/// Error response body
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub code: u32,
    pub error: String,
    pub message: String,
    /// Extra context for the caller (current borrower, days remaining)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl AppError {
    fn parts(&self) -> (StatusCode, ErrorCode, Option<serde_json::Value>) {
        match self {
            AppError::Catalog(err) => match err {
                CatalogError::DuplicateCode(_) => (StatusCode::CONFLICT, ErrorCode::Duplicate, None),
                CatalogError::NotFound(_) => (StatusCode::NOT_FOUND, ErrorCode::NoSuchItem, None),
                CatalogError::AlreadyBorrowed {
                    borrower,
                    days_remaining,
                    ..
                } => (
                    StatusCode::CONFLICT,
                    ErrorCode::ItemNotAvailable,
                    Some(json!({ "borrower": borrower, "days_remaining": days_remaining })),
                ),
                CatalogError::NotBorrowed(_) => (StatusCode::CONFLICT, ErrorCode::NotBorrowed, None),
                CatalogError::WrongBorrower { borrower, .. } => (
                    StatusCode::FORBIDDEN,
                    ErrorCode::WrongBorrower,
                    Some(json!({ "borrower": borrower })),
                ),
            },
            AppError::Validation(_) | AppError::BadRequest(_) => {
                (StatusCode::BAD_REQUEST, ErrorCode::BadValue, None)
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, details) = self.parts();

        let message = match &self {
            AppError::Catalog(err) => err.to_string(),
            AppError::Validation(msg) | AppError::BadRequest(msg) => msg.clone(),
        };

        let body = Json(ErrorResponse {
            code: code as u32,
            error: format!("{:?}", code),
            message,
            details,
        });

        (status, body).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
