//! Loan management endpoints

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    api::AppJson,
    error::AppResult,
    models::{book::BookView, loan::LoanReceipt},
    AppState,
};

/// Borrow or return request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoanRequest {
    /// Name of the person borrowing or returning the book
    #[validate(length(min = 1, message = "Please enter your name"))]
    pub borrower: String,
    /// Book code
    #[validate(length(min = 1, message = "Please enter a book code"))]
    pub code: String,
}

impl LoanRequest {
    fn trimmed(self) -> Self {
        Self {
            borrower: self.borrower.trim().to_string(),
            code: self.code.trim().to_string(),
        }
    }
}

/// Borrow response
#[derive(Serialize, ToSchema)]
pub struct BorrowResponse {
    /// Status message
    pub message: String,
    pub loan: LoanReceipt,
}

/// Return response with the book as it now stands
#[derive(Serialize, ToSchema)]
pub struct ReturnResponse {
    /// Return status
    pub status: String,
    pub book: BookView,
}

/// Borrow a book
#[utoipa::path(
    post,
    path = "/loans",
    tag = "loans",
    request_body = LoanRequest,
    responses(
        (status = 201, description = "Book borrowed", body = BorrowResponse),
        (status = 400, description = "Missing name or code"),
        (status = 404, description = "Book not found"),
        (status = 409, description = "Book already borrowed")
    )
)]
pub async fn borrow_book(
    State(state): State<AppState>,
    AppJson(request): AppJson<LoanRequest>,
) -> AppResult<(StatusCode, Json<BorrowResponse>)> {
    let request = request.trimmed();
    request.validate()?;

    let loan = state
        .services
        .loans
        .borrow(&request.borrower, &request.code)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(BorrowResponse {
            message: "Book borrowed successfully!".to_string(),
            loan,
        }),
    ))
}

/// Return a borrowed book
#[utoipa::path(
    post,
    path = "/loans/return",
    tag = "loans",
    request_body = LoanRequest,
    responses(
        (status = 200, description = "Book returned", body = ReturnResponse),
        (status = 400, description = "Missing name or code"),
        (status = 403, description = "Only the borrower can return this book"),
        (status = 404, description = "Book not found"),
        (status = 409, description = "Book is not borrowed")
    )
)]
pub async fn return_book(
    State(state): State<AppState>,
    AppJson(request): AppJson<LoanRequest>,
) -> AppResult<Json<ReturnResponse>> {
    let request = request.trimmed();
    request.validate()?;

    let book = state
        .services
        .loans
        .return_book(&request.borrower, &request.code)
        .await?;

    Ok(Json(ReturnResponse {
        status: "returned".to_string(),
        book,
    }))
}
