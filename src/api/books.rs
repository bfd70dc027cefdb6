//! Book (catalog) endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;
use validator::Validate;

use crate::{
    api::{AppJson, AppQuery},
    error::AppResult,
    models::book::{BookQuery, BookStatus, BookView, CreateBook},
    AppState,
};

/// Listing query
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListingQuery {
    /// Availability filter (default: all)
    pub status: Option<BookStatus>,
}

/// List or search books
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    params(BookQuery),
    responses(
        (status = 200, description = "Matching books in catalog order", body = Vec<BookView>),
        (status = 400, description = "Invalid query")
    )
)]
pub async fn list_books(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<BookQuery>,
) -> AppResult<Json<Vec<BookView>>> {
    let books = state.services.catalog.search(&query).await;
    Ok(Json(books))
}

/// Plain-text listing, one line per book
#[utoipa::path(
    get,
    path = "/listing",
    tag = "books",
    params(ListingQuery),
    responses(
        (status = 200, description = "Rendered listing", body = String, content_type = "text/plain"),
        (status = 400, description = "Invalid query")
    )
)]
pub async fn render_listing(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<ListingQuery>,
) -> AppResult<String> {
    let listing = state
        .services
        .catalog
        .render_listing(query.status.unwrap_or_default())
        .await;
    Ok(listing)
}

/// Get book by code
#[utoipa::path(
    get,
    path = "/books/{code}",
    tag = "books",
    params(
        ("code" = String, Path, description = "Book code")
    ),
    responses(
        (status = 200, description = "Book details", body = BookView),
        (status = 404, description = "Book not found")
    )
)]
pub async fn get_book(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> AppResult<Json<BookView>> {
    let book = state.services.catalog.get_book(&code).await?;
    Ok(Json(book))
}

/// Add a new book
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = CreateBook,
    responses(
        (status = 201, description = "Book added", body = BookView),
        (status = 400, description = "Missing field or malformed body"),
        (status = 409, description = "A book with this code already exists")
    )
)]
pub async fn add_book(
    State(state): State<AppState>,
    AppJson(request): AppJson<CreateBook>,
) -> AppResult<(StatusCode, Json<BookView>)> {
    let request = request.trimmed();
    request.validate()?;

    let created = state.services.catalog.add_book(request).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Remove a book
#[utoipa::path(
    delete,
    path = "/books/{code}",
    tag = "books",
    params(
        ("code" = String, Path, description = "Book code")
    ),
    responses(
        (status = 204, description = "Book removed"),
        (status = 404, description = "Book not found")
    )
)]
pub async fn remove_book(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> AppResult<StatusCode> {
    state.services.catalog.remove_book(&code).await?;
    Ok(StatusCode::NO_CONTENT)
}
