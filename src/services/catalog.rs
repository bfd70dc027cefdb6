//! Catalog management service

use crate::{
    catalog::contains_ignore_case,
    error::AppResult,
    models::book::{BookQuery, BookStatus, BookView, CreateBook},
};

use super::SharedCatalog;

#[derive(Clone)]
pub struct CatalogService {
    catalog: SharedCatalog,
}

impl CatalogService {
    pub fn new(catalog: SharedCatalog) -> Self {
        Self { catalog }
    }

    /// Search books by availability, title and author
    pub async fn search(&self, query: &BookQuery) -> Vec<BookView> {
        let catalog = self.catalog.lock().await;
        let today = catalog.today();
        let status = query.status.unwrap_or_default();

        let mut books = match (&query.title, &query.author) {
            (Some(title), _) => catalog.search_by_title(title),
            (None, Some(author)) => catalog.search_by_author(author),
            (None, None) => match status {
                BookStatus::All => catalog.list_all(),
                BookStatus::Available => catalog.list_available(),
                BookStatus::Borrowed => catalog.list_borrowed(),
                BookStatus::Overdue => catalog.list_overdue(),
            },
        };
        if let (Some(_), Some(author)) = (&query.title, &query.author) {
            books.retain(|book| contains_ignore_case(book.author(), author));
        }
        books.retain(|book| status.includes(book, today));

        books.into_iter().map(|book| BookView::new(book, today)).collect()
    }

    /// Count books in the catalog
    pub async fn count(&self) -> usize {
        self.catalog.lock().await.len()
    }

    /// Get book by code
    pub async fn get_book(&self, code: &str) -> AppResult<BookView> {
        let catalog = self.catalog.lock().await;
        let book = catalog.find_by_code(code)?;
        Ok(BookView::new(book, catalog.today()))
    }

    /// Add a new book to the catalog
    pub async fn add_book(&self, book: CreateBook) -> AppResult<BookView> {
        let mut catalog = self.catalog.lock().await;
        catalog.add_book(book.code.as_str(), book.title, book.author)?;
        tracing::info!(code = %book.code, total = catalog.len(), "Book added to catalog");

        let added = catalog.find_by_code(&book.code)?;
        Ok(BookView::new(added, catalog.today()))
    }

    /// Remove a book from the catalog
    pub async fn remove_book(&self, code: &str) -> AppResult<BookView> {
        let mut catalog = self.catalog.lock().await;
        let removed = catalog.remove_book(code)?;
        if let Some(borrower) = removed.borrower() {
            tracing::warn!(code, borrower, "Removed a book that was still on loan");
        }
        tracing::info!(code, total = catalog.len(), "Book removed from catalog");
        Ok(BookView::new(&removed, catalog.today()))
    }

    /// Text listing, one rendered line per book separated by blank lines
    pub async fn render_listing(&self, status: BookStatus) -> String {
        let books = self
            .search(&BookQuery {
                status: Some(status),
                ..BookQuery::default()
            })
            .await;

        if books.is_empty() {
            return "No books found.\n".to_string();
        }

        books
            .iter()
            .map(|book| format!("{}\n\n", book.display))
            .collect()
    }
}
