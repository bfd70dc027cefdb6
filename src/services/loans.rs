//! Loan management service

use crate::{
    error::AppResult,
    models::{book::BookView, loan::LoanReceipt},
};

use super::SharedCatalog;

#[derive(Clone)]
pub struct LoansService {
    catalog: SharedCatalog,
}

impl LoansService {
    pub fn new(catalog: SharedCatalog) -> Self {
        Self { catalog }
    }

    /// Borrow a book
    pub async fn borrow(&self, borrower: &str, code: &str) -> AppResult<LoanReceipt> {
        let mut catalog = self.catalog.lock().await;
        let today = catalog.today();

        let book = match catalog.borrow_book(code, borrower) {
            Ok(book) => book,
            Err(err) => {
                tracing::info!(code, borrower, "Borrow refused: {}", err);
                return Err(err.into());
            }
        };

        let receipt = LoanReceipt {
            code: book.code().to_string(),
            title: book.title().to_string(),
            borrower: borrower.to_string(),
            due_date: book.due_date().unwrap_or(today),
            days_remaining: book.days_remaining(today),
        };
        tracing::info!(code, borrower, due_date = %receipt.due_date, "Book borrowed");
        Ok(receipt)
    }

    /// Return a borrowed book on behalf of its borrower
    pub async fn return_book(&self, borrower: &str, code: &str) -> AppResult<BookView> {
        let mut catalog = self.catalog.lock().await;
        let today = catalog.today();

        let book = match catalog.return_book(code, borrower) {
            Ok(book) => book,
            Err(err) => {
                tracing::info!(code, borrower, "Return refused: {}", err);
                return Err(err.into());
            }
        };

        tracing::info!(code, borrower, "Book returned");
        Ok(BookView::new(book, today))
    }
}
