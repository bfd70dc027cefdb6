//! Catalog state machine
//!
//! Owns the book records and is the only place where a book moves between
//! available and borrowed. Every failed operation leaves the catalog exactly
//! as it was. The catalog never logs; callers decide what to report.

pub mod clock;
pub mod seed;

use std::sync::Arc;

use chrono::NaiveDate;

use crate::{
    error::{CatalogError, CatalogResult},
    models::{
        book::{Book, BookCode},
        loan::Loan,
    },
    repository::books::BookStore,
};

pub use clock::{Clock, FixedClock, SystemClock};

/// Case-insensitive substring test used by the title and author searches
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

pub struct Catalog {
    books: BookStore,
    clock: Arc<dyn Clock>,
}

impl Catalog {
    /// Empty catalog
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            books: BookStore::new(),
            clock,
        }
    }

    /// Catalog pre-filled with the seed titles
    pub fn seeded(clock: Arc<dyn Clock>) -> CatalogResult<Self> {
        let mut catalog = Self::new(clock);
        for book in seed::seed_books() {
            catalog.insert(book)?;
        }
        Ok(catalog)
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    fn insert(&mut self, book: Book) -> CatalogResult<()> {
        self.books
            .insert(book)
            .map_err(|rejected| CatalogError::DuplicateCode(rejected.code().clone()))
    }

    /// Append a new, available book
    pub fn add_book(
        &mut self,
        code: impl Into<BookCode>,
        title: impl Into<String>,
        author: impl Into<String>,
    ) -> CatalogResult<()> {
        self.insert(Book::new(code, title, author))
    }

    /// Remove a book, whatever its state, and hand it back
    pub fn remove_book(&mut self, code: &str) -> CatalogResult<Book> {
        self.books
            .remove(code)
            .ok_or_else(|| CatalogError::NotFound(code.into()))
    }

    pub fn find_by_code(&self, code: &str) -> CatalogResult<&Book> {
        self.books
            .get(code)
            .ok_or_else(|| CatalogError::NotFound(code.into()))
    }

    fn filter<'a>(&'a self, keep: impl Fn(&Book) -> bool) -> Vec<&'a Book> {
        self.books.iter().filter(|&book| keep(book)).collect()
    }

    pub fn search_by_title(&self, needle: &str) -> Vec<&Book> {
        self.filter(|book| contains_ignore_case(book.title(), needle))
    }

    pub fn search_by_author(&self, needle: &str) -> Vec<&Book> {
        self.filter(|book| contains_ignore_case(book.author(), needle))
    }

    pub fn list_all(&self) -> Vec<&Book> {
        self.books.iter().collect()
    }

    pub fn list_available(&self) -> Vec<&Book> {
        self.filter(Book::is_available)
    }

    pub fn list_borrowed(&self) -> Vec<&Book> {
        self.filter(|book| !book.is_available())
    }

    pub fn list_overdue(&self) -> Vec<&Book> {
        let today = self.today();
        self.filter(|book| book.is_overdue(today))
    }

    /// Lend a book to `borrower`, due after the standard loan duration
    pub fn borrow_book(&mut self, code: &str, borrower: &str) -> CatalogResult<&Book> {
        let today = self.clock.today();
        let book = self
            .books
            .get_mut(code)
            .ok_or_else(|| CatalogError::NotFound(code.into()))?;

        if let Some(loan) = book.loan() {
            return Err(CatalogError::AlreadyBorrowed {
                code: book.code().clone(),
                borrower: loan.borrower().to_string(),
                days_remaining: loan.days_remaining(today),
            });
        }

        book.lend(Loan::starting(borrower, today));
        Ok(book)
    }

    /// Take a book back. Only the recorded borrower may return it.
    pub fn return_book(&mut self, code: &str, requester: &str) -> CatalogResult<&Book> {
        let book = self
            .books
            .get_mut(code)
            .ok_or_else(|| CatalogError::NotFound(code.into()))?;

        match book.loan() {
            None => return Err(CatalogError::NotBorrowed(book.code().clone())),
            Some(loan) if loan.borrower() != requester => {
                return Err(CatalogError::WrongBorrower {
                    code: book.code().clone(),
                    borrower: loan.borrower().to_string(),
                });
            }
            Some(_) => {}
        }

        book.take_loan();
        Ok(book)
    }

    /// Days until `book` is due according to this catalog's clock
    pub fn days_remaining(&self, book: &Book) -> i64 {
        book.days_remaining(self.today())
    }
}
