//! Book model and related types

use std::{borrow::Borrow, fmt};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use super::loan::Loan;

/// Unique identifier of a book within the catalog
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookCode(String);

impl BookCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for BookCode {
    fn from(code: &str) -> Self {
        Self(code.to_string())
    }
}

impl From<String> for BookCode {
    fn from(code: String) -> Self {
        Self(code)
    }
}

impl Borrow<str> for BookCode {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BookCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A catalog entry. Title, author and code never change once created;
/// only the loan comes and goes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Book {
    code: BookCode,
    title: String,
    author: String,
    loan: Option<Loan>,
}

impl Book {
    /// Create an available book
    pub fn new(code: impl Into<BookCode>, title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            title: title.into(),
            author: author.into(),
            loan: None,
        }
    }

    pub fn code(&self) -> &BookCode {
        &self.code
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn is_available(&self) -> bool {
        self.loan.is_none()
    }

    pub fn loan(&self) -> Option<&Loan> {
        self.loan.as_ref()
    }

    pub fn borrower(&self) -> Option<&str> {
        self.loan.as_ref().map(Loan::borrower)
    }

    pub fn due_date(&self) -> Option<NaiveDate> {
        self.loan.as_ref().map(Loan::due_date)
    }

    /// Days until the book is due, 0 when it is not borrowed
    pub fn days_remaining(&self, today: NaiveDate) -> i64 {
        self.loan.as_ref().map_or(0, |loan| loan.days_remaining(today))
    }

    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.loan.as_ref().is_some_and(|loan| loan.is_overdue(today))
    }

    pub(crate) fn lend(&mut self, loan: Loan) {
        self.loan = Some(loan);
    }

    pub(crate) fn take_loan(&mut self) -> Option<Loan> {
        self.loan.take()
    }

    /// One-line text rendering as shown to library users
    pub fn render(&self, today: NaiveDate) -> String {
        match &self.loan {
            None => format!("[{}] {} by {} - Available", self.code, self.title, self.author),
            Some(loan) => format!(
                "[{}] {} by {} - Borrowed by: {} (Due in {} days)",
                self.code,
                self.title,
                self.author,
                loan.borrower(),
                loan.days_remaining(today)
            ),
        }
    }
}

/// Availability filter for listings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum BookStatus {
    #[default]
    All,
    Available,
    Borrowed,
    Overdue,
}

impl BookStatus {
    pub fn includes(self, book: &Book, today: NaiveDate) -> bool {
        match self {
            BookStatus::All => true,
            BookStatus::Available => book.is_available(),
            BookStatus::Borrowed => !book.is_available(),
            BookStatus::Overdue => book.is_overdue(today),
        }
    }
}

/// Book as exposed to API clients
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BookView {
    /// Unique book code
    pub code: String,
    pub title: String,
    pub author: String,
    /// True when nobody holds the book
    pub available: bool,
    /// Current borrower, if any
    pub borrower: Option<String>,
    /// Due date (YYYY-MM-DD), if borrowed
    pub due_date: Option<NaiveDate>,
    /// Days left before the book is due (0 when available)
    pub days_remaining: i64,
    /// Text rendering of the entry
    pub display: String,
}

impl BookView {
    pub fn new(book: &Book, today: NaiveDate) -> Self {
        Self {
            code: book.code().to_string(),
            title: book.title().to_string(),
            author: book.author().to_string(),
            available: book.is_available(),
            borrower: book.borrower().map(str::to_string),
            due_date: book.due_date(),
            days_remaining: book.days_remaining(today),
            display: book.render(today),
        }
    }
}

/// Book search query
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct BookQuery {
    /// Availability filter (default: all)
    pub status: Option<BookStatus>,
    /// Case-insensitive substring of the title
    pub title: Option<String>,
    /// Case-insensitive substring of the author
    pub author: Option<String>,
}

/// Create book request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateBook {
    #[validate(length(min = 1, message = "Book code is required"))]
    pub code: String,
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "Author is required"))]
    pub author: String,
}

impl CreateBook {
    /// Strip surrounding whitespace from every field
    pub fn trimmed(self) -> Self {
        Self {
            code: self.code.trim().to_string(),
            title: self.title.trim().to_string(),
            author: self.author.trim().to_string(),
        }
    }
}
