//! Loan (borrow) model

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Number of days a book may be kept before it is due
pub const LOAN_DURATION_DAYS: u64 = 5;

/// An active loan: who holds the book and when it is due back.
///
/// Borrower and due date only ever exist together, so a book carries an
/// `Option<Loan>` rather than two independent optional fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Loan {
    borrower: String,
    due_date: NaiveDate,
}

impl Loan {
    /// Start a loan on `today`, due after the standard loan duration
    pub fn starting(borrower: impl Into<String>, today: NaiveDate) -> Self {
        Self {
            borrower: borrower.into(),
            due_date: today + Days::new(LOAN_DURATION_DAYS),
        }
    }

    pub fn borrower(&self) -> &str {
        &self.borrower
    }

    pub fn due_date(&self) -> NaiveDate {
        self.due_date
    }

    /// Whole calendar days until the due date (negative once overdue)
    pub fn days_remaining(&self, today: NaiveDate) -> i64 {
        (self.due_date - today).num_days()
    }

    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.due_date < today
    }
}

/// Borrow confirmation returned to the caller
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LoanReceipt {
    /// Book code
    pub code: String,
    /// Book title
    pub title: String,
    /// Name of the borrower
    pub borrower: String,
    /// Due date (YYYY-MM-DD)
    pub due_date: NaiveDate,
    /// Days left before the book is due
    pub days_remaining: i64,
}
