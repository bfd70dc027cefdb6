//! Data models for Lending Desk

pub mod book;
pub mod loan;

// Re-export commonly used types
pub use book::{Book, BookCode, BookStatus, BookView};
pub use loan::{Loan, LoanReceipt, LOAN_DURATION_DAYS};
