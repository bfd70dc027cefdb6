//! Storage layer for catalog records

pub mod books;

pub use books::BookStore;
