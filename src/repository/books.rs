//! In-memory book storage: insertion-ordered records plus a code index

use std::collections::HashMap;

use crate::models::book::{Book, BookCode};

#[derive(Debug, Clone, Default)]
pub struct BookStore {
    books: Vec<Book>,
    index: HashMap<BookCode, usize>,
}

impl BookStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn contains(&self, code: &str) -> bool {
        self.index.contains_key(code)
    }

    /// Get book by code
    pub fn get(&self, code: &str) -> Option<&Book> {
        self.index.get(code).map(|&position| &self.books[position])
    }

    pub fn get_mut(&mut self, code: &str) -> Option<&mut Book> {
        let position = *self.index.get(code)?;
        self.books.get_mut(position)
    }

    /// Append a book. A book whose code is already stored is handed back untouched.
    pub fn insert(&mut self, book: Book) -> Result<(), Book> {
        if self.contains(book.code().as_str()) {
            return Err(book);
        }
        self.index.insert(book.code().clone(), self.books.len());
        self.books.push(book);
        Ok(())
    }

    /// Remove a book, shifting the positions of every later entry
    pub fn remove(&mut self, code: &str) -> Option<Book> {
        let position = self.index.remove(code)?;
        let book = self.books.remove(position);
        for slot in self.index.values_mut() {
            if *slot > position {
                *slot -= 1;
            }
        }
        Some(book)
    }

    /// Books in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, Book> {
        self.books.iter()
    }
}
