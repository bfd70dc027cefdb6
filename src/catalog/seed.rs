//! Classic titles the catalog starts with

use crate::models::book::Book;

const SEED_BOOKS: &[(&str, &str, &str)] = &[
    ("BK001", "1984", "George Orwell"),
    ("BK002", "A Tale of Two Cities", "Charles Dickens"),
    ("BK003", "Animal Farm", "George Orwell"),
    ("BK004", "Brave New World", "Aldous Huxley"),
    ("BK005", "Crime and Punishment", "Fyodor Dostoevsky"),
    ("BK006", "Don Quixote", "Miguel de Cervantes"),
    ("BK007", "Frankenstein", "Mary Shelley"),
    ("BK008", "Great Expectations", "Charles Dickens"),
    ("BK009", "Jane Eyre", "Charlotte Brontë"),
    ("BK010", "Moby Dick", "Herman Melville"),
    ("BK011", "Pride and Prejudice", "Jane Austen"),
    ("BK012", "The Catcher in the Rye", "J.D. Salinger"),
    ("BK013", "The Great Gatsby", "F. Scott Fitzgerald"),
    ("BK014", "The Hobbit", "J.R.R. Tolkien"),
    ("BK015", "The Lord of the Rings", "J.R.R. Tolkien"),
    ("BK016", "The Picture of Dorian Gray", "Oscar Wilde"),
    ("BK017", "To Kill a Mockingbird", "Harper Lee"),
    ("BK018", "Ulysses", "James Joyce"),
    ("BK019", "War and Peace", "Leo Tolstoy"),
    ("BK020", "Wuthering Heights", "Emily Brontë"),
    ("BK021", "Fahrenheit 451", "Ray Bradbury"),
];

/// Fresh, available copies of the seed titles
pub fn seed_books() -> impl Iterator<Item = Book> {
    SEED_BOOKS
        .iter()
        .map(|&(code, title, author)| Book::new(code, title, author))
}
