use crate::error::Result;
use crate::filter::Order;
use crate::model::Book;
use crate::stats::Statistics;
use crate::store::RecordStore;

use tracing::warn;

/// Book catalog seeded with the classroom's starting shelf.
#[derive(Debug, Clone)]
pub struct Library {
    books: RecordStore<Book>,
}

impl Default for Library {
    fn default() -> Self {
        Self::with_books(Self::starter_shelf())
    }
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn empty() -> Self {
        Self { books: RecordStore::new() }
    }

    /// Books are inserted in order; invalid ones are skipped with a warning.
    pub fn with_books(books: impl IntoIterator<Item = Book>) -> Self {
        let mut library = Self::empty();
        for book in books {
            let title = book.title.clone();
            if let Err(e) = library.add(book) {
                warn!(%title, error = %e, "skipping book");
            }
        }
        library
    }

    pub fn starter_shelf() -> Vec<Book> {
        vec![
            Book::new("Cien años de soledad", "Gabriel García Márquez", 1967, true),
            Book::new("El Principito", "Antoine de Saint-Exupéry", 1943, false),
            Book::new("Rayuela", "Julio Cortázar", 1963, true),
            Book::new("Don Quijote", "Miguel de Cervantes", 1605, true),
            Book::new("La sombra del viento", "Carlos Ruiz Zafón", 2001, false),
        ]
    }

    pub fn books(&self) -> &RecordStore<Book> {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn add(&mut self, book: Book) -> Result<&Book> {
        self.books.insert(book)
    }

    pub fn by_author(&self, author: &str) -> Vec<&Book> {
        self.books.find_containing(|b| b.author.as_str(), author).collect()
    }

    pub fn by_title(&self, title: &str) -> Vec<&Book> {
        self.books.find_containing(|b| b.title.as_str(), title).collect()
    }

    pub fn by_year_range(&self, from: i32, to: i32) -> Vec<&Book> {
        self.books.find_in_range(|b| b.year, from, to).collect()
    }

    pub fn available(&self) -> Vec<&Book> {
        self.books.find_by(|b| b.available).collect()
    }

    pub fn sorted_by_year(&self) -> Vec<&Book> {
        self.books.sorted_by(|b| b.year, Order::Ascending)
    }

    /// Totals, availability, and books per author.
    pub fn statistics(&self) -> Statistics {
        self.books.aggregate(|b| b.available, |b| b.author.as_str())
    }
}
