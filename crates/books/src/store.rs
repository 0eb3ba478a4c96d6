//! Book storage abstraction.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::book::{Book, BookId};

/// Keyed container for book records.
///
/// Intentionally a bare map: no persistence, no versioning. A store never
/// enforces input rules; that is [`crate::BookService`]'s job.
pub trait BookStore: Send + Sync {
    fn get(&self, id: BookId) -> Option<Book>;
    fn upsert(&self, book: Book);
    /// Remove a record, returning it when it existed.
    fn remove(&self, id: BookId) -> Option<Book>;
    fn list(&self) -> Vec<Book>;
}

impl<S> BookStore for Arc<S>
where
    S: BookStore + ?Sized,
{
    fn get(&self, id: BookId) -> Option<Book> {
        (**self).get(id)
    }

    fn upsert(&self, book: Book) {
        (**self).upsert(book)
    }

    fn remove(&self, id: BookId) -> Option<Book> {
        (**self).remove(id)
    }

    fn list(&self) -> Vec<Book> {
        (**self).list()
    }
}

/// In-memory store backing the demo server and tests.
#[derive(Debug, Default)]
pub struct InMemoryBookStore {
    inner: RwLock<HashMap<BookId, Book>>,
}

impl InMemoryBookStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BookStore for InMemoryBookStore {
    fn get(&self, id: BookId) -> Option<Book> {
        let map = self.inner.read().ok()?;
        map.get(&id).cloned()
    }

    fn upsert(&self, book: Book) {
        if let Ok(mut map) = self.inner.write() {
            map.insert(book.id, book);
        }
    }

    fn remove(&self, id: BookId) -> Option<Book> {
        let mut map = self.inner.write().ok()?;
        map.remove(&id)
    }

    fn list(&self) -> Vec<Book> {
        let map = match self.inner.read() {
            Ok(m) => m,
            Err(_) => return vec![],
        };

        map.values().cloned().collect()
    }
}
