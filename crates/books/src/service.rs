//! CRUD operations over the book store.
//!
//! All input rules live here. Failures surface as catalog errors from
//! `bookshelf-core`; the HTTP layer only translates them.

use bookshelf_core::{ApiError, ApiResult};

use crate::book::{Book, BookId};
use crate::store::BookStore;

const TITLE_MIN_CHARS: usize = 3;
const TITLE_MAX_CHARS: usize = 100;

/// Book catalog operations, generic over the backing store.
#[derive(Debug, Clone)]
pub struct BookService<S> {
    store: S,
}

impl<S: BookStore> BookService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// A service over a store pre-filled with the demo catalog.
    pub fn with_seed_catalog(store: S) -> Self {
        let service = Self::new(store);
        for (id, title, author) in [
            (1, "The Great Gatsby", "F. Scott Fitzgerald"),
            (2, "1984", "George Orwell"),
            (3, "To Kill a Mockingbird", "Harper Lee"),
        ] {
            service.store.upsert(Book {
                id: BookId(id),
                title: title.to_string(),
                author: author.to_string(),
            });
        }
        service
    }

    /// All books, ordered by id.
    pub fn list(&self) -> Vec<Book> {
        let mut books = self.store.list();
        books.sort_by_key(|book| book.id);
        books
    }

    pub fn get(&self, id: BookId) -> ApiResult<Book> {
        self.store.get(id).ok_or_else(|| ApiError::not_found(id))
    }

    /// Create a book under the next free id. Title and author are validated
    /// and stored trimmed.
    pub fn create(&self, title: &str, author: &str) -> ApiResult<Book> {
        let title = validated_title(title)?;
        let author = validated_author(author)?;
        self.ensure_title_free(&title, None)?;

        let book = Book {
            id: self.next_id(),
            title,
            author,
        };
        self.store.upsert(book.clone());
        Ok(book)
    }

    /// Update only the supplied fields. Validation runs before anything is
    /// written, so a rejected field leaves the record untouched.
    pub fn update(&self, id: BookId, title: Option<&str>, author: Option<&str>) -> ApiResult<Book> {
        let mut book = self.get(id)?;

        if let Some(title) = title {
            let title = validated_title(title)?;
            self.ensure_title_free(&title, Some(id))?;
            book.title = title;
        }
        if let Some(author) = author {
            book.author = validated_author(author)?;
        }

        self.store.upsert(book.clone());
        Ok(book)
    }

    /// Delete a book, returning the removed record.
    pub fn delete(&self, id: BookId) -> ApiResult<Book> {
        self.store
            .remove(id)
            .ok_or_else(|| ApiError::not_found(id))
    }

    // One past the highest live id, so deleting the newest book frees its id.
    fn next_id(&self) -> BookId {
        let max = self
            .store
            .list()
            .into_iter()
            .map(|book| book.id.0)
            .max()
            .unwrap_or(0);
        BookId(max + 1)
    }

    /// Duplicate titles are rejected case-insensitively; `except` skips the
    /// record being updated so a book may keep its own title.
    fn ensure_title_free(&self, title: &str, except: Option<BookId>) -> ApiResult<()> {
        let wanted = title.to_lowercase();
        let taken = self
            .store
            .list()
            .into_iter()
            .any(|book| Some(book.id) != except && book.title.to_lowercase() == wanted);
        if taken {
            return Err(ApiError::already_exists(title));
        }
        Ok(())
    }
}

fn validated_title(title: &str) -> ApiResult<String> {
    let trimmed = title.trim();
    let chars = trimmed.chars().count();
    if chars < TITLE_MIN_CHARS || chars > TITLE_MAX_CHARS {
        return Err(ApiError::invalid_data([(
            "title",
            "Title must be between 3 and 100 characters long",
        )])
        .with_detail("Title validation failed"));
    }
    Ok(trimmed.to_string())
}

fn validated_author(author: &str) -> ApiResult<String> {
    let trimmed = author.trim();
    if trimmed.is_empty() {
        return Err(
            ApiError::invalid_data([("author", "Author cannot be empty")])
                .with_detail("Author validation failed"),
        );
    }
    Ok(trimmed.to_string())
}
