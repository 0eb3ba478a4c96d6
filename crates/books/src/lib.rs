//! `bookshelf-books` — book records, storage, and the CRUD service.

pub mod book;
pub mod service;
pub mod store;

pub use book::{Book, BookId};
pub use service::BookService;
pub use store::{BookStore, InMemoryBookStore};
