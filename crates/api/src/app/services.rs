use std::sync::Arc;

use bookshelf_books::{BookService, InMemoryBookStore};

/// Services shared by all handlers through an `Extension` layer.
pub struct AppServices {
    pub books: BookService<Arc<InMemoryBookStore>>,
}

impl AppServices {
    /// Wiring used by the demo server and the black-box tests: an in-memory
    /// store pre-filled with the demo catalog.
    pub fn seeded() -> Self {
        Self {
            books: BookService::with_seed_catalog(Arc::new(InMemoryBookStore::new())),
        }
    }
}
