//! Book service abstraction
//!
//! The port the view-model layer talks to. Concrete services (the SQLite `Db`, mocks in tests)
//! are handed to view-models through constructor injection; no service locator.

use crate::dtos::{BookDto, CreateUpdateBookDto};
use async_trait::async_trait;

#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum BookServiceError {
    #[error("book not found (id={0})")]
    BookNotFound(i64),

    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),

    /// Wildcard error for everything else
    #[error("{0}")]
    Other(String),
}

/// CRUD operations over the book collection.
///
/// All failures are reported through [`BookServiceError`]; callers decide whether to surface
/// them to the user or bubble them up.
#[async_trait]
pub trait BookService: Send + Sync {
    /// Fetch every book, ordered by the date it was added.
    async fn list(&self) -> Result<Vec<BookDto>, BookServiceError>;

    /// Fetch a single book by its identifier.
    async fn get(&self, id: i64) -> Result<BookDto, BookServiceError>;

    /// Persist a new book and return it with its assigned identifier.
    async fn create(&self, input: CreateUpdateBookDto) -> Result<BookDto, BookServiceError>;

    /// Overwrite an existing book and return its new state.
    async fn update(&self, id: i64, input: CreateUpdateBookDto)
    -> Result<BookDto, BookServiceError>;

    /// Remove a book. Removing an unknown identifier is an error, not a no-op.
    async fn delete(&self, id: i64) -> Result<(), BookServiceError>;
}
