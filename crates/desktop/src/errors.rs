use bookstore_core::BookServiceError;

/// The BookStore desktop error type
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Error variant arising from opening or migrating the SQLite library
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
    /// Error variant arising from the book service during startup
    #[error("book service error: {0}")]
    Service(#[from] BookServiceError),
    /// Error variant arising from standing up the async runtime
    #[error("failed to start async runtime: {0}")]
    Runtime(#[from] std::io::Error),
    /// Wildcard error for everything else
    #[error("{0}")]
    Other(String),
}
