use std::env;
use std::path::PathBuf;

pub const LIBRARY_DATABASE_NAME: &str = "bookstore.db";
pub const DATABASE_PATH_VAR: &str = "BOOKSTORE_DATABASE_PATH";

/// Where the SQLite library lives: the path from `BOOKSTORE_DATABASE_PATH` when set, otherwise
/// `bookstore.db` in the working directory.
#[must_use]
#[inline]
pub fn database_path() -> PathBuf {
    resolve_database_path(env::var(DATABASE_PATH_VAR).ok())
}

fn resolve_database_path(configured: Option<String>) -> PathBuf {
    configured.map_or_else(|| PathBuf::from(LIBRARY_DATABASE_NAME), PathBuf::from)
}
