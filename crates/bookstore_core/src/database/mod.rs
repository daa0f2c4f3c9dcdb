//! Database library
//!
//! The library crate exposes the `Db` struct and its methods to interact with the database
//! through pre-defined queries. `Db` also implements [`crate::BookService`], making it the
//! persistence collaborator the composition root injects into the view-model layer.
pub mod queries;
pub mod types;

pub use queries::Db;
