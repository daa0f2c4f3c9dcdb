//! View-models
//!
//! The observable state behind each view: the book collection, the book edit dialog, and the
//! navigation shell. Every view-model receives its collaborators through its constructor and
//! owns nothing beyond its own fields.

pub mod books;
pub mod edit;
pub mod shell;

#[cfg(test)]
pub mod test_support;
