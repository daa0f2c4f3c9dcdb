//! `bookstore_core`
//!
//! Core library for the platform-independent logic of BookStore. This library aims to provide a
//! crate that can be used by any client shell (desktop, headless, tests) without dragging in a UI
//! toolkit: the data transfer contracts, the book service abstraction, and the SQLite-backed
//! service the composition root wires in.

pub mod database;

pub mod dtos;

pub mod service;

pub use service::{BookService, BookServiceError};
