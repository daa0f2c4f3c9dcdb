//! Recording mock of the book service for view-model tests.

use async_trait::async_trait;
use bookstore_core::dtos::{BookDto, CreateUpdateBookDto};
use bookstore_core::{BookService, BookServiceError};
use std::sync::Mutex;

/// One recorded call, with the exact payload the service received.
#[derive(Debug, Clone, PartialEq)]
pub enum ServiceCall {
    List,
    Get(i64),
    Create(CreateUpdateBookDto),
    Update(i64, CreateUpdateBookDto),
    Delete(i64),
}

/// In-memory `BookService` that records every call and can be armed to fail.
pub struct MockBookService {
    calls: Mutex<Vec<ServiceCall>>,
    books: Mutex<Vec<BookDto>>,
    fail_with: Mutex<Option<String>>,
    next_id: Mutex<i64>,
}

impl MockBookService {
    pub fn new() -> Self {
        Self::with_books(Vec::new())
    }

    pub fn with_books(books: Vec<BookDto>) -> Self {
        let next_id = books.iter().map(|book| book.id).max().unwrap_or(0) + 1;
        Self {
            calls: Mutex::new(Vec::new()),
            books: Mutex::new(books),
            fail_with: Mutex::new(None),
            next_id: Mutex::new(next_id),
        }
    }

    /// Make every following call fail with `message` until cleared.
    pub fn fail_with(&self, message: &str) {
        *self.fail_with.lock().unwrap() = Some(message.to_owned());
    }

    pub fn clear_failure(&self) {
        *self.fail_with.lock().unwrap() = None;
    }

    pub fn calls(&self) -> Vec<ServiceCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: ServiceCall) -> Result<(), BookServiceError> {
        self.calls.lock().unwrap().push(call);
        match self.fail_with.lock().unwrap().clone() {
            Some(message) => Err(BookServiceError::Other(message)),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl BookService for MockBookService {
    async fn list(&self) -> Result<Vec<BookDto>, BookServiceError> {
        self.record(ServiceCall::List)?;
        Ok(self.books.lock().unwrap().clone())
    }

    async fn get(&self, id: i64) -> Result<BookDto, BookServiceError> {
        self.record(ServiceCall::Get(id))?;
        self.books
            .lock()
            .unwrap()
            .iter()
            .find(|book| book.id == id)
            .cloned()
            .ok_or(BookServiceError::BookNotFound(id))
    }

    async fn create(&self, input: CreateUpdateBookDto) -> Result<BookDto, BookServiceError> {
        self.record(ServiceCall::Create(input.clone()))?;
        let id = {
            let mut next_id = self.next_id.lock().unwrap();
            let id = *next_id;
            *next_id += 1;
            id
        };
        let book = BookDto::new(id, input.name, input.category, input.publish_date, input.price);
        self.books.lock().unwrap().push(book.clone());
        Ok(book)
    }

    async fn update(
        &self,
        id: i64,
        input: CreateUpdateBookDto,
    ) -> Result<BookDto, BookServiceError> {
        self.record(ServiceCall::Update(id, input.clone()))?;
        let mut books = self.books.lock().unwrap();
        let book = BookDto::new(id, input.name, input.category, input.publish_date, input.price);
        match books.iter_mut().find(|existing| existing.id == id) {
            Some(existing) => {
                *existing = book.clone();
                Ok(book)
            }
            // Echo mocks without a seeded list still succeed
            None => Ok(book),
        }
    }

    async fn delete(&self, id: i64) -> Result<(), BookServiceError> {
        self.record(ServiceCall::Delete(id))?;
        self.books.lock().unwrap().retain(|book| book.id != id);
        Ok(())
    }
}
