//! Book collection view-model
//!
//! Holds the list the library view renders, plus the commands that fan out into the edit
//! dialog and the delete flow. The confirmation prompt is injected as a closure so the view
//! decides how to ask; a declined prompt never reaches the service.

use crate::observable::Observable;
use crate::viewmodels::edit::BookEditViewModel;
use bookstore_core::dtos::BookDto;
use bookstore_core::{BookService, BookServiceError};
use std::rc::Rc;
use tracing::instrument;

pub struct BooksViewModel<S: BookService> {
    service: Rc<S>,
    confirm_delete: Rc<dyn Fn(&BookDto) -> bool>,
    /// The books currently shown, in the order the service returns them.
    pub books: Observable<Vec<BookDto>>,
    /// True while a list refresh is outstanding.
    pub is_busy: Observable<bool>,
    /// Failure text of the last load/delete, cleared by the next successful load.
    pub error_message: Observable<Option<String>>,
}

impl<S: BookService> BooksViewModel<S> {
    #[allow(
        clippy::missing_inline_in_public_items,
        reason = "Constructed once at composition time"
    )]
    #[must_use]
    pub fn new(service: Rc<S>, confirm_delete: Rc<dyn Fn(&BookDto) -> bool>) -> Self {
        Self {
            service,
            confirm_delete,
            books: Observable::new(Vec::new()),
            is_busy: Observable::new(false),
            error_message: Observable::new(None),
        }
    }

    /// Refresh the collection from the service. Failures are surfaced through
    /// `error_message` and returned so the composition root can treat a failed
    /// startup load as fatal.
    #[allow(
        clippy::missing_inline_in_public_items,
        reason = "Command handler, called through the UI"
    )]
    #[instrument(name = "vm.load_books", skip(self))]
    pub async fn load_books(&self) -> Result<(), BookServiceError> {
        self.is_busy.set(true);
        let outcome = match self.service.list().await {
            Ok(books) => {
                tracing::info!(count = books.len(), "book list loaded");
                self.error_message.set(None);
                self.books.set(books);
                Ok(())
            }
            Err(error) => {
                log::warn!("Loading books failed: {error}");
                self.error_message.set(Some(error.to_string()));
                Err(error)
            }
        };
        self.is_busy.set(false);
        outcome
    }

    /// Build an edit view-model in create mode, over the same service.
    #[allow(
        clippy::missing_inline_in_public_items,
        reason = "Called once per editing session"
    )]
    #[must_use]
    pub fn create_book(&self) -> BookEditViewModel<S> {
        let edit = BookEditViewModel::new(Rc::clone(&self.service));
        edit.initialize(None);
        edit
    }

    /// Build an edit view-model in update mode, preloaded from `book`.
    #[allow(
        clippy::missing_inline_in_public_items,
        reason = "Called once per editing session"
    )]
    #[must_use]
    pub fn edit_book(&self, book: &BookDto) -> BookEditViewModel<S> {
        let edit = BookEditViewModel::new(Rc::clone(&self.service));
        edit.initialize(Some(book));
        edit
    }

    /// Host hook for the dialog teardown: reload the list only when the session committed.
    #[allow(
        clippy::missing_inline_in_public_items,
        reason = "Called once per editing session"
    )]
    pub async fn close_edit_dialog(
        &self,
        edit: &BookEditViewModel<S>,
    ) -> Result<(), BookServiceError> {
        if edit.dialog_result.get() {
            self.load_books().await
        } else {
            Ok(())
        }
    }

    /// Ask the injected prompt, then delete and reload. A declined prompt is a no-op.
    #[allow(
        clippy::missing_inline_in_public_items,
        reason = "Command handler, called through the UI"
    )]
    #[instrument(name = "vm.delete_book", skip(self, book), fields(id = book.id))]
    pub async fn delete_book(&self, book: &BookDto) -> Result<(), BookServiceError> {
        if !(self.confirm_delete)(book) {
            log::info!("Deletion of book id={} declined", book.id);
            return Ok(());
        }

        match self.service.delete(book.id).await {
            Ok(()) => self.load_books().await,
            Err(error) => {
                log::warn!("Deleting book id={} failed: {error}", book.id);
                self.error_message.set(Some(error.to_string()));
                Err(error)
            }
        }
    }
}
