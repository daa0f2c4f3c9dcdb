//! Book edit view-model
//!
//! One instance per editing session. The hosting dialog binds the observable fields, invokes
//! `save`/`cancel`, and watches `dialog_result`: only a transition to `true` means "persisted,
//! close and refresh". Everything the save path can go wrong with ends up in `error_message`;
//! nothing is raised to the host.

use crate::observable::Observable;
use bookstore_core::BookService;
use bookstore_core::dtos::{
    BookCategory, BookDto, CreateUpdateBookDto, MAX_PRICE, MIN_PRICE, is_unset_publish_date,
};
use chrono::{Local, NaiveDate};
use std::cell::Cell;
use std::rc::Rc;
use tracing::instrument;

/// The fixed message shown when any field rule fails. Field-level detail stays in the view.
pub const VALIDATION_ERROR_MESSAGE: &str = "Please fix the validation errors and try again.";

pub const NEW_BOOK_TITLE: &str = "New Book";
pub const EDIT_BOOK_TITLE: &str = "Edit Book";

pub struct BookEditViewModel<S: BookService> {
    service: Rc<S>,
    /// Dialog caption, "New Book" or "Edit Book" depending on the mode.
    pub title: Observable<String>,
    pub name: Observable<String>,
    pub category: Observable<BookCategory>,
    pub publish_date: Observable<NaiveDate>,
    pub price: Observable<f64>,
    /// True for the entire duration of an outstanding create/update call, false otherwise.
    pub is_saving: Observable<bool>,
    pub error_message: Observable<Option<String>>,
    /// False until a save completes successfully. The host treats the true transition as
    /// "close and refresh"; every other path leaves or resets it to false.
    pub dialog_result: Observable<bool>,
    edited_id: Cell<Option<i64>>,
}

impl<S: BookService> BookEditViewModel<S> {
    #[allow(
        clippy::missing_inline_in_public_items,
        reason = "Constructed once per editing session"
    )]
    #[must_use]
    pub fn new(service: Rc<S>) -> Self {
        Self {
            service,
            title: Observable::new(String::from(NEW_BOOK_TITLE)),
            name: Observable::new(String::new()),
            category: Observable::new(BookCategory::Undefined),
            publish_date: Observable::new(NaiveDate::default()),
            price: Observable::new(0.0),
            is_saving: Observable::new(false),
            error_message: Observable::new(None),
            dialog_result: Observable::new(false),
            edited_id: Cell::new(None),
        }
    }

    /// Start an editing session: copy the given book into the fields (update mode) or reset
    /// them to their creation defaults (create mode). Always clears `error_message` and resets
    /// `dialog_result`. No external calls.
    #[allow(
        clippy::missing_inline_in_public_items,
        reason = "Called once per editing session"
    )]
    pub fn initialize(&self, book: Option<&BookDto>) {
        match book {
            Some(book) => {
                self.title.set(String::from(EDIT_BOOK_TITLE));
                self.name.set(book.name.clone());
                self.category.set(book.category);
                self.publish_date.set(book.publish_date);
                self.price.set(book.price);
                self.edited_id.set(Some(book.id));
            }
            None => {
                self.title.set(String::from(NEW_BOOK_TITLE));
                self.name.set(String::new());
                self.category.set(BookCategory::Undefined);
                self.publish_date.set(Local::now().date_naive());
                self.price.set(0.0);
                self.edited_id.set(None);
            }
        }
        self.error_message.set(None);
        self.dialog_result.set(false);
    }

    /// The identifier being edited; `None` means the session creates a new book.
    #[must_use]
    #[inline]
    pub fn edited_id(&self) -> Option<i64> {
        self.edited_id.get()
    }

    /// Whether the save command may currently run. The view is expected to disable the save
    /// button through this while a call is in flight.
    #[must_use]
    #[inline]
    pub fn can_save(&self) -> bool {
        !self.is_saving.get()
    }

    /// Validate every field, then create or update through the service. Validation failure and
    /// service failure both end in `error_message`; only a successful call flips
    /// `dialog_result` to true. `is_saving` is false again on every exit path.
    #[allow(
        clippy::missing_inline_in_public_items,
        reason = "Command handler, called through the UI"
    )]
    #[instrument(name = "vm.save_book", skip(self))]
    pub async fn save(&self) {
        // Full re-validation on every attempt, no partial state carried over
        if !self.validate() {
            log::info!("Save rejected by validation");
            self.error_message
                .set(Some(String::from(VALIDATION_ERROR_MESSAGE)));
            return;
        }

        self.is_saving.set(true);
        self.error_message.set(None);

        let input = CreateUpdateBookDto::new(
            self.name.get(),
            self.category.get(),
            self.publish_date.get(),
            self.price.get(),
        );
        let result = match self.edited_id.get() {
            Some(id) => self.service.update(id, input).await,
            None => self.service.create(input).await,
        };

        match result {
            Ok(book) => {
                tracing::info!(id = book.id, "book saved");
                self.dialog_result.set(true);
            }
            Err(error) => {
                // Swallowed at this boundary: the dialog stays open with the message shown
                log::warn!("Saving book failed: {error}");
                self.error_message.set(Some(error.to_string()));
            }
        }
        self.is_saving.set(false);
    }

    /// Signal "discard and close" to the host. Touches nothing but `dialog_result` and never
    /// reaches the service.
    #[inline]
    pub fn cancel(&self) {
        self.dialog_result.set(false);
    }

    fn validate(&self) -> bool {
        let name_ok = !self.name.get().trim().is_empty();
        let price_ok = (MIN_PRICE..=MAX_PRICE).contains(&self.price.get());
        let date_ok = !is_unset_publish_date(self.publish_date.get());

        name_ok && price_ok && date_ok
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewmodels::test_support::{MockBookService, ServiceCall};
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;

    fn fresh_vm() -> (Rc<MockBookService>, BookEditViewModel<MockBookService>) {
        let service = Rc::new(MockBookService::new());
        let vm = BookEditViewModel::new(Rc::clone(&service));
        vm.initialize(None);
        (service, vm)
    }

    fn existing_book() -> BookDto {
        BookDto::new(
            7,
            String::from("Animal Farm"),
            BookCategory::Dystopia,
            NaiveDate::from_ymd_opt(2023, 8, 10).unwrap(),
            15.50,
        )
    }

    #[tokio::test]
    async fn test_valid_save_calls_create_with_exact_fields() {
        let (service, vm) = fresh_vm();
        vm.name.set(String::from("Animal Farm"));
        vm.category.set(BookCategory::Dystopia);
        vm.price.set(15.50);
        vm.publish_date
            .set(NaiveDate::from_ymd_opt(2023, 8, 10).unwrap());

        vm.save().await;

        let expected = CreateUpdateBookDto::new(
            String::from("Animal Farm"),
            BookCategory::Dystopia,
            NaiveDate::from_ymd_opt(2023, 8, 10).unwrap(),
            15.50,
        );
        assert_eq!(service.calls(), vec![ServiceCall::Create(expected)]);
        assert_eq!(vm.dialog_result.get(), true);
        assert_eq!(vm.error_message.get(), None);
    }

    #[tokio::test]
    async fn test_whitespace_name_fails_validation_without_service_call() {
        let (service, vm) = fresh_vm();
        vm.name.set(String::from("   "));
        vm.price.set(10.0);

        vm.save().await;

        assert_eq!(
            vm.error_message.get(),
            Some(String::from(VALIDATION_ERROR_MESSAGE))
        );
        assert_eq!(vm.dialog_result.get(), false);
        assert_eq!(service.calls(), vec![]);
    }

    #[tokio::test]
    async fn test_empty_name_fails_validation_without_service_call() {
        let (service, vm) = fresh_vm();
        vm.price.set(10.0);

        vm.save().await;

        assert_eq!(
            vm.error_message.get(),
            Some(String::from(VALIDATION_ERROR_MESSAGE))
        );
        assert_eq!(service.calls(), vec![]);
    }

    #[tokio::test]
    async fn test_price_bounds_are_inclusive() {
        for price in [MIN_PRICE, MAX_PRICE] {
            let (service, vm) = fresh_vm();
            vm.name.set(String::from("Test"));
            vm.price.set(price);

            vm.save().await;

            assert_eq!(vm.error_message.get(), None, "price {price} must pass");
            assert_eq!(vm.dialog_result.get(), true);
            assert_eq!(service.calls().len(), 1);
        }
    }

    #[tokio::test]
    async fn test_out_of_range_prices_are_rejected() {
        for price in [0.0, -1.0, 10_000.01] {
            let (service, vm) = fresh_vm();
            vm.name.set(String::from("Test"));
            vm.price.set(price);

            vm.save().await;

            assert_eq!(
                vm.error_message.get(),
                Some(String::from(VALIDATION_ERROR_MESSAGE)),
                "price {price} must fail"
            );
            assert_eq!(vm.dialog_result.get(), false);
            assert_eq!(service.calls(), vec![]);
        }
    }

    #[tokio::test]
    async fn test_unset_publish_date_is_rejected() {
        let (service, vm) = fresh_vm();
        vm.name.set(String::from("Test"));
        vm.price.set(10.0);
        vm.publish_date.set(NaiveDate::default());

        vm.save().await;

        assert_eq!(
            vm.error_message.get(),
            Some(String::from(VALIDATION_ERROR_MESSAGE))
        );
        assert_eq!(service.calls(), vec![]);
    }

    #[test]
    fn test_initialize_without_book_is_idempotent() {
        let (_service, vm) = fresh_vm();
        vm.name.set(String::from("leftover"));
        vm.error_message.set(Some(String::from("leftover")));
        vm.dialog_result.set(true);

        vm.initialize(None);
        let first = snapshot(&vm);
        vm.initialize(None);
        let second = snapshot(&vm);

        assert_eq!(first, second);
        assert_eq!(vm.name.get(), "");
        assert_eq!(vm.category.get(), BookCategory::Undefined);
        assert_eq!(vm.publish_date.get(), Local::now().date_naive());
        assert_eq!(vm.price.get(), 0.0);
        assert_eq!(vm.error_message.get(), None);
        assert_eq!(vm.dialog_result.get(), false);
        assert_eq!(vm.edited_id(), None);
        assert_eq!(vm.title.get(), NEW_BOOK_TITLE);
    }

    #[test]
    fn test_initialize_with_book_selects_update_mode() {
        let (_service, vm) = fresh_vm();

        vm.initialize(Some(&existing_book()));

        assert_eq!(vm.edited_id(), Some(7));
        assert_eq!(vm.title.get(), EDIT_BOOK_TITLE);
        assert_eq!(vm.name.get(), "Animal Farm");
        assert_eq!(vm.error_message.get(), None);
        assert_eq!(vm.dialog_result.get(), false);
    }

    #[tokio::test]
    async fn test_update_mode_saves_through_update_with_original_fields_kept() {
        let (service, vm) = fresh_vm();
        vm.initialize(Some(&existing_book()));

        vm.price.set(25.99);
        vm.save().await;

        let expected = CreateUpdateBookDto::new(
            String::from("Animal Farm"),
            BookCategory::Dystopia,
            NaiveDate::from_ymd_opt(2023, 8, 10).unwrap(),
            25.99,
        );
        assert_eq!(service.calls(), vec![ServiceCall::Update(7, expected)]);
        assert_eq!(vm.dialog_result.get(), true);
    }

    #[tokio::test]
    async fn test_service_failure_is_swallowed_into_error_message() {
        let (service, vm) = fresh_vm();
        service.fail_with("Database connection failed");
        vm.name.set(String::from("Test"));
        vm.price.set(12.50);

        vm.save().await;

        let message = vm.error_message.get().unwrap();
        assert!(message.contains("Database connection failed"), "{message}");
        assert_eq!(vm.dialog_result.get(), false);
        assert_eq!(vm.is_saving.get(), false);
    }

    #[tokio::test]
    async fn test_is_saving_spans_the_service_call_only() {
        let (_service, vm) = fresh_vm();
        vm.name.set(String::from("Test"));
        vm.price.set(10.0);

        let transitions = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&transitions);
        let subscription = vm.is_saving.subscribe(move |value| {
            sink.borrow_mut().push(*value);
        });

        vm.save().await;

        assert_eq!(*transitions.borrow(), vec![true, false]);
        vm.is_saving.unsubscribe(subscription);
    }

    #[tokio::test]
    async fn test_cancel_never_touches_the_service() {
        let (service, vm) = fresh_vm();
        vm.name.set(String::from("Test"));
        vm.price.set(10.0);
        vm.dialog_result.set(true);

        vm.cancel();

        assert_eq!(vm.dialog_result.get(), false);
        assert_eq!(service.calls(), vec![]);
        // cancel leaves the editable fields alone
        assert_eq!(vm.name.get(), "Test");
        assert_eq!(vm.price.get(), 10.0);
    }

    #[tokio::test]
    async fn test_failed_save_then_fixed_input_succeeds() {
        let (service, vm) = fresh_vm();
        vm.price.set(10.0);

        vm.save().await;
        assert_eq!(
            vm.error_message.get(),
            Some(String::from(VALIDATION_ERROR_MESSAGE))
        );

        vm.name.set(String::from("Test"));
        vm.save().await;

        assert_eq!(vm.error_message.get(), None);
        assert_eq!(vm.dialog_result.get(), true);
        assert_eq!(service.calls().len(), 1);
    }

    fn snapshot(
        vm: &BookEditViewModel<MockBookService>,
    ) -> (
        String,
        String,
        BookCategory,
        NaiveDate,
        f64,
        bool,
        Option<String>,
        bool,
        Option<i64>,
    ) {
        (
            vm.title.get(),
            vm.name.get(),
            vm.category.get(),
            vm.publish_date.get(),
            vm.price.get(),
            vm.is_saving.get(),
            vm.error_message.get(),
            vm.dialog_result.get(),
            vm.edited_id(),
        )
    }
}
