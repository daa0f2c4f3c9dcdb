//! Navigation shell view-model
//!
//! Switches which top-level view is current. Nothing more to it.

use crate::observable::Observable;
use crate::viewmodels::books::BooksViewModel;
use bookstore_core::BookService;
use bookstore_core::dtos::BookDto;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveView {
    Home,
    Books,
}

pub struct MainViewModel<S: BookService> {
    pub current_view: Observable<ActiveView>,
    pub books: BooksViewModel<S>,
}

impl<S: BookService> MainViewModel<S> {
    #[allow(
        clippy::missing_inline_in_public_items,
        reason = "Constructed once at composition time"
    )]
    #[must_use]
    pub fn new(service: Rc<S>, confirm_delete: Rc<dyn Fn(&BookDto) -> bool>) -> Self {
        Self {
            current_view: Observable::new(ActiveView::Home),
            books: BooksViewModel::new(service, confirm_delete),
        }
    }

    #[inline]
    pub fn navigate_to(&self, view: ActiveView) {
        log::info!("Navigating to {view:?}");
        self.current_view.set(view);
    }
}
