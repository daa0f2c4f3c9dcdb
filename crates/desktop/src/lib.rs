//! `desktop`
//!
//! This crate contains the client layer of BookStore: the observable-field primitive, the
//! view-models, and the composition root that wires them to the SQLite book service from
//! `bookstore_core`. No UI toolkit is linked; a host view layer binds to the observable
//! fields and drives the commands.
use crate::errors::Error;
use crate::viewmodels::shell::{ActiveView, MainViewModel};
use bookstore_core::database::Db;
use bookstore_core::dtos::BookDto;
use std::rc::Rc;
use tracing_subscriber::{EnvFilter, fmt};

/// Error types
pub mod errors;
/// Observable field primitive the view-model fields are built from
pub mod observable;
/// App configuration
pub mod state;
/// View-model layer
pub mod viewmodels;

#[allow(
    clippy::missing_inline_in_public_items,
    reason = "Executed once per run, never across crate boundaries"
)]
#[allow(
    clippy::print_stderr,
    reason = "Tracing might not be available here if run_safe() failed before its initialization"
)]
pub fn run() {
    if let Err(error) = run_safe() {
        eprintln!("Failed to start BookStore! Error: {error}");
    }
}

/// Encapsulated run function that allows returning errors instead of panicking on `Err` or
/// `None` variants: install the tracing subscriber, open the library database, wire the
/// view-model graph and perform the initial load.
fn run_safe() -> Result<(), Error> {
    let subscriber = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Unable to set global tracing subscriber");

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.block_on(async {
        let path = state::database_path();
        log::info!("Using database at {}", path.display());
        let service = Rc::new(Db::init(&path).await?);

        // Headless composition: without a dialog host, deletions are auto-approved
        let confirm: Rc<dyn Fn(&BookDto) -> bool> = Rc::new(|book| {
            log::info!("Delete requested for {}", book.name);
            true
        });
        let shell = MainViewModel::new(Rc::clone(&service), confirm);
        shell.navigate_to(ActiveView::Books);
        shell.books.load_books().await?;

        service.close().await;
        Ok::<(), Error>(())
    })?;

    Ok(())
}
